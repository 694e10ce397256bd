use ratatui::layout::Rect;

/// Center a fixed-size card in the given area, clamping to fit.
pub fn centered_card(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
