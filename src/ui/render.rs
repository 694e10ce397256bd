use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::prefs::{AccentColor, ThemeMode, ToggleId};
use crate::ui::app::App;
use crate::ui::form::{FieldRow, FormState};
use crate::ui::layout::centered_card;
use crate::ui::theme::{
    accent_rgb, CARD_BORDER, DIRTY_MARK, FOCUS_MARKER, MUTED_TEXT, SAVED_OK, SWITCH_OFF,
    TITLE_TEXT,
};

const CARD_WIDTH: u16 = 64;
const CARD_HEIGHT: u16 = 19;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let card = centered_card(CARD_WIDTH, CARD_HEIGHT, area);
    let inner_width = card.width.saturating_sub(2) as usize;
    let state = app.form();

    let mut lines: Vec<Line> = Vec::with_capacity(CARD_HEIGHT as usize);
    lines.push(Line::from(Span::styled(
        " Appearance",
        Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD),
    )));
    lines.push(muted(" Set or customize your preferences for the system"));
    lines.push(Line::default());

    lines.push(language_line(state, inner_width));
    lines.push(muted("   Select the language of the platform"));
    lines.push(separator(inner_width));

    lines.push(row_label(state, FieldRow::Theme, "Interface theme"));
    lines.push(theme_line(state));
    lines.push(separator(inner_width));

    lines.push(row_label(state, FieldRow::Accent, "Accent color"));
    lines.push(accent_line(state));
    lines.push(separator(inner_width));

    for id in ToggleId::all() {
        lines.push(toggle_line(state, *id, inner_width));
    }
    lines.push(Line::default());
    lines.push(footer_line(state, inner_width));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER));

    frame.render_widget(Clear, card);
    frame.render_widget(Paragraph::new(lines).block(block), card);
}

fn muted(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(MUTED_TEXT),
    ))
}

fn separator(inner_width: usize) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(inner_width),
        Style::default().fg(CARD_BORDER),
    ))
}

/// Focus marker plus section label. The marker is the only cue that keys
/// target this row.
fn row_label(state: &FormState, row: FieldRow, label: &str) -> Line<'static> {
    let focused = state.focused == row;
    let marker = if focused { "❯ " } else { "  " };
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(FOCUS_MARKER)),
        Span::styled(
            label.to_string(),
            if focused {
                Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TITLE_TEXT)
            },
        ),
    ])
}

fn language_line(state: &FormState, inner_width: usize) -> Line<'static> {
    let focused = state.focused == FieldRow::Language;
    let marker = if focused { "❯ " } else { "  " };
    let label = "Language";
    let value = format!("◂ {} ▸ ", state.prefs.language.label());
    let pad = inner_width
        .saturating_sub(2 + label.chars().count())
        .saturating_sub(value.chars().count());
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(FOCUS_MARKER)),
        Span::styled(
            label.to_string(),
            if focused {
                Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TITLE_TEXT)
            },
        ),
        Span::raw(" ".repeat(pad)),
        Span::styled(
            value,
            if focused {
                Style::default().fg(FOCUS_MARKER)
            } else {
                Style::default().fg(TITLE_TEXT)
            },
        ),
    ])
}

fn theme_line(state: &FormState) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")];
    for mode in ThemeMode::all() {
        let selected = state.prefs.theme == *mode;
        let text = if selected {
            format!("[✓ {}] ", mode.label())
        } else {
            format!("[ {} ] ", mode.label())
        };
        let style = if selected {
            Style::default()
                .fg(accent_rgb(state.prefs.accent))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

fn accent_line(state: &FormState) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")];
    for entry in AccentColor::all() {
        let selected = state.prefs.accent == *entry;
        let swatch = if selected { "(⬤) " } else { " ⬤  " };
        spans.push(Span::styled(
            swatch.to_string(),
            Style::default().fg(accent_rgb(*entry)),
        ));
    }
    if state.focused == FieldRow::Accent {
        spans.push(Span::styled(
            state.prefs.accent.hex().to_string(),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    Line::from(spans)
}

/// One boolean row: label, muted description, right-aligned switch. All
/// three toggles render through this single path.
fn toggle_line(state: &FormState, id: ToggleId, inner_width: usize) -> Line<'static> {
    let focused = state.focused == FieldRow::Toggle(id);
    let marker = if focused { "❯ " } else { "  " };
    let value = state.prefs.toggle(id);
    let switch = if value { "[  ⬤]" } else { "[⬤  ]" };
    let label = id.label();
    let description = format!("  {}", id.description());
    let pad = inner_width
        .saturating_sub(2 + label.chars().count() + description.chars().count())
        .saturating_sub(switch.chars().count() + 1);
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(FOCUS_MARKER)),
        Span::styled(
            label.to_string(),
            if focused {
                Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TITLE_TEXT)
            },
        ),
        Span::styled(description, Style::default().fg(MUTED_TEXT)),
        Span::raw(" ".repeat(pad)),
        Span::styled(
            switch.to_string(),
            if value {
                Style::default().fg(accent_rgb(state.prefs.accent))
            } else {
                Style::default().fg(SWITCH_OFF)
            },
        ),
        Span::raw(" "),
    ])
}

fn footer_line(state: &FormState, inner_width: usize) -> Line<'static> {
    let hints = " ↑↓ move · ←→ change · Space toggle · Enter save · r reset · q quit";
    let status = if state.saved {
        ("saved ", Style::default().fg(SAVED_OK))
    } else if state.dirty {
        ("unsaved ", Style::default().fg(DIRTY_MARK))
    } else {
        ("", Style::default())
    };
    let pad = inner_width
        .saturating_sub(hints.chars().count())
        .saturating_sub(status.0.chars().count());
    let hint_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);
    Line::from(vec![
        Span::styled(hints, hint_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(status.0, status.1),
    ])
}
