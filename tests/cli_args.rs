use clap::Parser;
use preftui::cli::Cli;
use preftui::prefs::{AccentColor, Language, Preferences, ThemeMode};

#[test]
fn no_flags_yields_the_default_record() {
    let cli = Cli::try_parse_from(["preftui"]).expect("parse");
    assert_eq!(cli.initial_preferences(), Preferences::default());
    assert_eq!(cli.tick_ms, 250);
}

#[test]
fn flags_seed_the_initial_record() {
    let cli = Cli::try_parse_from([
        "preftui",
        "--language",
        "Français",
        "--theme",
        "dark",
        "--accent",
        "#22c55e",
    ])
    .expect("parse");

    let prefs = cli.initial_preferences();
    assert_eq!(prefs.language, Language::Frances);
    assert_eq!(prefs.theme, ThemeMode::Dark);
    assert_eq!(prefs.accent, AccentColor::Green);
    // Unseeded fields keep their defaults.
    assert!(prefs.reduce_motion);
    assert!(prefs.auto_play);
    assert!(!prefs.hq_photo);
}

#[test]
fn accent_accepts_palette_names() {
    let cli = Cli::try_parse_from(["preftui", "--accent", "cyan"]).expect("parse");
    assert_eq!(cli.initial_preferences().accent, AccentColor::Cyan);
}

#[test]
fn out_of_set_values_are_rejected_at_the_boundary() {
    assert!(Cli::try_parse_from(["preftui", "--theme", "sepia"]).is_err());
    assert!(Cli::try_parse_from(["preftui", "--language", "Klingon"]).is_err());
    assert!(Cli::try_parse_from(["preftui", "--accent", "#000000"]).is_err());
}

#[test]
fn tick_interval_is_overridable() {
    let cli = Cli::try_parse_from(["preftui", "--tick-ms", "100"]).expect("parse");
    assert_eq!(cli.tick_ms, 100);
}
