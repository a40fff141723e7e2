//! Unit tests for color parsing and palette inheritance

use ratatui::style::Color;
use tally::configs::style::Colors;
use tally::tui::views::{ColorStyle, parse_color};

#[test]
fn test_named_colors() {
    assert_eq!(parse_color("red").unwrap(), Some(Color::Red));
    assert_eq!(parse_color("  Blue ").unwrap(), Some(Color::Blue));
    assert_eq!(parse_color("grey").unwrap(), Some(Color::Gray));
    assert_eq!(parse_color("DarkGray").unwrap(), Some(Color::DarkGray));
}

#[test]
fn test_terminal_means_reset() {
    assert_eq!(parse_color("terminal").unwrap(), Some(Color::Reset));
}

#[test]
fn test_empty_means_inherit() {
    assert_eq!(parse_color("").unwrap(), None);
    assert_eq!(parse_color("   ").unwrap(), None);
}

#[test]
fn test_hex_colors() {
    assert_eq!(parse_color("#ff0000").unwrap(), Some(Color::Rgb(255, 0, 0)));
    assert_eq!(parse_color("#1A2b3C").unwrap(), Some(Color::Rgb(26, 43, 60)));
}

#[test]
fn test_invalid_colors() {
    assert!(parse_color("ff0000").is_err());
    assert!(parse_color("#fff").is_err());
    assert!(parse_color("#gggggg").is_err());
    assert!(parse_color("#+fffff").is_err());
    assert!(parse_color("purple-ish").is_err());
}

#[test]
fn test_section_colors_inherit_from_base() {
    let colors = Colors {
        borders: "blue".to_string(),
        text: "white".to_string(),
        background: "black".to_string(),
        text_counter: "yellow".to_string(),
        borders_status: "red".to_string(),
        ..Colors::default()
    };

    let style = ColorStyle::try_from(&colors).unwrap();

    assert_eq!(style.borders_list, Color::Blue);
    assert_eq!(style.borders_status, Color::Red);
    assert_eq!(style.text_list, Color::White);
    assert_eq!(style.text_counter, Color::Yellow);
    assert_eq!(style.text_hint, Color::Yellow);
    assert_eq!(style.button_enabled, Color::Yellow);
    assert_eq!(style.button_disabled, Color::DarkGray);
    assert_eq!(style.background_counter, Color::Black);
}

#[test]
fn test_invalid_palette_entry_fails() {
    let colors = Colors {
        button_enabled: "#12345".to_string(),
        ..Colors::default()
    };

    assert!(ColorStyle::try_from(&colors).is_err());
}
