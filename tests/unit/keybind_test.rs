//! Unit tests for key binding parsing, matching and validation

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tally::configs::KeyBindings;
use tally::tui::key_bindings::{KeyBind, ParsedKeyBindings, keybind::ParseError};

// ============================================================================
// Parsing Tests
// ============================================================================

#[test]
fn test_parse_simple_char() {
    let bind = KeyBind::parse("k").unwrap();
    assert_eq!(bind.code, KeyCode::Char('k'));
    assert_eq!(bind.modifiers, KeyModifiers::empty());
}

#[test]
fn test_parse_symbol_char() {
    let bind = KeyBind::parse("+").unwrap();
    assert_eq!(bind.code, KeyCode::Char('+'));
    assert_eq!(bind.modifiers, KeyModifiers::empty());
}

#[test]
fn test_parse_uppercase_implies_shift() {
    let bind = KeyBind::parse("K").unwrap();
    assert_eq!(bind.code, KeyCode::Char('k'));
    assert_eq!(bind.modifiers, KeyModifiers::SHIFT);
}

#[test]
fn test_parse_named_keys() {
    assert_eq!(KeyBind::parse("<left>").unwrap().code, KeyCode::Left);
    assert_eq!(KeyBind::parse("<RIGHT>").unwrap().code, KeyCode::Right);
    assert_eq!(KeyBind::parse("<bs>").unwrap().code, KeyCode::Backspace);
    assert_eq!(KeyBind::parse("<return>").unwrap().code, KeyCode::Enter);
    assert_eq!(KeyBind::parse("<space>").unwrap().code, KeyCode::Char(' '));
    assert_eq!(KeyBind::parse("<f12>").unwrap().code, KeyCode::F(12));
}

#[test]
fn test_parse_modifiers() {
    let bind = KeyBind::parse("<C-s>").unwrap();
    assert_eq!(bind.code, KeyCode::Char('s'));
    assert_eq!(bind.modifiers, KeyModifiers::CONTROL);

    let bind = KeyBind::parse("<ctrl-alt-up>").unwrap();
    assert_eq!(bind.code, KeyCode::Up);
    assert_eq!(bind.modifiers, KeyModifiers::CONTROL | KeyModifiers::ALT);
}

#[test]
fn test_parse_ctrl_uppercase_adds_shift() {
    let bind = KeyBind::parse("<C-K>").unwrap();
    assert_eq!(bind.code, KeyCode::Char('k'));
    assert_eq!(bind.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
}

#[test]
fn test_parse_ctrl_minus() {
    let bind = KeyBind::parse("<C-->").unwrap();
    assert_eq!(bind.code, KeyCode::Char('-'));
    assert_eq!(bind.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_parse_errors() {
    assert_eq!(KeyBind::parse(""), Err(ParseError::Empty));
    assert_eq!(KeyBind::parse("   "), Err(ParseError::Empty));
    assert_eq!(
        KeyBind::parse("abc"),
        Err(ParseError::InvalidFormat("abc".to_string()))
    );
    assert_eq!(
        KeyBind::parse("<k>"),
        Err(ParseError::UnknownKey("k".to_string()))
    );
    assert_eq!(
        KeyBind::parse("<X-k>"),
        Err(ParseError::UnknownModifier("X".to_string()))
    );
    assert_eq!(
        KeyBind::parse("<f13>"),
        Err(ParseError::UnknownKey("f13".to_string()))
    );
}

#[test]
fn test_from_str_matches_parse() {
    let parsed: KeyBind = "<C-s>".parse().unwrap();
    assert_eq!(parsed, KeyBind::parse("<C-s>").unwrap());
}

// ============================================================================
// Display Tests
// ============================================================================

#[test]
fn test_display_uses_short_labels() {
    assert_eq!(KeyBind::parse("<left>").unwrap().to_string(), "←");
    assert_eq!(KeyBind::parse("<right>").unwrap().to_string(), "→");
    assert_eq!(KeyBind::parse("<C-s>").unwrap().to_string(), "C-s");
    assert_eq!(KeyBind::parse("K").unwrap().to_string(), "S-k");
    assert_eq!(KeyBind::parse("<f5>").unwrap().to_string(), "f5");
    assert_eq!(KeyBind::parse("+").unwrap().to_string(), "+");
}

// ============================================================================
// Matching Tests
// ============================================================================

#[test]
fn test_matches_exact_event() {
    let bind = KeyBind::parse("<C-s>").unwrap();
    assert!(bind.matches(&KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
    assert!(!bind.matches(&KeyEvent::new(KeyCode::Char('s'), KeyModifiers::empty())));
}

#[test]
fn test_matches_shifted_uppercase_event() {
    let bind = KeyBind::parse("K").unwrap();
    assert!(bind.matches(&KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT)));
    assert!(bind.matches(&KeyEvent::new(KeyCode::Char('K'), KeyModifiers::empty())));
    assert!(!bind.matches(&KeyEvent::new(KeyCode::Char('k'), KeyModifiers::empty())));
}

// ============================================================================
// ParsedKeyBindings Tests
// ============================================================================

#[test]
fn test_default_bindings_parse() {
    let parsed = ParsedKeyBindings::from(&KeyBindings::default()).unwrap();
    assert_eq!(parsed.increase.code, KeyCode::Right);
    assert_eq!(parsed.decrease.code, KeyCode::Left);
    assert_eq!(parsed.save.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_duplicate_bindings_rejected() {
    let bindings = KeyBindings {
        increase: "+".to_string(),
        decrease: "+".to_string(),
        ..KeyBindings::default()
    };

    let err = ParsedKeyBindings::from(&bindings).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Duplicate key bindings"));
    assert!(message.contains("increase, decrease"));
}

#[test]
fn test_invalid_binding_names_the_action() {
    let bindings = KeyBindings {
        clear: "<nope>".to_string(),
        ..KeyBindings::default()
    };

    let err = ParsedKeyBindings::from(&bindings).unwrap_err();
    assert!(err.to_string().contains("'clear'"));
}
