use std::{
    error::Error,
    fmt::{self, Formatter},
    str::FromStr,
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const NAMED_KEYS: &[(&[&str], KeyCode, &str)] = &[
    (&["space"], KeyCode::Char(' '), "space"),
    (&["enter", "return"], KeyCode::Enter, "enter"),
    (&["esc", "escape"], KeyCode::Esc, "esc"),
    (&["tab"], KeyCode::Tab, "tab"),
    (&["backspace", "bs"], KeyCode::Backspace, "backspace"),
    (&["delete", "del"], KeyCode::Delete, "del"),
    (&["up"], KeyCode::Up, "↑"),
    (&["down"], KeyCode::Down, "↓"),
    (&["left"], KeyCode::Left, "←"),
    (&["right"], KeyCode::Right, "→"),
    (&["home"], KeyCode::Home, "home"),
    (&["end"], KeyCode::End, "end"),
    (&["pageup", "pgup"], KeyCode::PageUp, "pgup"),
    (&["pagedown", "pgdn"], KeyCode::PageDown, "pgdn"),
];

/// A key binding that can match against key events
///
/// Accepts a single character (`"k"`, `"+"`, `"K"` meaning Shift+k) or a
/// bracketed form for named keys and modifiers: `"<left>"`, `"<C-s>"`,
/// `"<C-S-k>"`, `"<f5>"`. Modifier aliases are `C`/`Ctrl`, `S`/`Shift`,
/// `A`/`Alt`, all case-insensitive.
///
/// ```
/// use tally::tui::key_bindings::KeyBind;
///
/// let save = KeyBind::parse("<C-s>").unwrap();
/// assert_eq!(save.to_string(), "C-s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        input.parse()
    }

    fn single_char(ch: char, mut modifiers: KeyModifiers) -> Self {
        // "K" is treated as "<S-k>"
        if ch.is_ascii_uppercase() {
            modifiers |= KeyModifiers::SHIFT;
            return KeyBind {
                code: KeyCode::Char(ch.to_ascii_lowercase()),
                modifiers,
            };
        }
        KeyBind {
            code: KeyCode::Char(ch),
            modifiers,
        }
    }

    fn parse_bracketed(inner: &str) -> Result<Self, ParseError> {
        let mut parts: Vec<&str> = inner.split('-').collect();
        // "<C-->" binds Ctrl and minus
        if inner.ends_with("--") {
            parts.truncate(parts.len() - 2);
            parts.push("-");
        }

        let Some((key, modifier_names)) = parts.split_last() else {
            return Err(ParseError::Empty);
        };

        let mut modifiers = KeyModifiers::empty();
        for modifier in modifier_names {
            modifiers |= match modifier.to_lowercase().as_str() {
                "c" | "ctrl" => KeyModifiers::CONTROL,
                "s" | "shift" => KeyModifiers::SHIFT,
                "a" | "alt" => KeyModifiers::ALT,
                _ => return Err(ParseError::UnknownModifier(modifier.to_string())),
            };
        }

        let mut chars = key.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            // Plain characters go unbracketed: "k", not "<k>"
            if modifiers.is_empty() {
                return Err(ParseError::UnknownKey(key.to_string()));
            }
            return Ok(Self::single_char(ch, modifiers));
        }

        let code = parse_key_name(key)?;
        Ok(KeyBind { code, modifiers })
    }

    /// Check if this binding matches a KeyEvent
    pub fn matches(&self, event: &KeyEvent) -> bool {
        // Terminals report Shift+k as 'K' with SHIFT
        let code = match event.code {
            KeyCode::Char(ch) if ch.is_ascii_uppercase() => KeyCode::Char(ch.to_ascii_lowercase()),
            code => code,
        };
        let modifiers = match event.code {
            KeyCode::Char(ch) if ch.is_ascii_uppercase() => event.modifiers | KeyModifiers::SHIFT,
            _ => event.modifiers,
        };

        self.code == code && self.modifiers == modifiers
    }
}

impl FromStr for KeyBind {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        if input.len() > 2 && input.starts_with('<') && input.ends_with('>') {
            return Self::parse_bracketed(&input[1..input.len() - 1]);
        }

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(Self::single_char(ch, KeyModifiers::empty())),
            _ => Err(ParseError::InvalidFormat(input.to_string())),
        }
    }
}

impl fmt::Display for KeyBind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (modifier, prefix) in [
            (KeyModifiers::CONTROL, "C-"),
            (KeyModifiers::SHIFT, "S-"),
            (KeyModifiers::ALT, "A-"),
        ] {
            if self.modifiers.contains(modifier) {
                write!(f, "{}", prefix)?;
            }
        }

        if let Some((_, _, label)) = NAMED_KEYS.iter().find(|(_, code, _)| *code == self.code) {
            return write!(f, "{}", label);
        }

        match self.code {
            KeyCode::Char(ch) => write!(f, "{}", ch),
            KeyCode::F(n) => write!(f, "f{}", n),
            other => write!(f, "{:?}", other),
        }
    }
}

fn parse_key_name(name: &str) -> Result<KeyCode, ParseError> {
    let lowered = name.to_lowercase();

    if let Some((_, code, _)) = NAMED_KEYS
        .iter()
        .find(|(aliases, _, _)| aliases.contains(&lowered.as_str()))
    {
        return Ok(*code);
    }

    if let Some(n) = lowered.strip_prefix('f').and_then(|n| n.parse::<u8>().ok())
        && (1..=12).contains(&n)
    {
        return Ok(KeyCode::F(n));
    }

    Err(ParseError::UnknownKey(name.to_string()))
}

/// Errors that can occur when parsing key bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    /// Neither bracketed nor a single character
    InvalidFormat(String),
    UnknownModifier(String),
    UnknownKey(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Empty key binding"),
            ParseError::InvalidFormat(s) => {
                write!(f, "Invalid key binding format: '{}'", s)
            }
            ParseError::UnknownModifier(m) => {
                write!(f, "Unknown modifier: '{}' (use C, S, or A)", m)
            }
            ParseError::UnknownKey(k) => write!(f, "Unknown key: '{}'", k),
        }
    }
}

impl Error for ParseError {}
