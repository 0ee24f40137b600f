use std::fmt;

/// A key event delivered to the focused widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    F(u8),
}

impl Key {
    /// Numeric key code in the curses numbering: characters map to their
    /// code point, special keys to the `KEY_*` values.
    pub fn code(&self) -> i32 {
        match *self {
            Key::Char(c) => c as i32,
            Key::Enter => 10,
            Key::Tab => 9,
            Key::Esc => 27,
            Key::Down => 0o402,
            Key::Up => 0o403,
            Key::Left => 0o404,
            Key::Right => 0o405,
            Key::Home => 0o406,
            Key::Backspace => 0o407,
            Key::F(n) => 0o410 + i32::from(n),
            Key::Delete => 0o512,
            Key::Insert => 0o513,
            Key::PageDown => 0o522,
            Key::PageUp => 0o523,
            Key::BackTab => 0o541,
            Key::End => 0o550,
        }
    }

    pub fn is_char(&self, c: char) -> bool {
        *self == Key::Char(c)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) if c.is_ascii_control() => write!(f, "^{}", ((*c as u8) ^ 0x40) as char),
            Key::Char(c) if c.is_control() => write!(f, "{}", c.escape_unicode()),
            Key::Char(c) => write!(f, "{c}"),
            Key::F(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_codes_are_code_points() {
        assert_eq!(Key::Char('q').code(), 113);
        assert_eq!(Key::Char('A').code(), 65);
    }

    #[test]
    fn special_codes_follow_curses() {
        assert_eq!(Key::Down.code(), 258);
        assert_eq!(Key::Up.code(), 259);
        assert_eq!(Key::Backspace.code(), 263);
        assert_eq!(Key::F(1).code(), 265);
        assert_eq!(Key::End.code(), 360);
    }

    #[test]
    fn is_char_matches_only_that_char() {
        assert!(Key::Char('q').is_char('q'));
        assert!(!Key::Char('Q').is_char('q'));
        assert!(!Key::Esc.is_char('q'));
    }

    #[test]
    fn display() {
        assert_eq!(Key::Char('x').to_string(), "x");
        assert_eq!(Key::Char('\u{3}').to_string(), "^C");
        assert_eq!(Key::Char('\u{7f}').to_string(), "^?");
        assert_eq!(Key::Char('\u{85}').to_string(), "\\u{85}");
        assert_eq!(Key::F(5).to_string(), "F5");
        assert_eq!(Key::PageUp.to_string(), "PageUp");
    }
}
