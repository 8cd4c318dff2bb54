use crate::config::KeyConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Application events
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppEvent {
    NextPage,
    PreviousPage,
    Quit,
    Abort,
    None,
}

impl AppEvent {
    /// Map a key press to an event. Unbound keys give `AppEvent::None`.
    pub fn from_key(key: &KeyEvent, keys: &KeyConfig) -> Self {
        if key.kind == KeyEventKind::Release {
            return AppEvent::None;
        }

        match key.code {
            KeyCode::Right => AppEvent::NextPage,
            KeyCode::Left => AppEvent::PreviousPage,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Abort,
            KeyCode::Char(c) if keys.quit_keys.contains(&c) => AppEvent::Quit,
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_turn_pages() {
        let keys = KeyConfig::default();
        assert_eq!(AppEvent::from_key(&press(KeyCode::Right), &keys), AppEvent::NextPage);
        assert_eq!(AppEvent::from_key(&press(KeyCode::Left), &keys), AppEvent::PreviousPage);
    }

    #[test]
    fn test_both_quit_literals_quit() {
        let keys = KeyConfig::default();
        assert_eq!(AppEvent::from_key(&press(KeyCode::Char('q')), &keys), AppEvent::Quit);
        assert_eq!(AppEvent::from_key(&press(KeyCode::Char('й')), &keys), AppEvent::Quit);
    }

    #[test]
    fn test_ctrl_c_aborts() {
        let keys = KeyConfig::default();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(AppEvent::from_key(&key, &keys), AppEvent::Abort);
        assert_eq!(AppEvent::from_key(&press(KeyCode::Char('c')), &keys), AppEvent::None);
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let keys = KeyConfig::default();
        for code in [KeyCode::Up, KeyCode::Down, KeyCode::Enter, KeyCode::Char('Q'), KeyCode::Char('x'), KeyCode::Esc] {
            assert_eq!(AppEvent::from_key(&press(code), &keys), AppEvent::None);
        }
    }

    #[test]
    fn test_key_release_is_ignored() {
        let keys = KeyConfig::default();
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        assert_eq!(AppEvent::from_key(&key, &keys), AppEvent::None);
    }
}
