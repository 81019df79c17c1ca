use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use nvrd_core::Msg;

/// Reader message for a key press, if the key is bound.
pub fn msg_for_key(key: KeyEvent) -> Option<Msg> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') => Some(Msg::Quit),
        KeyCode::Char('c') if ctrl => Some(Msg::Quit),
        KeyCode::Char('f') if ctrl => Some(Msg::PageDown),
        KeyCode::Char('b') if ctrl => Some(Msg::PageUp),
        KeyCode::Char('j') | KeyCode::Down => Some(Msg::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Msg::ScrollUp),
        KeyCode::PageDown => Some(Msg::PageDown),
        KeyCode::PageUp => Some(Msg::PageUp),
        KeyCode::Char('g') => Some(Msg::JumpTop),
        KeyCode::Char('G') => Some(Msg::JumpBottom),
        KeyCode::Char('r') if !ctrl => Some(Msg::Reload),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::msg_for_key;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use nvrd_core::Msg;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn vim_and_arrow_keys_scroll() {
        assert_eq!(msg_for_key(press(KeyCode::Char('j'))), Some(Msg::ScrollDown));
        assert_eq!(msg_for_key(press(KeyCode::Down)), Some(Msg::ScrollDown));
        assert_eq!(msg_for_key(press(KeyCode::Char('k'))), Some(Msg::ScrollUp));
        assert_eq!(msg_for_key(press(KeyCode::Up)), Some(Msg::ScrollUp));
    }

    #[test]
    fn paging_and_jumps() {
        assert_eq!(msg_for_key(ctrl('f')), Some(Msg::PageDown));
        assert_eq!(msg_for_key(press(KeyCode::PageDown)), Some(Msg::PageDown));
        assert_eq!(msg_for_key(ctrl('b')), Some(Msg::PageUp));
        assert_eq!(msg_for_key(press(KeyCode::PageUp)), Some(Msg::PageUp));
        assert_eq!(msg_for_key(press(KeyCode::Char('g'))), Some(Msg::JumpTop));
        assert_eq!(msg_for_key(press(KeyCode::Char('G'))), Some(Msg::JumpBottom));
    }

    #[test]
    fn quit_and_reload() {
        assert_eq!(msg_for_key(press(KeyCode::Char('q'))), Some(Msg::Quit));
        assert_eq!(msg_for_key(ctrl('c')), Some(Msg::Quit));
        assert_eq!(msg_for_key(press(KeyCode::Char('r'))), Some(Msg::Reload));
    }

    #[test]
    fn unbound_keys_and_releases_are_ignored() {
        assert_eq!(msg_for_key(press(KeyCode::Char('f'))), None);
        assert_eq!(msg_for_key(press(KeyCode::Char('x'))), None);
        assert_eq!(msg_for_key(press(KeyCode::Enter)), None);
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(msg_for_key(release), None);
    }
}
