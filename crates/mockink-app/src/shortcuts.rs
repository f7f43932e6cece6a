//! Keyboard shortcut registry and key binding resolution.

use mockink_core::input::{Key, KeyEvent};

/// Editor operations reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CancelPlacement,
    DeleteSelected,
    Undo,
    Redo,
    BringToFront,
    SendToBack,
    BringForward,
    SendBackward,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::CancelPlacement => "Cancel placement",
            Action::DeleteSelected => "Delete selected elements",
            Action::Undo => "Undo",
            Action::Redo => "Redo",
            Action::BringToFront => "Bring to front",
            Action::SendToBack => "Send to back",
            Action::BringForward => "Bring forward",
            Action::SendBackward => "Send backward",
        }
    }
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub action: Action,
}

impl Shortcut {
    pub const fn new(key: &'static str, ctrl: bool, shift: bool, action: Action) -> Self {
        Self {
            key,
            ctrl,
            shift,
            action,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Shift+]").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts. Ctrl also matches Cmd.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Escape", false, false, Action::CancelPlacement),
            Shortcut::new("Delete", false, false, Action::DeleteSelected),
            Shortcut::new("Z", true, false, Action::Undo),
            Shortcut::new("Z", true, true, Action::Redo),
            Shortcut::new("Y", true, false, Action::Redo),
            Shortcut::new("]", true, true, Action::BringToFront),
            Shortcut::new("[", true, true, Action::SendToBack),
            Shortcut::new("]", true, false, Action::BringForward),
            Shortcut::new("[", true, false, Action::SendBackward),
        ]
    }

    /// Resolve a key press to an editor action.
    pub fn resolve(event: &KeyEvent) -> Option<Action> {
        let command = event.modifiers.command();
        let shift = event.modifiers.shift;
        match event.key {
            Key::Escape => Some(Action::CancelPlacement),
            Key::Delete if !command => Some(Action::DeleteSelected),
            Key::Character('z') if command && shift => Some(Action::Redo),
            Key::Character('z') if command => Some(Action::Undo),
            Key::Character('y') if command => Some(Action::Redo),
            Key::BracketRight if command && shift => Some(Action::BringToFront),
            Key::BracketRight if command => Some(Action::BringForward),
            Key::BracketLeft if command && shift => Some(Action::SendToBack),
            Key::BracketLeft if command => Some(Action::SendBackward),
            _ => None,
        }
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.action.name());
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockink_core::input::Modifiers;

    fn press(key: Key, modifiers: Modifiers) -> Option<Action> {
        ShortcutRegistry::resolve(&KeyEvent::new(key, modifiers))
    }

    #[test]
    fn test_undo_redo_bindings() {
        assert_eq!(press(Key::Character('z'), Modifiers::ctrl()), Some(Action::Undo));
        assert_eq!(press(Key::Character('y'), Modifiers::ctrl()), Some(Action::Redo));
        assert_eq!(press(Key::Character('z'), Modifiers::ctrl_shift()), Some(Action::Redo));
        let cmd = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert_eq!(press(Key::Character('z'), cmd), Some(Action::Undo));
        assert_eq!(press(Key::Character('z'), Modifiers::NONE), None);
    }

    #[test]
    fn test_bracket_bindings() {
        assert_eq!(press(Key::BracketRight, Modifiers::ctrl()), Some(Action::BringForward));
        assert_eq!(press(Key::BracketRight, Modifiers::ctrl_shift()), Some(Action::BringToFront));
        assert_eq!(press(Key::BracketLeft, Modifiers::ctrl()), Some(Action::SendBackward));
        assert_eq!(press(Key::BracketLeft, Modifiers::ctrl_shift()), Some(Action::SendToBack));
        assert_eq!(press(Key::BracketLeft, Modifiers::NONE), None);
    }

    #[test]
    fn test_escape_and_delete() {
        assert_eq!(press(Key::Escape, Modifiers::NONE), Some(Action::CancelPlacement));
        assert_eq!(press(Key::Delete, Modifiers::NONE), Some(Action::DeleteSelected));
        assert_eq!(press(Key::Backspace, Modifiers::NONE), None);
    }

    #[test]
    fn test_registry_matches_resolution() {
        for shortcut in ShortcutRegistry::all() {
            let key = Key::from_name(shortcut.key).unwrap();
            let modifiers = Modifiers {
                ctrl: shortcut.ctrl,
                shift: shortcut.shift,
                ..Modifiers::NONE
            };
            assert_eq!(press(key, modifiers), Some(shortcut.action), "{}", shortcut.format());
        }
    }

    #[test]
    fn test_shortcut_format() {
        let shortcut = Shortcut::new("]", true, true, Action::BringToFront);
        assert_eq!(shortcut.format(), "Ctrl+Shift+]");
    }
}
