//! Raw keyboard events as delivered by an [`EventHost`].
//!
//! [`EventHost`]: crate::host::EventHost

use super::{KeyCode, Modifier, ModifierState};

/// Whether a key went down or came up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ::strum::EnumIter, ::strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum KeyEventKind {
    Press,
    Release,
}

/// A single physical key press or release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    code: KeyCode,
    kind: KeyEventKind,
    modifiers: ModifierState,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(code: impl Into<KeyCode>, kind: KeyEventKind) -> Self {
        Self {
            code: code.into(),
            kind,
            modifiers: ModifierState::none(),
            default_prevented: false,
        }
    }

    /// Shorthand for a [`KeyEventKind::Press`] event.
    pub fn press(code: impl Into<KeyCode>) -> Self {
        Self::new(code, KeyEventKind::Press)
    }

    /// Shorthand for a [`KeyEventKind::Release`] event.
    pub fn release(code: impl Into<KeyCode>) -> Self {
        Self::new(code, KeyEventKind::Release)
    }

    /// Attach the modifier state reported by the host.
    pub fn with_modifiers(self, modifiers: ModifierState) -> Self {
        Self { modifiers, ..self }
    }

    pub fn code(&self) -> &KeyCode {
        &self.code
    }

    pub fn kind(&self) -> KeyEventKind {
        self.kind
    }

    pub fn is_press(&self) -> bool {
        self.kind == KeyEventKind::Press
    }

    /// Whether `modifier` was held when this event was generated.
    pub fn modifier_state(&self, modifier: Modifier) -> bool {
        self.modifiers.is_active(modifier)
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    /// Ask the host to skip its default handling of this key, e.g. scrolling
    /// the page on arrow keys.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_press_and_release() {
        let press = KeyEvent::press("KeyJ");
        assert!(press.is_press());
        assert_eq!(press.kind(), KeyEventKind::Press);
        assert_eq!(press.code(), &KeyCode::from("KeyJ"));
        assert!(!press.default_prevented());

        let release = KeyEvent::release("KeyJ");
        assert!(!release.is_press());
        assert_eq!(release.kind().to_string(), "release");
    }

    #[test]
    fn test_modifier_query() {
        let mut evt = KeyEvent::press("KeyS")
            .with_modifiers(ModifierState::none().with(Modifier::Control));
        assert!(evt.modifier_state(Modifier::Control));
        assert!(!evt.modifier_state(Modifier::Alt));

        evt.prevent_default();
        assert!(evt.default_prevented());
    }
}
