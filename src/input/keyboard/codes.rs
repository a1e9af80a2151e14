//! Physical key identifiers and modifier keys.

use ::bitvec::prelude::*;
use ::std::{borrow::Cow, fmt};
use ::strum::{EnumCount, IntoEnumIterator};

/// A layout-independent physical key identifier, as reported by the host.
///
/// Identifiers follow the W3C `KeyboardEvent.code` naming: they describe the
/// physical position of a key rather than the printed character, so `"KeyA"`
/// is the key to the right of Caps Lock on any layout.
///
/// ```
/// use ::padmap::input::keyboard::KeyCode;
///
/// const JUMP: KeyCode = KeyCode::from_static("Space");
/// assert_eq!(JUMP, KeyCode::from("Space"));
/// assert_eq!(JUMP.as_str(), "Space");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyCode(Cow<'static, str>);

impl KeyCode {
    /// Construct a key code from a static string without allocating.
    pub const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the [`Modifier`] this key belongs to, if any. `"Alt"`,
    /// `"AltLeft"` and `"AltRight"` all map to [`Modifier::Alt`].
    pub fn modifier(&self) -> Option<Modifier> {
        Modifier::iter().find(|modifier| {
            self.as_str()
                .strip_prefix(modifier.key_name())
                .map_or(false, |side| matches!(side, "" | "Left" | "Right"))
        })
    }
}

impl From<&'static str> for KeyCode {
    fn from(code: &'static str) -> Self {
        Self::from_static(code)
    }
}

impl From<String> for KeyCode {
    fn from(code: String) -> Self {
        Self(Cow::Owned(code))
    }
}

impl From<&KeyCode> for KeyCode {
    fn from(code: &KeyCode) -> Self {
        code.clone()
    }
}

impl AsRef<str> for KeyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for KeyCode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for KeyCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

/// Modifier keys which, when held, indicate the user is typing a chord such
/// as a browser or system shortcut rather than playing.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    ::strum::EnumIter,
    ::strum::EnumCount,
    ::strum::IntoStaticStr,
)]
pub enum Modifier {
    Alt,
    Control,
    Meta,
    /// Legacy name some hosts report for the Windows/Super key.
    #[strum(serialize = "OS")]
    Os,
}

impl Modifier {
    /// The name used both for the modifier-state query and as the key code
    /// prefix, e.g. `"Control"` for `"ControlLeft"`.
    pub fn key_name(self) -> &'static str {
        self.into()
    }
}

/// The set of modifiers reported active at the time of a key event.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    bits: BitArr!(for Modifier::COUNT, in u8, Lsb0),
}

impl ModifierState {
    /// No modifiers held.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns a copy with `modifier` marked as held.
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.set(modifier, true);
        self
    }

    pub fn set(&mut self, modifier: Modifier, active: bool) {
        self.bits.set(modifier as usize, active);
    }

    /// Whether `modifier` was held when the event was generated.
    pub fn is_active(&self, modifier: Modifier) -> bool {
        self.bits[modifier as usize]
    }

    /// Whether any modifier was held.
    pub fn any(&self) -> bool {
        self.bits.any()
    }
}

impl FromIterator<Modifier> for ModifierState {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

impl fmt::Debug for ModifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(Modifier::iter().filter(|m| self.is_active(*m)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_modifier_key_detection() {
        for (code, expected) in [
            ("Alt", Some(Modifier::Alt)),
            ("AltLeft", Some(Modifier::Alt)),
            ("ControlRight", Some(Modifier::Control)),
            ("MetaLeft", Some(Modifier::Meta)),
            ("OS", Some(Modifier::Os)),
            ("OSRight", Some(Modifier::Os)),
            ("ShiftLeft", None),
            ("KeyA", None),
            ("AltGraph", None),
            ("OSCAR", None),
        ] {
            assert_eq!(KeyCode::from(code).modifier(), expected, "{code}");
        }
    }

    #[test]
    fn test_key_code_equality() {
        assert_eq!(KeyCode::from("KeyA"), KeyCode::from("KeyA".to_owned()));
        assert!(KeyCode::from("KeyA") == "KeyA");
        assert_ne!(KeyCode::from("KeyA"), KeyCode::from("keya"));
        assert_eq!(format!("{:?}", KeyCode::from("KeyA")), "\"KeyA\"");
    }

    #[test]
    fn test_modifier_state() {
        let state = ModifierState::none();
        assert!(!state.any());

        let state = state.with(Modifier::Meta);
        assert!(state.any());
        assert!(state.is_active(Modifier::Meta));
        assert!(!state.is_active(Modifier::Alt));

        let state: ModifierState = [Modifier::Alt, Modifier::Control].into_iter().collect();
        assert!(state.is_active(Modifier::Alt));
        assert!(state.is_active(Modifier::Control));
        assert!(!state.is_active(Modifier::Os));

        let mut state = state;
        state.set(Modifier::Alt, false);
        state.set(Modifier::Control, false);
        assert_eq!(state, ModifierState::none());
    }
}
