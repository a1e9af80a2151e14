//! Policy deciding which raw key events are dropped before they reach the
//! binding table.

use ::strum::IntoEnumIterator;

use super::{KeyEvent, Modifier};

/// Kinds of focusable, interactive element which consume keyboard input
/// themselves. Parsed ASCII-case-insensitively from element tag names.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    ::strum::EnumIter,
    ::strum::EnumString,
    ::strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InteractiveElement {
    Input,
    TextArea,
    Button,
    Select,
    Option,
    OptGroup,
    Label,
    DataList,
}

/// The kind of element a host reports as currently focused.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Interactive(InteractiveElement),
    /// Anything else, e.g. a canvas or the document body. Holds the tag name
    /// as reported.
    Other(String),
}

impl ElementKind {
    /// Classify an element by its tag name (`"INPUT"`, `"canvas"`, ...).
    pub fn from_tag_name(tag_name: &str) -> Self {
        tag_name
            .parse()
            .map(Self::Interactive)
            .unwrap_or_else(|_| Self::Other(tag_name.to_owned()))
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive(_))
    }
}

impl From<InteractiveElement> for ElementKind {
    fn from(element: InteractiveElement) -> Self {
        Self::Interactive(element)
    }
}

/// Independent toggles for the two filtering rules. Both default to on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    pub ignore_when_focused_on_editable: bool,
    pub ignore_on_modifier_chord: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            ignore_when_focused_on_editable: true,
            ignore_on_modifier_chord: true,
        }
    }
}

/// Why an event was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ::strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum IgnoreReason {
    FocusedOnEditable,
    ModifierChord,
}

impl FilterConfig {
    /// Decide whether `evt` must be dropped.
    ///
    /// `focused` is only consulted when the editable-focus rule is on, so a
    /// host query can be deferred until it is actually needed.
    pub fn check<F>(&self, evt: &KeyEvent, focused: F) -> Option<IgnoreReason>
    where
        F: FnOnce() -> Option<ElementKind>,
    {
        if self.ignore_when_focused_on_editable && is_focused_on_editable(focused()) {
            return Some(IgnoreReason::FocusedOnEditable);
        }

        if self.ignore_on_modifier_chord && is_modifier_chord(evt) {
            return Some(IgnoreReason::ModifierChord);
        }

        None
    }
}

/// True if the focused element is interactive.
pub fn is_focused_on_editable(focused: Option<ElementKind>) -> bool {
    focused.map_or(false, |element| element.is_interactive())
}

/// True if any modifier is held, or the event's key is itself a modifier.
pub fn is_modifier_chord(evt: &KeyEvent) -> bool {
    Modifier::iter().any(|modifier| evt.modifier_state(modifier))
        || evt.code().modifier().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keyboard::ModifierState;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_tag_names() {
        for (tag, expected) in [
            ("input", InteractiveElement::Input),
            ("INPUT", InteractiveElement::Input),
            ("TextArea", InteractiveElement::TextArea),
            ("button", InteractiveElement::Button),
            ("select", InteractiveElement::Select),
            ("option", InteractiveElement::Option),
            ("optgroup", InteractiveElement::OptGroup),
            ("label", InteractiveElement::Label),
            ("DATALIST", InteractiveElement::DataList),
        ] {
            assert_eq!(
                ElementKind::from_tag_name(tag),
                ElementKind::Interactive(expected)
            );
        }

        assert_eq!(
            ElementKind::from_tag_name("canvas"),
            ElementKind::Other("canvas".to_owned())
        );
        assert!(!ElementKind::from_tag_name("body").is_interactive());
    }

    #[test]
    fn test_focus_rule() {
        let config = FilterConfig::default();
        let evt = KeyEvent::press("KeyA");

        assert_eq!(
            config.check(&evt, || Some(InteractiveElement::TextArea.into())),
            Some(IgnoreReason::FocusedOnEditable)
        );
        assert_eq!(
            config.check(&evt, || Some(ElementKind::from_tag_name("canvas"))),
            None
        );
        assert_eq!(config.check(&evt, || None), None);
    }

    /// The host is never asked about focus when the focus rule is off.
    #[test]
    fn test_focus_not_queried_when_disabled() {
        let config = FilterConfig {
            ignore_when_focused_on_editable: false,
            ..Default::default()
        };

        let result = config.check(&KeyEvent::press("KeyA"), || {
            panic!("focus should not be queried")
        });
        assert_eq!(result, None);
    }

    #[test]
    fn test_modifier_rule() {
        let config = FilterConfig::default();

        for modifier in Modifier::iter() {
            let evt = KeyEvent::press("KeyA").with_modifiers(ModifierState::none().with(modifier));
            assert_eq!(
                config.check(&evt, || None),
                Some(IgnoreReason::ModifierChord),
                "{modifier:?}"
            );
        }

        // The modifier key itself, with no reported state
        for code in ["ControlLeft", "AltRight", "MetaLeft", "OS"] {
            assert!(is_modifier_chord(&KeyEvent::press(code)), "{code}");
        }

        // Shift is not a chord modifier
        assert!(!is_modifier_chord(&KeyEvent::press("ShiftLeft")));
    }

    #[test]
    fn test_rules_off() {
        let config = FilterConfig {
            ignore_when_focused_on_editable: false,
            ignore_on_modifier_chord: false,
        };
        let evt = KeyEvent::press("ControlLeft")
            .with_modifiers(ModifierState::none().with(Modifier::Control));

        assert_eq!(
            config.check(&evt, || Some(InteractiveElement::Input.into())),
            None
        );
    }
}
