//! The keymap applied to a new service's keyboard.

use ::lazy_static::lazy_static;

use crate::{
    errors::{Context, Result},
    input::{
        keyboard::{KeyCode, KeyboardInputSource},
        LogicalInput,
    },
};

/// Default keyboard bindings, as W3C `KeyboardEvent.code` identifiers.
/// Inputs not listed (the analog axes) start unbound.
const DEFAULT_CODES: &[(LogicalInput, &[&str])] = {
    use LogicalInput::*;

    &[
        (DpadUp, &["ArrowUp", "Numpad8"]),
        (DpadRight, &["ArrowRight", "Numpad6"]),
        (DpadDown, &["ArrowDown", "Numpad5", "Numpad2"]),
        (DpadLeft, &["ArrowLeft", "Numpad4"]),
        (LeftAnalogUp, &["KeyW"]),
        (LeftAnalogRight, &["KeyD"]),
        (LeftAnalogDown, &["KeyS"]),
        (LeftAnalogLeft, &["KeyA"]),
        (RightAnalogUp, &["KeyI"]),
        (RightAnalogRight, &["KeyL"]),
        (RightAnalogDown, &["KeyK"]),
        (RightAnalogLeft, &["KeyJ"]),
        (A, &["KeyX", "Semicolon", "Numpad7"]),
        (B, &["KeyZ", "Escape", "Quote", "Backspace", "Numpad9"]),
        (X, &["KeyC"]),
        (Y, &["KeyV"]),
        (LeftTrigger, &["KeyQ"]),
        (LeftBumper, &["KeyE"]),
        (RightTrigger, &["KeyU"]),
        (RightBumper, &["KeyO"]),
        (Start, &["Enter", "Numpad3"]),
        (Select, &["ShiftRight", "ShiftLeft", "Tab", "Numpad1"]),
        (Special, &["Space", "Backslash", "Backquote"]),
    ]
};

lazy_static! {
    /// The default keymap, built once and cloned into each keyboard that
    /// uses it.
    pub static ref DEFAULT_KEYMAP: Vec<(LogicalInput, Vec<KeyCode>)> = DEFAULT_CODES
        .iter()
        .map(|(input, codes)| {
            (*input, codes.iter().copied().map(KeyCode::from_static).collect())
        })
        .collect();
}

/// Bind every entry of [`DEFAULT_KEYMAP`] on `keyboard`.
pub fn apply_default_keymap(keyboard: &mut KeyboardInputSource) -> Result<()> {
    for (input, codes) in DEFAULT_KEYMAP.iter() {
        keyboard
            .bind(codes, *input)
            .context(format!("Failed to apply default keymap for {input}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;
    use ::std::collections::HashSet;

    /// No physical key is bound twice, so first-match never hides a default.
    #[test]
    fn test_default_keymap_has_no_duplicate_codes() {
        let mut seen = HashSet::new();
        for (input, codes) in DEFAULT_KEYMAP.iter() {
            for code in codes {
                assert!(seen.insert(code), "{code} bound twice, again on {input}");
            }
        }
    }

    #[test]
    fn test_default_keymap_inputs_unique() {
        let inputs: HashSet<_> = DEFAULT_KEYMAP.iter().map(|(input, _)| *input).collect();
        assert_eq!(inputs.len(), DEFAULT_KEYMAP.len());
        assert!(!inputs.contains(&LogicalInput::LeftAnalogHorizontalAxis));
        assert!(!inputs.contains(&LogicalInput::RightAnalogVerticalAxis));
    }

    #[test]
    fn test_apply_default_keymap() {
        let mut kbd = KeyboardInputSource::new();
        apply_default_keymap(&mut kbd).unwrap();

        let bindings = kbd.bindings();
        assert_eq!(
            bindings.codes(LogicalInput::DpadDown),
            &[
                KeyCode::from("ArrowDown"),
                KeyCode::from("Numpad5"),
                KeyCode::from("Numpad2")
            ]
        );
        assert_eq!(bindings.codes(LogicalInput::LeftAnalogLeft), &[KeyCode::from("KeyA")]);
        assert!(bindings.codes(LogicalInput::LeftAnalogVerticalAxis).is_empty());
    }
}
