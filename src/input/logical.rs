//! The closed set of logical gamepad-style inputs, and their tri-state value.

use ::std::{fmt, ops::Index};

use ::strum::{EnumCount, IntoEnumIterator};

/// A device-agnostic, gamepad-style input.
///
/// Declaration order is significant: it is the order in which the
/// [`BindingTable`] scans for a match when a physical key event arrives, so
/// an earlier variant wins over a later one if the same key was bound to
/// both.
///
/// Every variant has a stable SCREAMING_SNAKE_CASE identifier which can be
/// parsed back:
///
/// ```
/// use ::padmap::input::LogicalInput;
///
/// let input: LogicalInput = "LEFT_ANALOG_UP".parse().unwrap();
/// assert_eq!(input, LogicalInput::LeftAnalogUp);
/// assert_eq!(input.as_str(), "LEFT_ANALOG_UP");
/// assert!("NOT_A_REAL_INPUT".parse::<LogicalInput>().is_err());
/// ```
///
/// [`BindingTable`]: crate::input::BindingTable
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    ::strum::EnumIter,
    ::strum::EnumCount,
    ::strum::EnumString,
    ::strum::IntoStaticStr,
    ::strum::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicalInput {
    DpadUp,
    DpadRight,
    DpadDown,
    DpadLeft,
    LeftAnalogHorizontalAxis,
    LeftAnalogVerticalAxis,
    LeftAnalogUp,
    LeftAnalogRight,
    LeftAnalogDown,
    LeftAnalogLeft,
    RightAnalogHorizontalAxis,
    RightAnalogVerticalAxis,
    RightAnalogUp,
    RightAnalogRight,
    RightAnalogDown,
    RightAnalogLeft,
    A,
    B,
    X,
    Y,
    LeftTrigger,
    LeftBumper,
    RightTrigger,
    RightBumper,
    Select,
    Start,
    Special,
}

impl LogicalInput {
    /// Number of logical inputs.
    pub const COUNT: usize = <Self as EnumCount>::COUNT;

    /// The stable identifier for this input, e.g. `"DPAD_UP"`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Position of this input in declaration order.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Iterate all inputs in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// The tri-state value of a logical input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputValue {
    /// No event has been observed for this input yet.
    #[default]
    Unset,
    /// The last observed event was a key press.
    Pressed,
    /// The last observed event was a key release.
    Released,
}

impl InputValue {
    /// Returns `true` only for [`InputValue::Pressed`].
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed)
    }

    /// Returns `true` if any event has been observed.
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Converts to the equivalent `Option<bool>`, where `None` is unset.
    pub const fn as_option(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Pressed => Some(true),
            Self::Released => Some(false),
        }
    }
}

impl From<bool> for InputValue {
    fn from(is_press: bool) -> Self {
        if is_press {
            Self::Pressed
        } else {
            Self::Released
        }
    }
}

impl From<InputValue> for Option<bool> {
    fn from(value: InputValue) -> Self {
        value.as_option()
    }
}

/// A point-in-time copy of every logical input's value.
///
/// The snapshot holds exactly one entry per [`LogicalInput`] and nothing
/// else. It is never shared with the table it was taken from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateSnapshot {
    values: [InputValue; LogicalInput::COUNT],
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            values: [InputValue::Unset; LogicalInput::COUNT],
        }
    }
}

impl StateSnapshot {
    pub(crate) fn from_values(values: [InputValue; LogicalInput::COUNT]) -> Self {
        Self { values }
    }

    /// The value of a single input.
    pub fn get(&self, input: LogicalInput) -> InputValue {
        self.values[input.index()]
    }

    /// Shorthand for `self.get(input).is_pressed()`.
    pub fn is_pressed(&self, input: LogicalInput) -> bool {
        self.get(input).is_pressed()
    }

    /// Iterate `(input, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (LogicalInput, InputValue)> + '_ {
        LogicalInput::iter().zip(self.values.iter().copied())
    }

    /// All inputs whose value is currently [`InputValue::Pressed`].
    pub fn pressed(&self) -> Vec<LogicalInput> {
        self.iter()
            .filter_map(|(input, value)| value.is_pressed().then_some(input))
            .collect()
    }

    /// Always [`LogicalInput::COUNT`].
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A snapshot is never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Left stick position in `[-1.0, 1.0]` derived from the four
    /// directional inputs. Opposite directions held together cancel out.
    /// Positive `y` is up.
    pub fn left_stick(&self) -> (f32, f32) {
        (
            self.digital_axis(LogicalInput::LeftAnalogLeft, LogicalInput::LeftAnalogRight),
            self.digital_axis(LogicalInput::LeftAnalogDown, LogicalInput::LeftAnalogUp),
        )
    }

    /// Right stick position, see [`left_stick`](Self::left_stick).
    pub fn right_stick(&self) -> (f32, f32) {
        (
            self.digital_axis(LogicalInput::RightAnalogLeft, LogicalInput::RightAnalogRight),
            self.digital_axis(LogicalInput::RightAnalogDown, LogicalInput::RightAnalogUp),
        )
    }

    fn digital_axis(&self, negative: LogicalInput, positive: LogicalInput) -> f32 {
        match (self.is_pressed(negative), self.is_pressed(positive)) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

impl Index<LogicalInput> for StateSnapshot {
    type Output = InputValue;

    fn index(&self, input: LogicalInput) -> &Self::Output {
        &self.values[input.index()]
    }
}

impl fmt::Debug for StateSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(input, value)| (input.as_str(), value)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_identifiers_round_trip() {
        for input in LogicalInput::all() {
            assert_eq!(input.as_str().parse::<LogicalInput>(), Ok(input));
            assert_eq!(input.to_string(), input.as_str());
        }
        assert_eq!(LogicalInput::DpadUp.as_str(), "DPAD_UP");
        assert_eq!(
            LogicalInput::RightAnalogHorizontalAxis.as_str(),
            "RIGHT_ANALOG_HORIZONTAL_AXIS"
        );
        assert_eq!(LogicalInput::A.as_str(), "A");
    }

    /// Indices follow declaration order so the snapshot array and the
    /// iteration order agree.
    #[test]
    fn test_index_matches_declaration_order() {
        for (i, input) in LogicalInput::all().enumerate() {
            assert_eq!(input.index(), i);
        }
        assert_eq!(LogicalInput::all().count(), LogicalInput::COUNT);
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        assert!("NOT_A_REAL_INPUT".parse::<LogicalInput>().is_err());
        assert!("dpad_up".parse::<LogicalInput>().is_err());
        assert!("".parse::<LogicalInput>().is_err());
    }

    #[test]
    fn test_input_value_conversions() {
        assert_eq!(InputValue::from(true), InputValue::Pressed);
        assert_eq!(InputValue::from(false), InputValue::Released);
        assert_eq!(InputValue::default(), InputValue::Unset);
        assert_eq!(Option::<bool>::from(InputValue::Unset), None);
        assert_eq!(InputValue::Released.as_option(), Some(false));
        assert!(!InputValue::Released.is_pressed());
        assert!(InputValue::Released.is_set());
    }

    #[test]
    fn test_default_snapshot_is_unset() {
        let snapshot = StateSnapshot::default();
        assert_eq!(snapshot.len(), LogicalInput::COUNT);
        assert!(snapshot.iter().all(|(_, value)| value == InputValue::Unset));
        assert!(snapshot.pressed().is_empty());
    }

    #[test]
    fn test_stick_axes_cancel() {
        let mut values = [InputValue::Unset; LogicalInput::COUNT];
        values[LogicalInput::LeftAnalogLeft.index()] = InputValue::Pressed;
        values[LogicalInput::LeftAnalogUp.index()] = InputValue::Pressed;
        values[LogicalInput::LeftAnalogDown.index()] = InputValue::Released;
        values[LogicalInput::RightAnalogLeft.index()] = InputValue::Pressed;
        values[LogicalInput::RightAnalogRight.index()] = InputValue::Pressed;
        let snapshot = StateSnapshot::from_values(values);

        assert_eq!(snapshot.left_stick(), (-1.0, 1.0));
        assert_eq!(snapshot.right_stick(), (0.0, 0.0));
        assert_eq!(snapshot[LogicalInput::LeftAnalogDown], InputValue::Released);
    }

    /// Debug output lists identifiers only, no internal fields.
    #[test]
    fn test_debug_lists_identifiers() {
        let rendered = format!("{:?}", StateSnapshot::default());
        assert!(rendered.starts_with("{\"DPAD_UP\": Unset"));
        assert!(!rendered.contains("values"));
    }
}
