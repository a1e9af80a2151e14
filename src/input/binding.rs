//! The table mapping each logical input to the physical keys that drive it.

use ::tracing::{debug, trace};

use crate::{
    errors::{Error, Result},
    input::{keyboard::KeyCode, InputValue, LogicalInput, StateSnapshot},
};

/// The keys bound to a single logical input and its current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Binding {
    codes: Vec<KeyCode>,
    value: InputValue,
}

impl Binding {
    /// Bound codes in the order they were given.
    pub fn codes(&self) -> &[KeyCode] {
        &self.codes
    }

    pub fn value(&self) -> InputValue {
        self.value
    }
}

/// One [`Binding`] per [`LogicalInput`], alive for the lifetime of the table.
///
/// # Matching
///
/// When a key event arrives, [`apply_event`] scans logical inputs in
/// declaration order and, for each, its bound codes. The first input that has
/// the event's code bound takes the new value and the scan stops. A physical
/// key therefore never changes more than one logical input per event; if it
/// was bound to several, only the earliest-declared one responds.
///
/// ```
/// use ::padmap::input::{BindingTable, InputValue, LogicalInput};
///
/// let mut table = BindingTable::new();
/// table.bind(["KeyA", "KeyJ"], LogicalInput::X).unwrap();
///
/// assert_eq!(table.apply_event("KeyJ", true), Some(LogicalInput::X));
/// assert_eq!(table.value(LogicalInput::X), InputValue::Pressed);
/// assert_eq!(table.apply_event("KeyQ", true), None);
/// ```
///
/// [`apply_event`]: Self::apply_event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingTable {
    bindings: Vec<Binding>,
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingTable {
    /// A table with no codes bound and every value unset.
    pub fn new() -> Self {
        Self {
            bindings: LogicalInput::all().map(|_| Binding::default()).collect(),
        }
    }

    /// Replace the codes bound to `input`.
    ///
    /// Accepts a single code (`Some("KeyA")`, `["KeyA"]`) or many. Fails with
    /// [`InvalidBinding`] if no codes are given or any code is empty, leaving
    /// the table untouched. The input's current value is kept.
    ///
    /// [`InvalidBinding`]: crate::errors::ErrorKind::InvalidBinding
    pub fn bind<I, K>(&mut self, codes: I, input: LogicalInput) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyCode>,
    {
        let codes: Vec<KeyCode> = codes.into_iter().map(Into::into).collect();

        if codes.is_empty() {
            return Err(Error::invalid_binding(format!(
                "no key codes given for {input}"
            )));
        }
        if codes.iter().any(|code| code.as_str().is_empty()) {
            return Err(Error::invalid_binding(format!(
                "empty key code given for {input}"
            )));
        }

        debug!(%input, ?codes, "Bind keys");
        self.bindings[input.index()].codes = codes;
        Ok(())
    }

    /// As [`bind`](Self::bind), naming the input by its identifier. Unknown
    /// identifiers fail with [`InvalidBinding`].
    ///
    /// [`InvalidBinding`]: crate::errors::ErrorKind::InvalidBinding
    pub fn bind_named<I, K>(&mut self, codes: I, input: &str) -> Result<()>
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyCode>,
    {
        let input = input
            .parse::<LogicalInput>()
            .map_err(|_| Error::invalid_binding(format!("unknown logical input '{input}'")))?;
        self.bind(codes, input)
    }

    pub fn binding(&self, input: LogicalInput) -> &Binding {
        &self.bindings[input.index()]
    }

    pub fn codes(&self, input: LogicalInput) -> &[KeyCode] {
        self.binding(input).codes()
    }

    pub fn value(&self, input: LogicalInput) -> InputValue {
        self.binding(input).value()
    }

    /// Apply a key event, returning the logical input it changed.
    pub fn apply_event(&mut self, code: impl AsRef<str>, is_press: bool) -> Option<LogicalInput> {
        let code = code.as_ref();
        let (input, binding) = LogicalInput::all()
            .zip(self.bindings.iter_mut())
            .find(|(_, binding)| binding.codes.iter().any(|bound| bound == code))?;

        binding.value = is_press.into();
        trace!(%input, code, is_press, "Key event matched");
        Some(input)
    }

    /// A copy of every input's current value.
    pub fn snapshot(&self) -> StateSnapshot {
        let mut values = [InputValue::Unset; LogicalInput::COUNT];
        for (value, binding) in values.iter_mut().zip(&self.bindings) {
            *value = binding.value;
        }
        StateSnapshot::from_values(values)
    }

    /// Return every value to [`InputValue::Unset`]. Bound codes are kept.
    pub fn reset_values(&mut self) {
        for binding in &mut self.bindings {
            binding.value = InputValue::Unset;
        }
    }
}
