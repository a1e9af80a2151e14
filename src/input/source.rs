//! The contract shared by every kind of input source.

use crate::{
    errors::{Error, Result},
    input::StateSnapshot,
};

/// An operation an [`InputSource`] may supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ::strum::EnumIter, ::strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    Enable,
    Disable,
    State,
}

/// A producer of logical input state, e.g. a keyboard.
///
/// Implementors override each operation they support and list it in
/// [`capabilities`]. The default operation bodies fail with
/// [`NotImplemented`], and an [`InputService`] refuses to register a source
/// that does not declare every [`Capability`], so an incomplete source is
/// caught when it is wired up rather than on first use.
///
/// [`capabilities`]: Self::capabilities
/// [`NotImplemented`]: crate::errors::ErrorKind::NotImplemented
/// [`InputService`]: crate::service::InputService
pub trait InputSource {
    /// A stable name, used to key aggregated state.
    fn name(&self) -> &str;

    /// Operations this source implements.
    fn capabilities(&self) -> &'static [Capability] {
        &[]
    }

    /// Begin producing live state.
    fn enable(&mut self) -> Result<()> {
        Err(Error::not_implemented(self.name(), Capability::Enable))
    }

    /// Stop producing live state. Calling this while already disabled is
    /// not an error.
    fn disable(&mut self) -> Result<()> {
        Err(Error::not_implemented(self.name(), Capability::Disable))
    }

    /// The current value of every logical input. Must not block, and must
    /// not fail because an input has no binding.
    fn state(&self) -> Result<StateSnapshot> {
        Err(Error::not_implemented(self.name(), Capability::State))
    }
}

/// Returns the first capability missing from `source`, if any.
pub(crate) fn missing_capability(source: &dyn InputSource) -> Option<Capability> {
    use ::strum::IntoEnumIterator;

    let supplied = source.capabilities();
    Capability::iter().find(|capability| !supplied.contains(capability))
}
