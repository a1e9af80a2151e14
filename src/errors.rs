//! Crate-specific error and result types, plus context helpers.

use ::std::fmt::{self, Display};

use crate::input::Capability;

/// Result type returned by fallible binding, lifecycle and host operations.
pub type Result<T> = ::std::result::Result<T, Error>;

/// The category of an [`Error`].
#[derive(::thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The host event stream needed by an input source is unavailable, e.g.
    /// no host was attached or the host has shut down.
    #[error("input host event stream is unavailable")]
    UnsupportedEnvironment,

    /// A binding was rejected before any table mutation.
    #[error("invalid key binding: {reason}")]
    InvalidBinding { reason: String },

    /// An input source was asked for a capability it does not supply.
    #[error("input source '{source_name}' does not implement {capability}()")]
    NotImplemented {
        source_name: String,
        capability: Capability,
    },
}

/// Error type for the crate. Carries the [`ErrorKind`] along with an
/// optional description of what was happening at the time of the error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,

    /// An optional context message attached on the way up the call stack.
    context: Option<String>,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { kind, context } = &self;

        if let Some(context) = context {
            write!(f, "{context}\nCaused by:\n    {kind}")
        } else {
            write!(f, "{kind}")
        }
    }
}

impl ::std::error::Error for Error {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }
}

impl Error {
    /// Returns the category of the error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the context message, if one was attached.
    pub fn context_message(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub(crate) fn unsupported_environment() -> Self {
        ErrorKind::UnsupportedEnvironment.into()
    }

    pub(crate) fn invalid_binding(reason: impl Into<String>) -> Self {
        ErrorKind::InvalidBinding {
            reason: reason.into(),
        }
        .into()
    }

    pub(crate) fn not_implemented(source_name: impl Into<String>, capability: Capability) -> Self {
        ErrorKind::NotImplemented {
            source_name: source_name.into(),
            capability,
        }
        .into()
    }
}

/// A crate-private trait which allows context information to be attached to
/// fallible types.
pub(crate) trait Context<T> {
    /// Attach a context message to a fallible type and return crate error.
    fn context(self, ctx: impl AsRef<str>) -> Result<T>
    where
        Self: Sized;
}

impl<T> Context<T> for Result<T> {
    fn context(mut self, ctx: impl AsRef<str>) -> Result<T>
    where
        Self: Sized,
    {
        if let Err(err) = &mut self {
            err.context = Some(ctx.as_ref().to_owned());
        }
        self
    }
}
