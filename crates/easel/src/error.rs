use std::fmt;

/// Failure kinds surfaced by the public API.
///
/// Two kinds exist and they mean different things:
/// - [`Error::InvalidArgument`] is a contract violation by the caller. It is
///   reported synchronously and never recovered from internally.
/// - [`Error::Defect`] signals that an internal invariant broke. This is a
///   bug in easel itself, not misuse.
///
/// A closed surface is not an error; the pump loop absorbs it as normal
/// shutdown (see [`crate::window::run`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidArgument {
        /// Name of the offending parameter.
        param: &'static str,
        details: String,
    },
    Defect(String),
}

impl Error {
    pub(crate) fn invalid(param: &'static str, details: impl Into<String>) -> Self {
        Error::InvalidArgument { param, details: details.into() }
    }

    /// Internal invariant breach. Logged at error level on construction so
    /// defects show up even when the caller discards the `Result`.
    pub(crate) fn defect(details: impl Into<String>) -> Self {
        let details = details.into();
        log::error!("internal defect: {details}");
        Error::Defect(details)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { param, details } => {
                write!(f, "invalid argument `{param}`: {details}")
            }
            Error::Defect(details) => {
                write!(f, "internal defect: {details} (this is a bug in easel)")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Guards shared by the public entry points.
pub(crate) fn ensure_positive(value: i32, param: &'static str) -> Result<(), Error> {
    if value <= 0 {
        return Err(Error::invalid(param, format!("must be positive, got {value}")));
    }
    Ok(())
}

pub(crate) fn ensure_scale_factor(factor: f64, param: &'static str) -> Result<(), Error> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(Error::invalid(param, format!("must be a finite positive number, got {factor}")));
    }
    Ok(())
}
