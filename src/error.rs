//! # Errors
//!
//! Rational numbers can only be created from arguments that describe a valid fraction. When they
//! don't, an `InvalidArgument` is returned and no value is created.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Why an argument was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Kind {
    /// The denominator was zero, either given directly or as the result of dividing by zero.
    ZeroDenominator,
    /// Text did not have the form `n` or `n/d`.
    MalformedText,
}

/// A rational number could not be created from the given arguments.
#[derive(Debug)]
pub struct InvalidArgument {
    kind: Kind,
    description: String,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl InvalidArgument {
    /// Create a new error.
    ///
    /// # Arguments
    ///
    /// * `kind`: Which kind of argument was invalid.
    /// * `description`: Human readable description of the error.
    pub fn new(kind: Kind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            source: None,
        }
    }

    /// Wrap a lower level error, the text that caused it could not be parsed.
    ///
    /// # Arguments
    ///
    /// * `error`: The error that was raised while parsing a part of the text.
    /// * `description`: Human readable description of what was being attempted.
    pub fn wrap_other(
        error: impl Error + Send + Sync + 'static,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: Kind::MalformedText,
            description: description.into(),
            source: Some(Box::new(error)),
        }
    }

    pub(crate) fn zero_denominator(numerator: impl Display) -> Self {
        Self::new(
            Kind::ZeroDenominator,
            format!("Denominator must be nonzero, numerator was {}", numerator),
        )
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl Error for InvalidArgument {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|error| error as &(dyn Error + 'static))
    }
}
