//! # Error and Result for this crate
//!
//! This crate defines two tiers of errors. The common [Error] structure is returned when a schema
//! cannot be constructed at all, or when [`assert_valid_schema`](crate::validate::assert_valid_schema)
//! converts a list of validation failures into a single failure. The [`ValidationError`]
//! structure is plain data: it's allocated on the schema's arena and collected into a list by
//! [`validate_schema`](crate::validate::validate_schema) without ever aborting validation.

use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. For construction errors the
/// message names the offending definition, while for aggregated validation errors the message
/// joins every validation message that has been found on a schema.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) location: Option<Location>,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// The schema's configuration is malformed and no schema could be created.
    Construction,
    /// The schema was created but violates one or more type system rules.
    Validation,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: Option<ErrorType>) -> Self {
        Self {
            message: message.into(),
            location: None,
            context: None,
            error_type: error_type.unwrap_or(ErrorType::Construction),
        }
    }

    /// Create a new Error with a main message, the location of the offending definition, and a
    /// context string that explains what the definition conflicts with.
    pub fn new_with_context<S: Into<String>, C: Into<String>>(
        message: S,
        location: Option<Location>,
        context: C,
        error_type: Option<ErrorType>,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            context: Some(context.into()),
            error_type: error_type.unwrap_or(ErrorType::Construction),
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the location of the current error.
    pub fn location(&self) -> &Option<Location> {
        &self.location
    }

    /// Returns the context of the current error, if any was attached.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Returns the tier of the current error.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let mut formatted = match self.error_type {
            ErrorType::Construction => {
                format!("Schema Error: {}", self.message)
            }
            ErrorType::Validation => {
                format!("Schema Validation Error: {}", self.message)
            }
        };
        if let Some(location) = self.location {
            formatted = format!("{} at {}", formatted, location);
        }

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

/// A source location annotation attached to a definition.
///
/// Locations are opaque to this crate. They're supplied by whoever created the definitions, for
/// instance a schema parser, and are only ever copied into errors to point at offending
/// definitions.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[inline]
    pub fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

/// A single schema validation failure.
///
/// Validation errors are data rather than failures. They carry a human readable message and any
/// number of locations of the definitions that are involved in the failure. Both are allocated on
/// the arena of the schema that has been validated.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ValidationError<'a> {
    pub message: &'a str,
    pub locations: &'a [Location],
}

impl<'a> fmt::Display for ValidationError<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for (index, location) in self.locations.iter().enumerate() {
            let separator = if index == 0 { " at " } else { ", " };
            write!(f, "{}{}", separator, location)?;
        }
        Ok(())
    }
}
