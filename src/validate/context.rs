use bumpalo::collections::Vec;
use bumpalo::Bump;

use crate::error::{Location, ValidationError};
use crate::schema::Schema;

/// The `ValidationContext` carrying a reference to the schema's arena, the schema that's being
/// validated, and a list of errors.
///
/// New errors are added to the list as validation continues. Validation never stops early, so the
/// list ends up containing every violation found on the schema.
pub struct ValidationContext<'a> {
    pub arena: &'a Bump,
    pub schema: &'a Schema<'a>,
    pub errors: Vec<'a, ValidationError<'a>>,
}

impl<'a> ValidationContext<'a> {
    /// Create a new `ValidationContext` for a given schema.
    pub fn new(schema: &'a Schema<'a>) -> Self {
        ValidationContext {
            arena: schema.arena,
            schema,
            errors: Vec::new_in(schema.arena),
        }
    }

    /// Add an error to the list of errors in the `ValidationContext`.
    ///
    /// Locations are best-effort. Definitions that have no location are left out of the error's
    /// locations, but the error itself is always recorded.
    pub fn add_error<S, L>(&mut self, message: S, locations: L)
    where
        S: AsRef<str>,
        L: IntoIterator<Item = Option<Location>>,
    {
        let message = self.arena.alloc_str(message.as_ref());
        let locations = Vec::from_iter_in(locations.into_iter().flatten(), self.arena);
        self.errors.push(ValidationError {
            message,
            locations: locations.into_bump_slice(),
        });
    }

    /// Convert the context into the arena-allocated list of errors that have been found.
    pub fn into_errors(self) -> &'a [ValidationError<'a>] {
        self.errors.into_bump_slice()
    }
}
