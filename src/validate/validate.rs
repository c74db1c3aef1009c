use super::context::ValidationContext;
use super::rules::DefaultRules;
use crate::error::{Error, ErrorType, Result, ValidationError};
use crate::schema::Schema;
use crate::visit::{ComposedVisitor, VisitNode, Visitor};

/// Trait for a `ValidationRule` that checks a given schema against its rules using a visitor.
///
/// A rule always implements a visitor and accepts the [`ValidationContext`] structure as
/// its passed context.
///
/// Rules implement the `Default` trait, which allows them to be instantiated easily.
/// The intention of using `Default` is for rules to not carry any external
/// state, since everything a rule needs to know is reachable from the schema.
pub trait ValidationRule<'a>: Visitor<'a, ValidationContext<'a>> + Default {
    /// Run this `ValidationRule` against the given schema and return every error it has found.
    ///
    /// Unlike [`validate_schema`] this always runs the rule and doesn't memoize its result.
    #[inline]
    fn validate(schema: &'a Schema<'a>) -> &'a [ValidationError<'a>] {
        let mut validation = ValidationContext::new(schema);
        let mut visitor = Self::default();
        schema.visit(&mut validation, &mut visitor);
        validation.into_errors()
    }
}

impl<'a, A, B> Default for ComposedVisitor<'a, ValidationContext<'a>, A, B>
where
    A: ValidationRule<'a>,
    B: ValidationRule<'a>,
{
    #[inline]
    fn default() -> Self {
        ComposedVisitor::new(A::default(), B::default())
    }
}

impl<'a, A, B> ValidationRule<'a> for ComposedVisitor<'a, ValidationContext<'a>, A, B>
where
    A: ValidationRule<'a>,
    B: ValidationRule<'a>,
{
}

/// Validates a schema against all of the [`DefaultRules`] and returns every error that has been
/// found. An empty list means that the schema is valid.
///
/// Validation runs at most once per schema. The list of errors is stored on the schema and any
/// later call returns the same list without doing any work. A schema that was built with
/// [`assume_valid`](crate::schema::SchemaConfig::assume_valid) is never validated.
#[tracing::instrument(skip_all)]
pub fn validate_schema<'a>(schema: &'a Schema<'a>) -> &'a [ValidationError<'a>] {
    if let Some(errors) = schema.validation_errors.get() {
        tracing::trace!(errors = errors.len(), "Schema has already been validated");
        return errors;
    }
    let errors = DefaultRules::validate(schema);
    tracing::debug!(errors = errors.len(), "Validated schema");
    schema.validation_errors.get_or_init(|| errors)
}

/// Validates a schema and converts any validation errors into a single [Error].
///
/// The error's message joins all validation messages with a blank line.
pub fn assert_valid_schema<'a>(schema: &'a Schema<'a>) -> Result<()> {
    let errors = validate_schema(schema);
    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<&str> = errors.iter().map(|error| error.message).collect();
        Err(Error::new(messages.join("\n\n"), Some(ErrorType::Validation)))
    }
}
