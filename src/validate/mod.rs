//! # Validating Schemas
//!
//! This module contains logic to validate a built [Schema](crate::schema::Schema) against the
//! rules of the GraphQL type system. Building a schema only checks that its types are uniquely
//! named, so a schema should always be validated before it's used. The rules are grouped into
//! this module's [`DefaultRules`](rules::DefaultRules), and [`ValidationRule`] may be used to
//! create or run individual rules.
//!
//! The rules this module comes with are:
//!
//! - [`rules::RootOperationTypes`]: validates that a query root type exists and that all root types are distinct Object types
//! - [`rules::DirectiveDefinitions`]: validates directives and their arguments
//! - [`rules::ValidNames`]: validates all names against the name grammar and reserved names
//! - [`rules::FieldDefinitions`]: validates the fields and arguments of Object and Interface types
//! - [`rules::ImplementsInterfaces`]: validates that types correctly implement their interfaces
//! - [`rules::UnionMembers`]: validates that unions only include Object types
//! - [`rules::EnumValues`]: validates the values of Enum types
//! - [`rules::InputObjectFields`]: validates the fields of Input Object types
//! - [`rules::NoInputObjectCycles`]: validates that Input Objects don't require themselves
//!
//! The [visit](crate::visit) module is used to actually execute validation rules.
//! The [`ValidationRule`] trait is simply defined to implement the [Visitor](crate::visit::Visitor) trait
//! and to accept the [`ValidationContext`], which is used to keep track of validation errors.
//!
//! As such, the [`DefaultRules`](rules::DefaultRules) rule is a [`ValidationRule`] itself that's
//! composed using the [`ComposedVisitor`](crate::visit::ComposedVisitor) utility.
//!
//! Validation never stops at the first error. Every rule reports all violations it finds, and
//! [`validate_schema`] returns all of them at once and stores them on the schema:
//!
//! ```
//! use graphql_schema_core::{schema::*, validate::*};
//!
//! let ctx = SchemaContext::new();
//! let builtins = Builtins::new(&ctx);
//! let query = ctx.alloc(SchemaObject::new("Query"));
//! let schema = build_schema(
//!     &ctx,
//!     SchemaConfig {
//!         query: Some(query.into()),
//!         ..SchemaConfig::new(builtins)
//!     },
//! )
//! .unwrap();
//!
//! let errors = validate_schema(schema);
//! assert_eq!(errors[0].message, "Type Query must define one or more fields.");
//! assert!(assert_valid_schema(schema).is_err());
//! ```

#[allow(clippy::module_inception)]
mod validate;

mod context;

pub mod rules;
pub use context::ValidationContext;
pub use rules::DefaultRules;
pub use validate::*;
