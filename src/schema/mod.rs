//! # Defining and Building Schemas
//!
//! The `graphql_schema_core::schema` module contains the GraphQL type system: the definitions of
//! named types, fields, arguments, and directives, and the [Schema] that's built from them.
//!
//! All definitions are allocated onto the arena of a [SchemaContext]. Since types often reference
//! each other in cycles, the fields, interfaces, and member types of a type are defined only once
//! the type has been allocated:
//!
//! ```
//! use graphql_schema_core::schema::*;
//!
//! let ctx = SchemaContext::new();
//! let builtins = Builtins::new(&ctx);
//!
//! let node = ctx.alloc(SchemaInterface::new("Node"));
//! let user = ctx.alloc(SchemaObject::new("User"));
//! node.define_fields(&ctx, [SchemaField::new("id", TypeRef::named(builtins.id).non_null())])
//!     .unwrap();
//! user.define_interfaces(&ctx, [node.into()]).unwrap();
//! user.define_fields(
//!     &ctx,
//!     [
//!         SchemaField::new("id", TypeRef::named(builtins.id).non_null()),
//!         SchemaField::new("friends", TypeRef::list(&ctx, TypeRef::named(user).non_null())),
//!     ],
//! )
//! .unwrap();
//!
//! let query = ctx.alloc(SchemaObject::new("Query"));
//! query
//!     .define_fields(&ctx, [SchemaField::new("me", TypeRef::named(user))])
//!     .unwrap();
//!
//! let schema = build_schema(
//!     &ctx,
//!     SchemaConfig {
//!         query: Some(query.into()),
//!         ..SchemaConfig::new(builtins)
//!     },
//! )
//! .unwrap();
//!
//! assert!(schema.is_sub_type(node.into(), user.into()));
//! ```
//!
//! [More information on the Schema struct.](Schema)

mod build_schema;
mod builtins;
mod context;
mod definition;
mod directives;
pub mod introspection;
pub mod name;
#[allow(clippy::module_inception)]
mod schema;
mod type_comparators;
mod type_ref;

pub use build_schema::*;
pub use builtins::*;
pub use context::*;
pub use definition::*;
pub use directives::*;
pub use introspection::{is_introspection_type, IntrospectionTypes};
pub use name::{assert_enum_value_name, assert_name};
pub use schema::{Implementations, OperationKind, Schema};
pub use type_comparators::*;
pub use type_ref::*;
