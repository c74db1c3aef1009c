//! # Visiting Schemas
//!
//! The `graphql_schema_core::visit` module contains utilities to traverse a built [Schema] and all
//! of its definitions. The [Visitor] trait is implemented by a visitor and a traversal is started
//! with the [`VisitNode`] trait that the schema and all definitions implement.
//!
//! Visitors are used to gain information about a schema. This crate's own schema validation rules
//! are visitors that collect errors into a shared context while a schema is traversed.
//!
//! In this example we'll define a visitor that counts all fields of object types:
//!
//! ```
//! use graphql_schema_core::{schema::*, visit::*};
//!
//! #[derive(Default)]
//! struct CountObjectFields {
//!    fields: usize,
//! }
//!
//! impl<'a> Visitor<'a> for CountObjectFields {
//!     fn enter_interface(
//!         &mut self,
//!         _ctx: &mut (),
//!         _interface: &'a SchemaInterface<'a>,
//!         _info: &VisitInfo<'a>
//!     ) -> VisitFlow {
//!         // Interfaces also have fields but we're only interested in objects,
//!         // so we never traverse into them
//!         VisitFlow::Skip
//!     }
//!
//!     fn enter_field(
//!         &mut self,
//!         _ctx: &mut (),
//!         _field: &'a SchemaField<'a>,
//!         _info: &VisitInfo<'a>
//!     ) -> VisitFlow {
//!         self.fields += 1;
//!         VisitFlow::Skip
//!     }
//! }
//!
//! let ctx = SchemaContext::new();
//! let builtins = Builtins::new(&ctx);
//! let query = ctx.alloc(SchemaObject::new("Query"));
//! query
//!     .define_fields(&ctx, [SchemaField::new("hello", TypeRef::named(builtins.string))])
//!     .unwrap();
//! let schema = build_schema(
//!     &ctx,
//!     SchemaConfig {
//!         query: Some(query.into()),
//!         ..SchemaConfig::new(builtins)
//!     },
//! )
//! .unwrap();
//!
//! let mut visitor = CountObjectFields::default();
//! schema.visit(&mut (), &mut visitor);
//! // The introspection types' object fields are counted as well
//! assert!(visitor.fields > 1);
//! ```
//!
//! Every callback receives a [`VisitInfo`] carrying the [Path] of the current definition, which
//! prints as a schema coordinate such as `Query.hello` or `@skip(if:)`.
//!
//! [More information on the Visitor trait](Visitor)
//!
//! [Schema]: crate::schema::Schema

mod compose;
mod path;
mod visitor;

pub use compose::ComposedVisitor;
pub use path::*;
pub use visitor::*;
