//! `graphql_schema_core`
//! =========
//!
//! _The GraphQL type system, built and validated in an arena._
//!
//! The **`graphql_schema_core`** library covers the part of a GraphQL server that sits between a
//! schema's definitions and its execution:
//!
//! - Defining named types, fields, arguments, and directives that may reference each other in
//!   cycles
//! - Building a [Schema](schema::Schema) from them, which collects every reachable type, indexes
//!   which types implement which interfaces, and answers sub-type queries
//! - Validating the finished schema against the rules of the GraphQL type system and collecting
//!   every violation in a single pass
//!
//! Neither parsing the GraphQL Schema Definition Language nor executing requests is a goal of this
//! crate. Definitions are created in code, for instance by a parser or code generator sitting on
//! top of this crate, and are all allocated onto the arena of a
//! [`SchemaContext`](schema::SchemaContext).
//!
//! [A good place to start learning more about this crate is the `schema` module...](schema)

pub mod error;
pub mod schema;
pub mod validate;
pub mod visit;

pub use bumpalo;
