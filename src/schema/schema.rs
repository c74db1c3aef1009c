use std::cell::{OnceCell, RefCell};
use std::fmt;

use bumpalo::Bump;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::{HashMap, HashSet};

use super::definition::*;
use super::directives::SchemaDirective;
use crate::error::{Location, ValidationError};

pub(crate) type ArenaMap<'a, K, V> = HashMap<K, V, DefaultHashBuilder, &'a Bump>;
pub(crate) type ArenaSet<'a, K> = HashSet<K, DefaultHashBuilder, &'a Bump>;

/// The kind of an operation, which determines the root type it's executed against.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The types that declare they implement a given interface.
///
/// Only direct implementations are recorded. An object implementing an interface that itself
/// implements another interface is only listed for the latter if it declares both, which schema
/// validation enforces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Implementations<'a> {
    pub objects: &'a [&'a SchemaObject<'a>],
    pub interfaces: &'a [&'a SchemaInterface<'a>],
}

/// Schema Definition
///
/// A schema is created from root types for each kind of operation, a list of directives, and all
/// named types that are reachable from them. It's built once with
/// [`build_schema`](super::build_schema) and is immutable afterwards, apart from the caches it
/// fills on demand: the sets of sub-types of abstract types and the result of
/// [`validate_schema`](crate::validate::validate_schema).
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
pub struct Schema<'a> {
    pub(crate) arena: &'a Bump,
    pub(crate) description: Option<&'a str>,
    pub(crate) location: Option<Location>,
    pub(crate) query_type: Option<SchemaType<'a>>,
    pub(crate) mutation_type: Option<SchemaType<'a>>,
    pub(crate) subscription_type: Option<SchemaType<'a>>,
    pub(crate) directives: &'a [&'a SchemaDirective<'a>],
    pub(crate) type_list: &'a [SchemaType<'a>],
    pub(crate) types: ArenaMap<'a, &'a str, SchemaType<'a>>,
    pub(crate) implementations: ArenaMap<'a, &'a str, Implementations<'a>>,
    pub(crate) sub_types: RefCell<ArenaMap<'a, &'a str, ArenaSet<'a, &'a str>>>,
    pub(crate) validation_errors: OnceCell<&'a [ValidationError<'a>]>,
    #[cfg(feature = "json")]
    pub(crate) extensions: Option<&'a serde_json::Map<String, serde_json::Value>>,
}

impl<'a> Schema<'a> {
    #[inline]
    pub fn description(&self) -> Option<&'a str> {
        self.description
    }

    #[inline]
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Returns the opaque extensions the schema was configured with.
    #[cfg(feature = "json")]
    #[inline]
    pub fn extensions(&self) -> Option<&'a serde_json::Map<String, serde_json::Value>> {
        self.extensions
    }

    /// Returns the root object type for query operations
    #[inline]
    pub fn query_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.query_type.and_then(|root| root.object())
    }

    /// Returns the root object type for mutation operations
    #[inline]
    pub fn mutation_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.mutation_type.and_then(|root| root.object())
    }

    /// Returns the root object type for subscription operations
    #[inline]
    pub fn subscription_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.subscription_type.and_then(|root| root.object())
    }

    /// Returns the appropriate object type depending on the passed operation kind
    #[inline]
    pub fn get_root_type(&self, operation_kind: OperationKind) -> Option<&'a SchemaObject<'a>> {
        self.get_root_schema_type(operation_kind)
            .and_then(|root| root.object())
    }

    /// Returns the root type as it was configured, which is only guaranteed to be an object type
    /// once the schema has been validated.
    #[inline]
    pub fn get_root_schema_type(&self, operation_kind: OperationKind) -> Option<SchemaType<'a>> {
        match operation_kind {
            OperationKind::Query => self.query_type,
            OperationKind::Mutation => self.mutation_type,
            OperationKind::Subscription => self.subscription_type,
        }
    }

    /// Retrieves a kind by name from known schema types.
    #[inline]
    pub fn get_type(&self, name: &str) -> Option<SchemaType<'a>> {
        self.types.get(name).copied()
    }

    /// Returns all named types of the schema in the order they were discovered in.
    #[inline]
    pub fn get_type_map(&self) -> &'a [SchemaType<'a>] {
        self.type_list
    }

    #[inline]
    pub fn get_directives(&self) -> &'a [&'a SchemaDirective<'a>] {
        self.directives
    }

    #[inline]
    pub fn get_directive(&self, name: &str) -> Option<&'a SchemaDirective<'a>> {
        self.directives
            .iter()
            .find(|directive| directive.name == name)
            .copied()
    }

    /// Returns the objects and interfaces that directly implement an interface.
    #[inline]
    pub fn get_implementations(&self, interface: &SchemaInterface<'a>) -> Implementations<'a> {
        self.implementations
            .get(interface.name)
            .copied()
            .unwrap_or_default()
    }

    /// Returns the object types that an abstract type may resolve to.
    ///
    /// For a union these are its member types and for an interface the objects that declare
    /// they implement it.
    pub fn get_possible_types(&self, abstract_type: SchemaType<'a>) -> Vec<&'a SchemaObject<'a>> {
        match abstract_type {
            SchemaType::Union(union_type) => union_type
                .get_possible_types()
                .iter()
                .filter_map(|member| member.object())
                .collect(),
            SchemaType::Interface(interface) => {
                self.get_implementations(interface).objects.to_vec()
            }
            _ => Vec::new(),
        }
    }

    /// Checks whether an object type is a possible type of an abstract type.
    #[inline]
    pub fn is_possible_type(
        &self,
        abstract_type: SchemaType<'a>,
        possible_type: &'a SchemaObject<'a>,
    ) -> bool {
        self.is_sub_type(abstract_type, SchemaType::Object(possible_type))
    }

    /// Checks whether a given type is a sub type of an abstract type.
    ///
    /// The sub types of a union are its members and the sub types of an interface are all objects
    /// and interfaces that directly implement it. Other kinds of types have no sub types. The set
    /// of sub types is computed once per abstract type and then cached on the schema.
    pub fn is_sub_type(&self, abstract_type: SchemaType<'a>, maybe_sub_type: SchemaType<'a>) -> bool {
        if !abstract_type.is_abstract_type() {
            return false;
        }

        let mut sub_types = self.sub_types.borrow_mut();
        if let Some(names) = sub_types.get(abstract_type.name()) {
            tracing::trace!(abstract_type = abstract_type.name(), "sub-type cache hit");
            return names.contains(maybe_sub_type.name());
        }

        let mut names = HashSet::new_in(self.arena);
        match abstract_type {
            SchemaType::Union(union_type) => {
                names.extend(union_type.get_possible_types().iter().map(|member| member.name()));
            }
            SchemaType::Interface(interface) => {
                let implementations = self.get_implementations(interface);
                names.extend(implementations.objects.iter().map(|object| object.name));
                names.extend(implementations.interfaces.iter().map(|interface| interface.name));
            }
            _ => {}
        }
        let is_sub_type = names.contains(maybe_sub_type.name());
        sub_types.insert(abstract_type.name(), names);
        is_sub_type
    }
}

impl<'a> fmt::Debug for Schema<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("description", &self.description)
            .field("query_type", &self.query_type)
            .field("mutation_type", &self.mutation_type)
            .field("subscription_type", &self.subscription_type)
            .field("directives", &self.directives.iter().map(|d| d.name).collect::<Vec<_>>())
            .field("types", &self.type_list)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;

    fn names<'a>(objects: Vec<&'a SchemaObject<'a>>) -> Vec<&'a str> {
        objects.iter().map(|object| object.name).collect()
    }

    #[test]
    fn root_types() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let query = ctx.alloc(SchemaObject::new("Query"));
        query
            .define_fields(&ctx, [SchemaField::new("hello", TypeRef::named(builtins.string))])
            .unwrap();
        let schema = build_schema(
            &ctx,
            SchemaConfig {
                query: Some(query.into()),
                mutation: Some(builtins.string.into()),
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap();

        assert_eq!(schema.query_type().unwrap().name, "Query");
        assert_eq!(schema.get_root_type(OperationKind::Query).unwrap().name, "Query");
        // The configured root isn't an object and is only reported by validation
        assert!(schema.mutation_type().is_none());
        assert_eq!(
            schema.get_root_schema_type(OperationKind::Mutation),
            Some(SchemaType::Scalar(builtins.string))
        );
        assert!(schema.get_root_type(OperationKind::Subscription).is_none());
    }

    #[test]
    fn possible_types() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let id_field = || SchemaField::new("id", SchemaType::from(builtins.id).non_null());

        let node = ctx.alloc(SchemaInterface::new("Node"));
        node.define_fields(&ctx, [id_field()]).unwrap();
        let entity = ctx.alloc(SchemaInterface::new("Entity"));
        entity.define_interfaces(&ctx, [node.into()]).unwrap();
        entity.define_fields(&ctx, [id_field()]).unwrap();
        let user = ctx.alloc(SchemaObject::new("User"));
        user.define_interfaces(&ctx, [entity.into()]).unwrap();
        user.define_fields(&ctx, [id_field()]).unwrap();
        let post = ctx.alloc(SchemaObject::new("Post"));
        post.define_interfaces(&ctx, [node.into(), entity.into()]).unwrap();
        post.define_fields(&ctx, [id_field()]).unwrap();
        let result = ctx.alloc(SchemaUnion::new("Result"));
        result.define_types(&ctx, [user.into(), post.into()]).unwrap();

        let query = ctx.alloc(SchemaObject::new("Query"));
        query
            .define_fields(
                &ctx,
                [
                    SchemaField::new("node", TypeRef::named(node)),
                    SchemaField::new("result", TypeRef::named(result)),
                ],
            )
            .unwrap();
        let schema = build_schema(
            &ctx,
            SchemaConfig {
                query: Some(query.into()),
                types: vec![user.into(), post.into()],
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap();

        assert_eq!(names(schema.get_possible_types(result.into())), ["User", "Post"]);
        assert_eq!(names(schema.get_possible_types(entity.into())), ["User", "Post"]);
        // User only implements Node transitively, which isn't flattened
        assert_eq!(names(schema.get_possible_types(node.into())), ["Post"]);
        assert!(schema.get_possible_types(query.into()).is_empty());

        let implementations = schema.get_implementations(node);
        assert_eq!(implementations.interfaces.len(), 1);
        assert_eq!(implementations.interfaces[0].name, "Entity");

        assert!(schema.is_sub_type(node.into(), entity.into()));
        assert!(schema.is_sub_type(node.into(), post.into()));
        assert!(!schema.is_sub_type(node.into(), user.into()));
        assert!(schema.is_possible_type(result.into(), user));
        assert!(!schema.is_sub_type(result.into(), query.into()));
        assert!(!schema.is_sub_type(user.into(), user.into()));
        // Cached lookups return the same answers
        assert!(schema.is_sub_type(node.into(), post.into()));
        assert!(!schema.is_sub_type(node.into(), user.into()));
        assert_eq!(schema.sub_types.borrow().len(), 2);
    }

    #[test]
    fn directive_lookup() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let schema = build_schema(&ctx, SchemaConfig::new(builtins)).unwrap();
        assert_eq!(schema.get_directives().len(), 3);
        assert!(schema.get_directive("skip").is_some());
        assert!(schema.get_directive("specifiedBy").is_none());
    }
}
