use std::cell::{OnceCell, RefCell};

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;
use hashbrown::{HashMap, HashSet};

use super::builtins::Builtins;
use super::context::SchemaContext;
use super::definition::*;
use super::directives::SchemaDirective;
use super::schema::{ArenaMap, ArenaSet, Implementations, Schema};
use crate::error::{Error, Location, Result};

/// The configuration a [Schema] is built from.
///
/// Every field but the built-in definitions is optional, so a configuration is usually created
/// with struct update syntax:
///
/// ```
/// use graphql_schema_core::schema::*;
///
/// let ctx = SchemaContext::new();
/// let builtins = Builtins::new(&ctx);
/// let query = ctx.alloc(SchemaObject::new("Query"));
/// query
///     .define_fields(&ctx, [SchemaField::new("hello", TypeRef::named(builtins.string))])
///     .unwrap();
///
/// let schema = build_schema(
///     &ctx,
///     SchemaConfig {
///         query: Some(query.into()),
///         ..SchemaConfig::new(builtins)
///     },
/// )
/// .unwrap();
/// assert!(schema.get_type("Query").is_some());
/// ```
pub struct SchemaConfig<'a> {
    /// The built-in definitions that the schema's introspection types are taken from.
    pub builtins: &'a Builtins<'a>,
    pub description: Option<&'a str>,
    pub query: Option<SchemaType<'a>>,
    pub mutation: Option<SchemaType<'a>>,
    pub subscription: Option<SchemaType<'a>>,
    /// Additional types, which are added to the schema even when no root type references them.
    pub types: Vec<SchemaType<'a>>,
    /// The schema's directives, which default to `@include`, `@skip`, and `@deprecated`.
    pub directives: Option<Vec<&'a SchemaDirective<'a>>>,
    pub location: Option<Location>,
    /// Marks the schema as already valid, which turns schema validation into a no-op.
    pub assume_valid: bool,
    #[cfg(feature = "json")]
    pub extensions: Option<&'a serde_json::Map<String, serde_json::Value>>,
}

impl<'a> SchemaConfig<'a> {
    pub fn new(builtins: &'a Builtins<'a>) -> Self {
        SchemaConfig {
            builtins,
            description: None,
            query: None,
            mutation: None,
            subscription: None,
            types: Vec::new(),
            directives: None,
            location: None,
            assume_valid: false,
            #[cfg(feature = "json")]
            extensions: None,
        }
    }
}

/// Collects all named types that are reachable from a set of types in discovery order.
struct TypeCollector<'a> {
    types: ArenaMap<'a, &'a str, SchemaType<'a>>,
    type_list: BumpVec<'a, SchemaType<'a>>,
    /// Additional types that have been registered upfront but haven't been collected yet.
    pending: ArenaSet<'a, &'a str>,
}

impl<'a> TypeCollector<'a> {
    fn new(arena: &'a Bump) -> Self {
        TypeCollector {
            types: HashMap::new_in(arena),
            type_list: BumpVec::new_in(arena),
            pending: HashSet::new_in(arena),
        }
    }

    /// Registers a named type and returns whether it hasn't been seen before.
    fn register(&mut self, schema_type: SchemaType<'a>) -> Result<bool> {
        let name = schema_type.name();
        if name.is_empty() {
            return Err(Error::new_with_context(
                "One of the provided types for building the Schema is missing a name.",
                schema_type.location(),
                format!("The nameless type is a {} type.", schema_type.kind().as_str()),
                None,
            ));
        }
        match self.types.get(name) {
            Some(known_type) if *known_type == schema_type => Ok(false),
            Some(known_type) => {
                let first_location = known_type
                    .location()
                    .map(|location| format!(" at {location}"))
                    .unwrap_or_default();
                Err(Error::new_with_context(
                    format!(
                        "Schema must contain uniquely named types but contains multiple types named \"{name}\"."
                    ),
                    schema_type.location(),
                    format!(
                        "Previously collected as {}{first_location}.",
                        known_type.kind().as_str()
                    ),
                    None,
                ))
            }
            None => {
                self.types.insert(name, schema_type);
                Ok(true)
            }
        }
    }

    /// Registers additional types without collecting them, so that they're collected in the order
    /// they've been passed in rather than when they're first referenced.
    fn register_pending(&mut self, types: &[SchemaType<'a>]) -> Result<()> {
        for schema_type in types.iter() {
            if self.register(*schema_type)? {
                self.pending.insert(schema_type.name());
            }
        }
        Ok(())
    }

    fn collect_pending(&mut self, schema_type: SchemaType<'a>) -> Result<()> {
        if self.pending.remove(schema_type.name()) {
            self.type_list.push(schema_type);
            self.collect_dependents(schema_type)?;
        }
        Ok(())
    }

    fn collect(&mut self, schema_type: SchemaType<'a>) -> Result<()> {
        if self.register(schema_type)? {
            self.type_list.push(schema_type);
            self.collect_dependents(schema_type)?;
        }
        Ok(())
    }

    fn collect_dependents(&mut self, schema_type: SchemaType<'a>) -> Result<()> {
        match schema_type {
            SchemaType::Union(union_type) => {
                for member in union_type.get_possible_types().iter() {
                    self.collect(*member)?;
                }
            }
            SchemaType::Object(object) => {
                self.collect_interfaces(object.get_interfaces())?;
                self.collect_fields(object.get_fields())?;
            }
            SchemaType::Interface(interface) => {
                self.collect_interfaces(interface.get_interfaces())?;
                self.collect_fields(interface.get_fields())?;
            }
            SchemaType::InputObject(input_object) => {
                for field in input_object.get_fields().iter() {
                    self.collect(field.input_type.named_type())?;
                }
            }
            SchemaType::Enum(_) | SchemaType::Scalar(_) => {}
        }
        Ok(())
    }

    fn collect_interfaces(&mut self, interfaces: &'a [SchemaType<'a>]) -> Result<()> {
        for interface in interfaces.iter() {
            self.collect(*interface)?;
        }
        Ok(())
    }

    fn collect_fields(&mut self, fields: &'a [SchemaField<'a>]) -> Result<()> {
        for field in fields.iter() {
            self.collect(field.output_type.named_type())?;
            for argument in field.arguments.iter() {
                self.collect(argument.input_type.named_type())?;
            }
        }
        Ok(())
    }
}

/// Indexes which objects and interfaces declare they implement each interface.
fn collect_implementations<'a>(
    arena: &'a Bump,
    type_list: &[SchemaType<'a>],
) -> ArenaMap<'a, &'a str, Implementations<'a>> {
    type Entry<'a> = (
        BumpVec<'a, &'a SchemaObject<'a>>,
        BumpVec<'a, &'a SchemaInterface<'a>>,
    );
    let mut entries: ArenaMap<'a, &'a str, Entry<'a>> = HashMap::new_in(arena);
    let empty_entry = || (BumpVec::new_in(arena), BumpVec::new_in(arena));

    for schema_type in type_list.iter() {
        if let SchemaType::Interface(interface) = schema_type {
            entries.entry(interface.name).or_insert_with(empty_entry);
        }
    }

    for schema_type in type_list.iter() {
        match schema_type {
            SchemaType::Object(object) => {
                for interface in object.get_interfaces().iter().filter_map(|i| i.interface()) {
                    entries
                        .entry(interface.name)
                        .or_insert_with(empty_entry)
                        .0
                        .push(*object);
                }
            }
            SchemaType::Interface(implementor) => {
                for interface in implementor.get_interfaces().iter().filter_map(|i| i.interface()) {
                    entries
                        .entry(interface.name)
                        .or_insert_with(empty_entry)
                        .1
                        .push(*implementor);
                }
            }
            _ => {}
        }
    }

    let mut implementations = HashMap::with_capacity_in(entries.len(), arena);
    for (name, (objects, interfaces)) in entries.into_iter() {
        implementations.insert(
            name,
            Implementations {
                objects: objects.into_bump_slice(),
                interfaces: interfaces.into_bump_slice(),
            },
        );
    }
    implementations
}

/// Builds a [Schema] from a configuration.
///
/// All types that are reachable from the configured root types, the additional types, the
/// arguments of the schema's directives, and the introspection meta-schema are collected into the
/// schema's type map. Types are referenced in cycles freely, but every name may only be taken by
/// one type definition. If two distinct definitions share a name, no schema is built and an
/// [Error] naming the type is returned instead.
///
/// The resulting schema hasn't been validated yet. Pass it to
/// [`validate_schema`](crate::validate::validate_schema) before it's used.
#[tracing::instrument(skip_all)]
pub fn build_schema<'a>(ctx: &'a SchemaContext, config: SchemaConfig<'a>) -> Result<&'a Schema<'a>> {
    let arena = &ctx.arena;
    let directives: &'a [&'a SchemaDirective<'a>] = match config.directives {
        Some(directives) => ctx.alloc_slice(directives),
        None => ctx.alloc_slice(config.builtins.directives()),
    };

    let mut collector = TypeCollector::new(arena);
    collector.register_pending(&config.types)?;
    for schema_type in config.types.iter() {
        collector.collect_pending(*schema_type)?;
    }
    for root_type in [config.query, config.mutation, config.subscription]
        .into_iter()
        .flatten()
    {
        collector.collect(root_type)?;
    }
    for directive in directives.iter() {
        for argument in directive.arguments.iter() {
            collector.collect(argument.input_type.named_type())?;
        }
    }
    collector.collect(config.builtins.introspection.schema.into())?;

    let type_list = collector.type_list.into_bump_slice();
    let implementations = collect_implementations(arena, type_list);

    let schema = ctx.alloc(Schema {
        arena,
        description: config.description,
        location: config.location,
        query_type: config.query,
        mutation_type: config.mutation,
        subscription_type: config.subscription,
        directives,
        type_list,
        types: collector.types,
        implementations,
        sub_types: RefCell::new(HashMap::new_in(arena)),
        validation_errors: OnceCell::new(),
        #[cfg(feature = "json")]
        extensions: config.extensions,
    });

    if config.assume_valid {
        let _ = schema.validation_errors.set(&[]);
    }

    tracing::debug!(
        types = schema.type_list.len(),
        directives = schema.directives.len(),
        assume_valid = config.assume_valid,
        "built schema"
    );
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::error::{ErrorType, Location};

    fn type_names<'a>(schema: &Schema<'a>) -> Vec<&'a str> {
        schema
            .get_type_map()
            .iter()
            .map(|schema_type| schema_type.name())
            .collect()
    }

    #[test]
    fn collects_types_in_discovery_order() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);

        let node = ctx.alloc(SchemaInterface::new("Node"));
        node.define_fields(&ctx, [SchemaField::new("id", SchemaType::from(builtins.id).non_null())])
            .unwrap();
        let user = ctx.alloc(SchemaObject::new("User"));
        user.define_interfaces(&ctx, [node.into()]).unwrap();
        user.define_fields(
            &ctx,
            [
                SchemaField::new("id", SchemaType::from(builtins.id).non_null()),
                SchemaField::new("friends", TypeRef::list(&ctx, TypeRef::named(user))),
            ],
        )
        .unwrap();
        let order = ctx.alloc(SchemaEnum::new("Order").with_values(&ctx, [SchemaEnumValue::new("ASC")]));
        let query = ctx.alloc(SchemaObject::new("Query"));
        query
            .define_fields(
                &ctx,
                [SchemaField::new("users", TypeRef::list(&ctx, TypeRef::named(user)))
                    .with_arguments(&ctx, [SchemaInputField::new("order", TypeRef::named(order))])],
            )
            .unwrap();

        let schema = build_schema(
            &ctx,
            SchemaConfig {
                query: Some(query.into()),
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap();

        assert_eq!(
            type_names(schema),
            [
                "Query",
                "User",
                "Node",
                "ID",
                "Order",
                "Boolean",
                "String",
                "__Schema",
                "__Type",
                "__TypeKind",
                "__Field",
                "__InputValue",
                "__EnumValue",
                "__Directive",
                "__DirectiveLocation",
            ]
        );
        assert_eq!(schema.get_type("User"), Some(SchemaType::Object(user)));
        assert!(schema.get_type("Int").is_none());
    }

    #[test]
    fn collects_additional_types() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);

        let date = ctx.alloc(SchemaScalar::new("Date"));
        let event = ctx.alloc(SchemaObject::new("Event"));
        event
            .define_fields(
                &ctx,
                [
                    SchemaField::new("at", TypeRef::named(date)),
                    SchemaField::new("name", TypeRef::named(builtins.string)),
                ],
            )
            .unwrap();
        let unused = ctx.alloc(SchemaInputObject::new("Unused"));
        unused
            .define_fields(&ctx, [SchemaInputField::new("count", TypeRef::named(builtins.int))])
            .unwrap();
        let query = ctx.alloc(SchemaObject::new("Query"));
        query
            .define_fields(&ctx, [SchemaField::new("event", TypeRef::named(event))])
            .unwrap();

        let schema = build_schema(
            &ctx,
            SchemaConfig {
                query: Some(query.into()),
                types: vec![event.into(), unused.into(), date.into(), event.into()],
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap();

        // Additional types come first in the order they're passed in, which means that "Date" is
        // skipped while "Event" is collected and only added once it's its turn
        assert_eq!(
            &type_names(schema)[..6],
            ["Event", "String", "Unused", "Int", "Date", "Query"]
        );
        assert_eq!(schema.get_type_map().len(), 6 + 1 + 8);
    }

    #[test]
    fn rejects_duplicate_names() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);

        let first = ctx.alloc(SchemaScalar::new("Date"));
        let second = ctx.alloc(SchemaScalar::new("Date"));
        let query = ctx.alloc(SchemaObject::new("Query"));
        query
            .define_fields(
                &ctx,
                [
                    SchemaField::new("a", TypeRef::named(first)),
                    SchemaField::new("b", TypeRef::named(second)),
                ],
            )
            .unwrap();

        let error = build_schema(
            &ctx,
            SchemaConfig {
                query: Some(query.into()),
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Construction);
        assert_eq!(
            error.message(),
            "Schema must contain uniquely named types but contains multiple types named \"Date\"."
        );
    }

    #[test]
    fn locates_duplicate_names() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let first = ctx.alloc(SchemaScalar::new("Date").with_location(Location::new(1, 1)));
        let second = ctx.alloc(SchemaEnum::new("Date").with_location(Location::new(5, 1)));

        let error = build_schema(
            &ctx,
            SchemaConfig {
                types: vec![first.into(), second.into()],
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap_err();
        assert_eq!(error.location(), &Some(Location::new(5, 1)));
        assert_eq!(error.context(), Some("Previously collected as SCALAR at 1:1."));
    }

    #[test]
    fn rejects_shadowed_builtins() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let string = ctx.alloc(SchemaScalar::new("String"));
        let query = ctx.alloc(SchemaObject::new("Query"));
        query
            .define_fields(&ctx, [SchemaField::new("a", TypeRef::named(string))])
            .unwrap();

        let error = build_schema(
            &ctx,
            SchemaConfig {
                query: Some(query.into()),
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap_err();
        assert!(error.message().contains("multiple types named \"String\""));
    }

    #[test]
    fn rejects_duplicate_additional_types() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let first = ctx.alloc(SchemaScalar::new("Date"));
        let second = ctx.alloc(SchemaScalar::new("Date"));
        let result = build_schema(
            &ctx,
            SchemaConfig {
                types: vec![first.into(), second.into()],
                ..SchemaConfig::new(builtins)
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_nameless_types() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let nameless = ctx.alloc(SchemaScalar::new(""));
        let error = build_schema(
            &ctx,
            SchemaConfig {
                types: vec![nameless.into()],
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap_err();
        assert_eq!(
            error.message(),
            "One of the provided types for building the Schema is missing a name."
        );
    }

    #[test]
    fn collects_directive_argument_types() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let scope = ctx.alloc(SchemaEnum::new("CacheScope").with_values(
            &ctx,
            [SchemaEnumValue::new("PUBLIC"), SchemaEnumValue::new("PRIVATE")],
        ));
        let cache_control = ctx.alloc(
            SchemaDirective::new(&ctx, "cacheControl", [DirectiveLocation::FieldDefinition])
                .with_arguments(&ctx, [SchemaInputField::new("scope", TypeRef::named(scope))]),
        );

        let schema = build_schema(
            &ctx,
            SchemaConfig {
                directives: Some(vec![cache_control]),
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap();
        assert_eq!(schema.get_directives().len(), 1);
        assert!(schema.get_directive("include").is_none());
        assert_eq!(type_names(schema)[0], "CacheScope");
        // The introspection types still reference Boolean and String
        assert!(schema.get_type("Boolean").is_some());
        assert!(schema.get_type("String").is_some());
    }

    #[test]
    fn assumes_validity() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let schema = build_schema(
            &ctx,
            SchemaConfig {
                assume_valid: true,
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap();
        assert_eq!(schema.validation_errors.get().map(|errors| errors.len()), Some(0));
    }

    #[cfg(feature = "json")]
    #[test]
    fn passes_extensions_through() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let mut extensions = serde_json::Map::new();
        extensions.insert("owner".to_string(), serde_json::json!("billing"));
        let schema = build_schema(
            &ctx,
            SchemaConfig {
                description: Some("Billing API"),
                extensions: Some(&extensions),
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap();
        assert_eq!(schema.description(), Some("Billing API"));
        assert_eq!(
            schema.extensions().and_then(|extensions| extensions.get("owner")),
            Some(&serde_json::json!("billing"))
        );
    }
}
