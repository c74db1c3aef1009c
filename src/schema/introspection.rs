use super::context::SchemaContext;
use super::definition::*;
use super::directives::DirectiveLocation;
use super::type_ref::TypeRef;

/// The names of all types that make up the introspection meta-schema.
pub const INTROSPECTION_TYPE_NAMES: [&str; 8] = [
    "__Schema",
    "__Directive",
    "__DirectiveLocation",
    "__Type",
    "__Field",
    "__InputValue",
    "__EnumValue",
    "__TypeKind",
];

/// Checks whether a type name belongs to one of the introspection meta-schema types.
#[inline]
pub fn is_introspection_type(name: &str) -> bool {
    INTROSPECTION_TYPE_NAMES.contains(&name)
}

/// The introspection meta-schema types.
///
/// These types describe a schema to its clients. `__Schema` is added to every schema's type map,
/// which pulls in all other meta-schema types through its fields.
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema-Introspection)
#[derive(Debug, Clone, Copy)]
pub struct IntrospectionTypes<'a> {
    pub schema: &'a SchemaObject<'a>,
    pub directive: &'a SchemaObject<'a>,
    pub directive_location: &'a SchemaEnum<'a>,
    pub type_: &'a SchemaObject<'a>,
    pub field: &'a SchemaObject<'a>,
    pub input_value: &'a SchemaObject<'a>,
    pub enum_value: &'a SchemaObject<'a>,
    pub type_kind: &'a SchemaEnum<'a>,
}

impl<'a> IntrospectionTypes<'a> {
    pub(crate) fn new(
        ctx: &'a SchemaContext,
        string: &'a SchemaScalar<'a>,
        boolean: &'a SchemaScalar<'a>,
    ) -> Self {
        let schema = ctx.alloc(SchemaObject::new("__Schema").with_description(
            "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all available types and directives on the server, as well as the entry points for query, mutation, and subscription operations.",
        ));
        let directive = ctx.alloc(SchemaObject::new("__Directive").with_description(
            "A Directive provides a way to describe alternate runtime execution and type validation behavior in a GraphQL document.",
        ));
        let type_ = ctx.alloc(SchemaObject::new("__Type").with_description(
            "The fundamental unit of any GraphQL Schema is the type. There are many kinds of types in GraphQL as represented by the `__TypeKind` enum.",
        ));
        let field = ctx.alloc(SchemaObject::new("__Field").with_description(
            "Object and Interface types are described by a list of Fields, each of which has a name, potentially a list of arguments, and a return type.",
        ));
        let input_value = ctx.alloc(SchemaObject::new("__InputValue").with_description(
            "Arguments provided to Fields or Directives and the input fields of an InputObject are represented as Input Values which describe their type and optionally a default value.",
        ));
        let enum_value = ctx.alloc(SchemaObject::new("__EnumValue").with_description(
            "One possible value for a given Enum. Enum values are unique values, not a placeholder for a string or numeric value. However an Enum value is returned in a JSON response as a string.",
        ));
        let type_kind = ctx.alloc(
            SchemaEnum::new("__TypeKind")
                .with_description("An enum describing what kind of type a given `__Type` is.")
                .with_values(
                    ctx,
                    TypeKind::ALL
                        .iter()
                        .map(|kind| SchemaEnumValue::new(kind.as_str())),
                ),
        );
        let directive_location = ctx.alloc(
            SchemaEnum::new("__DirectiveLocation")
                .with_description("A Directive can be adjacent to many parts of the GraphQL language, a __DirectiveLocation describes one such possible adjacencies.")
                .with_values(
                    ctx,
                    DirectiveLocation::ALL
                        .iter()
                        .map(|location| SchemaEnumValue::new(location.as_str())),
                ),
        );

        let string_ref = TypeRef::named(string);
        let boolean_ref = TypeRef::named(boolean);
        let required_string = SchemaType::from(string).non_null();
        let required_boolean = SchemaType::from(boolean).non_null();
        let type_ref = TypeRef::named(type_);
        let list_of = |of_type: SchemaType<'a>| TypeRef::list(ctx, of_type.non_null());
        let include_deprecated = || {
            [SchemaInputField::new("includeDeprecated", boolean_ref).with_default_value("false")]
        };
        let is_deprecated = || SchemaField::new("isDeprecated", required_boolean);
        let deprecation_reason = || SchemaField::new("deprecationReason", string_ref);
        let name = || SchemaField::new("name", required_string);
        let description = || SchemaField::new("description", string_ref);

        schema.fields.init(ctx.alloc_slice([
            description(),
            SchemaField::new("types", list_of(type_.into()).non_null())
                .with_description("A list of all types supported by this server."),
            SchemaField::new("queryType", type_ref.non_null())
                .with_description("The type that query operations will be rooted at."),
            SchemaField::new("mutationType", type_ref).with_description(
                "If this server supports mutation, the type that mutation operations will be rooted at.",
            ),
            SchemaField::new("subscriptionType", type_ref).with_description(
                "If this server support subscription, the type that subscription operations will be rooted at.",
            ),
            SchemaField::new("directives", list_of(directive.into()).non_null())
                .with_description("A list of all directives supported by this server."),
        ]));

        directive.fields.init(ctx.alloc_slice([
            name(),
            description(),
            SchemaField::new("isRepeatable", required_boolean),
            SchemaField::new("locations", list_of(directive_location.into()).non_null()),
            SchemaField::new("args", list_of(input_value.into()).non_null())
                .with_arguments(ctx, include_deprecated()),
        ]));

        type_.fields.init(ctx.alloc_slice([
            SchemaField::new("kind", SchemaType::from(type_kind).non_null()),
            SchemaField::new("name", string_ref),
            description(),
            SchemaField::new("fields", list_of(field.into()))
                .with_arguments(ctx, include_deprecated()),
            SchemaField::new("interfaces", list_of(type_.into())),
            SchemaField::new("possibleTypes", list_of(type_.into())),
            SchemaField::new("enumValues", list_of(enum_value.into()))
                .with_arguments(ctx, include_deprecated()),
            SchemaField::new("inputFields", list_of(input_value.into()))
                .with_arguments(ctx, include_deprecated()),
            SchemaField::new("ofType", type_ref),
        ]));

        field.fields.init(ctx.alloc_slice([
            name(),
            description(),
            SchemaField::new("args", list_of(input_value.into()).non_null())
                .with_arguments(ctx, include_deprecated()),
            SchemaField::new("type", type_ref.non_null()),
            is_deprecated(),
            deprecation_reason(),
        ]));

        input_value.fields.init(ctx.alloc_slice([
            name(),
            description(),
            SchemaField::new("type", type_ref.non_null()),
            SchemaField::new("defaultValue", string_ref).with_description(
                "A GraphQL-formatted string representing the default value for this input value.",
            ),
            is_deprecated(),
            deprecation_reason(),
        ]));

        enum_value.fields.init(ctx.alloc_slice([
            name(),
            description(),
            is_deprecated(),
            deprecation_reason(),
        ]));

        for object in [schema, directive, type_, field, input_value, enum_value] {
            object.interfaces.init(&[]);
        }

        IntrospectionTypes {
            schema,
            directive,
            directive_location,
            type_,
            field,
            input_value,
            enum_value,
            type_kind,
        }
    }
}
