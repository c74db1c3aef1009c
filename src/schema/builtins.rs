use super::context::SchemaContext;
use super::definition::{SchemaInputField, SchemaScalar, SchemaType};
use super::directives::{DirectiveLocation, SchemaDirective};
use super::introspection::IntrospectionTypes;
use super::type_ref::TypeRef;

/// The deprecation reason that `@deprecated` defaults to.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// The names of the five scalars every GraphQL implementation provides.
pub const SPECIFIED_SCALAR_NAMES: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// The names of the directives a schema contains when it isn't configured with its own list.
pub const SPECIFIED_DIRECTIVE_NAMES: [&str; 3] = ["include", "skip", "deprecated"];

#[inline]
pub fn is_specified_scalar_type(name: &str) -> bool {
    SPECIFIED_SCALAR_NAMES.contains(&name)
}

#[inline]
pub fn is_specified_directive(name: &str) -> bool {
    SPECIFIED_DIRECTIVE_NAMES.contains(&name)
}

/// The built-in definitions of the GraphQL type system.
///
/// A schema's type map may only ever contain one type per name, so every type that references
/// `String`, `Boolean`, or the other specified scalars must reference the same definitions that
/// the schema's introspection types and default directives use. These are allocated once onto a
/// [SchemaContext] and shared by all definitions that are built on it.
#[derive(Debug, Clone, Copy)]
pub struct Builtins<'a> {
    pub string: &'a SchemaScalar<'a>,
    pub int: &'a SchemaScalar<'a>,
    pub float: &'a SchemaScalar<'a>,
    pub boolean: &'a SchemaScalar<'a>,
    pub id: &'a SchemaScalar<'a>,
    pub introspection: IntrospectionTypes<'a>,
    pub include: &'a SchemaDirective<'a>,
    pub skip: &'a SchemaDirective<'a>,
    pub deprecated: &'a SchemaDirective<'a>,
}

impl<'a> Builtins<'a> {
    pub fn new(ctx: &'a SchemaContext) -> &'a Builtins<'a> {
        let string = ctx.alloc(SchemaScalar::new("String").with_description(
            "The `String` scalar type represents textual data, represented as UTF-8 character sequences. The String type is most often used by GraphQL to represent free-form human-readable text.",
        ));
        let int = ctx.alloc(SchemaScalar::new("Int").with_description(
            "The `Int` scalar type represents non-fractional signed whole numeric values. Int can represent values between -(2^31) and 2^31 - 1.",
        ));
        let float = ctx.alloc(SchemaScalar::new("Float").with_description(
            "The `Float` scalar type represents signed double-precision fractional values as specified by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_floating_point).",
        ));
        let boolean = ctx.alloc(
            SchemaScalar::new("Boolean")
                .with_description("The `Boolean` scalar type represents `true` or `false`."),
        );
        let id = ctx.alloc(SchemaScalar::new("ID").with_description(
            "The `ID` scalar type represents a unique identifier, often used to refetch an object or as key for a cache. The ID type appears in a JSON response as a String; however, it is not intended to be human-readable. When expected as an input type, any string (such as `\"4\"`) or integer (such as `4`) input value will be accepted as an ID.",
        ));

        let introspection = IntrospectionTypes::new(ctx, string, boolean);

        let condition_locations = [
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ];
        let include = ctx.alloc(
            SchemaDirective::new(ctx, "include", condition_locations)
                .with_description("Directs the executor to include this field or fragment only when the `if` argument is true.")
                .with_arguments(
                    ctx,
                    [SchemaInputField::new("if", SchemaType::from(boolean).non_null())
                        .with_description("Included when true.")],
                ),
        );
        let skip = ctx.alloc(
            SchemaDirective::new(ctx, "skip", condition_locations)
                .with_description("Directs the executor to skip this field or fragment when the `if` argument is true.")
                .with_arguments(
                    ctx,
                    [SchemaInputField::new("if", SchemaType::from(boolean).non_null())
                        .with_description("Skipped when true.")],
                ),
        );
        let deprecated = ctx.alloc(
            SchemaDirective::new(
                ctx,
                "deprecated",
                [
                    DirectiveLocation::FieldDefinition,
                    DirectiveLocation::ArgumentDefinition,
                    DirectiveLocation::InputFieldDefinition,
                    DirectiveLocation::EnumValue,
                ],
            )
            .with_description("Marks an element of a GraphQL schema as no longer supported.")
            .with_arguments(
                ctx,
                [SchemaInputField::new("reason", TypeRef::named(string))
                    .with_default_value("\"No longer supported\"")
                    .with_description("Explains why this element was deprecated, usually also including a suggestion for how to access supported similar data. Formatted using the Markdown syntax, as specified by [CommonMark](https://commonmark.org/).")],
            ),
        );

        ctx.alloc(Builtins {
            string,
            int,
            float,
            boolean,
            id,
            introspection,
            include,
            skip,
            deprecated,
        })
    }

    /// Returns the specified scalars in the order they're listed by GraphQL.
    #[inline]
    pub fn scalars(&self) -> [&'a SchemaScalar<'a>; 5] {
        [self.string, self.int, self.float, self.boolean, self.id]
    }

    /// Returns the directives that a schema contains by default.
    #[inline]
    pub fn directives(&self) -> [&'a SchemaDirective<'a>; 3] {
        [self.include, self.skip, self.deprecated]
    }

    /// Looks up a specified scalar by its name.
    pub fn get_scalar(&self, name: &str) -> Option<&'a SchemaScalar<'a>> {
        self.scalars()
            .into_iter()
            .find(|scalar| scalar.name == name)
    }
}
