use super::context::SchemaContext;
use super::definition::SchemaInputField;
use crate::error::Location;

/// A location a directive may be applied at.
///
/// [Reference](https://spec.graphql.org/October2021/#DirectiveLocations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub const ALL: [DirectiveLocation; 19] = [
        DirectiveLocation::Query,
        DirectiveLocation::Mutation,
        DirectiveLocation::Subscription,
        DirectiveLocation::Field,
        DirectiveLocation::FragmentDefinition,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
        DirectiveLocation::VariableDefinition,
        DirectiveLocation::Schema,
        DirectiveLocation::Scalar,
        DirectiveLocation::Object,
        DirectiveLocation::FieldDefinition,
        DirectiveLocation::ArgumentDefinition,
        DirectiveLocation::Interface,
        DirectiveLocation::Union,
        DirectiveLocation::Enum,
        DirectiveLocation::EnumValue,
        DirectiveLocation::InputObject,
        DirectiveLocation::InputFieldDefinition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// Returns whether this location is part of an executable document rather than of the type
    /// system.
    #[inline]
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            DirectiveLocation::Query
                | DirectiveLocation::Mutation
                | DirectiveLocation::Subscription
                | DirectiveLocation::Field
                | DirectiveLocation::FragmentDefinition
                | DirectiveLocation::FragmentSpread
                | DirectiveLocation::InlineFragment
                | DirectiveLocation::VariableDefinition
        )
    }
}

/// A directive definition.
///
/// Directives annotate parts of a document or of the type system and may accept arguments.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, Clone, Copy)]
pub struct SchemaDirective<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub locations: &'a [DirectiveLocation],
    pub arguments: &'a [SchemaInputField<'a>],
    pub is_repeatable: bool,
    pub location: Option<Location>,
}

impl<'a> SchemaDirective<'a> {
    pub fn new<L>(ctx: &'a SchemaContext, name: &'a str, locations: L) -> Self
    where
        L: IntoIterator<Item = DirectiveLocation>,
    {
        SchemaDirective {
            name,
            description: None,
            locations: ctx.alloc_slice(locations),
            arguments: &[],
            is_repeatable: false,
            location: None,
        }
    }

    pub fn with_arguments<I>(mut self, ctx: &'a SchemaContext, arguments: I) -> Self
    where
        I: IntoIterator<Item = SchemaInputField<'a>>,
    {
        self.arguments = ctx.alloc_slice(arguments);
        self
    }

    #[inline]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    #[inline]
    pub fn repeatable(mut self) -> Self {
        self.is_repeatable = true;
        self
    }

    #[inline]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&'a SchemaInputField<'a>> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}
