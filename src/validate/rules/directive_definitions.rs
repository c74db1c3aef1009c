use super::super::{ValidationContext, ValidationRule};
use super::repeated_names;
use crate::{schema::*, visit::*};

/// Validate that directives are uniquely named and that a directive's arguments are uniquely
/// named, accept input types, and aren't both required and deprecated.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives.Type-Validation)
#[derive(Default)]
pub struct DirectiveDefinitions;

impl<'a> ValidationRule<'a> for DirectiveDefinitions {}

impl<'a> Visitor<'a, ValidationContext<'a>> for DirectiveDefinitions {
    fn enter_schema(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        schema: &'a Schema<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        for directive in repeated_names(schema.get_directives(), |directive| directive.name) {
            ctx.add_error(
                format!("There can be only one directive named \"@{}\".", directive.name),
                [directive.location],
            );
        }
        VisitFlow::Next
    }

    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a SchemaDirective<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        for argument in repeated_names(directive.arguments, |argument| argument.name) {
            ctx.add_error(
                format!(
                    "Argument @{}({}:) can only be defined once.",
                    directive.name, argument.name
                ),
                [directive.location, argument.location],
            );
        }
        VisitFlow::Next
    }

    fn enter_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        argument: &'a SchemaInputField<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        validate_argument(ctx, argument, info);
        VisitFlow::Next
    }

    fn enter_object(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _object: &'a SchemaObject<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Skip
    }

    fn enter_interface(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _interface: &'a SchemaInterface<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Skip
    }

    fn enter_enum(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _enum_type: &'a SchemaEnum<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Skip
    }

    fn enter_input_object(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _input_object: &'a SchemaInputObject<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Skip
    }
}

/// Checks an argument of a directive or field, which is referred to by the current path.
pub(super) fn validate_argument<'a>(
    ctx: &mut ValidationContext<'a>,
    argument: &'a SchemaInputField<'a>,
    info: &VisitInfo<'a>,
) {
    if !argument.input_type.is_input_type() {
        ctx.add_error(
            format!(
                "The type of {} must be Input Type but got: {}.",
                info.path, argument.input_type
            ),
            [argument.location],
        );
    }
    if argument.is_required() && argument.deprecation_reason.is_some() {
        ctx.add_error(
            format!("Required argument {} cannot be deprecated.", info.path),
            [argument.location],
        );
    }
}
