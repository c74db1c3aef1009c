use super::super::{ValidationContext, ValidationRule};
use super::directive_definitions::validate_argument;
use super::repeated_names;
use crate::error::Location;
use crate::{schema::*, visit::*};

/// Validate that Object and Interface types define at least one field, that their fields are
/// uniquely named and return output types, and that the fields' arguments are valid.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects.Type-Validation)
#[derive(Default)]
pub struct FieldDefinitions;

impl<'a> ValidationRule<'a> for FieldDefinitions {}

fn validate_fields<'a>(
    ctx: &mut ValidationContext<'a>,
    type_name: &str,
    location: Option<Location>,
    fields: &'a [SchemaField<'a>],
) {
    if fields.is_empty() {
        ctx.add_error(
            format!("Type {type_name} must define one or more fields."),
            [location],
        );
    }
    for field in repeated_names(fields, |field| field.name) {
        ctx.add_error(
            format!("Field \"{}.{}\" can only be defined once.", type_name, field.name),
            [field.location],
        );
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for FieldDefinitions {
    fn enter_directive(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _directive: &'a SchemaDirective<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Skip
    }

    fn enter_object(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        object: &'a SchemaObject<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        validate_fields(ctx, object.name, object.location, object.get_fields());
        VisitFlow::Next
    }

    fn enter_interface(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        interface: &'a SchemaInterface<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        validate_fields(ctx, interface.name, interface.location, interface.get_fields());
        VisitFlow::Next
    }

    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a SchemaField<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if !field.output_type.is_output_type() {
            ctx.add_error(
                format!(
                    "The type of {} must be Output Type but got: {}.",
                    info.path, field.output_type
                ),
                [field.location],
            );
        }
        for argument in repeated_names(field.arguments, |argument| argument.name) {
            ctx.add_error(
                format!("Argument {}({}:) can only be defined once.", info.path, argument.name),
                [field.location, argument.location],
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

    fn enter_union(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        _union_type: &'a SchemaUnion<'a>,
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
