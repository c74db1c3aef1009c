use super::super::{ValidationContext, ValidationRule};
use super::repeated_names;
use crate::{schema::*, visit::*};

/// Validate that an Input Object type defines at least one field and that its fields are uniquely
/// named, accept input types, and aren't both required and deprecated.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects.Type-Validation)
#[derive(Default)]
pub struct InputObjectFields;

impl<'a> ValidationRule<'a> for InputObjectFields {}

impl<'a> Visitor<'a, ValidationContext<'a>> for InputObjectFields {
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
        ctx: &mut ValidationContext<'a>,
        input_object: &'a SchemaInputObject<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let fields = input_object.get_fields();
        if fields.is_empty() {
            ctx.add_error(
                format!(
                    "Input Object type {} must define one or more fields.",
                    input_object.name
                ),
                [input_object.location],
            );
        }
        for field in repeated_names(fields, |field| field.name) {
            ctx.add_error(
                format!(
                    "Field \"{}.{}\" can only be defined once.",
                    input_object.name, field.name
                ),
                [field.location],
            );
        }
        VisitFlow::Next
    }

    fn enter_input_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        input_field: &'a SchemaInputField<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if !input_field.input_type.is_input_type() {
            ctx.add_error(
                format!(
                    "The type of {} must be Input Type but got: {}.",
                    info.path, input_field.input_type
                ),
                [input_field.location],
            );
        }
        if input_field.is_required() && input_field.deprecation_reason.is_some() {
            ctx.add_error(
                format!("Required input field {} cannot be deprecated.", info.path),
                [input_field.location],
            );
        }
        VisitFlow::Next
    }
}
