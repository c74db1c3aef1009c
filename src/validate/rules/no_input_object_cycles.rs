use hashbrown::{HashMap, HashSet};

use super::super::{ValidationContext, ValidationRule};
use crate::{schema::*, visit::*};

/// Validate that Input Object types don't reference themselves through a series of non-null
/// fields, which would make it impossible to provide a finite value for them.
///
/// Only fields whose type is directly a non-null Input Object form an edge between two types.
/// Lists may always be empty, so a list of the type itself doesn't create a cycle.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects.Type-Validation)
#[derive(Default)]
pub struct NoInputObjectCycles<'a> {
    /// Types that have been searched for cycles already
    visited_types: HashSet<&'a str>,
    /// The non-null fields that have been followed from the current entry type
    field_path: Vec<&'a SchemaInputField<'a>>,
    /// The position in `field_path` at which each type on the current path has been entered
    field_path_index: HashMap<&'a str, usize>,
}

impl<'a> ValidationRule<'a> for NoInputObjectCycles<'a> {}

impl<'a> NoInputObjectCycles<'a> {
    fn detect_cycles(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        input_object: &'a SchemaInputObject<'a>,
    ) {
        if !self.visited_types.insert(input_object.name) {
            return;
        }
        self.field_path_index
            .insert(input_object.name, self.field_path.len());

        for field in input_object.get_fields().iter() {
            let TypeRef::NonNullType(NullableType::Type(SchemaType::InputObject(field_type))) =
                field.input_type
            else {
                continue;
            };
            let cycle_index = self.field_path_index.get(field_type.name).copied();
            self.field_path.push(field);
            match cycle_index {
                None => self.detect_cycles(ctx, field_type),
                Some(cycle_index) => {
                    let cycle_path = &self.field_path[cycle_index..];
                    let path: Vec<&str> = cycle_path.iter().map(|field| field.name).collect();
                    ctx.add_error(
                        format!(
                            "Cannot reference Input Object \"{}\" within itself through a series of non-null fields: \"{}\".",
                            field_type.name,
                            path.join(".")
                        ),
                        cycle_path.iter().map(|field| field.location),
                    );
                }
            }
            self.field_path.pop();
        }

        self.field_path_index.remove(input_object.name);
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for NoInputObjectCycles<'a> {
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
        self.detect_cycles(ctx, input_object);
        VisitFlow::Skip
    }
}
