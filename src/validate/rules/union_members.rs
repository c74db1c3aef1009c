use super::super::{ValidationContext, ValidationRule};
use crate::{schema::*, visit::*};

/// Validate that a Union type includes at least one member type and that its members are unique
/// Object types.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions.Type-Validation)
#[derive(Default)]
pub struct UnionMembers;

impl<'a> ValidationRule<'a> for UnionMembers {}

impl<'a> Visitor<'a, ValidationContext<'a>> for UnionMembers {
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

    fn enter_union(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        union_type: &'a SchemaUnion<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let members = union_type.get_possible_types();
        if members.is_empty() {
            ctx.add_error(
                format!(
                    "Union type {} must define one or more member types.",
                    union_type.name
                ),
                [union_type.location],
            );
        }

        let mut included: Vec<&str> = Vec::with_capacity(members.len());
        for member in members.iter() {
            if included.contains(&member.name()) {
                ctx.add_error(
                    format!(
                        "Union type {} can only include type {} once.",
                        union_type.name, member
                    ),
                    [union_type.location, member.location()],
                );
                continue;
            }
            included.push(member.name());
            if member.object().is_none() {
                ctx.add_error(
                    format!(
                        "Union type {} can only include Object types, it cannot include {}.",
                        union_type.name, member
                    ),
                    [union_type.location, member.location()],
                );
            }
        }
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
