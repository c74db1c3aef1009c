use super::super::{ValidationContext, ValidationRule};
use crate::{schema::*, visit::*};

/// Validate that a schema defines a query root type and that all root types are distinct Object
/// types.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Root-Operation-Types)
#[derive(Default)]
pub struct RootOperationTypes;

impl<'a> ValidationRule<'a> for RootOperationTypes {}

impl<'a> Visitor<'a, ValidationContext<'a>> for RootOperationTypes {
    fn enter_schema(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        schema: &'a Schema<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if schema.get_root_schema_type(OperationKind::Query).is_none() {
            ctx.add_error("Query root type must be provided.", [schema.location()]);
        }

        let mut roots: Vec<(OperationKind, SchemaType<'a>)> = Vec::with_capacity(3);
        for operation_kind in OperationKind::ALL {
            let Some(root_type) = schema.get_root_schema_type(operation_kind) else {
                continue;
            };
            let location = root_type.location().or(schema.location());
            if !matches!(root_type, SchemaType::Object(_)) {
                let message = match operation_kind {
                    OperationKind::Query => format!(
                        "Query root type must be Object type, it cannot be {}.",
                        root_type
                    ),
                    OperationKind::Mutation => format!(
                        "Mutation root type must be Object type if provided, it cannot be {}.",
                        root_type
                    ),
                    OperationKind::Subscription => format!(
                        "Subscription root type must be Object type if provided, it cannot be {}.",
                        root_type
                    ),
                };
                ctx.add_error(message, [location]);
            }
            roots.push((operation_kind, root_type));
        }

        // Each root type is reported once, listing all operations that share it
        for (index, (_, root_type)) in roots.iter().enumerate() {
            let is_first = !roots[..index].iter().any(|(_, other)| other == root_type);
            if !is_first {
                continue;
            }
            let shared: Vec<&str> = roots
                .iter()
                .filter(|(_, other)| other == root_type)
                .map(|(kind, _)| kind.as_str())
                .collect();
            if shared.len() > 1 {
                ctx.add_error(
                    format!(
                        "All root types must be different, \"{}\" type is used as {} root types.",
                        root_type,
                        shared.join(" and ")
                    ),
                    [root_type.location().or(schema.location())],
                );
            }
        }

        VisitFlow::Skip
    }
}
