use hashbrown::HashSet;

use crate::visit::ComposedVisitor;

mod directive_definitions;
mod enum_values;
mod field_definitions;
mod implements_interfaces;
mod input_object_fields;
mod no_input_object_cycles;
mod root_operation_types;
mod union_members;
mod valid_names;

pub use super::context::ValidationContext;
pub use directive_definitions::*;
pub use enum_values::*;
pub use field_definitions::*;
pub use implements_interfaces::*;
pub use input_object_fields::*;
pub use no_input_object_cycles::*;
pub use root_operation_types::*;
pub use union_members::*;
pub use valid_names::*;

/// All of GraphQL's type system validation rules combined into one `ValidationRule`.
///
/// See: [`ComposedVisitor`]
pub type DefaultRules<'a> = ComposedVisitor<
    'a,
    ValidationContext<'a>,
    ComposedVisitor<
        'a,
        ValidationContext<'a>,
        ComposedVisitor<'a, ValidationContext<'a>, RootOperationTypes, DirectiveDefinitions>,
        ComposedVisitor<'a, ValidationContext<'a>, ValidNames, FieldDefinitions>,
    >,
    ComposedVisitor<
        'a,
        ValidationContext<'a>,
        ComposedVisitor<'a, ValidationContext<'a>, ImplementsInterfaces, UnionMembers>,
        ComposedVisitor<
            'a,
            ValidationContext<'a>,
            EnumValues,
            ComposedVisitor<
                'a,
                ValidationContext<'a>,
                InputObjectFields,
                NoInputObjectCycles<'a>,
            >,
        >,
    >,
>;

/// Returns every item whose name has already been taken by a preceding item.
fn repeated_names<'a, T, F>(items: &'a [T], name: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().filter(|&item| !seen.insert(name(item))).collect()
}
