use super::super::{ValidationContext, ValidationRule};
use super::repeated_names;
use crate::schema::name::is_reserved_enum_value;
use crate::{schema::*, visit::*};

/// Validate that an Enum type defines at least one value and that its values are uniquely named
/// and not named `true`, `false`, or `null`.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums.Type-Validation)
#[derive(Default)]
pub struct EnumValues;

impl<'a> ValidationRule<'a> for EnumValues {}

impl<'a> Visitor<'a, ValidationContext<'a>> for EnumValues {
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
        ctx: &mut ValidationContext<'a>,
        enum_type: &'a SchemaEnum<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if enum_type.values.is_empty() {
            ctx.add_error(
                format!("Enum type {} must define one or more values.", enum_type.name),
                [enum_type.location],
            );
        }
        for value in repeated_names(enum_type.values, |value| value.name) {
            ctx.add_error(
                format!(
                    "Enum value \"{}.{}\" can only be defined once.",
                    enum_type.name, value.name
                ),
                [value.location],
            );
        }
        VisitFlow::Next
    }

    fn enter_enum_value(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        enum_value: &'a SchemaEnumValue<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if is_reserved_enum_value(enum_value.name) {
            ctx.add_error(
                format!(
                    "Enum type {} cannot include value: {}.",
                    info.path.type_name().unwrap_or_default(),
                    enum_value.name
                ),
                [enum_value.location],
            );
        }
        VisitFlow::Next
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

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;

    #[test]
    fn valid_enums() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let color = ctx.alloc(SchemaEnum::new("Color").with_values(
            &ctx,
            [
                SchemaEnumValue::new("RED"),
                SchemaEnumValue::new("True"),
                SchemaEnumValue::new("nil"),
            ],
        ));
        let schema = hello_schema(&ctx, builtins, vec![color.into()]);
        assert!(EnumValues::validate(schema).is_empty());
    }

    #[test]
    fn invalid_enums() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let empty = ctx.alloc(SchemaEnum::new("Empty"));
        let literal = ctx.alloc(SchemaEnum::new("Literal").with_values(
            &ctx,
            [
                SchemaEnumValue::new("true"),
                SchemaEnumValue::new("false"),
                SchemaEnumValue::new("null"),
                SchemaEnumValue::new("NONE"),
                SchemaEnumValue::new("NONE"),
            ],
        ));
        let schema = hello_schema(&ctx, builtins, vec![empty.into(), literal.into()]);
        assert_eq!(
            messages(EnumValues::validate(schema)),
            [
                "Enum type Empty must define one or more values.",
                "Enum value \"Literal.NONE\" can only be defined once.",
                "Enum type Literal cannot include value: true.",
                "Enum type Literal cannot include value: false.",
                "Enum type Literal cannot include value: null.",
            ]
        );
    }
}
