use super::super::{ValidationContext, ValidationRule};
use crate::error::Location;
use crate::schema::name::{name_error, reserved_name_error};
use crate::{schema::*, visit::*};

/// Validate that all names in a schema match the name grammar and don't start with `__`, which
/// is reserved for introspection.
///
/// The introspection types themselves are exempt from this rule.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Names.Reserved-Names)
#[derive(Default)]
pub struct ValidNames;

impl<'a> ValidationRule<'a> for ValidNames {}

fn validate_name(ctx: &mut ValidationContext<'_>, name: &str, location: Option<Location>) {
    if let Some(message) = name_error(name).or_else(|| reserved_name_error(name)) {
        ctx.add_error(message, [location]);
    }
}

/// Checks a named type's name and skips over introspection types
fn enter_type(ctx: &mut ValidationContext<'_>, name: &str, location: Option<Location>) -> VisitFlow {
    if is_introspection_type(name) {
        VisitFlow::Skip
    } else {
        validate_name(ctx, name, location);
        VisitFlow::Next
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for ValidNames {
    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a SchemaDirective<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        validate_name(ctx, directive.name, directive.location);
        VisitFlow::Next
    }

    fn enter_object(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        object: &'a SchemaObject<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        enter_type(ctx, object.name, object.location)
    }

    fn enter_interface(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        interface: &'a SchemaInterface<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        enter_type(ctx, interface.name, interface.location)
    }

    fn enter_union(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        union_type: &'a SchemaUnion<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        enter_type(ctx, union_type.name, union_type.location)
    }

    fn enter_enum(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        enum_type: &'a SchemaEnum<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        enter_type(ctx, enum_type.name, enum_type.location)
    }

    fn enter_input_object(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        input_object: &'a SchemaInputObject<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        enter_type(ctx, input_object.name, input_object.location)
    }

    fn enter_scalar(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        scalar: &'a SchemaScalar<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        enter_type(ctx, scalar.name, scalar.location)
    }

    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a SchemaField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        validate_name(ctx, field.name, field.location);
        VisitFlow::Next
    }

    fn enter_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        argument: &'a SchemaInputField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        validate_name(ctx, argument.name, argument.location);
        VisitFlow::Next
    }

    fn enter_input_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        input_field: &'a SchemaInputField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        validate_name(ctx, input_field.name, input_field.location);
        VisitFlow::Next
    }

    fn enter_enum_value(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        enum_value: &'a SchemaEnumValue<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        validate_name(ctx, enum_value.name, enum_value.location);
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;

    #[test]
    fn valid_names() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let schema = hello_schema(&ctx, builtins, vec![]);
        assert!(ValidNames::validate(schema).is_empty());
    }

    #[test]
    fn invalid_names() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let string = TypeRef::named(builtins.string);
        let query = ctx.alloc(SchemaObject::new("Query"));
        query
            .define_fields(
                &ctx,
                [
                    SchemaField::new("__secret", string)
                        .with_location(Location::new(2, 3))
                        .with_arguments(&ctx, [SchemaInputField::new("1st", string)]),
                    SchemaField::new("hello", string),
                ],
            )
            .unwrap();
        let color = ctx.alloc(
            SchemaEnum::new("__Color").with_values(&ctx, [SchemaEnumValue::new("dark-red")]),
        );
        let schema = hello_schema_with(&ctx, builtins, query, vec![color.into()]);
        let errors = ValidNames::validate(schema);
        assert_eq!(
            messages(errors),
            [
                "Name \"__Color\" must not begin with \"__\", which is reserved by GraphQL introspection.",
                "Names must only contain [_a-zA-Z0-9] but \"dark-red\" does not.",
                "Name \"__secret\" must not begin with \"__\", which is reserved by GraphQL introspection.",
                "Names must start with [_a-zA-Z] but \"1st\" does not.",
            ]
        );
        assert_eq!(errors[2].locations, [Location::new(2, 3)]);
    }

    #[test]
    fn invalid_directive_and_input_field_names() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let string = TypeRef::named(builtins.string);
        let cache = ctx.alloc(
            SchemaDirective::new(&ctx, "bad-name", [DirectiveLocation::FieldDefinition])
                .with_location(Location::new(1, 1))
                .with_arguments(&ctx, [SchemaInputField::new("__scope", string)]),
        );
        let filter = ctx.alloc(SchemaInputObject::new("Filter"));
        filter
            .define_fields(
                &ctx,
                [
                    SchemaInputField::new("__x", string).with_location(Location::new(4, 3)),
                    SchemaInputField::new("text", string),
                ],
            )
            .unwrap();
        let mut directives = builtins.directives().to_vec();
        directives.push(cache);

        let schema = build_schema(
            &ctx,
            SchemaConfig {
                query: Some(hello_object(&ctx, builtins, "Query").into()),
                types: vec![filter.into()],
                directives: Some(directives),
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap();
        let errors = ValidNames::validate(schema);
        assert_eq!(
            messages(errors),
            [
                "Names must only contain [_a-zA-Z0-9] but \"bad-name\" does not.",
                "Name \"__scope\" must not begin with \"__\", which is reserved by GraphQL introspection.",
                "Name \"__x\" must not begin with \"__\", which is reserved by GraphQL introspection.",
            ]
        );
        assert_eq!(errors[0].locations, [Location::new(1, 1)]);
        assert_eq!(errors[2].locations, [Location::new(4, 3)]);
    }
}
