use super::super::{ValidationContext, ValidationRule};
use crate::{schema::*, visit::*};

/// Validate that Object and Interface types only implement interfaces they may implement and that
/// they conform to each of their interfaces.
///
/// A type must implement each Interface type at most once, may never implement itself, and must
/// also declare every interface that's implemented by one of its interfaces. For each interface
/// field, the type must provide a field of the same name whose type is a sub type of the
/// interface field's type. The field must accept all of the interface field's arguments with
/// equal types, and any additional arguments must be optional.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#IsValidImplementation())
#[derive(Default)]
pub struct ImplementsInterfaces;

impl<'a> ValidationRule<'a> for ImplementsInterfaces {}

impl<'a> Visitor<'a, ValidationContext<'a>> for ImplementsInterfaces {
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
        validate_interfaces(ctx, object.into(), object);
        VisitFlow::Skip
    }

    fn enter_interface(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        interface: &'a SchemaInterface<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        validate_interfaces(ctx, interface.into(), interface);
        VisitFlow::Skip
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

fn validate_interfaces<'a, T>(ctx: &mut ValidationContext<'a>, this: SchemaType<'a>, definition: &'a T)
where
    T: SchemaFields<'a> + SchemaInterfaces<'a>,
{
    let type_name = this.name();
    let type_interfaces = definition.get_interfaces();
    let mut implemented: Vec<&str> = Vec::with_capacity(type_interfaces.len());
    for schema_type in type_interfaces.iter() {
        let Some(interface) = schema_type.interface() else {
            ctx.add_error(
                format!(
                    "Type {} must only implement Interface types, it cannot implement {}.",
                    type_name, schema_type
                ),
                [this.location()],
            );
            continue;
        };

        if *schema_type == this {
            ctx.add_error(
                format!(
                    "Type {type_name} cannot implement itself because it would create a circular reference."
                ),
                [this.location()],
            );
            continue;
        }

        if implemented.contains(&interface.name) {
            ctx.add_error(
                format!("Type {} can only implement {} once.", type_name, interface.name),
                [this.location()],
            );
            continue;
        }
        implemented.push(interface.name);

        validate_ancestors(ctx, this, type_interfaces, interface);
        validate_implementation(ctx, this, definition, interface);
    }
}

/// Interfaces that are implemented by an interface must be declared explicitly
fn validate_ancestors<'a>(
    ctx: &mut ValidationContext<'a>,
    this: SchemaType<'a>,
    type_interfaces: &'a [SchemaType<'a>],
    interface: &'a SchemaInterface<'a>,
) {
    for transitive in interface.get_interfaces().iter() {
        if type_interfaces.contains(transitive) {
            continue;
        }
        let message = if *transitive == this {
            format!(
                "Type {} cannot implement {} because it would create a circular reference.",
                this, interface.name
            )
        } else {
            format!(
                "Type {} must implement {} because it is implemented by {}.",
                this, transitive, interface.name
            )
        };
        ctx.add_error(message, [interface.location, this.location()]);
    }
}

fn validate_implementation<'a, T>(
    ctx: &mut ValidationContext<'a>,
    this: SchemaType<'a>,
    definition: &'a T,
    interface: &'a SchemaInterface<'a>,
) where
    T: SchemaFields<'a>,
{
    let schema = ctx.schema;
    for interface_field in interface.get_fields().iter() {
        let field_name = interface_field.name;
        let Some(type_field) = definition.get_field(field_name) else {
            ctx.add_error(
                format!(
                    "Interface field {}.{} expected but {} does not provide it.",
                    interface.name, field_name, this
                ),
                [interface_field.location, this.location()],
            );
            continue;
        };

        // Fields are covariant, so the implementing field may return a narrower type
        if !is_type_sub_type_of(schema, type_field.output_type, interface_field.output_type) {
            ctx.add_error(
                format!(
                    "Interface field {}.{} expects type {} but {}.{} is type {}.",
                    interface.name,
                    field_name,
                    interface_field.output_type,
                    this,
                    field_name,
                    type_field.output_type
                ),
                [interface_field.location, type_field.location],
            );
        }

        // Arguments are invariant and must have equal types
        for interface_argument in interface_field.arguments.iter() {
            let argument_name = interface_argument.name;
            let Some(type_argument) = type_field.get_argument(argument_name) else {
                ctx.add_error(
                    format!(
                        "Interface field argument {}.{}({}:) expected but {}.{} does not provide it.",
                        interface.name, field_name, argument_name, this, field_name
                    ),
                    [interface_argument.location, type_field.location],
                );
                continue;
            };
            if !is_equal_type(&interface_argument.input_type, &type_argument.input_type) {
                ctx.add_error(
                    format!(
                        "Interface field argument {}.{}({}:) expects type {} but {}.{}({}:) is type {}.",
                        interface.name,
                        field_name,
                        argument_name,
                        interface_argument.input_type,
                        this,
                        field_name,
                        argument_name,
                        type_argument.input_type
                    ),
                    [interface_argument.location, type_argument.location],
                );
            }
        }

        for type_argument in type_field.arguments.iter() {
            if type_argument.is_required() && interface_field.get_argument(type_argument.name).is_none() {
                ctx.add_error(
                    format!(
                        "Argument \"{}.{}({}:)\" must not be required type \"{}\" if not provided by the Interface field \"{}.{}\".",
                        this,
                        field_name,
                        type_argument.name,
                        type_argument.input_type,
                        interface.name,
                        field_name
                    ),
                    [type_argument.location, interface_field.location],
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;

    #[test]
    fn conforming_implementations() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let id = TypeRef::named(builtins.id);
        let int = TypeRef::named(builtins.int);

        let node = ctx.alloc(SchemaInterface::new("Node"));
        node.define_fields(&ctx, [SchemaField::new("id", id)]).unwrap();
        let entity = ctx.alloc(SchemaInterface::new("Entity"));
        entity.define_interfaces(&ctx, [node.into()]).unwrap();
        entity
            .define_fields(
                &ctx,
                [
                    SchemaField::new("id", id.non_null()),
                    SchemaField::new("related", TypeRef::named(node))
                        .with_arguments(&ctx, [SchemaInputField::new("first", int.non_null())]),
                ],
            )
            .unwrap();
        let user = ctx.alloc(SchemaObject::new("User"));
        user.define_interfaces(&ctx, [entity.into(), node.into()]).unwrap();
        user.define_fields(
            &ctx,
            [
                SchemaField::new("id", id.non_null()),
                SchemaField::new("related", TypeRef::named(user)).with_arguments(
                    &ctx,
                    [
                        SchemaInputField::new("first", int.non_null()),
                        SchemaInputField::new("after", id),
                        SchemaInputField::new("last", int.non_null()).with_default_value("10"),
                    ],
                ),
                SchemaField::new("name", TypeRef::named(builtins.string)),
            ],
        )
        .unwrap();

        let schema = hello_schema(&ctx, builtins, vec![user.into()]);
        assert!(ImplementsInterfaces::validate(schema).is_empty());
    }

    #[test]
    fn nonconforming_implementations() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let int = TypeRef::named(builtins.int);
        let string = TypeRef::named(builtins.string);

        let node = ctx.alloc(SchemaInterface::new("Node"));
        node.define_fields(
            &ctx,
            [
                SchemaField::new("id", TypeRef::named(builtins.id).non_null()),
                SchemaField::new("children", TypeRef::list(&ctx, TypeRef::named(node)))
                    .with_arguments(&ctx, [SchemaInputField::new("first", int)]),
            ],
        )
        .unwrap();
        let missing_field = ctx.alloc(SchemaObject::new("MissingField"));
        missing_field.define_interfaces(&ctx, [node.into()]).unwrap();
        missing_field
            .define_fields(
                &ctx,
                [SchemaField::new("children", TypeRef::list(&ctx, TypeRef::named(node)))
                    .with_arguments(&ctx, [SchemaInputField::new("first", int)])],
            )
            .unwrap();
        let wrong_type = ctx.alloc(SchemaObject::new("WrongType"));
        wrong_type.define_interfaces(&ctx, [node.into()]).unwrap();
        wrong_type
            .define_fields(
                &ctx,
                [
                    SchemaField::new("id", TypeRef::named(builtins.id)),
                    SchemaField::new("children", TypeRef::list(&ctx, TypeRef::named(node)))
                        .with_arguments(&ctx, [SchemaInputField::new("first", int.non_null())]),
                ],
            )
            .unwrap();
        let missing_argument = ctx.alloc(SchemaObject::new("MissingArgument"));
        missing_argument.define_interfaces(&ctx, [node.into()]).unwrap();
        missing_argument
            .define_fields(
                &ctx,
                [
                    SchemaField::new("id", TypeRef::named(builtins.id).non_null()),
                    SchemaField::new("children", TypeRef::list(&ctx, TypeRef::named(node)))
                        .with_arguments(&ctx, [SchemaInputField::new("filter", string.non_null())]),
                ],
            )
            .unwrap();

        let schema = hello_schema(
            &ctx,
            builtins,
            vec![missing_field.into(), wrong_type.into(), missing_argument.into()],
        );
        assert_eq!(
            messages(ImplementsInterfaces::validate(schema)),
            [
                "Interface field Node.id expected but MissingField does not provide it.",
                "Interface field Node.id expects type ID! but WrongType.id is type ID.",
                "Interface field argument Node.children(first:) expects type Int but WrongType.children(first:) is type Int!.",
                "Interface field argument Node.children(first:) expected but MissingArgument.children does not provide it.",
                "Argument \"MissingArgument.children(filter:)\" must not be required type \"String!\" if not provided by the Interface field \"Node.children\".",
            ]
        );
    }

    #[test]
    fn missing_ancestors() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let id_field = || SchemaField::new("id", TypeRef::named(builtins.id));

        let node = ctx.alloc(SchemaInterface::new("Node"));
        node.define_fields(&ctx, [id_field()]).unwrap();
        let resource = ctx.alloc(SchemaInterface::new("Resource"));
        resource.define_interfaces(&ctx, [node.into()]).unwrap();
        resource.define_fields(&ctx, [id_field()]).unwrap();
        let image = ctx.alloc(SchemaInterface::new("Image"));
        image.define_interfaces(&ctx, [resource.into()]).unwrap();
        image.define_fields(&ctx, [id_field()]).unwrap();

        let schema = hello_schema(&ctx, builtins, vec![image.into()]);
        assert_eq!(
            messages(ImplementsInterfaces::validate(schema)),
            ["Type Image must implement Node because it is implemented by Resource."]
        );
    }

    #[test]
    fn circular_implementations() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let id_field = || SchemaField::new("id", TypeRef::named(builtins.id));

        let node = ctx.alloc(SchemaInterface::new("Node"));
        node.define_interfaces(&ctx, [node.into()]).unwrap();
        node.define_fields(&ctx, [id_field()]).unwrap();
        let parent = ctx.alloc(SchemaInterface::new("Parent"));
        let child = ctx.alloc(SchemaInterface::new("Child"));
        parent.define_interfaces(&ctx, [child.into()]).unwrap();
        parent.define_fields(&ctx, [id_field()]).unwrap();
        child.define_interfaces(&ctx, [parent.into()]).unwrap();
        child.define_fields(&ctx, [id_field()]).unwrap();

        let schema = hello_schema(&ctx, builtins, vec![node.into(), parent.into()]);
        assert_eq!(
            messages(ImplementsInterfaces::validate(schema)),
            [
                "Type Node cannot implement itself because it would create a circular reference.",
                "Type Parent cannot implement Child because it would create a circular reference.",
                "Type Child cannot implement Parent because it would create a circular reference.",
            ]
        );
    }

    #[test]
    fn invalid_interface_lists() {
        let ctx = SchemaContext::new();
        let builtins = Builtins::new(&ctx);
        let id_field = || SchemaField::new("id", TypeRef::named(builtins.id));

        let node = ctx.alloc(SchemaInterface::new("Node"));
        node.define_fields(&ctx, [id_field()]).unwrap();
        let user = ctx.alloc(SchemaObject::new("User"));
        user.define_fields(&ctx, [id_field()]).unwrap();
        let admin = ctx.alloc(SchemaObject::new("Admin"));
        admin
            .define_interfaces(&ctx, [node.into(), user.into(), node.into()])
            .unwrap();
        admin.define_fields(&ctx, [id_field()]).unwrap();

        let schema = hello_schema(&ctx, builtins, vec![admin.into()]);
        assert_eq!(
            messages(ImplementsInterfaces::validate(schema)),
            [
                "Type Admin must only implement Interface types, it cannot implement User.",
                "Type Admin can only implement Node once.",
            ]
        );
    }
}
