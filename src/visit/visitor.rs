use super::{compose::ComposedVisitor, path::Path, PathSegment};
use crate::schema::*;

pub(crate) mod private {
    use super::{VisitFlow, VisitInfo, Visitor};

    pub trait VisitNodeWithInfo<'a>: Sized {
        fn visit_with_info<'b, C, V: Visitor<'a, C>>(
            &'a self,
            ctx: &'b mut C,
            visitor: &'b mut V,
            info: &mut VisitInfo<'a>,
        ) -> VisitFlow;
    }
}

use private::VisitNodeWithInfo;

/// A visitor signal that is returned from [Visitor] callbacks to alter the flow of traversal.
///
/// The default callbacks all return `VisitFlow::Next`, which continues the depth-first traversal. The
/// other signals may be used to skip over a definition in an `enter_` callback or to abort
/// traversal entirely without visiting any more definitions.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum VisitFlow {
    /// Continue visiting definitions as usual.
    Next,
    /// Abort the traversal without performing any subsequent visits.
    Break,
    /// Skip over the current definition without performing any deeper traversal.
    /// (Only applies to `enter_` callbacks)
    Skip,
}

#[derive(Debug, Default)]
pub struct VisitInfo<'a> {
    pub path: Path<'a>,
}

/// Trait for a visitor that carries methods that are called as callback while a [Schema] and its
/// definitions are traversed.
///
/// The schema is traversed in depth-first order. First the schema's directives and their
/// arguments are visited, then every named type in the order of the schema's type map together
/// with its fields, arguments, input fields, or enum values. Callbacks that are prefixed with
/// `enter_` are called from top-to-bottom while the traversal is recursing, while callbacks that
/// are prefixed with `leave_` are called from bottom-to-top while the traversal is returning.
///
/// All callbacks have a default no-op implementation that returns `VisitFlow::Next`. The
/// [`VisitFlow`] signals are returned from callbacks to alter the traversal and either continue it
/// (`Next`), skip over a definition during an `enter_` callback with (`Skip`), or abort traversal
/// entirely (`Break`).
///
/// The visitor may also define a custom context structure that can be passed to the `visit`
/// method. By default the context is an empty unit `()`.
pub trait Visitor<'a, Context = ()>: Sized {
    /// Combines two visitors into one that will run both the original and passed visitor concurrently.
    ///
    /// Both visitors must accept the same `Context` type.
    #[inline]
    fn compose<V: Visitor<'a, Context>>(self, other: V) -> ComposedVisitor<'a, Context, Self, V> {
        ComposedVisitor::new(self, other)
    }

    /// Called when a [Schema] is visited and before its definitions are visited.
    fn enter_schema(
        &mut self,
        _ctx: &mut Context,
        _schema: &'a Schema<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [Schema] and all of its definitions were visited.
    fn leave_schema(
        &mut self,
        _ctx: &mut Context,
        _schema: &'a Schema<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`SchemaDirective`] is visited and before its arguments are visited.
    fn enter_directive(
        &mut self,
        _ctx: &mut Context,
        _directive: &'a SchemaDirective<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`SchemaDirective`] and its arguments were visited.
    fn leave_directive(
        &mut self,
        _ctx: &mut Context,
        _directive: &'a SchemaDirective<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`SchemaObject`] is visited and before its fields are visited.
    fn enter_object(
        &mut self,
        _ctx: &mut Context,
        _object: &'a SchemaObject<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`SchemaObject`] and its fields were visited.
    fn leave_object(
        &mut self,
        _ctx: &mut Context,
        _object: &'a SchemaObject<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`SchemaInterface`] is visited and before its fields are visited.
    fn enter_interface(
        &mut self,
        _ctx: &mut Context,
        _interface: &'a SchemaInterface<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`SchemaInterface`] and its fields were visited.
    fn leave_interface(
        &mut self,
        _ctx: &mut Context,
        _interface: &'a SchemaInterface<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`SchemaUnion`] is visited.
    fn enter_union(
        &mut self,
        _ctx: &mut Context,
        _union_type: &'a SchemaUnion<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`SchemaUnion`] was visited.
    fn leave_union(
        &mut self,
        _ctx: &mut Context,
        _union_type: &'a SchemaUnion<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`SchemaEnum`] is visited and before its values are visited.
    fn enter_enum(
        &mut self,
        _ctx: &mut Context,
        _enum_type: &'a SchemaEnum<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`SchemaEnum`] and its values were visited.
    fn leave_enum(
        &mut self,
        _ctx: &mut Context,
        _enum_type: &'a SchemaEnum<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`SchemaInputObject`] is visited and before its input fields are visited.
    fn enter_input_object(
        &mut self,
        _ctx: &mut Context,
        _input_object: &'a SchemaInputObject<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`SchemaInputObject`] and its input fields were visited.
    fn leave_input_object(
        &mut self,
        _ctx: &mut Context,
        _input_object: &'a SchemaInputObject<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`SchemaScalar`] is visited.
    fn enter_scalar(
        &mut self,
        _ctx: &mut Context,
        _scalar: &'a SchemaScalar<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`SchemaScalar`] was visited.
    fn leave_scalar(
        &mut self,
        _ctx: &mut Context,
        _scalar: &'a SchemaScalar<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`SchemaField`] of an object or interface is visited and before its
    /// arguments are visited.
    fn enter_field(
        &mut self,
        _ctx: &mut Context,
        _field: &'a SchemaField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`SchemaField`] and its arguments were visited.
    fn leave_field(
        &mut self,
        _ctx: &mut Context,
        _field: &'a SchemaField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when an argument of a field or directive is visited.
    fn enter_argument(
        &mut self,
        _ctx: &mut Context,
        _argument: &'a SchemaInputField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after an argument of a field or directive was visited.
    fn leave_argument(
        &mut self,
        _ctx: &mut Context,
        _argument: &'a SchemaInputField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a field of an input object is visited.
    fn enter_input_field(
        &mut self,
        _ctx: &mut Context,
        _input_field: &'a SchemaInputField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a field of an input object was visited.
    fn leave_input_field(
        &mut self,
        _ctx: &mut Context,
        _input_field: &'a SchemaInputField<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }

    /// Called when a [`SchemaEnumValue`] is visited.
    fn enter_enum_value(
        &mut self,
        _ctx: &mut Context,
        _enum_value: &'a SchemaEnumValue<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
    /// Called after a [`SchemaEnumValue`] was visited.
    fn leave_enum_value(
        &mut self,
        _ctx: &mut Context,
        _enum_value: &'a SchemaEnumValue<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Next
    }
}

/// Trait for visiting a [Schema] or any of its definitions in depth-first order using a custom
/// visitor.
///
/// The visitor must implement the [Visitor] trait which may also define a custom context structure
/// that can be passed to the `visit` method.
pub trait VisitNode<'a>: Sized + private::VisitNodeWithInfo<'a> {
    /// Visit a definition and its children recursively in depth-first order with a given visitor.
    ///
    /// The visitor must implement the [Visitor] trait which may also define a custom context structure
    /// that can be passed to the `visit` method. By default the context is an empty unit `()`.
    fn visit<'b, C, V: Visitor<'a, C>>(&'a self, ctx: &'b mut C, visitor: &'b mut V) -> VisitFlow {
        let mut info = VisitInfo::default();
        self.visit_with_info(ctx, visitor, &mut info)
    }
}

impl<'a, T: private::VisitNodeWithInfo<'a>> VisitNode<'a> for T {}

#[inline]
fn visit_arguments<'a, 'b, C, V: Visitor<'a, C>>(
    arguments: &'a [SchemaInputField<'a>],
    ctx: &'b mut C,
    visitor: &'b mut V,
    info: &mut VisitInfo<'a>,
) -> VisitFlow {
    for argument in arguments.iter() {
        info.path.push(PathSegment::Argument(argument.name));
        let flow = visitor.enter_argument(ctx, argument, info);
        if flow == VisitFlow::Break {
            return VisitFlow::Break;
        } else if flow == VisitFlow::Next
            && visitor.leave_argument(ctx, argument, info) == VisitFlow::Break
        {
            return VisitFlow::Break;
        }
        info.path.pop();
    }
    VisitFlow::Next
}

#[inline]
fn visit_fields<'a, 'b, C, V: Visitor<'a, C>>(
    fields: &'a [SchemaField<'a>],
    ctx: &'b mut C,
    visitor: &'b mut V,
    info: &mut VisitInfo<'a>,
) -> VisitFlow {
    for field in fields.iter() {
        info.path.push(PathSegment::Field(field.name));
        if field.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
            return VisitFlow::Break;
        }
        info.path.pop();
    }
    VisitFlow::Next
}

impl<'a> private::VisitNodeWithInfo<'a> for SchemaField<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_field(ctx, self, info);
        if let VisitFlow::Next = flow {
            if visit_arguments(self.arguments, ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_field(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for SchemaDirective<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_directive(ctx, self, info);
        if let VisitFlow::Next = flow {
            if visit_arguments(self.arguments, ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_directive(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for SchemaObject<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_object(ctx, self, info);
        if let VisitFlow::Next = flow {
            if visit_fields(self.get_fields(), ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_object(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for SchemaInterface<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_interface(ctx, self, info);
        if let VisitFlow::Next = flow {
            if visit_fields(self.get_fields(), ctx, visitor, info) == VisitFlow::Break {
                return VisitFlow::Break;
            }
            visitor.leave_interface(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for SchemaUnion<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_union(ctx, self, info);
        if let VisitFlow::Next = flow {
            visitor.leave_union(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for SchemaEnum<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_enum(ctx, self, info);
        if let VisitFlow::Next = flow {
            for value in self.values.iter() {
                info.path.push(PathSegment::EnumValue(value.name));
                let flow = visitor.enter_enum_value(ctx, value, info);
                if flow == VisitFlow::Break {
                    return VisitFlow::Break;
                } else if flow == VisitFlow::Next
                    && visitor.leave_enum_value(ctx, value, info) == VisitFlow::Break
                {
                    return VisitFlow::Break;
                }
                info.path.pop();
            }
            visitor.leave_enum(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for SchemaInputObject<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_input_object(ctx, self, info);
        if let VisitFlow::Next = flow {
            for input_field in self.get_fields().iter() {
                info.path.push(PathSegment::InputField(input_field.name));
                let flow = visitor.enter_input_field(ctx, input_field, info);
                if flow == VisitFlow::Break {
                    return VisitFlow::Break;
                } else if flow == VisitFlow::Next
                    && visitor.leave_input_field(ctx, input_field, info) == VisitFlow::Break
                {
                    return VisitFlow::Break;
                }
                info.path.pop();
            }
            visitor.leave_input_object(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for SchemaScalar<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_scalar(ctx, self, info);
        if let VisitFlow::Next = flow {
            visitor.leave_scalar(ctx, self, info)
        } else {
            flow
        }
    }
}

impl<'a> private::VisitNodeWithInfo<'a> for Schema<'a> {
    #[inline]
    fn visit_with_info<'b, C, V: Visitor<'a, C>>(
        &'a self,
        ctx: &'b mut C,
        visitor: &'b mut V,
        info: &mut VisitInfo<'a>,
    ) -> VisitFlow {
        let flow = visitor.enter_schema(ctx, self, info);
        if let VisitFlow::Next = flow {
            for directive in self.get_directives().iter() {
                info.path.push(PathSegment::Directive(directive.name));
                if directive.visit_with_info(ctx, visitor, info) == VisitFlow::Break {
                    return VisitFlow::Break;
                }
                info.path.pop();
            }
            for schema_type in self.get_type_map().iter() {
                info.path.push(PathSegment::Type(schema_type.name()));
                let flow = match schema_type {
                    SchemaType::Object(object) => object.visit_with_info(ctx, visitor, info),
                    SchemaType::Interface(interface) => {
                        interface.visit_with_info(ctx, visitor, info)
                    }
                    SchemaType::Union(union_type) => union_type.visit_with_info(ctx, visitor, info),
                    SchemaType::Enum(enum_type) => enum_type.visit_with_info(ctx, visitor, info),
                    SchemaType::InputObject(input_object) => {
                        input_object.visit_with_info(ctx, visitor, info)
                    }
                    SchemaType::Scalar(scalar) => scalar.visit_with_info(ctx, visitor, info),
                };
                if flow == VisitFlow::Break {
                    return VisitFlow::Break;
                }
                info.path.pop();
            }
            visitor.leave_schema(ctx, self, info)
        } else {
            flow
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A small schema with one type of every kind next to the built-in definitions.
    pub(crate) fn kitchen_sink(ctx: &SchemaContext) -> &Schema<'_> {
        let builtins = Builtins::new(ctx);
        let string: SchemaType = builtins.string.into();
        let node = ctx.alloc(SchemaInterface::new("Node"));
        node.define_fields(ctx, [SchemaField::new("id", TypeRef::named(builtins.id).non_null())])
            .unwrap();
        let todo = ctx.alloc(SchemaObject::new("Todo"));
        todo.define_interfaces(ctx, [node.into()]).unwrap();
        todo.define_fields(
            ctx,
            [
                SchemaField::new("id", TypeRef::named(builtins.id).non_null()),
                SchemaField::new("text", string.into()),
            ],
        )
        .unwrap();
        let search = ctx.alloc(SchemaUnion::new("Search"));
        search.define_types(ctx, [todo.into()]).unwrap();
        let status = ctx.alloc(
            SchemaEnum::new("Status")
                .with_values(ctx, [SchemaEnumValue::new("OPEN"), SchemaEnumValue::new("DONE")]),
        );
        let filter = ctx.alloc(SchemaInputObject::new("Filter"));
        filter
            .define_fields(
                ctx,
                [
                    SchemaInputField::new("status", TypeRef::named(status)),
                    SchemaInputField::new("text", string.into()),
                ],
            )
            .unwrap();
        let query = ctx.alloc(SchemaObject::new("Query"));
        query
            .define_fields(
                ctx,
                [
                    SchemaField::new("todos", TypeRef::list(ctx, TypeRef::named(todo)))
                        .with_arguments(ctx, [SchemaInputField::new("filter", TypeRef::named(filter))]),
                    SchemaField::new("search", TypeRef::named(search)),
                ],
            )
            .unwrap();
        build_schema(
            ctx,
            SchemaConfig {
                query: Some(query.into()),
                ..SchemaConfig::new(builtins)
            },
        )
        .unwrap()
    }

    #[derive(Debug, PartialEq, Default)]
    pub(crate) struct CountVisitor {
        pub(crate) in_schema: usize,
        pub(crate) out_schema: usize,
        pub(crate) in_directive: usize,
        pub(crate) out_directive: usize,
        pub(crate) in_object: usize,
        pub(crate) out_object: usize,
        pub(crate) in_interface: usize,
        pub(crate) in_union: usize,
        pub(crate) in_enum: usize,
        pub(crate) in_input_object: usize,
        pub(crate) in_scalar: usize,
        pub(crate) in_field: usize,
        pub(crate) out_field: usize,
        pub(crate) in_argument: usize,
        pub(crate) out_argument: usize,
        pub(crate) in_input_field: usize,
        pub(crate) in_enum_value: usize,
    }

    impl<'a> Visitor<'a, ()> for CountVisitor {
        fn enter_schema(&mut self, _: &mut (), _schema: &'a Schema<'a>, _info: &VisitInfo<'a>) -> VisitFlow {
            self.in_schema += 1;
            VisitFlow::Next
        }
        fn leave_schema(&mut self, _: &mut (), _schema: &'a Schema<'a>, _info: &VisitInfo<'a>) -> VisitFlow {
            self.out_schema += 1;
            VisitFlow::Next
        }

        fn enter_directive(
            &mut self,
            _: &mut (),
            _directive: &'a SchemaDirective<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.in_directive += 1;
            VisitFlow::Next
        }
        fn leave_directive(
            &mut self,
            _: &mut (),
            _directive: &'a SchemaDirective<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.out_directive += 1;
            VisitFlow::Next
        }

        fn enter_object(
            &mut self,
            _: &mut (),
            _object: &'a SchemaObject<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.in_object += 1;
            VisitFlow::Next
        }
        fn leave_object(
            &mut self,
            _: &mut (),
            _object: &'a SchemaObject<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.out_object += 1;
            VisitFlow::Next
        }

        fn enter_interface(
            &mut self,
            _: &mut (),
            _interface: &'a SchemaInterface<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.in_interface += 1;
            VisitFlow::Next
        }

        fn enter_union(
            &mut self,
            _: &mut (),
            _union_type: &'a SchemaUnion<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.in_union += 1;
            VisitFlow::Next
        }

        fn enter_enum(
            &mut self,
            _: &mut (),
            _enum_type: &'a SchemaEnum<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.in_enum += 1;
            VisitFlow::Next
        }

        fn enter_input_object(
            &mut self,
            _: &mut (),
            _input_object: &'a SchemaInputObject<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.in_input_object += 1;
            VisitFlow::Next
        }

        fn enter_scalar(
            &mut self,
            _: &mut (),
            _scalar: &'a SchemaScalar<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.in_scalar += 1;
            VisitFlow::Next
        }

        fn enter_field(&mut self, _: &mut (), _field: &'a SchemaField<'a>, _info: &VisitInfo<'a>) -> VisitFlow {
            self.in_field += 1;
            VisitFlow::Next
        }
        fn leave_field(&mut self, _: &mut (), _field: &'a SchemaField<'a>, _info: &VisitInfo<'a>) -> VisitFlow {
            self.out_field += 1;
            VisitFlow::Next
        }

        fn enter_argument(
            &mut self,
            _: &mut (),
            _argument: &'a SchemaInputField<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.in_argument += 1;
            VisitFlow::Next
        }
        fn leave_argument(
            &mut self,
            _: &mut (),
            _argument: &'a SchemaInputField<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.out_argument += 1;
            VisitFlow::Next
        }

        fn enter_input_field(
            &mut self,
            _: &mut (),
            _input_field: &'a SchemaInputField<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.in_input_field += 1;
            VisitFlow::Next
        }

        fn enter_enum_value(
            &mut self,
            _: &mut (),
            _enum_value: &'a SchemaEnumValue<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.in_enum_value += 1;
            VisitFlow::Next
        }
    }

    #[test]
    fn kitchen_sink_counts() {
        let ctx = SchemaContext::new();
        let schema = kitchen_sink(&ctx);

        let mut visitor = CountVisitor::default();
        schema.visit(&mut (), &mut visitor);

        // Query, Todo, and six introspection objects
        assert_eq!(visitor.in_object, 8);
        assert_eq!(visitor.out_object, 8);
        // Status, __TypeKind, and __DirectiveLocation
        assert_eq!(visitor.in_enum, 3);
        // OPEN, DONE, eight type kinds and nineteen directive locations
        assert_eq!(visitor.in_enum_value, 2 + 8 + 19);
        assert_eq!(visitor.in_interface, 1);
        assert_eq!(visitor.in_union, 1);
        assert_eq!(visitor.in_input_object, 1);
        // String, ID, and Boolean are referenced; Int and Float aren't
        assert_eq!(visitor.in_scalar, 3);
        assert_eq!(visitor.in_directive, 3);
        assert_eq!(visitor.out_directive, 3);
        assert_eq!(visitor.in_input_field, 2);
        // Query: 2, Todo: 2, Node: 1, introspection: 6 + 5 + 9 + 6 + 6 + 4
        assert_eq!(visitor.in_field, 5 + 36);
        assert_eq!(visitor.out_field, visitor.in_field);
        // todos(filter:), @include(if:), @skip(if:), @deprecated(reason:) and five includeDeprecated
        assert_eq!(visitor.in_argument, 4 + 5);
        assert_eq!(visitor.out_argument, visitor.in_argument);
        assert_eq!((visitor.in_schema, visitor.out_schema), (1, 1));
    }

    #[derive(Default)]
    struct InfoVisitor {
        coordinates: Vec<String>,
    }

    impl<'a> Visitor<'a> for InfoVisitor {
        fn enter_argument(
            &mut self,
            _ctx: &mut (),
            _argument: &'a SchemaInputField<'a>,
            info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.coordinates.push(info.path.to_string());
            VisitFlow::Next
        }

        fn enter_enum_value(
            &mut self,
            _ctx: &mut (),
            _enum_value: &'a SchemaEnumValue<'a>,
            info: &VisitInfo<'a>,
        ) -> VisitFlow {
            if info.path.type_name() == Some("Status") {
                self.coordinates.push(info.path.to_string());
            }
            VisitFlow::Next
        }

        fn enter_object(
            &mut self,
            _ctx: &mut (),
            object: &'a SchemaObject<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            if object.name.starts_with("__") {
                VisitFlow::Skip
            } else {
                VisitFlow::Next
            }
        }
    }

    #[test]
    fn visit_info_path() {
        let ctx = SchemaContext::new();
        let schema = kitchen_sink(&ctx);

        let mut visitor = InfoVisitor::default();
        schema.visit(&mut (), &mut visitor);
        assert_eq!(
            visitor.coordinates,
            [
                "@include(if:)",
                "@skip(if:)",
                "@deprecated(reason:)",
                "Query.todos(filter:)",
                "Status.OPEN",
                "Status.DONE",
            ]
        );
    }
}
