use super::visitor::*;
use crate::schema::*;

/// This structure implements the `Visitor` trait and runs two child Visitors in parallel,
/// executing and calling callbacks on them both.
///
/// During traversal the Composed Visitor will keep track of the visitor's [`VisitFlow`] signals and
/// will avoid calling callbacks on them appropriately, while letting the other visitor continue as
/// usual. A visitor that skips a definition won't be called again until that definition has been
/// left, and a visitor that breaks won't be called again at all. Traversal only skips or breaks
/// when both visitors agree.
///
/// Visitors may be composed indefinitely since a Composed Visitor can be passed into another
/// Composed Visitor, as long as all visitors accept the same `Context` type.
pub struct ComposedVisitor<'a, Context, A: Visitor<'a, Context>, B: Visitor<'a, Context>> {
    _marker: std::marker::PhantomData<&'a Context>,
    depth: usize,
    skip_a: usize,
    skip_b: usize,
    pub a: A,
    pub b: B,
}

type Callback<'a, X, C, Node> = fn(&mut X, &mut C, &'a Node, &VisitInfo<'a>) -> VisitFlow;

impl<'a, C, A: Visitor<'a, C>, B: Visitor<'a, C>> ComposedVisitor<'a, C, A, B> {
    /// Composes two input visitors into one Composed Visitor.
    #[inline]
    pub fn new(a: A, b: B) -> ComposedVisitor<'a, C, A, B> {
        ComposedVisitor {
            _marker: std::marker::PhantomData,
            depth: 1,
            skip_a: usize::MAX,
            skip_b: usize::MAX,
            a,
            b,
        }
    }

    #[inline(always)]
    fn compose_flow_enter<Node: 'a>(
        &mut self,
        fn_a: Callback<'a, A, C, Node>,
        fn_b: Callback<'a, B, C, Node>,
        node: &'a Node,
        info: &VisitInfo<'a>,
        ctx: &mut C,
    ) -> VisitFlow {
        let mut descend = false;

        if self.skip_a == usize::MAX {
            match fn_a(&mut self.a, ctx, node, info) {
                VisitFlow::Next => descend = true,
                VisitFlow::Skip => self.skip_a = self.depth,
                VisitFlow::Break => self.skip_a = 0,
            }
        }

        if self.skip_b == usize::MAX {
            match fn_b(&mut self.b, ctx, node, info) {
                VisitFlow::Next => descend = true,
                VisitFlow::Skip => self.skip_b = self.depth,
                VisitFlow::Break => self.skip_b = 0,
            }
        }

        if self.skip_a == 0 && self.skip_b == 0 {
            VisitFlow::Break
        } else if descend {
            self.depth += 1;
            VisitFlow::Next
        } else {
            // Neither leave callback will be called for a skipped definition
            if self.skip_a == self.depth {
                self.skip_a = usize::MAX;
            }
            if self.skip_b == self.depth {
                self.skip_b = usize::MAX;
            }
            VisitFlow::Skip
        }
    }

    #[inline(always)]
    fn compose_flow_leave<Node: 'a>(
        &mut self,
        fn_a: Callback<'a, A, C, Node>,
        fn_b: Callback<'a, B, C, Node>,
        node: &'a Node,
        info: &VisitInfo<'a>,
        ctx: &mut C,
    ) -> VisitFlow {
        self.depth -= 1;

        if self.skip_a == usize::MAX {
            if fn_a(&mut self.a, ctx, node, info) == VisitFlow::Break {
                self.skip_a = 0;
            }
        } else if self.skip_a == self.depth {
            self.skip_a = usize::MAX;
        }

        if self.skip_b == usize::MAX {
            if fn_b(&mut self.b, ctx, node, info) == VisitFlow::Break {
                self.skip_b = 0;
            }
        } else if self.skip_b == self.depth {
            self.skip_b = usize::MAX;
        }

        if self.skip_a == 0 && self.skip_b == 0 {
            VisitFlow::Break
        } else {
            VisitFlow::Next
        }
    }
}

impl<'a, C, A: Visitor<'a, C>, B: Visitor<'a, C>> Visitor<'a, C> for ComposedVisitor<'a, C, A, B> {
    #[inline]
    fn enter_schema(
        &mut self,
        ctx: &mut C,
        schema: &'a Schema<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_enter(A::enter_schema, B::enter_schema, schema, info, ctx)
    }

    #[inline]
    fn leave_schema(
        &mut self,
        ctx: &mut C,
        schema: &'a Schema<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_leave(A::leave_schema, B::leave_schema, schema, info, ctx)
    }

    #[inline]
    fn enter_directive(
        &mut self,
        ctx: &mut C,
        directive: &'a SchemaDirective<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_enter(A::enter_directive, B::enter_directive, directive, info, ctx)
    }

    #[inline]
    fn leave_directive(
        &mut self,
        ctx: &mut C,
        directive: &'a SchemaDirective<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_leave(A::leave_directive, B::leave_directive, directive, info, ctx)
    }

    #[inline]
    fn enter_object(
        &mut self,
        ctx: &mut C,
        object: &'a SchemaObject<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_enter(A::enter_object, B::enter_object, object, info, ctx)
    }

    #[inline]
    fn leave_object(
        &mut self,
        ctx: &mut C,
        object: &'a SchemaObject<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_leave(A::leave_object, B::leave_object, object, info, ctx)
    }

    #[inline]
    fn enter_interface(
        &mut self,
        ctx: &mut C,
        interface: &'a SchemaInterface<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_enter(A::enter_interface, B::enter_interface, interface, info, ctx)
    }

    #[inline]
    fn leave_interface(
        &mut self,
        ctx: &mut C,
        interface: &'a SchemaInterface<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_leave(A::leave_interface, B::leave_interface, interface, info, ctx)
    }

    #[inline]
    fn enter_union(
        &mut self,
        ctx: &mut C,
        union_type: &'a SchemaUnion<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_enter(A::enter_union, B::enter_union, union_type, info, ctx)
    }

    #[inline]
    fn leave_union(
        &mut self,
        ctx: &mut C,
        union_type: &'a SchemaUnion<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_leave(A::leave_union, B::leave_union, union_type, info, ctx)
    }

    #[inline]
    fn enter_enum(
        &mut self,
        ctx: &mut C,
        enum_type: &'a SchemaEnum<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_enter(A::enter_enum, B::enter_enum, enum_type, info, ctx)
    }

    #[inline]
    fn leave_enum(
        &mut self,
        ctx: &mut C,
        enum_type: &'a SchemaEnum<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_leave(A::leave_enum, B::leave_enum, enum_type, info, ctx)
    }

    #[inline]
    fn enter_input_object(
        &mut self,
        ctx: &mut C,
        input_object: &'a SchemaInputObject<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_enter(
            A::enter_input_object,
            B::enter_input_object,
            input_object,
            info,
            ctx,
        )
    }

    #[inline]
    fn leave_input_object(
        &mut self,
        ctx: &mut C,
        input_object: &'a SchemaInputObject<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_leave(
            A::leave_input_object,
            B::leave_input_object,
            input_object,
            info,
            ctx,
        )
    }

    #[inline]
    fn enter_scalar(
        &mut self,
        ctx: &mut C,
        scalar: &'a SchemaScalar<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_enter(A::enter_scalar, B::enter_scalar, scalar, info, ctx)
    }

    #[inline]
    fn leave_scalar(
        &mut self,
        ctx: &mut C,
        scalar: &'a SchemaScalar<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_leave(A::leave_scalar, B::leave_scalar, scalar, info, ctx)
    }

    #[inline]
    fn enter_field(
        &mut self,
        ctx: &mut C,
        field: &'a SchemaField<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_enter(A::enter_field, B::enter_field, field, info, ctx)
    }

    #[inline]
    fn leave_field(
        &mut self,
        ctx: &mut C,
        field: &'a SchemaField<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_leave(A::leave_field, B::leave_field, field, info, ctx)
    }

    #[inline]
    fn enter_argument(
        &mut self,
        ctx: &mut C,
        argument: &'a SchemaInputField<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_enter(A::enter_argument, B::enter_argument, argument, info, ctx)
    }

    #[inline]
    fn leave_argument(
        &mut self,
        ctx: &mut C,
        argument: &'a SchemaInputField<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_leave(A::leave_argument, B::leave_argument, argument, info, ctx)
    }

    #[inline]
    fn enter_input_field(
        &mut self,
        ctx: &mut C,
        input_field: &'a SchemaInputField<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_enter(
            A::enter_input_field,
            B::enter_input_field,
            input_field,
            info,
            ctx,
        )
    }

    #[inline]
    fn leave_input_field(
        &mut self,
        ctx: &mut C,
        input_field: &'a SchemaInputField<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_leave(
            A::leave_input_field,
            B::leave_input_field,
            input_field,
            info,
            ctx,
        )
    }

    #[inline]
    fn enter_enum_value(
        &mut self,
        ctx: &mut C,
        enum_value: &'a SchemaEnumValue<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_enter(A::enter_enum_value, B::enter_enum_value, enum_value, info, ctx)
    }

    #[inline]
    fn leave_enum_value(
        &mut self,
        ctx: &mut C,
        enum_value: &'a SchemaEnumValue<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.compose_flow_leave(A::leave_enum_value, B::leave_enum_value, enum_value, info, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::super::visitor::tests::*;
    use super::super::VisitNode;
    use super::*;

    #[derive(Debug, PartialEq, Default)]
    struct SkipVisitor {
        pub(crate) enter_object: usize,
        pub(crate) leave_object: usize,
        pub(crate) enter_field: usize,
        pub(crate) enter_argument: usize,
    }

    impl<'a> Visitor<'a, ()> for SkipVisitor {
        fn enter_object(
            &mut self,
            _: &mut (),
            _object: &'a SchemaObject<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.enter_object += 1;
            VisitFlow::Skip
        }
        fn leave_object(
            &mut self,
            _: &mut (),
            _object: &'a SchemaObject<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.leave_object += 1;
            VisitFlow::Next
        }

        fn enter_field(
            &mut self,
            _: &mut (),
            _field: &'a SchemaField<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.enter_field += 1;
            VisitFlow::Next
        }

        fn enter_argument(
            &mut self,
            _: &mut (),
            _argument: &'a SchemaInputField<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.enter_argument += 1;
            VisitFlow::Next
        }
    }

    #[derive(Debug, PartialEq, Default)]
    struct BreakVisitor {
        pub(crate) enter_enum: usize,
        pub(crate) enter_scalar: usize,
    }

    impl<'a> Visitor<'a, ()> for BreakVisitor {
        fn enter_enum(
            &mut self,
            _: &mut (),
            _enum_type: &'a SchemaEnum<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.enter_enum += 1;
            VisitFlow::Break
        }

        fn enter_scalar(
            &mut self,
            _: &mut (),
            _scalar: &'a SchemaScalar<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            self.enter_scalar += 1;
            VisitFlow::Next
        }
    }

    #[test]
    fn skips_independently() {
        let ctx = SchemaContext::new();
        let schema = kitchen_sink(&ctx);
        let mut visitor = ComposedVisitor::new(CountVisitor::default(), SkipVisitor::default());
        schema.visit(&mut (), &mut visitor);

        let mut expected = CountVisitor::default();
        schema.visit(&mut (), &mut expected);
        assert_eq!(visitor.a, expected);

        assert_eq!(
            visitor.b,
            SkipVisitor {
                enter_object: 8,
                leave_object: 0,
                // Only the field of the Node interface
                enter_field: 1,
                // Only the arguments of the three directives
                enter_argument: 3,
            }
        );
    }

    #[test]
    fn breaks_independently() {
        let ctx = SchemaContext::new();
        let schema = kitchen_sink(&ctx);
        let mut visitor = BreakVisitor::default().compose(CountVisitor::default());
        let flow = schema.visit(&mut (), &mut visitor);
        assert_eq!(flow, VisitFlow::Next);

        let mut expected = CountVisitor::default();
        schema.visit(&mut (), &mut expected);
        assert_eq!(visitor.b, expected);
        // ID and String come before Status in the type map while Boolean comes after it
        assert_eq!(
            visitor.a,
            BreakVisitor {
                enter_enum: 1,
                enter_scalar: 2,
            }
        );
    }
}
