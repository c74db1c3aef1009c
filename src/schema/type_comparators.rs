use super::definition::SchemaType;
use super::schema::Schema;
use super::type_ref::TypeRef;

/// Checks whether two type references are equal, which is the case when they wrap the same named
/// type in the same sequence of List and Non-Null modifiers.
#[inline]
pub fn is_equal_type<'a>(type_a: &TypeRef<'a>, type_b: &TypeRef<'a>) -> bool {
    type_a == type_b
}

/// Checks whether a type reference may be used where a super type is expected.
///
/// A non-null type is a sub type of its nullable counterpart, lists are sub types if their item
/// types are, and objects or interfaces are sub types of the abstract types they belong to.
pub fn is_type_sub_type_of<'a>(
    schema: &Schema<'a>,
    maybe_sub_type: TypeRef<'a>,
    super_type: TypeRef<'a>,
) -> bool {
    if maybe_sub_type == super_type {
        return true;
    }

    match (maybe_sub_type, super_type) {
        (TypeRef::NonNullType(sub_type), TypeRef::NonNullType(super_type)) => {
            is_type_sub_type_of(schema, sub_type.into(), super_type.into())
        }
        (_, TypeRef::NonNullType(_)) => false,
        (TypeRef::NonNullType(sub_type), super_type) => {
            is_type_sub_type_of(schema, sub_type.into(), super_type)
        }
        (TypeRef::ListType(sub_type), TypeRef::ListType(super_type)) => {
            is_type_sub_type_of(schema, *sub_type, *super_type)
        }
        (_, TypeRef::ListType(_)) | (TypeRef::ListType(_), _) => false,
        (TypeRef::Type(sub_type), TypeRef::Type(super_type)) => {
            super_type.is_abstract_type()
                && matches!(sub_type, SchemaType::Interface(_) | SchemaType::Object(_))
                && schema.is_sub_type(super_type, sub_type)
        }
    }
}

/// Checks whether two composite types have any possible object type in common.
pub fn do_types_overlap<'a>(
    schema: &Schema<'a>,
    type_a: SchemaType<'a>,
    type_b: SchemaType<'a>,
) -> bool {
    if type_a == type_b {
        true
    } else if type_a.is_abstract_type() {
        if type_b.is_abstract_type() {
            schema
                .get_possible_types(type_a)
                .into_iter()
                .any(|object| schema.is_sub_type(type_b, SchemaType::Object(object)))
        } else {
            schema.is_sub_type(type_a, type_b)
        }
    } else if type_b.is_abstract_type() {
        schema.is_sub_type(type_b, type_a)
    } else {
        false
    }
}
