use std::fmt;

use super::context::SchemaContext;
use super::definition::SchemaType;

/// A reference to a type as it's used by fields, arguments, and input fields.
///
/// Type references wrap a named type in any number of List and Non-Null modifiers. A Non-Null
/// modifier may only ever wrap a [NullableType], so a non-null of a non-null type can't be
/// expressed.
/// [Reference](https://spec.graphql.org/October2021/#sec-Wrapping-Types)
#[derive(Clone, Copy)]
pub enum TypeRef<'a> {
    Type(SchemaType<'a>),
    ListType(&'a TypeRef<'a>),
    NonNullType(NullableType<'a>),
}

/// The inner type of a Non-Null type reference, which is either a named type or a list.
#[derive(Clone, Copy)]
pub enum NullableType<'a> {
    Type(SchemaType<'a>),
    ListType(&'a TypeRef<'a>),
}

impl<'a> TypeRef<'a> {
    #[inline]
    pub fn named<T: Into<SchemaType<'a>>>(named_type: T) -> Self {
        TypeRef::Type(named_type.into())
    }

    /// Wraps a type reference in a List type.
    #[inline]
    pub fn list(ctx: &'a SchemaContext, of_type: TypeRef<'a>) -> Self {
        TypeRef::ListType(ctx.alloc(of_type))
    }

    /// Wraps this type reference in a Non-Null type, unless it's already non-nullable.
    #[inline]
    pub fn non_null(self) -> Self {
        match self {
            TypeRef::Type(named_type) => TypeRef::NonNullType(NullableType::Type(named_type)),
            TypeRef::ListType(of_type) => TypeRef::NonNullType(NullableType::ListType(of_type)),
            TypeRef::NonNullType(_) => self,
        }
    }

    /// Strips a Non-Null modifier from this type reference if it has one.
    #[inline]
    pub fn nullable(self) -> Self {
        match self {
            TypeRef::NonNullType(of_type) => of_type.into(),
            _ => self,
        }
    }

    /// Returns the type that's directly wrapped by this reference, if it's a wrapping type.
    #[inline]
    pub fn of_type(&self) -> Option<TypeRef<'a>> {
        match self {
            TypeRef::Type(_) => None,
            TypeRef::ListType(of_type) => Some(**of_type),
            TypeRef::NonNullType(of_type) => Some((*of_type).into()),
        }
    }

    /// Unwraps all List and Non-Null modifiers and returns the innermost named type.
    pub fn named_type(&self) -> SchemaType<'a> {
        let mut type_ref = *self;
        loop {
            match type_ref {
                TypeRef::Type(named_type) => return named_type,
                TypeRef::ListType(of_type) => type_ref = *of_type,
                TypeRef::NonNullType(NullableType::Type(named_type)) => return named_type,
                TypeRef::NonNullType(NullableType::ListType(of_type)) => type_ref = *of_type,
            }
        }
    }

    #[inline]
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNullType(_))
    }

    /// Returns whether this is a list type, ignoring an outer Non-Null modifier.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            TypeRef::ListType(_) | TypeRef::NonNullType(NullableType::ListType(_))
        )
    }

    #[inline]
    pub fn is_input_type(&self) -> bool {
        self.named_type().is_input_type()
    }

    #[inline]
    pub fn is_output_type(&self) -> bool {
        self.named_type().is_output_type()
    }
}

impl<'a> SchemaType<'a> {
    /// Creates a Non-Null type reference to this named type.
    #[inline]
    pub fn non_null(self) -> TypeRef<'a> {
        TypeRef::NonNullType(NullableType::Type(self))
    }
}

impl<'a> From<SchemaType<'a>> for TypeRef<'a> {
    #[inline]
    fn from(named_type: SchemaType<'a>) -> Self {
        TypeRef::Type(named_type)
    }
}

impl<'a> From<NullableType<'a>> for TypeRef<'a> {
    #[inline]
    fn from(nullable_type: NullableType<'a>) -> Self {
        match nullable_type {
            NullableType::Type(named_type) => TypeRef::Type(named_type),
            NullableType::ListType(of_type) => TypeRef::ListType(of_type),
        }
    }
}

impl<'a> fmt::Display for TypeRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Type(named_type) => f.write_str(named_type.name()),
            TypeRef::ListType(of_type) => write!(f, "[{}]", of_type),
            TypeRef::NonNullType(of_type) => write!(f, "{}!", TypeRef::from(*of_type)),
        }
    }
}

/// Named types are only printed by name, since printing them in full could recurse endlessly.
impl<'a> fmt::Debug for TypeRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(arg0) => f.debug_tuple("Type").field(&arg0.name()).finish(),
            Self::ListType(arg0) => f.debug_tuple("ListType").field(arg0).finish(),
            Self::NonNullType(arg0) => f
                .debug_tuple("NonNullType")
                .field(&TypeRef::from(*arg0))
                .finish(),
        }
    }
}

impl<'a> fmt::Debug for NullableType<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&TypeRef::from(*self), f)
    }
}

/// Type references are compared structurally, while named types are compared by name.
/// Within one schema a name identifies exactly one definition.
impl<'a> PartialEq for TypeRef<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Type(left), Self::Type(right)) => left.name() == right.name(),
            (Self::ListType(left), Self::ListType(right)) => left == right,
            (Self::NonNullType(left), Self::NonNullType(right)) => left == right,
            _ => false,
        }
    }
}

impl<'a> PartialEq for NullableType<'a> {
    fn eq(&self, other: &Self) -> bool {
        TypeRef::from(*self) == TypeRef::from(*other)
    }
}
