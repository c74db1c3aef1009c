use std::cell::OnceCell;
use std::fmt;

use super::context::SchemaContext;
use super::introspection::is_introspection_type;
use super::type_ref::TypeRef;
use crate::error::{Error, Location, Result};

/// A list of definitions that's declared together with its owner but defined later.
///
/// Types commonly reference each other in cycles, e.g. an object's field returns an interface
/// which the object itself implements. A type is therefore allocated first and its fields,
/// interfaces, or member types are defined once all referenced types exist. A thunk may only be
/// defined once and reads as an empty list until it's been defined.
pub struct Thunk<'a, T> {
    cell: OnceCell<&'a [T]>,
}

impl<'a, T> Thunk<'a, T> {
    #[inline]
    pub fn new() -> Self {
        Thunk {
            cell: OnceCell::new(),
        }
    }

    /// Returns whether the list has been defined yet.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Returns the defined list or an empty list if it hasn't been defined yet.
    #[inline]
    pub fn get(&self) -> &'a [T] {
        self.cell.get().copied().unwrap_or(&[])
    }

    /// Sets the list of a definition that's known to be fresh.
    ///
    /// This is only used for built-in definitions that are allocated and defined in one go, so the
    /// list can't have been defined before.
    pub(crate) fn init(&self, items: &'a [T]) {
        let result = self.cell.set(items);
        debug_assert!(result.is_ok(), "a built-in definition was initialized twice");
    }

    fn define<I>(
        &self,
        ctx: &'a SchemaContext,
        items: I,
        owner: &str,
        location: Option<Location>,
        kind: &str,
    ) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        if let Some(defined) = self.cell.get() {
            return Err(redefinition_error(owner, location, kind, defined.len()));
        }
        let items = ctx.alloc_slice(items);
        self.cell
            .set(items)
            .map_err(|_| redefinition_error(owner, location, kind, self.get().len()))
    }
}

fn redefinition_error(owner: &str, location: Option<Location>, kind: &str, count: usize) -> Error {
    Error::new_with_context(
        format!("The {kind} of \"{owner}\" may only be defined once."),
        location,
        format!("\"{owner}\" already defines {count} {kind}."),
        None,
    )
}

impl<'a, T> Default for Thunk<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Thunk<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.get().iter()).finish()
    }
}

/// The kind of a GraphQL type, as it's exposed by `__TypeKind` during introspection.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-The-__Type-Type)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    pub const ALL: [TypeKind; 8] = [
        TypeKind::Scalar,
        TypeKind::Object,
        TypeKind::Interface,
        TypeKind::Union,
        TypeKind::Enum,
        TypeKind::InputObject,
        TypeKind::List,
        TypeKind::NonNull,
    ];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::List => "LIST",
            TypeKind::NonNull => "NON_NULL",
        }
    }
}

/// Generic trait for any schema type that implements fields
pub trait SchemaFields<'a>: Sized {
    /// Defines the list of [SchemaField]s, which may only happen once
    fn define_fields<I>(&self, ctx: &'a SchemaContext, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = SchemaField<'a>>;

    /// Get the list of all fields in definition order
    fn get_fields(&self) -> &'a [SchemaField<'a>];

    /// Get a known field by name
    #[inline]
    fn get_field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        self.get_fields().iter().find(|field| field.name == name)
    }
}

/// Generic trait for any schema type that implements interfaces
pub trait SchemaInterfaces<'a>: Sized {
    /// Defines the list of implemented interfaces, which may only happen once
    ///
    /// Any named type is accepted here; implementing a type that isn't an interface is reported
    /// by schema validation.
    fn define_interfaces<I>(&self, ctx: &'a SchemaContext, interfaces: I) -> Result<()>
    where
        I: IntoIterator<Item = SchemaType<'a>>;

    /// Get list of implemented interfaces
    fn get_interfaces(&self) -> &'a [SchemaType<'a>];

    /// Checks whether the given [SchemaInterface] is declared as being implemented
    #[inline]
    fn implements_interface(&self, schema_interface: &SchemaInterface<'a>) -> bool {
        self.get_interfaces()
            .iter()
            .any(|interface| interface.name() == schema_interface.name)
    }
}

/// An Object type definition.
///
/// Most types in GraphQL are objects and define a set of fields and the interfaces they implement.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug)]
pub struct SchemaObject<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<Location>,
    pub(crate) fields: Thunk<'a, SchemaField<'a>>,
    pub(crate) interfaces: Thunk<'a, SchemaType<'a>>,
}

impl<'a> SchemaObject<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaObject {
            name,
            description: None,
            location: None,
            fields: Thunk::new(),
            interfaces: Thunk::new(),
        }
    }

    #[inline]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    #[inline]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

impl<'a> SchemaFields<'a> for SchemaObject<'a> {
    fn define_fields<I>(&self, ctx: &'a SchemaContext, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = SchemaField<'a>>,
    {
        self.fields.define(ctx, fields, self.name, self.location, "fields")
    }

    #[inline]
    fn get_fields(&self) -> &'a [SchemaField<'a>] {
        self.fields.get()
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaObject<'a> {
    fn define_interfaces<I>(&self, ctx: &'a SchemaContext, interfaces: I) -> Result<()>
    where
        I: IntoIterator<Item = SchemaType<'a>>,
    {
        self.interfaces.define(ctx, interfaces, self.name, self.location, "interfaces")
    }

    #[inline]
    fn get_interfaces(&self) -> &'a [SchemaType<'a>] {
        self.interfaces.get()
    }
}

/// An Interface type definition.
///
/// Any object or other interfaces may implement one or more interfaces and must then adhere to the
/// definition of this interface. A field that returns an interface as its return type may return
/// any object that implements this interface.
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug)]
pub struct SchemaInterface<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<Location>,
    pub(crate) fields: Thunk<'a, SchemaField<'a>>,
    pub(crate) interfaces: Thunk<'a, SchemaType<'a>>,
}

impl<'a> SchemaInterface<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaInterface {
            name,
            description: None,
            location: None,
            fields: Thunk::new(),
            interfaces: Thunk::new(),
        }
    }

    #[inline]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    #[inline]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

impl<'a> SchemaFields<'a> for SchemaInterface<'a> {
    fn define_fields<I>(&self, ctx: &'a SchemaContext, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = SchemaField<'a>>,
    {
        self.fields.define(ctx, fields, self.name, self.location, "fields")
    }

    #[inline]
    fn get_fields(&self) -> &'a [SchemaField<'a>] {
        self.fields.get()
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaInterface<'a> {
    fn define_interfaces<I>(&self, ctx: &'a SchemaContext, interfaces: I) -> Result<()>
    where
        I: IntoIterator<Item = SchemaType<'a>>,
    {
        self.interfaces.define(ctx, interfaces, self.name, self.location, "interfaces")
    }

    #[inline]
    fn get_interfaces(&self) -> &'a [SchemaType<'a>] {
        self.interfaces.get()
    }
}

/// An object Field type definition.
///
/// A field is like a function that given its arguments as input values produces an output value.
/// [Reference](https://spec.graphql.org/October2021/#FieldsDefinition)
#[derive(Debug, Clone, Copy)]
pub struct SchemaField<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub arguments: &'a [SchemaInputField<'a>],
    pub output_type: TypeRef<'a>,
    pub deprecation_reason: Option<&'a str>,
    pub location: Option<Location>,
}

impl<'a> SchemaField<'a> {
    #[inline]
    pub fn new(name: &'a str, output_type: TypeRef<'a>) -> Self {
        SchemaField {
            name,
            description: None,
            arguments: &[],
            output_type,
            deprecation_reason: None,
            location: None,
        }
    }

    pub fn with_arguments<I>(mut self, ctx: &'a SchemaContext, arguments: I) -> Self
    where
        I: IntoIterator<Item = SchemaInputField<'a>>,
    {
        self.arguments = ctx.alloc_slice(arguments);
        self
    }

    #[inline]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    #[inline]
    pub fn deprecated(mut self, reason: &'a str) -> Self {
        self.deprecation_reason = Some(reason);
        self
    }

    #[inline]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&'a SchemaInputField<'a>> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

/// An input value definition, used for field arguments, directive arguments, and the fields of
/// input objects alike.
///
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[derive(Debug, Clone, Copy)]
pub struct SchemaInputField<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub input_type: TypeRef<'a>,
    /// The default value, printed as a GraphQL literal, e.g. `"10"` or `"\"text\""`.
    pub default_value: Option<&'a str>,
    pub deprecation_reason: Option<&'a str>,
    pub location: Option<Location>,
}

impl<'a> SchemaInputField<'a> {
    #[inline]
    pub fn new(name: &'a str, input_type: TypeRef<'a>) -> Self {
        SchemaInputField {
            name,
            description: None,
            input_type,
            default_value: None,
            deprecation_reason: None,
            location: None,
        }
    }

    #[inline]
    pub fn with_default_value(mut self, default_value: &'a str) -> Self {
        self.default_value = Some(default_value);
        self
    }

    #[inline]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    #[inline]
    pub fn deprecated(mut self, reason: &'a str) -> Self {
        self.deprecation_reason = Some(reason);
        self
    }

    #[inline]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// An input value is required when it's non-nullable and has no default value.
    #[inline]
    pub fn is_required(&self) -> bool {
        self.input_type.is_non_null() && self.default_value.is_none()
    }
}

/// A Union type definition.
///
/// A union contains a list of possible types that can be returned in its stead when its defined as
/// an output type.
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug)]
pub struct SchemaUnion<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<Location>,
    pub(crate) types: Thunk<'a, SchemaType<'a>>,
}

impl<'a> SchemaUnion<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaUnion {
            name,
            description: None,
            location: None,
            types: Thunk::new(),
        }
    }

    #[inline]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    #[inline]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Defines the union's member types, which may only happen once.
    pub fn define_types<I>(&self, ctx: &'a SchemaContext, types: I) -> Result<()>
    where
        I: IntoIterator<Item = SchemaType<'a>>,
    {
        self.types.define(ctx, types, self.name, self.location, "member types")
    }

    /// Get list of possible member types
    #[inline]
    pub fn get_possible_types(&self) -> &'a [SchemaType<'a>] {
        self.types.get()
    }

    /// Get a specific possible type by name if it exists on the type
    #[inline]
    pub fn get_possible_type(&self, name: &str) -> Option<SchemaType<'a>> {
        self.get_possible_types()
            .iter()
            .find(|possible_type| possible_type.name() == name)
            .copied()
    }
}

/// A Scalar type definition.
///
/// Scalars represent primitive leaf values in GraphQL that are represented with a specific
/// serializer and deserializer, which makes the values returnable to a GraphQL client or readable
/// by a GraphQL API.
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaScalar<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<Location>,
}

impl<'a> SchemaScalar<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaScalar {
            name,
            description: None,
            location: None,
        }
    }

    #[inline]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    #[inline]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

/// An Enum type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, Clone)]
pub struct SchemaEnum<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<Location>,
    pub values: &'a [SchemaEnumValue<'a>],
}

impl<'a> SchemaEnum<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaEnum {
            name,
            description: None,
            location: None,
            values: &[],
        }
    }

    pub fn with_values<I>(mut self, ctx: &'a SchemaContext, values: I) -> Self
    where
        I: IntoIterator<Item = SchemaEnumValue<'a>>,
    {
        self.values = ctx.alloc_slice(values);
        self
    }

    #[inline]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    #[inline]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    #[inline]
    pub fn get_value(&self, name: &str) -> Option<&'a SchemaEnumValue<'a>> {
        self.values.iter().find(|value| value.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemaEnumValue<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub deprecation_reason: Option<&'a str>,
    pub location: Option<Location>,
}

impl<'a> SchemaEnumValue<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaEnumValue {
            name,
            description: None,
            deprecation_reason: None,
            location: None,
        }
    }

    #[inline]
    pub fn deprecated(mut self, reason: &'a str) -> Self {
        self.deprecation_reason = Some(reason);
        self
    }

    #[inline]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

/// An Input Object type definition.
///
/// Inputs, such as arguments, may sometimes be nested and accept objects that must adhere to the
/// shape of an Input Object definition. This is often used to represent more complex inputs.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug)]
pub struct SchemaInputObject<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<Location>,
    pub(crate) fields: Thunk<'a, SchemaInputField<'a>>,
}

impl<'a> SchemaInputObject<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaInputObject {
            name,
            description: None,
            location: None,
            fields: Thunk::new(),
        }
    }

    #[inline]
    pub fn with_description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    #[inline]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Defines the input object's fields, which may only happen once.
    pub fn define_fields<I>(&self, ctx: &'a SchemaContext, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = SchemaInputField<'a>>,
    {
        self.fields.define(ctx, fields, self.name, self.location, "fields")
    }

    #[inline]
    pub fn get_fields(&self) -> &'a [SchemaInputField<'a>] {
        self.fields.get()
    }

    #[inline]
    pub fn get_field(&self, name: &str) -> Option<&'a SchemaInputField<'a>> {
        self.get_fields().iter().find(|field| field.name == name)
    }
}

/// A named type enum that represents all possible GraphQL definition types.
///
/// Two `SchemaType`s are equal only when they point at the same definition.
/// [Reference](https://spec.graphql.org/October2021/#sec-Types)
#[derive(Clone, Copy)]
pub enum SchemaType<'a> {
    InputObject(&'a SchemaInputObject<'a>),
    Object(&'a SchemaObject<'a>),
    Union(&'a SchemaUnion<'a>),
    Interface(&'a SchemaInterface<'a>),
    Scalar(&'a SchemaScalar<'a>),
    Enum(&'a SchemaEnum<'a>),
}

impl<'a> SchemaType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            SchemaType::InputObject(x) => x.name,
            SchemaType::Object(x) => x.name,
            SchemaType::Union(x) => x.name,
            SchemaType::Interface(x) => x.name,
            SchemaType::Scalar(x) => x.name,
            SchemaType::Enum(x) => x.name,
        }
    }

    #[inline]
    pub fn description(&self) -> Option<&'a str> {
        match self {
            SchemaType::InputObject(x) => x.description,
            SchemaType::Object(x) => x.description,
            SchemaType::Union(x) => x.description,
            SchemaType::Interface(x) => x.description,
            SchemaType::Scalar(x) => x.description,
            SchemaType::Enum(x) => x.description,
        }
    }

    #[inline]
    pub fn location(&self) -> Option<Location> {
        match self {
            SchemaType::InputObject(x) => x.location,
            SchemaType::Object(x) => x.location,
            SchemaType::Union(x) => x.location,
            SchemaType::Interface(x) => x.location,
            SchemaType::Scalar(x) => x.location,
            SchemaType::Enum(x) => x.location,
        }
    }

    #[inline]
    pub fn kind(&self) -> TypeKind {
        match self {
            SchemaType::InputObject(_) => TypeKind::InputObject,
            SchemaType::Object(_) => TypeKind::Object,
            SchemaType::Union(_) => TypeKind::Union,
            SchemaType::Interface(_) => TypeKind::Interface,
            SchemaType::Scalar(_) => TypeKind::Scalar,
            SchemaType::Enum(_) => TypeKind::Enum,
        }
    }

    pub fn object(&self) -> Option<&'a SchemaObject<'a>> {
        match self {
            SchemaType::Object(x) => Some(x),
            _ => None,
        }
    }

    pub fn input_object(&self) -> Option<&'a SchemaInputObject<'a>> {
        match self {
            SchemaType::InputObject(x) => Some(x),
            _ => None,
        }
    }

    pub fn interface(&self) -> Option<&'a SchemaInterface<'a>> {
        match self {
            SchemaType::Interface(x) => Some(x),
            _ => None,
        }
    }

    pub fn union_type(&self) -> Option<&'a SchemaUnion<'a>> {
        match self {
            SchemaType::Union(x) => Some(x),
            _ => None,
        }
    }

    pub fn enum_type(&self) -> Option<&'a SchemaEnum<'a>> {
        match self {
            SchemaType::Enum(x) => Some(x),
            _ => None,
        }
    }

    pub fn scalar(&self) -> Option<&'a SchemaScalar<'a>> {
        match self {
            SchemaType::Scalar(x) => Some(x),
            _ => None,
        }
    }

    /// Scalars, Enums, and Input Objects may be used as argument and input field types.
    #[inline]
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            SchemaType::Scalar(_) | SchemaType::Enum(_) | SchemaType::InputObject(_)
        )
    }

    /// Everything but Input Objects may be returned by fields.
    #[inline]
    pub fn is_output_type(&self) -> bool {
        !matches!(self, SchemaType::InputObject(_))
    }

    #[inline]
    pub fn is_leaf_type(&self) -> bool {
        matches!(self, SchemaType::Scalar(_) | SchemaType::Enum(_))
    }

    #[inline]
    pub fn is_composite_type(&self) -> bool {
        matches!(
            self,
            SchemaType::Object(_) | SchemaType::Interface(_) | SchemaType::Union(_)
        )
    }

    /// Interfaces and Unions are abstract, since they're resolved to an Object type at runtime.
    #[inline]
    pub fn is_abstract_type(&self) -> bool {
        matches!(self, SchemaType::Interface(_) | SchemaType::Union(_))
    }

    #[inline]
    pub fn is_introspection_type(&self) -> bool {
        is_introspection_type(self.name())
    }
}

/// This implementation is necessary to circuit break circular types.
/// Without this impl, `PartialEq` would never stop comparing types referencing each other.
/// We achieve this by only ever comparing the identity of the referenced definitions.
impl<'a> PartialEq for SchemaType<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InputObject(left), Self::InputObject(right)) => std::ptr::eq(*left, *right),
            (Self::Object(left), Self::Object(right)) => std::ptr::eq(*left, *right),
            (Self::Union(left), Self::Union(right)) => std::ptr::eq(*left, *right),
            (Self::Interface(left), Self::Interface(right)) => std::ptr::eq(*left, *right),
            (Self::Scalar(left), Self::Scalar(right)) => std::ptr::eq(*left, *right),
            (Self::Enum(left), Self::Enum(right)) => std::ptr::eq(*left, *right),
            _ => false,
        }
    }
}

impl<'a> Eq for SchemaType<'a> {}

/// This implementation is necessary to circuit break circular types.
/// Without this impl, `Debug` would print on and on, overflowing the stack as it's bouncing between types over and over.
impl<'a> fmt::Debug for SchemaType<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputObject(x) => f.debug_tuple("InputObject").field(&x.name).finish(),
            Self::Object(x) => f.debug_tuple("Object").field(&x.name).finish(),
            Self::Union(x) => f.debug_tuple("Union").field(&x.name).finish(),
            Self::Interface(x) => f.debug_tuple("Interface").field(&x.name).finish(),
            Self::Scalar(x) => f.debug_tuple("Scalar").field(&x.name).finish(),
            Self::Enum(x) => f.debug_tuple("Enum").field(&x.name).finish(),
        }
    }
}

impl<'a> fmt::Display for SchemaType<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'a> From<&'a SchemaObject<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_object: &'a SchemaObject<'a>) -> Self {
        SchemaType::Object(schema_object)
    }
}

impl<'a> From<&'a SchemaUnion<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_union: &'a SchemaUnion<'a>) -> Self {
        SchemaType::Union(schema_union)
    }
}

impl<'a> From<&'a SchemaInterface<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_interface: &'a SchemaInterface<'a>) -> Self {
        SchemaType::Interface(schema_interface)
    }
}

impl<'a> From<&'a SchemaScalar<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_scalar: &'a SchemaScalar<'a>) -> Self {
        SchemaType::Scalar(schema_scalar)
    }
}

impl<'a> From<&'a SchemaEnum<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_enum: &'a SchemaEnum<'a>) -> Self {
        SchemaType::Enum(schema_enum)
    }
}

impl<'a> From<&'a SchemaInputObject<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_input_object: &'a SchemaInputObject<'a>) -> Self {
        SchemaType::InputObject(schema_input_object)
    }
}

fn expected(schema_type: SchemaType, kind: &str) -> Error {
    Error::new(
        format!("Expected {} to be a GraphQL {kind} type.", schema_type.name()),
        None,
    )
}

pub fn assert_object_type(schema_type: SchemaType<'_>) -> Result<&SchemaObject<'_>> {
    schema_type
        .object()
        .ok_or_else(|| expected(schema_type, "Object"))
}

pub fn assert_interface_type(schema_type: SchemaType<'_>) -> Result<&SchemaInterface<'_>> {
    schema_type
        .interface()
        .ok_or_else(|| expected(schema_type, "Interface"))
}

pub fn assert_union_type(schema_type: SchemaType<'_>) -> Result<&SchemaUnion<'_>> {
    schema_type
        .union_type()
        .ok_or_else(|| expected(schema_type, "Union"))
}

pub fn assert_enum_type(schema_type: SchemaType<'_>) -> Result<&SchemaEnum<'_>> {
    schema_type
        .enum_type()
        .ok_or_else(|| expected(schema_type, "Enum"))
}

pub fn assert_input_object_type(schema_type: SchemaType<'_>) -> Result<&SchemaInputObject<'_>> {
    schema_type
        .input_object()
        .ok_or_else(|| expected(schema_type, "Input Object"))
}

pub fn assert_scalar_type(schema_type: SchemaType<'_>) -> Result<&SchemaScalar<'_>> {
    schema_type
        .scalar()
        .ok_or_else(|| expected(schema_type, "Scalar"))
}

pub fn assert_abstract_type(schema_type: SchemaType<'_>) -> Result<SchemaType<'_>> {
    if schema_type.is_abstract_type() {
        Ok(schema_type)
    } else {
        Err(expected(schema_type, "abstract"))
    }
}
