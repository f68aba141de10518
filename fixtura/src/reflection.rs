//! Explicit member metadata for types that take part in test data generation.
//!
//! Rust has no runtime reflection, so the shapes a specification inspects are
//! plain values. Types describe themselves through the [`Reflect`] trait, either
//! by hand or with `#[derive(Reflect)]`.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a concrete type.
///
/// Two descriptors are equal exactly when they describe the same type. There
/// is no notion of subtyping or assignability.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    /// Describe the type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, for diagnostics only
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeDescriptor({})", self.name)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The callable that declares a parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberRef {
    Constructor {
        declaring_type: TypeDescriptor,
    },
    Method {
        declaring_type: TypeDescriptor,
        name: String,
    },
}

impl MemberRef {
    pub fn declaring_type(&self) -> TypeDescriptor {
        match self {
            MemberRef::Constructor { declaring_type } => *declaring_type,
            MemberRef::Method { declaring_type, .. } => *declaring_type,
        }
    }
}

/// Metadata for one parameter of a constructor or method
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterInfo {
    member: MemberRef,
    position: usize,
    parameter_type: TypeDescriptor,
    name: String,
}

impl ParameterInfo {
    pub fn new(
        member: MemberRef,
        position: usize,
        parameter_type: TypeDescriptor,
        name: impl Into<String>,
    ) -> Self {
        Self {
            member,
            position,
            parameter_type,
            name: name.into(),
        }
    }

    /// The constructor or method this parameter belongs to
    pub fn member(&self) -> &MemberRef {
        &self.member
    }

    /// Zero-based position in the declaring signature
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn parameter_type(&self) -> TypeDescriptor {
        self.parameter_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Metadata for a readable member of a type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyInfo {
    declaring_type: TypeDescriptor,
    property_type: TypeDescriptor,
    name: String,
}

impl PropertyInfo {
    pub fn new(
        declaring_type: TypeDescriptor,
        property_type: TypeDescriptor,
        name: impl Into<String>,
    ) -> Self {
        Self {
            declaring_type,
            property_type,
            name: name.into(),
        }
    }

    pub fn declaring_type(&self) -> TypeDescriptor {
        self.declaring_type
    }

    pub fn property_type(&self) -> TypeDescriptor {
        self.property_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Signature of a constructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorInfo {
    declaring_type: TypeDescriptor,
    parameters: Vec<ParameterInfo>,
}

impl ConstructorInfo {
    /// Start a constructor signature for `declaring_type` with no parameters
    pub fn new(declaring_type: TypeDescriptor) -> Self {
        Self {
            declaring_type,
            parameters: Vec::new(),
        }
    }

    /// Append a parameter of type `T`
    pub fn with_parameter<T: ?Sized + 'static>(self, name: impl Into<String>) -> Self {
        self.with_parameter_of(TypeDescriptor::of::<T>(), name)
    }

    /// Append a parameter of an already described type
    pub fn with_parameter_of(
        mut self,
        parameter_type: TypeDescriptor,
        name: impl Into<String>,
    ) -> Self {
        let member = MemberRef::Constructor {
            declaring_type: self.declaring_type,
        };
        let position = self.parameters.len();
        self.parameters
            .push(ParameterInfo::new(member, position, parameter_type, name));
        self
    }

    pub fn declaring_type(&self) -> TypeDescriptor {
        self.declaring_type
    }

    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    /// Find a parameter by exact name
    pub fn parameter(&self, name: &str) -> Option<&ParameterInfo> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Parameter types in declaration order
    pub fn signature(&self) -> Vec<TypeDescriptor> {
        self.parameters.iter().map(|p| p.parameter_type).collect()
    }
}

/// Signature of a named method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    declaring_type: TypeDescriptor,
    name: String,
    parameters: Vec<ParameterInfo>,
}

impl MethodInfo {
    pub fn new(declaring_type: TypeDescriptor, name: impl Into<String>) -> Self {
        Self {
            declaring_type,
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter<T: ?Sized + 'static>(self, name: impl Into<String>) -> Self {
        self.with_parameter_of(TypeDescriptor::of::<T>(), name)
    }

    pub fn with_parameter_of(
        mut self,
        parameter_type: TypeDescriptor,
        name: impl Into<String>,
    ) -> Self {
        let member = MemberRef::Method {
            declaring_type: self.declaring_type,
            name: self.name.clone(),
        };
        let position = self.parameters.len();
        self.parameters
            .push(ParameterInfo::new(member, position, parameter_type, name));
        self
    }

    pub fn declaring_type(&self) -> TypeDescriptor {
        self.declaring_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[ParameterInfo] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterInfo> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// Types that can describe their own constructors, properties and methods
///
/// Implement by hand or with `#[derive(Reflect)]` from the `derive` feature.
pub trait Reflect: 'static {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>()
    }

    fn constructors() -> Vec<ConstructorInfo>;

    fn properties() -> Vec<PropertyInfo> {
        Vec::new()
    }

    fn methods() -> Vec<MethodInfo> {
        Vec::new()
    }

    /// Find the constructor whose parameter types are exactly `signature`
    fn constructor(signature: &[TypeDescriptor]) -> Option<ConstructorInfo> {
        Self::constructors()
            .into_iter()
            .find(|c| c.signature() == signature)
    }

    /// Find a property by exact name
    fn property(name: &str) -> Option<PropertyInfo> {
        Self::properties().into_iter().find(|p| p.name == name)
    }

    /// Find the first method with the given name
    fn method(name: &str) -> Option<MethodInfo> {
        Self::methods().into_iter().find(|m| m.name == name)
    }
}

impl Reflect for String {
    fn constructors() -> Vec<ConstructorInfo> {
        vec![
            ConstructorInfo::new(Self::type_descriptor()),
            ConstructorInfo::new(Self::type_descriptor()).with_parameter::<str>("s"),
        ]
    }

    fn methods() -> Vec<MethodInfo> {
        let string = Self::type_descriptor();
        vec![
            MethodInfo::new(string, "contains").with_parameter::<str>("pat"),
            MethodInfo::new(string, "starts_with").with_parameter::<str>("pat"),
            MethodInfo::new(string, "ends_with").with_parameter::<str>("pat"),
            MethodInfo::new(string, "push_str").with_parameter::<str>("string"),
            MethodInfo::new(string, "push").with_parameter::<char>("ch"),
        ]
    }
}
