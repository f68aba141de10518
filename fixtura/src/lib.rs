//! # Fixtura - Request specifications for test data generation
//!
//! While building test data, a fixture resolves requests: constructor
//! parameters, properties, or types it needs a value for. Fixtura provides the
//! predicates that decide whether a given request is the one a customization
//! targets, together with the member metadata those predicates inspect.
//!
//! ## Quick Start
//!
//! ```rust
//! use fixtura::{ParameterSpecification, Reflect, RequestSpecification, TypeDescriptor};
//!
//! #[derive(Reflect)]
//! struct Account {
//!     owner: String,
//!     balance: i64,
//! }
//!
//! let ctor = Account::constructors().remove(0);
//! let spec = ParameterSpecification::new(TypeDescriptor::of::<i64>(), "balance");
//!
//! assert!(spec.is_satisfied_by(&ctor.parameters()[1]));
//! assert!(!spec.is_satisfied_by(&ctor.parameters()[0]));
//! assert!(!spec.is_satisfied_by(&"balance"));
//! ```

// Public modules
pub mod config;
pub mod criterion;
pub mod error;
pub mod reflection;
pub mod specification;

// Re-export the main public API
pub use config::{ConfigError, MatchConfig, NameComparison};
pub use criterion::{
    BoxedEquatable, Criterion, Equatable, NameCriterion, ParameterTypeAndNameCriterion,
};
pub use error::{Result, SpecificationError};
pub use reflection::{
    ConstructorInfo, MemberRef, MethodInfo, ParameterInfo, PropertyInfo, Reflect, TypeDescriptor,
};
pub use specification::{
    AndRequestSpecification, BoxedSpecification, ExactTypeSpecification,
    FalseRequestSpecification, InverseRequestSpecification, OrRequestSpecification,
    ParameterSpecification, PropertySpecification, RequestSpecification,
    TrueRequestSpecification,
};

// Re-export derive macro from separate crate when derive feature is enabled
#[cfg(feature = "derive")]
pub use fixtura_derive::Reflect;
