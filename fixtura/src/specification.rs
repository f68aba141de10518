//! Predicates deciding whether a request denotes a particular member.
//!
//! A request is any value handed over by the code that builds test data. It is
//! received as `&dyn Any` and recognised by downcasting: a specification only
//! inspects the shapes it knows and answers `false` for everything else.
//!
//! ```rust
//! use fixtura::{ConstructorInfo, ParameterSpecification, RequestSpecification, TypeDescriptor};
//!
//! struct Point;
//!
//! let ctor = ConstructorInfo::new(TypeDescriptor::of::<Point>())
//!     .with_parameter::<i32>("x")
//!     .with_parameter::<i32>("y");
//!
//! let spec = ParameterSpecification::new(TypeDescriptor::of::<i32>(), "y");
//! assert!(spec.is_satisfied_by(&ctor.parameters()[1]));
//! assert!(!spec.is_satisfied_by(&ctor.parameters()[0]));
//! assert!(!spec.is_satisfied_by(&"y"));
//! ```

use std::any::Any;
use std::sync::Arc;

use crate::error::{Result, require};

pub mod composite;
pub mod exact_type;
pub mod parameter;
pub mod property;

pub use composite::{
    AndRequestSpecification, FalseRequestSpecification, InverseRequestSpecification,
    OrRequestSpecification, TrueRequestSpecification,
};
pub use exact_type::ExactTypeSpecification;
pub use parameter::ParameterSpecification;
pub use property::PropertySpecification;

/// Decides whether a request satisfies a matching rule
pub trait RequestSpecification {
    /// Evaluate the request. Never fails: unknown shapes yield `false`.
    fn is_satisfied_by(&self, request: &dyn Any) -> bool;

    /// Evaluate a request that may be absent.
    ///
    /// An absent request is a contract violation reported as
    /// [`SpecificationError::ArgumentNull`](crate::SpecificationError::ArgumentNull).
    fn try_is_satisfied_by(&self, request: Option<&dyn Any>) -> Result<bool> {
        let request = require(request, "request")?;
        Ok(self.is_satisfied_by(request))
    }
}

/// Type-erased specification, shareable across threads
pub type BoxedSpecification = Box<dyn RequestSpecification + Send + Sync>;

impl<S: RequestSpecification + ?Sized> RequestSpecification for &S {
    fn is_satisfied_by(&self, request: &dyn Any) -> bool {
        (**self).is_satisfied_by(request)
    }
}

impl<S: RequestSpecification + ?Sized> RequestSpecification for Box<S> {
    fn is_satisfied_by(&self, request: &dyn Any) -> bool {
        (**self).is_satisfied_by(request)
    }
}

impl<S: RequestSpecification + ?Sized> RequestSpecification for Arc<S> {
    fn is_satisfied_by(&self, request: &dyn Any) -> bool {
        (**self).is_satisfied_by(request)
    }
}
