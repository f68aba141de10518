//! Boolean combinators over request specifications.

use std::any::Any;
use std::fmt;

use super::{BoxedSpecification, RequestSpecification};
use crate::error::{Result, SpecificationError};

/// Satisfied when every member specification is satisfied
pub struct AndRequestSpecification {
    specifications: Vec<BoxedSpecification>,
}

impl AndRequestSpecification {
    pub fn new(specifications: Vec<BoxedSpecification>) -> Result<Self> {
        if specifications.is_empty() {
            return Err(SpecificationError::empty_composite("AndRequestSpecification"));
        }
        Ok(Self { specifications })
    }

    pub fn specifications(&self) -> &[BoxedSpecification] {
        &self.specifications
    }
}

impl RequestSpecification for AndRequestSpecification {
    fn is_satisfied_by(&self, request: &dyn Any) -> bool {
        self.specifications
            .iter()
            .all(|spec| spec.is_satisfied_by(request))
    }
}

/// Satisfied when at least one member specification is satisfied
pub struct OrRequestSpecification {
    specifications: Vec<BoxedSpecification>,
}

impl OrRequestSpecification {
    pub fn new(specifications: Vec<BoxedSpecification>) -> Result<Self> {
        if specifications.is_empty() {
            return Err(SpecificationError::empty_composite("OrRequestSpecification"));
        }
        Ok(Self { specifications })
    }

    pub fn specifications(&self) -> &[BoxedSpecification] {
        &self.specifications
    }
}

impl RequestSpecification for OrRequestSpecification {
    fn is_satisfied_by(&self, request: &dyn Any) -> bool {
        self.specifications
            .iter()
            .any(|spec| spec.is_satisfied_by(request))
    }
}

/// Negates another specification
pub struct InverseRequestSpecification {
    specification: BoxedSpecification,
}

impl InverseRequestSpecification {
    pub fn new<S>(specification: S) -> Self
    where
        S: RequestSpecification + Send + Sync + 'static,
    {
        Self {
            specification: Box::new(specification),
        }
    }
}

impl RequestSpecification for InverseRequestSpecification {
    fn is_satisfied_by(&self, request: &dyn Any) -> bool {
        !self.specification.is_satisfied_by(request)
    }
}

/// Satisfied by every request
#[derive(Debug, Clone, Copy, Default)]
pub struct TrueRequestSpecification;

impl RequestSpecification for TrueRequestSpecification {
    fn is_satisfied_by(&self, _request: &dyn Any) -> bool {
        true
    }
}

/// Satisfied by no request
#[derive(Debug, Clone, Copy, Default)]
pub struct FalseRequestSpecification;

impl RequestSpecification for FalseRequestSpecification {
    fn is_satisfied_by(&self, _request: &dyn Any) -> bool {
        false
    }
}

impl fmt::Debug for AndRequestSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndRequestSpecification")
            .field("len", &self.specifications.len())
            .finish()
    }
}

impl fmt::Debug for OrRequestSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrRequestSpecification")
            .field("len", &self.specifications.len())
            .finish()
    }
}

impl fmt::Debug for InverseRequestSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InverseRequestSpecification")
            .finish_non_exhaustive()
    }
}
