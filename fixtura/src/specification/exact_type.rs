//! Matching of requests for a type itself.

use std::any::Any;

use super::RequestSpecification;
use crate::reflection::TypeDescriptor;

/// Satisfied by a [`TypeDescriptor`] request describing exactly the target type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactTypeSpecification {
    target_type: TypeDescriptor,
}

impl ExactTypeSpecification {
    pub fn new(target_type: TypeDescriptor) -> Self {
        Self { target_type }
    }

    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(TypeDescriptor::of::<T>())
    }

    pub fn target_type(&self) -> TypeDescriptor {
        self.target_type
    }
}

impl RequestSpecification for ExactTypeSpecification {
    fn is_satisfied_by(&self, request: &dyn Any) -> bool {
        request
            .downcast_ref::<TypeDescriptor>()
            .is_some_and(|requested| *requested == self.target_type)
    }
}
