//! Matching of properties by declared type and name.

use std::any::Any;

use tracing::trace;

use super::RequestSpecification;
use crate::config::MatchConfig;
use crate::criterion::{Equatable, NameCriterion};
use crate::error::{Result, require};
use crate::reflection::{PropertyInfo, TypeDescriptor};

/// Satisfied by [`PropertyInfo`] requests with exactly the target type and a
/// matching name. Parameters with the same name never match.
#[derive(Debug, Clone)]
pub struct PropertySpecification {
    target_type: TypeDescriptor,
    name: NameCriterion,
}

impl PropertySpecification {
    pub fn new(target_type: TypeDescriptor, target_name: impl Into<String>) -> Self {
        Self::with_config(target_type, target_name, &MatchConfig::default())
    }

    pub fn with_config(
        target_type: TypeDescriptor,
        target_name: impl Into<String>,
        config: &MatchConfig,
    ) -> Self {
        Self {
            target_type,
            name: NameCriterion::new(target_name, config.name_comparison),
        }
    }

    pub fn try_new(
        target_type: Option<TypeDescriptor>,
        target_name: Option<&str>,
    ) -> Result<Self> {
        let target_type = require(target_type, "target_type")?;
        let target_name = require(target_name, "target_name")?;
        Ok(Self::new(target_type, target_name))
    }

    pub fn target_type(&self) -> TypeDescriptor {
        self.target_type
    }

    pub fn target_name(&self) -> &str {
        self.name.target()
    }
}

impl RequestSpecification for PropertySpecification {
    fn is_satisfied_by(&self, request: &dyn Any) -> bool {
        let Some(property) = request.downcast_ref::<PropertyInfo>() else {
            trace!("request is not a property");
            return false;
        };

        property.property_type() == self.target_type && self.name.equals(property.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflection::ConstructorInfo;

    struct Owner;

    fn property<T: 'static>(name: &str) -> PropertyInfo {
        PropertyInfo::new(TypeDescriptor::of::<Owner>(), TypeDescriptor::of::<T>(), name)
    }

    #[test]
    fn test_matches_property() {
        let spec = PropertySpecification::new(TypeDescriptor::of::<String>(), "Name");
        assert!(spec.is_satisfied_by(&property::<String>("Name")));
        assert!(!spec.is_satisfied_by(&property::<String>("name")));
        assert!(!spec.is_satisfied_by(&property::<&'static str>("Name")));
        assert_eq!(spec.target_name(), "Name");
    }

    #[test]
    fn test_rejects_parameter_with_same_name() {
        let spec = PropertySpecification::new(TypeDescriptor::of::<String>(), "name");
        let ctor = ConstructorInfo::new(TypeDescriptor::of::<Owner>()).with_parameter::<String>("name");
        assert!(!spec.is_satisfied_by(&ctor.parameters()[0]));
    }

    #[test]
    fn test_try_new_requires_arguments() {
        assert!(PropertySpecification::try_new(None, Some("Name")).is_err());
        assert!(PropertySpecification::try_new(Some(TypeDescriptor::of::<u8>()), None).is_err());
    }
}
