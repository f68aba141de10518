//! Matching of constructor and method parameters.

use std::any::Any;
use std::fmt;

use tracing::trace;

use super::RequestSpecification;
use crate::config::MatchConfig;
use crate::criterion::{
    BoxedEquatable, Criterion, Equatable, NameCriterion, ParameterTypeAndNameCriterion,
};
use crate::error::{Result, require};
use crate::reflection::{ParameterInfo, TypeDescriptor};

/// Satisfied by requests that are parameters matching a criterion.
///
/// Built from a type and a name, the parameter must have exactly that declared
/// type and exactly that name. Built from a criterion, the criterion alone
/// decides. In both forms a request that is not a [`ParameterInfo`] is
/// rejected before the criterion is consulted.
pub struct ParameterSpecification {
    target: Option<(TypeDescriptor, String)>,
    criterion: BoxedEquatable<ParameterInfo>,
}

impl ParameterSpecification {
    /// Match parameters of exactly `target_type` named exactly `target_name`
    pub fn new(target_type: TypeDescriptor, target_name: impl Into<String>) -> Self {
        Self::with_config(target_type, target_name, &MatchConfig::default())
    }

    /// Like [`new`](Self::new), comparing names as `config` prescribes
    pub fn with_config(
        target_type: TypeDescriptor,
        target_name: impl Into<String>,
        config: &MatchConfig,
    ) -> Self {
        let target_name = target_name.into();
        let criterion = ParameterTypeAndNameCriterion::new(
            Criterion::equal(target_type),
            NameCriterion::new(target_name.clone(), config.name_comparison),
        );
        Self {
            target: Some((target_type, target_name)),
            criterion: Box::new(criterion),
        }
    }

    /// Construct from arguments that may be absent
    pub fn try_new(
        target_type: Option<TypeDescriptor>,
        target_name: Option<&str>,
    ) -> Result<Self> {
        let target_type = require(target_type, "target_type")?;
        let target_name = require(target_name, "target_name")?;
        Ok(Self::new(target_type, target_name))
    }

    /// Let `criterion` alone decide which parameters match
    pub fn from_criterion<C>(criterion: C) -> Self
    where
        C: Equatable<ParameterInfo> + Send + Sync + 'static,
    {
        Self {
            target: None,
            criterion: Box::new(criterion),
        }
    }

    /// Construct from a criterion that may be absent
    pub fn try_from_criterion(criterion: Option<BoxedEquatable<ParameterInfo>>) -> Result<Self> {
        let criterion = require(criterion, "criterion")?;
        Ok(Self {
            target: None,
            criterion,
        })
    }

    /// The expected parameter type, when built from a type and a name
    pub fn target_type(&self) -> Option<TypeDescriptor> {
        self.target.as_ref().map(|(target_type, _)| *target_type)
    }

    /// The expected parameter name, when built from a type and a name
    pub fn target_name(&self) -> Option<&str> {
        self.target.as_ref().map(|(_, name)| name.as_str())
    }
}

impl RequestSpecification for ParameterSpecification {
    fn is_satisfied_by(&self, request: &dyn Any) -> bool {
        let Some(parameter) = request.downcast_ref::<ParameterInfo>() else {
            trace!("request is not a parameter");
            return false;
        };

        let verdict = self.criterion.equals(parameter);
        trace!(
            parameter = parameter.name(),
            parameter_type = parameter.parameter_type().name(),
            verdict,
            "evaluated parameter request"
        );
        verdict
    }
}

impl fmt::Debug for ParameterSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterSpecification")
            .field("target_type", &self.target_type())
            .field("target_name", &self.target_name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NameComparison;
    use crate::error::SpecificationError;
    use crate::reflection::{ConstructorInfo, PropertyInfo};

    struct Holder;

    fn parameter<T: 'static>(name: &str) -> ParameterInfo {
        ConstructorInfo::new(TypeDescriptor::of::<Holder>())
            .with_parameter::<T>(name)
            .parameters()[0]
            .clone()
    }

    #[test]
    fn test_exposes_targets() {
        let spec = ParameterSpecification::new(TypeDescriptor::of::<u32>(), "count");
        assert_eq!(spec.target_type(), Some(TypeDescriptor::of::<u32>()));
        assert_eq!(spec.target_name(), Some("count"));
    }

    #[test]
    fn test_criterion_form_has_no_targets() {
        let spec =
            ParameterSpecification::from_criterion(Criterion::equal(parameter::<u32>("n")));
        assert!(spec.target_type().is_none());
        assert!(spec.target_name().is_none());
    }

    #[test]
    fn test_try_new_reports_missing_arguments() {
        let missing_type = ParameterSpecification::try_new(None, Some("count")).unwrap_err();
        assert_eq!(missing_type, SpecificationError::argument_null("target_type"));

        let missing_name =
            ParameterSpecification::try_new(Some(TypeDescriptor::of::<u32>()), None).unwrap_err();
        assert_eq!(missing_name, SpecificationError::argument_null("target_name"));

        let empty_name = ParameterSpecification::try_new(Some(TypeDescriptor::of::<u32>()), Some(""));
        assert!(empty_name.is_ok());
    }

    #[test]
    fn test_try_from_criterion_reports_missing_criterion() {
        let error = ParameterSpecification::try_from_criterion(None).unwrap_err();
        assert_eq!(error.argument(), Some("criterion"));
    }

    #[test]
    fn test_matches_type_and_name() {
        let spec = ParameterSpecification::new(TypeDescriptor::of::<u32>(), "count");
        assert!(spec.is_satisfied_by(&parameter::<u32>("count")));
        assert!(!spec.is_satisfied_by(&parameter::<u32>("Count")));
        assert!(!spec.is_satisfied_by(&parameter::<u64>("count")));
    }

    #[test]
    fn test_property_with_same_name_and_type_is_rejected() {
        let spec = ParameterSpecification::new(TypeDescriptor::of::<u32>(), "count");
        let property = PropertyInfo::new(
            TypeDescriptor::of::<Holder>(),
            TypeDescriptor::of::<u32>(),
            "count",
        );
        assert!(!spec.is_satisfied_by(&property));
    }

    #[test]
    fn test_configured_name_comparison() {
        let config = MatchConfig::new(NameComparison::OrdinalIgnoreCase);
        let spec =
            ParameterSpecification::with_config(TypeDescriptor::of::<u32>(), "count", &config);
        assert!(spec.is_satisfied_by(&parameter::<u32>("COUNT")));
        assert!(!spec.is_satisfied_by(&parameter::<i32>("COUNT")));
    }

    #[test]
    fn test_debug_output() {
        let spec = ParameterSpecification::new(TypeDescriptor::of::<u32>(), "count");
        let debug = format!("{:?}", spec);
        assert!(debug.contains("ParameterSpecification"));
        assert!(debug.contains("count"));
    }
}
