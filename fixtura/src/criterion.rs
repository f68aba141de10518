//! Pluggable equality used by specifications to decide a match.

use std::fmt;
use std::sync::Arc;

use crate::config::NameComparison;
use crate::reflection::{ParameterInfo, TypeDescriptor};

/// A value that can decide whether another value equals it
pub trait Equatable<T: ?Sized> {
    fn equals(&self, other: &T) -> bool;
}

impl<T: ?Sized, E: Equatable<T> + ?Sized> Equatable<T> for &E {
    fn equals(&self, other: &T) -> bool {
        (**self).equals(other)
    }
}

impl<T: ?Sized, E: Equatable<T> + ?Sized> Equatable<T> for Box<E> {
    fn equals(&self, other: &T) -> bool {
        (**self).equals(other)
    }
}

impl<T: ?Sized, E: Equatable<T> + ?Sized> Equatable<T> for Arc<E> {
    fn equals(&self, other: &T) -> bool {
        (**self).equals(other)
    }
}

/// Type-erased equality over `T`, shareable across threads
pub type BoxedEquatable<T> = Box<dyn Equatable<T> + Send + Sync>;

type Comparer<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// A target value paired with the function used to compare against it.
///
/// The comparer is always invoked as `comparer(target, other)`: the stored
/// target first, the candidate second.
pub struct Criterion<T> {
    target: T,
    comparer: Comparer<T>,
}

impl<T> Criterion<T> {
    pub fn new<F>(target: T, comparer: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            target,
            comparer: Arc::new(comparer),
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

impl<T: PartialEq + 'static> Criterion<T> {
    /// Criterion using the type's own `PartialEq`
    pub fn equal(target: T) -> Self {
        Self::new(target, |target, other| target == other)
    }
}

impl<T> Equatable<T> for Criterion<T> {
    fn equals(&self, other: &T) -> bool {
        (self.comparer)(&self.target, other)
    }
}

impl<T: Clone> Clone for Criterion<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            comparer: Arc::clone(&self.comparer),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Criterion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Criterion")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Matches member names under a [`NameComparison`] rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCriterion {
    target: String,
    comparison: NameComparison,
}

impl NameCriterion {
    pub fn new(target: impl Into<String>, comparison: NameComparison) -> Self {
        Self {
            target: target.into(),
            comparison,
        }
    }

    /// Exact, case-sensitive name match
    pub fn ordinal(target: impl Into<String>) -> Self {
        Self::new(target, NameComparison::Ordinal)
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn comparison(&self) -> NameComparison {
        self.comparison
    }
}

impl Equatable<str> for NameCriterion {
    fn equals(&self, other: &str) -> bool {
        self.comparison.matches(&self.target, other)
    }
}

/// Matches a parameter when both its declared type and its name match
pub struct ParameterTypeAndNameCriterion {
    type_criterion: BoxedEquatable<TypeDescriptor>,
    name_criterion: BoxedEquatable<str>,
}

impl ParameterTypeAndNameCriterion {
    pub fn new<TC, NC>(type_criterion: TC, name_criterion: NC) -> Self
    where
        TC: Equatable<TypeDescriptor> + Send + Sync + 'static,
        NC: Equatable<str> + Send + Sync + 'static,
    {
        Self {
            type_criterion: Box::new(type_criterion),
            name_criterion: Box::new(name_criterion),
        }
    }
}

impl Equatable<ParameterInfo> for ParameterTypeAndNameCriterion {
    fn equals(&self, other: &ParameterInfo) -> bool {
        self.type_criterion.equals(&other.parameter_type())
            && self.name_criterion.equals(other.name())
    }
}

impl fmt::Debug for ParameterTypeAndNameCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterTypeAndNameCriterion")
            .finish_non_exhaustive()
    }
}
