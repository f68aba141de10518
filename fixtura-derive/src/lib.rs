//! Derive macros for the fixtura test data library
//!
//! This crate provides procedural macros for describing types to fixtura's
//! request specifications.

use proc_macro::TokenStream;

mod reflect;

/// Derive macro for implementing `fixtura::Reflect`
///
/// The derived implementation describes a single constructor taking every
/// field in declaration order, and one property per field.
///
/// # Basic Usage
///
/// ```rust
/// use fixtura::Reflect;
///
/// #[derive(Reflect)]
/// struct User {
///     id: u32,
///     name: String,
/// }
/// ```
///
/// # Customization
///
/// ```rust
/// use fixtura::Reflect;
///
/// #[derive(Reflect)]
/// struct SingleParameter<T> {
///     #[reflect(property = "Parameter")]
///     parameter: T,
///     #[reflect(skip)]
///     cache: Option<String>,
/// }
/// ```
///
/// # Supported Attributes
///
/// - `parameter = "name"`: name of the constructor parameter for this field
/// - `property = "name"`: name of the property for this field
/// - `skip`: leave the field out of both the constructor and the properties
///
/// Only structs with named fields are supported.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect::derive_reflect_impl(input)
}
