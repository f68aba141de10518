//! Derive macro implementation for `Reflect`
//!
//! Turns the named fields of a struct into constructor parameter and property
//! metadata, honouring `#[reflect(...)]` field attributes.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{
    Attribute, Data, DeriveInput, Error, Expr, ExprLit, Field, Fields, GenericParam, Lit, Meta,
    MetaNameValue, Result, Type, parse_macro_input, parse_quote,
};

/// Main entry point for the Reflect derive macro
pub fn derive_reflect_impl(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_reflect_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// What the attributes on one field resolve to
struct FieldMetadata {
    ty: Type,
    parameter: String,
    property: String,
}

fn generate_reflect_impl(input: &DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields_named) => fields_named
                .named
                .iter()
                .map(parse_field)
                .collect::<Result<Vec<_>>>()?,
            Fields::Unnamed(_) => {
                return Err(Error::new_spanned(
                    input,
                    "Reflect derive requires named fields; tuple structs have no parameter names",
                ));
            }
            Fields::Unit => Vec::new(),
        },
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                input,
                "Reflect derive is not supported for enums",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                input,
                "Reflect derive is not supported for unions",
            ));
        }
    };
    let fields: Vec<FieldMetadata> = fields.into_iter().flatten().collect();

    let mut generics = input.generics.clone();
    add_trait_bounds(&mut generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let parameters = fields.iter().map(|field| {
        let ty = &field.ty;
        let parameter = &field.parameter;
        quote! { .with_parameter::<#ty>(#parameter) }
    });

    let property_entries = fields.iter().map(|field| {
        let ty = &field.ty;
        let property = &field.property;
        quote! {
            ::fixtura::PropertyInfo::new(
                declaring_type,
                ::fixtura::TypeDescriptor::of::<#ty>(),
                #property,
            )
        }
    });

    let properties = if fields.is_empty() {
        quote! { ::std::vec::Vec::new() }
    } else {
        quote! {
            let declaring_type = ::fixtura::TypeDescriptor::of::<Self>();
            ::std::vec![#(#property_entries),*]
        }
    };

    Ok(quote! {
        impl #impl_generics ::fixtura::Reflect for #name #ty_generics #where_clause {
            fn constructors() -> ::std::vec::Vec<::fixtura::ConstructorInfo> {
                ::std::vec![
                    ::fixtura::ConstructorInfo::new(::fixtura::TypeDescriptor::of::<Self>())
                        #(#parameters)*
                ]
            }

            fn properties() -> ::std::vec::Vec<::fixtura::PropertyInfo> {
                #properties
            }
        }
    })
}

/// Reflect requires `'static`, so every type parameter must be `'static`
fn add_trait_bounds(generics: &mut syn::Generics) {
    for param in &mut generics.params {
        if let GenericParam::Type(ref mut type_param) = *param {
            type_param.bounds.push(parse_quote!('static));
        }
    }
}

/// Resolve a field, or `None` when it is skipped
fn parse_field(field: &Field) -> Result<Option<FieldMetadata>> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(Error::new_spanned(field, "Expected a named field"));
    };
    let default_name = ident.to_string();
    let default_name = default_name
        .strip_prefix("r#")
        .unwrap_or(&default_name)
        .to_string();

    let mut metadata = FieldMetadata {
        ty: field.ty.clone(),
        parameter: default_name.clone(),
        property: default_name,
    };

    for attr in &field.attrs {
        if attr.path().is_ident("reflect") && parse_reflect_attribute(attr, &mut metadata)? {
            return Ok(None);
        }
    }

    Ok(Some(metadata))
}

/// Apply a #[reflect(...)] attribute. Returns true when the field is skipped.
fn parse_reflect_attribute(attr: &Attribute, metadata: &mut FieldMetadata) -> Result<bool> {
    let Meta::List(list) = &attr.meta else {
        return Err(Error::new_spanned(attr, "Reflect attribute must be a list"));
    };

    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let parsed = parser.parse2(list.tokens.clone())?;

    let mut skip = false;
    for meta in parsed {
        match meta {
            Meta::Path(path) if path.is_ident("skip") => skip = true,
            Meta::NameValue(MetaNameValue { path, value, .. }) => {
                if path.is_ident("parameter") {
                    metadata.parameter = parse_name(&value)?;
                } else if path.is_ident("property") {
                    metadata.property = parse_name(&value)?;
                } else {
                    return Err(Error::new_spanned(path, "Unknown reflect attribute"));
                }
            }
            other => {
                return Err(Error::new_spanned(
                    other,
                    "Unsupported reflect attribute format",
                ));
            }
        }
    }

    Ok(skip)
}

fn parse_name(value: &Expr) -> Result<String> {
    match value {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) if !lit.value().is_empty() => Ok(lit.value()),
        _ => Err(Error::new_spanned(
            value,
            "Expected a non-empty string literal",
        )),
    }
}
