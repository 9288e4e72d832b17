//! Implementation of the `#[derive(Record)]` macro.
//!
//! This macro generates an implementation of the `Record` trait and field
//! name constants for building queries without string typos.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_field_attrs, parse_record_attrs, FieldKind};

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let record_attrs = parse_record_attrs(&input.attrs)?;

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut query_names: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let field_attrs = parse_field_attrs(&field.attrs)?;

        if field_attrs.skip {
            continue;
        }

        // Fields without a kind are not queryable
        let kind = match field_attrs.kind {
            Some(kind) => kind,
            None => continue,
        };

        let query_name = field_attrs
            .rename
            .unwrap_or_else(|| record_attrs.rename_all.apply(&field_name.to_string()));

        if !seen.insert(query_name.clone()) {
            return Err(Error::new(
                field_attrs.span,
                format!("duplicate query field name: '{}'", query_name),
            ));
        }

        let const_name = format_ident!("{}", to_screaming_snake_case(&query_name));
        field_constants.push(quote! {
            /// Query name of this field.
            pub const #const_name: &'static str = #query_name;
        });

        let value_expr = match kind {
            FieldKind::Int => quote! {
                ::sifter::FieldInt::field_int(&self.#field_name).map(::sifter::Value::Int)
            },
            FieldKind::Text => quote! {
                ::sifter::FieldText::field_text(&self.#field_name).map(::sifter::Value::text)
            },
            FieldKind::Rfc3339 => quote! {
                ::sifter::FieldText::field_text(&self.#field_name).map(::sifter::Value::rfc3339)
            },
            FieldKind::Instant => quote! {
                ::sifter::FieldInstant::field_instant(&self.#field_name).map(::sifter::Value::Instant)
            },
            FieldKind::Label => quote! {
                ::core::option::Option::Some(::sifter::Value::text(
                    ::sifter::FieldLabel::label(&self.#field_name)
                ))
            },
        };

        field_matches.push(quote! {
            #query_name => #value_expr,
        });
        query_names.push(query_name);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*

            /// Query names of every queryable field, in declaration order.
            pub const FIELD_NAMES: &'static [&'static str] = &[#(#query_names),*];
        }

        impl #impl_generics ::sifter::Record for #struct_name #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<::sifter::Value<'_>> {
                match name {
                    #(#field_matches)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == '.' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
