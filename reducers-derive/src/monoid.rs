//! Implementation of the `#[derive(Monoid)]` macro.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_quote};

use crate::fields::{bound_field_types, members, struct_fields};

/// Generates the `Monoid` impl whose identity is the identity of every field.
pub fn derive_monoid_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = struct_fields(input, "Monoid")?;
    let members = members(fields);
    let name = &input.ident;

    let generics = bound_field_types(
        &input.generics,
        fields,
        &parse_quote!(::reducers::typeclass::Monoid),
    );
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::reducers::typeclass::Monoid for #name #type_generics #where_clause {
            #[inline]
            fn empty() -> Self {
                Self {
                    #(
                        #members: ::reducers::typeclass::Monoid::empty(),
                    )*
                }
            }
        }
    })
}
