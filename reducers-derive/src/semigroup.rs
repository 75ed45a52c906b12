//! Implementation of the `#[derive(Semigroup)]` macro.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_quote};

use crate::fields::{bound_field_types, members, struct_fields};

/// Generates the field-wise `Semigroup` impl.
pub fn derive_semigroup_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = struct_fields(input, "Semigroup")?;
    let members = members(fields);
    let name = &input.ident;

    let generics = bound_field_types(
        &input.generics,
        fields,
        &parse_quote!(::reducers::typeclass::Semigroup),
    );
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::reducers::typeclass::Semigroup for #name #type_generics #where_clause {
            #[inline]
            fn combine(self, other: Self) -> Self {
                Self {
                    #(
                        #members: ::reducers::typeclass::Semigroup::combine(self.#members, other.#members),
                    )*
                }
            }
        }
    })
}
