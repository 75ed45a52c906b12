//! Field analysis shared by the derives.

use syn::{Data, DeriveInput, Fields, Generics, Index, Member, Path, parse_quote};

/// Returns the fields of a struct, or an error spanning the type name.
pub fn struct_fields<'a>(input: &'a DeriveInput, trait_name: &str) -> syn::Result<&'a Fields> {
    match &input.data {
        Data::Struct(data_struct) => Ok(&data_struct.fields),
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{trait_name} can only be derived for structs, not enums."),
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{trait_name} cannot be derived for unions."),
        )),
    }
}

/// The member of every field: its name, or its index for tuple structs.
pub fn members(fields: &Fields) -> Vec<Member> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            field
                .ident
                .clone()
                .map_or_else(|| Member::Unnamed(Index::from(index)), Member::Named)
        })
        .collect()
}

/// Copies `generics`, requiring `bound` on every field type.
pub fn bound_field_types(generics: &Generics, fields: &Fields, bound: &Path) -> Generics {
    let mut generics = generics.clone();
    let where_clause = generics.make_where_clause();
    for field in fields {
        let field_type = &field.ty;
        where_clause.predicates.push(parse_quote!(#field_type: #bound));
    }
    generics
}
