use proc_macro::TokenStream;
use quote::quote;
use syn::*;

macro_rules! error {
    ($span:expr, $($tt:tt)*) => {
        return Err(syn::Error::new_spanned($span, format!($($tt)*)))
    };
}

pub fn to_param(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput { attrs: _, vis: _, ident, mut generics, data } = input;
    let Data::Struct(data) = data else {
        error!(&ident, "only struct are currently supported")
    };

    let mut fields = data.fields.into_iter();
    let (Some(field), None) = (fields.next(), fields.next()) else {
        error!(&ident, "`ToParam` can only be derived for struct with exactly one field")
    };

    let member = match field.ident {
        Some(id) => Member::Named(id),
        None => Member::Unnamed(Index::from(0)),
    };
    let ty = field.ty;

    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#ty: ::pgparam::Encode + ::core::clone::Clone));

    let (g1, g2, g3) = generics.split_for_impl();

    Ok(quote! {
        impl #g1 ::pgparam::ToParam for #ident #g2 #g3 {
            type Target = #ty;

            fn to_param(&self) -> Self::Target {
                ::core::clone::Clone::clone(&self.#member)
            }
        }
    }.into())
}
