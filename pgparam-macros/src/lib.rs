use proc_macro::TokenStream;
use syn::DeriveInput;

mod to_param;

/// Derive `ToParam` for single field struct.
///
/// The struct is bound as its only field, which must be `Encode` and `Clone`.
#[proc_macro_derive(ToParam)]
pub fn to_param(input: TokenStream) -> TokenStream {
    match to_param::to_param(syn::parse_macro_input!(input as DeriveInput)) {
        Ok(ok) => ok,
        Err(err) => err.into_compile_error().into(),
    }
}
