//! Procedural macros for uniflow

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Derive macro for the Action trait
///
/// Generates a `name()` method that returns the variant name as a static
/// string, which is the action's type tag for logging and validation.
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum TodoAction {
///     AddTodo { id: u64, text: String },
///     ToggleTodo { id: u64 },
///     SetVisibilityFilter { filter: VisibilityFilter },
/// }
///
/// let action = TodoAction::ToggleTodo { id: 3 };
/// assert_eq!(action.name(), "ToggleTodo");
/// ```
#[proc_macro_derive(Action)]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let variants = match &input.data {
        syn::Data::Enum(data) => &data.variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let name_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let variant_str = variant_name.to_string();

        match &v.fields {
            syn::Fields::Unit => quote! {
                #name::#variant_name => #variant_str
            },
            syn::Fields::Unnamed(_) => quote! {
                #name::#variant_name(..) => #variant_str
            },
            syn::Fields::Named(_) => quote! {
                #name::#variant_name { .. } => #variant_str
            },
        }
    });

    let expanded = quote! {
        impl uniflow::Action for #name {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
