use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, LitStr, Meta, parse_macro_input};

/// Ties a fieldless enum to the literal keys of a theme map.
///
/// ```ignore
/// #[derive(ThemeToken)]
/// enum Size {
///     #[token("m-18")]
///     Medium,
/// }
/// ```
#[proc_macro_derive(ThemeToken, attributes(token))]
pub fn theme_token_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;

    let variants = if let Data::Enum(data_enum) = input.data {
        data_enum.variants
    } else {
        panic!("#[derive(ThemeToken)] can only be used on enums");
    };

    let variant_matches = variants.iter().map(|variant| {
        if !variant.fields.is_empty() {
            panic!("#[derive(ThemeToken)] variants can't have fields");
        }

        let ident = &variant.ident;
        let token = get_token(&variant.attrs);

        quote! {
            #name::#ident => #token,
        }
    });

    let expanded = quote! {
        impl #name {
            pub fn token(&self) -> &'static str {
                match self {
                    #(#variant_matches)*
                }
            }
        }

        impl ::core::convert::From<#name> for ::std::string::String {
            fn from(value: #name) -> Self {
                value.token().into()
            }
        }

        impl ::core::convert::From<&#name> for ::std::string::String {
            fn from(value: &#name) -> Self {
                value.token().into()
            }
        }
    };

    TokenStream::from(expanded)
}

fn get_token(attrs: &[Attribute]) -> LitStr {
    let token_attr = attrs
        .iter()
        .find(|attr| attr.path().is_ident("token"))
        .expect("Variant is missing #[token(...)] attribute");

    match &token_attr.meta {
        Meta::List(list) => syn::parse2::<LitStr>(list.tokens.clone())
            .expect("#[token(...)] must contain a string literal, like #[token(\"m-18\")]"),
        _ => panic!("#[token(...)] must be a list"),
    }
}
