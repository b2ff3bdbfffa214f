//! Derive macro implementation for envcfg

use proc_macro::TokenStream;
use proc_macro2::{TokenStream as TokenStream2, TokenTree};
use quote::{quote, ToTokens};
use std::collections::HashSet;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, Ident, Type, Visibility};

mod attrs;

use attrs::FieldAttrs;

/// `EnvCfg` derive macro
///
/// Implements `envcfg::EnvCfg` (field collection) and `envcfg::Bindable`
/// (so the struct can be loaded directly or nested inside another one).
///
/// # Field rules
///
/// - Fields that are not `pub` are never collected
/// - `#[env(skip)]` leaves a `pub` field out
/// - Every other `pub` field is dispatched through `envcfg::Bindable`:
///   nested structs are recursed into, leaves are bound when they carry
///   `#[env(name = "KEY")]` with a non-empty key
///
/// # Example
///
/// See the `envcfg` crate documentation for usage examples.
#[proc_macro_derive(EnvCfg, attributes(env))]
pub fn derive_envcfg(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvCfg only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(input, "EnvCfg only supports structs"));
        }
    };

    let type_params: HashSet<&Ident> = input.generics.type_params().map(|p| &p.ident).collect();
    let mut generics = input.generics.clone();
    let mut collectors = Vec::new();

    for field in fields {
        // Attributes are validated even on fields that end up skipped
        let attrs = FieldAttrs::from_field(field)?;

        if !matches!(field.vis, Visibility::Public(_)) || attrs.skip {
            continue;
        }

        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;

        // Generic field types need an explicit bound for the generated slot() call
        if mentions_type_param(&field.ty, &type_params) {
            let ty = &field.ty;
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#ty: ::envcfg::Bindable));
        }

        let key = match attrs.name {
            Some(name) => quote! { ::std::option::Option::Some(#name) },
            None => quote! { ::std::option::Option::None },
        };

        collectors.push(quote! {
            ::envcfg::field::collect_into(
                ::envcfg::Bindable::slot(&mut self.#field_name),
                #key,
                fields,
            );
        });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envcfg::EnvCfg for #struct_name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn collect_fields<'__envcfg>(
                &'__envcfg mut self,
                fields: &mut ::std::vec::Vec<::envcfg::FieldDescriptor<'__envcfg>>,
            ) {
                #(#collectors)*
            }
        }

        impl #impl_generics ::envcfg::Bindable for #struct_name #ty_generics #where_clause {
            fn slot(&mut self) -> ::envcfg::Slot<'_> {
                ::envcfg::Slot::Nested(self)
            }
        }
    })
}

/// Whether `ty` refers to any of the struct's type parameters.
fn mentions_type_param(ty: &Type, type_params: &HashSet<&Ident>) -> bool {
    fn walk(tokens: TokenStream2, type_params: &HashSet<&Ident>) -> bool {
        tokens.into_iter().any(|tree| match tree {
            TokenTree::Ident(ident) => type_params.contains(&ident),
            TokenTree::Group(group) => walk(group.stream(), type_params),
            _ => false,
        })
    }

    !type_params.is_empty() && walk(ty.to_token_stream(), type_params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_params_of(generics: &syn::Generics) -> HashSet<&Ident> {
        generics.type_params().map(|p| &p.ident).collect()
    }

    #[test]
    fn test_mentions_type_param() {
        let generics: syn::Generics = parse_quote!(<T, U>);
        let params = type_params_of(&generics);

        assert!(mentions_type_param(&parse_quote!(T), &params));
        assert!(mentions_type_param(&parse_quote!(Vec<U>), &params));
        assert!(mentions_type_param(&parse_quote!([T; 4]), &params));
        assert!(!mentions_type_param(&parse_quote!(u16), &params));
        assert!(!mentions_type_param(&parse_quote!(Tx), &params));
    }

    #[test]
    fn test_expand_adds_bounds_for_generic_fields() {
        let input: DeriveInput = parse_quote! {
            struct Wrap<T> {
                #[env(name = "X")]
                pub x: T,
                #[env(name = "PORT")]
                pub port: u16,
                hidden: T,
            }
        };

        let expanded = expand(&input).unwrap().to_string().replace(' ', "");
        assert!(expanded.contains("whereT:::envcfg::Bindable"));
        assert!(!expanded.contains("u16:::envcfg::Bindable"));
    }

    #[test]
    fn test_expand_rejects_enums() {
        let input: DeriveInput = parse_quote! {
            enum Mode { Fast, Slow }
        };

        assert!(expand(&input).is_err());
    }
}
