//! `#[derive(Match)]` implementation.
//!
//! Generates a handler-mapping struct with one field per variant plus the
//! dispatch glue for the enum:
//! - `match_with()` - Consume the value and run the matching handler
//! - `match_ref()` - Borrow the value and run the matching handler
//! - `Dispatch` impls for the pattern (by value and by reference)
//! - `VariantSet` impl for the enum

use crate::naming::{handler_field, handler_param, payload_binding, result_param};
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Fields, GenericParam, Generics, Ident, Lifetime, LifetimeParam,
    LitStr, Type, TypeParam, Variant, ext::IdentExt, parse_macro_input,
};
use std::collections::HashMap;

/// One variant, as seen by the generator.
struct VariantInfo<'a> {
    ident: &'a Ident,
    field: Ident,
    param: Ident,
    payload: Vec<&'a Type>,
    /// Destructures the variant into `__field0..n`.
    destructure: TokenStream2,
    /// Matches the variant without binding anything.
    wildcard: TokenStream2,
}

impl<'a> VariantInfo<'a> {
    fn new(enum_name: &Ident, variant: &'a Variant) -> Self {
        let ident = &variant.ident;
        let bindings: Vec<Ident> = (0..variant.fields.len()).map(payload_binding).collect();

        let (destructure, wildcard) = match &variant.fields {
            Fields::Unit => (quote! { #enum_name::#ident }, quote! { #enum_name::#ident }),
            Fields::Unnamed(_) => (
                quote! { #enum_name::#ident(#(#bindings),*) },
                quote! { #enum_name::#ident(..) },
            ),
            Fields::Named(fields) => {
                let names = fields.named.iter().filter_map(|f| f.ident.as_ref());
                (
                    quote! { #enum_name::#ident { #(#names: #bindings),* } },
                    quote! { #enum_name::#ident { .. } },
                )
            }
        };

        Self {
            ident,
            field: handler_field(ident),
            param: handler_param(ident),
            payload: variant.fields.iter().map(|f| &f.ty).collect(),
            destructure,
            wildcard,
        }
    }

    fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// `field0, field1, ...` call arguments.
    fn bindings(&self) -> Vec<Ident> {
        (0..self.payload.len()).map(payload_binding).collect()
    }

    /// `__HVariant: Kind(Payload...) -> __R`
    fn bound(&self, kind: &TokenStream2, result: &Ident, borrow: Option<&Lifetime>) -> TokenStream2 {
        let param = &self.param;
        let args = self.payload.iter().map(|ty| match borrow {
            Some(lt) => quote! { &#lt #ty },
            None => quote! { #ty },
        });
        quote! { #param: #kind(#(#args),*) -> #result }
    }

    /// `Enum::Variant(__field0) => (target.variant)(__field0)`
    fn arm(&self, target: &TokenStream2) -> TokenStream2 {
        let pat = &self.destructure;
        let field = &self.field;
        let bindings = self.bindings();
        quote! { #pat => (#target.#field)(#(#bindings),*) }
    }
}

/// Reads `#[match_pattern(name = "...")]`.
fn pattern_name(attrs: &[Attribute], enum_name: &Ident) -> syn::Result<Ident> {
    let mut name = None;

    for attr in attrs {
        if !attr.path().is_ident("match_pattern") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                name = Some(lit.parse::<Ident>()?);
                Ok(())
            } else {
                Err(meta.error("unknown attribute, expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(name.unwrap_or_else(|| format_ident!("{}Pattern", enum_name.unraw())))
}

/// Enum generics extended with extra parameters for an impl block.
///
/// Lifetimes go first, as the language requires.
fn extend_generics(base: &Generics, borrow: Option<&Lifetime>, params: &[Ident]) -> Generics {
    let mut generics = base.clone();
    if let Some(lt) = borrow {
        generics
            .params
            .insert(0, GenericParam::Lifetime(LifetimeParam::new(lt.clone())));
    }
    for param in params {
        generics
            .params
            .push(GenericParam::Type(TypeParam::from(param.clone())));
    }
    generics
}

/// Implementation of `#[derive(Match)]`.
pub fn derive_match_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Rejects variants whose handler fields would share a name.
fn check_field_names(infos: &[VariantInfo<'_>]) -> syn::Result<()> {
    let mut seen: HashMap<String, &Ident> = HashMap::new();
    for info in infos {
        if let Some(first) = seen.insert(info.field.unraw().to_string(), info.ident) {
            return Err(syn::Error::new_spanned(
                info.ident,
                format!(
                    "variants `{}` and `{}` both map to the handler field `{}`; rename one of them",
                    first.unraw(),
                    info.name(),
                    info.field.unraw()
                ),
            ));
        }
    }
    Ok(())
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let enum_name = &input.ident;
    let vis = &input.vis;

    let variants = match &input.data {
        Data::Enum(data_enum) => &data_enum.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                enum_name,
                "#[derive(Match)] can only be used on enums",
            ));
        }
    };

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            enum_name,
            "#[derive(Match)] requires at least one variant to dispatch on",
        ));
    }

    let pattern_name = pattern_name(&input.attrs, enum_name)?;

    let infos: Vec<VariantInfo<'_>> = variants
        .iter()
        .map(|v| VariantInfo::new(enum_name, v))
        .collect();
    check_field_names(&infos)?;

    let result = result_param(&input.generics);
    let borrow = Lifetime::new("'__m", Span::call_site());
    let fn_once = quote! { ::core::ops::FnOnce };
    let fn_ref = quote! { ::core::ops::Fn };

    let fields: Vec<&Ident> = infos.iter().map(|v| &v.field).collect();
    let params: Vec<&Ident> = infos.iter().map(|v| &v.param).collect();
    let names: Vec<String> = infos.iter().map(VariantInfo::name).collect();
    let wildcards: Vec<&TokenStream2> = infos.iter().map(|v| &v.wildcard).collect();
    let indices = 0..infos.len();

    let once_bounds: Vec<_> = infos.iter().map(|v| v.bound(&fn_once, &result, None)).collect();
    let once_ref_bounds: Vec<_> = infos
        .iter()
        .map(|v| v.bound(&fn_once, &result, Some(&borrow)))
        .collect();
    let fn_bounds: Vec<_> = infos.iter().map(|v| v.bound(&fn_ref, &result, None)).collect();
    let fn_ref_bounds: Vec<_> = infos
        .iter()
        .map(|v| v.bound(&fn_ref, &result, Some(&borrow)))
        .collect();

    let pattern_arms: Vec<_> = infos.iter().map(|v| v.arm(&quote! { pattern })).collect();
    let self_arms: Vec<_> = infos.iter().map(|v| v.arm(&quote! { self })).collect();

    let field_docs = infos
        .iter()
        .map(|v| format!("Handler for `{}::{}`.", enum_name.unraw(), v.name()));
    let struct_doc = format!(
        "Handler mapping for [`{}`], one field per variant. Generated by `#[derive(Match)]`.",
        enum_name.unraw()
    );
    let set_name = enum_name.unraw().to_string();

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let enum_predicates: Vec<_> = where_clause
        .map(|w| w.predicates.iter().collect())
        .unwrap_or_default();

    let mut dispatch_params = vec![result.clone()];
    dispatch_params.extend(params.iter().map(|p| (*p).clone()));

    let owned_generics = extend_generics(&input.generics, None, &dispatch_params);
    let (owned_impl_generics, _, _) = owned_generics.split_for_impl();
    let ref_generics = extend_generics(&input.generics, Some(&borrow), &dispatch_params);
    let (ref_impl_generics, _, _) = ref_generics.split_for_impl();

    let expanded = quote! {
        #[doc = #struct_doc]
        #[derive(Clone, Copy)]
        #vis struct #pattern_name<#(#params),*> {
            #(
                #[doc = #field_docs]
                pub #fields: #params,
            )*
        }

        impl #impl_generics #enum_name #ty_generics #where_clause {
            /// Consume the value and invoke the handler for its variant.
            #[inline]
            pub fn match_with<#result, #(#params),*>(
                self,
                pattern: #pattern_name<#(#params),*>,
            ) -> #result
            where
                #(#once_bounds,)*
            {
                match self {
                    #(#pattern_arms,)*
                }
            }

            /// Borrow the value and invoke the handler for its variant.
            #[inline]
            pub fn match_ref<#borrow, #result, #(#params),*>(
                &#borrow self,
                pattern: #pattern_name<#(#params),*>,
            ) -> #result
            where
                #(#once_ref_bounds,)*
            {
                match self {
                    #(#pattern_arms,)*
                }
            }
        }

        impl #impl_generics ::matcha::VariantSet for #enum_name #ty_generics #where_clause {
            const NAME: &'static str = #set_name;
            const VARIANTS: &'static [&'static str] = &[#(#names),*];

            #[inline]
            fn variant_index(&self) -> usize {
                match self {
                    #(#wildcards => #indices,)*
                }
            }
        }

        impl #owned_impl_generics ::matcha::Dispatch<#enum_name #ty_generics>
            for #pattern_name<#(#params),*>
        where
            #(#enum_predicates,)*
            #(#fn_bounds,)*
        {
            type Output = #result;

            #[inline]
            fn dispatch(&self, value: #enum_name #ty_generics) -> #result {
                match value {
                    #(#self_arms,)*
                }
            }
        }

        impl #ref_impl_generics ::matcha::Dispatch<&#borrow #enum_name #ty_generics>
            for #pattern_name<#(#params),*>
        where
            #(#enum_predicates,)*
            #(#fn_ref_bounds,)*
        {
            type Output = #result;

            #[inline]
            fn dispatch(&self, value: &#borrow #enum_name #ty_generics) -> #result {
                match value {
                    #(#self_arms,)*
                }
            }
        }
    };

    Ok(expanded)
}
