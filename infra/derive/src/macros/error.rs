use super::derived_traits;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, GenericArgument, Ident, PathArguments, Type};

/// What the generated code needs to know about one enum variant.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    cfg_attrs: Vec<&'a Attribute>,
    has_context: bool,
    source: Option<&'a Field>,
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a syn::Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "numerus_error requires named fields for source/context handling",
            ));
        };

        let mut has_context = false;
        let mut source = None;

        for field in &fields.named {
            let Some(name) = &field.ident else { continue };

            if name == "context" {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "context field must be Option<Cow<'static, str>>",
                    ));
                }
                has_context = true;
            } else if name == "source" || has_attr(field, "source") || has_attr(field, "from") {
                source = Some(field);
            }
        }

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "numerus_error requires `context: Option<Cow<'static, str>>` for variants with a source",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            cfg_attrs: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
            has_context,
            source,
        })
    }

    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }

    /// Match arm that stores a context string into this variant.
    fn context_arm(&self, name: &Ident) -> Option<TokenStream> {
        if !self.has_context {
            return None;
        }
        let ident = self.ident;
        let cfg_attrs = &self.cfg_attrs;

        Some(quote! {
            #(#cfg_attrs)*
            #name::#ident { context: slot, .. } => *slot = Some(context.into()),
        })
    }

    /// `From<Source>` plus the context extension for `Result<T, Source>`.
    fn source_impls(&self, name: &Ident, ext: &Ident) -> Option<TokenStream> {
        if self.is_internal() {
            return None;
        }
        let field = self.source?;
        let field_name = field.ident.as_ref()?;
        let source_ty = &field.ty;
        let ident = self.ident;
        let cfg_attrs = &self.cfg_attrs;

        Some(quote! {
            #(#cfg_attrs)*
            #[automatically_derived]
            impl From<#source_ty> for #name {
                #[inline]
                fn from(#field_name: #source_ty) -> Self {
                    Self::#ident { #field_name, context: None }
                }
            }

            #(#cfg_attrs)*
            #[automatically_derived]
            impl<T> #ext<T> for ::std::result::Result<T, #source_ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::std::result::Result<T, #name> {
                    self.map_err(|#field_name| #name::#ident { #field_name, context: Some(context.into()) })
                }
            }
        })
    }

    fn internal_impls(&self, name: &Ident) -> Option<TokenStream> {
        if !self.is_internal() {
            return None;
        }
        let cfg_attrs = &self.cfg_attrs;
        let context = self.has_context.then(|| quote! { context: None, });

        Some(quote! {
            #(#cfg_attrs)*
            impl From<&'static str> for #name {
                #[inline]
                fn from(message: &'static str) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Borrowed(message), #context }
                }
            }

            #(#cfg_attrs)*
            impl From<String> for #name {
                #[inline]
                fn from(message: String) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Owned(message), #context }
                }
            }
        })
    }
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    expand(&input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "numerus_error can only be applied to enums"));
    };

    let name = &input.ident;
    let vis = &input.vis;
    let ext = format_ident!("{name}Ext");

    let variants =
        data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>()?;

    let derives = derived_traits(&input.attrs);
    let mut missing = Vec::new();
    if !derives.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !derives.contains("Error") {
        missing.push(quote! { ::thiserror::Error });
    }
    let derive_attr = (!missing.is_empty()).then(|| quote! { #[derive(#(#missing),*)] });

    let context_arms = variants.iter().filter_map(|v| v.context_arm(name));
    let source_impls = variants.iter().filter_map(|v| v.source_impls(name, &ext));
    let internal_impls = variants.iter().filter_map(|v| v.internal_impls(name));

    Ok(quote! {
        #[allow(non_shorthand_field_patterns)]
        #derive_attr
        #input

        #vis trait #ext<T> {
            /// Attaches a human-readable context to the error.
            ///
            /// # Errors
            /// Returns the original error, converted and enriched with `context`.
            fn context(
                self,
                context: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> ::std::result::Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for ::std::result::Result<T, #name> {
            #[inline]
            #[allow(unreachable_patterns)]
            fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut error| {
                    match &mut error {
                        #(#context_arms)*
                        _ => {}
                    }
                    error
                })
            }
        }

        #(#source_impls)*
        #(#internal_impls)*

        #[allow(dead_code)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            context.as_ref().map_or(::std::borrow::Cow::Borrowed(""), |c| {
                ::std::borrow::Cow::Owned(format!(" ({c})"))
            })
        }
    })
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Splits the last path segment of `ty` into its ident and generic arguments.
fn path_generics(ty: &Type) -> Option<(&Ident, Vec<&GenericArgument>)> {
    let Type::Path(path) = ty else { return None };
    let segment = path.path.segments.last()?;
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return Some((&segment.ident, Vec::new()));
    };
    Some((&segment.ident, args.args.iter().collect()))
}

/// Matches `Option<Cow<'static, str>>` (with any path prefix).
fn is_context_type(ty: &Type) -> bool {
    let Some((option, args)) = path_generics(ty) else { return false };
    let [GenericArgument::Type(cow_ty)] = args.as_slice() else { return false };
    let Some((cow, cow_args)) = path_generics(cow_ty) else { return false };
    let [GenericArgument::Lifetime(lifetime), GenericArgument::Type(str_ty)] = cow_args.as_slice()
    else {
        return false;
    };

    option == "Option"
        && cow == "Cow"
        && lifetime.ident == "static"
        && path_generics(str_ty).is_some_and(|(ident, rest)| ident == "str" && rest.is_empty())
}
