use super::derived_traits;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::{Attribute, ItemFn, ItemStruct, LitBool, LitStr};

/// Arguments accepted by `#[api_model(...)]`.
struct ModelArgs {
    rename_all: LitStr,
    deny_unknown_fields: bool,
}

impl Default for ModelArgs {
    fn default() -> Self {
        Self { rename_all: LitStr::new("camelCase", Span::call_site()), deny_unknown_fields: true }
    }
}

/// Serde container options already present on the struct.
#[derive(Default)]
struct SerdeOptions {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

/// Expands the `#[api_model]` attribute macro.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    expand_model(args, &input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand_model(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = parse_model_args(args)?;
    let existing = serde_options(&input.attrs)?;
    let derives = derived_traits(&input.attrs);

    let mut missing = Vec::new();
    if !derives.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !derives.contains("Serialize") {
        missing.push(quote! { ::serde::Serialize });
    }
    if !derives.contains("Deserialize") {
        missing.push(quote! { ::serde::Deserialize });
    }
    let derive_attr = (!missing.is_empty()).then(|| quote! { #[derive(#(#missing),*)] });

    let schema_attr = (!derives.contains("ToSchema"))
        .then(|| quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] });

    let rename_attr = match &existing.rename_all {
        Some(current) if current.value() != args.rename_all.value() => {
            return Err(syn::Error::new_spanned(
                current,
                "Conflicting serde rename_all; remove it or pass the same value to api_model",
            ));
        },
        Some(_) => None,
        None => {
            let rename_all = &args.rename_all;
            Some(quote! { #[serde(rename_all = #rename_all)] })
        },
    };

    if existing.deny_unknown_fields && !args.deny_unknown_fields {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "deny_unknown_fields is already set via serde; remove it before disabling",
        ));
    }
    let deny_attr = (args.deny_unknown_fields && !existing.deny_unknown_fields)
        .then(|| quote! { #[serde(deny_unknown_fields)] });

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

/// Expands the `#[api_handler]` attribute macro.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn parse_model_args(args: TokenStream) -> syn::Result<ModelArgs> {
    let mut parsed = ModelArgs::default();
    let mut seen_rename = false;
    let mut seen_deny = false;

    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("rename_all") {
            if std::mem::replace(&mut seen_rename, true) {
                return Err(meta.error("Duplicate argument"));
            }
            parsed.rename_all = meta.value()?.parse()?;
            return Ok(());
        }
        if meta.path.is_ident("deny_unknown_fields") {
            if std::mem::replace(&mut seen_deny, true) {
                return Err(meta.error("Duplicate argument"));
            }
            parsed.deny_unknown_fields = meta.value()?.parse::<LitBool>()?.value;
            return Ok(());
        }
        Err(meta.error("Unsupported argument; expected rename_all or deny_unknown_fields"))
    });
    parser.parse2(args)?;

    Ok(parsed)
}

fn serde_options(attrs: &[Attribute]) -> syn::Result<SerdeOptions> {
    let mut options = SerdeOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                options.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                options.deny_unknown_fields = true;
            } else if meta.input.peek(syn::Token![=]) {
                // Other container options are passed through untouched.
                let _: syn::Expr = meta.value()?.parse()?;
            } else if meta.input.peek(syn::token::Paren) {
                let _nested;
                syn::parenthesized!(_nested in meta.input);
            }
            Ok(())
        })?;
    }

    Ok(options)
}
