//! Derive macro implementation used by `dimq-core`.
//!
//! `dimq-derive` registers zero-sized marker types as base dimensions. By default the derive expands in terms of
//! `crate::BaseDimension`, so inside `dimq-core` it needs no extra configuration; downstream crates point it at
//! the facade with `crate = "dimq"`.
//!
//! Most users should depend on `dimq`, which re-exports the derive.
//!
//! # Generated impls
//!
//! For a marker type `Length`, the derive implements `<path>::BaseDimension for Length` with its `SYMBOL` and
//! `ORDER` constants.
//!
//! # Attributes
//!
//! The derive reads a required `#[dimension(...)]` attribute:
//!
//! - `symbol = "m"`: printed name (required)
//! - `order = 2`: canonical ordering key, defaults to `0`
//! - `crate = "dimq"`: path of the crate exporting `BaseDimension`, defaults to `crate`

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitInt, LitStr, Path, Token,
};

/// Derive `BaseDimension` for a marker type.
///
/// The derive must be paired with a `#[dimension(...)]` attribute providing at least `symbol`.
///
/// ```rust,ignore
/// use dimq::BaseDimension;
///
/// #[derive(BaseDimension)]
/// #[dimension(symbol = "px", order = 10, crate = "dimq")]
/// pub enum Pixel {}
/// ```
#[proc_macro_derive(BaseDimension, attributes(dimension))]
pub fn derive_base_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_base_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_base_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "base dimensions cannot be generic",
        ));
    }

    let name = &input.ident;
    let attr = parse_dimension_attribute(&input.attrs)?;

    let symbol = &attr.symbol;
    let order = attr.order;
    let krate = &attr.krate;

    Ok(quote! {
        impl #krate::BaseDimension for #name {
            const SYMBOL: &'static str = #symbol;
            const ORDER: u16 = #order;
        }
    })
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    symbol: LitStr,
    order: u16,
    krate: Path,
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut order: u16 = 0;
        let mut krate: Option<Path> = None;

        while !input.is_empty() {
            // `crate` is a keyword, so plain `Ident` parsing would reject it
            let ident = Ident::parse_any(input)?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    let lit: LitStr = input.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "`symbol` must not be empty"));
                    }
                    symbol = Some(lit);
                }
                "order" => {
                    let lit: LitInt = input.parse()?;
                    order = lit.base10_parse()?;
                }
                "crate" => {
                    let lit: LitStr = input.parse()?;
                    krate = Some(lit.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let krate = krate.unwrap_or_else(|| syn::parse_quote!(crate));

        Ok(DimensionAttribute {
            symbol,
            order,
            krate,
        })
    }
}

fn parse_dimension_attribute(attrs: &[Attribute]) -> syn::Result<DimensionAttribute> {
    for attr in attrs {
        if attr.path().is_ident("dimension") {
            return attr.parse_args::<DimensionAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[dimension(...)] attribute",
    ))
}
