//! Derive macro implementation used by `physq-core`.
//!
//! `physq-derive` is an implementation detail of this workspace. The `UnitFamily` derive expands in terms of
//! `crate::UnitFamily`, `crate::Conversion`, `crate::Registry` and friends, so it is intended to be used by
//! `physq-core` (or by crates that expose an identical crate-root API).
//!
//! # Generated items
//!
//! For a family enum `Mass`, the derive produces:
//!
//! - `crate::UnitFamily for Mass`, including a lazily built registry static
//! - `core::fmt::Display for Mass` (the abbreviation) and `core::str::FromStr for Mass`
//! - `serde` impls (string form) behind the `serde` feature of the expanding crate
//! - a `unit` module with one zero-sized `crate::StaticUnit` marker per variant
//!
//! # Attributes
//!
//! On the enum, a required `#[family(...)]`:
//!
//! - `dimensions = <expr>`: the family's `Dimensions`
//! - `name = "..."` (optional): family name, defaults to the enum identifier
//!
//! On every variant, a required `#[unit(...)]`:
//!
//! - `abbreviation = "kg"`: display string, always accepted by `parse`
//! - `standard`: marks the single standard unit (no `scale`/`offset` allowed)
//! - `scale = <expr>`: multiplier to the standard unit
//! - `per = <expr>`: how many of this unit make one standard unit (use for decimal submultiples, so `1e9` rather
//!   than the inexact `1e-9` is stored); exactly one of `scale`/`per` is required unless `standard`
//! - `offset = <expr>` (optional, with `scale` only): zero-point shift added after scaling
//! - `spellings = ["...", ...]` (optional): extra accepted parse spellings
//! - `systems = [MetreKilogramSecondKelvin, ...]` (optional): unit systems this variant is consistent with; across
//!   the family every unit system must appear exactly once

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    bracketed,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token,
};

/// Unit systems every family must map, in canonical order.
const UNIT_SYSTEMS: [&str; 4] = [
    "MetreKilogramSecondKelvin",
    "MillimetreGramSecondKelvin",
    "FootPoundSecondRankine",
    "InchPoundSecondRankine",
];

/// Derive `crate::UnitFamily` plus parsing, display and static markers for a unit-family enum.
///
/// The enum must carry `#[family(...)]` and each variant `#[unit(...)]`; see the crate docs.
///
/// This macro is intended for use by `physq-core`.
#[proc_macro_derive(UnitFamily, attributes(family, unit))]
pub fn derive_unit_family(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_family_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Parsed contents of the enum-level `#[family(...)]` attribute.
struct FamilyAttribute {
    dimensions: Expr,
    name: Option<LitStr>,
}

impl Parse for FamilyAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut dimensions: Option<Expr> = None;
        let mut name: Option<LitStr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "dimensions" => dimensions = Some(input.parse()?),
                "name" => name = Some(input.parse()?),
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

        let dimensions = dimensions.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimensions`")
        })?;

        Ok(FamilyAttribute { dimensions, name })
    }
}

/// Parsed contents of a variant-level `#[unit(...)]` attribute.
struct UnitAttribute {
    abbreviation: LitStr,
    standard: bool,
    scale: Option<Expr>,
    per: Option<Expr>,
    offset: Option<Expr>,
    spellings: Vec<LitStr>,
    systems: Vec<Ident>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut abbreviation: Option<LitStr> = None;
        let mut standard = false;
        let mut scale: Option<Expr> = None;
        let mut per: Option<Expr> = None;
        let mut offset: Option<Expr> = None;
        let mut spellings = Vec::new();
        let mut systems = Vec::new();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            // `standard` is a bare flag
            if ident == "standard" {
                standard = true;
            } else {
                input.parse::<Token![=]>()?;
                match ident.to_string().as_str() {
                    "abbreviation" => abbreviation = Some(input.parse()?),
                    "scale" => scale = Some(input.parse()?),
                    "per" => per = Some(input.parse()?),
                    "offset" => offset = Some(input.parse()?),
                    "spellings" => {
                        let content;
                        bracketed!(content in input);
                        let list = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                        spellings.extend(list);
                    }
                    "systems" => {
                        let content;
                        bracketed!(content in input);
                        let list = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
                        systems.extend(list);
                    }
                    other => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown attribute `{}`", other),
                        ));
                    }
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let abbreviation = abbreviation.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `abbreviation`")
        })?;

        if standard && (scale.is_some() || per.is_some() || offset.is_some()) {
            return Err(syn::Error::new(
                abbreviation.span(),
                "the standard unit cannot declare `scale`, `per` or `offset`",
            ));
        }
        if !standard {
            match (&scale, &per) {
                (None, None) => {
                    return Err(syn::Error::new(
                        abbreviation.span(),
                        "missing required attribute `scale` (or `per`)",
                    ));
                }
                (Some(_), Some(_)) => {
                    return Err(syn::Error::new(
                        abbreviation.span(),
                        "`scale` and `per` are mutually exclusive",
                    ));
                }
                _ => {}
            }
        }
        if per.is_some() && offset.is_some() {
            return Err(syn::Error::new(
                abbreviation.span(),
                "`offset` requires `scale`",
            ));
        }

        Ok(UnitAttribute {
            abbreviation,
            standard,
            scale,
            per,
            offset,
            spellings,
            systems,
        })
    }
}

/// One enum variant with its parsed attribute.
struct Variant {
    ident: Ident,
    unit: UnitAttribute,
}

impl Variant {
    /// Name of the hidden associated const holding this variant's conversion row.
    fn conversion_const(&self) -> Ident {
        format_ident!("{}_CONVERSION", screaming_snake(&self.ident.to_string()))
    }

    /// All accepted spellings, abbreviation first, without duplicates.
    fn all_spellings(&self) -> Vec<String> {
        let mut out = vec![self.unit.abbreviation.value()];
        for s in &self.unit.spellings {
            let s = s.value();
            if !out.contains(&s) {
                out.push(s);
            }
        }
        out
    }
}

fn screaming_snake(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 8);
    for (i, c) in ident.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(c.to_uppercase());
    }
    out
}

fn parse_family_attribute(attrs: &[Attribute]) -> syn::Result<FamilyAttribute> {
    for attr in attrs {
        if attr.path().is_ident("family") {
            return attr.parse_args::<FamilyAttribute>();
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        "missing #[family(...)] attribute",
    ))
}

fn parse_unit_attribute(variant: &syn::Variant) -> syn::Result<UnitAttribute> {
    for attr in &variant.attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        variant.ident.span(),
        format!("missing #[unit(...)] attribute on `{}`", variant.ident),
    ))
}

fn collect_variants(input: &DeriveInput) -> syn::Result<Vec<Variant>> {
    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "UnitFamily can only be derived for enums",
            ))
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.ident.span(),
            "UnitFamily cannot be derived for generic enums",
        ));
    }

    let mut variants = Vec::with_capacity(data.variants.len());
    for v in &data.variants {
        if !matches!(v.fields, Fields::Unit) {
            return Err(syn::Error::new(
                v.ident.span(),
                "unit-family variants cannot carry fields",
            ));
        }
        variants.push(Variant {
            ident: v.ident.clone(),
            unit: parse_unit_attribute(v)?,
        });
    }

    if variants.is_empty() {
        return Err(syn::Error::new(
            input.ident.span(),
            "a unit family needs at least one variant",
        ));
    }

    Ok(variants)
}

/// Checks the family-wide invariants and returns the standard variant's index.
fn validate(name: &Ident, variants: &[Variant]) -> syn::Result<usize> {
    let standards: Vec<usize> = variants
        .iter()
        .enumerate()
        .filter(|(_, v)| v.unit.standard)
        .map(|(i, _)| i)
        .collect();
    let standard = match standards.as_slice() {
        [one] => *one,
        [] => {
            return Err(syn::Error::new(
                name.span(),
                "exactly one variant must be marked `standard`",
            ))
        }
        [_, second, ..] => {
            return Err(syn::Error::new(
                variants[*second].ident.span(),
                "exactly one variant must be marked `standard`",
            ))
        }
    };

    let mut owners: HashMap<String, &Ident> = HashMap::new();
    for v in variants {
        for spelling in v.all_spellings() {
            if let Some(owner) = owners.insert(spelling.clone(), &v.ident) {
                return Err(syn::Error::new(
                    v.ident.span(),
                    format!("spelling {:?} is already used by `{}`", spelling, owner),
                ));
            }
        }
    }

    let mut claimed: HashMap<String, &Ident> = HashMap::new();
    for v in variants {
        for system in &v.unit.systems {
            let key = system.to_string();
            if !UNIT_SYSTEMS.contains(&key.as_str()) {
                return Err(syn::Error::new(
                    system.span(),
                    format!("unknown unit system `{}`", key),
                ));
            }
            if let Some(owner) = claimed.insert(key.clone(), &v.ident) {
                return Err(syn::Error::new(
                    system.span(),
                    format!("unit system `{}` is already mapped to `{}`", key, owner),
                ));
            }
        }
    }
    if let Some(missing) = UNIT_SYSTEMS.iter().find(|s| !claimed.contains_key(**s)) {
        return Err(syn::Error::new(
            name.span(),
            format!("no variant is mapped to unit system `{}`", missing),
        ));
    }

    Ok(standard)
}

fn conversion_expr(unit: &UnitAttribute) -> TokenStream2 {
    if unit.standard {
        return quote!(crate::Conversion::IDENTITY);
    }
    match (&unit.scale, &unit.per, &unit.offset) {
        (Some(scale), _, None) => quote!(crate::Conversion::scaled(#scale)),
        (Some(scale), _, Some(offset)) => quote!(crate::Conversion::affine(#scale, #offset)),
        (None, Some(per), _) => quote!(crate::Conversion::reciprocal(#per)),
        // rejected while parsing
        (None, None, _) => quote!(crate::Conversion::IDENTITY),
    }
}

fn derive_unit_family_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let family = parse_family_attribute(&input.attrs)?;
    let variants = collect_variants(&input)?;
    let standard_index = validate(name, &variants)?;

    let dimensions = &family.dimensions;
    let family_name = family
        .name
        .as_ref()
        .map(LitStr::value)
        .unwrap_or_else(|| name.to_string());
    let standard = &variants[standard_index].ident;

    let idents: Vec<&Ident> = variants.iter().map(|v| &v.ident).collect();
    let abbreviations: Vec<&LitStr> = variants.iter().map(|v| &v.unit.abbreviation).collect();
    let spellings: Vec<Vec<String>> = variants.iter().map(Variant::all_spellings).collect();
    let conversion_consts: Vec<Ident> = variants.iter().map(Variant::conversion_const).collect();
    let conversion_exprs: Vec<TokenStream2> =
        variants.iter().map(|v| conversion_expr(&v.unit)).collect();

    let consistent_arms = variants.iter().flat_map(|v| {
        let ident = &v.ident;
        v.unit
            .systems
            .iter()
            .map(move |sys| quote!(crate::UnitSystem::#sys => #name::#ident))
    });

    let related_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        let first = UNIT_SYSTEMS
            .iter()
            .find(|s| v.unit.systems.iter().any(|sys| sys == *s))
            .map(|s| Ident::new(s, Span::call_site()));
        match first {
            Some(sys) => quote!(#name::#ident => ::core::option::Option::Some(crate::UnitSystem::#sys)),
            None => quote!(#name::#ident => ::core::option::Option::None),
        }
    });

    let marker_docs = variants.iter().map(|v| {
        format!(
            "Compile-time marker for [`{}::{}`](super::{}::{}) (`{}`).",
            name,
            v.ident,
            name,
            v.ident,
            v.unit.abbreviation.value()
        )
    });
    let module_doc = format!("Compile-time unit markers of [`{}`](super::{}).", name, name);

    let expanded = quote! {
        impl #name {
            #(
                const #conversion_consts: crate::Conversion = #conversion_exprs;
            )*
        }

        impl crate::UnitFamily for #name {
            const NAME: &'static str = #family_name;
            const STANDARD: Self = #name::#standard;
            const DIMENSIONS: crate::Dimensions = #dimensions;
            const VARIANTS: &'static [Self] = &[#(#name::#idents),*];

            fn abbreviation(self) -> &'static str {
                match self {
                    #(#name::#idents => #abbreviations,)*
                }
            }

            fn spellings(self) -> &'static [&'static str] {
                match self {
                    #(#name::#idents => &[#(#spellings),*],)*
                }
            }

            fn conversion(self) -> crate::Conversion {
                match self {
                    #(#name::#idents => Self::#conversion_consts,)*
                }
            }

            fn consistent_unit(system: crate::UnitSystem) -> Self {
                match system {
                    #(#consistent_arms,)*
                }
            }

            fn related_unit_system(self) -> ::core::option::Option<crate::UnitSystem> {
                match self {
                    #(#related_arms,)*
                }
            }

            fn registry() -> &'static crate::Registry<Self> {
                static REGISTRY: crate::registry::Lazy<crate::Registry<#name>> =
                    crate::registry::Lazy::new(crate::Registry::build);
                &REGISTRY
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<#name as crate::UnitFamily>::abbreviation(*self))
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = crate::ParseUnitError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <#name as crate::UnitFamily>::parse(s).ok_or_else(|| crate::ParseUnitError {
                    family: #family_name,
                    input: s.to_string(),
                })
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for #name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(<#name as crate::UnitFamily>::abbreviation(*self))
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for #name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::core::result::Result<Self, D::Error> {
                let s = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(::serde::de::Error::custom)
            }
        }

        #[doc = #module_doc]
        pub mod unit {
            #(
                #[doc = #marker_docs]
                #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
                pub struct #idents;

                impl crate::StaticUnit for #idents {
                    type Family = super::#name;
                    const UNIT: super::#name = super::#name::#idents;
                    const TO_STANDARD: crate::Transform = super::#name::#conversion_consts.to_standard();
                    const FROM_STANDARD: crate::Transform = super::#name::#conversion_consts.from_standard();
                }
            )*
        }
    };

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    fn mass_input() -> DeriveInput {
        parse_quote! {
            #[family(dimensions = Dimensions::new(0, 0, 1, 0, 0, 0, 0))]
            pub enum Mass {
                #[unit(standard, abbreviation = "kg", systems = [MetreKilogramSecondKelvin])]
                Kilogram,
                #[unit(abbreviation = "g", scale = 0.001, spellings = ["gram"], systems = [MillimetreGramSecondKelvin])]
                Gram,
                #[unit(abbreviation = "slug", scale = 14.6, systems = [FootPoundSecondRankine, InchPoundSecondRankine])]
                Slug,
            }
        }
    }

    #[test]
    fn test_parse_family_attribute_complete() {
        let input = mass_input();
        let attr = parse_family_attribute(&input.attrs).unwrap();
        assert!(attr.name.is_none());
    }

    #[test]
    fn test_parse_family_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum Mass { Kilogram }
        };
        let err = parse_family_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[family(...)] attribute"));
    }

    #[test]
    fn test_family_attribute_missing_dimensions() {
        let tokens = quote! { name = "Mass" };
        let result: syn::Result<FamilyAttribute> = syn::parse2(tokens);
        let err = result.err().unwrap();
        assert!(err.to_string().contains("missing required attribute `dimensions`"));
    }

    #[test]
    fn test_unit_attribute_standard_flag() {
        let tokens = quote! { standard, abbreviation = "kg" };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert!(attr.standard);
        assert!(attr.scale.is_none());
    }

    #[test]
    fn test_unit_attribute_lists() {
        let tokens = quote! {
            abbreviation = "kg/m^3",
            scale = 1.0,
            spellings = ["kg/m3", "kg/m/m/m",],
            systems = [MetreKilogramSecondKelvin]
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.spellings.len(), 2);
        assert_eq!(attr.systems[0], "MetreKilogramSecondKelvin");
    }

    #[test]
    fn test_unit_attribute_missing_abbreviation() {
        let tokens = quote! { scale = 1.0 };
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        let err = result.err().unwrap();
        assert!(err.to_string().contains("missing required attribute `abbreviation`"));
    }

    #[test]
    fn test_unit_attribute_missing_scale() {
        let tokens = quote! { abbreviation = "g" };
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        let err = result.err().unwrap();
        assert!(err.to_string().contains("missing required attribute `scale`"));
    }

    #[test]
    fn test_unit_attribute_scale_and_per() {
        let tokens = quote! { abbreviation = "g", scale = 0.001, per = 1000.0 };
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        let err = result.err().unwrap();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_unit_attribute_per_with_offset() {
        let tokens = quote! { abbreviation = "g", per = 1000.0, offset = 1.0 };
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        let err = result.err().unwrap();
        assert!(err.to_string().contains("`offset` requires `scale`"));
    }

    #[test]
    fn test_conversion_expr_per() {
        let attr: UnitAttribute = syn::parse2(quote! { abbreviation = "mm", per = 1e3 }).unwrap();
        let code = conversion_expr(&attr).to_string();
        assert_eq!(code, "crate :: Conversion :: reciprocal (1e3)");
    }

    #[test]
    fn test_unit_attribute_standard_with_scale() {
        let tokens = quote! { standard, abbreviation = "kg", scale = 2.0 };
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        let err = result.err().unwrap();
        assert!(err.to_string().contains("cannot declare"));
    }

    #[test]
    fn test_unit_attribute_unknown_field() {
        let tokens = quote! { abbreviation = "g", scale = 1.0, plural = "grams" };
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        let err = result.err().unwrap();
        assert!(err.to_string().contains("unknown attribute"));
    }

    #[test]
    fn test_screaming_snake() {
        assert_eq!(screaming_snake("Gram"), "GRAM");
        assert_eq!(
            screaming_snake("KilogramPerCubicMetre"),
            "KILOGRAM_PER_CUBIC_METRE"
        );
    }

    #[test]
    fn test_derive_basic() {
        let code = derive_unit_family_impl(mass_input()).unwrap().to_string();
        assert!(code.contains("impl crate :: UnitFamily for Mass"));
        assert!(code.contains("const STANDARD : Self = Mass :: Kilogram"));
        assert!(code.contains("crate :: Conversion :: scaled (0.001)"));
        assert!(code.contains("const GRAM_CONVERSION"));
        assert!(code.contains("pub mod unit"));
        assert!(code.contains("impl crate :: StaticUnit for Slug"));
    }

    #[test]
    fn test_derive_related_system_picks_first() {
        let code = derive_unit_family_impl(mass_input()).unwrap().to_string();
        assert!(code.contains(
            "Mass :: Slug => :: core :: option :: Option :: Some (crate :: UnitSystem :: FootPoundSecondRankine)"
        ));
    }

    #[test]
    fn test_derive_rejects_two_standards() {
        let input: DeriveInput = parse_quote! {
            #[family(dimensions = D)]
            pub enum Mass {
                #[unit(standard, abbreviation = "kg", systems = [MetreKilogramSecondKelvin, MillimetreGramSecondKelvin, FootPoundSecondRankine, InchPoundSecondRankine])]
                Kilogram,
                #[unit(standard, abbreviation = "g")]
                Gram,
            }
        };
        let err = derive_unit_family_impl(input).err().unwrap();
        assert!(err.to_string().contains("exactly one variant"));
    }

    #[test]
    fn test_derive_rejects_duplicate_spelling() {
        let input: DeriveInput = parse_quote! {
            #[family(dimensions = D)]
            pub enum Mass {
                #[unit(standard, abbreviation = "kg", systems = [MetreKilogramSecondKelvin, MillimetreGramSecondKelvin, FootPoundSecondRankine, InchPoundSecondRankine])]
                Kilogram,
                #[unit(abbreviation = "g", scale = 0.001, spellings = ["kg"])]
                Gram,
            }
        };
        let err = derive_unit_family_impl(input).err().unwrap();
        assert!(err.to_string().contains("already used"));
    }

    #[test]
    fn test_derive_rejects_missing_system() {
        let input: DeriveInput = parse_quote! {
            #[family(dimensions = D)]
            pub enum Mass {
                #[unit(standard, abbreviation = "kg", systems = [MetreKilogramSecondKelvin])]
                Kilogram,
            }
        };
        let err = derive_unit_family_impl(input).err().unwrap();
        assert!(err.to_string().contains("MillimetreGramSecondKelvin"));
    }

    #[test]
    fn test_derive_rejects_unknown_system() {
        let input: DeriveInput = parse_quote! {
            #[family(dimensions = D)]
            pub enum Mass {
                #[unit(standard, abbreviation = "kg", systems = [CentimetreGramSecond])]
                Kilogram,
            }
        };
        let err = derive_unit_family_impl(input).err().unwrap();
        assert!(err.to_string().contains("unknown unit system"));
    }

    #[test]
    fn test_derive_rejects_struct() {
        let input: DeriveInput = parse_quote! {
            #[family(dimensions = D)]
            pub struct Mass;
        };
        let err = derive_unit_family_impl(input).err().unwrap();
        assert!(err.to_string().contains("only be derived for enums"));
    }

    #[test]
    fn test_derive_error_path_is_compile_error() {
        let input: DeriveInput = parse_quote! {
            pub enum Mass { Kilogram }
        };
        let err = derive_unit_family_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
