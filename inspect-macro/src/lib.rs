use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DataEnum, DeriveInput, Fields, Ident, LitStr, Type, Variant, parse_macro_input,
    parse_quote,
};

/// Derive `Inspect` for a struct or enum.
///
/// The shape is picked from the type's form:
///
/// - fieldless enums render as a single-choice list,
/// - enums with data render as a sum type with an alternative switcher,
/// - structs without fields render as an empty marker,
/// - other structs render their fields in declaration order.
///
/// # Container attributes
///
/// - `#[inspect(opaque)]` - show an integer newtype or a fieldless enum as its
///   raw number only; enums use their discriminant, typed by `#[repr(..)]`
///   (`isize` without one), and accept edits matching a variant
/// - `#[inspect(display)]` - show the value read-only through its `Display` impl
/// - `#[inspect(default)]` - construct new values with `Default::default()`
/// - `#[inspect(default = "path::to::fn")]` - construct new values by calling `fn()`
/// - `#[inspect(no_default)]` - never construct new values
///
/// Without a default attribute, structs are constructed field by field and
/// enums construct their `#[default]` variant (which needs `derive(Default)`),
/// or the first one. Fields are built through the inspector, so default
/// providers registered at runtime apply to them.
///
/// # Field attributes
///
/// - `#[inspect(skip)]` - do not render the field; constructed values use
///   `Default::default()` for it
///
/// ```ignore
/// #[derive(Inspect, Default)]
/// enum Collider {
///     Sphere { radius: f32 },
///     Box { half_extents: [f32; 3] },
///     #[default]
///     None,
/// }
///
/// #[derive(Inspect)]
/// #[inspect(opaque)]
/// struct MeshId(u32);
/// ```
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

enum DefaultValue {
    /// Field-wise for structs, `#[default]` or first variant for enums.
    Structural,
    Trait,
    Path(syn::Path),
    Disabled,
}

struct ContainerAttrs {
    opaque: bool,
    display: bool,
    default: DefaultValue,
}

fn container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut parsed = ContainerAttrs {
        opaque: false,
        display: false,
        default: DefaultValue::Structural,
    };
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("inspect")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("opaque") {
                parsed.opaque = true;
            } else if meta.path.is_ident("display") {
                parsed.display = true;
            } else if meta.path.is_ident("no_default") {
                parsed.default = DefaultValue::Disabled;
            } else if meta.path.is_ident("default") {
                parsed.default = if meta.input.peek(syn::Token![=]) {
                    let path: LitStr = meta.value()?.parse()?;
                    DefaultValue::Path(path.parse()?)
                } else {
                    DefaultValue::Trait
                };
            } else {
                return Err(meta.error("unsupported `inspect` attribute"));
            }
            Ok(())
        })?;
    }
    Ok(parsed)
}

fn is_skipped(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut skip = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("inspect")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported `inspect` field attribute"))
            }
        })?;
    }
    Ok(skip)
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// One field of a struct or variant.
struct Member<'a> {
    /// `name` for named fields, `0` for positional ones.
    member: syn::Member,
    /// Local name when destructured in a `match`.
    binding: Ident,
    label: String,
    ty: &'a Type,
    skip: bool,
}

fn members(fields: &Fields) -> syn::Result<Vec<Member<'_>>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let (member, binding, label) = match &field.ident {
                Some(ident) => (
                    syn::Member::Named(ident.clone()),
                    format_ident!("__{}", ident),
                    ident.to_string().trim_start_matches("r#").to_owned(),
                ),
                None => (
                    syn::Member::Unnamed(index.into()),
                    format_ident!("__{}", index),
                    format!(".{index}"),
                ),
            };
            Ok(Member {
                member,
                binding,
                label,
                ty: &field.ty,
                skip: is_skipped(&field.attrs)?,
            })
        })
        .collect()
}

/// Label tokens for each rendered member. A lone positional member takes
/// `outer` so a newtype reads like the value it wraps.
fn labels(fields: &Fields, members: &[Member<'_>], outer: TokenStream2) -> Vec<TokenStream2> {
    let shown = members.iter().filter(|m| !m.skip).count();
    members
        .iter()
        .filter(|m| !m.skip)
        .map(|m| {
            if shown == 1 && matches!(fields, Fields::Unnamed(_)) {
                outer.clone()
            } else {
                let label = &m.label;
                quote! { #label }
            }
        })
        .collect()
}

/// Where member values come from when a fresh instance is built.
#[derive(Clone, Copy)]
enum Source {
    /// `<A as Inspect>::construct()`, usable in `const` context.
    Static,
    /// `inspector.construct::<A>()`, honoring registered default providers.
    Inspector,
}

/// Conjunction of member constructibility over rendered members.
fn fields_constructible(members: &[Member<'_>], source: Source) -> TokenStream2 {
    let types = members.iter().filter(|m| !m.skip).map(|m| m.ty);
    match source {
        Source::Static => {
            quote! { true #(&& <#types as ::redlilium_inspect::Inspect>::CONSTRUCTIBLE)* }
        }
        Source::Inspector => quote! { true #(&& inspector.can_construct::<#types>())* },
    }
}

/// Constructor expression for `path` built from member defaults. Must be
/// used inside a function returning `Option`.
fn fields_construct(
    path: TokenStream2,
    fields: &Fields,
    members: &[Member<'_>],
    source: Source,
) -> TokenStream2 {
    let values = members.iter().map(|m| {
        let ty = m.ty;
        match (m.skip, source) {
            (true, _) => quote! { <#ty as ::core::default::Default>::default() },
            (false, Source::Static) => quote! { <#ty as ::redlilium_inspect::Inspect>::construct()? },
            (false, Source::Inspector) => quote! { inspector.construct::<#ty>()? },
        }
    });
    match fields {
        Fields::Named(_) => {
            let names = members.iter().map(|m| &m.member);
            quote! { #path { #(#names: #values),* } }
        }
        Fields::Unnamed(_) => quote! { #path(#(#values),*) },
        Fields::Unit => path,
    }
}

/// Destructuring pattern binding every rendered member by its `binding`.
fn fields_pattern(path: TokenStream2, fields: &Fields, members: &[Member<'_>]) -> TokenStream2 {
    let bindings = members.iter().map(|m| {
        if m.skip {
            quote! { _ }
        } else {
            let binding = &m.binding;
            quote! { #binding }
        }
    });
    match fields {
        Fields::Named(_) => {
            let names = members.iter().map(|m| &m.member);
            quote! { #path { #(#names: #bindings),* } }
        }
        Fields::Unnamed(_) => quote! { #path(#(#bindings),*) },
        Fields::Unit => path,
    }
}

// ---------------------------------------------------------------------------
// Expansion
// ---------------------------------------------------------------------------

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let attrs = container_attrs(&input.attrs)?;

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param
            .bounds
            .push(parse_quote!(::redlilium_inspect::Inspect));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let name = &input.ident;

    let body = match &input.data {
        Data::Struct(data) => expand_struct(input, &attrs, &data.fields)?,
        Data::Enum(data) => expand_enum(input, &attrs, data)?,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "Inspect cannot be derived for unions; implement it by hand",
            ));
        }
    };

    let Expansion {
        facts,
        constructible,
        construct,
        construct_with,
        inspect,
        inspect_mut,
        extra,
    } = body;

    // Only structural construction has members to route through the inspector.
    let construct_with = match (&attrs.default, construct_with) {
        (DefaultValue::Structural, Some(ConstructWith { constructible, construct })) => quote! {
            #[allow(unused_variables)]
            fn construct_with(
                inspector: &::redlilium_inspect::Inspector,
            ) -> ::core::option::Option<Self> {
                #construct
            }

            #[allow(unused_variables)]
            fn constructible_with(inspector: &::redlilium_inspect::Inspector) -> bool {
                #constructible
            }
        },
        _ => TokenStream2::new(),
    };

    let (constructible, construct) = match &attrs.default {
        DefaultValue::Structural => (constructible, construct),
        DefaultValue::Trait => (
            quote! { true },
            quote! { ::core::option::Option::Some(<Self as ::core::default::Default>::default()) },
        ),
        DefaultValue::Path(path) => (
            quote! { true },
            quote! { ::core::option::Option::Some(#path()) },
        ),
        DefaultValue::Disabled => (quote! { false }, quote! { ::core::option::Option::None }),
    };

    Ok(quote! {
        impl #impl_generics ::redlilium_inspect::Inspect for #name #ty_generics #where_clause {
            const SHAPE: ::redlilium_inspect::Shape =
                ::redlilium_inspect::Shape::of(::redlilium_inspect::ShapeFacts {
                    #facts
                    ..::redlilium_inspect::ShapeFacts::NONE
                });
            const CONSTRUCTIBLE: bool = #constructible;

            fn construct() -> ::core::option::Option<Self> {
                #construct
            }

            #construct_with

            fn inspect(&self, name: &str, cx: &mut ::redlilium_inspect::InspectContext<'_, '_>) {
                #inspect
            }

            fn inspect_mut(
                &mut self,
                name: &str,
                cx: &mut ::redlilium_inspect::InspectContext<'_, '_>,
            ) {
                #inspect_mut
            }
        }

        #extra
    })
}

struct Expansion {
    /// `ShapeFacts` fields, each followed by a comma.
    facts: TokenStream2,
    constructible: TokenStream2,
    construct: TokenStream2,
    /// Bodies of `constructible_with` / `construct_with`, for types built
    /// from members.
    construct_with: Option<ConstructWith>,
    inspect: TokenStream2,
    inspect_mut: TokenStream2,
    /// Strategy trait impls.
    extra: TokenStream2,
}

struct ConstructWith {
    constructible: TokenStream2,
    construct: TokenStream2,
}

fn strategy_impl(input: &DeriveInput, trait_path: TokenStream2, items: TokenStream2) -> TokenStream2 {
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param
            .bounds
            .push(parse_quote!(::redlilium_inspect::Inspect));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let name = &input.ident;
    quote! {
        impl #impl_generics #trait_path for #name #ty_generics #where_clause {
            #items
        }
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

fn expand_struct(input: &DeriveInput, attrs: &ContainerAttrs, fields: &Fields) -> syn::Result<Expansion> {
    let members = members(fields)?;
    let constructible = fields_constructible(&members, Source::Static);
    let construct = {
        let value = fields_construct(quote! { Self }, fields, &members, Source::Static);
        quote! { ::core::option::Option::Some(#value) }
    };
    let construct_with = {
        let value = fields_construct(quote! { Self }, fields, &members, Source::Inspector);
        Some(ConstructWith {
            constructible: fields_constructible(&members, Source::Inspector),
            construct: quote! { ::core::option::Option::Some(#value) },
        })
    };

    if attrs.opaque {
        return expand_opaque_newtype(input, fields, &members, constructible, construct);
    }

    if fields.is_empty() {
        let facts = if attrs.display {
            quote! { empty: true, text: true, }
        } else {
            quote! { empty: true, }
        };
        let show = quote! { ::redlilium_inspect::strategy::aggregate::show_empty::<Self>(name, cx); };
        return Ok(Expansion {
            facts,
            constructible,
            construct,
            construct_with,
            inspect: show.clone(),
            inspect_mut: show,
            extra: TokenStream2::new(),
        });
    }

    if attrs.display {
        let show = quote! { ::redlilium_inspect::strategy::aggregate::show_text(self, name, cx); };
        return Ok(Expansion {
            facts: quote! { text: true, aggregate: true, },
            constructible,
            construct,
            construct_with,
            inspect: show.clone(),
            inspect_mut: show,
            extra: TokenStream2::new(),
        });
    }

    let shown: Vec<&Member<'_>> = members.iter().filter(|m| !m.skip).collect();
    let count = shown.len();
    let accessors: Vec<&syn::Member> = shown.iter().map(|m| &m.member).collect();
    let labels = labels(fields, &members, quote! { name });

    Ok(Expansion {
        facts: quote! { aggregate: true, },
        constructible,
        construct,
        construct_with,
        inspect: quote! {
            cx.group::<Self>(name, #count, |cx| {
                #(cx.show(&self.#accessors, #labels);)*
            });
        },
        inspect_mut: quote! {
            cx.group::<Self>(name, #count, |cx| {
                #(cx.show_mut(&mut self.#accessors, #labels);)*
            });
        },
        extra: TokenStream2::new(),
    })
}

fn expand_opaque_newtype(
    input: &DeriveInput,
    fields: &Fields,
    members: &[Member<'_>],
    constructible: TokenStream2,
    construct: TokenStream2,
) -> syn::Result<Expansion> {
    let [field] = members else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`#[inspect(opaque)]` structs must wrap exactly one integer field",
        ));
    };
    let raw_ty = field.ty;
    let member = &field.member;
    let rebuilt = match fields {
        Fields::Named(_) => quote! { Self { #member: raw } },
        _ => quote! { Self(raw) },
    };

    let extra = strategy_impl(
        input,
        quote! { ::redlilium_inspect::strategy::handle::Handle },
        quote! {
            type Raw = #raw_ty;
            const EDITABLE: bool = true;

            fn raw(&self) -> #raw_ty {
                self.#member
            }

            fn from_raw(raw: #raw_ty) -> ::core::option::Option<Self> {
                ::core::option::Option::Some(#rebuilt)
            }
        },
    );

    Ok(Expansion {
        facts: quote! { opaque: true, },
        constructible,
        construct,
        construct_with: None,
        inspect: quote! { ::redlilium_inspect::strategy::handle::show_handle(self, name, cx); },
        inspect_mut: quote! { ::redlilium_inspect::strategy::handle::edit_handle(self, name, cx); },
        extra,
    })
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

fn default_variant(data: &DataEnum) -> usize {
    data.variants
        .iter()
        .position(|variant| variant.attrs.iter().any(|attr| attr.path().is_ident("default")))
        .unwrap_or(0)
}

/// Integer type named by the enum's `#[repr(..)]`, `isize` without one.
fn discriminant_type(input: &DeriveInput) -> syn::Result<Ident> {
    const INTEGERS: &[&str] = &[
        "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize",
    ];
    let mut repr = None;
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident()
                && INTEGERS.contains(&ident.to_string().as_str())
            {
                repr = Some(ident.clone());
            } else if meta.input.peek(syn::token::Paren) {
                // `align(..)` and friends carry arguments we do not need.
                let _ = meta.input.parse::<proc_macro2::Group>()?;
            }
            Ok(())
        })?;
    }
    Ok(repr.unwrap_or_else(|| format_ident!("isize")))
}

fn expand_enum(input: &DeriveInput, attrs: &ContainerAttrs, data: &DataEnum) -> syn::Result<Expansion> {
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Inspect cannot be derived for enums without variants",
        ));
    }

    let fieldless = data
        .variants
        .iter()
        .all(|variant| matches!(variant.fields, Fields::Unit));
    let idents: Vec<&Ident> = data.variants.iter().map(|variant| &variant.ident).collect();
    let indices: Vec<usize> = (0..idents.len()).collect();
    let default_ident = idents[default_variant(data)];

    if fieldless {
        let names: Vec<String> = idents.iter().map(|ident| ident.to_string()).collect();
        let index_fn = quote! {
            fn index(&self) -> usize {
                match self {
                    #(Self::#idents => #indices,)*
                }
            }
        };
        let construct = quote! { ::core::option::Option::Some(Self::#default_ident) };

        if attrs.opaque {
            let repr = discriminant_type(input)?;
            let extra = strategy_impl(
                input,
                quote! { ::redlilium_inspect::strategy::handle::Handle },
                quote! {
                    type Raw = #repr;
                    const EDITABLE: bool = true;

                    fn raw(&self) -> #repr {
                        match self {
                            #(Self::#idents => Self::#idents as #repr,)*
                        }
                    }

                    fn from_raw(raw: #repr) -> ::core::option::Option<Self> {
                        #(
                            if raw == Self::#idents as #repr {
                                return ::core::option::Option::Some(Self::#idents);
                            }
                        )*
                        ::core::option::Option::None
                    }
                },
            );
            return Ok(Expansion {
                facts: quote! { opaque: true, },
                constructible: quote! { true },
                construct,
                construct_with: None,
                inspect: quote! { ::redlilium_inspect::strategy::handle::show_handle(self, name, cx); },
                inspect_mut: quote! { ::redlilium_inspect::strategy::handle::edit_handle(self, name, cx); },
                extra,
            });
        }

        let extra = strategy_impl(
            input,
            quote! { ::redlilium_inspect::strategy::enumeration::Enumeration },
            quote! {
                const VARIANTS: &'static [&'static str] = &[#(#names),*];

                #index_fn

                fn from_index(index: usize) -> ::core::option::Option<Self> {
                    match index {
                        #(#indices => ::core::option::Option::Some(Self::#idents),)*
                        _ => ::core::option::Option::None,
                    }
                }
            },
        );
        let facts = if attrs.display {
            quote! { enumeration: true, text: true, }
        } else {
            quote! { enumeration: true, }
        };
        return Ok(Expansion {
            facts,
            constructible: quote! { true },
            construct,
            construct_with: None,
            inspect: quote! {
                ::redlilium_inspect::strategy::enumeration::show_enumeration(self, name, cx);
            },
            inspect_mut: quote! {
                ::redlilium_inspect::strategy::enumeration::edit_enumeration(self, name, cx);
            },
            extra,
        });
    }

    if attrs.opaque {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`#[inspect(opaque)]` enums must not carry data",
        ));
    }

    expand_sum(input, attrs, data)
}

struct VariantParts {
    alternative: TokenStream2,
    constructible: TokenStream2,
    /// Static constructor expression, used by `construct`.
    construct: TokenStream2,
    constructible_arm: TokenStream2,
    construct_arm: TokenStream2,
    active_arm: TokenStream2,
    show_arm: TokenStream2,
    show_mut_arm: TokenStream2,
}

fn variant_parts(variant: &Variant, index: usize) -> syn::Result<VariantParts> {
    let ident = &variant.ident;
    let name = ident.to_string();
    let fields = &variant.fields;
    let members = members(fields)?;

    let constructible = fields_constructible(&members, Source::Static);
    let construct = fields_construct(quote! { Self::#ident }, fields, &members, Source::Static);
    let constructible_with = fields_constructible(&members, Source::Inspector);
    let construct_with =
        fields_construct(quote! { Self::#ident }, fields, &members, Source::Inspector);
    let pattern = fields_pattern(quote! { Self::#ident }, fields, &members);
    let wildcard = match fields {
        Fields::Named(_) => quote! { Self::#ident { .. } },
        Fields::Unnamed(_) => quote! { Self::#ident(..) },
        Fields::Unit => quote! { Self::#ident },
    };

    let shown: Vec<&Member<'_>> = members.iter().filter(|m| !m.skip).collect();
    let count = shown.len();
    let bindings: Vec<&Ident> = shown.iter().map(|m| &m.binding).collect();
    let labels = labels(fields, &members, quote! { #name });

    let (show_arm, show_mut_arm) = if count == 0 {
        let empty = quote! {
            #wildcard => ::redlilium_inspect::strategy::aggregate::show_empty::<Self>(#name, cx),
        };
        (empty.clone(), empty)
    } else {
        (
            quote! {
                #pattern => cx.group::<Self>(#name, #count, |cx| {
                    #(cx.show(#bindings, #labels);)*
                }),
            },
            quote! {
                #pattern => cx.group::<Self>(#name, #count, |cx| {
                    #(cx.show_mut(#bindings, #labels);)*
                }),
            },
        )
    };

    Ok(VariantParts {
        alternative: quote! { #name },
        constructible,
        construct: quote! { ::core::option::Option::Some(#construct) },
        constructible_arm: quote! { #index => #constructible_with, },
        construct_arm: quote! { #index => ::core::option::Option::Some(#construct_with), },
        active_arm: quote! { #wildcard => #index, },
        show_arm,
        show_mut_arm,
    })
}

fn expand_sum(input: &DeriveInput, attrs: &ContainerAttrs, data: &DataEnum) -> syn::Result<Expansion> {
    let parts = data
        .variants
        .iter()
        .enumerate()
        .map(|(index, variant)| variant_parts(variant, index))
        .collect::<syn::Result<Vec<_>>>()?;

    let default = default_variant(data);
    let constructible = parts[default].constructible.clone();
    let default_construct = parts[default].construct.clone();

    let alternatives = parts.iter().map(|part| &part.alternative);
    let constructible_arms = parts.iter().map(|part| &part.constructible_arm);
    let construct_arms = parts.iter().map(|part| &part.construct_arm);
    let active_arms = parts.iter().map(|part| &part.active_arm);
    let show_arms = parts.iter().map(|part| &part.show_arm);
    let show_mut_arms = parts.iter().map(|part| &part.show_mut_arm);

    let extra = strategy_impl(
        input,
        quote! { ::redlilium_inspect::strategy::sum::SumType },
        quote! {
            const ALTERNATIVES: &'static [&'static str] = &[#(#alternatives),*];

            fn active(&self) -> usize {
                match self {
                    #(#active_arms)*
                }
            }

            #[allow(unused_variables)]
            fn can_construct_alternative(
                index: usize,
                inspector: &::redlilium_inspect::Inspector,
            ) -> bool {
                match index {
                    #(#constructible_arms)*
                    _ => false,
                }
            }

            #[allow(unused_variables)]
            fn construct_alternative(
                index: usize,
                inspector: &::redlilium_inspect::Inspector,
            ) -> ::core::option::Option<Self> {
                match index {
                    #(#construct_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn show_active(&self, cx: &mut ::redlilium_inspect::InspectContext<'_, '_>) {
                match self {
                    #(#show_arms)*
                }
            }

            fn show_active_mut(&mut self, cx: &mut ::redlilium_inspect::InspectContext<'_, '_>) {
                match self {
                    #(#show_mut_arms)*
                }
            }
        },
    );

    let facts = if attrs.display {
        quote! { sum: true, text: true, }
    } else {
        quote! { sum: true, }
    };

    Ok(Expansion {
        facts,
        constructible,
        construct: default_construct,
        construct_with: Some(ConstructWith {
            constructible: quote! {
                <Self as ::redlilium_inspect::strategy::sum::SumType>::can_construct_alternative(
                    #default, inspector,
                )
            },
            construct: quote! {
                <Self as ::redlilium_inspect::strategy::sum::SumType>::construct_alternative(
                    #default, inspector,
                )
            },
        }),
        inspect: quote! { ::redlilium_inspect::strategy::sum::show_sum(self, name, cx); },
        inspect_mut: quote! { ::redlilium_inspect::strategy::sum::edit_sum(self, name, cx); },
        extra,
    })
}
