// Screen signature reading
// Turns an annotated `fn` into a host-neutral Declaration, stripping the
// per-parameter default attributes on the way.

use navgen_core::{Declaration, DeclaredParameter, Literal, TypeRef};
use proc_macro2::Span;
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{
    Attribute, Expr, ExprLit, ExprUnary, FnArg, GenericArgument, Ident, ItemFn, Lit, LitBool,
    LitInt, LitStr, Pat, PatType, PathArguments, Type, TypePath, UnOp, Visibility,
};

const DEFAULT_ATTRS: [&str; 3] = ["default_string", "default_int", "default_bool"];

/// `#[nav_gen("detail")]` or `#[nav_gen(name = "detail")]`
pub struct RouteArgs {
    pub name: LitStr,
}

impl Parse for RouteArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error("expected a route name: #[nav_gen(\"route\")]"));
        }
        let name = if input.peek(LitStr) {
            input.parse()?
        } else {
            let key: Ident = input.parse()?;
            if key != "name" {
                return Err(syn::Error::new_spanned(key, "expected `name = \"route\"`"));
            }
            input.parse::<syn::Token![=]>()?;
            input.parse()?
        };
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the route name"));
        }
        Ok(Self { name })
    }
}

pub struct ScreenParam {
    pub ident: Ident,
    /// Name without any `r#` prefix, as used in routes
    pub name: String,
    pub ty: Type,
    pub span_source: PatType,
}

impl ScreenParam {
    pub fn is_option(&self) -> bool {
        option_inner(&self.ty).is_some()
    }
}

/// Everything the token backend needs from the annotated function.
pub struct Screen {
    pub vis: Visibility,
    pub function: Ident,
    pub route: Ident,
    pub route_span: Span,
    pub params: Vec<ScreenParam>,
}

impl Screen {
    pub fn param(&self, name: &str) -> Option<&ScreenParam> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// Removes the default attributes from every parameter, returning them in
/// parameter order. Runs before any validation so the emitted function never
/// carries them, even when expansion fails.
pub fn strip_default_attrs(function: &mut ItemFn) -> Vec<Vec<Attribute>> {
    function
        .sig
        .inputs
        .iter_mut()
        .map(|input| match input {
            FnArg::Typed(pat_type) => {
                let (defaults, kept): (Vec<Attribute>, Vec<Attribute>) = std::mem::take(&mut pat_type.attrs)
                    .into_iter()
                    .partition(is_default_attr);
                pat_type.attrs = kept;
                defaults
            }
            FnArg::Receiver(_) => Vec::new(),
        })
        .collect()
}

fn is_default_attr(attr: &Attribute) -> bool {
    DEFAULT_ATTRS.iter().any(|name| attr.path().is_ident(name))
}

/// Reads the function signature into a [`Screen`] and its [`Declaration`].
pub fn read_screen(
    args: &RouteArgs,
    function: &ItemFn,
    defaults: Vec<Vec<Attribute>>,
) -> syn::Result<(Screen, Declaration)> {
    let sig = &function.sig;
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "#[nav_gen] screens cannot be generic",
        ));
    }
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "#[nav_gen] screens cannot be async",
        ));
    }

    let route_name = args.name.value();
    let mut declaration = Declaration::new("", sig.ident.unraw().to_string(), route_name.as_str());
    let mut params = Vec::new();

    for (input, attrs) in sig.inputs.iter().zip(defaults) {
        let pat_type = match input {
            FnArg::Typed(pat_type) => pat_type,
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new_spanned(
                    receiver,
                    "#[nav_gen] screens must be free functions",
                ))
            }
        };
        let ident = match pat_type.pat.as_ref() {
            Pat::Ident(pat) => pat.ident.clone(),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "#[nav_gen] screen parameters must be plain identifiers",
                ))
            }
        };
        let name = ident.unraw().to_string();

        let mut declared = DeclaredParameter::new(name.as_str(), type_ref(&pat_type.ty));
        for attr in &attrs {
            declared = declared.with_default(default_literal(attr)?);
        }
        declaration = declaration.param(declared);

        params.push(ScreenParam {
            ident,
            name,
            ty: (*pat_type.ty).clone(),
            span_source: pat_type.clone(),
        });
    }

    // Empty names are reported by classification; anything else must be
    // usable as a method name.
    let mut route = if route_name.is_empty() {
        Ident::new("__navgen_unnamed", args.name.span())
    } else {
        syn::parse_str::<Ident>(&route_name)
            .ok()
            .filter(|ident| ident == route_name.as_str())
            .ok_or_else(|| {
                syn::Error::new_spanned(
                    &args.name,
                    format!("route name `{route_name}` must be a valid Rust identifier"),
                )
            })?
    };
    route.set_span(args.name.span());

    let screen = Screen {
        vis: function.vis.clone(),
        function: sig.ident.clone(),
        route,
        route_span: args.name.span(),
        params,
    };
    Ok((screen, declaration))
}

fn default_literal(attr: &Attribute) -> syn::Result<Literal> {
    if attr.path().is_ident("default_string") {
        let value: LitStr = attr.parse_args()?;
        Ok(Literal::String(value.value()))
    } else if attr.path().is_ident("default_int") {
        int_literal(&attr.parse_args::<Expr>()?).map(Literal::Int)
    } else {
        let value: LitBool = attr.parse_args()?;
        Ok(Literal::Bool(value.value))
    }
}

/// Accepts `3` and `-3`.
fn int_literal(expr: &Expr) -> syn::Result<i32> {
    let (lit, negative): (&LitInt, bool) = match expr {
        Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }) => (lit, false),
        Expr::Unary(ExprUnary { op: UnOp::Neg(_), expr: inner, .. }) => match inner.as_ref() {
            Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }) => (lit, true),
            other => return Err(syn::Error::new_spanned(other, "expected an integer literal")),
        },
        other => return Err(syn::Error::new_spanned(other, "expected an integer literal")),
    };

    let magnitude: i64 = lit.base10_parse()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| syn::Error::new_spanned(expr, "default_int value does not fit in i32"))
}

fn type_ref(ty: &Type) -> TypeRef {
    let source = type_text(ty);
    match option_inner(ty) {
        Some(inner) => TypeRef::new(type_text(inner), true, source),
        None => TypeRef::new(source.clone(), false, source),
    }
}

fn type_text(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// `T` for `Option<T>` (any path ending in `Option`).
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let last = path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match (args.args.len(), args.args.first()) {
        (1, Some(GenericArgument::Type(inner))) => Some(inner),
        _ => None,
    }
}
