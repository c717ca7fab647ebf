// #[nav_gen] expansion
// attribute + fn -> Declaration -> classify -> shapes -> tokens

use navgen_core::{classify, generate, ClassificationError, KnownTypes, UnitNaming};
use once_cell::sync::Lazy;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemFn;

use crate::screen::{read_screen, strip_default_attrs, RouteArgs, Screen};
use crate::tokens::render_unit;

/// Resolved once per compilation and shared by every annotated screen.
static KNOWN_TYPES: Lazy<KnownTypes> = Lazy::new(KnownTypes::rust);

pub fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args: RouteArgs = match syn::parse2(attr) {
        Ok(args) => args,
        Err(err) => return with_error(err, item),
    };
    let mut function: ItemFn = match syn::parse2(item) {
        Ok(function) => function,
        Err(err) => return err.to_compile_error(),
    };

    let defaults = strip_default_attrs(&mut function);
    match generate_items(&args, &function, defaults) {
        Ok(items) => quote! {
            #function
            #items
        },
        Err(err) => with_error(err, quote!(#function)),
    }
}

/// Keeps the screen function so one bad signature yields one diagnostic.
fn with_error(err: syn::Error, item: TokenStream) -> TokenStream {
    let err = err.to_compile_error();
    quote! {
        #err
        #item
    }
}

fn generate_items(
    args: &RouteArgs,
    function: &ItemFn,
    defaults: Vec<Vec<syn::Attribute>>,
) -> syn::Result<TokenStream> {
    let (screen, declaration) = read_screen(args, function, defaults)?;
    let spec = classify(&declaration, &KNOWN_TYPES).map_err(|err| to_syn_error(&err, &screen))?;
    let unit = generate(&spec, &UnitNaming::default());
    Ok(render_unit(&unit, &screen))
}

/// Spans the error at the offending parameter, or the route name.
fn to_syn_error(err: &ClassificationError, screen: &Screen) -> syn::Error {
    match err.parameter().and_then(|name| screen.param(name)) {
        Some(param) => syn::Error::new_spanned(&param.span_source, err),
        None => syn::Error::new(screen.route_span, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expand_str(attr: TokenStream, item: TokenStream) -> String {
        expand(attr, item).to_string()
    }

    fn compact(tokens: TokenStream) -> String {
        tokens.to_string()
    }

    #[test]
    fn test_plain_screen() {
        let out = expand(quote!("home"), quote!(fn home_screen() {}));
        let file: syn::File = syn::parse2(out).unwrap();
        let names: Vec<String> = file
            .items
            .iter()
            .filter_map(|item| match item {
                syn::Item::Trait(t) => Some(t.ident.to_string()),
                syn::Item::Fn(f) => Some(f.sig.ident.to_string()),
                _ => None,
            })
            .collect();

        assert_eq!(
            names,
            vec!["home_screen", "NavGenHomeGraph", "NavGenHomeNavigate", "NavGenHomeRoute"]
        );
    }

    #[test]
    fn test_registration_tokens() {
        let out = expand_str(
            quote!("detail"),
            quote! {
                pub fn detail_screen(
                    lang: String,
                    ja: Option<String>,
                    like: bool,
                    #[default_string("yes")] default_test: String,
                    nav_controller: NavController,
                ) {}
            },
        );

        assert!(out.contains(&compact(quote!(
            "detail/{lang}/{like}?ja={ja}&default_test={default_test}"
        ))));
        assert!(out.contains(&compact(quote!(
            ::navgen::NavArgument::new("ja", ::navgen::NavType::StringType).nullable(true)
        ))));
        assert!(out.contains(&compact(quote!(
            ::navgen::NavArgument::new("default_test", ::navgen::NavType::StringType).default_value("yes")
        ))));
        assert!(out.contains(&compact(quote!(
            fn detail(&mut self, nav_controller: ::navgen::NavController) -> &mut Self
        ))));
        assert!(out.contains(&compact(quote!(
            detail_screen(
                __entry.arguments().get_string("lang").expect("navgen: missing argument `lang`"),
                __entry.arguments().get_string("ja"),
                __entry.arguments().get_bool("like").expect("navgen: missing argument `like`"),
                __entry.arguments().get_string("default_test").expect("navgen: missing argument `default_test`"),
                ::std::clone::Clone::clone(&nav_controller)
            );
        ))));
        assert!(!out.contains("unwrap_or_default"));
        assert!(!out.contains("default_string"));
    }

    #[test]
    fn test_registration_captures_weak_handles() {
        let out = expand_str(
            quote!("profile"),
            quote!(fn profile_screen(nav: NavController, id: i32) {}),
        );

        assert!(out.contains(&compact(quote!(
            let nav = ::navgen::NavController::downgrade(&nav);
        ))));
        assert!(out.contains(&compact(quote!(
            let ::std::option::Option::Some(nav) = nav.upgrade() else {
                return;
            };
        ))));
        assert!(out.contains(&compact(quote!(
            __entry.arguments().get_int("id").expect("navgen: missing argument `id`")
        ))));
    }

    #[test]
    fn test_trigger_tokens() {
        let out = expand_str(
            quote!("list"),
            quote! {
                fn list_screen(
                    category: String,
                    filter: Option<String>,
                    #[default_int(1)] page: i32,
                    nav: NavController,
                ) {}
            },
        );

        assert!(out.contains(&compact(quote!(
            fn list(
                &self,
                category: String,
                filter: Option<String>,
                page: ::std::option::Option<i32>
            ) -> ::std::result::Result<(), ::navgen::NavigationError>
        ))));
        assert!(out.contains(&compact(quote!(let page = page.unwrap_or(1i32);))));
        assert!(out.contains("arrives as `None`"));
        assert!(out.contains(&compact(quote!(
            __route.push_str("list/");
            __route.push_str(&::navgen::encode(&category));
            __route.push_str("?filter=");
            if let ::std::option::Option::Some(__value) = &filter {
                __route.push_str(&::navgen::encode(__value));
            }
            __route.push_str("&page=");
            __route.push_str(&::std::string::ToString::to_string(&page));
        ))));
    }

    #[test]
    fn test_nullable_default_resolves_to_literal() {
        let out = expand_str(
            quote!("search"),
            quote!(fn search(#[default_string("all")] q: Option<String>) {}),
        );

        assert!(out.contains(&compact(quote!(fn search(&self, q: Option<String>)))));
        assert!(out.contains(&compact(quote!(
            let q = q.unwrap_or_else(|| ::std::string::String::from("all"));
        ))));
        assert!(out.contains(&compact(quote!(__route.push_str(&::navgen::encode(&q));))));
    }

    #[test]
    fn test_optional_handle_wrapped() {
        let out = expand_str(quote!("about"), quote!(fn about(nav: Option<NavController>) {}));
        assert!(out.contains(&compact(quote!(
            about(::std::option::Option::Some(::std::clone::Clone::clone(&nav)));
        ))));
    }

    #[test]
    fn test_route_constant_tokens() {
        let out = expand_str(quote!(name = "user"), quote!(fn user(id: i32) {}));
        assert!(out.contains(&compact(quote!(
            impl NavGenUserRoute for ::navgen::NavGenRoutes {
                fn user(&self) -> &'static str {
                    "user/{id}"
                }
            }
        ))));
    }

    #[test]
    fn test_classification_error_keeps_function() {
        let out = expand_str(
            quote!("broken"),
            quote!(fn broken(#[default_int(2)] id: Option<i32>) {}),
        );

        assert!(out.contains("compile_error"));
        assert!(out.contains("does not allow nullable"));
        assert!(out.contains(&compact(quote!(fn broken(id: Option<i32>) {}))));
        assert!(!out.contains("NavGenBrokenGraph"));
    }

    #[test]
    fn test_unsupported_type_error() {
        let out = expand_str(quote!("x"), quote!(fn x(data: Vec<u8>) {}));
        assert!(out.contains("Not supported argument type"));
        assert!(out.contains("Vec<u8>"));
    }

    #[test]
    fn test_empty_route_name_error() {
        let out = expand_str(quote!(""), quote!(fn x() {}));
        assert!(out.contains("compile_error"));
        assert!(out.contains("must not be empty"));
    }

    #[test]
    fn test_bad_attribute_keeps_function() {
        let out = expand_str(quote!(42), quote!(fn x() {}));
        assert!(out.contains("compile_error"));
        assert!(out.contains(&compact(quote!(fn x() {}))));
    }
}
