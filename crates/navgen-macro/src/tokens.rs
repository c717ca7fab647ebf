// Rust token backend
// Renders the three code shapes as extension traits on the navgen runtime types:
//   NavGen<Route>Graph    on NavGraphBuilder  (registration)
//   NavGen<Route>Navigate on NavController    (trigger)
//   NavGen<Route>Route    on NavGenRoutes     (route constant)

use navgen_core::{
    CallArgument, GeneratedUnit, Literal, NavType, ParamDefault, PathPiece, RegistrationShape,
    RouteConstantShape, TriggerParam, TriggerShape,
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Type;

use crate::screen::Screen;

pub fn render_unit(unit: &GeneratedUnit, screen: &Screen) -> TokenStream {
    let registration = registration(unit, &unit.registration, screen);
    let trigger = trigger(unit, &unit.trigger, screen);
    let route_constant = route_constant(unit, &unit.route_constant, screen);

    quote! {
        #registration
        #trigger
        #route_constant
    }
}

fn nav_type(nav_type: NavType) -> TokenStream {
    match nav_type {
        NavType::StringType => quote!(::navgen::NavType::StringType),
        NavType::IntType => quote!(::navgen::NavType::IntType),
        NavType::BoolType => quote!(::navgen::NavType::BoolType),
    }
}

fn literal(value: &Literal) -> TokenStream {
    match value {
        Literal::String(text) => quote!(#text),
        Literal::Int(number) => quote!(#number),
        Literal::Bool(flag) => quote!(#flag),
    }
}

fn registration(unit: &GeneratedUnit, shape: &RegistrationShape, screen: &Screen) -> TokenStream {
    let vis = &screen.vis;
    let route = &screen.route;
    let function = &screen.function;
    let trait_name = format_ident!("{}Graph", unit.name);
    let pattern = &shape.route_pattern;

    let handles: Vec<_> = shape
        .handle_params
        .iter()
        .filter_map(|p| screen.param(&p.name))
        .map(|p| &p.ident)
        .collect();

    let descriptors = shape.arguments.iter().map(|argument| {
        let name = &argument.name;
        let ty = nav_type(argument.nav_type);
        let nullable = argument.nullable.then(|| quote!(.nullable(true)));
        let default = argument.default.as_ref().map(|value| {
            let value = literal(value);
            quote!(.default_value(#value))
        });
        quote!(::navgen::NavArgument::new(#name, #ty) #nullable #default)
    });

    let call_arguments = shape.screen.arguments.iter().map(|argument| match argument {
        CallArgument::Handle { name } => match screen.param(name) {
            Some(param) if param.is_option() => {
                let ident = &param.ident;
                quote!(::std::option::Option::Some(::std::clone::Clone::clone(&#ident)))
            }
            Some(param) => {
                let ident = &param.ident;
                quote!(::std::clone::Clone::clone(&#ident))
            }
            None => quote!(),
        },
        // Resolution guarantees non-nullable values are present
        CallArgument::Extract { name, nav_type, nullable } => {
            let missing = format!("navgen: missing argument `{name}`");
            match (nav_type, nullable) {
                (NavType::StringType, true) => quote!(__entry.arguments().get_string(#name)),
                (NavType::StringType, false) => {
                    quote!(__entry.arguments().get_string(#name).expect(#missing))
                }
                (NavType::IntType, _) => quote!(__entry.arguments().get_int(#name).expect(#missing)),
                (NavType::BoolType, _) => {
                    quote!(__entry.arguments().get_bool(#name).expect(#missing))
                }
            }
        }
    });

    let doc = format!("Registers the `{pattern}` destination showing `{function}`.");

    quote! {
        #[doc = #doc]
        #[allow(non_camel_case_types, non_snake_case)]
        #vis trait #trait_name {
            fn #route(&mut self #(, #handles: ::navgen::NavController)*) -> &mut Self;
        }

        #[allow(non_snake_case)]
        impl #trait_name for ::navgen::NavGraphBuilder {
            fn #route(&mut self #(, #handles: ::navgen::NavController)*) -> &mut Self {
                // The graph ends up inside the controller, so content only
                // holds weak handles
                #(let #handles = ::navgen::NavController::downgrade(&#handles);)*
                self.composable(
                    #pattern,
                    ::std::vec![#(#descriptors),*],
                    move |__entry: &::navgen::BackStackEntry| {
                        #(
                            let ::std::option::Option::Some(#handles) = #handles.upgrade() else {
                                return;
                            };
                        )*
                        #function(#(#call_arguments),*);
                    },
                )
            }
        }
    }
}

/// Formal type of a trigger parameter: defaults make a non-optional type
/// optional so callers can leave it out.
fn trigger_type(param: &TriggerParam, declared: &Type) -> TokenStream {
    match (&param.default, param.nullable) {
        (ParamDefault::Literal(_), false) => quote!(::std::option::Option<#declared>),
        _ => quote!(#declared),
    }
}

fn trigger(unit: &GeneratedUnit, shape: &TriggerShape, screen: &Screen) -> TokenStream {
    let vis = &screen.vis;
    let route = &screen.route;
    let trait_name = format_ident!("{}Navigate", unit.name);

    let params: Vec<_> = shape
        .params
        .iter()
        .filter_map(|p| screen.param(&p.name).map(|screen_param| (p, screen_param)))
        .collect();

    let formals: Vec<_> = params
        .iter()
        .map(|(param, screen_param)| {
            let ident = &screen_param.ident;
            let ty = trigger_type(param, &screen_param.ty);
            quote!(#ident: #ty)
        })
        .collect();

    // Resolve defaults up front; afterwards only absent-by-default values
    // remain optional.
    let bindings = params.iter().filter_map(|(param, screen_param)| {
        let ident = &screen_param.ident;
        match &param.default {
            ParamDefault::Literal(Literal::String(text)) => Some(quote! {
                let #ident = #ident.unwrap_or_else(|| ::std::string::String::from(#text));
            }),
            ParamDefault::Literal(value) => {
                let value = literal(value);
                Some(quote!(let #ident = #ident.unwrap_or(#value);))
            }
            ParamDefault::Required | ParamDefault::Absent => None,
        }
    });

    let pushes = shape.path.iter().map(|piece| match piece {
        PathPiece::Text(text) => quote!(__route.push_str(#text);),
        PathPiece::Value { name, nav_type, .. } => {
            let Some((param, screen_param)) = params.iter().find(|(p, _)| &p.name == name) else {
                return quote!();
            };
            let ident = &screen_param.ident;
            match (nav_type, &param.default) {
                (NavType::StringType, ParamDefault::Absent) => quote! {
                    if let ::std::option::Option::Some(__value) = &#ident {
                        __route.push_str(&::navgen::encode(__value));
                    }
                },
                (NavType::StringType, _) => quote!(__route.push_str(&::navgen::encode(&#ident));),
                _ => quote!(__route.push_str(&::std::string::ToString::to_string(&#ident));),
            }
        }
    });

    let mut doc = format!("Navigates to the `{}` destination.", unit.route_constant.name);
    if params
        .iter()
        .any(|(p, _)| p.nav_type == NavType::StringType && p.default == ParamDefault::Absent)
    {
        doc.push_str(
            "\n\nAn empty string for an optional argument is sent as `key=` and arrives as `None`.",
        );
    }

    quote! {
        #[doc = #doc]
        #[allow(non_camel_case_types, non_snake_case)]
        #vis trait #trait_name {
            fn #route(&self #(, #formals)*) -> ::std::result::Result<(), ::navgen::NavigationError>;
        }

        #[allow(non_snake_case)]
        impl #trait_name for ::navgen::NavController {
            fn #route(&self #(, #formals)*) -> ::std::result::Result<(), ::navgen::NavigationError> {
                #(#bindings)*
                let mut __route = ::std::string::String::new();
                #(#pushes)*
                self.navigate(&__route)
            }
        }
    }
}

fn route_constant(unit: &GeneratedUnit, shape: &RouteConstantShape, screen: &Screen) -> TokenStream {
    let vis = &screen.vis;
    let route = &screen.route;
    let trait_name = format_ident!("{}Route", unit.name);
    let value = &shape.value;
    let doc = format!("Route template `{value}`.");

    quote! {
        #[doc = #doc]
        #[allow(non_camel_case_types, non_snake_case)]
        #vis trait #trait_name {
            fn #route(&self) -> &'static str;
        }

        #[allow(non_snake_case)]
        impl #trait_name for ::navgen::NavGenRoutes {
            fn #route(&self) -> &'static str {
                #value
            }
        }
    }
}
