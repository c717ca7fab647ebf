/// Kotlin backend
///
/// Renders a generated unit as a Compose Navigation source file:
///
/// ```kotlin
/// public fun NavGraphBuilder.sample(navController: NavController): Unit {
///   composable("sample/{id}?name={name}",
///     arguments = listOf(
///       navArgument("id") { type = NavType.IntType },
///       navArgument("name") { type = NavType.StringType; nullable = true },
///     )
///   ) { backStackEntry ->
///     SampleScreen(
///       backStackEntry.arguments!!.getInt("id"),
///       backStackEntry.arguments?.getString("name"),
///       navController,
///     )
///   }
/// }
///
/// public fun NavController.sample(id: Int, name: String? = null): Unit {
///   navigate("""sample/$id?name=${name ?: ""}""")
/// }
///
/// public val NavGenRoutes.sample: String
///   get() = "sample/{id}?name={name}"
/// ```

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::model::{Literal, NavType};
use crate::shape::{
    CallArgument, GeneratedUnit, ParamDefault, PathPiece, RegistrationShape, RouteConstantShape,
    TriggerShape,
};

/// Keywords that can never appear bare, not even inside string templates.
const HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Soft and modifier keywords, back-quoted in declarations.
const SOFT_KEYWORDS: &[&str] = &[
    "by", "catch", "constructor", "delegate", "dynamic", "field", "file", "finally", "get",
    "import", "init", "param", "property", "receiver", "set", "setparam", "value", "where",
    "actual", "abstract", "annotation", "companion", "const", "crossinline", "data", "enum",
    "expect", "external", "final", "infix", "inline", "inner", "internal", "lateinit",
    "noinline", "open", "operator", "out", "override", "private", "protected", "public",
    "reified", "sealed", "suspend", "tailrec", "vararg",
];

/// Packages referenced by generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KotlinOptions {
    /// Package declaring the `NavGenRoutes` registry object
    pub routes_package: String,
    /// Package of `NavController`, `NavGraphBuilder`, `NavType`, `navArgument`
    pub navigation_package: String,
    /// Package of the `composable` builder
    pub compose_package: String,
    pub indent: String,
}

impl Default for KotlinOptions {
    fn default() -> Self {
        Self {
            routes_package: "com.star_zero.compose_nav_gen".to_string(),
            navigation_package: "androidx.navigation".to_string(),
            compose_package: "androidx.navigation.compose".to_string(),
            indent: "  ".to_string(),
        }
    }
}

/// Location of the unit relative to the output root: `<package dirs>/<Name>.kt`.
pub fn relative_path(unit: &GeneratedUnit) -> PathBuf {
    let mut path: PathBuf = unit
        .package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect();
    path.push(format!("{}.kt", unit.name));
    path
}

/// Renders the whole source file for `unit`.
pub fn render_unit(unit: &GeneratedUnit, options: &KotlinOptions) -> String {
    let mut file = KotlinFile::new(unit, options);
    let members = [
        file.registration(&unit.registration),
        file.trigger(&unit.trigger),
        file.route_constant(&unit.route_constant),
    ];

    let mut out = String::new();
    if !unit.package.is_empty() {
        out.push_str(&format!("package {}\n\n", unit.package));
    }
    for import in &file.imports {
        out.push_str(&format!("import {import}\n"));
    }
    if !file.imports.is_empty() {
        out.push('\n');
    }
    out.push_str(&members.join("\n"));
    out
}

struct KotlinFile<'a> {
    package: &'a str,
    options: &'a KotlinOptions,
    imports: BTreeSet<String>,
}

impl<'a> KotlinFile<'a> {
    fn new(unit: &'a GeneratedUnit, options: &'a KotlinOptions) -> Self {
        Self {
            package: &unit.package,
            options,
            imports: BTreeSet::new(),
        }
    }

    /// Imports `package.name` and returns the simple name to use.
    fn import(&mut self, package: &str, name: &str) -> String {
        if !package.is_empty() && package != self.package {
            self.imports.insert(format!("{package}.{name}"));
        }
        name.to_string()
    }

    fn navigation(&mut self, name: &str) -> String {
        let package = self.options.navigation_package.clone();
        self.import(&package, name)
    }

    /// Spells a declared type, importing it when qualified.
    fn type_name(&mut self, source: &str) -> String {
        let source = source.trim();
        let (base, suffix) = match source.strip_suffix('?') {
            Some(base) => (base.trim_end(), "?"),
            None => (source, ""),
        };
        let simple = match base {
            "String" | "Int" | "Boolean" | "Unit" => self.import("kotlin", base),
            "NavController" => self.navigation(base),
            qualified => match qualified.rsplit_once('.') {
                Some((package, name)) => self.import(package, name),
                None => qualified.to_string(),
            },
        };
        format!("{simple}{suffix}")
    }

    fn line(&self, out: &mut String, level: usize, text: &str) {
        for _ in 0..level {
            out.push_str(&self.options.indent);
        }
        out.push_str(text);
        out.push('\n');
    }

    fn registration(&mut self, shape: &RegistrationShape) -> String {
        let builder = self.navigation("NavGraphBuilder");
        let controller = self.navigation("NavController");
        let unit = self.import("kotlin", "Unit");
        let compose_package = self.options.compose_package.clone();
        let composable = self.import(&compose_package, "composable");
        let screen = self.import(&shape.screen.package, &shape.screen.function);

        let params = shape
            .handle_params
            .iter()
            .map(|p| format!("{}: {}", identifier(&p.name), controller))
            .collect::<Vec<_>>()
            .join(", ");
        let route = string_literal(&shape.route_pattern);

        let mut out = String::new();
        self.line(
            &mut out,
            0,
            &format!("public fun {builder}.{}({params}): {unit} {{", identifier(&shape.name)),
        );

        if shape.screen.arguments.is_empty() {
            self.line(&mut out, 1, &format!("{composable}({route}) {{"));
            self.line(&mut out, 2, &format!("{}()", identifier(&screen)));
            self.line(&mut out, 1, "}");
        } else {
            if shape.arguments.is_empty() {
                self.line(&mut out, 1, &format!("{composable}({route}) {{"));
            } else {
                let nav_argument = self.navigation("navArgument");
                let nav_type = self.navigation("NavType");

                self.line(&mut out, 1, &format!("{composable}({route},"));
                self.line(&mut out, 2, "arguments = listOf(");
                for argument in &shape.arguments {
                    let mut options = format!("type = {nav_type}.{}", argument.nav_type.as_str());
                    if argument.nullable {
                        options.push_str("; nullable = true");
                    }
                    if let Some(default) = &argument.default {
                        options.push_str(&format!("; defaultValue = {}", literal(default)));
                    }
                    self.line(
                        &mut out,
                        3,
                        &format!(
                            "{nav_argument}({}) {{ {options} }},",
                            string_literal(&argument.name)
                        ),
                    );
                }
                self.line(&mut out, 2, ")");
                self.line(&mut out, 1, ") { backStackEntry ->");
            }

            self.line(&mut out, 2, &format!("{}(", identifier(&screen)));
            for argument in &shape.screen.arguments {
                self.line(&mut out, 3, &format!("{},", call_argument(argument)));
            }
            self.line(&mut out, 2, ")");
            self.line(&mut out, 1, "}");
        }

        self.line(&mut out, 0, "}");
        out
    }

    fn trigger(&mut self, shape: &TriggerShape) -> String {
        let controller = self.navigation("NavController");
        let unit = self.import("kotlin", "Unit");

        let params = shape
            .params
            .iter()
            .map(|p| {
                let mut param = format!("{}: {}", identifier(&p.name), self.type_name(&p.source_type));
                match &p.default {
                    ParamDefault::Required => {}
                    ParamDefault::Absent => param.push_str(" = null"),
                    ParamDefault::Literal(value) => {
                        param.push_str(&format!(" = {}", literal(value)));
                    }
                }
                param
            })
            .collect::<Vec<_>>()
            .join(", ");

        let path = if shape.params.is_empty() {
            // e.g. navigate("sample")
            let text: String = shape
                .path
                .iter()
                .filter_map(|piece| match piece {
                    PathPiece::Text(text) => Some(text.as_str()),
                    PathPiece::Value { .. } => None,
                })
                .collect();
            string_literal(&text)
        } else {
            // e.g. navigate("""sample/$id?name=${name ?: ""}""")
            let template: String = shape.path.iter().map(template_piece).collect();
            format!("\"\"\"{template}\"\"\"")
        };

        let mut out = String::new();
        self.line(
            &mut out,
            0,
            &format!("public fun {controller}.{}({params}): {unit} {{", identifier(&shape.name)),
        );
        self.line(&mut out, 1, &format!("navigate({path})"));
        self.line(&mut out, 0, "}");
        out
    }

    fn route_constant(&mut self, shape: &RouteConstantShape) -> String {
        let routes_package = self.options.routes_package.clone();
        let routes = self.import(&routes_package, "NavGenRoutes");
        let string = self.import("kotlin", "String");

        let mut out = String::new();
        self.line(
            &mut out,
            0,
            &format!("public val {routes}.{}: {string}", identifier(&shape.name)),
        );
        self.line(&mut out, 1, &format!("get() = {}", string_literal(&shape.value)));
        out
    }
}

fn call_argument(argument: &CallArgument) -> String {
    match argument {
        CallArgument::Handle { name } => identifier(name),
        CallArgument::Extract { name, nav_type, nullable } => {
            let key = string_literal(name);
            match (nav_type, nullable) {
                (NavType::StringType, true) => {
                    format!("backStackEntry.arguments?.getString({key})")
                }
                (NavType::StringType, false) => {
                    format!("backStackEntry.arguments!!.getString({key})!!")
                }
                (NavType::IntType, _) => format!("backStackEntry.arguments!!.getInt({key})"),
                (NavType::BoolType, _) => format!("backStackEntry.arguments!!.getBoolean({key})"),
            }
        }
    }
}

fn template_piece(piece: &PathPiece) -> String {
    match piece {
        PathPiece::Text(text) => text
            .chars()
            .map(|c| match c {
                '$' => "${'$'}".to_string(),
                '"' => "${'\"'}".to_string(),
                c => c.to_string(),
            })
            .collect(),
        PathPiece::Value { name, nullable: true, .. } => {
            format!("${{{} ?: \"\"}}", identifier(name))
        }
        PathPiece::Value { name, .. } if needs_template_braces(name) => {
            format!("${{{}}}", identifier(name))
        }
        PathPiece::Value { name, .. } => format!("${name}"),
    }
}

/// Strings double-quoted, numbers and booleans bare.
fn literal(value: &Literal) -> String {
    match value {
        Literal::String(text) => string_literal(text),
        Literal::Int(number) => number.to_string(),
        Literal::Bool(flag) => flag.to_string(),
    }
}

/// A double-quoted Kotlin string literal.
///
/// ```
/// use navgen_core::render::kotlin::string_literal;
///
/// assert_eq!(string_literal("detail/{id}"), "\"detail/{id}\"");
/// assert_eq!(string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
/// assert_eq!(string_literal("$5"), "\"${'$'}5\"");
/// ```
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '$' => out.push_str("${'$'}"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Back-quotes names that are keywords or not plain identifiers.
///
/// ```
/// use navgen_core::render::kotlin::identifier;
///
/// assert_eq!(identifier("navController"), "navController");
/// assert_eq!(identifier("data"), "`data`");
/// assert_eq!(identifier("in"), "`in`");
/// ```
pub fn identifier(name: &str) -> String {
    if is_plain_identifier(name)
        && !HARD_KEYWORDS.contains(&name)
        && !SOFT_KEYWORDS.contains(&name)
    {
        name.to_string()
    } else {
        format!("`{name}`")
    }
}

/// `$name` only works for plain, non-hard-keyword names.
fn needs_template_braces(name: &str) -> bool {
    !is_plain_identifier(name) || HARD_KEYWORDS.contains(&name)
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
