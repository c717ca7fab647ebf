/// Route model
///
/// Partitions a classified parameter list and derives the route pattern.
/// Partitions are computed once, at construction, so every generated shape
/// observes the same ordering.
///
/// Pattern grammar: `name[/{req1}/{req2}...][?opt1={opt1}&opt2={opt2}...]`

use crate::model::Parameter;

/// Visitor over the structure of a route.
///
/// [`RouteSpec::write_route`] drives a writer through the static text and
/// the argument slots in wire order. The route pattern is one writer; the
/// backends use others to build the trigger's interpolated path, which keeps
/// both structurally identical.
pub trait RouteWriter {
    /// Literal route text: the route name and the `/ ? & =` punctuation.
    fn static_text(&mut self, text: &str);
    /// A required argument rendered as a path segment.
    fn path_argument(&mut self, parameter: &Parameter);
    /// An optional argument rendered as a query value.
    fn query_argument(&mut self, parameter: &Parameter);
}

/// Accumulator for the `{name}` template form.
#[derive(Default)]
struct PatternWriter {
    pattern: String,
}

impl PatternWriter {
    fn placeholder(&mut self, name: &str) {
        self.pattern.push('{');
        self.pattern.push_str(name);
        self.pattern.push('}');
    }
}

impl RouteWriter for PatternWriter {
    fn static_text(&mut self, text: &str) {
        self.pattern.push_str(text);
    }

    fn path_argument(&mut self, parameter: &Parameter) {
        self.placeholder(&parameter.name);
    }

    fn query_argument(&mut self, parameter: &Parameter) {
        self.placeholder(&parameter.name);
    }
}

fn walk_route<'a, W>(
    route_name: &str,
    required: impl IntoIterator<Item = &'a Parameter>,
    optional: impl IntoIterator<Item = &'a Parameter>,
    writer: &mut W,
) where
    W: RouteWriter + ?Sized,
{
    writer.static_text(route_name);

    // e.g. /{id}/{name}
    for parameter in required {
        writer.static_text("/");
        writer.path_argument(parameter);
    }

    // e.g. ?id={id}&name={name}
    for (i, parameter) in optional.into_iter().enumerate() {
        writer.static_text(if i == 0 { "?" } else { "&" });
        writer.static_text(&parameter.name);
        writer.static_text("=");
        writer.query_argument(parameter);
    }
}

/// Builds the route pattern from a route name and the two partitions.
///
/// ```
/// use navgen_core::{route_pattern, ArgumentKind, Parameter};
///
/// let id = Parameter::new("id", ArgumentKind::IntArg { default: None }, "Int");
/// let q = Parameter::new("q", ArgumentKind::StringArg { nullable: true, default: None }, "String?");
///
/// assert_eq!(route_pattern("search", [&id], [&q]), "search/{id}?q={q}");
/// assert_eq!(route_pattern("home", std::iter::empty(), std::iter::empty()), "home");
/// ```
pub fn route_pattern<'a>(
    route_name: &str,
    required: impl IntoIterator<Item = &'a Parameter>,
    optional: impl IntoIterator<Item = &'a Parameter>,
) -> String {
    let mut writer = PatternWriter::default();
    walk_route(route_name, required, optional, &mut writer);
    writer.pattern
}

/// Everything derived from one annotated function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    route_name: String,
    function_name: String,
    package: String,
    containing_file: Option<String>,
    parameters: Vec<Parameter>,
    // Partitions as indices into `parameters`, declaration order preserved
    handles: Vec<usize>,
    routable: Vec<usize>,
    required: Vec<usize>,
    optional: Vec<usize>,
    route_pattern: String,
}

impl RouteSpec {
    pub fn new(
        route_name: impl Into<String>,
        function_name: impl Into<String>,
        package: impl Into<String>,
        containing_file: Option<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        let indices_where = |predicate: fn(&Parameter) -> bool| -> Vec<usize> {
            parameters
                .iter()
                .enumerate()
                .filter(|(_, p)| predicate(p))
                .map(|(i, _)| i)
                .collect()
        };

        let handles = indices_where(|p| !p.kind.is_routable());
        let routable = indices_where(|p| p.kind.is_routable());
        let required = indices_where(|p| p.kind.is_required());
        let optional = indices_where(|p| p.kind.is_optional());

        let route_name = route_name.into();
        let route_pattern = route_pattern(
            &route_name,
            required.iter().map(|&i| &parameters[i]),
            optional.iter().map(|&i| &parameters[i]),
        );

        Self {
            route_name,
            function_name: function_name.into(),
            package: package.into(),
            containing_file,
            parameters,
            handles,
            routable,
            required,
            optional,
            route_pattern,
        }
    }

    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn containing_file(&self) -> Option<&str> {
        self.containing_file.as_deref()
    }

    /// All parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn navigation_handle_params(&self) -> impl Iterator<Item = &Parameter> + '_ {
        self.select(&self.handles)
    }

    pub fn routable_params(&self) -> impl Iterator<Item = &Parameter> + '_ {
        self.select(&self.routable)
    }

    pub fn required_params(&self) -> impl Iterator<Item = &Parameter> + '_ {
        self.select(&self.required)
    }

    pub fn optional_params(&self) -> impl Iterator<Item = &Parameter> + '_ {
        self.select(&self.optional)
    }

    pub fn has_routable_params(&self) -> bool {
        !self.routable.is_empty()
    }

    pub fn route_pattern(&self) -> &str {
        &self.route_pattern
    }

    /// Drives `writer` through this route in wire order.
    pub fn write_route<W: RouteWriter + ?Sized>(&self, writer: &mut W) {
        walk_route(
            &self.route_name,
            self.required_params(),
            self.optional_params(),
            writer,
        );
    }

    fn select<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a Parameter> + 'a {
        indices.iter().map(move |&i| &self.parameters[i])
    }
}
