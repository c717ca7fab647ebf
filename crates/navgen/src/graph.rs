// Navigation graph
// Destinations keyed by route template, resolved into back stack entries

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

use crate::arguments::{NavArgument, NavType, RouteArguments};
use crate::error::NavigationError;
use crate::pattern::RoutePattern;

pub(crate) type Content = Rc<dyn Fn(&BackStackEntry)>;

/// A resolved destination instance on the back stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStackEntry {
    route: String,
    pattern: String,
    arguments: RouteArguments,
}

impl BackStackEntry {
    /// The concrete route navigated to, e.g. `detail/7?q=rust`
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The template of the matched destination, e.g. `detail/{id}?q={q}`
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn arguments(&self) -> &RouteArguments {
        &self.arguments
    }
}

struct Destination {
    pattern: RoutePattern,
    arguments: Vec<NavArgument>,
    content: Content,
}

impl Destination {
    /// Turns raw captures into typed arguments.
    ///
    /// Absent values fall back to the declared default; an empty value of a
    /// nullable argument counts as absent. Placeholders without a descriptor
    /// are kept as strings.
    fn decode(&self, route: &str, raw: HashMap<String, String>) -> Result<RouteArguments, NavigationError> {
        let mut decoded = HashMap::with_capacity(raw.len());
        for (name, value) in raw {
            let value = urlencoding::decode(&value)
                .map_err(|_| NavigationError::InvalidArgument {
                    route: route.to_string(),
                    argument: name.clone(),
                    nav_type: NavType::StringType,
                    value: value.clone(),
                })?
                .into_owned();
            decoded.insert(name, value);
        }

        let mut arguments = RouteArguments::new();
        for argument in &self.arguments {
            let value = decoded
                .remove(argument.name())
                .filter(|value| !(argument.is_nullable() && value.is_empty()));

            match value {
                Some(text) => {
                    let parsed = argument.nav_type().parse(&text).ok_or_else(|| {
                        NavigationError::InvalidArgument {
                            route: route.to_string(),
                            argument: argument.name().to_string(),
                            nav_type: argument.nav_type(),
                            value: text.clone(),
                        }
                    })?;
                    arguments.insert(argument.name(), parsed);
                }
                None => match argument.default() {
                    Some(default) => arguments.insert(argument.name(), default.clone()),
                    None if argument.is_nullable() => {}
                    None => {
                        return Err(NavigationError::MissingArgument {
                            route: route.to_string(),
                            argument: argument.name().to_string(),
                        })
                    }
                },
            }
        }

        for (name, value) in decoded {
            arguments.insert(name, value);
        }
        Ok(arguments)
    }
}

/// Collects destinations before they are frozen into a [`NavGraph`].
///
/// ```
/// use navgen::{NavArgument, NavGraphBuilder, NavType};
///
/// let mut builder = NavGraphBuilder::new();
/// builder
///     .composable("home", vec![], |_| {})
///     .composable(
///         "user/{id}",
///         vec![NavArgument::new("id", NavType::IntType)],
///         |entry| assert!(entry.arguments().get_int("id").is_some()),
///     );
///
/// let graph = builder.start_destination("home").build().unwrap();
/// assert_eq!(graph.resolve("user/3").unwrap().arguments().get_int("id"), Some(3));
/// ```
#[derive(Default)]
pub struct NavGraphBuilder {
    destinations: Vec<(String, Vec<NavArgument>, Content)>,
    start: Option<String>,
}

impl NavGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a destination. `content` runs every time the destination
    /// becomes the top of the back stack.
    pub fn composable<F>(&mut self, pattern: &str, arguments: Vec<NavArgument>, content: F) -> &mut Self
    where
        F: Fn(&BackStackEntry) + 'static,
    {
        self.destinations
            .push((pattern.to_string(), arguments, Rc::new(content)));
        self
    }

    /// Route shown when the graph is attached to a controller.
    pub fn start_destination(&mut self, route: impl Into<String>) -> &mut Self {
        self.start = Some(route.into());
        self
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Validates every template and freezes the graph.
    pub fn build(&mut self) -> Result<NavGraph, NavigationError> {
        let mut seen = HashSet::new();
        let destinations = std::mem::take(&mut self.destinations)
            .into_iter()
            .map(|(pattern, arguments, content)| {
                if !seen.insert(pattern.clone()) {
                    return Err(NavigationError::DuplicateDestination(pattern));
                }
                Ok(Destination {
                    pattern: RoutePattern::parse(&pattern)?,
                    arguments,
                    content,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(destinations = destinations.len(), "navigation graph built");

        Ok(NavGraph {
            destinations,
            start: self.start.take(),
        })
    }
}

/// Immutable set of destinations matched in registration order.
pub struct NavGraph {
    destinations: Vec<Destination>,
    start: Option<String>,
}

impl NavGraph {
    pub fn start_destination(&self) -> Option<&str> {
        self.start.as_deref()
    }

    /// Templates in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> + '_ {
        self.destinations.iter().map(|d| d.pattern.as_str())
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Resolves a concrete route into a back stack entry.
    pub fn resolve(&self, route: &str) -> Result<BackStackEntry, NavigationError> {
        self.find(route).map(|(entry, _)| entry)
    }

    pub(crate) fn find(&self, route: &str) -> Result<(BackStackEntry, Content), NavigationError> {
        let (destination, raw) = self
            .destinations
            .iter()
            .find_map(|d| d.pattern.matches(route).map(|raw| (d, raw)))
            .ok_or_else(|| NavigationError::RouteNotFound(route.to_string()))?;

        let entry = BackStackEntry {
            route: route.to_string(),
            pattern: destination.pattern.as_str().to_string(),
            arguments: destination.decode(route, raw)?,
        };
        Ok((entry, Rc::clone(&destination.content)))
    }
}

impl fmt::Debug for NavGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavGraph")
            .field("patterns", &self.patterns().collect::<Vec<_>>())
            .field("start", &self.start)
            .finish()
    }
}
