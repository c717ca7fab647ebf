/// Route templates
///
/// A template such as `detail/{lang}/{like}?ja={ja}` is split into path
/// segments and query entries. Matching a concrete route yields the raw,
/// still percent-encoded text captured by each placeholder.

use std::collections::{HashMap, HashSet};

use crate::error::NavigationError;

/// One `/`-separated piece of a template path.
///
/// ```
/// use navgen::pattern::{classify_segment, SegmentType};
///
/// assert_eq!(classify_segment("detail"), SegmentType::Static("detail".to_string()));
/// assert_eq!(classify_segment("{id}"), SegmentType::Placeholder("id".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentType {
    /// `{name}`
    Placeholder(String),
    Static(String),
}

pub fn classify_segment(segment: &str) -> SegmentType {
    match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(name) => SegmentType::Placeholder(name.to_string()),
        None => SegmentType::Static(segment.to_string()),
    }
}

/// `key={name}` entry of a template query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub key: String,
    pub placeholder: String,
}

/// A parsed route template.
///
/// ```
/// use navgen::pattern::RoutePattern;
///
/// let pattern = RoutePattern::parse("detail/{id}?q={q}").unwrap();
/// let values = pattern.matches("detail/7?q=rust").unwrap();
///
/// assert_eq!(values.get("id").map(String::as_str), Some("7"));
/// assert_eq!(values.get("q").map(String::as_str), Some("rust"));
/// assert!(pattern.matches("detail/7/extra").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<SegmentType>,
    query: Vec<QueryParam>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, NavigationError> {
        let invalid = |reason: &str| NavigationError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if pattern.is_empty() {
            return Err(invalid("pattern is empty"));
        }

        let (path, query) = match pattern.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (pattern, None),
        };

        let segments: Vec<SegmentType> = path.split('/').map(classify_segment).collect();
        let query: Vec<QueryParam> = match query {
            Some(query) => query
                .split('&')
                .map(|entry| parse_query_entry(entry).ok_or_else(|| invalid("query entries must be `key={name}`")))
                .collect::<Result<_, _>>()?,
            None => Vec::new(),
        };

        let mut seen = HashSet::new();
        let placeholders = segments
            .iter()
            .filter_map(|segment| match segment {
                SegmentType::Placeholder(name) => Some(name.as_str()),
                SegmentType::Static(_) => None,
            })
            .chain(query.iter().map(|param| param.placeholder.as_str()));
        for name in placeholders {
            if name.is_empty() || name.contains(['{', '}']) {
                return Err(invalid("placeholder names must be non-empty"));
            }
            if !seen.insert(name) {
                return Err(invalid("placeholder used more than once"));
            }
        }

        let stray_brace = segments.iter().any(|segment| match segment {
            SegmentType::Static(text) => text.contains(['{', '}']),
            SegmentType::Placeholder(_) => false,
        });
        if stray_brace {
            return Err(invalid("braces must wrap a whole path segment"));
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
            query,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[SegmentType] {
        &self.segments
    }

    pub fn query(&self) -> &[QueryParam] {
        &self.query
    }

    /// Whether `name` is captured anywhere in the template.
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, SegmentType::Placeholder(p) if p == name))
            || self.query.iter().any(|param| param.placeholder == name)
    }

    /// Matches a concrete route, returning raw captured text per placeholder.
    ///
    /// Path segments must match one to one and path placeholders must be
    /// non-empty. Query entries may appear in any order; missing ones are
    /// simply absent from the result and unknown ones are ignored.
    pub fn matches(&self, route: &str) -> Option<HashMap<String, String>> {
        let (path, query) = match route.split_once('?') {
            Some((path, query)) => (path, query),
            None => (route, ""),
        };

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut values = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                SegmentType::Static(text) if text == part => {}
                SegmentType::Static(_) => return None,
                SegmentType::Placeholder(_) if part.is_empty() => return None,
                SegmentType::Placeholder(name) => {
                    values.insert(name.clone(), part.to_string());
                }
            }
        }

        let mut supplied: HashMap<&str, &str> = HashMap::new();
        for entry in query.split('&').filter(|entry| !entry.is_empty()) {
            let (key, value) = entry.split_once('=').unwrap_or((entry, ""));
            supplied.entry(key).or_insert(value);
        }
        for param in &self.query {
            if let Some(value) = supplied.get(param.key.as_str()) {
                values.insert(param.placeholder.clone(), value.to_string());
            }
        }

        Some(values)
    }
}

fn parse_query_entry(entry: &str) -> Option<QueryParam> {
    let (key, value) = entry.split_once('=')?;
    match classify_segment(value) {
        SegmentType::Placeholder(placeholder) if !key.is_empty() => Some(QueryParam {
            key: key.to_string(),
            placeholder,
        }),
        _ => None,
    }
}
