use std::fmt::{self, Display, Formatter};

use http::Method;

use crate::{
    reporting::{
        debug::{info, trace},
        level::DebugLevel,
    },
    routing::{methods::RecognizedMethods, route::Route},
};

/// One printed row: a path and one recognized method it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteEntry {
    path: String,
    method: Method,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, method: Method) -> Self {
        RouteEntry {
            path: path.into(),
            method,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

impl Display for RouteEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Walk the routes in order and emit one entry per recognized method.
/// Methods of a single route are emitted in alphabetical order.
pub fn extract_entries<R: Route>(
    routes: &[R],
    recognized: &RecognizedMethods,
    level: DebugLevel,
) -> Vec<RouteEntry> {
    let mut entries = Vec::new();
    for route in routes.iter() {
        let mut methods = route.methods();
        methods.sort_unstable();
        methods.dedup();
        for name in methods {
            match recognized.recognize(name) {
                Some(method) => {
                    let entry = RouteEntry::new(route.path(), method.clone());
                    trace(level, &format!("Listing {}", entry));
                    entries.push(entry);
                }
                None => info(level, &format!("Skipping {} {}", name, route.path())),
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::{RouteDef, RouteKind};

    fn extract(routes: &[RouteDef]) -> Vec<String> {
        extract_entries(routes, &RecognizedMethods::default(), DebugLevel::Low)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// A route whose methods come back unsorted and repeated.
    struct Unordered;

    impl Route for Unordered {
        fn path(&self) -> &str {
            "/raw"
        }

        fn methods(&self) -> Vec<&str> {
            vec!["PUT", "GET", "PUT", "TRACE"]
        }

        fn kind(&self) -> RouteKind {
            RouteKind::Application
        }
    }

    #[test]
    fn unrecognized_verbs_are_dropped() {
        let routes = vec![RouteDef::new("/users", ["GET", "HEAD", "OPTIONS", "POST"])];
        assert_eq!(extract(&routes), vec!["GET /users", "POST /users"]);
    }

    #[test]
    fn route_order_is_kept_and_duplicates_survive() {
        let routes = vec![
            RouteDef::new("/items", ["GET"]),
            RouteDef::new("/a", ["PATCH"]),
            RouteDef::new("/items", ["GET"]),
        ];
        assert_eq!(
            extract(&routes),
            vec!["GET /items", "PATCH /a", "GET /items"]
        );
    }

    #[test]
    fn every_route_kind_is_walked() {
        let routes = vec![
            RouteDef::new("/docs", ["GET"]).with_kind(RouteKind::Predefined),
            RouteDef::new("/static", ["GET"]).with_kind(RouteKind::Other),
        ];
        assert_eq!(extract(&routes), vec!["GET /docs", "GET /static"]);
    }

    #[test]
    fn methods_within_a_route_are_sorted_once() {
        let entries = extract_entries(&[Unordered], &RecognizedMethods::default(), DebugLevel::Low);
        assert_eq!(
            entries,
            vec![
                RouteEntry::new("/raw", Method::GET),
                RouteEntry::new("/raw", Method::PUT),
            ]
        );
    }

    #[test]
    fn tracing_every_row_keeps_the_entries() {
        let routes = vec![RouteDef::new("/users", ["GET", "HEAD", "POST"])];
        let traced = extract_entries(&routes, &RecognizedMethods::default(), DebugLevel::Max);
        let quiet = extract_entries(&routes, &RecognizedMethods::default(), DebugLevel::Low);
        assert_eq!(traced, quiet);
        assert_eq!(traced.len(), 2);
    }

    #[test]
    fn custom_recognized_set() {
        let recognized = RecognizedMethods::parse(&["OPTIONS"]).unwrap();
        let routes = vec![RouteDef::new("/health", ["GET", "OPTIONS"])];
        let entries = extract_entries(&routes, &recognized, DebugLevel::Low);
        assert_eq!(entries, vec![RouteEntry::new("/health", Method::OPTIONS)]);
    }
}
