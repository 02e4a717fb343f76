use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Who registered a route on the host application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    /// Registered by application code.
    #[default]
    Application,
    /// Registered by the framework itself, e.g. documentation endpoints.
    Predefined,
    /// Anything else the host exposes (mounts, websockets, static files...).
    Other,
}

impl RouteKind {
    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Application | Self::Predefined)
    }
}

/// The read-only view of a host framework route.
pub trait Route {
    fn path(&self) -> &str;
    /// The HTTP methods the route accepts, in no particular order.
    fn methods(&self) -> Vec<&str>;
    fn kind(&self) -> RouteKind;
}

/// A host application exposing its route collection.
/// `None` means the application has no usable collection at all.
pub trait Application {
    type Route: Route;

    fn routes(&self) -> Option<&[Self::Route]>;
}

impl<R: Route> Application for Vec<R> {
    type Route = R;

    fn routes(&self) -> Option<&[R]> {
        Some(self.as_slice())
    }
}

/// An owned route, for hosts that hand over a snapshot of their table.
///
/// ## Example
/// ```json
/// { "path": "/users", "methods": ["GET", "POST"], "kind": "application" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDef {
    pub path: String,
    pub methods: BTreeSet<String>,
    #[serde(default)]
    pub kind: RouteKind,
}

impl RouteDef {
    pub fn new<P, I, M>(path: P, methods: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        RouteDef {
            path: path.into(),
            methods: methods.into_iter().map(Into::into).collect(),
            kind: RouteKind::Application,
        }
    }

    pub fn with_kind(mut self, kind: RouteKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Route for RouteDef {
    fn path(&self) -> &str {
        &self.path
    }

    fn methods(&self) -> Vec<&str> {
        self.methods.iter().map(String::as_str).collect()
    }

    fn kind(&self) -> RouteKind {
        self.kind
    }
}

/// A route table snapshot. A missing `routes` key deserializes to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default)]
    pub routes: Option<Vec<RouteDef>>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDef>) -> Self {
        RouteTable {
            routes: Some(routes),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Application for RouteTable {
    type Route = RouteDef;

    fn routes(&self) -> Option<&[RouteDef]> {
        self.routes.as_deref()
    }
}
