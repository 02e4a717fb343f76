//! Print a colorized `METHOD PATH` listing of a web application's route table.
//!
//! ```no_run
//! use koii::{print_routes, RouteDef, RouteKind, RouteTable};
//!
//! let app = RouteTable::new(vec![
//!     RouteDef::new("/users", ["GET", "POST"]),
//!     RouteDef::new("/docs", ["GET", "HEAD"]).with_kind(RouteKind::Predefined),
//! ]);
//! print_routes(&app).unwrap();
//! ```

pub mod analysis;
pub mod config;
pub mod reporting;
pub mod routing;
pub mod runner;


pub use analysis::extract::RouteEntry;
pub use config::KoiiConfig;
pub use reporting::{
    color::{ColorChoice, ColorStrategy},
    error::{InvalidReason, KoiiError},
    level::DebugLevel,
};
pub use routing::{
    methods::RecognizedMethods,
    route::{Application, Route, RouteDef, RouteKind, RouteTable},
};
pub use runner::{print_routes, write_routes, Koii};
