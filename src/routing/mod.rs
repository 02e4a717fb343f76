pub mod methods;
pub mod route;
