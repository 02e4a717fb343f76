pub mod color;
pub mod debug;
pub mod error;
pub mod level;
pub mod route;
pub mod warning;
