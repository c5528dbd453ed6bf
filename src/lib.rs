pub mod config;
pub mod error;
pub mod geometry;
pub mod layouts;
pub mod scorer;
pub mod search;
// cmd and reports are binary modules (see main.rs).
