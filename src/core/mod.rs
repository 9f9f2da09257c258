//! Shared primitives: route matching and identifier registry

pub mod keys;
pub mod route;
