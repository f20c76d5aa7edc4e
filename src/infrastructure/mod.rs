//! # Infrastructure Layer
//!
//! Integrations with the outside world: the third-party quote providers.

pub mod providers;
