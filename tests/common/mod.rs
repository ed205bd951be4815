//! Shared test utilities for amala integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Scratch workspaces live in a `tempfile::TempDir` and
//! vanish when the fixture is dropped.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
