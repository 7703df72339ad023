//! Trait definitions for deps.dev operations.
//!
//! Each entity type implements the traits it supports, encapsulating
//! endpoint differences in the implementations.

mod get;

pub use get::Get;
