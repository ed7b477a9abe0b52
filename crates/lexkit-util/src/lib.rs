//! lexkit-util - Foundation types for the lexkit lexer.
//!
//! This crate provides the small, dependency-free types shared by the
//! lexer and its consumers: byte spans and line/column locations.
//! Everything here is a plain value type; no allocation, no I/O.

pub mod span;

pub use span::{Location, Span};
