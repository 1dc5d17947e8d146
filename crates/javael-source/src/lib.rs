//! Source file handling and position tracking for the JavaEL-to-DMN translator.
//!
//! This crate provides the fundamental types and utilities for working with source code
//! across the translation pipeline: source file representation, content access, and
//! precise location tracking through spans and positions, used by the parser to report
//! `SyntaxError` diagnostics.

pub mod types;
