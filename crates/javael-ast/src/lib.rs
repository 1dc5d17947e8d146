//! Abstract Syntax Tree (AST) definitions for the JavaEL-to-DMN translator.

#[macro_use]
pub mod macros;

pub mod ast;
pub mod nodes;
pub mod visitor;
