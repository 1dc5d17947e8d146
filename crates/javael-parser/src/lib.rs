//! # JavaEL Parser
//!
//! Lexer and recursive-descent parser for JavaEL, the boolean/relational
//! expression language consumed by the translator. Produces a
//! [`javael_ast::ast::AST`] arena plus the root [`javael_ast::nodes::NodeID`],
//! or a [`diagnostics::SyntaxError`] on the first lexical or grammatical
//! problem — JavaEL expressions are short enough that error recovery brings
//! no benefit.
//!
//! ## Example
//!
//! ```rust
//! use javael_parser::parser::parse;
//!
//! let (ast, root) = parse("fields.a eq 'UL' ? 'X' : 'Y'").expect("valid expression");
//! assert!(ast.get_node(root).is_some());
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
