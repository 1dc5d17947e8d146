//! Translation core for the JavaEL-to-DMN compiler.
//!
//! [`translate`] is this crate's public surface: given a JavaEL source
//! string it drives operand marking, the formula zipper, DNF normalization,
//! per-atom fragmentation, ternary elimination, DMN table construction, and
//! diagram layout, producing a [`model::DmnDocument`].
//! [`backend::xml::render`] turns that document into DMN 1.x XML.
//!
//! ```
//! let doc = javael_compiler::translate("empty field").expect("valid expression");
//! assert_eq!(doc.input_data.len(), 1);
//! let xml = javael_compiler::render(&doc);
//! assert!(xml.contains("<inputData"));
//! ```

pub mod backend;
pub mod builder;
pub mod context;
pub mod dmn_tree;
pub mod document;
pub mod error;
pub mod feel_print;
pub mod formula;
pub mod fragmenter;
pub mod layout;
pub mod model;
pub mod normalizer;
pub mod ternary_builder;
pub mod zipper;

use context::CompileContext;
pub use error::{CompileError, CompileResult, TranslationError};
pub use model::DmnDocument;

/// Compiles a JavaEL source expression into a DMN document, using the
/// default `"javael"` element-id prefix.
///
/// ## Errors
///
/// Returns [`CompileError::Syntax`] if `source` fails to parse, or
/// [`CompileError::Translation`] if a downstream phase hits an invariant
/// violation it cannot translate.
pub fn translate(source: &str) -> CompileResult<DmnDocument> { translate_with_id_prefix(source, "javael") }

/// As [`translate`], but with an explicit element-id prefix — the CLI's
/// `--id-prefix` knob, and what snapshot tests use to keep generated ids
/// stable across runs of the same input.
///
/// ## Errors
///
/// See [`translate`].
pub fn translate_with_id_prefix(source: &str, id_prefix: &str) -> CompileResult<DmnDocument> {
    let (ast, root) = javael_parser::parser::parse(source)?;
    let mut ctx = CompileContext::new(id_prefix);
    document::assemble(&ast, &mut ctx, root)
}

/// Renders a compiled [`DmnDocument`] as DMN 1.x XML.
#[must_use]
pub fn render(doc: &DmnDocument) -> String { backend::xml::render(doc) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s1_empty_field_compiles_to_one_decision() {
        let doc = translate("empty field").expect("valid expression");
        assert_eq!(doc.decisions.len(), 1);
        assert_eq!(doc.input_data[0].name, "field");
    }

    #[test]
    fn s4_conjunction_of_equalities_compiles_to_three_decisions() {
        let doc = translate("p eq '32896' and q eq '32898'").expect("valid expression");
        assert_eq!(doc.decisions.len(), 3);
        assert_eq!(doc.input_data.len(), 2);
    }

    #[test]
    fn s5_depth_two_ternary_compiles_to_a_four_row_root() {
        let doc = translate("a ? b ? x : y : z").expect("valid expression");
        let root = doc.decisions.last().expect("root decision");
        assert_eq!(root.table.rules.len(), 4);
    }

    #[test]
    fn every_requirement_target_exists_in_the_compiled_document() {
        let doc = translate("a eq 1 and (b gt 2 or c le 3)").expect("valid expression");
        let decision_ids: Vec<&str> = doc.decisions.iter().map(|d| d.id.as_str()).collect();
        let input_ids: Vec<&str> = doc.input_data.iter().map(|i| i.id.as_str()).collect();
        for decision in &doc.decisions {
            for requirement in &decision.requirements {
                let target = match &requirement.source {
                    model::RequirementSource::Decision(id) => id.as_str(),
                    model::RequirementSource::InputData(id) => id.as_str(),
                };
                assert!(decision_ids.contains(&target) || input_ids.contains(&target));
            }
        }
    }

    #[test]
    fn a_syntax_error_never_yields_a_partial_document() {
        assert!(translate("a eq").is_err());
    }

    #[test]
    fn the_same_source_and_prefix_yield_byte_identical_ids() {
        let first = translate_with_id_prefix("a eq 1", "seed").expect("valid expression");
        let second = translate_with_id_prefix("a eq 1", "seed").expect("valid expression");
        assert_eq!(first.decisions[0].id, second.decisions[0].id);
    }

    #[test]
    fn rendering_a_compiled_document_yields_a_well_formed_looking_document() {
        let doc = translate("a eq 1").expect("valid expression");
        let xml = render(&doc);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.trim_end().ends_with("</definitions>"));
    }
}
