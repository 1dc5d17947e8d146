//! Document assembler (spec §4.12): the top-level driver that walks the
//! parsed AST once, picks the ternary-specialization route (§4.10) or the
//! normal zip/fragment/normalize route (§4.3–§4.9), and produces the final
//! [`DmnDocument`] with its diagram populated.

use javael_analyzer::ternary::{collect_ternary_path, is_ternary};
use javael_ast::ast::AST;
use javael_ast::nodes::NodeID;

use crate::builder::compile_formula;
use crate::context::CompileContext;
use crate::error::CompileResult;
use crate::layout::layout;
use crate::model::DmnDocument;
use crate::ternary_builder::build_ternary;

/// Assembles the full DMN document for the expression rooted at `root`.
///
/// A root-level ternary takes the decision-table permutation route
/// (spec §4.10); anything else goes through the normal pipeline
/// (spec §4.3–§4.9) via [`compile_formula`]. Either way, the last decision
/// pushed into [`DmnDocument::decisions`] is the root of the DRD, and
/// [`layout`] positions every shape before the document is returned.
pub fn assemble(ast: &AST, ctx: &mut CompileContext, root: NodeID) -> CompileResult<DmnDocument> {
    let mut doc = DmnDocument { id: ctx.ids.next("Definitions"), ..DmnDocument::default() };

    if is_ternary(ast, root) {
        let path = collect_ternary_path(ast, root).expect("is_ternary confirmed a Ternary node");
        log::debug!("root is a ternary chain of depth {}", path.steps.len());
        build_ternary(ast, ctx, &mut doc, &path)?;
    } else {
        compile_formula(ast, ctx, &mut doc, root)?;
    }

    layout(&mut doc);
    log::debug!("assembled {} decision(s), {} input(s)", doc.decisions.len(), doc.input_data.len());
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use javael_parser::parser::parse;

    use super::*;

    fn run(source: &str) -> DmnDocument {
        let (ast, root) = parse(source).expect("valid expression");
        let mut ctx = CompileContext::new("t");
        assemble(&ast, &mut ctx, root).expect("compiles")
    }

    #[test]
    fn every_information_requirement_target_exists_in_the_document() {
        let doc = run("!(a eq 1 or b eq 2) and c eq 3");
        let decision_ids: Vec<&str> = doc.decisions.iter().map(|d| d.id.as_str()).collect();
        let input_ids: Vec<&str> = doc.input_data.iter().map(|i| i.id.as_str()).collect();
        for decision in &doc.decisions {
            for requirement in &decision.requirements {
                let target = match &requirement.source {
                    crate::model::RequirementSource::Decision(id) => id.as_str(),
                    crate::model::RequirementSource::InputData(id) => id.as_str(),
                };
                assert!(
                    decision_ids.contains(&target) || input_ids.contains(&target),
                    "dangling requirement target {target}"
                );
            }
        }
    }

    #[test]
    fn layout_runs_and_shapes_cover_every_element() {
        let doc = run("a eq 1 ? 'X' : 'Y'");
        assert_eq!(doc.diagram.shapes.len(), doc.decisions.len() + doc.input_data.len());
    }

    #[test]
    fn s6_three_input_conjunction_is_a_single_rule_row() {
        let doc = run("!(A or B) and C");
        let root = doc.decisions.last().expect("root decision");
        // One three-literal conjunction clause, plus the catch-all row.
        assert_eq!(root.table.rules.len(), 2);
        assert_eq!(root.table.inputs.len(), 3);
    }
}
