//! Ternary decision-table specialization (spec §4.10).
//!
//! When a ternary's nesting depth `d > 0`, the builder takes a route
//! distinct from the normal zip/fragment/normalize pipeline: one decision
//! per distinct predicate along the chain, then one root table of `2^d`
//! rows selecting among the branch results via [`javael_analyzer::ternary`]'s
//! branch selector.

use javael_analyzer::ternary::TernaryPath;
use javael_ast::ast::AST;
use javael_ast::nodes::NodeID;

use crate::builder::{NodeRef, compile_formula};
use crate::context::CompileContext;
use crate::error::CompileResult;
use crate::feel_print::print_node;
use crate::model::{Decision, DecisionTable, DmnDocument, InformationRequirement, InputClause, OutputClause, RequirementSource, Rule};

/// Builds the root decision for a chained ternary, plus one decision per
/// distinct predicate along the chain (spec §4.10).
pub fn build_ternary(ast: &AST, ctx: &mut CompileContext, doc: &mut DmnDocument, path: &TernaryPath) -> CompileResult<NodeRef> {
    let mut predicate_refs = Vec::with_capacity(path.steps.len());
    for step in &path.steps {
        predicate_refs.push(compile_formula(ast, ctx, doc, step.cond)?);
    }

    let depth = path.steps.len();
    let row_count = 1usize << depth;

    let output = OutputClause { id: ctx.ids.next("Output"), label: "result".to_owned() };
    let inputs: Vec<InputClause> = predicate_refs
        .iter()
        .map(|node_ref| InputClause {
            id: ctx.ids.next("Input"),
            label: feel_text(doc, node_ref),
            expression_id: ctx.ids.next("InputExpression"),
        })
        .collect();

    let mut rules = Vec::with_capacity(row_count);
    for row in 0..row_count {
        let bits: Vec<bool> = (0..depth).map(|i| (row >> (depth - 1 - i)) & 1 == 1).collect();
        let leaf = select_leaf(ast, path, &bits);
        let input_entries = bits.iter().map(|bit| bit.to_string()).collect();
        rules.push(Rule { id: ctx.ids.next("DecisionRule"), input_entries, output_entry: print_node(ast, leaf) });
    }

    let decision_id = ctx.ids.next("Decision");
    let requirements = requirements_for(ctx, &predicate_refs);
    let table = DecisionTable { id: ctx.ids.next("DecisionTable"), inputs, output, rules };
    doc.decisions.push(Decision { id: decision_id.clone(), name: decision_id.clone(), table, requirements });
    Ok(NodeRef::Decision(decision_id))
}

/// The branch selector from spec §4.3: walks the ternary chain choosing
/// `then_branch` on `true`, `else_branch` on `false`, consuming `bits` in
/// root-to-leaf order, and returns the unique non-ternary leaf reached.
fn select_leaf(_ast: &AST, path: &TernaryPath, bits: &[bool]) -> NodeID {
    let last = path.steps.len() - 1;
    for (i, step) in path.steps.iter().enumerate() {
        if !bits[i] {
            // `else_branch` is never itself part of the then-chain, so it
            // is always a terminal leaf.
            return step.else_branch;
        }
        if i == last {
            return step.then_branch;
        }
    }
    unreachable!("path.steps is non-empty, so the loop always returns")
}

fn feel_text(doc: &DmnDocument, node_ref: &NodeRef) -> String {
    match node_ref {
        NodeRef::Decision(id) => doc.decisions.iter().find(|d| &d.id == id).map_or_else(String::new, |d| d.name.clone()),
        NodeRef::InputData(id) => doc.input_data.iter().find(|i| &i.id == id).map_or_else(String::new, |i| i.name.clone()),
        NodeRef::Literal(text) => text.clone(),
    }
}

fn requirements_for(ctx: &mut CompileContext, predicate_refs: &[NodeRef]) -> Vec<InformationRequirement> {
    let mut requirements = Vec::new();
    for node_ref in predicate_refs {
        let source = match node_ref {
            NodeRef::Decision(id) => Some(RequirementSource::Decision(id.clone())),
            NodeRef::InputData(id) => Some(RequirementSource::InputData(id.clone())),
            NodeRef::Literal(_) => None,
        };
        if let Some(source) = source {
            let req_id = ctx.ids.next("InformationRequirement");
            if let RequirementSource::InputData(ref input_id) = source {
                ctx.input_data_to_info_req.entry(input_id.clone()).or_default().push(req_id.clone());
            }
            requirements.push(InformationRequirement { id: req_id, source });
        }
    }
    requirements
}

#[cfg(test)]
mod tests {
    use javael_analyzer::ternary::collect_ternary_path;
    use javael_parser::parser::parse;

    use super::*;

    #[test]
    fn depth_one_ternary_yields_two_row_table() {
        let (ast, root) = parse("fields.a eq 'UL' ? 'X' : 'Y'").expect("valid expression");
        let path = collect_ternary_path(&ast, root).expect("ternary path");
        let mut ctx = CompileContext::new("t");
        let mut doc = DmnDocument::default();
        build_ternary(&ast, &mut ctx, &mut doc, &path).expect("builds");
        // One predicate decision + one root decision.
        assert_eq!(doc.decisions.len(), 2);
        let root_decision = doc.decisions.last().expect("root");
        assert_eq!(root_decision.table.rules.len(), 2);
        assert_eq!(root_decision.table.rules[0].output_entry, "'Y'");
        assert_eq!(root_decision.table.rules[1].output_entry, "'X'");
    }

    #[test]
    fn depth_two_ternary_yields_four_row_table() {
        let (ast, root) = parse("a ? b ? x : y : z").expect("valid expression");
        let path = collect_ternary_path(&ast, root).expect("ternary path");
        let mut ctx = CompileContext::new("t");
        let mut doc = DmnDocument::default();
        build_ternary(&ast, &mut ctx, &mut doc, &path).expect("builds");
        let root_decision = doc.decisions.last().expect("root");
        assert_eq!(root_decision.table.rules.len(), 4);
        // row (false, _) -> z
        assert_eq!(root_decision.table.rules[0].output_entry, "z");
        assert_eq!(root_decision.table.rules[1].output_entry, "z");
        // row (true, true) -> x ; row (true, false) -> y
        assert_eq!(root_decision.table.rules[2].output_entry, "y");
        assert_eq!(root_decision.table.rules[3].output_entry, "x");
    }
}
