//! DMN builder (spec §4.9–§4.10): turns a zipped/fragmented formula into
//! decision tables, input-data elements, and information-requirement edges.
//!
//! [`compile_formula`] is the single entry point both the top-level
//! translation and the ternary specialization path (§4.10) call: a JavaEL
//! sub-tree that denotes a boolean value — the whole source expression, or
//! one predicate along a ternary chain — goes through operand marking, the
//! formula zipper, DNF normalization, and per-atom fragmentation, emitting
//! every decision and input-data element it needs along the way and
//! returning a [`NodeRef`] the caller wires into its own dependency.

use javael_analyzer::mark_simple_operands;
use javael_ast::ast::AST;
use javael_ast::nodes::NodeID;
use rustc_hash::FxHashMap;

use crate::context::CompileContext;
use crate::dmn_tree::{DmnNode, OperatorKind};
use crate::error::{CompileResult, TranslationError};
use crate::formula::{AtomId, OperatorStorage};
use crate::fragmenter::fragment;
use crate::model::{
    Decision,
    DecisionTable,
    DmnDocument,
    InformationRequirement,
    InputClause,
    InputData,
    OutputClause,
    RequirementSource,
    Rule,
};
use crate::normalizer::to_dnf;
use crate::zipper::zip;

/// FEEL's "don't care" unary test — matches any value.
const DONT_CARE: &str = "-";

/// How a dependent decision reaches a built node's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRef {
    /// The node became its own `decision`; `String` is its id.
    Decision(String),
    /// The node is a bare external identifier; `String` is the `inputData`
    /// element's id.
    InputData(String),
    /// The node is a literal or an expression with no identifier of its
    /// own (e.g. a bare `true`); inlined directly into the parent's rule
    /// text rather than materialized as a DMN element.
    Literal(String),
}

impl NodeRef {
    /// The FEEL text a parent rule should use to read this node's value:
    /// the referenced element's name for a decision/input-data, or the
    /// literal text itself.
    fn feel_text(&self, doc: &DmnDocument) -> String {
        match self {
            Self::Decision(id) => doc.decisions.iter().find(|d| &d.id == id).map_or_else(String::new, |d| d.name.clone()),
            Self::InputData(id) => {
                doc.input_data.iter().find(|i| &i.id == id).map_or_else(String::new, |i| i.name.clone())
            }
            Self::Literal(text) => text.clone(),
        }
    }
}

/// Returns `true` if `text` reads as a FEEL name reference rather than a
/// literal — a bare identifier (optionally dotted), not `true`/`false`/
/// `null`, a quoted string, or a number.
fn is_identifier_reference(text: &str) -> bool {
    let mut chars = text.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    starts_ok
        && chars.clone().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        && !matches!(text, "true" | "false" | "null")
}

/// Registers `name` as an `inputData` element, reusing the existing id if
/// this identifier was already seen in this compile.
fn get_or_create_input_data(ctx: &mut CompileContext, doc: &mut DmnDocument, name: &str) -> String {
    if let Some(id) = ctx.input_data_by_name.get(name) {
        return id.clone();
    }
    let id = ctx.ids.next("InputData");
    doc.input_data.push(InputData { id: id.clone(), name: name.to_owned() });
    ctx.input_data_by_name.insert(name.to_owned(), id.clone());
    id
}

/// Builds a [`NodeRef`] for one `DmnNode`, recursing into operator children
/// and allocating a `decision`/`inputData` element as needed.
fn build_node(ctx: &mut CompileContext, doc: &mut DmnDocument, node: &DmnNode) -> CompileResult<NodeRef> {
    match node {
        DmnNode::Expression { text, .. } => {
            if is_identifier_reference(text) {
                Ok(NodeRef::InputData(get_or_create_input_data(ctx, doc, text)))
            } else {
                Ok(NodeRef::Literal(text.clone()))
            }
        }
        DmnNode::Operator { kind, children } => build_operator(ctx, doc, *kind, children),
    }
}

/// Builds the canonical decision table for one `Operator` DMN node
/// (spec §4.9's second table), wiring its children as information
/// requirements.
fn build_operator(ctx: &mut CompileContext, doc: &mut DmnDocument, kind: OperatorKind, children: &[DmnNode]) -> CompileResult<NodeRef> {
    let child_refs: Vec<NodeRef> = children.iter().map(|child| build_node(ctx, doc, child)).collect::<CompileResult<_>>()?;
    let decision_id = ctx.ids.next("Decision");
    log::trace!("building decision {decision_id} for operator {kind}");

    let table = if kind.is_boolean() {
        build_boolean_operator_table(ctx, doc, kind, &child_refs)?
    } else {
        build_arithmetic_table(ctx, kind, &child_refs, doc)
    };

    let requirements = requirements_for(ctx, &decision_id, &child_refs);
    doc.decisions.push(Decision { id: decision_id.clone(), name: decision_id.clone(), table, requirements });
    Ok(NodeRef::Decision(decision_id))
}

/// Builds the two-row boolean table from spec §4.9 for `eq`/`ne`/relations/
/// `not`/`empty`. The input column is whichever child resolved to an
/// `inputData` or nested `decision` (its boolean/comparable value); a
/// sibling `Literal` child supplies `L`, inlined into the rule text rather
/// than becoming its own column.
fn build_boolean_operator_table(
    ctx: &mut CompileContext,
    doc: &DmnDocument,
    kind: OperatorKind,
    child_refs: &[NodeRef],
) -> CompileResult<DecisionTable> {
    let output = OutputClause { id: ctx.ids.next("Output"), label: "result".to_owned() };

    match kind {
        OperatorKind::Not | OperatorKind::Empty => {
            let [operand] = child_refs else {
                return Err(TranslationError::MissingOperatorMapping { operator: kind.to_string() }.into());
            };
            let input = InputClause {
                id: ctx.ids.next("Input"),
                label: operand.feel_text(doc),
                expression_id: ctx.ids.next("InputExpression"),
            };
            let (match_entry, match_output, other_output) = match kind {
                OperatorKind::Not => ("true", "false", "true"),
                OperatorKind::Empty => ("null", "true", "false"),
                _ => unreachable!("matched above"),
            };
            let rules = vec![
                Rule {
                    id: ctx.ids.next("DecisionRule"),
                    input_entries: vec![match_entry.to_owned()],
                    output_entry: match_output.to_owned(),
                },
                Rule { id: ctx.ids.next("DecisionRule"), input_entries: vec![DONT_CARE.to_owned()], output_entry: other_output.to_owned() },
            ];
            Ok(DecisionTable { id: ctx.ids.next("DecisionTable"), inputs: vec![input], output, rules })
        }
        _ => {
            let [left, right] = child_refs else {
                return Err(TranslationError::MissingOperatorMapping { operator: kind.to_string() }.into());
            };
            let (subject, literal) = match (left, right) {
                (NodeRef::Literal(_), other) => (other, left.feel_text(doc)),
                (subject, _) => (subject, right.feel_text(doc)),
            };
            let input = InputClause {
                id: ctx.ids.next("Input"),
                label: subject.feel_text(doc),
                expression_id: ctx.ids.next("InputExpression"),
            };
            let (test, match_output, fallthrough_output) = match kind {
                OperatorKind::Eq => (format!("not({literal})"), "false", "true"),
                OperatorKind::Ne => (format!("not({literal})"), "true", "false"),
                OperatorKind::Lt => (format!("< {literal}"), "true", "false"),
                OperatorKind::Le => (format!("<= {literal}"), "true", "false"),
                OperatorKind::Gt => (format!("< {literal}"), "false", "true"),
                OperatorKind::Ge => (format!("<= {literal}"), "false", "true"),
                _ => unreachable!("non-boolean kinds handled by build_arithmetic_table"),
            };
            let rules = vec![
                Rule { id: ctx.ids.next("DecisionRule"), input_entries: vec![test], output_entry: match_output.to_owned() },
                Rule { id: ctx.ids.next("DecisionRule"), input_entries: vec![DONT_CARE.to_owned()], output_entry: fallthrough_output.to_owned() },
            ];
            Ok(DecisionTable { id: ctx.ids.next("DecisionTable"), inputs: vec![input], output, rules })
        }
    }
}

/// Builds the single always-matching row that computes an arithmetic
/// operator's FEEL expression from its operands — spec §4.9 defines no
/// boolean table for `+`/`-`/`*`/`/`/`%`, since JavaEL arithmetic only ever
/// appears nested inside a relation or equality, never at formula root.
fn build_arithmetic_table(ctx: &mut CompileContext, kind: OperatorKind, child_refs: &[NodeRef], doc: &DmnDocument) -> DecisionTable {
    let output = OutputClause { id: ctx.ids.next("Output"), label: "result".to_owned() };
    let mut inputs = Vec::new();
    let mut operand_text = Vec::new();
    for child in child_refs {
        match child {
            NodeRef::Literal(text) => operand_text.push(text.clone()),
            NodeRef::Decision(_) | NodeRef::InputData(_) => {
                let label = child.feel_text(doc);
                operand_text.push(label.clone());
                inputs.push(InputClause { id: ctx.ids.next("Input"), label, expression_id: ctx.ids.next("InputExpression") });
            }
        }
    }
    let expression = operand_text.join(&format!(" {} ", kind.feel_symbol()));
    let rule = Rule {
        id: ctx.ids.next("DecisionRule"),
        input_entries: inputs.iter().map(|_| DONT_CARE.to_owned()).collect(),
        output_entry: expression,
    };
    DecisionTable { id: ctx.ids.next("DecisionTable"), inputs, output, rules: vec![rule] }
}

/// Records information-requirement edges from `decision_id` to every
/// non-literal child, updating the registries from spec §3.
fn requirements_for(ctx: &mut CompileContext, decision_id: &str, child_refs: &[NodeRef]) -> Vec<InformationRequirement> {
    let mut requirements = Vec::new();
    let mut deps = Vec::new();
    for child in child_refs {
        let source = match child {
            NodeRef::Decision(id) => Some(RequirementSource::Decision(id.clone())),
            NodeRef::InputData(id) => {
                deps.push(id.clone());
                Some(RequirementSource::InputData(id.clone()))
            }
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
    ctx.table_to_input_data.insert(decision_id.to_owned(), deps);
    requirements
}

/// Compiles the boolean sub-tree rooted at `root` into a `decision`
/// (spec §4.3–§4.9's normal, non-ternary path): operand marking → zip →
/// DNF → per-atom fragmentation → root decision table over the atoms.
///
/// This is the single entry point shared by [`crate::document::assemble`]
/// for the whole source expression and by the ternary builder for each
/// predicate along a chain.
pub fn compile_formula(ast: &AST, ctx: &mut CompileContext, doc: &mut DmnDocument, root: NodeID) -> CompileResult<NodeRef> {
    log::debug!("compiling formula rooted at {root}");
    let operand_table = mark_simple_operands(ast, root);
    let mut storage = OperatorStorage::new();
    let formula = zip(ast, &operand_table, &mut storage, root);
    let dnf = to_dnf(&formula);
    log::debug!("normalized to {} clause(s)", dnf.clauses.len());

    // A single, unnegated atom collapses to that atom's own node directly —
    // no root decision needed to wrap a single dependency in an identity
    // table (property 4's "DNF shape" still holds; this is just not
    // re-expressed as a degenerate one-row/one-column decision).
    if let [clause] = dnf.clauses.as_slice() {
        if let [literal] = clause.as_slice() {
            if !literal.negated {
                let atom_node = storage.lookup(literal.atom).expect("atom registered during zip");
                return build_node(ctx, doc, &fragment(ast, atom_node));
            }
        }
    }

    let mut atom_refs: FxHashMap<AtomId, NodeRef> = FxHashMap::default();
    let mut atom_order = Vec::new();
    for clause in &dnf.clauses {
        for literal in clause {
            if let std::collections::hash_map::Entry::Vacant(entry) = atom_refs.entry(literal.atom) {
                let atom_node = storage.lookup(literal.atom).expect("atom registered during zip");
                let dmn = fragment(ast, atom_node);
                let node_ref = build_node(ctx, doc, &dmn)?;
                entry.insert(node_ref);
                atom_order.push(literal.atom);
            }
        }
    }

    let output = OutputClause { id: ctx.ids.next("Output"), label: "result".to_owned() };
    let inputs: Vec<InputClause> = atom_order
        .iter()
        .map(|atom| InputClause {
            id: ctx.ids.next("Input"),
            label: atom_refs[atom].feel_text(doc),
            expression_id: ctx.ids.next("InputExpression"),
        })
        .collect();

    let mut rules = Vec::with_capacity(dnf.clauses.len() + 1);
    for clause in &dnf.clauses {
        let mut input_entries = vec![DONT_CARE.to_owned(); atom_order.len()];
        for literal in clause {
            let column = atom_order.iter().position(|atom| *atom == literal.atom).expect("atom indexed above");
            input_entries[column] = (!literal.negated).to_string();
        }
        rules.push(Rule { id: ctx.ids.next("DecisionRule"), input_entries, output_entry: "true".to_owned() });
    }
    rules.push(Rule {
        id: ctx.ids.next("DecisionRule"),
        input_entries: vec![DONT_CARE.to_owned(); atom_order.len()],
        output_entry: "false".to_owned(),
    });

    let decision_id = ctx.ids.next("Decision");
    let child_refs: Vec<NodeRef> = atom_order.iter().map(|atom| atom_refs[atom].clone()).collect();
    let requirements = requirements_for(ctx, &decision_id, &child_refs);
    for atom in &atom_order {
        ctx.table_to_decision.insert(atom.to_string(), decision_id.clone());
    }

    let table = DecisionTable { id: ctx.ids.next("DecisionTable"), inputs, output, rules };
    doc.decisions.push(Decision { id: decision_id.clone(), name: decision_id.clone(), table, requirements });
    Ok(NodeRef::Decision(decision_id))
}

#[cfg(test)]
mod tests {
    use javael_parser::parser::parse;

    use super::*;

    fn compile(source: &str) -> DmnDocument {
        let (ast, root) = parse(source).expect("valid expression");
        let mut ctx = CompileContext::new("t");
        let mut doc = DmnDocument::default();
        compile_formula(&ast, &mut ctx, &mut doc, root).expect("compiles");
        doc
    }

    #[test]
    fn empty_field_yields_one_decision_and_one_input() {
        let doc = compile("empty field");
        assert_eq!(doc.decisions.len(), 1);
        assert_eq!(doc.input_data.len(), 1);
        assert_eq!(doc.input_data[0].name, "field");
        let table = &doc.decisions[0].table;
        assert_eq!(table.rules[0].input_entries, vec!["null"]);
        assert_eq!(table.rules[0].output_entry, "true");
        assert_eq!(table.rules[1].output_entry, "false");
    }

    #[test]
    fn not_field_yields_not_table() {
        let doc = compile("! field");
        assert_eq!(doc.decisions.len(), 1);
        let table = &doc.decisions[0].table;
        assert_eq!(table.rules[0].input_entries, vec!["true"]);
        assert_eq!(table.rules[0].output_entry, "false");
        assert_eq!(table.rules[1].output_entry, "true");
    }

    #[test]
    fn conjunction_of_two_equalities_yields_three_decisions() {
        let doc = compile("p eq '32896' and q eq '32898'");
        // Two equality decisions + one root decision over both.
        assert_eq!(doc.decisions.len(), 3);
        assert_eq!(doc.input_data.len(), 2);
        let root = doc.decisions.last().expect("root decision");
        assert_eq!(root.table.inputs.len(), 2);
        assert_eq!(root.table.rules.len(), 2); // one conjunct row + catch-all
        assert_eq!(root.requirements.len(), 2);
    }

    #[test]
    fn disjunction_of_two_equalities_yields_two_rows() {
        let doc = compile("p eq '1' or q eq '2'");
        let root = doc.decisions.last().expect("root decision");
        assert_eq!(root.table.rules.len(), 3); // two clauses + catch-all
    }

    #[test]
    fn repeated_identifier_reuses_the_same_input_data() {
        let doc = compile("a eq '1' and a eq '2'");
        assert_eq!(doc.input_data.len(), 1, "both equalities read the same `a`");
    }

    #[test]
    fn bare_boolean_identifier_has_no_wrapper_decision() {
        let doc = compile("a and b eq '1'");
        // `a` alone is a simple operand with no operator to fragment —
        // it becomes a direct inputData reference, not its own decision.
        assert_eq!(doc.decisions.len(), 2); // the `eq` decision + root
        assert_eq!(doc.input_data.len(), 2);
    }
}
