//! FEEL translator (spec §4.8): rewrites JavaEL surface syntax to FEEL.
//!
//! Operates directly on AST sub-trees rather than on already-zipped text,
//! per §9's typed-IR license — every DMN leaf this crate builds keeps a
//! `NodeID` back into the original tree (`Expression::contexts` in
//! [`crate::dmn_tree`]), so printing happens once, at the point a leaf's
//! text is actually needed, instead of being threaded through every
//! intermediate stage as a string.

use std::fmt::Write as _;

use javael_ast::ast::AST;
use javael_ast::nodes::{Accessor, AnyNode, EqualityOp, MemberOp, NodeID, PrimitiveKind, RelationOp, UnaryOp};

/// Renders the sub-tree at `id` as FEEL surface syntax.
///
/// Identifier access chains stay dotted (`fields.a.b`); literals keep their
/// JavaEL quoting (FEEL accepts the same single-quoted string form); a raw
/// `Ternary` that survives to this point — one the zipper never reached,
/// because it sits in a value position rather than a boolean one — prints
/// as FEEL's native `if C then A else B`.
#[must_use]
pub fn print_node(ast: &AST, id: NodeID) -> String {
    let Some(node) = ast.get_node(id) else { return String::new() };

    match &node.data {
        AnyNode::Ternary(expr) => {
            format!(
                "if {} then {} else {}",
                print_node(ast, expr.cond),
                print_node(ast, expr.then_branch),
                print_node(ast, expr.else_branch)
            )
        }
        AnyNode::Or(expr) => format!("{} or {}", print_node(ast, expr.left), print_node(ast, expr.right)),
        AnyNode::And(expr) => format!("{} and {}", print_node(ast, expr.left), print_node(ast, expr.right)),
        AnyNode::Equality(expr) => {
            let left = print_node(ast, expr.left);
            let right = print_node(ast, expr.right);
            match expr.op {
                EqualityOp::Eq => format!("{left} = {right}"),
                EqualityOp::Ne => format!("not({left} = {right})"),
            }
        }
        AnyNode::Relation(expr) => {
            let symbol = match expr.op {
                RelationOp::Gt => ">",
                RelationOp::Lt => "<",
                RelationOp::Ge => ">=",
                RelationOp::Le => "<=",
            };
            format!("{} {symbol} {}", print_node(ast, expr.left), print_node(ast, expr.right))
        }
        AnyNode::Algebraic(expr) => {
            let symbol = expr.op;
            format!("{} {symbol} {}", print_node(ast, expr.left), print_node(ast, expr.right))
        }
        AnyNode::Member(expr) => {
            let symbol = match expr.op {
                MemberOp::Mul => "*",
                MemberOp::Div => "/",
                MemberOp::Mod => "%",
            };
            format!("{} {symbol} {}", print_node(ast, expr.left), print_node(ast, expr.right))
        }
        AnyNode::Unary(expr) => {
            let operand = print_node(ast, expr.operand);
            match expr.op {
                UnaryOp::Not => format!("not( {operand} )"),
                UnaryOp::Empty => format!("{operand} = null"),
                UnaryOp::Minus => format!("-{operand}"),
            }
        }
        AnyNode::Value(expr) => {
            let mut text = print_node(ast, expr.head);
            for accessor in &expr.accessors {
                match accessor {
                    Accessor::Field(name) => {
                        let _ = write!(text, ".{name}");
                    }
                    Accessor::Index(index) => {
                        let _ = write!(text, "[{}]", print_node(ast, *index));
                    }
                    Accessor::Call(args) => {
                        let rendered: Vec<String> = args.iter().map(|arg| print_node(ast, *arg)).collect();
                        let _ = write!(text, "({})", rendered.join(", "));
                    }
                }
            }
            text
        }
        AnyNode::Primitive(expr) => match &expr.kind {
            PrimitiveKind::Literal(literal) => literal.to_string(),
            PrimitiveKind::Identifier(name) => name.clone(),
            PrimitiveKind::Call { callee, arg } => {
                let callee_text = print_node(ast, *callee);
                match arg {
                    Some(arg) => format!("{callee_text}({})", print_node(ast, *arg)),
                    None => format!("{callee_text}()"),
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use javael_parser::parser::parse;

    use super::*;

    #[test]
    fn eq_prints_as_feel_equality() {
        let (ast, root) = parse("a eq 1").expect("valid expression");
        assert_eq!(print_node(&ast, root), "a = 1");
    }

    #[test]
    fn ne_prints_as_negated_equality() {
        let (ast, root) = parse("a ne 1").expect("valid expression");
        assert_eq!(print_node(&ast, root), "not(a = 1)");
    }

    #[test]
    fn not_wraps_in_parens() {
        let (ast, root) = parse("not a").expect("valid expression");
        assert_eq!(print_node(&ast, root), "not( a )");
    }

    #[test]
    fn empty_prints_as_null_comparison() {
        let (ast, root) = parse("empty a").expect("valid expression");
        assert_eq!(print_node(&ast, root), "a = null");
    }

    #[test]
    fn dotted_access_chain_stays_dotted() {
        let (ast, root) = parse("fields.a.b").expect("valid expression");
        assert_eq!(print_node(&ast, root), "fields.a.b");
    }

    #[test]
    fn raw_ternary_prints_as_feel_if_then_else() {
        let (ast, root) = parse("a eq 1 ? 'X' : 'Y'").expect("valid expression");
        assert_eq!(print_node(&ast, root), "if a = 1 then 'X' else 'Y'");
    }

    #[test]
    fn string_literal_keeps_single_quotes() {
        let (ast, root) = parse("'UL'").expect("valid expression");
        assert_eq!(print_node(&ast, root), "'UL'");
    }
}
