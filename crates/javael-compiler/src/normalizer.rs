//! Boolean normalizer (spec §4.7): converts the residual [`BoolFormula`]
//! to disjunctive normal form — a disjunction of conjunctions of literals.
//!
//! The source drives this with a textual re-parse-and-split over `or`/`and`
//! tokens, finishing with a `ScopesDeleter`-style paren-stripping pass for
//! the "single atom survives untouched" edge case. Operating on the typed
//! `BoolFormula` directly (per §9's typed-IR license) makes most of that
//! machinery unnecessary: distributing `and` over `or` and pushing `not`
//! inward are structural rewrites, not string surgery, and the "single atom
//! at the top level" edge case falls out of the recursion for free — a lone
//! atom distributes to the one-clause, one-literal DNF `[[+atom]]`.

use crate::formula::{AtomId, BoolFormula};

/// A literal: an atom, optionally negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    /// The atom this literal refers to.
    pub atom: AtomId,
    /// `true` if this literal is `not(atom)`.
    pub negated: bool,
}

/// A conjunction of literals — one row of the disjunctive normal form.
pub type Clause = Vec<Literal>;

/// Disjunctive normal form: `(L1 and L2 and …) or (L3 and …) or …`.
#[derive(Debug, Clone, Default)]
pub struct Dnf {
    /// The OR-joined clauses; never empty for a formula with at least one atom.
    pub clauses: Vec<Clause>,
}

/// Converts `formula` to DNF.
///
/// Implements the rewrite rules in two structural passes: `not` is pushed
/// to the leaves first (De Morgan), then `and` is distributed over `or`
/// bottom-up, matching the effect of the source's split-by-or/split-by-and
/// queue without needing its textual intermediates.
#[must_use]
pub fn to_dnf(formula: &BoolFormula) -> Dnf {
    Dnf { clauses: distribute(&push_not_inward(formula, false)) }
}

/// Normal-form-ish tree after `not` has been pushed to the leaves: only
/// `Or`/`And` combine [`Literal`]s now, never a bare `Not`.
enum Pushed {
    Literal(Literal),
    And(Box<Pushed>, Box<Pushed>),
    Or(Box<Pushed>, Box<Pushed>),
}

/// Pushes negation to the leaves (De Morgan's laws), tracking the current
/// negation parity in `negated` rather than allocating a new `Not` node.
fn push_not_inward(formula: &BoolFormula, negated: bool) -> Pushed {
    match formula {
        BoolFormula::Atom(atom) => Pushed::Literal(Literal { atom: *atom, negated }),
        BoolFormula::Not(inner) => push_not_inward(inner, !negated),
        BoolFormula::And(left, right) if negated => {
            // not(A and B) = not(A) or not(B)
            Pushed::Or(Box::new(push_not_inward(left, true)), Box::new(push_not_inward(right, true)))
        }
        BoolFormula::And(left, right) => {
            Pushed::And(Box::new(push_not_inward(left, false)), Box::new(push_not_inward(right, false)))
        }
        BoolFormula::Or(left, right) if negated => {
            // not(A or B) = not(A) and not(B)
            Pushed::And(Box::new(push_not_inward(left, true)), Box::new(push_not_inward(right, true)))
        }
        BoolFormula::Or(left, right) => {
            Pushed::Or(Box::new(push_not_inward(left, false)), Box::new(push_not_inward(right, false)))
        }
    }
}

/// Distributes `and` over `or` bottom-up, yielding a flat clause list.
fn distribute(pushed: &Pushed) -> Vec<Clause> {
    match pushed {
        Pushed::Literal(literal) => vec![vec![*literal]],
        Pushed::Or(left, right) => {
            let mut clauses = distribute(left);
            clauses.extend(distribute(right));
            clauses
        }
        Pushed::And(left, right) => {
            let left_clauses = distribute(left);
            let right_clauses = distribute(right);
            let mut out = Vec::with_capacity(left_clauses.len() * right_clauses.len());
            for left_clause in &left_clauses {
                for right_clause in &right_clauses {
                    let mut clause = left_clause.clone();
                    clause.extend(right_clause.iter().copied());
                    out.push(clause);
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(n: u32) -> BoolFormula {
        // AtomId has no public constructor outside this crate's formula
        // module's register(); tests build formulas through the real zipper
        // in `zipper::tests` and `fragment::tests` instead. This module's
        // own unit tests exercise the `Pushed`/distribute machinery using
        // atoms registered through OperatorStorage.
        let mut storage = crate::formula::OperatorStorage::new();
        let node = javael_ast::nodes::NodeID::new(n, 0);
        BoolFormula::Atom(storage.register(node))
    }

    #[test]
    fn single_atom_is_one_clause_one_literal() {
        let dnf = to_dnf(&atom(0));
        assert_eq!(dnf.clauses.len(), 1);
        assert_eq!(dnf.clauses[0].len(), 1);
        assert!(!dnf.clauses[0][0].negated);
    }

    #[test]
    fn negated_atom_is_negated_literal() {
        let dnf = to_dnf(&BoolFormula::not(atom(0)));
        assert!(dnf.clauses[0][0].negated);
    }

    #[test]
    fn or_of_atoms_yields_two_clauses() {
        let dnf = to_dnf(&BoolFormula::or(atom(0), atom(1)));
        assert_eq!(dnf.clauses.len(), 2);
    }

    #[test]
    fn and_distributes_over_or() {
        // (a or b) and c -> (a and c) or (b and c)
        let formula = BoolFormula::and(BoolFormula::or(atom(0), atom(1)), atom(2));
        let dnf = to_dnf(&formula);
        assert_eq!(dnf.clauses.len(), 2);
        assert_eq!(dnf.clauses[0].len(), 2);
        assert_eq!(dnf.clauses[1].len(), 2);
    }

    #[test]
    fn de_morgan_pushes_not_through_and() {
        // not(a and b) -> not(a) or not(b)
        let formula = BoolFormula::not(BoolFormula::and(atom(0), atom(1)));
        let dnf = to_dnf(&formula);
        assert_eq!(dnf.clauses.len(), 2);
        assert!(dnf.clauses.iter().all(|clause| clause[0].negated));
    }

    #[test]
    fn three_input_conjunction_is_a_single_clause() {
        // !(A or B) and C -> (!A and !B and C), one clause, three literals (S6).
        let formula = BoolFormula::and(
            BoolFormula::not(BoolFormula::or(atom(0), atom(1))),
            atom(2),
        );
        let dnf = to_dnf(&formula);
        assert_eq!(dnf.clauses.len(), 1);
        assert_eq!(dnf.clauses[0].len(), 3);
    }
}

/// Property: `to_dnf` preserves truth value under every assignment of its
/// atoms (spec §8 property 4 — DNF conversion is logically sound, not just
/// shaped like a disjunction of conjunctions).
#[cfg(test)]
mod dnf_equivalence {
    use proptest::prelude::*;

    use super::*;
    use crate::formula::OperatorStorage;

    const ATOM_COUNT: usize = 4;

    fn atom_pool() -> (OperatorStorage, Vec<BoolFormula>) {
        let mut storage = OperatorStorage::new();
        let atoms = (0..ATOM_COUNT)
            .map(|i| BoolFormula::Atom(storage.register(javael_ast::nodes::NodeID::new(i as u32, 0))))
            .collect();
        (storage, atoms)
    }

    fn formula_strategy(atoms: &[BoolFormula]) -> impl Strategy<Value = BoolFormula> {
        let leaf = prop::sample::select(atoms.to_vec());
        leaf.prop_recursive(4, 32, 3, |inner| {
            prop_oneof![
                inner.clone().prop_map(BoolFormula::not),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| BoolFormula::and(l, r)),
                (inner.clone(), inner).prop_map(|(l, r)| BoolFormula::or(l, r)),
            ]
        })
    }

    fn eval_formula(formula: &BoolFormula, storage: &OperatorStorage, assignment: &[bool]) -> bool {
        match formula {
            BoolFormula::Atom(id) => assignment[storage.lookup(*id).expect("registered atom").index() as usize],
            BoolFormula::Not(inner) => !eval_formula(inner, storage, assignment),
            BoolFormula::And(left, right) => {
                eval_formula(left, storage, assignment) && eval_formula(right, storage, assignment)
            }
            BoolFormula::Or(left, right) => {
                eval_formula(left, storage, assignment) || eval_formula(right, storage, assignment)
            }
        }
    }

    fn eval_dnf(dnf: &Dnf, storage: &OperatorStorage, assignment: &[bool]) -> bool {
        dnf.clauses.iter().any(|clause| {
            clause.iter().all(|literal| {
                let value = assignment[storage.lookup(literal.atom).expect("registered atom").index() as usize];
                value != literal.negated
            })
        })
    }

    proptest! {
        #[test]
        fn dnf_agrees_with_the_source_formula_on_every_assignment(
            (formula, assignment) in {
                let (_, atoms) = atom_pool();
                (formula_strategy(&atoms), prop::collection::vec(any::<bool>(), ATOM_COUNT))
            },
        ) {
            let (storage, _) = atom_pool();
            let dnf = to_dnf(&formula);
            prop_assert_eq!(
                eval_formula(&formula, &storage, &assignment),
                eval_dnf(&dnf, &storage, &assignment)
            );
        }
    }
}
