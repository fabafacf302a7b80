//! Rewrites a sentence to an equivalent sentence in conjunctive normal form.
//!
//! # Overview
//!
//! [normalize] rewrites a sentence bottom-up, normalizing the parts of a sentence before the sentence itself, and the rewrite applied to a sentence depends only on the connective of the sentence:
//!
//! - An equivalence `A ⇔ B` is eliminated in favour of `(A ⇒ B) ∧ (B ⇒ A)`.
//! - An implication `A ⇒ B` is eliminated in favour of `¬A ∨ B`.
//! - A negation is pushed inward, with:
//!   + `¬¬A` rewritten to `A`.
//!   + `¬(A ∨ B ∨ …)` rewritten to `¬A ∧ ¬B ∧ …`, and `¬(A ∧ B ∧ …)` rewritten to `¬A ∨ ¬B ∨ …` (De Morgan).
//!   + `¬(A ⇒ B)` rewritten to `A ∧ ¬B`, and `¬(A ⇔ B)` rewritten to `(A ∧ ¬B) ∨ (B ∧ ¬A)`.
//!   + `¬⊤` rewritten to `⊥`, and `¬⊥` to `⊤`.
//! - A conjunction absorbs the operands of any nested conjunction and drops ⊤ operands.
//!   If some operand is ⊥ the conjunction is ⊥, and if no operands remain the conjunction is ⊤.
//! - A disjunction absorbs the operands of any nested disjunction and drops ⊥ operands.
//!   If some operand is ⊤, or some literal appears with its negation, the disjunction is ⊤.
//!   If no operands remain the disjunction is ⊥.
//!   Otherwise, if some operand is a conjunction `c₁ ∧ C` the disjunction `(c₁ ∧ C) ∨ O` is distributed to `(c₁ ∨ O) ∧ (C ∨ O)`.
//! - A conjunction or disjunction with a single operand is that operand.
//!
//! The result is equivalent to the original sentence, and is one of:
//! - ⊤ or ⊥.
//! - A literal.
//! - A disjunction of (at least two) literals.
//! - A conjunction of (at least two) literals or disjunctions of literals.
//!
//! Each of these is in conjunctive normal form, as checked by [is_cnf].
//! Further, normalization is idempotent, as each of the forms above is rewritten to itself.
//!
//! # Example
//!
//! ```rust
//! # use otter_entail::procedures::normalize::{is_cnf, normalize};
//! # use otter_entail::structures::sentence::Sentence;
//! let [a, b, c] = ["A", "B", "C"].map(Sentence::symbol);
//!
//! let sentence = Sentence::disjunction([Sentence::conjunction([a.clone(), b.clone()]), c.clone()]);
//! let normal = normalize(&sentence);
//!
//! assert_eq!(normal.to_string(), "((A ∨ C) ∧ (B ∨ C))");
//! assert!(is_cnf(&normal));
//! assert_eq!(normalize(&normal), normal);
//!
//! let excluded_middle = Sentence::disjunction([a.clone(), Sentence::negation(a)]);
//! assert_eq!(normalize(&excluded_middle), Sentence::truth(true));
//! ```

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    structures::sentence::Sentence,
    types::err::{self},
};

/// A sentence in conjunctive normal form equivalent to the given sentence.
pub fn normalize(sentence: &Sentence) -> Sentence {
    let normal = rewrite(sentence);
    log::trace!(target: targets::NORMALIZATION, "{sentence} normalized to {normal}");
    normal
}

/// The normal form of a sentence, checked to be in conjunctive normal form.
///
/// An error is returned only if the rewrites made during normalization are inconsistent with conjunctive normal form.
pub fn to_cnf(sentence: &Sentence) -> Result<Sentence, err::NormalizationError> {
    let normal = normalize(sentence);
    match is_cnf(&normal) {
        true => Ok(normal),
        false => {
            log::error!(target: targets::NORMALIZATION, "Normalization did not reach CNF: {normal}");
            Err(err::NormalizationError::NotCNF)
        }
    }
}

/// Whether a sentence is in (the exact) conjunctive normal form produced by [normalize].
///
/// That is, whether the sentence is:
/// - A truth value.
/// - A clause, i.e. a literal or a disjunction of at least two literals.
/// - A conjunction of at least two clauses.
pub fn is_cnf(sentence: &Sentence) -> bool {
    match sentence {
        Sentence::TruthValue(_) => true,
        Sentence::Conjunction(operands) => {
            operands.len() > 1 && operands.iter().all(is_normal_clause)
        }
        other => is_normal_clause(other),
    }
}

fn is_normal_clause(sentence: &Sentence) -> bool {
    match sentence {
        Sentence::Disjunction(operands) => {
            operands.len() > 1 && operands.iter().all(Sentence::is_literal)
        }
        other => other.is_literal(),
    }
}

fn rewrite(sentence: &Sentence) -> Sentence {
    match sentence {
        Sentence::TruthValue(_) | Sentence::Symbol(_) => sentence.clone(),

        Sentence::Negation(inner) => rewrite_negation(inner),

        Sentence::Conjunction(operands) => conjoin(operands.iter().map(rewrite)),

        Sentence::Disjunction(operands) => disjoin(operands.iter().map(rewrite)),

        Sentence::Implication(antecedent, consequent) => disjoin([
            rewrite_negation(antecedent),
            rewrite(consequent),
        ]),

        Sentence::Equivalence(left, right) => conjoin([
            disjoin([rewrite_negation(left), rewrite(right)]),
            disjoin([rewrite_negation(right), rewrite(left)]),
        ]),
    }
}

/// The normal form of the negation of `inner`.
fn rewrite_negation(inner: &Sentence) -> Sentence {
    match inner {
        Sentence::TruthValue(value) => Sentence::truth(!value),

        Sentence::Symbol(_) => Sentence::negation(inner.clone()),

        Sentence::Negation(double) => rewrite(double),

        Sentence::Disjunction(operands) => conjoin(operands.iter().map(rewrite_negation)),

        Sentence::Conjunction(operands) => disjoin(operands.iter().map(rewrite_negation)),

        Sentence::Implication(antecedent, consequent) => {
            conjoin([rewrite(antecedent), rewrite_negation(consequent)])
        }

        Sentence::Equivalence(left, right) => disjoin([
            conjoin([rewrite(left), rewrite_negation(right)]),
            conjoin([rewrite(right), rewrite_negation(left)]),
        ]),
    }
}

/// The normal form of the conjunction of some sentences in normal form.
fn conjoin(operands: impl IntoIterator<Item = Sentence>) -> Sentence {
    let mut clauses = BTreeSet::default();

    for operand in operands {
        match operand {
            Sentence::TruthValue(true) => {}
            Sentence::TruthValue(false) => return Sentence::truth(false),
            Sentence::Conjunction(nested) => clauses.extend(nested),
            clause => {
                clauses.insert(clause);
            }
        }
    }

    match clauses.len() {
        0 => Sentence::truth(true),
        1 => clauses.pop_first().unwrap_or(Sentence::truth(true)),
        _ => Sentence::conjunction(clauses),
    }
}

/// The normal form of the disjunction of some sentences in normal form.
fn disjoin(operands: impl IntoIterator<Item = Sentence>) -> Sentence {
    let mut literals = BTreeSet::default();
    let mut conjunctions = Vec::default();

    for operand in operands {
        match operand {
            Sentence::TruthValue(true) => return Sentence::truth(true),
            Sentence::TruthValue(false) => {}
            Sentence::Disjunction(nested) => literals.extend(nested),
            Sentence::Conjunction(nested) => conjunctions.push(nested),
            literal => {
                literals.insert(literal);
            }
        }
    }

    let tautology = literals.iter().any(|literal| match literal {
        Sentence::Negation(symbol) => literals.contains(symbol.as_ref()),
        _ => false,
    });
    if tautology {
        return Sentence::truth(true);
    }

    match conjunctions.pop() {
        None => match literals.len() {
            0 => Sentence::truth(false),
            1 => literals.pop_first().unwrap_or(Sentence::truth(false)),
            _ => Sentence::disjunction(literals),
        },

        Some(conjunction) => {
            // Distribute over the conjunction, leaving any further conjunctions among the other operands.
            let others = literals
                .into_iter()
                .chain(conjunctions.into_iter().map(Sentence::Conjunction))
                .collect::<Vec<_>>();

            let mut clauses = conjunction.into_iter();
            let Some(first) = clauses.next() else {
                return disjoin(others);
            };
            let rest = conjoin(clauses);

            conjoin([
                disjoin(std::iter::once(first).chain(others.iter().cloned())),
                disjoin(std::iter::once(rest).chain(others)),
            ])
        }
    }
}
