//! Rendering of sentences.
//!
//! Conjunctions and disjunctions of two or more operands are written as a parenthesised list in canonical order, e.g. `(a ∧ b ∧ c)`.
//! Degenerate conjunctions and disjunctions keep their connective, so `(∧)` is the empty conjunction and `(∨ a)` the disjunction of `a` alone.

use super::{Operands, Sentence, Symbol};

fn write_operands(
    f: &mut std::fmt::Formatter,
    operands: &Operands,
    connective: &str,
) -> std::fmt::Result {
    match operands.len() {
        0 => write!(f, "({connective})"),
        1 => {
            write!(f, "({connective} ")?;
            for operand in operands {
                write!(f, "{operand}")?;
            }
            write!(f, ")")
        }
        _ => {
            write!(f, "(")?;
            for (index, operand) in operands.iter().enumerate() {
                if index > 0 {
                    write!(f, " {connective} ")?;
                }
                write!(f, "{operand}")?;
            }
            write!(f, ")")
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Sentence::TruthValue(true) => write!(f, "⊤"),
            Sentence::TruthValue(false) => write!(f, "⊥"),
            Sentence::Symbol(symbol) => write!(f, "{symbol}"),
            Sentence::Negation(inner) => write!(f, "¬{inner}"),
            Sentence::Conjunction(operands) => write_operands(f, operands, "∧"),
            Sentence::Disjunction(operands) => write_operands(f, operands, "∨"),
            Sentence::Implication(antecedent, consequent) => {
                write!(f, "({antecedent} ⇒ {consequent})")
            }
            Sentence::Equivalence(left, right) => write!(f, "({left} ⇔ {right})"),
        }
    }
}
