//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as an ordered set of literals.
//!
//! ```rust
//! # use otter_entail::structures::clause::Clause;
//! # use otter_entail::structures::literal::Literal;
//! # use otter_entail::structures::sentence::{Sentence, Symbol};
//! let p = Literal::new(Symbol::from("p"), true);
//! let q = Literal::new(Symbol::from("q"), false);
//!
//! let clause = Clause::from_iter([p.clone(), q.clone(), p.clone()]);
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.as_sentence().to_string(), "(p ∨ ¬q)");
//!
//! assert_eq!(Clause::from_iter([q]).as_sentence().to_string(), "¬q");
//! assert_eq!(Clause::default().as_sentence(), Sentence::truth(false));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use std::collections::{btree_set, BTreeSet};

use crate::{
    structures::{literal::Literal, sentence::Sentence},
    types::err::{self},
};

/// A set of literals, interpreted as the disjunction of those literals.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause(BTreeSet<Literal>);

impl Clause {
    /// An iterator over all literals in the clause, in canonical order.
    pub fn literals(&self) -> btree_set::Iter<'_, Literal> {
        self.0.iter()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Whether the clause is empty, and so a contradiction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.0.contains(literal)
    }

    /// Whether the clause contains some literal together with its negation.
    pub fn is_tautology(&self) -> bool {
        // The negative literal of a symbol precedes the positive literal, so a complementary pair is adjacent.
        self.0
            .iter()
            .zip(self.0.iter().skip(1))
            .any(|(a, b)| a.symbol() == b.symbol() && a.polarity() != b.polarity())
    }

    /// The clause as a sentence:
    /// - ⊥, if the clause is empty.
    /// - The literal, if the clause is a unit.
    /// - The disjunction of the literals, otherwise.
    pub fn as_sentence(&self) -> Sentence {
        match self.0.first() {
            None => Sentence::truth(false),
            Some(literal) if self.0.len() == 1 => Sentence::from(literal.clone()),
            Some(_) => Sentence::disjunction(self.0.iter().map(|l| Sentence::from(l.clone()))),
        }
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;
    type IntoIter = btree_set::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_sentence())
    }
}

impl TryFrom<&Sentence> for Clause {
    type Error = err::NormalizationError;

    /// A clause from a literal, a disjunction of literals, or ⊥.
    fn try_from(sentence: &Sentence) -> Result<Self, Self::Error> {
        match sentence {
            Sentence::TruthValue(false) => Ok(Clause::default()),
            Sentence::Disjunction(operands) => operands.iter().map(Literal::try_from).collect(),
            other => Ok(Clause::from_iter([Literal::try_from(other)?])),
        }
    }
}

/// The clauses of a sentence in conjunctive normal form.
///
/// - ⊤ has no clauses.
/// - ⊥ is the empty clause.
/// - A conjunction has a clause for each operand.
/// - Any other clause is its own (only) clause.
pub fn clauses_of(sentence: &Sentence) -> Result<Vec<Clause>, err::NormalizationError> {
    match sentence {
        Sentence::TruthValue(true) => Ok(Vec::default()),
        Sentence::Conjunction(operands) => operands.iter().map(Clause::try_from).collect(),
        other => Ok(vec![Clause::try_from(other)?]),
    }
}
