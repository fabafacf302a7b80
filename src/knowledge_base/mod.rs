/*!
The knowledge base --- to which sentences are asserted and against which queries are made.

A knowledge base stores a set of asserted sentences, interpreted as the conjunction of those sentences.
Sentences are stored as given, and are only normalized on request or as part of a query.

A query asks whether the knowledge base entails some goal, and is answered by [refutation](KnowledgeBase::derive):
the negation of the goal is conjoined with the knowledge base, and the goal is entailed exactly when the conjunction is unsatisfiable.

# Example
```rust
# use otter_entail::knowledge_base::{KnowledgeBase, SentenceOk};
# use otter_entail::structures::sentence::Sentence;
let mut kb = KnowledgeBase::default();

let [p, q, r] = ["p", "q", "r"].map(Sentence::symbol);

assert_eq!(kb.add(Sentence::implication(p.clone(), q.clone())), SentenceOk::Added);
assert_eq!(kb.add(Sentence::implication(q.clone(), r.clone())), SentenceOk::Added);
assert_eq!(kb.add(Sentence::implication(q.clone(), r.clone())), SentenceOk::Duplicate);

assert_eq!(kb.derive(&Sentence::implication(p.clone(), r.clone())), Ok(true));
assert_eq!(kb.derive(&Sentence::implication(r.clone(), p.clone())), Ok(false));

kb.normalize();
assert_eq!(kb.to_string(), "((q ∨ ¬p) ∧ (r ∨ ¬q))");
assert_eq!(kb.derive(&Sentence::implication(p, r)), Ok(true));
```

# Concurrency

A knowledge base is not synchronised, and a query borrows the knowledge base mutably to record [counters](Counters).
To query from multiple threads, clone the knowledge base.
*/

mod counters;
pub use counters::Counters;

use std::collections::BTreeSet;

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::{
        normalize::{self},
        resolution::{self},
    },
    reports::Report,
    structures::{clause::clauses_of, sentence::Sentence},
    types::err::{self},
};

/// The result of asserting a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentenceOk {
    /// The sentence was added.
    Added,

    /// The sentence was already asserted, and so nothing changed.
    Duplicate,
}

/// A set of asserted sentences, with configuration for queries.
#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    /// The asserted sentences.
    sentences: BTreeSet<Sentence>,

    /// The configuration used for queries.
    pub config: Config,

    /// Counters from the most recent query.
    pub counters: Counters,
}

impl KnowledgeBase {
    pub fn from_config(config: Config) -> Self {
        KnowledgeBase {
            sentences: BTreeSet::default(),
            config,
            counters: Counters::default(),
        }
    }

    /// Asserts a sentence.
    ///
    /// No normalization takes place, and asserting a sentence equal to some asserted sentence has no effect.
    pub fn add(&mut self, sentence: Sentence) -> SentenceOk {
        log::debug!(target: targets::KNOWLEDGE_BASE, "Asserting {sentence}");
        match self.sentences.insert(sentence) {
            true => SentenceOk::Added,
            false => SentenceOk::Duplicate,
        }
    }

    /// Replaces the asserted sentences with the clauses of their normal form.
    ///
    /// The knowledge base is unchanged up to equivalence, and normalizing a normalized knowledge base has no effect.
    pub fn normalize(&mut self) {
        let normal = normalize::normalize(&self.as_sentence());
        log::debug!(target: targets::KNOWLEDGE_BASE, "Normalized to {normal}");

        self.sentences = match normal {
            Sentence::TruthValue(true) => BTreeSet::default(),
            Sentence::Conjunction(clauses) => clauses.into_iter().collect(),
            other => BTreeSet::from([other]),
        };
    }

    /// Whether the knowledge base entails the goal.
    ///
    /// The knowledge base does not need to be normalized before a query, and is not changed by a query (excluding the counters).
    ///
    /// Errors:
    /// - A [normalization](err::NormalizationError) error, if normalization failed to produce a sentence in conjunctive normal form.
    ///   This is a defect in the library.
    /// - A [resolution](err::ResolutionError) error, if some configured limit was reached before an answer was found.
    pub fn derive(&mut self, goal: &Sentence) -> Result<bool, err::ErrorKind> {
        log::info!(target: targets::KNOWLEDGE_BASE, "Deriving {goal}");
        self.counters = Counters::default();

        let refutation = Sentence::conjunction(
            std::iter::once(Sentence::negation(goal.clone())).chain(self.sentences.iter().cloned()),
        );

        let cnf = normalize::to_cnf(&refutation)?;
        let clauses = clauses_of(&cnf)?;
        log::debug!(target: targets::KNOWLEDGE_BASE, "{} clauses from {cnf}", clauses.len());

        match resolution::saturate(clauses, &self.config, &mut self.counters) {
            Report::Unsatisfiable => Ok(true),
            Report::Satisfiable => Ok(false),
            Report::RoundLimit => Err(err::ResolutionError::RoundLimit.into()),
            Report::TimeUp => Err(err::ResolutionError::TimeUp.into()),
        }
    }

    /// An iterator over the asserted sentences, in canonical order.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.iter()
    }

    /// A count of the asserted sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// The conjunction of the asserted sentences.
    pub fn as_sentence(&self) -> Sentence {
        Sentence::conjunction(self.sentences.iter().cloned())
    }
}

impl std::fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_sentence())
    }
}
