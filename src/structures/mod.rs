//! Key structures, such as sentences, literals, and clauses.
//!
//! # Sentences
//!
//! A [sentence](sentence) is any expression of propositional logic built from truth values and [symbols](sentence::Symbol) with the connectives ¬, ∧, ∨, ⇒, and ⇔.
//! Sentences are the external representation of everything stored in a [knowledge base](crate::knowledge_base), and the input and output of [normalization](crate::procedures::normalize).
//!
//! # Literals and clauses
//!
//! A [literal] is a symbol paired with a (boolean) polarity, and a [clause] is a set of literals, interpreted as the disjunction of those literals.
//! Literals and clauses are the internal representation of a sentence in conjunctive normal form, and are the objects over which [resolution](crate::procedures::resolution) operates.
//!
//! A sentence is in conjunctive normal form when it is a conjunction of clauses, and so literals and clauses each have a (canonical) representation as a sentence.
//!
//! # Valuations
//!
//! A [valuation] is a (partial) function from symbols to truth values, on which a sentence may be evaluated.

pub mod clause;
pub mod literal;
pub mod sentence;
pub mod valuation;
