//! A library for deciding whether a propositional knowledge base entails a sentence.
//!
//! otter_entail represents sentences of propositional logic as an expression algebra, normalizes them to conjunctive normal form, and answers entailment queries by resolution refutation.
//!
//! # Orientation
//!
//! The library is designed around the [knowledge base](crate::knowledge_base).
//!
//! Sentences are asserted to a knowledge base with [add](crate::knowledge_base::KnowledgeBase::add), and queries are made with [derive](crate::knowledge_base::KnowledgeBase::derive).
//! A query for some goal 𝐆 proceeds by:
//! - Conjoining the negation of 𝐆 with every asserted sentence.
//! - [Normalizing](crate::procedures::normalize) the conjunction to conjunctive normal form.
//! - [Saturating](crate::procedures::resolution::saturate) the clauses of the normal form under resolution.
//!
//! If saturation derives the empty clause the negation of 𝐆 is inconsistent with the knowledge base, and so 𝐆 is entailed.
//! Otherwise, saturation reaches a fixpoint without the empty clause and 𝐆 is not entailed.
//!
//! Useful starting points, then, may be:
//! - The [structures] to familiarise yourself with sentences, literals, and clauses.
//! - The [normalizer](crate::procedures::normalize) to see how an arbitrary sentence is rewritten.
//! - The [saturation procedure](crate::procedures::resolution) to inspect the dynamics of a query.
//! - The [configuration](crate::config) to see which limits may be placed on a query.
//!
//! # Examples
//!
//! ```rust
//! # use otter_entail::knowledge_base::KnowledgeBase;
//! # use otter_entail::structures::sentence::Sentence;
//! let mut kb = KnowledgeBase::default();
//!
//! let breeze = Sentence::symbol("L11");
//! let pit_east = Sentence::symbol("F21");
//! let pit_north = Sentence::symbol("F12");
//!
//! kb.add(Sentence::negation(Sentence::symbol("F11")));
//! kb.add(Sentence::equivalence(
//!     breeze.clone(),
//!     Sentence::disjunction([pit_east.clone(), pit_north]),
//! ));
//! kb.add(Sentence::negation(breeze));
//!
//! assert_eq!(kb.derive(&Sentence::negation(pit_east.clone())), Ok(true));
//! assert_eq!(kb.derive(&pit_east), Ok(false));
//! ```
//!
//! Sentences may also be read from text.
//!
//! ```rust
//! # use otter_entail::knowledge_base::KnowledgeBase;
//! # use otter_entail::structures::sentence::Sentence;
//! let mut kb = KnowledgeBase::default();
//! kb.add("p => q".parse::<Sentence>().unwrap());
//! kb.add("p".parse::<Sentence>().unwrap());
//!
//! assert_eq!(kb.derive(&"q".parse().unwrap()), Ok(true));
//! ```
//!
//! # Logs
//!
//! Progress of normalization and saturation is narrated through calls to [log!](log), with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Round-by-round clause counts of a saturation can be found with `RUST_LOG=saturation=info …`
//! - Every resolvent produced can be found with `RUST_LOG=resolution=trace …`

#![allow(mixed_script_confusables)]
#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod knowledge_base;
pub mod structures;
pub mod types;

pub mod misc;
pub mod reports;
