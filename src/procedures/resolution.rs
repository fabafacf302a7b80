//! Resolution of clauses, and saturation of a set of clauses under resolution.
//!
//! # Resolution
//!
//! Two clauses *C* and *D* may be resolved on a literal *l* of *C* whenever the negation of *l* is a literal of *D*, and the result (the resolvent) is the union of *C* without *l* and *D* without ¬*l*.
//! [resolve] returns the resolvent for each literal of the first clause which may be resolved on, excluding tautologies.
//!
//! ```rust
//! # use otter_entail::procedures::resolution::resolve;
//! # use otter_entail::structures::{clause::Clause, literal::Literal, sentence::Symbol};
//! let p = Literal::new(Symbol::from("p"), true);
//! let q = Literal::new(Symbol::from("q"), true);
//! let r = Literal::new(Symbol::from("r"), true);
//!
//! let p_or_q = Clause::from_iter([p.clone(), q.clone()]);
//! let not_p_or_r = Clause::from_iter([p.negate(), r.clone()]);
//! assert_eq!(resolve(&p_or_q, &not_p_or_r), vec![Clause::from_iter([q, r])]);
//!
//! // Resolution of complementary units is the empty clause.
//! let resolvents = resolve(&Clause::from_iter([p.clone()]), &Clause::from_iter([p.negate()]));
//! assert!(resolvents.len() == 1 && resolvents[0].is_empty());
//! ```
//!
//! # Saturation
//!
//! [saturate] determines whether a set of clauses is satisfiable through level saturation.
//! Clauses are partitioned between those *settled* and those on the *frontier*, and initially every clause is on the frontier.
//!
//! Each round:
//! - Every settled clause is resolved with every frontier clause.
//! - Every (unordered) pair of distinct frontier clauses is resolved.
//! - If the empty clause is a resolvent, the clauses are unsatisfiable.
//! - Otherwise, the frontier is settled, and the resolvents which are not settled become the frontier.
//! - If the frontier is empty, the clauses are satisfiable.
//!
//! Only finitely many clauses may be built from the symbols of the given clauses, and so the frontier eventually empties (if the empty clause is never found).
//!
//! ```rust
//! # use otter_entail::config::Config;
//! # use otter_entail::knowledge_base::Counters;
//! # use otter_entail::procedures::resolution::saturate;
//! # use otter_entail::reports::Report;
//! # use otter_entail::structures::{clause::Clause, literal::Literal, sentence::Symbol};
//! let p = Literal::new(Symbol::from("p"), true);
//! let q = Literal::new(Symbol::from("q"), true);
//!
//! let clauses = vec![
//!     Clause::from_iter([p.clone(), q.clone()]),
//!     Clause::from_iter([p.negate(), q.clone()]),
//!     Clause::from_iter([p.clone(), q.negate()]),
//! ];
//!
//! let mut counters = Counters::default();
//! assert_eq!(saturate(clauses.clone(), &Config::default(), &mut counters), Report::Satisfiable);
//!
//! let mut unsatisfiable = clauses;
//! unsatisfiable.push(Clause::from_iter([p.negate(), q.negate()]));
//! assert_eq!(saturate(unsatisfiable, &Config::default(), &mut counters), Report::Unsatisfiable);
//! ```

use std::collections::BTreeSet;

use crate::{
    config::Config,
    knowledge_base::Counters,
    misc::log::targets::{self},
    reports::Report,
    structures::clause::Clause,
};

/// Every non-tautological resolvent of the clauses, resolving on literals of the first clause.
///
/// A pair of clauses with more than one complementary pair of literals has a resolvent for each pair.
pub fn resolve(first: &Clause, second: &Clause) -> Vec<Clause> {
    let mut resolvents = Vec::default();

    for literal in first {
        let complement = literal.negate();
        if !second.contains(&complement) {
            continue;
        }

        let resolvent = first
            .literals()
            .filter(|l| *l != literal)
            .chain(second.literals().filter(|l| **l != complement))
            .cloned()
            .collect::<Clause>();

        if resolvent.is_tautology() {
            log::trace!(target: targets::RESOLUTION, "{first} and {second} on {literal}: tautology");
            continue;
        }

        log::trace!(target: targets::RESOLUTION, "{first} and {second} on {literal}: {resolvent}");
        resolvents.push(resolvent);
    }

    resolvents
}

/// Saturates the clauses under resolution, stopping early on the empty clause or a configured limit.
///
/// The counters are updated with details of the saturation.
pub fn saturate(
    clauses: impl IntoIterator<Item = Clause>,
    config: &Config,
    counters: &mut Counters,
) -> Report {
    let start = std::time::Instant::now();

    let report = saturation_loop(clauses, config, counters, start);

    counters.time = start.elapsed();
    log::info!(target: targets::SATURATION, "{report} after {} rounds", counters.rounds);
    report
}

fn saturation_loop(
    clauses: impl IntoIterator<Item = Clause>,
    config: &Config,
    counters: &mut Counters,
    start: std::time::Instant,
) -> Report {
    let mut settled: BTreeSet<Clause> = BTreeSet::default();
    let mut frontier = clauses
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();

    if frontier.iter().any(Clause::is_empty) {
        log::info!(target: targets::SATURATION, "The empty clause is given");
        return Report::Unsatisfiable;
    }

    loop {
        if config.round_limit().is_some_and(|limit| counters.rounds >= limit) {
            return Report::RoundLimit;
        }
        if config.time_limit().is_some_and(|limit| start.elapsed() > limit) {
            return Report::TimeUp;
        }

        counters.rounds += 1;
        log::info!(target: targets::SATURATION,
            "Round {}: {} settled and {} frontier clauses", counters.rounds, settled.len(), frontier.len()
        );

        let mut candidates = BTreeSet::default();

        for settled_clause in &settled {
            for frontier_clause in &frontier {
                let resolvents = resolve(settled_clause, frontier_clause);
                if note_resolvents(resolvents, &mut candidates, counters) {
                    return Report::Unsatisfiable;
                }
            }
        }

        for (index, frontier_clause) in frontier.iter().enumerate() {
            for other_clause in &frontier[index + 1..] {
                let resolvents = resolve(frontier_clause, other_clause);
                if note_resolvents(resolvents, &mut candidates, counters) {
                    return Report::Unsatisfiable;
                }
            }
        }

        settled.extend(frontier);
        counters.settled = settled.len();

        frontier = candidates
            .into_iter()
            .filter(|candidate| !settled.contains(candidate))
            .collect();

        log::debug!(target: targets::SATURATION, "{} fresh clauses", frontier.len());

        if frontier.is_empty() {
            return Report::Satisfiable;
        }
    }
}

/// Records an attempt at resolution, and returns whether the empty clause was among the resolvents.
fn note_resolvents(
    resolvents: Vec<Clause>,
    candidates: &mut BTreeSet<Clause>,
    counters: &mut Counters,
) -> bool {
    counters.resolutions += 1;
    counters.resolvents += resolvents.len();

    let mut empty = false;
    for resolvent in resolvents {
        empty |= resolvent.is_empty();
        candidates.insert(resolvent);
    }
    empty
}
