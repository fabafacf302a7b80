//! Entailment and equivalence by enumeration of valuations (aka. truth tables).
//!
//! A set of premises entails a goal if and only if the goal is true on every valuation on which each premise is true.
//! Every full valuation of the symbols in the premises and goal is examined, and so the procedures here take time exponential in the count of symbols.
//! Still, for small sets of symbols the procedures are an independent check on [resolution](crate::procedures::resolution).
//!
//! ```rust
//! # use otter_entail::procedures::model_check::{entails, equivalent};
//! # use otter_entail::structures::sentence::Sentence;
//! let [p, q] = ["p", "q"].map(Sentence::symbol);
//! let p_implies_q = Sentence::implication(p.clone(), q.clone());
//!
//! assert_eq!(entails([&p_implies_q, &p], &q), Ok(true));
//! assert_eq!(entails([&p_implies_q], &q), Ok(false));
//!
//! let contrapositive = Sentence::implication(Sentence::negation(q), Sentence::negation(p));
//! assert_eq!(equivalent(&p_implies_q, &contrapositive), Ok(true));
//! ```
//!
//! Valuations of more than [SYMBOL_LIMIT](Valuations::SYMBOL_LIMIT) symbols are never enumerated, and an error is returned instead.
//!
//! ```rust
//! # use otter_entail::procedures::model_check::satisfiable;
//! # use otter_entail::structures::sentence::Sentence;
//! let wide = Sentence::conjunction((0..100).map(|i| Sentence::symbol(format!("s{i}"))));
//! assert!(satisfiable(&wide).is_err());
//! ```

use std::collections::BTreeSet;

use crate::{
    structures::{
        sentence::{Sentence, Symbol},
        valuation::Valuations,
    },
    types::err::{self},
};

/// Whether the premises entail the goal.
pub fn entails<'a>(
    premises: impl IntoIterator<Item = &'a Sentence>,
    goal: &Sentence,
) -> Result<bool, err::ValuationError> {
    let premises = premises.into_iter().collect::<Vec<_>>();

    let mut symbols: BTreeSet<Symbol> = goal.symbols().into_iter().cloned().collect();
    for premise in &premises {
        symbols.extend(premise.symbols().into_iter().cloned());
    }

    Ok(Valuations::of(symbols)?.all(|valuation| {
        let premises_hold = premises
            .iter()
            .all(|premise| premise.evaluate(&valuation) == Some(true));
        !premises_hold || goal.evaluate(&valuation) == Some(true)
    }))
}

/// Whether some valuation makes the sentence true.
pub fn satisfiable(sentence: &Sentence) -> Result<bool, err::ValuationError> {
    let symbols = sentence.symbols().into_iter().cloned().collect::<Vec<_>>();
    Ok(Valuations::of(symbols)?.any(|valuation| sentence.evaluate(&valuation) == Some(true)))
}

/// Whether the sentences have the same value on every valuation.
pub fn equivalent(left: &Sentence, right: &Sentence) -> Result<bool, err::ValuationError> {
    let mut symbols: BTreeSet<Symbol> = left.symbols().into_iter().cloned().collect();
    symbols.extend(right.symbols().into_iter().cloned());

    Ok(Valuations::of(symbols)?
        .all(|valuation| left.evaluate(&valuation) == right.evaluate(&valuation)))
}
