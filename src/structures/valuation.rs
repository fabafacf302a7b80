/*!
A (partial) function from symbols to truth values.

If all symbols of interest are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The valuation trait is implemented for maps from symbols to booleans, and a sentence may be evaluated on any valuation.

```rust
# use std::collections::HashMap;
# use otter_entail::structures::sentence::{Sentence, Symbol};
let valuation = HashMap::from([(Symbol::from("p"), true), (Symbol::from("q"), false)]);

let p_implies_q = Sentence::implication(Sentence::symbol("p"), Sentence::symbol("q"));
assert_eq!(p_implies_q.evaluate(&valuation), Some(false));

// r has no value, though the value of the disjunction is settled by p.
let p_or_r = Sentence::disjunction([Sentence::symbol("p"), Sentence::symbol("r")]);
assert_eq!(p_or_r.evaluate(&valuation), Some(true));

let q_or_r = Sentence::disjunction([Sentence::symbol("q"), Sentence::symbol("r")]);
assert_eq!(q_or_r.evaluate(&valuation), None);
```
*/

use std::collections::{BTreeMap, HashMap};

use crate::{
    structures::sentence::{Sentence, Symbol},
    types::err::{self},
};

/// The canonical representation of a valuation.
pub type CValuation = BTreeMap<Symbol, bool>;

/// A valuation is something which stores some value of a symbol and/or perhaps the information that the symbol has no value.
pub trait Valuation {
    /// Some value of a symbol under the valuation, or otherwise nothing.
    fn value_of(&self, symbol: &Symbol) -> Option<bool>;
}

impl Valuation for HashMap<Symbol, bool> {
    fn value_of(&self, symbol: &Symbol) -> Option<bool> {
        self.get(symbol).copied()
    }
}

impl Valuation for BTreeMap<Symbol, bool> {
    fn value_of(&self, symbol: &Symbol) -> Option<bool> {
        self.get(symbol).copied()
    }
}

impl Sentence {
    /// The value of the sentence on a valuation under the classical (two-valued) semantics.
    ///
    /// Returns nothing if the value depends on a symbol without a value.
    pub fn evaluate(&self, valuation: &impl Valuation) -> Option<bool> {
        match self {
            Sentence::TruthValue(value) => Some(*value),

            Sentence::Symbol(symbol) => valuation.value_of(symbol),

            Sentence::Negation(inner) => inner.evaluate(valuation).map(|value| !value),

            Sentence::Conjunction(operands) => {
                let mut settled = true;
                for operand in operands {
                    match operand.evaluate(valuation) {
                        Some(false) => return Some(false),
                        Some(true) => {}
                        None => settled = false,
                    }
                }
                settled.then_some(true)
            }

            Sentence::Disjunction(operands) => {
                let mut settled = true;
                for operand in operands {
                    match operand.evaluate(valuation) {
                        Some(true) => return Some(true),
                        Some(false) => {}
                        None => settled = false,
                    }
                }
                settled.then_some(false)
            }

            Sentence::Implication(antecedent, consequent) => {
                match (antecedent.evaluate(valuation), consequent.evaluate(valuation)) {
                    (Some(false), _) | (_, Some(true)) => Some(true),
                    (Some(true), Some(false)) => Some(false),
                    _ => None,
                }
            }

            Sentence::Equivalence(left, right) => {
                match (left.evaluate(valuation), right.evaluate(valuation)) {
                    (Some(l), Some(r)) => Some(l == r),
                    _ => None,
                }
            }
        }
    }
}

/// An iterator over every full valuation of some symbols.
///
/// For *n* symbols there are 2^*n* valuations, and these are returned in binary counting order with the first symbol as the least significant bit.
pub struct Valuations {
    symbols: Vec<Symbol>,
    next: Option<u64>,
}

impl Valuations {
    /// The most symbols whose valuations may be enumerated.
    pub const SYMBOL_LIMIT: usize = 63;

    /// An enumeration of the valuations of the symbols, or an error if there are more than [SYMBOL_LIMIT](Valuations::SYMBOL_LIMIT) symbols.
    pub fn of(symbols: impl IntoIterator<Item = Symbol>) -> Result<Self, err::ValuationError> {
        let symbols = symbols.into_iter().collect::<Vec<_>>();
        if symbols.len() > Self::SYMBOL_LIMIT {
            return Err(err::ValuationError::TooManySymbols(symbols.len()));
        }
        Ok(Valuations {
            symbols,
            next: Some(0),
        })
    }
}

impl Iterator for Valuations {
    type Item = CValuation;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        if index >> self.symbols.len() != 0 {
            self.next = None;
            return None;
        }
        self.next = index.checked_add(1);

        let valuation = self
            .symbols
            .iter()
            .enumerate()
            .map(|(bit, symbol)| (symbol.clone(), index & (1 << bit) != 0))
            .collect();
        Some(valuation)
    }
}
