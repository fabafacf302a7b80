/*!
Sentences of propositional logic.

A sentence is one of:
- A truth value, ⊤ or ⊥.
- A [symbol](Symbol), an atomic proposition identified by name.
- The negation of some sentence.
- The conjunction or disjunction of some set of sentences.
- The implication or equivalence of some (ordered) pair of sentences.

Sentences are immutable values built bottom-up through the constructors on [Sentence].
Constructors always succeed, and the only work done at construction is to gather the [operands](Operands) of a conjunction or disjunction:
- Operands of the same connective are absorbed, so `(a ∧ (b ∧ c))` is built as `(a ∧ b ∧ c)`.
- Duplicate operands collapse.
- Operands are stored in the canonical order.

```rust
# use otter_entail::structures::sentence::Sentence;
let a = Sentence::symbol("a");
let b = Sentence::symbol("b");

let left = Sentence::conjunction([a.clone(), Sentence::conjunction([b.clone(), a.clone()])]);
let right = Sentence::conjunction([b.clone(), a.clone()]);

assert_eq!(left, right);
assert_eq!(left.to_string(), "(a ∧ b)");

// Order matters for an implication.
assert_ne!(
    Sentence::implication(a.clone(), b.clone()),
    Sentence::implication(b, a),
);
```

# Canonical order

Sentences are totally ordered by structure: first by connective (in the order variants are listed on [Sentence]), and then by operands.
Equality and hashing agree with the order, and none of the three depend on the rendering of a sentence.
The rendering of a sentence is for display only.
*/

#[doc(hidden)]
mod display;

use std::collections::{btree_set, BTreeSet};

/// An atomic proposition, identified by name.
///
/// Any string may name a symbol, though to read a symbol back from text the name should be a non-empty string of alphanumeric characters or `_`, other than `true` or `false`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    /// The name of the symbol.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Symbol::new(value)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Symbol(value)
    }
}

/// The operands of a conjunction or disjunction.
///
/// A set of sentences, in canonical order.
/// Operands are only built by the [conjunction](Sentence::conjunction) and [disjunction](Sentence::disjunction) constructors.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operands(BTreeSet<Sentence>);

impl Operands {
    /// Gathers operands, with `absorb` returning the operands of any sentence whose operands should be gathered in place of the sentence.
    fn gather(
        sentences: impl IntoIterator<Item = Sentence>,
        absorb: fn(Sentence) -> Result<Operands, Sentence>,
    ) -> Self {
        let mut operands = BTreeSet::default();
        for sentence in sentences {
            match absorb(sentence) {
                Ok(nested) => operands.extend(nested.0),
                Err(sentence) => {
                    operands.insert(sentence);
                }
            }
        }
        Operands(operands)
    }

    /// An iterator over the operands, in canonical order.
    pub fn iter(&self) -> btree_set::Iter<'_, Sentence> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, sentence: &Sentence) -> bool {
        self.0.contains(sentence)
    }

    /// The least operand in canonical order, if one exists.
    pub fn first(&self) -> Option<&Sentence> {
        self.0.first()
    }
}

impl<'a> IntoIterator for &'a Operands {
    type Item = &'a Sentence;
    type IntoIter = btree_set::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Operands {
    type Item = Sentence;
    type IntoIter = btree_set::IntoIter<Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A sentence of propositional logic.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sentence {
    /// ⊤ or ⊥.
    TruthValue(bool),

    /// An atomic proposition.
    Symbol(Symbol),

    /// ¬inner.
    Negation(Box<Sentence>),

    /// The conjunction of the operands.
    /// Empty, or singleton, conjunctions are permitted.
    Conjunction(Operands),

    /// The disjunction of the operands.
    /// Empty, or singleton, disjunctions are permitted.
    Disjunction(Operands),

    /// antecedent ⇒ consequent.
    Implication(Box<Sentence>, Box<Sentence>),

    /// left ⇔ right.
    Equivalence(Box<Sentence>, Box<Sentence>),
}

/// Constructors.
impl Sentence {
    pub fn truth(value: bool) -> Self {
        Sentence::TruthValue(value)
    }

    pub fn symbol(symbol: impl Into<Symbol>) -> Self {
        Sentence::Symbol(symbol.into())
    }

    pub fn negation(inner: Sentence) -> Self {
        Sentence::Negation(Box::new(inner))
    }

    /// The conjunction of some sentences, absorbing the operands of any nested conjunction.
    pub fn conjunction(operands: impl IntoIterator<Item = Sentence>) -> Self {
        Sentence::Conjunction(Operands::gather(operands, |sentence| match sentence {
            Sentence::Conjunction(nested) => Ok(nested),
            other => Err(other),
        }))
    }

    /// The disjunction of some sentences, absorbing the operands of any nested disjunction.
    pub fn disjunction(operands: impl IntoIterator<Item = Sentence>) -> Self {
        Sentence::Disjunction(Operands::gather(operands, |sentence| match sentence {
            Sentence::Disjunction(nested) => Ok(nested),
            other => Err(other),
        }))
    }

    pub fn implication(antecedent: Sentence, consequent: Sentence) -> Self {
        Sentence::Implication(Box::new(antecedent), Box::new(consequent))
    }

    pub fn equivalence(left: Sentence, right: Sentence) -> Self {
        Sentence::Equivalence(Box::new(left), Box::new(right))
    }
}

/// Inspection.
impl Sentence {
    /// Whether the sentence is a symbol or the negation of a symbol.
    pub fn is_literal(&self) -> bool {
        match self {
            Sentence::Symbol(_) => true,
            Sentence::Negation(inner) => matches!(**inner, Sentence::Symbol(_)),
            _ => false,
        }
    }

    /// Whether the sentence is a literal, or a disjunction of literals.
    pub fn is_clause(&self) -> bool {
        match self {
            Sentence::Disjunction(operands) => operands.iter().all(Sentence::is_literal),
            other => other.is_literal(),
        }
    }

    /// The operands of a conjunction or disjunction, if the sentence is either.
    pub fn operands(&self) -> Option<&Operands> {
        match self {
            Sentence::Conjunction(operands) | Sentence::Disjunction(operands) => Some(operands),
            _ => None,
        }
    }

    /// The symbols occurring in the sentence, in canonical order.
    pub fn symbols(&self) -> BTreeSet<&Symbol> {
        let mut symbols = BTreeSet::default();
        let mut todo = vec![self];
        while let Some(sentence) = todo.pop() {
            match sentence {
                Sentence::TruthValue(_) => {}
                Sentence::Symbol(symbol) => {
                    symbols.insert(symbol);
                }
                Sentence::Negation(inner) => todo.push(inner),
                Sentence::Conjunction(operands) | Sentence::Disjunction(operands) => {
                    todo.extend(operands.iter())
                }
                Sentence::Implication(left, right) | Sentence::Equivalence(left, right) => {
                    todo.push(left);
                    todo.push(right);
                }
            }
        }
        symbols
    }
}

impl From<Symbol> for Sentence {
    fn from(symbol: Symbol) -> Self {
        Sentence::Symbol(symbol)
    }
}

impl From<bool> for Sentence {
    fn from(value: bool) -> Self {
        Sentence::TruthValue(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjunction_absorbs_only_conjunctions() {
        let [a, b, c] = ["a", "b", "c"].map(Sentence::symbol);

        let nested = Sentence::conjunction([
            a.clone(),
            Sentence::disjunction([b.clone(), c.clone()]),
            Sentence::conjunction([b.clone(), c.clone()]),
        ]);

        let Sentence::Conjunction(operands) = &nested else {
            panic!("Expected a conjunction");
        };
        assert_eq!(operands.len(), 4);
        assert!(operands.contains(&Sentence::disjunction([c, b])));
    }

    #[test]
    fn duplicates_collapse() {
        let a = Sentence::symbol("a");
        let not_a = Sentence::negation(a.clone());

        let disjunction = Sentence::disjunction([a.clone(), not_a.clone(), a.clone(), not_a]);
        assert_eq!(disjunction.operands().map(Operands::len), Some(2));
    }

    #[test]
    fn literals() {
        let a = Sentence::symbol("a");
        assert!(a.is_literal());
        assert!(Sentence::negation(a.clone()).is_literal());
        assert!(!Sentence::negation(Sentence::negation(a.clone())).is_literal());
        assert!(!Sentence::truth(true).is_literal());

        assert!(Sentence::disjunction([a.clone(), Sentence::negation(a.clone())]).is_clause());
        assert!(!Sentence::conjunction([a.clone()]).is_clause());
    }

    #[test]
    fn symbols_are_collected() {
        let s = Sentence::equivalence(
            Sentence::symbol("p"),
            Sentence::disjunction([Sentence::symbol("q"), Sentence::negation(Sentence::symbol("p"))]),
        );
        let names = s.symbols().into_iter().map(Symbol::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["p", "q"]);
    }
}
