//! Literals are symbols paired with a (boolean) polarity.
//!
//! A literal with positive polarity is identified with the sentence made of its symbol, and a literal with negative polarity with the negation of that sentence.
//!
//! ```rust
//! # use otter_entail::structures::literal::Literal;
//! # use otter_entail::structures::sentence::{Sentence, Symbol};
//! let literal = Literal::new(Symbol::from("p"), false);
//!
//! assert!(!literal.polarity());
//! assert_eq!(literal.symbol().name(), "p");
//! assert!(literal.negate().polarity());
//!
//! let sentence = Sentence::from(literal.clone());
//! assert_eq!(sentence, Sentence::negation(Sentence::symbol("p")));
//! assert_eq!(Literal::try_from(&sentence), Ok(literal));
//! ```
//!
//! Literals are ordered by symbol and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.

use crate::{
    structures::sentence::{Sentence, Symbol},
    types::err::{self},
};

/// A symbol paired with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The symbol of the literal.
    symbol: Symbol,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a symbol with a boolean.
    pub fn new(symbol: Symbol, polarity: bool) -> Self {
        Self { symbol, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            symbol: self.symbol.clone(),
            polarity: !self.polarity,
        }
    }

    /// The symbol of the literal.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.symbol),
            false => write!(f, "¬{}", self.symbol),
        }
    }
}

impl From<Literal> for Sentence {
    fn from(literal: Literal) -> Self {
        match literal.polarity {
            true => Sentence::Symbol(literal.symbol),
            false => Sentence::negation(Sentence::Symbol(literal.symbol)),
        }
    }
}

impl TryFrom<&Sentence> for Literal {
    type Error = err::NormalizationError;

    fn try_from(sentence: &Sentence) -> Result<Self, Self::Error> {
        match sentence {
            Sentence::Symbol(symbol) => Ok(Literal::new(symbol.clone(), true)),
            Sentence::Negation(inner) => match inner.as_ref() {
                Sentence::Symbol(symbol) => Ok(Literal::new(symbol.clone(), false)),
                _ => Err(err::NormalizationError::NotLiteral),
            },
            _ => Err(err::NormalizationError::NotLiteral),
        }
    }
}
