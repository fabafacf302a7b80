//! Reading a sentence from text.
//!
//! The grammar, from loosest to tightest binding:
//!
//! ```none
//! equivalence ::= implication [ ⇔ equivalence ]
//! implication ::= disjunction [ ⇒ implication ]
//! disjunction ::= conjunction { ∨ conjunction }
//! conjunction ::= unary { ∧ unary }
//! unary       ::= ¬ unary | primary
//! primary     ::= ( equivalence ) | ( ∧ [ equivalence ] ) | ( ∨ [ equivalence ] ) | ⊤ | ⊥ | symbol
//! ```
//!
//! The bracketed forms with a leading connective read the empty and single-operand conjunctions and disjunctions, as rendered.
//!
//! Alongside the symbols used when rendering a sentence, ASCII alternatives are read:
//!
//! | Connective | Alternatives   |
//! |------------|----------------|
//! | ¬          | `~`, `!`       |
//! | ∧          | `&`, `&&`      |
//! | ∨          | `\|`, `\|\|`   |
//! | ⇒          | `=>`, `->`, `→`|
//! | ⇔          | `<=>`, `<->`, `↔` |
//! | ⊤ / ⊥      | `true` / `false` |
//!
//! Symbols are non-empty strings of alphanumeric characters and `_`, other than `true` and `false`.

use std::{iter::Peekable, str::CharIndices};

use crate::{
    structures::sentence::{Sentence, Symbol},
    types::err::{self},
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Not,
    And,
    Or,
    Implies,
    Iff,
    Open,
    Close,
    Truth(bool),
    Name(String),
}

/// Splits text into (position, token) pairs.
fn tokenize(text: &str) -> Result<Vec<(usize, Token)>, err::ParseError> {
    let mut tokens = Vec::default();
    let mut chars = text.char_indices().peekable();

    while let Some((position, character)) = chars.next() {
        let token = match character {
            c if c.is_whitespace() => continue,

            '¬' | '~' | '!' => Token::Not,
            '∧' => Token::And,
            '∨' => Token::Or,
            '⇒' | '→' => Token::Implies,
            '⇔' | '↔' => Token::Iff,
            '(' => Token::Open,
            ')' => Token::Close,
            '⊤' => Token::Truth(true),
            '⊥' => Token::Truth(false),

            '&' => {
                chars.next_if(|(_, c)| *c == '&');
                Token::And
            }

            '|' => {
                chars.next_if(|(_, c)| *c == '|');
                Token::Or
            }

            '=' | '-' => {
                expect(&mut chars, '>', position)?;
                Token::Implies
            }

            '<' => {
                match chars.next() {
                    Some((_, '=' | '-')) => {}
                    _ => return Err(err::ParseError::UnexpectedCharacter(position)),
                }
                expect(&mut chars, '>', position)?;
                Token::Iff
            }

            c if is_symbol_char(c) => {
                let mut name = String::from(c);
                while let Some((_, c)) = chars.next_if(|(_, c)| is_symbol_char(*c)) {
                    name.push(c);
                }
                match name.as_str() {
                    "true" => Token::Truth(true),
                    "false" => Token::Truth(false),
                    _ => Token::Name(name),
                }
            }

            _ => return Err(err::ParseError::UnexpectedCharacter(position)),
        };
        tokens.push((position, token));
    }

    Ok(tokens)
}

fn is_symbol_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn expect(
    chars: &mut Peekable<CharIndices>,
    expected: char,
    position: usize,
) -> Result<(), err::ParseError> {
    match chars.next_if(|(_, c)| *c == expected) {
        Some(_) => Ok(()),
        None => Err(err::ParseError::UnexpectedCharacter(position)),
    }
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    index: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|(_, token)| token)
    }

    /// Consumes the next token if it is the given token.
    fn eat(&mut self, token: &Token) -> bool {
        match self.peek() == Some(token) {
            true => {
                self.index += 1;
                true
            }
            false => false,
        }
    }

    fn unexpected(&self) -> err::ParseError {
        match self.tokens.get(self.index) {
            Some((position, _)) => err::ParseError::UnexpectedToken(*position),
            None => err::ParseError::UnexpectedEnd,
        }
    }

    fn equivalence(&mut self) -> Result<Sentence, err::ParseError> {
        let left = self.implication()?;
        match self.eat(&Token::Iff) {
            true => Ok(Sentence::equivalence(left, self.equivalence()?)),
            false => Ok(left),
        }
    }

    fn implication(&mut self) -> Result<Sentence, err::ParseError> {
        let antecedent = self.disjunction()?;
        match self.eat(&Token::Implies) {
            true => Ok(Sentence::implication(antecedent, self.implication()?)),
            false => Ok(antecedent),
        }
    }

    fn disjunction(&mut self) -> Result<Sentence, err::ParseError> {
        let mut operands = vec![self.conjunction()?];
        while self.eat(&Token::Or) {
            operands.push(self.conjunction()?);
        }
        match operands.len() {
            1 => Ok(operands.remove(0)),
            _ => Ok(Sentence::disjunction(operands)),
        }
    }

    fn conjunction(&mut self) -> Result<Sentence, err::ParseError> {
        let mut operands = vec![self.unary()?];
        while self.eat(&Token::And) {
            operands.push(self.unary()?);
        }
        match operands.len() {
            1 => Ok(operands.remove(0)),
            _ => Ok(Sentence::conjunction(operands)),
        }
    }

    fn unary(&mut self) -> Result<Sentence, err::ParseError> {
        match self.eat(&Token::Not) {
            true => Ok(Sentence::negation(self.unary()?)),
            false => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Sentence, err::ParseError> {
        let Some((_, token)) = self.tokens.get(self.index).cloned() else {
            return Err(err::ParseError::UnexpectedEnd);
        };

        let sentence = match token {
            Token::Truth(value) => Sentence::truth(value),
            Token::Name(name) => Sentence::symbol(Symbol::new(name)),
            Token::Open => {
                self.index += 1;
                if let Some(connective) = self.peek().cloned() {
                    if connective == Token::And || connective == Token::Or {
                        self.index += 1;
                        return self.degenerate(connective);
                    }
                }
                let inner = self.equivalence()?;
                if !self.eat(&Token::Close) {
                    return Err(self.unexpected());
                }
                return Ok(inner);
            }
            _ => return Err(self.unexpected()),
        };

        self.index += 1;
        Ok(sentence)
    }

    /// The remainder of `(∧)`, `(∧ a)`, `(∨)` or `(∨ a)`, following the connective.
    fn degenerate(&mut self, connective: Token) -> Result<Sentence, err::ParseError> {
        let operands = match self.eat(&Token::Close) {
            true => Vec::default(),
            false => {
                let operand = self.equivalence()?;
                if !self.eat(&Token::Close) {
                    return Err(self.unexpected());
                }
                vec![operand]
            }
        };

        match connective {
            Token::And => Ok(Sentence::conjunction(operands)),
            _ => Ok(Sentence::disjunction(operands)),
        }
    }
}

/// Reads a sentence from text.
///
/// ```rust
/// # use otter_entail::builder::parse_sentence;
/// # use otter_entail::structures::sentence::Sentence;
/// let sentence = parse_sentence("L11 <=> (F21 | F12)").unwrap();
/// assert_eq!(sentence.to_string(), "(L11 ⇔ (F12 ∨ F21))");
///
/// assert_eq!(parse_sentence(&sentence.to_string()), Ok(sentence));
/// ```
pub fn parse_sentence(text: &str) -> Result<Sentence, err::ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(err::ParseError::Empty);
    }

    let mut parser = Parser { tokens, index: 0 };
    let sentence = parser.equivalence()?;

    match parser.tokens.get(parser.index) {
        None => Ok(sentence),
        Some((position, _)) => Err(err::ParseError::TrailingInput(*position)),
    }
}

impl std::str::FromStr for Sentence {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sentence(s)
    }
}
