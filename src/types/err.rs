//! Error types used in the library.
//!
//! - Normalization errors indicate a defect in the application of rewrite rules, and never follow from the shape of a sentence given by a caller.
//! - Resolution errors are only possible when some limit has been [configured](crate::config), and note that a query was abandoned before an answer was found.
//! - Parse errors follow from text which does not express a sentence.
//! - Valuation errors note a request to enumerate more valuations than could ever be examined.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding procedures.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error type, wrapping the error of some specific part of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Normalization(NormalizationError),
    Parse(ParseError),
    Resolution(ResolutionError),
    Valuation(ValuationError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normalization(e) => write!(f, "Normalization failure: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Resolution(e) => write!(f, "Resolution stopped: {e}"),
            Self::Valuation(e) => write!(f, "Valuation error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors during normalization.
///
/// Either variant is an internal consistency failure, and a query which meets one is abandoned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NormalizationError {
    /// The result of normalization is not in conjunctive normal form.
    NotCNF,

    /// Some clause of a normalized sentence contains something other than a literal.
    NotLiteral,
}

impl From<NormalizationError> for ErrorKind {
    fn from(e: NormalizationError) -> Self {
        ErrorKind::Normalization(e)
    }
}

impl std::fmt::Display for NormalizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotCNF => write!(f, "the normal form is not a conjunction of clauses"),
            Self::NotLiteral => write!(f, "a clause contains a non-literal"),
        }
    }
}

/// Noted reasons for a saturation to stop before a fixpoint or the empty clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionError {
    /// The configured limit on saturation rounds was reached.
    RoundLimit,

    /// The configured time limit was reached.
    TimeUp,
}

impl From<ResolutionError> for ErrorKind {
    fn from(e: ResolutionError) -> Self {
        ErrorKind::Resolution(e)
    }
}

impl std::fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundLimit => write!(f, "round limit reached"),
            Self::TimeUp => write!(f, "time limit reached"),
        }
    }
}

/// Errors during parsing.
///
/// Positions are byte offsets into the parsed text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A character which does not begin any token.
    UnexpectedCharacter(usize),

    /// A token which may not appear at the given position.
    UnexpectedToken(usize),

    /// The text ended while some part of a sentence was still expected.
    UnexpectedEnd,

    /// A complete sentence was read, but some text remains.
    TrailingInput(usize),

    /// An empty string, where some non-empty string was required.
    Empty,

    /// Some issue at a specific line (counting from one) when reading sentences line by line.
    Line(usize, Box<ParseError>),

    /// A line could not be read.
    Read(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter(at) => write!(f, "unexpected character at {at}"),
            Self::UnexpectedToken(at) => write!(f, "unexpected token at {at}"),
            Self::UnexpectedEnd => write!(f, "unexpected end of input"),
            Self::TrailingInput(at) => write!(f, "trailing input from {at}"),
            Self::Empty => write!(f, "empty input"),
            Self::Line(line, e) => write!(f, "line {line}: {e}"),
            Self::Read(line) => write!(f, "failed to read line {line}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors when enumerating valuations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValuationError {
    /// Valuations of the given count of symbols are too many to enumerate.
    TooManySymbols(usize),
}

impl From<ValuationError> for ErrorKind {
    fn from(e: ValuationError) -> Self {
        ErrorKind::Valuation(e)
    }
}

impl std::fmt::Display for ValuationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManySymbols(count) => write!(f, "too many symbols to enumerate ({count})"),
        }
    }
}
