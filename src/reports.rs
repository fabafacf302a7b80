//! Details on the result of a saturation.

/// The result of saturating a set of clauses under resolution.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The empty clause was derived, and so the clauses are unsatisfiable.
    Unsatisfiable,

    /// No fresh clauses could be derived without the empty clause, and so the clauses are satisfiable.
    Satisfiable,

    /// Saturation stopped after the configured number of rounds.
    RoundLimit,

    /// Saturation stopped after the configured time limit.
    TimeUp,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::RoundLimit => write!(f, "Unknown (round limit)"),
            Self::TimeUp => write!(f, "Unknown (time limit)"),
        }
    }
}
