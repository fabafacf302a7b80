use std::time::Duration;

/// Counts for various things which count during a query, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// The number of saturation rounds started.
    pub rounds: usize,

    /// A count of every pair of clauses given to resolution.
    pub resolutions: usize,

    /// A count of every (non-tautological) resolvent, including repeats.
    pub resolvents: usize,

    /// The number of settled clauses at the end of the last completed round.
    pub settled: usize,

    /// The time taken during saturation.
    pub time: Duration,
}
