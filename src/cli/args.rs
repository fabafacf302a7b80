use std::path::PathBuf;

use clap::Parser;

/// Decides whether a propositional knowledge base entails some sentences.
///
/// The knowledge base is read from a file with one sentence per line, and each query is answered by resolution refutation.
#[derive(Parser, Debug)]
#[command(name = "otter_entail", version, about, long_about = None)]
pub struct Args {
    /// A file of sentences, one sentence per line ('#' begins a comment).
    pub file: PathBuf,

    /// A sentence to derive from the knowledge base, which may be given more than once.
    #[arg(short, long = "query", value_name = "SENTENCE")]
    pub queries: Vec<String>,

    /// Display the conjunctive normal form of the knowledge base.
    #[arg(long)]
    pub cnf: bool,

    /// Check each answer against an enumeration of valuations.
    #[arg(short, long)]
    pub model_check: bool,

    /// Display counters after each query.
    #[arg(short, long)]
    pub stats: bool,

    /// Stop a query after this many saturation rounds (zero for no limit).
    #[arg(long, value_name = "ROUNDS", default_value_t = 0)]
    pub round_limit: usize,

    /// Stop a query after this many seconds.
    #[arg(long, value_name = "SECONDS")]
    pub time_limit: Option<u64>,
}
