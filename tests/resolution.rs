use std::time::Duration;

use otter_entail::{
    config::Config,
    knowledge_base::Counters,
    procedures::resolution::{resolve, saturate},
    reports::Report,
    structures::{clause::Clause, literal::Literal, sentence::Symbol},
};

fn literal(name: &str) -> Literal {
    match name.strip_prefix('-') {
        Some(name) => Literal::new(Symbol::from(name), false),
        None => Literal::new(Symbol::from(name), true),
    }
}

fn clause(literals: &str) -> Clause {
    literals.split_whitespace().map(literal).collect()
}

mod resolvents {
    use super::*;

    #[test]
    fn single_pair() {
        assert_eq!(resolve(&clause("p q"), &clause("-p r")), vec![clause("q r")]);
    }

    #[test]
    fn shared_literals_merge() {
        assert_eq!(resolve(&clause("p q"), &clause("-p q")), vec![clause("q")]);
    }

    #[test]
    fn nothing_to_resolve_on() {
        assert!(resolve(&clause("p q"), &clause("p -r")).is_empty());
    }

    #[test]
    fn complementary_units() {
        let resolvents = resolve(&clause("p"), &clause("-p"));
        assert_eq!(resolvents, vec![Clause::default()]);
    }

    #[test]
    fn two_pairs_are_tautologies() {
        assert!(resolve(&clause("p q"), &clause("-p -q")).is_empty());
        assert!(resolve(&clause("-p -q"), &clause("p q")).is_empty());
    }

    #[test]
    fn tautology_check() {
        assert!(clause("p -p").is_tautology());
        assert!(clause("a -b q r b").is_tautology());
        assert!(!clause("p -q r").is_tautology());
    }
}

mod saturation {
    use super::*;

    #[test]
    fn empty_set_is_satisfiable() {
        let mut counters = Counters::default();
        let report = saturate(Vec::<Clause>::new(), &Config::default(), &mut counters);
        assert_eq!(report, Report::Satisfiable);
    }

    #[test]
    fn empty_clause_is_unsatisfiable() {
        let mut counters = Counters::default();
        let report = saturate([clause("p"), Clause::default()], &Config::default(), &mut counters);
        assert_eq!(report, Report::Unsatisfiable);
        assert_eq!(counters.rounds, 0);
    }

    #[test]
    fn chain() {
        let clauses = [
            clause("p1"),
            clause("-p1 p2"),
            clause("-p2 p3"),
            clause("-p3 p4"),
            clause("-p4"),
        ];

        let mut counters = Counters::default();
        let report = saturate(clauses, &Config::default(), &mut counters);
        assert_eq!(report, Report::Unsatisfiable);
        assert!(counters.rounds > 1);
        assert!(counters.resolvents > 0);
    }

    #[test]
    fn satisfiable_chain() {
        let clauses = [clause("p1"), clause("-p1 p2"), clause("-p2 p3"), clause("-p3 p4")];

        let mut counters = Counters::default();
        let report = saturate(clauses, &Config::default(), &mut counters);
        assert_eq!(report, Report::Satisfiable);
        assert!(counters.settled >= 4);
    }

    #[test]
    fn round_limit() {
        let clauses = [
            clause("p1"),
            clause("-p1 p2"),
            clause("-p2 p3"),
            clause("-p3 p4"),
            clause("-p4"),
        ];

        let mut config = Config::default();
        assert!(config.round_limit.set(1));

        let mut counters = Counters::default();
        let report = saturate(clauses, &config, &mut counters);
        assert_eq!(report, Report::RoundLimit);
        assert_eq!(counters.rounds, 1);
    }

    #[test]
    fn time_limit() {
        let clauses = [
            clause("p1"),
            clause("-p1 p2"),
            clause("-p2 p3"),
            clause("-p3 p4"),
            clause("-p4"),
        ];

        let mut config = Config::default();
        assert!(config.time_limit.set(Duration::from_nanos(1)));

        // The empty clause is only found in a later round, and any later round starts after the limit.
        let mut counters = Counters::default();
        let report = saturate(clauses, &config, &mut counters);
        assert_eq!(report, Report::TimeUp);
        assert!(counters.rounds <= 1);
    }

    #[test]
    fn duplicate_clauses() {
        let clauses = [clause("p q"), clause("q p"), clause("-p"), clause("-q")];

        let mut counters = Counters::default();
        assert_eq!(saturate(clauses, &Config::default(), &mut counters), Report::Unsatisfiable);
    }
}
