use std::time::Duration;

use otter_entail::{
    config::Config,
    knowledge_base::{KnowledgeBase, SentenceOk},
    structures::sentence::Sentence,
    types::err::{ErrorKind, ParseError, ResolutionError},
};

/// ¬F11, L11 ⇔ (F21 ∨ F12), ¬L11
fn breezeless_start() -> KnowledgeBase {
    let [f11, f12, f21, l11] = ["F11", "F12", "F21", "L11"].map(Sentence::symbol);

    let mut kb = KnowledgeBase::default();
    kb.add(Sentence::negation(f11));
    kb.add(Sentence::equivalence(l11.clone(), Sentence::disjunction([f21, f12])));
    kb.add(Sentence::negation(l11));
    kb
}

mod derive {
    use super::*;

    #[test]
    fn no_pit_next_to_the_start() {
        let mut kb = breezeless_start();
        let goal = Sentence::negation(Sentence::symbol("F21"));
        assert_eq!(kb.derive(&goal), Ok(true));
    }

    #[test]
    fn no_claim_of_a_pit() {
        let mut kb = breezeless_start();
        assert_eq!(kb.derive(&Sentence::symbol("F21")), Ok(false));
    }

    #[test]
    fn both_neighbours() {
        let mut kb = breezeless_start();
        let goal = Sentence::conjunction([
            Sentence::negation(Sentence::symbol("F21")),
            Sentence::negation(Sentence::symbol("F12")),
        ]);
        assert_eq!(kb.derive(&goal), Ok(true));
    }

    #[test]
    fn empty_knowledge_base() {
        let mut kb = KnowledgeBase::default();
        assert_eq!(kb.derive(&Sentence::symbol("A")), Ok(false));
        assert_eq!(kb.derive(&Sentence::truth(true)), Ok(true));
        assert_eq!(kb.derive(&Sentence::truth(false)), Ok(false));

        let a = Sentence::symbol("A");
        let excluded_middle = Sentence::disjunction([a.clone(), Sentence::negation(a)]);
        assert_eq!(kb.derive(&excluded_middle), Ok(true));
    }

    #[test]
    fn inconsistent_knowledge_base() {
        let mut kb = KnowledgeBase::default();
        kb.add(Sentence::symbol("p"));
        kb.add(Sentence::negation(Sentence::symbol("p")));

        assert_eq!(kb.derive(&Sentence::symbol("q")), Ok(true));
        assert_eq!(kb.derive(&Sentence::truth(false)), Ok(true));
    }

    #[test]
    fn queries_leave_the_knowledge_base_unchanged() {
        let mut kb = breezeless_start();
        let before = kb.sentences().cloned().collect::<Vec<_>>();

        assert!(kb.derive(&Sentence::symbol("F21")).is_ok());
        assert!(kb.derive(&Sentence::symbol("L11")).is_ok());

        assert_eq!(kb.sentences().cloned().collect::<Vec<_>>(), before);
    }

    #[test]
    fn counters_are_reset() {
        let mut kb = breezeless_start();
        assert_eq!(kb.derive(&Sentence::negation(Sentence::symbol("F21"))), Ok(true));
        assert!(kb.counters.rounds > 0);

        assert_eq!(kb.derive(&Sentence::truth(true)), Ok(true));
        assert_eq!(kb.counters.rounds, 0);
    }

    #[test]
    fn round_limit() {
        let mut config = Config::default();
        assert!(config.round_limit.set(1));
        let mut kb = KnowledgeBase::from_config(config);

        for (antecedent, consequent) in [("p1", "p2"), ("p2", "p3"), ("p3", "p4")] {
            kb.add(Sentence::implication(
                Sentence::symbol(antecedent),
                Sentence::symbol(consequent),
            ));
        }
        kb.add(Sentence::symbol("p1"));

        assert_eq!(
            kb.derive(&Sentence::symbol("p4")),
            Err(ErrorKind::Resolution(ResolutionError::RoundLimit))
        );

        kb.config = Config::default();
        assert_eq!(kb.derive(&Sentence::symbol("p4")), Ok(true));
    }

    #[test]
    fn time_limit() {
        let mut config = Config::default();
        assert_eq!(config.time_limit(), None);
        assert!(config.time_limit.set(Duration::from_nanos(1)));
        assert_eq!(config.time_limit(), Some(Duration::from_nanos(1)));

        let mut kb = KnowledgeBase::from_config(config);
        for (antecedent, consequent) in [("p1", "p2"), ("p2", "p3"), ("p3", "p4")] {
            kb.add(Sentence::implication(
                Sentence::symbol(antecedent),
                Sentence::symbol(consequent),
            ));
        }
        kb.add(Sentence::symbol("p1"));

        assert_eq!(
            kb.derive(&Sentence::symbol("p4")),
            Err(ErrorKind::Resolution(ResolutionError::TimeUp))
        );

        assert!(kb.config.time_limit.set(Duration::ZERO));
        assert_eq!(kb.config.time_limit(), None);
        assert_eq!(kb.derive(&Sentence::symbol("p4")), Ok(true));
    }
}

mod store {
    use super::*;

    #[test]
    fn duplicates() {
        let mut kb = KnowledgeBase::default();
        let sentence = Sentence::disjunction(["a", "b"].map(Sentence::symbol));
        let reordered = Sentence::disjunction(["b", "a", "b"].map(Sentence::symbol));

        assert_eq!(kb.add(sentence), SentenceOk::Added);
        assert_eq!(kb.add(reordered), SentenceOk::Duplicate);
        assert_eq!(kb.len(), 1);
    }

    #[test]
    fn display() {
        let mut kb = KnowledgeBase::default();
        assert_eq!(kb.to_string(), "(∧)");

        kb.add(Sentence::symbol("b"));
        assert_eq!(kb.to_string(), "(∧ b)");

        kb.add(Sentence::negation(Sentence::symbol("a")));
        kb.add(Sentence::symbol("a"));
        assert_eq!(kb.to_string(), "(a ∧ b ∧ ¬a)");
    }

    #[test]
    fn normalize() {
        let mut kb = breezeless_start();
        kb.normalize();
        assert!(kb.sentences().all(Sentence::is_clause));

        let once = kb.sentences().cloned().collect::<Vec<_>>();
        kb.normalize();
        assert_eq!(kb.sentences().cloned().collect::<Vec<_>>(), once);

        assert_eq!(kb.derive(&Sentence::negation(Sentence::symbol("F21"))), Ok(true));
        assert_eq!(kb.derive(&Sentence::symbol("F21")), Ok(false));
    }

    #[test]
    fn normalize_empty() {
        let mut kb = KnowledgeBase::default();
        kb.normalize();
        assert!(kb.is_empty());

        kb.add(Sentence::disjunction([
            Sentence::symbol("a"),
            Sentence::negation(Sentence::symbol("a")),
        ]));
        kb.normalize();
        assert!(kb.is_empty());
    }
}

mod read {
    use super::*;

    #[test]
    fn sentences() {
        let text = "
# The start.
~F11
L11 <=> (F21 | F12)
~L11
";
        let mut kb = KnowledgeBase::default();
        assert_eq!(kb.read_sentences(text.as_bytes()), Ok(3));

        let mut expected = breezeless_start();
        assert_eq!(kb.to_string(), expected.to_string());

        let goal = Sentence::negation(Sentence::symbol("F21"));
        assert_eq!(kb.derive(&goal), expected.derive(&goal));
    }

    #[test]
    fn line_errors() {
        let mut kb = KnowledgeBase::default();
        let result = kb.read_sentences("p\n\nq &\n".as_bytes());
        assert_eq!(result, Err(ParseError::Line(3, Box::new(ParseError::UnexpectedEnd))));
        assert_eq!(kb.len(), 1);
    }
}
