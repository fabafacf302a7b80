//! Checks on randomly generated sentences over a handful of symbols.
//!
//! Each check is seeded, so any failure is reproducible.

use rand::{rngs::StdRng, Rng, SeedableRng};

use otter_entail::{
    knowledge_base::KnowledgeBase,
    procedures::{
        model_check::{entails, equivalent},
        normalize::{is_cnf, normalize},
    },
    structures::sentence::Sentence,
    types::err::ErrorKind,
};

const SYMBOLS: [&str; 4] = ["a", "b", "c", "d"];

fn random_sentence(rng: &mut impl Rng, depth: usize) -> Sentence {
    if depth == 0 {
        return match rng.random_range(0..10) {
            0 => Sentence::truth(rng.random_bool(0.5)),
            _ => Sentence::symbol(SYMBOLS[rng.random_range(0..SYMBOLS.len())]),
        };
    }

    match rng.random_range(0..6) {
        0 => random_sentence(rng, 0),
        1 => Sentence::negation(random_sentence(rng, depth - 1)),
        2 => {
            let count = rng.random_range(2..4);
            Sentence::conjunction((0..count).map(|_| random_sentence(rng, depth - 1)).collect::<Vec<_>>())
        }
        3 => {
            let count = rng.random_range(2..4);
            Sentence::disjunction((0..count).map(|_| random_sentence(rng, depth - 1)).collect::<Vec<_>>())
        }
        4 => Sentence::implication(random_sentence(rng, depth - 1), random_sentence(rng, depth - 1)),
        _ => Sentence::equivalence(random_sentence(rng, depth - 1), random_sentence(rng, depth - 1)),
    }
}

mod normalization {
    use super::*;

    #[test]
    fn normal_forms() {
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..200 {
            let sentence = random_sentence(&mut rng, 3);
            let normal = normalize(&sentence);

            assert!(is_cnf(&normal), "{normal} from {sentence}");
            assert_eq!(equivalent(&sentence, &normal), Ok(true), "{normal} from {sentence}");
            assert_eq!(normalize(&normal), normal, "{sentence}");
        }
    }
}

mod derivation {
    use super::*;

    #[test]
    fn agrees_with_models() {
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            let mut kb = KnowledgeBase::default();
            for _ in 0..rng.random_range(1..4) {
                kb.add(random_sentence(&mut rng, 2));
            }
            let goal = random_sentence(&mut rng, 2);

            let expected = entails(kb.sentences(), &goal).map_err(ErrorKind::from);
            assert_eq!(kb.derive(&goal), expected, "{goal} from {kb}");
        }
    }

    #[test]
    fn premises_are_derived() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let mut kb = KnowledgeBase::default();
            for _ in 0..rng.random_range(1..4) {
                kb.add(random_sentence(&mut rng, 2));
            }

            let premises = kb.sentences().cloned().collect::<Vec<_>>();
            for premise in premises {
                assert_eq!(kb.derive(&premise), Ok(true), "{premise} from {kb}");
            }
        }
    }
}
