use otter_entail::{
    builder::parse_sentence,
    knowledge_base::KnowledgeBase,
    structures::sentence::Sentence,
    types::err::ParseError,
};

fn rendered(text: &str) -> String {
    match parse_sentence(text) {
        Ok(sentence) => sentence.to_string(),
        Err(e) => panic!("failed to parse {text:?}: {e}"),
    }
}

mod precedence {
    use super::*;

    #[test]
    fn conjunction_binds_tighter_than_disjunction() {
        assert_eq!(rendered("p | q & r"), "(p ∨ (q ∧ r))");
        assert_eq!(rendered("(p | q) & r"), "(r ∧ (p ∨ q))");
    }

    #[test]
    fn implication_associates_right() {
        assert_eq!(rendered("p -> q -> r"), "(p ⇒ (q ⇒ r))");
        assert_eq!(rendered("(p => q) => r"), "((p ⇒ q) ⇒ r)");
    }

    #[test]
    fn equivalence_is_loosest() {
        assert_eq!(rendered("p <-> q => r"), "(p ⇔ (q ⇒ r))");
    }

    #[test]
    fn negation_is_tightest() {
        assert_eq!(rendered("~p & q"), "(q ∧ ¬p)");
        assert_eq!(rendered("!!p"), "¬¬p");
        assert_eq!(rendered("¬(p ∨ q)"), "¬(p ∨ q)");
    }
}

mod operands {
    use super::*;

    #[test]
    fn flattened_and_deduplicated() {
        assert_eq!(rendered("(a & b) && c & a"), "(a ∧ b ∧ c)");
        assert_eq!(rendered("a || (b | a)"), "(a ∨ b)");
    }

    #[test]
    fn truth_values() {
        assert_eq!(rendered("true & p"), "(⊤ ∧ p)");
        assert_eq!(rendered("⊥ ∨ false"), "(∨ ⊥)");
    }

    #[test]
    fn symbol_names() {
        let sentence = parse_sentence("F_1_2 => breeze_1_1");
        let expected = Sentence::implication(Sentence::symbol("F_1_2"), Sentence::symbol("breeze_1_1"));
        assert_eq!(sentence, Ok(expected));
    }

    #[test]
    fn rendering_is_read_back() {
        for text in [
            "(L11 ⇔ (F12 ∨ F21))",
            "((A ∨ ¬B) ∧ (B ∨ ¬A))",
            "¬(p ⇒ ⊥)",
            "(∧)",
            "(∨)",
            "(∨ ⊥)",
            "(∧ b)",
            "¬(∨ (p ∧ q))",
        ] {
            assert_eq!(rendered(text), text);
        }
    }
}

mod degenerate {
    use super::*;

    #[test]
    fn operand_counts() {
        let empty = Sentence::conjunction(Vec::<Sentence>::new());
        assert_eq!(parse_sentence("(∧)"), Ok(empty));
        assert_eq!(parse_sentence("( | )"), Ok(Sentence::disjunction(Vec::<Sentence>::new())));

        let single = Sentence::disjunction([Sentence::truth(false)]);
        assert_eq!(parse_sentence(&rendered("⊥ ∨ false")), Ok(single));
    }

    #[test]
    fn knowledge_base_state_is_read_back() {
        let mut kb = KnowledgeBase::default();
        kb.add(Sentence::conjunction(["b", "b"].map(Sentence::symbol)));
        kb.normalize();

        let state = kb.to_string();
        assert_eq!(state, "(∧ b)");
        assert_eq!(parse_sentence(&state), Ok(kb.as_sentence()));
    }

    #[test]
    fn unclosed() {
        assert_eq!(parse_sentence("(∧ a b)"), Err(ParseError::UnexpectedToken(7)));
        assert_eq!(parse_sentence("(∨"), Err(ParseError::UnexpectedEnd));
    }
}

mod errors {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(parse_sentence(""), Err(ParseError::Empty));
        assert_eq!(parse_sentence("   "), Err(ParseError::Empty));
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(parse_sentence("p $ q"), Err(ParseError::UnexpectedCharacter(2)));
        assert_eq!(parse_sentence("p <= q"), Err(ParseError::UnexpectedCharacter(2)));
        assert_eq!(parse_sentence("p = q"), Err(ParseError::UnexpectedCharacter(2)));
    }

    #[test]
    fn unexpected_end() {
        assert_eq!(parse_sentence("p &"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse_sentence("(p | q"), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn unexpected_token() {
        assert_eq!(parse_sentence("p & )"), Err(ParseError::UnexpectedToken(4)));
        assert_eq!(parse_sentence("()"), Err(ParseError::UnexpectedToken(1)));
    }

    #[test]
    fn trailing_input() {
        assert_eq!(parse_sentence("p q"), Err(ParseError::TrailingInput(2)));
        assert_eq!(parse_sentence("p)"), Err(ParseError::TrailingInput(1)));
    }
}
