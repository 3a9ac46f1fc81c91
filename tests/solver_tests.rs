use wordle_assistant::{ConstraintState, RoundInput};

fn round(line: &str) -> RoundInput {
    RoundInput::parse(line, 5).unwrap()
}

#[test]
fn test_correct_position_must_match() {
    let mut state = ConstraintState::new(5);
    state.apply(&round("cazes gy___"));

    // known: 'c' at 0; required: 'a' (misplaced at 1); forbidden: z, e, s
    assert!(state.matches("chair"));
    assert!(!state.matches("zebra"));
}

#[test]
fn test_misplaced_letter_is_excluded_at_its_observed_position() {
    let mut state = ConstraintState::new(5);
    state.apply(&round("cazes gy___"));

    // 'a' is required somewhere, but not at position 1
    assert!(!state.matches("cares"));
}

#[test]
fn test_required_letter_must_appear_somewhere() {
    let mut state = ConstraintState::new(5);
    state.apply(&round("cazes gy___"));

    // "choir" passes every positional clause but has no 'a'
    assert!(!state.matches("choir"));
}

#[test]
fn test_forbidden_letter_rejects_everywhere_outside_known_positions() {
    let mut state = ConstraintState::new(5);
    state.apply(&round("cazes gy___"));

    assert!(!state.matches("cases"));
    assert!(!state.matches("crane"));
}

#[test]
fn test_known_position_bypasses_the_global_forbidden_set() {
    let mut state = ConstraintState::new(5);
    // 's' is correct at position 0 and absent at positions 2 and 3 in the
    // same round, so it lands in the global forbidden set too.
    state.apply(&round("sassy g____"));

    assert!(state.forbidden_letters().contains(&'s'));
    // A word starting with 's' and containing no further 's' still matches.
    assert!(state.matches("shore"));
    // Any later 's' is rejected through the per-position exclusion.
    assert!(!state.matches("sassy"));
}

#[test]
fn test_accumulation_is_monotonic_across_rounds() {
    let mut state = ConstraintState::new(5);
    state.apply(&round("cazes gy___"));

    let forbidden_before: Vec<char> = state.forbidden_letters().to_vec();
    let required_before: Vec<char> = state.required_letters().to_vec();
    let misplaced_before: Vec<char> = state.misplaced_at(1).to_vec();

    state.apply(&round("bathe yy__g"));

    for letter in forbidden_before {
        assert!(state.forbidden_letters().contains(&letter));
    }
    for letter in required_before {
        assert!(state.required_letters().contains(&letter));
    }
    for letter in misplaced_before {
        assert!(state.misplaced_at(1).contains(&letter));
    }
    // the position confirmed in round one is untouched by round two
    assert_eq!(state.known_correct()[0], Some('c'));
    assert_eq!(state.known_correct()[4], Some('e'));
}

#[test]
fn test_reapplying_the_same_round_changes_nothing() {
    let mut state = ConstraintState::new(5);
    state.apply(&round("cazes gy___"));
    let forbidden = state.forbidden_letters().to_vec();
    let required = state.required_letters().to_vec();

    state.apply(&round("cazes gy___"));
    assert_eq!(state.forbidden_letters(), forbidden);
    assert_eq!(state.required_letters(), required);
    assert_eq!(state.known_correct()[0], Some('c'));
}

#[test]
fn test_filter_preserves_dictionary_order() {
    let words = ["cider", "chair", "churn"];
    let mut state = ConstraintState::new(5);
    state.apply(&round("zzzzz _____"));

    assert_eq!(state.filter_candidates(&words), vec!["cider", "chair", "churn"]);
}

#[test]
fn test_filter_is_idempotent() {
    let words = ["chair", "churn", "cider"];
    let mut state = ConstraintState::new(5);
    state.apply(&round("abide _____"));

    let first = state.filter_candidates(&words);
    let second = state.filter_candidates(&words);
    assert_eq!(first, second);
}

#[test]
fn test_round_narrowing_to_a_single_candidate() {
    let words = ["chair", "churn", "cider"];
    let mut state = ConstraintState::new(5);
    // a, b, i, d and e are all absent: only "churn" survives
    state.apply(&round("abide _____"));

    assert_eq!(state.filter_candidates(&words), vec!["churn"]);
}

#[test]
fn test_contradictory_feedback_empties_the_candidate_set() {
    let words = ["chair", "churn", "cider"];
    let mut state = ConstraintState::new(5);
    // 'c' absent at position 0 forbids it globally; every word starts
    // with 'c', so nothing can survive.
    state.apply(&round("chair _y__g"));

    assert!(state.filter_candidates(&words).is_empty());
}

#[test]
fn test_words_of_the_wrong_length_never_match() {
    let state = ConstraintState::new(5);
    assert!(!state.matches("cat"));
    assert!(!state.matches("letters"));
    assert!(state.matches("chair"));
}
