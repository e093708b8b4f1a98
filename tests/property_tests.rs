//! Property tests for the pure core functions

use proptest::prelude::*;

use hit_and_blow::types::ALPHABET_SIZE;
use hit_and_blow::{check_guess, generate_answer, Tile};

fn tile_strategy() -> impl Strategy<Value = Tile> {
    prop::sample::select(Tile::ALL.to_vec())
}

fn sequence_strategy(length: usize) -> impl Strategy<Value = Vec<Tile>> {
    prop::collection::vec(tile_strategy(), length)
}

/// Guess/answer pairs of a shared random length
fn pair_strategy() -> impl Strategy<Value = (Vec<Tile>, Vec<Tile>)> {
    (1usize..=8).prop_flat_map(|length| (sequence_strategy(length), sequence_strategy(length)))
}

proptest! {
    #[test]
    fn hits_plus_blows_never_exceed_length((guess, answer) in pair_strategy()) {
        let score = check_guess(&guess, &answer).unwrap();
        prop_assert!((score.hits + score.blows) as usize <= guess.len());
    }

    #[test]
    fn guessing_the_answer_is_all_hits(answer in sequence_strategy(4)) {
        let score = check_guess(&answer, &answer).unwrap();
        prop_assert_eq!(score.hits, 4);
        prop_assert_eq!(score.blows, 0);
    }

    #[test]
    fn blow_counting_is_symmetric(
        guess in sequence_strategy(4),
        answer in sequence_strategy(4),
    ) {
        // Swapping guess and answer swaps the multiset roles but the
        // min-count total is unchanged
        let forward = check_guess(&guess, &answer).unwrap();
        let backward = check_guess(&answer, &guess).unwrap();
        prop_assert_eq!(forward.hits, backward.hits);
        prop_assert_eq!(forward.blows, backward.blows);
    }

    #[test]
    fn seeded_generation_is_deterministic(
        seed in "[a-z0-9-]{1,32}",
        length in 1usize..=8,
        allow_duplicates in any::<bool>(),
    ) {
        let a = generate_answer(length, allow_duplicates, Some(&seed)).unwrap();
        let b = generate_answer(length, allow_duplicates, Some(&seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn distinct_answers_without_duplicates(
        seed in "[a-z0-9-]{1,32}",
        length in 1usize..=ALPHABET_SIZE,
    ) {
        let answer = generate_answer(length, false, Some(&seed)).unwrap();
        prop_assert_eq!(answer.len(), length);
        let mut ids: Vec<usize> = answer.iter().map(|t| t.index()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), length);
    }
}
