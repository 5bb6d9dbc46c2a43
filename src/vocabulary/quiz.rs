//! Multiple-choice question generation.
//!
//! The distractor pool is sampled without replacement and the final
//! option order uses `rand`'s Fisher–Yates shuffle. Sorting by a random
//! comparator is biased and deliberately avoided here.

use rand::seq::SliceRandom;
use rand::Rng;

use super::models::{QuizQuestion, VocabularyEntry};

/// Number of options a full question carries.
pub const OPTION_COUNT: usize = 4;

/// Minimum qualifying entries (non-empty definition) for a round.
pub const MIN_QUIZ_ENTRIES: usize = 4;

/// Generate one question from the vocabulary, or `None` when fewer than
/// [`MIN_QUIZ_ENTRIES`] entries carry a definition. `None` is a
/// legitimate empty state, not an error.
///
/// All options are pairwise distinct and include the correct definition
/// exactly once. When duplicate definitions shrink the distractor pool,
/// the question may carry fewer than [`OPTION_COUNT`] options; callers
/// must tolerate that.
pub fn generate_question<R: Rng>(
    vocabulary: &[VocabularyEntry],
    rng: &mut R,
) -> Option<QuizQuestion> {
    let qualifying: Vec<&VocabularyEntry> = vocabulary
        .iter()
        .filter(|entry| entry.has_definition())
        .collect();
    if qualifying.len() < MIN_QUIZ_ENTRIES {
        return None;
    }

    let correct_index = rng.gen_range(0..qualifying.len());
    let correct = qualifying[correct_index];
    let correct_definition = correct.definition.clone()?;

    let mut options = vec![correct_definition];
    let mut pool: Vec<&VocabularyEntry> = qualifying
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != correct_index)
        .map(|(_, entry)| *entry)
        .collect();

    // Sample without replacement, skipping definitions already chosen.
    while options.len() < OPTION_COUNT && !pool.is_empty() {
        let pick = rng.gen_range(0..pool.len());
        let candidate = pool.swap_remove(pick);
        if let Some(definition) = candidate.definition.as_deref() {
            if !options.iter().any(|option| option == definition) {
                options.push(definition.to_string());
            }
        }
    }

    options.shuffle(rng);

    Some(QuizQuestion {
        correct: correct.clone(),
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn entry(word: &str, definition: &str) -> VocabularyEntry {
        VocabularyEntry::with_definition(word, definition)
    }

    fn animals() -> Vec<VocabularyEntry> {
        vec![
            entry("cat", "a small domesticated animal"),
            entry("dog", "a domesticated canine"),
            entry("fish", "an aquatic animal"),
            entry("bird", "a flying animal"),
        ]
    }

    #[test]
    fn test_no_question_under_four_qualifying_entries() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut vocabulary = animals();
        vocabulary.pop();
        assert!(generate_question(&vocabulary, &mut rng).is_none());

        // Entries without a definition do not count towards the minimum.
        vocabulary.push(VocabularyEntry::new("ghost"));
        assert!(generate_question(&vocabulary, &mut rng).is_none());
    }

    #[test]
    fn test_four_distinct_options_including_correct() {
        let mut rng = StdRng::seed_from_u64(2);
        let vocabulary = animals();

        for _ in 0..100 {
            let question = generate_question(&vocabulary, &mut rng).unwrap();
            assert_eq!(question.options.len(), OPTION_COUNT);
            let correct_definition = question.correct.definition.as_deref().unwrap();
            assert_eq!(
                question
                    .options
                    .iter()
                    .filter(|o| o.as_str() == correct_definition)
                    .count(),
                1
            );
            for (i, option) in question.options.iter().enumerate() {
                assert!(!question.options[i + 1..].contains(option));
            }
        }
    }

    #[test]
    fn test_four_entry_vocabulary_uses_every_definition() {
        let mut rng = StdRng::seed_from_u64(3);
        let vocabulary = animals();
        let question = generate_question(&vocabulary, &mut rng).unwrap();
        for entry in &vocabulary {
            let definition = entry.definition.as_deref().unwrap();
            assert!(question.options.iter().any(|o| o == definition));
        }
    }

    #[test]
    fn test_undefined_entries_never_selected_as_correct() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut vocabulary = animals();
        vocabulary.push(VocabularyEntry::new("blank"));
        vocabulary.push(VocabularyEntry {
            word: "spaces".to_string(),
            pronunciation: None,
            definition: Some("   ".to_string()),
        });

        for _ in 0..200 {
            let question = generate_question(&vocabulary, &mut rng).unwrap();
            assert!(question.correct.has_definition());
        }
    }

    #[test]
    fn test_duplicate_definitions_yield_fewer_options() {
        let mut rng = StdRng::seed_from_u64(5);
        let vocabulary = vec![
            entry("one", "same thing"),
            entry("two", "same thing"),
            entry("three", "same thing"),
            entry("four", "same thing"),
        ];

        let question = generate_question(&vocabulary, &mut rng).unwrap();
        assert_eq!(question.options, vec!["same thing".to_string()]);
    }

    #[test]
    fn test_correct_selection_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(6);
        let vocabulary = vec![
            entry("a", "definition a"),
            entry("b", "definition b"),
            entry("c", "definition c"),
            entry("d", "definition d"),
            entry("e", "definition e"),
        ];

        let trials = 5000;
        let mut counts: HashMap<String, u32> = HashMap::new();
        for _ in 0..trials {
            let question = generate_question(&vocabulary, &mut rng).unwrap();
            *counts.entry(question.correct.word).or_insert(0) += 1;
        }

        // Expect ~1000 per word; allow a generous band for sampling noise.
        assert_eq!(counts.len(), vocabulary.len());
        for (word, count) in counts {
            assert!(
                (800..=1200).contains(&count),
                "word {word} selected {count} times out of {trials}"
            );
        }
    }
}
