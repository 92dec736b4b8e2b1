use rand::Rng;

use crate::models::{
    Difficulty, Exercise, GuessError, GuessOutcome, History, HistoryEntry, Operation,
};
use crate::store::ScoreStore;

pub const SCORE_KEY: &str = "score";
pub const POINTS_PER_CORRECT: u32 = 10;

/// Read-only projection handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    pub a: i32,
    pub b: i32,
    pub operation: Option<Operation>,
    pub difficulty: Difficulty,
    pub score: u32,
    pub history: Vec<HistoryEntry>,
}

pub struct QuizEngine<R: Rng, S: ScoreStore> {
    rng: R,
    store: S,
    difficulty: Difficulty,
    exercise: Exercise,
    score: u32,
    history: History,
}

impl<R: Rng, S: ScoreStore> QuizEngine<R, S> {
    /// Loads the saved score and deals the first exercise.
    pub fn new(mut rng: R, store: S, difficulty: Difficulty) -> Self {
        let score = match store.get(SCORE_KEY) {
            Ok(saved) => saved.unwrap_or(0),
            Err(e) => {
                log::warn!("Could not load score, starting from 0: {}", e);
                0
            }
        };
        let exercise = deal(&mut rng, difficulty);

        Self {
            rng,
            store,
            difficulty,
            exercise,
            score,
            history: History::new(),
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.new_exercise();
    }

    pub fn new_exercise(&mut self) {
        self.exercise = deal(&mut self.rng, self.difficulty);
        let (a, b) = self.exercise.operands();
        log::debug!("New {} exercise: {} ? {}", self.difficulty.as_str(), a, b);
    }

    pub fn select_operation(&mut self, operation: Operation) {
        self.exercise.select(operation);
    }

    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        let expected = self.exercise.expected().ok_or(GuessError::NoOperationSelected)?;

        let raw = raw.trim();
        if raw.is_empty() {
            return Err(GuessError::EmptyInput);
        }
        let guess: i32 = raw
            .parse()
            .map_err(|_| GuessError::InvalidFormat(raw.to_string()))?;

        self.record(expected);

        if guess == expected {
            self.score = self.score.saturating_add(POINTS_PER_CORRECT);
            log::debug!("Correct answer {}, score now {}", expected, self.score);
            self.save();
            Ok(GuessOutcome::Correct(expected))
        } else {
            log::debug!("Guessed {}, expected {}", guess, expected);
            Ok(GuessOutcome::Incorrect(expected))
        }
    }

    /// Shows the result of the selected operation without scoring it.
    pub fn reveal(&mut self) -> Result<i32, GuessError> {
        let expected = self.exercise.expected().ok_or(GuessError::NoOperationSelected)?;
        self.record(expected);
        Ok(expected)
    }

    pub fn reset_score(&mut self) {
        log::debug!("Score reset, dropping {} history entries", self.history.len());
        self.score = 0;
        self.history.clear();
        self.save();
        self.new_exercise();
    }

    /// Session pause boundary.
    pub fn suspend(&mut self) {
        self.save();
    }

    pub fn current_state(&self) -> QuizState {
        let (a, b) = self.exercise.operands();
        QuizState {
            a,
            b,
            operation: self.exercise.operation(),
            difficulty: self.difficulty,
            score: self.score,
            history: self.history.entries().to_vec(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn record(&mut self, result: i32) {
        if let Exercise::Selected { a, b, operation } = self.exercise {
            self.history
                .push(HistoryEntry::new(a, operation.symbol(), b, result));
        }
    }

    fn save(&mut self) {
        if let Err(e) = self.store.put(SCORE_KEY, self.score) {
            log::warn!("Could not save score: {}", e);
        }
    }

    #[cfg(test)]
    pub(crate) fn force_exercise(&mut self, a: i32, b: i32) {
        self.exercise = Exercise::new(a, b);
    }
}

fn deal<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Exercise {
    let (min, max) = difficulty.bounds();
    Exercise::new(min + rng.gen_range(0..=max - min), min + rng.gen_range(0..=max - min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine(difficulty: Difficulty) -> QuizEngine<StdRng, MemoryStore> {
        QuizEngine::new(StdRng::seed_from_u64(7), MemoryStore::new(), difficulty)
    }

    struct BrokenStore;

    impl ScoreStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<u32>, StoreError> {
            Err(StoreError::NoConfigDir)
        }

        fn put(&mut self, _key: &str, _value: u32) -> Result<(), StoreError> {
            Err(StoreError::NoConfigDir)
        }
    }

    #[test]
    fn test_medium_subtract_example() {
        let mut quiz = engine(Difficulty::Medium);
        quiz.force_exercise(500, 200);
        quiz.select_operation(Operation::Subtract);

        assert_eq!(quiz.submit_guess("300"), Ok(GuessOutcome::Correct(300)));
        let state = quiz.current_state();
        assert_eq!(state.score, 10);
        assert_eq!(state.history[0], HistoryEntry::new(500, "-", 200, 300));
        assert_eq!(quiz.store().get(SCORE_KEY).unwrap(), Some(10));
    }

    #[test]
    fn test_invalid_format_leaves_state() {
        let mut quiz = engine(Difficulty::Medium);
        quiz.force_exercise(500, 200);
        quiz.select_operation(Operation::Subtract);
        let before = quiz.current_state();

        assert_eq!(
            quiz.submit_guess("abc"),
            Err(GuessError::InvalidFormat("abc".to_string()))
        );
        assert_eq!(quiz.current_state(), before);
    }

    #[test]
    fn test_no_operation_selected() {
        let mut quiz = engine(Difficulty::Easy);
        assert_eq!(quiz.submit_guess("1"), Err(GuessError::NoOperationSelected));
        assert!(quiz.current_state().history.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let mut quiz = engine(Difficulty::Easy);
        quiz.select_operation(Operation::Add);
        assert_eq!(quiz.submit_guess(""), Err(GuessError::EmptyInput));
        assert_eq!(quiz.submit_guess("   "), Err(GuessError::EmptyInput));
        assert_eq!(quiz.score(), 0);
        assert!(quiz.current_state().history.is_empty());
    }

    #[test]
    fn test_negative_guess_is_accepted() {
        let mut quiz = engine(Difficulty::Easy);
        quiz.force_exercise(11, 99);
        quiz.select_operation(Operation::Subtract);
        assert_eq!(quiz.submit_guess(" -88 "), Ok(GuessOutcome::Correct(-88)));
    }

    #[test]
    fn test_incorrect_still_recorded() {
        let mut quiz = engine(Difficulty::Easy);
        quiz.force_exercise(12, 3);
        quiz.select_operation(Operation::Multiply);

        assert_eq!(quiz.submit_guess("35"), Ok(GuessOutcome::Incorrect(36)));
        let state = quiz.current_state();
        assert_eq!(state.score, 0);
        assert_eq!(state.history, vec![HistoryEntry::new(12, "×", 3, 36)]);
    }

    #[test]
    fn test_regrading_scores_again() {
        let mut quiz = engine(Difficulty::Easy);
        quiz.force_exercise(20, 30);
        quiz.select_operation(Operation::Add);

        quiz.submit_guess("50").unwrap();
        quiz.submit_guess("50").unwrap();
        assert_eq!(quiz.score(), 20);
        assert_eq!(quiz.current_state().history.len(), 2);
    }

    #[test]
    fn test_new_exercise_clears_operation() {
        let mut quiz = engine(Difficulty::Hard);
        quiz.select_operation(Operation::Add);
        quiz.new_exercise();
        assert_eq!(quiz.current_state().operation, None);
        assert_eq!(quiz.submit_guess("1"), Err(GuessError::NoOperationSelected));
    }

    #[test]
    fn test_set_difficulty_deals_in_new_range() {
        let mut quiz = engine(Difficulty::Easy);
        quiz.select_operation(Operation::Add);
        quiz.set_difficulty(Difficulty::Hard);

        let state = quiz.current_state();
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.operation, None);
        assert!((1111..=9999).contains(&state.a));
        assert!((1111..=9999).contains(&state.b));
    }

    #[test]
    fn test_reset_score() {
        let mut quiz = QuizEngine::new(
            StdRng::seed_from_u64(1),
            MemoryStore::with(SCORE_KEY, 90),
            Difficulty::Medium,
        );
        assert_eq!(quiz.score(), 90);
        quiz.select_operation(Operation::Add);
        quiz.reveal().unwrap();

        quiz.reset_score();
        let state = quiz.current_state();
        assert_eq!(state.score, 0);
        assert!(state.history.is_empty());
        assert_eq!(state.operation, None);
        assert_eq!(quiz.store().get(SCORE_KEY).unwrap(), Some(0));
    }

    #[test]
    fn test_reveal_records_without_scoring() {
        let mut quiz = engine(Difficulty::Easy);
        assert_eq!(quiz.reveal(), Err(GuessError::NoOperationSelected));

        quiz.force_exercise(40, 2);
        quiz.select_operation(Operation::Multiply);
        assert_eq!(quiz.reveal(), Ok(80));
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.current_state().history[0].to_string(), "40 × 2 = 80");
    }

    #[test]
    fn test_history_evicts_oldest_attempt() {
        let mut quiz = engine(Difficulty::Easy);
        for n in 0..6 {
            quiz.force_exercise(11 + n, 11);
            quiz.select_operation(Operation::Add);
            quiz.submit_guess("0").unwrap();
        }
        let history = quiz.current_state().history;
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].a, 16);
        assert_eq!(history[4].a, 12);
    }

    #[test]
    fn test_score_saturates_at_max() {
        let mut quiz = QuizEngine::new(
            StdRng::seed_from_u64(9),
            MemoryStore::with(SCORE_KEY, u32::MAX - 5),
            Difficulty::Easy,
        );
        quiz.force_exercise(11, 11);
        quiz.select_operation(Operation::Add);

        assert_eq!(quiz.submit_guess("22"), Ok(GuessOutcome::Correct(22)));
        assert_eq!(quiz.score(), u32::MAX);
        assert_eq!(quiz.store().get(SCORE_KEY).unwrap(), Some(u32::MAX));
    }

    #[test]
    fn test_suspend_saves_score() {
        let mut quiz = QuizEngine::new(
            StdRng::seed_from_u64(3),
            MemoryStore::with(SCORE_KEY, 40),
            Difficulty::Easy,
        );
        quiz.suspend();
        assert_eq!(quiz.store().get(SCORE_KEY).unwrap(), Some(40));
    }

    #[test]
    fn test_broken_store_starts_at_zero() {
        let mut quiz = QuizEngine::new(StdRng::seed_from_u64(5), BrokenStore, Difficulty::Easy);
        assert_eq!(quiz.score(), 0);
        quiz.force_exercise(11, 11);
        quiz.select_operation(Operation::Add);
        assert_eq!(quiz.submit_guess("22"), Ok(GuessOutcome::Correct(22)));
        assert_eq!(quiz.score(), 10);
    }

    fn any_difficulty() -> impl Strategy<Value = Difficulty> {
        prop_oneof![
            Just(Difficulty::Easy),
            Just(Difficulty::Medium),
            Just(Difficulty::Hard),
        ]
    }

    fn any_operation() -> impl Strategy<Value = Operation> {
        prop_oneof![
            Just(Operation::Add),
            Just(Operation::Subtract),
            Just(Operation::Multiply),
        ]
    }

    proptest! {
        #[test]
        fn prop_operands_in_range(seed in any::<u64>(), difficulty in any_difficulty()) {
            let mut quiz = QuizEngine::new(StdRng::seed_from_u64(seed), MemoryStore::new(), difficulty);
            let (min, max) = difficulty.bounds();
            for _ in 0..50 {
                quiz.new_exercise();
                let state = quiz.current_state();
                prop_assert!((min..=max).contains(&state.a));
                prop_assert!((min..=max).contains(&state.b));
            }
        }

        #[test]
        fn prop_correct_answer_adds_ten(
            seed in any::<u64>(),
            difficulty in any_difficulty(),
            operation in any_operation(),
        ) {
            let mut quiz = QuizEngine::new(StdRng::seed_from_u64(seed), MemoryStore::new(), difficulty);
            quiz.select_operation(operation);
            let state = quiz.current_state();
            let expected = operation.apply(state.a, state.b);

            let outcome = quiz.submit_guess(&expected.to_string());
            prop_assert_eq!(outcome, Ok(GuessOutcome::Correct(expected)));
            prop_assert_eq!(quiz.score(), state.score + POINTS_PER_CORRECT);
        }

        #[test]
        fn prop_reset_always_clears(seed in any::<u64>(), rounds in 0usize..12) {
            let mut quiz = QuizEngine::new(StdRng::seed_from_u64(seed), MemoryStore::new(), Difficulty::Easy);
            for _ in 0..rounds {
                quiz.select_operation(Operation::Add);
                let state = quiz.current_state();
                quiz.submit_guess(&(state.a + state.b).to_string()).unwrap();
                quiz.new_exercise();
            }
            quiz.reset_score();
            let state = quiz.current_state();
            prop_assert_eq!(state.score, 0);
            prop_assert!(state.history.is_empty());
        }
    }
}
