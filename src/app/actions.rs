use super::*;
use crate::data::load_sample_deck;
use crate::view_models::result_lines;

impl FlashcardApp {
    pub fn add_card(&mut self) {
        match self
            .engine
            .add_flashcard(&self.question_input, &self.answer_input)
        {
            Ok(()) => {
                self.question_input.clear();
                self.answer_input.clear();
                self.notice = Some(Notice::info("Flashcard added!"));
            }
            Err(err) => self.notice = Some(Notice::warning(err.to_string())),
        }
    }

    pub fn load_sample_deck(&mut self) {
        self.notice = Some(match load_sample_deck(&mut self.engine) {
            Ok(count) => Notice::info(format!("Added {count} sample flashcards.")),
            Err(err) => {
                log::warn!("Sample deck not loaded: {err}");
                Notice::error(format!("Could not load the sample deck: {err}"))
            }
        });
    }

    pub fn start_quiz(&mut self) {
        match self.engine.start_quiz() {
            Ok(_) => {
                self.user_answer_input.clear();
                self.last_result.clear();
                self.notice = None;
                self.state = AppState::Quiz;
            }
            Err(err) => self.notice = Some(Notice::error(err.to_string())),
        }
    }

    pub fn submit_answer(&mut self) {
        match self.engine.submit_answer(&self.user_answer_input) {
            Ok(outcome) => {
                self.last_result = result_lines(&outcome);
                self.notice = Some(Notice::for_outcome(&outcome));
                self.user_answer_input.clear();
            }
            Err(err) => self.notice = Some(Notice::warning(err.to_string())),
        }
    }

    /// Leaves the quiz view; the session keeps its question and score.
    pub fn back_to_deck(&mut self) {
        self.state = AppState::Deck;
        self.notice = None;
    }

    pub fn resume_quiz(&mut self) {
        if self.has_active_quiz() {
            self.state = AppState::Quiz;
            self.notice = None;
        } else {
            self.start_quiz();
        }
    }

    pub fn apply_config(&mut self, config: QuizConfig) {
        self.config = config;
        self.engine.set_config(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringMode;
    use crate::view_models::NoticeKind;

    fn app() -> FlashcardApp {
        FlashcardApp::with_engine(QuizEngine::with_seed(9), QuizConfig::default())
    }

    fn add(app: &mut FlashcardApp, q: &str, a: &str) {
        app.question_input = q.into();
        app.answer_input = a.into();
        app.add_card();
    }

    #[test]
    fn adding_a_card_clears_inputs_and_confirms() {
        let mut app = app();
        add(&mut app, " Q1 ", "A1");
        assert_eq!(app.engine.len(), 1);
        assert!(app.question_input.is_empty() && app.answer_input.is_empty());
        assert_eq!(app.notice, Some(Notice::info("Flashcard added!")));
    }

    #[test]
    fn empty_input_keeps_text_and_warns() {
        let mut app = app();
        add(&mut app, "Q1", "   ");
        assert!(app.engine.is_empty());
        assert_eq!(app.question_input, "Q1");
        let notice = app.notice.expect("notice set");
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.text, "Please enter both question and answer.");
    }

    #[test]
    fn start_without_cards_stays_on_deck() {
        let mut app = app();
        app.start_quiz();
        assert_eq!(app.state, AppState::Deck);
        assert_eq!(
            app.notice.map(|n| n.kind),
            Some(NoticeKind::Error)
        );
    }

    #[test]
    fn quiz_round_trip_updates_score_and_result_area() {
        let mut app = app();
        add(&mut app, "Q1", "A1");
        app.start_quiz();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.current_question(), Some("Q1"));

        app.user_answer_input = "whatever".into();
        app.submit_answer();
        app.user_answer_input = "A1".into();
        app.submit_answer();

        assert_eq!(app.score_board().score, 3);
        assert_eq!(app.score_board().streak, 2);
        assert_eq!(app.last_result, "Question: Q1\nYour Answer: A1\n");
        assert!(app.user_answer_input.is_empty());
        assert_eq!(app.notice, Some(Notice::info("Correct! Streak: 2")));
    }

    #[test]
    fn submit_before_start_warns() {
        let mut app = app();
        add(&mut app, "Q1", "A1");
        app.user_answer_input = "A1".into();
        app.submit_answer();
        assert_eq!(app.score_board().score, 0);
        assert_eq!(
            app.notice.map(|n| n.kind),
            Some(NoticeKind::Warning)
        );
    }

    #[test]
    fn strict_scoring_is_applied_to_engine() {
        let mut app = app();
        add(&mut app, "Q1", "A1");
        app.apply_config(QuizConfig {
            scoring: ScoringMode::ExactMatch,
            ..QuizConfig::default()
        });
        app.start_quiz();
        app.user_answer_input = "nope".into();
        app.submit_answer();
        assert_eq!(app.score_board().score, 0);
        assert_eq!(app.notice.map(|n| n.kind), Some(NoticeKind::Warning));
    }

    #[test]
    fn leaving_and_resuming_keeps_session() {
        let mut app = app();
        add(&mut app, "Q1", "A1");
        app.start_quiz();
        app.submit_answer();
        app.back_to_deck();
        assert_eq!(app.state, AppState::Deck);
        app.resume_quiz();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.score_board().score, 1);
    }

    #[test]
    fn sample_deck_fills_engine() {
        let mut app = app();
        app.load_sample_deck();
        assert!(!app.engine.is_empty());
        assert_eq!(app.notice.map(|n| n.kind), Some(NoticeKind::Info));
    }
}
