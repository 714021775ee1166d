use crate::core::corrector::Corrector;
use crate::core::predictor::{Predictor, StaticPredictor};
use crate::core::tokenizer::{ends_with_whitespace, last_token};
use crate::core::types::{Suggestion, SuggestionKind};
use crate::error::{Result, SmartTypeError};
use log::{debug, warn};

/// The state behind a predictive text box: the input buffer, the current
/// suggestions and the transcript of submitted messages.
///
/// Every edit recomputes the suggestions synchronously.
pub struct KeyboardSession {
    predictor: Box<dyn Predictor>,
    corrector: Corrector,
    input: String,
    suggestions: Vec<Suggestion>,
    transcript: Vec<String>,
}

impl Default for KeyboardSession {
    fn default() -> Self {
        Self::new(Box::new(StaticPredictor::new()), Corrector::new())
    }
}

impl KeyboardSession {
    pub fn new(predictor: Box<dyn Predictor>, corrector: Corrector) -> Self {
        Self {
            predictor,
            corrector,
            input: String::new(),
            suggestions: Vec::new(),
            transcript: Vec::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Submitted messages, oldest first.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Decides which core function runs for `text`:
    /// trailing whitespace asks the predictor for next words, otherwise the
    /// trailing token is offered a correction if it has one.
    pub fn suggestions_for(&self, text: &str) -> Vec<Suggestion> {
        if ends_with_whitespace(text) {
            return self
                .predictor
                .predict(text)
                .into_iter()
                .map(|word| Suggestion::new(word, SuggestionKind::Prediction))
                .collect();
        }

        match last_token(text) {
            Some(word) => {
                let corrected = self.corrector.correct(word);
                if corrected != word {
                    vec![Suggestion::new(corrected, SuggestionKind::Correction)]
                } else {
                    vec![]
                }
            }
            None => vec![],
        }
    }

    pub fn set_input(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
        self.refresh();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.refresh();
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.refresh();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.suggestions.clear();
    }

    /// Accepts the suggestion at `index`. A prediction is appended after the
    /// trailing whitespace; a correction replaces the partial word. Either way
    /// a space follows, so next-word predictions appear straight away.
    pub fn apply_suggestion(&mut self, index: usize) -> Result<()> {
        let Some(chosen) = self.suggestions.get(index) else {
            return Err(SmartTypeError::NoSuchSuggestion {
                index,
                available: self.suggestions.len(),
            });
        };
        let word = chosen.word.clone();

        if !ends_with_whitespace(&self.input) {
            if let Some(partial) = last_token(&self.input) {
                let keep = self.input.len() - partial.len();
                self.input.truncate(keep);
            }
        }
        self.input.push_str(&word);
        self.input.push(' ');
        debug!("applied suggestion {:?}, input is now {:?}", word, self.input);

        self.refresh();
        Ok(())
    }

    /// Moves the trimmed input into the transcript. Blank input is ignored
    /// and `None` returned.
    pub fn submit(&mut self) -> Option<String> {
        let message = self.input.trim();
        if message.is_empty() {
            warn!("ignoring submit of blank input");
            return None;
        }

        let message = message.to_string();
        self.transcript.push(message.clone());
        self.clear();
        Some(message)
    }

    fn refresh(&mut self) {
        self.suggestions = self.suggestions_for(&self.input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::ContextModel;
    use crate::core::tables::FALLBACK_WORDS;

    fn words(session: &KeyboardSession) -> Vec<&str> {
        session.suggestions().iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn trailing_space_shows_predictions() {
        let mut session = KeyboardSession::default();
        session.set_input("i am ");
        assert_eq!(words(&session), vec!["a", "not", "going", "the", "so"]);
        assert!(session
            .suggestions()
            .iter()
            .all(|s| s.kind == SuggestionKind::Prediction));
    }

    #[test]
    fn partial_word_shows_only_a_differing_correction() {
        let mut session = KeyboardSession::default();
        session.set_input("teh");
        assert_eq!(words(&session), vec!["the"]);
        assert_eq!(session.suggestions()[0].kind, SuggestionKind::Correction);

        session.set_input("hello");
        assert!(session.suggestions().is_empty());

        session.set_input("");
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn typing_recomputes_on_every_keystroke() {
        let mut session = KeyboardSession::default();
        for c in "going to".chars() {
            session.push_char(c);
        }
        assert!(session.suggestions().is_empty());

        session.push_char(' ');
        assert_eq!(words(&session), vec!["be", "the", "get", "have", "make"]);

        session.backspace();
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn unknown_bigram_with_space_falls_back() {
        let mut session = KeyboardSession::default();
        session.set_input("xyz abc ");
        assert_eq!(words(&session), FALLBACK_WORDS);
    }

    #[test]
    fn applying_a_correction_replaces_the_partial_word() {
        let mut session = KeyboardSession::default();
        session.set_input("i dont");
        session.apply_suggestion(0).unwrap();
        assert_eq!(session.input(), "i don't ");
        assert_eq!(words(&session), FALLBACK_WORDS);
    }

    #[test]
    fn applying_a_correction_keeps_earlier_spacing() {
        let mut session = KeyboardSession::default();
        session.set_input(" i  dont");
        session.apply_suggestion(0).unwrap();
        assert_eq!(session.input(), " i  don't ");

        session.set_input("i\tam  ");
        session.apply_suggestion(0).unwrap();
        assert_eq!(session.input(), "i\tam  a ");
    }

    #[test]
    fn applying_a_prediction_appends_the_word() {
        let mut session = KeyboardSession::default();
        session.set_input("I am ");
        session.apply_suggestion(2).unwrap();
        assert_eq!(session.input(), "I am going ");
    }

    #[test]
    fn applying_a_missing_suggestion_fails() {
        let mut session = KeyboardSession::default();
        session.set_input("hello");
        let err = session.apply_suggestion(0).unwrap_err();
        assert!(matches!(
            err,
            SmartTypeError::NoSuchSuggestion { index: 0, available: 0 }
        ));
        assert_eq!(session.input(), "hello");
    }

    #[test]
    fn submit_appends_trimmed_text_and_resets() {
        let mut session = KeyboardSession::default();
        session.set_input("  thank you ");
        assert_eq!(session.submit().as_deref(), Some("thank you"));
        assert_eq!(session.input(), "");
        assert!(session.suggestions().is_empty());

        session.set_input("second");
        session.submit();
        assert_eq!(session.transcript(), ["thank you", "second"]);
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut session = KeyboardSession::default();
        session.set_input(" \t ");
        assert_eq!(session.submit(), None);
        assert!(session.transcript().is_empty());
        assert_eq!(session.input(), " \t ");
    }

    #[test]
    fn trained_predictor_can_back_the_session() {
        let mut session =
            KeyboardSession::new(Box::new(ContextModel::seeded(5)), Corrector::new());
        session.set_input("need to ");
        assert_eq!(words(&session), vec!["finish", "get"]);
    }
}
