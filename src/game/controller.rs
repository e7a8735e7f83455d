//! Round controller
//!
//! Turns raw input tokens into state transitions and view updates. The
//! controller is the only mutator of its [`GameState`]; every dispatch runs to
//! completion, including any word source round-trip, before the next one.

use super::{SourceError, View, WordSource};
use crate::core::{GameState, Input, Status, Turn};
use tracing::{debug, info, instrument, warn};

/// Shown when the target is guessed
pub const WIN_MESSAGE: &str = "Correct word! You win the game!";

/// Start of the message shown when the rounds run out; the target follows
pub const LOSS_MESSAGE_PREFIX: &str = "You lost! The word was";

/// What a dispatched token did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not a game input, or the controller was busy or finished
    Ignored,
    /// A letter was added or removed
    Edited,
    /// Submit with an incomplete row; nothing happened
    Rejected,
    /// The row is not a recognised word
    InvalidWord,
    /// The guess was scored
    Scored(Turn),
}

/// Drives one round against a word source and a view
pub struct GameController<S, V> {
    state: GameState,
    source: S,
    view: V,
    busy: bool,
}

impl<S: WordSource, V: View> GameController<S, V> {
    /// Fetch today's word and set up a fresh round
    ///
    /// The loading indicator is visible while the word is fetched.
    ///
    /// # Errors
    ///
    /// Returns the source's error if the daily word cannot be fetched.
    #[instrument(skip_all)]
    pub async fn start(source: S, mut view: V) -> Result<Self, SourceError> {
        view.set_visible(true);
        let target = source.fetch_daily_word().await;
        view.set_visible(false);

        let target = target?;
        info!("Daily word loaded");
        debug!(target = %target, "Round target");

        Ok(Self {
            state: GameState::new(target),
            source,
            view,
            busy: false,
        })
    }

    /// Handle one raw input token
    ///
    /// Input is dropped, not queued, while a validation is pending or once the
    /// round is over.
    ///
    /// # Errors
    ///
    /// Returns the source's error if validating a guess fails.
    pub async fn dispatch(&mut self, token: &str) -> Result<Outcome, SourceError> {
        if self.busy || self.state.is_done() {
            return Ok(Outcome::Ignored);
        }

        match Input::classify(token) {
            Input::Letter(letter) => Ok(self.type_letter(letter)),
            Input::Delete => Ok(self.delete_letter()),
            Input::Submit => self.submit().await,
            Input::Ignored => Ok(Outcome::Ignored),
        }
    }

    fn type_letter(&mut self, letter: u8) -> Outcome {
        match self.state.append_letter(letter) {
            Some(cell) => {
                self.view.set_letter(cell.row, cell.col, cell.letter);
                Outcome::Edited
            }
            None => Outcome::Ignored,
        }
    }

    fn delete_letter(&mut self) -> Outcome {
        match self.state.delete_letter() {
            Some(cell) => {
                self.view.set_letter(cell.row, cell.col, cell.letter);
                Outcome::Edited
            }
            None => Outcome::Ignored,
        }
    }

    #[instrument(skip(self), fields(row = self.state.row(), guess = %self.state.buffer()))]
    async fn submit(&mut self) -> Result<Outcome, SourceError> {
        let Some(guess) = self.state.pending_guess() else {
            debug!("Incomplete row, submit ignored");
            return Ok(Outcome::Rejected);
        };

        self.busy = true;
        self.view.set_visible(true);
        let valid = self.source.validate(&guess).await;
        self.busy = false;
        self.view.set_visible(false);

        if !valid? {
            info!("Not a recognised word");
            self.view.mark_invalid(self.state.row());
            return Ok(Outcome::InvalidWord);
        }

        let Some(turn) = self.state.commit_guess() else {
            warn!("Validated guess could not be committed");
            return Ok(Outcome::Rejected);
        };

        for (col, &verdict) in turn.feedback.verdicts().iter().enumerate() {
            self.view.apply_verdict(turn.row, col, verdict);
        }

        match turn.status {
            Status::Won => {
                info!(rows = self.state.row(), "Round won");
                self.view.show(WIN_MESSAGE);
            }
            Status::Lost => {
                info!("Round lost");
                let message = format!("{LOSS_MESSAGE_PREFIX} {}", self.state.target());
                self.view.show(&message);
            }
            Status::Accepting => {
                debug!(feedback = %turn.feedback, "Guess scored");
            }
        }

        Ok(Outcome::Scored(turn))
    }

    /// True while a word source call is pending
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NUMBER_OF_ROUNDS, Verdict, Word};
    use crate::game::{LoadingIndicator, MessageBar, Renderer};
    use async_trait::async_trait;
    use std::cell::Cell;

    struct ScriptedSource {
        target: &'static str,
        words: &'static [&'static str],
        validations: Cell<usize>,
        offline: bool,
        unreachable: bool,
    }

    impl ScriptedSource {
        fn new(target: &'static str) -> Self {
            Self {
                target,
                words: &["CRANE", "BOXES", "SLATE", "ALLOW", "LLAMA"],
                validations: Cell::new(0),
                offline: false,
                unreachable: false,
            }
        }
    }

    #[async_trait(?Send)]
    impl WordSource for ScriptedSource {
        async fn fetch_daily_word(&self) -> Result<Word, SourceError> {
            if self.offline {
                return Err(SourceError::EmptyWordList);
            }
            Ok(Word::new(self.target)?)
        }

        async fn validate(&self, guess: &Word) -> Result<bool, SourceError> {
            self.validations.set(self.validations.get() + 1);
            if self.unreachable {
                return Err(SourceError::WordList(std::io::Error::other("connection reset")));
            }
            Ok(self.words.contains(&guess.text()))
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Letter(usize, usize, Option<char>),
        Verdict(usize, usize, Verdict),
        Invalid(usize),
        Loading(bool),
        Message(String),
    }

    #[derive(Default)]
    struct RecordingView {
        events: Vec<Event>,
    }

    impl RecordingView {
        fn messages(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Message(text) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Renderer for RecordingView {
        fn set_letter(&mut self, row: usize, col: usize, letter: Option<char>) {
            self.events.push(Event::Letter(row, col, letter));
        }

        fn apply_verdict(&mut self, row: usize, col: usize, verdict: Verdict) {
            self.events.push(Event::Verdict(row, col, verdict));
        }

        fn mark_invalid(&mut self, row: usize) {
            self.events.push(Event::Invalid(row));
        }
    }

    impl LoadingIndicator for RecordingView {
        fn set_visible(&mut self, visible: bool) {
            self.events.push(Event::Loading(visible));
        }
    }

    impl MessageBar for RecordingView {
        fn show(&mut self, text: &str) {
            self.events.push(Event::Message(text.to_string()));
        }
    }

    // Lets a test keep the event log when `start` fails and drops the view
    impl Renderer for &mut RecordingView {
        fn set_letter(&mut self, row: usize, col: usize, letter: Option<char>) {
            (**self).set_letter(row, col, letter);
        }

        fn apply_verdict(&mut self, row: usize, col: usize, verdict: Verdict) {
            (**self).apply_verdict(row, col, verdict);
        }

        fn mark_invalid(&mut self, row: usize) {
            (**self).mark_invalid(row);
        }
    }

    impl LoadingIndicator for &mut RecordingView {
        fn set_visible(&mut self, visible: bool) {
            (**self).set_visible(visible);
        }
    }

    impl MessageBar for &mut RecordingView {
        fn show(&mut self, text: &str) {
            (**self).show(text);
        }
    }

    async fn controller(target: &'static str) -> GameController<ScriptedSource, RecordingView> {
        let mut controller =
            GameController::start(ScriptedSource::new(target), RecordingView::default())
                .await
                .unwrap();
        controller.view_mut().events.clear();
        controller
    }

    async fn type_row(controller: &mut GameController<ScriptedSource, RecordingView>, word: &str) {
        for ch in word.chars() {
            controller.dispatch(&ch.to_string()).await.unwrap();
        }
    }

    #[tokio::test]
    async fn start_toggles_loading_around_fetch() {
        let controller =
            GameController::start(ScriptedSource::new("CRANE"), RecordingView::default())
                .await
                .unwrap();

        assert_eq!(
            controller.view().events,
            vec![Event::Loading(true), Event::Loading(false)]
        );
        assert_eq!(controller.state().target().text(), "CRANE");
    }

    #[tokio::test]
    async fn start_propagates_source_failure() {
        let mut source = ScriptedSource::new("CRANE");
        source.offline = true;

        let mut view = RecordingView::default();
        let result = GameController::start(source, &mut view).await;
        assert!(matches!(result, Err(SourceError::EmptyWordList)));
        assert_eq!(
            view.events,
            vec![Event::Loading(true), Event::Loading(false)]
        );
    }

    #[tokio::test]
    async fn validation_failure_clears_loading_and_busy() {
        let mut controller = controller("CRANE").await;
        type_row(&mut controller, "slate").await;
        controller.view_mut().events.clear();
        controller.source.unreachable = true;

        let result = controller.dispatch("Enter").await;
        assert!(matches!(result, Err(SourceError::WordList(_))));
        assert!(!controller.is_busy());
        assert_eq!(
            controller.view().events,
            vec![Event::Loading(true), Event::Loading(false)]
        );
        assert_eq!(controller.state().row(), 0);
        assert_eq!(controller.state().buffer(), "SLATE");

        // The same row can be submitted again once the source is back
        controller.source.unreachable = false;
        assert!(matches!(
            controller.dispatch("Enter").await.unwrap(),
            Outcome::Scored(_)
        ));
    }

    #[tokio::test]
    async fn letters_are_rendered() {
        let mut controller = controller("CRANE").await;

        assert_eq!(controller.dispatch("s").await.unwrap(), Outcome::Edited);
        assert_eq!(controller.dispatch("L").await.unwrap(), Outcome::Edited);
        assert_eq!(
            controller.dispatch("Backspace").await.unwrap(),
            Outcome::Edited
        );

        assert_eq!(
            controller.view().events,
            vec![
                Event::Letter(0, 0, Some('S')),
                Event::Letter(0, 1, Some('L')),
                Event::Letter(0, 1, None),
            ]
        );
        assert_eq!(controller.state().buffer(), "S");
    }

    #[tokio::test]
    async fn non_game_tokens_ignored() {
        let mut controller = controller("CRANE").await;

        for token in ["Shift", "1", "ab", "Backspace"] {
            assert_eq!(controller.dispatch(token).await.unwrap(), Outcome::Ignored);
        }
        assert!(controller.view().events.is_empty());
    }

    #[tokio::test]
    async fn short_submit_skips_validation() {
        let mut controller = controller("CRANE").await;
        type_row(&mut controller, "sla").await;
        controller.view_mut().events.clear();

        assert_eq!(
            controller.dispatch("Enter").await.unwrap(),
            Outcome::Rejected
        );
        assert_eq!(controller.source.validations.get(), 0);
        assert!(controller.view().events.is_empty());
        assert_eq!(controller.state().buffer(), "SLA");
    }

    #[tokio::test]
    async fn invalid_word_keeps_row() {
        let mut controller = controller("CRANE").await;
        type_row(&mut controller, "xxxxx").await;
        controller.view_mut().events.clear();

        assert_eq!(
            controller.dispatch("Enter").await.unwrap(),
            Outcome::InvalidWord
        );
        assert_eq!(
            controller.view().events,
            vec![Event::Loading(true), Event::Loading(false), Event::Invalid(0)]
        );
        assert_eq!(controller.state().row(), 0);
        assert_eq!(controller.state().buffer(), "XXXXX");
        assert!(!controller.is_busy());

        // The row can be corrected and resubmitted
        for _ in 0..5 {
            controller.dispatch("Backspace").await.unwrap();
        }
        type_row(&mut controller, "slate").await;
        assert!(matches!(
            controller.dispatch("Enter").await.unwrap(),
            Outcome::Scored(_)
        ));
        assert_eq!(controller.state().row(), 1);
    }

    #[tokio::test]
    async fn scored_guess_applies_verdicts_in_order() {
        let mut controller = controller("CRANE").await;
        type_row(&mut controller, "boxes").await;
        controller.view_mut().events.clear();

        let Outcome::Scored(turn) = controller.dispatch("Enter").await.unwrap() else {
            panic!("guess should be scored");
        };
        assert_eq!(turn.row, 0);
        assert_eq!(turn.status, Status::Accepting);

        assert_eq!(
            controller.view().events,
            vec![
                Event::Loading(true),
                Event::Loading(false),
                Event::Verdict(0, 0, Verdict::Absent),
                Event::Verdict(0, 1, Verdict::Absent),
                Event::Verdict(0, 2, Verdict::Absent),
                Event::Verdict(0, 3, Verdict::Present),
                Event::Verdict(0, 4, Verdict::Absent),
            ]
        );
        assert_eq!(controller.state().buffer(), "");
        assert!(controller.view().messages().is_empty());
    }

    #[tokio::test]
    async fn exact_guess_wins_and_freezes_input() {
        let mut controller = controller("CRANE").await;
        type_row(&mut controller, "crane").await;
        controller.dispatch("Enter").await.unwrap();

        assert_eq!(controller.state().status(), Status::Won);
        assert_eq!(controller.state().row(), 1);
        assert_eq!(controller.view().messages(), vec![WIN_MESSAGE]);

        let validations = controller.source.validations.get();
        controller.view_mut().events.clear();
        for token in ["a", "Backspace", "Enter"] {
            assert_eq!(controller.dispatch(token).await.unwrap(), Outcome::Ignored);
        }
        assert!(controller.view().events.is_empty());
        assert_eq!(controller.source.validations.get(), validations);
    }

    #[tokio::test]
    async fn six_misses_lose_and_reveal_target() {
        let mut controller = controller("CRANE").await;

        for _ in 0..NUMBER_OF_ROUNDS {
            type_row(&mut controller, "boxes").await;
            controller.dispatch("Enter").await.unwrap();
        }

        assert_eq!(controller.state().status(), Status::Lost);
        assert_eq!(controller.state().row(), NUMBER_OF_ROUNDS);
        assert_eq!(
            controller.view().messages(),
            vec!["You lost! The word was CRANE"]
        );
    }

    #[tokio::test]
    async fn overflow_overwrites_last_letter() {
        let mut controller = controller("CRANE").await;
        type_row(&mut controller, "slatex").await;

        assert_eq!(controller.state().buffer(), "SLATX");
        assert_eq!(
            controller.view().events.last(),
            Some(&Event::Letter(0, 4, Some('X')))
        );
    }
}
