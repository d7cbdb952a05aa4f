//! Lead capture form controller.
//!
//! Owns the form state and the current challenge, runs the submit checks in
//! their fixed order, and applies the recovery table after every outcome.
//!
//! ```text
//! Idle ──begin_submit──▶ (validate) ──fail──▶ Idle
//!                             │
//!                             └──ok──▶ Submitting ──finish_submit(Ok)──▶ Idle + reset
//!                                           │
//!                                           └──finish_submit(Err)──▶ Idle, data kept
//! ```

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::challenge::Challenge;
use crate::error::{ChallengeError, FormError, RemoteWriteError, SubmitError, ValidationError};
use crate::form::{FieldId, FormState};
use crate::notify::Notifier;
use crate::record::LeadRecord;
use crate::recovery::{Outcome, Recovery};
use crate::remote::LeadSink;
use crate::validate::{
    inline_email_error, is_selectable_meeting_date, is_valid_email, parse_challenge_answer,
};

/// Whether an insert is currently in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting edits and submissions.
    #[default]
    Idle,
    /// One insert in flight; further submissions are dropped.
    Submitting,
}

/// The contact form's state machine.
///
/// `N` receives toast notices; `R` draws challenge operands.
#[derive(Debug)]
pub struct LeadForm<N, R = StdRng> {
    state: FormState,
    challenge: Challenge,
    email_error: Option<&'static str>,
    phase: FormPhase,
    notifier: N,
    rng: R,
}

impl<N: Notifier> LeadForm<N, StdRng> {
    /// Mount a fresh form with an entropy-seeded challenge generator.
    pub fn new(notifier: N) -> Self {
        Self::with_rng(notifier, StdRng::from_entropy())
    }
}

impl<N: Notifier, R: Rng> LeadForm<N, R> {
    /// Mount a fresh form drawing challenges from `rng`.
    pub fn with_rng(notifier: N, mut rng: R) -> Self {
        let challenge = Challenge::generate(&mut rng);
        debug!("[leadform] mounted with new challenge");
        Self {
            state: FormState::default(),
            challenge,
            email_error: None,
            phase: FormPhase::Idle,
            notifier,
            rng,
        }
    }

    /// Replace the current challenge, e.g. to pin operands in a demo.
    pub fn with_challenge(mut self, challenge: Challenge) -> Self {
        self.challenge = challenge;
        self
    }

    /// Current field values.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Challenge currently on screen.
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// Inline hint under the email input, if the current value is malformed.
    pub fn email_error(&self) -> Option<&'static str> {
        self.email_error
    }

    /// Idle or submitting.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// True while an insert is in flight; the submit button is disabled.
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// The notice collaborator.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Store `value` in `field`. Email edits refresh the inline hint.
    pub fn update_field(&mut self, field: FieldId, value: impl Into<String>) {
        *self.state.slot_mut(field) = value.into();
        if field == FieldId::Email {
            self.email_error = inline_email_error(&self.state.email);
        }
        debug!(field = %field, "[leadform] field updated");
    }

    /// Select (or clear) the preferred meeting date.
    ///
    /// Days before `today` are refused and the previous selection is kept.
    pub fn select_meeting_date(
        &mut self,
        date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<(), FormError> {
        if let Some(date) = date
            && !is_selectable_meeting_date(date, today)
        {
            debug!(%date, %today, "[leadform] past meeting date refused");
            return Err(FormError::PastMeetingDate { date, today });
        }
        self.state.preferred_meeting_date = date;
        Ok(())
    }

    /// Draw a new challenge and clear the typed answer.
    pub fn regenerate_challenge(&mut self) {
        self.challenge = Challenge::generate(&mut self.rng);
        self.state.challenge_response.clear();
        debug!("[leadform] challenge regenerated");
    }

    /// Run the submit checks and, if they pass, enter `Submitting`.
    ///
    /// Returns the row to insert. The caller must hand the insert result to
    /// [`finish_submit`](Self::finish_submit) exactly once.
    pub fn begin_submit(&mut self) -> Result<LeadRecord, SubmitError> {
        if self.is_submitting() {
            debug!("[leadform] submit ignored: insert already in flight");
            return Err(SubmitError::InFlight);
        }

        if let Some(field) = self.state.first_missing() {
            return Err(self.reject(ValidationError::MissingField(field).into()));
        }

        if !is_valid_email(&self.state.email) {
            self.email_error = inline_email_error(&self.state.email);
            return Err(self.reject(ValidationError::InvalidEmail.into()));
        }

        // Checked against the challenge on screen right now, never a stored answer.
        match parse_challenge_answer(&self.state.challenge_response) {
            None => return Err(self.reject(ChallengeError::Missing.into())),
            Some(answer) if !self.challenge.accepts(answer) => {
                return Err(self.reject(ChallengeError::Mismatch.into()));
            }
            Some(_) => {}
        }

        self.phase = FormPhase::Submitting;
        info!("[leadform] checks passed, submitting lead");
        Ok(LeadRecord::from_form(&self.state))
    }

    /// Apply the insert result and leave `Submitting`.
    ///
    /// A result with no submission in flight is dropped untouched and
    /// reported as [`SubmitError::NotInFlight`].
    pub fn finish_submit(&mut self, result: Result<(), RemoteWriteError>) -> Result<(), SubmitError> {
        if !self.is_submitting() {
            warn!("[leadform] insert result arrived with no submission in flight, ignored");
            return Err(SubmitError::NotInFlight);
        }
        self.phase = FormPhase::Idle;

        match result {
            Ok(()) => {
                self.apply(Outcome::Delivered);
                info!("[leadform] lead delivered");
                Ok(())
            }
            Err(err) => Err(self.reject(err.into())),
        }
    }

    /// Validate, insert through `sink`, and apply the outcome.
    pub async fn submit<S: LeadSink + ?Sized>(&mut self, sink: &S) -> Result<(), SubmitError> {
        let record = self.begin_submit()?;
        let result = sink.insert(&record).await;
        self.finish_submit(result)
    }

    fn reject(&mut self, err: SubmitError) -> SubmitError {
        if let Some(outcome) = Outcome::from_error(&err) {
            match outcome {
                Outcome::RemoteFailure => {
                    warn!(outcome = outcome.as_label(), error = %err, "[leadform] submission failed")
                }
                _ => info!(outcome = outcome.as_label(), "[leadform] submission rejected"),
            }
            self.apply(outcome);
        }
        err
    }

    fn apply(&mut self, outcome: Outcome) {
        let rule = Recovery::for_outcome(outcome);
        if rule.reset_form {
            self.state = FormState::default();
            self.email_error = None;
        }
        if rule.regenerate_challenge {
            self.regenerate_challenge();
        }
        self.notifier.notify(Recovery::notice(outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{Notice, Severity};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Collect(RefCell<Vec<Notice>>);

    impl Notifier for Collect {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    fn form() -> LeadForm<Collect> {
        LeadForm::with_rng(Collect::default(), StdRng::seed_from_u64(7))
            .with_challenge(Challenge::new(3, 4))
    }

    fn fill(form: &mut LeadForm<Collect>) {
        form.update_field(FieldId::FirstName, "John");
        form.update_field(FieldId::LastName, "Smith");
        form.update_field(FieldId::Email, "john@example.com");
        form.update_field(FieldId::Message, "Need a new site");
        form.update_field(FieldId::CaptchaAnswer, "7");
    }

    #[test]
    fn mounts_idle_with_a_challenge() {
        let form = LeadForm::new(Collect::default());
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.state().is_blank());
        assert!((2..=20).contains(&form.challenge().expected_sum()));
    }

    #[test]
    fn email_hint_updates_while_typing() {
        let mut form = form();
        form.update_field(FieldId::Email, "john@");
        assert!(form.email_error().is_some());
        form.update_field(FieldId::Email, "john@example.com");
        assert!(form.email_error().is_none());
        form.update_field(FieldId::Email, "");
        assert!(form.email_error().is_none());
    }

    #[test]
    fn other_fields_leave_the_email_hint_alone() {
        let mut form = form();
        form.update_field(FieldId::Email, "john@");
        form.update_field(FieldId::FirstName, "John");
        assert!(form.email_error().is_some());
    }

    #[test]
    fn past_meeting_dates_are_refused() {
        let mut form = form();
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let next_week = NaiveDate::from_ymd_opt(2025, 6, 17).unwrap();
        let last_week = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();

        form.select_meeting_date(Some(next_week), today).unwrap();
        let err = form.select_meeting_date(Some(last_week), today).unwrap_err();
        assert_eq!(
            err,
            FormError::PastMeetingDate {
                date: last_week,
                today
            }
        );
        assert_eq!(form.state().preferred_meeting_date, Some(next_week));

        form.select_meeting_date(Some(today), today).unwrap();
        assert_eq!(form.state().preferred_meeting_date, Some(today));

        form.select_meeting_date(None, today).unwrap();
        assert_eq!(form.state().preferred_meeting_date, None);
    }

    #[test]
    fn regenerate_clears_the_answer() {
        let mut form = form();
        form.update_field(FieldId::CaptchaAnswer, "7");
        form.regenerate_challenge();
        assert!(form.state().challenge_response.is_empty());
    }

    #[test]
    fn begin_submit_enters_submitting_and_blocks_a_second_call() {
        let mut form = form();
        fill(&mut form);

        let record = form.begin_submit().unwrap();
        assert_eq!(record.first_name, "John");
        assert!(form.is_submitting());

        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));
        assert!(form.notifier().0.borrow().is_empty());
    }

    #[test]
    fn finish_submit_success_resets_and_notifies() {
        let mut form = form();
        fill(&mut form);
        form.begin_submit().unwrap();

        form.finish_submit(Ok(())).unwrap();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.state().is_blank());
        let notices = form.notifier().0.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Success);
    }

    #[test]
    fn stray_result_on_an_idle_form_changes_nothing() {
        let mut form = form();
        form.update_field(FieldId::FirstName, "John");
        form.update_field(FieldId::Message, "Need a new site");
        let before = form.state().clone();
        let challenge = *form.challenge();

        assert_eq!(form.finish_submit(Ok(())), Err(SubmitError::NotInFlight));
        assert_eq!(
            form.finish_submit(Err(RemoteWriteError::Transport("offline".into()))),
            Err(SubmitError::NotInFlight)
        );

        assert_eq!(form.state(), &before);
        assert_eq!(form.challenge(), &challenge);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.notifier().0.borrow().is_empty());
    }

    #[test]
    fn finish_submit_failure_keeps_everything() {
        let mut form = form();
        fill(&mut form);
        let before = form.state().clone();
        let challenge = *form.challenge();
        form.begin_submit().unwrap();

        let err = form
            .finish_submit(Err(RemoteWriteError::Transport("offline".into())))
            .unwrap_err();
        assert!(matches!(err, SubmitError::Remote(_)));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.state(), &before);
        assert_eq!(form.challenge(), &challenge);

        // The kept answer still matches; an immediate retry goes through.
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn non_numeric_answer_counts_as_a_challenge_failure() {
        let mut form = form();
        fill(&mut form);
        form.update_field(FieldId::CaptchaAnswer, "seven");
        assert_eq!(
            form.begin_submit(),
            Err(SubmitError::Challenge(ChallengeError::Missing))
        );
        assert!(form.state().challenge_response.is_empty());
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn invalid_email_on_submit_sets_the_inline_hint() {
        let mut form = form();
        fill(&mut form);
        // Bypass the keystroke path so only submit can set the hint.
        form.state.email = "not-an-email".into();
        form.email_error = None;

        assert_eq!(
            form.begin_submit(),
            Err(SubmitError::Validation(ValidationError::InvalidEmail))
        );
        assert!(form.email_error().is_some());
    }
}
