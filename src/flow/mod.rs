//! The flow state machine.
//!
//! [`FlowController`] owns the current [`Phase`], the working
//! [`Session`], and every transition between phases, including the
//! concurrent generation round and the fallback path. Views and
//! commands observe the phase; nothing else holds a writable copy of
//! any flow state.
//!
//! The machine is strict linear-with-backtrack:
//!
//! ```text
//! Idle -> Listening -> Building -> Reviewing <-> Theming
//!                                     |             |
//!                                     +--> Naming <-+
//!                                            |
//!                                          Saved
//! ```
//!
//! plus a reset edge from every phase back to `Idle`. No phase can be
//! reached except through its declared predecessor.

pub mod round;

pub use round::{GenerationRound, RoundOutcome, VARIATION_COUNT, run_round};

use std::sync::Arc;
use tracing::{debug, warn};

use crate::errors::FlowError;
use crate::fallback;
use crate::icon::Icon;
use crate::provider::GenerationProvider;
use crate::store::{Artifact, ArtifactStore};
use crate::theme::{self, Theme, ThemeCatalog};
use crate::transcript::TranscriptionSource;

/// Name used when the user leaves the naming field blank.
pub const DEFAULT_APP_NAME: &str = "My App";

/// User-visible notice recorded when every generation request failed.
pub const GENERATION_FAILED_NOTICE: &str = "Failed to generate apps. Please try again.";

/// Where the flow currently is. Exactly one phase is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Listening,
    Building,
    Reviewing,
    Theming,
    Naming,
    Saved,
}

/// One generated app variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// 1-based ordinal assigned at issue time, stable regardless of
    /// completion order.
    pub ordinal: u32,
    pub name: String,
    pub markup: String,
    pub theme: Theme,
}

impl Candidate {
    pub fn new(ordinal: u32, markup: String, theme: Theme) -> Self {
        Self {
            ordinal,
            name: format!("Variation {ordinal}"),
            markup,
            theme,
        }
    }

    /// Rewrite this candidate's markup for `theme`. Ordinal and name
    /// are preserved; markup and theme change together.
    fn retheme(&mut self, theme: &Theme) {
        self.markup = theme::apply_theme(&self.markup, theme);
        self.theme = theme.clone();
    }
}

/// Transient working state for one generate-review-theme-save cycle.
#[derive(Debug)]
pub struct Session {
    pub prompt: String,
    pub candidates: Vec<Candidate>,
    pub selected_index: usize,
    pub selected_theme: Theme,
    pub selected_icon: Option<Icon>,
    pub chosen_name: String,
    round_id: u64,
}

impl Session {
    fn new(round_id: u64, default_theme: Theme) -> Self {
        Self {
            prompt: String::new(),
            candidates: Vec::new(),
            selected_index: 0,
            selected_theme: default_theme,
            selected_icon: None,
            chosen_name: DEFAULT_APP_NAME.to_string(),
            round_id,
        }
    }

    /// Replace the candidate list and re-clamp the selection cursor.
    fn set_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        if self.selected_index >= self.candidates.len() {
            self.selected_index = 0;
        }
    }
}

/// The state machine driving one end-to-end flow.
///
/// Generic over its three collaborators so tests (and alternative
/// frontends) can substitute fakes at the seams.
pub struct FlowController<P, T, S> {
    phase: Phase,
    session: Session,
    provider: Arc<P>,
    transcript: T,
    store: S,
    catalog: ThemeCatalog,
    notice: Option<String>,
    round_counter: u64,
}

impl<P, T, S> FlowController<P, T, S>
where
    P: GenerationProvider + 'static,
    T: TranscriptionSource,
    S: ArtifactStore,
{
    pub fn new(provider: P, transcript: T, store: S, catalog: ThemeCatalog) -> Self {
        let default_theme = catalog.default_theme();
        Self {
            phase: Phase::Idle,
            session: Session::new(0, default_theme),
            provider: Arc::new(provider),
            transcript,
            store,
            catalog,
            notice: None,
            round_counter: 0,
        }
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.session.candidates
    }

    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.session.candidates.get(self.session.selected_index)
    }

    pub fn selected_theme(&self) -> &Theme {
        &self.session.selected_theme
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// Icon candidates for the currently selected theme.
    pub fn icon_candidates(&self) -> Vec<Icon> {
        Icon::candidates_for(&self.session.selected_theme)
    }

    /// Latest advisory notice (generation failure, persistence
    /// warning), if any. Cleared when a new session starts.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transcript_mut(&mut self) -> &mut T {
        &mut self.transcript
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// `Idle -> Listening`. Returns `Ok(false)` when transcription
    /// permission is denied; the flow stays idle and no error is
    /// raised.
    pub async fn start_listening(&mut self) -> Result<bool, FlowError> {
        self.require(Phase::Idle, "start listening")?;

        if !self.transcript.request_permission().await {
            debug!("transcription permission denied; staying idle");
            return Ok(false);
        }

        self.clear_session();
        self.notice = None;
        self.transcript.start();
        self.phase = Phase::Listening;
        Ok(true)
    }

    /// `Listening -> Building`, or straight back to `Idle` when the
    /// transcript came up empty (returns `Ok(false)`; no generation is
    /// attempted).
    pub fn stop_listening(&mut self) -> Result<bool, FlowError> {
        self.require(Phase::Listening, "stop listening")?;

        self.transcript.stop();
        let prompt = self.transcript.current_text().trim().to_string();
        if prompt.is_empty() {
            debug!("empty transcript; returning to idle");
            self.to_idle();
            return Ok(false);
        }

        self.session.prompt = prompt;
        self.phase = Phase::Building;
        Ok(true)
    }

    /// Issue the generation round for the current session. The round is
    /// tagged with the session's round id; [`Self::complete_round`]
    /// refuses results from a superseded session.
    pub fn begin_round(&mut self) -> Result<GenerationRound, FlowError> {
        self.require(Phase::Building, "generate")?;
        Ok(GenerationRound::new(
            self.session.round_id,
            &self.session.prompt,
        ))
    }

    /// `Building -> Reviewing`, regardless of success or failure: a
    /// total failure substitutes fallback candidates and records a
    /// notice, so reviewing is never empty. Results from a round whose
    /// session has been cancelled are discarded silently.
    pub fn complete_round(&mut self, outcome: RoundOutcome) {
        if self.phase != Phase::Building || outcome.round_id != self.session.round_id {
            debug!(
                round = outcome.round_id,
                "discarding results from a superseded round"
            );
            return;
        }

        if outcome.is_total_failure() {
            warn!("all generation requests failed; substituting placeholder candidates");
            self.session
                .set_candidates(fallback::fallback_candidates(&self.catalog));
            self.notice = Some(GENERATION_FAILED_NOTICE.to_string());
        } else {
            self.session.set_candidates(outcome.candidates);
        }

        self.session.selected_index = 0;
        self.phase = Phase::Reviewing;
    }

    /// Run the whole round in place: issue, await all three requests,
    /// apply. Convenience over [`Self::begin_round`] +
    /// [`Self::complete_round`] for callers with nothing to do in
    /// between.
    pub async fn build(&mut self) -> Result<(), FlowError> {
        let round = self.begin_round()?;
        let outcome = round::run_round(Arc::clone(&self.provider), &self.catalog, round).await;
        self.complete_round(outcome);
        Ok(())
    }

    /// Move the review cursor. Valid while reviewing or theming.
    pub fn select_variation(&mut self, index: usize) -> Result<(), FlowError> {
        self.require_one_of(&[Phase::Reviewing, Phase::Theming], "select variation")?;
        if index >= self.session.candidates.len() {
            return Err(FlowError::InvalidSelection {
                index,
                len: self.session.candidates.len(),
            });
        }
        self.session.selected_index = index;
        Ok(())
    }

    /// `Reviewing -> Theming`.
    pub fn customize(&mut self) -> Result<(), FlowError> {
        self.require(Phase::Reviewing, "customize")?;
        self.phase = Phase::Theming;
        Ok(())
    }

    /// `Theming -> Reviewing`. Round-trip with no data loss.
    pub fn back_to_review(&mut self) -> Result<(), FlowError> {
        self.require(Phase::Theming, "back")?;
        self.phase = Phase::Reviewing;
        Ok(())
    }

    /// Re-theme every candidate in the session in place. No provider
    /// round-trip: this is a pure markup rewrite, and all variants
    /// share the chosen theme once set.
    pub fn apply_theme(&mut self, theme: Theme) -> Result<(), FlowError> {
        self.require(Phase::Theming, "apply theme")?;
        for candidate in &mut self.session.candidates {
            candidate.retheme(&theme);
        }
        self.session.selected_theme = theme;
        Ok(())
    }

    /// `Reviewing/Theming -> Naming`. Assigns a default icon derived
    /// from the selected theme when none has been chosen yet.
    pub fn confirm_selection(&mut self) -> Result<(), FlowError> {
        self.require_one_of(&[Phase::Reviewing, Phase::Theming], "confirm selection")?;
        if self.session.selected_icon.is_none() {
            self.session.selected_icon = self.icon_candidates().into_iter().next();
        }
        self.phase = Phase::Naming;
        Ok(())
    }

    pub fn select_icon(&mut self, icon: Icon) -> Result<(), FlowError> {
        self.require(Phase::Naming, "select icon")?;
        self.session.selected_icon = Some(icon);
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), FlowError> {
        self.require(Phase::Naming, "set name")?;
        self.session.chosen_name = name.to_string();
        Ok(())
    }

    /// `Naming -> Saved`. Commits an [`Artifact`] built from the
    /// selected candidate and clears the session. A persistence failure
    /// is not fatal: the store keeps the in-memory copy for this run
    /// and a warning notice is recorded instead.
    pub fn save(&mut self) -> Result<Artifact, FlowError> {
        self.require(Phase::Naming, "save")?;

        let icon = self
            .session
            .selected_icon
            .clone()
            .ok_or(FlowError::NoIconSelected)?;
        let candidate = self.selected_candidate().ok_or(FlowError::InvalidSelection {
            index: self.session.selected_index,
            len: self.session.candidates.len(),
        })?;

        let trimmed = self.session.chosen_name.trim();
        let name = if trimmed.is_empty() {
            DEFAULT_APP_NAME
        } else {
            trimmed
        };

        let artifact = Artifact::new(name, &icon, &candidate.markup);
        if let Err(err) = self.store.append(artifact.clone()) {
            warn!(error = %err, "failed to persist the app list; keeping the in-memory copy");
            self.notice = Some(format!(
                "App saved for this session, but writing the app list failed: {err}"
            ));
        }

        self.clear_session();
        self.phase = Phase::Saved;
        Ok(artifact)
    }

    /// The any-phase edge back to `Idle`: stops transcription if it is
    /// running and discards the session without committing anything.
    pub fn reset(&mut self) {
        if self.phase == Phase::Listening {
            self.transcript.stop();
        }
        self.to_idle();
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn require(&self, expected: Phase, action: &'static str) -> Result<(), FlowError> {
        if self.phase != expected {
            return Err(FlowError::InvalidPhase {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }

    fn require_one_of(&self, expected: &[Phase], action: &'static str) -> Result<(), FlowError> {
        if !expected.contains(&self.phase) {
            return Err(FlowError::InvalidPhase {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }

    /// Replace the session with a fresh one under a new round id. Any
    /// in-flight round now fails the id check in `complete_round`.
    fn clear_session(&mut self) {
        self.round_counter += 1;
        self.session = Session::new(self.round_counter, self.catalog.default_theme());
    }

    fn to_idle(&mut self) {
        self.clear_session();
        self.notice = None;
        self.phase = Phase::Idle;
    }
}
