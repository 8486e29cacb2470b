//! Session state machines for the two long-running operations: story
//! generation with its simulated progress clock, and audio playback.
//!
//! These hold no DOM handles and do no I/O; the components in
//! `crate::components` drive them from timer ticks and fetch results. Guards
//! here are what actually serialize competing commands; disabling the
//! triggering controls is presentation on top.

/// Interval between simulated progress ticks.
pub const PROGRESS_TICK_MS: u64 = 500;

/// Simulated progress never advances past this on its own; only a real
/// generation result pushes the bar to 100.
pub const PROGRESS_SIM_CEILING: f64 = 90.0;

/// Upper bound of the random per-tick increment.
pub const PROGRESS_MAX_STEP: f64 = 5.0;

/// How long the completed bar stays visible before the form resets.
pub const COMPLETED_LINGER_MS: u64 = 500;

/// Lifecycle of a single generation attempt. Progress lives in [0, 100] and
/// is monotonically non-decreasing between `begin` and `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GenerationState {
    generating: bool,
    progress: f64,
}

impl GenerationState {
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Starts a new attempt with the bar at zero. Refused while another
    /// attempt is in flight; only one generation runs per session.
    pub fn begin(&mut self) -> bool {
        if self.generating {
            return false;
        }
        self.generating = true;
        self.progress = 0.0;
        true
    }

    /// Advances the simulated bar by one tick. Increments stop once the
    /// ceiling is reached, so the bar stalls under 100 until the backend
    /// resolves. Ticks outside an attempt are ignored.
    pub fn tick(&mut self, step: f64) {
        if self.generating && self.progress < PROGRESS_SIM_CEILING {
            self.progress += step.clamp(0.0, PROGRESS_MAX_STEP);
        }
    }

    /// Forces the bar to 100 when the real result arrives. The caller must
    /// have cancelled the tick clock first so no stray tick lands afterwards.
    pub fn complete(&mut self) {
        if self.generating {
            self.progress = 100.0;
        }
    }

    pub fn reset(&mut self) {
        self.generating = false;
        self.progress = 0.0;
    }
}

/// Lifecycle of the single audio output. At most one story is in `Loading`
/// or `Playing` at any instant; errors pass through `Errored` and settle at
/// `Idle` once surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Loading(String),
    Playing(String),
    Errored,
}

impl PlaybackState {
    pub fn is_busy(&self) -> bool {
        matches!(self, PlaybackState::Loading(_) | PlaybackState::Playing(_))
    }

    pub fn story_id(&self) -> Option<&str> {
        match self {
            PlaybackState::Loading(id) | PlaybackState::Playing(id) => Some(id),
            _ => None,
        }
    }

    /// Claims the output for a story. Refused while another load or playback
    /// is active; the caller stops the current one first.
    pub fn begin(&mut self, story_id: String) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = PlaybackState::Loading(story_id);
        true
    }

    /// Audio is flowing for the story that was loading.
    pub fn started(&mut self) {
        if let PlaybackState::Loading(id) = self {
            *self = PlaybackState::Playing(std::mem::take(id));
        }
    }

    /// Returns the output to idle: natural end of playback or an explicit
    /// stop, e.g. before switching stories.
    pub fn stop(&mut self) {
        *self = PlaybackState::Idle;
    }

    pub fn fail(&mut self) {
        *self = PlaybackState::Errored;
    }

    /// An error has been surfaced; the output is usable again.
    pub fn settle(&mut self) {
        if *self == PlaybackState::Errored {
            *self = PlaybackState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_resets_on_begin() {
        let mut generation = GenerationState::default();
        assert!(generation.begin());
        assert_eq!(generation.progress(), 0.0);
        assert!(generation.is_generating());
    }

    #[test]
    fn test_begin_refused_while_generating() {
        let mut generation = GenerationState::default();
        assert!(generation.begin());
        generation.tick(3.0);
        assert!(!generation.begin());
        assert_eq!(generation.progress(), 3.0);
    }

    #[test]
    fn test_progress_is_monotonic_and_stays_under_100() {
        let mut generation = GenerationState::default();
        generation.begin();
        let mut previous = generation.progress();
        for _ in 0..1000 {
            generation.tick(PROGRESS_MAX_STEP);
            assert!(generation.progress() >= previous);
            previous = generation.progress();
        }
        // The clock stalls at the ceiling; one final step may overshoot it
        // but never reaches the completed value.
        assert!(generation.progress() >= PROGRESS_SIM_CEILING);
        assert!(generation.progress() < 100.0);
    }

    #[test]
    fn test_negative_or_oversized_steps_are_clamped() {
        let mut generation = GenerationState::default();
        generation.begin();
        generation.tick(-3.0);
        assert_eq!(generation.progress(), 0.0);
        generation.tick(50.0);
        assert_eq!(generation.progress(), PROGRESS_MAX_STEP);
    }

    #[test]
    fn test_ticks_outside_an_attempt_are_ignored() {
        let mut generation = GenerationState::default();
        generation.tick(5.0);
        assert_eq!(generation.progress(), 0.0);
        assert!(!generation.is_generating());
    }

    #[test]
    fn test_complete_forces_100_then_reset_clears() {
        let mut generation = GenerationState::default();
        generation.begin();
        generation.tick(4.0);
        generation.complete();
        assert_eq!(generation.progress(), 100.0);
        generation.reset();
        assert!(!generation.is_generating());
        assert_eq!(generation.progress(), 0.0);
    }

    #[test]
    fn test_playback_claims_one_story_at_a_time() {
        let mut playback = PlaybackState::default();
        assert!(playback.begin("a".to_string()));
        assert!(!playback.begin("b".to_string()));
        assert_eq!(playback.story_id(), Some("a"));

        playback.started();
        assert_eq!(playback, PlaybackState::Playing("a".to_string()));
        assert!(!playback.begin("b".to_string()));
    }

    #[test]
    fn test_stop_releases_the_output_for_the_next_story() {
        let mut playback = PlaybackState::default();
        playback.begin("a".to_string());
        playback.started();
        playback.stop();
        assert_eq!(playback, PlaybackState::Idle);
        assert!(playback.begin("b".to_string()));
        assert_eq!(playback.story_id(), Some("b"));
    }

    #[test]
    fn test_failure_passes_through_errored_to_idle() {
        let mut playback = PlaybackState::default();
        playback.begin("42".to_string());
        playback.fail();
        assert_eq!(playback, PlaybackState::Errored);
        assert!(!playback.is_busy());
        playback.settle();
        assert_eq!(playback, PlaybackState::Idle);
    }

    #[test]
    fn test_started_outside_loading_is_ignored() {
        let mut playback = PlaybackState::default();
        playback.started();
        assert_eq!(playback, PlaybackState::Idle);
        playback.fail();
        playback.started();
        assert_eq!(playback, PlaybackState::Errored);
    }
}
