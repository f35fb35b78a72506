//! Instructor unlock gate.
//!
//! Facilitator-only content (model answers, rubric keywords) sits
//! behind a small state machine:
//!
//! ```text
//! Locked --correct code--> Unlocked(off) <--toggle--> Unlocked(on)
//!   ^                            |                        |
//!   +----------- lock -----------+------------------------+
//! ```
//!
//! Unlocking compares the submitted code against the configured secret
//! in constant time. With no secret configured, unlock is impossible
//! and an explicit message says so.

use serde::{Deserialize, Serialize};

/// Current gate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateState {
    Locked,
    Unlocked { enabled: bool },
}

/// Outcome of one unlock attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockAttempt {
    Unlocked,
    WrongCode,
    NotConfigured,
}

/// The instructor gate state machine.
///
/// Lives in session state; survives navigation within the session and
/// nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorGate {
    state: GateState,
    last_error: Option<String>,
}

impl Default for InstructorGate {
    fn default() -> Self {
        Self {
            state: GateState::Locked,
            last_error: None,
        }
    }
}

impl InstructorGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self.state, GateState::Unlocked { .. })
    }

    /// Whether facilitator content is currently visible.
    pub fn notes_visible(&self) -> bool {
        matches!(self.state, GateState::Unlocked { enabled: true })
    }

    /// The message recorded by the last failed unlock attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Submit an unlock code against the configured secret.
    ///
    /// A match moves Locked to Unlocked with the toggle off. A mismatch
    /// keeps the gate locked and records an error. Submitting while
    /// already unlocked is a no-op success.
    pub fn submit_code(&mut self, entered: &str, configured: Option<&str>) -> UnlockAttempt {
        if self.is_unlocked() {
            return UnlockAttempt::Unlocked;
        }

        let Some(secret) = configured else {
            self.last_error = Some("Unlock code not configured.".to_string());
            return UnlockAttempt::NotConfigured;
        };

        if constant_time_eq(entered.as_bytes(), secret.as_bytes()) {
            self.state = GateState::Unlocked { enabled: false };
            self.last_error = None;
            UnlockAttempt::Unlocked
        } else {
            self.state = GateState::Locked;
            self.last_error = Some("Incorrect unlock code.".to_string());
            UnlockAttempt::WrongCode
        }
    }

    /// Flip the facilitator-content toggle. Forced off while locked.
    pub fn set_enabled(&mut self, enabled: bool) {
        if let GateState::Unlocked { enabled: current } = &mut self.state {
            *current = enabled;
        }
    }

    /// The explicit Lock action: always succeeds, clears the toggle and
    /// any recorded error.
    pub fn lock(&mut self) {
        self.state = GateState::Locked;
        self.last_error = None;
    }
}

/// Compare two byte strings without short-circuiting on the first
/// mismatching byte. Length is still observable, as with any
/// compare-digest primitive.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_code_unlocks_with_toggle_off() {
        let mut gate = InstructorGate::new();
        let outcome = gate.submit_code("epi-2026", Some("epi-2026"));
        assert_eq!(outcome, UnlockAttempt::Unlocked);
        assert_eq!(gate.state(), GateState::Unlocked { enabled: false });
        assert!(!gate.notes_visible());
        assert!(gate.last_error().is_none());
    }

    #[test]
    fn test_wrong_code_stays_locked_and_records_error() {
        let mut gate = InstructorGate::new();
        let outcome = gate.submit_code("guess", Some("epi-2026"));
        assert_eq!(outcome, UnlockAttempt::WrongCode);
        assert_eq!(gate.state(), GateState::Locked);
        assert_eq!(gate.last_error(), Some("Incorrect unlock code."));
    }

    #[test]
    fn test_unconfigured_secret_disables_unlock() {
        let mut gate = InstructorGate::new();
        let outcome = gate.submit_code("anything", None);
        assert_eq!(outcome, UnlockAttempt::NotConfigured);
        assert_eq!(gate.state(), GateState::Locked);
        assert_eq!(gate.last_error(), Some("Unlock code not configured."));
    }

    #[test]
    fn test_toggle_only_while_unlocked() {
        let mut gate = InstructorGate::new();
        gate.set_enabled(true);
        assert!(!gate.notes_visible());

        gate.submit_code("s", Some("s"));
        gate.set_enabled(true);
        assert!(gate.notes_visible());
        gate.set_enabled(false);
        assert!(!gate.notes_visible());
    }

    #[test]
    fn test_lock_from_enabled_clears_toggle() {
        let mut gate = InstructorGate::new();
        gate.submit_code("s", Some("s"));
        gate.set_enabled(true);

        gate.lock();
        assert_eq!(gate.state(), GateState::Locked);

        // Re-unlocking starts with the toggle off again.
        gate.submit_code("s", Some("s"));
        assert!(!gate.notes_visible());
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
        assert!(constant_time_eq(b"", b""));
    }
}
