use crate::input::Command;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum TransitionState {
    #[default]
    Idle,
    Advancing,
    Retreating,
    Jumping,
}

impl TransitionState {
    fn for_command(cmd: &Command) -> Self {
        match cmd {
            Command::Advance => Self::Advancing,
            Command::Retreat => Self::Retreating,
            Command::Jump(_) => Self::Jumping,
        }
    }
}

/// Serializes access to the transition pipeline. Commands that arrive while
/// a transition is active are dropped, never queued.
#[derive(Clone, Debug, Default)]
pub struct TransitionLock {
    state: TransitionState,
    dropped: u64,
}

impl TransitionLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state != TransitionState::Idle
    }

    /// Number of commands dropped because a transition was in flight.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn try_admit(&mut self, cmd: &Command) -> bool {
        if self.is_locked() {
            self.dropped += 1;
            tracing::debug!(?cmd, state = ?self.state, "command dropped while locked");
            return false;
        }
        self.state = TransitionState::for_command(cmd);
        true
    }

    /// Unconditional; returns to `Idle` even when nothing was committed.
    pub fn release(&mut self) {
        self.state = TransitionState::Idle;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/lock.rs"]
mod tests;
