// Bootstrap lifecycle as a small state machine.
//
// Purpose
// - Name the states a bootstrap run moves through and the only legal moves between them.
//
// Responsibilities
// - Reject illegal transitions instead of silently accepting them.
// - Publish every accepted transition so observers (tests, logging) can follow a run.
//
// Boundaries
// - No knowledge of modules or artifacts. The bootstrapper drives the transitions.

use std::fmt;

use thiserror::Error;
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    Unstarted,
    Initializing,
    Ready,
    Running,
    Failed,
}

impl BootState {
    pub fn can_transition_to(self, next: BootState) -> bool {
        use BootState::*;
        matches!(
            (self, next),
            (Unstarted, Initializing)
                | (Initializing, Ready)
                | (Initializing, Failed)
                | (Ready, Running)
        )
    }

    /// `Running` is terminal from the bootstrapper's point of view: whatever the
    /// entry point does afterwards is not observed.
    pub fn is_terminal(self) -> bool {
        matches!(self, BootState::Running | BootState::Failed)
    }
}

impl fmt::Display for BootState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootState::Unstarted => "unstarted",
            BootState::Initializing => "initializing",
            BootState::Ready => "ready",
            BootState::Running => "running",
            BootState::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("illegal lifecycle transition: {from} -> {to}")]
pub struct IllegalTransition {
    pub from: BootState,
    pub to: BootState,
}

/// Room for every transition of one run, so a subscriber that has not been polled yet
/// still sees each of them.
const TRANSITION_BUFFER: usize = 8;

pub struct Lifecycle {
    state: BootState,
    transitions: broadcast::Sender<BootState>,
}

impl Lifecycle {
    pub fn new() -> Self {
        let (transitions, _) = broadcast::channel(TRANSITION_BUFFER);
        Self {
            state: BootState::Unstarted,
            transitions,
        }
    }

    pub fn current(&self) -> BootState {
        self.state
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BootState> {
        self.transitions.subscribe()
    }

    pub fn advance(&mut self, next: BootState) -> Result<(), IllegalTransition> {
        let from = self.state;
        if !from.can_transition_to(next) {
            return Err(IllegalTransition { from, to: next });
        }
        self.state = next;
        // Sending only fails when nobody subscribed.
        let _ = self.transitions.send(next);
        tracing::debug!(%from, to = %next, "lifecycle transition");
        Ok(())
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
