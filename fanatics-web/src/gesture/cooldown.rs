//! Per-action cooldown timers
//!
//! Keeps one "last fired" timestamp per action. Prevents a held posture
//! from spamming the same key every frame.

use super::types::{Action, ACTIONS};

/// Last-fired timestamps (seconds), `None` = never fired
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CooldownRegistry {
    last_fired: [Option<f64>; ACTIONS.len()],
}

impl CooldownRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `action` may fire at `now`
    pub fn is_ready(&self, action: Action, now: f64, cooldown: f64) -> bool {
        match self.last_fired[action.index()] {
            Some(last) => now - last >= cooldown,
            None => true,
        }
    }

    /// Fire if the cooldown has elapsed, recording `now` on success
    pub fn try_fire(&mut self, action: Action, now: f64, cooldown: f64) -> bool {
        if !self.is_ready(action, now, cooldown) {
            return false;
        }
        self.record(action, now);
        true
    }

    /// Record an emission without checking the gate
    pub fn record(&mut self, action: Action, now: f64) {
        self.last_fired[action.index()] = Some(now);
    }

    pub fn last_fired(&self, action: Action) -> Option<f64> {
        self.last_fired[action.index()]
    }

    pub fn clear(&mut self) {
        self.last_fired = [None; ACTIONS.len()];
    }
}
