//! Guided breathing timer
//!
//! The timer has no clock of its own. Whoever drives it calls [`BreathingTimer::tick`]
//! once per second (or once per test step), which keeps it usable from a
//! terminal loop and from unit tests alike.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
}

impl Phase {
    /// Length of the phase in ticks (seconds)
    pub fn duration(&self) -> u32 {
        match self {
            Phase::Inhale => 4,
            Phase::Hold => 4,
            Phase::Exhale => 6,
        }
    }

    pub fn next(&self) -> Phase {
        match self {
            Phase::Inhale => Phase::Hold,
            Phase::Hold => Phase::Exhale,
            Phase::Exhale => Phase::Inhale,
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Phase::Inhale => "Breathe in slowly...",
            Phase::Hold => "Hold your breath...",
            Phase::Exhale => "Breathe out gently...",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Inhale => "inhale",
            Phase::Hold => "hold",
            Phase::Exhale => "exhale",
        })
    }
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is paused; nothing changed
    Idle,
    /// Countdown decreased within the current phase
    Counted,
    /// Countdown ran out and the timer moved to this phase
    PhaseChanged(Phase),
}

pub struct BreathingTimer {
    phase: Phase,
    remaining: u32,
    active: bool,
    cycles: u32,
    on_complete: Option<Box<dyn FnMut() + Send>>,
}

impl fmt::Debug for BreathingTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreathingTimer")
            .field("phase", &self.phase)
            .field("remaining", &self.remaining)
            .field("active", &self.active)
            .field("cycles", &self.cycles)
            .finish()
    }
}

impl Default for BreathingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingTimer {
    /// A paused timer at the start of an inhale
    pub fn new() -> Self {
        BreathingTimer {
            phase: Phase::Inhale,
            remaining: Phase::Inhale.duration(),
            active: false,
            cycles: 0,
            on_complete: None,
        }
    }

    /// Register the callback run by [`BreathingTimer::complete`].
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left in the current phase
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Full inhale-hold-exhale cycles finished so far
    pub fn completed_cycles(&self) -> u32 {
        self.cycles
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Freeze the timer. Phase and countdown are kept for the next start.
    pub fn pause(&mut self) {
        self.active = false;
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.active {
            return TickOutcome::Idle;
        }

        if self.remaining > 1 {
            self.remaining -= 1;
            return TickOutcome::Counted;
        }

        if self.phase == Phase::Exhale {
            self.cycles += 1;
        }
        self.phase = self.phase.next();
        self.remaining = self.phase.duration();
        TickOutcome::PhaseChanged(self.phase)
    }

    /// Stop the exercise and run the completion callback.
    ///
    /// Only an active timer can complete; returns whether the callback (if
    /// any) was invoked.
    pub fn complete(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;

        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
        true
    }
}
