//! Auto-display timer: idle → pending → active → dismissed/completed
//!
//! Tick-driven: the host UI drives `tick()` from its own loop, the engine
//! never spawns threads. The one-shot delay must be cancelled on every exit
//! path (navigation, teardown, dismissal) so a stale fire can never reach a
//! context that is gone.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    /// Armed; fires when `remaining` ticks are exhausted.
    Pending { remaining: u32 },
    /// A flow is being shown; no re-arm until it ends.
    Active,
    Dismissed,
    Completed,
}

#[derive(Debug)]
pub struct AutoDisplay {
    state: TimerState,
    delay: u32,
}

impl AutoDisplay {
    pub fn new(delay_ticks: u32) -> Self {
        Self { state: TimerState::Idle, delay: delay_ticks.max(1) }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Arm the one-shot delay for the current context.
    pub fn arm(&mut self) {
        self.state = TimerState::Pending { remaining: self.delay };
    }

    /// Disarm on navigation or teardown. Clears any pending fire.
    pub fn cancel(&mut self) {
        self.state = TimerState::Idle;
    }

    /// Advance one tick. Returns true exactly when the delay expires; the
    /// caller then decides whether a flow activates.
    pub fn tick(&mut self) -> bool {
        if let TimerState::Pending { remaining } = self.state {
            let remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                self.state = TimerState::Idle;
                return true;
            }
            self.state = TimerState::Pending { remaining };
        }
        false
    }

    pub fn activated(&mut self) {
        self.state = TimerState::Active;
    }

    pub fn dismissed(&mut self) {
        self.state = TimerState::Dismissed;
    }

    pub fn completed(&mut self) {
        self.state = TimerState::Completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_delay() {
        let mut timer = AutoDisplay::new(2);
        timer.arm();
        assert!(!timer.tick());
        assert!(timer.tick());
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn cancel_prevents_stale_fire() {
        let mut timer = AutoDisplay::new(1);
        timer.arm();
        timer.cancel();
        assert!(!timer.tick());
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn zero_delay_still_takes_one_tick() {
        let mut timer = AutoDisplay::new(0);
        timer.arm();
        assert!(timer.tick());
    }

    #[test]
    fn terminal_states_do_not_tick() {
        let mut timer = AutoDisplay::new(1);
        timer.arm();
        timer.activated();
        assert!(!timer.tick());
        timer.dismissed();
        assert!(!timer.tick());
        assert_eq!(timer.state(), TimerState::Dismissed);
    }
}
