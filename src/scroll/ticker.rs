/// One admitted display-refresh tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Host timestamp in milliseconds.
    pub now_ms: f64,
    /// Time since the previous admitted tick (0 for the first one).
    pub delta_ms: f64,
    /// 0-based tick counter.
    pub index: u64,
}

/// Display-refresh loop as a cooperative periodic task.
///
/// The host calls [`RafLoop::tick`] once per refresh; nothing reschedules itself, and a
/// stopped loop admits no further ticks.
#[derive(Clone, Debug, Default)]
pub struct RafLoop {
    running: bool,
    last_ms: Option<f64>,
    ticks: u64,
}

impl RafLoop {
    /// Create a stopped loop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start admitting ticks. Restarting resets the delta baseline.
    pub fn start(&mut self) {
        self.running = true;
        self.last_ms = None;
    }

    /// Stop admitting ticks.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Return `true` while ticks are admitted.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of ticks admitted so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Admit a tick at `now_ms`, or `None` when stopped.
    pub fn tick(&mut self, now_ms: f64) -> Option<Tick> {
        if !self.running {
            return None;
        }
        let delta_ms = self.last_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_ms = Some(now_ms);
        let tick = Tick {
            now_ms,
            delta_ms,
            index: self.ticks,
        };
        self.ticks += 1;
        Some(tick)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/ticker.rs"]
mod tests;
