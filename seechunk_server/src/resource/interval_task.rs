use crate::host::TaskLoop;

/// [`TaskLoop`] for a host that counts ticks itself.
pub struct IntervalTask {
    interval: Option<u32>,
    started_at: u64,
    current: u64,
}

impl IntervalTask {
    pub fn new() -> Self {
        Self {
            interval: None,
            started_at: 0,
            current: 0,
        }
    }

    pub fn interval(&self) -> Option<u32> {
        self.interval
    }

    /// Records the host tick and tells whether the task should run on it.
    pub fn record_next(&mut self, tick: u64) -> bool {
        self.current = tick;

        match self.interval {
            Some(interval) => {
                let elapsed = tick.saturating_sub(self.started_at);
                elapsed > 0 && elapsed % interval as u64 == 0
            },
            None => false,
        }
    }
}

impl Default for IntervalTask {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskLoop for IntervalTask {
    fn start_loop(&mut self, interval: u32) {
        self.interval = Some(interval.max(1));
        self.started_at = self.current;
    }

    fn stop_loop(&mut self) {
        self.interval = None;
    }

    fn is_looping(&self) -> bool {
        self.interval.is_some()
    }
}
