use gloo_timers::callback::Timeout;

/// Holds at most one pending callback; scheduling a new one cancels the old.
#[derive(Default)]
pub struct Debouncer {
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(Timeout::new(delay_ms, callback));
    }

    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            let _ = timeout.cancel();
        }
    }
}
