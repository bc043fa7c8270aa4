use common::attempt::AttemptFlow;
use gloo_timers::callback::Timeout;

pub struct AttemptPage {
    /// `None` until the attempt is loaded.
    pub flow: Option<AttemptFlow>,
    pub loading: bool,
    /// Pending autosave; replacing or dropping it cancels the timer.
    pub debounce: Option<Timeout>,
    /// Answer submits in flight.
    pub in_flight: u32,
    pub finishing: bool,
}

impl AttemptPage {
    pub fn new() -> Self {
        Self {
            flow: None,
            loading: true,
            debounce: None,
            in_flight: 0,
            finishing: false,
        }
    }
}
