use gloo_timers::callback::Interval;
use landing_fx::effects::{
    counter::{start_counter, CounterSink, TARGET_ATTRIBUTE, TICK_INTERVAL_MS},
    tasks::TaskSet,
};
use web_sys::Element;

const STARTED_ATTRIBUTE: &str = "data-counter-started";

/// Running counter intervals. Dropping the registry clears them all.
pub type CounterRegistry = TaskSet<Interval>;

struct CounterElement(Element);

impl CounterSink for CounterElement {
    fn target(&self) -> Option<String> {
        self.0.get_attribute(TARGET_ATTRIBUTE)
    }

    fn is_started(&self) -> bool {
        self.0.has_attribute(STARTED_ATTRIBUTE)
    }

    fn mark_started(&self) {
        let _ = self.0.set_attribute(STARTED_ATTRIBUTE, "");
    }

    fn is_attached(&self) -> bool {
        self.0.is_connected()
    }

    fn display(&self, value: u64) {
        self.0.set_text_content(Some(&value.to_string()));
    }
}

/// Ramps `element` towards its `data-target`. Elements with a malformed
/// target are skipped.
pub fn start(counters: &CounterRegistry, element: Element, duration_ms: u32) {
    let started = start_counter(counters, CounterElement(element), duration_ms, |mut tick| {
        Interval::new(TICK_INTERVAL_MS, move || tick())
    });

    if let Err(error) = started {
        log::debug!("skipping counter: {error}");
    }
}
