//! Stat counters that ramp from zero to their `data-target` value.

use super::tasks::TaskSet;
use crate::error::FxError;

pub const TICK_INTERVAL_MS: u32 = 16;
pub const DEFAULT_DURATION_MS: u32 = 2_000;
pub const TARGET_ATTRIBUTE: &str = "data-target";

/// One evaluation of a running counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u64),
    /// Terminal frame. Always carries the exact target.
    Finished(u64),
}

impl CounterFrame {
    pub fn value(self) -> u64 {
        match self {
            Self::Running(value) | Self::Finished(value) => value,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Linear ramp evaluated once per tick.
///
/// Each tick adds `target / steps` where `steps = duration / TICK_INTERVAL_MS`.
/// The first tick that reaches the target yields [`CounterFrame::Finished`];
/// every tick after that yields `None` so the driver can drop its timer.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        let steps = (f64::from(duration_ms) / f64::from(TICK_INTERVAL_MS)).max(1.0);

        Self {
            target,
            increment: target as f64 / steps,
            current: 0.0,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn displayed(&self) -> u64 {
        if self.finished {
            self.target
        } else {
            (self.current.floor() as u64).min(self.target)
        }
    }

    pub fn tick(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }

        self.current += self.increment;

        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.finished = true;
            return Some(CounterFrame::Finished(self.target));
        }

        Some(CounterFrame::Running(self.displayed()))
    }
}

/// Reads a `data-target` value using integer-prefix rules: surrounding
/// whitespace is ignored and the leading run of digits is the value, so
/// `"150+"` reads as 150. Values past `u64::MAX` saturate.
pub fn parse_counter_target(raw: Option<&str>) -> Result<u64, FxError> {
    let raw = raw.unwrap_or_default();
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = trimmed
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..digits_end];

    if digits.is_empty() {
        return Err(FxError::InvalidCounterTarget(raw.to_string()));
    }

    Ok(digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// An element a running counter writes into.
pub trait CounterSink {
    /// Raw `data-target` attribute.
    fn target(&self) -> Option<String>;
    fn is_started(&self) -> bool;
    fn mark_started(&self);
    /// `false` once the element has left the document.
    fn is_attached(&self) -> bool;
    fn display(&self, value: u64);
}

/// Starts a counter on `sink`, ticking through whatever `schedule` builds
/// from the tick closure. The scheduled handle is held in `tasks` and
/// released when the counter finishes or its element is detached.
///
/// Returns `Ok(false)` when the element was already started.
pub fn start_counter<S, H, F>(
    tasks: &TaskSet<H>,
    sink: S,
    duration_ms: u32,
    schedule: F,
) -> Result<bool, FxError>
where
    S: CounterSink + 'static,
    H: 'static,
    F: FnOnce(Box<dyn FnMut()>) -> H,
{
    if sink.is_started() {
        return Ok(false);
    }

    let target = parse_counter_target(sink.target().as_deref())?;
    sink.mark_started();

    let mut animation = CounterAnimation::new(target, duration_ms);
    let slot = tasks.reserve();
    let tick_slot = slot.clone();

    let handle = schedule(Box::new(move || {
        if !sink.is_attached() {
            tick_slot.release();
            return;
        }

        match animation.tick() {
            Some(CounterFrame::Running(value)) => sink.display(value),
            Some(CounterFrame::Finished(value)) => {
                sink.display(value);
                tick_slot.release();
            }
            None => tick_slot.release(),
        }
    }));

    slot.fill(handle);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeState {
        target: Option<String>,
        started: Cell<bool>,
        detached: Cell<bool>,
        shown: RefCell<Vec<u64>>,
    }

    #[derive(Clone, Default)]
    struct FakeElement(Rc<FakeState>);

    impl FakeElement {
        fn with_target(target: &str) -> Self {
            Self(Rc::new(FakeState {
                target: Some(target.to_string()),
                ..FakeState::default()
            }))
        }

        fn shown(&self) -> Vec<u64> {
            self.0.shown.borrow().clone()
        }
    }

    impl CounterSink for FakeElement {
        fn target(&self) -> Option<String> {
            self.0.target.clone()
        }

        fn is_started(&self) -> bool {
            self.0.started.get()
        }

        fn mark_started(&self) {
            self.0.started.set(true);
        }

        fn is_attached(&self) -> bool {
            !self.0.detached.get()
        }

        fn display(&self, value: u64) {
            self.0.shown.borrow_mut().push(value);
        }
    }

    struct Timer(Rc<Cell<usize>>);

    impl Drop for Timer {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[derive(Default)]
    struct FakeClock {
        ticks: RefCell<Vec<Box<dyn FnMut()>>>,
        cancelled: Rc<Cell<usize>>,
    }

    impl FakeClock {
        fn schedule(&self) -> impl FnOnce(Box<dyn FnMut()>) -> Timer + '_ {
            move |tick| {
                self.ticks.borrow_mut().push(tick);
                Timer(self.cancelled.clone())
            }
        }

        fn fire(&self, index: usize) {
            (self.ticks.borrow_mut()[index])();
        }
    }

    fn run_to_completion(animation: &mut CounterAnimation) -> Vec<CounterFrame> {
        let mut frames = Vec::new();
        while let Some(frame) = animation.tick() {
            frames.push(frame);
            assert!(frames.len() <= 100_000, "counter never terminated");
        }
        frames
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut animation = CounterAnimation::new(0, DEFAULT_DURATION_MS);

        assert_eq!(animation.tick(), Some(CounterFrame::Finished(0)));
        assert_eq!(animation.tick(), None);
        assert_eq!(animation.displayed(), 0);
    }

    #[test]
    fn default_duration_takes_about_125_ticks() {
        let mut animation = CounterAnimation::new(500, DEFAULT_DURATION_MS);
        let frames = run_to_completion(&mut animation);

        assert!((124..=126).contains(&frames.len()), "got {} ticks", frames.len());
        assert_eq!(frames.last().copied(), Some(CounterFrame::Finished(500)));
    }

    #[test]
    fn starts_from_zero_before_first_tick() {
        let animation = CounterAnimation::new(42, DEFAULT_DURATION_MS);
        assert_eq!(animation.displayed(), 0);
        assert!(!animation.is_finished());
    }

    #[test]
    fn zero_duration_does_not_stall() {
        let mut animation = CounterAnimation::new(0, 0);
        assert_eq!(animation.tick(), Some(CounterFrame::Finished(0)));

        let mut animation = CounterAnimation::new(9, 0);
        assert_eq!(animation.tick(), Some(CounterFrame::Finished(9)));
    }

    #[test]
    fn target_parsing_uses_leading_digits() {
        assert_eq!(parse_counter_target(Some("150")), Ok(150));
        assert_eq!(parse_counter_target(Some(" 98 ")), Ok(98));
        assert_eq!(parse_counter_target(Some("150+")), Ok(150));
        assert_eq!(parse_counter_target(Some("+7")), Ok(7));
    }

    #[test]
    fn oversized_target_saturates() {
        assert_eq!(
            parse_counter_target(Some("99999999999999999999")),
            Ok(u64::MAX)
        );
    }

    #[test]
    fn finished_counter_releases_its_timer() {
        let clock = FakeClock::default();
        let tasks = TaskSet::default();
        let element = FakeElement::with_target("30");

        let started = start_counter(&tasks, element.clone(), 160, clock.schedule());
        assert_eq!(started, Ok(true));
        assert_eq!(tasks.active(), 1);

        for _ in 0..10 {
            clock.fire(0);
        }

        assert_eq!(element.shown().last().copied(), Some(30));
        assert_eq!(tasks.active(), 0);
        assert_eq!(clock.cancelled.get(), 1);

        clock.fire(0);
        assert_eq!(element.shown().len(), 10);
        assert_eq!(clock.cancelled.get(), 1);
    }

    #[test]
    fn detached_element_releases_its_timer() {
        let clock = FakeClock::default();
        let tasks = TaskSet::default();
        let element = FakeElement::with_target("500");
        start_counter(&tasks, element.clone(), DEFAULT_DURATION_MS, clock.schedule())
            .expect("valid target");

        clock.fire(0);
        element.0.detached.set(true);
        clock.fire(0);

        assert_eq!(element.shown().len(), 1);
        assert_eq!(tasks.active(), 0);
        assert_eq!(clock.cancelled.get(), 1);
    }

    #[test]
    fn dropping_the_task_set_cancels_running_counters() {
        let clock = FakeClock::default();
        let tasks = TaskSet::default();
        for target in ["10", "20"] {
            start_counter(&tasks, FakeElement::with_target(target), 2_000, clock.schedule())
                .expect("valid target");
        }
        clock.fire(0);

        drop(tasks);

        assert_eq!(clock.cancelled.get(), 2);
    }

    #[test]
    fn element_is_only_started_once() {
        let clock = FakeClock::default();
        let tasks = TaskSet::default();
        let element = FakeElement::with_target("40");

        assert_eq!(
            start_counter(&tasks, element.clone(), 2_000, clock.schedule()),
            Ok(true)
        );
        assert_eq!(
            start_counter(&tasks, element.clone(), 2_000, clock.schedule()),
            Ok(false)
        );
        assert_eq!(tasks.active(), 1);
        assert_eq!(clock.ticks.borrow().len(), 1);
    }

    #[test]
    fn malformed_target_is_skipped_without_scheduling() {
        let clock = FakeClock::default();
        let tasks = TaskSet::<Timer>::default();
        let element = FakeElement::with_target("n/a");

        let result = start_counter(&tasks, element.clone(), 2_000, clock.schedule());

        assert!(matches!(result, Err(FxError::InvalidCounterTarget(_))));
        assert!(!element.is_started());
        assert!(clock.ticks.borrow().is_empty());
        assert_eq!(tasks.active(), 0);
    }

    #[test]
    fn malformed_targets_are_rejected() {
        for raw in [None, Some(""), Some("   "), Some("abc"), Some("-5"), Some("k10")] {
            assert!(
                matches!(
                    parse_counter_target(raw),
                    Err(FxError::InvalidCounterTarget(_))
                ),
                "{raw:?} should be rejected"
            );
        }
    }

    proptest! {
        #[test]
        fn ramp_is_monotonic_and_lands_on_target(
            target in 0u64..10_000_000,
            duration_ms in 0u32..10_000,
        ) {
            let mut animation = CounterAnimation::new(target, duration_ms);
            let frames = run_to_completion(&mut animation);

            let finished = frames.iter().filter(|frame| frame.is_finished()).count();
            prop_assert_eq!(finished, 1);
            prop_assert_eq!(frames.last().copied(), Some(CounterFrame::Finished(target)));

            let mut previous = 0;
            for frame in &frames {
                prop_assert!(frame.value() >= previous);
                prop_assert!(frame.value() <= target);
                previous = frame.value();
            }
        }
    }
}
