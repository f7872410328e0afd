use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use landing_fx::effects::reveal::{
    Intersection, RevealEngine, RevealState, TargetId, COUNTER_SELECTOR, INDEX_ATTRIBUTE,
    REVEAL_SELECTOR, ROOT_MARGIN, THRESHOLD,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::counters::{self, CounterRegistry};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live scroll-reveal wiring. Dropping it disconnects the observer and
/// cancels any counters it started.
pub struct RevealController {
    observer: Option<IntersectionObserver>,
    _callback: ObserverCallback,
    counters: Rc<CounterRegistry>,
}

impl RevealController {
    pub fn install(document: &Document, counter_duration_ms: u32) -> Self {
        let targets = query_all(document.query_selector_all(REVEAL_SELECTOR).ok());
        let engine = Rc::new(RefCell::new(RevealEngine::new()));
        let counters = Rc::new(CounterRegistry::default());

        for target in &targets {
            let id = engine.borrow_mut().register();
            let _ = target.set_attribute(INDEX_ATTRIBUTE, &id.index().to_string());
            apply_state(target, RevealState::Pending);
        }

        let callback: ObserverCallback = {
            let engine = engine.clone();
            let counters = counters.clone();
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| {
                        let target = entry.target();
                        let id = target
                            .get_attribute(INDEX_ATTRIBUTE)
                            .as_deref()
                            .and_then(TargetId::from_attribute);
                        Intersection {
                            target,
                            id,
                            is_intersecting: entry.is_intersecting(),
                        }
                    });

                engine.borrow_mut().dispatch(
                    batch,
                    |target| observer.unobserve(target),
                    |target| reveal(target, &counters, counter_duration_ms),
                );
            })
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok();

        match observer.as_ref() {
            Some(observer) => {
                for target in &targets {
                    observer.observe(target);
                }
            }
            None => {
                log::warn!("IntersectionObserver unavailable, revealing all sections");
                for id in engine.borrow_mut().reveal_all() {
                    if let Some(target) = targets.get(id.index()) {
                        reveal(target, &counters, counter_duration_ms);
                    }
                }
            }
        }

        log::info!(
            "scroll reveal watching {} targets ({} counters running)",
            engine.borrow().pending_count(),
            counters.active()
        );

        Self {
            observer,
            _callback: callback,
            counters,
        }
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        log::debug!(
            "scroll reveal torn down, cancelling {} counters",
            self.counters.active()
        );
    }
}

fn reveal(target: &Element, counters: &CounterRegistry, counter_duration_ms: u32) {
    apply_state(target, RevealState::Revealed);

    for counter in query_all(target.query_selector_all(COUNTER_SELECTOR).ok()) {
        counters::start(counters, counter, counter_duration_ms);
    }
}

fn apply_state(target: &Element, state: RevealState) {
    let Some(target) = target.dyn_ref::<HtmlElement>() else {
        return;
    };

    let style = target.style();
    for (property, value) in state.declarations() {
        let _ = style.set_property(property, &value);
    }
}

fn query_all(list: Option<web_sys::NodeList>) -> Vec<Element> {
    let Some(list) = list else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
