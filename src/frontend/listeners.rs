use gloo_events::{EventListener, EventListenerOptions};
use landing_fx::effects::{
    anchor::{resolve_click, AnchorClick, IN_PAGE_LINK_SELECTOR},
    navbar::navbar_class,
    parallax::{ParallaxTransform, SPHERE_SELECTOR},
};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use super::viewport_size;

fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Calls `on_change` with the navbar's scroll class now and after every
/// scroll event.
pub fn watch_navbar<F>(threshold: f64, on_change: F) -> Option<EventListener>
where
    F: Fn(Option<&'static str>) + 'static,
{
    let win = window()?;
    on_change(navbar_class(scroll_offset(), threshold));

    Some(EventListener::new(&win, "scroll", move |_| {
        on_change(navbar_class(scroll_offset(), threshold));
    }))
}

pub fn track_parallax(factor: f64) -> Option<EventListener> {
    let win = window()?;

    Some(EventListener::new(&win, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Some(sphere) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(SPHERE_SELECTOR).ok().flatten())
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
        let transform = ParallaxTransform::from_pointer(pointer, viewport_size(), factor);
        let _ = sphere.style().set_property("transform", &transform.css());
    }))
}

/// Intercepts clicks on in-page links anywhere in the document and scrolls to
/// the referenced element, leaving `offset` pixels above it.
pub fn smooth_anchor_scroll(offset: f64, smooth: bool) -> Option<EventListener> {
    let document = window()?.document()?;

    Some(EventListener::new_with_options(
        &document,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(link) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(IN_PAGE_LINK_SELECTOR).ok().flatten())
            else {
                return;
            };
            let Some(href) = link.get_attribute("href") else {
                return;
            };

            match resolve_click(&href, offset, offset_top_of) {
                AnchorClick::NotInPage => {}
                AnchorClick::MissingTarget => {
                    event.prevent_default();
                    log::debug!("no in-page target for {href}");
                }
                AnchorClick::ScrollTo(top) => {
                    event.prevent_default();
                    scroll_to(top, smooth);
                }
            }
        },
    ))
}

fn offset_top_of(id: &str) -> Option<f64> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|element| f64::from(element.offset_top()))
}

fn scroll_to(top: f64, smooth: bool) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Instant
    });
    win.scroll_to_with_scroll_to_options(&options);
}
