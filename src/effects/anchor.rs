pub const IN_PAGE_LINK_SELECTOR: &str = "a[href^='#']";

/// What a click on a link should do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorClick {
    /// Not an in-page link (or the bare `#`); leave it to the browser.
    NotInPage,
    /// In-page link whose target doesn't exist. Suppress navigation, don't scroll.
    MissingTarget,
    /// Scroll the window to this vertical position.
    ScrollTo(f64),
}

/// Element id an in-page link points at, or `None` when the click should be
/// left to the browser (external links and the bare `#`).
pub fn in_page_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Vertical scroll position that lands the target just below the fixed navbar.
pub fn scroll_destination(target_offset_top: f64, offset: f64) -> f64 {
    target_offset_top - offset
}

/// Resolves a link click. `offset_top_of` looks up the `offsetTop` of the
/// element with the given id.
pub fn resolve_click<F>(href: &str, offset: f64, offset_top_of: F) -> AnchorClick
where
    F: FnOnce(&str) -> Option<f64>,
{
    let Some(id) = in_page_target(href) else {
        return AnchorClick::NotInPage;
    };

    match offset_top_of(id) {
        Some(top) => AnchorClick::ScrollTo(scroll_destination(top, offset)),
        None => AnchorClick::MissingTarget,
    }
}
