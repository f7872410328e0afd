pub const SCROLLED_CLASS: &str = "scrolled";

/// Whether the navbar should carry its scrolled styling at this offset.
/// Strictly greater than the threshold; the threshold itself is not scrolled.
pub fn is_scrolled(scroll_offset: f64, threshold: f64) -> bool {
    scroll_offset > threshold
}

pub fn navbar_class(scroll_offset: f64, threshold: f64) -> Option<&'static str> {
    is_scrolled(scroll_offset, threshold).then_some(SCROLLED_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 50.0;

    #[test]
    fn boundary_sits_at_fifty() {
        assert!(!is_scrolled(49.0, THRESHOLD));
        assert!(!is_scrolled(50.0, THRESHOLD));
        assert!(is_scrolled(51.0, THRESHOLD));
    }

    #[test]
    fn class_follows_offset_without_history() {
        assert_eq!(navbar_class(400.0, THRESHOLD), Some(SCROLLED_CLASS));
        assert_eq!(navbar_class(0.0, THRESHOLD), None);
        assert_eq!(navbar_class(400.0, THRESHOLD), Some(SCROLLED_CLASS));
    }
}
