pub const SPHERE_SELECTOR: &str = ".sphere";
pub const ROTATION_RATIO: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
}

impl ParallaxTransform {
    /// Offset of the pointer from the viewport center, scaled by `factor`.
    /// Depends only on the latest pointer position.
    pub fn from_pointer(pointer: (f64, f64), viewport: (f64, f64), factor: f64) -> Self {
        let translate_x = (pointer.0 - viewport.0 / 2.0) * factor;
        let translate_y = (pointer.1 - viewport.1 / 2.0) * factor;

        Self {
            translate_x,
            translate_y,
            rotate_deg: translate_x * ROTATION_RATIO,
        }
    }

    pub fn css(self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg)",
            self.translate_x, self.translate_y, self.rotate_deg
        )
    }
}
