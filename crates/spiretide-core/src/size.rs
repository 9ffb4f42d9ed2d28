//! Viewport size classification.

/// Widths at or below this (logical px) count as narrow mobile.
pub const NARROW_MOBILE_MAX_WIDTH: f64 = 600.0;

/// Current viewport dimensions in logical pixels.
///
/// The desktop binary keeps one of these in a reactive signal, updated from
/// window resize events, so components re-render when the classification
/// changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameSize {
    pub width: f64,
    pub height: f64,
}

impl GameSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Phone-width viewport.
    pub fn narrow_mobile(&self) -> bool {
        self.width <= NARROW_MOBILE_MAX_WIDTH
    }

    /// Taller than wide. The card table wants landscape.
    pub fn portrait(&self) -> bool {
        self.height > self.width
    }
}

impl Default for GameSize {
    fn default() -> Self {
        // Matches the launch window size in the desktop binary.
        Self::new(1200.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_mobile_boundary() {
        assert!(GameSize::new(NARROW_MOBILE_MAX_WIDTH, 800.0).narrow_mobile());
        assert!(!GameSize::new(NARROW_MOBILE_MAX_WIDTH + 1.0, 800.0).narrow_mobile());
    }

    #[test]
    fn portrait_detection() {
        assert!(GameSize::new(400.0, 800.0).portrait());
        assert!(!GameSize::new(800.0, 400.0).portrait());
        assert!(!GameSize::new(800.0, 800.0).portrait());
    }

    #[test]
    fn default_is_a_landscape_desktop() {
        let size = GameSize::default();
        assert!(!size.narrow_mobile());
        assert!(!size.portrait());
    }
}
