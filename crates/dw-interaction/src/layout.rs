//! Pixel heights for each expansion level.
//!
//! Low, Medium and High are fractions of the space between the collapsed baseline and
//! the safe area above the bottom navigation. XXL is `2 × collapsed + viewport width`
//! so it can host the full vertical contact list. Whatever the viewport, heights are
//! strictly increasing from Collapsed to XXL.

use crate::ExpansionState;

pub const DEFAULT_COLLAPSED_HEIGHT: f64 = 220.0;
/// Smallest gap kept between adjacent levels
pub const MIN_STEP: f64 = 1.0;
/// Larger inputs are clamped; no display comes close
pub const MAX_DIMENSION: f64 = 100_000.0;

const LOW_FRACTION: f64 = 0.25;
const MEDIUM_FRACTION: f64 = 0.55;
const HIGH_FRACTION: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Status bar / notch inset
    pub safe_top: f64,
    /// Bottom navigation bar plus bottom inset
    pub bottom_nav: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            safe_top: 0.0,
            bottom_nav: 0.0,
        }
    }

    fn usable_height(&self) -> f64 {
        sanitize(self.height) - sanitize(self.safe_top) - sanitize(self.bottom_nav)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightLayout {
    pub collapsed: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    pub xxl: f64,
}

impl HeightLayout {
    pub fn compute(viewport: Viewport, collapsed_height: f64) -> Self {
        let collapsed = match sanitize(collapsed_height) {
            h if h > 0.0 => h,
            _ => DEFAULT_COLLAPSED_HEIGHT,
        };
        let available = (viewport.usable_height() - collapsed).max(0.0);

        let low = (collapsed + available * LOW_FRACTION).max(collapsed + MIN_STEP);
        let medium = (collapsed + available * MEDIUM_FRACTION).max(low + MIN_STEP);
        let high = (collapsed + available * HIGH_FRACTION).max(medium + MIN_STEP);
        let xxl = (2.0 * collapsed + sanitize(viewport.width)).max(high + MIN_STEP);

        Self {
            collapsed,
            low,
            medium,
            high,
            xxl,
        }
    }

    pub fn height(&self, state: ExpansionState) -> f64 {
        match state {
            ExpansionState::Collapsed => self.collapsed,
            ExpansionState::ExpandedLow => self.low,
            ExpansionState::ExpandedMedium => self.medium,
            ExpansionState::ExpandedHigh => self.high,
            ExpansionState::ExpandedXXL => self.xxl,
        }
    }

    pub fn is_strictly_increasing(&self) -> bool {
        self.collapsed < self.low
            && self.low < self.medium
            && self.medium < self.high
            && self.high < self.xxl
    }
}

/// Negative and non-finite dimensions count as zero
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, MAX_DIMENSION)
    } else {
        0.0
    }
}
