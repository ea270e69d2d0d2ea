use crate::ExpansionState;

/// Spring parameters for a height transition. Transitions never use linear easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCurve {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringCurve {
    /// Opening: slightly underdamped so the panel settles with a small overshoot
    pub const EXPAND: SpringCurve = SpringCurve {
        stiffness: 180.0,
        damping: 22.0,
        mass: 1.0,
    };

    /// Closing: close to critical damping, no bounce against the carousel
    pub const COLLAPSE: SpringCurve = SpringCurve {
        stiffness: 220.0,
        damping: 28.0,
        mass: 1.0,
    };

    /// Carousel snap after a swipe or a snap-back
    pub const SNAP: SpringCurve = SpringCurve {
        stiffness: 300.0,
        damping: 30.0,
        mass: 1.0,
    };

    pub fn for_transition(from: ExpansionState, to: ExpansionState) -> Self {
        if to.level() >= from.level() {
            Self::EXPAND
        } else {
            Self::COLLAPSE
        }
    }

    /// ζ = c / (2·√(k·m)). Below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}
