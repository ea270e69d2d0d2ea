use crate::{ExpansionMachine, ExpansionState, ExpansionTransition, SpringCurve};

use dw_config::CarouselConfig;
use dw_core::{ActionId, Balance, Currency, DomainEvent, EventSink, RawBalance, SwipeDirection};

use std::sync::Arc;

/// Commit thresholds for a horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    /// Fraction of the card width the finger must travel
    pub distance_ratio: f64,
    /// Release speed in px/s that commits regardless of distance
    pub velocity: f64,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            distance_ratio: 0.3,
            velocity: 500.0,
        }
    }
}

impl From<&CarouselConfig> for SwipeThresholds {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            distance_ratio: config.distance_ratio,
            velocity: config.velocity_threshold,
        }
    }
}

impl SwipeThresholds {
    pub fn commits(&self, dx: f64, velocity: f64, width: f64) -> bool {
        dx.abs() > self.distance_ratio * width || velocity.abs() > self.velocity
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeOutcome {
    Committed {
        from: Currency,
        to: Currency,
        direction: SwipeDirection,
        offset: f64,
        spring: SpringCurve,
    },
    /// Restored to the offset held before the gesture
    SnapBack { offset: f64, spring: SpringCurve },
    /// Panel expanded; the carousel is locked
    Ignored,
}

/// Currency carousel plus the expansion panel it controls.
///
/// Offsets are in px, with card `i` resting at `-i × width`.
pub struct BalanceCarousel {
    balances: Vec<Balance>,
    active_index: usize,
    width: f64,
    offset: f64,
    drag_origin: Option<f64>,
    thresholds: SwipeThresholds,
    expansion: ExpansionMachine,
    sink: Arc<dyn EventSink>,
}

impl BalanceCarousel {
    pub fn new(width: f64, thresholds: SwipeThresholds, sink: Arc<dyn EventSink>) -> Self {
        Self {
            balances: vec![Balance::placeholder()],
            active_index: 0,
            width: width.max(1.0),
            offset: 0.0,
            drag_origin: None,
            thresholds,
            expansion: ExpansionMachine::new(),
            sink,
        }
    }

    /// Replace the balances with a normalised copy of `raw`.
    ///
    /// The active card follows its currency when it is still present, otherwise it
    /// falls back to the first card.
    pub fn set_balances(&mut self, raw: &[RawBalance]) {
        self.replace_balances(Balance::normalize(raw));
    }

    pub fn replace_balances(&mut self, balances: Vec<Balance>) {
        let current = self.active_currency();
        self.balances = if balances.is_empty() {
            vec![Balance::placeholder()]
        } else {
            balances
        };
        self.active_index = self
            .balances
            .iter()
            .position(|b| b.currency == current)
            .unwrap_or(0);
        self.offset = self.resting_offset(self.active_index);
        self.drag_origin = None;
    }

    pub fn balances(&self) -> &[Balance] {
        &self.balances
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_balance(&self) -> &Balance {
        &self.balances[self.active_index]
    }

    pub fn active_currency(&self) -> Currency {
        self.balances
            .get(self.active_index)
            .map(|b| b.currency)
            .unwrap_or_default()
    }

    pub fn balance_for(&self, currency: Currency) -> Option<&Balance> {
        self.balances.iter().find(|b| b.currency == currency)
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn expansion(&self) -> ExpansionState {
        self.expansion.state()
    }

    pub fn selected_action(&self) -> Option<ActionId> {
        self.expansion.selected_action()
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(1.0);
        self.offset = self.resting_offset(self.active_index);
    }

    fn resting_offset(&self, index: usize) -> f64 {
        -(index as f64) * self.width
    }

    /// Finger down. Returns false while the panel is expanded.
    pub fn begin_drag(&mut self) -> bool {
        if self.expansion.state().is_expanded() {
            return false;
        }
        self.drag_origin = Some(self.offset);
        true
    }

    /// Finger moved `dx` px from where it went down.
    pub fn drag_to(&mut self, dx: f64) {
        if let Some(origin) = self.drag_origin {
            self.offset = origin + dx;
        }
    }

    /// Finger up after travelling `dx` px at `velocity` px/s.
    ///
    /// A swipe to the left (negative) moves to the next card. When only the velocity
    /// threshold is met, the fling's sign picks the direction. A commit that would run
    /// past either end is clamped and reported as a snap-back.
    pub fn release(&mut self, dx: f64, velocity: f64) -> SwipeOutcome {
        if self.expansion.state().is_expanded() {
            self.drag_origin = None;
            return SwipeOutcome::Ignored;
        }
        let origin = self
            .drag_origin
            .take()
            .unwrap_or_else(|| self.resting_offset(self.active_index));

        if !self.thresholds.commits(dx, velocity, self.width) {
            return self.snap_back(origin);
        }

        // A velocity-only commit follows the fling, not the drift before it
        let distance_met = dx.abs() > self.thresholds.distance_ratio * self.width;
        let toward_next = if distance_met || velocity == 0.0 {
            dx < 0.0
        } else {
            velocity < 0.0
        };
        let target = if toward_next {
            (self.active_index + 1).min(self.balances.len() - 1)
        } else {
            self.active_index.saturating_sub(1)
        };

        if target == self.active_index {
            return self.snap_back(origin);
        }

        let from = self.active_currency();
        self.active_index = target;
        self.offset = self.resting_offset(target);
        let to = self.active_currency();
        let direction = if toward_next {
            SwipeDirection::Next
        } else {
            SwipeDirection::Previous
        };

        self.sink.emit(DomainEvent::BalanceSwiped {
            from,
            to,
            direction,
        });

        SwipeOutcome::Committed {
            from,
            to,
            direction,
            offset: self.offset,
            spring: SpringCurve::SNAP,
        }
    }

    fn snap_back(&mut self, origin: f64) -> SwipeOutcome {
        self.offset = origin;
        SwipeOutcome::SnapBack {
            offset: origin,
            spring: SpringCurve::SNAP,
        }
    }

    /// Tap on one of the active balance's action buttons.
    ///
    /// Ignored when the panel is already expanded or the action is not offered for
    /// the active currency.
    pub fn tap_action(&mut self, action: ActionId) -> Option<ExpansionTransition> {
        if !self.active_balance().allows(action) {
            log::debug!(
                "Ignoring action {} not available for {}",
                action,
                self.active_currency()
            );
            return None;
        }
        let transition = self.expansion.open(action)?;
        self.report(&transition);
        Some(transition)
    }

    /// The `enviar` contact list is on screen; grow to XXL.
    pub fn engage_contact_flow(&mut self) -> Option<ExpansionTransition> {
        let transition = self.expansion.promote()?;
        self.report(&transition);
        Some(transition)
    }

    /// Tap on the balance figure: the only way to cancel an expanded action.
    pub fn tap_balance(&mut self) -> Option<ExpansionTransition> {
        let transition = self.expansion.collapse()?;
        self.report(&transition);
        Some(transition)
    }

    fn report(&self, transition: &ExpansionTransition) {
        self.sink.emit(DomainEvent::ExpansionChanged {
            from: transition.from.as_str(),
            to: transition.to.as_str(),
            action: transition.action,
        });
    }
}
