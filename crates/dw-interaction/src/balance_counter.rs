use std::time::Duration;

use rust_decimal::Decimal;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Animated balance figure.
///
/// Views subscribe to a watch channel and redraw on change instead of polling.
/// Starting a new animation aborts the one in progress; the figure continues from
/// wherever it had reached.
pub struct BalanceCounter {
    tx: watch::Sender<Decimal>,
    frame_interval: Duration,
    animation: Option<JoinHandle<()>>,
}

impl BalanceCounter {
    pub fn new(initial: Decimal) -> Self {
        Self::with_frame_interval(initial, DEFAULT_FRAME_INTERVAL)
    }

    pub fn with_frame_interval(initial: Decimal, frame_interval: Duration) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            frame_interval: frame_interval.max(Duration::from_millis(1)),
            animation: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Decimal> {
        self.tx.subscribe()
    }

    pub fn value(&self) -> Decimal {
        *self.tx.borrow()
    }

    pub fn set_immediate(&mut self, value: Decimal) {
        self.stop();
        self.tx.send_replace(value);
    }

    /// Interpolate from the current figure to `target` over `duration`, rounding each
    /// frame to the target's scale. The last frame is always exactly `target`.
    pub fn animate_to(&mut self, target: Decimal, duration: Duration) {
        self.stop();

        let start = self.value();
        if start == target || duration.is_zero() {
            self.tx.send_replace(target);
            return;
        }

        let frames = frame_count(duration, self.frame_interval);
        let scale = target.scale().max(start.scale());
        let tx = self.tx.clone();
        let frame_interval = self.frame_interval;

        self.animation = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(frame_interval);
            ticker.tick().await;
            for frame in 1..=frames {
                ticker.tick().await;
                let value = if frame == frames {
                    target
                } else {
                    let progress = ease_out_cubic(Decimal::from(frame) / Decimal::from(frames));
                    (start + (target - start) * progress).round_dp(scale)
                };
                tx.send_replace(value);
            }
        }));
    }

    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.animation.take() {
            handle.abort();
        }
    }
}

impl Drop for BalanceCounter {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Whole frames in `duration`, at least one, saturating at `u32::MAX`.
pub(crate) fn frame_count(duration: Duration, frame_interval: Duration) -> u32 {
    let frames = duration.as_millis() / frame_interval.as_millis().max(1);
    u32::try_from(frames).unwrap_or(u32::MAX).max(1)
}

/// 1 - (1 - t)³
fn ease_out_cubic(t: Decimal) -> Decimal {
    let inv = Decimal::ONE - t;
    Decimal::ONE - inv * inv * inv
}
