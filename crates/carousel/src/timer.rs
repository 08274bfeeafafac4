//! The carousel rotation timer.
//!
//! A repeating task that posts a [`Tick`] onto the shell's event queue
//! once per period. It never touches carousel state itself; the queue's
//! owner applies the tick when it gets to it.
//!
//! The task is owned by a [`CarouselTimer`] and aborted when that value is
//! dropped, so teardown on any path stops the ticking.

use crate::error::CarouselError;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

/// One autonomous advance request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Handle to the running rotation task. Dropping it cancels the task.
#[derive(Debug)]
pub struct CarouselTimer {
    handle: JoinHandle<()>,
}

impl CarouselTimer {
    /// Start ticking every `period` into `events`.
    ///
    /// The first tick arrives one full period after the call. Must be
    /// called from within a Tokio runtime.
    pub fn spawn<E>(period: Duration, events: UnboundedSender<E>) -> Result<Self, CarouselError>
    where
        E: From<Tick> + Send + 'static,
    {
        if period.is_zero() {
            return Err(CarouselError::InvalidInterval(period));
        }

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if events.send(E::from(Tick)).is_err() {
                    debug!("Event queue closed, stopping carousel timer");
                    break;
                }
            }
        });

        info!("Carousel timer started ({:?} period)", period);
        Ok(Self { handle })
    }

    /// Stop ticking now
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for CarouselTimer {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("Carousel timer cancelled");
    }
}
