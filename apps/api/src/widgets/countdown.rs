//! Countdown timer — a four-field remaining duration recomputed every second
//! against a fixed target, with a single expiry signal.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    fn from_secs(total: u64) -> Self {
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    Running(TimeRemaining),
    Expired,
}

/// Time left until `target`, or `None` once the target has been reached.
pub fn remaining_until(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<TimeRemaining> {
    let left = target.signed_duration_since(now);
    if left <= TimeDelta::zero() {
        return None;
    }
    // partial seconds round down, like a wall clock
    let secs = u64::try_from(left.num_seconds()).unwrap_or(0);
    Some(TimeRemaining::from_secs(secs))
}

/// Countdown state. The expiry callback runs on the first expired tick only;
/// afterwards every tick reports `Expired`.
pub struct Countdown<F: FnOnce()> {
    target: DateTime<Utc>,
    on_expire: Option<F>,
    expired: bool,
}

impl<F: FnOnce()> Countdown<F> {
    pub fn new(target: DateTime<Utc>, on_expire: F) -> Self {
        Self {
            target,
            on_expire: Some(on_expire),
            expired: false,
        }
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> CountdownStatus {
        if !self.expired {
            if let Some(remaining) = remaining_until(self.target, now) {
                return CountdownStatus::Running(remaining);
            }
            self.expired = true;
            if let Some(on_expire) = self.on_expire.take() {
                on_expire();
            }
        }
        CountdownStatus::Expired
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

/// Owns a running countdown task. Dropping the handle stops the task.
#[derive(Debug)]
pub struct CountdownHandle {
    task: JoinHandle<()>,
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Starts a once-per-second countdown on the tokio runtime. The first tick is
/// immediate; `on_update` sees every status including the final `Expired`.
pub fn spawn_countdown<U, E>(target: DateTime<Utc>, on_update: U, on_expire: E) -> CountdownHandle
where
    U: FnMut(CountdownStatus) + Send + 'static,
    E: FnOnce() + Send + 'static,
{
    spawn_countdown_from(Utc::now(), target, on_update, on_expire)
}

/// Wall time is `started_at` plus the runtime clock's elapsed time, so the
/// ticker follows paused or advanced tokio time.
fn spawn_countdown_from<U, E>(
    started_at: DateTime<Utc>,
    target: DateTime<Utc>,
    mut on_update: U,
    on_expire: E,
) -> CountdownHandle
where
    U: FnMut(CountdownStatus) + Send + 'static,
    E: FnOnce() + Send + 'static,
{
    let anchor = Instant::now();
    let task = tokio::spawn(async move {
        let mut countdown = Countdown::new(target, on_expire);
        let mut interval = tokio::time::interval(TICK);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            let elapsed = TimeDelta::from_std(anchor.elapsed()).unwrap_or(TimeDelta::zero());
            let status = countdown.tick(started_at + elapsed);
            on_update(status);
            if countdown.is_expired() {
                debug!("Countdown to {target} expired");
                break;
            }
        }
    });

    CountdownHandle { task }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_remaining_splits_into_fields() {
        let remaining = remaining_until(at(90_061), at(0)).unwrap();
        assert_eq!(
            remaining,
            TimeRemaining {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_remaining_rounds_partial_seconds_down() {
        let now = at(0);
        let target = now + TimeDelta::milliseconds(1_500);
        assert_eq!(remaining_until(target, now).unwrap().seconds, 1);
        let target = now + TimeDelta::milliseconds(400);
        assert_eq!(remaining_until(target, now).unwrap().seconds, 0);
    }

    #[test]
    fn test_reached_target_has_no_remaining() {
        assert_eq!(remaining_until(at(0), at(0)), None);
        assert_eq!(remaining_until(at(0), at(5)), None);
    }

    #[test]
    fn test_past_target_expires_immediately_and_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut countdown = Countdown::new(at(-10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(countdown.tick(at(0)), CountdownStatus::Expired);
        assert_eq!(countdown.tick(at(1)), CountdownStatus::Expired);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stays_expired_if_clock_goes_back() {
        let mut countdown = Countdown::new(at(5), || {});
        assert!(matches!(countdown.tick(at(0)), CountdownStatus::Running(_)));
        assert_eq!(countdown.tick(at(5)), CountdownStatus::Expired);
        assert_eq!(countdown.tick(at(0)), CountdownStatus::Expired);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_counts_down_then_stops() {
        let updates = Arc::new(Mutex::new(Vec::new()));
        let expirations = Arc::new(AtomicUsize::new(0));

        let sink = updates.clone();
        let fired = expirations.clone();
        let handle = spawn_countdown_from(
            at(0),
            at(3),
            move |status| sink.lock().unwrap().push(status),
            move || {
                fired.fetch_add(1, Ordering::SeqCst);
            },
        );

        tokio::time::sleep(Duration::from_secs(10)).await;

        let seen: Vec<Option<u64>> = updates
            .lock()
            .unwrap()
            .iter()
            .map(|status| match status {
                CountdownStatus::Running(r) => Some(r.seconds),
                CountdownStatus::Expired => None,
            })
            .collect();
        assert_eq!(seen, vec![Some(3), Some(2), Some(1), None]);
        assert_eq!(expirations.load(Ordering::SeqCst), 1);
        drop(handle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_past_target_ticker_expires_on_first_tick() {
        let expirations = Arc::new(AtomicUsize::new(0));
        let fired = expirations.clone();
        let handle = spawn_countdown(
            Utc::now() - TimeDelta::hours(1),
            |_| {},
            move || {
                fired.fetch_add(1, Ordering::SeqCst);
            },
        );

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(expirations.load(Ordering::SeqCst), 1);
        drop(handle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_updates() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let handle = spawn_countdown_from(
            at(0),
            at(3_600),
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
            || {},
        );

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        drop(handle);
        let seen = ticks.load(Ordering::SeqCst);
        assert_eq!(seen, 3);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), seen);
    }
}
