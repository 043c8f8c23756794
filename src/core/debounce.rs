use crate::domain::ports::Clock;
use std::time::{Duration, Instant};

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// 輸入停止一段時間後才釋出最後一次的值
///
/// 每次 `push` 都會重新計時；時間由呼叫端傳入，方便測試。
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// 到期時取出值，否則回傳 None
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.cancel(),
            _ => None,
        }
    }

    /// 等到目前的值到期為止
    pub async fn settle(&mut self, clock: &dyn Clock) -> Option<T> {
        loop {
            let deadline = self.deadline()?;
            let now = clock.now();
            if now >= deadline {
                return self.cancel();
            }
            clock.sleep(deadline - now).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::{ManualClock, SystemClock};

    #[test]
    fn test_only_last_value_fires_after_idle_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DEFAULT_SEARCH_DEBOUNCE);

        debouncer.push("告", start);
        debouncer.push("告別", start + Duration::from_millis(100));
        debouncer.push("告別式", start + Duration::from_millis(250));

        // 第一次輸入後 300ms，但最後一次輸入才過 50ms
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(549)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(550)),
            Some("告別式")
        );
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        debouncer.push(1, start);
        assert_eq!(debouncer.cancel(), Some(1));
        assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
    }

    #[tokio::test]
    async fn test_settle_waits_for_deadline() {
        let clock = SystemClock;
        let mut debouncer = Debouncer::new(Duration::from_millis(20));
        debouncer.push("query".to_string(), clock.now());

        let value = debouncer.settle(&clock).await;
        assert_eq!(value.as_deref(), Some("query"));
        assert_eq!(debouncer.settle(&clock).await, None);
    }

    #[tokio::test]
    async fn test_settle_with_manual_clock_returns_without_real_wait() {
        let clock = ManualClock::new();
        let start = clock.now();
        let mut debouncer = Debouncer::new(Duration::from_secs(30));
        debouncer.push("追思", start);

        let settled = tokio::time::timeout(Duration::from_secs(1), debouncer.settle(&clock))
            .await
            .expect("manual clock settles immediately");

        assert_eq!(settled, Some("追思"));
        assert_eq!(clock.now() - start, Duration::from_secs(30));
    }
}
