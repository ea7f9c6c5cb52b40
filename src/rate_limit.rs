use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

// Sliding-window admission control. One instance covers the whole process:
// the upstream API key is the scarce resource, not any individual client.
pub struct RateLimiter {
    timestamps: Mutex<VecDeque<Instant>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            timestamps: Mutex::new(VecDeque::new()),
            max_requests,
            window,
        }
    }

    /// Admit or reject a request at the current time. The timestamp is
    /// recorded only on admission, so rejected calls never extend the window.
    pub fn admit(&self) -> bool {
        self.admit_at(Instant::now())
    }

    // Invariant: trim, check and append happen under one lock. Releasing it
    // between the check and the append would let concurrent requests push the
    // admitted count past max_requests.
    fn admit_at(&self, now: Instant) -> bool {
        let mut timestamps = self.timestamps.lock().unwrap_or_else(|e| e.into_inner());
        while timestamps
            .front()
            .is_some_and(|&t| now.duration_since(t) > self.window)
        {
            timestamps.pop_front();
        }
        if timestamps.len() >= self.max_requests {
            return false;
        }
        timestamps.push_back(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(600);

    #[test]
    fn admits_up_to_the_limit_then_rejects() {
        let limiter = RateLimiter::new(3, WINDOW);
        let t0 = Instant::now();
        for _ in 0..3 {
            assert!(limiter.admit_at(t0));
        }
        assert!(!limiter.admit_at(t0));
    }

    #[test]
    fn window_boundaries() {
        let limiter = RateLimiter::new(10, WINDOW);
        let t0 = Instant::now();
        for _ in 0..10 {
            assert!(limiter.admit_at(t0));
        }
        assert!(!limiter.admit_at(t0 + WINDOW - Duration::from_millis(1)));
        assert!(limiter.admit_at(t0 + WINDOW + Duration::from_millis(1)));
    }

    #[test]
    fn rejected_calls_do_not_consume_slots() {
        let limiter = RateLimiter::new(1, WINDOW);
        let t0 = Instant::now();
        assert!(limiter.admit_at(t0));
        for s in 1..5 {
            assert!(!limiter.admit_at(t0 + Duration::from_secs(s)));
        }
        // only the admission at t0 counts against the window
        assert!(limiter.admit_at(t0 + WINDOW + Duration::from_secs(1)));
    }

    #[test]
    fn zero_limit_rejects_unconditionally() {
        let limiter = RateLimiter::new(0, WINDOW);
        assert!(!limiter.admit_at(Instant::now()));
        assert!(!limiter.admit_at(Instant::now() + WINDOW));
    }

    #[test]
    fn admissions_in_any_window_interval_stay_bounded() {
        let window = Duration::from_secs(10);
        let limiter = RateLimiter::new(2, window);
        let t0 = Instant::now();

        let mut admitted = Vec::new();
        for s in 0..40u64 {
            if limiter.admit_at(t0 + Duration::from_secs(s)) {
                admitted.push(s);
            }
        }

        for &end in &admitted {
            let start = end.saturating_sub(10);
            let in_interval = admitted.iter().filter(|&&s| s >= start && s <= end).count();
            assert!(
                in_interval <= 2,
                "interval ending at {end}s holds {in_interval} admissions"
            );
        }
    }
}
