// src/modules/assist/application/daily_quota.rs

use std::sync::Mutex;

/// In-memory per-day attempt counter. Process-local only: restarting the
/// service resets it, which is acceptable for a courtesy limit.
#[derive(Debug)]
pub struct DailyQuota {
    limit: u32,
    state: Mutex<(String, u32)>,
}

impl DailyQuota {
    pub const DEFAULT_LIMIT: u32 = 3;

    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            state: Mutex::new((String::new(), 0)),
        }
    }

    /// Whether another attempt is allowed on `day` (an ISO date string).
    pub fn allows(&self, day: &str) -> bool {
        let state = self.state.lock().unwrap();
        state.0 != day || state.1 < self.limit
    }

    /// Count an attempt against `day`. Rolling onto a new day starts a
    /// fresh count.
    pub fn record(&self, day: &str) {
        let mut state = self.state.lock().unwrap();
        if state.0 != day {
            *state = (day.to_string(), 0);
        }
        state.1 += 1;
    }
}

impl Default for DailyQuota {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

/// Today's quota key.
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
