use crate::domain::StakeDuration;

/// Seconds since the unix epoch, as reported by block timestamps
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct UnixTimestamp(pub u64);

impl From<u64> for UnixTimestamp {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl UnixTimestamp {
    /// reads the system clock - clocks set before the unix epoch are reported as the epoch
    pub fn now() -> Self {
        let secs = chrono::Utc::now().timestamp();
        Self(if secs < 0 { 0 } else { secs as u64 })
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// saturates at `u64::MAX`
    pub fn saturating_add(&self, duration: StakeDuration) -> Self {
        Self(self.0.saturating_add(duration.seconds()))
    }
}

impl From<UnixTimestamp> for u64 {
    fn from(value: UnixTimestamp) -> Self {
        value.0
    }
}
