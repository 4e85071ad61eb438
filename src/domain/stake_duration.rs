
/// Duration in seconds, as configured on the treasury contract
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct StakeDuration(pub u64);

impl From<u64> for StakeDuration {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl StakeDuration {
    pub fn seconds(&self) -> u64 {
        self.0
    }

    /// returns the number of whole minutes if the duration is an exact, non-zero multiple of 60s
    pub fn whole_minutes(&self) -> Option<u64> {
        if self.0 > 0 && self.0 % 60 == 0 {
            Some(self.0 / 60)
        } else {
            None
        }
    }
}

impl From<StakeDuration> for u64 {
    fn from(value: StakeDuration) -> Self {
        value.0
    }
}
