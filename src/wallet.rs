//! Wallet account change notifications as a lazy, restartable sequence of [WalletSnapshot]s

use crate::{
    domain::{Address, WalletSnapshot},
    errors::AddressParseError,
};
use tracing::warn;

/// Accounts reported by the provider's `accountsChanged` notification - empty when the wallet
/// was disconnected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountsChanged(pub Vec<String>);

impl AccountsChanged {
    pub fn new<T: Into<String>>(accounts: Vec<T>) -> Self {
        Self(accounts.into_iter().map(Into::into).collect())
    }

    pub fn disconnected() -> Self {
        Self::default()
    }
}

/// the provider lists the selected account first
pub fn selected_account(accounts: &[String]) -> Result<Option<Address>, AddressParseError> {
    accounts.first().map(|account| account.parse()).transpose()
}

/// Maps account change notifications to wallet snapshots.
///
/// The subscription is lazy: notifications are only pulled from the source as snapshots are
/// consumed. Notifications whose selected account is malformed are skipped.
#[derive(Debug, Clone)]
pub struct WalletSubscription<I> {
    source: I,
    events: I,
}

impl<I> WalletSubscription<I>
where
    I: Iterator<Item = AccountsChanged> + Clone,
{
    pub fn new(source: I) -> Self {
        Self {
            events: source.clone(),
            source,
        }
    }

    /// returns a subscription that replays the source from the beginning
    pub fn restart(&self) -> Self {
        Self::new(self.source.clone())
    }
}

impl<I> Iterator for WalletSubscription<I>
where
    I: Iterator<Item = AccountsChanged>,
{
    type Item = WalletSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let AccountsChanged(accounts) = self.events.next()?;
            match selected_account(&accounts) {
                Ok(Some(address)) => return Some(WalletSnapshot::connected(address)),
                Ok(None) => return Some(WalletSnapshot::disconnected()),
                Err(err) => warn!(error = %err, "ignoring account change notification"),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn maps_notifications_to_snapshots() {
        let events = vec![
            AccountsChanged::new(vec![address(1).to_string(), address(2).to_string()]),
            AccountsChanged::new(vec!["not-an-address"]),
            AccountsChanged::disconnected(),
            AccountsChanged::new(vec![address(2).to_string()]),
        ];
        let snapshots: Vec<WalletSnapshot> = WalletSubscription::new(events.into_iter()).collect();
        assert_eq!(
            snapshots,
            vec![
                WalletSnapshot::connected(address(1)),
                WalletSnapshot::disconnected(),
                WalletSnapshot::connected(address(2)),
            ]
        );
    }

    #[test]
    fn restart_replays_from_the_source() {
        let events = vec![
            AccountsChanged::new(vec![address(1).to_string()]),
            AccountsChanged::new(vec![address(2).to_string()]),
        ];
        let mut subscription = WalletSubscription::new(events.into_iter());
        assert_eq!(subscription.next(), Some(WalletSnapshot::connected(address(1))));
        assert_eq!(subscription.next(), Some(WalletSnapshot::connected(address(2))));
        assert_eq!(subscription.next(), None);

        let mut restarted = subscription.restart();
        assert_eq!(restarted.next(), Some(WalletSnapshot::connected(address(1))));
    }

    #[test]
    fn selected_account_is_the_first_account() {
        assert_eq!(selected_account(&[]), Ok(None));
        assert_eq!(
            selected_account(&[address(3).to_string(), address(4).to_string()]),
            Ok(Some(address(3)))
        );
        assert!(selected_account(&["0x123".to_string()]).is_err());
    }
}
