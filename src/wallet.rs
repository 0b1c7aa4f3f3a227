/// Possible errors to occur during wallet operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("Wallet cannot exceed ${cap}. Current balance: ${balance}")]
    CapExceeded { cap: u32, balance: u32 },
    #[error("Sorry, you don't have enough money in your wallet.")]
    InsufficientFunds,
}

/// The single cash balance of the session
///
/// The balance can only be changed through [`Wallet::credit`] and
/// [`Wallet::debit`], both of which enforce their respective bound:
/// a credit may not push the balance over the cap, and a debit may
/// not push it below zero. The initial balance is taken as-is.
#[derive(Debug)]
pub struct Wallet {
    balance: u32,
    cap: u32,
}

impl Wallet {
    /// The highest balance a wallet will accept
    pub const DEFAULT_CAP: u32 = 10_000;

    /// Creates a wallet holding the specified balance, capped at [`Wallet::DEFAULT_CAP`]
    pub fn new(balance: u32) -> Self {
        Self::with_cap(balance, Self::DEFAULT_CAP)
    }

    /// Creates a wallet with a custom cap
    pub fn with_cap(balance: u32, cap: u32) -> Self {
        Self { balance, cap }
    }

    /// The current balance
    pub fn balance(&self) -> u32 {
        self.balance
    }

    /// The cap of this wallet
    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Adds the specified amount to the balance and returns the new balance
    ///
    /// The credit is rejected if it would push the balance over the cap,
    /// in which case the balance stays unchanged.
    pub fn credit(&mut self, amount: u32) -> Result<u32, WalletError> {
        match self.balance.checked_add(amount) {
            Some(new_balance) if new_balance <= self.cap => {
                self.balance = new_balance;
                Ok(self.balance)
            }
            _ => Err(WalletError::CapExceeded {
                cap: self.cap,
                balance: self.balance,
            }),
        }
    }

    /// Removes the specified amount from the balance and returns the new balance
    ///
    /// The debit is rejected if the balance does not cover the amount,
    /// in which case the balance stays unchanged.
    pub fn debit(&mut self, amount: u32) -> Result<u32, WalletError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(WalletError::InsufficientFunds)?;

        Ok(self.balance)
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_increases_balance() {
        let mut wallet = Wallet::new(100);
        assert_eq!(wallet.credit(15), Ok(115));
        assert_eq!(wallet.balance(), 115);
    }

    #[test]
    fn credit_over_cap_is_rejected() {
        let mut wallet = Wallet::new(100);
        assert_eq!(
            wallet.credit(15_000),
            Err(WalletError::CapExceeded {
                cap: Wallet::DEFAULT_CAP,
                balance: 100,
            }),
        );
        assert_eq!(wallet.balance(), 100);
    }

    #[test]
    fn credit_up_to_cap_is_accepted() {
        let mut wallet = Wallet::new(100);
        assert_eq!(wallet.credit(9_900), Ok(10_000));
        assert_eq!(wallet.credit(1), Err(WalletError::CapExceeded {
            cap: Wallet::DEFAULT_CAP,
            balance: 10_000,
        }));
    }

    #[test]
    fn credit_never_overflows() {
        let mut wallet = Wallet::with_cap(u32::MAX - 1, u32::MAX);
        assert!(wallet.credit(u32::MAX).is_err());
        assert_eq!(wallet.balance(), u32::MAX - 1);
    }

    #[test]
    fn debit_decreases_balance() {
        let mut wallet = Wallet::new(100);
        assert_eq!(wallet.debit(25), Ok(75));
        assert_eq!(wallet.balance(), 75);
    }

    #[test]
    fn debit_below_zero_is_rejected() {
        let mut wallet = Wallet::new(100);
        assert_eq!(wallet.debit(101), Err(WalletError::InsufficientFunds));
        assert_eq!(wallet.balance(), 100);
    }

    #[test]
    fn debit_of_full_balance_is_accepted() {
        let mut wallet = Wallet::new(100);
        assert_eq!(wallet.debit(100), Ok(0));
    }

    #[test]
    fn cap_exceeded_message_names_the_cap() {
        let err = WalletError::CapExceeded {
            cap: 10_000,
            balance: 100,
        };
        assert!(err.to_string().contains("$10000"));
    }
}
