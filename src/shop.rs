use crate::{Basket, Catalog, TransactionLog, Wallet, WalletError};

/// Possible errors to occur during shop operations
///
/// Every variant leaves the session state untouched.
#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    #[error("Item does not exist.")]
    UnknownItem,
    #[error("Item has not been bought.")]
    NotOwned,
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

/// The outcome of a successful purchase
///
/// A purchase that went through may still have failed to reach the log
/// file; that failure is carried here instead of rolling anything back.
#[derive(Debug)]
pub struct Purchase {
    /// The name of the bought item
    pub item: String,
    /// The price that was debited
    pub price: u32,
    /// The wallet balance after the purchase
    pub balance: u32,
    /// Set when the purchase could not be appended to the log file
    pub log_error: Option<csv::Error>,
}

/// The outcome of a successful return
#[derive(Debug)]
pub struct Refund {
    /// The name of the returned item
    pub item: String,
    /// The price that was credited back
    pub refund: u32,
    /// The wallet balance after the return
    pub balance: u32,
    /// Set when the wallet rejected the refund (cap); the item is
    /// returned regardless
    pub refund_error: Option<WalletError>,
    /// Set when the purchase row could not be removed from the log file
    pub log_error: Option<csv::Error>,
}

/// An external capability for opening a product page
///
/// The shop never consults the outcome; opening a page is fire-and-forget.
pub trait UrlOpener {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// The storefront session
///
/// Owns the whole session state: the read-only catalog, the wallet, the
/// basket and the transaction log, plus the capability used to show a
/// product page. All operations are synchronous and one level deep.
#[derive(Debug)]
pub struct Shop<O> {
    catalog: Catalog,
    wallet: Wallet,
    basket: Basket,
    log: TransactionLog,
    opener: O,
}

impl<O: UrlOpener> Shop<O> {
    /// Creates a new session over the specified catalog and log
    pub fn new(catalog: Catalog, wallet: Wallet, log: TransactionLog, opener: O) -> Self {
        Self {
            catalog,
            wallet,
            basket: Basket::new(),
            log,
            opener,
        }
    }

    /// The catalog of this session
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The basket of this session
    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// The current wallet balance
    pub fn balance(&self) -> u32 {
        self.wallet.balance()
    }

    /// Buys one unit of the specified item
    ///
    /// The debit gates everything else: only when the wallet covers the
    /// price is the basket updated and the purchase logged, so a rejected
    /// purchase changes nothing at all.
    pub fn buy(&mut self, name: &str) -> Result<Purchase, ShopError> {
        let entry = self.catalog.get(name).ok_or(ShopError::UnknownItem)?;
        let price = entry.price();
        let balance = self.wallet.debit(price)?;
        self.basket.add(name);
        let log_error = self.log.append(name, 1, price).err();

        Ok(Purchase {
            item: name.to_owned(),
            price,
            balance,
            log_error,
        })
    }

    /// Returns one unit of the specified item
    ///
    /// The basket removal gates the rest: an item that was never bought
    /// changes nothing. Once the unit is removed, the refund is credited
    /// (a cap rejection is carried in the outcome rather than undoing the
    /// removal) and the most recent log row for the item is dropped.
    pub fn return_item(&mut self, name: &str) -> Result<Refund, ShopError> {
        let entry = self.catalog.get(name).ok_or(ShopError::UnknownItem)?;
        let refund = entry.price();
        if !self.basket.remove(name) {
            return Err(ShopError::NotOwned);
        }
        let refund_error = self.wallet.credit(refund).err();
        let log_error = self.log.remove_last(name).err();

        Ok(Refund {
            item: name.to_owned(),
            refund,
            balance: self.wallet.balance(),
            refund_error,
            log_error,
        })
    }

    /// Opens the product page of the specified item
    ///
    /// Whether the page actually opened is not verified.
    pub fn view(&self, name: &str) -> Result<(), ShopError> {
        let entry = self.catalog.get(name).ok_or(ShopError::UnknownItem)?;
        let _ = self.opener.open(&entry.product_url());

        Ok(())
    }

    /// Adds funds to the wallet and returns the new balance
    pub fn add_funds(&mut self, amount: u32) -> Result<u32, WalletError> {
        self.wallet.credit(amount)
    }
}
