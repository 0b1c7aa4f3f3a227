pub use self::{
    basket::Basket,
    catalog::{Catalog, CatalogEntry},
    command::{Command, ParseCommandError},
    shop::{Purchase, Refund, Shop, ShopError, UrlOpener},
    transaction_log::{TransactionLog, TransactionRow},
    wallet::{Wallet, WalletError},
};

mod basket;
mod catalog;
mod command;
mod shop;
mod transaction_log;
mod wallet;
