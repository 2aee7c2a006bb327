//! Services - business operations over the repositories
//!
//! - [`offer`]: promo code resolution
//! - [`wallet`]: wallet debits and credits
//! - [`checkout`]: draft submission
//! - [`subscription`]: skips and per-date add-ons
//! - [`manual`]: admin-created subscriptions

pub mod checkout;
pub mod manual;
pub mod offer;
pub mod subscription;
pub mod wallet;

pub use checkout::{CheckoutReceipt, CheckoutRequest, CheckoutService};
pub use manual::{ManualSubscriptionRequest, ManualSubscriptionService};
pub use offer::OfferService;
pub use subscription::SubscriptionService;
pub use wallet::WalletService;
