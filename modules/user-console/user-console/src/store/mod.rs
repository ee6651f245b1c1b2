//! Observable state shared between the console views.

pub mod observable;
pub mod user_store;

pub use observable::{Observable, SubscriptionId};
pub use user_store::UserStore;
