//! Domain records held by the depot stores.

pub mod bus;
pub mod client;
pub mod credit;
pub mod person;

pub use bus::{Bus, BusStatus};
pub use client::Client;
pub use credit::Credit;
pub use person::{activity, describe, Person, Role};

use thiserror::Error;

/// Errors raised when a record is rejected before reaching a store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("client name must contain only letters and spaces")]
    InvalidName,
    #[error("client phone must contain only digits")]
    InvalidPhone,
    #[error("credit amount must be positive")]
    NonPositiveAmount,
    #[error("credit interest rate must be positive")]
    NonPositiveRate,
    #[error("credit repayment date must be after the creation date")]
    RepaymentNotInFuture,
}
