use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ValidationError;
use crate::store::Record;

/// An issued credit. Append-only for the lifetime of the program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credit {
    pub id: u32,
    pub amount: f64,
    pub interest_rate: f64,
    pub repayment_date: NaiveDate,
    pub comments: String,
}

impl Credit {
    /// Validates the amounts and the repayment date against `today`, the
    /// creation date supplied by the caller.
    pub fn new(
        amount: f64,
        interest_rate: f64,
        repayment_date: NaiveDate,
        comments: impl Into<String>,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if !(amount.is_finite() && amount > 0.0) {
            return Err(ValidationError::NonPositiveAmount);
        }
        if !(interest_rate.is_finite() && interest_rate > 0.0) {
            return Err(ValidationError::NonPositiveRate);
        }
        if repayment_date <= today {
            return Err(ValidationError::RepaymentNotInFuture);
        }
        Ok(Self {
            id: 0,
            amount,
            interest_rate,
            repayment_date,
            comments: comments.into(),
        })
    }
}

impl Record for Credit {
    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Credit {}: amount {:.2}, rate {}%, due {}",
            self.id, self.amount, self.interest_rate, self.repayment_date
        )?;
        if !self.comments.is_empty() {
            write!(f, ", {}", self.comments)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_future_repayment() {
        let credit = Credit::new(1000.0, 4.5, day(2026, 1, 1), "seasonal", day(2025, 6, 1));
        assert!(credit.is_ok());
    }

    #[test]
    fn rejects_zero_amount() {
        let credit = Credit::new(0.0, 4.5, day(2026, 1, 1), "", day(2025, 6, 1));
        assert_eq!(credit.unwrap_err(), ValidationError::NonPositiveAmount);
    }

    #[test]
    fn rejects_negative_rate() {
        let credit = Credit::new(10.0, -1.0, day(2026, 1, 1), "", day(2025, 6, 1));
        assert_eq!(credit.unwrap_err(), ValidationError::NonPositiveRate);
    }

    #[test]
    fn rejects_repayment_on_creation_day() {
        let credit = Credit::new(10.0, 1.0, day(2025, 6, 1), "", day(2025, 6, 1));
        assert_eq!(credit.unwrap_err(), ValidationError::RepaymentNotInFuture);
    }
}
