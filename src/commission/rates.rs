//! Commission rates
//!
//! Rates are fractions in `[0, 1]` held as `Decimal`: 0.03 = 3%.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    #[error("{name} must be within [0, 1], got {value}")]
    OutOfRange { name: &'static str, value: Decimal },
}

/// Which of the two rates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    /// Buyer's first transaction on the platform
    First,
    Repeat,
}

/// Platform commission settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionRates {
    first_rate: Decimal,
    repeat_rate: Decimal,
}

fn check_fraction(name: &'static str, value: Decimal) -> Result<Decimal, RateError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(RateError::OutOfRange { name, value });
    }
    Ok(value)
}

impl CommissionRates {
    pub fn new(first_rate: Decimal, repeat_rate: Decimal) -> Result<Self, RateError> {
        Ok(Self {
            first_rate: check_fraction("first_rate", first_rate)?,
            repeat_rate: check_fraction("repeat_rate", repeat_rate)?,
        })
    }

    pub fn first_rate(&self) -> Decimal {
        self.first_rate
    }

    pub fn repeat_rate(&self) -> Decimal {
        self.repeat_rate
    }

    pub fn rate_for(&self, kind: OrderKind) -> Decimal {
        match kind {
            OrderKind::First => self.first_rate,
            OrderKind::Repeat => self.repeat_rate,
        }
    }

    /// Rate as a percentage, exact: 0.03 -> 3
    pub fn percent_for(&self, kind: OrderKind) -> Decimal {
        (self.rate_for(kind) * Decimal::ONE_HUNDRED).normalize()
    }
}
