// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

/// Describes a fungible asset: a ticker plus the number of decimal places
/// of its minor unit.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Currency {
    pub ticker: String,
    pub decimals: u8,
}

impl Currency {
    pub fn new(ticker: impl Into<String>, decimals: u8) -> Self {
        Currency {
            ticker: ticker.into(),
            decimals,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ticker)
    }
}

/// A signed amount denominated in one [`Currency`], held as raw minor
/// units. Amounts of different currencies never compare nor combine;
/// checked arithmetic returns `None` on a currency mismatch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenAmount {
    currency: Currency,
    raw: BigInt,
}

impl TokenAmount {
    pub fn new(currency: Currency, raw: impl Into<BigInt>) -> Self {
        TokenAmount {
            currency,
            raw: raw.into(),
        }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(currency, 0)
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn raw(&self) -> &BigInt {
        &self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.raw.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.raw.is_positive()
    }

    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        (self.currency == other.currency)
            .then(|| Self::new(self.currency.clone(), &self.raw + &other.raw))
    }

    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        (self.currency == other.currency)
            .then(|| Self::new(self.currency.clone(), &self.raw - &other.raw))
    }
}

impl Neg for TokenAmount {
    type Output = TokenAmount;

    fn neg(self) -> Self::Output {
        TokenAmount {
            currency: self.currency,
            raw: -self.raw,
        }
    }
}

impl PartialOrd for TokenAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.raw.cmp(&other.raw))
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals as usize;
        if decimals == 0 {
            return write!(f, "{} {}", self.raw, self.currency.ticker);
        }
        let sign = if self.raw.is_negative() { "-" } else { "" };
        let divisor = BigInt::from(10u32).pow(decimals as u32);
        let magnitude = self.raw.abs();
        let units = &magnitude / &divisor;
        let mut minor = (&magnitude % &divisor).to_string();
        while minor.len() < decimals {
            minor.insert(0, '0');
        }
        write!(f, "{sign}{units}.{minor} {}", self.currency.ticker)
    }
}
