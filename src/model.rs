use std::{fmt, str::FromStr};
use thiserror::Error;


pub type ItemId = u32;

// One purchasable item on the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: ItemId,
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

// Amount of money in whole cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price {
    cents: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("price {0:?} does not start with '$'")]
    MissingSymbol(String),
    #[error("price {0:?} is not a decimal amount")]
    NotANumber(String),
    #[error("price {0:?} has more than two decimal places")]
    TooPrecise(String),
    #[error("price {0:?} is too large")]
    Overflow(String),
}


impl MenuItem {
    // Parsed price of this item
    pub fn unit_price(&self) -> Result<Price, PriceError> {
        self.price.parse()
    }
}


impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Price { cents }
    }

    pub fn times(self, count: u32) -> Price {
        Price::from_cents(self.cents.saturating_mul(u64::from(count)))
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    // Accepts "$D", "$D.D" and "$D.DD"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let amount = raw
            .strip_prefix('$')
            .ok_or_else(|| PriceError::MissingSymbol(s.to_string()))?;

        let (whole, frac) = match amount.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (amount, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(frac) {
            return Err(PriceError::NotANumber(s.to_string()));
        }
        if amount.ends_with('.') {
            return Err(PriceError::NotANumber(s.to_string()));
        }
        if frac.len() > 2 {
            return Err(PriceError::TooPrecise(s.to_string()));
        }

        let dollars: u64 = whole
            .parse()
            .map_err(|_| PriceError::Overflow(s.to_string()))?;
        let cents: u64 = match frac.len() {
            0 => 0,
            1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => u64::from(frac.as_bytes()[0] - b'0') * 10 + u64::from(frac.as_bytes()[1] - b'0'),
        };

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Price::from_cents)
            .ok_or_else(|| PriceError::Overflow(s.to_string()))
    }
}
