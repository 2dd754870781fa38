//! Income model
//!
//! An income snapshot stores only the yearly figure; the monthly and
//! weekly amounts are always derived from it, never stored. The most
//! recently created snapshot is the current one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;

/// A yearly income snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    /// Unique identifier
    pub id: IncomeId,

    /// Yearly income
    pub yearly: Money,

    /// When the snapshot was created
    pub created_at: DateTime<Utc>,
}

impl Income {
    /// Create a new income snapshot
    pub fn new(yearly: Money) -> Self {
        Self {
            id: IncomeId::new(),
            yearly,
            created_at: Utc::now(),
        }
    }

    /// Derived monthly income (yearly / 12, cents rounded half-to-even)
    pub fn monthly(&self) -> Money {
        self.yearly.div_rounded(12)
    }

    /// Derived weekly income (yearly / 52, cents rounded half-to-even)
    pub fn weekly(&self) -> Money {
        self.yearly.div_rounded(52)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_amounts() {
        let income = Income::new(Money::from_cents(5_200_000)); // $52,000.00
        assert_eq!(income.monthly().cents(), 433_333); // $4,333.33
        assert_eq!(income.weekly().cents(), 100_000); // $1,000.00
    }

    #[test]
    fn test_only_yearly_is_persisted() {
        let income = Income::new(Money::from_cents(6_000_000));
        let json = serde_json::to_string(&income).unwrap();
        assert!(json.contains("yearly"));
        assert!(!json.contains("monthly"));
        assert!(!json.contains("weekly"));
    }
}
