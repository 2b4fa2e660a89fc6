//! Distance-based fare tiers.

use serde::{Deserialize, Serialize};

/// Error from an inconsistent fare table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    /// Tier bounds must be finite and non-negative
    #[error("fare tier {index} has invalid bound {bound}")]
    InvalidBound { index: usize, bound: f64 },

    /// Tier bounds must be strictly ascending
    #[error("fare tier {index} bound {bound} does not exceed the previous bound {previous}")]
    NotAscending {
        index: usize,
        bound: f64,
        previous: f64,
    },
}

/// One step of the fare table: distances up to and including `max_distance`
/// cost `fare`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareTier {
    pub max_distance: f64,
    pub fare: u32,
}

/// Step function from travelled distance to fare.
///
/// Tiers are checked in ascending order of `max_distance`; distances beyond
/// the last tier pay `beyond`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareTable {
    tiers: Vec<FareTier>,
    beyond: u32,
}

impl FareTable {
    /// Create a fare table, checking that tier bounds strictly ascend.
    pub fn new(tiers: Vec<FareTier>, beyond: u32) -> Result<Self, FareError> {
        let table = Self { tiers, beyond };
        table.validate()?;
        Ok(table)
    }

    /// Check tier bounds. Tables read from configuration bypass `new`, so
    /// callers loading them must run this.
    pub fn validate(&self) -> Result<(), FareError> {
        let mut previous: Option<f64> = None;
        for (index, tier) in self.tiers.iter().enumerate() {
            let bound = tier.max_distance;
            if !bound.is_finite() || bound < 0.0 {
                return Err(FareError::InvalidBound { index, bound });
            }
            if let Some(previous) = previous
                && bound <= previous
            {
                return Err(FareError::NotAscending {
                    index,
                    bound,
                    previous,
                });
            }
            previous = Some(bound);
        }
        Ok(())
    }

    /// Fare for travelling `distance`.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_server::planner::FareTable;
    ///
    /// let fares = FareTable::default();
    /// assert_eq!(fares.fare_for(0.0), 5);
    /// assert_eq!(fares.fare_for(7.5), 15);
    /// assert_eq!(fares.fare_for(42.0), 25);
    /// ```
    pub fn fare_for(&self, distance: f64) -> u32 {
        self.tiers
            .iter()
            .find(|tier| distance <= tier.max_distance)
            .map(|tier| tier.fare)
            .unwrap_or(self.beyond)
    }

    /// The cheapest fare in the table.
    pub fn lowest(&self) -> u32 {
        self.fare_for(0.0)
    }

    /// Tiers in ascending order.
    pub fn tiers(&self) -> &[FareTier] {
        &self.tiers
    }
}

impl Default for FareTable {
    fn default() -> Self {
        let tier = |max_distance, fare| FareTier { max_distance, fare };
        Self {
            tiers: vec![
                tier(2.0, 5),
                tier(5.0, 10),
                tier(10.0, 15),
                tier(20.0, 20),
            ],
            beyond: 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_breakpoints() {
        let fares = FareTable::default();

        assert_eq!(fares.fare_for(2.0), 5);
        assert_eq!(fares.fare_for(2.01), 10);
        assert_eq!(fares.fare_for(5.0), 10);
        assert_eq!(fares.fare_for(10.0), 15);
        assert_eq!(fares.fare_for(20.0), 20);
        assert_eq!(fares.fare_for(20.01), 25);
    }

    #[test]
    fn zero_distance_is_lowest_tier() {
        let fares = FareTable::default();
        assert_eq!(fares.fare_for(0.0), 5);
        assert_eq!(fares.lowest(), 5);
    }

    #[test]
    fn empty_table_charges_flat_fare() {
        let fares = FareTable::new(vec![], 30).unwrap();
        assert_eq!(fares.fare_for(0.0), 30);
        assert_eq!(fares.fare_for(100.0), 30);
    }

    #[test]
    fn custom_table() {
        let fares = FareTable::new(
            vec![
                FareTier {
                    max_distance: 3.0,
                    fare: 12,
                },
                FareTier {
                    max_distance: 12.0,
                    fare: 24,
                },
            ],
            40,
        )
        .unwrap();

        assert_eq!(fares.fare_for(3.0), 12);
        assert_eq!(fares.fare_for(11.9), 24);
        assert_eq!(fares.fare_for(12.5), 40);
    }

    #[test]
    fn descending_bounds_rejected() {
        let result = FareTable::new(
            vec![
                FareTier {
                    max_distance: 5.0,
                    fare: 10,
                },
                FareTier {
                    max_distance: 2.0,
                    fare: 5,
                },
            ],
            25,
        );
        assert_eq!(
            result.unwrap_err(),
            FareError::NotAscending {
                index: 1,
                bound: 2.0,
                previous: 5.0
            }
        );
    }

    #[test]
    fn repeated_bound_rejected() {
        let tier = FareTier {
            max_distance: 5.0,
            fare: 10,
        };
        assert!(FareTable::new(vec![tier, tier], 25).is_err());
    }

    #[test]
    fn negative_bound_rejected() {
        let tier = FareTier {
            max_distance: -1.0,
            fare: 10,
        };
        assert_eq!(
            FareTable::new(vec![tier], 25).unwrap_err(),
            FareError::InvalidBound {
                index: 0,
                bound: -1.0
            }
        );
    }

    #[test]
    fn deserialize_from_json() {
        let fares: FareTable = serde_json::from_str(
            r#"{"tiers": [{"max_distance": 4, "fare": 8}], "beyond": 16}"#,
        )
        .unwrap();
        assert!(fares.validate().is_ok());
        assert_eq!(fares.fare_for(4.0), 8);
        assert_eq!(fares.fare_for(4.5), 16);
    }
}
