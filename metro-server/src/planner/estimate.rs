//! Travel time and fare estimates.

use chrono::Duration;

use super::config::FareConfig;

/// Error from estimating a journey.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    /// The estimate does not fit in a duration or fare
    #[error("estimate overflows for {stations_traveled} stations and {interchanges} interchanges")]
    Overflow {
        stations_traveled: usize,
        interchanges: usize,
    },
}

/// Estimated travel time and fare for a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    /// Total travel time, including interchange time
    pub time: Duration,

    /// Total fare
    pub cost: u32,
}

impl Estimate {
    /// Estimate a journey from its station and interchange counts.
    ///
    /// Time is `stations × per-station time + interchanges × interchange
    /// time`; cost is `stations × per-station fare`. Any interchange count
    /// is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Overflow`] if either total is unrepresentable.
    pub fn compute(
        stations_traveled: usize,
        interchanges: usize,
        config: &FareConfig,
    ) -> Result<Self, EstimateError> {
        let overflow = || EstimateError::Overflow {
            stations_traveled,
            interchanges,
        };

        let stations = i32::try_from(stations_traveled).map_err(|_| overflow())?;
        let changes = i32::try_from(interchanges).map_err(|_| overflow())?;

        let travel = config.per_station().checked_mul(stations);
        let changing = config.per_interchange().checked_mul(changes);
        let time = travel
            .zip(changing)
            .and_then(|(travel, changing)| travel.checked_add(&changing))
            .ok_or_else(overflow)?;

        let cost = u32::try_from(stations_traveled)
            .ok()
            .and_then(|n| n.checked_mul(config.fare_per_station()))
            .ok_or_else(overflow)?;

        Ok(Self { time, cost })
    }

    /// Estimated time in whole minutes.
    pub fn time_mins(&self) -> i64 {
        self.time.num_minutes()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Estimates are linear in both counts.
        #[test]
        fn linear_in_counts(
            n in 0usize..500,
            k in 0usize..5,
            t in 0i64..10,
            i in 0i64..30,
            c in 0u32..100,
        ) {
            let config = FareConfig::new(t, i, c).unwrap();
            let estimate = Estimate::compute(n, k, &config).unwrap();

            prop_assert_eq!(estimate.time_mins(), n as i64 * t + k as i64 * i);
            prop_assert_eq!(estimate.cost, n as u32 * c);
        }
    }
}
