//! Retry policy for failed page fetches.

use std::time::Duration;

use cardscout_core::RetrySettings;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug, PartialEq)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ (failures - 1))`.
    Exponential {
        /// The delay before the first retry.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
    },
}

/// Retry policy applied to one page at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Retries allowed after the first failed attempt; `None` never gives up.
    pub max_retries: Option<u32>,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetrySettings::default())
    }
}

impl From<&RetrySettings> for RetryPolicy {
    fn from(settings: &RetrySettings) -> Self {
        if settings.unbounded {
            return Self { max_retries: None, backoff: Backoff::Fixed(settings.base_delay()) };
        }

        Self {
            max_retries: Some(settings.max_retries),
            backoff: Backoff::Exponential {
                base: settings.base_delay(),
                factor: settings.factor,
                max: settings.max_delay(),
            },
        }
    }
}

impl RetryPolicy {
    /// Fixed 5s cooldown, retrying the same page forever.
    pub fn unbounded() -> Self {
        Self { max_retries: None, backoff: Backoff::Fixed(Duration::from_secs(5)) }
    }

    /// Delay to wait after the `failures`-th consecutive failure (1-based),
    /// or `None` once the retry budget is spent.
    pub fn delay_for(&self, failures: u32) -> Option<Duration> {
        if let Some(max) = self.max_retries
            && failures > max
        {
            return None;
        }

        let delay = match &self.backoff {
            Backoff::Fixed(delay) => *delay,
            Backoff::Exponential { base, factor, max } => {
                let exponent = i32::try_from(failures.saturating_sub(1)).unwrap_or(i32::MAX);
                let secs = base.as_secs_f64() * factor.powi(exponent);
                if secs.is_finite() && secs < max.as_secs_f64() { Duration::from_secs_f64(secs) } else { *max }
            }
        };

        Some(delay)
    }
}
