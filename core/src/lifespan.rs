//! Weeks-lived arithmetic and input validation
//!
//! A [`LifeSpan`] fixes the grid capacity (90 years of 52 weeks by default);
//! [`WeeksLived`] is the clamped count of 7-day periods between a birth date
//! and a reference date. How out-of-range inputs are treated is a
//! [`ValidationPolicy`] chosen by the caller, not a hardcoded rule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Oldest believable age, in years. Advisory bound enforced only under
/// [`ValidationPolicy::Strict`].
pub const MAX_PLAUSIBLE_AGE_YEARS: u32 = 120;

/// Total lifespan the grid represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeSpan {
    pub years: u32,
    pub weeks_per_year: u32,
}

impl LifeSpan {
    pub const fn total_weeks(&self) -> u32 {
        self.years * self.weeks_per_year
    }
}

impl Default for LifeSpan {
    fn default() -> Self {
        Self {
            years: 90,
            weeks_per_year: 52,
        }
    }
}

/// How to treat birth dates that are in the future or implausibly far back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Future birth dates clamp to zero weeks lived; no age bound.
    Clamp,
    /// Future birth dates and ages beyond [`MAX_PLAUSIBLE_AGE_YEARS`] are
    /// rejected.
    #[default]
    Strict,
}

/// Invalid birth-date inputs under [`ValidationPolicy::Strict`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgeError {
    #[error("birth date {birth} is after the reference date {today}")]
    BirthInFuture { birth: NaiveDate, today: NaiveDate },

    #[error("an age of {years} years is beyond the plausible bound of {max}")]
    ImplausibleAge { years: u32, max: u32 },
}

/// Weeks lived out of a lifespan, clamped to the grid capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeksLived {
    lived: u32,
    span: LifeSpan,
}

impl WeeksLived {
    /// Compute weeks lived between two dates under the given policy.
    ///
    /// The raw count is `floor(days / 7)`, clamped to `[0, total_weeks]`.
    pub fn between(
        birth: NaiveDate,
        today: NaiveDate,
        span: LifeSpan,
        policy: ValidationPolicy,
    ) -> Result<Self, AgeError> {
        let days = (today - birth).num_days();

        if policy == ValidationPolicy::Strict {
            if days < 0 {
                return Err(AgeError::BirthInFuture { birth, today });
            }
            let age_years = (days as f64 / 365.25) as u32;
            if age_years > MAX_PLAUSIBLE_AGE_YEARS {
                return Err(AgeError::ImplausibleAge {
                    years: age_years,
                    max: MAX_PLAUSIBLE_AGE_YEARS,
                });
            }
        }

        let raw = if days < 0 { 0 } else { (days / 7) as u64 };
        let lived = raw.min(span.total_weeks() as u64) as u32;
        Ok(Self { lived, span })
    }

    /// Build directly from an already-known count. Still clamped.
    pub fn from_count(lived: u32, span: LifeSpan) -> Self {
        Self {
            lived: lived.min(span.total_weeks()),
            span,
        }
    }

    pub fn lived(&self) -> u32 {
        self.lived
    }

    pub fn span(&self) -> LifeSpan {
        self.span
    }

    pub fn remaining(&self) -> u32 {
        self.span.total_weeks() - self.lived
    }

    /// Fraction of the lifespan lived, as a percentage in `[0, 100]`.
    pub fn percent_lived(&self) -> f64 {
        self.lived as f64 / self.span.total_weeks() as f64 * 100.0
    }

    /// Whether the cell at `index` (0-based week number) is drawn filled.
    pub fn is_filled(&self, index: u32) -> bool {
        index < self.lived
    }
}
