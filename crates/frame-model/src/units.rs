//! Time units for date differences.
//!
//! A unit is identified by a single-character code:
//! - `D`: days (86400 seconds)
//! - `h`: hours
//! - `m`: minutes
//! - `s`: seconds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnitParseError;

/// Unit a date difference is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateUnit {
    #[default]
    #[serde(rename = "D")]
    Days,
    #[serde(rename = "h")]
    Hours,
    #[serde(rename = "m")]
    Minutes,
    #[serde(rename = "s")]
    Seconds,
}

impl DateUnit {
    /// Every accepted unit, in the order used by error messages.
    pub const ALL: [DateUnit; 4] = [
        DateUnit::Days,
        DateUnit::Hours,
        DateUnit::Minutes,
        DateUnit::Seconds,
    ];

    /// The single-character code of this unit.
    pub fn code(self) -> &'static str {
        match self {
            DateUnit::Days => "D",
            DateUnit::Hours => "h",
            DateUnit::Minutes => "m",
            DateUnit::Seconds => "s",
        }
    }

    /// Length of one unit in seconds.
    pub fn seconds(self) -> i64 {
        match self {
            DateUnit::Days => 86_400,
            DateUnit::Hours => 3_600,
            DateUnit::Minutes => 60,
            DateUnit::Seconds => 1,
        }
    }

    /// Human-readable name, used in CLI listings.
    pub fn label(self) -> &'static str {
        match self {
            DateUnit::Days => "days",
            DateUnit::Hours => "hours",
            DateUnit::Minutes => "minutes",
            DateUnit::Seconds => "seconds",
        }
    }

    /// The accepted codes rendered as a list, e.g. `['D', 'h', 'm', 's']`.
    pub fn accepted_codes() -> String {
        let codes: Vec<String> = Self::ALL
            .iter()
            .map(|unit| format!("'{}'", unit.code()))
            .collect();
        format!("[{}]", codes.join(", "))
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DateUnit {
    type Err = UnitParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.code() == value)
            .ok_or_else(|| UnitParseError {
                value: value.to_string(),
            })
    }
}
