//! Ordinal company-size buckets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Company-size bucket, ordered from smallest to largest
///
/// The derived `Ord` follows declaration order, which is the display order
/// every view must preserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    /// 2-50 employees (code 1)
    #[serde(rename = "2-50 employees")]
    Tiny,
    /// 51-200 employees (code 2)
    #[serde(rename = "51-200 employees")]
    Small,
    /// 201-500 employees (code 3)
    #[serde(rename = "201-500 employees")]
    Medium,
    /// 501-1000 employees (code 4)
    #[serde(rename = "501-1000 employees")]
    Large,
    /// 1001-5000 employees (code 5)
    #[serde(rename = "1001-5000 employees")]
    VeryLarge,
    /// 5001-10,000 employees (code 6)
    #[serde(rename = "5001-10,000 employees")]
    Enterprise,
    /// 10,001+ employees (code 7)
    #[serde(rename = "10,001+ employees")]
    Giant,
}

impl CompanySize {
    /// All buckets in ordinal order
    pub const ALL: [Self; 7] = [
        Self::Tiny,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::VeryLarge,
        Self::Enterprise,
        Self::Giant,
    ];

    /// Map an ordinal code (1-7) to its bucket
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Tiny),
            2 => Some(Self::Small),
            3 => Some(Self::Medium),
            4 => Some(Self::Large),
            5 => Some(Self::VeryLarge),
            6 => Some(Self::Enterprise),
            7 => Some(Self::Giant),
            _ => None,
        }
    }

    /// Map a numeric column value to its bucket
    ///
    /// The size column is read as a float; only exact integral codes map.
    #[must_use]
    pub fn from_value(value: f64) -> Option<Self> {
        if value.fract() != 0.0 || !(1.0..=7.0).contains(&value) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self::from_code(value as u8)
    }

    /// The ordinal code of this bucket
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tiny => "2-50 employees",
            Self::Small => "51-200 employees",
            Self::Medium => "201-500 employees",
            Self::Large => "501-1000 employees",
            Self::VeryLarge => "1001-5000 employees",
            Self::Enterprise => "5001-10,000 employees",
            Self::Giant => "10,001+ employees",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
