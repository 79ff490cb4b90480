use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month, labelled as "Mon YYYY".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    // Field order matters for the derived ordering
    pub year: i32,
    /// 1-based
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            anyhow::bail!("Month out of range: {}", month);
        }
        Ok(Self { year, month })
    }

    /// The following month, rolling December over into January of the next year.
    pub fn next(self) -> Self {
        if self.month >= 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl FromStr for Period {
    type Err = anyhow::Error;

    fn from_str(label: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&format!("1 {}", label.trim()), "%d %b %Y")
            .with_context(|| format!("Invalid period '{}', expected e.g. 'Jan 2021'", label))?;
        Ok(Self {
            year: date.year(),
            month: date.month(),
        })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = (self.month.clamp(1, 12) - 1) as usize;
        write!(f, "{} {}", MONTH_ABBREVIATIONS[index], self.year)
    }
}
