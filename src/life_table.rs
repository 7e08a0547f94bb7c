//! # Life Expectancy Table (LifeTable)
//!
//! Look up remaining life expectancy by age and gender from a table loaded once at startup.
//!
//! The table is read from a CSV source into a [`LifeData`] frame, validated, then frozen
//! into a plain row vector. After construction every read is a slice index, so a single
//! `LifeTable` can be shared across request handlers behind an `Arc` without locking.
//!
//! ## Quick Start
//! ```rust
//! # use momento_mori::prelude::*;
//! let data = LifeData::from_csv("data/life_expectancy.csv")?;
//! let table = LifeTable::builder().data(data).build()?;
//!
//! let years = table.lookup(25, Gender::Female)?;
//! println!("{years:.1} years left");
//! # MomentoResult::Ok(())
//! ```
//!
//! ## See Also
//! - [`crate::life_table::life_data`] for loading and schema validation
//! - [`crate::imagery`] for mapping a result to presentation imagery

pub mod life_data;

use self::life_data::LifeData;
use crate::MomentoResult;
use crate::error::MomentoError;
use bon::bon;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Ages above this are beyond any data; the page endpoint answers them without a lookup.
pub const AGE_CEILING: u32 = 122;

// ===============================================
// GENDER
// ===============================================

/// Gender column selector for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Header of the CSV column holding this gender's values.
    pub fn column_name(&self) -> &'static str {
        match self {
            Gender::Male => "male life expectancy",
            Gender::Female => "female life expectancy",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!(
                "value '{other}' is not a valid gender, expected 'male' or 'female'"
            )),
        }
    }
}

// ===============================================
// TABLE ROWS AND RESULTS
// ===============================================

/// Years remaining for both genders at one age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpectancyRow {
    pub male: f64,
    pub female: f64,
}

impl ExpectancyRow {
    pub fn get(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

/// A successful lookup, serialized as the API response body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub years_remaining: f64,
    pub age: u32,
    pub gender: Gender,
}

// ===============================================
// LIFE TABLE
// ===============================================

/// Immutable life expectancy table indexed by age.
///
/// Row `i` holds the values for age `i`; [`LifeData`] guarantees contiguity from age 0
/// before the rows are frozen here.
#[derive(Debug, Clone)]
pub struct LifeTable {
    /// Where the data came from, for logs.
    pub description: String,
    rows: Vec<ExpectancyRow>,
}

#[bon]
impl LifeTable {
    #[builder]
    pub fn new(data: LifeData) -> MomentoResult<Self> {
        let rows = data.rows()?;
        debug!(
            rows = rows.len(),
            description = %data.description,
            "life table frozen"
        );

        Ok(LifeTable {
            description: data.description,
            rows,
        })
    }

    /// Number of ages covered, starting at age 0.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Oldest age with data, `None` for an empty table.
    pub fn max_age(&self) -> Option<u32> {
        self.rows
            .len()
            .checked_sub(1)
            .and_then(|last| u32::try_from(last).ok())
    }

    pub fn value_at(&self, age: u32, gender: Gender) -> Option<f64> {
        let index = usize::try_from(age).ok()?;
        self.rows.get(index).map(|row| row.get(gender))
    }

    /// Years remaining for `age` and `gender`.
    ///
    /// # Errors
    /// - [`MomentoError::OutOfRange`] when `age >= row_count()`
    pub fn lookup(&self, age: u32, gender: Gender) -> MomentoResult<f64> {
        self.value_at(age, gender)
            .ok_or_else(|| MomentoError::OutOfRange {
                age,
                rows: self.row_count(),
            })
    }

    pub fn lookup_result(&self, age: u32, gender: Gender) -> MomentoResult<LookupResult> {
        let years_remaining = self.lookup(age, gender)?;
        Ok(LookupResult {
            years_remaining,
            age,
            gender,
        })
    }
}
