//! # Momento Mori
//!
//! A small life expectancy service: look up the years someone has left by age and gender,
//! then show it as JSON or as a page with imagery to match.
//!
//! ## Features
//! - **Load Once**: The table is read from CSV at startup, validated, and frozen; lookups are plain slice reads
//! - **Typed Inputs**: Query parameters are parsed into closed types and validated with `garde`
//! - **Two Surfaces**: JSON API and HTML pages share one validated lookup path
//! - **Imagery Buckets**: Remaining years map to one of four image buckets
//!
//! ## Quick Start
//!
//! ```rust
//! use momento_mori::prelude::*;
//!
//! let data = LifeData::from_csv("data/life_expectancy.csv")?;
//! let table = LifeTable::builder().data(data).build()?;
//!
//! let years = table.lookup(20, Gender::Male)?;
//! let bucket = ImageBucket::select(years);
//!
//! println!("{years:.1} years left, showing {}", bucket.file_name());
//! # MomentoResult::Ok(())
//! ```
//!
//! ## Modules
//!
//! - [`life_table`]: table loading and lookup
//! - [`imagery`]: image bucket selection
//! - [`params`]: query parameter parsing and validation
//! - [`web`]: axum router and handlers
//! - [`config`], [`telemetry`]: startup settings and logging

pub type MomentoResult<T> = Result<T, error::MomentoError>;

/// Crate version reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod imagery;
pub mod life_table;
pub mod macros;
pub mod params;
pub mod prelude;
pub mod telemetry;
pub mod web;
