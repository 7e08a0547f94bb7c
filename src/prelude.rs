//! # Momento Mori Prelude
//!
//! Re-exports the types needed to load a table, run lookups and serve them.
//!
//! ## Example
//!
//! ```rust
//! # use momento_mori::prelude::*;
//! let data = ledf! {
//!     "age" => [0_u32, 1],
//!     "male life expectancy" => [76.0_f64, 75.4],
//!     "female life expectancy" => [81.0_f64, 80.4],
//! }?;
//! let table = LifeTable::builder().data(data).build()?;
//! let app = router(AppState::new(table), "static");
//! # let _ = app;
//! # MomentoResult::Ok(())
//! ```

// Package Result type and errors
pub use crate::MomentoResult;
pub use crate::error::{FieldError, MomentoError};

// Table loading and lookup
pub use crate::life_table::life_data::LifeData;
pub use crate::life_table::{AGE_CEILING, ExpectancyRow, Gender, LifeTable, LookupResult};

// Presentation
pub use crate::imagery::ImageBucket;

// Request parameters
pub use crate::params::{
    LookupRequest, PageRequest, RawExpectancyQuery, parse_api_query, parse_page_query,
};

// Service wiring
pub use crate::config::ServerConfig;
pub use crate::ledf;
pub use crate::telemetry::init_tracing;
pub use crate::web::{AppState, router};
