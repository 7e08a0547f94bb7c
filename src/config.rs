//! # Server Configuration
//!
//! Startup settings for the HTTP service. Built with a builder so the binary can pass
//! through only what the command line or environment supplied; everything else falls back
//! to defaults that work from the repository root.
//!
//! ```rust
//! # use momento_mori::prelude::*;
//! let config = ServerConfig::builder()
//!     .data_path("data/life_expectancy.csv")
//!     .build()?;
//! assert_eq!(config.bind.port(), 8000);
//! # MomentoResult::Ok(())
//! ```

use crate::MomentoResult;
use crate::error::MomentoError;
use bon::bon;
use garde::Validate;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_BIND: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8000);
pub const DEFAULT_DATA_PATH: &str = "data/life_expectancy.csv";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, Validate)]
#[garde(allow_unvalidated)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub bind: SocketAddr,

    /// CSV file holding the life expectancy table.
    #[garde(custom(validate_path))]
    pub data_path: PathBuf,

    /// Directory served under `/static`.
    #[garde(custom(validate_path))]
    pub static_dir: PathBuf,
}

fn validate_path(value: &PathBuf, _context: &()) -> garde::Result {
    if value.as_os_str().is_empty() {
        return Err(garde::Error::new("path cannot be empty"));
    }
    Ok(())
}

#[bon]
impl ServerConfig {
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_BIND)] bind: SocketAddr,
        #[builder(into, default = PathBuf::from(DEFAULT_DATA_PATH))] data_path: PathBuf,
        #[builder(into, default = PathBuf::from(DEFAULT_STATIC_DIR))] static_dir: PathBuf,
    ) -> MomentoResult<Self> {
        let config = ServerConfig {
            bind,
            data_path,
            static_dir,
        };

        config.validate().map_err(MomentoError::Config)?;
        Ok(config)
    }
}
