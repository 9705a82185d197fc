// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration front end for the testforge test generator.
//!
//! ```
//! use testforge::ConfigurationBuilder;
//!
//! let config = ConfigurationBuilder::new()
//!     .set_verbose()
//!     .set_log_file("/tmp/testforge.log")
//!     .build();
//! assert!(config.verbose());
//! assert!(!config.quiet());
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod discovery;
pub mod error;
pub mod logging;


pub use config::{Configuration, ConfigurationBuilder};
pub use error::{Error, Result};
