// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for review-ready.
//!
//! This module handles locating, loading and parsing `review-ready.toml`.

mod loader;
mod schema;

pub use loader::{find_config_file, find_config_file_from, load_config, load_config_from, parse_config};
pub use schema::*;
