// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Presentation of analysis results.
//!
//! [`ReviewSummary`] gathers the pipeline output for one branch;
//! [`Reporter`] turns it into panels on the terminal or JSON.

mod render;
mod summary;

pub use render::Reporter;
pub use summary::{DiffTotals, ReviewSummary};
