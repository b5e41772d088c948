//! Output formatters for CLI commands
//!
//! Human renderings of result sets and sweep tables. JSON output goes
//! through serde directly and does not pass through here.

mod results;

pub use results::{render_counts, render_results, render_summary};
