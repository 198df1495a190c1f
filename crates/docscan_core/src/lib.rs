//! Docscan core: status vocabulary, tally and row types. No IO.
mod expected;
mod rows;
mod tally;

pub use expected::{ExpectedStatusMap, StatusEntry};
pub use rows::{ArticleRow, VersionRow};
pub use tally::{StatusTally, TOTAL_LABEL};
