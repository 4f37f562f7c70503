//! Output generation for ingested records.
//!
//! # Submodules
//!
//! - [`csv`]: Writes record sequences to CSV files, header row derived from
//!   the record's field names
//!
//! # Output Structure
//!
//! ```text
//! data/raw/
//! ├── news_articles.csv    # one row per ArticleRecord
//! └── press_releases.csv   # one row per PressReleaseRecord
//! ```

pub mod csv;
