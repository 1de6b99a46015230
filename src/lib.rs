//! Convert bank and credit card exports into one canonical CSV layout.
//!
//! Each supported export format is identified by the directory it sits in:
//! `<input_dir>/<tag>/<subdir>/<file>.csv`. Converted files land at the same
//! relative path below the output directory.
//!
//! ```rust,ignore
//! use statement_convert::StatementBuilder;
//!
//! let transactions = StatementBuilder::new()
//!     .filename("in/smbc_v2/main/2025-04.csv")
//!     .parse()?;
//! ```

mod builder;
mod format;
mod reader;
mod types;

pub mod batch;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod normalize;
pub mod parsers;
pub mod registry;
pub mod writer;

pub use batch::BatchSummary;
pub use builder::StatementBuilder;
pub use config::{Config, ConfigFile};
pub use encoding::TextEncoding;
pub use errors::{ConvertError, ConvertResult};
pub use format::FormatDescriptor;
pub use parsers::prelude::*;
pub use reader::RawRow;
pub use registry::Registry;
pub use types::{HEADER, Transaction};
