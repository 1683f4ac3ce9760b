//! Build Module
//!
//! Orchestrates building a lighting package for a shot.
//!
//! ## Structure
//!
//! - `options` - Request type (`BuildOptions`)
//! - `result` - Result type (`BuildResult`)
//! - `use_case` - Core use case logic (`BuildPackageUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use shotpack::application::build::{BuildOptions, BuildPackageUseCase};
//!
//! let use_case = BuildPackageUseCase::new(config, records, loader);
//! let result = use_case.execute(&BuildOptions::new("PRJ", "SQ010", "SH010"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::BuildOptions;
pub use result::BuildResult;
pub use use_case::BuildPackageUseCase;
