//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use shotpack::presentation::factory;
//!
//! let use_case = factory::create_build_use_case(&data_dir, None, None)?;
//! let result = use_case.execute(&options)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_build_use_case, create_scene_loader};
pub use output::{create_renderer, BuildResultRenderer, OutputFormat};
