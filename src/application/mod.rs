//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildPackageUseCase` - Orchestrates the build flow (context, selection,
//!   publishes, validation, variants, compounds, load)

pub mod build;

pub use build::{BuildOptions, BuildPackageUseCase, BuildResult};
