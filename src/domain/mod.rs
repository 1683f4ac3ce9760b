//! Domain Layer
//!
//! The core of Shotpack - pure selection and validation logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Shot context, publish records, compounds, packages
//! - `services/` - Context resolver, validators, variant resolver, builders
//! - `ports/` - Record source, config provider and scene loader traits
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
