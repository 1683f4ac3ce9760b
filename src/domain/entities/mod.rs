//! Domain Entities
//!
//! - `ShotContext` - validated shot/task identity
//! - `AssetTask` / `PublishRecord` - rows supplied by a record source
//! - `Compound` - resolved per-asset-variant bundle
//! - `LightingPackage` - final assembled artifact

mod compound;
mod package;
mod publish;
mod shot_context;

pub use compound::Compound;
pub use package::{LightingPackage, PackageMetadata};
pub use publish::{AssetTask, PublishRecord};
pub use shot_context::ShotContext;
