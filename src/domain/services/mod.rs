//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.
//!
//! Pipeline order: context → selection → publish validation → variant
//! resolution → compounds → package.

mod compound_builder;
mod context_resolver;
mod package_assembler;
mod publish_validator;
mod selection;
mod variant_resolver;

pub use compound_builder::build_compounds;
pub use context_resolver::{ensure_allowed_step, resolve_shot_context, LIGHTING_STEP};
pub use package_assembler::{assemble_package, assemble_package_at};
pub use publish_validator::{has_allowed_extension, validate_publishes, validate_publishes_for};
pub use selection::validate_asset_selection;
pub use variant_resolver::{
    effective_selection, resolve_variants, resolve_variants_detailed, VariantFallback,
    VariantResolution, QUALITY_AXIS,
};
