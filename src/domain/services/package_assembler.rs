//! Package assembler

use chrono::{DateTime, Utc};

use crate::domain::entities::{Compound, LightingPackage, PackageMetadata, ShotContext};

/// Wrap context and compounds into a package stamped with the current time.
pub fn assemble_package(context: ShotContext, compounds: Vec<Compound>) -> LightingPackage {
    assemble_package_at(context, compounds, Utc::now())
}

pub fn assemble_package_at(
    context: ShotContext,
    compounds: Vec<Compound>,
    created_at_utc: DateTime<Utc>,
) -> LightingPackage {
    let metadata = PackageMetadata {
        created_at_utc,
        compound_count: compounds.len(),
    };
    LightingPackage {
        context,
        compounds,
        metadata,
    }
}
