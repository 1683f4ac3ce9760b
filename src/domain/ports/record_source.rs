//! RecordSource port - read-only lookup of tasks and publishes for a shot
//!
//! The persisted store (database export, tracker API, fixture files) lives
//! behind this trait; the domain only sees already-fetched rows.

use std::collections::BTreeSet;

use crate::domain::entities::{AssetTask, PublishRecord, ShotContext};
use crate::error::ShotpackResult;

pub trait RecordSource {
    /// Asset tasks declared for the shot, ordered by asset name.
    fn load_shot_assets(&self, context: &ShotContext) -> ShotpackResult<Vec<AssetTask>>;

    /// Publishes for the given assets within the shot.
    ///
    /// Within each (asset, step, publish_type, variant) group only the
    /// `max_versions` highest versions are returned, highest first.
    fn load_publishes_for_assets(
        &self,
        context: &ShotContext,
        assets: &BTreeSet<String>,
        max_versions: usize,
    ) -> ShotpackResult<Vec<PublishRecord>>;
}

impl<T: RecordSource + ?Sized> RecordSource for &T {
    fn load_shot_assets(&self, context: &ShotContext) -> ShotpackResult<Vec<AssetTask>> {
        (**self).load_shot_assets(context)
    }

    fn load_publishes_for_assets(
        &self,
        context: &ShotContext,
        assets: &BTreeSet<String>,
        max_versions: usize,
    ) -> ShotpackResult<Vec<PublishRecord>> {
        (**self).load_publishes_for_assets(context, assets, max_versions)
    }
}
