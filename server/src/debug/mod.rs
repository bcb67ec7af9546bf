//! Per-domain debug-data export.
//!
//! Each generator serializes one named JSON artifact built from obfuscated
//! configuration (secrets are redacted by the value model) plus live
//! directory probe data. Array ordering always matches the source list
//! order so exports diff reproducibly.

use async_trait::async_trait;

use crate::prelude::*;
use crate::settings::reader::DomainSettings;

pub mod directory;
pub mod snapshot;

pub use directory::{
	DirectoryProbeInfo, DirectoryProber, DirectoryServersGenerator, OfflineProber,
};
pub use snapshot::SettingsSnapshotGenerator;

/// Everything a generator may draw on.
pub struct DebugContext<'a> {
	pub settings: &'a DomainSettings,
	pub prober: &'a dyn DirectoryProber,
}

#[async_trait]
pub trait DebugItemGenerator: Send + Sync {
	/// Name of the produced artifact, e.g. `"directory-servers.json"`.
	fn filename(&self) -> &'static str;

	async fn generate(&self, ctx: &DebugContext<'_>) -> CrResult<Vec<u8>>;
}

// vim: ts=4
