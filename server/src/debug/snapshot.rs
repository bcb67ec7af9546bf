//! Full configuration snapshot artifact.

use async_trait::async_trait;
use serde::Serialize;

use credano_types::value::{SettingSyntax, SettingValue};

use crate::prelude::*;

use super::{DebugContext, DebugItemGenerator};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingSnapshot<'a> {
	key: &'a str,
	menu_location: String,
	syntax: SettingSyntax,
	value: SettingValue,
}

/// Serializes `settings.json`: every setting's effective domain-scope value
/// in catalog menu order. Secret material is redacted by the value model.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettingsSnapshotGenerator;

#[async_trait]
impl DebugItemGenerator for SettingsSnapshotGenerator {
	fn filename(&self) -> &'static str {
		"settings.json"
	}

	async fn generate(&self, ctx: &DebugContext<'_>) -> CrResult<Vec<u8>> {
		let catalog = ctx.settings.catalog().clone();
		let mut entries = Vec::with_capacity(catalog.len());

		for def in catalog.sorted() {
			let value = ctx.settings.effective_value(def.key()).await?;
			entries.push(SettingSnapshot {
				key: def.key(),
				menu_location: def.menu_location(None),
				syntax: def.syntax(),
				value,
			});
		}

		Ok(serde_json::to_vec_pretty(&entries)?)
	}
}

// vim: ts=4
