//! Directory server debug artifact.

use async_trait::async_trait;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::prelude::*;
use crate::settings::catalog::directory;

use super::{DebugContext, DebugItemGenerator};

/// Live data gathered by probing one directory profile's servers.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryProbeInfo {
	pub connected: bool,
	pub vendor: Option<Box<str>>,
	pub server_time: Option<Timestamp>,
}

/// Collaborator performing the live directory probe. The engine never
/// speaks the directory protocol itself.
#[async_trait]
pub trait DirectoryProber: Send + Sync {
	async fn probe(&self, domain: &DomainId, profile: &ProfileId)
	-> CrResult<DirectoryProbeInfo>;
}

/// Prober used when no live directory is reachable (tests, offline
/// exports). Reports every profile as disconnected.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineProber;

#[async_trait]
impl DirectoryProber for OfflineProber {
	async fn probe(
		&self,
		_domain: &DomainId,
		_profile: &ProfileId,
	) -> CrResult<DirectoryProbeInfo> {
		Ok(DirectoryProbeInfo { connected: false, vendor: None, server_time: None })
	}
}

#[skip_serializing_none]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DirectoryServerEntry {
	profile: ProfileId,
	display_name: Box<str>,
	server_urls: Vec<Box<str>>,
	proxy_username: Box<str>,
	probe: Option<DirectoryProbeInfo>,
}

/// Serializes `directory-servers.json`: one entry per enabled directory
/// profile, in profile-list order.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectoryServersGenerator;

#[async_trait]
impl DebugItemGenerator for DirectoryServersGenerator {
	fn filename(&self) -> &'static str {
		"directory-servers.json"
	}

	async fn generate(&self, ctx: &DebugContext<'_>) -> CrResult<Vec<u8>> {
		let locale = LangTag::default();
		let mut entries = Vec::new();

		for profile in ctx.settings.directory_profiles().await? {
			let view = ctx.settings.for_profile(profile.clone());
			let display_name =
				view.read_localized_string("directory.profile.displayName", &locale).await?;
			let server_urls = view.read_string_array(directory::SERVER_URLS).await?;
			let proxy_username = view.read_string(directory::PROXY_USERNAME).await?;

			let probe = match ctx.prober.probe(ctx.settings.domain(), profile).await {
				Ok(info) => Some(info),
				Err(e) => {
					warn!("directory probe failed for profile '{}': {}", profile, e);
					None
				}
			};

			entries.push(DirectoryServerEntry {
				profile: profile.clone(),
				display_name,
				server_urls,
				proxy_username,
				probe,
			});
		}

		Ok(serde_json::to_vec_pretty(&entries)?)
	}
}

// vim: ts=4
