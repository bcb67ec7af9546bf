//! Adapter that stores explicitly configured setting values.
//!
//! The engine never performs I/O itself; an implementation of
//! [`ConfigAdapter`] owns persistence and its own concurrency. Values are
//! scoped by (domain, optional profile, setting key).

use async_trait::async_trait;
use serde::Serialize;
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::error::CrResult;
use crate::template::TemplateSet;
use crate::types::{DomainId, ProfileId};
use crate::value::SettingValue;

/// One occupied slot of the stored key space. Sortable so export tooling
/// can iterate deterministically.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredKey {
	pub setting_key: Box<str>,
	pub profile: Option<ProfileId>,
}

#[async_trait]
pub trait ConfigAdapter: Debug + Send + Sync {
	/// Read the explicitly stored value for a setting, if any.
	async fn read_stored_value(
		&self,
		domain: &DomainId,
		profile: Option<&ProfileId>,
		key: &str,
	) -> CrResult<Option<SettingValue>>;

	/// The template set active for a domain.
	async fn template_set(&self, domain: &DomainId) -> CrResult<TemplateSet>;

	/// Every occupied (setting, profile) slot of a domain, unordered.
	async fn stored_keys(&self, domain: &DomainId) -> CrResult<Vec<StoredKey>>;
}

// vim: ts=4
