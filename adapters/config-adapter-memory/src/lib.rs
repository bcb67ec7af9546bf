//! In-memory stored-configuration adapter.
//!
//! Holds explicit setting values and per-domain template sets in process
//! memory. Used by the test suites and by embedding applications that load
//! configuration from their own source and hand it over at startup.

#![forbid(unsafe_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

use credano_types::config_adapter::{ConfigAdapter, StoredKey};
use credano_types::prelude::*;
use credano_types::template::TemplateSet;
use credano_types::value::SettingValue;

type ValueKey = (Option<ProfileId>, Box<str>);

#[derive(Debug, Default)]
struct State {
	values: HashMap<DomainId, BTreeMap<ValueKey, SettingValue>>,
	templates: HashMap<DomainId, TemplateSet>,
}

#[derive(Debug, Default)]
pub struct MemoryConfigAdapter {
	state: RwLock<State>,
}

impl MemoryConfigAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store an explicit value for a (domain, profile, setting) slot.
	pub fn set_value(
		&self,
		domain: &DomainId,
		profile: Option<&ProfileId>,
		key: &str,
		value: SettingValue,
	) {
		self.state
			.write()
			.values
			.entry(domain.clone())
			.or_default()
			.insert((profile.cloned(), key.into()), value);
	}

	/// Remove an explicit value, falling resolution back to defaults.
	pub fn clear_value(&self, domain: &DomainId, profile: Option<&ProfileId>, key: &str) {
		if let Some(values) = self.state.write().values.get_mut(domain) {
			values.remove(&(profile.cloned(), Box::from(key)));
		}
	}

	/// Set the template set active for a domain. Domains without an entry
	/// use the system default set.
	pub fn set_template_set(&self, domain: &DomainId, template_set: TemplateSet) {
		self.state.write().templates.insert(domain.clone(), template_set);
	}
}

#[async_trait]
impl ConfigAdapter for MemoryConfigAdapter {
	async fn read_stored_value(
		&self,
		domain: &DomainId,
		profile: Option<&ProfileId>,
		key: &str,
	) -> CrResult<Option<SettingValue>> {
		let state = self.state.read();
		Ok(state
			.values
			.get(domain)
			.and_then(|values| values.get(&(profile.cloned(), Box::from(key))))
			.cloned())
	}

	async fn template_set(&self, domain: &DomainId) -> CrResult<TemplateSet> {
		let state = self.state.read();
		Ok(state.templates.get(domain).cloned().unwrap_or_default())
	}

	async fn stored_keys(&self, domain: &DomainId) -> CrResult<Vec<StoredKey>> {
		let state = self.state.read();
		Ok(state
			.values
			.get(domain)
			.map(|values| {
				values
					.keys()
					.map(|(profile, key)| StoredKey {
						setting_key: key.clone(),
						profile: profile.clone(),
					})
					.collect()
			})
			.unwrap_or_default())
	}
}

// vim: ts=4
