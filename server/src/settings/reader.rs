//! Per-domain settings reader with caching and typed accessors.
//!
//! `DomainSettings` resolves effective values in three steps: explicitly
//! stored value (profile scope first, then domain scope), else the
//! definition's default resolved for the domain's active template set.
//! Resolved values are memoized in an LRU cache; derived values (security
//! key, enabled directory profiles, template set) are computed once.

use lru::LruCache;
use parking_lot::RwLock;
use sha2::{Digest, Sha512};
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use credano_types::config_adapter::ConfigAdapter;
use credano_types::secret::Secret;
use credano_types::template::TemplateSet;
use credano_types::value::{
	ActionItem, CertificateInfo, EmailItem, FileAttachment, FormField, NamedSecret,
	PrivateKeyEntry, SettingOption, SettingValue, StorageMethod, UserPermission,
	localized_lookup,
};

use crate::prelude::*;
use crate::settings::catalog::{application, database, directory, recovery};
use crate::settings::options::TokenStorageMethod;
use crate::settings::types::{SettingCatalog, SettingDefinition};

const DEFAULT_CACHE_SIZE: usize = 256;

type CacheKey = (Option<ProfileId>, Box<str>);

/// Typed, cached view of one domain's (and optionally one profile's)
/// effective configuration.
#[derive(Clone)]
pub struct DomainSettings {
	catalog: Arc<SettingCatalog>,
	adapter: Arc<dyn ConfigAdapter>,
	domain: DomainId,
	profile: Option<ProfileId>,
	cache: Arc<RwLock<LruCache<CacheKey, SettingValue>>>,
	template_set: Arc<OnceCell<TemplateSet>>,
	security_key: Arc<OnceCell<Secret>>,
	directory_profiles: Arc<OnceCell<Vec<ProfileId>>>,
}

impl std::fmt::Debug for DomainSettings {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DomainSettings")
			.field("domain", &self.domain)
			.field("profile", &self.profile)
			.finish_non_exhaustive()
	}
}

impl DomainSettings {
	pub fn new(
		catalog: Arc<SettingCatalog>,
		adapter: Arc<dyn ConfigAdapter>,
		domain: DomainId,
	) -> Self {
		Self::with_cache_size(catalog, adapter, domain, DEFAULT_CACHE_SIZE)
	}

	pub fn with_cache_size(
		catalog: Arc<SettingCatalog>,
		adapter: Arc<dyn ConfigAdapter>,
		domain: DomainId,
		cache_size: usize,
	) -> Self {
		let capacity = NonZeroUsize::new(cache_size)
			.unwrap_or_else(|| NonZeroUsize::new(DEFAULT_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN));
		Self {
			catalog,
			adapter,
			domain,
			profile: None,
			cache: Arc::new(RwLock::new(LruCache::new(capacity))),
			template_set: Arc::new(OnceCell::new()),
			security_key: Arc::new(OnceCell::new()),
			directory_profiles: Arc::new(OnceCell::new()),
		}
	}

	pub fn domain(&self) -> &DomainId {
		&self.domain
	}

	pub fn profile(&self) -> Option<&ProfileId> {
		self.profile.as_ref()
	}

	pub fn catalog(&self) -> &Arc<SettingCatalog> {
		&self.catalog
	}

	/// A view scoped to a profile. Caches are shared with the parent view;
	/// the profile is part of every cache key.
	pub fn for_profile(&self, profile: ProfileId) -> DomainSettings {
		let mut scoped = self.clone();
		scoped.profile = Some(profile);
		scoped
	}

	/// A profile-scoped view validated against the profile list stored in
	/// `list_key`. Unknown profile IDs are an invalid-argument condition.
	pub async fn profile_view(&self, list_key: &str, profile: &str) -> CrResult<DomainSettings> {
		let known = self.read_profile_ids(list_key).await?;
		if !known.iter().any(|p| p.as_str() == profile) {
			return Err(Error::ValidationError(format!(
				"unknown profile '{}' for setting '{}'",
				profile, list_key
			)));
		}
		Ok(self.for_profile(ProfileId::new(profile)))
	}

	/// The template set active for this domain, read once from the adapter.
	pub async fn template_set(&self) -> CrResult<&TemplateSet> {
		self.template_set
			.get_or_try_init(|| self.adapter.template_set(&self.domain))
			.await
	}

	// Value resolution //
	//******************//

	/// Resolve the effective value of a setting: cache, then stored value
	/// (profile scope first), then template-resolved default.
	pub async fn effective_value(&self, key: &str) -> CrResult<SettingValue> {
		let def = self
			.catalog
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("unknown setting: {}", key)))?;

		let cache_key: CacheKey = (self.profile.clone(), def.key().into());
		if let Some(value) = self.cache.write().get(&cache_key) {
			debug!("Setting cache hit: {}/{}", self.domain, key);
			return Ok(value.clone());
		}

		if let Some(profile) = &self.profile {
			if let Some(value) =
				self.adapter.read_stored_value(&self.domain, Some(profile), key).await?
			{
				self.check_stored_syntax(def, &value)?;
				self.cache.write().put(cache_key, value.clone());
				return Ok(value);
			}
		}

		if let Some(value) = self.adapter.read_stored_value(&self.domain, None, key).await? {
			self.check_stored_syntax(def, &value)?;
			self.cache.write().put(cache_key, value.clone());
			return Ok(value);
		}

		let template_set = self.template_set().await?;
		let value = def.default_value(Some(template_set))?.clone();
		self.cache.write().put(cache_key, value.clone());
		Ok(value)
	}

	/// A stored value is assumed pre-validated; a syntax mismatch is a hard
	/// configuration error naming the key and domain.
	fn check_stored_syntax(&self, def: &SettingDefinition, value: &SettingValue) -> CrResult<()> {
		if def.syntax().matches(value) {
			return Ok(());
		}
		Err(Error::StoredValueError {
			key: def.key().into(),
			domain: self.domain.as_str().into(),
			detail: format!(
				"expected {:?} syntax, stored value is a {}",
				def.syntax(),
				value.type_name()
			),
		})
	}

	fn type_error(&self, key: &str, expected: &str, value: &SettingValue) -> Error {
		Error::ValidationError(format!(
			"setting '{}' is not a {}, got {}",
			key,
			expected,
			value.type_name()
		))
	}

	// Typed accessors //
	//*****************//

	pub async fn read_string(&self, key: &str) -> CrResult<Box<str>> {
		match self.effective_value(key).await? {
			SettingValue::String(s) => Ok(s),
			v => Err(self.type_error(key, "string", &v)),
		}
	}

	pub async fn read_boolean(&self, key: &str) -> CrResult<bool> {
		match self.effective_value(key).await? {
			SettingValue::Bool(b) => Ok(b),
			v => Err(self.type_error(key, "boolean", &v)),
		}
	}

	pub async fn read_long(&self, key: &str) -> CrResult<i64> {
		match self.effective_value(key).await? {
			SettingValue::Number(n) => Ok(n),
			v => Err(self.type_error(key, "number", &v)),
		}
	}

	pub async fn read_duration(&self, key: &str) -> CrResult<Duration> {
		match self.effective_value(key).await? {
			SettingValue::Duration(secs) if secs >= 0 => Ok(Duration::from_secs(secs as u64)),
			SettingValue::Duration(secs) => Err(Error::ValidationError(format!(
				"setting '{}' has negative duration {}",
				key, secs
			))),
			v => Err(self.type_error(key, "duration", &v)),
		}
	}

	pub async fn read_string_array(&self, key: &str) -> CrResult<Vec<Box<str>>> {
		match self.effective_value(key).await? {
			SettingValue::StringArray(items) => Ok(items),
			v => Err(self.type_error(key, "string array", &v)),
		}
	}

	/// Read a `Select` setting as its option enum.
	pub async fn read_enum<E: SettingOption>(&self, key: &str) -> CrResult<E> {
		let name = self.read_string(key).await?;
		E::from_option_name(&name).ok_or_else(|| {
			Error::ValidationError(format!("setting '{}' has unknown option '{}'", key, name))
		})
	}

	/// Read an `OptionList` setting as a list of option enum values,
	/// declaration order preserved.
	pub async fn read_option_list<E: SettingOption>(&self, key: &str) -> CrResult<Vec<E>> {
		let names = match self.effective_value(key).await? {
			SettingValue::OptionList(names) => names,
			v => return Err(self.type_error(key, "option list", &v)),
		};
		names
			.iter()
			.map(|name| {
				E::from_option_name(name).ok_or_else(|| {
					Error::ValidationError(format!(
						"setting '{}' has unknown option '{}'",
						key, name
					))
				})
			})
			.collect()
	}

	pub async fn read_localized_string(&self, key: &str, locale: &LangTag) -> CrResult<Box<str>> {
		match self.effective_value(key).await? {
			SettingValue::Localized(entries) => localized_lookup(&entries, locale)
				.cloned()
				.ok_or_else(|| no_locale_entry(key, locale)),
			v => Err(self.type_error(key, "localized string", &v)),
		}
	}

	pub async fn read_localized_string_array(
		&self,
		key: &str,
		locale: &LangTag,
	) -> CrResult<Vec<Box<str>>> {
		match self.effective_value(key).await? {
			SettingValue::LocalizedArray(entries) => localized_lookup(&entries, locale)
				.cloned()
				.ok_or_else(|| no_locale_entry(key, locale)),
			v => Err(self.type_error(key, "localized string array", &v)),
		}
	}

	pub async fn read_form(&self, key: &str) -> CrResult<Vec<FormField>> {
		match self.effective_value(key).await? {
			SettingValue::Form(fields) => Ok(fields),
			v => Err(self.type_error(key, "form", &v)),
		}
	}

	pub async fn read_actions(&self, key: &str) -> CrResult<Vec<ActionItem>> {
		match self.effective_value(key).await? {
			SettingValue::Action(actions) => Ok(actions),
			v => Err(self.type_error(key, "action", &v)),
		}
	}

	pub async fn read_user_permissions(&self, key: &str) -> CrResult<Vec<UserPermission>> {
		match self.effective_value(key).await? {
			SettingValue::Permissions(perms) => Ok(perms),
			v => Err(self.type_error(key, "user permission list", &v)),
		}
	}

	pub async fn read_certificates(&self, key: &str) -> CrResult<Vec<CertificateInfo>> {
		match self.effective_value(key).await? {
			SettingValue::Certificates(certs) => Ok(certs),
			v => Err(self.type_error(key, "certificate list", &v)),
		}
	}

	pub async fn read_private_key(&self, key: &str) -> CrResult<PrivateKeyEntry> {
		match self.effective_value(key).await? {
			SettingValue::PrivateKey(entry) => Ok(entry),
			v => Err(self.type_error(key, "private key", &v)),
		}
	}

	/// Returns the redaction-aware [`Secret`] wrapper; the cleartext never
	/// reaches logs or serialized output.
	pub async fn read_password(&self, key: &str) -> CrResult<Secret> {
		match self.effective_value(key).await? {
			SettingValue::Password(secret) => Ok(secret),
			v => Err(self.type_error(key, "password", &v)),
		}
	}

	pub async fn read_email_template(&self, key: &str, locale: &LangTag) -> CrResult<EmailItem> {
		match self.effective_value(key).await? {
			SettingValue::EmailTemplate(entries) => localized_lookup(&entries, locale)
				.cloned()
				.ok_or_else(|| no_locale_entry(key, locale)),
			v => Err(self.type_error(key, "email template", &v)),
		}
	}

	pub async fn read_named_secrets(
		&self,
		key: &str,
	) -> CrResult<BTreeMap<Box<str>, NamedSecret>> {
		match self.effective_value(key).await? {
			SettingValue::NamedSecrets(entries) => Ok(entries),
			v => Err(self.type_error(key, "named secret map", &v)),
		}
	}

	pub async fn read_file_attachments(&self, key: &str) -> CrResult<Vec<FileAttachment>> {
		match self.effective_value(key).await? {
			SettingValue::Files(files) => Ok(files),
			v => Err(self.type_error(key, "file list", &v)),
		}
	}

	pub async fn read_storage_methods(&self, key: &str) -> CrResult<Vec<StorageMethod>> {
		match self.effective_value(key).await? {
			SettingValue::StorageMethods(methods) => Ok(methods),
			v => Err(self.type_error(key, "storage method list", &v)),
		}
	}

	pub async fn read_profile_ids(&self, key: &str) -> CrResult<Vec<ProfileId>> {
		match self.effective_value(key).await? {
			SettingValue::Profiles(profiles) => Ok(profiles),
			v => Err(self.type_error(key, "profile list", &v)),
		}
	}

	// Derived values //
	//****************//

	/// Whether a shared backing database is configured for this domain.
	pub async fn has_db_configured(&self) -> CrResult<bool> {
		let url = self.read_string(database::DATABASE_URL).await?;
		Ok(!url.is_empty())
	}

	/// Whether this domain is the deployment's administrative domain.
	pub async fn is_administrative_domain(&self) -> CrResult<bool> {
		let admin = self.read_string(application::ADMIN_DOMAIN).await?;
		Ok(admin.as_ref() == self.domain.as_str())
	}

	/// Resolve a storage-preference setting. The single sentinel `AUTO` is
	/// replaced with the computed preference (shared database when
	/// configured, else the directory); the related boolean appends an
	/// additional NMAS location. Declaration order is preserved and no
	/// duplicates are introduced.
	pub async fn storage_preference(
		&self,
		preference_key: &str,
		nmas_key: &str,
	) -> CrResult<Vec<StorageMethod>> {
		let mut methods = self.read_storage_methods(preference_key).await?;
		if methods.len() == 1 && methods[0] == StorageMethod::Auto {
			methods.clear();
			if self.has_db_configured().await? {
				methods.push(StorageMethod::Db);
			} else {
				methods.push(StorageMethod::Ldap);
			}
		}
		if self.read_boolean(nmas_key).await? && !methods.contains(&StorageMethod::Nmas) {
			methods.push(StorageMethod::Nmas);
		}
		Ok(methods)
	}

	/// Storage preference for reading recovery responses.
	pub async fn recovery_read_preference(&self) -> CrResult<Vec<StorageMethod>> {
		self.storage_preference(recovery::READ_PREFERENCE, directory::USE_NMAS_RESPONSES)
			.await
	}

	/// Storage preference for writing recovery responses.
	pub async fn recovery_write_preference(&self) -> CrResult<Vec<StorageMethod>> {
		self.storage_preference(recovery::WRITE_PREFERENCE, directory::STORE_NMAS_RESPONSES)
			.await
	}

	/// Where verification tokens are stored; unknown names map to `None`.
	pub async fn token_storage_method(&self) -> CrResult<Option<TokenStorageMethod>> {
		let name = self.read_string(recovery::TOKEN_STORAGE_METHOD).await?;
		Ok(TokenStorageMethod::from_option_name(&name))
	}

	/// Per-domain key material derived from the domain's stored content:
	/// SHA-512 over the domain ID and the content hashes of every stored
	/// value, iterated in sorted key order. Computed once per reader family.
	pub async fn security_key(&self) -> CrResult<&Secret> {
		self.security_key
			.get_or_try_init(|| async {
				let mut keys = self.adapter.stored_keys(&self.domain).await?;
				keys.sort();

				let mut hasher = Sha512::new();
				hasher.update(self.domain.as_str().as_bytes());
				for stored_key in &keys {
					let value = self
						.adapter
						.read_stored_value(
							&self.domain,
							stored_key.profile.as_ref(),
							&stored_key.setting_key,
						)
						.await?;
					if let Some(value) = value {
						hasher.update(value.value_hash().as_bytes());
					}
				}

				let digest = hasher.finalize();
				let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
				Ok(Secret::new(hex))
			})
			.await
	}

	/// IDs of the enabled directory profiles, in profile-list order.
	/// Computed once per reader family.
	pub async fn directory_profiles(&self) -> CrResult<&Vec<ProfileId>> {
		self.directory_profiles
			.get_or_try_init(|| async {
				let all = self.read_profile_ids(directory::PROFILE_LIST).await?;
				let mut enabled = Vec::with_capacity(all.len());
				for profile in all {
					let view = self.for_profile(profile.clone());
					if view.read_boolean(directory::PROFILE_ENABLED).await? {
						enabled.push(profile);
					}
				}
				Ok(enabled)
			})
			.await
	}
}

fn no_locale_entry(key: &str, locale: &LangTag) -> Error {
	Error::ConfigError(format!("setting '{}' has no value for locale '{}'", key, locale))
}

// vim: ts=4
