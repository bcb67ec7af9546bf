//! Behavior tests for the in-memory stored-configuration adapter.

use credano_config_adapter_memory::MemoryConfigAdapter;
use credano_types::config_adapter::ConfigAdapter;
use credano_types::template::{Template, TemplateSet};
use credano_types::types::{DomainId, ProfileId};
use credano_types::value::SettingValue;

#[tokio::test]
async fn test_read_back_stored_value() {
	let adapter = MemoryConfigAdapter::new();
	let domain = DomainId::new("d1");

	adapter.set_value(&domain, None, "app.siteUrl", SettingValue::String("https://sso".into()));

	let value = adapter.read_stored_value(&domain, None, "app.siteUrl").await.unwrap();
	assert_eq!(value, Some(SettingValue::String("https://sso".into())));

	let missing = adapter.read_stored_value(&domain, None, "app.homeUrl").await.unwrap();
	assert_eq!(missing, None);
}

#[tokio::test]
async fn test_profile_scope_is_separate() {
	let adapter = MemoryConfigAdapter::new();
	let domain = DomainId::new("d1");
	let profile = ProfileId::new("corp");

	adapter.set_value(&domain, None, "directory.proxy.username", SettingValue::String("a".into()));
	adapter.set_value(
		&domain,
		Some(&profile),
		"directory.proxy.username",
		SettingValue::String("b".into()),
	);

	let domain_scope =
		adapter.read_stored_value(&domain, None, "directory.proxy.username").await.unwrap();
	let profile_scope = adapter
		.read_stored_value(&domain, Some(&profile), "directory.proxy.username")
		.await
		.unwrap();

	assert_eq!(domain_scope, Some(SettingValue::String("a".into())));
	assert_eq!(profile_scope, Some(SettingValue::String("b".into())));
}

#[tokio::test]
async fn test_clear_value_restores_absence() {
	let adapter = MemoryConfigAdapter::new();
	let domain = DomainId::new("d1");

	adapter.set_value(&domain, None, "helpdesk.enabled", SettingValue::Bool(true));
	adapter.clear_value(&domain, None, "helpdesk.enabled");

	let value = adapter.read_stored_value(&domain, None, "helpdesk.enabled").await.unwrap();
	assert_eq!(value, None);
}

#[tokio::test]
async fn test_template_set_defaults_when_unset() {
	let adapter = MemoryConfigAdapter::new();
	let domain = DomainId::new("d1");

	let set = adapter.template_set(&domain).await.unwrap();
	assert_eq!(set, TemplateSet::default());

	adapter.set_template_set(&domain, TemplateSet::new([Template::ActiveDirectory]));
	let set = adapter.template_set(&domain).await.unwrap();
	assert!(set.contains(Template::ActiveDirectory));
}

#[tokio::test]
async fn test_stored_keys_lists_all_slots() {
	let adapter = MemoryConfigAdapter::new();
	let domain = DomainId::new("d1");
	let profile = ProfileId::new("corp");

	adapter.set_value(&domain, None, "b.key", SettingValue::Bool(true));
	adapter.set_value(&domain, Some(&profile), "a.key", SettingValue::Bool(false));

	let mut keys = adapter.stored_keys(&domain).await.unwrap();
	assert_eq!(keys.len(), 2);

	keys.sort();
	assert_eq!(keys[0].setting_key.as_ref(), "a.key");
	assert_eq!(keys[0].profile, Some(ProfileId::new("corp")));
	assert_eq!(keys[1].setting_key.as_ref(), "b.key");
	assert_eq!(keys[1].profile, None);
}

// vim: ts=4
