//! Tests for the debug-export generators.

mod common;

use common::{build_settings, fresh_reader, test_domain};

use credano::debug::{
	DebugContext, DebugItemGenerator, DirectoryServersGenerator, OfflineProber,
	SettingsSnapshotGenerator,
};
use credano::settings::catalog::directory;
use credano_types::secret::Secret;
use credano_types::types::ProfileId;
use credano_types::value::SettingValue;

fn string_array(items: &[&str]) -> SettingValue {
	SettingValue::StringArray(items.iter().map(|s| Box::from(*s)).collect())
}

#[tokio::test]
async fn test_settings_snapshot_redacts_secrets() {
	let (adapter, _) = build_settings();
	adapter.set_value(
		&test_domain(),
		None,
		directory::PROXY_PASSWORD,
		SettingValue::Password(Secret::new("sup3r-s3cret")),
	);
	let settings = fresh_reader(&adapter);

	let generator = SettingsSnapshotGenerator;
	assert_eq!(generator.filename(), "settings.json");

	let prober = OfflineProber;
	let ctx = DebugContext { settings: &settings, prober: &prober };
	let bytes = generator.generate(&ctx).await.unwrap();
	let text = String::from_utf8(bytes).unwrap();

	assert!(text.contains("directory.proxy.password"));
	assert!(!text.contains("sup3r-s3cret"));
}

#[tokio::test]
async fn test_settings_snapshot_covers_catalog_in_menu_order() {
	let (_adapter, settings) = build_settings();

	let prober = OfflineProber;
	let ctx = DebugContext { settings: &settings, prober: &prober };
	let bytes = SettingsSnapshotGenerator.generate(&ctx).await.unwrap();
	let entries: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

	let entries = entries.as_array().unwrap();
	assert_eq!(entries.len(), settings.catalog().len());

	let exported: Vec<&str> =
		entries.iter().map(|e| e["key"].as_str().unwrap()).collect();
	let expected: Vec<&str> = settings.catalog().sorted().map(|d| d.key()).collect();
	assert_eq!(exported, expected);
}

#[tokio::test]
async fn test_directory_servers_artifact_preserves_profile_order() {
	let (adapter, _) = build_settings();
	let domain = test_domain();

	adapter.set_value(
		&domain,
		None,
		directory::PROFILE_LIST,
		SettingValue::Profiles(vec![ProfileId::new("beta"), ProfileId::new("alpha")]),
	);
	adapter.set_value(
		&domain,
		Some(&ProfileId::new("beta")),
		directory::SERVER_URLS,
		string_array(&["ldaps://beta-1:636", "ldaps://beta-2:636"]),
	);
	adapter.set_value(
		&domain,
		Some(&ProfileId::new("alpha")),
		directory::SERVER_URLS,
		string_array(&["ldaps://alpha:636"]),
	);
	adapter.set_value(
		&domain,
		Some(&ProfileId::new("alpha")),
		directory::PROXY_PASSWORD,
		SettingValue::Password(Secret::new("proxy-pw")),
	);
	let settings = fresh_reader(&adapter);

	let generator = DirectoryServersGenerator;
	assert_eq!(generator.filename(), "directory-servers.json");

	let prober = OfflineProber;
	let ctx = DebugContext { settings: &settings, prober: &prober };
	let bytes = generator.generate(&ctx).await.unwrap();
	let text = String::from_utf8(bytes.clone()).unwrap();

	// declared list order, not alphabetical
	let entries: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
	let entries = entries.as_array().unwrap();
	assert_eq!(entries[0]["profile"], "beta");
	assert_eq!(entries[1]["profile"], "alpha");
	assert_eq!(entries[0]["serverUrls"][1], "ldaps://beta-2:636");

	// offline probe data is attached per profile
	assert_eq!(entries[0]["probe"]["connected"], false);

	// no secret material in the artifact
	assert!(!text.contains("proxy-pw"));
}

// vim: ts=4
