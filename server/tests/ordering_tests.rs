//! Tests for menu ordering and default-binding introspection.

mod common;

use common::build_settings;

use credano::catalog;
use credano_types::types::ProfileId;

#[tokio::test]
async fn test_sorted_settings_total_order() {
	let catalog = catalog::build().unwrap();

	let first: Vec<String> = catalog.sorted().map(|d| d.key().to_string()).collect();
	let second: Vec<String> = catalog.sorted().map(|d| d.key().to_string()).collect();

	// identical sequences on repeated calls, every setting exactly once
	assert_eq!(first, second);
	assert_eq!(first.len(), catalog.len());

	let mut deduped = first.clone();
	deduped.sort();
	deduped.dedup();
	assert_eq!(deduped.len(), first.len());

	// the sequence follows the menu-location ordering
	let locations: Vec<String> =
		catalog.sorted().map(|d| d.menu_location(None)).collect();
	let mut sorted_locations = locations.clone();
	sorted_locations.sort();
	assert_eq!(locations, sorted_locations);
}

#[tokio::test]
async fn test_menu_location_nests_categories() {
	let catalog = catalog::build().unwrap();

	let def = catalog.get("directory.proxy.username").unwrap();
	assert_eq!(
		def.menu_location(None),
		"Directory \u{21e8} Connection \u{21e8} Proxy Username"
	);

	let profile = ProfileId::new("corp");
	assert_eq!(
		def.menu_location(Some(&profile)),
		"Directory \u{21e8} Connection \u{21e8} Proxy Username \u{21e8} corp"
	);
}

#[tokio::test]
async fn test_default_value_debug_strings_preserve_declaration_order() {
	let catalog = catalog::build().unwrap();

	let def = catalog.get("directory.attribute.username").unwrap();
	let debug = def.default_value_debug_strings();

	assert_eq!(debug.len(), 3);
	assert_eq!(debug[0], ("".to_string(), "cn".to_string()));
	assert_eq!(debug[1], ("AD".to_string(), "sAMAccountName".to_string()));
	assert_eq!(debug[2], ("OPENLDAP".to_string(), "uid".to_string()));
}

#[tokio::test]
async fn test_confidential_settings_marked() {
	let (_adapter, settings) = build_settings();
	let catalog = settings.catalog();

	for def in catalog.all() {
		let is_password = def.syntax() == credano_types::value::SettingSyntax::Password;
		assert_eq!(def.is_confidential(), is_password, "setting {}", def.key());
	}
}

// vim: ts=4
