//! Deterministic menu ordering of settings.
//!
//! The menu location string doubles as the sort key: the catalog's
//! `sorted()` sequence is computed once at freeze time by comparing these
//! strings, with ties broken by registration order, so snapshot and debug
//! exports iterate identically on every run.

use crate::prelude::*;
use crate::settings::types::SettingDefinition;

const SEPARATOR: &str = " \u{21e8} ";

/// Render the menu path of a setting, e.g.
/// `"Directory ⇨ Connection ⇨ Proxy Username"`, with the profile ID
/// appended for profile-scoped reads.
pub fn menu_location(def: &SettingDefinition, profile: Option<&ProfileId>) -> String {
	let mut parts: Vec<&str> = def.category().path().iter().map(|c| c.label()).collect();
	parts.push(def.label());

	let mut location = parts.join(SEPARATOR);
	if let Some(profile) = profile {
		location.push_str(SEPARATOR);
		location.push_str(profile.as_str());
	}
	location
}


// vim: ts=4
