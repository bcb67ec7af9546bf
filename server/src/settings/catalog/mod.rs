//! Registration of every known setting, one module per feature area.
//!
//! The catalog is closed: the full set of definitions is registered here at
//! startup and never extended afterwards. Each area module contributes its
//! settings through a `register` function, mirroring how features own their
//! configuration.

pub mod application;
pub mod database;
pub mod directory;
pub mod email;
pub mod helpdesk;
pub mod peoplesearch;
pub mod recovery;
pub mod security;
pub mod web;

use std::collections::BTreeMap;

use credano_types::value::SettingValue;

use crate::prelude::*;
use crate::settings::types::{SettingCatalog, SettingsRegistry};

/// Build the full, frozen setting catalog.
pub fn build() -> CrResult<SettingCatalog> {
	let mut registry = SettingsRegistry::new();

	application::register(&mut registry)?;
	web::register(&mut registry)?;
	directory::register(&mut registry)?;
	database::register(&mut registry)?;
	email::register(&mut registry)?;
	security::register(&mut registry)?;
	recovery::register(&mut registry)?;
	helpdesk::register(&mut registry)?;
	peoplesearch::register(&mut registry)?;

	Ok(registry.freeze())
}

pub(crate) fn string_array(items: &[&str]) -> SettingValue {
	SettingValue::StringArray(items.iter().map(|s| Box::from(*s)).collect())
}

pub(crate) fn localized(entries: &[(&str, &str)]) -> SettingValue {
	SettingValue::Localized(
		entries.iter().map(|(tag, value)| (Box::from(*tag), Box::from(*value))).collect(),
	)
}

pub(crate) fn localized_array(entries: &[(&str, &[&str])]) -> SettingValue {
	SettingValue::LocalizedArray(
		entries
			.iter()
			.map(|(tag, values)| {
				(Box::from(*tag), values.iter().map(|v| Box::from(*v)).collect())
			})
			.collect::<BTreeMap<_, _>>(),
	)
}

pub(crate) fn profile_list(ids: &[&str]) -> SettingValue {
	SettingValue::Profiles(ids.iter().map(|id| ProfileId::new(*id)).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_catalog_builds() {
		let catalog = build().unwrap();
		assert!(!catalog.is_empty());
		assert!(catalog.get(directory::PROFILE_LIST).is_some());
		assert!(catalog.get(database::DATABASE_URL).is_some());
	}

	#[test]
	fn test_every_setting_has_defaults() {
		let catalog = build().unwrap();
		for def in catalog.all() {
			assert!(!def.defaults().is_empty(), "setting {} lacks defaults", def.key());
		}
	}

	#[test]
	fn test_sorted_is_total_and_stable() {
		let catalog = build().unwrap();

		let first: Vec<&str> = catalog.sorted().map(|d| d.key()).collect();
		let second: Vec<&str> = catalog.sorted().map(|d| d.key()).collect();
		assert_eq!(first, second);
		assert_eq!(first.len(), catalog.len());

		let mut unique: Vec<&str> = first.clone();
		unique.sort_unstable();
		unique.dedup();
		assert_eq!(unique.len(), first.len());
	}
}

// vim: ts=4
