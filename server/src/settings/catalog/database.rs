//! Shared database settings registration

use credano_types::secret::Secret;
use credano_types::value::{SettingSyntax, SettingValue};

use crate::prelude::*;
use crate::settings::types::{Category, SettingDefinition, SettingsRegistry};

pub const DATABASE_URL: &str = "database.connection.url";

pub fn register(registry: &mut SettingsRegistry) -> CrResult<()> {
	// An empty URL means no shared database is configured; storage
	// preference resolution keys off this.
	registry.register(
		SettingDefinition::builder(DATABASE_URL, SettingSyntax::String, Category::Database)
			.label("Connection URL")
			.default(SettingValue::String("".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"database.connection.driver",
			SettingSyntax::String,
			Category::Database,
		)
		.label("Driver Class")
		.default(SettingValue::String("".into()))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("database.username", SettingSyntax::String, Category::Database)
			.label("Username")
			.default(SettingValue::String("".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("database.password", SettingSyntax::Password, Category::Database)
			.label("Password")
			.default(SettingValue::Password(Secret::new("")))
			.build()?,
	)?;

	Ok(())
}

// vim: ts=4
