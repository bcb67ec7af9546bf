//! Application-wide settings registration

use credano_types::value::{SettingSyntax, SettingValue};

use super::{localized, string_array};
use crate::prelude::*;
use crate::settings::types::{Category, SettingDefinition, SettingsRegistry};

pub const DIRECTORY_TEMPLATE: &str = "template.directory";
pub const STORAGE_TEMPLATE: &str = "template.storage";
pub const ADMIN_DOMAIN: &str = "domain.system.adminDomain";

pub fn register(registry: &mut SettingsRegistry) -> CrResult<()> {
	registry.register(
		SettingDefinition::builder(DIRECTORY_TEMPLATE, SettingSyntax::Select, Category::Templates)
			.label("Directory Template")
			.default(SettingValue::String("DEFAULT".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(STORAGE_TEMPLATE, SettingSyntax::Select, Category::Templates)
			.label("Storage Template")
			.default(SettingValue::String("LOCAL".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("app.notes", SettingSyntax::TextArea, Category::Application)
			.label("Configuration Notes")
			.default(SettingValue::String("".into()))
			.build()?,
	)?;

	// Which domain carries deployment-wide administrative settings
	registry.register(
		SettingDefinition::builder(ADMIN_DOMAIN, SettingSyntax::String, Category::Application)
			.label("Administrative Domain")
			.default(SettingValue::String("default".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("app.siteUrl", SettingSyntax::String, Category::Application)
			.label("Site URL")
			.required()
			.default(SettingValue::String("".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"app.hideConfigHealthWarnings",
			SettingSyntax::Boolean,
			Category::Application,
		)
		.label("Hide Configuration Health Warnings")
		.default(SettingValue::Bool(false))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("app.forwardUrl", SettingSyntax::String, Category::UrlSettings)
			.label("Forward URL")
			.default(SettingValue::String("".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("app.logoutUrl", SettingSyntax::String, Category::UrlSettings)
			.label("Logout URL")
			.default(SettingValue::String("".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("app.homeUrl", SettingSyntax::String, Category::UrlSettings)
			.label("Home URL")
			.default(SettingValue::String("".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"locale.knownLocales",
			SettingSyntax::StringArray,
			Category::Localization,
		)
		.label("Known Locales")
		.default(string_array(&["en"]))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"locale.cookieMaxAge",
			SettingSyntax::Duration,
			Category::Localization,
		)
		.label("Locale Cookie Max Age")
		.default(SettingValue::Duration(2_592_000))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"locale.defaultGreeting",
			SettingSyntax::LocalizedString,
			Category::Localization,
		)
		.label("Default Greeting")
		.default(localized(&[("", "Welcome")]))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"telemetry.publishStats.enable",
			SettingSyntax::Boolean,
			Category::Telemetry,
		)
		.label("Publish Statistics")
		.default(SettingValue::Bool(false))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"telemetry.siteDescription",
			SettingSyntax::String,
			Category::Telemetry,
		)
		.label("Site Description")
		.default(SettingValue::String("".into()))
		.build()?,
	)?;

	Ok(())
}

// vim: ts=4
