//! Web interface settings registration

use credano_types::value::{SettingSyntax, SettingValue};

use super::localized;
use crate::prelude::*;
use crate::settings::types::{Category, SettingDefinition, SettingsRegistry};

pub fn register(registry: &mut SettingsRegistry) -> CrResult<()> {
	registry.register(
		SettingDefinition::builder("web.theme", SettingSyntax::Select, Category::Web)
			.label("Theme")
			.default(SettingValue::String("default".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("web.session.idleTimeout", SettingSyntax::Duration, Category::Web)
			.label("Session Idle Timeout")
			.default(SettingValue::Duration(600))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("web.customAssets", SettingSyntax::File, Category::Web)
			.label("Custom Assets")
			.default(SettingValue::Files(Vec::new()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"web.display.showHidePasswordFields",
			SettingSyntax::Boolean,
			Category::WebFeatures,
		)
		.label("Show/Hide Password Fields")
		.default(SettingValue::Bool(true))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"web.display.maskPasswordFields",
			SettingSyntax::Boolean,
			Category::WebFeatures,
		)
		.label("Mask Password Fields")
		.default(SettingValue::Bool(true))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"web.display.customText",
			SettingSyntax::LocalizedString,
			Category::WebFeatures,
		)
		.label("Custom Display Text")
		.default(localized(&[("", "")]))
		.build()?,
	)?;

	Ok(())
}

// vim: ts=4
