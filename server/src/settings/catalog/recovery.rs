//! Account recovery settings registration

use credano_types::template::Template;
use credano_types::value::{
	FormField, FormFieldType, SettingSyntax, SettingValue, StorageMethod,
};

use super::{localized, profile_list};
use crate::prelude::*;
use crate::settings::types::{Category, SettingDefinition, SettingsRegistry};

pub const PROFILE_LIST: &str = "recovery.profile.list";
pub const READ_PREFERENCE: &str = "recovery.response.readPreference";
pub const WRITE_PREFERENCE: &str = "recovery.response.writePreference";
pub const TOKEN_STORAGE_METHOD: &str = "recovery.token.storageMethod";

pub fn register(registry: &mut SettingsRegistry) -> CrResult<()> {
	registry.register(
		SettingDefinition::builder(PROFILE_LIST, SettingSyntax::ProfileList, Category::Recovery)
			.label("Recovery Profiles")
			.default(profile_list(&["default"]))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("recovery.enabled", SettingSyntax::Boolean, Category::Recovery)
			.label("Enable Account Recovery")
			.default(SettingValue::Bool(true))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"recovery.verificationMethods",
			SettingSyntax::OptionList,
			Category::Recovery,
		)
		.label("Verification Methods")
		.default(SettingValue::OptionList(vec!["ATTRIBUTES".into()]))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			READ_PREFERENCE,
			SettingSyntax::StorageMethodList,
			Category::Recovery,
		)
		.label("Response Read Preference")
		.default(SettingValue::StorageMethods(vec![StorageMethod::Auto]))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			WRITE_PREFERENCE,
			SettingSyntax::StorageMethodList,
			Category::Recovery,
		)
		.label("Response Write Preference")
		.default(SettingValue::StorageMethods(vec![StorageMethod::Auto]))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(TOKEN_STORAGE_METHOD, SettingSyntax::Select, Category::Recovery)
			.label("Token Storage Method")
			.default(SettingValue::String("LOCALDB".into()))
			.default_for([Template::SharedDatabase], SettingValue::String("DB".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("recovery.form", SettingSyntax::Form, Category::Recovery)
			.label("Identification Form")
			.default(SettingValue::Form(vec![FormField {
				name: "username".into(),
				label: "Username".into(),
				field_type: FormFieldType::Text,
				required: true,
			}]))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("recovery.postActions", SettingSyntax::Action, Category::Recovery)
			.label("Post-Recovery Actions")
			.default(SettingValue::Action(Vec::new()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"recovery.completionMessage",
			SettingSyntax::LocalizedTextArea,
			Category::Recovery,
		)
		.label("Completion Message")
		.default(localized(&[("", "Your password has been reset.")]))
		.build()?,
	)?;

	Ok(())
}

// vim: ts=4
