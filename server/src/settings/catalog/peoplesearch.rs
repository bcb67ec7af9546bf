//! People search settings registration

use credano_types::template::Template;
use credano_types::value::{FormField, FormFieldType, SettingSyntax, SettingValue};

use super::{localized_array, profile_list, string_array};
use crate::prelude::*;
use crate::settings::types::{Category, SettingDefinition, SettingsRegistry};

pub const PROFILE_LIST: &str = "peopleSearch.profile.list";
pub const ENABLE_PUBLIC: &str = "peopleSearch.enablePublic";
pub const PUBLIC_PROFILE: &str = "peopleSearch.publicProfile";

pub fn register(registry: &mut SettingsRegistry) -> CrResult<()> {
	registry.register(
		SettingDefinition::builder(PROFILE_LIST, SettingSyntax::ProfileList, Category::PeopleSearch)
			.label("People Search Profiles")
			.default(profile_list(&["default"]))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(ENABLE_PUBLIC, SettingSyntax::Boolean, Category::PeopleSearch)
			.label("Enable Public Access")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(PUBLIC_PROFILE, SettingSyntax::String, Category::PeopleSearch)
			.label("Public Profile")
			.default(SettingValue::String("".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"peopleSearch.searchAttributes",
			SettingSyntax::StringArray,
			Category::PeopleSearch,
		)
		.label("Search Attributes")
		.default(string_array(&["cn", "mail"]))
		.default_for(
			[Template::ActiveDirectory],
			string_array(&["sAMAccountName", "displayName", "mail"]),
		)
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"peopleSearch.displayNameTemplates",
			SettingSyntax::LocalizedStringArray,
			Category::PeopleSearch,
		)
		.label("Display Name Templates")
		.default(localized_array(&[("", &["%GIVENNAME% %SURNAME%"])]))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"peopleSearch.resultForm",
			SettingSyntax::Form,
			Category::PeopleSearch,
		)
		.label("Result Form")
		.default(SettingValue::Form(vec![
			FormField {
				name: "cn".into(),
				label: "Name".into(),
				field_type: FormFieldType::Text,
				required: false,
			},
			FormField {
				name: "mail".into(),
				label: "Email".into(),
				field_type: FormFieldType::Email,
				required: false,
			},
		]))
		.build()?,
	)?;

	Ok(())
}

// vim: ts=4
