//! Helpdesk settings registration

use credano_types::value::{SettingSyntax, SettingValue};

use super::profile_list;
use crate::prelude::*;
use crate::settings::types::{Category, SettingDefinition, SettingsRegistry};

pub const PROFILE_LIST: &str = "helpdesk.profile.list";
pub const PERMITTED_OPERATORS: &str = "helpdesk.permittedOperators";

pub fn register(registry: &mut SettingsRegistry) -> CrResult<()> {
	registry.register(
		SettingDefinition::builder(PROFILE_LIST, SettingSyntax::ProfileList, Category::Helpdesk)
			.label("Helpdesk Profiles")
			.default(profile_list(&["default"]))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("helpdesk.enabled", SettingSyntax::Boolean, Category::Helpdesk)
			.label("Enable Helpdesk")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			PERMITTED_OPERATORS,
			SettingSyntax::UserPermission,
			Category::Helpdesk,
		)
		.label("Permitted Operators")
		.default(SettingValue::Permissions(Vec::new()))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"helpdesk.result.limit",
			SettingSyntax::Numeric,
			Category::Helpdesk,
		)
		.label("Search Result Limit")
		.default(SettingValue::Number(20))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("helpdesk.otp.verify", SettingSyntax::Boolean, Category::Helpdesk)
			.label("Verify via OTP")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	Ok(())
}

// vim: ts=4
