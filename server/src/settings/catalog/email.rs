//! Email settings registration

use std::collections::BTreeMap;

use credano_types::secret::Secret;
use credano_types::value::{EmailItem, SettingSyntax, SettingValue};

use crate::prelude::*;
use crate::settings::types::{Category, SettingDefinition, SettingsRegistry};

pub const PASSWORD_CHANGED_TEMPLATE: &str = "email.template.passwordChanged";

pub fn register(registry: &mut SettingsRegistry) -> CrResult<()> {
	registry.register(
		SettingDefinition::builder("email.server.address", SettingSyntax::String, Category::Email)
			.label("SMTP Server Address")
			.default(SettingValue::String("".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("email.server.port", SettingSyntax::Numeric, Category::Email)
			.label("SMTP Server Port")
			.default(SettingValue::Number(25))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("email.server.username", SettingSyntax::String, Category::Email)
			.label("SMTP Username")
			.default(SettingValue::String("".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"email.server.password",
			SettingSyntax::Password,
			Category::Email,
		)
		.label("SMTP Password")
		.default(SettingValue::Password(Secret::new("")))
		.build()?,
	)?;

	let mut password_changed = BTreeMap::new();
	password_changed.insert(
		Box::from(""),
		EmailItem {
			from: "noreply@localhost".into(),
			subject: "Your password has been changed".into(),
			body_plain: "The password for your account has been changed.".into(),
			body_html: "<p>The password for your account has been changed.</p>".into(),
		},
	);
	registry.register(
		SettingDefinition::builder(
			PASSWORD_CHANGED_TEMPLATE,
			SettingSyntax::EmailTemplate,
			Category::Email,
		)
		.label("Password Changed Notice")
		.default(SettingValue::EmailTemplate(password_changed))
		.build()?,
	)?;

	Ok(())
}

// vim: ts=4
