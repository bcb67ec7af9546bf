//! Security settings registration

use std::collections::BTreeMap;

use credano_types::secret::Secret;
use credano_types::value::{PrivateKeyEntry, SettingSyntax, SettingValue};

use crate::prelude::*;
use crate::settings::types::{Category, SettingDefinition, SettingsRegistry};

pub const BASIC_AUTH_ENABLED: &str = "security.basicAuth.enabled";

pub fn register(registry: &mut SettingsRegistry) -> CrResult<()> {
	registry.register(
		SettingDefinition::builder(BASIC_AUTH_ENABLED, SettingSyntax::Boolean, Category::Security)
			.label("Allow Basic Authentication")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"security.trustedCertificates",
			SettingSyntax::X509Cert,
			Category::Security,
		)
		.label("Trusted Certificates")
		.default(SettingValue::Certificates(Vec::new()))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"security.https.serverKey",
			SettingSyntax::PrivateKey,
			Category::Security,
		)
		.label("HTTPS Server Key")
		.default(SettingValue::PrivateKey(PrivateKeyEntry {
			key: Secret::new(""),
			certificates: Vec::new(),
		}))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"security.webservices.namedSecrets",
			SettingSyntax::NamedSecret,
			Category::Security,
		)
		.label("Web Service Secrets")
		.default(SettingValue::NamedSecrets(BTreeMap::new()))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"security.intruder.maxAttempts",
			SettingSyntax::Numeric,
			Category::Security,
		)
		.label("Maximum Login Attempts")
		.default(SettingValue::Number(5))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"security.intruder.resetTime",
			SettingSyntax::Duration,
			Category::Security,
		)
		.label("Intruder Reset Time")
		.default(SettingValue::Duration(600))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("captcha.enabled", SettingSyntax::Boolean, Category::Captcha)
			.label("Enable Captcha")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"captcha.recaptcha.publicKey",
			SettingSyntax::String,
			Category::Captcha,
		)
		.label("reCAPTCHA Public Key")
		.default(SettingValue::String("".into()))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"captcha.recaptcha.privateKey",
			SettingSyntax::Password,
			Category::Captcha,
		)
		.label("reCAPTCHA Private Key")
		.default(SettingValue::Password(Secret::new("")))
		.build()?,
	)?;

	Ok(())
}

// vim: ts=4
