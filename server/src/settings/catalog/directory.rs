//! Directory service settings registration
//!
//! The attribute settings carry template-keyed defaults: each directory
//! vendor template selects its own attribute names, with the first-declared
//! binding acting as the vendor-neutral fallback.

use credano_types::secret::Secret;
use credano_types::template::Template;
use credano_types::value::{SettingSyntax, SettingValue};

use super::{localized, profile_list, string_array};
use crate::prelude::*;
use crate::settings::types::{Category, SettingDefinition, SettingsRegistry};

pub const PROFILE_LIST: &str = "directory.profile.list";
pub const PROFILE_ENABLED: &str = "directory.profile.enabled";
pub const SERVER_URLS: &str = "directory.serverUrls";
pub const PROXY_USERNAME: &str = "directory.proxy.username";
pub const PROXY_PASSWORD: &str = "directory.proxy.password";
pub const SERVER_CERTS: &str = "directory.serverCerts";
pub const USE_NMAS_RESPONSES: &str = "directory.edirectory.useNmasResponses";
pub const STORE_NMAS_RESPONSES: &str = "directory.edirectory.storeNmasResponses";

pub fn register(registry: &mut SettingsRegistry) -> CrResult<()> {
	registry.register(
		SettingDefinition::builder(PROFILE_LIST, SettingSyntax::ProfileList, Category::Directory)
			.label("Directory Profiles")
			.default(profile_list(&["default"]))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(USE_NMAS_RESPONSES, SettingSyntax::Boolean, Category::Directory)
			.label("Use NMAS Responses")
			.default(SettingValue::Bool(false))
			.default_for([Template::EDirectory], SettingValue::Bool(true))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			STORE_NMAS_RESPONSES,
			SettingSyntax::Boolean,
			Category::Directory,
		)
		.label("Store NMAS Responses")
		.default(SettingValue::Bool(false))
		.default_for([Template::EDirectory], SettingValue::Bool(true))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			PROFILE_ENABLED,
			SettingSyntax::Boolean,
			Category::DirectoryConnection,
		)
		.label("Profile Enabled")
		.default(SettingValue::Bool(true))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"directory.profile.displayName",
			SettingSyntax::LocalizedString,
			Category::DirectoryConnection,
		)
		.label("Display Name")
		.default(localized(&[("", "Default Directory")]))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			SERVER_URLS,
			SettingSyntax::StringArray,
			Category::DirectoryConnection,
		)
		.label("Server URLs")
		.required()
		.default(string_array(&[]))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			PROXY_USERNAME,
			SettingSyntax::String,
			Category::DirectoryConnection,
		)
		.label("Proxy Username")
		.default(SettingValue::String("".into()))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			PROXY_PASSWORD,
			SettingSyntax::Password,
			Category::DirectoryConnection,
		)
		.label("Proxy Password")
		.default(SettingValue::Password(Secret::new("")))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			SERVER_CERTS,
			SettingSyntax::X509Cert,
			Category::DirectoryConnection,
		)
		.label("Server Certificates")
		.default(SettingValue::Certificates(Vec::new()))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"directory.contextlessLoginRoots",
			SettingSyntax::StringArray,
			Category::DirectoryConnection,
		)
		.label("Contextless Login Roots")
		.default(string_array(&[]))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"directory.attribute.username",
			SettingSyntax::String,
			Category::DirectoryAttributes,
		)
		.label("Username Attribute")
		.default(SettingValue::String("cn".into()))
		.default_for([Template::ActiveDirectory], SettingValue::String("sAMAccountName".into()))
		.default_for([Template::OpenLdap], SettingValue::String("uid".into()))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"directory.attribute.guid",
			SettingSyntax::String,
			Category::DirectoryAttributes,
		)
		.label("GUID Attribute")
		.default(SettingValue::String("entryUUID".into()))
		.default_for([Template::ActiveDirectory], SettingValue::String("objectGUID".into()))
		.default_for([Template::EDirectory], SettingValue::String("guid".into()))
		.build()?,
	)?;

	registry.register(
		SettingDefinition::builder(
			"directory.searchFilter",
			SettingSyntax::String,
			Category::DirectoryAttributes,
		)
		.label("User Search Filter")
		.default(SettingValue::String("(&(objectClass=person)(cn=%USERNAME%))".into()))
		.default_for(
			[Template::ActiveDirectory],
			SettingValue::String("(&(objectClass=user)(sAMAccountName=%USERNAME%))".into()),
		)
		.build()?,
	)?;

	Ok(())
}

// vim: ts=4
