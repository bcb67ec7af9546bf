//! Setting syntaxes and the tagged stored-value model.
//!
//! Every setting declares one [`SettingSyntax`]; every stored or default
//! value is one [`SettingValue`] variant. The reader checks the
//! variant/syntax correspondence with [`SettingSyntax::matches`] instead of
//! downcasting.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::error::{CrResult, Error};
use crate::secret::{REDACTED, Secret};
use crate::types::{LangTag, ProfileId, Timestamp};

/// Syntax kind of a setting. Fixed per definition, never per value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingSyntax {
	String,
	TextArea,
	Boolean,
	Numeric,
	Duration,
	StringArray,
	LocalizedString,
	LocalizedTextArea,
	LocalizedStringArray,
	Select,
	OptionList,
	StorageMethodList,
	Form,
	Action,
	UserPermission,
	EmailTemplate,
	X509Cert,
	PrivateKey,
	Password,
	NamedSecret,
	ProfileList,
	File,
}

impl SettingSyntax {
	/// Settings of this syntax never appear in cleartext in logs or exports.
	pub fn is_confidential(&self) -> bool {
		*self == SettingSyntax::Password
	}

	/// Whether a value variant satisfies this syntax.
	pub fn matches(&self, value: &SettingValue) -> bool {
		matches!(
			(self, value),
			(
				SettingSyntax::String | SettingSyntax::TextArea | SettingSyntax::Select,
				SettingValue::String(_)
			) | (SettingSyntax::Boolean, SettingValue::Bool(_))
				| (SettingSyntax::Numeric, SettingValue::Number(_))
				| (SettingSyntax::Duration, SettingValue::Duration(_))
				| (SettingSyntax::StringArray, SettingValue::StringArray(_))
				| (
					SettingSyntax::LocalizedString | SettingSyntax::LocalizedTextArea,
					SettingValue::Localized(_)
				)
				| (SettingSyntax::LocalizedStringArray, SettingValue::LocalizedArray(_))
				| (SettingSyntax::OptionList, SettingValue::OptionList(_))
				| (SettingSyntax::StorageMethodList, SettingValue::StorageMethods(_))
				| (SettingSyntax::Form, SettingValue::Form(_))
				| (SettingSyntax::Action, SettingValue::Action(_))
				| (SettingSyntax::UserPermission, SettingValue::Permissions(_))
				| (SettingSyntax::EmailTemplate, SettingValue::EmailTemplate(_))
				| (SettingSyntax::X509Cert, SettingValue::Certificates(_))
				| (SettingSyntax::PrivateKey, SettingValue::PrivateKey(_))
				| (SettingSyntax::Password, SettingValue::Password(_))
				| (SettingSyntax::NamedSecret, SettingValue::NamedSecrets(_))
				| (SettingSyntax::ProfileList, SettingValue::Profiles(_))
				| (SettingSyntax::File, SettingValue::Files(_))
		)
	}
}

/// Marker for enums whose variants are stored by option name in `Select`
/// and `OptionList` settings.
pub trait SettingOption: Sized {
	fn option_name(&self) -> &'static str;
	fn from_option_name(name: &str) -> Option<Self>;
}

/// Where credential/recovery data may be stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageMethod {
	Auto,
	Db,
	Ldap,
	#[serde(rename = "LOCALDB")]
	LocalDb,
	Nmas,
}

impl SettingOption for StorageMethod {
	fn option_name(&self) -> &'static str {
		match self {
			StorageMethod::Auto => "AUTO",
			StorageMethod::Db => "DB",
			StorageMethod::Ldap => "LDAP",
			StorageMethod::LocalDb => "LOCALDB",
			StorageMethod::Nmas => "NMAS",
		}
	}

	fn from_option_name(name: &str) -> Option<Self> {
		match name {
			"AUTO" => Some(StorageMethod::Auto),
			"DB" => Some(StorageMethod::Db),
			"LDAP" => Some(StorageMethod::Ldap),
			"LOCALDB" => Some(StorageMethod::LocalDb),
			"NMAS" => Some(StorageMethod::Nmas),
			_ => None,
		}
	}
}

// Structured value payloads //
//***************************//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormFieldType {
	Text,
	Email,
	Number,
	Select,
	Checkbox,
	Hidden,
}

/// One field of a user-facing form (new user registration, update profile).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
	pub name: Box<str>,
	pub label: Box<str>,
	#[serde(rename = "type")]
	pub field_type: FormFieldType,
	pub required: bool,
}

/// One step of a configured post-event action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ActionStep {
	#[serde(rename_all = "camelCase")]
	WebService {
		method: Box<str>,
		url: Box<str>,
		body: Option<Box<str>>,
	},
	#[serde(rename_all = "camelCase")]
	DirectoryModify {
		attribute: Box<str>,
		value: Box<str>,
	},
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
	pub name: Box<str>,
	pub steps: Vec<ActionStep>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionKind {
	DirectoryQuery,
	DirectoryGroup,
}

/// Declarative match against directory users, used for access gating.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermission {
	pub kind: PermissionKind,
	pub profile: Option<ProfileId>,
	pub base: Option<Box<str>>,
	/// Filter expression for `DirectoryQuery`, group DN for `DirectoryGroup`.
	pub subject: Box<str>,
}

/// One locale entry of an email template setting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailItem {
	pub from: Box<str>,
	pub subject: Box<str>,
	pub body_plain: Box<str>,
	pub body_html: Box<str>,
}

/// Parsed metadata of one X.509 certificate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateInfo {
	pub subject: Box<str>,
	pub issuer: Box<str>,
	pub serial_number: Box<str>,
	pub not_before: Timestamp,
	pub not_after: Timestamp,
}

impl CertificateInfo {
	/// Parse every CERTIFICATE block of a PEM bundle.
	pub fn from_pem_chain(pem_text: &str) -> CrResult<Vec<CertificateInfo>> {
		use x509_parser::prelude::*;

		let blocks = ::pem::parse_many(pem_text)
			.map_err(|e| Error::ValidationError(format!("invalid PEM data: {}", e)))?;

		let mut certs = Vec::new();
		for block in blocks.iter().filter(|b| b.tag() == "CERTIFICATE") {
			let (_, cert) = X509Certificate::from_der(block.contents())
				.map_err(|e| Error::ValidationError(format!("invalid certificate: {}", e)))?;
			certs.push(CertificateInfo {
				subject: cert.subject().to_string().into(),
				issuer: cert.issuer().to_string().into(),
				serial_number: cert.raw_serial_as_string().into(),
				not_before: Timestamp(cert.validity().not_before.timestamp()),
				not_after: Timestamp(cert.validity().not_after.timestamp()),
			});
		}

		if certs.is_empty() {
			return Err(Error::ValidationError("PEM data contains no certificate".into()));
		}
		Ok(certs)
	}
}

/// A private key plus its certificate chain (HTTPS, signing).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateKeyEntry {
	pub key: Secret,
	pub certificates: Vec<CertificateInfo>,
}

/// A secret published under a name with a usage list (web service
/// credentials and the like).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedSecret {
	pub secret: Secret,
	pub usage: Vec<Box<str>>,
}

/// An uploaded file attached to a setting. Serialized output carries
/// metadata and a content digest, never the content itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileAttachment {
	pub name: Box<str>,
	pub content_type: Box<str>,
	pub content: Vec<u8>,
}

impl FileAttachment {
	pub fn sha256_hex(&self) -> String {
		to_hex(&Sha256::digest(&self.content))
	}
}

impl Serialize for FileAttachment {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		use serde::ser::SerializeStruct;
		let mut state = serializer.serialize_struct("FileAttachment", 4)?;
		state.serialize_field("name", &self.name)?;
		state.serialize_field("contentType", &self.content_type)?;
		state.serialize_field("size", &self.content.len())?;
		state.serialize_field("sha256", &self.sha256_hex())?;
		state.end()
	}
}

// SettingValue //
//**************//

/// A stored or default setting value. Locale-keyed variants use the tag
/// string as key with `""` naming the bundle default entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
	String(Box<str>),
	Bool(bool),
	Number(i64),
	/// Seconds.
	Duration(i64),
	StringArray(Vec<Box<str>>),
	Localized(BTreeMap<Box<str>, Box<str>>),
	LocalizedArray(BTreeMap<Box<str>, Vec<Box<str>>>),
	OptionList(Vec<Box<str>>),
	StorageMethods(Vec<StorageMethod>),
	Form(Vec<FormField>),
	Action(Vec<ActionItem>),
	Permissions(Vec<UserPermission>),
	EmailTemplate(BTreeMap<Box<str>, EmailItem>),
	Certificates(Vec<CertificateInfo>),
	PrivateKey(PrivateKeyEntry),
	Password(Secret),
	NamedSecrets(BTreeMap<Box<str>, NamedSecret>),
	Profiles(Vec<ProfileId>),
	Files(Vec<FileAttachment>),
}

impl SettingValue {
	/// Variant name for error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingValue::String(_) => "string",
			SettingValue::Bool(_) => "boolean",
			SettingValue::Number(_) => "number",
			SettingValue::Duration(_) => "duration",
			SettingValue::StringArray(_) => "string array",
			SettingValue::Localized(_) => "localized string",
			SettingValue::LocalizedArray(_) => "localized string array",
			SettingValue::OptionList(_) => "option list",
			SettingValue::StorageMethods(_) => "storage method list",
			SettingValue::Form(_) => "form",
			SettingValue::Action(_) => "action",
			SettingValue::Permissions(_) => "user permission list",
			SettingValue::EmailTemplate(_) => "email template",
			SettingValue::Certificates(_) => "certificate list",
			SettingValue::PrivateKey(_) => "private key",
			SettingValue::Password(_) => "password",
			SettingValue::NamedSecrets(_) => "named secret map",
			SettingValue::Profiles(_) => "profile list",
			SettingValue::Files(_) => "file list",
		}
	}

	/// Human-readable, redaction-aware rendering for exports and logs.
	pub fn to_debug_string(&self) -> String {
		match self {
			SettingValue::String(s) => s.to_string(),
			SettingValue::Bool(b) => b.to_string(),
			SettingValue::Number(n) => n.to_string(),
			SettingValue::Duration(secs) => format!("{} seconds", secs),
			SettingValue::StringArray(items) => items.join("\n"),
			SettingValue::Localized(entries) => entries
				.iter()
				.map(|(tag, value)| format!("{}: {}", locale_label(tag), value))
				.collect::<Vec<_>>()
				.join("\n"),
			SettingValue::LocalizedArray(entries) => entries
				.iter()
				.map(|(tag, values)| format!("{}: {}", locale_label(tag), values.join(", ")))
				.collect::<Vec<_>>()
				.join("\n"),
			SettingValue::OptionList(options) => options.join(","),
			SettingValue::StorageMethods(methods) => {
				methods.iter().map(|m| m.option_name()).collect::<Vec<_>>().join(",")
			}
			SettingValue::Form(fields) => fields
				.iter()
				.map(|f| format!("{} ({:?})", f.name, f.field_type))
				.collect::<Vec<_>>()
				.join("\n"),
			SettingValue::Action(actions) => {
				actions.iter().map(|a| a.name.as_ref()).collect::<Vec<_>>().join("\n")
			}
			SettingValue::Permissions(perms) => perms
				.iter()
				.map(|p| format!("{:?}: {}", p.kind, p.subject))
				.collect::<Vec<_>>()
				.join("\n"),
			SettingValue::EmailTemplate(entries) => entries
				.iter()
				.map(|(tag, item)| format!("{}: {}", locale_label(tag), item.subject))
				.collect::<Vec<_>>()
				.join("\n"),
			SettingValue::Certificates(certs) => certs
				.iter()
				.map(|c| format!("{} (serial {})", c.subject, c.serial_number))
				.collect::<Vec<_>>()
				.join("\n"),
			SettingValue::PrivateKey(entry) => {
				format!("{} ({} certificates)", REDACTED, entry.certificates.len())
			}
			SettingValue::Password(_) => REDACTED.to_string(),
			SettingValue::NamedSecrets(entries) => entries
				.iter()
				.map(|(name, secret)| {
					format!("{}: {} (usage: {})", name, REDACTED, secret.usage.join(","))
				})
				.collect::<Vec<_>>()
				.join("\n"),
			SettingValue::Profiles(profiles) => {
				profiles.iter().map(ProfileId::as_str).collect::<Vec<_>>().join("\n")
			}
			SettingValue::Files(files) => files
				.iter()
				.map(|f| format!("{} ({} bytes)", f.name, f.content.len()))
				.collect::<Vec<_>>()
				.join("\n"),
		}
	}

	/// Stable content hash, fed into per-domain key derivation. Unlike the
	/// serde output this covers secret material, so two configurations
	/// differing only in a password hash differently.
	pub fn value_hash(&self) -> String {
		let mut hasher = Sha256::new();
		hasher.update(self.type_name().as_bytes());
		hasher.update([0u8]);
		self.feed_content(&mut hasher);
		to_hex(&hasher.finalize())
	}

	fn feed_content(&self, hasher: &mut Sha256) {
		match self {
			SettingValue::String(s) => feed(hasher, s),
			SettingValue::Bool(b) => feed(hasher, if *b { "1" } else { "0" }),
			SettingValue::Number(n) => feed(hasher, &n.to_string()),
			SettingValue::Duration(secs) => feed(hasher, &secs.to_string()),
			SettingValue::StringArray(items) | SettingValue::OptionList(items) => {
				for item in items {
					feed(hasher, item);
				}
			}
			SettingValue::Localized(entries) => {
				for (tag, value) in entries {
					feed(hasher, tag);
					feed(hasher, value);
				}
			}
			SettingValue::LocalizedArray(entries) => {
				for (tag, values) in entries {
					feed(hasher, tag);
					for value in values {
						feed(hasher, value);
					}
				}
			}
			SettingValue::StorageMethods(methods) => {
				for method in methods {
					feed(hasher, method.option_name());
				}
			}
			SettingValue::Form(fields) => {
				for field in fields {
					feed(hasher, &field.name);
					feed(hasher, &field.label);
					feed(hasher, &format!("{:?}", field.field_type));
					feed(hasher, if field.required { "1" } else { "0" });
				}
			}
			SettingValue::Action(actions) => {
				for action in actions {
					feed(hasher, &action.name);
					for step in &action.steps {
						match step {
							ActionStep::WebService { method, url, body } => {
								feed(hasher, method);
								feed(hasher, url);
								feed(hasher, body.as_deref().unwrap_or(""));
							}
							ActionStep::DirectoryModify { attribute, value } => {
								feed(hasher, attribute);
								feed(hasher, value);
							}
						}
					}
				}
			}
			SettingValue::Permissions(perms) => {
				for perm in perms {
					feed(hasher, &format!("{:?}", perm.kind));
					feed(hasher, perm.profile.as_ref().map(ProfileId::as_str).unwrap_or(""));
					feed(hasher, perm.base.as_deref().unwrap_or(""));
					feed(hasher, &perm.subject);
				}
			}
			SettingValue::EmailTemplate(entries) => {
				for (tag, item) in entries {
					feed(hasher, tag);
					feed(hasher, &item.from);
					feed(hasher, &item.subject);
					feed(hasher, &item.body_plain);
					feed(hasher, &item.body_html);
				}
			}
			SettingValue::Certificates(certs) => {
				for cert in certs {
					feed(hasher, &cert.subject);
					feed(hasher, &cert.issuer);
					feed(hasher, &cert.serial_number);
				}
			}
			SettingValue::PrivateKey(entry) => {
				feed(hasher, entry.key.expose());
				for cert in &entry.certificates {
					feed(hasher, &cert.serial_number);
				}
			}
			SettingValue::Password(secret) => feed(hasher, secret.expose()),
			SettingValue::NamedSecrets(entries) => {
				for (name, secret) in entries {
					feed(hasher, name);
					feed(hasher, secret.secret.expose());
					for usage in &secret.usage {
						feed(hasher, usage);
					}
				}
			}
			SettingValue::Profiles(profiles) => {
				for profile in profiles {
					feed(hasher, profile.as_str());
				}
			}
			SettingValue::Files(files) => {
				for file in files {
					feed(hasher, &file.name);
					feed(hasher, &file.content_type);
					hasher.update(&file.content);
					hasher.update([0u8]);
				}
			}
		}
	}
}

fn feed(hasher: &mut Sha256, part: &str) {
	hasher.update(part.as_bytes());
	hasher.update([0u8]);
}

fn to_hex(bytes: &[u8]) -> String {
	bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn locale_label(tag: &str) -> &str {
	if tag.is_empty() { "default" } else { tag }
}

/// Select the best entry from a locale-keyed map: exact tag, else language
/// only, else the `""` default entry.
pub fn localized_lookup<'a, T>(
	entries: &'a BTreeMap<Box<str>, T>,
	locale: &LangTag,
) -> Option<&'a T> {
	entries
		.get(locale.to_string().as_str())
		.or_else(|| entries.get(locale.language()))
		.or_else(|| entries.get(""))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn localized(entries: &[(&str, &str)]) -> BTreeMap<Box<str>, Box<str>> {
		entries.iter().map(|(tag, value)| ((*tag).into(), (*value).into())).collect()
	}

	#[test]
	fn test_syntax_matches_value() {
		assert!(SettingSyntax::String.matches(&SettingValue::String("x".into())));
		assert!(SettingSyntax::Select.matches(&SettingValue::String("AD".into())));
		assert!(SettingSyntax::Boolean.matches(&SettingValue::Bool(true)));
		assert!(!SettingSyntax::Boolean.matches(&SettingValue::String("true".into())));
		assert!(SettingSyntax::Duration.matches(&SettingValue::Duration(60)));
		assert!(!SettingSyntax::Numeric.matches(&SettingValue::Duration(60)));
		assert!(SettingSyntax::Password.matches(&SettingValue::Password(Secret::new("x"))));
	}

	#[test]
	fn test_confidential_is_password_only() {
		for syntax in [
			SettingSyntax::String,
			SettingSyntax::NamedSecret,
			SettingSyntax::PrivateKey,
			SettingSyntax::X509Cert,
		] {
			assert!(!syntax.is_confidential());
		}
		assert!(SettingSyntax::Password.is_confidential());
	}

	#[test]
	fn test_debug_string_redacts_secrets() {
		let value = SettingValue::Password(Secret::new("hunter2"));
		assert!(!value.to_debug_string().contains("hunter2"));

		let mut named = BTreeMap::new();
		named.insert(
			"svc".into(),
			NamedSecret { secret: Secret::new("hunter2"), usage: vec!["rest".into()] },
		);
		let value = SettingValue::NamedSecrets(named);
		let debug = value.to_debug_string();
		assert!(debug.contains("svc"));
		assert!(debug.contains("rest"));
		assert!(!debug.contains("hunter2"));
	}

	#[test]
	fn test_value_hash_stable_and_content_sensitive() {
		let a = SettingValue::Password(Secret::new("one"));
		let b = SettingValue::Password(Secret::new("one"));
		let c = SettingValue::Password(Secret::new("two"));
		assert_eq!(a.value_hash(), b.value_hash());
		assert_ne!(a.value_hash(), c.value_hash());

		// same rendered content, different type must differ
		let s = SettingValue::String("42".into());
		let n = SettingValue::Number(42);
		assert_ne!(s.value_hash(), n.value_hash());
	}

	#[test]
	fn test_localized_lookup_fallback_chain() {
		let entries = localized(&[("", "fallback"), ("de", "german"), ("de-AT", "austrian")]);

		let at = LangTag::parse("de-AT").unwrap();
		assert_eq!(localized_lookup(&entries, &at).map(|s| s.as_ref()), Some("austrian"));

		let ch = LangTag::parse("de-CH").unwrap();
		assert_eq!(localized_lookup(&entries, &ch).map(|s| s.as_ref()), Some("german"));

		let fr = LangTag::parse("fr").unwrap();
		assert_eq!(localized_lookup(&entries, &fr).map(|s| s.as_ref()), Some("fallback"));
	}

	#[test]
	fn test_localized_lookup_without_default_entry() {
		let entries = localized(&[("de", "german")]);
		let fr = LangTag::parse("fr").unwrap();
		assert_eq!(localized_lookup(&entries, &fr), None);
	}

	#[test]
	fn test_certificate_parse_rejects_garbage() {
		assert!(CertificateInfo::from_pem_chain("not pem at all").is_err());

		let empty = "-----BEGIN PUBLIC KEY-----\nAAAA\n-----END PUBLIC KEY-----\n";
		assert!(CertificateInfo::from_pem_chain(empty).is_err());
	}

	#[test]
	fn test_file_attachment_serializes_digest_not_content() {
		let file = FileAttachment {
			name: "import.csv".into(),
			content_type: "text/csv".into(),
			content: b"top,secret,rows".to_vec(),
		};
		let json = serde_json::to_string(&file).unwrap();
		assert!(json.contains("import.csv"));
		assert!(json.contains("\"size\":15"));
		assert!(!json.contains("top,secret,rows"));
	}

	#[test]
	fn test_storage_method_option_names() {
		assert_eq!(StorageMethod::from_option_name("LOCALDB"), Some(StorageMethod::LocalDb));
		assert_eq!(StorageMethod::from_option_name("bogus"), None);
		assert_eq!(StorageMethod::Nmas.option_name(), "NMAS");
	}
}

// vim: ts=4
