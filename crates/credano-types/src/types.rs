//! Common identifier and time types used throughout the Credano platform.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// DomainId //
//**********//
/// Identifies one configuration domain of a multi-domain deployment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainId(Box<str>);

impl DomainId {
	pub fn new(id: impl Into<Box<str>>) -> Self {
		DomainId(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for DomainId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for DomainId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for DomainId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(DomainId(Box::<str>::deserialize(deserializer)?))
	}
}

// ProfileId //
//***********//
/// Identifies a named instance of a profiled setting group.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileId(Box<str>);

impl ProfileId {
	pub fn new(id: impl Into<Box<str>>) -> Self {
		ProfileId(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for ProfileId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for ProfileId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for ProfileId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(ProfileId(Box::<str>::deserialize(deserializer)?))
	}
}

// Timestamp //
//***********//
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub i64);

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

pub fn now() -> Timestamp {
	let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
	Timestamp(res.as_secs() as i64)
}

// LangTag //
//*********//
/// A BCP 47-ish language tag, reduced to language plus optional region.
///
/// Used to select the best entry from locale-keyed setting values:
/// exact tag first, then language only, then the bundle default.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LangTag {
	language: Box<str>,
	region: Option<Box<str>>,
}

impl LangTag {
	/// Parse a tag like `"de"`, `"de-AT"` or `"de_AT"`.
	///
	/// Returns `None` for an empty or structurally empty input.
	pub fn parse(input: &str) -> Option<Self> {
		let mut parts = input.split(['-', '_']);
		let language = parts.next().filter(|p| !p.is_empty())?;
		let region = parts.next().filter(|p| !p.is_empty());
		Some(LangTag {
			language: language.to_ascii_lowercase().into(),
			region: region.map(|r| r.to_ascii_uppercase().into()),
		})
	}

	pub fn language(&self) -> &str {
		&self.language
	}

	pub fn region(&self) -> Option<&str> {
		self.region.as_deref()
	}
}

impl Default for LangTag {
	fn default() -> Self {
		LangTag { language: "en".into(), region: None }
	}
}

impl std::fmt::Display for LangTag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.region {
			Some(region) => write!(f, "{}-{}", self.language, region),
			None => write!(f, "{}", self.language),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lang_tag_parse() {
		let tag = LangTag::parse("de-AT").unwrap();
		assert_eq!(tag.language(), "de");
		assert_eq!(tag.region(), Some("AT"));
		assert_eq!(tag.to_string(), "de-AT");

		let tag = LangTag::parse("EN").unwrap();
		assert_eq!(tag.language(), "en");
		assert_eq!(tag.region(), None);

		let tag = LangTag::parse("pt_br").unwrap();
		assert_eq!(tag.to_string(), "pt-BR");

		assert!(LangTag::parse("").is_none());
		assert!(LangTag::parse("-AT").is_none());
	}

	#[test]
	fn test_timestamp_ordering() {
		assert!(Timestamp(1) < Timestamp(2));
		assert_eq!(Timestamp(5), Timestamp(5));
	}
}

// vim: ts=4
