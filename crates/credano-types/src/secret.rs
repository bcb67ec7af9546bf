//! Redaction-aware wrapper for secret material.
//!
//! A [`Secret`] never reveals its content through `Debug`, `Display` or
//! `Serialize`. Code that genuinely needs the cleartext (adapters, the
//! Basic-Auth codec) must call [`Secret::expose`].

use serde::{Deserialize, Serialize};

pub const REDACTED: &str = "**REDACTED**";

#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Box<str>);

impl Secret {
	pub fn new(value: impl Into<Box<str>>) -> Self {
		Secret(value.into())
	}

	/// Access the cleartext. Callers are responsible for not logging it.
	pub fn expose(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl std::fmt::Debug for Secret {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Secret({})", REDACTED)
	}
}

impl std::fmt::Display for Secret {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", REDACTED)
	}
}

impl Serialize for Secret {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(REDACTED)
	}
}

impl<'de> Deserialize<'de> for Secret {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Secret(Box::<str>::deserialize(deserializer)?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_secret_redacts_debug_and_display() {
		let secret = Secret::new("hunter2");
		assert!(!format!("{:?}", secret).contains("hunter2"));
		assert!(!format!("{}", secret).contains("hunter2"));
		assert_eq!(secret.expose(), "hunter2");
	}

	#[test]
	fn test_secret_redacts_serialization() {
		let secret = Secret::new("hunter2");
		let json = serde_json::to_string(&secret).unwrap();
		assert_eq!(json, format!("\"{}\"", REDACTED));
	}
}

// vim: ts=4
