//! HTTP Basic-Auth header codec.
//!
//! Parses a `Basic <base64>` authorization header into username and secret
//! by splitting the decoded payload on the first colon. Decode failures are
//! logged and treated as "no credentials present" rather than propagated;
//! a syntactically valid header is the caller's hint, not a guarantee.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use credano_types::secret::Secret;

use crate::prelude::*;

pub const BASIC_AUTH_PREFIX: &str = "Basic";

/// Username/secret pair derived from a "Basic" Authorization HTTP header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicAuthInfo {
	pub username: Box<str>,
	pub password: Option<Secret>,
}

impl BasicAuthInfo {
	pub fn new(username: impl Into<Box<str>>, password: Option<Secret>) -> Self {
		BasicAuthInfo { username: username.into(), password }
	}

	/// Extract credentials from an `Authorization` header value.
	///
	/// Returns `None` when the header is not a Basic header or its payload
	/// cannot be decoded (bad base64, non-UTF-8 bytes).
	pub fn parse_auth_header(header: &str) -> Option<BasicAuthInfo> {
		let encoded = header.trim().strip_prefix(BASIC_AUTH_PREFIX)?.strip_prefix(' ')?;

		let bytes = match BASE64.decode(encoded.trim()) {
			Ok(bytes) => bytes,
			Err(e) => {
				debug!("error decoding auth header: {}", e);
				return None;
			}
		};

		match String::from_utf8(bytes) {
			// decoded payload looks like "cn=user,o=company:secret" or "user:secret"
			Ok(decoded) => Some(Self::parse_header_string(&decoded)),
			Err(e) => {
				debug!("error decoding auth header: {}", e);
				None
			}
		}
	}

	/// Split a decoded payload on the first colon. Input without a colon is
	/// a bare username with no secret.
	pub fn parse_header_string(input: &str) -> BasicAuthInfo {
		match input.find(':') {
			Some(index) => BasicAuthInfo {
				username: input[..index].into(),
				password: Some(Secret::new(&input[index + 1..])),
			},
			None => BasicAuthInfo { username: input.into(), password: None },
		}
	}

	/// Re-encode as an `Authorization` header value. With the same username
	/// and secret this reproduces the original header byte-for-byte.
	pub fn to_auth_header(&self) -> String {
		let cleartext = format!(
			"{}:{}",
			self.username,
			self.password.as_ref().map(Secret::expose).unwrap_or("")
		);
		format!("{} {}", BASIC_AUTH_PREFIX, BASE64.encode(cleartext.as_bytes()))
	}
}


// vim: ts=4
