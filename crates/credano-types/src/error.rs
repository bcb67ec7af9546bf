//! Error type shared by the server and all adapters.

use std::fmt;

pub type CrResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Defect detected while building the setting catalog (duplicate key,
	/// empty default-binding list). Fatal at startup, never recoverable.
	RegistrationError(String),

	/// An explicitly stored value that does not satisfy its declared syntax.
	StoredValueError {
		key: Box<str>,
		domain: Box<str>,
		detail: String,
	},

	ValidationError(String),
	ConfigError(String),
	NotFound,

	/// Failure reported by a stored-configuration adapter.
	AdapterError(String),

	/// Invariant violation inside the engine itself.
	InternalError(String),

	// externals
	Io(std::io::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::RegistrationError(msg) => write!(f, "registration error: {}", msg),
			Error::StoredValueError { key, domain, detail } => {
				write!(f, "stored value error for setting '{}' in domain '{}': {}", key, domain, detail)
			}
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::NotFound => write!(f, "not found"),
			Error::AdapterError(msg) => write!(f, "adapter error: {}", msg),
			Error::InternalError(msg) => write!(f, "internal error: {}", msg),
			Error::Io(e) => write!(f, "io error: {}", e),
		}
	}
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::InternalError(format!("json serialization failed: {}", err))
	}
}

// vim: ts=4
