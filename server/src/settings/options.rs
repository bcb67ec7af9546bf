//! Option enums stored by name in `Select` and `OptionList` settings.

use credano_types::value::SettingOption;

/// Where one-time verification tokens are persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStorageMethod {
	Ldap,
	Db,
	LocalDb,
	Crypto,
}

impl SettingOption for TokenStorageMethod {
	fn option_name(&self) -> &'static str {
		match self {
			TokenStorageMethod::Ldap => "LDAP",
			TokenStorageMethod::Db => "DB",
			TokenStorageMethod::LocalDb => "LOCALDB",
			TokenStorageMethod::Crypto => "CRYPTO",
		}
	}

	fn from_option_name(name: &str) -> Option<Self> {
		match name {
			"LDAP" => Some(TokenStorageMethod::Ldap),
			"DB" => Some(TokenStorageMethod::Db),
			"LOCALDB" => Some(TokenStorageMethod::LocalDb),
			"CRYPTO" => Some(TokenStorageMethod::Crypto),
			_ => None,
		}
	}
}

/// How a user may prove their identity during account recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationMethod {
	Attributes,
	EmailToken,
	SmsToken,
	Otp,
}

impl SettingOption for VerificationMethod {
	fn option_name(&self) -> &'static str {
		match self {
			VerificationMethod::Attributes => "ATTRIBUTES",
			VerificationMethod::EmailToken => "EMAIL",
			VerificationMethod::SmsToken => "SMS",
			VerificationMethod::Otp => "OTP",
		}
	}

	fn from_option_name(name: &str) -> Option<Self> {
		match name {
			"ATTRIBUTES" => Some(VerificationMethod::Attributes),
			"EMAIL" => Some(VerificationMethod::EmailToken),
			"SMS" => Some(VerificationMethod::SmsToken),
			"OTP" => Some(VerificationMethod::Otp),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_option_name_round_trip() {
		for method in [
			TokenStorageMethod::Ldap,
			TokenStorageMethod::Db,
			TokenStorageMethod::LocalDb,
			TokenStorageMethod::Crypto,
		] {
			assert_eq!(TokenStorageMethod::from_option_name(method.option_name()), Some(method));
		}
		assert_eq!(TokenStorageMethod::from_option_name("TAPE"), None);
	}
}

// vim: ts=4
