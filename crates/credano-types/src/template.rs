//! Deployment templates and template sets.
//!
//! A template names one deployment flavor (directory vendor, storage
//! backend). A [`TemplateSet`] is the combination active for a domain and
//! selects which default values apply to its settings.

use serde::{Deserialize, Serialize};

/// The axis a template belongs to. A template set holds at most one
/// template per class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateClass {
	DirectoryVendor,
	Storage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Template {
	// directory vendor flavors
	#[serde(rename = "AD")]
	ActiveDirectory,
	#[serde(rename = "EDIR")]
	EDirectory,
	#[serde(rename = "OPENLDAP")]
	OpenLdap,
	#[serde(rename = "ORACLE_DS")]
	OracleDirectory,
	#[serde(rename = "DEFAULT")]
	GenericDirectory,

	// storage flavors
	#[serde(rename = "LOCAL")]
	LocalStore,
	#[serde(rename = "DB")]
	SharedDatabase,
}

impl Template {
	pub fn class(&self) -> TemplateClass {
		match self {
			Template::ActiveDirectory
			| Template::EDirectory
			| Template::OpenLdap
			| Template::OracleDirectory
			| Template::GenericDirectory => TemplateClass::DirectoryVendor,
			Template::LocalStore | Template::SharedDatabase => TemplateClass::Storage,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			Template::ActiveDirectory => "AD",
			Template::EDirectory => "EDIR",
			Template::OpenLdap => "OPENLDAP",
			Template::OracleDirectory => "ORACLE_DS",
			Template::GenericDirectory => "DEFAULT",
			Template::LocalStore => "LOCAL",
			Template::SharedDatabase => "DB",
		}
	}

	pub fn from_name(name: &str) -> Option<Template> {
		match name {
			"AD" => Some(Template::ActiveDirectory),
			"EDIR" => Some(Template::EDirectory),
			"OPENLDAP" => Some(Template::OpenLdap),
			"ORACLE_DS" => Some(Template::OracleDirectory),
			"DEFAULT" => Some(Template::GenericDirectory),
			"LOCAL" => Some(Template::LocalStore),
			"DB" => Some(Template::SharedDatabase),
			_ => None,
		}
	}
}

impl std::fmt::Display for Template {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// The ordered, duplicate-free combination of templates active for a domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSet {
	templates: Vec<Template>,
}

impl TemplateSet {
	/// Build a set from the given templates. Duplicates are dropped and only
	/// the first template of each class is kept; order is preserved.
	pub fn new(templates: impl IntoIterator<Item = Template>) -> Self {
		let mut kept: Vec<Template> = Vec::new();
		for template in templates {
			if !kept.iter().any(|t| t.class() == template.class()) {
				kept.push(template);
			}
		}
		TemplateSet { templates: kept }
	}

	pub fn templates(&self) -> &[Template] {
		&self.templates
	}

	pub fn contains(&self, template: Template) -> bool {
		self.templates.contains(&template)
	}

	/// Number of the candidate subset's templates present in this set.
	pub fn specificity_rank(&self, candidate_subset: &[Template]) -> usize {
		candidate_subset.iter().filter(|t| self.contains(**t)).count()
	}
}

impl Default for TemplateSet {
	/// The system-wide default, used whenever no explicit set is given.
	fn default() -> Self {
		TemplateSet::new([Template::GenericDirectory, Template::LocalStore])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_template_name_round_trip() {
		for template in [
			Template::ActiveDirectory,
			Template::EDirectory,
			Template::OpenLdap,
			Template::OracleDirectory,
			Template::GenericDirectory,
			Template::LocalStore,
			Template::SharedDatabase,
		] {
			assert_eq!(Template::from_name(template.name()), Some(template));
		}
		assert_eq!(Template::from_name("BOGUS"), None);
	}

	#[test]
	fn test_template_set_keeps_one_per_class() {
		let set = TemplateSet::new([
			Template::ActiveDirectory,
			Template::EDirectory,
			Template::ActiveDirectory,
			Template::SharedDatabase,
		]);
		assert_eq!(set.templates(), &[Template::ActiveDirectory, Template::SharedDatabase]);
	}

	#[test]
	fn test_specificity_rank() {
		let set = TemplateSet::new([Template::ActiveDirectory, Template::SharedDatabase]);
		assert_eq!(set.specificity_rank(&[]), 0);
		assert_eq!(set.specificity_rank(&[Template::ActiveDirectory]), 1);
		assert_eq!(set.specificity_rank(&[Template::EDirectory]), 0);
		assert_eq!(
			set.specificity_rank(&[Template::ActiveDirectory, Template::SharedDatabase]),
			2
		);
	}

	#[test]
	fn test_default_set() {
		let set = TemplateSet::default();
		assert!(set.contains(Template::GenericDirectory));
		assert!(set.contains(Template::LocalStore));
	}
}

// vim: ts=4
