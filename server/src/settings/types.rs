//! Setting categories, definitions, and the register-then-freeze catalog.

use std::collections::HashMap;

use credano_types::template::Template;
use credano_types::value::{SettingSyntax, SettingValue};

use crate::prelude::*;
use crate::settings::order;

// Category //
//**********//

/// Grouping of related settings for presentation and navigation. Categories
/// form a tree via [`Category::parent`]; the root-to-leaf label chain is the
/// menu path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
	Templates,
	Application,
	UrlSettings,
	Localization,
	Telemetry,
	Web,
	WebFeatures,
	Directory,
	DirectoryConnection,
	DirectoryAttributes,
	Database,
	Email,
	Security,
	Captcha,
	Recovery,
	Helpdesk,
	PeopleSearch,
}

impl Category {
	pub fn parent(&self) -> Option<Category> {
		match self {
			Category::WebFeatures => Some(Category::Web),
			Category::DirectoryConnection | Category::DirectoryAttributes => {
				Some(Category::Directory)
			}
			Category::Captcha => Some(Category::Security),
			_ => None,
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Category::Templates => "Templates",
			Category::Application => "Application",
			Category::UrlSettings => "URLs",
			Category::Localization => "Localization",
			Category::Telemetry => "Telemetry",
			Category::Web => "Web",
			Category::WebFeatures => "Features",
			Category::Directory => "Directory",
			Category::DirectoryConnection => "Connection",
			Category::DirectoryAttributes => "Attributes",
			Category::Database => "Database",
			Category::Email => "Email",
			Category::Security => "Security",
			Category::Captcha => "Captcha",
			Category::Recovery => "Account Recovery",
			Category::Helpdesk => "Helpdesk",
			Category::PeopleSearch => "People Search",
		}
	}

	/// Whether settings of this category are instantiated per profile.
	pub fn is_profiled(&self) -> bool {
		matches!(
			self,
			Category::DirectoryConnection
				| Category::DirectoryAttributes
				| Category::Recovery
				| Category::Helpdesk
				| Category::PeopleSearch
		)
	}

	/// Root-to-leaf chain, self included.
	pub fn path(&self) -> Vec<Category> {
		let mut chain = vec![*self];
		let mut current = *self;
		while let Some(parent) = current.parent() {
			chain.push(parent);
			current = parent;
		}
		chain.reverse();
		chain
	}
}

// SettingDefinition //
//*******************//

/// A default value together with the subset of templates it applies to.
/// An empty subset never matches by specificity; it serves as the declared
/// fallback when listed first.
#[derive(Clone, Debug)]
pub struct DefaultBinding {
	pub value: SettingValue,
	pub templates: Vec<Template>,
}

/// Immutable metadata of one setting. Constructed through
/// [`SettingDefinition::builder`] during catalog registration and never
/// mutated afterwards.
#[derive(Clone, Debug)]
pub struct SettingDefinition {
	key: Box<str>,
	label: Box<str>,
	syntax: SettingSyntax,
	category: Category,
	required: bool,
	hidden: bool,
	defaults: Vec<DefaultBinding>,
}

impl SettingDefinition {
	pub fn builder(
		key: impl Into<Box<str>>,
		syntax: SettingSyntax,
		category: Category,
	) -> SettingDefinitionBuilder {
		SettingDefinitionBuilder {
			key: key.into(),
			label: None,
			syntax,
			category,
			required: false,
			hidden: false,
			defaults: Vec::new(),
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn syntax(&self) -> SettingSyntax {
		self.syntax
	}

	pub fn category(&self) -> Category {
		self.category
	}

	pub fn is_required(&self) -> bool {
		self.required
	}

	pub fn is_hidden(&self) -> bool {
		self.hidden
	}

	pub fn is_confidential(&self) -> bool {
		self.syntax.is_confidential()
	}

	pub fn defaults(&self) -> &[DefaultBinding] {
		&self.defaults
	}

	/// The default value effective under the given template set (system
	/// default set when `None`).
	pub fn default_value(
		&self,
		template_set: Option<&credano_types::template::TemplateSet>,
	) -> CrResult<&SettingValue> {
		crate::settings::resolver::resolve_default(&self.defaults, template_set)
	}

	/// Ordered (template subset label, value debug string) pairs, one per
	/// binding, for export tooling.
	pub fn default_value_debug_strings(&self) -> Vec<(String, String)> {
		self.defaults
			.iter()
			.map(|binding| {
				let subset = binding
					.templates
					.iter()
					.map(|t| t.name())
					.collect::<Vec<_>>()
					.join(",");
				(subset, binding.value.to_debug_string())
			})
			.collect()
	}

	/// Menu path of this setting, e.g. `"Directory ⇨ Connection ⇨ Proxy Username"`.
	pub fn menu_location(&self, profile: Option<&ProfileId>) -> String {
		order::menu_location(self, profile)
	}
}

pub struct SettingDefinitionBuilder {
	key: Box<str>,
	label: Option<Box<str>>,
	syntax: SettingSyntax,
	category: Category,
	required: bool,
	hidden: bool,
	defaults: Vec<DefaultBinding>,
}

impl SettingDefinitionBuilder {
	pub fn label(mut self, label: impl Into<Box<str>>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn hidden(mut self) -> Self {
		self.hidden = true;
		self
	}

	/// Add a default binding applying under every template set.
	pub fn default(mut self, value: SettingValue) -> Self {
		self.defaults.push(DefaultBinding { value, templates: Vec::new() });
		self
	}

	/// Add a default binding applying under the given template subset.
	pub fn default_for(
		mut self,
		templates: impl IntoIterator<Item = Template>,
		value: SettingValue,
	) -> Self {
		self.defaults.push(DefaultBinding { value, templates: templates.into_iter().collect() });
		self
	}

	pub fn build(self) -> CrResult<SettingDefinition> {
		let label = self.label.ok_or_else(|| {
			Error::RegistrationError(format!("setting '{}' has no label", self.key))
		})?;

		if self.defaults.is_empty() {
			return Err(Error::RegistrationError(format!(
				"setting '{}' has no default bindings",
				self.key
			)));
		}

		for binding in &self.defaults {
			if !self.syntax.matches(&binding.value) {
				return Err(Error::RegistrationError(format!(
					"default binding of setting '{}' is a {} value, expected {:?} syntax",
					self.key,
					binding.value.type_name(),
					self.syntax
				)));
			}
		}

		Ok(SettingDefinition {
			key: self.key,
			label,
			syntax: self.syntax,
			category: self.category,
			required: self.required,
			hidden: self.hidden,
			defaults: self.defaults,
		})
	}
}

// Registry //
//**********//

/// Mutable registry used during startup. Frozen into a [`SettingCatalog`]
/// before any reader is constructed.
pub struct SettingsRegistry {
	definitions: Vec<SettingDefinition>,
	index: HashMap<Box<str>, usize>,
}

impl SettingsRegistry {
	pub fn new() -> Self {
		Self { definitions: Vec::new(), index: HashMap::new() }
	}

	/// Register a new setting definition. Duplicate keys are a fatal
	/// configuration defect.
	pub fn register(&mut self, def: SettingDefinition) -> CrResult<()> {
		if self.index.contains_key(def.key()) {
			return Err(Error::RegistrationError(format!(
				"setting '{}' is already registered",
				def.key()
			)));
		}

		debug!("Registering setting: {}", def.key());
		self.index.insert(def.key().into(), self.definitions.len());
		self.definitions.push(def);
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}

	/// Freeze the registry into the immutable catalog, computing the menu
	/// order once.
	pub fn freeze(self) -> SettingCatalog {
		info!("Freezing setting catalog with {} definitions", self.definitions.len());

		let mut sorted: Vec<usize> = (0..self.definitions.len()).collect();
		sorted.sort_by(|a, b| {
			let loc_a = order::menu_location(&self.definitions[*a], None);
			let loc_b = order::menu_location(&self.definitions[*b], None);
			loc_a.cmp(&loc_b).then(a.cmp(b))
		});

		SettingCatalog { definitions: self.definitions, index: self.index, sorted }
	}
}

impl Default for SettingsRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Immutable catalog of every known setting. Built once, shared read-only.
pub struct SettingCatalog {
	definitions: Vec<SettingDefinition>,
	index: HashMap<Box<str>, usize>,
	sorted: Vec<usize>,
}

impl SettingCatalog {
	pub fn get(&self, key: &str) -> Option<&SettingDefinition> {
		self.index.get(key).map(|idx| &self.definitions[*idx])
	}

	/// Every definition in registration order; stable across calls.
	pub fn all(&self) -> impl Iterator<Item = &SettingDefinition> {
		self.definitions.iter()
	}

	/// Every definition in menu order; computed once at freeze.
	pub fn sorted(&self) -> impl Iterator<Item = &SettingDefinition> {
		self.sorted.iter().map(|idx| &self.definitions[*idx])
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use credano_types::secret::Secret;

	fn minimal(key: &str) -> SettingDefinition {
		SettingDefinition::builder(key, SettingSyntax::String, Category::Application)
			.label("Test Setting")
			.default(SettingValue::String("x".into()))
			.build()
			.unwrap()
	}

	#[test]
	fn test_builder_rejects_missing_label() {
		let result = SettingDefinition::builder("a.b", SettingSyntax::String, Category::Web)
			.default(SettingValue::String("x".into()))
			.build();
		assert!(matches!(result, Err(Error::RegistrationError(_))));
	}

	#[test]
	fn test_builder_rejects_empty_defaults() {
		let result = SettingDefinition::builder("a.b", SettingSyntax::String, Category::Web)
			.label("A")
			.build();
		assert!(matches!(result, Err(Error::RegistrationError(_))));
	}

	#[test]
	fn test_builder_rejects_syntax_mismatch() {
		let result = SettingDefinition::builder("a.b", SettingSyntax::Boolean, Category::Web)
			.label("A")
			.default(SettingValue::String("true".into()))
			.build();
		assert!(matches!(result, Err(Error::RegistrationError(_))));
	}

	#[test]
	fn test_confidential_follows_syntax() {
		let def = SettingDefinition::builder("a.pw", SettingSyntax::Password, Category::Security)
			.label("A Password")
			.default(SettingValue::Password(Secret::new("")))
			.build()
			.unwrap();
		assert!(def.is_confidential());
		assert!(!minimal("a.b").is_confidential());
	}

	#[test]
	fn test_registry_rejects_duplicate_key() {
		let mut registry = SettingsRegistry::new();
		registry.register(minimal("dup.key")).unwrap();
		let result = registry.register(minimal("dup.key"));
		assert!(matches!(result, Err(Error::RegistrationError(_))));
	}

	#[test]
	fn test_catalog_lookup_and_order() {
		let mut registry = SettingsRegistry::new();
		registry.register(minimal("b.second")).unwrap();
		registry.register(minimal("a.first")).unwrap();
		let catalog = registry.freeze();

		assert_eq!(catalog.len(), 2);
		assert!(catalog.get("a.first").is_some());
		assert!(catalog.get("missing").is_none());

		// registration order is preserved by all()
		let keys: Vec<&str> = catalog.all().map(|d| d.key()).collect();
		assert_eq!(keys, vec!["b.second", "a.first"]);
	}

	#[test]
	fn test_category_path() {
		assert_eq!(
			Category::DirectoryConnection.path(),
			vec![Category::Directory, Category::DirectoryConnection]
		);
		assert_eq!(Category::Application.path(), vec![Category::Application]);
	}
}

// vim: ts=4
