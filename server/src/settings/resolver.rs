//! Default-value resolution: most-specific template match, first declared
//! wins on ties.

use credano_types::template::TemplateSet;

use crate::prelude::*;
use crate::settings::types::DefaultBinding;
use credano_types::value::SettingValue;

/// Pick the default value applying under `template_set` (the system default
/// set when `None`).
///
/// A single binding applies unconditionally. With several bindings the
/// candidate intersection sizes are examined from the binding-list size down
/// to 1; for each size the bindings are scanned in declaration order and the
/// first whose template subset intersects the effective set with exactly
/// that size wins. When no binding intersects at all, the first-declared
/// binding is the fallback, so resolution never fails for a non-empty list.
///
/// An empty binding list is a catalog defect, not a caller error.
pub fn resolve_default<'a>(
	bindings: &'a [DefaultBinding],
	template_set: Option<&TemplateSet>,
) -> CrResult<&'a SettingValue> {
	let default_set;
	let effective = match template_set {
		Some(set) => set,
		None => {
			default_set = TemplateSet::default();
			&default_set
		}
	};

	let first = bindings
		.first()
		.ok_or_else(|| Error::InternalError("setting has no default bindings".into()))?;

	if bindings.len() == 1 {
		return Ok(&first.value);
	}

	for match_count in (1..=bindings.len()).rev() {
		for binding in bindings {
			if effective.specificity_rank(&binding.templates) == match_count {
				return Ok(&binding.value);
			}
		}
	}

	Ok(&first.value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use credano_types::template::Template;

	fn binding(value: &str, templates: &[Template]) -> DefaultBinding {
		DefaultBinding {
			value: SettingValue::String(value.into()),
			templates: templates.to_vec(),
		}
	}

	fn resolved(bindings: &[DefaultBinding], set: Option<&TemplateSet>) -> String {
		match resolve_default(bindings, set).unwrap() {
			SettingValue::String(s) => s.to_string(),
			other => unreachable!("unexpected value: {:?}", other),
		}
	}

	#[test]
	fn test_single_binding_ignores_template_set() {
		let bindings = vec![binding("only", &[Template::ActiveDirectory])];

		let empty = TemplateSet::new([]);
		assert_eq!(resolved(&bindings, Some(&empty)), "only");
		assert_eq!(resolved(&bindings, None), "only");

		let other = TemplateSet::new([Template::EDirectory]);
		assert_eq!(resolved(&bindings, Some(&other)), "only");
	}

	#[test]
	fn test_most_specific_match_wins() {
		let bindings = vec![
			binding("generic", &[]),
			binding("ad", &[Template::ActiveDirectory]),
			binding("ad-db", &[Template::ActiveDirectory, Template::SharedDatabase]),
		];

		let ad_db = TemplateSet::new([Template::ActiveDirectory, Template::SharedDatabase]);
		assert_eq!(resolved(&bindings, Some(&ad_db)), "ad-db");

		let ad_local = TemplateSet::new([Template::ActiveDirectory, Template::LocalStore]);
		assert_eq!(resolved(&bindings, Some(&ad_local)), "ad");
	}

	#[test]
	fn test_tie_resolves_to_first_declared() {
		let bindings = vec![
			binding("first", &[Template::ActiveDirectory]),
			binding("second", &[Template::SharedDatabase]),
		];

		// both bindings intersect with size 1; declaration order decides
		let both = TemplateSet::new([Template::ActiveDirectory, Template::SharedDatabase]);
		assert_eq!(resolved(&bindings, Some(&both)), "first");
	}

	#[test]
	fn test_zero_intersection_falls_back_to_first() {
		let bindings = vec![
			binding("first", &[Template::ActiveDirectory]),
			binding("second", &[Template::SharedDatabase]),
		];

		let unrelated = TemplateSet::new([Template::OpenLdap]);
		assert_eq!(resolved(&bindings, Some(&unrelated)), "first");

		let empty = TemplateSet::new([]);
		assert_eq!(resolved(&bindings, Some(&empty)), "first");
	}

	#[test]
	fn test_empty_binding_list_is_internal_error() {
		let result = resolve_default(&[], None);
		assert!(matches!(result, Err(Error::InternalError(_))));
	}
}

// vim: ts=4
