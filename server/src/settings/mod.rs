//! Settings subsystem: catalog, template-based defaults, typed reading
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): categories, setting definitions, the
//!   register-then-freeze catalog
//! - **Catalog** (`catalog/`): registration of every known setting, one
//!   module per feature area
//! - **Resolver** (`resolver.rs`): most-specific template match over a
//!   definition's default bindings
//! - **Reader** (`reader.rs`): `DomainSettings`, the typed per-domain facade
//!   over a stored-configuration adapter
//! - **Order** (`order.rs`): deterministic menu ordering for UI generation
//!   and exports
//!
//! The catalog is built once at startup and is immutable afterwards; every
//! request-handling thread reads it without synchronization.

pub mod catalog;
pub mod options;
pub mod order;
pub mod reader;
pub mod resolver;
pub mod types;

pub use reader::DomainSettings;
pub use types::{
	Category, DefaultBinding, SettingCatalog, SettingDefinition, SettingDefinitionBuilder,
	SettingsRegistry,
};

// vim: ts=4
