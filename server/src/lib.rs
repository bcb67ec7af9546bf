//! Credano is an open-source, self-hosted identity self-service platform
//! (password change, account recovery, helpdesk tools, people search)
//! backed by directory services.
//!
//! This crate is its configuration engine:
//!
//! - a closed catalog of typed setting definitions grouped into categories
//! - deployment templates selecting which default values apply
//! - a per-domain reader resolving effective, typed values against a
//!   pluggable stored-configuration adapter
//! - the Basic-Auth header codec and debug-export tooling built on top
//!
//! Storage backends implement [`credano_types::config_adapter::ConfigAdapter`];
//! the engine itself performs no I/O.

#![forbid(unsafe_code)]

pub mod auth;
pub mod debug;
pub mod prelude;
pub mod settings;

pub use crate::settings::catalog;
pub use crate::settings::reader::DomainSettings;
pub use crate::settings::types::{SettingCatalog, SettingDefinition, SettingsRegistry};

// vim: ts=4
