//! Shared helpers for the engine integration tests.
//!
//! Every suite drives a real `DomainSettings` reader against the in-memory
//! stored-configuration adapter; helpers here build that pair with a fresh
//! catalog per test.

use std::sync::Arc;

use credano::catalog;
use credano::DomainSettings;
use credano_config_adapter_memory::MemoryConfigAdapter;
use credano_types::types::DomainId;

/// Optional: initialize tracing output for test debugging.
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

pub fn test_domain() -> DomainId {
	DomainId::new("test-domain")
}

/// A fresh reader over an empty in-memory adapter. The adapter handle is
/// returned so tests can store explicit values; note the reader memoizes,
/// so values stored after a read require a fresh reader (see
/// `fresh_reader`).
pub fn build_settings() -> (Arc<MemoryConfigAdapter>, DomainSettings) {
	setup_test_logging();
	let catalog = Arc::new(catalog::build().unwrap());
	let adapter = Arc::new(MemoryConfigAdapter::new());
	let settings = DomainSettings::new(catalog, adapter.clone(), test_domain());
	(adapter, settings)
}

/// A new reader family over the same adapter, with empty caches.
pub fn fresh_reader(adapter: &Arc<MemoryConfigAdapter>) -> DomainSettings {
	let catalog = Arc::new(catalog::build().unwrap());
	DomainSettings::new(catalog, adapter.clone(), test_domain())
}

// vim: ts=4
