pub use credano_types::error::{CrResult, Error};
pub use credano_types::types::{DomainId, LangTag, ProfileId, Timestamp};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
