//! The sole piece of process-wide mutable state in this crate: the default
//! `StringifyFieldOptions` used by generated `Display`/`to_reflected_string`
//! impls that don't carry their own per-type override (spec §9 "Global
//! state"). Held behind an `RwLock<Arc<_>>` so writers replace a snapshot
//! atomically and readers never block a concurrent writer mid-read.

use std::sync::{Arc, OnceLock, RwLock};

use crate::stringify::StringifyFieldOptions;

fn cell() -> &'static RwLock<Arc<StringifyFieldOptions>> {
    static CELL: OnceLock<RwLock<Arc<StringifyFieldOptions>>> = OnceLock::new();
    CELL.get_or_init(|| RwLock::new(Arc::new(StringifyFieldOptions::default_opts())))
}

/// Snapshot of the current process-wide default options. A setter call
/// happens-before any subsequent read that observes it; concurrent
/// in-flight calls have no defined ordering relative to each other.
pub fn default_mode() -> Arc<StringifyFieldOptions> {
    Arc::clone(&cell().read().expect("stringify mode lock poisoned"))
}

/// Replaces the process-wide default options.
pub fn set_default_mode(opts: StringifyFieldOptions) {
    let mut guard = cell().write().expect("stringify mode lock poisoned");
    tracing::debug!("stringify: process-wide default options replaced");
    *guard = Arc::new(opts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setter_is_visible_to_subsequent_reads() {
        set_default_mode(StringifyFieldOptions::json());
        assert_eq!(default_mode().container_prefix, "[");
        set_default_mode(StringifyFieldOptions::default_opts());
        assert_eq!(default_mode().container_prefix, "{");
    }
}
