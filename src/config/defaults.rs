//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [posts] Section Defaults
// ============================================================================

pub mod posts {
    pub fn path_prefix() -> String {
        "".into()
    }

    pub fn assign_to() -> String {
        "posts".into()
    }
}
