//! Category-name and project-code heuristics.
//!
//! Catalog categories are free-text typed by operators, so out-of-office
//! detection falls back to a substring scan when the explicit task flag is
//! absent. Project codes arrive in mixed case from different endpoints and
//! are uppercased before any comparison.

use crate::constants::OUT_OF_OFFICE_MARKER;

/// Case-insensitive check for the out-of-office marker in a category name.
pub fn is_out_of_office_category(name: &str) -> bool {
    name.to_lowercase().contains(OUT_OF_OFFICE_MARKER)
}

/// Canonical form of a project code for comparisons and cache lookups.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
