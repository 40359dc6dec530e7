//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! scheduling engine.

// Calendar layout constants
pub const DENSE_DAY_THRESHOLD: usize = 3;
pub const PREVIEW_WEEK_COUNT: usize = 2;
pub const LOCAL_DATE_FORMAT: &str = "%Y-%m-%d";

// Priority buckets (lower sorts earlier); everything below the standard
// bucket is a "featured" tier and receives secondary ordering
pub const PRIORITY_HOLIDAY: u16 = 100;
pub const PRIORITY_OUT_OF_OFFICE: u16 = 200;
pub const PRIORITY_STANDARD: u16 = 300;

// Category-name heuristics
pub const OUT_OF_OFFICE_MARKER: &str = "out of office";
