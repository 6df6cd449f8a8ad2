// ABOUTME: Core types, traits, and utilities for Carryover
// ABOUTME: Day clock, calendar day values, color palette, and shared validation

pub mod clock;
pub mod color;
pub mod constants;
pub mod day;
pub mod utils;
pub mod validation;

// Re-export main types
pub use clock::{Clock, FixedClock, SystemClock};
pub use color::{Color, UnknownColor};
pub use day::{Day, DayParseError};

// Re-export constants
pub use constants::{carryover_dir, database_file};

// Re-export utilities
pub use utils::{generate_id, TEMP_ID_PREFIX};

// Re-export validation
pub use validation::{require_id, require_text, ValidationError};
