//! Runtime services backing the interpreter's built-in operations.
//!
//! This crate provides the pieces the interpreter calls into on the hot
//! path of statement execution:
//!
//! - Pattern compilation and matching for the string/RegExp built-ins
//! - The ordered, de-duplicated key list for for-each-key enumeration
//! - A fixed-capacity cache for timestamp-to-calendar-field decomposition
//! - Locale-independent, round-trippable double/decimal-text conversion
//!
//! # Example
//!
//! ```
//! use builtins::{CompiledPattern, DigitMode, NumericConversion, PropertyNameList};
//!
//! let pattern = CompiledPattern::compile("(a)(b)", "");
//! let found = pattern.find("xaby", 0).unwrap();
//! assert_eq!(found.index, 1);
//!
//! let mut keys = PropertyNameList::new();
//! keys.add("length");
//! keys.add("length");
//! assert_eq!(keys.len(), 1);
//!
//! assert_eq!(NumericConversion::to_string(0.1, DigitMode::Shortest), "0.1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod date_cache;
pub mod enumeration;
pub mod numeric;
pub mod pattern;

// Re-export main types for convenience
pub use date_cache::{CalendarFields, DecompositionCache, TimeZoneKind};
pub use enumeration::PropertyNameList;
pub use numeric::{DigitMode, NumericConversion};
pub use pattern::{CompiledPattern, PatternFlags, PatternMatch};
