//! Value presentation for failure messages.
//!
//! This module turns arbitrary values into display strings:
//! - `Describe` - trait implemented by values that know how to render
//!   themselves (the seam for custom types)
//! - `StandardRepresentation` - the driver: container layout, single-line
//!   vs. multi-line selection, deterministic truncation, back-reference
//!   handling
//! - `register_formatter_for_type` - process-wide per-type overrides
//!
//! # Example
//!
//! ```rust
//! use attest::presentation::StandardRepresentation;
//!
//! let rep = StandardRepresentation::new();
//! assert_eq!(rep.to_string_of(&vec![1, 2, 3]), "[1, 2, 3]");
//! assert_eq!(rep.to_string_of(&"hello".to_string()), "\"hello\"");
//! ```

mod describe;
mod representation;

pub use describe::Describe;
pub use representation::{
    register_formatter_for_type, remove_all_registered_formatters, StandardRepresentation,
};
