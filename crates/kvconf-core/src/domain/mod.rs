//! String-level rules of the configuration store.
//!
//! Nothing in here touches the filesystem.  Every value in a store is kept
//! as a string; the functions in this module are what turns those strings
//! into numbers and booleans on the way out, and back into canonical text on
//! the way in.

pub mod coerce;
pub mod normalize;
pub mod value;

pub use coerce::{
    format_bool, format_double, format_int, format_uint, parse_double, parse_int, parse_uint,
};
pub use normalize::{fold_ascii, is_truthy, trim, trim_bytes, TRUTHY};
pub use value::ConfigValue;
