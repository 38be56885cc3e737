//! Typed input for [`crate::ConfigStore::set`].

use super::coerce::{format_bool, format_double, format_int, format_uint};

/// A value handed to the store by a setter.
///
/// The store never keeps a `ConfigValue`; it is converted to its canonical
/// string with [`ConfigValue::to_raw`] before being inserted, and every read
/// re-parses that string.
///
/// The `From` impls let callers pass plain Rust values:
///
/// ```rust
/// use kvconf_core::ConfigValue;
///
/// assert_eq!(ConfigValue::from(42).to_raw(), "42");
/// assert_eq!(ConfigValue::from(7u32).to_raw(), "7");
/// assert_eq!(ConfigValue::from(3.14156).to_raw(), "3.141560");
/// assert_eq!(ConfigValue::from(true).to_raw(), "true");
/// assert_eq!(ConfigValue::from("sarmiento").to_raw(), "sarmiento");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Str(String),
    Int(i32),
    UInt(u32),
    Double(f64),
    Bool(bool),
}

impl ConfigValue {
    /// Canonical string form stored in the backing file.
    pub fn to_raw(&self) -> String {
        match self {
            ConfigValue::Str(s) => s.clone(),
            ConfigValue::Int(v) => format_int(*v),
            ConfigValue::UInt(v) => format_uint(*v),
            ConfigValue::Double(v) => format_double(*v),
            ConfigValue::Bool(v) => format_bool(*v),
        }
    }

    /// Consumes the value, avoiding a copy for strings.
    pub fn into_raw(self) -> String {
        match self {
            ConfigValue::Str(s) => s,
            other => other.to_raw(),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<&String> for ConfigValue {
    fn from(value: &String) -> Self {
        ConfigValue::Str(value.clone())
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        ConfigValue::UInt(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Double(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_raw_for_each_variant() {
        assert_eq!(ConfigValue::Str("casa".into()).to_raw(), "casa");
        assert_eq!(ConfigValue::Int(-1001).to_raw(), "-1001");
        assert_eq!(ConfigValue::UInt(1024).to_raw(), "1024");
        assert_eq!(ConfigValue::Double(-2.5).to_raw(), "-2.500000");
        assert_eq!(ConfigValue::Bool(false).to_raw(), "false");
    }

    #[test]
    fn test_into_raw_matches_to_raw() {
        let values = [
            ConfigValue::from("x"),
            ConfigValue::from(5),
            ConfigValue::from(5u32),
            ConfigValue::from(0.5),
            ConfigValue::from(true),
        ];
        for value in values {
            let expected = value.to_raw();
            assert_eq!(value.into_raw(), expected);
        }
    }

    #[test]
    fn test_from_picks_the_matching_variant() {
        assert_eq!(ConfigValue::from(String::from("a")), ConfigValue::Str("a".into()));
        assert_eq!(ConfigValue::from(-3), ConfigValue::Int(-3));
        assert_eq!(ConfigValue::from(3u32), ConfigValue::UInt(3));
        assert_eq!(ConfigValue::from(1.5), ConfigValue::Double(1.5));
        assert_eq!(ConfigValue::from(true), ConfigValue::Bool(true));
    }
}
