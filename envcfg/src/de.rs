//! String-to-value coercion for bound fields

use crate::error::{Error, Result};
use std::fmt::Display;
use std::str::FromStr;

/// Parse a boolean from its canonical textual forms.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`,
/// `false`, `False`. Anything else, including mixed case like `tRUE`, fails.
pub(crate) fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Error::coercion::<bool>(
            key,
            value,
            "expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False",
        )),
    }
}

/// Parse a base-10 integer, range-checked against the width of `T`.
pub(crate) fn parse_int<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse::<T>()
        .map_err(|e| Error::coercion::<T>(key, value, e))
}

/// Parse a base-10 unsigned integer, range-checked against the width of `T`.
///
/// Unlike `FromStr` for unsigned types, a leading `+` is rejected: unsigned
/// values take no sign at all.
pub(crate) fn parse_uint<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    if value.starts_with('+') {
        return Err(Error::coercion::<T>(key, value, "unsigned value cannot carry a sign"));
    }
    parse_int(key, value)
}

/// Floating point types the binder can write.
pub(crate) trait Float: FromStr {
    fn is_infinite(&self) -> bool;
}

impl Float for f32 {
    fn is_infinite(&self) -> bool {
        f32::is_infinite(*self)
    }
}

impl Float for f64 {
    fn is_infinite(&self) -> bool {
        f64::is_infinite(*self)
    }
}

/// Parse a decimal or exponential float.
///
/// Finite input that overflows the width of `T` is an error; only an explicit
/// `inf`/`infinity` literal may produce an infinite value.
pub(crate) fn parse_float<T>(key: &str, value: &str) -> Result<T>
where
    T: Float,
    T::Err: Display,
{
    let parsed = value
        .parse::<T>()
        .map_err(|e| Error::coercion::<T>(key, value, e))?;

    if parsed.is_infinite() && !is_infinity_literal(value) {
        return Err(Error::coercion::<T>(key, value, "value out of range"));
    }

    Ok(parsed)
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_truthy() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(parse_bool("FLAG", value).unwrap(), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_falsy() {
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!parse_bool("FLAG", value).unwrap(), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_other_forms() {
        for value in ["yes", "tRUE", "", "2"] {
            let result = parse_bool("FLAG", value);
            assert!(matches!(result, Err(Error::TypeCoercion { .. })), "{value}");
        }
    }

    #[test]
    fn test_parse_int_signed() {
        assert_eq!(parse_int::<i64>("N", "-8").unwrap(), -8);
        assert_eq!(parse_int::<i32>("N", "+42").unwrap(), 42);
    }

    #[test]
    fn test_parse_int_range_checked() {
        assert_eq!(parse_int::<u8>("N", "255").unwrap(), 255);
        assert!(parse_int::<u8>("N", "256").is_err());
        assert!(parse_int::<i8>("N", "-129").is_err());
    }

    #[test]
    fn test_parse_unsigned_rejects_plus_sign() {
        assert_eq!(parse_uint::<u32>("UINT_FIELD", "7").unwrap(), 7);
        match parse_uint::<u32>("UINT_FIELD", "+7") {
            Err(Error::TypeCoercion { value, type_name, .. }) => {
                assert_eq!(value, "+7");
                assert_eq!(type_name, "u32");
            }
            _ => panic!("Expected TypeCoercion error"),
        }
    }

    #[test]
    fn test_parse_unsigned_rejects_negative() {
        let result = parse_uint::<u32>("UINT_FIELD", "-1");
        match result {
            Err(Error::TypeCoercion { key, type_name, .. }) => {
                assert_eq!(key, "UINT_FIELD");
                assert_eq!(type_name, "u32");
            }
            _ => panic!("Expected TypeCoercion error"),
        }
    }

    #[test]
    fn test_parse_int_rejects_non_decimal() {
        assert!(parse_int::<i32>("N", "0x10").is_err());
        assert!(parse_int::<i32>("N", "1_000").is_err());
        assert!(parse_int::<i32>("N", "4.0").is_err());
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float::<f32>("F", "16.5").unwrap(), 16.5);
        assert_eq!(parse_float::<f64>("F", "-2.5e3").unwrap(), -2500.0);
        assert!(parse_float::<f64>("F", "NaN").unwrap().is_nan());
    }

    #[test]
    fn test_parse_float_overflow_is_error() {
        assert!(parse_float::<f32>("F", "1e40").is_err());
        assert!(parse_float::<f64>("F", "1e40").is_ok());
        assert!(parse_float::<f64>("F", "-1e400").is_err());
    }

    #[test]
    fn test_parse_float_explicit_infinity() {
        assert_eq!(parse_float::<f32>("F", "inf").unwrap(), f32::INFINITY);
        assert_eq!(
            parse_float::<f64>("F", "-Infinity").unwrap(),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn test_parse_float_rejects_garbage() {
        assert!(parse_float::<f64>("F", "abc").is_err());
        assert!(parse_float::<f64>("F", "").is_err());
    }
}
