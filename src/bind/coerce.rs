//! Coercion of raw values into typed field slots.
//!
//! Two entry points share the same targets: [`assign_str`] for default
//! literals taken from annotations, and [`assign_value`] for loosely-typed
//! values taken from the raw mapping.

use std::str::ParseBoolError;

use toml::Value;

use super::record::{IntTarget, Slot};
use super::BindError;

/// Writes a default literal into `slot`.
///
/// Records and unsupported types cannot receive defaults.
pub fn assign_str(slot: Slot<'_>, value: &str) -> Result<(), BindError> {
    match slot {
        Slot::Text(target) => *target = value.to_string(),
        Slot::Int(target) => set_int(target, value.parse()?)?,
        Slot::Bool(target) => *target = parse_bool(value)?,
        Slot::Float(target) => target.set_f64(value.parse()?),
        slot @ (Slot::Record(_) | Slot::Unsupported(_)) => {
            return Err(BindError::UnsupportedFieldType {
                type_name: slot.type_name(),
                for_default: true,
            });
        }
    }
    Ok(())
}

/// Writes a raw mapping value into `slot`.
pub fn assign_value(slot: Slot<'_>, value: &Value) -> Result<(), BindError> {
    match slot {
        Slot::Text(target) => {
            *target = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
        }
        Slot::Int(target) => {
            let parsed = match value {
                Value::Integer(i) => *i,
                Value::String(s) => s.parse()?,
                other => return Err(not_convertible("int", other)),
            };
            set_int(target, parsed)?;
        }
        Slot::Bool(target) => {
            *target = match value {
                Value::Boolean(b) => *b,
                Value::String(s) => parse_bool(s)?,
                other => return Err(not_convertible("bool", other)),
            };
        }
        Slot::Float(target) => {
            let parsed = match value {
                Value::Float(f) => *f,
                Value::Integer(i) => *i as f64,
                Value::String(s) => s.parse()?,
                other => return Err(not_convertible("float", other)),
            };
            target.set_f64(parsed);
        }
        slot @ (Slot::Record(_) | Slot::Unsupported(_)) => {
            return Err(BindError::UnsupportedFieldType {
                type_name: slot.type_name(),
                for_default: false,
            });
        }
    }
    Ok(())
}

fn set_int(target: &mut dyn IntTarget, value: i64) -> Result<(), BindError> {
    target
        .set_i64(value)
        .map_err(|_| BindError::IntegerOutOfRange {
            value,
            target: target.type_name(),
        })
}

fn not_convertible(target: &'static str, value: &Value) -> BindError {
    BindError::TypeNotConvertible {
        target,
        value: value.to_string(),
    }
}

/// Parses a boolean literal, accepting `1`/`0`, `t`/`f` and the usual
/// capitalizations of `true`/`false`.
fn parse_bool(s: &str) -> Result<bool, ParseBoolError> {
    match s {
        "1" | "t" | "T" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "False" => Ok(false),
        other => other.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bindable;

    #[test]
    fn test_same_kind_values_pass_through() {
        let mut n = 0i64;
        assign_value(n.slot(), &Value::Integer(5)).unwrap();
        assert_eq!(n, 5);

        let mut b = false;
        assign_value(b.slot(), &Value::Boolean(true)).unwrap();
        assert!(b);

        let mut f = 0.0f64;
        assign_value(f.slot(), &Value::Float(2.5)).unwrap();
        assert_eq!(f, 2.5);

        let mut s = String::new();
        assign_value(s.slot(), &Value::String("alice".into())).unwrap();
        assert_eq!(s, "alice");
    }

    #[test]
    fn test_string_literals_are_parsed() {
        let mut n = 0i32;
        assign_value(n.slot(), &Value::String("5".into())).unwrap();
        assert_eq!(n, 5);

        let mut b = false;
        assign_value(b.slot(), &Value::String("true".into())).unwrap();
        assert!(b);

        let mut f = 0.0f32;
        assign_value(f.slot(), &Value::String("0.5".into())).unwrap();
        assert_eq!(f, 0.5);
    }

    #[test]
    fn test_text_stringifies_other_values() {
        let mut s = String::new();
        assign_value(s.slot(), &Value::Integer(42)).unwrap();
        assert_eq!(s, "42");

        assign_value(s.slot(), &Value::Boolean(false)).unwrap();
        assert_eq!(s, "false");
    }

    #[test]
    fn test_float_widens_integers() {
        let mut f = 0.0f64;
        assign_value(f.slot(), &Value::Integer(3)).unwrap();
        assert_eq!(f, 3.0);
    }

    #[test]
    fn test_not_convertible_names_target() {
        let mut n = 0i64;
        let err = assign_value(n.slot(), &Value::Array(vec![])).unwrap_err();
        assert!(matches!(err, BindError::TypeNotConvertible { target: "int", .. }));
        assert!(err.to_string().starts_with("cannot convert to int"));

        let mut b = false;
        let err = assign_value(b.slot(), &Value::Integer(1)).unwrap_err();
        assert!(matches!(err, BindError::TypeNotConvertible { target: "bool", .. }));

        let mut f = 0.0f64;
        let err = assign_value(f.slot(), &Value::Boolean(true)).unwrap_err();
        assert!(matches!(err, BindError::TypeNotConvertible { target: "float", .. }));
    }

    #[test]
    fn test_parse_errors_surface() {
        let mut n = 0i64;
        let err = assign_value(n.slot(), &Value::String("five".into())).unwrap_err();
        assert!(matches!(err, BindError::ParseInt(_)));

        let mut f = 0.0f64;
        let err = assign_str(f.slot(), "x1.5").unwrap_err();
        assert!(matches!(err, BindError::ParseFloat(_)));

        let mut b = false;
        let err = assign_str(b.slot(), "yes").unwrap_err();
        assert!(matches!(err, BindError::ParseBool(_)));
    }

    #[test]
    fn test_bool_aliases() {
        let cases = [
            ("1", true),
            ("T", true),
            ("True", true),
            ("0", false),
            ("f", false),
            ("FALSE", false),
        ];
        for (literal, expected) in cases {
            let mut b = !expected;
            assign_str(b.slot(), literal).unwrap();
            assert_eq!(b, expected, "literal {literal}");
        }
    }

    #[test]
    fn test_integer_out_of_range() {
        let mut port = 0u16;
        let err = assign_value(port.slot(), &Value::Integer(70_000)).unwrap_err();
        assert!(matches!(
            err,
            BindError::IntegerOutOfRange {
                value: 70_000,
                target: "u16"
            }
        ));
        assert_eq!(port, 0);
    }

    #[test]
    fn test_u64_above_i64_max_rejected() {
        let mut big = 0u64;
        let err = assign_value(big.slot(), &Value::String("9223372036854775808".into()))
            .unwrap_err();
        assert!(matches!(err, BindError::ParseInt(_)));
        assert_eq!(big, 0);
    }

    #[test]
    fn test_unsupported_types() {
        let mut list: Vec<String> = Vec::new();
        let err = assign_value(list.slot(), &Value::String("a".into())).unwrap_err();
        assert!(matches!(
            err,
            BindError::UnsupportedFieldType {
                for_default: false,
                ..
            }
        ));

        let err = assign_str(list.slot(), "a").unwrap_err();
        assert!(matches!(
            err,
            BindError::UnsupportedFieldType {
                for_default: true,
                ..
            }
        ));
        assert!(err.to_string().contains("for default value"));
    }
}
