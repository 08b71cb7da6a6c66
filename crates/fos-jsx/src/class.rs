//! Class name flattening
//!
//! Strings, nested lists and `{ name: flag }` maps reduce to one
//! space-separated class string.

use crate::Value;

/// Flatten a class value into a class string
pub fn class_name(value: &Value) -> String {
    let mut names = Vec::new();
    collect(value, &mut names);
    names.join(" ")
}

fn collect(value: &Value, names: &mut Vec<String>) {
    match value {
        Value::List(items) => {
            for item in items {
                collect(item, names);
            }
        }
        Value::Map(map) => {
            names.extend(map.iter().filter(|(_, flag)| flag.truthy()).map(|(name, _)| name.to_string()));
        }
        Value::Node(_) | Value::Listener(_) | Value::Ref(_) => {}
        // 0 is falsy but still names a class
        Value::Number(n) if *n == 0.0 => names.push("0".to_string()),
        other if other.truthy() => names.push(other.to_string()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Props;

    #[test]
    fn test_plain_string() {
        assert_eq!(class_name(&"me irl".into()), "me irl");
    }

    #[test]
    fn test_nested_lists() {
        let value = Value::List(vec![
            "first".into(),
            Value::List(vec!["second".into(), false.into(), "third".into()]),
        ]);
        assert_eq!(class_name(&value), "first second third");
    }

    #[test]
    fn test_map_flags() {
        let mut flags = Props::new();
        flags.insert("included", true);
        flags.insert("excluded", false);
        flags.insert("counted", 1);
        assert_eq!(class_name(&Value::Map(flags)), "included counted");
    }

    #[test]
    fn test_falsy_dropped_but_zero_kept() {
        let value = Value::List(vec![false.into(), 0.into(), "rest".into()]);
        assert_eq!(class_name(&value), "0 rest");

        let value = Value::List(vec![
            Value::Null,
            Value::Undefined,
            f64::NAN.into(),
            "".into(),
            (-0.0).into(),
        ]);
        assert_eq!(class_name(&value), "0");
    }

    #[test]
    fn test_non_class_values_skipped() {
        let value = Value::List(vec!["a".into(), Value::listener(|_, _| {}), 2.into()]);
        assert_eq!(class_name(&value), "a 2");
    }
}
