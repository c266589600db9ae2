//! Turning command-line input into a tool's JSON argument object

use serde_json::{Map, Value};

/// Parse a `key=value` pair.
///
/// The value is read as JSON when it parses (`5`, `true`, `"5"`), otherwise
/// it is kept verbatim as a string.
pub fn parse_key_value(s: &str) -> Result<(String, Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{}'", s))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in '{}'", s));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Merge `--args` JSON and `--arg` pairs into one argument object.
///
/// Pairs override keys from the JSON object.
pub fn build_arguments(args_json: Option<&str>, pairs: &[(String, Value)]) -> Result<Value, String> {
    let mut arguments = match args_json {
        None => Map::new(),
        Some(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(format!("--args must be a JSON object, got {}", other));
            }
            Err(e) => return Err(format!("--args is not valid JSON: {}", e)),
        },
    };

    for (key, value) in pairs {
        arguments.insert(key.clone(), value.clone());
    }

    Ok(Value::Object(arguments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_key_value_json_values() {
        assert_eq!(parse_key_value("a=5").unwrap(), ("a".to_string(), json!(5)));
        assert_eq!(parse_key_value("b=-2.5").unwrap(), ("b".to_string(), json!(-2.5)));
        assert_eq!(parse_key_value("flag=true").unwrap(), ("flag".to_string(), json!(true)));
        assert_eq!(
            parse_key_value(r#"text="123""#).unwrap(),
            ("text".to_string(), json!("123"))
        );
    }

    #[test]
    fn test_parse_key_value_falls_back_to_string() {
        assert_eq!(
            parse_key_value("text=Hello, world").unwrap(),
            ("text".to_string(), json!("Hello, world"))
        );
        // Only the first '=' separates key and value
        assert_eq!(
            parse_key_value("text=a=b").unwrap(),
            ("text".to_string(), json!("a=b"))
        );
        assert_eq!(parse_key_value("text=").unwrap(), ("text".to_string(), json!("")));
    }

    #[test]
    fn test_parse_key_value_errors() {
        assert!(parse_key_value("novalue").unwrap_err().contains("no '='"));
        assert!(parse_key_value("=5").unwrap_err().contains("empty key"));
    }

    #[test]
    fn test_build_arguments_merges_pairs() {
        let pairs = vec![("b".to_string(), json!(3))];
        let args = build_arguments(Some(r#"{"operation":"add","a":5,"b":1}"#), &pairs).unwrap();

        assert_eq!(args, json!({"operation": "add", "a": 5, "b": 3}));
    }

    #[test]
    fn test_build_arguments_empty() {
        assert_eq!(build_arguments(None, &[]).unwrap(), json!({}));
    }

    #[test]
    fn test_build_arguments_rejects_non_object() {
        assert!(build_arguments(Some("[1, 2]"), &[]).unwrap_err().contains("JSON object"));
        assert!(build_arguments(Some("{oops"), &[]).unwrap_err().contains("not valid JSON"));
    }
}
