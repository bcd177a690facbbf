use serde_json::Value;

/// Look up a value inside a nested mapping by bracketed-path name, e.g.
/// `"user[address][city]"` walks `["user", "address", "city"]`.
///
/// Deliberately forgiving, for use as a safe form-field extractor: an absent
/// segment is skipped and the walk continues; a mapping descends; the first
/// non-mapping value ends the walk and is the result. A walk that never hits
/// a non-mapping value is a soft miss (`None`), not an error.
pub fn get_global<'a>(name: &str, source: &'a Value) -> Option<&'a Value> {
    let Some(map) = source.as_object() else {
        return None;
    };
    if !name.contains('[') {
        return map.get(name);
    }

    let mut current = map;
    let mut result = None;
    for segment in name.replace(']', "").split('[') {
        let Some(value) = current.get(segment) else {
            continue;
        };
        match value.as_object() {
            Some(inner) => current = inner,
            None => {
                result = Some(value);
                break;
            }
        }
    }
    result
}

/// Null-coalesce with a zero carve-out: returns `b` when `a` is empty, but
/// numeric zero and the string `"0"` count as present and pass through.
pub fn nvl(a: Value, b: Value) -> Value {
    if is_zero(&a) {
        return a;
    }
    if is_empty(&a) { b } else { a }
}

/// Emptiness as callers of `nvl`/`set_action` understand it: absent, blank,
/// empty collection, null, or `false`.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

pub fn is_zero(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s == "0",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{get_global, nvl};
    use serde_json::{Value, json};

    #[test]
    fn nvl_keeps_zero_and_zero_string() {
        assert_eq!(nvl(json!(0), json!("fallback")), json!(0));
        assert_eq!(nvl(json!("0"), json!("fallback")), json!("0"));
    }

    #[test]
    fn nvl_falls_back_on_empty_values() {
        assert_eq!(nvl(json!(""), json!("fallback")), json!("fallback"));
        assert_eq!(nvl(Value::Null, json!("fallback")), json!("fallback"));
        assert_eq!(nvl(json!(false), json!("fallback")), json!("fallback"));
        assert_eq!(nvl(json!([]), json!("fallback")), json!("fallback"));
    }

    #[test]
    fn nvl_passes_non_empty_values_through() {
        assert_eq!(nvl(json!("x"), json!("fallback")), json!("x"));
        assert_eq!(nvl(json!(7), json!("fallback")), json!(7));
    }

    #[test]
    fn get_global_walks_bracketed_paths() {
        let source = json!({"user": {"address": {"city": "Rome"}}});
        assert_eq!(
            get_global("user[address][city]", &source),
            Some(&json!("Rome"))
        );
    }

    #[test]
    fn get_global_misses_softly() {
        let source = json!({"user": {}});
        assert_eq!(get_global("user[missing]", &source), None);
    }

    #[test]
    fn get_global_skips_absent_segments() {
        // "middle" is absent: the walk continues against the same mapping.
        let source = json!({"user": {"city": "Rome"}});
        assert_eq!(get_global("user[middle][city]", &source), Some(&json!("Rome")));
    }

    #[test]
    fn get_global_plain_name_is_a_direct_lookup() {
        let source = json!({"city": "Rome"});
        assert_eq!(get_global("city", &source), Some(&json!("Rome")));
        assert_eq!(get_global("country", &source), None);
    }

    #[test]
    fn get_global_stops_at_the_first_scalar() {
        let source = json!({"user": {"address": "inline"}});
        assert_eq!(
            get_global("user[address][city]", &source),
            Some(&json!("inline"))
        );
    }
}
