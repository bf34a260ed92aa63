use serde_json::Value;

/// Recursively merges `fragment` onto `base`.
///
/// Object values combine key-by-key; every other value kind (scalars and
/// arrays) is replaced wholesale by the fragment's value when present.
/// Keys only the fragment carries are admitted, so a fragment may extend
/// the base rather than just override it.
///
/// The merge is pure: neither input is mutated, and identical inputs
/// always produce identical output.
pub fn deep_merge(base: &Value, fragment: &Value) -> Value {
    match (base, fragment) {
        (Value::Object(base), Value::Object(fragment)) => {
            let mut merged = base.clone();

            for (key, value) in fragment {
                let value = match merged.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), value);
            }

            Value::Object(merged)
        }

        _ => fragment.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_override_keeps_siblings() {
        let base = json!({
            "shape": { "borderRadius": 4 },
            "palette": { "primary": { "main": "#000" } },
        });
        let fragment = json!({ "palette": { "primary": { "main": "#AD46FF" } } });

        let merged = deep_merge(&base, &fragment);

        assert_eq!(
            merged,
            json!({
                "shape": { "borderRadius": 4 },
                "palette": { "primary": { "main": "#AD46FF" } },
            }),
            "unspecified fields inherit, specified fields override"
        );
    }

    #[test]
    fn test_objects_combine_rather_than_replace() {
        let base = json!({ "palette": { "primary": { "main": "#000" }, "dark": { "main": "#111" } } });
        let fragment = json!({ "palette": { "primary": { "main": "#222" } } });

        let merged = deep_merge(&base, &fragment);

        assert_eq!(
            merged["palette"]["dark"]["main"], "#111",
            "sibling nested objects must survive the merge"
        );
    }

    #[test]
    fn test_arrays_replace_wholesale() {
        let base = json!({ "typography": { "fontFamily": ["Inter", "Roboto"] } });
        let fragment = json!({ "typography": { "fontFamily": ["Comic Sans"] } });

        let merged = deep_merge(&base, &fragment);

        assert_eq!(
            merged["typography"]["fontFamily"],
            json!(["Comic Sans"]),
            "array values are not element-merged"
        );
    }

    #[test]
    fn test_fragment_extends_base() {
        let base = json!({ "custom": { "iconColor": "#abc" } });
        let fragment = json!({ "custom": { "tabBackgroundColor": "#def" } });

        let merged = deep_merge(&base, &fragment);

        assert_eq!(merged["custom"]["iconColor"], "#abc");
        assert_eq!(
            merged["custom"]["tabBackgroundColor"], "#def",
            "keys absent from the base are still admitted"
        );
    }

    #[test]
    fn test_idempotent_against_empty_fragment() {
        let base = json!({ "a": { "b": 1, "c": [1, 2] }, "d": "x" });
        let fragment = json!({ "a": { "b": 2 } });

        let once = deep_merge(&base, &fragment);
        let again = deep_merge(&once, &json!({}));

        assert_eq!(once, again, "merging the empty fragment must be a no-op");
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let base = json!({ "a": 1 });
        let fragment = json!({ "a": 2 });

        let _ = deep_merge(&base, &fragment);

        assert_eq!(base, json!({ "a": 1 }));
        assert_eq!(fragment, json!({ "a": 2 }));
    }

    #[test]
    fn test_deterministic() {
        let base = json!({ "z": 1, "a": { "m": 1 } });
        let fragment = json!({ "a": { "n": 2 }, "b": 3 });

        let first = serde_json::to_string(&deep_merge(&base, &fragment)).unwrap();
        let second = serde_json::to_string(&deep_merge(&base, &fragment)).unwrap();

        assert_eq!(first, second, "identical inputs yield identical output");
    }
}
