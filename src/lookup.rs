//! Tolerant field lookup over loosely-typed export records.
use serde_json::Value;

/// Return the value of the first key in `keys` that is present and not null.
///
/// Falls back to `Value::Null` when no candidate matches or `record` is not
/// an object.
pub fn first_present(record: &Value, keys: &[&str]) -> Value {
    let Some(object) = record.as_object() else {
        return Value::Null;
    };
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
        .cloned()
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_listed_key_wins_when_both_present() {
        let record = json!({"svg_path": "a.svg", "svgPath": "b.svg"});
        assert_eq!(first_present(&record, &["svg_path", "svgPath"]), json!("a.svg"));
    }

    #[test]
    fn null_first_key_falls_through() {
        let record = json!({"svg_path": null, "svgPath": "b.svg"});
        assert_eq!(first_present(&record, &["svg_path", "svgPath"]), json!("b.svg"));
    }

    #[test]
    fn falsy_but_present_value_is_kept() {
        let record = json!({"name": "", "id": "layer-7"});
        assert_eq!(first_present(&record, &["name", "id"]), json!(""));
    }

    #[test]
    fn empty_containers_and_zero_are_kept() {
        for value in [json!(0), json!(false), json!([]), json!({})] {
            let record = json!({ "bbox": value.clone(), "bounds": [0, 0, 1, 1] });
            assert_eq!(first_present(&record, &["bbox", "bounds"]), value);
        }
    }

    #[test]
    fn missing_keys_yield_null() {
        let record = json!({"title": "Parcels"});
        assert_eq!(first_present(&record, &["name", "id"]), Value::Null);
    }

    #[test]
    fn non_object_record_yields_null() {
        assert_eq!(first_present(&json!(["name"]), &["name"]), Value::Null);
        assert_eq!(first_present(&json!("name"), &["name"]), Value::Null);
    }
}
