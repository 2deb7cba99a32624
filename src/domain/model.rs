use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 一筆大學資料。保持原始 JSON 結構，不做 schema 驗證。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Builds a record from an arbitrary JSON value. Non-objects yield `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(data) => Some(Self { data }),
            _ => None,
        }
    }

    /// Walks nested objects along `path`. `null` counts as absent.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let root = self.data.get(*first)?;
        lookup(root, rest)
    }

    pub fn str_at(&self, path: &[&str]) -> Option<&str> {
        self.get_path(path).and_then(Value::as_str)
    }

    /// Numbers and numeric strings are accepted; everything else is absent.
    pub fn f64_at(&self, path: &[&str]) -> Option<f64> {
        self.get_path(path).and_then(coerce_f64)
    }

    pub fn bool_at(&self, path: &[&str]) -> bool {
        self.get_path(path).map(is_truthy).unwrap_or(false)
    }

    /// String elements of a list field. A bare string is a one-element list.
    pub fn list_at(&self, path: &[&str]) -> Vec<&str> {
        match self.get_path(path) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(s)) => vec![s.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.str_at(&["name"])
    }

    /// `id` 轉成字串後比對 (數字 id 也能查到)
    pub fn id_string(&self) -> Option<String> {
        match self.data.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    match path.split_first() {
        None if value.is_null() => None,
        None => Some(value),
        Some((key, rest)) => match value {
            Value::Object(map) => lookup(map.get(*key)?, rest),
            _ => None,
        },
    }
}

pub fn coerce_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_get_path_nested() {
        let r = record(json!({
            "name": "Alpha University",
            "location": {"country": "Canada", "city": "Toronto"},
            "finance": {"tuition_year_usd": 30000}
        }));

        assert_eq!(r.str_at(&["location", "country"]), Some("Canada"));
        assert_eq!(r.f64_at(&["finance", "tuition_year_usd"]), Some(30000.0));
        assert_eq!(r.get_path(&["location", "state"]), None);
        assert_eq!(r.get_path(&[]), None);
    }

    #[test]
    fn test_malformed_nested_fields_degrade_to_absent() {
        let r = record(json!({
            "location": "Canada",
            "finance": {"tuition_year_usd": null, "total_cost_year_usd": "n/a"},
            "academics": {"majors": 42}
        }));

        assert_eq!(r.str_at(&["location", "country"]), None);
        assert_eq!(r.f64_at(&["finance", "tuition_year_usd"]), None);
        assert_eq!(r.f64_at(&["finance", "total_cost_year_usd"]), None);
        assert!(r.list_at(&["academics", "majors"]).is_empty());
        assert!(!r.bool_at(&["finance", "financial_aid_available"]));
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let r = record(json!({"exams_avg": {"GPA": "3.7", "IELTS": " 6.5 "}}));
        assert_eq!(r.f64_at(&["exams_avg", "GPA"]), Some(3.7));
        assert_eq!(r.f64_at(&["exams_avg", "IELTS"]), Some(6.5));
    }

    #[test]
    fn test_list_at_accepts_bare_string() {
        let r = record(json!({"academics": {"formats": "Online", "majors": ["Law", 3, "Art"]}}));
        assert_eq!(r.list_at(&["academics", "formats"]), vec!["Online"]);
        assert_eq!(r.list_at(&["academics", "majors"]), vec!["Law", "Art"]);
    }

    #[test]
    fn test_truthy_flags() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("Yes")));
        assert!(is_truthy(&json!(1)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("no")));
        assert!(!is_truthy(&json!(null)));
    }

    #[test]
    fn test_id_string_coerces_numbers() {
        assert_eq!(record(json!({"id": 17})).id_string(), Some("17".to_string()));
        assert_eq!(record(json!({"id": "mit"})).id_string(), Some("mit".to_string()));
        assert_eq!(record(json!({"name": "No id"})).id_string(), None);
    }

    #[test]
    fn test_serializes_transparently() {
        let r = record(json!({"id": "a", "name": "Alpha"}));
        let out = serde_json::to_value(&r).unwrap();
        assert_eq!(out, json!({"id": "a", "name": "Alpha"}));
    }
}
