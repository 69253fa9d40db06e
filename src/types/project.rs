use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A project record exactly as the backend shapes it.
///
/// The store never inspects or enforces fields; `id` and `name` are read only
/// for display.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Project(Value);

impl Project {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Build a client-side draft from a set of fields.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(Value::Object(fields))
    }

    pub fn id(&self) -> Option<String> {
        self.0.get("id").and_then(scalar_to_string)
    }

    pub fn name(&self) -> Option<String> {
        self.0.get("name").and_then(scalar_to_string)
    }

    /// Fields other than `id` and `name`, in compact JSON form.
    pub fn extra_fields(&self) -> String {
        match &self.0 {
            Value::Object(map) => {
                let rest: Map<String, Value> = map
                    .iter()
                    .filter(|(key, _)| key.as_str() != "id" && key.as_str() != "name")
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();
                if rest.is_empty() {
                    String::new()
                } else {
                    Value::Object(rest).to_string()
                }
            }
            other => other.to_string(),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_string_ids() {
        let numeric = Project::new(json!({"id": 1, "name": "A"}));
        assert_eq!(numeric.id().as_deref(), Some("1"));
        assert_eq!(numeric.name().as_deref(), Some("A"));

        let uuid = Project::new(json!({"id": "b7e1", "name": "B"}));
        assert_eq!(uuid.id().as_deref(), Some("b7e1"));
    }

    #[test]
    fn test_shape_is_not_enforced() {
        let projects: Vec<Project> =
            serde_json::from_str(r#"[{"title": "no id"}, 42, {"id": null}]"#).unwrap();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].id(), None);
        assert_eq!(projects[0].name(), None);
        assert_eq!(projects[1].extra_fields(), "42");
        assert_eq!(projects[2].id(), None);
    }

    #[test]
    fn test_serializes_transparently() {
        let project = Project::new(json!({"id": 2, "name": "B", "tags": ["x"]}));
        let text = serde_json::to_string(&project).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, json!({"id": 2, "name": "B", "tags": ["x"]}));
    }

    #[test]
    fn test_extra_fields() {
        let project = Project::new(json!({"id": 2, "name": "B", "owner": "me"}));
        assert_eq!(project.extra_fields(), r#"{"owner":"me"}"#);

        let bare = Project::new(json!({"id": 3, "name": "C"}));
        assert_eq!(bare.extra_fields(), "");
    }
}
