//! Parameter list → JSON Schema conversion

use serde_json::{Map, Value, json};

use crate::source::entities::ParamSpec;

/// Convert a parameter list into a JSON Schema object.
///
/// Optional keys (`description`, `default`, `enum`) are emitted only when
/// present; the `required` array is emitted only when non-empty. cwd- and
/// stdin-routed parameters appear like any other — how a value reaches the
/// subprocess is not the agent's concern.
pub fn parameter_schema(params: &[ParamSpec]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in params {
        let mut prop = Map::new();
        prop.insert("type".to_string(), json!(param.kind.as_str()));
        if !param.description.is_empty() {
            prop.insert("description".to_string(), json!(param.description));
        }
        if let Some(default) = &param.default {
            prop.insert("default".to_string(), default.clone());
        }
        if let Some(allowed) = &param.allowed {
            prop.insert("enum".to_string(), json!(allowed));
        }
        properties.insert(param.name.clone(), Value::Object(prop));

        if param.required {
            required.push(json!(param.name));
        }
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }

    Value::Object(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::entities::ParamKind;

    #[test]
    fn test_empty_params() {
        let schema = parameter_schema(&[]);
        assert_eq!(schema, json!({"type": "object", "properties": {}}));
    }

    #[test]
    fn test_string_param_with_description() {
        let params = [ParamSpec::new("path").with_description("A path")];
        let schema = parameter_schema(&params);
        assert_eq!(
            schema["properties"]["path"],
            json!({"type": "string", "description": "A path"})
        );
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn test_all_four_kinds() {
        let params = [
            ParamSpec::new("s").with_kind(ParamKind::String),
            ParamSpec::new("i").with_kind(ParamKind::Integer),
            ParamSpec::new("n").with_kind(ParamKind::Number),
            ParamSpec::new("b").with_kind(ParamKind::Boolean),
        ];
        let schema = parameter_schema(&params);
        assert_eq!(schema["properties"]["s"]["type"], "string");
        assert_eq!(schema["properties"]["i"]["type"], "integer");
        assert_eq!(schema["properties"]["n"]["type"], "number");
        assert_eq!(schema["properties"]["b"]["type"], "boolean");
    }

    #[test]
    fn test_required_list_preserves_order() {
        let params = [
            ParamSpec::new("a").required(),
            ParamSpec::new("b"),
            ParamSpec::new("c").required(),
        ];
        let schema = parameter_schema(&params);
        assert_eq!(schema["required"], json!(["a", "c"]));
    }

    #[test]
    fn test_default_value() {
        let params = [ParamSpec::new("count").with_kind(ParamKind::Integer).with_default(10)];
        let schema = parameter_schema(&params);
        assert_eq!(schema["properties"]["count"]["default"], 10);
    }

    #[test]
    fn test_enum_values() {
        let params = [ParamSpec::new("fmt").with_allowed(["json", "csv"])];
        let schema = parameter_schema(&params);
        assert_eq!(schema["properties"]["fmt"]["enum"], json!(["json", "csv"]));
    }

    #[test]
    fn test_description_omitted_when_empty() {
        let params = [ParamSpec::new("x")];
        let schema = parameter_schema(&params);
        assert!(schema["properties"]["x"].get("description").is_none());
    }

    #[test]
    fn test_cwd_param_still_appears() {
        let params = [
            ParamSpec::new("directory").with_description("Working directory").as_cwd(),
            ParamSpec::new("name").required(),
        ];
        let schema = parameter_schema(&params);
        assert_eq!(schema["properties"]["directory"]["type"], "string");
        assert_eq!(schema["required"], json!(["name"]));
    }

    #[test]
    fn test_combined_properties() {
        let params = [ParamSpec::new("format")
            .with_description("Output format")
            .required()
            .with_default("json")
            .with_allowed(["json", "table"])];
        let schema = parameter_schema(&params);
        let prop = &schema["properties"]["format"];
        assert_eq!(prop["type"], "string");
        assert_eq!(prop["description"], "Output format");
        assert_eq!(prop["default"], "json");
        assert_eq!(prop["enum"], json!(["json", "table"]));
        assert_eq!(schema["required"], json!(["format"]));
    }
}
