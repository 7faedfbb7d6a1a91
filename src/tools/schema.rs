//! Declarative input schemas for tools.
//!
//! Each tool declares its fields once; the registry derives both the JSON
//! Schema advertised to the host and the validation applied before dispatch.

use serde_json::{json, Map, Value};

#[derive(Debug, Clone)]
pub enum FieldKind {
    String,
    /// Integer constrained to an inclusive range.
    Integer {
        min: i64,
        max: i64,
    },
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub description: &'static str,
}

impl Field {
    pub fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputSchema {
    fields: Vec<Field>,
}

impl InputSchema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Renders the schema as a JSON Schema object.
    pub fn to_json(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for field in &self.fields {
            let mut prop = Map::new();
            match field.kind {
                FieldKind::String => {
                    prop.insert("type".into(), json!("string"));
                }
                FieldKind::Integer { min, max } => {
                    prop.insert("type".into(), json!("integer"));
                    prop.insert("minimum".into(), json!(min));
                    prop.insert("maximum".into(), json!(max));
                }
            }
            prop.insert("description".into(), json!(field.description));
            properties.insert(field.name.to_string(), Value::Object(prop));
            if field.required {
                required.push(json!(field.name));
            }
        }
        json!({
            "type": "object",
            "properties": Value::Object(properties),
            "required": Value::Array(required),
        })
    }

    /// Checks `args` against the declared fields, returning the first problem.
    pub fn validate(&self, args: &Value) -> Result<(), String> {
        let empty = Map::new();
        let map = match args {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => return Err("arguments must be a JSON object".into()),
        };
        for field in &self.fields {
            match map.get(field.name) {
                Some(Value::Null) | None => {
                    if field.required {
                        return Err(format!("missing required field \"{}\"", field.name));
                    }
                }
                Some(value) => check_field(field, value)?,
            }
        }
        Ok(())
    }
}

fn check_field(field: &Field, value: &Value) -> Result<(), String> {
    match field.kind {
        FieldKind::String => {
            if !value.is_string() {
                return Err(format!("field \"{}\" must be a string", field.name));
            }
        }
        FieldKind::Integer { min, max } => {
            let number = value
                .as_i64()
                .ok_or_else(|| format!("field \"{}\" must be an integer", field.name))?;
            if number < min || number > max {
                return Err(format!(
                    "field \"{}\" must be between {min} and {max}",
                    field.name
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InputSchema {
        InputSchema::new(vec![
            Field::required("teamKey", FieldKind::String, "Team key, e.g. ENG"),
            Field::optional(
                "limit",
                FieldKind::Integer { min: 1, max: 100 },
                "Maximum number of tickets",
            ),
        ])
    }

    #[test]
    fn renders_json_schema_with_bounds() {
        let schema = sample().to_json();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["teamKey"]["type"], "string");
        assert_eq!(schema["properties"]["limit"]["minimum"], 1);
        assert_eq!(schema["properties"]["limit"]["maximum"], 100);
        assert_eq!(schema["required"], json!(["teamKey"]));
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = sample().validate(&json!({ "limit": 10 })).unwrap_err();
        assert!(err.contains("teamKey"));
    }

    #[test]
    fn null_counts_as_missing() {
        let err = sample()
            .validate(&json!({ "teamKey": null }))
            .unwrap_err();
        assert!(err.contains("teamKey"));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = sample()
            .validate(&json!({ "teamKey": 7 }))
            .unwrap_err();
        assert!(err.contains("must be a string"));
    }

    #[test]
    fn out_of_bounds_integer_is_rejected() {
        let err = sample()
            .validate(&json!({ "teamKey": "ENG", "limit": 150 }))
            .unwrap_err();
        assert!(err.contains("between 1 and 100"));
    }

    #[test]
    fn null_arguments_pass_when_nothing_is_required() {
        let schema = InputSchema::new(vec![]);
        assert!(schema.validate(&Value::Null).is_ok());
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        let err = sample().validate(&json!([1, 2])).unwrap_err();
        assert!(err.contains("JSON object"));
    }

    #[test]
    fn optional_field_may_be_absent() {
        assert!(sample().validate(&json!({ "teamKey": "ENG" })).is_ok());
    }
}
