use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted software-engineer profile, the sole entity in the system.
///
/// `learning_path_recommendation` is always present on a persisted row: the
/// enrichment workflow is its only writer, and a record never reaches the
/// store without one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EngineerRow {
    pub id: i32,
    pub name: String,
    pub tech_stack: String,
    pub learning_path_recommendation: String,
}

/// Write shape accepted by the store's upsert.
///
/// With `id: None` the store assigns a fresh id; with `id: Some` it
/// overwrites at that key. The recommendation is non-optional, so an
/// unenriched record cannot be persisted by construction.
#[derive(Debug, Clone)]
pub struct EngineerRecord {
    pub id: Option<i32>,
    pub name: String,
    pub tech_stack: String,
    pub learning_path_recommendation: String,
}

/// The caller-supplied fields of a profile: everything a client may set on
/// create or update. Free-form, no format validation. There is no id or
/// recommendation field here; serde skips unknown JSON fields, so a caller
/// sending either has it silently ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerInput {
    pub name: String,
    pub tech_stack: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_serializes_with_camel_case_wire_names() {
        let row = EngineerRow {
            id: 1,
            name: "Ana".to_string(),
            tech_stack: "Java, Spring".to_string(),
            learning_path_recommendation: "Study X".to_string(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["techStack"], "Java, Spring");
        assert_eq!(json["learningPathRecommendation"], "Study X");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_input_deserializes_from_camel_case() {
        let input: EngineerInput = serde_json::from_str(
            r#"{"name": "Ana", "techStack": "Java, Spring"}"#,
        )
        .unwrap();
        assert_eq!(input.name, "Ana");
        assert_eq!(input.tech_stack, "Java, Spring");
    }

    #[test]
    fn test_input_ignores_caller_supplied_id_and_recommendation() {
        // A caller sending id or learningPathRecommendation on create/update
        // has them dropped; the input type cannot express either field.
        let input: EngineerInput = serde_json::from_str(
            r#"{
                "id": 42,
                "name": "Ana",
                "techStack": "Java, Spring",
                "learningPathRecommendation": "ignore me"
            }"#,
        )
        .unwrap();
        assert_eq!(input.name, "Ana");
        assert_eq!(input.tech_stack, "Java, Spring");
    }

    #[test]
    fn test_input_missing_required_field_is_rejected() {
        let result = serde_json::from_str::<EngineerInput>(r#"{"name": "Ana"}"#);
        assert!(result.is_err(), "techStack is a required field");
    }
}
