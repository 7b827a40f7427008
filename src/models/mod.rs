use serde::{Deserialize, Serialize};

pub const FULL_NAME_MAX_LEN: usize = 100;
pub const TEAM_MAX_LEN: usize = 50;
pub const POSITION_MAX_LEN: usize = 50;

/// Player as stored in the `players` table and returned by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: i64,
    pub full_name: String,
    pub current_team: Option<String>,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
}

/// Request body for create and update.
///
/// Update is a full replacement, so optional fields left out of the body
/// are written back as NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCreate {
    pub full_name: String,
    #[serde(default)]
    pub current_team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<i32>,
}

/// Structural checks that deserialization alone can't express
pub trait Validate {
    fn validate(&self) -> Vec<FieldError>;
}

impl Validate for PlayerCreate {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.full_name.trim().is_empty() {
            errors.push(FieldError::body(
                "full_name",
                "String should have at least 1 character",
                "string_too_short",
            ));
        } else if let Some(err) = check_max_len("full_name", &self.full_name, FULL_NAME_MAX_LEN) {
            errors.push(err);
        }

        if let Some(team) = &self.current_team {
            errors.extend(check_max_len("current_team", team, TEAM_MAX_LEN));
        }
        if let Some(position) = &self.position {
            errors.extend(check_max_len("position", position, POSITION_MAX_LEN));
        }

        errors
    }
}

fn check_max_len(field: &str, value: &str, max: usize) -> Option<FieldError> {
    (value.chars().count() > max).then(|| {
        FieldError::body(
            field,
            format!("String should have at most {max} characters"),
            "string_too_long",
        )
    })
}

// Query parameters for listing players
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ListPlayersQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

impl Default for ListPlayersQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl Validate for ListPlayersQuery {
    fn validate(&self) -> Vec<FieldError> {
        Vec::new()
    }
}

/// One entry of a 422 response's `detail` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    pub fn body(field: &str, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::new(&["body", field], msg, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(full_name: &str) -> PlayerCreate {
        PlayerCreate {
            full_name: full_name.to_string(),
            current_team: Some("Santos".to_string()),
            position: Some("Forward".to_string()),
            jersey_number: Some(10),
        }
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let req: PlayerCreate = serde_json::from_str(r#"{"full_name": "Zico"}"#).unwrap();
        assert_eq!(req.full_name, "Zico");
        assert!(req.current_team.is_none());
        assert!(req.position.is_none());
        assert!(req.jersey_number.is_none());
    }

    #[test]
    fn test_null_optional_fields_accepted() {
        let req: PlayerCreate =
            serde_json::from_str(r#"{"full_name": "Zico", "current_team": null}"#).unwrap();
        assert!(req.current_team.is_none());
    }

    #[test]
    fn test_missing_full_name_fails_to_deserialize() {
        let res: Result<PlayerCreate, _> = serde_json::from_str(r#"{"position": "Goalkeeper"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_wrong_type_fails_to_deserialize() {
        let res: Result<PlayerCreate, _> =
            serde_json::from_str(r#"{"full_name": "Zico", "jersey_number": "ten"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_valid_payload() {
        assert!(payload("Pelé").validate().is_empty());
    }

    #[test]
    fn test_blank_full_name_rejected() {
        let errors = payload("   ").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].loc, vec!["body", "full_name"]);
        assert_eq!(errors[0].kind, "string_too_short");
    }

    #[test]
    fn test_length_limits_count_characters() {
        // 100 two-byte characters is still within the limit
        assert!(payload(&"é".repeat(FULL_NAME_MAX_LEN)).validate().is_empty());

        let mut req = payload(&"a".repeat(FULL_NAME_MAX_LEN + 1));
        req.current_team = Some("t".repeat(TEAM_MAX_LEN + 1));
        req.position = Some("p".repeat(POSITION_MAX_LEN + 1));

        let fields: Vec<_> = req.validate().into_iter().map(|e| e.loc[1].clone()).collect();
        assert_eq!(fields, vec!["full_name", "current_team", "position"]);
    }

    #[test]
    fn test_list_query_defaults() {
        let query: ListPlayersQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, ListPlayersQuery::default());
        assert_eq!(query.limit, 100);
    }

    #[test]
    fn test_field_error_serializes_type_key() {
        let err = FieldError::body("full_name", "Field required", "missing");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "missing");
        assert_eq!(json["loc"][1], "full_name");
    }
}
