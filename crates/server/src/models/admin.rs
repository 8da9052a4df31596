//! Admin request/response bodies and their mapping to domain types.

use serde::{Deserialize, Serialize};

use adminhub_core::{AdminId, AdminInput, AdminRecord};

/// Body of `POST /api/admins` and `PUT /api/admins/{id}`.
///
/// Any `id` in the body is ignored; the store assigns IDs and updates take
/// theirs from the path.
pub type AdminRequest = AdminInput;

/// An admin as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminResponse {
    pub id: Option<AdminId>,
    pub name: String,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl From<AdminRecord> for AdminResponse {
    fn from(record: AdminRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email.map(adminhub_core::Email::into_inner),
            age: record.age,
        }
    }
}

/// Query string of the statistics endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsQuery {
    /// Minimum age (inclusive) for an admin to count as senior.
    pub senior_age_threshold: Option<i32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use adminhub_core::Email;

    use super::*;

    #[test]
    fn test_response_from_record() {
        let record = AdminRecord {
            id: Some(AdminId::new(1)),
            name: "John Doe".to_string(),
            email: Some(Email::parse("john@example.com").unwrap()),
            age: Some(30),
        };

        let json = serde_json::to_value(AdminResponse::from(record)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "John Doe", "email": "john@example.com", "age": 30})
        );
    }

    #[test]
    fn test_request_ignores_id() {
        let request: AdminRequest =
            serde_json::from_str(r#"{"id": 7, "name": "Jane Doe", "email": "jane@example.com", "age": 25}"#)
                .unwrap();
        assert_eq!(request, AdminInput::new("Jane Doe", "jane@example.com", 25));
    }
}
