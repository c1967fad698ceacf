//! Student models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A student in the system.
///
/// `is_suspended` only ever moves from `false` to `true`; there is no
/// unsuspend operation.
#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct Student {
    #[sqlx(rename = "student_email")]
    pub email: String,
    pub is_suspended: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/suspend`.
#[derive(Deserialize, Debug, Default, ToSchema, Validate)]
pub struct SuspendStudentDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "student is required"))]
    pub student: String,
}

/// Query string of `GET /api/commonstudents`; `teacher` may repeat.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommonStudentsQuery {
    /// Teacher email. Repeat the parameter to intersect several classes.
    #[serde(default)]
    pub teacher: Vec<String>,
}

impl CommonStudentsQuery {
    /// Named teachers with repeats removed, first occurrence kept.
    pub fn distinct_teachers(&self) -> Vec<String> {
        let mut teachers: Vec<String> = Vec::with_capacity(self.teacher.len());
        for teacher in &self.teacher {
            if !teachers.contains(teacher) {
                teachers.push(teacher.clone());
            }
        }
        teachers
    }
}

#[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
pub struct CommonStudentsResponse {
    pub students: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspend_dto_requires_student() {
        let dto = SuspendStudentDto {
            student: String::new(),
        };
        let errors = dto.validate().unwrap_err();
        let field = errors.field_errors();
        let messages: Vec<_> = field["student"]
            .iter()
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        assert_eq!(messages, vec!["student is required"]);
    }

    #[test]
    fn test_suspend_dto_valid() {
        let dto = SuspendStudentDto {
            student: "studentmary@gmail.com".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_suspend_dto_missing_field_deserializes_empty() {
        let dto: SuspendStudentDto = serde_json::from_str("{}").unwrap();
        assert_eq!(dto.student, "");
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_distinct_teachers_keeps_first_occurrence() {
        let query = CommonStudentsQuery {
            teacher: vec![
                "teacherken@gmail.com".to_string(),
                "teacherjoe@gmail.com".to_string(),
                "teacherken@gmail.com".to_string(),
            ],
        };
        assert_eq!(
            query.distinct_teachers(),
            vec!["teacherken@gmail.com", "teacherjoe@gmail.com"]
        );
    }

    #[test]
    fn test_common_students_response_serializes_empty_list() {
        let body = serde_json::to_value(CommonStudentsResponse::default()).unwrap();
        assert_eq!(body, serde_json::json!({ "students": [] }));
    }
}
