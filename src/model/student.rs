use serde::{Deserialize, Serialize};

use crate::store::Collection;

/// Registry of identifiers allowed to use the portal.
///
/// Persisted as an object (not a bare list) so the durable document matches
/// the `{"validStudentIds": [...]}` wire shape of `GET /api/student-ids`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentIdRegistry {
    pub valid_student_ids: Vec<String>,
}

impl StudentIdRegistry {
    pub fn contains(&self, student_id: &str) -> bool {
        self.valid_student_ids.iter().any(|id| id == student_id)
    }
}

impl Collection for StudentIdRegistry {
    const NAME: &'static str = "student-ids";

    fn initial() -> Self {
        Self {
            valid_student_ids: Vec::new(),
        }
    }
}

/// Student identifiers are plain ASCII alphanumerics, nothing else.
pub fn is_valid_student_id(student_id: &str) -> bool {
    !student_id.is_empty() && student_id.chars().all(|c| c.is_ascii_alphanumeric())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    Complete,
    Incomplete,
}

impl CompletionStatus {
    /// Parse the wire value; anything but `complete`/`incomplete` is rejected
    /// before the store is touched.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "complete" => Some(Self::Complete),
            "incomplete" => Some(Self::Incomplete),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatusRecord {
    pub student_id: String,
    pub status: CompletionStatus,
}

/// Per-student completion flags; at most one record per student id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentStatusLog(pub Vec<StudentStatusRecord>);

impl Collection for StudentStatusLog {
    const NAME: &'static str = "student-status";

    fn initial() -> Self {
        Self(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_validation_accepts_alphanumerics_only() {
        assert!(is_valid_student_id("STU2024x1"));
        assert!(!is_valid_student_id(""));
        assert!(!is_valid_student_id("stu-2024"));
        assert!(!is_valid_student_id("stu 2024"));
    }

    #[test]
    fn status_parses_only_the_two_known_values() {
        assert_eq!(
            CompletionStatus::parse("complete"),
            Some(CompletionStatus::Complete)
        );
        assert_eq!(
            CompletionStatus::parse("incomplete"),
            Some(CompletionStatus::Incomplete)
        );
        assert_eq!(CompletionStatus::parse("done"), None);
        assert_eq!(CompletionStatus::parse("Complete"), None);
    }
}
