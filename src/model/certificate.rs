use serde::{Deserialize, Serialize};

use crate::store::Collection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub certificate_number: String,
    pub name: String,
    pub course: String,
    pub duration: String,
    pub college: String,
    pub issued_date: String,
    pub student_id: String,
}

/// All issued certificates. The durable document is a bare JSON array.
///
/// `certificateNumber` acts as the lookup key for the rename/delete paths;
/// the add path does not enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Certificates(pub Vec<Certificate>);

impl Collection for Certificates {
    const NAME: &'static str = "certificates";

    fn initial() -> Self {
        Self(Vec::new())
    }
}
