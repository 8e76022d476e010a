use serde::{Deserialize, Serialize};

use crate::store::Collection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipDomain {
    pub internship_domain: String,
    pub student_ids: Vec<String>,
    pub pdf_file: String,
}

impl InternshipDomain {
    /// Domain names are matched case-insensitively on lookup.
    pub fn matches_name(&self, name: &str) -> bool {
        self.internship_domain.eq_ignore_ascii_case(name)
    }
}

/// Offered internship domains with their enrolled students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InternshipDomains(pub Vec<InternshipDomain>);

impl Collection for InternshipDomains {
    const NAME: &'static str = "internship-domains";

    fn initial() -> Self {
        Self(Vec::new())
    }
}
