use itertools::Itertools;
use serde::Serialize;

use crate::logic::OpError;
use crate::model::{InternshipDomain, InternshipDomains};
use crate::store::{CollectionBacking, CollectionStore, Outcome};

/// Answer to `GET /api/internship-domain`: a single domain when queried by
/// name, every matching domain when queried by student id.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DomainLookup {
    ByName(InternshipDomain),
    ByStudent(Vec<InternshipDomain>),
}

/// Result of assigning a student to a domain; an id already on the list is
/// success-without-change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assigned {
    Added,
    AlreadyListed,
}

pub async fn list_domains<B: CollectionBacking>(
    store: &CollectionStore<B>,
) -> Result<InternshipDomains, OpError> {
    Ok(store.get::<InternshipDomains>().await?)
}

pub async fn find_domain<B: CollectionBacking>(
    store: &CollectionStore<B>,
    domain: Option<&str>,
    student_id: Option<&str>,
) -> Result<DomainLookup, OpError> {
    let domains = store.get::<InternshipDomains>().await?;

    if let Some(name) = domain {
        let found = domains
            .0
            .into_iter()
            .find(|d| d.matches_name(name))
            .ok_or_else(|| OpError::not_found("Internship domain not found."))?;
        return Ok(DomainLookup::ByName(found));
    }

    if let Some(student_id) = student_id {
        let matches = domains
            .0
            .into_iter()
            .filter(|d| d.student_ids.iter().any(|s| s == student_id))
            .collect_vec();
        if matches.is_empty() {
            return Err(OpError::not_found(
                "No internship domains found for the given student ID.",
            ));
        }
        return Ok(DomainLookup::ByStudent(matches));
    }

    Err(OpError::invalid(
        "Please provide either a domain name or a student ID.",
    ))
}

/// Append unconditionally; duplicate domain names are not rejected.
pub async fn add_domain<B: CollectionBacking>(
    store: &CollectionStore<B>,
    domain: InternshipDomain,
) -> Result<(), OpError> {
    store
        .mutate::<InternshipDomains, _, OpError, _>(move |domains| {
            log::info!("internship domain {} added", domain.internship_domain);
            domains.0.push(domain);
            Ok(Outcome::Commit(()))
        })
        .await
}

/// Attach a student id to an existing domain's enrollment list.
pub async fn assign_student<B: CollectionBacking>(
    store: &CollectionStore<B>,
    domain_name: &str,
    student_id: String,
) -> Result<Assigned, OpError> {
    store
        .mutate::<InternshipDomains, _, OpError, _>(move |domains| {
            let domain = domains
                .0
                .iter_mut()
                .find(|d| d.matches_name(domain_name))
                .ok_or_else(|| OpError::not_found("Internship domain not found."))?;
            if domain.student_ids.iter().any(|s| *s == student_id) {
                return Ok(Outcome::Discard(Assigned::AlreadyListed));
            }
            domain.student_ids.push(student_id);
            Ok(Outcome::Commit(Assigned::Added))
        })
        .await
}
