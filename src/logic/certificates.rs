use crate::logic::OpError;
use crate::model::{Certificate, Certificates};
use crate::store::{CollectionBacking, CollectionStore, Outcome};

pub async fn list_certificates<B: CollectionBacking>(
    store: &CollectionStore<B>,
) -> Result<Certificates, OpError> {
    Ok(store.get::<Certificates>().await?)
}

/// Append unconditionally. The add path does not enforce number uniqueness;
/// only the rename path guards on the (old) number existing.
pub async fn add_certificate<B: CollectionBacking>(
    store: &CollectionStore<B>,
    certificate: Certificate,
) -> Result<(), OpError> {
    store
        .mutate::<Certificates, _, OpError, _>(move |certificates| {
            log::info!(
                "certificate {} recorded for student {}",
                certificate.certificate_number,
                certificate.student_id
            );
            certificates.0.push(certificate);
            Ok(Outcome::Commit(()))
        })
        .await
}

/// Re-key a certificate from its old number to a new one. Existence of the
/// old number is the only guard; renaming onto a number some other record
/// already carries is allowed.
pub async fn rename_certificate_number<B: CollectionBacking>(
    store: &CollectionStore<B>,
    old_number: &str,
    new_number: String,
) -> Result<(), OpError> {
    store
        .mutate::<Certificates, _, OpError, _>(move |certificates| {
            let record = certificates
                .0
                .iter_mut()
                .find(|c| c.certificate_number == old_number)
                .ok_or_else(|| OpError::not_found("Certificate number not found"))?;
            record.certificate_number = new_number;
            Ok(Outcome::Commit(()))
        })
        .await
}

pub async fn delete_certificate<B: CollectionBacking>(
    store: &CollectionStore<B>,
    certificate_number: &str,
) -> Result<(), OpError> {
    store
        .mutate::<Certificates, _, OpError, _>(|certificates| {
            let before = certificates.0.len();
            certificates
                .0
                .retain(|c| c.certificate_number != certificate_number);
            if certificates.0.len() == before {
                return Err(OpError::not_found("Certificate number not found"));
            }
            Ok(Outcome::Commit(()))
        })
        .await
}
