use crate::logic::OpError;
use crate::model::{
    is_valid_student_id, CompletionStatus, StudentIdRegistry, StudentStatusLog,
    StudentStatusRecord,
};
use crate::store::{CollectionBacking, CollectionStore, Outcome};

/// Result of an id registration; a duplicate is success-without-change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registered {
    Added,
    AlreadyPresent,
}

pub async fn list_student_ids<B: CollectionBacking>(
    store: &CollectionStore<B>,
) -> Result<StudentIdRegistry, OpError> {
    Ok(store.get::<StudentIdRegistry>().await?)
}

pub async fn add_student_id<B: CollectionBacking>(
    store: &CollectionStore<B>,
    student_id: &str,
) -> Result<Registered, OpError> {
    if !is_valid_student_id(student_id) {
        return Err(OpError::invalid(
            "Invalid Student ID. Only alphanumeric IDs allowed.",
        ));
    }

    store
        .mutate::<StudentIdRegistry, _, OpError, _>(|registry| {
            if registry.contains(student_id) {
                return Ok(Outcome::Discard(Registered::AlreadyPresent));
            }
            registry.valid_student_ids.push(student_id.to_string());
            log::info!("student id {student_id} registered");
            Ok(Outcome::Commit(Registered::Added))
        })
        .await
}

pub async fn delete_student_id<B: CollectionBacking>(
    store: &CollectionStore<B>,
    student_id: &str,
) -> Result<(), OpError> {
    store
        .mutate::<StudentIdRegistry, _, OpError, _>(|registry| {
            let before = registry.valid_student_ids.len();
            registry.valid_student_ids.retain(|id| id != student_id);
            if registry.valid_student_ids.len() == before {
                return Err(OpError::not_found("Student ID not found"));
            }
            log::info!("student id {student_id} deleted");
            Ok(Outcome::Commit(()))
        })
        .await
}

pub async fn list_student_statuses<B: CollectionBacking>(
    store: &CollectionStore<B>,
) -> Result<StudentStatusLog, OpError> {
    Ok(store.get::<StudentStatusLog>().await?)
}

/// Update the status in place if the student already has a record, otherwise
/// append one. Re-asserting the current status writes nothing.
pub async fn upsert_student_status<B: CollectionBacking>(
    store: &CollectionStore<B>,
    student_id: String,
    status: CompletionStatus,
) -> Result<(), OpError> {
    store
        .mutate::<StudentStatusLog, _, OpError, _>(move |statuses| {
            match statuses.0.iter_mut().find(|r| r.student_id == student_id) {
                Some(record) if record.status == status => Ok(Outcome::Discard(())),
                Some(record) => {
                    record.status = status;
                    Ok(Outcome::Commit(()))
                }
                None => {
                    statuses.0.push(StudentStatusRecord { student_id, status });
                    Ok(Outcome::Commit(()))
                }
            }
        })
        .await
}
