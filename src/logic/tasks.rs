use crate::logic::OpError;
use crate::model::{Task, TaskUpdate, Tasks};
use crate::store::{CollectionBacking, CollectionStore, Outcome};

pub async fn list_tasks<B: CollectionBacking>(
    store: &CollectionStore<B>,
) -> Result<Tasks, OpError> {
    Ok(store.get::<Tasks>().await?)
}

pub async fn add_task<B: CollectionBacking>(
    store: &CollectionStore<B>,
    task: Task,
) -> Result<(), OpError> {
    store
        .mutate::<Tasks, _, OpError, _>(move |tasks| {
            log::info!("task {} assigned to {}", task.task_id, task.assigned_to);
            tasks.0.push(task);
            Ok(Outcome::Commit(()))
        })
        .await
}

/// Field-merge update keyed on `taskId`.
pub async fn edit_task<B: CollectionBacking>(
    store: &CollectionStore<B>,
    task_id: &str,
    update: TaskUpdate,
) -> Result<(), OpError> {
    store
        .mutate::<Tasks, _, OpError, _>(move |tasks| {
            let task = tasks
                .0
                .iter_mut()
                .find(|t| t.task_id == task_id)
                .ok_or_else(|| OpError::not_found("Task not found"))?;
            task.merge(update);
            Ok(Outcome::Commit(()))
        })
        .await
}

pub async fn delete_task<B: CollectionBacking>(
    store: &CollectionStore<B>,
    task_id: &str,
) -> Result<(), OpError> {
    store
        .mutate::<Tasks, _, OpError, _>(|tasks| {
            let before = tasks.0.len();
            tasks.0.retain(|t| t.task_id != task_id);
            if tasks.0.len() == before {
                return Err(OpError::not_found("Task not found"));
            }
            Ok(Outcome::Commit(()))
        })
        .await
}
