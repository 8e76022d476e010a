use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::logic::{self, Assigned, DomainLookup, OpError, Registered};
use crate::model::{
    Certificate, Certificates, CompletionStatus, InternshipDomain, InternshipDomains,
    StudentIdRegistry, StudentStatusLog, Task, TaskUpdate, Tasks,
};
use crate::store::{CollectionBacking, CollectionStore};

pub type AppState<B> = Arc<CollectionStore<B>>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

fn error_status(err: &OpError) -> StatusCode {
    match err {
        OpError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        OpError::NotFound(_) => StatusCode::NOT_FOUND,
        OpError::Store(e) => {
            log::error!("collection store failure: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_error(err: OpError) -> (StatusCode, Json<MessageResponse>) {
    let status = error_status(&err);
    (status, Json(MessageResponse::new(err.to_string())))
}

fn status_error(err: OpError) -> (StatusCode, Json<StatusResponse>) {
    let status = error_status(&err);
    (status, Json(StatusResponse::failed(err.to_string())))
}

/// Required-field check: absent and empty values are both rejected.
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ==================== Student ID handlers ====================

pub async fn list_student_ids<B: CollectionBacking>(
    State(store): State<AppState<B>>,
) -> Result<Json<StudentIdRegistry>, (StatusCode, Json<MessageResponse>)> {
    match logic::list_student_ids(&store).await {
        Ok(registry) => Ok(Json(registry)),
        Err(e) => {
            log::error!("reading student ids failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Error reading student IDs.")),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStudentRequest {
    pub student_id: Option<String>,
}

pub async fn add_student<B: CollectionBacking>(
    State(store): State<AppState<B>>,
    Json(body): Json<AddStudentRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<MessageResponse>)> {
    let student_id = body.student_id.unwrap_or_default();
    match logic::add_student_id(&store, &student_id).await {
        Ok(Registered::Added) => Ok(Json(MessageResponse::new(format!(
            "Student ID {student_id} added successfully!"
        )))),
        Ok(Registered::AlreadyPresent) => Ok(Json(MessageResponse::new(format!(
            "Student ID {student_id} already exists."
        )))),
        Err(e) => Err(message_error(e)),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteStudentRequest {
    pub student_id: Option<String>,
}

pub async fn delete_student<B: CollectionBacking>(
    State(store): State<AppState<B>>,
    Json(body): Json<DeleteStudentRequest>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<StatusResponse>)> {
    let Some(student_id) = required(body.student_id) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(StatusResponse::failed("Student ID is required")),
        ));
    };
    match logic::delete_student_id(&store, &student_id).await {
        Ok(()) => Ok(Json(StatusResponse::ok(format!(
            "Student ID {student_id} deleted successfully!"
        )))),
        Err(e) => Err(status_error(e)),
    }
}

// ==================== Certificate handlers ====================

pub async fn list_certificates<B: CollectionBacking>(
    State(store): State<AppState<B>>,
) -> Result<Json<Certificates>, (StatusCode, Json<MessageResponse>)> {
    match logic::list_certificates(&store).await {
        Ok(certificates) => Ok(Json(certificates)),
        Err(e) => {
            log::error!("reading certificates failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Error reading certificate numbers.")),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCertificateRequest {
    pub certificate_number: Option<String>,
    pub name: Option<String>,
    pub course: Option<String>,
    pub duration: Option<String>,
    pub college: Option<String>,
    pub issued_date: Option<String>,
    pub student_id: Option<String>,
}

impl AddCertificateRequest {
    fn into_certificate(self) -> Option<Certificate> {
        Some(Certificate {
            certificate_number: required(self.certificate_number)?,
            name: required(self.name)?,
            course: required(self.course)?,
            duration: required(self.duration)?,
            college: required(self.college)?,
            issued_date: required(self.issued_date)?,
            student_id: required(self.student_id)?,
        })
    }
}

pub async fn add_certificate<B: CollectionBacking>(
    State(store): State<AppState<B>>,
    Json(body): Json<AddCertificateRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<MessageResponse>)> {
    let Some(certificate) = body.into_certificate() else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new("All fields are required.")),
        ));
    };
    let name = certificate.name.clone();
    match logic::add_certificate(&store, certificate).await {
        Ok(()) => Ok(Json(MessageResponse::new(format!(
            "Certificate for {name} added successfully!"
        )))),
        Err(e) => Err(message_error(e)),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCertificateNumberRequest {
    pub old_certificate_number: Option<String>,
    pub new_certificate_number: Option<String>,
}

pub async fn edit_certificate_number<B: CollectionBacking>(
    State(store): State<AppState<B>>,
    Json(body): Json<EditCertificateNumberRequest>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<StatusResponse>)> {
    let (Some(old_number), Some(new_number)) = (
        required(body.old_certificate_number),
        required(body.new_certificate_number),
    ) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(StatusResponse::failed(
                "Both old and new certificate numbers are required",
            )),
        ));
    };
    match logic::rename_certificate_number(&store, &old_number, new_number).await {
        Ok(()) => Ok(Json(StatusResponse::ok(
            "Certificate number updated successfully",
        ))),
        Err(e) => Err(status_error(e)),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCertificateRequest {
    pub certificate_number: Option<String>,
}

pub async fn delete_certificate<B: CollectionBacking>(
    State(store): State<AppState<B>>,
    Json(body): Json<DeleteCertificateRequest>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<StatusResponse>)> {
    let Some(certificate_number) = required(body.certificate_number) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(StatusResponse::failed("Certificate number is required")),
        ));
    };
    match logic::delete_certificate(&store, &certificate_number).await {
        Ok(()) => Ok(Json(StatusResponse::ok("Certificate deleted successfully"))),
        Err(e) => Err(status_error(e)),
    }
}

// ==================== Internship domain handlers ====================

pub async fn list_internship_domains<B: CollectionBacking>(
    State(store): State<AppState<B>>,
) -> Result<Json<InternshipDomains>, (StatusCode, Json<MessageResponse>)> {
    match logic::list_domains(&store).await {
        Ok(domains) => Ok(Json(domains)),
        Err(e) => {
            log::error!("reading internship domains failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Error reading internship domains.")),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainQuery {
    pub domain: Option<String>,
    pub student_id: Option<String>,
}

pub async fn find_internship_domain<B: CollectionBacking>(
    State(store): State<AppState<B>>,
    Query(query): Query<DomainQuery>,
) -> Result<Json<DomainLookup>, (StatusCode, Json<MessageResponse>)> {
    // Empty query values are treated as absent.
    let domain = query.domain.as_deref().filter(|s| !s.is_empty());
    let student_id = query.student_id.as_deref().filter(|s| !s.is_empty());
    match logic::find_domain(&store, domain, student_id).await {
        Ok(lookup) => Ok(Json(lookup)),
        Err(e) => Err(message_error(e)),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDomainRequest {
    pub internship_domain: Option<String>,
    pub student_ids: Option<Vec<String>>,
    pub pdf_file: Option<String>,
}

pub async fn add_internship_domain<B: CollectionBacking>(
    State(store): State<AppState<B>>,
    Json(body): Json<AddDomainRequest>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<MessageResponse>)> {
    let (Some(internship_domain), Some(student_ids), Some(pdf_file)) = (
        required(body.internship_domain),
        body.student_ids,
        required(body.pdf_file),
    ) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new("All fields are required.")),
        ));
    };
    let domain = InternshipDomain {
        internship_domain,
        student_ids,
        pdf_file,
    };
    match logic::add_domain(&store, domain).await {
        Ok(()) => Ok(Json(StatusResponse::ok(
            "Internship domain added successfully!",
        ))),
        Err(e) => Err(message_error(e)),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignStudentRequest {
    pub internship_domain: Option<String>,
    pub student_id: Option<String>,
}

pub async fn assign_student_to_domain<B: CollectionBacking>(
    State(store): State<AppState<B>>,
    Json(body): Json<AssignStudentRequest>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<StatusResponse>)> {
    let (Some(internship_domain), Some(student_id)) =
        (required(body.internship_domain), required(body.student_id))
    else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(StatusResponse::failed(
                "Both internship domain and student ID are required",
            )),
        ));
    };
    match logic::assign_student(&store, &internship_domain, student_id).await {
        Ok(Assigned::Added) => Ok(Json(StatusResponse::ok(
            "Student ID assigned to internship domain successfully!",
        ))),
        Ok(Assigned::AlreadyListed) => Ok(Json(StatusResponse::ok(
            "Student ID is already assigned to this domain.",
        ))),
        Err(e) => Err(status_error(e)),
    }
}

// ==================== Task handlers ====================

pub async fn list_tasks<B: CollectionBacking>(
    State(store): State<AppState<B>>,
) -> Result<Json<Tasks>, (StatusCode, Json<MessageResponse>)> {
    match logic::list_tasks(&store).await {
        Ok(tasks) => Ok(Json(tasks)),
        Err(e) => {
            log::error!("reading tasks failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Error reading tasks.")),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTaskRequest {
    pub task_id: Option<String>,
    pub task_name: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
}

impl AddTaskRequest {
    fn into_task(self) -> Option<Task> {
        Some(Task {
            task_id: required(self.task_id)?,
            task_name: required(self.task_name)?,
            assigned_to: required(self.assigned_to)?,
            status: required(self.status)?,
        })
    }
}

pub async fn add_task<B: CollectionBacking>(
    State(store): State<AppState<B>>,
    Json(body): Json<AddTaskRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<MessageResponse>)> {
    let Some(task) = body.into_task() else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new("All fields are required.")),
        ));
    };
    let task_name = task.task_name.clone();
    match logic::add_task(&store, task).await {
        Ok(()) => Ok(Json(MessageResponse::new(format!(
            "Task {task_name} added successfully!"
        )))),
        Err(e) => Err(message_error(e)),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTaskRequest {
    pub task_id: Option<String>,
    pub updated_details: Option<TaskUpdate>,
}

pub async fn edit_task<B: CollectionBacking>(
    State(store): State<AppState<B>>,
    Json(body): Json<EditTaskRequest>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<StatusResponse>)> {
    let (Some(task_id), Some(update)) = (required(body.task_id), body.updated_details) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(StatusResponse::failed(
                "Task ID and updated details are required",
            )),
        ));
    };
    match logic::edit_task(&store, &task_id, update).await {
        Ok(()) => Ok(Json(StatusResponse::ok("Task updated successfully"))),
        Err(e) => Err(status_error(e)),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskRequest {
    pub task_id: Option<String>,
}

pub async fn delete_task<B: CollectionBacking>(
    State(store): State<AppState<B>>,
    Json(body): Json<DeleteTaskRequest>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<StatusResponse>)> {
    let Some(task_id) = required(body.task_id) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(StatusResponse::failed("Task ID is required")),
        ));
    };
    match logic::delete_task(&store, &task_id).await {
        Ok(()) => Ok(Json(StatusResponse::ok("Task deleted successfully"))),
        Err(e) => Err(status_error(e)),
    }
}

// ==================== Student status handlers ====================

pub async fn list_student_statuses<B: CollectionBacking>(
    State(store): State<AppState<B>>,
) -> Result<Json<StudentStatusLog>, (StatusCode, Json<MessageResponse>)> {
    match logic::list_student_statuses(&store).await {
        Ok(statuses) => Ok(Json(statuses)),
        Err(e) => {
            log::error!("reading student statuses failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Error reading student statuses.")),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentStatusRequest {
    pub student_id: Option<String>,
    pub status: Option<String>,
}

pub async fn update_student_status<B: CollectionBacking>(
    State(store): State<AppState<B>>,
    Json(body): Json<UpdateStudentStatusRequest>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<MessageResponse>)> {
    let (Some(student_id), Some(status)) = (required(body.student_id), required(body.status))
    else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new("Student ID and status are required.")),
        ));
    };
    let Some(status) = CompletionStatus::parse(&status) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new(
                "Status must be either 'complete' or 'incomplete'.",
            )),
        ));
    };
    match logic::upsert_student_status(&store, student_id, status).await {
        Ok(()) => Ok(Json(StatusResponse::ok(
            "Student status updated successfully!",
        ))),
        Err(e) => Err(message_error(e)),
    }
}
