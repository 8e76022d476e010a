use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::store::{CollectionBacking, CollectionStore};

pub fn create_router<B: CollectionBacking + 'static>() -> Router<Arc<CollectionStore<B>>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Student IDs
        .route("/api/student-ids", get(handlers::list_student_ids::<B>))
        .route("/add-student", post(handlers::add_student::<B>))
        .route("/delete-student", delete(handlers::delete_student::<B>))
        // Certificates
        .route(
            "/api/certificate-numbers",
            get(handlers::list_certificates::<B>),
        )
        .route("/add-certificate", post(handlers::add_certificate::<B>))
        .route(
            "/edit-certificate-number",
            put(handlers::edit_certificate_number::<B>),
        )
        .route(
            "/delete-certificate",
            delete(handlers::delete_certificate::<B>),
        )
        // Internship domains
        .route(
            "/api/internship-domains",
            get(handlers::list_internship_domains::<B>),
        )
        .route(
            "/api/internship-domain",
            get(handlers::find_internship_domain::<B>),
        )
        .route(
            "/api/add-internship-domain",
            post(handlers::add_internship_domain::<B>),
        )
        .route(
            "/api/assign-student-to-domain",
            post(handlers::assign_student_to_domain::<B>),
        )
        // Tasks
        .route("/api/tasks", get(handlers::list_tasks::<B>))
        .route("/add-task", post(handlers::add_task::<B>))
        .route("/edit-task", put(handlers::edit_task::<B>))
        .route("/delete-task", delete(handlers::delete_task::<B>))
        // Student status
        .route(
            "/api/student-status",
            get(handlers::list_student_statuses::<B>),
        )
        .route(
            "/update-student-status",
            post(handlers::update_student_status::<B>),
        )
        // Frontend assets
        .fallback_service(ServeDir::new("public"))
}
