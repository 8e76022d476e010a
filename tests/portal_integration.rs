use std::sync::Arc;

use era_portal_rust::api::routes::create_router;
use era_portal_rust::store::{CollectionStore, FsBacking};
use reqwest::Client;
use serde_json::{json, Value};
use tokio::net::TcpListener;

// Test client wrapper for making API calls
struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }

    async fn post(&self, path: &str, json: Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(&json)
            .send()
            .await
            .unwrap()
    }

    async fn put(&self, path: &str, json: Value) -> reqwest::Response {
        self.client
            .put(format!("{}{}", self.base_url, path))
            .json(&json)
            .send()
            .await
            .unwrap()
    }

    async fn delete(&self, path: &str, json: Value) -> reqwest::Response {
        self.client
            .delete(format!("{}{}", self.base_url, path))
            .json(&json)
            .send()
            .await
            .unwrap()
    }
}

/// Spawn the server on an ephemeral port backed by a fresh temp data dir.
async fn spawn_server() -> (TestClient, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let backing = FsBacking::new(dir.path()).unwrap();
    let store = Arc::new(CollectionStore::new(backing));
    let app = create_router().with_state(store);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (TestClient::new(format!("http://{addr}")), dir)
}

#[tokio::test]
async fn health_check_responds() {
    let (client, _dir) = spawn_server().await;
    let resp = client.get("/health").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn student_id_lifecycle() {
    let (client, _dir) = spawn_server().await;

    // Fresh registry is empty but well-formed.
    let body: Value = client.get("/api/student-ids").await.json().await.unwrap();
    assert_eq!(body, json!({ "validStudentIds": [] }));

    // Add, then add again (idempotent), then reject a malformed id.
    let resp = client.post("/add-student", json!({ "studentId": "STU1" })).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Student ID STU1 added successfully!");

    let resp = client.post("/add-student", json!({ "studentId": "STU1" })).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Student ID STU1 already exists.");

    let resp = client.post("/add-student", json!({ "studentId": "stu-1" })).await;
    assert_eq!(resp.status(), 400);

    let resp = client.post("/add-student", json!({})).await;
    assert_eq!(resp.status(), 400);

    let body: Value = client.get("/api/student-ids").await.json().await.unwrap();
    assert_eq!(body, json!({ "validStudentIds": ["STU1"] }));

    // Delete paths: missing body field, unknown id, then the real one.
    let resp = client.delete("/delete-student", json!({})).await;
    assert_eq!(resp.status(), 400);

    let resp = client
        .delete("/delete-student", json!({ "studentId": "STU9" }))
        .await;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);

    let resp = client
        .delete("/delete-student", json!({ "studentId": "STU1" }))
        .await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);

    let body: Value = client.get("/api/student-ids").await.json().await.unwrap();
    assert_eq!(body, json!({ "validStudentIds": [] }));
}

#[tokio::test]
async fn concurrent_student_adds_lose_nothing() {
    let (client, _dir) = spawn_server().await;
    let client = Arc::new(client);

    let mut handles = Vec::new();
    for i in 0..100 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            let resp = client
                .post("/add-student", json!({ "studentId": format!("STU{i}") }))
                .await;
            assert_eq!(resp.status(), 200);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let body: Value = client.get("/api/student-ids").await.json().await.unwrap();
    let ids = body["validStudentIds"].as_array().unwrap();
    assert_eq!(ids.len(), 100);
}

#[tokio::test]
async fn certificate_flow() {
    let (client, _dir) = spawn_server().await;

    let certificate = json!({
        "certificateNumber": "C1",
        "name": "A",
        "course": "X",
        "duration": "3mo",
        "college": "Y",
        "issuedDate": "2024-01-01",
        "studentId": "S1",
    });

    // A missing field is a 400 before anything is stored.
    let resp = client
        .post("/add-certificate", json!({ "certificateNumber": "C1" }))
        .await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "All fields are required.");

    let resp = client.post("/add-certificate", certificate.clone()).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Certificate for A added successfully!");

    let body: Value = client
        .get("/api/certificate-numbers")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!([certificate]));

    // Rename: unknown old number is a 404, then a real rekey.
    let resp = client
        .put(
            "/edit-certificate-number",
            json!({ "oldCertificateNumber": "C9", "newCertificateNumber": "C2" }),
        )
        .await;
    assert_eq!(resp.status(), 404);

    let resp = client
        .put(
            "/edit-certificate-number",
            json!({ "oldCertificateNumber": "C1", "newCertificateNumber": "C2" }),
        )
        .await;
    assert_eq!(resp.status(), 200);

    // Delete: unknown number is a 404 and leaves the record in place.
    let resp = client
        .delete("/delete-certificate", json!({ "certificateNumber": "C1" }))
        .await;
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete("/delete-certificate", json!({ "certificateNumber": "C2" }))
        .await;
    assert_eq!(resp.status(), 200);

    let body: Value = client
        .get("/api/certificate-numbers")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn internship_domain_flow() {
    let (client, _dir) = spawn_server().await;

    let resp = client
        .post(
            "/api/add-internship-domain",
            json!({ "internshipDomain": "Web Development" }),
        )
        .await;
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(
            "/api/add-internship-domain",
            json!({
                "internshipDomain": "Web Development",
                "studentIds": ["S1"],
                "pdfFile": "webdev.pdf",
            }),
        )
        .await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);

    // Lookup by name is case-insensitive; by student id returns a list.
    let resp = client
        .get("/api/internship-domain?domain=web%20development")
        .await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["internshipDomain"], "Web Development");

    let resp = client.get("/api/internship-domain?studentId=S1").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);

    let resp = client.get("/api/internship-domain?domain=Robotics").await;
    assert_eq!(resp.status(), 404);

    let resp = client.get("/api/internship-domain?studentId=S9").await;
    assert_eq!(resp.status(), 404);

    let resp = client.get("/api/internship-domain").await;
    assert_eq!(resp.status(), 400);

    // Assignment: unknown domain, new student, then the same student again.
    let resp = client
        .post(
            "/api/assign-student-to-domain",
            json!({ "internshipDomain": "Robotics", "studentId": "S2" }),
        )
        .await;
    assert_eq!(resp.status(), 404);

    let resp = client
        .post(
            "/api/assign-student-to-domain",
            json!({ "internshipDomain": "Web Development", "studentId": "S2" }),
        )
        .await;
    assert_eq!(resp.status(), 200);

    let resp = client
        .post(
            "/api/assign-student-to-domain",
            json!({ "internshipDomain": "Web Development", "studentId": "S2" }),
        )
        .await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Student ID is already assigned to this domain.");

    let body: Value = client
        .get("/api/internship-domains")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body[0]["studentIds"], json!(["S1", "S2"]));
}

#[tokio::test]
async fn task_flow() {
    let (client, _dir) = spawn_server().await;

    let resp = client
        .post("/add-task", json!({ "taskId": "T1", "taskName": "Scraper" }))
        .await;
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(
            "/add-task",
            json!({
                "taskId": "T1",
                "taskName": "Scraper",
                "assignedTo": "S1",
                "status": "open",
            }),
        )
        .await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Task Scraper added successfully!");

    // Partial edit only touches the supplied fields.
    let resp = client
        .put(
            "/edit-task",
            json!({ "taskId": "T1", "updatedDetails": { "status": "done" } }),
        )
        .await;
    assert_eq!(resp.status(), 200);

    let body: Value = client.get("/api/tasks").await.json().await.unwrap();
    assert_eq!(body[0]["status"], "done");
    assert_eq!(body[0]["taskName"], "Scraper");

    let resp = client
        .put(
            "/edit-task",
            json!({ "taskId": "T9", "updatedDetails": { "status": "done" } }),
        )
        .await;
    assert_eq!(resp.status(), 404);

    let resp = client.delete("/delete-task", json!({ "taskId": "T9" })).await;
    assert_eq!(resp.status(), 404);

    let resp = client.delete("/delete-task", json!({ "taskId": "T1" })).await;
    assert_eq!(resp.status(), 200);

    let body: Value = client.get("/api/tasks").await.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn student_status_flow() {
    let (client, _dir) = spawn_server().await;

    let resp = client
        .post(
            "/update-student-status",
            json!({ "studentId": "S1", "status": "finished" }),
        )
        .await;
    assert_eq!(resp.status(), 400);

    let resp = client
        .post(
            "/update-student-status",
            json!({ "studentId": "S1", "status": "complete" }),
        )
        .await;
    assert_eq!(resp.status(), 200);

    let resp = client
        .post(
            "/update-student-status",
            json!({ "studentId": "S1", "status": "incomplete" }),
        )
        .await;
    assert_eq!(resp.status(), 200);

    let body: Value = client.get("/api/student-status").await.json().await.unwrap();
    assert_eq!(body, json!([{ "studentId": "S1", "status": "incomplete" }]));
}
