//! Integration tests for job postings.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use jobportal_entity::user::UserRole;

use helpers::TestApp;

#[tokio::test]
async fn test_create_job_requires_employer() {
    let app = TestApp::new();
    let (_, seeker) = app.user_with_token("Seeker", UserRole::Jobseeker).await;
    let (_, admin) = app.user_with_token("Admin", UserRole::Superadmin).await;
    let body = json!({
        "title": "Backend Engineer",
        "description": "Build and operate the API",
        "company": "Acme",
        "location": "Remote",
    });

    let anonymous = app
        .request("POST", "/api/jobs", Some(body.clone()), None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let as_seeker = app
        .request("POST", "/api/jobs", Some(body.clone()), Some(&seeker))
        .await;
    assert_eq!(as_seeker.status, StatusCode::FORBIDDEN);
    assert_eq!(as_seeker.body["message"], "Access denied");

    // No implicit superadmin override on employer-only routes
    let as_admin = app
        .request("POST", "/api/jobs", Some(body), Some(&admin))
        .await;
    assert_eq!(as_admin.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_job_validates_body() {
    let app = TestApp::new();
    let (_, employer) = app.user_with_token("Employer", UserRole::Employer).await;

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "title": "QA",
                "description": "Find the bugs before users do",
                "company": "Acme",
                "location": "Remote",
            })),
            Some(&employer),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Title must be at least 3 characters");
}

#[tokio::test]
async fn test_get_job_populates_employer() {
    let app = TestApp::new();
    let (employer_id, employer) = app.user_with_token("Erin Boss", UserRole::Employer).await;
    let job_id = app.create_job(&employer, "Backend Engineer", Some(90000.0)).await;

    let response = app
        .request("GET", &format!("/api/jobs/{job_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Backend Engineer");
    assert_eq!(response.body["salary"], 90000.0);
    assert_eq!(response.body["employerId"], employer_id.to_string());
    assert_eq!(response.body["employer"]["name"], "Erin Boss");
    assert_eq!(response.body["employer"]["email"], "erin.boss@example.com");
}

#[tokio::test]
async fn test_get_job_errors() {
    let app = TestApp::new();

    let bad_id = app.request("GET", "/api/jobs/not-a-uuid", None, None).await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_id.body["message"], "Invalid job ID");

    let missing = app
        .request("GET", &format!("/api/jobs/{}", Uuid::new_v4()), None, None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["message"], "Job not found");
}

#[tokio::test]
async fn test_list_jobs_keyword_and_salary_range() {
    let app = TestApp::new();
    let (_, employer) = app.user_with_token("Employer", UserRole::Employer).await;
    app.create_job(&employer, "Backend Engineer", Some(90000.0)).await;
    app.create_job(&employer, "Senior ENGINEER", Some(150000.0)).await;
    app.create_job(&employer, "Product Designer", Some(70000.0)).await;
    app.create_job(&employer, "Data Engineer", None).await;

    let keyword = app
        .request("GET", "/api/jobs?keyword=engineer", None, None)
        .await;
    assert_eq!(keyword.status, StatusCode::OK);
    assert_eq!(keyword.body["total"], 3);
    for job in keyword.body["jobs"].as_array().unwrap() {
        let title = job["title"].as_str().unwrap().to_lowercase();
        assert!(title.contains("engineer"));
    }

    let range = app
        .request(
            "GET",
            "/api/jobs?minSalary=50000&maxSalary=100000",
            None,
            None,
        )
        .await;
    assert_eq!(range.status, StatusCode::OK);
    let titles: Vec<&str> = range.body["jobs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Product Designer", "Backend Engineer"]);

    let bad = app
        .request("GET", "/api/jobs?minSalary=lots", None, None)
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_jobs_pagination() {
    let app = TestApp::new();
    let (_, employer) = app.user_with_token("Employer", UserRole::Employer).await;
    for i in 0..5 {
        app.create_job(&employer, &format!("Position {i}"), None).await;
    }

    let first = app.request("GET", "/api/jobs?page=1&limit=2", None, None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["jobs"].as_array().unwrap().len(), 2);
    assert_eq!(first.body["page"], 1);
    assert_eq!(first.body["limit"], 2);
    assert_eq!(first.body["total"], 5);
    assert_eq!(first.body["totalPages"], 3);
    // Newest first
    assert_eq!(first.body["jobs"][0]["title"], "Position 4");

    let beyond = app.request("GET", "/api/jobs?page=9&limit=2", None, None).await;
    assert_eq!(beyond.status, StatusCode::OK);
    assert!(beyond.body["jobs"].as_array().unwrap().is_empty());
    assert_eq!(beyond.body["total"], 5);

    let garbage = app
        .request("GET", "/api/jobs?page=abc&limit=1000", None, None)
        .await;
    assert_eq!(garbage.body["page"], 1);
    assert_eq!(garbage.body["limit"], 100);

    let leading_digits = app
        .request("GET", "/api/jobs?page=2abc&limit=2", None, None)
        .await;
    assert_eq!(leading_digits.body["page"], 2);
    assert_eq!(leading_digits.body["jobs"][0]["title"], "Position 2");

    let huge = app
        .request("GET", "/api/jobs?page=9223372036854775807", None, None)
        .await;
    assert_eq!(huge.status, StatusCode::OK);
    assert!(huge.body["jobs"].as_array().unwrap().is_empty());
    assert_eq!(huge.body["total"], 5);
}

#[tokio::test]
async fn test_my_jobs_only_lists_own_postings() {
    let app = TestApp::new();
    let (_, alice) = app.user_with_token("Alice", UserRole::Employer).await;
    let (_, bob) = app.user_with_token("Bob", UserRole::Employer).await;
    app.create_job(&alice, "Alice Role", None).await;
    app.create_job(&bob, "Bob Role", None).await;

    let response = app.request("GET", "/api/jobs/mine", None, Some(&alice)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 1);
    assert_eq!(response.body["jobs"][0]["title"], "Alice Role");
}

#[tokio::test]
async fn test_update_job_ownership() {
    let app = TestApp::new();
    let (_, owner) = app.user_with_token("Owner", UserRole::Employer).await;
    let (_, other) = app.user_with_token("Other", UserRole::Employer).await;
    let job_id = app.create_job(&owner, "Backend Engineer", Some(90000.0)).await;
    let path = format!("/api/jobs/{job_id}");

    let by_other = app
        .request("PUT", &path, Some(json!({ "salary": 1.0 })), Some(&other))
        .await;
    assert_eq!(by_other.status, StatusCode::FORBIDDEN);
    assert_eq!(by_other.body["message"], "Not authorized");

    let by_owner = app
        .request(
            "PUT",
            &path,
            Some(json!({ "title": "Staff Engineer", "salary": 120000.0 })),
            Some(&owner),
        )
        .await;
    assert_eq!(by_owner.status, StatusCode::OK);
    assert_eq!(by_owner.body["title"], "Staff Engineer");
    assert_eq!(by_owner.body["salary"], 120000.0);
    assert_eq!(by_owner.body["company"], "Acme Corp");

    // Not-found wins over not-authorized
    let missing = app
        .request(
            "PUT",
            &format!("/api/jobs/{}", Uuid::new_v4()),
            Some(json!({ "salary": 1.0 })),
            Some(&other),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_job_owner_or_superadmin() {
    let app = TestApp::new();
    let (_, owner) = app.user_with_token("Owner", UserRole::Employer).await;
    let (_, other) = app.user_with_token("Other", UserRole::Employer).await;
    let (_, admin) = app.user_with_token("Admin", UserRole::Superadmin).await;
    let first = app.create_job(&owner, "First Role", None).await;
    let second = app.create_job(&owner, "Second Role", None).await;

    let by_other = app
        .request("DELETE", &format!("/api/jobs/{first}"), None, Some(&other))
        .await;
    assert_eq!(by_other.status, StatusCode::FORBIDDEN);

    let by_owner = app
        .request("DELETE", &format!("/api/jobs/{first}"), None, Some(&owner))
        .await;
    assert_eq!(by_owner.status, StatusCode::OK);
    assert_eq!(by_owner.body["message"], "Job deleted successfully");

    let by_admin = app
        .request("DELETE", &format!("/api/jobs/{second}"), None, Some(&admin))
        .await;
    assert_eq!(by_admin.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/jobs/{first}"), None, None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}
