//! Integration tests for applying to jobs and reviewing applications.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use jobportal_entity::user::UserRole;

use helpers::{TestApp, pdf_bytes};

#[tokio::test]
async fn test_apply_review_and_track_scenario() {
    let app = TestApp::new();
    let (_, employer) = app.user_with_token("Erin Employer", UserRole::Employer).await;
    let (seeker_id, seeker) = app.user_with_token("Jo Seeker", UserRole::Jobseeker).await;
    let job_id = app.create_job(&employer, "Backend Engineer", Some(90000.0)).await;

    // Jobseeker applies with a PDF
    let applied = app
        .apply(&seeker, &job_id, "cv.pdf", "application/pdf", &pdf_bytes())
        .await;
    assert_eq!(applied.status, StatusCode::CREATED, "{:?}", applied.body);
    assert_eq!(applied.body["status"], "pending");
    assert_eq!(applied.body["applicantId"], seeker_id.to_string());
    let application_id = applied.body["id"].as_str().unwrap().to_string();

    let resume = applied.body["resume"].as_str().unwrap();
    assert!(resume.starts_with(&format!("/uploads/resumes/{seeker_id}-")));
    assert!(resume.ends_with(".pdf"));
    let stored = app
        .upload_root
        .join(resume.trim_start_matches("/uploads/"));
    assert_eq!(std::fs::read(stored).unwrap(), pdf_bytes());

    // Employer sees exactly one pending application from the jobseeker
    let listing = app
        .request(
            "GET",
            &format!("/api/applications/job/{job_id}"),
            None,
            Some(&employer),
        )
        .await;
    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(listing.body["total"], 1);
    let item = &listing.body["applications"][0];
    assert_eq!(item["status"], "pending");
    assert_eq!(item["applicant"]["name"], "Jo Seeker");
    assert_eq!(item["applicant"]["email"], "jo.seeker@example.com");

    // Employer accepts
    let accepted = app
        .request(
            "PUT",
            &format!("/api/applications/{application_id}/status"),
            Some(json!({ "status": "accepted" })),
            Some(&employer),
        )
        .await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert_eq!(accepted.body["status"], "accepted");

    // Jobseeker sees the new status with the posting attached
    let mine = app
        .request("GET", "/api/applications/my", None, Some(&seeker))
        .await;
    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.body["total"], 1);
    assert_eq!(mine.body["applications"][0]["status"], "accepted");
    assert_eq!(mine.body["applications"][0]["job"]["title"], "Backend Engineer");
    assert_eq!(mine.body["applications"][0]["job"]["company"], "Acme Corp");
}

#[tokio::test]
async fn test_second_application_conflicts() {
    let app = TestApp::new();
    let (_, employer) = app.user_with_token("Employer", UserRole::Employer).await;
    let (_, seeker) = app.user_with_token("Seeker", UserRole::Jobseeker).await;
    let job_id = app.create_job(&employer, "Backend Engineer", None).await;

    let first = app
        .apply(&seeker, &job_id, "cv.pdf", "application/pdf", &pdf_bytes())
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .apply(&seeker, &job_id, "cv.pdf", "application/pdf", &pdf_bytes())
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["message"], "Already applied for this job");
}

#[tokio::test]
async fn test_apply_rejections() {
    let app = TestApp::new();
    let (_, employer) = app.user_with_token("Employer", UserRole::Employer).await;
    let (_, seeker) = app.user_with_token("Seeker", UserRole::Jobseeker).await;
    let job_id = app.create_job(&employer, "Backend Engineer", None).await;

    let bad_id = app
        .apply(&seeker, "nope", "cv.pdf", "application/pdf", &pdf_bytes())
        .await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_id.body["message"], "Invalid job ID");

    let missing_job = app
        .apply(
            &seeker,
            &Uuid::new_v4().to_string(),
            "cv.pdf",
            "application/pdf",
            &pdf_bytes(),
        )
        .await;
    assert_eq!(missing_job.status, StatusCode::NOT_FOUND);

    let no_resume = app.apply_without_resume(&seeker, &job_id).await;
    assert_eq!(no_resume.status, StatusCode::BAD_REQUEST);
    assert_eq!(no_resume.body["message"], "Resume is required");

    let not_pdf = app
        .apply(&seeker, &job_id, "cv.docx", "application/msword", b"hello")
        .await;
    assert_eq!(not_pdf.status, StatusCode::BAD_REQUEST);
    assert_eq!(not_pdf.body["message"], "Only PDF files allowed");

    let oversized = vec![b'x'; 2 * 1024 * 1024 + 1];
    let too_large = app
        .apply(&seeker, &job_id, "cv.pdf", "application/pdf", &oversized)
        .await;
    assert_eq!(too_large.status, StatusCode::PAYLOAD_TOO_LARGE);

    let as_employer = app
        .apply(&employer, &job_id, "cv.pdf", "application/pdf", &pdf_bytes())
        .await;
    assert_eq!(as_employer.status, StatusCode::FORBIDDEN);

    // None of the rejected attempts created a record
    let mine = app
        .request("GET", "/api/applications/my", None, Some(&seeker))
        .await;
    assert_eq!(mine.body["total"], 0);
}

#[tokio::test]
async fn test_status_update_rules() {
    let app = TestApp::new();
    let (_, owner) = app.user_with_token("Owner", UserRole::Employer).await;
    let (_, other) = app.user_with_token("Other", UserRole::Employer).await;
    let (_, seeker) = app.user_with_token("Seeker", UserRole::Jobseeker).await;
    let job_id = app.create_job(&owner, "Backend Engineer", None).await;
    let applied = app
        .apply(&seeker, &job_id, "cv.pdf", "application/pdf", &pdf_bytes())
        .await;
    let path = format!(
        "/api/applications/{}/status",
        applied.body["id"].as_str().unwrap()
    );

    let invalid = app
        .request("PUT", &path, Some(json!({ "status": "archived" })), Some(&owner))
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["message"], "Invalid status");

    let by_other = app
        .request("PUT", &path, Some(json!({ "status": "accepted" })), Some(&other))
        .await;
    assert_eq!(by_other.status, StatusCode::FORBIDDEN);

    let by_seeker = app
        .request("PUT", &path, Some(json!({ "status": "accepted" })), Some(&seeker))
        .await;
    assert_eq!(by_seeker.status, StatusCode::FORBIDDEN);

    let missing = app
        .request(
            "PUT",
            &format!("/api/applications/{}/status", Uuid::new_v4()),
            Some(json!({ "status": "accepted" })),
            Some(&other),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    // The lifecycle has no terminal state
    for status in ["rejected", "pending", "accepted"] {
        let response = app
            .request("PUT", &path, Some(json!({ "status": status })), Some(&owner))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["status"], status);
    }
}

#[tokio::test]
async fn test_job_applicants_require_ownership() {
    let app = TestApp::new();
    let (_, owner) = app.user_with_token("Owner", UserRole::Employer).await;
    let (_, other) = app.user_with_token("Other", UserRole::Employer).await;
    let job_id = app.create_job(&owner, "Backend Engineer", None).await;

    let response = app
        .request(
            "GET",
            &format!("/api/applications/job/{job_id}"),
            None,
            Some(&other),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_employer_dashboard_across_jobs_with_keyword() {
    let app = TestApp::new();
    let (_, employer) = app.user_with_token("Employer", UserRole::Employer).await;
    let (_, rival) = app.user_with_token("Rival", UserRole::Employer).await;
    let (_, ada) = app.user_with_token("Ada Lovelace", UserRole::Jobseeker).await;
    let (_, alan) = app.user_with_token("Alan Turing", UserRole::Jobseeker).await;
    let backend = app.create_job(&employer, "Backend Engineer", None).await;
    let frontend = app.create_job(&employer, "Frontend Engineer", None).await;
    let elsewhere = app.create_job(&rival, "Rival Engineer", None).await;

    for (token, job) in [(&ada, &backend), (&alan, &frontend), (&ada, &elsewhere)] {
        let response = app
            .apply(token, job, "cv.pdf", "application/pdf", &pdf_bytes())
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let all = app
        .request(
            "GET",
            "/api/applications/employer-dashboard",
            None,
            Some(&employer),
        )
        .await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["total"], 2);

    let ada_only = app
        .request(
            "GET",
            "/api/applications/employer-dashboard?keyword=lovelace",
            None,
            Some(&employer),
        )
        .await;
    let items = ada_only.body["applications"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["applicant"]["name"], "Ada Lovelace");
    assert_eq!(items[0]["job"]["title"], "Backend Engineer");

    let bad_status = app
        .request(
            "GET",
            "/api/applications/employer-dashboard?status=archived",
            None,
            Some(&employer),
        )
        .await;
    assert_eq!(bad_status.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_my_applications_keyword_matches_posting_after_join() {
    let app = TestApp::new();
    let (_, employer) = app.user_with_token("Employer", UserRole::Employer).await;
    let (_, seeker) = app.user_with_token("Seeker", UserRole::Jobseeker).await;
    let backend = app.create_job(&employer, "Backend Engineer", None).await;
    let designer = app.create_job(&employer, "Product Designer", None).await;
    let globex = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "title": "Support Lead",
                "description": "Keep customers happy every day",
                "company": "Globex",
                "location": "Remote",
            })),
            Some(&employer),
        )
        .await;
    let globex = globex.body["id"].as_str().unwrap().to_string();

    for job in [&backend, &designer, &globex] {
        let response = app
            .apply(&seeker, job, "cv.pdf", "application/pdf", &pdf_bytes())
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    // Title match; non-matching rows leave the page but still count
    let by_title = app
        .request("GET", "/api/applications/my?keyword=DESIGNER", None, Some(&seeker))
        .await;
    assert_eq!(by_title.status, StatusCode::OK);
    let items = by_title.body["applications"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["job"]["title"], "Product Designer");
    assert_eq!(by_title.body["total"], 3);

    let by_company = app
        .request("GET", "/api/applications/my?keyword=globex", None, Some(&seeker))
        .await;
    let items = by_company.body["applications"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["job"]["company"], "Globex");

    let nothing = app
        .request("GET", "/api/applications/my?keyword=zzz", None, Some(&seeker))
        .await;
    assert!(nothing.body["applications"].as_array().unwrap().is_empty());
    assert_eq!(nothing.body["total"], 3);
}
