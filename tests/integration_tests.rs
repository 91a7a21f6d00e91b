// Integration tests for the VCMatch client workflow
//
// The three network boundaries are faked with mockito; the controller points
// at the mock server through its endpoint configuration.

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use vcmatch_client::config::Settings;
use vcmatch_client::models::View;
use vcmatch_client::workflow::{MatchingController, WorkflowError};

fn settings_for(server: &ServerGuard) -> Settings {
    let mut settings = Settings::default();
    settings.endpoints.lead_intake_url = format!("{}/intake", server.url());
    settings.endpoints.backend_base_url = server.url();
    settings
}

fn filled_controller(server: &ServerGuard) -> MatchingController {
    let mut controller = MatchingController::new(&settings_for(server));
    controller.set_email("founder@example.com");
    controller.set_startup_name("Acme Robotics");
    controller.set_website("https://acme.example");
    controller.set_funding_stage("seed");
    controller.toggle_industry("FinTech");
    controller.toggle_industry("saas");
    controller
}

fn matching_body(count: usize, page: u32, total_pages: u32, investor: &str) -> String {
    json!({
        "success": true,
        "sectors": ["FinTech", "SaaS"],
        "count": count,
        "matches": [{
            "id": 1,
            "investor_name": investor,
            "partner_name": "Jordan Lee",
            "partner_email": "jordan@fund.example",
            "fund_focus_sectors": "FinTech SaaS",
            "fund_stage": "Seed, Series A",
            "website": "https://fund.example",
            "match_score": 0.5
        }],
        "page": page,
        "per_page": 21,
        "total_pages": total_pages
    })
    .to_string()
}

fn startup_submit_body() -> String {
    json!({
        "success": true,
        "message": "Startup information saved successfully",
        "startup_id": 7
    })
    .to_string()
}

#[tokio::test]
async fn test_submit_pipeline_success_transitions_to_results() {
    let mut server = Server::new_async().await;

    let intake = server
        .mock("POST", "/intake")
        .match_body(Matcher::PartialJson(json!({
            "startupName": "Acme Robotics",
            "industries": "FinTech, SaaS"
        })))
        .with_status(200)
        .with_body(r#"{"success": "true"}"#)
        .create_async()
        .await;

    let startup = server
        .mock("POST", "/api/startups/submit")
        .match_body(Matcher::PartialJson(json!({
            "company_name": "Acme Robotics",
            "founder_email": "founder@example.com",
            "sector": "FinTech, SaaS",
            "funding_stage": "seed"
        })))
        .with_status(200)
        .with_body(startup_submit_body())
        .create_async()
        .await;

    let find = server
        .mock("POST", "/api/matching/find")
        .match_body(Matcher::PartialJson(json!({
            "sectors": ["FinTech", "SaaS"],
            "funding_stage": "seed",
            "page": 1,
            "per_page": 21
        })))
        .with_status(200)
        .with_body(matching_body(42, 1, 3, "Example Capital"))
        .create_async()
        .await;

    let mut controller = filled_controller(&server);
    controller.submit().await.unwrap();

    intake.assert_async().await;
    startup.assert_async().await;
    find.assert_async().await;

    assert_eq!(controller.view(), View::Results);
    assert!(!controller.is_busy());
    assert!(controller.last_error().is_none());

    let result = controller.result().unwrap();
    assert_eq!(result.count, 42);
    assert_eq!(result.page, 1);
    assert_eq!(result.total_pages, 3);
    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].investor_name, "Example Capital");
}

#[tokio::test]
async fn test_lead_failure_halts_pipeline_before_backend() {
    let mut server = Server::new_async().await;

    let _intake = server
        .mock("POST", "/intake")
        .with_status(500)
        .create_async()
        .await;
    let startup = server
        .mock("POST", "/api/startups/submit")
        .expect(0)
        .create_async()
        .await;
    let find = server
        .mock("POST", "/api/matching/find")
        .expect(0)
        .create_async()
        .await;

    let mut controller = filled_controller(&server);
    let err = controller.submit().await.unwrap_err();

    assert!(matches!(err, WorkflowError::LeadSubmission(_)));
    assert_eq!(err.to_string(), "Failed to submit form data");
    assert_eq!(controller.view(), View::Form);
    assert_eq!(controller.last_error(), Some("Failed to submit form data"));
    assert!(!controller.is_busy());

    startup.assert_async().await;
    find.assert_async().await;
}

#[tokio::test]
async fn test_startup_failure_issues_no_matching_query() {
    let mut server = Server::new_async().await;

    let _intake = server
        .mock("POST", "/intake")
        .with_status(200)
        .create_async()
        .await;
    let _startup = server
        .mock("POST", "/api/startups/submit")
        .with_status(500)
        .create_async()
        .await;
    let find = server
        .mock("POST", "/api/matching/find")
        .expect(0)
        .create_async()
        .await;

    let mut controller = filled_controller(&server);
    let err = controller.submit().await.unwrap_err();

    assert!(matches!(err, WorkflowError::StartupSubmission(_)));
    assert_eq!(err.to_string(), "Failed to submit startup information");
    assert_eq!(controller.view(), View::Form);
    assert!(controller.result().is_none());

    find.assert_async().await;
}

#[tokio::test]
async fn test_matching_failure_keeps_form_view() {
    let mut server = Server::new_async().await;

    let _intake = server
        .mock("POST", "/intake")
        .with_status(200)
        .create_async()
        .await;
    let _startup = server
        .mock("POST", "/api/startups/submit")
        .with_status(200)
        .with_body(startup_submit_body())
        .create_async()
        .await;
    let _find = server
        .mock("POST", "/api/matching/find")
        .with_status(503)
        .create_async()
        .await;

    let mut controller = filled_controller(&server);
    let err = controller.submit().await.unwrap_err();

    assert!(matches!(err, WorkflowError::MatchingQuery(_)));
    assert_eq!(err.to_string(), "Failed to find matching investors");
    assert_eq!(controller.view(), View::Form);
    assert!(controller.result().is_none());
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn test_incomplete_form_submit_is_a_no_op() {
    let mut server = Server::new_async().await;

    let intake = server
        .mock("POST", "/intake")
        .expect(0)
        .create_async()
        .await;

    let mut controller = MatchingController::new(&settings_for(&server));
    controller.set_email("founder@example.com");
    // No startup name, no industries.
    controller.submit().await.unwrap();

    assert_eq!(controller.view(), View::Form);
    intake.assert_async().await;
}

async fn submitted_controller(server: &mut ServerGuard) -> MatchingController {
    let _intake = server
        .mock("POST", "/intake")
        .with_status(200)
        .create_async()
        .await;
    let _startup = server
        .mock("POST", "/api/startups/submit")
        .with_status(200)
        .with_body(startup_submit_body())
        .create_async()
        .await;
    let _find = server
        .mock("POST", "/api/matching/find")
        .match_body(Matcher::PartialJson(json!({"page": 1})))
        .with_status(200)
        .with_body(matching_body(42, 1, 3, "Example Capital"))
        .create_async()
        .await;

    let mut controller = filled_controller(server);
    controller.submit().await.unwrap();
    assert_eq!(controller.view(), View::Results);
    controller
}

#[tokio::test]
async fn test_page_change_replaces_matches_but_freezes_count() {
    let mut server = Server::new_async().await;
    let mut controller = submitted_controller(&mut server).await;

    // The backend reports a drifted count on page 2; the display total must
    // stay frozen at the submission-time value.
    let page_two = server
        .mock("POST", "/api/matching/find")
        .match_body(Matcher::PartialJson(json!({
            "sectors": ["FinTech", "SaaS"],
            "funding_stage": "seed",
            "page": 2,
            "per_page": 21
        })))
        .with_status(200)
        .with_body(matching_body(999, 2, 3, "Second Page Ventures"))
        .create_async()
        .await;

    controller.change_page(2).await.unwrap();
    page_two.assert_async().await;

    let result = controller.result().unwrap();
    assert_eq!(result.page, 2);
    assert_eq!(result.count, 42, "total count is fixed by the original query");
    assert_eq!(result.matches[0].investor_name, "Second Page Ventures");
    assert_eq!(controller.page_buttons(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_page_change_rejects_current_and_out_of_range_pages() {
    let mut server = Server::new_async().await;
    let mut controller = submitted_controller(&mut server).await;

    let extra_find = server
        .mock("POST", "/api/matching/find")
        .match_body(Matcher::PartialJson(json!({"page": 99})))
        .expect(0)
        .create_async()
        .await;

    controller.change_page(1).await.unwrap(); // current page
    controller.change_page(0).await.unwrap(); // below range
    controller.change_page(99).await.unwrap(); // above range

    extra_find.assert_async().await;
    let result = controller.result().unwrap();
    assert_eq!(result.page, 1);
    assert_eq!(result.matches[0].investor_name, "Example Capital");
    assert!(controller.last_error().is_none());
}

#[tokio::test]
async fn test_page_change_failure_leaves_previous_page_intact() {
    let mut server = Server::new_async().await;
    let mut controller = submitted_controller(&mut server).await;

    let _page_two = server
        .mock("POST", "/api/matching/find")
        .match_body(Matcher::PartialJson(json!({"page": 2})))
        .with_status(500)
        .create_async()
        .await;

    let err = controller.change_page(2).await.unwrap_err();

    assert!(matches!(err, WorkflowError::PageChange(_)));
    assert_eq!(controller.last_error(), Some("Failed to load results page"));
    assert!(!controller.is_busy());

    let result = controller.result().unwrap();
    assert_eq!(result.page, 1, "failed page change must not move the cursor");
    assert_eq!(result.matches[0].investor_name, "Example Capital");
}

#[tokio::test]
async fn test_back_returns_to_form_and_resets_cursor() {
    let mut server = Server::new_async().await;
    let mut controller = submitted_controller(&mut server).await;

    let _page_two = server
        .mock("POST", "/api/matching/find")
        .match_body(Matcher::PartialJson(json!({"page": 2})))
        .with_status(200)
        .with_body(matching_body(42, 2, 3, "Second Page Ventures"))
        .create_async()
        .await;

    controller.change_page(2).await.unwrap();
    controller.back();

    assert_eq!(controller.view(), View::Form);
    let result = controller.result().unwrap();
    assert_eq!(result.page, 1);
    // Match data survives until the next submission.
    assert!(!result.matches.is_empty());

    // Page changes are rejected outside the results view.
    let find_after_back = server
        .mock("POST", "/api/matching/find")
        .match_body(Matcher::PartialJson(json!({"page": 3})))
        .expect(0)
        .create_async()
        .await;
    controller.change_page(3).await.unwrap();
    find_after_back.assert_async().await;
}

#[tokio::test]
async fn test_fetch_sectors_and_health() {
    use std::time::Duration;
    use vcmatch_client::services::BackendClient;

    let mut server = Server::new_async().await;

    let _sectors = server
        .mock("GET", "/api/matching/sectors")
        .with_status(200)
        .with_body(json!({"success": true, "sectors": ["AI/ML", "FinTech"]}).to_string())
        .create_async()
        .await;
    let _health = server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_body(json!({"status": "OK", "message": "VC Matching API is running"}).to_string())
        .create_async()
        .await;

    let backend = BackendClient::new(server.url(), Duration::from_secs(5));

    let sectors = backend.fetch_sectors().await.unwrap();
    assert!(sectors.success);
    assert_eq!(sectors.sectors, vec!["AI/ML", "FinTech"]);

    let health = backend.health().await.unwrap();
    assert_eq!(health.status, "OK");
}
