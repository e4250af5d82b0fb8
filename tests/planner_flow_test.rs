use httpmock::prelude::*;
use site_forms::core::planner::LAYOUT_FAILED;
use site_forms::domain::model::{LayoutForm, PlannerField, QuickStat, Region, ReportField};
use site_forms::{
    ClientConfig, FormsApi, HttpTransport, MemoryContactView, MemoryPlannerView, Page, PageEvent,
    PageOutcome, PlannerController, PreviewOutcome, SubmitOutcome,
};

type PlannerPage = Page<HttpTransport, MemoryContactView, MemoryPlannerView>;

fn filled_form() -> LayoutForm {
    LayoutForm {
        population: "50000".to_string(),
        temperature: "30".to_string(),
        weather: "hot".to_string(),
        roads: "narrow".to_string(),
    }
}

fn planner_page(server: &MockServer, view: MemoryPlannerView) -> PlannerPage {
    let config = ClientConfig::with_base_url(server.base_url());
    let transport = HttpTransport::new(&config).unwrap();
    Page::new().with_planner(PlannerController::new(
        FormsApi::new(transport, config.endpoints.clone()),
        view,
    ))
}

#[tokio::test]
async fn test_generate_layout_renders_report() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/generate-layout")
            .json_body(serde_json::json!({
                "population": "50000",
                "temperature": "30",
                "weather": "hot",
                "roads": "narrow"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": true,
                "layout_image": "/img/x.png",
                "report": {
                    "population": "50000",
                    "density": "High",
                    "temperature": "30°C",
                    "weather": "hot",
                    "road_width": "2",
                    "road_description": "Narrow shaded roads",
                    "timestamp": "2024-01-01T00:00:00Z",
                    "amenities": ["Market", "Well"],
                    "recommendations": ["Add shade"]
                }
            }));
    });

    let view = MemoryPlannerView::new(filled_form());
    let page = planner_page(&server, view.clone());

    let outcome = page.handle(PageEvent::LayoutSubmitted).await;

    api_mock.assert();
    assert_eq!(outcome, PageOutcome::Submitted(SubmitOutcome::Completed));

    let snapshot = view.snapshot();
    assert!(snapshot.is_visible(Region::Output));
    assert!(!snapshot.is_visible(Region::Loading));
    assert!(!snapshot.is_visible(Region::Placeholder));
    assert_eq!(snapshot.image_source.as_deref(), Some("/img/x.png"));
    assert_eq!(snapshot.amenities.len(), 2);
    assert_eq!(snapshot.recommendations.len(), 1);
    assert_eq!(snapshot.report_text(ReportField::Population), Some("50000"));
    assert_eq!(snapshot.report_text(ReportField::RoadWidth), Some("2"));
    assert_eq!(
        snapshot.report_text(ReportField::Timestamp),
        Some("2024-01-01T00:00:00Z")
    );
}

#[tokio::test]
async fn test_generate_layout_server_error_restores_placeholder() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/generate-layout");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": "invalid literal for int()"}));
    });

    let view = MemoryPlannerView::new(filled_form());
    let page = planner_page(&server, view.clone());

    let outcome = page.handle(PageEvent::LayoutSubmitted).await;

    api_mock.assert();
    assert_eq!(outcome, PageOutcome::Submitted(SubmitOutcome::Failed));

    let snapshot = view.snapshot();
    assert!(!snapshot.is_visible(Region::Loading));
    assert!(snapshot.is_visible(Region::Placeholder));
    assert!(!snapshot.is_visible(Region::Output));
    assert_eq!(snapshot.last_message().unwrap().text, LAYOUT_FAILED);
}

#[tokio::test]
async fn test_field_changes_trigger_recommendations_once_ready() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/get-recommendations")
            .json_body(serde_json::json!({
                "population": "250000",
                "temperature": "5",
                "weather": "Snow"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "density": "Very High",
                "road_width": 4,
                "amenities": [
                    "Parks & Green Spaces",
                    "Community Centers",
                    "Recreation Halls",
                    "Snow Removal Infrastructure",
                    "Public Transit Hubs"
                ]
            }));
    });

    let view = MemoryPlannerView::default();
    let page = planner_page(&server, view.clone());

    view.set_field(PlannerField::Population, "250000");
    assert_eq!(
        page.handle(PageEvent::PlannerFieldChanged(PlannerField::Population))
            .await,
        PageOutcome::Previewed(PreviewOutcome::Skipped)
    );
    view.set_field(PlannerField::Temperature, "5");
    assert_eq!(
        page.handle(PageEvent::PlannerFieldChanged(PlannerField::Temperature))
            .await,
        PageOutcome::Previewed(PreviewOutcome::Skipped)
    );
    api_mock.assert_hits(0);

    view.set_field(PlannerField::Weather, "Snow");
    assert_eq!(
        page.handle(PageEvent::PlannerFieldChanged(PlannerField::Weather))
            .await,
        PageOutcome::Previewed(PreviewOutcome::Updated)
    );
    api_mock.assert_hits(1);

    let snapshot = view.snapshot();
    assert!(snapshot.is_visible(Region::QuickStats));
    assert_eq!(snapshot.stat(QuickStat::Density), Some("Very High"));
    assert_eq!(snapshot.stat(QuickStat::RoadWidth), Some("Level 4/4"));
    assert_eq!(snapshot.stat(QuickStat::AmenitiesCount), Some("5"));
    // the preview never touches the main report
    assert!(snapshot.is_visible(Region::Placeholder));
    assert!(snapshot.messages.is_empty());
}

#[tokio::test]
async fn test_submit_with_any_field_blank_sends_nothing() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/generate-layout");
        then.status(200).json_body(serde_json::json!({"success": false}));
    });

    for field in PlannerField::ALL {
        let mut form = filled_form();
        form.set(field, "");
        let view = MemoryPlannerView::new(form);
        let page = planner_page(&server, view.clone());

        assert_eq!(
            page.handle(PageEvent::LayoutSubmitted).await,
            PageOutcome::Submitted(SubmitOutcome::Invalid)
        );
        assert!(view.snapshot().visibility_log.is_empty());
    }

    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_missing_population_blocks_recommendations() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/get-recommendations");
        then.status(200).json_body(serde_json::json!({
            "density": "Low",
            "road_width": 1,
            "amenities": []
        }));
    });

    let view = MemoryPlannerView::default();
    let page = planner_page(&server, view.clone());

    view.set_field(PlannerField::Temperature, "18");
    view.set_field(PlannerField::Weather, "Rain");
    assert_eq!(
        page.handle(PageEvent::PlannerFieldChanged(PlannerField::Weather))
            .await,
        PageOutcome::Previewed(PreviewOutcome::Skipped)
    );

    api_mock.assert_hits(0);
    assert!(!view.snapshot().is_visible(Region::QuickStats));
}

#[tokio::test]
async fn test_recommendation_error_is_silent() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/get-recommendations");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": "could not convert string to float: 'warm'"}));
    });

    let mut form = filled_form();
    form.temperature = "warm".to_string();
    let view = MemoryPlannerView::new(form);
    let page = planner_page(&server, view.clone());

    let outcome = page
        .handle(PageEvent::PlannerFieldChanged(PlannerField::Roads))
        .await;

    api_mock.assert();
    assert_eq!(outcome, PageOutcome::Previewed(PreviewOutcome::Failed));

    let snapshot = view.snapshot();
    assert!(snapshot.messages.is_empty());
    assert!(snapshot.visibility_log.is_empty());
    assert!(snapshot.stats.is_empty());
}

#[tokio::test]
async fn test_planner_page_ignores_contact_events() {
    let server = MockServer::start();
    let page = planner_page(&server, MemoryPlannerView::new(filled_form()));

    assert_eq!(
        page.handle(PageEvent::ContactSubmitted).await,
        PageOutcome::Detached
    );
    assert!(page.contact().is_none());
}
