//! End-to-end controller tests against a local mock backend.

use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xen_client::models::{ContactMessage, NewTicket, TicketCategory, TicketPriority};
use xen_client::XenClient;
use xen_pages::blog_list::BlogListMsg;
use xen_pages::{
    BlogDetailController, BlogListController, Phase, PricingController, SupportController,
};

fn client_against(server: &MockServer) -> XenClient {
    XenClient::new(format!("{}/api/v1", server.uri()))
}

fn empty_listing() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(r#"{"results": [], "count": 0}"#, "application/json")
}

#[tokio::test]
async fn pricing_failure_renders_empty_summary_with_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pricing/plans/summary/"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = client_against(&server);
    let mut ctrl = PricingController::new();
    ctrl.load(&client).await;

    let state = ctrl.snapshot();
    assert_eq!(state.phase, Phase::Error);
    assert!(state.summary.plans.is_empty());
    assert!(state.summary.addons.is_empty());
    assert!(state.summary.faqs.is_empty());
    assert!(state.error.is_some());
}

#[tokio::test]
async fn pricing_success_sorts_contact_plans_last() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pricing/plans/summary/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
              "plans": [
                {"id": 1, "name": "Diamond", "monthly_price": "0.00", "annual_price": "0.00"},
                {"id": 2, "name": "Gold", "monthly_price": "2500.00", "annual_price": "25000.00"},
                {"id": 3, "name": "Silver", "monthly_price": "1500.00", "annual_price": "15000.00"}
              ],
              "addons": [],
              "faqs": []
            }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_against(&server);
    let mut ctrl = PricingController::new();
    ctrl.load(&client).await;

    assert_eq!(ctrl.snapshot().phase, Phase::Success);
    let names: Vec<_> = ctrl.sorted_plans().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, ["Silver", "Gold", "Diamond"]);
}

#[tokio::test]
async fn double_like_counts_twice_even_when_the_server_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/posts/hiring-trends/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"id": 2, "title": "Hiring trends", "slug": "hiring-trends", "like_count": 10}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/posts/"))
        .respond_with(empty_listing())
        .mount(&server)
        .await;
    // Like endpoint rejects everything; the local count must move anyway.
    Mock::given(method("POST"))
        .and(path("/api/v1/blog/posts/hiring-trends/like/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_against(&server);
    let mut ctrl = BlogDetailController::new();
    ctrl.load(&client, "hiring-trends").await;
    assert_eq!(ctrl.snapshot().phase, Phase::Success);

    ctrl.like(&client).await;
    ctrl.like(&client).await;

    let post = ctrl.snapshot().post.as_ref().unwrap();
    assert_eq!(post.like_count, 12);
    assert!(post.is_liked);
}

#[tokio::test]
async fn detail_load_requests_related_posts_by_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/posts/payroll-tips/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
              "id": 5,
              "title": "Payroll tips",
              "slug": "payroll-tips",
              "category": {"id": 1, "name": "Payroll", "slug": "payroll"}
            }"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/posts/"))
        .and(query_param("category", "payroll"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"results": [{"id": 6, "title": "Tax season", "slug": "tax-season"}], "count": 1}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server);
    let mut ctrl = BlogDetailController::new();
    ctrl.load(&client, "payroll-tips").await;

    let state = ctrl.snapshot();
    assert_eq!(state.phase, Phase::Success);
    assert_eq!(state.related.len(), 1);
    assert_eq!(state.related[0].slug, "tax-season");
}

#[tokio::test]
async fn missing_post_surfaces_the_error_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/posts/gone/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_against(&server);
    let mut ctrl = BlogDetailController::new();
    ctrl.load(&client, "gone").await;

    assert_eq!(ctrl.snapshot().phase, Phase::Error);
    assert!(ctrl.snapshot().post.is_none());
}

#[tokio::test]
async fn blog_listing_loads_posts_and_facets_together() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/posts/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"results": [{"id": 1, "title": "First", "slug": "first"}], "count": 25}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/posts/featured/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/categories/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"id": 1, "name": "Payroll", "slug": "payroll"}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/tags/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let client = client_against(&server);
    let mut ctrl = BlogListController::new();
    let cmd = ctrl.dispatch(BlogListMsg::Load).expect("fetch command");
    ctrl.run(cmd, &client).await;

    let state = ctrl.snapshot();
    assert_eq!(state.phase, Phase::Success);
    assert_eq!(state.posts.len(), 1);
    assert_eq!(state.categories.len(), 1);
    assert_eq!(state.total_pages, 3);
}

#[tokio::test]
async fn support_controller_submits_tickets_and_contact_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/support/tickets/"))
        .respond_with(ResponseTemplate::new(201).set_body_raw(
            r#"{"id": 7, "title": "Leave balance wrong", "status": "open"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/support/messages/"))
        .and(body_json(serde_json::json!({
            "name": "Mina",
            "email": "mina@example.com",
            "company": "",
            "phone": "",
            "subject": "general",
            "message": "How do I export payslips?"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_against(&server);
    let ctrl = SupportController::new();

    let ticket = NewTicket {
        title: "Leave balance wrong".to_string(),
        description: "Accrued leave is off by two days.".to_string(),
        category: TicketCategory::Technical,
        priority: TicketPriority::Medium,
        name: "Mina".to_string(),
        email: "mina@example.com".to_string(),
        company: None,
        phone: None,
    };
    let created = ctrl.submit_ticket(&client, &ticket).await.unwrap();
    assert_eq!(created.id, 7);
    assert_eq!(created.status, "open");

    let message = ContactMessage {
        name: "Mina".to_string(),
        email: "mina@example.com".to_string(),
        company: String::new(),
        phone: String::new(),
        subject: "general".to_string(),
        message: "How do I export payslips?".to_string(),
    };
    ctrl.submit_contact(&client, &message).await.unwrap();
}

#[tokio::test]
async fn blog_listing_failure_keeps_the_retry_affordance() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/posts/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/posts/featured/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/categories/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/tags/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let client = client_against(&server);
    let mut ctrl = BlogListController::new();
    let cmd = ctrl.dispatch(BlogListMsg::Load).expect("fetch command");
    ctrl.run(cmd, &client).await;

    assert_eq!(ctrl.snapshot().phase, Phase::Error);

    // Retry re-issues the same query and can succeed once the backend is back.
    let retry_cmd = ctrl.dispatch(BlogListMsg::Retry).expect("retry command");
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/posts/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"results": [], "count": 0}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/posts/featured/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/categories/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/blog/tags/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    ctrl.run(retry_cmd, &client).await;
    assert_eq!(ctrl.snapshot().phase, Phase::Success);
}
