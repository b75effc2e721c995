//! Integration tests for `ApiClient` using wiremock HTTP mocks.

use roster_api::ApiClient;
use roster_core::{Error, Influencer, SortDirection, SortKey, UpdatePayload};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ApiClient {
    ApiClient::with_base_url(base_url, 30, 10).expect("client construction should not fail")
}

fn record_json(id: &str, name: &str, handle: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "name": name,
        "user_name": handle,
        "gender": "Male",
        "language": "Hindi",
        "city": "Mumbai",
        "state": "Maharashtra",
        "categoryInstagram": "Fashion",
        "categoryYouTube": "Lifestyle",
        "createdAt": "2025-03-01T10:00:00Z"
    })
}

#[tokio::test]
async fn list_returns_parsed_page() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "data": [
            record_json("a1", "Asha Rao", "asha.rao"),
            record_json("b2", "Vikram Shah", "vikram.shah"),
        ],
        "totalPages": 3,
        "currentPage": 1,
        "totalInfluencers": 23
    });

    Mock::given(method("GET"))
        .and(path("/influencers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .list(1, "", SortKey::CreatedAt, SortDirection::Descending)
        .await
        .expect("should parse page");

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "Asha Rao");
    assert_eq!(page.items[1].handle, "vikram.shah");
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_records, 23);
}

#[tokio::test]
async fn list_sends_pagination_sort_and_search() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "data": [],
        "totalPages": 1,
        "currentPage": 2
    });

    Mock::given(method("GET"))
        .and(path("/influencers"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .and(query_param("sortBy", "name"))
        .and(query_param("sortOrder", "asc"))
        .and(query_param("search", "asha"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .list(2, "asha", SortKey::Name, SortDirection::Ascending)
        .await
        .expect("query parameters should match the mock");

    assert!(page.items.is_empty());
    assert_eq!(page.current_page, 2);
}

#[tokio::test]
async fn list_omits_search_when_blank() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "data": []
    });

    Mock::given(method("GET"))
        .and(path("/influencers"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .list(1, "   ", SortKey::CreatedAt, SortDirection::Descending)
        .await
        .expect("blank search should be dropped from the query");

    assert!(page.items.is_empty());
}

#[tokio::test]
async fn list_missing_counters_fall_back() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "data": [record_json("a1", "Asha Rao", "asha.rao")]
    });

    Mock::given(method("GET"))
        .and(path("/influencers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .list(4, "", SortKey::CreatedAt, SortDirection::Descending)
        .await
        .expect("should parse page");

    assert_eq!(page.total_pages, 1);
    assert_eq!(page.current_page, 4);
    assert_eq!(page.total_records, 1);
}

#[tokio::test]
async fn list_failure_envelope_surfaces_server_message() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": false,
        "message": "Database connection lost"
    });

    Mock::given(method("GET"))
        .and(path("/influencers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list(1, "", SortKey::CreatedAt, SortDirection::Descending)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Application { .. }));
    assert_eq!(err.to_string(), "Database connection lost");
}

#[tokio::test]
async fn list_failure_envelope_without_message_uses_fallback() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "success": false, "message": "" });

    Mock::given(method("GET"))
        .and(path("/influencers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list(1, "", SortKey::CreatedAt, SortDirection::Descending)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch influencers");
}

#[tokio::test]
async fn list_blank_body_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/influencers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("   "))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list(1, "", SortKey::CreatedAt, SortDirection::Descending)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::EmptyResponse));
    assert_eq!(err.to_string(), "Empty response from server");
}

#[tokio::test]
async fn list_non_json_body_is_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/influencers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list(1, "", SortKey::CreatedAt, SortDirection::Descending)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MalformedResponse { .. }));
    assert_eq!(err.to_string(), "Invalid JSON response from server");
}

#[tokio::test]
async fn list_http_error_carries_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/influencers"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .list(1, "", SortKey::CreatedAt, SortDirection::Descending)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500 }));
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn get_returns_record_with_platform_data() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "data": {
            "_id": "abc123",
            "name": "Asha Rao",
            "user_name": "asha.rao",
            "gender": "Female",
            "instagramData": {
                "followers": 120_000,
                "genderDistribution": [
                    { "gender": "Female", "distribution": 64.5 },
                    { "gender": "Male", "distribution": 35.5 }
                ],
                "collaborationCharges": {
                    "reel": 45000.0,
                    "story": 20000.0,
                    "post": 30000.0,
                    "oneMonthDigitalRights": 15000.0
                }
            },
            "youtubeData": {
                "followers": 80_000,
                "link": "https://youtube.com/@asha.rao"
            },
            "averageEngagement": 4.2
        }
    });

    Mock::given(method("GET"))
        .and(path("/influencers/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let record = client.get("abc123").await.expect("should parse record");

    assert_eq!(record.id, "abc123");
    assert_eq!(record.instagram.followers, 120_000);
    assert_eq!(record.instagram.gender_distribution.len(), 2);
    assert_eq!(record.instagram.collaboration_charges.reel, 45000.0);
    assert_eq!(
        record.youtube.link.as_deref(),
        Some("https://youtube.com/@asha.rao")
    );
    assert_eq!(record.average_engagement, 4.2);
}

#[tokio::test]
async fn get_failure_envelope_uses_detail_fallback() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "success": false });

    Mock::given(method("GET"))
        .and(path("/influencers/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get("abc123").await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch influencer details");
}

#[tokio::test]
async fn create_posts_draft_without_identity() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/influencers"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let mut draft = Influencer::blank();
    draft.name = "Asha Rao".to_string();
    draft.handle = "asha.rao".to_string();

    let client = test_client(&server.uri());
    client.create(&draft).await.expect("create should resolve");

    let requests = server
        .received_requests()
        .await
        .expect("requests should be recorded");
    assert_eq!(requests.len(), 1);

    let sent: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("body should be JSON");
    assert_eq!(sent["name"], "Asha Rao");
    assert_eq!(sent["user_name"], "asha.rao");
    assert!(sent.get("_id").is_none(), "server assigns identity");
    assert!(sent.get("createdAt").is_none(), "server assigns timestamps");
}

#[tokio::test]
async fn replace_puts_full_record() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/influencers/abc123"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut draft = Influencer::blank();
    draft.name = "Asha Rao".to_string();

    let client = test_client(&server.uri());
    client
        .replace("abc123", &draft)
        .await
        .expect("replace should resolve");
}

#[tokio::test]
async fn update_patches_whitelisted_keys_only() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/influencers/abc123"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut draft = Influencer::blank();
    draft.name = "Asha Rao".to_string();
    draft.instagram.followers = 120_000;
    draft.youtube.link = Some("https://youtube.com/@asha.rao".to_string());

    let client = test_client(&server.uri());
    client
        .update("abc123", &UpdatePayload::from_draft(&draft))
        .await
        .expect("update should resolve");

    let requests = server
        .received_requests()
        .await
        .expect("requests should be recorded");
    let sent: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("body should be JSON");

    assert_eq!(sent["name"], "Asha Rao");
    assert_eq!(sent["instagramData.followers"], 120_000);
    assert_eq!(sent["youtubeData.link"], "https://youtube.com/@asha.rao");
    // Flat dotted keys only, never nested platform objects.
    assert!(sent.get("instagramData").is_none());
    assert!(sent.get("youtubeData").is_none());
    assert!(sent.get("instagramData.genderDistribution").is_none());
    assert!(sent.get("collaborationCharges").is_none());
}

#[tokio::test]
async fn update_http_error_carries_status() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/influencers/abc123"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let draft = Influencer::blank();
    let client = test_client(&server.uri());
    let err = client
        .update("abc123", &UpdatePayload::from_draft(&draft))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 422 }));
}

#[tokio::test]
async fn delete_resolves_on_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/influencers/abc123"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.delete("abc123").await.expect("delete should resolve");
}

#[tokio::test]
async fn delete_missing_record_carries_status() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/influencers/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.delete("missing").await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404 }));
}
