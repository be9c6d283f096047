//! ProgressService: the latest-entry special case and row CRUD against a
//! fake backend.

mod common;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fittrack_data::models::{CreateProgress, ProgressMetrics, UpdateProgress};
use fittrack_data::services::ProgressService;
use fittrack_data::Error;

fn service(mock_server: &MockServer) -> ProgressService {
    ProgressService::new(common::test_client(mock_server))
}

#[tokio::test]
async fn get_progress_lists_newest_first() {
    let mock_server = MockServer::start().await;
    let user_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/progress"))
        .and(query_param("user_id", format!("eq.{user_id}")))
        .and(query_param("order", "date.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            common::progress_row(Uuid::new_v4(), user_id, "2024-03-01"),
            common::progress_row(Uuid::new_v4(), user_id, "2024-02-01"),
        ])))
        .mount(&mock_server)
        .await;

    let entries = service(&mock_server)
        .get_progress(user_id)
        .await
        .expect("get_progress failed");

    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0].date,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    );
}

#[tokio::test]
async fn latest_progress_is_absent_for_a_new_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/progress"))
        .respond_with(common::no_rows_response())
        .mount(&mock_server)
        .await;

    let latest = service(&mock_server)
        .get_latest_progress(Uuid::new_v4())
        .await
        .expect("no rows must not be an error");

    assert_eq!(latest, None);
}

#[tokio::test]
async fn latest_progress_requests_the_single_newest_row() {
    let mock_server = MockServer::start().await;
    let user_id = Uuid::new_v4();

    // Rows exist for 2024-01-01, 2024-02-01, 2024-03-01; the backend
    // resolves `order=date.desc&limit=1` to the March entry.
    Mock::given(method("GET"))
        .and(path("/rest/v1/progress"))
        .and(query_param("user_id", format!("eq.{user_id}")))
        .and(query_param("order", "date.desc"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::progress_row(Uuid::new_v4(), user_id, "2024-03-01")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let latest = service(&mock_server)
        .get_latest_progress(user_id)
        .await
        .expect("get_latest_progress failed")
        .expect("a latest entry exists");

    assert_eq!(latest.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
}

#[tokio::test]
async fn get_progress_by_id_maps_no_rows_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/progress"))
        .respond_with(common::no_rows_response())
        .mount(&mock_server)
        .await;

    let err = service(&mock_server)
        .get_progress_by_id(Uuid::new_v4())
        .await
        .unwrap_err();

    assert_matches!(err, Error::NotFound);
}

#[tokio::test]
async fn create_progress_posts_metrics_document() {
    let mock_server = MockServer::start().await;
    let user_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/rest/v1/progress"))
        .and(body_json(json!({
            "user_id": user_id,
            "date": "2024-03-01",
            "metrics": {
                "weight": 82.5
            }
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(common::progress_row(Uuid::new_v4(), user_id, "2024-03-01")),
        )
        .mount(&mock_server)
        .await;

    let created = service(&mock_server)
        .create_progress(CreateProgress {
            user_id,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            metrics: ProgressMetrics {
                weight: Some(82.5),
                ..ProgressMetrics::default()
            },
            photos: None,
            notes: None,
        })
        .await
        .expect("create_progress failed");

    assert_eq!(created.user_id, user_id);
}

#[tokio::test]
async fn update_progress_sends_only_supplied_fields() {
    let mock_server = MockServer::start().await;
    let progress_id = Uuid::new_v4();

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/progress"))
        .and(query_param("id", format!("eq.{progress_id}")))
        .and(body_json(json!({ "notes": "Deload week" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::progress_row(progress_id, Uuid::new_v4(), "2024-03-01")),
        )
        .mount(&mock_server)
        .await;

    service(&mock_server)
        .update_progress(
            progress_id,
            UpdateProgress {
                notes: Some("Deload week".to_string()),
                ..UpdateProgress::default()
            },
        )
        .await
        .expect("update_progress failed");
}

#[tokio::test]
async fn delete_progress_issues_a_scoped_delete() {
    let mock_server = MockServer::start().await;
    let progress_id = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/progress"))
        .and(query_param("id", format!("eq.{progress_id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    service(&mock_server)
        .delete_progress(progress_id)
        .await
        .expect("delete_progress failed");
}
