//! Pagination tests for the list endpoint.
//!
//! Verifies that listing returns every record exactly once and in page order
//! for record counts around the page size, and that each termination signal
//! (empty page, `X-Total-Pages`, blank `X-Next-Page`) stops the loop.

mod common;

use common::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};

const PAGE_SIZE: u32 = 5;

fn records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({"key": format!("VAR_{i:03}"), "value": format!("value-{i}")}))
        .collect()
}

#[derive(Clone, Copy)]
enum Headers {
    Full,
    TotalOnly,
    NextOnly,
    None,
}

/// Mount one mock per page, plus a trailing empty page.
async fn mount_pages(server: &MockServer, all: &[Value], headers: Headers) {
    let pages: Vec<&[Value]> = all.chunks(PAGE_SIZE as usize).collect();
    let total_pages = pages.len().max(1);

    for (index, chunk) in pages.iter().enumerate() {
        let page = index + 1;
        let mut response = ResponseTemplate::new(200).set_body_json(chunk.to_vec());
        let next = if page < total_pages {
            (page + 1).to_string()
        } else {
            String::new()
        };
        match headers {
            Headers::Full => {
                response = response
                    .insert_header("X-Total-Pages", total_pages.to_string())
                    .insert_header("X-Next-Page", next);
            }
            Headers::TotalOnly => {
                response = response.insert_header("X-Total-Pages", total_pages.to_string());
            }
            Headers::NextOnly => {
                response = response.insert_header("X-Next-Page", next);
            }
            Headers::None => {}
        }

        Mock::given(method("GET"))
            .and(path(variables_path()))
            .and(query_param("page", page.to_string()))
            .and(query_param("per_page", PAGE_SIZE.to_string()))
            .respond_with(response)
            .expect(1)
            .mount(server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path(variables_path()))
        .and(query_param("page", (pages.len() + 1).to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

async fn list_keys(count: usize, headers: Headers) -> Vec<String> {
    let server = MockServer::start().await;
    mount_pages(&server, &records(count), headers).await;

    let client = client_with_page_size(&server, PAGE_SIZE);
    client
        .list()
        .await
        .expect("list should succeed")
        .into_iter()
        .map(|v| v.key)
        .collect()
}

fn expected_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("VAR_{i:03}")).collect()
}

#[tokio::test]
async fn test_list_returns_every_record_in_order() {
    let p = PAGE_SIZE as usize;
    for count in [0, 1, p, p + 1, 3 * p] {
        assert_eq!(
            list_keys(count, Headers::Full).await,
            expected_keys(count),
            "count = {count}"
        );
    }
}

#[tokio::test]
async fn test_list_with_only_total_pages_header() {
    let p = PAGE_SIZE as usize;
    for count in [1, p + 1, 3 * p] {
        assert_eq!(list_keys(count, Headers::TotalOnly).await, expected_keys(count));
    }
}

#[tokio::test]
async fn test_list_with_only_next_page_header() {
    let p = PAGE_SIZE as usize;
    for count in [1, p, 3 * p] {
        assert_eq!(list_keys(count, Headers::NextOnly).await, expected_keys(count));
    }
}

#[tokio::test]
async fn test_list_without_headers_stops_on_empty_page() {
    let p = PAGE_SIZE as usize;
    for count in [0, p, 2 * p + 2] {
        assert_eq!(list_keys(count, Headers::None).await, expected_keys(count));
    }
}

#[tokio::test]
async fn test_empty_page_wins_over_total_pages_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variables_path()))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(records(2))
                .insert_header("X-Total-Pages", "9"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(variables_path()))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .insert_header("X-Total-Pages", "9"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(variables_path()))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_with_page_size(&server, PAGE_SIZE);
    assert_eq!(client.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_page_error_fails_whole_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variables_path()))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(records(PAGE_SIZE as usize))
                .insert_header("X-Total-Pages", "2"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(variables_path()))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "401 Unauthorized"})))
        .mount(&server)
        .await;

    let client = client_with_page_size(&server, PAGE_SIZE);
    let err = client.list().await.unwrap_err();
    assert!(err.is_auth_error(), "{err:?}");
}

#[tokio::test]
async fn test_list_unknown_project_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variables_path()))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "404 Project Not Found"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list().await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.detail().contains("Project Not Found"));
}

#[tokio::test]
async fn test_list_page_endpoint_reports_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variables_path()))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("variables/list_variables.json"))
                .insert_header("X-Total-Pages", "3")
                .insert_header("X-Next-Page", "2"),
        )
        .mount(&server)
        .await;

    let http = Client::new();
    let page = endpoints::list_variables_page(&http, &server.uri(), TOKEN, PROJECT_ID, 1, 3)
        .await
        .unwrap();

    assert_eq!(page.variables.len(), 3);
    assert_eq!(page.total_pages, Some(3));
    assert_eq!(page.next_page.as_deref(), Some("2"));
    assert!(!page.is_last(1));
    assert_eq!(page.variables[2].value, "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n");
}
