use super::*;
use crate::config::{ClientConfig, DEFAULT_USER_AGENT};
use crate::error::Error;
use crate::parse::local_time;
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PatchClient {
    let config = ClientConfig {
        remote_base_url: format!("{}/remote", server.uri()),
        steamdb_base_url: server.uri(),
        news_api_url: format!("{}/ISteamNews/GetNewsForApp/v1", server.uri()),
        ..ClientConfig::default()
    };
    PatchClient::with_config(config).unwrap()
}

async fn failing_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_query_patch_change_list_returns_patches_verbatim() {
    let server = MockServer::start().await;
    let patches = json!([
        { "version": 47820, "depots": [813781, 813782] },
        { "version": 50292, "depots": [] }
    ]);
    Mock::given(method("GET"))
        .and(path("/remote/patches.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "patches": patches.clone() })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).query_patch_change_list().await.unwrap();
    assert_eq!(result, patches);
}

#[tokio::test]
async fn test_query_manifests_sends_user_agent() {
    let server = MockServer::start().await;
    let html = r#"<html><body><div id="manifests"><table><tbody>
        <tr><td>5 February 2021 – 18:43:39 UTC</td><td>ago</td><td>7012345678901234567</td></tr>
        <tr><td>4 February 2021 – 10:00:00 UTC</td><td>ago</td><td>6012345678901234567</td></tr>
        </tbody></table></div></body></html>"#;
    Mock::given(method("GET"))
        .and(path("/depot/813781/manifests/"))
        .and(header("User-Agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .expect(1)
        .mount(&server)
        .await;

    let manifests = client_for(&server).query_manifests(813781).await.unwrap();

    assert_eq!(manifests.len(), 2);
    assert_eq!(manifests[0].date, NaiveDate::from_ymd_opt(2021, 2, 5).unwrap());
    assert_eq!(manifests[0].id, "7012345678901234567");
    assert_eq!(manifests[1].id, "6012345678901234567");
}

#[tokio::test]
async fn test_query_manifests_without_history_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/depot/1/manifests/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<html><body><div id="manifests"></div></body></html>"#),
        )
        .mount(&server)
        .await;

    let manifests = client_for(&server).query_manifests(1).await.unwrap();
    assert!(manifests.is_empty());
}

#[tokio::test]
async fn test_query_patch_list_filters_titles_and_dates() {
    let server = MockServer::start().await;
    let body = json!({
        "appnews": {
            "appid": 813780,
            "newsitems": {
                "newsitem": [
                    { "title": "Update 61321", "date": 1_650_000_000 },
                    { "title": "Patch notes coming soon", "date": 1_650_000_050 },
                    { "title": "Update 58259", "date": 1_640_000_000 },
                    { "title": "Update 56005", "date": 1_630_000_000 }
                ]
            }
        }
    });
    Mock::given(method("GET"))
        .and(path("/ISteamNews/GetNewsForApp/v1"))
        .and(query_param("appid", "813780"))
        .and(query_param("count", "999999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let since = local_time(1_630_000_000).unwrap();
    let patches = client_for(&server)
        .query_patch_list(813780, since)
        .await
        .unwrap();

    let versions: Vec<u64> = patches.iter().map(|patch| patch.version).collect();
    assert_eq!(versions, vec![61321, 58259]);
    assert_eq!(patches[0].date, local_time(1_650_000_000).unwrap());
}

#[tokio::test]
async fn test_query_patch_list_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "nope" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .query_patch_list(813780, local_time(0).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Malformed { .. }));
}

#[tokio::test]
async fn test_query_filelist_found() {
    let server = MockServer::start().await;
    let content = "resources/_common/dat/empires2_x2_p1.dat\nAoE2DE_s.exe\n";
    Mock::given(method("GET"))
        .and(path("/remote/47820/813781.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(content))
        .mount(&server)
        .await;

    let result = client_for(&server).query_filelist(47820, 813781).await.unwrap();
    assert_eq!(result.as_deref(), Some(content));
}

#[tokio::test]
async fn test_query_filelist_not_found_is_none() {
    for status in [404, 403, 500] {
        let server = failing_server(status).await;
        let result = client_for(&server).query_filelist(47820, 813781).await.unwrap();
        assert_eq!(result, None, "status {}", status);
    }
}

#[tokio::test]
async fn test_required_queries_fail_on_server_error() {
    let server = failing_server(500).await;
    let client = client_for(&server);

    let err = client.query_patch_change_list().await.unwrap_err();
    assert_eq!(err.status_code(), Some(500));

    let err = client.query_manifests(813781).await.unwrap_err();
    assert_eq!(err.status_code(), Some(500));

    let err = client
        .query_patch_list(813780, local_time(0).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(500));
}
