use cinepulse_metadata::MetadataError;
use cinepulse_metadata::omdb::OmdbClient;
use cinepulse_metadata::provider::{CatalogProvider, RatingsProvider, VideoStatsProvider};
use cinepulse_metadata::tmdb::TmdbClient;
use cinepulse_metadata::youtube::YoutubeClient;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Base URL on which nothing is listening.
fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn tmdb(server: &MockServer) -> TmdbClient {
    TmdbClient::new("test_api_key".into(), reqwest::Client::new()).with_base_url(server.uri())
}

fn youtube(server: &MockServer) -> YoutubeClient {
    YoutubeClient::new("test_api_key".into(), reqwest::Client::new()).with_base_url(server.uri())
}

fn omdb(server: &MockServer) -> OmdbClient {
    OmdbClient::new("test_api_key".into(), reqwest::Client::new()).with_base_url(server.uri())
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn popular_list_is_truncated_to_three() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .and(query_param("api_key", "test_api_key"))
        .and(query_param("language", "en-US"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [
                { "id": 11, "title": "First" },
                { "id": 22, "title": "Second" },
                { "id": 33, "title": "Third" },
                { "id": 44, "title": "Fourth" },
                { "id": 55, "title": "Fifth" }
            ]
        })))
        .mount(&server)
        .await;

    let popular = tmdb(&server).fetch_popular().await.unwrap();
    assert_eq!(popular.len(), 3);
    assert_eq!(popular[0].catalog_id, "11");
    assert_eq!(popular[2].title, "Third");
}

#[tokio::test]
async fn popular_list_server_error_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(tmdb(&server).fetch_popular().await.unwrap().is_empty());
}

#[tokio::test]
async fn popular_list_network_failure_is_typed_error() {
    let client = TmdbClient::new("test_api_key".into(), reqwest::Client::new())
        .with_base_url(unreachable_url());

    let result = client.fetch_popular().await;
    assert!(matches!(result, Err(MetadataError::Network(_))));
}

#[tokio::test]
async fn details_request_appends_credits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/12345"))
        .and(query_param("api_key", "test_api_key"))
        .and(query_param("append_to_response", "credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Test Movie",
            "vote_average": 7.1,
            "vote_count": 1000,
            "credits": {
                "cast": [{ "name": "Lead Actor", "order": 0 }],
                "crew": [{ "name": "The Director", "job": "Director" }]
            }
        })))
        .mount(&server)
        .await;

    let details = tmdb(&server)
        .fetch_details_with_credits("12345")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(details.title, "Test Movie");
    assert_eq!(details.rating_count, 1000);
    assert_eq!(details.director.as_deref(), Some("The Director"));
    assert_eq!(details.lead_actor.as_deref(), Some("Lead Actor"));
    assert_eq!(details.budget, 0);
}

#[tokio::test]
async fn details_server_error_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/12345"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let details = tmdb(&server).fetch_details_with_credits("12345").await.unwrap();
    assert!(details.is_none());
}

// ---------------------------------------------------------------------------
// Video
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_returns_video_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("key", "test_api_key"))
        .and(query_param("q", "The Matrix"))
        .and(query_param("part", "snippet"))
        .and(query_param("type", "video"))
        .and(query_param("maxResults", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "id": { "videoId": "v1" } },
                { "id": { "videoId": "v2" } }
            ]
        })))
        .mount(&server)
        .await;

    let ids = youtube(&server).search_by_title("The Matrix").await.unwrap();
    assert_eq!(ids, vec!["v1", "v2"]);
}

#[tokio::test]
async fn search_forbidden_is_quota_exceeded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = youtube(&server).search_by_title("The Matrix").await;
    assert!(matches!(result, Err(MetadataError::QuotaExceeded)));
}

#[tokio::test]
async fn search_other_failure_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let ids = youtube(&server).search_by_title("The Matrix").await.unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn stats_are_parsed_from_strings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "v1"))
        .and(query_param("part", "statistics,snippet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "snippet": { "channelTitle": "Studio", "title": "Trailer" },
                "statistics": { "viewCount": "1000", "likeCount": "100" }
            }]
        })))
        .mount(&server)
        .await;

    let stat = youtube(&server).fetch_stats("v1").await.unwrap();
    let summary = stat.summary().unwrap();
    assert_eq!(summary.channel_name, "Studio");
    assert_eq!(summary.views, 1000);
    assert_eq!(summary.likes, 100);
}

#[tokio::test]
async fn stats_failure_is_empty_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let stat = youtube(&server).fetch_stats("v1").await.unwrap();
    let summary = stat.summary().unwrap();
    assert_eq!(summary.channel_name, "");
    assert_eq!(summary.video_title, "");
    assert_eq!(summary.views, 0);
    assert_eq!(summary.likes, 0);
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ratings_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("apikey", "test_api_key"))
        .and(query_param("t", "The Matrix"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Title": "The Matrix",
            "Director": "Lana Wachowski",
            "Actors": "Keanu Reeves, Laurence Fishburne",
            "imdbVotes": "1234",
            "imdbRating": "8.5",
            "Response": "True"
        })))
        .mount(&server)
        .await;

    let client = omdb(&server);
    let raw = client.lookup("The Matrix").await.unwrap().unwrap();
    assert_eq!(raw["Title"], "The Matrix");

    let record = client.get_movie_info("The Matrix").await.unwrap().unwrap();
    assert_eq!(record.director, "Lana Wachowski");
    assert_eq!(record.lead_actor, "Keanu Reeves");
    assert_eq!(record.review_count, "1234");
    assert_eq!(record.average_review, "8.5");
}

#[tokio::test]
async fn ratings_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Response": "False", "Error": "Movie not found!" })),
        )
        .mount(&server)
        .await;

    let client = omdb(&server);
    let raw = client.lookup("Non-existent Movie").await.unwrap();
    assert_eq!(raw, Some(json!({ "Response": "False", "Error": "Movie not found!" })));

    assert!(client.get_movie_info("Non-existent Movie").await.unwrap().is_none());
}

#[tokio::test]
async fn ratings_malformed_body_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    assert!(omdb(&server).lookup("The Matrix").await.unwrap().is_none());
}

#[tokio::test]
async fn ratings_server_error_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert!(omdb(&server).get_movie_info("The Matrix").await.unwrap().is_none());
}
