//! YouTube Module Tests
//!
//! ## Test Scopes
//! - **Protocol**: Decoding real-shaped `search.list` / `videos.list` bodies.
//! - **Counters**: String counters, hidden counters and garbage values.
//! - **Client**: Credential handling and the `publishedAfter` window, without network.

#[cfg(test)]
mod tests {
    use crate::error::RankError;
    use crate::ranking::types::VideoCandidate;
    use crate::youtube::client::{published_after, VideoSource, YouTubeClient};
    use crate::ranking::engine::HashtagRanker;
    use crate::ranking::types::RankOptions;
    use crate::youtube::protocol::{
        count_value, parse_count, SearchListResponse, VideoListResponse,
    };
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // ============================================================
    // PROTOCOL TESTS - search.list
    // ============================================================

    #[test]
    fn test_search_response_extracts_video_ids() {
        let body = r#"{
            "kind": "youtube#searchListResponse",
            "items": [
                {"kind": "youtube#searchResult", "id": {"kind": "youtube#video", "videoId": "abc123"}},
                {"kind": "youtube#searchResult", "id": {"kind": "youtube#channel", "channelId": "UCxyz"}},
                {"kind": "youtube#searchResult", "id": {"kind": "youtube#video", "videoId": "def456"}}
            ]
        }"#;

        let response: SearchListResponse = serde_json::from_str(body).unwrap();

        // Channel hit has no videoId and is skipped
        assert_eq!(response.video_ids(), vec!["abc123", "def456"]);
    }

    #[test]
    fn test_search_response_without_items() {
        let response: SearchListResponse =
            serde_json::from_str(r#"{"kind": "youtube#searchListResponse"}"#).unwrap();

        assert!(response.video_ids().is_empty());
    }

    // ============================================================
    // PROTOCOL TESTS - videos.list
    // ============================================================

    #[test]
    fn test_video_response_converts_to_candidates() {
        let body = r##"{
            "items": [
                {
                    "id": "abc123",
                    "snippet": {
                        "title": "Cold brew in 60s #coffee",
                        "description": "Recipe below #ColdBrew",
                        "tags": ["coffee", "cold brew"]
                    },
                    "statistics": {"viewCount": "15234", "likeCount": "812", "commentCount": "40"}
                }
            ]
        }"##;

        let response: VideoListResponse = serde_json::from_str(body).unwrap();
        let candidates: Vec<VideoCandidate> =
            response.items.into_iter().map(VideoCandidate::from).collect();

        assert_eq!(candidates.len(), 1);
        let video = &candidates[0];
        assert_eq!(video.id, "abc123");
        assert_eq!(video.title, "Cold brew in 60s #coffee");
        assert_eq!(video.tags, vec!["coffee", "cold brew"]);
        assert_eq!(video.views, 15234);
        assert_eq!(video.likes, 812);
    }

    #[test]
    fn test_video_with_hidden_likes_and_no_tags() {
        let body = r#"{
            "items": [
                {"id": "v1", "snippet": {"title": "t", "description": ""}, "statistics": {"viewCount": "10"}}
            ]
        }"#;

        let response: VideoListResponse = serde_json::from_str(body).unwrap();
        let video = VideoCandidate::from(response.items.into_iter().next().unwrap());

        assert!(video.tags.is_empty());
        assert_eq!(video.views, 10);
        assert_eq!(video.likes, 0);
    }

    #[test]
    fn test_video_without_snippet_or_statistics() {
        let response: VideoListResponse =
            serde_json::from_str(r#"{"items": [{"id": "bare"}]}"#).unwrap();
        let video = VideoCandidate::from(response.items.into_iter().next().unwrap());

        assert_eq!(video.id, "bare");
        assert!(video.title.is_empty());
        assert!(video.description.is_empty());
        assert_eq!(video.views, 0);
    }

    #[test]
    fn test_video_with_numeric_counters() {
        let body = r##"{"items":[{"id":"v1","snippet":{"title":"#cat"},"statistics":{"viewCount":123,"likeCount":4}}]}"##;

        let response: VideoListResponse = serde_json::from_str(body).unwrap();
        let video = VideoCandidate::from(response.items.into_iter().next().unwrap());

        assert_eq!(video.views, 123);
        assert_eq!(video.likes, 4);
    }

    #[test]
    fn test_video_with_garbage_counters_counts_zero() {
        let body = r#"{"items":[{"id":"v1","statistics":{"viewCount":"lots","likeCount":true}}]}"#;

        let response: VideoListResponse = serde_json::from_str(body).unwrap();
        let video = VideoCandidate::from(response.items.into_iter().next().unwrap());

        assert_eq!(video.views, 0);
        assert_eq!(video.likes, 0);
    }

    #[test]
    fn test_video_with_null_text_fields() {
        let body = r##"{"items":[
            {"id":"v1","snippet":{"title":null,"description":"#cat","tags":null}},
            {"id":"v2","snippet":{"title":"#dog","description":null}}
        ]}"##;

        let response: VideoListResponse = serde_json::from_str(body).unwrap();
        let videos: Vec<VideoCandidate> =
            response.items.into_iter().map(VideoCandidate::from).collect();

        assert_eq!(videos.len(), 2);
        assert!(videos[0].title.is_empty());
        assert_eq!(videos[0].description, "#cat");
        assert!(videos[0].tags.is_empty());
        assert_eq!(videos[1].title, "#dog");
        assert!(videos[1].description.is_empty());
    }

    // ============================================================
    // COUNTER TESTS
    // ============================================================

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(Some("42")), 42);
        assert_eq!(parse_count(Some(" 7 ")), 7);
        assert_eq!(parse_count(None), 0);
        assert_eq!(parse_count(Some("")), 0);
        assert_eq!(parse_count(Some("1.5k")), 0);
        assert_eq!(parse_count(Some("-3")), 0);
    }

    #[test]
    fn test_count_value_accepts_strings_and_integers() {
        assert_eq!(count_value(Some(&json!("15"))), 15);
        assert_eq!(count_value(Some(&json!(15))), 15);
        assert_eq!(count_value(Some(&json!(-2))), 0);
        assert_eq!(count_value(Some(&json!(1.5))), 0);
        assert_eq!(count_value(Some(&json!(true))), 0);
        assert_eq!(count_value(Some(&json!(null))), 0);
        assert_eq!(count_value(None), 0);
    }

    // ============================================================
    // CLIENT TESTS
    // ============================================================

    #[test]
    fn test_published_after_format() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 30, 45).unwrap();

        assert_eq!(published_after(now, 30), "2024-03-01T12:30:45Z");
    }

    fn client_without_key() -> YouTubeClient {
        // Unroutable base: the test fails loudly if a request is ever sent
        YouTubeClient::new("http://127.0.0.1:9/", None, Duration::from_millis(200), 30).unwrap()
    }

    #[tokio::test]
    async fn test_search_without_credential_fails_before_request() {
        let client = client_without_key();
        assert!(!client.has_credential());

        let result = client.search_video_ids("coffee", 20).await;

        assert!(matches!(result, Err(RankError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_details_without_credential_fails_before_request() {
        let client = client_without_key();

        let result = client.fetch_video_details(&["abc".to_string()]).await;

        assert!(matches!(result, Err(RankError::MissingCredential)));
    }

    #[test]
    fn test_blank_credential_counts_as_missing() {
        let client = YouTubeClient::new(
            "https://example.invalid",
            Some("  ".to_string()),
            Duration::from_secs(1),
            30,
        )
        .unwrap();

        assert!(!client.has_credential());
    }

    #[tokio::test]
    async fn test_details_with_no_ids_skips_request() {
        let client = YouTubeClient::new(
            "http://127.0.0.1:9",
            Some("key".to_string()),
            Duration::from_millis(200),
            30,
        )
        .unwrap();

        let videos = client.fetch_video_details(&[]).await.unwrap();

        assert!(videos.is_empty());
    }

    // ============================================================
    // CLIENT TESTS - against a mock YouTube server
    // ============================================================

    fn client_for(server: &MockServer) -> YouTubeClient {
        YouTubeClient::new(
            &server.uri(),
            Some("test-key".to_string()),
            Duration::from_secs(5),
            30,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_sends_expected_parameters() {
        // ARRANGE
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("part", "snippet"))
            .and(query_param("q", "cold brew"))
            .and(query_param("type", "video"))
            .and(query_param("order", "relevance"))
            .and(query_param("maxResults", "50"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {"id": {"videoId": "a1"}},
                    {"id": {"videoId": "b2"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        // ACT: 80 is above the platform limit and gets clamped
        let ids = client_for(&server)
            .search_video_ids("cold brew", 80)
            .await
            .unwrap();

        // ASSERT
        assert_eq!(ids, vec!["a1", "b2"]);

        let requests = server.received_requests().await.unwrap();
        let published_after = requests[0]
            .url
            .query_pairs()
            .find(|(k, _)| k == "publishedAfter")
            .map(|(_, v)| v.into_owned())
            .expect("publishedAfter must be sent");
        let parsed = chrono::DateTime::parse_from_rfc3339(&published_after).unwrap();
        let age = Utc::now().signed_duration_since(parsed);
        assert!(published_after.ends_with('Z'));
        assert!(age.num_days() >= 29 && age.num_days() <= 30);
    }

    #[tokio::test]
    async fn test_details_sends_batched_ids() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("part", "snippet,statistics"))
            .and(query_param("id", "a1,b2"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {"id": "a1", "snippet": {"title": "#coffee"}, "statistics": {"viewCount": "9"}},
                    {"id": "b2", "snippet": {"title": "plain"}, "statistics": {"viewCount": 99}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let videos = client_for(&server)
            .fetch_video_details(&["a1".to_string(), "b2".to_string()])
            .await
            .unwrap();

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].views, 9);
        assert_eq!(videos[1].views, 99);
    }

    #[tokio::test]
    async fn test_forbidden_status_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": {"code": 403, "message": "quotaExceeded"}
            })))
            .mount(&server)
            .await;

        let result = client_for(&server).search_video_ids("coffee", 20).await;

        match result {
            Err(RankError::Upstream { endpoint, source }) => {
                assert_eq!(endpoint, "/search");
                assert_eq!(source.status().map(|s| s.as_u16()), Some(403));
            }
            other => panic!("expected Upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .fetch_video_details(&["a1".to_string()])
            .await;

        assert!(matches!(
            result,
            Err(RankError::MalformedResponse { endpoint: "/videos", .. })
        ));
    }

    #[tokio::test]
    async fn test_ranker_over_mock_server() {
        // ARRANGE: search returns two ids, details returns their metadata
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"id": {"videoId": "a1"}}, {"id": {"videoId": "b2"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("id", "a1,b2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {"id": "a1", "snippet": {"title": "#Latte #coffee", "tags": ["Coffee"]},
                     "statistics": {"viewCount": "999", "likeCount": "9"}},
                    {"id": "b2", "snippet": {"title": null, "description": "#coffee"},
                     "statistics": {"viewCount": 9}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ranker = HashtagRanker::new(Arc::new(client_for(&server)));

        // ACT
        let ranked = ranker.rank("coffee", RankOptions::default()).await.unwrap();

        // ASSERT: #coffee appears on both videos, counted once per video
        assert_eq!(ranked[0].tag, "#coffee");
        assert_eq!(ranked[0].count, 2);
        assert_eq!(ranked[1].tag, "#latte");
        assert_eq!(ranked[1].count, 1);
    }
}
