//! YouTube transcript client against a mocked caption service.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use danceloop::transcript::{Cue, TranscriptError, TranscriptSource, YoutubeTranscriptClient};

fn watch_page(tracks_json: &str) -> String {
    format!(
        r#"<html><body><script>var ytInitialPlayerResponse = {{"captions":{{"playerCaptionsTracklistRenderer":{{"captionTracks":{tracks_json}}}}},"videoDetails":{{"videoId":"abc"}}}};</script></body></html>"#
    )
}

const TIMEDTEXT: &str = r#"<?xml version="1.0" encoding="utf-8" ?><transcript>
<text start="0" dur="0.5">hi</text>
<text start="0.6" dur="0.4">there</text>
<text start="3" dur="0.5">bye</text>
</transcript>"#;

#[tokio::test]
async fn fetches_cues_for_the_preferred_language() {
    let server = MockServer::start().await;

    let tracks = format!(
        r#"[{{"baseUrl":"{base}/api/timedtext?lang=en","languageCode":"en"}},{{"baseUrl":"{base}/api/timedtext?lang=ko","languageCode":"ko"}}]"#,
        base = server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/watch"))
        .and(query_param("v", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(watch_page(&tracks)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/timedtext"))
        .and(query_param("lang", "ko"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TIMEDTEXT))
        .mount(&server)
        .await;

    let client = YoutubeTranscriptClient::with_base_url(server.uri());
    let cues = client.fetch_transcript("abc", "ko").await.unwrap();

    assert_eq!(
        cues,
        vec![
            Cue::new("hi", 0, 500),
            Cue::new("there", 600, 400),
            Cue::new("bye", 3000, 500),
        ]
    );
}

#[tokio::test]
async fn falls_back_to_the_first_track_when_language_is_missing() {
    let server = MockServer::start().await;

    let tracks = format!(
        r#"[{{"baseUrl":"{base}/api/timedtext?lang=en","languageCode":"en"}}]"#,
        base = server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(ResponseTemplate::new(200).set_body_string(watch_page(&tracks)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/timedtext"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TIMEDTEXT))
        .mount(&server)
        .await;

    let client = YoutubeTranscriptClient::with_base_url(server.uri());
    let cues = client.fetch_transcript("abc", "ko").await.unwrap();
    assert_eq!(cues.len(), 3);
}

#[tokio::test]
async fn video_without_captions_reports_no_captions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>no captions object here</body></html>"),
        )
        .mount(&server)
        .await;

    let client = YoutubeTranscriptClient::with_base_url(server.uri());
    let err = client.fetch_transcript("abc", "ko").await.unwrap_err();
    assert!(matches!(err, TranscriptError::NoCaptions));
}

#[tokio::test]
async fn http_failure_reports_request_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = YoutubeTranscriptClient::with_base_url(server.uri());
    let err = client.fetch_transcript("abc", "ko").await.unwrap_err();
    assert!(matches!(err, TranscriptError::Request(_)));
}
