use async_trait::async_trait;
use log::{info, warn};
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use super::Cue;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("no caption tracks are available for this video")]
    NoCaptions,
    #[error("transcript request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected transcript payload: {0}")]
    Malformed(String),
}

/// Supplies the ordered cue sequence for a video. Abstracted so the web
/// layer can be exercised with canned transcripts.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_transcript(
        &self,
        video_id: &str,
        lang: &str,
    ) -> Result<Vec<Cue>, TranscriptError>;
}

/// Fetches captions through the public watch-page payload: locate the
/// caption track list in the embedded player response, pick the track for
/// the requested language (or the first one), then download and parse its
/// timedtext XML.
pub struct YoutubeTranscriptClient {
    http: reqwest::Client,
    base_url: String,
}

impl YoutubeTranscriptClient {
    pub fn new() -> Self {
        Self::with_base_url("https://www.youtube.com")
    }

    /// Point the client at a different host. Used by tests to serve
    /// recorded watch pages.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for YoutubeTranscriptClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptClient {
    async fn fetch_transcript(
        &self,
        video_id: &str,
        lang: &str,
    ) -> Result<Vec<Cue>, TranscriptError> {
        let watch_url = format!("{}/watch?v={}", self.base_url, video_id);
        let watch_page = self
            .http
            .get(&watch_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let tracks = parse_caption_tracks(&watch_page)?;
        let track = match tracks.iter().find(|t| t.language_code == lang) {
            Some(track) => track,
            None => {
                warn!(
                    "no '{}' caption track for video {}, falling back to '{}'",
                    lang, video_id, tracks[0].language_code
                );
                &tracks[0]
            }
        };

        let timedtext = self
            .http
            .get(&track.base_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let cues = parse_timedtext(&timedtext)?;
        info!("fetched {} cues for video {}", cues.len(), video_id);
        Ok(cues)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionsWrapper {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    caption_tracks: Option<Vec<CaptionTrack>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
}

/// Pull the caption track list out of the watch page, where the player
/// response is embedded as JSON. Only the one `"captions":` object is
/// parsed; whatever follows it in the script is ignored.
fn parse_caption_tracks(watch_page: &str) -> Result<Vec<CaptionTrack>, TranscriptError> {
    let marker = "\"captions\":";
    let Some(idx) = watch_page.find(marker) else {
        return Err(TranscriptError::NoCaptions);
    };

    let tail = &watch_page[idx + marker.len()..];
    let mut de = serde_json::Deserializer::from_str(tail);
    let wrapper = CaptionsWrapper::deserialize(&mut de)
        .map_err(|e| TranscriptError::Malformed(format!("captions payload: {e}")))?;

    let tracks = wrapper
        .player_captions_tracklist_renderer
        .and_then(|r| r.caption_tracks)
        .unwrap_or_default();

    if tracks.is_empty() {
        return Err(TranscriptError::NoCaptions);
    }
    Ok(tracks)
}

/// Parse timedtext XML (`<text start=".." dur="..">..</text>`) into cues,
/// converting second offsets to milliseconds.
fn parse_timedtext(xml: &str) -> Result<Vec<Cue>, TranscriptError> {
    let re = Regex::new(r#"(?s)<text start="([^"]+)" dur="([^"]+)"[^>]*>(.*?)</text>"#)
        .map_err(|e| TranscriptError::Malformed(format!("cue pattern: {e}")))?;

    let mut cues = Vec::new();
    for cap in re.captures_iter(xml) {
        let start: f64 = cap[1]
            .parse()
            .map_err(|_| TranscriptError::Malformed(format!("bad start offset: {}", &cap[1])))?;
        let dur: f64 = cap[2]
            .parse()
            .map_err(|_| TranscriptError::Malformed(format!("bad duration: {}", &cap[2])))?;

        cues.push(Cue {
            text: decode_entities(&cap[3]),
            offset_ms: (start * 1000.0).round() as u64,
            duration_ms: (dur * 1000.0).round() as u64,
        });
    }

    if cues.is_empty() {
        return Err(TranscriptError::Malformed(
            "no cues in timedtext payload".to_string(),
        ));
    }
    Ok(cues)
}

/// Timedtext double-encodes apostrophes and uses the usual five XML
/// entities; nothing else shows up in practice.
fn decode_entities(text: &str) -> String {
    text.replace("&amp;#39;", "'")
        .replace("&amp;quot;", "\"")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
