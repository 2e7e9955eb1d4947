use url::Url;

/// Extract a YouTube video id from a watch URL.
///
/// Accepts the `youtube.com/watch?v=...` form (including `www.` and `m.`
/// hosts) and the short `youtu.be/<id>` form. Returns `None` for anything
/// that does not carry a well-formed video id.
pub fn extract_video_id(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let host = parsed.host_str()?;

    if host == "youtu.be" {
        let id = parsed.path().trim_matches('/');
        return valid_id(id).then(|| id.to_string());
    }

    if host == "youtube.com" || host.ends_with(".youtube.com") {
        return parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|id| valid_id(id));
    }

    None
}

/// Video ids only ever use the URL-safe base64 alphabet. The id gets
/// interpolated into the player page and the caption request URL, so
/// anything outside that alphabet is rejected here rather than escaped
/// downstream.
fn valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::extract_video_id;

    #[test]
    fn extracts_from_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn extracts_from_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn extracts_from_mobile_host() {
        assert_eq!(
            extract_video_id("https://m.youtube.com/watch?v=abc123&t=42"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn rejects_other_hosts() {
        assert_eq!(extract_video_id("https://vimeo.com/12345"), None);
    }

    #[test]
    fn rejects_watch_url_without_id() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch"), None);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(extract_video_id("not a url at all"), None);
    }

    #[test]
    fn rejects_ids_with_markup() {
        // The percent-encoded form arrives decoded from the query layer.
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=%3Cscript%3Ealert(1)%3C%2Fscript%3E"),
            None
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=<script>"),
            None
        );
    }

    #[test]
    fn rejects_ids_with_query_metacharacters() {
        // An embedded & or = would change the caption request semantics.
        assert_eq!(
            extract_video_id("https://youtu.be/abc%26lang%3Dxx"),
            None
        );
    }
}
