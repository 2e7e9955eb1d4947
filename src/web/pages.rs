//! HTML generation for the three page kinds: the input form, the player
//! page with the segment timeline, and error pages.

use chrono::{TimeZone, Utc};

use crate::segmentation::Segment;

/// Input form shown when no URL was submitted.
pub fn landing_page(pause_threshold_ms: u64) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>danceloop</title>
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <style>
    body {{ font-family: sans-serif; padding: 50px; text-align: center; background-color: #f0f2f5; }}
    h1 {{ color: #ff0000; }}
    input[type="text"] {{ padding: 10px; width: 80%; max-width: 500px; margin-bottom: 20px; border: 1px solid #ccc; border-radius: 4px; }}
    button {{ background-color: #ff0000; color: white; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer; }}
    button:hover {{ background-color: #cc0000; }}
  </style>
</head>
<body>
  <h1>&#128131; danceloop</h1>
  <form action="/" method="GET">
    <input type="text" name="url" placeholder="Paste a YouTube dance video URL" required>
    <button type="submit">Split into sections</button>
  </form>
  <p>Fetches the video's auto-generated captions and splits them into practice
  sections wherever the captions pause for {threshold} seconds or more.</p>
  <p>Works best with practice-room videos or M/Vs that carry clear auto captions.</p>
</body>
</html>
"#,
        threshold = threshold_secs(pause_threshold_ms),
    )
}

/// Player page: embedded IFrame player plus one row per segment with play
/// and loop controls. The inline script is the browser-side mirror of the
/// playback controller.
pub fn player_page(
    video_id: &str,
    segments: &[Segment],
    clip_secs: u64,
    pause_threshold_ms: u64,
) -> String {
    let rows = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            format!(
                r#"      <div class="segment">
        <div class="segment-header">
          <button class="play-btn" onclick="playSegment({start}, {clip_secs});">&#9654;&#65039; Section {number} ({stamp})</button>
          <button class="loop-btn" onclick="loopSegment({start}, {loop_end});">&#128260; Loop {clip_secs}s</button>
          <span class="segment-text">{text}</span>
        </div>
      </div>"#,
                start = segment.start_time_sec,
                loop_end = segment.start_time_sec + clip_secs,
                number = index + 1,
                stamp = format_timestamp(segment.start_time_sec),
                text = escape_html(&segment.text),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>danceloop - section practice</title>
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <style>
    body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; padding: 20px; background-color: #f0f2f5; }}
    h1 {{ color: #ff0000; }}
    #player {{ margin-bottom: 20px; border-radius: 8px; overflow: hidden; max-width: 640px; }}
    .segment {{ background-color: white; border-radius: 8px; margin-bottom: 10px; padding: 15px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }}
    .segment-header {{ display: flex; align-items: center; flex-wrap: wrap; }}
    .play-btn, .loop-btn {{
      background-color: #ff0000; color: white; border: none;
      padding: 8px 12px; margin-right: 10px; margin-bottom: 5px; cursor: pointer;
      border-radius: 4px; transition: background-color 0.3s;
    }}
    .play-btn:hover, .loop-btn:hover {{ background-color: #cc0000; }}
    .segment-text {{ flex-grow: 1; font-size: 1em; color: #333; margin-left: 10px; }}
    @media (max-width: 600px) {{
      .segment-header {{ flex-direction: column; align-items: flex-start; }}
      .play-btn, .loop-btn {{ margin-bottom: 10px; width: 100%; }}
      .segment-text {{ margin-left: 0; margin-top: 10px; }}
    }}
  </style>
</head>
<body>
  <h1>danceloop</h1>
  <p>Video: {video_id} | split on pauses &#8805; {threshold}s</p>

  <div id="player"></div>

  <h3>&#127925; Section timeline (from caption pauses)</h3>
  <div id="segments-container">
{rows}
  </div>

  <script>
    var player;
    var boundedTimer = null;
    var loopInterval = null;
    var loopStartTime = 0;
    var loopEndTime = 0;

    function onYouTubeIframeAPIReady() {{
      player = new YT.Player('player', {{
        height: '390',
        width: '100%',
        videoId: '{video_id}',
        playerVars: {{ 'playsinline': 1 }},
        events: {{ 'onStateChange': onPlayerStateChange }}
      }});
    }}

    // Play from startTime for a fixed window, then pause.
    function playSegment(startTime, duration) {{
      cancelActive();
      player.seekTo(startTime, true);
      player.playVideo();
      boundedTimer = setTimeout(function () {{
        // Pause only if the user hasn't intervened in the meantime.
        if (player.getPlayerState() === YT.PlayerState.PLAYING) {{
          player.pauseVideo();
        }}
      }}, duration * 1000);
    }}

    // Repeat startTime..endTime until the user stops playback.
    function loopSegment(startTime, endTime) {{
      cancelActive();
      loopStartTime = startTime;
      loopEndTime = endTime;
      player.seekTo(startTime, true);
      player.playVideo();
      loopInterval = setInterval(checkLoop, 100);
    }}

    function checkLoop() {{
      if (player.getCurrentTime() >= loopEndTime) {{
        player.seekTo(loopStartTime, true);
      }}
    }}

    function cancelActive() {{
      if (boundedTimer) {{
        clearTimeout(boundedTimer);
        boundedTimer = null;
      }}
      if (loopInterval) {{
        clearInterval(loopInterval);
        loopInterval = null;
      }}
      loopStartTime = 0;
      loopEndTime = 0;
    }}

    function onPlayerStateChange(event) {{
      if (event.data === YT.PlayerState.PAUSED || event.data === YT.PlayerState.ENDED) {{
        cancelActive();
      }}
    }}

    var tag = document.createElement('script');
    tag.src = "https://www.youtube.com/iframe_api";
    var firstScriptTag = document.getElementsByTagName('script')[0];
    firstScriptTag.parentNode.insertBefore(tag, firstScriptTag);
  </script>
</body>
</html>
"#,
        threshold = threshold_secs(pause_threshold_ms),
    )
}

/// Millisecond threshold shown as seconds, trimming a trailing zero
/// fraction (1500 -> "1.5", 2000 -> "2").
fn threshold_secs(ms: u64) -> String {
    let secs = ms as f64 / 1000.0;
    if secs.fract() == 0.0 {
        format!("{}", secs as u64)
    } else {
        format!("{secs}")
    }
}

/// Shared shell for user-facing failure pages.
pub fn error_page(title: &str, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>danceloop - {title}</title>
  <style>
    body {{ font-family: sans-serif; padding: 50px; text-align: center; background-color: #f0f2f5; }}
    h1 {{ color: #ff0000; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  <p>{message}</p>
  <p><a href="/">Back to the input page</a></p>
</body>
</html>
"#,
        title = escape_html(title),
        message = escape_html(message),
    )
}

/// `HH:MM:SS` display for a segment start. Wraps past 24 hours, which no
/// real video reaches.
fn format_timestamp(sec: u64) -> String {
    Utc.timestamp_opt(sec as i64, 0)
        .single()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "00:00:00".to_string())
}

/// Caption text is untrusted and gets interpolated into the page.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
