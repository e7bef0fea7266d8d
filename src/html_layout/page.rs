//! Page markup
//!
//! Element ids are fixed so the player can find the audio control and the
//! marker after mounting; span ids are the timeline entry ids.

use crate::config::PlayerConfig;
use crate::models::{MarkerPosition, Timeline};

pub const AUDIO_ID: &str = "audioPlayer";
pub const MARKER_ID: &str = "trackBall";
pub const TEXT_ID: &str = "storyText";

const CONTAINER_STYLE: &str = "padding-top: 150px; max-width: 600px; margin: 0 auto;";
const TEXT_STYLE: &str = "font-size: 30px; letter-spacing: 3px;";
const MARKER_BASE_STYLE: &str = "position: absolute; height: 30px; width: 30px; \
    border-radius: 3px; background: rgba(255, 0, 0, 0.2); transition: all 50ms ease-in; \
    transform: translateY(5px) translateX(-2px);";

/// Escape text for use in element content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Full inline style of the marker at `position`
pub fn marker_style(position: MarkerPosition) -> String {
    format!(
        "{} top: {}px; left: {}px;",
        MARKER_BASE_STYLE, position.top, position.left
    )
}

/// One `<span>` per entry, in reading order
pub fn render_story_spans(timeline: &Timeline) -> String {
    timeline
        .entries()
        .iter()
        .map(|entry| {
            format!(
                "<span id=\"{}\">{}</span>",
                escape_html(&entry.id),
                escape_html(&entry.text)
            )
        })
        .collect()
}

pub fn render_page_html(config: &PlayerConfig, timeline: &Timeline) -> String {
    let mut html = String::new();

    html.push_str(&format!("<div style=\"{}\">", CONTAINER_STYLE));
    html.push_str(&format!(
        "<audio id=\"{}\" style=\"margin-bottom: 20px;\" controls src=\"{}\">\
         Your browser does not support the <code>audio</code> element.</audio>",
        AUDIO_ID,
        escape_html(&config.audio_src)
    ));
    html.push_str(&format!(
        "<div id=\"{}\" style=\"{}\"></div>",
        MARKER_ID,
        marker_style(MarkerPosition::default())
    ));
    html.push_str(&format!(
        "<div id=\"{}\" style=\"{}\">{}</div>",
        TEXT_ID,
        TEXT_STYLE,
        render_story_spans(timeline)
    ));
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" style=\"padding-top: 20px;\">",
        escape_html(&config.image_src),
        escape_html(&config.image_alt)
    ));
    html.push_str("</div>");

    html
}
