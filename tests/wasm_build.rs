//! WASM build test
//!
//! Mounts the player into a real document and drives it through the audio
//! element's events.

use story_sync_wasm::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_root(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn dispatch(root: &web_sys::Element, id: &str, event: &str) {
    let target = root.query_selector(&format!("#{}", id)).unwrap().unwrap();
    let event = web_sys::Event::new(event).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Resolve after `ms` milliseconds of wall time
async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn test_mount_renders_spans() {
    let root = mount_root("story-spans");
    let player = NarrationPlayer::mount("story-spans", PlayerConfig::default()).unwrap();

    let count = player.synchronizer().timeline().len();
    assert!(count > 0);
    for index in 0..count {
        let selector = format!("#{}", entry_id(index));
        assert!(root.query_selector(&selector).unwrap().is_some());
    }
    let first = root.query_selector("#s0").unwrap().unwrap();
    assert_eq!(first.text_content().unwrap(), "Th");
    assert!(root.query_selector("#trackBall").unwrap().is_some());
    assert!(!player.is_running());
    root.remove();
}

#[wasm_bindgen_test]
fn test_play_and_pause_events() {
    let root = mount_root("story-events");
    let config = PlayerConfig {
        story: "It was.".to_string(),
        ..PlayerConfig::default()
    };
    let player = NarrationPlayer::mount("story-events", config).unwrap();

    dispatch(&root, "audioPlayer", "play");
    assert!(player.is_running());
    assert_eq!(player.current_time(), 0.0);
    assert_eq!(player.active_entry_id(), Some("s0".to_string()));

    dispatch(&root, "audioPlayer", "pause");
    assert!(!player.is_running());
    root.remove();
}

#[wasm_bindgen_test]
fn test_missing_root_is_an_error() {
    let result = NarrationPlayer::mount("no-such-root", PlayerConfig::default());
    assert!(matches!(result, Err(PlayerError::MissingElement(_))));
}

#[wasm_bindgen_test]
fn test_invalid_config_rejected() {
    let root = mount_root("story-invalid");
    let config = PlayerConfig {
        timing: TimingConfig {
            tick_ms: 0,
            ..TimingConfig::default()
        },
        ..PlayerConfig::default()
    };
    let config = serde_wasm_bindgen::to_value(&config).unwrap();
    let result = NarrationPlayer::mount_with_config("story-invalid", config);
    assert!(result.is_err());
    root.remove();
}

#[wasm_bindgen_test]
fn test_build_timeline_export() {
    let entries = api::build_timeline("Then", JsValue::UNDEFINED).unwrap();
    let entries: Vec<TimelineEntry> = serde_wasm_bindgen::from_value(entries).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].text, "Th");
    assert_eq!(entries[2].from, 1000);
}

#[wasm_bindgen_test]
fn test_tokenize_story_export() {
    let tokens = api::tokenize_story("Then");
    let texts: Vec<String> = tokens.iter().filter_map(|t| t.as_string()).collect();
    assert_eq!(texts, vec!["Th", "e", "n"]);
}

#[wasm_bindgen_test]
async fn test_timer_moves_marker_and_stops_at_end() {
    let root = mount_root("story-timer");
    let config = PlayerConfig {
        story: "It".to_string(),
        timing: TimingConfig {
            tick_ms: 10,
            offset_ms: 20,
            duration_ms: 20,
        },
        ..PlayerConfig::default()
    };
    let player = NarrationPlayer::mount("story-timer", config).unwrap();

    // Windows are s0 [0, 20] and s1 [20, 40]; the tick at 50 ms is past the end
    dispatch(&root, "audioPlayer", "play");
    sleep(300).await;

    assert!(!player.is_running());
    assert_eq!(player.current_time(), 50.0);
    assert_eq!(player.active_entry_id(), None);

    sleep(60).await;
    assert_eq!(player.current_time(), 50.0);

    let marker: web_sys::HtmlElement = root
        .query_selector("#trackBall")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    let second: web_sys::HtmlElement = root
        .query_selector("#s1")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(
        marker.style().get_property_value("left").unwrap(),
        format!("{}px", second.offset_left())
    );
    assert_eq!(
        marker.style().get_property_value("top").unwrap(),
        format!("{}px", second.offset_top())
    );

    drop(player);
    root.remove();
}
