//! Narration player
//!
//! Mounts the story page into a root element and keeps the marker in sync
//! with the audio control. The audio element's `play` event starts the
//! synchronizer and a `setInterval` timer; `pause` (or reaching the end of
//! the timeline) stops it and clears the timer.
//!
//! Event and timer closures only hold a `Weak` reference to the player
//! state, so dropping the `NarrationPlayer` (or calling `free()` from JS)
//! releases everything and detaches the listeners.

use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlAudioElement, HtmlElement, Window};

use crate::api::dom::{self, AudioTransport, DomLayout};
use crate::api::helpers::{deserialize_or_default, serialize};
use crate::config::PlayerConfig;
use crate::error::PlayerError;
use crate::html_layout::{render_page_html, AUDIO_ID, MARKER_ID};
use crate::models::{MarkerPosition, Timeline};
use crate::playback::{Synchronizer, TickOutcome};

type EventClosure = Closure<dyn FnMut(Event)>;

struct PlayerInner {
    window: Window,
    document: Document,
    audio: HtmlAudioElement,
    marker: HtmlElement,
    sync: RefCell<Synchronizer>,
    /// Tick interval in ms, already range-checked by `TimingConfig::tick_timeout`
    tick_timeout: i32,
    interval_id: Cell<Option<i32>>,
    tick_closure: RefCell<Option<Closure<dyn FnMut()>>>,
    listeners: RefCell<Vec<(&'static str, EventClosure)>>,
}

impl PlayerInner {
    fn on_play(&self) {
        let layout = DomLayout::new(&self.document);
        let mut transport = AudioTransport::new(&self.audio);
        let moved = self.sync.borrow_mut().start(&mut transport, &layout);
        if let Some(position) = moved {
            self.apply_marker(position);
        }

        if let Err(e) = self.schedule_ticks() {
            log::error!("Failed to start playback timer: {}", e);
            self.sync.borrow_mut().stop();
        }
    }

    fn on_pause(&self) {
        self.sync.borrow_mut().stop();
        self.cancel_ticks();
    }

    fn on_tick(&self) {
        let layout = DomLayout::new(&self.document);
        let (outcome, before, after) = {
            let mut sync = self.sync.borrow_mut();
            let before = sync.marker();
            let outcome = sync.tick(&layout);
            (outcome, before, sync.marker())
        };

        if after != before {
            self.apply_marker(after);
        }

        match outcome {
            TickOutcome::Continue => {}
            TickOutcome::Stopped | TickOutcome::Ignored => self.cancel_ticks(),
        }
    }

    /// Start the repeating timer, replacing any previous one
    fn schedule_ticks(&self) -> Result<(), PlayerError> {
        self.cancel_ticks();

        let tick = self.tick_closure.borrow();
        let Some(closure) = tick.as_ref() else {
            return Ok(());
        };

        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                self.tick_timeout,
            )
            .map_err(PlayerError::dom)?;
        self.interval_id.set(Some(id));
        Ok(())
    }

    fn cancel_ticks(&self) {
        if let Some(id) = self.interval_id.take() {
            self.window.clear_interval_with_handle(id);
        }
    }

    fn apply_marker(&self, position: MarkerPosition) {
        let style = self.marker.style();
        let result = style
            .set_property("top", &format!("{}px", position.top))
            .and_then(|_| style.set_property("left", &format!("{}px", position.left)));
        if let Err(e) = result {
            log::warn!("Failed to move marker: {:?}", e);
        }
    }
}

impl Drop for PlayerInner {
    fn drop(&mut self) {
        self.cancel_ticks();
        for (event, closure) in self.listeners.borrow_mut().drain(..) {
            if let Err(e) = self
                .audio
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to detach {} listener: {:?}", event, e);
            }
        }
    }
}

/// Story page bound to an audio element
#[wasm_bindgen]
pub struct NarrationPlayer {
    inner: Rc<PlayerInner>,
}

#[wasm_bindgen]
impl NarrationPlayer {
    /// Mount the default story into the element with id `root_id`
    #[wasm_bindgen(js_name = mount)]
    pub fn mount_default(root_id: &str) -> Result<NarrationPlayer, JsValue> {
        Ok(Self::mount(root_id, PlayerConfig::default())?)
    }

    /// Mount with a (possibly partial) config object
    #[wasm_bindgen(js_name = mountWithConfig)]
    pub fn mount_with_config(root_id: &str, config: JsValue) -> Result<NarrationPlayer, JsValue> {
        let config: PlayerConfig =
            deserialize_or_default(config, "Failed to deserialize player config")?;
        Ok(Self::mount(root_id, config)?)
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.sync.borrow().is_running()
    }

    /// Elapsed time of the polling clock in milliseconds
    #[wasm_bindgen(js_name = currentTime)]
    pub fn current_time(&self) -> f64 {
        self.inner.sync.borrow().current_time() as f64
    }

    #[wasm_bindgen(js_name = activeEntryId)]
    pub fn active_entry_id(&self) -> Option<String> {
        self.inner
            .sync
            .borrow()
            .active_entry()
            .map(|entry| entry.id.clone())
    }

    #[wasm_bindgen(js_name = markerPosition)]
    pub fn marker_position(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.sync.borrow().marker(), "Failed to serialize marker position")
    }

    #[wasm_bindgen(js_name = getTimeline)]
    pub fn timeline(&self) -> Result<JsValue, JsValue> {
        serialize(
            &self.inner.sync.borrow().timeline().entries(),
            "Failed to serialize timeline",
        )
    }

    /// Stop syncing without touching the audio element
    pub fn stop(&self) {
        self.inner.on_pause();
    }
}

impl NarrationPlayer {
    pub fn mount(root_id: &str, config: PlayerConfig) -> Result<Self, PlayerError> {
        config.validate()?;
        let tick_timeout = config.timing.tick_timeout()?;

        let window = dom::window()?;
        let document = dom::document(&window)?;
        let root: Element = dom::element_by_id(&document, root_id, "Element")?;

        let timeline = Timeline::from_story(&config.story, &config.timing);
        root.set_inner_html(&render_page_html(&config, &timeline));

        let audio: HtmlAudioElement = dom::child_by_id(&root, AUDIO_ID, "HtmlAudioElement")?;
        let marker: HtmlElement = dom::child_by_id(&root, MARKER_ID, "HtmlElement")?;

        log::info!(
            "Mounted story into #{} ({} entries, {} ms tick)",
            root_id,
            timeline.len(),
            config.timing.tick_ms
        );

        let inner = Rc::new(PlayerInner {
            window,
            document,
            audio,
            marker,
            sync: RefCell::new(Synchronizer::new(timeline, config.timing.tick_ms)),
            tick_timeout,
            interval_id: Cell::new(None),
            tick_closure: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });

        let weak = Rc::downgrade(&inner);
        let tick = Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_tick();
            }
        }) as Box<dyn FnMut()>);
        *inner.tick_closure.borrow_mut() = Some(tick);

        bind_listener(&inner, "play", PlayerInner::on_play)?;
        bind_listener(&inner, "pause", PlayerInner::on_pause)?;

        Ok(Self { inner })
    }

    pub fn synchronizer(&self) -> Ref<'_, Synchronizer> {
        self.inner.sync.borrow()
    }
}

fn bind_listener(
    inner: &Rc<PlayerInner>,
    event: &'static str,
    handler: fn(&PlayerInner),
) -> Result<(), PlayerError> {
    let weak: Weak<PlayerInner> = Rc::downgrade(inner);
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        if let Some(inner) = weak.upgrade() {
            handler(&inner);
        }
    }) as Box<dyn FnMut(_)>);

    inner
        .audio
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(PlayerError::dom)?;
    inner.listeners.borrow_mut().push((event, closure));
    Ok(())
}
