//! Browser implementations of the synchronizer seams
//!
//! Geometry comes from the element's `offsetTop`/`offsetLeft`/`offsetWidth`,
//! which are relative to the offset parent the marker is positioned in.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAudioElement, HtmlElement, Window};

use crate::error::PlayerError;
use crate::models::ElementGeometry;
use crate::playback::{LayoutQuery, Transport};

pub fn window() -> Result<Window, PlayerError> {
    web_sys::window().ok_or(PlayerError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, PlayerError> {
    window.document().ok_or(PlayerError::NoDocument)
}

/// Look up `id` and cast it to `T`
pub fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, PlayerError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PlayerError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| PlayerError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

/// Look up the descendant of `root` with `id` and cast it to `T`
pub fn child_by_id<T: JsCast>(
    root: &Element,
    id: &str,
    expected: &'static str,
) -> Result<T, PlayerError> {
    root.query_selector(&format!("#{}", id))
        .map_err(PlayerError::dom)?
        .ok_or_else(|| PlayerError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| PlayerError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

pub struct AudioTransport<'a> {
    audio: &'a HtmlAudioElement,
}

impl<'a> AudioTransport<'a> {
    pub fn new(audio: &'a HtmlAudioElement) -> Self {
        Self { audio }
    }
}

impl Transport for AudioTransport<'_> {
    fn rewind(&mut self) {
        self.audio.set_current_time(0.0);
    }
}

/// Uncached geometry queries against the live document
pub struct DomLayout<'a> {
    document: &'a Document,
}

impl<'a> DomLayout<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }
}

impl LayoutQuery for DomLayout<'_> {
    fn geometry(&self, id: &str) -> Option<ElementGeometry> {
        let element = self
            .document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(ElementGeometry {
            top: f64::from(element.offset_top()),
            left: f64::from(element.offset_left()),
            width: f64::from(element.offset_width()),
        })
    }
}
