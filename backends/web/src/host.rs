use innerscope_core::{
    Error, Host, WindowEvent,
    dom::EventHandler,
};

use js_sys::{Object, Reflect};
use tracing::trace;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

use web_sys::{Document, Element, Event, Window};

use crate::{
    dom::inject_stylesheet,
    error::{WebError, invalid_argument, js_error},
};

const STATE_INDEX: &str = "index";

/// The browser window the application runs in.
#[derive(Debug, Clone)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// Binds to the global `window` and its document.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::DomUnavailable`] outside of a browser.
    pub fn new() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::DomUnavailable)?;
        let document = window.document().ok_or(WebError::DomUnavailable)?;
        Ok(Self { window, document })
    }

    /// The global window.
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }

    /// The document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Adds the stylesheet behind the layout classes unless already present.
    ///
    /// # Errors
    ///
    /// Returns an error if the document has neither head nor body.
    pub fn inject_default_styles(&self) -> Result<(), WebError> {
        inject_stylesheet(&self.document).map_err(WebError::from)
    }
}

impl Host for WebHost {
    type Node = Element;
    type Event = Event;

    fn body(&self) -> Result<Self::Node, Error> {
        self.document
            .body()
            .map(Element::from)
            .ok_or(Error::Unavailable("document body"))
    }

    fn head(&self) -> Result<Self::Node, Error> {
        self.document
            .head()
            .map(Element::from)
            .ok_or(Error::Unavailable("document head"))
    }

    fn create_element(&self, tag: &str) -> Result<Self::Node, Error> {
        self.document.create_element(tag).map_err(invalid_argument)
    }

    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn query_selector(&self, selector: &str) -> Result<Option<Self::Node>, Error> {
        self.document
            .query_selector(selector)
            .map_err(invalid_argument)
    }

    fn location_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn location_hash(&self) -> String {
        self.window
            .location()
            .hash()
            .map(|hash| hash.trim_start_matches('#').to_string())
            .unwrap_or_default()
    }

    fn history_index(&self) -> Option<u32> {
        let state = self.window.history().ok()?.state().ok()?;
        if state.is_null() || state.is_undefined() {
            return None;
        }
        let index = Reflect::get(&state, &JsValue::from_str(STATE_INDEX))
            .ok()?
            .as_f64()?;
        if !index.is_finite() || index < 0.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = index as u32;
        Some(index)
    }

    fn push_history(&self, index: u32, url: &str) -> Result<(), Error> {
        let state = Object::new();
        Reflect::set(&state, &JsValue::from_str(STATE_INDEX), &JsValue::from(index))
            .map_err(js_error)?;
        self.window
            .history()
            .map_err(js_error)?
            .push_state_with_url(&state, "", Some(url))
            .map_err(js_error)
    }

    fn listen(
        &self,
        event: WindowEvent,
        prevent_default: bool,
        mut handler: EventHandler<Self::Event>,
    ) -> Result<(), Error> {
        let callback = Closure::<dyn FnMut(Event)>::new(move |native: Event| {
            if prevent_default {
                native.prevent_default();
            }
            handler(&native);
        });

        self.window
            .add_event_listener_with_callback(event.name(), callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        // Listeners live as long as the page.
        callback.forget();

        trace!(event = event.name(), "window listener installed");
        Ok(())
    }
}
