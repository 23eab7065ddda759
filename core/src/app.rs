//! The application context: document configuration, routing and lifecycle hooks.

use core::{
    cell::{Cell, RefCell},
    fmt,
};
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::{
    DomNode, Error, Host, Visibility, WindowEvent,
    layout::apply_scrollbar,
    router::{Route, Router, RouterMode},
};

/// `content` of the viewport meta tag written when zooming is disabled.
pub const VIEWPORT_NO_ZOOM: &str =
    "width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no";

/// The serialisable part of an application's configuration.
///
/// Field names follow the JSON manifest format:
///
/// ```json
/// { "title": "Shop", "mode": "history", "allowzoom": false,
///   "statusbarcolor": "#101010", "scrollbarvisibility": "hidden" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppManifest {
    /// Document title; left untouched when empty.
    pub title: String,
    /// Favicon URL.
    pub icon: Option<String>,
    /// Routing mode.
    pub mode: RouterMode,
    /// Whether pinch zoom stays enabled.
    #[serde(rename = "allowzoom")]
    pub allow_zoom: bool,
    /// `theme-color` of the browser chrome.
    #[serde(rename = "statusbarcolor")]
    pub status_bar_color: Option<String>,
    /// Page scrollbar visibility.
    #[serde(rename = "scrollbarvisibility")]
    pub scrollbar_visibility: Option<Visibility>,
}

impl AppManifest {
    /// Parses a JSON manifest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `json` is not a valid manifest.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Everything [`Application::set_config`] applies.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ApplicationConfig {
    /// Document-level settings.
    pub manifest: AppManifest,
    /// The route table.
    pub routes: Vec<Route>,
}

impl ApplicationConfig {
    /// A configuration with a title and default settings.
    pub fn new(title: impl Into<String>) -> Self {
        Self::from_manifest(AppManifest {
            title: title.into(),
            ..AppManifest::default()
        })
    }

    /// A configuration from a parsed manifest, without routes.
    pub fn from_manifest(manifest: AppManifest) -> Self {
        Self {
            manifest,
            routes: Vec::new(),
        }
    }

    /// Sets the routing mode.
    pub const fn mode(mut self, mode: RouterMode) -> Self {
        self.manifest.mode = mode;
        self
    }

    /// Sets the favicon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.manifest.icon = Some(icon.into());
        self
    }

    /// Allows or disables pinch zoom.
    pub const fn allow_zoom(mut self, allow: bool) -> Self {
        self.manifest.allow_zoom = allow;
        self
    }

    /// Sets the `theme-color`.
    pub fn status_bar_color(mut self, color: impl Into<String>) -> Self {
        self.manifest.status_bar_color = Some(color.into());
        self
    }

    /// Shows or hides the page scrollbar.
    pub const fn scrollbar_visibility(mut self, visibility: Visibility) -> Self {
        self.manifest.scrollbar_visibility = Some(visibility);
        self
    }

    /// Adds a route.
    pub fn route(mut self, path: impl Into<String>, component: impl Fn() + 'static) -> Self {
        self.routes.push(Route::new(path, component));
        self
    }

    /// Adds several routes.
    pub fn routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
        self.routes.extend(routes);
        self
    }
}

struct AppState<H> {
    host: H,
    router: RefCell<Router>,
    popstate_listener: Cell<bool>,
    hashchange_listener: Cell<bool>,
}

/// Application context owning the host, the route table and the page index.
///
/// Cloning yields another handle to the same application, which is how route
/// components get hold of it to navigate further.
pub struct Application<H: Host> {
    state: Rc<AppState<H>>,
}

impl<H: Host> Clone for Application<H> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<H: Host> fmt::Debug for Application<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Application")
            .field("router", &self.state.router.borrow())
            .finish_non_exhaustive()
    }
}

impl<H: Host> Application<H> {
    /// Creates an application on `host`, applying `config` when given.
    ///
    /// Without a configuration the application is logged as unconfigured and
    /// keeps an empty route table.
    ///
    /// # Errors
    ///
    /// Returns an error if applying `config` fails.
    pub fn new(host: H, config: Option<ApplicationConfig>) -> Result<Self, Error> {
        let app = Self {
            state: Rc::new(AppState {
                host,
                router: RefCell::new(Router::new()),
                popstate_listener: Cell::new(false),
                hashchange_listener: Cell::new(false),
            }),
        };

        match config {
            Some(config) => app.set_config(config)?,
            None => error!("application config was not passed"),
        }

        Ok(app)
    }

    /// The host this application runs on.
    pub fn host(&self) -> &H {
        &self.state.host
    }

    /// Applies `config` to the router and the document.
    ///
    /// Calling it again adds routes and re-applies document settings; the
    /// viewport and theme-color meta tags are never duplicated.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects one of the changes.
    pub fn set_config(&self, config: ApplicationConfig) -> Result<(), Error> {
        let ApplicationConfig { manifest, routes } = config;
        let host = &self.state.host;

        {
            let mut router = self.state.router.borrow_mut();
            router.set_mode(manifest.mode);
            router.set_page_index(host.history_index().unwrap_or(0));
            for route in routes {
                router.add_route(route.path(), route.component());
            }
        }
        self.install_route_listener(manifest.mode)?;

        if !manifest.title.is_empty() {
            host.set_title(&manifest.title);
        }

        if let Some(icon) = &manifest.icon {
            let link = ensure_head_element(host, "link[rel=\"icon\"]", "link")?;
            link.set_attribute("rel", "icon")?;
            link.set_attribute("href", icon)?;
        }

        if let Some(color) = &manifest.status_bar_color {
            let meta = ensure_head_element(host, "meta[name=\"theme-color\"]", "meta")?;
            meta.set_attribute("name", "theme-color")?;
            meta.set_attribute("content", color)?;
        }

        if let Some(visibility) = manifest.scrollbar_visibility {
            apply_scrollbar(&host.body()?, visibility)?;
        }

        if !manifest.allow_zoom {
            let meta = ensure_head_element(host, "meta[name=\"viewport\"]", "meta")?;
            meta.set_attribute("name", "viewport")?;
            meta.set_attribute("content", VIEWPORT_NO_ZOOM)?;
        }

        debug!(mode = ?manifest.mode, "application configured");
        Ok(())
    }

    // One listener per event, installed the first time its mode is
    // configured. Each checks the current mode, so switching modes leaves the
    // other listener inert.
    fn install_route_listener(&self, mode: RouterMode) -> Result<(), Error> {
        let weak: Weak<AppState<H>> = Rc::downgrade(&self.state);
        match mode {
            RouterMode::History => {
                if self.state.popstate_listener.get() {
                    return Ok(());
                }
                self.listen(WindowEvent::PopState, false, move |_: &H::Event| {
                    let Some(state) = weak.upgrade() else { return };
                    if state.router.borrow().mode() != Some(RouterMode::History) {
                        return;
                    }
                    let app = Self { state };
                    if let Err(error) = app.restore_from_history() {
                        error!(%error, "failed to restore page from history");
                    }
                })?;
                self.state.popstate_listener.set(true);
            }
            RouterMode::Hash => {
                if self.state.hashchange_listener.get() {
                    return Ok(());
                }
                self.listen(WindowEvent::HashChange, false, move |_: &H::Event| {
                    let Some(state) = weak.upgrade() else { return };
                    if state.router.borrow().mode() == Some(RouterMode::Hash) {
                        Self::hash_change(&state.host.location_hash());
                    }
                })?;
                self.state.hashchange_listener.set(true);
            }
        }
        Ok(())
    }

    /// Registers `component` under `path`.
    pub fn add_route(&self, path: impl Into<String>, component: impl Fn() + 'static) {
        let route = Route::new(path, component);
        self.state
            .router
            .borrow_mut()
            .add_route(route.path(), route.component());
    }

    /// Whether `path` is registered.
    #[must_use]
    pub fn has_route(&self, path: &str) -> bool {
        self.state.router.borrow().has_route(path)
    }

    /// The configured routing mode.
    #[must_use]
    pub fn mode(&self) -> Option<RouterMode> {
        self.state.router.borrow().mode()
    }

    /// The current page index.
    #[must_use]
    pub fn page_index(&self) -> u32 {
        self.state.router.borrow().page_index()
    }

    /// Navigates to `path`, or to `/404` when `path` is not registered.
    ///
    /// In history mode the body is cleared, the route component runs, the
    /// page index advances and a history entry is pushed. A missing component
    /// is logged and leaves the body blank. Hash mode navigation is not
    /// implemented and only logs.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be cleared or the history entry
    /// cannot be pushed.
    pub fn open_route(&self, path: &str) -> Result<(), Error> {
        let (mode, path) = {
            let router = self.state.router.borrow();
            (router.mode(), router.resolve(path).to_string())
        };

        if mode == Some(RouterMode::Hash) {
            Self::hash_change(&path);
            Ok(())
        } else {
            self.navigate(&path)
        }
    }

    /// Opens the route matching the current location path.
    ///
    /// # Errors
    ///
    /// See [`Application::open_route`].
    pub fn open_current(&self) -> Result<(), Error> {
        let path = self.state.host.location_path();
        self.open_route(&path)
    }

    fn hash_change(route: &str) {
        warn!(route, "hash routing is not implemented; navigation ignored");
    }

    fn navigate(&self, path: &str) -> Result<(), Error> {
        self.render(path)?;
        let index = self.state.router.borrow_mut().advance();
        self.state.host.push_history(index, path)?;
        debug!(path, index, "navigated");
        Ok(())
    }

    fn restore_from_history(&self) -> Result<(), Error> {
        let index = self.state.host.history_index().unwrap_or(0);
        let location = self.state.host.location_path();
        let path = {
            let mut router = self.state.router.borrow_mut();
            router.set_page_index(index);
            router.resolve(&location).to_string()
        };
        debug!(path, index, "restoring page from history");
        self.render(&path)
    }

    // Components may navigate themselves, so no router borrow is held while
    // one runs.
    fn render(&self, path: &str) -> Result<(), Error> {
        let component = self.state.router.borrow().route(path);
        self.state.host.body()?.clear_children()?;
        match component {
            Some(component) => component(),
            None => error!(path, "no component registered for route"),
        }
        Ok(())
    }

    fn listen(
        &self,
        event: WindowEvent,
        prevent_default: bool,
        handler: impl FnMut(&H::Event) + 'static,
    ) -> Result<(), Error> {
        self.state
            .host
            .listen(event, prevent_default, Box::new(handler))
    }

    /// Runs `handler` before the page unloads. The default action is prevented,
    /// which asks the user to confirm leaving.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered.
    pub fn on_exit(&self, handler: impl FnMut(&H::Event) + 'static) -> Result<(), Error> {
        self.listen(WindowEvent::BeforeUnload, true, handler)
    }

    /// Runs `handler` on back/forward navigation (`popstate`).
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered.
    pub fn on_back(&self, handler: impl FnMut(&H::Event) + 'static) -> Result<(), Error> {
        self.listen(WindowEvent::PopState, true, handler)
    }

    /// Runs `handler` once the page has loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered.
    pub fn on_start(&self, handler: impl FnMut(&H::Event) + 'static) -> Result<(), Error> {
        self.listen(WindowEvent::Load, false, handler)
    }

    /// Runs `handler` when the window loses focus.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered.
    pub fn on_pause(&self, handler: impl FnMut(&H::Event) + 'static) -> Result<(), Error> {
        self.listen(WindowEvent::Blur, false, handler)
    }

    /// Runs `handler` when the window regains focus.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered.
    pub fn on_resume(&self, handler: impl FnMut(&H::Event) + 'static) -> Result<(), Error> {
        self.listen(WindowEvent::Focus, false, handler)
    }

    /// Runs `handler` when the browser goes offline.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered.
    pub fn on_offline(&self, handler: impl FnMut(&H::Event) + 'static) -> Result<(), Error> {
        self.listen(WindowEvent::Offline, false, handler)
    }

    /// Runs `handler` when the browser comes back online.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered.
    pub fn on_online(&self, handler: impl FnMut(&H::Event) + 'static) -> Result<(), Error> {
        self.listen(WindowEvent::Online, false, handler)
    }

    /// Runs `handler` when the window is resized.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered.
    pub fn on_resize(&self, handler: impl FnMut(&H::Event) + 'static) -> Result<(), Error> {
        self.listen(WindowEvent::Resize, false, handler)
    }

    /// Runs `handler` when the page scrolls.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered.
    pub fn on_scroll(&self, handler: impl FnMut(&H::Event) + 'static) -> Result<(), Error> {
        self.listen(WindowEvent::Scroll, false, handler)
    }
}

fn ensure_head_element<H: Host>(host: &H, selector: &str, tag: &str) -> Result<H::Node, Error> {
    if let Some(existing) = host.query_selector(selector)? {
        return Ok(existing);
    }
    let element = host.create_element(tag)?;
    host.head()?.append_child(&element)?;
    Ok(element)
}
