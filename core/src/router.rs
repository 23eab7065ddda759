//! Route table and navigation state.

use core::fmt;
use std::{collections::HashMap, rc::Rc};

use serde::{Deserialize, Serialize};

/// Path substituted for every unknown route.
pub const NOT_FOUND: &str = "/404";

/// A zero-argument render callback.
pub type Component = Rc<dyn Fn()>;

/// How navigation is reflected in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterMode {
    /// Fragment based routing (`#/path`). Navigation is not implemented in
    /// this mode and is only logged.
    Hash,
    /// `history.pushState` based routing.
    #[default]
    History,
}

/// A path bound to the component rendering it.
#[derive(Clone)]
pub struct Route {
    path: String,
    component: Component,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("path", &self.path).finish()
    }
}

impl Route {
    /// Binds `component` to `path`.
    pub fn new(path: impl Into<String>, component: impl Fn() + 'static) -> Self {
        Self {
            path: path.into(),
            component: Rc::new(component),
        }
    }

    /// The route path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The render callback.
    #[must_use]
    pub fn component(&self) -> Component {
        self.component.clone()
    }
}

/// Route table, router mode and page index of one application.
#[derive(Default)]
pub struct Router {
    mode: Option<RouterMode>,
    routes: HashMap<String, Component>,
    page_index: u32,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<&String> = self.routes.keys().collect();
        paths.sort();
        f.debug_struct("Router")
            .field("mode", &self.mode)
            .field("routes", &paths)
            .field("page_index", &self.page_index)
            .finish()
    }
}

impl Router {
    /// An unconfigured router with no routes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured mode, `None` until configured.
    #[must_use]
    pub const fn mode(&self) -> Option<RouterMode> {
        self.mode
    }

    /// Sets the routing mode.
    pub const fn set_mode(&mut self, mode: RouterMode) {
        self.mode = Some(mode);
    }

    /// Registers `component` under `path`, replacing any previous binding.
    pub fn add_route(&mut self, path: impl Into<String>, component: Component) {
        self.routes.insert(path.into(), component);
    }

    /// Whether `path` is registered.
    #[must_use]
    pub fn has_route(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    /// The component registered under `path`.
    #[must_use]
    pub fn route(&self, path: &str) -> Option<Component> {
        self.routes.get(path).cloned()
    }

    /// `path` itself when registered, [`NOT_FOUND`] otherwise.
    #[must_use]
    pub fn resolve<'a>(&self, path: &'a str) -> &'a str {
        if self.has_route(path) { path } else { NOT_FOUND }
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no route is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The current page index.
    #[must_use]
    pub const fn page_index(&self) -> u32 {
        self.page_index
    }

    /// Overwrites the page index, e.g. from a popped history entry.
    pub const fn set_page_index(&mut self, index: u32) {
        self.page_index = index;
    }

    /// Increments the page index and returns the new value.
    pub const fn advance(&mut self) -> u32 {
        self.page_index = self.page_index.saturating_add(1);
        self.page_index
    }
}
