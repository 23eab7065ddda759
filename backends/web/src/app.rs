use innerscope_core::{Application, ApplicationConfig};
use tracing::info;
use wasm_bindgen::prelude::*;

use crate::{
    error::WebError,
    host::WebHost,
    logging::{DEFAULT_FILTER, install_panic_hook, install_tracing},
};

/// Builder for [`WebApp`].
#[derive(Debug, Clone)]
pub struct WebAppBuilder {
    inject_default_styles: bool,
    log_filter: String,
}

impl Default for WebAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WebAppBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inject_default_styles: true,
            log_filter: DEFAULT_FILTER.to_string(),
        }
    }

    /// Controls whether the baseline stylesheet behind the layout classes is injected.
    #[must_use]
    pub const fn inject_default_styles(mut self, inject: bool) -> Self {
        self.inject_default_styles = inject;
        self
    }

    /// Sets the `tracing` filter for console output, e.g. `"debug"`.
    #[must_use]
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Installs logging, binds to the browser window and applies `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM is unavailable or `config` cannot be applied.
    pub fn build(self, config: Option<ApplicationConfig>) -> Result<WebApp, WebError> {
        install_panic_hook();
        install_tracing(&self.log_filter);
        info!("innerscope v{}", env!("CARGO_PKG_VERSION"));

        let host = WebHost::new()?;
        if self.inject_default_styles {
            host.inject_default_styles()?;
        }

        let application = Application::new(host, config)?;
        Ok(WebApp { application })
    }
}

/// Entry point for running an innerscope application inside the browser.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct WebApp {
    application: Application<WebHost>,
}

impl WebApp {
    /// Starts an application with the default builder settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM is unavailable or `config` cannot be applied.
    pub fn launch(config: ApplicationConfig) -> Result<Self, WebError> {
        WebAppBuilder::new().build(Some(config))
    }

    /// The application context, for registering hooks and routes.
    #[must_use]
    pub const fn application(&self) -> &Application<WebHost> {
        &self.application
    }

    /// The browser host.
    #[must_use]
    pub fn host(&self) -> &WebHost {
        self.application.host()
    }
}

#[wasm_bindgen]
impl WebApp {
    /// Navigates to `path`, falling back to `/404`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be replaced or history is unavailable.
    #[wasm_bindgen(js_name = openRoute)]
    pub fn open_route(&self, path: &str) -> Result<(), WebError> {
        self.application.open_route(path).map_err(WebError::from)
    }

    /// Opens the route for the current `location.pathname`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be replaced or history is unavailable.
    #[wasm_bindgen(js_name = openCurrent)]
    pub fn open_current(&self) -> Result<(), WebError> {
        self.application.open_current().map_err(WebError::from)
    }

    /// The current page index.
    #[wasm_bindgen(getter, js_name = pageIndex)]
    #[must_use]
    pub fn page_index(&self) -> u32 {
        self.application.page_index()
    }
}
