#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Browser host for the `innerscope` toolkit.
//!
//! [`WebHost`] implements the toolkit's host traits over `web-sys`: elements
//! are plain [`web_sys::Element`]s, navigation goes through
//! `history.pushState` and window events are subscribed with
//! `addEventListener` for the life of the page.
//!
//! [`WebApp`] bootstraps everything for `wasm32-unknown-unknown` targets:
//! console logging, the panic hook, the baseline stylesheet and the
//! application context.

mod app;
mod dom;
mod error;
mod host;
pub mod logging;

pub use app::{WebApp, WebAppBuilder};
pub use error::WebError;
pub use host::WebHost;
