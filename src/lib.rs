#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

#[doc(inline)]
pub use innerscope_core::{
    AppManifest, Application, ApplicationConfig, Component, Content, DomNode, Element,
    ElementAlignment, ElementOptions, Error, Fraction, Host, Layout, LayoutDirection, LayoutKind,
    Parent, ParentFill, Prop, Route, Router, RouterMode, ScrollDirection, StyledComponent,
    Visibility, WindowEvent, button, column_layout, create_element, grid_layout, linear_layout,
    show_if,
};
pub use innerscope_core::{app, component, dom, element, headless, layout, router};

/// Browser host, available with the `web` feature.
#[cfg(feature = "web")]
pub use innerscope_web as web;

/// Logging macros used throughout the toolkit.
pub use tracing as log;

pub mod prelude {
    //! Commonly used types and helpers in one import.
    //!
    //! ```rust
    //! use innerscope::prelude::*;
    //!
    //! let host = HeadlessHost::new();
    //! let mut body = Element::body(&host).unwrap();
    //! let mut page = column_layout(&mut body).unwrap();
    //! element::paragraph(&mut page, ElementOptions::content("Hello")).unwrap();
    //! assert_eq!(page.children().len(), 1);
    //! ```
    pub use super::*;
    pub use innerscope_core::headless::{HeadlessHost, HeadlessNode};

    #[cfg(feature = "web")]
    pub use innerscope_web::{WebApp, WebAppBuilder, WebHost};
}
