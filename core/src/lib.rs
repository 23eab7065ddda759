#![allow(clippy::module_name_repetitions)]

//! Core of the `innerscope` toolkit.
//!
//! Everything here is a thin wrapper over native document operations: element
//! helpers that create and attach nodes, layout containers that toggle CSS
//! classes, and an application context that owns the route table and pushes
//! history entries.
//!
//! The document itself is reached through the [`Host`] and [`DomNode`] traits.
//! Browsers are served by `innerscope-web`; [`headless`] provides an in-memory
//! document for tests and tooling.

pub mod app;
pub mod component;
pub mod dom;
pub mod element;
mod error;
pub mod headless;
pub mod layout;
pub mod router;

#[cfg(test)]
mod tests;

pub use app::{AppManifest, Application, ApplicationConfig};
pub use component::{Fraction, Prop, StyledComponent, button};
pub use dom::{DomNode, Element, Host, Parent, WindowEvent};
pub use element::{Content, ElementOptions, create_element};
pub use error::Error;
pub use layout::{
    ElementAlignment, Layout, LayoutDirection, LayoutKind, ParentFill, ScrollDirection, Visibility,
    column_layout, grid_layout, linear_layout, show_if,
};
pub use router::{Component, Route, Router, RouterMode};
