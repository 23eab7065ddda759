//! Application-level behaviour against the headless document.

use core::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{
    AppManifest, Application, ApplicationConfig, DomNode, Element, ElementOptions, Error, Host,
    RouterMode, Visibility, WindowEvent,
    app::VIEWPORT_NO_ZOOM,
    element::{heading1, paragraph},
    headless::{HeadlessHost, HistoryEntry},
    router::NOT_FOUND,
};

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A route component writing a single paragraph into the body.
fn page(host: &HeadlessHost, text: &'static str) -> impl Fn() + 'static {
    let host = host.clone();
    move || {
        let mut body = Element::body(&host).unwrap();
        paragraph(&mut body, ElementOptions::content(text)).unwrap();
    }
}

fn site(host: &HeadlessHost) -> ApplicationConfig {
    ApplicationConfig::new("Site")
        .route("/", page(host, "home"))
        .route("/about", page(host, "about"))
        .route(NOT_FOUND, page(host, "not found"))
}

fn body_text(host: &HeadlessHost) -> String {
    host.body().unwrap().text_content()
}

fn viewport_metas(host: &HeadlessHost) -> usize {
    host.head()
        .unwrap()
        .children()
        .iter()
        .filter(|node| node.attribute("name").as_deref() == Some("viewport"))
        .count()
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_viewport_meta_written_once() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), Some(site(&host))).unwrap();
    app.set_config(site(&host)).unwrap();

    assert_eq!(viewport_metas(&host), 1);
    let meta = host.query_selector("meta[name=\"viewport\"]").unwrap().unwrap();
    assert_eq!(meta.attribute("content").as_deref(), Some(VIEWPORT_NO_ZOOM));
}

#[test]
fn test_allow_zoom_skips_viewport() {
    let host = HeadlessHost::new();
    Application::new(host.clone(), Some(site(&host).allow_zoom(true))).unwrap();
    assert_eq!(viewport_metas(&host), 0);
}

#[test]
fn test_document_settings() {
    let host = HeadlessHost::new();
    let config = site(&host)
        .icon("/favicon.ico")
        .status_bar_color("#123456")
        .scrollbar_visibility(Visibility::Hidden);

    Application::new(host.clone(), Some(config)).unwrap();

    assert_eq!(host.title(), "Site");
    let theme = host
        .query_selector("meta[name=\"theme-color\"]")
        .unwrap()
        .unwrap();
    assert_eq!(theme.attribute("content").as_deref(), Some("#123456"));
    let icon = host.query_selector("link[rel=\"icon\"]").unwrap().unwrap();
    assert_eq!(icon.attribute("href").as_deref(), Some("/favicon.ico"));
    assert!(host.body().unwrap().has_class("noscrollbar"));

    let app = Application::new(host.clone(), None).unwrap();
    app.set_config(
        ApplicationConfig::new("").scrollbar_visibility(Visibility::Shown),
    )
    .unwrap();
    assert!(!host.body().unwrap().has_class("noscrollbar"));
    assert_eq!(host.title(), "Site");
}

#[test]
fn test_missing_config_is_tolerated() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), None).unwrap();

    assert_eq!(app.mode(), None);
    assert!(!app.has_route("/"));

    app.open_route("/").unwrap();
    assert_eq!(body_text(&host), "");
    assert_eq!(host.location_path(), NOT_FOUND);
}

#[test]
fn test_manifest_from_json() {
    let manifest = AppManifest::from_json(
        r##"{
            "title": "Shop",
            "icon": "/icon.png",
            "mode": "hash",
            "allowzoom": true,
            "statusbarcolor": "#101010",
            "scrollbarvisibility": "hidden"
        }"##,
    )
    .unwrap();

    assert_eq!(manifest.title, "Shop");
    assert_eq!(manifest.icon.as_deref(), Some("/icon.png"));
    assert_eq!(manifest.mode, RouterMode::Hash);
    assert!(manifest.allow_zoom);
    assert_eq!(manifest.status_bar_color.as_deref(), Some("#101010"));
    assert_eq!(manifest.scrollbar_visibility, Some(Visibility::Hidden));

    let defaults = AppManifest::from_json(r#"{ "title": "Min" }"#).unwrap();
    assert_eq!(defaults.mode, RouterMode::History);
    assert!(!defaults.allow_zoom);

    assert!(matches!(
        AppManifest::from_json(r#"{ "scrollbarvisibility": "sometimes" }"#),
        Err(Error::Config(_))
    ));
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn test_open_route_renders_component() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), Some(site(&host))).unwrap();

    app.open_route("/about").unwrap();

    assert_eq!(body_text(&host), "about");
    assert_eq!(host.location_path(), "/about");
    assert_eq!(host.history_index(), Some(1));
}

#[test]
fn test_unknown_route_renders_not_found() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), Some(site(&host))).unwrap();

    app.open_route("/does/not/exist").unwrap();

    assert_eq!(body_text(&host), "not found");
    assert_eq!(host.location_path(), NOT_FOUND);
}

#[test]
fn test_missing_not_found_leaves_blank_body() {
    let host = HeadlessHost::new();
    let config = ApplicationConfig::new("Site").route("/", page(&host, "home"));
    let app = Application::new(host.clone(), Some(config)).unwrap();
    app.open_route("/").unwrap();

    app.open_route("/nowhere").unwrap();

    assert!(host.body().unwrap().children().is_empty());
    assert_eq!(app.page_index(), 2);
    assert_eq!(host.location_path(), NOT_FOUND);
}

#[test]
fn test_body_is_replaced_on_navigation() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), Some(site(&host))).unwrap();
    let mut body = Element::body(&host).unwrap();
    heading1(&mut body, ElementOptions::content("stale")).unwrap();

    app.open_route("/").unwrap();
    app.open_route("/about").unwrap();

    assert_eq!(host.body().unwrap().children().len(), 1);
    assert_eq!(body_text(&host), "about");
}

#[test]
fn test_page_index_counts_navigations() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), Some(site(&host))).unwrap();

    for (n, path) in ["/", "/about", "/x", "/", "/about"].iter().enumerate() {
        app.open_route(path).unwrap();
        assert_eq!(app.page_index() as usize, n + 1);
    }

    let indices: Vec<Option<u32>> = host.history().iter().map(|e| e.index).collect();
    assert_eq!(
        indices,
        vec![None, Some(1), Some(2), Some(3), Some(4), Some(5)]
    );
}

#[test]
fn test_page_index_restored_from_history_state() {
    let host = HeadlessHost::new();
    host.push_history(4, "/about").unwrap();

    let app = Application::new(host.clone(), Some(site(&host))).unwrap();
    assert_eq!(app.page_index(), 4);

    app.open_route("/").unwrap();
    assert_eq!(app.page_index(), 5);
}

#[test]
fn test_back_restores_index_without_pushing() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), Some(site(&host))).unwrap();
    app.open_route("/").unwrap();
    app.open_route("/about").unwrap();
    let entries = host.history().len();

    assert!(host.back());

    assert_eq!(app.page_index(), 1);
    assert_eq!(body_text(&host), "home");
    assert_eq!(host.history().len(), entries);

    assert!(host.back());
    assert_eq!(app.page_index(), 0);
    assert_eq!(
        host.history()[0],
        HistoryEntry {
            index: None,
            url: "/".to_string()
        }
    );
    assert_eq!(body_text(&host), "home");
}

#[test]
fn test_reconfiguring_keeps_single_route_listener() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), Some(site(&host))).unwrap();
    app.set_config(site(&host)).unwrap();

    assert_eq!(host.listener_count(WindowEvent::PopState), 1);
}

#[test]
fn test_hash_mode_does_not_navigate() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), Some(site(&host).mode(RouterMode::Hash))).unwrap();

    app.open_route("/about").unwrap();
    host.set_hash("/about");

    assert_eq!(app.mode(), Some(RouterMode::Hash));
    assert_eq!(body_text(&host), "");
    assert_eq!(app.page_index(), 0);
    assert_eq!(host.listener_count(WindowEvent::HashChange), 1);
    assert_eq!(host.listener_count(WindowEvent::PopState), 0);
}

#[test]
fn test_switch_to_hash_mode_stops_history_rendering() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), Some(site(&host))).unwrap();
    app.open_route("/about").unwrap();

    app.set_config(site(&host).mode(RouterMode::Hash)).unwrap();
    let mut body = Element::body(&host).unwrap();
    heading1(&mut body, ElementOptions::content("kept")).unwrap();

    assert!(host.back());

    assert_eq!(app.mode(), Some(RouterMode::Hash));
    assert_eq!(body_text(&host), "aboutkept");
    assert_eq!(app.page_index(), 1);
    assert_eq!(host.listener_count(WindowEvent::HashChange), 1);
    assert_eq!(host.listener_count(WindowEvent::PopState), 1);

    host.set_hash("/about");
    assert_eq!(body_text(&host), "aboutkept");
}

#[test]
fn test_switch_back_to_history_reuses_listener() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), Some(site(&host))).unwrap();
    app.set_config(site(&host).mode(RouterMode::Hash)).unwrap();
    app.set_config(site(&host)).unwrap();
    app.open_route("/about").unwrap();

    assert!(host.back());

    assert_eq!(app.mode(), Some(RouterMode::History));
    assert_eq!(body_text(&host), "home");
    assert_eq!(host.listener_count(WindowEvent::PopState), 1);
    assert_eq!(host.listener_count(WindowEvent::HashChange), 1);
}

#[test]
fn test_component_can_navigate() {
    let host = HeadlessHost::new();
    let slot: Rc<RefCell<Option<Application<HeadlessHost>>>> = Rc::new(RefCell::new(None));
    let redirect = slot.clone();
    let config = site(&host).route("/old", move || {
        if let Some(app) = redirect.borrow().as_ref() {
            app.open_route("/about").unwrap();
        }
    });

    let app = Application::new(host.clone(), Some(config)).unwrap();
    *slot.borrow_mut() = Some(app.clone());

    app.open_route("/old").unwrap();

    assert_eq!(body_text(&host), "about");
    assert_eq!(app.page_index(), 2);
    // The outer navigation pushes last, so the URL is the redirecting route.
    assert_eq!(host.location_path(), "/old");
    let urls: Vec<String> = host.history().into_iter().map(|e| e.url).collect();
    assert_eq!(urls, vec!["/", "/about", "/old"]);
}

#[test]
fn test_open_current() {
    let host = HeadlessHost::with_location("/about");
    let app = Application::new(host.clone(), Some(site(&host))).unwrap();

    app.open_current().unwrap();

    assert_eq!(body_text(&host), "about");
}

// ============================================================================
// Lifecycle hooks
// ============================================================================

#[test]
fn test_lifecycle_hooks() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), Some(site(&host))).unwrap();
    let fired: Rc<RefCell<Vec<WindowEvent>>> = Rc::default();

    let record = |log: &Rc<RefCell<Vec<WindowEvent>>>| {
        let log = log.clone();
        move |event: &crate::headless::HeadlessEvent| log.borrow_mut().push(event.kind())
    };

    app.on_exit(record(&fired)).unwrap();
    app.on_start(record(&fired)).unwrap();
    app.on_pause(record(&fired)).unwrap();
    app.on_resume(record(&fired)).unwrap();
    app.on_offline(record(&fired)).unwrap();
    app.on_online(record(&fired)).unwrap();
    app.on_resize(record(&fired)).unwrap();
    app.on_scroll(record(&fired)).unwrap();

    let all = [
        WindowEvent::BeforeUnload,
        WindowEvent::Load,
        WindowEvent::Blur,
        WindowEvent::Focus,
        WindowEvent::Offline,
        WindowEvent::Online,
        WindowEvent::Resize,
        WindowEvent::Scroll,
    ];
    for event in all {
        host.dispatch(event);
    }

    assert_eq!(*fired.borrow(), all);
    assert!(host.dispatch(WindowEvent::BeforeUnload).default_prevented());
    assert!(!host.dispatch(WindowEvent::Resize).default_prevented());
}

#[test]
fn test_on_back_runs_alongside_router() {
    let host = HeadlessHost::new();
    let app = Application::new(host.clone(), Some(site(&host))).unwrap();
    let backs = Rc::new(Cell::new(0));
    let counter = backs.clone();
    app.on_back(move |event| {
        assert!(event.default_prevented());
        counter.set(counter.get() + 1);
    })
    .unwrap();

    app.open_route("/about").unwrap();
    host.back();

    assert_eq!(backs.get(), 1);
    assert_eq!(app.page_index(), 0);
    assert_eq!(body_text(&host), "home");
}
