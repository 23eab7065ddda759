//! An in-memory document.
//!
//! [`HeadlessHost`] behaves like a browser window closely enough for the
//! toolkit: nodes form a real tree, the history keeps a stack of entries and
//! window events are dispatched by calling [`HeadlessHost::dispatch`]. It is
//! what the test-suite runs against and is handy for rendering outside a
//! browser.

use core::{
    cell::{Cell, RefCell},
    fmt,
};
use std::rc::{Rc, Weak};

use crate::{
    DomNode, Error, Host, WindowEvent,
    dom::EventHandler,
};

struct NodeCell {
    tag: String,
    owner: Weak<DocumentCell>,
    data: RefCell<NodeData>,
}

#[derive(Default)]
struct NodeData {
    parent: Option<Weak<NodeCell>>,
    text: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    style: Vec<(String, String)>,
    children: Vec<HeadlessNode>,
}

/// Handle to an element of a [`HeadlessHost`] document.
#[derive(Clone)]
pub struct HeadlessNode(Rc<NodeCell>);

impl PartialEq for HeadlessNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for HeadlessNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.data.borrow();
        f.debug_struct("HeadlessNode")
            .field("tag", &self.0.tag)
            .field("classes", &data.classes)
            .field("children", &data.children.len())
            .finish()
    }
}

impl HeadlessNode {
    fn new(tag: &str, owner: Weak<DocumentCell>) -> Self {
        Self(Rc::new(NodeCell {
            tag: tag.to_ascii_lowercase(),
            owner,
            data: RefCell::new(NodeData::default()),
        }))
    }

    fn parent(&self) -> Option<Self> {
        self.0
            .data
            .borrow()
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(Self)
    }

    fn contains(&self, other: &Self) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.parent();
        }
        false
    }

    fn detach(child: &Self) {
        if let Some(parent) = child.parent() {
            parent.0.data.borrow_mut().children.retain(|c| c != child);
        }
        child.0.data.borrow_mut().parent = None;
    }

    fn adopt(&self, child: &Self) -> Result<(), Error> {
        if child.contains(self) {
            return Err(Error::Dom(format!(
                "cannot insert <{}> into itself or one of its descendants",
                child.0.tag
            )));
        }
        Self::detach(child);
        child.0.data.borrow_mut().parent = Some(Rc::downgrade(&self.0));
        Ok(())
    }

    fn release_children(&self) {
        let children = core::mem::take(&mut self.0.data.borrow_mut().children);
        for child in &children {
            child.0.data.borrow_mut().parent = None;
        }
    }

    fn find(&self, selector: &Selector) -> Option<Self> {
        if selector.matches(self) {
            return Some(self.clone());
        }
        let children = self.0.data.borrow().children.clone();
        children.iter().find_map(|child| child.find(selector))
    }

    /// Renders the subtree as HTML-like markup, for assertions and debugging.
    #[must_use]
    pub fn outer_html(&self) -> String {
        let data = self.0.data.borrow();
        let mut html = format!("<{}", self.0.tag);
        for (name, value) in &data.attributes {
            html.push_str(&format!(" {name}=\"{value}\""));
        }
        if !data.classes.is_empty() {
            html.push_str(&format!(" class=\"{}\"", data.classes.join(" ")));
        }
        if !data.style.is_empty() {
            let style: Vec<String> = data
                .style
                .iter()
                .map(|(property, value)| format!("{property}: {value};"))
                .collect();
            html.push_str(&format!(" style=\"{}\"", style.join(" ")));
        }
        html.push('>');
        html.push_str(&data.text);
        for child in &data.children {
            html.push_str(&child.outer_html());
        }
        html.push_str(&format!("</{}>", self.0.tag));
        html
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == ':')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

fn check_class(class: &str) -> Result<(), Error> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(Error::Dom(format!("invalid class token `{class}`")));
    }
    Ok(())
}

impl DomNode for HeadlessNode {
    fn create_element(&self, tag: &str) -> Result<Self, Error> {
        if !is_valid_name(tag) {
            return Err(Error::InvalidArgument(format!("`{tag}` is not a valid tag name")));
        }
        Ok(Self::new(tag, self.0.owner.clone()))
    }

    fn document_head(&self) -> Result<Self, Error> {
        self.0
            .owner
            .upgrade()
            .map(|document| document.head.clone())
            .ok_or(Error::Unavailable("document head"))
    }

    fn tag_name(&self) -> String {
        self.0.tag.clone()
    }

    fn append_child(&self, child: &Self) -> Result<(), Error> {
        self.adopt(child)?;
        self.0.data.borrow_mut().children.push(child.clone());
        Ok(())
    }

    fn remove_child(&self, child: &Self) -> Result<(), Error> {
        if child.parent().as_ref() != Some(self) {
            return Err(Error::Dom(format!(
                "<{}> is not a child of <{}>",
                child.0.tag, self.0.tag
            )));
        }
        Self::detach(child);
        Ok(())
    }

    fn insert_before(&self, child: &Self, reference: &Self) -> Result<(), Error> {
        if reference.parent().as_ref() != Some(self) {
            return Err(Error::Dom(format!(
                "reference <{}> is not a child of <{}>",
                reference.0.tag, self.0.tag
            )));
        }
        if child == reference {
            return Ok(());
        }
        self.adopt(child)?;
        let mut data = self.0.data.borrow_mut();
        let position = data
            .children
            .iter()
            .position(|c| c == reference)
            .unwrap_or(data.children.len());
        data.children.insert(position, child.clone());
        Ok(())
    }

    fn clear_children(&self) -> Result<(), Error> {
        self.release_children();
        self.0.data.borrow_mut().text.clear();
        Ok(())
    }

    fn children(&self) -> Vec<Self> {
        self.0.data.borrow().children.clone()
    }

    fn text_content(&self) -> String {
        let data = self.0.data.borrow();
        let mut text = data.text.clone();
        for child in &data.children {
            text.push_str(&child.text_content());
        }
        text
    }

    fn set_text_content(&self, text: &str) {
        self.release_children();
        self.0.data.borrow_mut().text = text.to_string();
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let data = self.0.data.borrow();
        if name == "class" {
            return (!data.classes.is_empty()).then(|| data.classes.join(" "));
        }
        data.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), Error> {
        if !is_valid_name(name) {
            return Err(Error::InvalidArgument(format!(
                "`{name}` is not a valid attribute name"
            )));
        }
        let mut data = self.0.data.borrow_mut();
        if name == "class" {
            data.classes = value.split_whitespace().map(str::to_string).collect();
            return Ok(());
        }
        match data.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => data.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn id(&self) -> String {
        self.attribute("id").unwrap_or_default()
    }

    fn set_id(&self, id: &str) {
        // "id" always passes name validation.
        let _ = self.set_attribute("id", id);
    }

    fn add_class(&self, class: &str) -> Result<(), Error> {
        check_class(class)?;
        let mut data = self.0.data.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), Error> {
        check_class(class)?;
        self.0.data.borrow_mut().classes.retain(|c| c != class);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.data.borrow().classes.iter().any(|c| c == class)
    }

    fn classes(&self) -> Vec<String> {
        self.0.data.borrow().classes.clone()
    }

    fn style(&self, property: &str) -> Option<String> {
        self.0
            .data
            .borrow()
            .style
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.clone())
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), Error> {
        let mut data = self.0.data.borrow_mut();
        match data.style.iter_mut().find(|(key, _)| key == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => data.style.push((property.to_string(), value.to_string())),
        }
        Ok(())
    }
}

/// The subset of CSS selectors the toolkit issues: `tag`, `#id`,
/// `[name="value"]` and combinations such as `meta[name="viewport"]`.
#[derive(Debug, Default, PartialEq, Eq)]
struct Selector {
    tag: Option<String>,
    id: Option<String>,
    attribute: Option<(String, Option<String>)>,
}

impl Selector {
    fn parse(input: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidArgument(format!("unsupported selector `{input}`"));
        let input = input.trim();
        if input.is_empty() {
            return Err(invalid());
        }

        let (head, attribute) = match input.split_once('[') {
            Some((head, rest)) => {
                let inner = rest.strip_suffix(']').ok_or_else(invalid)?;
                let attribute = match inner.split_once('=') {
                    Some((name, value)) => {
                        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                        (name.trim().to_string(), Some(value.to_string()))
                    }
                    None => (inner.trim().to_string(), None),
                };
                (head, Some(attribute))
            }
            None => (input, None),
        };

        let (tag, id) = match head.split_once('#') {
            Some((tag, id)) => (tag, Some(id.to_string())),
            None => (head, None),
        };

        let tag = (!tag.is_empty()).then(|| tag.to_ascii_lowercase());
        if tag.as_deref().is_some_and(|t| !is_valid_name(t)) {
            return Err(invalid());
        }

        Ok(Self { tag, id, attribute })
    }

    fn matches(&self, node: &HeadlessNode) -> bool {
        if self.tag.as_ref().is_some_and(|tag| *tag != node.0.tag) {
            return false;
        }
        if self.id.as_ref().is_some_and(|id| *id != node.id()) {
            return false;
        }
        match &self.attribute {
            Some((name, Some(value))) => node.attribute(name).as_ref() == Some(value),
            Some((name, None)) => node.attribute(name).is_some(),
            None => true,
        }
    }
}

struct DocumentCell {
    html: HeadlessNode,
    head: HeadlessNode,
    body: HeadlessNode,
}

/// One history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The `{ index }` state, `None` for the initial entry.
    pub index: Option<u32>,
    /// The entry URL.
    pub url: String,
}

#[derive(Debug)]
struct History {
    entries: Vec<HistoryEntry>,
    position: usize,
}

struct Listener {
    event: WindowEvent,
    prevent_default: bool,
    handler: RefCell<EventHandler<HeadlessEvent>>,
}

struct HostState {
    document: Rc<DocumentCell>,
    title: RefCell<String>,
    history: RefCell<History>,
    listeners: RefCell<Vec<Rc<Listener>>>,
}

/// Event delivered to headless window listeners.
#[derive(Debug)]
pub struct HeadlessEvent {
    kind: WindowEvent,
    default_prevented: Cell<bool>,
}

impl HeadlessEvent {
    /// Which window event fired.
    #[must_use]
    pub const fn kind(&self) -> WindowEvent {
        self.kind
    }

    /// Cancels the default action.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    /// Whether a listener cancelled the default action.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// An in-memory window with a document, history stack and event listeners.
#[derive(Clone)]
pub struct HeadlessHost {
    state: Rc<HostState>,
}

impl fmt::Debug for HeadlessHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessHost")
            .field("title", &self.state.title.borrow())
            .field("history", &self.state.history.borrow())
            .field("listeners", &self.state.listeners.borrow().len())
            .finish()
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessHost {
    /// Creates an empty document located at `/`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_location("/")
    }

    /// Creates an empty document located at `url`.
    #[must_use]
    pub fn with_location(url: &str) -> Self {
        let document = Rc::new_cyclic(|owner: &Weak<DocumentCell>| {
            let html = HeadlessNode::new("html", owner.clone());
            let head = HeadlessNode::new("head", owner.clone());
            let body = HeadlessNode::new("body", owner.clone());
            // Fresh nodes never fail to attach.
            let _ = html.append_child(&head);
            let _ = html.append_child(&body);
            DocumentCell { html, head, body }
        });

        Self {
            state: Rc::new(HostState {
                document,
                title: RefCell::new(String::new()),
                history: RefCell::new(History {
                    entries: vec![HistoryEntry {
                        index: None,
                        url: url.to_string(),
                    }],
                    position: 0,
                }),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// The `<html>` element.
    #[must_use]
    pub fn document_element(&self) -> HeadlessNode {
        self.state.document.html.clone()
    }

    /// Every history entry, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.state.history.borrow().entries.clone()
    }

    /// Number of listeners subscribed to `event`.
    #[must_use]
    pub fn listener_count(&self, event: WindowEvent) -> usize {
        self.state
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.event == event)
            .count()
    }

    /// Fires `event` at every subscribed listener, in subscription order.
    ///
    /// The listeners subscribed when dispatch starts are the ones called.
    /// Listeners may subscribe or dispatch again while running; a nested
    /// dispatch reaches every listener except those still on the stack.
    pub fn dispatch(&self, event: WindowEvent) -> HeadlessEvent {
        let fired = HeadlessEvent {
            kind: event,
            default_prevented: Cell::new(false),
        };

        let snapshot: Vec<Rc<Listener>> = self
            .state
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.event == event)
            .cloned()
            .collect();

        for listener in snapshot {
            let Ok(mut handler) = listener.handler.try_borrow_mut() else {
                continue;
            };
            if listener.prevent_default {
                fired.prevent_default();
            }
            handler(&fired);
        }

        fired
    }

    /// Steps one entry back in history and fires `popstate`.
    ///
    /// Returns `false` when already at the first entry.
    pub fn back(&self) -> bool {
        {
            let mut history = self.state.history.borrow_mut();
            if history.position == 0 {
                return false;
            }
            history.position -= 1;
        }
        self.dispatch(WindowEvent::PopState);
        true
    }

    /// Steps one entry forward in history and fires `popstate`.
    ///
    /// Returns `false` when already at the last entry.
    pub fn forward(&self) -> bool {
        {
            let mut history = self.state.history.borrow_mut();
            if history.position + 1 >= history.entries.len() {
                return false;
            }
            history.position += 1;
        }
        self.dispatch(WindowEvent::PopState);
        true
    }

    /// Replaces the fragment of the current URL and fires `hashchange`.
    pub fn set_hash(&self, hash: &str) {
        {
            let mut history = self.state.history.borrow_mut();
            let position = history.position;
            let entry = &mut history.entries[position];
            let base = entry.url.split('#').next().unwrap_or_default().to_string();
            entry.url = format!("{base}#{hash}");
        }
        self.dispatch(WindowEvent::HashChange);
    }

    fn current_url(&self) -> String {
        let history = self.state.history.borrow();
        history.entries[history.position].url.clone()
    }
}

impl Host for HeadlessHost {
    type Node = HeadlessNode;
    type Event = HeadlessEvent;

    fn body(&self) -> Result<Self::Node, Error> {
        Ok(self.state.document.body.clone())
    }

    fn head(&self) -> Result<Self::Node, Error> {
        Ok(self.state.document.head.clone())
    }

    fn create_element(&self, tag: &str) -> Result<Self::Node, Error> {
        self.state.document.html.create_element(tag)
    }

    fn title(&self) -> String {
        self.state.title.borrow().clone()
    }

    fn set_title(&self, title: &str) {
        *self.state.title.borrow_mut() = title.to_string();
    }

    fn query_selector(&self, selector: &str) -> Result<Option<Self::Node>, Error> {
        let selector = Selector::parse(selector)?;
        Ok(self.state.document.html.find(&selector))
    }

    fn location_path(&self) -> String {
        let url = self.current_url();
        let end = url.find(['?', '#']).unwrap_or(url.len());
        url[..end].to_string()
    }

    fn location_hash(&self) -> String {
        self.current_url()
            .split_once('#')
            .map(|(_, hash)| hash.to_string())
            .unwrap_or_default()
    }

    fn history_index(&self) -> Option<u32> {
        let history = self.state.history.borrow();
        history.entries[history.position].index
    }

    fn push_history(&self, index: u32, url: &str) -> Result<(), Error> {
        let mut history = self.state.history.borrow_mut();
        let next = history.position + 1;
        history.entries.truncate(next);
        history.entries.push(HistoryEntry {
            index: Some(index),
            url: url.to_string(),
        });
        history.position = next;
        Ok(())
    }

    fn listen(
        &self,
        event: WindowEvent,
        prevent_default: bool,
        handler: EventHandler<Self::Event>,
    ) -> Result<(), Error> {
        self.state.listeners.borrow_mut().push(Rc::new(Listener {
            event,
            prevent_default,
            handler: RefCell::new(handler),
        }));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_skeleton() {
        let host = HeadlessHost::new();
        let html = host.document_element();
        assert_eq!(
            html.children(),
            vec![host.head().unwrap(), host.body().unwrap()]
        );
        assert_eq!(host.location_path(), "/");
    }

    #[test]
    fn test_append_moves_node() {
        let host = HeadlessHost::new();
        let first = host.create_element("div").unwrap();
        let second = host.create_element("div").unwrap();
        let child = host.create_element("span").unwrap();

        first.append_child(&child).unwrap();
        second.append_child(&child).unwrap();

        assert!(first.children().is_empty());
        assert_eq!(second.children(), vec![child]);
    }

    #[test]
    fn test_append_into_descendant_fails() {
        let host = HeadlessHost::new();
        let outer = host.create_element("div").unwrap();
        let inner = host.create_element("div").unwrap();
        outer.append_child(&inner).unwrap();

        assert!(inner.append_child(&outer).is_err());
        assert!(outer.append_child(&outer).is_err());
    }

    #[test]
    fn test_insert_before_and_remove() {
        let host = HeadlessHost::new();
        let list = host.create_element("ul").unwrap();
        let a = host.create_element("li").unwrap();
        let b = host.create_element("li").unwrap();
        list.append_child(&b).unwrap();
        list.insert_before(&a, &b).unwrap();
        assert_eq!(list.children(), vec![a.clone(), b.clone()]);

        list.remove_child(&a).unwrap();
        assert_eq!(list.children(), vec![b]);
        assert!(list.remove_child(&a).is_err());
    }

    #[test]
    fn test_text_content_replaces_children() {
        let host = HeadlessHost::new();
        let p = host.create_element("p").unwrap();
        let b = host.create_element("b").unwrap();
        b.set_text_content("bold");
        p.append_child(&b).unwrap();
        assert_eq!(p.text_content(), "bold");

        p.set_text_content("plain");
        assert!(p.children().is_empty());
        assert_eq!(p.text_content(), "plain");
    }

    #[test]
    fn test_class_attribute_mirrors_class_list() {
        let host = HeadlessHost::new();
        let div = host.create_element("div").unwrap();
        div.add_class("a").unwrap();
        div.add_class("a").unwrap();
        div.add_class("b").unwrap();
        assert_eq!(div.attribute("class").as_deref(), Some("a b"));

        div.set_attribute("class", "c  d").unwrap();
        assert_eq!(div.classes(), vec!["c", "d"]);
        assert!(div.add_class("with space").is_err());
    }

    #[test]
    fn test_query_selector() {
        let host = HeadlessHost::new();
        let meta = host.create_element("meta").unwrap();
        meta.set_attribute("name", "viewport").unwrap();
        host.head().unwrap().append_child(&meta).unwrap();

        assert_eq!(
            host.query_selector("meta[name=\"viewport\"]").unwrap(),
            Some(meta.clone())
        );
        assert_eq!(host.query_selector("meta[name='theme-color']").unwrap(), None);

        meta.set_id("vp");
        assert_eq!(host.query_selector("#vp").unwrap(), Some(meta));
        assert!(host.query_selector("").is_err());
    }

    #[test]
    fn test_history_stack() {
        let host = HeadlessHost::new();
        host.push_history(1, "/a").unwrap();
        host.push_history(2, "/b#top").unwrap();
        assert_eq!(host.location_path(), "/b");
        assert_eq!(host.location_hash(), "top");
        assert_eq!(host.history_index(), Some(2));

        assert!(host.back());
        assert_eq!(host.location_path(), "/a");
        host.push_history(2, "/c").unwrap();
        assert_eq!(host.history().len(), 3);
        assert!(!host.forward());
    }

    #[test]
    fn test_dispatch_prevents_default() {
        let host = HeadlessHost::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        host.listen(
            WindowEvent::BeforeUnload,
            true,
            Box::new(move |_| counter.set(counter.get() + 1)),
        )
        .unwrap();

        let event = host.dispatch(WindowEvent::BeforeUnload);
        assert!(event.default_prevented());
        assert_eq!(fired.get(), 1);

        let event = host.dispatch(WindowEvent::Load);
        assert!(!event.default_prevented());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_listener_may_subscribe_during_dispatch() {
        let host = HeadlessHost::new();
        let inner = host.clone();
        host.listen(
            WindowEvent::Load,
            false,
            Box::new(move |_| {
                let _ = inner.listen(WindowEvent::Resize, false, Box::new(|_| {}));
            }),
        )
        .unwrap();

        host.dispatch(WindowEvent::Load);
        assert_eq!(host.listener_count(WindowEvent::Resize), 1);
        assert_eq!(host.listener_count(WindowEvent::Load), 1);
    }

    #[test]
    fn test_nested_dispatch_reaches_listeners() {
        let host = HeadlessHost::new();
        let resized = Rc::new(Cell::new(0));
        let counter = resized.clone();
        host.listen(
            WindowEvent::Resize,
            false,
            Box::new(move |_| counter.set(counter.get() + 1)),
        )
        .unwrap();

        let inner = host.clone();
        let loads = Rc::new(Cell::new(0));
        let load_counter = loads.clone();
        host.listen(
            WindowEvent::Load,
            false,
            Box::new(move |_| {
                load_counter.set(load_counter.get() + 1);
                inner.dispatch(WindowEvent::Resize);
                inner.dispatch(WindowEvent::Load);
            }),
        )
        .unwrap();

        host.dispatch(WindowEvent::Load);
        assert_eq!(resized.get(), 1);
        assert_eq!(loads.get(), 1);
    }

    #[test]
    fn test_back_from_listener_fires_popstate() {
        let host = HeadlessHost::new();
        host.push_history(1, "/a").unwrap();
        host.push_history(2, "/b").unwrap();

        let pops = Rc::new(Cell::new(0));
        let counter = pops.clone();
        host.listen(
            WindowEvent::PopState,
            false,
            Box::new(move |_| counter.set(counter.get() + 1)),
        )
        .unwrap();

        let inner = host.clone();
        host.listen(
            WindowEvent::Scroll,
            false,
            Box::new(move |_| {
                inner.back();
            }),
        )
        .unwrap();

        host.dispatch(WindowEvent::Scroll);
        assert_eq!(pops.get(), 1);
        assert_eq!(host.location_path(), "/a");
    }
}
