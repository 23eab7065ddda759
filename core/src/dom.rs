//! The document surface the toolkit is written against.
//!
//! A [`Host`] is the window and its document: body, head, title, history and
//! window events. A [`DomNode`] is a handle to one native element. Each
//! method corresponds to a single native call.

use core::{fmt::Debug, ops::Deref};

use crate::Error;

/// A cloneable handle to a native element.
///
/// Cloning a handle never clones the element; two handles compare equal when
/// they point at the same element.
pub trait DomNode: Clone + PartialEq + Debug + 'static {
    /// Creates a detached element with `tag` in the same document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `tag` is not a valid element name.
    fn create_element(&self, tag: &str) -> Result<Self, Error>;

    /// Returns the `<head>` of the document owning this node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unavailable`] if the document has no head.
    fn document_head(&self) -> Result<Self, Error>;

    /// Lower-case tag name, e.g. `"p"`.
    fn tag_name(&self) -> String;

    /// Appends `child`, moving it out of its current parent.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects the insertion.
    fn append_child(&self, child: &Self) -> Result<(), Error>;

    /// Removes `child` from this node.
    ///
    /// # Errors
    ///
    /// Returns an error if `child` is not a child of this node.
    fn remove_child(&self, child: &Self) -> Result<(), Error>;

    /// Inserts `child` right before `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if `reference` is not a child of this node.
    fn insert_before(&self, child: &Self, reference: &Self) -> Result<(), Error>;

    /// Removes every child node, the equivalent of `innerHTML = ""`.
    ///
    /// # Errors
    ///
    /// Returns an error if a child cannot be removed.
    fn clear_children(&self) -> Result<(), Error>;

    /// Direct element children, in document order.
    fn children(&self) -> Vec<Self>;

    /// Concatenated text of this node and its descendants.
    fn text_content(&self) -> String;

    /// Replaces all children with a single text node.
    fn set_text_content(&self, text: &str);

    /// Reads an attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Sets an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `name` is not a valid attribute name.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), Error>;

    /// Element id, empty when unset.
    fn id(&self) -> String;

    /// Sets the element id.
    fn set_id(&self, id: &str);

    /// Adds a class to the class list. Adding a present class is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if `class` is empty or contains whitespace.
    fn add_class(&self, class: &str) -> Result<(), Error>;

    /// Removes a class from the class list.
    ///
    /// # Errors
    ///
    /// Returns an error if `class` is empty or contains whitespace.
    fn remove_class(&self, class: &str) -> Result<(), Error>;

    /// Whether the class list contains `class`.
    fn has_class(&self, class: &str) -> bool;

    /// The class list, in insertion order.
    fn classes(&self) -> Vec<String>;

    /// Reads an inline style property.
    fn style(&self, property: &str) -> Option<String>;

    /// Sets an inline style property.
    ///
    /// # Errors
    ///
    /// Returns an error if the element has no inline style.
    fn set_style(&self, property: &str, value: &str) -> Result<(), Error>;
}

/// Native window events the toolkit subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEvent {
    /// `beforeunload`
    BeforeUnload,
    /// `popstate`
    PopState,
    /// `hashchange`
    HashChange,
    /// `load`
    Load,
    /// `blur`
    Blur,
    /// `focus`
    Focus,
    /// `offline`
    Offline,
    /// `online`
    Online,
    /// `resize`
    Resize,
    /// `scroll`
    Scroll,
}

impl WindowEvent {
    /// The native event name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BeforeUnload => "beforeunload",
            Self::PopState => "popstate",
            Self::HashChange => "hashchange",
            Self::Load => "load",
            Self::Blur => "blur",
            Self::Focus => "focus",
            Self::Offline => "offline",
            Self::Online => "online",
            Self::Resize => "resize",
            Self::Scroll => "scroll",
        }
    }
}

/// Boxed window event handler.
pub type EventHandler<E> = Box<dyn FnMut(&E)>;

/// The window and document an application runs in.
pub trait Host: 'static {
    /// Element handle type.
    type Node: DomNode;
    /// Native event passed to window listeners.
    type Event: 'static;

    /// The document body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unavailable`] if the document has no body.
    fn body(&self) -> Result<Self::Node, Error>;

    /// The document head.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unavailable`] if the document has no head.
    fn head(&self) -> Result<Self::Node, Error>;

    /// Creates a detached element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `tag` is not a valid element name.
    fn create_element(&self, tag: &str) -> Result<Self::Node, Error>;

    /// The document title.
    fn title(&self) -> String;

    /// Sets the document title.
    fn set_title(&self, title: &str);

    /// First element matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the selector cannot be parsed.
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Node>, Error>;

    /// `location.pathname`
    fn location_path(&self) -> String;

    /// `location.hash` without the leading `#`.
    fn location_hash(&self) -> String;

    /// The `index` carried by the current history entry, if any.
    fn history_index(&self) -> Option<u32>;

    /// Pushes a history entry carrying `{ index }` and moves the location to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the history API rejects the entry.
    fn push_history(&self, index: u32, url: &str) -> Result<(), Error>;

    /// Subscribes `handler` to `event` for the life of the page.
    ///
    /// When `prevent_default` is set, the event's default action is
    /// cancelled before the handler runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered.
    fn listen(
        &self,
        event: WindowEvent,
        prevent_default: bool,
        handler: EventHandler<Self::Event>,
    ) -> Result<(), Error>;
}

/// Anything elements can be appended to.
pub trait Parent<N: DomNode> {
    /// The native container new children end up in.
    fn root(&self) -> &N;

    /// Appends `child` to the container.
    ///
    /// # Errors
    ///
    /// Returns an error if the document rejects the insertion.
    fn append_child(&mut self, child: &N) -> Result<(), Error>;
}

/// Typed wrapper around a native element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<N> {
    node: N,
}

impl<N: DomNode> Element<N> {
    /// Wraps an existing native element.
    pub const fn from_node(node: N) -> Self {
        Self { node }
    }

    /// Wraps the document body of `host`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unavailable`] if the document has no body.
    pub fn body<H: Host<Node = N>>(host: &H) -> Result<Self, Error> {
        host.body().map(Self::from_node)
    }

    /// The wrapped native element.
    pub const fn node(&self) -> &N {
        &self.node
    }

    /// Unwraps the native element.
    pub fn into_node(self) -> N {
        self.node
    }
}

impl<N> Deref for Element<N> {
    type Target = N;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

impl<N: DomNode> Parent<N> for Element<N> {
    fn root(&self) -> &N {
        &self.node
    }

    fn append_child(&mut self, child: &N) -> Result<(), Error> {
        self.node.append_child(child)
    }
}
