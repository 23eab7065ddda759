//! Element helpers: one function per HTML tag.
//!
//! Every helper creates a native element, applies [`ElementOptions`] and
//! appends the element to a [`Parent`]:
//!
//! ```
//! use innerscope_core::{DomNode, Element, ElementOptions, element::paragraph, headless::HeadlessHost};
//!
//! let host = HeadlessHost::new();
//! let mut body = Element::body(&host).unwrap();
//!
//! let greeting = paragraph(&mut body, ElementOptions::content("Hello")).unwrap();
//! assert_eq!(greeting.text_content(), "Hello");
//!
//! let link = innerscope_core::element::anchor(
//!     &mut body,
//!     ElementOptions::content("Docs").with_attr("href", "/docs"),
//! )
//! .unwrap();
//! assert_eq!(link.attribute("href").as_deref(), Some("/docs"));
//! ```

use crate::{DomNode, Element, Error, Parent};

/// Content placed inside a new element.
#[derive(Debug, Clone, PartialEq)]
pub enum Content<N> {
    /// Plain text, assigned as text content.
    Text(String),
    /// An existing node, appended as the first child.
    Node(N),
}

/// What to put into a freshly created element.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ElementOptions<N> {
    content: Option<Content<N>>,
    attrs: Vec<(String, String)>,
    children: Vec<N>,
}

impl<N> Default for ElementOptions<N> {
    fn default() -> Self {
        Self {
            content: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }
}

impl<N: DomNode> ElementOptions<N> {
    /// An empty element.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text content only.
    pub fn content(text: impl Into<String>) -> Self {
        Self::new().with_content(text)
    }

    /// Attributes only; the text content is left untouched.
    pub fn attrs<K, V>(attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new().with_attrs(attrs)
    }

    /// Sets the text content.
    pub fn with_content(mut self, text: impl Into<String>) -> Self {
        self.content = Some(Content::Text(text.into()));
        self
    }

    /// Uses an existing node as content.
    pub fn with_node(mut self, node: N) -> Self {
        self.content = Some(Content::Node(node));
        self
    }

    /// Adds one attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Adds several attributes.
    pub fn with_attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attrs
            .extend(attrs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends a pre-built child after the content.
    pub fn with_child(mut self, child: N) -> Self {
        self.children.push(child);
        self
    }

    fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(key, _)| key == name)
    }

    fn apply(self, node: &N) -> Result<(), Error> {
        match self.content {
            Some(Content::Text(text)) if !text.is_empty() => node.set_text_content(&text),
            Some(Content::Node(content)) => node.append_child(&content)?,
            _ => {}
        }

        for (name, value) in &self.attrs {
            node.set_attribute(name, value)?;
        }

        for child in &self.children {
            node.append_child(child)?;
        }

        Ok(())
    }
}

/// Creates a `tag` element, fills it from `options` and appends it to `parent`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the tag or an attribute name is
/// rejected by the document, or any error raised while attaching the element.
pub fn create_element<N, P>(
    tag: &str,
    parent: &mut P,
    options: ElementOptions<N>,
) -> Result<Element<N>, Error>
where
    N: DomNode,
    P: Parent<N> + ?Sized,
{
    let node = parent.root().create_element(tag)?;
    options.apply(&node)?;
    parent.append_child(&node)?;
    Ok(Element::from_node(node))
}

fn create_input<N, P>(
    kind: &str,
    parent: &mut P,
    options: ElementOptions<N>,
) -> Result<Element<N>, Error>
where
    N: DomNode,
    P: Parent<N> + ?Sized,
{
    let options = if options.has_attr("type") {
        options
    } else {
        options.with_attr("type", kind)
    };
    create_element("input", parent, options)
}

/// Creates a `label` bound to the control with id `for_id`.
///
/// # Errors
///
/// See [`create_element`].
pub fn label_for<N, P>(
    for_id: &str,
    content: impl Into<String>,
    parent: &mut P,
) -> Result<Element<N>, Error>
where
    N: DomNode,
    P: Parent<N> + ?Sized,
{
    create_element(
        "label",
        parent,
        ElementOptions::content(content).with_attr("for", for_id),
    )
}

macro_rules! elements {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("Creates a `<", $tag, ">` element.")]
            ///
            /// # Errors
            ///
            /// See [`create_element`].
            pub fn $name<N, P>(parent: &mut P, options: ElementOptions<N>) -> Result<Element<N>, Error>
            where
                N: DomNode,
                P: Parent<N> + ?Sized,
            {
                create_element($tag, parent, options)
            }
        )*
    };
}

macro_rules! inputs {
    ($($name:ident => $kind:literal),* $(,)?) => {
        $(
            #[doc = concat!("Creates an `<input type=\"", $kind, "\">` element.")]
            ///
            /// A `type` attribute in `options` takes precedence.
            ///
            /// # Errors
            ///
            /// See [`create_element`].
            pub fn $name<N, P>(parent: &mut P, options: ElementOptions<N>) -> Result<Element<N>, Error>
            where
                N: DomNode,
                P: Parent<N> + ?Sized,
            {
                create_input($kind, parent, options)
            }
        )*
    };
}

// Text
elements! {
    paragraph => "p",
    heading1 => "h1",
    heading2 => "h2",
    heading3 => "h3",
    heading4 => "h4",
    heading5 => "h5",
    heading6 => "h6",
    span => "span",
    emphasis => "em",
    strong => "strong",
    code => "code",
    preformatted => "pre",
    blockquote => "blockquote",
    quote => "q",
    cite => "cite",
    definition => "dfn",
    abbreviation => "abbr",
    time => "time",
    variable => "var",
    sample_output => "samp",
    keyboard_input => "kbd",
    subscript => "sub",
    superscript => "sup",
    small_text => "small",
    marked_text => "mark",
    deleted_text => "del",
    inserted_text => "ins",
}

// Interactive
elements! {
    button => "button",
    text_area => "textarea",
    select => "select",
    option => "option",
    label => "label",
    fieldset => "fieldset",
    legend => "legend",
    progress => "progress",
    meter => "meter",
    output => "output",
    data_list => "datalist",
}

inputs! {
    text_input => "text",
    checkbox => "checkbox",
    radio => "radio",
    range => "range",
    file_input => "file",
    submit_button => "submit",
    reset_button => "reset",
    color_picker => "color",
    date_picker => "date",
    date_time_picker => "datetime-local",
    email_input => "email",
    number_input => "number",
    password_input => "password",
    search_input => "search",
    tel_input => "tel",
    url_input => "url",
}

// Media
elements! {
    image => "img",
    video => "video",
    audio => "audio",
    canvas => "canvas",
    picture => "picture",
    source => "source",
    track => "track",
    embed => "embed",
    object_embed => "object",
    iframe => "iframe",
    html_map => "map",
    area => "area",
}

// Semantic
elements! {
    article => "article",
    section => "section",
    nav => "nav",
    header => "header",
    footer => "footer",
    aside => "aside",
    main => "main",
    figure => "figure",
    figcaption => "figcaption",
    details => "details",
    summary => "summary",
    dialog => "dialog",
    menu => "menu",
}

// Tables
elements! {
    table => "table",
    table_head => "thead",
    table_body => "tbody",
    table_row => "tr",
    table_header => "th",
    table_data => "td",
    table_caption => "caption",
    col_group => "colgroup",
    col => "col",
}

// Lists
elements! {
    ordered_list => "ol",
    unordered_list => "ul",
    list_item => "li",
    description_list => "dl",
    description_term => "dt",
    description_detail => "dd",
}

// Forms and metadata
elements! {
    form => "form",
    style => "style",
    link => "link",
    meta => "meta",
    base => "base",
    title => "title",
    script => "script",
    no_script => "noscript",
}

// Structural
elements! {
    anchor => "a",
    line_break => "br",
    horizontal_rule => "hr",
    div => "div",
    template => "template",
    slot => "slot",
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Host, headless::HeadlessHost};

    fn body(host: &HeadlessHost) -> Element<crate::headless::HeadlessNode> {
        Element::body(host).unwrap()
    }

    #[test]
    fn test_content_only() {
        let host = HeadlessHost::new();
        let mut parent = body(&host);

        let p = paragraph(&mut parent, ElementOptions::content("Hello")).unwrap();

        assert_eq!(p.tag_name(), "p");
        assert_eq!(p.text_content(), "Hello");
        assert_eq!(parent.node().children(), vec![p.node().clone()]);
    }

    #[test]
    fn test_attrs_only_leaves_text_empty() {
        let host = HeadlessHost::new();
        let mut parent = body(&host);

        let img = image(
            &mut parent,
            ElementOptions::attrs([("src", "/logo.png"), ("alt", "logo")]),
        )
        .unwrap();

        assert_eq!(img.attribute("src").as_deref(), Some("/logo.png"));
        assert_eq!(img.attribute("alt").as_deref(), Some("logo"));
        assert_eq!(img.text_content(), "");
    }

    #[test]
    fn test_content_and_attrs() {
        let host = HeadlessHost::new();
        let mut parent = body(&host);

        let a = anchor(
            &mut parent,
            ElementOptions::content("Home").with_attrs([("href", "/")]),
        )
        .unwrap();

        assert_eq!(a.text_content(), "Home");
        assert_eq!(a.attribute("href").as_deref(), Some("/"));
    }

    #[test]
    fn test_empty_content_keeps_children() {
        let host = HeadlessHost::new();
        let mut parent = body(&host);
        let child = host.create_element("b").unwrap();

        let holder = div(
            &mut parent,
            ElementOptions::content("").with_child(child.clone()),
        )
        .unwrap();

        assert_eq!(holder.children(), vec![child]);
    }

    #[test]
    fn test_node_content_and_children() {
        let host = HeadlessHost::new();
        let mut parent = body(&host);
        let inner = host.create_element("em").unwrap();
        inner.set_text_content("a");
        let tail = host.create_element("strong").unwrap();
        tail.set_text_content("b");

        let wrapper = span(
            &mut parent,
            ElementOptions::new().with_node(inner.clone()).with_child(tail.clone()),
        )
        .unwrap();

        assert_eq!(wrapper.children(), vec![inner, tail]);
        assert_eq!(wrapper.text_content(), "ab");
    }

    #[test]
    fn test_inputs_set_type() {
        let host = HeadlessHost::new();
        let mut parent = body(&host);

        let check = checkbox(&mut parent, ElementOptions::new()).unwrap();
        assert_eq!(check.tag_name(), "input");
        assert_eq!(check.attribute("type").as_deref(), Some("checkbox"));

        let custom = text_input(&mut parent, ElementOptions::attrs([("type", "hidden")])).unwrap();
        assert_eq!(custom.attribute("type").as_deref(), Some("hidden"));
    }

    #[test]
    fn test_label_for() {
        let host = HeadlessHost::new();
        let mut parent = body(&host);

        let label = label_for("email", "Email", &mut parent).unwrap();
        assert_eq!(label.tag_name(), "label");
        assert_eq!(label.attribute("for").as_deref(), Some("email"));
        assert_eq!(label.text_content(), "Email");
    }

    #[test]
    fn test_invalid_attribute_name() {
        let host = HeadlessHost::new();
        let mut parent = body(&host);

        let result = div(&mut parent, ElementOptions::attrs([("bad name", "x")]));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(parent.node().children().is_empty());
    }
}
