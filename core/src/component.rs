//! Styled components: elements with an id, inline styling helpers and
//! stylesheets scoped to that id.

use uuid::Uuid;

use crate::{DomNode, Element, Error, Parent};

/// A number in `0.0..=1.0`, used for sizes relative to the parent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Fraction(f64);

impl Fraction {
    /// Validates `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when `value` is outside `0.0..=1.0` or NaN.
    pub fn new(value: f64) -> Result<Self, Error> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::OutOfRange {
                value,
                min: 0.0,
                max: 1.0,
            })
        }
    }

    /// The wrapped value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// CSS percentage, e.g. `"50%"`.
    #[must_use]
    pub fn to_percent(self) -> String {
        let percent = (self.0 * 1_000_000.0).round() / 10_000.0;
        format!("{percent}%")
    }
}

impl TryFrom<f64> for Fraction {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One change applied by [`StyledComponent::batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prop {
    /// Replaces the text content.
    Text(String),
    /// Sets an inline style property.
    Style(String, String),
    /// Sets an attribute.
    Attribute(String, String),
}

impl Prop {
    /// Text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Inline style property.
    pub fn style(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Style(property.into(), value.into())
    }

    /// Attribute.
    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Attribute(name.into(), value.into())
    }
}

fn generate_id() -> String {
    format!("is-{}", Uuid::new_v4().simple())
}

/// An element with a generated id and styling helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledComponent<N> {
    element: Element<N>,
}

impl<N: DomNode> StyledComponent<N> {
    /// Creates a `tag` element with a unique id and appends it to `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be created or attached.
    pub fn new<P>(tag: &str, parent: &mut P) -> Result<Self, Error>
    where
        P: Parent<N> + ?Sized,
    {
        let node = parent.root().create_element(tag)?;
        node.set_id(&generate_id());
        parent.append_child(&node)?;
        Ok(Self {
            element: Element::from_node(node),
        })
    }

    /// The underlying element.
    pub const fn element(&self) -> &Element<N> {
        &self.element
    }

    /// The native element.
    pub const fn node(&self) -> &N {
        self.element.node()
    }

    /// Upper-case tag name, e.g. `"BUTTON"`.
    pub fn kind(&self) -> String {
        self.node().tag_name().to_ascii_uppercase()
    }

    /// The generated id.
    pub fn id(&self) -> String {
        self.node().id()
    }

    /// Applies several props at once.
    ///
    /// # Errors
    ///
    /// Returns an error if a style or attribute is rejected.
    pub fn batch(&self, props: impl IntoIterator<Item = Prop>) -> Result<(), Error> {
        let node = self.node();
        for prop in props {
            match prop {
                Prop::Text(text) => node.set_text_content(&text),
                Prop::Style(property, value) => node.set_style(&property, &value)?,
                Prop::Attribute(name, value) => node.set_attribute(&name, &value)?,
            }
        }
        Ok(())
    }

    /// Gradient background from `color_a` to `color_b`, rounded corners,
    /// a `stroke_width` pixel border and a drop shadow `shadow` pixels deep.
    ///
    /// # Errors
    ///
    /// Returns an error if a style is rejected.
    pub fn styled(
        &self,
        color_a: &str,
        color_b: &str,
        radius: f64,
        stroke_color: &str,
        stroke_width: f64,
        shadow: f64,
    ) -> Result<(), Error> {
        self.batch([
            Prop::style("background", format!("linear-gradient({color_a}, {color_b})")),
            Prop::style("border-radius", format!("{radius}px")),
            Prop::style("border", format!("{stroke_width}px solid {stroke_color}")),
            Prop::style(
                "box-shadow",
                format!("0px {shadow}px {}px rgba(0, 0, 0, 0.25)", shadow * 2.0),
            ),
        ])
    }

    /// Width and height relative to the parent.
    ///
    /// # Errors
    ///
    /// Returns an error if a style is rejected.
    pub fn size(&self, width: Fraction, height: Fraction) -> Result<(), Error> {
        self.batch([
            Prop::style("width", width.to_percent()),
            Prop::style("height", height.to_percent()),
        ])
    }

    /// Background colour.
    ///
    /// # Errors
    ///
    /// Returns an error if the style is rejected.
    pub fn back_color(&self, color: &str) -> Result<(), Error> {
        self.node().set_style("background-color", color)
    }

    /// Text colour.
    ///
    /// # Errors
    ///
    /// Returns an error if the style is rejected.
    pub fn text_color(&self, color: &str) -> Result<(), Error> {
        self.node().set_style("color", color)
    }

    /// Injects a stylesheet whose `rules` apply to this component only.
    ///
    /// `rules` are declarations for the component itself and may contain
    /// nested blocks such as `&:hover { ... }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stylesheet cannot be added to the document head.
    pub fn css(&self, rules: &str) -> Result<N, Error> {
        let node = self.node();
        let id = node.id();
        let style = node.create_element("style")?;
        style.set_attribute("data-scope", &id)?;
        style.set_text_content(&format!("#{id} {{{rules}}}"));
        node.document_head()?.append_child(&style)?;
        Ok(style)
    }
}

impl<N: DomNode> Parent<N> for StyledComponent<N> {
    fn root(&self) -> &N {
        self.node()
    }

    fn append_child(&mut self, child: &N) -> Result<(), Error> {
        self.node().append_child(child)
    }
}

const BUTTON_CSS: &str = "
    display: inline-block;
    font-family: sans-serif;
    font-size: 14px;
    color: #000;
    background-color: #e0e0e0;
    border: 1px solid #bdbdbd;
    border-radius: 4px;
    padding: 10px 20px;
    box-shadow: 0px 1px 1px rgba(0, 0, 0, 0.1);
    transition: background-color 0.2s, box-shadow 0.1s;
    cursor: pointer;
    outline: none;

    &:active {
      background-color: #d6d6d6;
      box-shadow: 0px 0px 0px rgba(0, 0, 0, 0.1);
    }

    &:hover {
      background-color: #eeeeee;
    }
";

/// A stock button of `width` by `height` pixels labelled `text`.
///
/// # Errors
///
/// Returns an error if the button or its stylesheet cannot be added.
pub fn button<N, P>(
    parent: &mut P,
    text: &str,
    width: u32,
    height: u32,
) -> Result<StyledComponent<N>, Error>
where
    N: DomNode,
    P: Parent<N> + ?Sized,
{
    let button = StyledComponent::new("button", parent)?;
    button.batch([
        Prop::text(text),
        Prop::style("width", format!("{width}px")),
        Prop::style("height", format!("{height}px")),
    ])?;
    button.css(BUTTON_CSS)?;
    Ok(button)
}
