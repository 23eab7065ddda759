//! Layout containers.
//!
//! A [`Layout`] is a single `div` whose class list encodes its policy:
//! `column-layout top_to_bottom scrolly fillxy` and so on. The rules behind
//! those classes live in the baseline stylesheet injected by the backend.

use serde::{Deserialize, Serialize};

use crate::{DomNode, Error, Parent};

/// The flavour of a layout container, used as the `{kind}-layout` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// `linear-layout`
    Linear,
    /// `column-layout`, laid out top to bottom.
    Column,
    /// `grid-layout`
    Grid,
}

impl LayoutKind {
    /// The CSS class carried by containers of this kind.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Linear => "linear-layout",
            Self::Column => "column-layout",
            Self::Grid => "grid-layout",
        }
    }
}

/// Flow direction of a layout's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// `top_to_bottom`
    TopToBottom,
    /// `bottom_to_top`
    BottomToTop,
    /// `left_to_right`
    LeftToRight,
    /// `right_to_left`
    RightToLeft,
}

impl LayoutDirection {
    /// All directions.
    pub const ALL: [Self; 4] = [
        Self::TopToBottom,
        Self::BottomToTop,
        Self::LeftToRight,
        Self::RightToLeft,
    ];

    /// The CSS class for this direction.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::TopToBottom => "top_to_bottom",
            Self::BottomToTop => "bottom_to_top",
            Self::LeftToRight => "left_to_right",
            Self::RightToLeft => "right_to_left",
        }
    }
}

/// Placement of children inside a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementAlignment {
    /// `center`
    Center,
    /// `left`
    Left,
    /// `bottom`
    Bottom,
    /// `right`
    Right,
    /// `vcenter`
    VCenter,
    /// `hcenter`
    HCenter,
}

impl ElementAlignment {
    /// The CSS class for this alignment.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
            Self::VCenter => "vcenter",
            Self::HCenter => "hcenter",
        }
    }
}

/// How much of its parent a layout fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentFill {
    /// Both axes.
    FillXY,
    /// Width only.
    FillX,
    /// Height only.
    FillY,
}

impl ParentFill {
    /// All fill policies.
    pub const ALL: [Self; 3] = [Self::FillXY, Self::FillX, Self::FillY];

    /// The CSS class for this fill policy.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::FillXY => "fillxy",
            Self::FillX => "fillx",
            Self::FillY => "filly",
        }
    }
}

/// Axis along which a layout scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// `scrollx`
    Horizontal,
    /// `scrolly`
    Vertical,
    /// `scrollxy`
    Both,
}

impl ScrollDirection {
    /// All scroll directions.
    pub const ALL: [Self; 3] = [Self::Horizontal, Self::Vertical, Self::Both];

    /// The CSS class for this scroll direction.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Horizontal => "scrollx",
            Self::Vertical => "scrolly",
            Self::Both => "scrollxy",
        }
    }
}

/// Scrollbar visibility, for layouts and for the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Scrollbars are drawn.
    #[default]
    Shown,
    /// Scrollbars are hidden with the `noscrollbar` class.
    Hidden,
}

/// Class hiding scrollbars on an element.
pub const NO_SCROLLBAR: &str = "noscrollbar";

/// Applies a scrollbar visibility to `node`.
pub(crate) fn apply_scrollbar<N: DomNode>(node: &N, visibility: Visibility) -> Result<(), Error> {
    match visibility {
        Visibility::Shown => node.remove_class(NO_SCROLLBAR),
        Visibility::Hidden => node.add_class(NO_SCROLLBAR),
    }
}

/// A `div` container with class-encoded layout policy and tracked children.
///
/// The child list only mirrors what went through this layout's own methods;
/// nodes added or removed behind its back are not reconciled.
#[derive(Debug, Clone)]
pub struct Layout<N> {
    kind: LayoutKind,
    container: N,
    children: Vec<N>,
}

impl<N: DomNode> Layout<N> {
    /// Creates a container of `kind` under `parent`.
    ///
    /// `classes` are added before the `{kind}-layout` and `show` classes. When
    /// `parent` is the document body its margin is reset to `0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the container cannot be created or attached, or if
    /// one of `classes` is not a valid class token.
    pub fn new<P>(parent: &mut P, kind: LayoutKind, classes: &[&str]) -> Result<Self, Error>
    where
        P: Parent<N> + ?Sized,
    {
        let container = parent.root().create_element("div")?;
        for class in classes {
            container.add_class(class)?;
        }
        container.add_class(kind.class_name())?;
        container.add_class("show")?;

        parent.append_child(&container)?;
        if parent.root().tag_name() == "body" {
            parent.root().set_style("margin", "0")?;
        }

        Ok(Self {
            kind,
            container,
            children: Vec::new(),
        })
    }

    /// The layout kind.
    pub const fn kind(&self) -> LayoutKind {
        self.kind
    }

    /// The container element.
    pub const fn container(&self) -> &N {
        &self.container
    }

    /// Children appended through this layout.
    pub fn children(&self) -> &[N] {
        &self.children
    }

    /// Removes `child` from the container and the tracked list.
    ///
    /// # Errors
    ///
    /// Returns an error if `child` is not attached to the container.
    pub fn remove_child(&mut self, child: &N) -> Result<(), Error> {
        self.container.remove_child(child)?;
        self.children.retain(|c| c != child);
        Ok(())
    }

    /// Removes every child from the container and clears the tracked list.
    ///
    /// # Errors
    ///
    /// Returns an error if the container cannot be cleared.
    pub fn remove_children(&mut self) -> Result<(), Error> {
        self.container.clear_children()?;
        self.children.clear();
        Ok(())
    }

    /// Inserts `child` before `before`.
    ///
    /// The tracked list gets `child` at the position of `before`, or at the
    /// end when `before` is not tracked.
    ///
    /// # Errors
    ///
    /// Returns an error if `before` is not attached to the container.
    pub fn insert_before(&mut self, child: &N, before: &N) -> Result<(), Error> {
        self.container.insert_before(child, before)?;
        if child == before {
            return Ok(());
        }
        self.children.retain(|c| c != child);
        let position = self
            .children
            .iter()
            .position(|c| c == before)
            .unwrap_or(self.children.len());
        self.children.insert(position, child.clone());
        Ok(())
    }

    /// Sets an inline style property on the container.
    ///
    /// # Errors
    ///
    /// Returns an error if the container has no inline style.
    pub fn style(&self, property: &str, value: &str) -> Result<(), Error> {
        self.container.set_style(property, value)
    }

    /// Sets the flow direction. Any previous direction class is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list cannot be updated.
    pub fn set_direction(&self, direction: LayoutDirection) -> Result<(), Error> {
        self.replace_class(
            LayoutDirection::ALL.map(LayoutDirection::class_name),
            direction.class_name(),
        )
    }

    /// Adds an alignment. Alignments accumulate, e.g. `VCenter` and `HCenter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list cannot be updated.
    pub fn set_alignment(&self, alignment: ElementAlignment) -> Result<(), Error> {
        self.container.add_class(alignment.class_name())
    }

    /// Sets how much of the parent the layout fills.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list cannot be updated.
    pub fn set_fill(&self, fill: ParentFill) -> Result<(), Error> {
        self.replace_class(ParentFill::ALL.map(ParentFill::class_name), fill.class_name())
    }

    /// Sets the scroll axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list cannot be updated.
    pub fn set_scroll_direction(&self, direction: ScrollDirection) -> Result<(), Error> {
        self.replace_class(
            ScrollDirection::ALL.map(ScrollDirection::class_name),
            direction.class_name(),
        )
    }

    /// Shows or hides the container's scrollbars.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list cannot be updated.
    pub fn set_scrollbar_visibility(&self, visibility: Visibility) -> Result<(), Error> {
        apply_scrollbar(&self.container, visibility)
    }

    fn replace_class<const LEN: usize>(
        &self,
        family: [&'static str; LEN],
        class: &str,
    ) -> Result<(), Error> {
        for other in family.iter().filter(|other| **other != class) {
            self.container.remove_class(other)?;
        }
        self.container.add_class(class)
    }
}

impl<N: DomNode> Parent<N> for Layout<N> {
    fn root(&self) -> &N {
        &self.container
    }

    fn append_child(&mut self, child: &N) -> Result<(), Error> {
        self.container.append_child(child)?;
        self.children.retain(|c| c != child);
        self.children.push(child.clone());
        Ok(())
    }
}

/// A `linear-layout` container.
///
/// # Errors
///
/// See [`Layout::new`].
pub fn linear_layout<N, P>(parent: &mut P) -> Result<Layout<N>, Error>
where
    N: DomNode,
    P: Parent<N> + ?Sized,
{
    Layout::new(parent, LayoutKind::Linear, &[])
}

/// A `column-layout` container flowing top to bottom.
///
/// # Errors
///
/// See [`Layout::new`].
pub fn column_layout<N, P>(parent: &mut P) -> Result<Layout<N>, Error>
where
    N: DomNode,
    P: Parent<N> + ?Sized,
{
    let layout = Layout::new(parent, LayoutKind::Column, &[])?;
    layout.set_direction(LayoutDirection::TopToBottom)?;
    Ok(layout)
}

/// A `grid-layout` container.
///
/// # Errors
///
/// See [`Layout::new`].
pub fn grid_layout<N, P>(parent: &mut P) -> Result<Layout<N>, Error>
where
    N: DomNode,
    P: Parent<N> + ?Sized,
{
    Layout::new(parent, LayoutKind::Grid, &[])
}

/// Adds `show` when `condition` holds, `hide` otherwise.
///
/// # Errors
///
/// Returns an error if the class list cannot be updated.
pub fn show_if<N: DomNode>(element: &N, condition: bool) -> Result<(), Error> {
    element.add_class(if condition { "show" } else { "hide" })
}
