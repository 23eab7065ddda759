use innerscope_core::{DomNode, Error};

use wasm_bindgen::JsCast;

use web_sys::{Document, Element, HtmlElement, Node};

use crate::error::{invalid_argument, js_error};

const STYLESHEET_ID: &str = "innerscope-baseline";

impl DomNode for Element {
    fn create_element(&self, tag: &str) -> Result<Self, Error> {
        self.owner_document()
            .ok_or(Error::Unavailable("document"))?
            .create_element(tag)
            .map_err(invalid_argument)
    }

    fn document_head(&self) -> Result<Self, Error> {
        self.owner_document()
            .and_then(|document| document.head())
            .map(Self::from)
            .ok_or(Error::Unavailable("document head"))
    }

    fn tag_name(&self) -> String {
        Self::tag_name(self).to_ascii_lowercase()
    }

    fn append_child(&self, child: &Self) -> Result<(), Error> {
        Node::append_child(self, child).map(drop).map_err(js_error)
    }

    fn remove_child(&self, child: &Self) -> Result<(), Error> {
        Node::remove_child(self, child).map(drop).map_err(js_error)
    }

    fn insert_before(&self, child: &Self, reference: &Self) -> Result<(), Error> {
        let reference: &Node = reference;
        Node::insert_before(self, child, Some(reference))
            .map(drop)
            .map_err(js_error)
    }

    fn clear_children(&self) -> Result<(), Error> {
        while let Some(child) = self.first_child() {
            Node::remove_child(self, &child).map_err(js_error)?;
        }
        Ok(())
    }

    fn children(&self) -> Vec<Self> {
        let collection = Self::children(self);
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .collect()
    }

    fn text_content(&self) -> String {
        Node::text_content(self).unwrap_or_default()
    }

    fn set_text_content(&self, text: &str) {
        Node::set_text_content(self, Some(text));
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), Error> {
        Self::set_attribute(self, name, value).map_err(invalid_argument)
    }

    fn id(&self) -> String {
        Self::id(self)
    }

    fn set_id(&self, id: &str) {
        Self::set_id(self, id);
    }

    fn add_class(&self, class: &str) -> Result<(), Error> {
        self.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&self, class: &str) -> Result<(), Error> {
        self.class_list().remove_1(class).map_err(js_error)
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn classes(&self) -> Vec<String> {
        let list = self.class_list();
        (0..list.length())
            .filter_map(|index| list.item(index))
            .collect()
    }

    fn style(&self, property: &str) -> Option<String> {
        self.dyn_ref::<HtmlElement>()
            .and_then(|element| element.style().get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), Error> {
        self.dyn_ref::<HtmlElement>()
            .ok_or_else(|| {
                Error::Dom(format!(
                    "<{}> has no inline style",
                    DomNode::tag_name(self)
                ))
            })?
            .style()
            .set_property(property, value)
            .map_err(js_error)
    }
}

/// Adds the baseline stylesheet defining the layout classes, once per document.
pub fn inject_stylesheet(document: &Document) -> Result<(), Error> {
    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(());
    }

    let style = document.create_element("style").map_err(js_error)?;
    style.set_id(STYLESHEET_ID);
    style
        .set_attribute("data-innerscope", "true")
        .map_err(js_error)?;
    style.set_inner_html(include_str!("../styles/baseline.css"));

    if let Some(head) = document.head() {
        Node::append_child(&head, &style).map_err(js_error)?;
    } else if let Some(body) = document.body() {
        body.prepend_with_node_1(&style).map_err(js_error)?;
    } else {
        return Err(Error::Unavailable("document head"));
    }

    Ok(())
}
