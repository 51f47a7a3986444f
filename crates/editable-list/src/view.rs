//! Pure projection from list state to a renderable node tree.
//!
//! # Design
//! - Rendering is a function of config and items; no DOM access here.
//! - Text is always inserted as text, never parsed as markup.
//! - The wasm layer materializes the same tree inside the shadow root.

use std::fmt::Write as _;

use crate::config::ListConfig;
use crate::model::{ItemList, ItemRecord};
use crate::theme;

/// Class names used inside the shadow root.
pub mod class {
    /// Outer wrapper of the component.
    pub const WRAPPER: &str = "todoComponentWrapper";
    /// Heading element.
    pub const HEADING: &str = "todoHeading";
    /// The `<ul>` holding item rows.
    pub const LIST: &str = "todoListWrapper";
    /// Item rows and the add row.
    pub const ROW: &str = "todoListItem";
    /// Shared class of add and remove buttons.
    pub const BUTTON: &str = "todoListItemBtn";
    /// Remove buttons.
    pub const REMOVE: &str = "todoListItemBtnRemove";
    /// Add button.
    pub const ADD: &str = "todoListItemBtnAdd";
    /// Add row container.
    pub const ADD_ROW: &str = "tdlAddInputWrapper";
    /// Text input in the add row.
    pub const INPUT: &str = "todoListItemAddInput";
}

/// Selectors for the parts the element wires after attach.
pub mod selector {
    /// Item list.
    pub const LIST: &str = ".todoListWrapper";
    /// Text input.
    pub const INPUT: &str = ".todoListItemAddInput";
    /// Add button.
    pub const ADD: &str = ".todoListItemBtnAdd";
    /// Remove buttons.
    pub const REMOVE: &str = ".todoListItemBtnRemove";
}

/// Glyph on remove buttons.
pub const REMOVE_GLYPH: &str = "\u{2296}";
/// Glyph on the add button.
pub const ADD_GLYPH: &str = "\u{2295}";
/// Row attribute carrying the item id.
pub const ITEM_ID_ATTR: &str = "data-item-id";

/// Node of the rendered tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewNode {
    /// Element with attributes and children.
    Element(ViewElement),
    /// Text node.
    Text(String),
}

/// Element node of the rendered tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewElement {
    /// Tag name.
    pub tag: &'static str,
    /// Attributes in insertion order.
    pub attrs: Vec<(&'static str, String)>,
    /// Child nodes in order.
    pub children: Vec<ViewNode>,
}

impl ViewElement {
    /// Empty element with the given tag.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the `class` attribute.
    #[must_use]
    pub fn classes(self, classes: &[&str]) -> Self {
        self.attr("class", classes.join(" "))
    }

    /// Add an attribute.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<ViewNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(ViewNode::Text(text.into()))
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|value| value.split_whitespace().any(|item| item == class))
    }

    /// Descendant elements (self included) carrying `class`, in document order.
    #[must_use]
    pub fn find_all(&self, class: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect(class, &mut found);
        found
    }

    fn collect<'a>(&'a self, class: &str, found: &mut Vec<&'a Self>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            if let ViewNode::Element(element) = child {
                element.collect(class, found);
            }
        }
    }

    /// Concatenated text of the element's descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                ViewNode::Text(text) => out.push_str(text),
                ViewNode::Element(element) => out.push_str(&element.text_content()),
            }
        }
        out
    }

    /// Text of the element's direct text children, ignoring nested elements.
    #[must_use]
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                ViewNode::Text(text) => Some(text.as_str()),
                ViewNode::Element(_) => None,
            })
            .collect()
    }
}

impl From<ViewElement> for ViewNode {
    fn from(element: ViewElement) -> Self {
        Self::Element(element)
    }
}

impl ViewNode {
    /// Serialize the tree as HTML with escaped text and attribute values.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_html(self, &mut out);
        out
    }
}

fn write_html(node: &ViewNode, out: &mut String) {
    match node {
        ViewNode::Text(text) => out.push_str(&escape(text)),
        ViewNode::Element(element) => {
            out.push('<');
            out.push_str(element.tag);
            for (name, value) in &element.attrs {
                let _ = write!(out, " {name}=\"{}\"", escape(value));
            }
            out.push('>');
            if element.tag == "input" {
                return;
            }
            for child in &element.children {
                write_html(child, out);
            }
            let _ = write!(out, "</{}>", element.tag);
        }
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the full shadow root content for a configuration and item list.
#[must_use]
pub fn render(config: &ListConfig, items: &ItemList) -> ViewElement {
    let list = items.iter().fold(
        ViewElement::new("ul").classes(&[class::LIST]),
        |list, record| list.child(render_row(record)),
    );
    ViewElement::new("div")
        .classes(&[class::WRAPPER])
        .child(ViewElement::new("style").text(theme::stylesheet(config.variant)))
        .child(
            ViewElement::new("h3")
                .classes(&[class::HEADING])
                .text(config.heading.clone()),
        )
        .child(list)
        .child(ViewElement::new("slot"))
        .child(render_add_row(&config.add_item_text))
}

/// Render one item row with its remove button.
#[must_use]
pub fn render_row(record: &ItemRecord) -> ViewElement {
    ViewElement::new("li")
        .classes(&[class::ROW])
        .attr(ITEM_ID_ATTR, record.id.to_string())
        .text(record.text.clone())
        .child(remove_button())
}

/// Remove button shown at the end of every row.
#[must_use]
pub fn remove_button() -> ViewElement {
    ViewElement::new("button")
        .classes(&[class::REMOVE, class::BUTTON])
        .attr("type", "button")
        .text(REMOVE_GLYPH)
}

fn render_add_row(label: &str) -> ViewElement {
    ViewElement::new("div")
        .classes(&[class::ROW, class::ADD_ROW])
        .child(ViewElement::new("label").text(label))
        .child(
            ViewElement::new("input")
                .classes(&[class::INPUT])
                .attr("type", "text"),
        )
        .child(
            ViewElement::new("button")
                .classes(&[class::ADD, class::BUTTON])
                .attr("type", "button")
                .text(ADD_GLYPH),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ListVariant;
    use pretty_assertions::assert_eq;

    fn config(items: &[&str]) -> ListConfig {
        ListConfig {
            heading: "Tasks".to_string(),
            add_item_text: "New task".to_string(),
            items: items.iter().map(ToString::to_string).collect(),
            variant: ListVariant::Standard,
        }
    }

    #[test]
    fn rows_match_items_in_order() {
        let config = config(&["Buy milk", "Walk dog"]);
        let root = render(&config, &ItemList::from_texts(config.items.clone()));
        let rows: Vec<String> = root
            .find_all(class::LIST)
            .iter()
            .flat_map(|list| list.find_all(class::ROW))
            .map(ViewElement::own_text)
            .collect();
        assert_eq!(rows, vec!["Buy milk", "Walk dog"]);
        assert_eq!(root.find_all(class::REMOVE).len(), 2);
    }

    #[test]
    fn wrapper_children_follow_contract_order() {
        let config = config(&[]);
        let root = render(&config, &ItemList::default());
        let tags: Vec<&str> = root
            .children
            .iter()
            .filter_map(|child| match child {
                ViewNode::Element(element) => Some(element.tag),
                ViewNode::Text(_) => None,
            })
            .collect();
        assert_eq!(tags, vec!["style", "h3", "ul", "slot", "div"]);
        assert_eq!(root.attribute("class"), Some(class::WRAPPER));
        assert_eq!(root.find_all(class::HEADING)[0].text_content(), "Tasks");
        assert_eq!(root.find_all(class::ADD).len(), 1);
        assert!(root.find_all(class::REMOVE).is_empty());
    }

    #[test]
    fn markup_in_items_is_escaped() {
        let config = config(&["<b>bold</b> & co"]);
        let html = ViewNode::from(render(&config, &ItemList::from_texts(config.items.clone()))).to_html();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn rows_carry_item_ids() {
        let items = ItemList::from_texts(["a", "b"]);
        let second = items.iter().nth(1).expect("second row");
        let row = render_row(second);
        assert_eq!(row.attribute(ITEM_ID_ATTR), Some("1"));
        assert_eq!(
            ViewNode::from(row).to_html(),
            "<li class=\"todoListItem\" data-item-id=\"1\">b<button class=\"todoListItemBtnRemove todoListItemBtn\" type=\"button\">\u{2296}</button></li>"
        );
    }

    #[test]
    fn empty_heading_renders_empty_element() {
        let config = ListConfig::default();
        let root = render(&config, &ItemList::default());
        let heading = root.find_all(class::HEADING);
        assert_eq!(heading.len(), 1);
        assert_eq!(heading[0].text_content(), "");
    }
}
