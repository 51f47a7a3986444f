//! Shadow root materialization for one element instance.
//!
//! # Design
//! - Build real DOM nodes from the pure [`ViewElement`] projection.
//! - Keep a registry of row elements by item id so edits never search by
//!   position or text.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, Node, ShadowRoot, ShadowRootInit,
    ShadowRootMode,
};

use crate::error::{ListError, ListResult};
use crate::model::{ItemId, ItemList, ItemRecord};
use crate::view::{self, ITEM_ID_ATTR, ViewElement, ViewNode, selector};

/// Live DOM parts of a mounted list.
pub(crate) struct ShadowView {
    document: Document,
    list: Element,
    input: HtmlInputElement,
    add_button: Element,
    rows: HashMap<ItemId, Element>,
}

impl ShadowView {
    /// Attach an open shadow root to `host` and render `root` into it.
    pub(crate) fn mount(host: &HtmlElement, root: &ViewElement, items: &ItemList) -> ListResult<Self> {
        let document = host.owner_document().ok_or(ListError::MissingDocument)?;
        let shadow = host
            .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
            .map_err(|err| ListError::dom("attach_shadow", err))?;
        let node = materialize(&document, root)?;
        shadow
            .append_child(&node)
            .map_err(|err| ListError::dom("append_child", err))?;

        let list = query(&shadow, selector::LIST)?;
        let input = query(&shadow, selector::INPUT)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|err| ListError::dom("dyn_into<HtmlInputElement>", err))?;
        let add_button = query(&shadow, selector::ADD)?;

        let mut rows = HashMap::with_capacity(items.len());
        for record in items.iter() {
            let row_selector = format!("li[{ITEM_ID_ATTR}=\"{}\"]", record.id);
            let row = list
                .query_selector(&row_selector)
                .map_err(|err| ListError::dom("query_selector", err))?
                .ok_or(ListError::MissingPart { part: "li.todoListItem" })?;
            rows.insert(record.id, row);
        }

        Ok(Self {
            document,
            list,
            input,
            add_button,
            rows,
        })
    }

    pub(crate) const fn add_button(&self) -> &Element {
        &self.add_button
    }

    /// Remove control inside the row for `id`.
    pub(crate) fn remove_button(&self, id: ItemId) -> ListResult<Element> {
        let row = self
            .rows
            .get(&id)
            .ok_or(ListError::MissingPart { part: "li.todoListItem" })?;
        row.query_selector(selector::REMOVE)
            .map_err(|err| ListError::dom("query_selector", err))?
            .ok_or(ListError::MissingPart {
                part: selector::REMOVE,
            })
    }

    /// Append a row for `record` and return its remove control.
    pub(crate) fn append_row(&mut self, record: &ItemRecord) -> ListResult<Element> {
        let row = materialize(&self.document, &view::render_row(record))?
            .dyn_into::<Element>()
            .map_err(|err| ListError::dom("dyn_into<Element>", err))?;
        self.list
            .append_child(&row)
            .map_err(|err| ListError::dom("append_child", err))?;
        self.rows.insert(record.id, row);
        self.remove_button(record.id)
    }

    /// Drop the row for `id`; returns whether a row was present.
    pub(crate) fn remove_row(&mut self, id: ItemId) -> bool {
        let Some(row) = self.rows.remove(&id) else {
            return false;
        };
        row.remove();
        true
    }

    pub(crate) fn input_value(&self) -> String {
        self.input.value()
    }

    pub(crate) fn clear_input(&self) {
        self.input.set_value("");
    }
}

fn query(shadow: &ShadowRoot, part: &'static str) -> ListResult<Element> {
    shadow
        .query_selector(part)
        .map_err(|err| ListError::dom("query_selector", err))?
        .ok_or(ListError::MissingPart { part })
}

fn materialize(document: &Document, element: &ViewElement) -> ListResult<Node> {
    let node = document
        .create_element(element.tag)
        .map_err(|err| ListError::dom("create_element", err))?;
    for (name, value) in &element.attrs {
        node.set_attribute(name, value)
            .map_err(|err| ListError::dom("set_attribute", err))?;
    }
    for child in &element.children {
        let child_node: Node = match child {
            ViewNode::Text(text) => document.create_text_node(text).into(),
            ViewNode::Element(nested) => materialize(document, nested)?,
        };
        node.append_child(&child_node)
            .map_err(|err| ListError::dom("append_child", err))?;
    }
    Ok(node.into())
}
