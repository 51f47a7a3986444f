//! Custom element glue: registration, construction and click wiring.
//!
//! # Design
//! - A small JS shim extends `HTMLElement` and forwards lifecycle callbacks to
//!   an exported [`EditableListHandle`].
//! - Listeners hold weak references; the handle owns the instance state.
//! - Handler failures are logged to the console and never thrown back to JS.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::config::{ListConfig, TAG_NAME, VARIANT_ATTR};
use crate::dom::ShadowView;
use crate::error::{ListError, ListResult};
use crate::lifecycle::{AddOutcome, AttachOutcome, ListMachine, RemoveOutcome};
use crate::model::ItemId;
use crate::theme::ListVariant;

#[wasm_bindgen(inline_js = r#"
export function defineEditableList(tag, create) {
  if (customElements.get(tag)) {
    return false;
  }
  class EditableListElement extends HTMLElement {
    constructor() {
      super();
      this._list = create(this);
    }
    connectedCallback() {
      if (this._list) this._list.connected();
    }
    disconnectedCallback() {
      if (this._list) this._list.disconnected();
    }
  }
  customElements.define(tag, EditableListElement);
  return true;
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = defineEditableList, catch)]
    fn define_editable_list(tag: &str, create: &js_sys::Function) -> Result<bool, JsValue>;
}

/// Register the element under `tag`.
///
/// Returns `false` when the tag was already defined; the existing definition is
/// left untouched.
///
/// # Errors
/// Returns [`ListError::Dom`] when the registry rejects the definition (for
/// example, an invalid tag name).
pub fn define_element(tag: &str) -> ListResult<bool> {
    let create = Closure::<dyn FnMut(HtmlElement) -> JsValue>::new(construct).into_js_value();
    define_editable_list(tag, create.unchecked_ref())
        .map_err(|err| ListError::dom("customElements.define", err))
}

/// Register `<editable-list>`; exported to JS as `registerEditableList`.
///
/// # Errors
/// Surfaces registry failures as a JS string.
#[wasm_bindgen(js_name = registerEditableList)]
pub fn register() -> Result<bool, JsValue> {
    define_element(TAG_NAME).map_err(|err| JsValue::from_str(&format!("{err}: {err:?}")))
}

#[allow(clippy::needless_pass_by_value)]
fn construct(host: HtmlElement) -> JsValue {
    match EditableListHandle::construct(&host) {
        Ok(handle) => handle.into(),
        Err(err) => {
            console::error!("editable-list construction failed", format!("{err:?}"));
            JsValue::NULL
        }
    }
}

struct Instance {
    machine: ListMachine,
    view: ShadowView,
    add_listener: Option<EventListener>,
    remove_listeners: HashMap<ItemId, EventListener>,
    retired: Vec<EventListener>,
}

type Shared = Rc<RefCell<Instance>>;

/// Per-element state handed to the JS shim.
#[wasm_bindgen]
pub struct EditableListHandle {
    inner: Shared,
}

impl EditableListHandle {
    fn construct(host: &HtmlElement) -> ListResult<Self> {
        let attributes = read_attributes(host);
        if let Some((_, raw)) = attributes.iter().find(|(name, _)| name == VARIANT_ATTR)
            && let Err(err) = raw.parse::<ListVariant>()
        {
            console::warn!("editable-list falling back to default variant", err.to_string());
        }
        let config = ListConfig::from_attributes(attributes);
        let machine = ListMachine::initialize(config);
        let view = ShadowView::mount(host, &machine.view(), machine.items())?;
        Ok(Self {
            inner: Rc::new(RefCell::new(Instance {
                machine,
                view,
                add_listener: None,
                remove_listeners: HashMap::new(),
                retired: Vec::new(),
            })),
        })
    }
}

#[wasm_bindgen]
impl EditableListHandle {
    /// `connectedCallback`: wires listeners on the first call only.
    pub fn connected(&self) {
        let outcome = match self.inner.try_borrow_mut() {
            Ok(mut instance) => instance.machine.attach(),
            Err(_) => {
                console::warn!("editable-list busy; attach skipped");
                return;
            }
        };
        if let AttachOutcome::Wire { rows } = outcome
            && let Err(err) = wire(&self.inner, &rows)
        {
            if let Ok(mut instance) = self.inner.try_borrow_mut() {
                instance.machine.abandon_wiring();
            }
            console::error!("editable-list wiring failed", format!("{err:?}"));
        }
    }

    /// `disconnectedCallback`.
    pub fn disconnected(&self) {
        if let Ok(mut instance) = self.inner.try_borrow_mut() {
            instance.machine.detach();
        }
    }

    /// Number of rows currently in the list.
    #[wasm_bindgen(js_name = rowCount)]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.inner
            .try_borrow()
            .map_or(0, |instance| instance.machine.items().len())
    }
}

fn read_attributes(host: &Element) -> Vec<(String, String)> {
    host.get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| {
            let value = host.get_attribute(&name)?;
            Some((name, value))
        })
        .collect()
}

fn wire(shared: &Shared, rows: &[ItemId]) -> ListResult<()> {
    let weak = Rc::downgrade(shared);
    let mut instance = shared.try_borrow_mut().map_err(|_| ListError::Busy)?;
    if instance.add_listener.is_some() {
        return Ok(());
    }
    // Resolve every control first so a missing row leaves nothing wired.
    let buttons = rows
        .iter()
        .map(|id| Ok((*id, instance.view.remove_button(*id)?)))
        .collect::<ListResult<Vec<_>>>()?;
    let add_button = instance.view.add_button().clone();
    let on_click = weak.clone();
    instance.add_listener = Some(EventListener::new(&add_button, "click", move |_event| {
        on_add(&on_click);
    }));
    for (id, button) in buttons {
        let listener = remove_listener(&weak, id, &button);
        instance.remove_listeners.insert(id, listener);
    }
    Ok(())
}

fn remove_listener(weak: &Weak<RefCell<Instance>>, id: ItemId, button: &Element) -> EventListener {
    let weak = weak.clone();
    EventListener::new(button, "click", move |_event| on_remove(&weak, id))
}

fn on_add(weak: &Weak<RefCell<Instance>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let Ok(mut instance) = shared.try_borrow_mut() else {
        console::warn!("editable-list busy; add ignored");
        return;
    };
    instance.retired.clear();
    let value = instance.view.input_value();
    let outcome = match instance.machine.add(&value) {
        Ok(outcome) => outcome,
        Err(err) => {
            console::error!("editable-list add failed", format!("{err:?}"));
            return;
        }
    };
    let clear = outcome.clears_input();
    let AddOutcome::Added(record) = outcome else {
        return;
    };
    match instance.view.append_row(&record) {
        Ok(button) => {
            let listener = remove_listener(weak, record.id, &button);
            instance.remove_listeners.insert(record.id, listener);
            if clear {
                instance.view.clear_input();
            }
        }
        Err(err) => {
            // Keep the list in step with the DOM; the input keeps its text.
            instance.machine.revert_add(record.id);
            console::error!("editable-list row render failed", format!("{err:?}"));
        }
    }
}

fn on_remove(weak: &Weak<RefCell<Instance>>, id: ItemId) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let Ok(mut instance) = shared.try_borrow_mut() else {
        console::warn!("editable-list busy; remove ignored");
        return;
    };
    // The running listener is parked, not dropped, until the next interaction.
    instance.retired.clear();
    if let Some(listener) = instance.remove_listeners.remove(&id) {
        instance.retired.push(listener);
    }
    match instance.machine.remove(id) {
        Ok(RemoveOutcome::Removed(_)) => {
            instance.view.remove_row(id);
        }
        Ok(RemoveOutcome::Missing) => {
            console::warn!("editable-list row already removed", id.get().to_string());
        }
        Err(err) => console::error!("editable-list remove failed", format!("{err:?}")),
    }
}
