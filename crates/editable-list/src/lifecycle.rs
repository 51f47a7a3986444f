//! Lifecycle state machine for one element instance.
//!
//! # Design
//! - Three phases: configure and render on construction, wire on first attach,
//!   then serve add/remove interactions.
//! - Wiring happens exactly once per instance; re-attaching after a detach is a
//!   no-op so listeners are never registered twice.
//! - Outcomes tell the DOM layer which edit to mirror; the machine itself never
//!   touches the DOM.

use crate::config::ListConfig;
use crate::error::{ListError, ListResult};
use crate::model::{ItemId, ItemList, ItemRecord};
use crate::view::{self, ViewElement};

/// Lifecycle phase of an element instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Rendered but never attached.
    Constructed,
    /// Connected to a document.
    Attached,
    /// Removed from the document after having been attached.
    Detached,
}

/// Result of an attach notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttachOutcome {
    /// First attach: wire the add control and the remove controls of these rows.
    Wire {
        /// Rows present at attach time, in display order.
        rows: Vec<ItemId>,
    },
    /// Already wired by an earlier attach.
    AlreadyWired,
}

/// Result of an add request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// A row was appended; render it, wire its remove control, clear the input.
    Added(ItemRecord),
    /// Input was empty; nothing changes.
    IgnoredEmpty,
}

impl AddOutcome {
    /// Whether the add input should be cleared once the row is rendered.
    #[must_use]
    pub const fn clears_input(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

/// Result of a remove request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The row was removed from the list.
    Removed(ItemRecord),
    /// No row with that id exists.
    Missing,
}

/// Explicit lifecycle of an editable list instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListMachine {
    config: ListConfig,
    items: ItemList,
    phase: Phase,
    wired: bool,
}

impl ListMachine {
    /// Capture configuration and seed the item list.
    #[must_use]
    pub fn initialize(config: ListConfig) -> Self {
        let items = ItemList::from_texts(config.items.iter().cloned());
        tracing::debug!(items = items.len(), variant = config.variant.as_str(), "list initialized");
        Self {
            config,
            items,
            phase: Phase::Constructed,
            wired: false,
        }
    }

    /// Current rendering of the instance.
    #[must_use]
    pub fn view(&self) -> ViewElement {
        view::render(&self.config, &self.items)
    }

    /// Record that the element entered a document.
    pub fn attach(&mut self) -> AttachOutcome {
        self.phase = Phase::Attached;
        if self.wired {
            tracing::debug!("list re-attached; listeners already wired");
            return AttachOutcome::AlreadyWired;
        }
        self.wired = true;
        let rows: Vec<ItemId> = self.items.iter().map(|record| record.id).collect();
        tracing::debug!(rows = rows.len(), "list wired");
        AttachOutcome::Wire { rows }
    }

    /// Forget a wiring attempt that installed no listeners, so the next attach
    /// wires again.
    pub fn abandon_wiring(&mut self) {
        if self.wired {
            tracing::warn!("list wiring abandoned");
            self.wired = false;
        }
    }

    /// Record that the element left its document. Listeners stay wired.
    pub fn detach(&mut self) {
        if self.phase == Phase::Attached {
            self.phase = Phase::Detached;
        }
    }

    /// Append the input text as a new row.
    ///
    /// # Errors
    /// Returns [`ListError::NotWired`] before the first attach.
    pub fn add(&mut self, input: &str) -> ListResult<AddOutcome> {
        if !self.wired {
            return Err(ListError::NotWired);
        }
        let Some(record) = self.items.push(input).cloned() else {
            return Ok(AddOutcome::IgnoredEmpty);
        };
        tracing::debug!(id = record.id.get(), rows = self.items.len(), "item added");
        Ok(AddOutcome::Added(record))
    }

    /// Undo an add whose row could not be rendered.
    ///
    /// Returns the dropped record, or `None` when `id` is unknown.
    pub fn revert_add(&mut self, id: ItemId) -> Option<ItemRecord> {
        let record = self.items.remove(id)?;
        tracing::warn!(id = id.get(), rows = self.items.len(), "item add reverted");
        Some(record)
    }

    /// Remove the row with `id`.
    ///
    /// # Errors
    /// Returns [`ListError::NotWired`] before the first attach.
    pub fn remove(&mut self, id: ItemId) -> ListResult<RemoveOutcome> {
        if !self.wired {
            return Err(ListError::NotWired);
        }
        match self.items.remove(id) {
            Some(record) => {
                tracing::debug!(id = id.get(), rows = self.items.len(), "item removed");
                Ok(RemoveOutcome::Removed(record))
            }
            None => {
                tracing::warn!(id = id.get(), "remove requested for unknown row");
                Ok(RemoveOutcome::Missing)
            }
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether listeners have been wired.
    #[must_use]
    pub const fn is_wired(&self) -> bool {
        self.wired
    }

    /// Configuration captured at construction.
    #[must_use]
    pub const fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Current rows.
    #[must_use]
    pub const fn items(&self) -> &ItemList {
        &self.items
    }
}
