#![cfg_attr(not(target_arch = "wasm32"), forbid(unsafe_code))]
#![cfg_attr(target_arch = "wasm32", deny(unsafe_code))]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! `<editable-list>` custom element.
//!
//! The DOM-free core (configuration, item model, lifecycle, view projection and
//! theme) builds on every target; the shadow root and event wiring are wasm32 only.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod theme;
pub mod view;

#[cfg(target_arch = "wasm32")]
mod demo;
#[cfg(target_arch = "wasm32")]
mod dom;
// wasm-bindgen expands exports and imports into unsafe ABI shims.
#[cfg(target_arch = "wasm32")]
#[allow(unsafe_code)]
pub mod element;

pub use config::{ListConfig, TAG_NAME};
pub use error::{ListError, ListResult};
pub use lifecycle::{AddOutcome, AttachOutcome, ListMachine, Phase, RemoveOutcome};
pub use model::{ItemId, ItemList, ItemRecord};
pub use theme::ListVariant;

#[cfg(target_arch = "wasm32")]
pub use demo::run_demo;
#[cfg(target_arch = "wasm32")]
pub use element::{define_element, register};
