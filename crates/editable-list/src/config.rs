//! Element configuration read from host attributes.
//!
//! # Design
//! - Attributes are read once, at construction; later changes are ignored.
//! - Missing attributes degrade to empty strings and never fail.
//! - Item discovery keeps the permissive substring rule unless the host opts into
//!   the strict prefix rule.

use serde::{Deserialize, Serialize};

use crate::theme::ListVariant;

/// Tag name the element registers under.
pub const TAG_NAME: &str = "editable-list";
/// Attribute holding the heading text.
pub const HEADING_ATTR: &str = "heading";
/// Attribute holding the add-row label.
pub const ADD_ITEM_TEXT_ATTR: &str = "add-item-text";
/// Attribute selecting the presentation variant.
pub const VARIANT_ATTR: &str = "variant";
/// Boolean attribute switching item discovery to the prefix rule.
pub const STRICT_ITEMS_ATTR: &str = "strict-items";
/// Marker contained in every item attribute name.
pub const ITEM_ATTR_MARKER: &str = "list-item";

const RESERVED_ATTRS: [&str; 4] = [
    HEADING_ATTR,
    ADD_ITEM_TEXT_ATTR,
    VARIANT_ATTR,
    STRICT_ITEMS_ATTR,
];

/// Rule deciding which attributes seed list items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemAttributeMatch {
    /// Name contains `list-item` anywhere (`data-list-item-x` included).
    #[default]
    Contains,
    /// Name starts with `list-item`.
    Prefix,
}

impl ItemAttributeMatch {
    /// Whether an attribute name seeds a list item under this rule.
    #[must_use]
    pub fn matches(self, name: &str) -> bool {
        if RESERVED_ATTRS.contains(&name) {
            return false;
        }
        match self {
            Self::Contains => name.contains(ITEM_ATTR_MARKER),
            Self::Prefix => name.starts_with(ITEM_ATTR_MARKER),
        }
    }
}

/// Configuration captured from the host element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Heading text; empty renders an empty heading.
    pub heading: String,
    /// Label shown in the add row.
    pub add_item_text: String,
    /// Initial items in attribute order.
    pub items: Vec<String>,
    /// Presentation variant.
    pub variant: ListVariant,
}

impl ListConfig {
    /// Build a configuration from `(name, value)` attribute pairs in host order.
    ///
    /// Unknown `variant` values fall back to [`ListVariant::Standard`].
    #[must_use]
    pub fn from_attributes<I, N, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = attributes
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_ascii_lowercase(), value.into()))
            .collect();
        let lookup = |wanted: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == wanted)
                .map(|(_, value)| value.as_str())
        };

        let rule = if lookup(STRICT_ITEMS_ATTR).is_some() {
            ItemAttributeMatch::Prefix
        } else {
            ItemAttributeMatch::Contains
        };
        let variant = lookup(VARIANT_ATTR).map_or_else(ListVariant::default, |raw| {
            raw.parse().unwrap_or_else(|err| {
                tracing::warn!(value = raw, error = %err, "falling back to default list variant");
                ListVariant::default()
            })
        });
        let items = pairs
            .iter()
            .filter(|(name, _)| rule.matches(name))
            .map(|(_, value)| value.clone())
            .collect();

        Self {
            heading: lookup(HEADING_ATTR).unwrap_or_default().to_string(),
            add_item_text: lookup(ADD_ITEM_TEXT_ATTR).unwrap_or_default().to_string(),
            items,
            variant,
        }
    }
}
