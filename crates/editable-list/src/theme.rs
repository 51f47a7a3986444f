//! Stylesheet and style variables for the editable list shadow root.
//!
//! # Design
//! - The element consumes CSS custom properties but never defines them.
//! - Unset variables fall back to the browser's default rendering.
//! - Presentational differences live in [`ListVariant`], not in markup.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ListError;
use crate::view::class;

/// A CSS custom property read from the surrounding document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleVar {
    /// Property name including the leading dashes.
    pub name: &'static str,
    /// CSS property the variable feeds.
    pub property: &'static str,
}

impl StyleVar {
    /// `var(...)` reference for the variable.
    #[must_use]
    pub fn reference(self) -> String {
        format!("var({})", self.name)
    }
}

/// Heading text color.
pub const HEADING_COLOR: StyleVar = StyleVar {
    name: "--listHeadingCol",
    property: "color",
};

/// Style variables applied to the list wrapper, in declaration order.
pub const WRAPPER_VARS: &[StyleVar] = &[
    StyleVar {
        name: "--listWrapperPadding",
        property: "padding",
    },
    StyleVar {
        name: "--listWrapperMargin",
        property: "margin",
    },
    StyleVar {
        name: "--listWrapperBorder",
        property: "border",
    },
    StyleVar {
        name: "--listWrapperRadius",
        property: "border-radius",
    },
    StyleVar {
        name: "--listWrapperShadow",
        property: "box-shadow",
    },
    StyleVar {
        name: "--listWrapperBg",
        property: "background",
    },
];

/// Style variables applied to the add and remove buttons.
pub const ICON_VARS: &[StyleVar] = &[
    StyleVar {
        name: "--listIconSize",
        property: "font-size",
    },
    StyleVar {
        name: "--listIconBgCol",
        property: "background-color",
    },
    StyleVar {
        name: "--listIconBorder",
        property: "border",
    },
];

/// Every style variable the element consumes.
#[must_use]
pub fn style_vars() -> Vec<StyleVar> {
    std::iter::once(HEADING_COLOR)
        .chain(WRAPPER_VARS.iter().copied())
        .chain(ICON_VARS.iter().copied())
        .collect()
}

/// Presentation variant of the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListVariant {
    /// Rows separated by a red divider.
    #[default]
    Standard,
    /// Rows without a divider.
    Minimal,
}

impl ListVariant {
    /// Attribute value for the variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Minimal => "minimal",
        }
    }

    const fn row_divider(self) -> Option<&'static str> {
        match self {
            Self::Standard => Some("1px solid red"),
            Self::Minimal => None,
        }
    }
}

impl FromStr for ListVariant {
    type Err = ListError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" | "" => Ok(Self::Standard),
            "minimal" => Ok(Self::Minimal),
            _ => Err(ListError::UnknownVariant {
                value: value.to_string(),
            }),
        }
    }
}

/// Build the shadow root stylesheet for a variant.
#[must_use]
pub fn stylesheet(variant: ListVariant) -> String {
    let mut css = String::new();
    rule(&mut css, &format!(".{}", class::HEADING), &[HEADING_COLOR]);
    rule(&mut css, &format!(".{}", class::LIST), WRAPPER_VARS);
    let _ = writeln!(
        css,
        ".{} {{ display: flex; align-items: center; justify-content: space-between; padding: 5px; }}",
        class::ROW
    );
    if let Some(divider) = variant.row_divider() {
        let _ = writeln!(css, ".{row} + .{row} {{ border-top: {divider}; }}", row = class::ROW);
    }
    let _ = write!(css, ".{} {{ cursor: pointer;", class::BUTTON);
    for var in ICON_VARS {
        let _ = write!(css, " {}: {};", var.property, var.reference());
    }
    css.push_str(" }\n");
    css
}

fn rule(css: &mut String, selector: &str, vars: &[StyleVar]) {
    css.push_str(selector);
    css.push_str(" {");
    for var in vars {
        let _ = write!(css, " {}: {};", var.property, var.reference());
    }
    css.push_str(" }\n");
}
