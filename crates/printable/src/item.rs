//! The classic renderable item.
//!
//! [`Printable`] bundles every output format into one interface, and [`Data`] guards each
//! operation with a runtime check against the format it was constructed with. Calling an
//! operation for any other format fails with [`FormatMismatch`]. See [`crate::capability`]
//! for the per-format alternative.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{capability::Variant, format::Format};

/// Raised when a render operation targets a format other than the item's declared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot render as {expected}: item was declared as {actual}")]
pub struct FormatMismatch {
    /// The format the render operation produces.
    pub expected: Format,
    /// The format the item was constructed with.
    pub actual: Format,
}

pub trait Printable {
    fn render_as_text(&self) -> Result<String, FormatMismatch>;

    fn render_as_html(&self) -> Result<String, FormatMismatch>;

    fn render_as_json(&self) -> Result<String, FormatMismatch>;
}

/// A payload paired with the one format it may be rendered in.
///
/// The declared format is fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    payload: String,
    declared_format: Format,
}

impl Data {
    pub fn new(payload: impl Into<String>, declared_format: Format) -> Self {
        Self {
            payload: payload.into(),
            declared_format,
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn declared_format(&self) -> Format {
        self.declared_format
    }

    /// Converts the item into the per-format variant matching its declared format.
    pub fn into_variant(self) -> Variant {
        Variant::from(self)
    }

    pub(crate) fn into_payload(self) -> String {
        self.payload
    }

    fn ensure(&self, expected: Format) -> Result<(), FormatMismatch> {
        if self.declared_format != expected {
            return Err(FormatMismatch {
                expected,
                actual: self.declared_format,
            });
        }

        Ok(())
    }
}

impl Printable for Data {
    fn render_as_text(&self) -> Result<String, FormatMismatch> {
        self.ensure(Format::Text)?;

        Ok(self.payload.clone())
    }

    // NOTE: `<html/>` instead of `</html>` is a known defect of this item and is kept as-is.
    fn render_as_html(&self) -> Result<String, FormatMismatch> {
        self.ensure(Format::Html)?;

        Ok(format!("<html>{}<html/>", self.payload))
    }

    // NOTE: The payload is not escaped.
    fn render_as_json(&self) -> Result<String, FormatMismatch> {
        self.ensure(Format::Json)?;

        Ok(format!("{{ \"data\": \"{}\"}}", self.payload))
    }
}
