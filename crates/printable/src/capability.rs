//! Per-format capabilities.
//!
//! Each format gets its own trait and its own concrete type. A value can only be rendered in
//! the format its type implements, so there is nothing to check at runtime. The HTML and JSON
//! renderings here are the corrected ones: a proper `</html>` closing tag and an escaped JSON
//! string.

use serde::{Deserialize, Serialize};

use crate::{format::Format, item::Data};

pub trait TextRenderable {
    fn render_text(&self) -> String;
}

pub trait HtmlRenderable {
    fn render_html(&self) -> String;
}

pub trait JsonRenderable {
    fn render_json(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextData(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlData(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonData(pub String);

impl TextRenderable for TextData {
    fn render_text(&self) -> String {
        self.0.clone()
    }
}

impl HtmlRenderable for HtmlData {
    fn render_html(&self) -> String {
        format!("<html>{}</html>", self.0)
    }
}

impl JsonRenderable for JsonData {
    fn render_json(&self) -> String {
        serde_json::json!({ "data": self.0 }).to_string()
    }
}

/// One of the per-format types, tagged by its format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", content = "payload", rename_all = "lowercase")]
pub enum Variant {
    Text(TextData),
    Html(HtmlData),
    Json(JsonData),
}

impl Variant {
    pub fn format(&self) -> Format {
        match self {
            Variant::Text(_) => Format::Text,
            Variant::Html(_) => Format::Html,
            Variant::Json(_) => Format::Json,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Variant::Text(data) => data.render_text(),
            Variant::Html(data) => data.render_html(),
            Variant::Json(data) => data.render_json(),
        }
    }
}

impl From<Data> for Variant {
    fn from(data: Data) -> Self {
        let format = data.declared_format();
        let payload = data.into_payload();

        match format {
            Format::Text => Variant::Text(TextData(payload)),
            Format::Html => Variant::Html(HtmlData(payload)),
            Format::Json => Variant::Json(JsonData(payload)),
        }
    }
}
