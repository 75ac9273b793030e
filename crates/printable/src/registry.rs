use std::collections::BTreeMap;

use crate::{
    capability::{HtmlData, HtmlRenderable, JsonData, JsonRenderable, TextData, TextRenderable},
    error::Result,
    format::Format,
};

/// Renders a payload into one named output format.
pub trait Renderer {
    fn name(&self) -> &str;

    fn render(&self, payload: &str) -> Result<String>;
}

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn name(&self) -> &str {
        Format::Text.as_str()
    }

    fn render(&self, payload: &str) -> Result<String> {
        Ok(TextData(payload.to_owned()).render_text())
    }
}

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn name(&self) -> &str {
        Format::Html.as_str()
    }

    fn render(&self, payload: &str) -> Result<String> {
        Ok(HtmlData(payload.to_owned()).render_html())
    }
}

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn name(&self) -> &str {
        Format::Json.as_str()
    }

    fn render(&self, payload: &str) -> Result<String> {
        Ok(JsonData(payload.to_owned()).render_json())
    }
}

/// Renderers keyed by the format identifier they answer to.
///
/// New formats are added with [`RendererRegistry::register`]; the built-in ones are never
/// touched to do so.
#[derive(Default)]
pub struct RendererRegistry {
    renderers: BTreeMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the `text`, `html` and `json` renderers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TextRenderer);
        registry.register(HtmlRenderer);
        registry.register(JsonRenderer);

        registry
    }

    /// Registers a renderer under its name, returning the renderer it replaced, if any.
    pub fn register(&mut self, renderer: impl Renderer + 'static) -> Option<Box<dyn Renderer>> {
        let name = renderer.name().to_owned();
        tracing::trace!(renderer = %name, "registering renderer");

        self.renderers.insert(name, Box::new(renderer))
    }

    pub fn get(&self, name: &str) -> Option<&dyn Renderer> {
        let renderer = self.renderers.get(name).map(|renderer| &**renderer);
        tracing::trace!(renderer = name, found = renderer.is_some(), "renderer lookup");

        renderer
    }

    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// Registered identifiers in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.renderers.keys().map(String::as_str)
    }
}
