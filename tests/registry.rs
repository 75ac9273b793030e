use crate::common::{FailingRenderer, TestRenderer};
use printable::{
    dispatch::{write_with, DispatchError},
    registry::RendererRegistry,
};
use std::error::Error;

mod common;

#[test]
fn it_renders_new_formats_without_touching_the_built_ins() {
    let renderer = TestRenderer::new("xml");
    let mut registry = RendererRegistry::with_defaults();

    assert!(registry.register(renderer.clone()).is_none());

    let mut sink = Vec::new();
    write_with(&mut sink, &registry, "xml", "x").expect("xml is registered");
    write_with(&mut sink, &registry, "html", "x").expect("html is registered");

    assert_eq!("<xml>x</xml><html>x</html>", String::from_utf8(sink).expect("utf-8"));
    assert_eq!(vec![String::from("x")], renderer.payloads());
    assert_eq!(
        vec!["html", "json", "text", "xml"],
        registry.names().collect::<Vec<_>>()
    );
}

#[test]
fn it_escapes_json_through_the_registry() {
    let registry = RendererRegistry::with_defaults();
    let mut sink = Vec::new();

    write_with(&mut sink, &registry, "json", "a \"quoted\" word").expect("json is registered");

    assert_eq!(
        r#"{"data":"a \"quoted\" word"}"#,
        String::from_utf8(sink).expect("utf-8")
    );
}

#[test]
fn it_reports_renderer_failures_without_writing() {
    let mut registry = RendererRegistry::new();
    registry.register(FailingRenderer);

    let mut sink = Vec::new();
    let err = write_with(&mut sink, &registry, "failing", "x").expect_err("renderer fails");

    assert_eq!("renderer 'failing' failed", err.to_string());

    let source = err.source().expect("the renderer error is kept");
    assert_eq!("nothing to see here", source.to_string());
    assert!(source.source().is_some(), "the whole chain is kept");

    let DispatchError::Render { name, .. } = err else {
        panic!("expected a render failure, got {err:?}");
    };

    assert_eq!("failing", name);
    assert!(sink.is_empty());
}

#[test]
fn it_reports_unknown_formats() {
    let registry = RendererRegistry::new();
    let err = write_with(&mut Vec::<u8>::new(), &registry, "text", "x")
        .expect_err("registry is empty");

    assert_eq!("no renderer registered for format 'text'", err.to_string());
}
