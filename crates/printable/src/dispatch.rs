//! Writing rendered output to a caller-owned sink.
//!
//! None of these functions flush or close the sink; the caller acquires it before the call and
//! releases it afterwards. Rendering always happens before the single write, so a failed render
//! leaves the sink untouched.

use std::io::Write;
use thiserror::Error;

use crate::{
    capability::Variant,
    format::Format,
    item::{FormatMismatch, Printable},
    registry::RendererRegistry,
};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Mismatch(#[from] FormatMismatch),
    #[error("no renderer registered for format '{0}'")]
    UnknownFormat(String),
    #[error("renderer '{name}' failed")]
    Render {
        name: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to write rendered output")]
    Io(#[from] std::io::Error),
}

/// Renders `item` as `format` and writes the result to `sink`.
pub fn write_as<W, P>(sink: &mut W, item: &P, format: Format) -> Result<(), DispatchError>
where
    W: Write + ?Sized,
    P: Printable + ?Sized,
{
    tracing::debug!(%format, "dispatching render");

    let rendered = match format {
        Format::Text => item.render_as_text()?,
        Format::Html => item.render_as_html()?,
        Format::Json => item.render_as_json()?,
    };

    sink.write_all(rendered.as_bytes())?;

    Ok(())
}

pub fn write_as_text<W, P>(sink: &mut W, item: &P) -> Result<(), DispatchError>
where
    W: Write + ?Sized,
    P: Printable + ?Sized,
{
    write_as(sink, item, Format::Text)
}

pub fn write_as_html<W, P>(sink: &mut W, item: &P) -> Result<(), DispatchError>
where
    W: Write + ?Sized,
    P: Printable + ?Sized,
{
    write_as(sink, item, Format::Html)
}

pub fn write_as_json<W, P>(sink: &mut W, item: &P) -> Result<(), DispatchError>
where
    W: Write + ?Sized,
    P: Printable + ?Sized,
{
    write_as(sink, item, Format::Json)
}

/// Writes a per-format variant. Only the write itself can fail.
pub fn write_variant<W>(sink: &mut W, variant: &Variant) -> Result<(), DispatchError>
where
    W: Write + ?Sized,
{
    tracing::debug!(format = %variant.format(), "writing variant");

    sink.write_all(variant.render().as_bytes())?;

    Ok(())
}

/// Looks up the renderer registered as `format` and writes its rendering of `payload`.
pub fn write_with<W>(
    sink: &mut W,
    registry: &RendererRegistry,
    format: &str,
    payload: &str,
) -> Result<(), DispatchError>
where
    W: Write + ?Sized,
{
    let Some(renderer) = registry.get(format) else {
        return Err(DispatchError::UnknownFormat(format.to_owned()));
    };

    tracing::debug!(renderer = renderer.name(), "dispatching render through registry");

    let rendered = renderer
        .render(payload)
        .map_err(|source| DispatchError::Render {
            name: renderer.name().to_owned(),
            source,
        })?;

    sink.write_all(rendered.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::item::Data;

    #[test]
    fn writes_the_matching_rendering() {
        let mut sink = Vec::new();

        write_as(&mut sink, &Data::new("hi", Format::Text), Format::Text).expect("should write");

        assert_eq!(b"hi", sink.as_slice());
    }

    #[test]
    fn mismatch_is_returned_as_is() {
        let mut sink = Vec::new();
        let err = write_as_json(&mut sink, &Data::new("hi", Format::Text))
            .expect_err("text item cannot render as json");

        let DispatchError::Mismatch(mismatch) = err else {
            panic!("expected a mismatch, got {err:?}");
        };

        assert_eq!(Format::Json, mismatch.expected);
        assert_eq!(Format::Text, mismatch.actual);
        assert!(sink.is_empty());
    }

    #[test]
    fn appends_to_existing_sink_contents() {
        let mut sink = b"prefix:".to_vec();

        write_as_text(&mut sink, &Data::new("hi", Format::Text)).expect("should write");
        write_as_text(&mut sink, &Data::new("!", Format::Text)).expect("should write");

        assert_eq!(b"prefix:hi!", sink.as_slice());
    }

    #[test]
    fn works_through_trait_objects() {
        let item: Box<dyn Printable> = Box::new(Data::new("x", Format::Html));
        let mut sink: Vec<u8> = Vec::new();
        let writer: &mut dyn Write = &mut sink;

        write_as_html(writer, &*item).expect("should write");

        assert_eq!(b"<html>x<html/>", sink.as_slice());
    }

    #[test]
    fn unknown_registry_formats_are_reported() {
        let mut sink = Vec::new();
        let err = write_with(&mut sink, &RendererRegistry::with_defaults(), "xml", "x")
            .expect_err("xml is not registered");

        assert!(matches!(err, DispatchError::UnknownFormat(ref name) if name == "xml"));
        assert!(sink.is_empty());
    }

    #[test]
    fn variants_write_their_rendering() {
        let mut sink = Vec::new();
        let variant = Data::new("x", Format::Json).into_variant();

        write_variant(&mut sink, &variant).expect("should write");

        assert_eq!(br#"{"data":"x"}"#, sink.as_slice());
    }
}
