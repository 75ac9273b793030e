use printable::{error::Result, registry::Renderer};
use std::{cell::RefCell, env, path::PathBuf, rc::Rc};

#[allow(dead_code)] // Not every test binary loads fixtures.
pub fn test_dir() -> PathBuf {
    env::current_dir()
        .expect("Unable to get working directory")
        .join("data")
}

/// Wraps the payload in a tag and remembers every payload it was asked to render.
#[derive(Clone)]
pub struct TestRenderer {
    name: String,
    payloads: Rc<RefCell<Vec<String>>>,
}

impl TestRenderer {
    #[allow(dead_code)] // Avoid a false positive on the dead code analysis.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payloads: Rc::default(),
        }
    }

    #[allow(dead_code)] // Avoid a false positive on the dead code analysis.
    pub fn payloads(&self) -> Vec<String> {
        self.payloads.borrow().clone()
    }
}

impl Renderer for TestRenderer {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, payload: &str) -> Result<String> {
        self.payloads.borrow_mut().push(payload.to_owned());

        Ok(format!("<{0}>{payload}</{0}>", self.name))
    }
}

/// A renderer that always fails, with a cause attached.
#[allow(dead_code)]
pub struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn name(&self) -> &str {
        "failing"
    }

    fn render(&self, _payload: &str) -> Result<String> {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "template missing");

        Err(anyhow::Error::new(cause).context("nothing to see here"))
    }
}
