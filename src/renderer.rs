//! Template rendering for kiln.
//! Rendering is a single pass over the template against a flat context;
//! any reference to a variable missing from the context is an error.
use crate::error::Result;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// Renders one template source against the scaffold's substitution context.
pub trait TemplateRenderer {
    /// Produces the rendered text in a single pass. Implementations must fail
    /// instead of emitting an empty token for a name the context lacks.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// Renderer backed by a shared MiniJinja environment.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that rejects undefined variables, keeps the
    /// trailing newline of templates and never escapes output.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::TemplateError` if the template does not parse or references
    ///   a variable absent from `context`
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.template_from_str(template)?;
        Ok(tmpl.render(context)?)
    }
}
