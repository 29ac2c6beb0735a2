//! Handlebars-based template renderer for contract generation.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and
//! HTML escaping disabled. Strict mode ensures that any `{{variable}}` referenced
//! in a template must be present in the data context, otherwise rendering returns
//! an error. The binder only places declared slots in the context, so a body that
//! references an undeclared slot can never render silently as an empty string.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "contract_name": "MyStorage", "missing_value": "Not found" });
//! let output = renderer.render(embedded::BASIC_STORAGE_CONTRACT, &data)?;
//! ```

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{DevkitError, Result};

/// Template renderer using Handlebars for generating contract files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    ///
    /// Output is Python source, not HTML: quotes and angle brackets must pass
    /// through untouched.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| DevkitError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
