//! Parameter binding: archetype + values → contract source text.
//!
//! Binding happens in two steps. First every declared slot is resolved to a
//! value (caller-supplied, else the slot default) and checked against its
//! [`SlotKind`]. Only when all slots pass is the body handed to the
//! [`TemplateRenderer`], with a context holding exactly the declared slots.
//! Any failure returns before rendering, so no partial text exists.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::catalog::{self, SlotKind, TemplateDescriptor, CONTRACT_NAME_SLOT};
use crate::error::{DevkitError, Result};
use crate::templates::renderer::TemplateRenderer;

/// Python keywords; none of them can name a class.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Renders catalog archetypes into contract source.
#[derive(Default)]
pub struct Binder {
    renderer: TemplateRenderer,
}

impl Binder {
    pub fn new() -> Self {
        Self {
            renderer: TemplateRenderer::new(),
        }
    }

    /// Render the archetype `archetype_id` as a contract class called `name`.
    ///
    /// `extra` supplies values for the archetype's other slots; slots left out
    /// fall back to their defaults.
    pub fn render(
        &self,
        archetype_id: &str,
        name: &str,
        extra: &BTreeMap<String, String>,
    ) -> Result<String> {
        let descriptor = catalog::find(archetype_id)?;
        let mut params = extra.clone();
        if params.contains_key(CONTRACT_NAME_SLOT) {
            tracing::warn!("'{CONTRACT_NAME_SLOT}' in extra parameters is overridden by the contract name");
        }
        params.insert(CONTRACT_NAME_SLOT.to_string(), name.to_string());
        self.render_descriptor(descriptor, &params)
    }

    /// Render any descriptor, shipped or not, from a full parameter map.
    pub fn render_descriptor(
        &self,
        descriptor: &TemplateDescriptor,
        params: &BTreeMap<String, String>,
    ) -> Result<String> {
        for key in params.keys() {
            if descriptor.slot(key).is_none() {
                tracing::warn!("ignoring parameter '{key}': not declared by '{}'", descriptor.id);
            }
        }

        let mut context = Map::new();
        for slot in descriptor.slots {
            let value = params
                .get(slot.name)
                .map(String::as_str)
                .or(slot.default)
                .ok_or_else(|| DevkitError::MissingParameter {
                    archetype: descriptor.id.to_string(),
                    slot: slot.name.to_string(),
                })?;
            check_value(slot.name, slot.kind, value)?;
            context.insert(slot.name.to_string(), Value::String(value.to_string()));
        }

        tracing::debug!(
            archetype = descriptor.id,
            version = descriptor.version,
            "rendering contract template"
        );
        self.renderer.render(descriptor.body, &Value::Object(context))
    }
}

/// Check `value` against the position its slot is substituted into.
pub fn check_value(slot: &str, kind: SlotKind, value: &str) -> Result<()> {
    let reject = |reason: &str| DevkitError::ParameterFormat {
        slot: slot.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match kind {
        SlotKind::Identifier => {
            let mut chars = value.chars();
            match chars.next() {
                None => return Err(reject("identifier is empty")),
                Some(c) if !(c == '_' || c.is_ascii_alphabetic()) => {
                    return Err(reject("identifier must start with a letter or underscore"))
                }
                _ => {}
            }
            if !chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
                return Err(reject("identifier may only contain letters, digits and underscores"));
            }
            if PYTHON_KEYWORDS.contains(&value) {
                return Err(reject("identifier is a reserved Python keyword"));
            }
        }
        SlotKind::Text => {
            if let Some(c) = value
                .chars()
                .find(|c| matches!(c, '"' | '\'' | '\\' | '{' | '}') || c.is_control())
            {
                return Err(reject(&format!("character {c:?} is not allowed in text values")));
            }
        }
        SlotKind::Integer => {
            value
                .parse::<u64>()
                .map_err(|_| reject("expected a non-negative integer"))?;
        }
    }
    Ok(())
}
