//! Template text and the renderer that fills it in.
//!
//! Contract bodies are embedded into the binary at compile-time via [`include_str!`]
//! in the [`embedded`] module, then rendered at runtime with
//! [Handlebars](https://handlebarsjs.com/) via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Every contract body uses `{{contract_name}}` for the generated class name.
//! Archetype-specific slots (e.g. `{{quote_currency}}`, `{{min_deposit}}`) are
//! declared next to the body in [`crate::catalog`]; a body that references a slot
//! its descriptor does not declare fails to render.
//!
//! ## Adding a new archetype
//!
//! 1. Create the `.py.hbs` file under `templates/contracts/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Add a [`crate::catalog::TemplateDescriptor`] entry to the catalog
//!
//! The binder needs no change.

pub mod embedded;
pub mod renderer;
