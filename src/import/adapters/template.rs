//! Template renderer backed by `minijinja`.

use minijinja::{Environment, UndefinedBehavior};

use crate::import::{
    domain::{IssueFields, IssueTemplates, TemplateSlot},
    ports::{TemplateError, TemplateRenderer},
};

/// Renders issue templates with `minijinja`.
///
/// Undefined variables are errors, so a misspelled field name fails the
/// import instead of rendering as an empty string.
#[derive(Debug)]
pub struct MiniJinjaRenderer {
    environment: Environment<'static>,
    templates: IssueTemplates,
}

impl MiniJinjaRenderer {
    /// Creates a renderer after checking that every template compiles.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] for the first template with invalid syntax.
    pub fn new(templates: IssueTemplates) -> Result<Self, TemplateError> {
        let mut environment = Environment::new();
        environment.set_undefined_behavior(UndefinedBehavior::Strict);
        environment.set_keep_trailing_newline(true);

        for slot in templates.slots() {
            let source = templates
                .source(slot)
                .ok_or_else(|| TemplateError::new(slot, "template is not configured"))?;
            environment
                .template_from_str(source)
                .map_err(|error| TemplateError::new(slot, error.to_string()))?;
        }

        Ok(Self {
            environment,
            templates,
        })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, slot: TemplateSlot, fields: &IssueFields) -> Result<String, TemplateError> {
        let source = self
            .templates
            .source(slot)
            .ok_or_else(|| TemplateError::new(slot, "template is not configured"))?;
        self.environment
            .render_str(source, fields)
            .map_err(|error| TemplateError::new(slot, error.to_string()))
    }

    fn tag_count(&self) -> usize {
        self.templates.tags.len()
    }
}
