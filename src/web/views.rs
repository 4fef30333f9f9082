//! Template rendering for the HTML task views.

use minijinja::{Environment, context};
use serde::Serialize;
use std::sync::Arc;

use super::error::WebError;
use crate::task::domain::Task;

/// Template names paired with their embedded sources.
///
/// The `.html` suffix keeps minijinja's automatic HTML escaping active for
/// every view.
const TEMPLATES: &[(&str, &str)] = &[
    ("task_list.html", include_str!("../../templates/task_list.html")),
    ("task_detail.html", include_str!("../../templates/task_detail.html")),
    ("create_task.html", include_str!("../../templates/create_task.html")),
    ("update_task.html", include_str!("../../templates/update_task.html")),
];

/// Renders the HTML views from embedded templates.
///
/// The engine is built once at startup and shared across request handlers;
/// cloning it only bumps a reference count.
#[derive(Debug, Clone)]
pub struct ViewEngine {
    environment: Arc<Environment<'static>>,
}

impl ViewEngine {
    /// Builds the engine with every view template registered.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::TemplateRender`] when an embedded template fails
    /// to compile.
    pub fn new() -> Result<Self, WebError> {
        let mut environment = Environment::new();
        for (name, source) in TEMPLATES {
            environment
                .add_template(name, source)
                .map_err(|error| template_error(name, &error))?;
        }
        Ok(Self {
            environment: Arc::new(environment),
        })
    }

    /// Renders the listing page showing every task.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::TemplateRender`] when rendering fails.
    pub fn task_list(&self, tasks: &[Task]) -> Result<String, WebError> {
        self.render("task_list.html", context! { tasks })
    }

    /// Renders the single-task page.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::TemplateRender`] when rendering fails.
    pub fn task_detail(&self, task: &Task) -> Result<String, WebError> {
        self.render("task_detail.html", context! { task })
    }

    /// Renders the empty creation form.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::TemplateRender`] when rendering fails.
    pub fn create_task(&self) -> Result<String, WebError> {
        self.render("create_task.html", context! {})
    }

    /// Renders the update form pre-filled with the task's current content.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::TemplateRender`] when rendering fails.
    pub fn update_task(&self, task: &Task) -> Result<String, WebError> {
        self.render("update_task.html", context! { task })
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, WebError> {
        let template = self
            .environment
            .get_template(name)
            .map_err(|error| template_error(name, &error))?;
        template.render(ctx).map_err(|error| template_error(name, &error))
    }
}

fn template_error(name: &str, error: &minijinja::Error) -> WebError {
    WebError::TemplateRender {
        template: name.to_owned(),
        reason: error.to_string(),
    }
}
