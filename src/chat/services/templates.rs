//! Outbound message templates.

use minijinja::{Environment, context};
use serde::Serialize;
use thiserror::Error;

use crate::task::domain::{TaskSnapshot, User};

/// Reply sent when a listing matches no tasks.
pub const NO_TASKS: &str = "no tasks";
/// Reply confirming that a task was released.
pub const UNASSIGN_ACCEPTED: &str = "Accepted";
/// Reply for transitions attempted by someone other than the assignee.
pub const NOT_ASSIGNED_TO_YOU: &str = "task is not assigned to you";
/// Reply for identifiers that do not address an unresolved task.
pub const TASK_NOT_FOUND: &str = "task doesn't exist or already resolved";
/// Reply for failures the user cannot act on.
pub const UNEXPECTED_ERROR: &str = "something went wrong";

const TASK_LIST: &str = r#"{% for task in tasks %}
{% if not loop.first %}

{% endif %}
{{ task.id }}. {{ task.content }} by @{{ task.owner }}
{% if task.state == "open" %}
/assign_{{ task.id }}
{% elif not task.mine %}
assignee: @{{ task.assignee }}
{% else %}
{% if not hide_assignee %}
assignee: me
{% endif %}
/unassign_{{ task.id }} /resolve_{{ task.id }}
{% endif %}
{% endfor %}"#;
const TASK_CREATED: &str = r#"Task "{{ content }}" created, id={{ id }}"#;
const ASSIGNED_TO_YOU: &str = r#"Task "{{ content }}" is assigned to you"#;
const ASSIGNED_TO: &str = r#"Task "{{ content }}" is assigned to @{{ assignee }}"#;
const LEFT_UNASSIGNED: &str = r#"Task "{{ content }}" has no assignee"#;
const RESOLVED: &str = r#"Task "{{ content }}" resolved"#;
const RESOLVED_BY: &str = r#"Task "{{ content }}" resolved by @{{ assignee }}"#;

/// Which listing a task list is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    /// `/tasks`
    All,
    /// `/owner`
    Owned,
    /// `/my`: the viewer is the assignee of every task, so the assignee
    /// line is left out.
    Assigned,
}

impl ListView {
    const fn hides_assignee(self) -> bool {
        matches!(self, Self::Assigned)
    }
}

/// Error returned when a message template fails to render.
#[derive(Debug, Clone, Error)]
#[error("failed to render {template} message: {reason}")]
pub struct TemplateError {
    template: &'static str,
    reason: String,
}

#[derive(Serialize)]
struct TaskLine<'a> {
    id: u64,
    content: &'a str,
    owner: &'a str,
    assignee: Option<&'a str>,
    state: &'static str,
    mine: bool,
}

/// Renders the text of every outbound message.
pub struct Templates {
    environment: Environment<'static>,
}

impl Templates {
    /// Creates the template set.
    #[must_use]
    pub fn new() -> Self {
        let mut environment = Environment::new();
        environment.set_trim_blocks(true);
        Self { environment }
    }

    /// Renders a task listing as seen by `viewer`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when rendering fails.
    pub fn task_list(
        &self,
        viewer: &User,
        tasks: &[TaskSnapshot],
        view: ListView,
    ) -> Result<String, TemplateError> {
        if tasks.is_empty() {
            return Ok(NO_TASKS.to_owned());
        }

        let lines: Vec<TaskLine<'_>> = tasks
            .iter()
            .map(|task| TaskLine {
                id: task.id().value(),
                content: task.content(),
                owner: task.owner().display_name(),
                assignee: task.assignee().map(User::display_name),
                state: task.state().as_str(),
                mine: task.assignee().is_some_and(|user| user.id() == viewer.id()),
            })
            .collect();

        let rendered = self.render(
            "task list",
            TASK_LIST,
            context! { tasks => lines, hide_assignee => view.hides_assignee() },
        )?;
        Ok(rendered.trim_end().to_owned())
    }

    /// Confirms a new task to its creator.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when rendering fails.
    pub fn task_created(&self, task: &TaskSnapshot) -> Result<String, TemplateError> {
        self.render(
            "task created",
            TASK_CREATED,
            context! { content => task.content(), id => task.id().value() },
        )
    }

    /// Confirms a claim to the new assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when rendering fails.
    pub fn assigned_to_you(&self, task: &TaskSnapshot) -> Result<String, TemplateError> {
        self.render(
            "assigned to you",
            ASSIGNED_TO_YOU,
            context! { content => task.content() },
        )
    }

    /// Tells a third party that `assignee` claimed the task.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when rendering fails.
    pub fn assigned_to(
        &self,
        task: &TaskSnapshot,
        assignee: &User,
    ) -> Result<String, TemplateError> {
        self.render(
            "assigned to",
            ASSIGNED_TO,
            context! { content => task.content(), assignee => assignee.display_name() },
        )
    }

    /// Tells the owner that the task lost its assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when rendering fails.
    pub fn left_unassigned(&self, task: &TaskSnapshot) -> Result<String, TemplateError> {
        self.render(
            "left unassigned",
            LEFT_UNASSIGNED,
            context! { content => task.content() },
        )
    }

    /// Confirms a resolution to the resolver.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when rendering fails.
    pub fn resolved(&self, task: &TaskSnapshot) -> Result<String, TemplateError> {
        self.render("resolved", RESOLVED, context! { content => task.content() })
    }

    /// Tells the owner that `resolver` resolved the task.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when rendering fails.
    pub fn resolved_by(
        &self,
        task: &TaskSnapshot,
        resolver: &User,
    ) -> Result<String, TemplateError> {
        self.render(
            "resolved by",
            RESOLVED_BY,
            context! { content => task.content(), assignee => resolver.display_name() },
        )
    }

    fn render(
        &self,
        template: &'static str,
        source: &str,
        context: minijinja::Value,
    ) -> Result<String, TemplateError> {
        self.environment
            .render_str(source, context)
            .map_err(|error| TemplateError {
                template,
                reason: error.to_string(),
            })
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}
