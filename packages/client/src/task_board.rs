// ABOUTME: Client-side task list for one view, kept in step with the server through optimistic updates
// ABOUTME: Creates render immediately under a temporary id; toggles, edits, and deletes apply only confirmed results

use std::fmt;
use std::sync::Arc;

use carryover_core::{Clock, Color};
use carryover_tasks::{Task, TaskCreateInput, TaskUpdateInput, TaskView};
use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::collection::LocalCollection;
use crate::error::{ClientError, ClientResult};
use crate::temp_id::{generate_temp_id, is_temporary_id};

/// What the user typed into the new-task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub text: String,
    pub color: Option<Color>,
}

impl TaskDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A create handed back to the caller with the input it came from, so the
/// form can be refilled.
#[derive(Debug)]
pub struct CreateFailed<D> {
    pub draft: D,
    pub source: ClientError,
}

impl<D> fmt::Display for CreateFailed<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Create failed: {}", self.source)
    }
}

impl<D: fmt::Debug> std::error::Error for CreateFailed<D> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Create in flight: the provisional entry's id plus what to send.
#[derive(Debug, Clone)]
pub struct PendingTask {
    pub temp_id: String,
    pub draft: TaskDraft,
    pub input: TaskCreateInput,
}

pub struct TaskBoard {
    client: ApiClient,
    clock: Arc<dyn Clock>,
    view: TaskView,
    tasks: LocalCollection<Task>,
}

impl TaskBoard {
    pub fn new(client: ApiClient, clock: Arc<dyn Clock>) -> Self {
        Self {
            client,
            clock,
            view: TaskView::Today,
            tasks: LocalCollection::new(),
        }
    }

    pub fn view(&self) -> TaskView {
        self.view
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.items()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Switch to `view` and load it from the server.
    pub async fn refresh(&mut self, view: TaskView) -> ClientResult<()> {
        self.view = view;
        let tasks = self.client.list_tasks(view).await?;
        debug!("Loaded {} tasks for {} view", tasks.len(), view.as_str());
        self.tasks.replace_all(tasks);
        Ok(())
    }

    /// Load a view that holds `id`. Today comes first so pending rollover has
    /// already moved the task; anything else is found in the all view.
    pub async fn load_containing(&mut self, id: &str) -> ClientResult<()> {
        self.refresh(TaskView::Today).await?;
        if self.tasks.get(id).is_none() {
            self.refresh(TaskView::All).await?;
        }
        Ok(())
    }

    /// First half of a create: validate the draft and, on the today view,
    /// show a provisional task straight away.
    pub fn begin_add_task(&mut self, draft: TaskDraft) -> Result<PendingTask, CreateFailed<TaskDraft>> {
        let text = draft.text.trim().to_string();
        if text.is_empty() {
            return Err(CreateFailed {
                draft,
                source: ClientError::Validation("Text is required.".to_string()),
            });
        }

        let now = self.clock.now();
        let today = self.clock.today();
        let temp_id = generate_temp_id(now);

        if self.view == TaskView::Today {
            self.tasks.insert_provisional(Task {
                id: temp_id.clone(),
                text: text.clone(),
                color: draft.color.unwrap_or_default(),
                day: today,
                completed: false,
                completed_at: None,
                created_at: now,
                updated_at: now,
            });
        }

        Ok(PendingTask {
            temp_id,
            input: TaskCreateInput {
                text,
                color: draft.color,
                day: Some(today),
            },
            draft,
        })
    }

    /// Second half of a create: swap in the server's task, or drop the
    /// provisional one and give the draft back.
    pub fn finish_add_task(
        &mut self,
        pending: PendingTask,
        result: ClientResult<Task>,
    ) -> Result<Task, CreateFailed<TaskDraft>> {
        match result {
            Ok(task) => {
                self.tasks.confirm(&pending.temp_id, task.clone());
                Ok(task)
            }
            Err(source) => {
                warn!("Creating task failed: {}", source);
                self.tasks.rollback(&pending.temp_id);
                Err(CreateFailed {
                    draft: pending.draft,
                    source,
                })
            }
        }
    }

    pub async fn add_task(&mut self, draft: TaskDraft) -> Result<Task, CreateFailed<TaskDraft>> {
        let pending = self.begin_add_task(draft)?;
        let result = self.client.create_task(&pending.input).await;
        self.finish_add_task(pending, result)
    }

    fn confirmed(&self, id: &str) -> ClientResult<&Task> {
        if is_temporary_id(id) {
            return Err(ClientError::Provisional(id.to_string()));
        }
        self.tasks
            .get(id)
            .ok_or_else(|| ClientError::UnknownEntity(id.to_string()))
    }

    /// Flip completion. Completing keeps the task's day; re-opening moves it
    /// to today.
    pub async fn toggle(&mut self, id: &str) -> ClientResult<Task> {
        let task = self.confirmed(id)?;
        let input = TaskUpdateInput {
            completed: Some(!task.completed),
            day: Some(if task.completed {
                self.clock.today()
            } else {
                task.day
            }),
            ..Default::default()
        };

        let updated = self.client.update_task(id, &input).await?;
        self.tasks.apply(updated.clone());
        Ok(updated)
    }

    pub async fn edit(&mut self, id: &str, input: TaskUpdateInput) -> ClientResult<Task> {
        self.confirmed(id)?;
        if let Some(text) = &input.text {
            if text.trim().is_empty() {
                return Err(ClientError::Validation("Text is required.".to_string()));
            }
        }

        let updated = self.client.update_task(id, &input).await?;
        self.tasks.apply(updated.clone());
        Ok(updated)
    }

    /// Remove a task. Local state only changes once the server agrees.
    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        self.confirmed(id)?;
        self.client.delete_task(id).await?;
        self.tasks.remove(id);
        Ok(())
    }
}
