// Task Service - task records and per-board position sequencing

pub mod request;

pub use request::{CreateTaskRequest, UpdateTaskRequest};

use crate::domain::{next_task_position, BoardId, TaskId, TaskView};
use crate::error::{AppError, Result};
use crate::port::{TaskRepository, TransactionalStore};
use std::sync::Arc;
use tracing::info;

pub struct TaskService {
    tasks: Arc<dyn TaskRepository>,
    store: Arc<dyn TransactionalStore>,
}

fn task_not_found() -> AppError {
    AppError::NotFound("Task not found".to_string())
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TaskRepository>, store: Arc<dyn TransactionalStore>) -> Self {
        Self { tasks, store }
    }

    pub async fn list_all(&self) -> Result<Vec<TaskView>> {
        self.tasks.list_all().await
    }

    pub async fn list_for_board(&self, board_id: BoardId) -> Result<Vec<TaskView>> {
        self.tasks.list_for_board(board_id).await
    }

    pub async fn get(&self, id: TaskId) -> Result<TaskView> {
        self.tasks.find_by_id(id).await?.ok_or_else(task_not_found)
    }

    /// Append a task at the end of its board
    pub async fn create(&self, req: CreateTaskRequest) -> Result<TaskView> {
        let new_task = req.validate()?;
        let board_id = new_task.board_id;

        let mut tx = self.store.begin_transaction().await?;

        if !tx.board_exists(board_id).await? {
            return Err(AppError::NotFound("Board not found".to_string()));
        }

        let position = next_task_position(tx.max_task_position(board_id).await?)?;
        let id = tx.insert_task(&new_task, position).await?;
        tx.commit().await?;

        info!(task_id = id, board_id, position, "Task created");
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Task {} vanished after write", id)))
    }

    /// Partial update of any task field
    pub async fn update(&self, id: TaskId, req: UpdateTaskRequest) -> Result<TaskView> {
        let changes = req.validate()?;

        if !self.tasks.update(id, &changes).await? {
            return Err(task_not_found());
        }
        self.get(id).await
    }

    /// Delete a task (never blocked)
    pub async fn delete(&self, id: TaskId) -> Result<()> {
        if !self.tasks.delete(id).await? {
            return Err(task_not_found());
        }
        info!(task_id = id, "Task deleted");
        Ok(())
    }
}
