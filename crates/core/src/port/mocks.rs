// In-memory port implementations for service tests

use crate::domain::{
    Board, BoardId, BoardSummary, NewBoard, NewStatus, NewTask, Status, StatusChanges, StatusId,
    Task, TaskChanges, TaskId, TaskView,
};
use crate::error::Result;
use crate::port::{
    BoardRepository, StatusRepository, StoreTransaction, TaskRepository, Transaction,
    TransactionalStore,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct MockState {
    pub boards: Vec<Board>,
    pub statuses: Vec<Status>,
    pub tasks: Vec<TaskView>,
    pub commits: usize,
    next_id: i64,
}

impl MockState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Repositories and store over one shared state; transactions work on a
/// copy that replaces the shared state on commit.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MockState {
        self.state.lock().unwrap().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }
}

#[async_trait]
impl BoardRepository for MockBackend {
    async fn list(&self) -> Result<Vec<BoardSummary>> {
        Ok(self.with_state(|s| {
            s.boards
                .iter()
                .rev()
                .map(|b| BoardSummary {
                    board: b.clone(),
                    task_count: s.tasks.iter().filter(|t| t.task.board_id == b.id).count() as i64,
                })
                .collect()
        }))
    }

    async fn find_by_id(&self, id: BoardId) -> Result<Option<Board>> {
        Ok(self.with_state(|s| s.boards.iter().find(|b| b.id == id).cloned()))
    }

    async fn title_exists(&self, title: &str, excluding: Option<BoardId>) -> Result<bool> {
        Ok(self.with_state(|s| {
            s.boards
                .iter()
                .any(|b| b.title == title && Some(b.id) != excluding)
        }))
    }

    async fn update(&self, id: BoardId, board: &NewBoard) -> Result<bool> {
        Ok(self.with_state(|s| match s.boards.iter_mut().find(|b| b.id == id) {
            Some(existing) => {
                existing.title = board.title.clone();
                existing.description = board.description.clone();
                true
            }
            None => false,
        }))
    }

    async fn delete(&self, id: BoardId) -> Result<bool> {
        Ok(self.with_state(|s| {
            let before = s.boards.len();
            s.boards.retain(|b| b.id != id);
            s.statuses.retain(|st| st.board_id != id);
            s.tasks.retain(|t| t.task.board_id != id);
            s.boards.len() < before
        }))
    }

    async fn count_tasks(&self, id: BoardId) -> Result<i64> {
        Ok(self.with_state(|s| s.tasks.iter().filter(|t| t.task.board_id == id).count() as i64))
    }
}

#[async_trait]
impl StatusRepository for MockBackend {
    async fn list_for_board(&self, board_id: BoardId) -> Result<Vec<Status>> {
        let mut statuses: Vec<Status> = self.with_state(|s| {
            s.statuses
                .iter()
                .filter(|st| st.board_id == board_id)
                .cloned()
                .collect()
        });
        statuses.sort_by_key(|st| (st.position, st.id));
        Ok(statuses)
    }

    async fn find_by_id(&self, id: StatusId) -> Result<Option<Status>> {
        Ok(self.with_state(|s| s.statuses.iter().find(|st| st.id == id).cloned()))
    }

    async fn label_exists(
        &self,
        board_id: BoardId,
        label: &str,
        excluding: Option<StatusId>,
    ) -> Result<bool> {
        Ok(self.with_state(|s| {
            s.statuses.iter().any(|st| {
                st.board_id == board_id && st.status_label == label && Some(st.id) != excluding
            })
        }))
    }

    async fn update(&self, id: StatusId, changes: &StatusChanges) -> Result<bool> {
        Ok(self.with_state(|s| match s.statuses.iter_mut().find(|st| st.id == id) {
            Some(st) => {
                if let Some(label) = &changes.status_label {
                    st.status_label = label.clone();
                }
                if let Some(color) = &changes.status_color {
                    st.status_color = color.as_str().to_string();
                }
                if let Some(position) = changes.position {
                    st.position = position;
                }
                true
            }
            None => false,
        }))
    }

    async fn delete(&self, id: StatusId) -> Result<bool> {
        Ok(self.with_state(|s| {
            let before = s.statuses.len();
            s.statuses.retain(|st| st.id != id);
            s.statuses.len() < before
        }))
    }

    async fn count_tasks_with_key(&self, board_id: BoardId, status_key: &str) -> Result<i64> {
        Ok(self.with_state(|s| {
            s.tasks
                .iter()
                .filter(|t| t.task.board_id == board_id && t.task.status_key == status_key)
                .count() as i64
        }))
    }
}

#[async_trait]
impl TaskRepository for MockBackend {
    async fn list_all(&self) -> Result<Vec<TaskView>> {
        Ok(self.with_state(|s| s.tasks.clone()))
    }

    async fn list_for_board(&self, board_id: BoardId) -> Result<Vec<TaskView>> {
        Ok(self.with_state(|s| {
            s.tasks
                .iter()
                .filter(|t| t.task.board_id == board_id)
                .cloned()
                .collect()
        }))
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<TaskView>> {
        Ok(self.with_state(|s| s.tasks.iter().find(|t| t.task.id == id).cloned()))
    }

    async fn update(&self, id: TaskId, changes: &TaskChanges) -> Result<bool> {
        Ok(self.with_state(|s| match s.tasks.iter_mut().find(|t| t.task.id == id) {
            Some(view) => {
                let task = &mut view.task;
                if let Some(title) = &changes.title {
                    task.title = title.clone();
                }
                if let Some(description) = &changes.description {
                    task.description = description.clone();
                }
                if let Some(key) = &changes.status_key {
                    task.status_key = key.clone();
                }
                if let Some(priority) = changes.priority {
                    task.priority = priority;
                }
                if let Some(position) = changes.position {
                    task.position = position;
                }
                true
            }
            None => false,
        }))
    }

    async fn delete(&self, id: TaskId) -> Result<bool> {
        Ok(self.with_state(|s| {
            let before = s.tasks.len();
            s.tasks.retain(|t| t.task.id != id);
            s.tasks.len() < before
        }))
    }
}

pub struct MockTransaction {
    shared: Arc<Mutex<MockState>>,
    staged: MockState,
}

#[async_trait]
impl TransactionalStore for MockBackend {
    async fn begin_transaction(&self) -> Result<Box<dyn StoreTransaction>> {
        Ok(Box::new(MockTransaction {
            shared: Arc::clone(&self.state),
            staged: self.snapshot(),
        }))
    }
}

#[async_trait]
impl Transaction for MockTransaction {
    async fn commit(self: Box<Self>) -> Result<()> {
        let mut staged = self.staged;
        staged.commits += 1;
        *self.shared.lock().unwrap() = staged;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl StoreTransaction for MockTransaction {
    async fn board_exists(&mut self, id: BoardId) -> Result<bool> {
        Ok(self.staged.boards.iter().any(|b| b.id == id))
    }

    async fn board_title_exists(&mut self, title: &str) -> Result<bool> {
        Ok(self.staged.boards.iter().any(|b| b.title == title))
    }

    async fn insert_board(&mut self, board: &NewBoard) -> Result<BoardId> {
        let id = self.staged.next_id();
        self.staged.boards.push(Board {
            id,
            title: board.title.clone(),
            description: board.description.clone(),
            created_at: id,
        });
        Ok(id)
    }

    async fn status_key_exists(&mut self, board_id: BoardId, status_key: &str) -> Result<bool> {
        Ok(self
            .staged
            .statuses
            .iter()
            .any(|st| st.board_id == board_id && st.status_key == status_key))
    }

    async fn status_label_exists(
        &mut self,
        board_id: BoardId,
        status_label: &str,
    ) -> Result<bool> {
        Ok(self
            .staged
            .statuses
            .iter()
            .any(|st| st.board_id == board_id && st.status_label == status_label))
    }

    async fn max_status_position(&mut self, board_id: BoardId) -> Result<Option<i64>> {
        Ok(self
            .staged
            .statuses
            .iter()
            .filter(|st| st.board_id == board_id)
            .map(|st| st.position)
            .max())
    }

    async fn insert_status(&mut self, status: &NewStatus, position: i64) -> Result<StatusId> {
        let id = self.staged.next_id();
        self.staged.statuses.push(Status {
            id,
            board_id: status.board_id,
            status_key: status.status_key.clone(),
            status_label: status.status_label.clone(),
            status_color: status.status_color.as_str().to_string(),
            position,
            created_at: id,
            updated_at: id,
        });
        Ok(id)
    }

    async fn max_task_position(&mut self, board_id: BoardId) -> Result<Option<i64>> {
        Ok(self
            .staged
            .tasks
            .iter()
            .filter(|t| t.task.board_id == board_id)
            .map(|t| t.task.position)
            .max())
    }

    async fn insert_task(&mut self, task: &NewTask, position: i64) -> Result<TaskId> {
        let id = self.staged.next_id();
        let board_title = self
            .staged
            .boards
            .iter()
            .find(|b| b.id == task.board_id)
            .map(|b| b.title.clone())
            .unwrap_or_default();
        let lane = self
            .staged
            .statuses
            .iter()
            .find(|st| st.board_id == task.board_id && st.status_key == task.status_key);

        let view = TaskView {
            task: Task {
                id,
                board_id: task.board_id,
                status_key: task.status_key.clone(),
                title: task.title.clone(),
                description: task.description.clone(),
                priority: task.priority,
                position,
                created_at: id,
                updated_at: id,
            },
            board_title,
            status_label: lane.map(|st| st.status_label.clone()),
            status_color: lane.map(|st| st.status_color.clone()),
        };
        self.staged.tasks.push(view);
        Ok(id)
    }
}
