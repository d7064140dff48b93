//! 内存任务存储
//!
//! 持有按时间倒序排列的任务集合，以及所有修改它的操作。
//! 存储层不感知终端界面：确认、输入都由调用方负责，所有错误都可恢复。

mod task;

pub use task::{Counts, FilterMode, Priority, Task, TaskId};

use chrono::{DateTime, Local};

use crate::error::{StoreError, StoreResult};

/// 有序任务集合与 id 计数器
#[derive(Debug, Clone)]
pub struct TaskStore {
    /// 最新的任务在最前
    tasks: Vec<Task>,
    /// 下一个分配的 id，永不回退
    next_id: TaskId,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// 以当前本地时间添加任务
    pub fn add(&mut self, text: &str) -> StoreResult<&Task> {
        self.add_at(text, Local::now())
    }

    /// 以指定创建时间添加任务
    ///
    /// 新任务插入到最前，初始为未完成、中优先级，id 取自计数器。
    pub fn add_at(&mut self, text: &str, created_at: DateTime<Local>) -> StoreResult<&Task> {
        let text = non_empty(text)?;

        let id = self.next_id;
        self.next_id += 1;

        self.tasks.insert(
            0,
            Task {
                id,
                text,
                completed: false,
                created_at,
                priority: Priority::default(),
            },
        );
        tracing::debug!(id, "task added");

        Ok(&self.tasks[0])
    }

    /// 删除任务（未知 id 忽略）
    pub fn remove(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            tracing::debug!(id, "task removed");
        }
    }

    /// 替换任务文本，其余字段保持不变
    pub fn update(&mut self, id: TaskId, new_text: &str) -> StoreResult<&Task> {
        let text = non_empty(new_text)?;
        let task = self.find_mut(id)?;
        task.text = text;
        tracing::debug!(id, "task text updated");
        Ok(task)
    }

    /// 切换完成状态
    pub fn toggle_complete(&mut self, id: TaskId) -> StoreResult<&Task> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        tracing::debug!(id, completed = task.completed, "task toggled");
        Ok(task)
    }

    /// 设置优先级
    pub fn set_priority(&mut self, id: TaskId, priority: Priority) -> StoreResult<&Task> {
        let task = self.find_mut(id)?;
        task.priority = priority;
        tracing::debug!(id, %priority, "task priority set");
        Ok(task)
    }

    /// 按名称设置优先级；名称无法识别时在查找 id 之前返回 `InvalidPriority`
    #[cfg(test)]
    pub fn set_priority_str(&mut self, id: TaskId, priority: &str) -> StoreResult<&Task> {
        let priority: Priority = priority.parse()?;
        self.set_priority(id, priority)
    }

    /// 清除所有已完成任务
    pub fn clear_completed(&mut self) {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        tracing::debug!(removed = before - self.tasks.len(), "completed tasks cleared");
    }

    /// 清空全部任务；计数器保留，id 不会复用
    pub fn clear_all(&mut self) {
        tracing::debug!(removed = self.tasks.len(), "all tasks cleared");
        self.tasks.clear();
    }

    /// 符合 `mode` 的任务，保持存储顺序
    pub fn filter(&self, mode: FilterMode) -> Vec<&Task> {
        self.tasks.iter().filter(|t| mode.matches(t)).collect()
    }

    pub fn counts(&self) -> Counts {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Counts {
            total: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }

    #[cfg(test)]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// 全部任务（最新在前）
    #[cfg(test)]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find_mut(&mut self, id: TaskId) -> StoreResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// 去除首尾空白，拒绝空文本
fn non_empty(text: &str) -> StoreResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyText);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(tasks: &[&Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id).collect()
    }

    fn assert_counts_consistent(store: &TaskStore) {
        let c = store.counts();
        assert_eq!(c.active + c.completed, c.total);
        assert_eq!(store.filter(FilterMode::All).len(), c.total);
    }

    #[test]
    fn test_add_prepends_with_defaults() {
        let mut store = TaskStore::new();
        store.add("first").unwrap();
        let task = store.add("  second  ").unwrap().clone();

        assert_eq!(task.id, 2);
        assert_eq!(task.text, "second");
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0].id, 2);
        assert_eq!(store.tasks()[1].id, 1);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut store = TaskStore::new();
        store.add("keep").unwrap();

        assert_eq!(store.add("").unwrap_err(), StoreError::EmptyText);
        assert_eq!(store.add(" \t\n ").unwrap_err(), StoreError::EmptyText);
        assert_eq!(store.len(), 1);

        // 被拒绝的添加不消耗 id
        assert_eq!(store.add("next").unwrap().id, 2);
    }

    #[test]
    fn test_ids_never_reused() {
        let mut store = TaskStore::new();
        let a = store.add("a").unwrap().id;
        store.remove(a);
        let b = store.add("b").unwrap().id;
        store.clear_all();
        let c = store.add("c").unwrap().id;

        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add("a").unwrap();
        store.add("b").unwrap();
        let before = store.tasks().to_vec();

        store.remove(99);
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_update_replaces_text_only() {
        let mut store = TaskStore::new();
        let id = store.add("draft").unwrap().id;
        store.toggle_complete(id).unwrap();
        store.set_priority(id, Priority::High).unwrap();
        let before = store.get(id).unwrap().clone();

        let after = store.update(id, "  final  ").unwrap().clone();
        assert_eq!(after.text, "final");
        assert_eq!(after.id, before.id);
        assert_eq!(after.completed, before.completed);
        assert_eq!(after.priority, before.priority);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn test_update_errors() {
        let mut store = TaskStore::new();
        let id = store.add("draft").unwrap().id;

        assert_eq!(store.update(id, "   ").unwrap_err(), StoreError::EmptyText);
        assert_eq!(store.get(id).unwrap().text, "draft");
        assert_eq!(store.update(42, "x").unwrap_err(), StoreError::NotFound(42));
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut store = TaskStore::new();
        let id = store.add("a").unwrap().id;

        assert!(store.toggle_complete(id).unwrap().completed);
        assert!(!store.toggle_complete(id).unwrap().completed);
        assert_eq!(store.toggle_complete(5).unwrap_err(), StoreError::NotFound(5));
    }

    #[test]
    fn test_set_priority() {
        let mut store = TaskStore::new();
        let id = store.add("a").unwrap().id;

        assert_eq!(store.set_priority(id, Priority::Low).unwrap().priority, Priority::Low);
        assert_eq!(
            store.set_priority_str(id, "high").unwrap().priority,
            Priority::High
        );
        assert_eq!(
            store.set_priority_str(id, "urgent").unwrap_err(),
            StoreError::InvalidPriority("urgent".to_string())
        );
        assert_eq!(store.get(id).unwrap().priority, Priority::High);
        assert_eq!(
            store.set_priority(9, Priority::Low).unwrap_err(),
            StoreError::NotFound(9)
        );
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut store = TaskStore::new();
        for text in ["a", "b", "c", "d"] {
            store.add(text).unwrap();
        }
        // 顺序: 4 3 2 1
        store.toggle_complete(3).unwrap();
        store.toggle_complete(1).unwrap();

        assert_eq!(ids(&store.filter(FilterMode::All)), vec![4, 3, 2, 1]);
        assert_eq!(ids(&store.filter(FilterMode::Active)), vec![4, 2]);
        assert_eq!(ids(&store.filter(FilterMode::Completed)), vec![3, 1]);
        assert!(store.filter(FilterMode::Active).iter().all(|t| !t.completed));
        assert!(store.filter(FilterMode::Completed).iter().all(|t| t.completed));
        assert_counts_consistent(&store);
    }

    #[test]
    fn test_clear_completed_and_all() {
        let mut store = TaskStore::new();
        for text in ["a", "b", "c"] {
            store.add(text).unwrap();
        }
        store.toggle_complete(2).unwrap();

        store.clear_completed();
        assert_eq!(ids(&store.filter(FilterMode::All)), vec![3, 1]);
        assert_counts_consistent(&store);

        store.clear_all();
        assert!(store.is_empty());
        assert_eq!(store.counts(), Counts::default());
    }

    #[test]
    fn test_counts_consistent_through_mutations() {
        let mut store = TaskStore::new();
        assert_counts_consistent(&store);
        for i in 0..6 {
            let id = store.add(&format!("task {}", i)).unwrap().id;
            if i % 2 == 0 {
                store.toggle_complete(id).unwrap();
            }
            assert_counts_consistent(&store);
        }
        store.remove(2);
        assert_counts_consistent(&store);
        store.clear_completed();
        assert_counts_consistent(&store);
    }

    #[test]
    fn test_buy_milk_walkthrough() {
        let mut store = TaskStore::new();
        let id = store.add("Buy milk").unwrap().id;
        assert_eq!(
            store.counts(),
            Counts {
                total: 1,
                active: 1,
                completed: 0
            }
        );

        store.toggle_complete(id).unwrap();
        assert_eq!(
            store.counts(),
            Counts {
                total: 1,
                active: 0,
                completed: 1
            }
        );

        store.clear_completed();
        assert!(store.is_empty());
    }
}
