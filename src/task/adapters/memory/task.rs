//! In-memory task store guarded by a single reader/writer lock.

use mockable::{Clock, DefaultClock};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Assignment, Task, TaskId, TaskSnapshot, TaskState, User, UserId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Users and tasks live behind one [`RwLock`]: listings share the lock,
/// every mutation takes it exclusively. Tasks are keyed by identifier in an
/// ordered map, so listings come back in creation order.
pub struct InMemoryTaskRepository<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    users: HashMap<UserId, User>,
    tasks: BTreeMap<TaskId, Task>,
    last_task_id: Option<TaskId>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository that timestamps tasks with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn list_where(
        &self,
        predicate: impl Fn(&Task) -> bool,
    ) -> TaskRepositoryResult<Vec<TaskSnapshot>> {
        let state = self.read()?;
        state
            .tasks
            .values()
            .filter(|task| task.state() != TaskState::Resolved && predicate(task))
            .map(|task| snapshot(&state.users, task))
            .collect()
    }
}

/// Registers `user` unless a record with the same identifier exists.
fn register_user(users: &mut HashMap<UserId, User>, user: &User) {
    users.entry(user.id()).or_insert_with(|| user.clone());
}

fn lookup_user(users: &HashMap<UserId, User>, id: UserId) -> TaskRepositoryResult<User> {
    users
        .get(&id)
        .cloned()
        .ok_or(TaskRepositoryError::UnknownUser(id))
}

fn snapshot(users: &HashMap<UserId, User>, task: &Task) -> TaskRepositoryResult<TaskSnapshot> {
    let owner = lookup_user(users, task.owner())?;
    let assignee = task
        .assignee()
        .map(|id| lookup_user(users, id))
        .transpose()?;
    Ok(TaskSnapshot::new(task, owner, assignee))
}

/// Looks up a task that can still change state.
fn open_task_mut(
    tasks: &mut BTreeMap<TaskId, Task>,
    id: TaskId,
) -> TaskRepositoryResult<&mut Task> {
    tasks
        .get_mut(&id)
        .filter(|task| !task.is_resolved())
        .ok_or(TaskRepositoryError::NotFound(id))
}

impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    fn list_all(&self) -> TaskRepositoryResult<Vec<TaskSnapshot>> {
        self.list_where(|_| true)
    }

    fn list_by_owner(&self, owner: UserId) -> TaskRepositoryResult<Vec<TaskSnapshot>> {
        self.list_where(|task| task.owner() == owner)
    }

    fn list_by_assignee(&self, assignee: UserId) -> TaskRepositoryResult<Vec<TaskSnapshot>> {
        self.list_where(|task| task.assignee() == Some(assignee))
    }

    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<TaskSnapshot>> {
        let state = self.read()?;
        state
            .tasks
            .get(&id)
            .map(|task| snapshot(&state.users, task))
            .transpose()
    }

    fn create_task(&self, content: &str, creator: &User) -> TaskRepositoryResult<TaskSnapshot> {
        let mut guard = self.write()?;
        let state = &mut *guard;

        register_user(&mut state.users, creator);
        let id = state.last_task_id.map_or(TaskId::FIRST, TaskId::next);
        let task = Task::new(id, content, creator.id(), &*self.clock);
        let created = snapshot(&state.users, &task)?;

        state.last_task_id = Some(id);
        state.tasks.insert(id, task);
        Ok(created)
    }

    fn assign_task(&self, id: TaskId, actor: &User) -> TaskRepositoryResult<Assignment> {
        let mut guard = self.write()?;
        let state = &mut *guard;

        let task = open_task_mut(&mut state.tasks, id)?;
        register_user(&mut state.users, actor);
        let previous = task.assign(actor.id(), &*self.clock)?;

        let previous_assignee = previous
            .map(|user_id| lookup_user(&state.users, user_id))
            .transpose()?;
        let assigned = snapshot(&state.users, task)?;
        Ok(Assignment::new(assigned, previous_assignee))
    }

    fn unassign_task(&self, id: TaskId, actor: &User) -> TaskRepositoryResult<TaskSnapshot> {
        let mut guard = self.write()?;
        let state = &mut *guard;

        let task = open_task_mut(&mut state.tasks, id)?;
        let before = snapshot(&state.users, task)?;
        task.unassign(actor.id(), &*self.clock)?;
        Ok(before)
    }

    fn resolve_task(&self, id: TaskId, actor: &User) -> TaskRepositoryResult<TaskSnapshot> {
        let mut guard = self.write()?;
        let state = &mut *guard;

        let task = open_task_mut(&mut state.tasks, id)?;
        let before = snapshot(&state.users, task)?;
        task.resolve(actor.id(), &*self.clock)?;
        Ok(before)
    }
}
