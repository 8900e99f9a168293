//local shortcuts

//third-party shortcuts
use bevy::prelude::*;

//standard shortcuts
use std::time::Duration;

//-------------------------------------------------------------------------------------------------------------------

/// Identifies a task scheduled in a [`DelayScheduler`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TaskHandle(u64);

//-------------------------------------------------------------------------------------------------------------------

#[derive(Debug)]
struct ScheduledTask<T>
{
    handle: TaskHandle,
    timer: Timer,
    task: T,
}

//-------------------------------------------------------------------------------------------------------------------

/// Cooperative scheduler for delayed tasks.
///
/// Time only passes when [`DelayScheduler::advance`] is called, so the owner decides what a 'time unit' is (usually
/// the app's frame delta). A task that is canceled before its delay elapses is never returned.
///
/// ### Example
/// ```rust
/// # use bevy_spawn_cycle_utils::*;
/// # use std::time::Duration;
/// let mut scheduler = DelayScheduler::default();
/// let handle = scheduler.schedule(Duration::from_secs(2), "reload");
///
/// assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
/// assert!(scheduler.cancel(handle));
/// assert!(scheduler.advance(Duration::from_secs(5)).is_empty());
/// ```
#[derive(Debug)]
pub struct DelayScheduler<T>
{
    /// Handle for the next scheduled task.
    next_handle: u64,
    /// Pending tasks in scheduling order.
    tasks: Vec<ScheduledTask<T>>,
}

impl<T> DelayScheduler<T>
{
    /// Schedules `task` to fire after `delay` has elapsed.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskHandle
    {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.tasks.push(ScheduledTask{ handle, timer: Timer::new(delay, TimerMode::Once), task });
        tracing::trace!(?handle, ?delay, "scheduled delayed task");

        handle
    }

    /// Cancels a pending task.
    /// - Returns `false` if the task already fired or was never scheduled here.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool
    {
        let Some(idx) = self.tasks.iter().position(|scheduled| scheduled.handle == handle)
        else { tracing::trace!(?handle, "tried to cancel a task that is not pending"); return false; };

        self.tasks.remove(idx);
        tracing::trace!(?handle, "canceled delayed task");

        true
    }

    /// Checks if a task is still waiting to fire.
    pub fn is_pending(&self, handle: TaskHandle) -> bool
    {
        self.tasks.iter().any(|scheduled| scheduled.handle == handle)
    }

    /// Time left before a pending task fires.
    pub fn remaining(&self, handle: TaskHandle) -> Option<Duration>
    {
        self.tasks
            .iter()
            .find(|scheduled| scheduled.handle == handle)
            .map(|scheduled| scheduled.timer.remaining())
    }

    /// Elapses `delta` for all pending tasks.
    ///
    /// Returns the tasks whose delay has fully elapsed, in the order they were scheduled.
    pub fn advance(&mut self, delta: Duration) -> Vec<T>
    {
        let mut fired = Vec::new();
        let mut idx = 0;

        while idx < self.tasks.len()
        {
            if !self.tasks[idx].timer.tick(delta).finished() { idx += 1; continue; }

            let scheduled = self.tasks.remove(idx);
            tracing::trace!(handle = ?scheduled.handle, "delayed task fired");
            fired.push(scheduled.task);
        }

        fired
    }

    /// Cancels all pending tasks.
    pub fn clear(&mut self)
    {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize
    {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.tasks.is_empty()
    }
}

impl<T> Default for DelayScheduler<T>
{
    fn default() -> Self
    {
        DelayScheduler{ next_handle: 0, tasks: Vec::default() }
    }
}

//-------------------------------------------------------------------------------------------------------------------
