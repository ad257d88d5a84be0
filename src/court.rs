//! The resolution court: an ordered, editable list of goals.
//!
//! Goals are addressed by the `GoalId` handed out when they were filed, never
//! by their position in the list, so deleting one goal leaves every other
//! id valid.

use crate::errors::CourtError;
use crate::judgment::{judge, MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::models::{CompletionRatio, Goal, GoalId, Mode, PeriodGroup, DEFAULT_PERIOD};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ResolutionCourt {
    goals: Vec<Goal>,
    next_id: u64,
}

impl Default for ResolutionCourt {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionCourt {
    /// A court holding the two example goals every fresh session starts with.
    pub fn new() -> Self {
        let mut court = Self::empty();
        let seeds = [("Learn to cook one real meal", 4, "Jan"), ("Run a marathon", 9, "Mar")];
        for (task, difficulty, period) in seeds {
            court.insert(task.to_string(), difficulty, period.to_string(), Mode::default());
        }
        court
    }

    pub fn empty() -> Self {
        Self {
            goals: Vec::new(),
            next_id: 1,
        }
    }

    /// Files a new goal and returns its id.
    ///
    /// The label is judged from `difficulty` under `mode` right now and is
    /// never revisited.
    pub fn add(
        &mut self,
        task: &str,
        difficulty: u8,
        period: Option<&str>,
        mode: Mode,
    ) -> Result<GoalId, CourtError> {
        let task = task.trim();
        if task.is_empty() {
            debug!("rejected goal with empty task");
            return Err(CourtError::EmptyTask);
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            debug!(difficulty, "rejected goal with out-of-range difficulty");
            return Err(CourtError::DifficultyOutOfRange(difficulty));
        }

        let period = period
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_PERIOD);
        let id = self.insert(task.to_string(), difficulty, period.to_string(), mode);
        info!(%id, difficulty, period, %mode, "goal filed");
        Ok(id)
    }

    fn insert(&mut self, task: String, difficulty: u8, period: String, mode: Mode) -> GoalId {
        let id = GoalId(self.next_id);
        self.next_id += 1;
        self.goals.push(Goal {
            id,
            task,
            difficulty,
            label: judge(difficulty, mode),
            done: false,
            period,
        });
        id
    }

    /// Replaces the task text. Any text is accepted, including an empty one.
    pub fn edit_task(&mut self, id: GoalId, new_task: &str) -> Result<(), CourtError> {
        let goal = self.goal_mut(id)?;
        goal.task = new_task.to_string();
        Ok(())
    }

    /// Flips `done` and returns the new value.
    pub fn toggle_done(&mut self, id: GoalId) -> Result<bool, CourtError> {
        let goal = self.goal_mut(id)?;
        goal.done = !goal.done;
        Ok(goal.done)
    }

    pub fn delete(&mut self, id: GoalId) -> Result<Goal, CourtError> {
        let index = self
            .goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(CourtError::NotFound(id))?;
        let removed = self.goals.remove(index);
        info!(%id, "goal dismissed");
        Ok(removed)
    }

    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// All goals in filing order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn completion_ratio(&self) -> CompletionRatio {
        CompletionRatio {
            completed: self.goals.iter().filter(|goal| goal.done).count(),
            total: self.goals.len(),
        }
    }

    /// Buckets goals by period, in the order the periods are given.
    ///
    /// Empty buckets are left out and goals whose period is not listed are
    /// dropped. Filing order is kept inside each bucket.
    pub fn group_by_period<S: AsRef<str>>(&self, ordered_periods: &[S]) -> Vec<PeriodGroup> {
        let mut groups: Vec<PeriodGroup> = Vec::new();
        for period in ordered_periods {
            let period = period.as_ref();
            if groups.iter().any(|group| group.period == period) {
                continue;
            }
            let goals: Vec<Goal> = self
                .goals
                .iter()
                .filter(|goal| goal.period == period)
                .cloned()
                .collect();
            if !goals.is_empty() {
                groups.push(PeriodGroup {
                    period: period.to_string(),
                    goals,
                });
            }
        }
        groups
    }

    fn goal_mut(&mut self, id: GoalId) -> Result<&mut Goal, CourtError> {
        self.goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or(CourtError::NotFound(id))
    }
}
