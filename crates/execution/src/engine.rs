//! The allocation engine - applies a strategy across every task and resource.

use crate::MatchingStrategy;
use serde::Serialize;
use skillmatch_core::{Resource, Task};
use tracing::{debug, info};

/// Resources that qualified for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskMatches {
    /// Task name
    pub task: String,
    /// Matching resource names, in input order
    pub resources: Vec<String>,
}

/// Outcome of one strategy run over the whole pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    /// Strategy name
    pub strategy: String,
    /// One entry per task, in input order
    pub tasks: Vec<TaskMatches>,
}

impl Allocation {
    /// Matches for the first task with this name.
    pub fn matches_for(&self, task: &str) -> Option<&[String]> {
        self.tasks
            .iter()
            .find(|t| t.task == task)
            .map(|t| t.resources.as_slice())
    }

    /// Number of (task, resource) matches.
    pub fn total_matches(&self) -> usize {
        self.tasks.iter().map(|t| t.resources.len()).sum()
    }
}

/// Matches a fixed pool of resources against a fixed pool of tasks.
///
/// Every pair is checked; there is no indexing or pruning. The pools are
/// never modified, so the engine can be run any number of times with
/// different strategies.
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    resources: Vec<Resource>,
    tasks: Vec<Task>,
}

impl AllocationEngine {
    /// Create an engine over loaded pools.
    pub fn new(resources: Vec<Resource>, tasks: Vec<Task>) -> Self {
        Self { resources, tasks }
    }

    /// Run one strategy.
    pub fn run(&self, strategy: &dyn MatchingStrategy) -> Allocation {
        info!(
            "Allocating {} resources to {} tasks using {} matching",
            self.resources.len(),
            self.tasks.len(),
            strategy.name()
        );

        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                let resources = self
                    .resources
                    .iter()
                    .filter(|resource| strategy.is_match(resource, task))
                    .map(|resource| {
                        debug!("{} qualifies for {}", resource.name(), task.name());
                        resource.name().to_string()
                    })
                    .collect();

                TaskMatches {
                    task: task.name().to_string(),
                    resources,
                }
            })
            .collect();

        let allocation = Allocation {
            strategy: strategy.name().to_string(),
            tasks,
        };
        info!("{} matching found {} matches", allocation.strategy, allocation.total_matches());
        allocation
    }

    /// Run several strategies in order.
    pub fn run_all<S: MatchingStrategy>(&self, strategies: &[S]) -> Vec<Allocation> {
        strategies.iter().map(|s| self.run(s)).collect()
    }

    /// Loaded resources.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Loaded tasks.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
