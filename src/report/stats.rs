use crate::domain::{Bucket, ColorToken, Grouping, Priority, Task, TaskStore};

/// One chart point: completion of the tasks in a single bucket
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedPoint {
    pub label: String,
    /// 0.0..=100.0, exactly 0.0 for an empty bucket
    pub completion_pct: f64,
    pub total_count: usize,
    pub completed_count: usize,
}

/// Label and accent color for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    pub label: &'static str,
    pub color: ColorToken,
}

/// Completion percentage, defined as 0 when there is nothing to complete
fn completion_pct(completed: usize, total: usize) -> f64 {
    if total > 0 {
        completed as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

/// Aggregate tasks per bucket. One point per entry of `bucket_order`, in the same
/// order, whether or not any task falls in that bucket.
pub fn aggregate_by_bucket(tasks: &[Task], bucket_order: &[Bucket]) -> Vec<AggregatedPoint> {
    bucket_order
        .iter()
        .map(|bucket| {
            let in_bucket = tasks.iter().filter(|t| t.bucket == *bucket);
            let (total_count, completed_count) = in_bucket.fold((0, 0), |(total, done), t| {
                (total + 1, done + usize::from(t.is_completed()))
            });

            AggregatedPoint {
                label: bucket.label().to_string(),
                completion_pct: completion_pct(completed_count, total_count),
                total_count,
                completed_count,
            }
        })
        .collect()
}

/// Share of completed tasks across the whole collection (0 for no tasks)
pub fn overall_score(tasks: &[Task]) -> f64 {
    let completed = tasks.iter().filter(|t| t.is_completed()).count();
    completion_pct(completed, tasks.len())
}

/// Map a score to its band. Thresholds are inclusive lower bounds, checked high to low.
pub fn score_band(score: f64) -> ScoreBand {
    if score >= 80.0 {
        ScoreBand {
            label: "Excellent",
            color: ColorToken::Violet,
        }
    } else if score >= 50.0 {
        ScoreBand {
            label: "Good",
            color: ColorToken::Green,
        }
    } else if score >= 30.0 {
        ScoreBand {
            label: "Average",
            color: ColorToken::Orange,
        }
    } else {
        ScoreBand {
            label: "Needs improvement",
            color: ColorToken::Red,
        }
    }
}

/// Per-priority column counts
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityColumn {
    pub priority: Priority,
    pub tasks: Vec<Task>,
    pub completed_count: usize,
}

/// Everything the renderer needs for one frame, derived from the store
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub grouping: Grouping,
    pub points: Vec<AggregatedPoint>,
    pub score: f64,
    pub band: ScoreBand,
    pub columns: Vec<PriorityColumn>,
}

impl Dashboard {
    /// Rebuild the snapshot from scratch
    pub fn build(store: &TaskStore, grouping: Grouping) -> Self {
        let tasks = store.tasks();
        let points = aggregate_by_bucket(tasks, &grouping.bucket_order());
        let score = overall_score(tasks);

        let columns = store
            .partition_by_priority()
            .into_iter()
            .map(|(priority, column)| PriorityColumn {
                priority,
                completed_count: column.iter().filter(|t| t.is_completed()).count(),
                tasks: column.into_iter().cloned().collect(),
            })
            .collect();

        Self {
            grouping,
            points,
            score,
            band: score_band(score),
            columns,
        }
    }

    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    pub fn completed_tasks(&self) -> usize {
        self.columns.iter().map(|c| c.completed_count).sum()
    }

    /// Column for a priority
    pub fn column(&self, priority: Priority) -> &PriorityColumn {
        &self.columns[priority.index()]
    }
}
