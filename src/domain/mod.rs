pub mod enums;
pub mod task;

pub use enums::{Bucket, ColorToken, Grouping, Priority, UiMode};
pub use task::{Mutation, Task, TaskStore};
