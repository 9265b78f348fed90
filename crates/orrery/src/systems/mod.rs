pub mod rng;
pub mod selection;
pub mod twinkle;
