pub mod deadline_tracker;

pub use deadline_tracker::DeadlineTracker;
