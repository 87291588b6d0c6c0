pub mod activity;
pub mod activity_field;

pub use activity::Activity;
pub use activity_field::ActivityField;
