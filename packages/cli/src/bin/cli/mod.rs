pub mod notes;
pub mod tasks;
pub mod utils;
