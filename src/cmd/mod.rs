pub mod analyze;
pub mod runs;
