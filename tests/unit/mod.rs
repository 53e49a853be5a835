//! Unit Tests Module

pub mod test_config;
pub mod test_progress_record;
