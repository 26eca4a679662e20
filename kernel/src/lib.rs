pub mod model;
pub mod queue;
pub mod repository;
pub mod worker;
