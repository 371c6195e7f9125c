pub mod activity_registry;
pub mod seed;
