pub mod mutators;
pub mod selectors;
pub mod service;
pub mod spec;
