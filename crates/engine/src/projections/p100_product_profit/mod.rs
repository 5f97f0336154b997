pub mod accumulator;
pub mod metrics;
pub mod projection_builder;
pub mod service;
pub mod shipment_groups;
