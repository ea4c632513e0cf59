pub mod aggregate;

pub use aggregate::RatePlan;
