pub mod aggregate;

pub use aggregate::EventType;
