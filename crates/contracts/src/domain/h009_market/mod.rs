pub mod aggregate;

pub use aggregate::Market;
