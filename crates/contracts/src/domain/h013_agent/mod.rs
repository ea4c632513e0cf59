pub mod aggregate;

pub use aggregate::TravelAgent;
