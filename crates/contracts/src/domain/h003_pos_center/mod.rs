pub mod aggregate;

pub use aggregate::PosCenter;
