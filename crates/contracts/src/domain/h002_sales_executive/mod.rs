pub mod aggregate;

pub use aggregate::SalesExecutive;
