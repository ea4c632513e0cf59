pub mod aggregate;

pub use aggregate::TaxTable;
