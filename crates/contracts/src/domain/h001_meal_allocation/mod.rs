pub mod aggregate;

pub use aggregate::MealAllocation;
