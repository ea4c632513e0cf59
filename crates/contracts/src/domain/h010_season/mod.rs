pub mod aggregate;

pub use aggregate::Season;
