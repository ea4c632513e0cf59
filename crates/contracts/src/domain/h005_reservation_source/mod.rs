pub mod aggregate;

pub use aggregate::ReservationSource;
