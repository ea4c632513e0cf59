pub mod aggregate;

pub use aggregate::GuestProfile;
