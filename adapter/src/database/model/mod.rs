pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod ticket;
