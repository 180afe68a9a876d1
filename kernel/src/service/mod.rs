pub mod booking;
pub mod eligibility;
pub mod hotel;

#[cfg(test)]
pub(crate) mod testing;
