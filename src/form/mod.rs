pub mod coerce;
pub mod register;
pub mod store;
