pub mod checkpoint;
pub mod client;
pub mod collect;
pub mod driver;
pub mod manufacturer;
pub mod transport;
pub mod user;
pub mod vehicle;
pub mod yard;
