pub mod addition;
pub mod division;
pub mod errors;
pub mod factory;
pub mod kinds;
pub mod multiplication;
pub mod ports;
