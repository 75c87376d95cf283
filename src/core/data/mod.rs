pub mod complex;
pub mod complex_factory;
