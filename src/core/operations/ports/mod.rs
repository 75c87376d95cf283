pub mod complex_operation;
