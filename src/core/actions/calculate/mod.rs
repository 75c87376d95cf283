pub mod complex_calculator;
