pub mod calculation_record;
pub mod demo_config;
pub mod demo_controller;
