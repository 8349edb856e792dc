// Services module for business logic
pub mod launcher;
pub mod python_probe;
