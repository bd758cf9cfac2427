use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlavorError {
    #[error("Flavor attribute '{field}' is {value}, outside [0, 1]")]
    OutOfRange { field: &'static str, value: f64 },
}
