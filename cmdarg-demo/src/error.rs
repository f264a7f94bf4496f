#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("--{field} wants a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("--origin needs two coordinates, like `--origin 3 -4`")]
    BadOrigin,

    #[error("label {index} lands outside of the grid")]
    OutOfRange { index: i64 },

    #[error("--scale must be positive, got {0}")]
    NonPositiveScale(f64),
}
