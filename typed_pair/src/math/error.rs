use thiserror::Error;

#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
pub enum MathError {
    #[error("division by zero")]
    DivideByZero,
}
