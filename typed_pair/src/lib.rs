pub mod math;
mod pair;

pub use math::divide;
pub use math::MathError;
pub use pair::Pair;
