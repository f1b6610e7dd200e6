pub mod matrix;
pub mod random;
pub mod vector;

pub use matrix::Matrix;
pub use random::RandomSource;
