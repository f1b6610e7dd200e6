pub mod activation;
pub mod error;
pub mod loss;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::{sigmoid, sigmoid_prime};
pub use error::{NetError, Result};
pub use loss::quadratic::QuadraticCost;
pub use math::matrix::Matrix;
pub use math::random::RandomSource;
pub use math::vector::{index_max, one_hot};
pub use network::network::{Gradients, Network};
pub use network::snapshot::ModelSnapshot;
pub use train::{EpochStats, TestExample, TrainConfig, TrainingExample};
