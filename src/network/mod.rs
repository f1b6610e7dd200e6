pub mod network;
pub mod snapshot;

pub use network::{Gradients, Network};
pub use snapshot::ModelSnapshot;
