use log::debug;

use crate::activation::sigmoid::{sigmoid, sigmoid_prime};
use crate::error::{NetError, Result};
use crate::loss::quadratic::QuadraticCost;
use crate::math::matrix::Matrix;
use crate::math::random::RandomSource;
use crate::math::vector::index_max;
use crate::network::snapshot::ModelSnapshot;
use crate::train::epoch_stats::EpochStats;
use crate::train::example::{TestExample, TrainingExample};
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Per-layer gradients of the quadratic cost, shaped like the network's
/// `biases` and `weights`.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub biases: Vec<Matrix>,
    pub weights: Vec<Matrix>,
}

/// A fully connected sigmoid network.
///
/// Layer `l` maps `sizes[l]` activations to `sizes[l+1]` through
/// `weights[l]` (`sizes[l+1] × sizes[l]`) and `biases[l]` (`sizes[l+1] × 1`).
#[derive(Debug, Clone)]
pub struct Network {
    sizes: Vec<usize>,
    weights: Vec<Matrix>,
    biases: Vec<Matrix>,
}

impl Network {
    /// Builds a network with N(0, 1) weights and biases.
    ///
    /// `sizes` lists the neuron count of every layer, input first; it needs at
    /// least two entries, all non-zero.
    pub fn new<R: RandomSource + ?Sized>(sizes: &[usize], rng: &mut R) -> Result<Network> {
        if sizes.len() < 2 {
            return Err(NetError::InvalidConfig("a network needs at least an input and an output layer"));
        }
        if sizes.contains(&0) {
            return Err(NetError::InvalidConfig("layer sizes must be non-zero"));
        }

        let biases = sizes[1..]
            .iter()
            .map(|&y| Matrix::random(y, 1, rng))
            .collect::<Result<Vec<Matrix>>>()?;
        let weights = sizes
            .windows(2)
            .map(|pair| Matrix::random(pair[1], pair[0], rng))
            .collect::<Result<Vec<Matrix>>>()?;

        Ok(Network {
            sizes: sizes.to_vec(),
            weights,
            biases,
        })
    }

    /// Rebuilds a network from a snapshot, inferring the layer sizes from the
    /// weight shapes.
    ///
    /// Any inconsistency between weights and biases is an error; nothing is
    /// coerced.
    pub fn load(snapshot: &ModelSnapshot) -> Result<Network> {
        if snapshot.weights.len() != snapshot.biases.len() {
            return Err(NetError::mismatch(
                "snapshot weight vs bias layer count",
                snapshot.weights.len(),
                snapshot.biases.len(),
            ));
        }
        if snapshot.weights.is_empty() {
            return Err(NetError::InvalidConfig("a snapshot needs at least one layer"));
        }

        let weights = snapshot
            .weights
            .iter()
            .map(|w| Matrix::from_data(w.clone()))
            .collect::<Result<Vec<Matrix>>>()?;
        let biases = snapshot
            .biases
            .iter()
            .map(|b| Matrix::from_data(b.clone()))
            .collect::<Result<Vec<Matrix>>>()?;

        let mut sizes = vec![weights[0].cols()];
        for (w, b) in weights.iter().zip(&biases) {
            let previous = sizes[sizes.len() - 1];
            if w.cols() != previous {
                return Err(NetError::mismatch("snapshot weight cols vs previous layer size", w.cols(), previous));
            }
            if w.rows() != b.rows() {
                return Err(NetError::mismatch("snapshot weight rows vs bias rows", w.rows(), b.rows()));
            }
            if b.cols() != 1 {
                return Err(NetError::mismatch("snapshot bias column count", b.cols(), 1));
            }
            sizes.push(w.rows());
        }
        debug!("Loaded network with sizes {sizes:?}");

        Ok(Network { sizes, weights, biases })
    }

    /// Exports the current parameters.
    pub fn dump(&self) -> ModelSnapshot {
        ModelSnapshot {
            weights: self.weights.iter().map(Matrix::elements).collect(),
            biases: self.biases.iter().map(Matrix::elements).collect(),
        }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &[Matrix] {
        &self.biases
    }

    /// Forward pass; returns the output layer as a column matrix.
    pub fn feed_forward(&self, input: &[f64]) -> Result<Matrix> {
        let mut activation = Matrix::from_vector(input)?;
        for (w, b) in self.weights.iter().zip(&self.biases) {
            activation = w.multiply(&activation)?.add(b)?.map(sigmoid);
        }
        Ok(activation)
    }

    /// Index of the most activated output neuron.
    pub fn predict(&self, input: &[f64]) -> Result<usize> {
        let output: Vec<f64> = self.feed_forward(input)?.into_elements().into_iter().flatten().collect();
        Ok(index_max(&output))
    }

    /// Gradient of the quadratic cost for a single example.
    pub fn backprop(&self, input: &[f64], target: &[f64]) -> Result<Gradients> {
        let target = Matrix::from_vector(target)?;

        // Forward pass, keeping every z and activation.
        let mut activation = Matrix::from_vector(input)?;
        let mut activations = vec![activation.clone()];
        let mut zs = Vec::with_capacity(self.weights.len());
        for (w, b) in self.weights.iter().zip(&self.biases) {
            let z = w.multiply(&activation)?.add(b)?;
            activation = z.map(sigmoid);
            zs.push(z);
            activations.push(activation.clone());
        }

        // Output layer: δ = (a − y) ⊙ σ'(z)
        let last = self.weights.len() - 1;
        let mut delta = QuadraticCost::derivative(&activations[last + 1], &target)?
            .hadamard(&zs[last].map(sigmoid_prime))?;

        let mut nabla_b = Vec::with_capacity(self.biases.len());
        let mut nabla_w = Vec::with_capacity(self.weights.len());
        nabla_w.push(delta.multiply(&activations[last].transpose())?);
        nabla_b.push(delta.clone());

        for l in (0..last).rev() {
            let sp = zs[l].map(sigmoid_prime);
            delta = self.weights[l + 1].transpose().multiply(&delta)?.hadamard(&sp)?;
            nabla_w.push(delta.multiply(&activations[l].transpose())?);
            nabla_b.push(delta.clone());
        }

        nabla_b.reverse();
        nabla_w.reverse();

        Ok(Gradients {
            biases: nabla_b,
            weights: nabla_w,
        })
    }

    /// One gradient-descent step on the averaged gradient of `batch`.
    ///
    /// The parameters are replaced only once every example has been
    /// backpropagated, so an error leaves the network untouched. An empty
    /// batch is a no-op.
    pub fn update_mini_batch(&mut self, batch: &[TrainingExample], learning_rate: f64) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut acc = self.zero_gradients()?;
        for example in batch {
            let grads = self.backprop(&example.input, &example.target)?;
            acc.biases = sum_layers(&acc.biases, &grads.biases)?;
            acc.weights = sum_layers(&acc.weights, &grads.weights)?;
        }

        let step = learning_rate / batch.len() as f64;
        let weights = descend(&self.weights, &acc.weights, step)?;
        let biases = descend(&self.biases, &acc.biases, step)?;

        self.weights = weights;
        self.biases = biases;
        Ok(())
    }

    /// Mini-batch stochastic gradient descent; see [`train_loop`].
    ///
    /// `training_data` is shuffled in place once per epoch.
    pub fn sgd<R: RandomSource + ?Sized>(
        &mut self,
        training_data: &mut [TrainingExample],
        config: &TrainConfig,
        test_data: Option<&[TestExample]>,
        rng: &mut R,
    ) -> Result<Vec<EpochStats>> {
        train_loop(self, training_data, config, test_data, rng)
    }

    /// Number of test examples whose predicted class equals the label.
    pub fn evaluate(&self, test_data: &[TestExample]) -> Result<usize> {
        let mut correct = 0;
        for example in test_data {
            if self.predict(&example.input)? == example.label {
                correct += 1;
            }
        }
        Ok(correct)
    }

    /// Mean quadratic cost over `data`; 0 for an empty set.
    pub fn cost(&self, data: &[TrainingExample]) -> Result<f64> {
        if data.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for example in data {
            let output: Vec<f64> = self
                .feed_forward(&example.input)?
                .into_elements()
                .into_iter()
                .flatten()
                .collect();
            total += QuadraticCost::cost(&output, &example.target)?;
        }
        Ok(total / data.len() as f64)
    }

    fn zero_gradients(&self) -> Result<Gradients> {
        Ok(Gradients {
            biases: self
                .biases
                .iter()
                .map(|b| Matrix::zeros(b.rows(), b.cols()))
                .collect::<Result<Vec<Matrix>>>()?,
            weights: self
                .weights
                .iter()
                .map(|w| Matrix::zeros(w.rows(), w.cols()))
                .collect::<Result<Vec<Matrix>>>()?,
        })
    }
}

fn sum_layers(acc: &[Matrix], delta: &[Matrix]) -> Result<Vec<Matrix>> {
    acc.iter().zip(delta).map(|(a, d)| a.add(d)).collect()
}

fn descend(params: &[Matrix], nabla: &[Matrix], step: f64) -> Result<Vec<Matrix>> {
    params
        .iter()
        .zip(nabla)
        .map(|(p, n)| p.subtract(&n.scalar_multiply(step)))
        .collect()
}
