use std::time::Instant;

use log::{debug, info};

use crate::error::Result;
use crate::math::random::{shuffle, RandomSource};
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::example::{TestExample, TrainingExample};
use crate::train::train_config::TrainConfig;

/// Runs `config.epochs` epochs of mini-batch SGD over `training_data`.
///
/// The caller owns `training_data`; it is shuffled in place at the start of
/// every epoch. When `test_data` is given the network is evaluated after each
/// epoch and the correct count is logged and recorded.
///
/// # Errors
/// Fails on an invalid `config`, or with `DimensionMismatch` as soon as any
/// example disagrees with the layer sizes. A failing mini-batch leaves the
/// network as it was after the previous batch.
pub fn train_loop<R: RandomSource + ?Sized>(
    network: &mut Network,
    training_data: &mut [TrainingExample],
    config: &TrainConfig,
    test_data: Option<&[TestExample]>,
    rng: &mut R,
) -> Result<Vec<EpochStats>> {
    config.validate()?;

    let n = training_data.len();
    info!(
        "Training started: {} examples, {} epochs, mini-batch {}, eta {}",
        n, config.epochs, config.mini_batch_size, config.learning_rate
    );

    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 0..config.epochs {
        let t_start = Instant::now();

        shuffle(training_data, rng);

        let mut batches = 0;
        for batch in training_data.chunks(config.mini_batch_size) {
            network.update_mini_batch(batch, config.learning_rate)?;
            batches += 1;
        }
        debug!("Epoch {epoch}: applied {batches} mini-batches");

        let correct = match test_data {
            Some(test) => {
                let correct = network.evaluate(test)?;
                info!("Epoch {epoch}: {correct} / {}", test.len());
                Some(correct)
            }
            None => {
                info!("Epoch {epoch} complete");
                None
            }
        };

        history.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            correct,
            test_size: test_data.map(|t| t.len()),
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        });
    }

    Ok(history)
}
