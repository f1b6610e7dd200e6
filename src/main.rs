// Trains a small network on logical AND and optionally writes the model.
//   cargo run -- model.json
// Set RUST_LOG=debug for per-batch detail.
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

use sgd_net::{Network, TestExample, TrainConfig, TrainingExample};

const SEED: u64 = 42;

fn and_gate() -> sgd_net::Result<(Vec<TrainingExample>, Vec<TestExample>)> {
    let mut training = Vec::new();
    let mut test = Vec::new();
    for a in 0..2 {
        for b in 0..2 {
            let input = vec![a as f64, b as f64];
            let label = a & b;
            for _ in 0..25 {
                training.push(TrainingExample::labelled(input.clone(), label, 2)?);
            }
            test.push(TestExample::new(input, label));
        }
    }
    Ok((training, test))
}

fn run(out_path: Option<String>) -> sgd_net::Result<()> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let (mut training, test) = and_gate()?;

    let mut network = Network::new(&[2, 3, 2], &mut rng)?;
    info!("Before training: {} / {}", network.evaluate(&test)?, test.len());

    let config = TrainConfig::new(30, 10, 3.0);
    network.sgd(&mut training, &config, Some(&test), &mut rng)?;

    for example in &test {
        info!("{:?} -> {}", example.input, network.predict(&example.input)?);
    }

    if let Some(path) = out_path {
        network.dump().save_json(&path)?;
        info!("Model written to {path}");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(std::env::args().nth(1)) {
        error!("{e}");
        std::process::exit(1);
    }
}
