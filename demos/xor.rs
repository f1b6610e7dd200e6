use rand::{rngs::StdRng, SeedableRng};
use sgd_net::{Network, TrainConfig, TrainingExample};

fn main() -> sgd_net::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut rng = StdRng::seed_from_u64(1);
    let mut network = Network::new(&[2, 4, 1], &mut rng)?;

    let mut data = vec![
        TrainingExample::new(vec![1.0, 0.0], vec![1.0]),
        TrainingExample::new(vec![1.0, 1.0], vec![0.0]),
        TrainingExample::new(vec![0.0, 1.0], vec![1.0]),
        TrainingExample::new(vec![0.0, 0.0], vec![0.0]),
    ];

    let config = TrainConfig::new(1000, 4, 2.0);
    for round in 0..10 {
        network.sgd(&mut data, &config, None, &mut rng)?;
        println!("Epoch {}: cost = {:.6}", (round + 1) * config.epochs, network.cost(&data)?);
    }

    for example in &data {
        let output = network.feed_forward(&example.input)?.elements()[0][0];
        println!("Input: {:?} -> Output: {:.4}", example.input, output);
    }
    Ok(())
}
