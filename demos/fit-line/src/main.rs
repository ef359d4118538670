#[macro_use]
extern crate log;

use std::time::Instant;

use dialoguer::{theme::ColorfulTheme, Select};
use linear_regression::{root_mean_squared_error, Params, RegressionModel, Strategy};
use nalgebra::{DMatrix, DVector, Dim, Matrix};
use nanorand::{Rng, WyRand};

const NUM_SAMPLES: usize = 100;
const SEED: Option<u64> = Some(0);

pub(crate) fn main() {
    pretty_env_logger::init();

    // y = 4 + 3x with uniform noise
    let mut rng = WyRand::new_seed(SEED.unwrap_or_default());
    let xs: Vec<f64> = (0..NUM_SAMPLES).map(|_| rng.generate::<f64>() * 2.0).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 4.0 + 3.0 * x + rng.generate::<f64>() - 0.5).collect();

    let observations: DMatrix<f64> =
        Matrix::from_vec_generic(Dim::from_usize(NUM_SAMPLES), Dim::from_usize(1), xs);
    let targets = DVector::from_vec(ys);
    info!("got {} datapoints", observations.nrows());

    let strategies = vec![
        Strategy::NormalEquation,
        Strategy::Pseudoinverse,
        Strategy::BatchGradientDescent,
        Strategy::StochasticGradientDescent,
        Strategy::MiniBatchGradientDescent { batch_size: 16 },
    ];
    let e = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select fitting strategy")
        .items(&strategies)
        .default(0)
        .interact()
        .unwrap();
    let strategy = strategies[e];

    let params = Params {
        seed: SEED,
        ..Default::default()
    };
    if strategy.is_randomized() {
        info!("sampling with seed {:?}", params.seed);
    }
    let mut model = RegressionModel::new(params);

    let t0 = Instant::now();
    model.fit(strategy, &observations, &targets).unwrap();
    info!("{} done in: {}ms", strategy, t0.elapsed().as_millis());

    let predictions = model.predict(&observations).unwrap();
    info!("{}", model.equation().unwrap());
    info!("training rmse: {:.4}", root_mean_squared_error(&targets, &predictions).unwrap());
}
