use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use tokio::signal;

use linear_regression::{
    data, fit,
    persist::{self, PlotData},
    runtime::{self, Interruptible},
    ConfigOverrides, Termination, TrainingConfig,
};

#[derive(Parser)]
#[command(version, about = "Fits a line to a two-column dataset by gradient descent")]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Train(TrainOpts),
    Predict(PredictOpts),
}

/// Fits the model and writes the coefficients
#[derive(Args)]
struct TrainOpts {
    /// Dataset with a header line followed by `predictor,response` rows
    #[arg(long, env = "LR_DATASET", default_value = "data.csv")]
    dataset: PathBuf,

    /// Where to write the `intercept,slope` line
    #[arg(long, env = "LR_THETAS", default_value = "thetas.csv")]
    thetas: PathBuf,

    /// JSON training config, flags below take precedence over it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    max_iteration: Option<NonZeroUsize>,

    #[arg(long)]
    convergence_threshold: Option<f64>,

    #[arg(long)]
    learning_rate: Option<f64>,

    /// Also write the samples and the fitted line as JSON, for plotting
    #[arg(long)]
    plot_data: Option<PathBuf>,
}

impl TrainOpts {
    fn training_config(&self) -> anyhow::Result<TrainingConfig> {
        let overrides = ConfigOverrides {
            max_iteration: self.max_iteration,
            convergence_threshold: self.convergence_threshold,
            learning_rate: self.learning_rate,
        };

        TrainingConfig::resolve(self.config.as_deref(), overrides).with_context(|| {
            match &self.config {
                Some(path) => format!("cannot load config '{}'", path.display()),
                None => "invalid training config".to_string(),
            }
        })
    }
}

/// Estimates the response for a predictor value with the stored coefficients
#[derive(Args)]
struct PredictOpts {
    /// The predictor value
    #[arg(allow_negative_numbers = true)]
    x: f64,

    #[arg(long, env = "LR_THETAS", default_value = "thetas.csv")]
    thetas: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    let rt = runtime::build()?;

    let ret = rt.block_on(async {
        match opts.command {
            Command::Train(opts) => train(opts).await,
            Command::Predict(opts) => predict(opts).await,
        }
    });

    // an abandoned fit still holds a blocking thread, don't wait for it
    rt.shutdown_background();
    ret
}

async fn train(opts: TrainOpts) -> anyhow::Result<()> {
    let cfg = opts.training_config()?;
    let samples = data::load_samples(&opts.dataset).await?;
    info!("training on {} samples from {}", samples.len(), opts.dataset.display());

    let task_samples = samples.clone();
    let outcome = runtime::run_blocking_until(
        move || fit(&task_samples, cfg),
        signal::ctrl_c(),
    )
    .await
    .context("training task failed")?;

    let report = match outcome {
        Interruptible::Completed(report) => report?,
        Interruptible::Interrupted => {
            warn!("received SIGINT, abandoning training");
            return Ok(());
        }
    };

    match report.termination {
        Termination::Converged { iterations } => info!("converged at iterations: {iterations}"),
        Termination::Exhausted { .. } => info!("max iteration exceeded before converging"),
    }

    let coef = report.coefficients;
    info!("final thetas: {}, {}", coef.intercept, coef.slope);

    persist::write_coefficients(&opts.thetas, &coef)
        .await
        .with_context(|| format!("cannot write '{}'", opts.thetas.display()))?;

    if let Some(path) = &opts.plot_data {
        PlotData::new(&samples, coef)
            .write(path)
            .await
            .with_context(|| format!("cannot write '{}'", path.display()))?;
        info!("plot data written to {}", path.display());
    }

    Ok(())
}

async fn predict(opts: PredictOpts) -> anyhow::Result<()> {
    let coef = persist::read_coefficients(&opts.thetas).await?;
    println!("{}", coef.predict(opts.x));
    Ok(())
}
