use std::{num::NonZeroUsize, path::PathBuf};

use linear_regression::{
    data,
    fit,
    persist::{self, PlotData},
    ConfigOverrides, RegressionErr, TrainingConfig,
};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("linear-regression-{}-{name}", std::process::id()))
}

#[tokio::test]
async fn dataset_to_thetas_and_back() -> Result<(), RegressionErr> {
    let dataset = scratch_path("data.csv");
    let thetas = scratch_path("thetas.csv");
    let plot = scratch_path("plot.json");

    tokio::fs::write(&dataset, "km,price\n1,2\n2,4\n3,6\n4,8\n").await?;

    let samples = data::load_samples(&dataset).await?;
    let cfg = TrainingConfig::new(NonZeroUsize::new(10_000).unwrap(), 1e-12, 0.1)?;
    let report = fit(&samples, cfg)?;

    persist::write_coefficients(&thetas, &report.coefficients).await?;
    let stored = persist::read_coefficients(&thetas).await?;
    assert_eq!(stored, report.coefficients);
    assert!((stored.predict(5.0) - 10.0).abs() < 1e-2);

    PlotData::new(&samples, stored).write(&plot).await?;
    let json: serde_json::Value = serde_json::from_str(&tokio::fs::read_to_string(&plot).await?)?;
    assert_eq!(json["samples"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["line"][0]["x"].as_f64(), Some(1.0));
    assert_eq!(json["line"][1]["x"].as_f64(), Some(4.0));

    for path in [dataset, thetas, plot] {
        tokio::fs::remove_file(path).await?;
    }
    Ok(())
}

#[tokio::test]
async fn missing_dataset_aborts_before_training() {
    let res = data::load_samples(scratch_path("absent.csv")).await;
    assert!(matches!(res, Err(RegressionErr::DatasetNotFound { .. })));
}

#[test]
fn config_file_overrides_defaults() {
    let path = scratch_path("config.json");
    std::fs::write(&path, r#"{ "max_iteration": 500, "learning_rate": 0.2 }"#).unwrap();

    let cfg = TrainingConfig::load(&path).unwrap();
    assert_eq!(cfg.max_iteration.get(), 500);
    assert_eq!(cfg.learning_rate, 0.2);
    assert_eq!(cfg.convergence_threshold, 1e-5);

    let overrides = ConfigOverrides {
        max_iteration: NonZeroUsize::new(50),
        ..ConfigOverrides::default()
    };
    let cfg = TrainingConfig::resolve(Some(path.as_path()), overrides).unwrap();
    assert_eq!(cfg.max_iteration.get(), 50);
    assert_eq!(cfg.learning_rate, 0.2);

    std::fs::remove_file(path).unwrap();
}
