// lib/src/config/config_helpers.rs

use std::fs;
use std::path::Path;

use log::debug;
use models::{GraphError, GraphResult};

use crate::config::config_structs::BenchmarkConfig;

/// Parses a YAML benchmark config and validates it.
pub fn parse_benchmark_config(contents: &str) -> GraphResult<BenchmarkConfig> {
    let config: BenchmarkConfig = serde_yaml2::from_str(contents)
        .map_err(|e| GraphError::ConfigError(format!("Failed to parse benchmark config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Loads the benchmark config from `path`, or the built-in defaults when no
/// path is given.
pub fn load_benchmark_config(path: Option<&Path>) -> GraphResult<BenchmarkConfig> {
    let Some(path) = path else {
        debug!("No benchmark config given, using built-in datasets");
        return Ok(BenchmarkConfig::default());
    };

    let contents = fs::read_to_string(path).map_err(|e| {
        GraphError::ConfigError(format!(
            "Failed to read benchmark config {}: {}",
            path.display(),
            e
        ))
    })?;
    parse_benchmark_config(&contents).map_err(|e| match e {
        GraphError::ConfigError(msg) => {
            GraphError::ConfigError(format!("{} ({})", msg, path.display()))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config_constants::*;
    use crate::config::ModeSetting;
    use crate::suite::BenchmarkMode;
    use models::Dataset;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_builtin_datasets() {
        let config = load_benchmark_config(None).unwrap();
        assert_eq!(
            config.datasets,
            vec![
                Dataset::new("benchmark/data/roads.csv", "140000"),
                Dataset::new("benchmark/data/large_twitch_edges.csv", "0"),
            ]
        );
        assert_eq!(config.mode(), BenchmarkMode::Single);
        assert_eq!(config.iterations, DEFAULT_BENCHMARK_ITERATIONS);
    }

    #[test]
    fn test_parse_yaml_overrides() {
        let yaml = r#"
datasets:
  - path: "data/small.csv"
    start_node: "7"
mode: repeated
iterations: 5
"#;
        let config = parse_benchmark_config(yaml).unwrap();
        assert_eq!(config.datasets, vec![Dataset::new("data/small.csv", "7")]);
        assert_eq!(config.mode, ModeSetting::Repeated);
        assert_eq!(config.mode(), BenchmarkMode::Repeated { iterations: 5 });
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let mut config = BenchmarkConfig::default();
        config.iterations = 0;
        assert!(matches!(config.validate(), Err(GraphError::ConfigError(_))));
    }

    #[test]
    fn test_empty_datasets_rejected() {
        let config = BenchmarkConfig {
            datasets: Vec::new(),
            ..BenchmarkConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "datasets:").unwrap();
        writeln!(file, "  - path: \"edges.csv\"").unwrap();
        writeln!(file, "    start_node: \"a\"").unwrap();
        writeln!(file, "mode: single").unwrap();
        writeln!(file, "iterations: 3").unwrap();
        file.flush().unwrap();

        let config = load_benchmark_config(Some(file.path())).unwrap();
        assert_eq!(config.datasets, vec![Dataset::new("edges.csv", "a")]);
        assert_eq!(config.mode(), BenchmarkMode::Single);
        assert_eq!(config.iterations, 3);
    }

    #[test]
    fn test_load_shipped_runner_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("runner")
            .join("bench_config.yaml");
        let config = load_benchmark_config(Some(&path)).unwrap();
        assert_eq!(config, BenchmarkConfig::default());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let yaml = r#"
datasets:
  - path: "edges.csv"
    start_node: "a"
mode: sometimes
iterations: 2
"#;
        let err = parse_benchmark_config(yaml).unwrap_err();
        assert!(matches!(err, GraphError::ConfigError(_)));
    }

    #[test]
    fn test_mode_setting_from_str() {
        assert_eq!("single".parse::<ModeSetting>().unwrap(), ModeSetting::Single);
        assert_eq!("Repeated".parse::<ModeSetting>().unwrap(), ModeSetting::Repeated);
        assert!("twice".parse::<ModeSetting>().is_err());
        assert_eq!(ModeSetting::Repeated.to_string(), "repeated");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = load_benchmark_config(Some(&path)).unwrap_err();
        assert!(matches!(err, GraphError::ConfigError(_)));
    }
}
