use crate::config::Config;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and parse configuration from a YAML file
pub fn load_config(config_path: &Path) -> Result<Config> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)
        .wrap_err_with(|| format!("Failed to open configuration '{}'", config_path.display()))?;

    let config: Config = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse configuration '{}'", config_path.display()))?;

    info!(
        "Detected {} configuration with {} packets",
        config.network.router_name(),
        config.packets.len()
    );

    config.validate()?;

    Ok(config)
}

/// CLI arguments that can override YAML settings
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub max_hops: Option<usize>,
}

/// Apply CLI overrides to a configuration
pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) -> Result<()> {
    if let Some(seed) = overrides.seed {
        info!("Overriding seed with {}", seed);
        config.general.seed = Some(seed);
    }

    if let Some(max_hops) = overrides.max_hops {
        info!("Overriding max_hops with {}", max_hops);
        config.general.max_hops = Some(max_hops);
    }

    // Re-validate after applying overrides
    config.validate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const RING_YAML: &str = r#"
general:
  seed: 1
network:
  router: AlwaysRightRing
  radix: 5
packets:
  - source: 1
    destination: 0
"#;

    #[test]
    fn test_load_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", RING_YAML).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.network, NetworkConfig::AlwaysRightRing { radix: 5 });
        assert_eq!(config.packets.len(), 1);
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let yaml = r#"
network:
  router: ShortestPathTorus
  radix: 2
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("radix"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_config(Path::new("/nonexistent/netroute.yaml")).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", RING_YAML).unwrap();
        let mut config = load_config(temp_file.path()).unwrap();

        let overrides = CliOverrides {
            seed: Some(99),
            max_hops: Some(8),
        };
        apply_overrides(&mut config, &overrides).unwrap();
        assert_eq!(config.general.seed, Some(99));
        assert_eq!(config.max_hops(), 8);

        let overrides = CliOverrides {
            seed: None,
            max_hops: Some(0),
        };
        assert!(apply_overrides(&mut config, &overrides).is_err());
    }
}
