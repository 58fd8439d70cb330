use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    pub balances_path: PathBuf,
    pub prices_path: PathBuf,

    // rows are only logged when absent
    #[serde(default)]
    pub output_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use crate::config::PipelineConfig;
    use std::path::PathBuf;

    #[test]
    fn parses_yaml() {
        let config: PipelineConfig = serde_yaml::from_str(
            "
balances_path: data/balances.jsonl
prices_path: data/prices.json
output_path: out/rows.jsonl
",
        )
        .unwrap();
        assert_eq!(config.balances_path, PathBuf::from("data/balances.jsonl"));
        assert_eq!(config.prices_path, PathBuf::from("data/prices.json"));
        assert_eq!(config.output_path, Some(PathBuf::from("out/rows.jsonl")));
    }

    #[test]
    fn output_is_optional() {
        let config: PipelineConfig =
            serde_yaml::from_str("balances_path: a.jsonl\nprices_path: b.json\n").unwrap();
        assert!(config.output_path.is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let config: Result<PipelineConfig, _> =
            serde_yaml::from_str("balances_path: a\nprices_path: b\nprice_path: c\n");
        assert!(config.is_err());
    }
}
