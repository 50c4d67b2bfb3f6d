// src/config.rs
use std::path::Path;

use log::info;
use sanctuary_stats_domain::config::ReportPlan;
use sanctuary_stats_infra::persistence::FileReader;
use sanctuary_stats_shared_kernel::{ErrorContext, InfrastructureError, Result};

use crate::cli::Args;

/// Resolve the report plan: built-in layout or `--config`, then CLI overrides.
pub fn build_plan(args: &Args) -> Result<ReportPlan> {
    let mut plan = match &args.config {
        Some(path) => load_plan(path).with_context(|| format!("loading plan {}", path.display()))?,
        None => ReportPlan::sanctuary(),
    };

    if let Some(ext) = &args.extension {
        plan.source_extension = ext.clone();
    }
    if let Some(name) = &args.log_name {
        plan.log_file_name = name.clone();
    }
    plan.utc |= args.utc;

    let plan = plan.only_networks(&args.networks)?.rooted_at(&args.root);
    plan.validate()?;
    info!(
        "plan: {} network(s), {} group(s), *.{} + {}",
        plan.networks.len(),
        plan.networks.iter().map(|n| n.groups.len()).sum::<usize>(),
        plan.extension(),
        plan.log_file_name
    );
    Ok(plan)
}

/// Read a YAML (`.yml`/`.yaml`) or JSON plan file.
pub fn load_plan(path: &Path) -> Result<ReportPlan> {
    let reader = FileReader::open_buffered(path)?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yml") || e.eq_ignore_ascii_case("yaml"));
    let plan: ReportPlan = if is_yaml {
        serde_yaml::from_reader(reader).map_err(InfrastructureError::from)?
    } else {
        serde_json::from_reader(reader).map_err(InfrastructureError::from)?
    };
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use clap::Parser;
    use tempfile::tempdir;

    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["sanctuary-stats"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn default_plan_is_rooted() {
        let plan = build_plan(&args(&["--root", "/srv/sanctuary"])).unwrap();
        assert_eq!(plan.networks.len(), 4);
        assert_eq!(plan.networks[0].groups[0].path, PathBuf::from("/srv/sanctuary/contracts/mainnet"));
    }

    #[test]
    fn overrides_apply() {
        let plan = build_plan(&args(&["--extension", "vy", "--log-name", "index.jsonl", "--utc", "--network", "tron"]))
            .unwrap();
        assert_eq!(plan.extension(), "vy");
        assert_eq!(plan.log_file_name, "index.jsonl");
        assert!(plan.utc);
        assert_eq!(plan.networks.len(), 1);
        assert_eq!(plan.networks[0].name, "Tron");
    }

    #[test]
    fn yaml_plan_replaces_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.yaml");
        fs::write(
            &path,
            "title: Test Report\nnetworks:\n  - name: Devnet\n    groups:\n      - name: Local\n        path: local\n",
        )
        .unwrap();

        let plan = build_plan(&args(&["--config", path.to_str().unwrap(), "--root", "/data"])).unwrap();
        assert_eq!(plan.title, "Test Report");
        assert_eq!(plan.source_extension, "sol");
        assert_eq!(plan.log_file_name, "contracts.json");
        assert_eq!(plan.networks[0].groups[0].path, PathBuf::from("/data/local"));
    }

    #[test]
    fn json_plan_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");
        fs::write(&path, r#"{"networks":[{"name":"Net","groups":[{"name":"G","path":"/abs/g"}]}],"utc":true}"#).unwrap();

        let plan = load_plan(&path).unwrap();
        assert!(plan.utc);
        assert_eq!(plan.networks[0].groups[0].path, PathBuf::from("/abs/g"));
    }

    #[test]
    fn empty_plan_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.yml");
        fs::write(&path, "title: nothing\n").unwrap();
        let err = build_plan(&args(&["--config", path.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().contains("at least one network"));
    }

    #[test]
    fn broken_plan_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.yml");
        fs::write(&path, "networks: [").unwrap();
        let err = build_plan(&args(&["--config", path.to_str().unwrap()])).unwrap_err();
        assert!(err.to_string().contains("loading plan"));
    }
}
