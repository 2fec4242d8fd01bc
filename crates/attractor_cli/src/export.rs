use anyhow::{Context, Result};
use attractor_core::trajectory::Trajectory;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Writes the state sequence as pretty-printed JSON for downstream tooling.
pub fn write_json(trajectory: &Trajectory<f64>, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, trajectory.states())
        .context("failed to serialize trajectory")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_json;
    use attractor_core::config::RunConfig;
    use attractor_core::integrate;
    use attractor_core::trajectory::State;

    #[test]
    fn exported_states_read_back_unchanged() {
        let mut config = RunConfig::rossler();
        config.steps = 25;
        let trajectory = integrate::run(&config).expect("run should succeed");

        let path = std::env::temp_dir().join("attractor_export_smoke.json");
        write_json(&trajectory, &path).expect("export should succeed");

        let raw = std::fs::read_to_string(&path).expect("file should exist");
        let parsed: Vec<State<f64>> = serde_json::from_str(&raw).expect("export should parse");
        assert_eq!(parsed.as_slice(), trajectory.states());
        let _ = std::fs::remove_file(&path);
    }
}
