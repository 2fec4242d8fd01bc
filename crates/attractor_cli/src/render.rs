use anyhow::{anyhow, bail, Result};
use attractor_core::trajectory::{State, Trajectory};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::Path;
use tracing::warn;

/// Figure styling. Defaults draw a white polyline on a black background
/// with the axes hidden.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub line_rgb: (u8, u8, u8),
    pub line_width: u32,
    pub background_rgb: (u8, u8, u8),
    /// Draws the axis skeleton when set; off reproduces the usual look.
    pub show_axes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            line_rgb: (255, 255, 255),
            line_width: 1,
            background_rgb: (0, 0, 0),
            show_axes: false,
        }
    }
}

/// Renders the trajectory as a single 3D polyline into a PNG at `path`.
///
/// A diverged trajectory is drawn up to its last finite state.
pub fn render_png(
    trajectory: &Trajectory<f64>,
    options: &RenderOptions,
    path: &Path,
) -> Result<()> {
    if trajectory.is_empty() {
        bail!("Cannot render an empty trajectory.");
    }

    let states = match trajectory.first_non_finite() {
        Some(0) => bail!("Cannot render a trajectory with no finite states."),
        Some(first_bad) => {
            warn!(
                drawn = first_bad,
                total = trajectory.len(),
                "trajectory diverged; rendering the finite prefix"
            );
            &trajectory.states()[..first_bad]
        }
        None => trajectory.states(),
    };

    let (x_range, y_range, z_range) = axis_bounds(states);

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    let (br, bg, bb) = options.background_rgb;
    root.fill(&RGBColor(br, bg, bb))
        .map_err(|e| anyhow!("backend error: {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_3d(x_range, y_range, z_range)
        .map_err(|e| anyhow!("chart build error: {e}"))?;

    if options.show_axes {
        chart
            .configure_axes()
            .draw()
            .map_err(|e| anyhow!("axes error: {e}"))?;
    }

    let (lr, lg, lb) = options.line_rgb;
    let style = RGBColor(lr, lg, lb).stroke_width(options.line_width);
    chart
        .draw_series(LineSeries::new(
            states.iter().map(|s| (s.x, s.y, s.z)),
            style,
        ))
        .map_err(|e| anyhow!("draw error: {e}"))?;

    root.present().map_err(|e| anyhow!("render error: {e}"))?;
    Ok(())
}

/// Bounding box of the drawn states, padded so the polyline does not touch
/// the frame. Degenerate spans (constant trajectories) get a fixed margin.
fn axis_bounds(states: &[State<f64>]) -> (Range<f64>, Range<f64>, Range<f64>) {
    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    for s in states {
        for (i, v) in [s.x, s.y, s.z].into_iter().enumerate() {
            min[i] = min[i].min(v);
            max[i] = max[i].max(v);
        }
    }

    let pad = |lo: f64, hi: f64| {
        let span = hi - lo;
        let margin = if span > 0.0 { span * 0.05 } else { 0.5 };
        lo - margin..hi + margin
    };
    (pad(min[0], max[0]), pad(min[1], max[1]), pad(min[2], max[2]))
}

#[cfg(test)]
mod tests {
    use super::{axis_bounds, render_png, RenderOptions};
    use attractor_core::config::RunConfig;
    use attractor_core::integrate;
    use attractor_core::trajectory::State;

    #[test]
    fn bounds_cover_all_states_with_padding() {
        let states = [
            State::new(-1.0, 0.0, 2.0),
            State::new(3.0, 4.0, -2.0),
            State::new(0.0, 2.0, 0.0),
        ];
        let (x, y, z) = axis_bounds(&states);

        assert!(x.start < -1.0 && x.end > 3.0);
        assert!(y.start < 0.0 && y.end > 4.0);
        assert!(z.start < -2.0 && z.end > 2.0);
    }

    #[test]
    fn degenerate_spans_still_produce_a_window() {
        let states = [State::new(1.0, 1.0, 1.0)];
        let (x, _y, _z) = axis_bounds(&states);
        assert!(x.start < 1.0 && x.end > 1.0);
    }

    #[test]
    fn renders_a_short_orbit_to_disk() {
        let mut config = RunConfig::lorenz();
        config.steps = 200;
        let trajectory = integrate::run(&config).expect("run should succeed");

        let path = std::env::temp_dir().join("attractor_render_smoke.png");
        render_png(&trajectory, &RenderOptions::default(), &path).expect("render should succeed");

        let written = std::fs::metadata(&path).expect("file should exist");
        assert!(written.len() > 0);
        let _ = std::fs::remove_file(&path);
    }
}
