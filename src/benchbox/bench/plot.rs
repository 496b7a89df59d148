use super::config::BenchConfig;
use super::error::BenchError;
use super::stats::ComparisonStats;
use log::info;
use plotters::prelude::*;
use std::path::PathBuf;

const PLOT_SIZE: (u32, u32) = (640, 480);

/// Renders one whisker box per labelled sample set, in input order, and
/// writes the chart to `<bench_name>.png`, overwriting any existing file.
///
/// Sample sequences must be non-empty; the statistics step upstream
/// guarantees this for the binary pipeline.
pub fn render_box_plot(
    config: &BenchConfig,
    samples: &[(String, Vec<f64>)],
    stats: &ComparisonStats,
) -> Result<PathBuf, BenchError> {
    let out = config.plot_file();
    let file = out.display().to_string();
    let render = |message: String| BenchError::Render {
        file: file.clone(),
        message,
    };

    let labels: Vec<String> = samples.iter().map(|(label, _)| label.clone()).collect();
    let quartiles: Vec<Quartiles> = samples.iter().map(|(_, set)| Quartiles::new(set)).collect();

    let max_whisker = quartiles
        .iter()
        .flat_map(|quartile| quartile.values())
        .fold(0f32, f32::max);
    let y_end = if max_whisker > 0.0 {
        max_whisker * 1.1
    } else {
        1.0
    };

    let root = BitMapBackend::new(&out, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(stats.title(), ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(labels[..].into_segmented(), 0f32..y_end)
        .map_err(|e| render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("User Time in Seconds")
        .draw()
        .map_err(|e| render(e.to_string()))?;

    chart
        .draw_series(labels.iter().zip(&quartiles).map(|(label, quartile)| {
            Boxplot::new_vertical(SegmentValue::CenterOf(label), quartile)
                .width(25)
                .whisker_width(0.5)
        }))
        .map_err(|e| render(e.to_string()))?;

    root.present().map_err(|e| render(e.to_string()))?;
    info!("wrote plot to {}", out.display());
    let result = out.clone();
    drop(root);
    Ok(result)
}
