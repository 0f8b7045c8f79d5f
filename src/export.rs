//! Modal snapshot and single-page PDF export.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::state::{ChartSeries, PokemonDetail};

pub const EXPORT_FILE: &str = "saved.pdf";

// A4 portrait. Content is drawn from a fixed origin with fixed leading
// and is not scaled to fit; overflow past the bottom edge is clipped by
// the page, matching the original exporter's contract.
const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const ORIGIN_X_MM: f64 = 14.0;
const ORIGIN_Y_MM: f64 = 283.0;
const LINE_STEP_MM: f64 = 5.0;
const FONT_SIZE_PT: f64 = 10.0;

const BAR_UNIT: u64 = 5;
const BAR_MAX: usize = 30;

/// Text snapshot of the modal content region: header, stat table and
/// bar chart, in render order.
pub fn modal_lines(detail: &PokemonDetail, chart: &ChartSeries) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Pokemon: {}", detail.name));
    if let Some(sprite) = &detail.sprite {
        lines.push(format!("Sprite: {sprite}"));
    }
    lines.push(String::new());
    for stat in &detail.stats {
        lines.push(format!("{:<18}{:>4}", stat.name, stat.base));
    }
    lines.push(String::new());
    lines.push("Pokemon Stats".to_string());
    lines.push("legend: stats".to_string());
    for (label, value) in chart.labels.iter().zip(&chart.values) {
        let bar_len = ((*value / BAR_UNIT) as usize).clamp(1, BAR_MAX);
        lines.push(format!("{:<18}{:>4} {}", label, value, "#".repeat(bar_len)));
    }
    lines
}

/// Write the captured lines as a single-page PDF at `path`.
pub fn write_pdf(lines: &[String], path: &Path) -> Result<(), String> {
    let (doc, page, layer) = PdfDocument::new(
        "Pokemon Stats",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| e.to_string())?;
    let layer = doc.get_page(page).get_layer(layer);
    for (index, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let y = ORIGIN_Y_MM - LINE_STEP_MM * index as f64;
        layer.use_text(line.clone(), FONT_SIZE_PT, Mm(ORIGIN_X_MM), Mm(y), &font);
    }
    let file = File::create(path).map_err(|e| e.to_string())?;
    doc.save(&mut BufWriter::new(file)).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatValue;

    fn pikachu() -> (PokemonDetail, ChartSeries) {
        let detail = PokemonDetail {
            name: "pikachu".into(),
            sprite: Some("https://sprites.example/25.png".into()),
            stats: vec![
                StatValue {
                    name: "hp".into(),
                    base: 35,
                },
                StatValue {
                    name: "speed".into(),
                    base: 90,
                },
            ],
        };
        let chart = ChartSeries::from_stats(&detail.stats);
        (detail, chart)
    }

    #[test]
    fn snapshot_contains_header_table_and_chart() {
        let (detail, chart) = pikachu();
        let lines = modal_lines(&detail, &chart);

        assert_eq!(lines[0], "Pokemon: pikachu");
        assert!(lines[1].contains("sprites.example"));
        assert!(lines.iter().any(|line| line.starts_with("hp") && line.contains("35")));
        assert!(lines.contains(&"Pokemon Stats".to_string()));
        assert!(lines.contains(&"legend: stats".to_string()));
    }

    #[test]
    fn chart_bars_are_clamped() {
        let detail = PokemonDetail {
            name: "shuckle".into(),
            sprite: None,
            stats: vec![
                StatValue {
                    name: "defense".into(),
                    base: 230,
                },
                StatValue {
                    name: "speed".into(),
                    base: 5,
                },
            ],
        };
        let chart = ChartSeries::from_stats(&detail.stats);
        let lines = modal_lines(&detail, &chart);

        let defense = lines.iter().find(|l| l.contains("defense") && l.contains('#')).unwrap();
        let speed = lines.iter().find(|l| l.contains("speed") && l.contains('#')).unwrap();
        assert_eq!(defense.matches('#').count(), BAR_MAX);
        assert_eq!(speed.matches('#').count(), 1);
    }

    #[test]
    fn writes_a_nonempty_pdf_file() {
        let (detail, chart) = pikachu();
        let lines = modal_lines(&detail, &chart);
        let path = std::env::temp_dir().join("dexview-export-test.pdf");

        write_pdf(&lines, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
        let _ = std::fs::remove_file(&path);
    }
}
