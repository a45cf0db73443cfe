//! Scorecard export.
//!
//! A read-only projection of completed holes: one row per stroke,
//! grouped by hole in hole order, then stroke order. Consumers can take
//! the typed rows or the rendered CSV.

use anyhow::{Context, Result};
use caddie_core::round::model::HoleRecord;
use chrono::NaiveDate;

/// One scorecard row (one stroke).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardRow {
    pub hole_number: u8,
    pub par: u8,
    pub score: u8,
    pub putts: u8,
    pub gir: bool,
    /// 1-based index of the stroke within its hole.
    pub stroke_number: usize,
    pub club: String,
    pub distance: Option<u16>,
}

/// Flattens holes into scorecard rows.
pub fn scorecard_rows(holes: &[HoleRecord]) -> Vec<ScorecardRow> {
    holes
        .iter()
        .flat_map(|hole| {
            hole.strokes.iter().enumerate().map(|(index, stroke)| ScorecardRow {
                hole_number: hole.hole_number,
                par: hole.par,
                score: hole.score,
                putts: hole.putts,
                gir: hole.gir,
                stroke_number: index + 1,
                club: stroke.club.clone(),
                distance: stroke.distance,
            })
        })
        .collect()
}

/// Renders the scorecard as CSV with a header row. Distance is left
/// empty when unrecorded; GIR renders as `Y`/`N`.
pub fn render_csv(holes: &[HoleRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Hole", "Par", "Score", "Putts", "GIR", "Shot Number", "Club", "Distance",
    ])?;

    for row in scorecard_rows(holes) {
        writer.write_record([
            row.hole_number.to_string(),
            row.par.to_string(),
            row.score.to_string(),
            row.putts.to_string(),
            if row.gir { "Y" } else { "N" }.to_string(),
            row.stroke_number.to_string(),
            row.club,
            row.distance.map(|d| d.to_string()).unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush scorecard CSV: {e}"))?;
    String::from_utf8(bytes).context("Scorecard CSV was not valid UTF-8")
}

/// Default export file name for a given date,
/// e.g. `golf_scorecard_2025-06-14.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("golf_scorecard_{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use caddie_core::round::model::{ShotResult, Stroke};

    fn holes() -> Vec<HoleRecord> {
        let mut drive = Stroke::new("Driver");
        drive.distance = Some(230);
        drive.result = Some(ShotResult::Fairway);
        vec![
            HoleRecord {
                hole_number: 1,
                par: 4,
                score: 2,
                putts: 1,
                gir: true,
                strokes: vec![drive, Stroke::new("Putter")],
            },
            HoleRecord {
                hole_number: 2,
                par: 3,
                score: 1,
                putts: 0,
                gir: true,
                strokes: vec![Stroke::new("7 Iron")],
            },
        ]
    }

    #[test]
    fn test_rows_are_hole_then_stroke_ordered() {
        let rows = scorecard_rows(&holes());
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter()
                .map(|r| (r.hole_number, r.stroke_number))
                .collect::<Vec<_>>(),
            vec![(1, 1), (1, 2), (2, 1)]
        );
        assert_eq!(rows[0].distance, Some(230));
        assert_eq!(rows[1].club, "Putter");
    }

    #[test]
    fn test_csv_layout() {
        let csv = render_csv(&holes()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Hole,Par,Score,Putts,GIR,Shot Number,Club,Distance",
                "1,4,2,1,Y,1,Driver,230",
                "1,4,2,1,Y,2,Putter,",
                "2,3,1,0,Y,1,7 Iron,",
            ]
        );
    }

    #[test]
    fn test_empty_round_renders_header_only() {
        let csv = render_csv(&[]).unwrap();
        assert_eq!(csv.trim(), "Hole,Par,Score,Putts,GIR,Shot Number,Club,Distance");
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        assert_eq!(export_file_name(date), "golf_scorecard_2025-06-14.csv");
    }
}
