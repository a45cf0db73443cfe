//! Derived round statistics.
//!
//! Aggregate totals are never cached on live state; consumers compute them
//! on demand from the completed-hole records. The single exception is the
//! denormalized total kept on `FinishedRound`, fixed at close time.

use std::collections::HashMap;

use crate::round::model::{ClubName, HoleRecord};

/// On-demand aggregate totals over a sequence of completed holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundTotals {
    pub score: u32,
    pub par: u32,
    pub putts: u32,
    pub holes_played: usize,
    /// Holes reached in regulation.
    pub gir_count: usize,
}

impl RoundTotals {
    /// Sums per-hole fields across `holes`.
    pub fn for_holes(holes: &[HoleRecord]) -> Self {
        let mut totals = Self::default();
        for hole in holes {
            totals.score += hole.score as u32;
            totals.par += hole.par as u32;
            totals.putts += hole.putts as u32;
            totals.holes_played += 1;
            if hole.gir {
                totals.gir_count += 1;
            }
        }
        totals
    }

    /// Score relative to par (negative is under par).
    pub fn relative_to_par(&self) -> i32 {
        self.score as i32 - self.par as i32
    }

    /// Scorecard rendering of the par differential: `+3`, `E`, or `-2`.
    pub fn relative_display(&self) -> String {
        match self.relative_to_par() {
            0 => "E".to_string(),
            diff if diff > 0 => format!("+{diff}"),
            diff => diff.to_string(),
        }
    }

    /// Greens-in-regulation percentage, rounded to the nearest whole
    /// percent. Zero when no holes have been played.
    pub fn gir_percentage(&self) -> u32 {
        if self.holes_played == 0 {
            return 0;
        }
        ((self.gir_count as f64 / self.holes_played as f64) * 100.0).round() as u32
    }
}

/// Per-club stroke counts for a round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClubUsage {
    /// (club, stroke count), most used first. Ties break on club name
    /// so the ordering is deterministic.
    pub counts: Vec<(ClubName, usize)>,
    pub total_strokes: usize,
}

impl ClubUsage {
    /// The highest single-club count, used to scale usage displays.
    pub fn max_count(&self) -> usize {
        self.counts.first().map(|(_, count)| *count).unwrap_or(0)
    }
}

/// Tallies club usage across every stroke of the given holes.
pub fn club_usage(holes: &[HoleRecord]) -> ClubUsage {
    let mut tally: HashMap<&str, usize> = HashMap::new();
    let mut total_strokes = 0;
    for hole in holes {
        for stroke in &hole.strokes {
            *tally.entry(stroke.club.as_str()).or_insert(0) += 1;
            total_strokes += 1;
        }
    }

    let mut counts: Vec<(ClubName, usize)> = tally
        .into_iter()
        .map(|(club, count)| (club.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    ClubUsage {
        counts,
        total_strokes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::model::Stroke;

    fn hole_with_strokes(gir: bool, clubs: &[&str]) -> HoleRecord {
        HoleRecord {
            hole_number: 1,
            par: 4,
            score: clubs.len() as u8,
            putts: 1,
            gir,
            strokes: clubs.iter().map(|c| Stroke::new(*c)).collect(),
        }
    }

    #[test]
    fn test_totals_for_empty_round() {
        let totals = RoundTotals::for_holes(&[]);
        assert_eq!(totals.score, 0);
        assert_eq!(totals.holes_played, 0);
        assert_eq!(totals.gir_percentage(), 0);
        assert_eq!(totals.relative_display(), "E");
    }

    #[test]
    fn test_totals_sum_per_hole_fields() {
        let holes = vec![
            hole_with_strokes(true, &["Driver", "7 Iron", "Putter", "Putter"]),
            hole_with_strokes(false, &["Driver", "Putter", "Putter"]),
        ];
        let totals = RoundTotals::for_holes(&holes);
        assert_eq!(totals.score, 7);
        assert_eq!(totals.par, 8);
        assert_eq!(totals.putts, 2);
        assert_eq!(totals.holes_played, 2);
        assert_eq!(totals.gir_count, 1);
        assert_eq!(totals.gir_percentage(), 50);
        assert_eq!(totals.relative_display(), "-1");
    }

    #[test]
    fn test_relative_display_over_par() {
        let holes = vec![hole_with_strokes(false, &["D", "D", "D", "D", "D", "D"])];
        let totals = RoundTotals::for_holes(&holes);
        assert_eq!(totals.relative_display(), "+2");
    }

    #[test]
    fn test_gir_percentage_rounds() {
        let holes = vec![
            hole_with_strokes(true, &["Putter"]),
            hole_with_strokes(false, &["Putter"]),
            hole_with_strokes(false, &["Putter"]),
        ];
        // 1/3 rounds to 33.
        assert_eq!(RoundTotals::for_holes(&holes).gir_percentage(), 33);
    }

    #[test]
    fn test_club_usage_sorted_desc_with_name_tiebreak() {
        let holes = vec![
            hole_with_strokes(false, &["Driver", "Putter", "Putter"]),
            hole_with_strokes(false, &["7 Iron", "Putter"]),
        ];
        let usage = club_usage(&holes);
        assert_eq!(usage.total_strokes, 5);
        assert_eq!(usage.max_count(), 3);
        assert_eq!(
            usage.counts,
            vec![
                ("Putter".to_string(), 3),
                ("7 Iron".to_string(), 1),
                ("Driver".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_club_usage_empty() {
        let usage = club_usage(&[]);
        assert!(usage.counts.is_empty());
        assert_eq!(usage.total_strokes, 0);
        assert_eq!(usage.max_count(), 0);
    }
}
