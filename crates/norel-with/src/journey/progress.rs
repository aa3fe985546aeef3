use super::catalog;
use super::domain::Step;
use serde::Serialize;

pub const MIN_SCORE: u32 = 300;
pub const MAX_SCORE: u32 = 850;

/// Road-map station (0..=5) reached at `step`.
pub const fn station_index(step: Step) -> usize {
    match step.get() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 4,
        _ => 5,
    }
}

/// Fill of the road-map bar, from 0.0 at the first station to 1.0 at the last.
pub fn road_progress(step: Step) -> f64 {
    let last_station = catalog::stations().len() - 1;
    station_index(step) as f64 / last_station as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl ScoreTier {
    pub const fn for_score(score: u32) -> Self {
        match score {
            750.. => Self::Platinum,
            650.. => Self::Gold,
            550.. => Self::Silver,
            _ => Self::Bronze,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bronze => "ブロンズ",
            Self::Silver => "シルバー",
            Self::Gold => "ゴールド",
            Self::Platinum => "プラチナ",
        }
    }
}

/// Position of `score` on the meter, clamped to the 300..=850 range.
pub fn score_fraction(score: u32) -> f64 {
    let clamped = score.clamp(MIN_SCORE, MAX_SCORE);
    f64::from(clamped - MIN_SCORE) / f64::from(MAX_SCORE - MIN_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stations_bucket_steps() {
        let indexes: Vec<usize> = Step::ordered().map(station_index).collect();
        assert_eq!(indexes, vec![0, 0, 1, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn station_index_is_monotonic() {
        let steps: Vec<Step> = Step::ordered().collect();
        for (i, lower) in steps.iter().enumerate() {
            for higher in &steps[i..] {
                assert!(station_index(*lower) <= station_index(*higher));
            }
        }
    }

    #[test]
    fn road_progress_spans_unit_interval() {
        assert_eq!(road_progress(Step::FIRST), 0.0);
        assert_eq!(road_progress(Step::LAST), 1.0);
        assert!((road_progress(Step::clamped(5)) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn score_tiers_follow_thresholds() {
        assert_eq!(ScoreTier::for_score(750), ScoreTier::Platinum);
        assert_eq!(ScoreTier::for_score(749), ScoreTier::Gold);
        assert_eq!(ScoreTier::for_score(550), ScoreTier::Silver);
        assert_eq!(ScoreTier::for_score(100), ScoreTier::Bronze);
        assert_eq!(score_fraction(100), 0.0);
        assert_eq!(score_fraction(999), 1.0);
    }
}
