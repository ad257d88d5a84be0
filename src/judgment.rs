use crate::models::{Label, Mode};

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 10;

/// Labels a goal from its difficulty and the mode it was filed under.
///
/// Each band is inclusive at its lower bound, so the three labels of a mode
/// cover 1..=10 without overlap.
pub fn judge(difficulty: u8, mode: Mode) -> Label {
    match mode {
        Mode::Pro => match difficulty {
            8.. => Label::HighImpact,
            5..=7 => Label::Strategic,
            _ => Label::QuickWin,
        },
        Mode::Silly => match difficulty {
            9.. => Label::Delusional,
            6..=8 => Label::GoodLuck,
            _ => Label::BabySteps,
        },
    }
}

pub fn labels_for(mode: Mode) -> [Label; 3] {
    match mode {
        Mode::Pro => [Label::HighImpact, Label::Strategic, Label::QuickWin],
        Mode::Silly => [Label::Delusional, Label::GoodLuck, Label::BabySteps],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pro_band_edges() {
        assert_eq!(judge(10, Mode::Pro), Label::HighImpact);
        assert_eq!(judge(8, Mode::Pro), Label::HighImpact);
        assert_eq!(judge(7, Mode::Pro), Label::Strategic);
        assert_eq!(judge(5, Mode::Pro), Label::Strategic);
        assert_eq!(judge(4, Mode::Pro), Label::QuickWin);
        assert_eq!(judge(1, Mode::Pro), Label::QuickWin);
    }

    #[test]
    fn silly_band_edges() {
        assert_eq!(judge(10, Mode::Silly), Label::Delusional);
        assert_eq!(judge(9, Mode::Silly), Label::Delusional);
        assert_eq!(judge(8, Mode::Silly), Label::GoodLuck);
        assert_eq!(judge(6, Mode::Silly), Label::GoodLuck);
        assert_eq!(judge(5, Mode::Silly), Label::BabySteps);
        assert_eq!(judge(1, Mode::Silly), Label::BabySteps);
    }

    #[test]
    fn every_difficulty_gets_a_label_of_its_mode() {
        for mode in [Mode::Pro, Mode::Silly] {
            let allowed = labels_for(mode);
            let mut seen = [false; 3];
            for difficulty in MIN_DIFFICULTY..=MAX_DIFFICULTY {
                let label = judge(difficulty, mode);
                let slot = allowed
                    .iter()
                    .position(|candidate| *candidate == label)
                    .expect("label outside mode");
                seen[slot] = true;
            }
            assert!(seen.iter().all(|hit| *hit), "{mode} leaves a band unused");
        }
    }

    #[test]
    fn label_text_matches_serde_name() {
        let json = serde_json::to_string(&Label::HighImpact).unwrap();
        assert_eq!(json, "\"High Impact\"");
        assert_eq!(Label::BabySteps.to_string(), "Baby Steps");
    }
}
