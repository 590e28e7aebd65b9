use serde::{Deserialize, Serialize};

/// Letter grades on the institutional A+ through F scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    DMinus,
    F,
}

/// Inclusive lower bounds, highest first. Anything below the last bound is an F.
const SCALE: [(f64, LetterGrade); 12] = [
    (97.0, LetterGrade::APlus),
    (93.0, LetterGrade::A),
    (90.0, LetterGrade::AMinus),
    (87.0, LetterGrade::BPlus),
    (83.0, LetterGrade::B),
    (80.0, LetterGrade::BMinus),
    (77.0, LetterGrade::CPlus),
    (73.0, LetterGrade::C),
    (70.0, LetterGrade::CMinus),
    (67.0, LetterGrade::DPlus),
    (63.0, LetterGrade::D),
    (60.0, LetterGrade::DMinus),
];

impl LetterGrade {
    /// Map a numeric grade onto the scale. Total over every f64: out-of-range
    /// values and NaN fall into F.
    pub fn from_numeric(numeric_grade: f64) -> Self {
        SCALE
            .iter()
            .find(|(lower_bound, _)| numeric_grade >= *lower_bound)
            .map(|(_, letter)| *letter)
            .unwrap_or(LetterGrade::F)
    }

    pub fn grade_points(self) -> f64 {
        match self {
            LetterGrade::APlus => 4.333,
            LetterGrade::A => 4.0,
            LetterGrade::AMinus => 3.667,
            LetterGrade::BPlus => 3.333,
            LetterGrade::B => 3.0,
            LetterGrade::BMinus => 2.67,
            LetterGrade::CPlus => 2.333,
            LetterGrade::C => 2.0,
            LetterGrade::CMinus => 1.667,
            LetterGrade::DPlus => 1.333,
            LetterGrade::D => 1.0,
            LetterGrade::DMinus => 0.667,
            LetterGrade::F => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::DMinus => "D-",
            LetterGrade::F => "F",
        }
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade points for a numeric grade, e.g. a 98 is an A+ worth 4.333.
pub fn grade_points(numeric_grade: f64) -> f64 {
    LetterGrade::from_numeric(numeric_grade).grade_points()
}
