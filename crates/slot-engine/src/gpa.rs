//! Letter grades and credit-weighted GPA.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::Course;
use crate::error::{Result, SlotError};

/// A letter grade on the 4.0 scale. There is no `A+` or `D-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
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
    F,
}

impl Grade {
    pub const ALL: [Grade; 11] = [
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::DPlus,
        Grade::D,
        Grade::F,
    ];

    pub fn points(self) -> f64 {
        match self {
            Grade::A => 4.0,
            Grade::AMinus => 3.7,
            Grade::BPlus => 3.3,
            Grade::B => 3.0,
            Grade::BMinus => 2.7,
            Grade::CPlus => 2.3,
            Grade::C => 2.0,
            Grade::CMinus => 1.7,
            Grade::DPlus => 1.3,
            Grade::D => 1.0,
            Grade::F => 0.0,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Grade {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Grade::ALL
            .into_iter()
            .find(|g| g.letter().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SlotError::UnknownGrade(s.to_string()))
    }
}

impl TryFrom<String> for Grade {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(value: Grade) -> Self {
        value.letter().to_string()
    }
}

/// A course's credits and, once known, its grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeEntry {
    pub course_id: String,
    #[serde(default)]
    pub course_name: String,
    pub credits: u32,
    /// `null`, a missing field, or `""` all mean not yet graded.
    #[serde(default, deserialize_with = "deserialize_grade")]
    pub grade: Option<Grade>,
}

fn deserialize_grade<'de, D>(deserializer: D) -> std::result::Result<Option<Grade>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(letter) => letter.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Credit-weighted mean of the graded entries, rounded to two decimals.
///
/// Ungraded entries are ignored. Returns `0.0` when nothing graded carries
/// credit.
pub fn compute_gpa(entries: &[GradeEntry]) -> f64 {
    let (points, credits) = entries
        .iter()
        .filter_map(|e| e.grade.map(|g| (g.points(), e.credits)))
        .fold((0.0, 0u64), |(points, credits), (grade_points, c)| {
            (points + grade_points * f64::from(c), credits + u64::from(c))
        });

    if credits == 0 {
        return 0.0;
    }
    (points / credits as f64 * 100.0).round() / 100.0
}

/// One grade entry per distinct course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeSheet {
    entries: Vec<GradeEntry>,
}

impl GradeSheet {
    /// Ungraded entries for the given courses; a repeated course id keeps its
    /// first occurrence.
    pub fn from_courses<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Self {
        let mut entries: Vec<GradeEntry> = Vec::new();
        for course in courses {
            if entries.iter().any(|e| e.course_id == course.id) {
                continue;
            }
            entries.push(GradeEntry {
                course_id: course.id.clone(),
                course_name: course.name.clone(),
                credits: course.credits,
                grade: None,
            });
        }
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SlotError::GradeSheet)
    }

    pub fn entries(&self) -> &[GradeEntry] {
        &self.entries
    }

    /// Record a grade. Returns `false` when the course is not on the sheet.
    pub fn set_grade(&mut self, course_id: &str, grade: Grade) -> bool {
        match self.entries.iter_mut().find(|e| e.course_id == course_id) {
            Some(entry) => {
                entry.grade = Some(grade);
                true
            }
            None => false,
        }
    }

    pub fn gpa(&self) -> f64 {
        compute_gpa(&self.entries)
    }
}
