use serde::{Deserialize, Serialize};

use crate::domain::grade::LetterGrade;
use crate::error::{CoreError, Result};

/// A course the student is taking this semester.
///
/// Courses have no identity beyond their fields: two courses with the same
/// name, credit hours and grade are indistinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub credit_hours: u32,
    /// Numeric grade, nominally 0-100
    pub grade: f64,
}

impl Course {
    pub fn new(name: impl Into<String>, credit_hours: u32, grade: f64) -> Self {
        Self {
            name: name.into(),
            credit_hours,
            grade,
        }
    }

    pub fn letter_grade(&self) -> LetterGrade {
        LetterGrade::from_numeric(self.grade)
    }

    /// Grade points earned by this course, weighted by its credit hours
    pub fn credit_points(&self) -> f64 {
        self.letter_grade().grade_points() * f64::from(self.credit_hours)
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} cr, {:.2})", self.name, self.credit_hours, self.grade)
    }
}

/// Insertion-ordered list of courses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseList {
    courses: Vec<Course>,
}

impl CourseList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a course and return the index it landed at
    pub fn add(&mut self, course: Course) -> usize {
        self.courses.push(course);
        self.courses.len() - 1
    }

    /// Remove every course whose name equals `name`, returning how many went
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.courses.len();
        self.courses.retain(|c| c.name != name);
        before - self.courses.len()
    }

    /// Remove exactly the course at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Course> {
        if index >= self.courses.len() {
            return Err(CoreError::CourseIndexOutOfRange {
                index,
                len: self.courses.len(),
            });
        }
        Ok(self.courses.remove(index))
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.courses.len();
        self.courses.clear();
        removed
    }

    pub fn get(&self, index: usize) -> Option<&Course> {
        self.courses.get(index)
    }

    pub fn as_slice(&self) -> &[Course] {
        &self.courses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Total credit hours across all courses, widened so any number of
    /// `u32` entries sums without overflow
    pub fn credit_hours(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.credit_hours)).sum()
    }
}

impl FromIterator<Course> for CourseList {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        Self {
            courses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CourseList {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}
