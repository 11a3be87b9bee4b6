//! Students list view: client-side filtering over the fetched list.

use std::collections::BTreeSet;

use ugdash_types::{Student, StudentStatus};

use super::{LoadState, ViewError};
use crate::api::CrmApi;

/// Active filters. Empty text fields and `None` status are inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    /// Case-insensitive substring of first name, last name, or email
    pub search: String,
    pub status: Option<StudentStatus>,
    /// Case-insensitive substring of country
    pub country: String,
    /// Exact grade
    pub grade: String,
}

impl StudentFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.status.is_none()
            && self.country.is_empty()
            && self.grade.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, student: &Student) -> bool {
        if !self.search.is_empty() {
            let term = self.search.to_lowercase();
            let hit = [&student.first_name, &student.last_name, &student.email]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        if let Some(status) = &self.status
            && student.status.as_ref() != Some(status)
        {
            return false;
        }

        if !self.country.is_empty() {
            let term = self.country.to_lowercase();
            let hit = student
                .country
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        if !self.grade.is_empty() && student.grade.as_deref() != Some(self.grade.as_str()) {
            return false;
        }

        true
    }

    /// Matching students in their original order.
    pub fn apply<'a>(&self, students: &'a [Student]) -> Vec<&'a Student> {
        students.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Distinct non-empty countries, sorted.
pub fn unique_countries(students: &[Student]) -> Vec<String> {
    unique(students.iter().filter_map(|s| s.country.as_deref()))
}

/// Distinct non-empty grades, sorted.
pub fn unique_grades(students: &[Student]) -> Vec<String> {
    unique(students.iter().filter_map(|s| s.grade.as_deref()))
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// State of the students screen.
#[derive(Debug, Clone)]
pub struct StudentsView {
    pub state: LoadState<Vec<Student>>,
    pub filter: StudentFilter,
}

impl StudentsView {
    pub const EMPTY_TITLE: &str = "No students found";
    pub const EMPTY_NONE_ADDED: &str = "No students have been added yet.";
    pub const EMPTY_FILTERED: &str = "Try adjusting your filters.";

    pub fn new(filter: StudentFilter) -> Self {
        Self {
            state: LoadState::Loading,
            filter,
        }
    }

    /// Fetches the full student list.
    pub async fn load<A: CrmApi>(&mut self, api: &A) {
        self.state = LoadState::Loading;
        self.state = match api.students().await {
            Ok(students) => {
                tracing::debug!(count = students.len(), "students loaded");
                LoadState::Ready(students)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch students");
                LoadState::Failed(ViewError::from_api(&err))
            }
        };
    }

    pub fn all(&self) -> &[Student] {
        self.state.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// Students passing the current filter, recomputed on every call.
    pub fn visible(&self) -> Vec<&Student> {
        self.filter.apply(self.all())
    }

    /// Empty-state copy, or `None` when there is something to show.
    pub fn empty_message(&self) -> Option<(&'static str, &'static str)> {
        if !self.visible().is_empty() {
            return None;
        }
        let hint = if self.all().is_empty() {
            Self::EMPTY_NONE_ADDED
        } else {
            Self::EMPTY_FILTERED
        };
        Some((Self::EMPTY_TITLE, hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;
    use crate::views::testing::{FakeApi, student};

    fn roster() -> Vec<Student> {
        let mut ana = student("1", "Ana", "Souza", "applying");
        ana.country = Some("Brazil".to_string());
        ana.grade = Some("11".to_string());
        let mut john = student("2", "John", "Silva", "shortlisting");
        john.country = Some("Portugal".to_string());
        john.grade = Some("12".to_string());
        let mut mei = student("3", "Mei", "Tanaka", "applying");
        mei.country = Some("Japan".to_string());
        mei.grade = Some("12".to_string());
        let mut pedro = student("4", "Pedro", "Lima", "submitted");
        pedro.country = Some("brazil".to_string());
        vec![ana, john, mei, pedro]
    }

    fn ids(students: &[&Student]) -> Vec<String> {
        students.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let students = roster();
        let filter = StudentFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter.apply(&students)), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_status_filter_is_exact_and_ordered() {
        let students = roster();
        let filter = StudentFilter {
            status: Some(StudentStatus::Applying),
            ..Default::default()
        };
        let visible = filter.apply(&students);
        assert_eq!(ids(&visible), ["1", "3"]);
        assert!(
            visible
                .iter()
                .all(|s| s.status == Some(StudentStatus::Applying))
        );
    }

    #[test]
    fn test_search_matches_names_and_email_case_insensitively() {
        let students = roster();
        let by_last = StudentFilter {
            search: "SILVA".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_last.apply(&students)), ["2"]);

        let by_email = StudentFilter {
            search: "mei@".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_email.apply(&students)), ["3"]);
    }

    #[test]
    fn test_country_substring_and_grade_equality_combine() {
        let students = roster();
        let filter = StudentFilter {
            country: "bra".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&students)), ["1", "4"]);

        let filter = StudentFilter {
            country: "bra".to_string(),
            grade: "11".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&students)), ["1"]);

        // Grade is equality, not substring.
        let filter = StudentFilter {
            grade: "1".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&students).is_empty());
    }

    #[test]
    fn test_records_missing_fields_never_match_active_filters() {
        let students = vec![Student {
            id: "x".to_string(),
            ..Default::default()
        }];
        let filter = StudentFilter {
            search: "a".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&students).is_empty());
    }

    #[test]
    fn test_clear_resets() {
        let mut filter = StudentFilter {
            search: "a".to_string(),
            status: Some(StudentStatus::Submitted),
            country: "b".to_string(),
            grade: "c".to_string(),
        };
        filter.clear();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_unique_options_sorted_and_deduplicated() {
        let students = roster();
        assert_eq!(
            unique_countries(&students),
            ["Brazil", "Japan", "Portugal", "brazil"]
        );
        assert_eq!(unique_grades(&students), ["11", "12"]);
    }

    #[tokio::test]
    async fn test_view_empty_messages() {
        let api = FakeApi::with_students(roster());
        let mut view = StudentsView::new(StudentFilter {
            search: "nobody".to_string(),
            ..Default::default()
        });
        view.load(&api).await;
        assert_eq!(
            view.empty_message(),
            Some((StudentsView::EMPTY_TITLE, StudentsView::EMPTY_FILTERED))
        );

        view.filter.clear();
        assert!(view.empty_message().is_none());
        assert_eq!(view.visible().len(), 4);

        let empty = FakeApi::default();
        let mut view = StudentsView::new(StudentFilter::default());
        view.load(&empty).await;
        assert_eq!(
            view.empty_message(),
            Some((StudentsView::EMPTY_TITLE, StudentsView::EMPTY_NONE_ADDED))
        );
    }

    #[tokio::test]
    async fn test_view_load_failure_is_reported() {
        let api = FakeApi::default();
        api.fail("students", ApiErrorKind::Unauthorized);
        let mut view = StudentsView::new(StudentFilter::default());
        view.load(&api).await;
        let err = view.state.error().unwrap();
        assert_eq!(err.kind, Some(ApiErrorKind::Unauthorized));
        assert!(view.all().is_empty());
    }
}
