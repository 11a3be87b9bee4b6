//! Dashboard: aggregate counts over the student list.

use ugdash_types::{Student, StudentStatus};

use super::{LoadState, ViewError};
use crate::api::CrmApi;

/// Counts shown on the dashboard cards and quick filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Every student not archived
    pub total: usize,
    /// `exploring` and legacy `higher_intent`
    pub higher_intent: usize,
    pub shortlisting: usize,
    pub applying: usize,
    pub submitted: usize,
}

impl DashboardStats {
    pub fn from_students(students: &[Student]) -> Self {
        let mut stats = Self::default();
        for student in students {
            let status = student.status.as_ref();
            if status != Some(&StudentStatus::Archived) {
                stats.total += 1;
            }
            match status {
                Some(s) if s.is_higher_intent() => stats.higher_intent += 1,
                Some(StudentStatus::Shortlisting) => stats.shortlisting += 1,
                Some(StudentStatus::Applying) => stats.applying += 1,
                Some(StudentStatus::Submitted) => stats.submitted += 1,
                _ => {}
            }
        }
        stats
    }
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub state: LoadState<Vec<Student>>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            state: LoadState::Loading,
        }
    }
}

impl DashboardView {
    pub async fn load<A: CrmApi>(&mut self, api: &A) {
        self.state = match api.students().await {
            Ok(students) => LoadState::Ready(students),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch students for dashboard");
                LoadState::Failed(ViewError::from_api(&err))
            }
        };
    }

    /// Counts over whatever is loaded; zeros until the fetch succeeds.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_students(self.state.ready().map(Vec::as_slice).unwrap_or_default())
    }

    /// First `limit` students in backend order.
    pub fn recent(&self, limit: usize) -> &[Student] {
        let all = self.state.ready().map(Vec::as_slice).unwrap_or_default();
        &all[..limit.min(all.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;
    use crate::views::testing::{FakeApi, student};

    #[test]
    fn test_counts_by_status() {
        let students = vec![
            student("1", "A", "A", "exploring"),
            student("2", "B", "B", "higher_intent"),
            student("3", "C", "C", "shortlisting"),
            student("4", "D", "D", "applying"),
            student("5", "E", "E", "applying"),
            student("6", "F", "F", "submitted"),
            student("7", "G", "G", "archived"),
            Student {
                id: "8".to_string(),
                ..Default::default()
            },
        ];
        let stats = DashboardStats::from_students(&students);
        assert_eq!(
            stats,
            DashboardStats {
                total: 7,
                higher_intent: 2,
                shortlisting: 1,
                applying: 2,
                submitted: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_recent_is_capped() {
        let api = FakeApi::with_students(vec![
            student("1", "A", "A", "exploring"),
            student("2", "B", "B", "applying"),
        ]);
        let mut view = DashboardView::default();
        view.load(&api).await;
        assert_eq!(view.recent(3).len(), 2);
        assert_eq!(view.recent(1)[0].id, "1");
        assert_eq!(view.stats().total, 2);
    }

    #[tokio::test]
    async fn test_failure_yields_zero_stats() {
        let api = FakeApi::default();
        api.fail("students", ApiErrorKind::Network);
        let mut view = DashboardView::default();
        view.load(&api).await;
        assert_eq!(view.stats(), DashboardStats::default());
        assert!(view.recent(3).is_empty());
        assert_eq!(
            view.state.error().unwrap().kind,
            Some(ApiErrorKind::Network)
        );
    }
}
