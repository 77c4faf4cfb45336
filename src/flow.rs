//! Action Outcomes
//!
//! Decides what each user action leaves behind once its requests settle.
//! The list is only ever replaced by a load; mutations never touch it.

use crate::error::ClientError;
use crate::models::Movie;
use crate::store::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Save,
    Delete,
    Open,
}

impl Action {
    fn failure_prefix(self) -> &'static str {
        match self {
            Action::Load => "Could not load the catalog",
            Action::Save => "Could not save the movie",
            Action::Delete => "Could not delete the movie",
            Action::Open => "Could not open the movie",
        }
    }
}

pub fn failure_notice(action: Action, err: &ClientError) -> Notice {
    Notice::error(format!("{}: {}", action.failure_prefix(), err))
}

pub fn success_notice(action: Action) -> Option<Notice> {
    match action {
        Action::Load => Some(Notice::success("Movies loaded")),
        Action::Save => Some(Notice::success("Movie saved")),
        Action::Delete => Some(Notice::success("Movie deleted")),
        Action::Open => None,
    }
}

/// A failed load empties the list instead of leaving it stale
pub fn settle_load(result: Result<Vec<Movie>, ClientError>, api_base_url: &str) -> (Vec<Movie>, Notice) {
    match result {
        Ok(movies) => (movies, Notice::success("Movies loaded")),
        Err(err) => {
            let mut notice = failure_notice(Action::Load, &err);
            if err.is_network_or_status() {
                notice.text.push_str(&format!(" (is the server running at {}?)", api_base_url));
            }
            (Vec::new(), notice)
        }
    }
}

/// What follows a create/update/delete request
#[derive(Debug, Clone, PartialEq)]
pub enum MutationStep {
    /// Reload the list, then show the notice if the reload succeeded
    Reload(Option<Notice>),
    Fail(Notice),
}

pub fn settle_mutation(action: Action, result: Result<(), ClientError>) -> MutationStep {
    match result {
        Ok(()) => MutationStep::Reload(success_notice(action)),
        Err(err) => MutationStep::Fail(failure_notice(action, &err)),
    }
}

/// Cached-policy lookup
pub fn find_movie(movies: &[Movie], id: u32) -> Result<Movie, ClientError> {
    movies
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .ok_or(ClientError::NotFound { id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::grid_view;
    use crate::store::NoticeKind;

    fn make_movie(id: u32) -> Movie {
        Movie {
            id,
            name: format!("Movie {}", id),
            category: None,
            year: None,
            director: None,
            duration: None,
            rating: Some(5.0),
        }
    }

    #[test]
    fn test_failed_load_clears_list() {
        let err = ClientError::Network("Failed to fetch".to_string());
        let (movies, notice) = settle_load(Err(err), "http://localhost:8000");

        assert!(movies.is_empty());
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("http://localhost:8000"));
        assert!(grid_view(&movies).show_placeholder);
    }

    #[test]
    fn test_successful_load_replaces_list() {
        let (movies, notice) = settle_load(Ok(vec![make_movie(1), make_movie(2)]), "");
        assert_eq!(movies.len(), 2);
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_delete_then_reload_removes_card() {
        let step = settle_mutation(Action::Delete, Ok(()));
        assert_eq!(step, MutationStep::Reload(Some(Notice::success("Movie deleted"))));

        // backend no longer returns #2
        let (movies, _) = settle_load(Ok(vec![make_movie(1), make_movie(3)]), "");
        let ids: Vec<u32> = grid_view(&movies).cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_failed_delete_reports_error() {
        let step = settle_mutation(
            Action::Delete,
            Err(ClientError::Status { status: 500, body: "db locked".to_string() }),
        );
        match step {
            MutationStep::Fail(notice) => {
                assert_eq!(notice.kind, NoticeKind::Error);
                assert_eq!(notice.text, "Could not delete the movie: HTTP 500: db locked");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_find_movie() {
        let movies = vec![make_movie(1), make_movie(2)];
        assert_eq!(find_movie(&movies, 2).map(|m| m.id), Ok(2));
        assert_eq!(find_movie(&movies, 9), Err(ClientError::NotFound { id: 9 }));
    }
}
