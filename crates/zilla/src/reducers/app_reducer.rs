use crate::actions::{Action, GlobalAction};
use crate::reducers::{fetch_reducer, navigation_reducer, query_reducer};
use crate::state::Session;
use crate::task::BackgroundTask;

/// Root reducer that delegates to sub-reducers based on action type
/// Pure function: takes state and action, returns (new state, tasks to start)
pub fn reduce(mut state: Session, action: &Action) -> (Session, Vec<BackgroundTask>) {
    match action {
        Action::Global(GlobalAction::Quit) => {
            log::debug!("Quit requested in {:?}", state.mode);
            state.running = false;
            (state, vec![])
        }
        Action::Global(GlobalAction::Resize { width, height }) => (
            navigation_reducer::reduce_resize(state, *width, *height),
            vec![],
        ),
        // Raw keys are translated by the keyboard middleware
        Action::Global(GlobalAction::KeyPressed(_)) => (state, vec![]),
        Action::TextInput(input) => query_reducer::reduce_text_input(state, input),
        Action::Session(session) => (query_reducer::reduce_session(state, session), vec![]),
        Action::Navigate(nav) => (navigation_reducer::reduce_navigation(state, nav), vec![]),
        Action::Event(event) => fetch_reducer::reduce_event(state, event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Event, NavigationAction, SessionAction, TextInputAction};
    use crate::state::Mode;
    use chrono::Utc;
    use jira_client::Issue;
    use pretty_assertions::assert_eq;

    fn type_query(mut state: Session, query: &str) -> Session {
        for c in query.chars() {
            state = reduce(state, &Action::TextInput(TextInputAction::Char(c))).0;
        }
        state
    }

    fn submit(state: Session) -> (Session, Vec<BackgroundTask>) {
        reduce(state, &Action::TextInput(TextInputAction::Confirm))
    }

    fn three_issues() -> Vec<Issue> {
        vec![
            Issue::new("A-1", "First", "one"),
            Issue::new("A-2", "Second", "two"),
            Issue::new("A-3", "Third", "three"),
        ]
    }

    fn loaded(episode: u64, issues: Vec<Issue>) -> Action {
        Action::event(Event::IssuesLoaded {
            episode,
            issues,
            fetched_at: Utc::now(),
        })
    }

    fn failed(episode: u64) -> Action {
        Action::event(Event::IssuesFailed {
            episode,
            error: "the Jira API responded with HTTP 503: Service Unavailable".to_string(),
        })
    }

    fn nav(state: Session, action: NavigationAction) -> Session {
        reduce(state, &Action::Navigate(action)).0
    }

    fn browsing_with(issues: Vec<Issue>) -> Session {
        let state = type_query(Session::default(), "q");
        let (state, _) = submit(state);
        let episode = state.episode;
        reduce(state, &loaded(episode, issues)).0
    }

    #[test]
    fn test_empty_submit_never_changes_mode() {
        let (state, tasks) = submit(Session::default());
        assert_eq!(state.mode, Mode::Typing);
        assert!(tasks.is_empty());

        let (state, tasks) = submit(type_query(state, "   "));
        assert_eq!(state.mode, Mode::Typing);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_submit_schedules_exactly_one_fetch() {
        let (state, tasks) = submit(type_query(Session::default(), "my query"));
        assert_eq!(state.mode, Mode::Loading);
        let fetches = tasks
            .iter()
            .filter(|t| matches!(t, BackgroundTask::FetchIssues { .. }))
            .count();
        assert_eq!(fetches, 1);
        assert_eq!(
            tasks,
            vec![
                BackgroundTask::FetchIssues {
                    episode: state.episode
                },
                BackgroundTask::SpinnerTick {
                    episode: state.episode
                },
            ]
        );
    }

    #[test]
    fn test_second_submit_while_loading_is_ignored() {
        let (state, _) = submit(type_query(Session::default(), "my query"));
        let (again, tasks) = submit(state.clone());
        assert_eq!(again, state);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_superseded_result_is_discarded() {
        let (state, _) = submit(type_query(Session::default(), "my query"));
        let stale_episode = state.episode;

        // Cancel and resubmit: a newer episode begins
        let state = reduce(state, &Action::Session(SessionAction::Cancel)).0;
        assert_eq!(state.mode, Mode::Typing);
        let state = reduce(state, &loaded(stale_episode, three_issues())).0;
        assert!(state.issues.is_empty());
        assert_eq!(state.mode, Mode::Typing);

        let (state, _) = submit(state);
        assert_eq!(state.episode, stale_episode + 1);
        let state = reduce(state, &loaded(stale_episode, three_issues())).0;
        assert!(state.issues.is_empty());
        assert_eq!(state.mode, Mode::Loading);
    }

    #[test]
    fn test_failed_result_after_cancel_is_discarded() {
        let (state, _) = submit(type_query(Session::default(), "my query"));
        let stale_episode = state.episode;

        let state = reduce(state, &Action::Session(SessionAction::Cancel)).0;
        let state = reduce(state, &failed(stale_episode)).0;
        assert_eq!(state.mode, Mode::Typing);
        assert!(state.last_error.is_none());

        // A late failure must not clobber the newer fetch either
        let (state, _) = submit(state);
        let state = reduce(state, &failed(stale_episode)).0;
        assert_eq!(state.mode, Mode::Loading);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_resize_never_changes_mode() {
        let loading = submit(type_query(Session::default(), "q")).0;
        let episode = loading.episode;
        let states = vec![
            Session::default(),
            loading.clone(),
            browsing_with(three_issues()),
            reduce(loading, &failed(episode)).0,
        ];
        assert_eq!(states[3].mode, Mode::Error);
        for state in states {
            let mode = state.mode;
            let resized = reduce(
                state,
                &Action::Global(GlobalAction::Resize {
                    width: 100,
                    height: 30,
                }),
            )
            .0;
            assert_eq!(resized.mode, mode);
            assert_eq!(resized.viewport.width, 100);
            assert_eq!(resized.viewport.height, 30);
            assert_eq!(resized.viewport.list_width(), 33);
            assert_eq!(resized.viewport.detail_width(), 67);
        }
    }

    #[test]
    fn test_down_down_up_selects_second_issue() {
        let state = browsing_with(three_issues());
        assert_eq!(state.mode, Mode::Browsing);
        assert_eq!(state.selected, 0);

        let state = nav(state, NavigationAction::Next);
        let state = nav(state, NavigationAction::Next);
        let state = nav(state, NavigationAction::Previous);
        assert_eq!(state.selected, 1);
        assert_eq!(state.selected_issue().map(|i| i.key.as_str()), Some("A-2"));
    }

    #[test]
    fn test_selection_stays_in_bounds_for_any_navigation() {
        let moves = [
            NavigationAction::Next,
            NavigationAction::PageDown,
            NavigationAction::Previous,
            NavigationAction::ToBottom,
            NavigationAction::Next,
            NavigationAction::PageUp,
            NavigationAction::ToTop,
            NavigationAction::Previous,
            NavigationAction::PageDown,
            NavigationAction::Next,
        ];
        let mut state = browsing_with(three_issues());
        // Walk every prefix of every rotation of the move list
        for start in 0..moves.len() {
            for action in moves.iter().cycle().skip(start).take(moves.len() * 2) {
                state = nav(state, *action);
                assert!(state.selected < state.issues.len());
            }
        }
    }

    #[test]
    fn test_failed_fetch_then_reset_scenario() {
        let (state, tasks) = submit(type_query(Session::default(), "my query"));
        assert!(tasks.contains(&BackgroundTask::FetchIssues {
            episode: state.episode
        }));

        let error = "there was a problem making the request to the Jira API: connection refused";
        let state = reduce(
            state.clone(),
            &Action::event(Event::IssuesFailed {
                episode: state.episode,
                error: error.to_string(),
            }),
        )
        .0;
        assert_eq!(state.mode, Mode::Error);
        assert_eq!(state.last_error.as_deref(), Some(error));

        let state = reduce(state, &Action::Session(SessionAction::Reset)).0;
        assert_eq!(state.mode, Mode::Typing);
        assert_eq!(state.query_text, "");
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn test_reset_from_browsing_clears_results() {
        let state = nav(browsing_with(three_issues()), NavigationAction::ToBottom);
        let state = reduce(state, &Action::Session(SessionAction::Reset)).0;
        assert_eq!(state.mode, Mode::Typing);
        assert!(state.issues.is_empty());
        assert_eq!(state.selected, 0);
        assert_eq!(state.submitted_query, None);
        assert_eq!(state.fetched_at, None);
    }

    #[test]
    fn test_new_fetch_replaces_collection() {
        let state = browsing_with(three_issues());
        let state = reduce(state, &Action::Session(SessionAction::Reset)).0;
        let (state, _) = submit(type_query(state, "again"));
        let episode = state.episode;
        let state = reduce(
            state,
            &loaded(episode, vec![Issue::new("B-9", "Only", "")]),
        )
        .0;
        assert_eq!(state.issues, vec![Issue::new("B-9", "Only", "")]);
    }

    #[test]
    fn test_quit_from_every_mode() {
        let states = vec![
            Session::default(),
            submit(type_query(Session::default(), "q")).0,
            browsing_with(vec![]),
        ];
        for state in states {
            let state = reduce(state, &Action::Global(GlobalAction::Quit)).0;
            assert!(!state.running);
        }
    }
}
