//! # Actions
//!
//! Every user intent becomes an `Action`.
//! User confirms the add dialog? That's `Action::Add(title)`.
//! User flips a row's switch? That's `Action::ToggleDone(row)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the Display Surface what to redraw. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  Effect (or StoreError)
//! ```

use log::{debug, warn};

use crate::core::state::App;
use crate::core::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Edit { index: usize, title: String },
    ToggleDone(usize),
    Delete(usize),
    Quit,
}

/// What the event loop must do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Redraw every row.
    Reload,
    /// Drop a single row; rows after it move up.
    RemoveRow(usize),
    Quit,
}

/// Apply one action. Rejected actions leave the list as it was and are
/// returned to the caller; the status line carries the error text.
pub fn update(app: &mut App, action: Action) -> Result<Effect, StoreError> {
    debug!("update: {:?}", action);
    let result = apply(app, action);
    match &result {
        Ok(_) => app.error = None,
        Err(e) => {
            warn!("Action rejected: {}", e);
            app.error = Some(e.to_string());
        }
    }
    result
}

fn apply(app: &mut App, action: Action) -> Result<Effect, StoreError> {
    match action {
        Action::Add(title) => {
            app.store.add(title);
            app.status_message = format!("Added item {}", app.store.len());
            Ok(Effect::Reload)
        }
        Action::Edit { index, title } => {
            app.store.edit(index, title)?;
            app.status_message = format!("Edited item {}", index + 1);
            Ok(Effect::Reload)
        }
        Action::ToggleDone(index) => {
            let is_done = app.store.toggle_done(index)?;
            app.status_message = if is_done {
                format!("Item {} done", index + 1)
            } else {
                format!("Item {} reopened", index + 1)
            };
            Ok(Effect::Reload)
        }
        Action::Delete(index) => {
            let removed = app.store.delete(index)?;
            app.status_message = format!("Deleted \"{}\"", removed.title);
            Ok(Effect::RemoveRow(index))
        }
        Action::Quit => Ok(Effect::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{snapshot, test_app};

    #[test]
    fn test_scenario_through_update() {
        let mut app = test_app();

        assert_eq!(update(&mut app, Action::ToggleDone(0)), Ok(Effect::Reload));
        assert_eq!(
            update(
                &mut app,
                Action::Edit {
                    index: 1,
                    title: "과제 끝내기".to_string()
                }
            ),
            Ok(Effect::Reload)
        );
        assert_eq!(update(&mut app, Action::Delete(2)), Ok(Effect::RemoveRow(2)));
        assert_eq!(
            update(&mut app, Action::Add("영화보기".to_string())),
            Ok(Effect::Reload)
        );

        assert_eq!(
            snapshot(&app.store),
            vec![
                ("카페가기".to_string(), true),
                ("과제 끝내기".to_string(), false),
                ("산책하기".to_string(), false),
                ("영화보기".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_rejected_action_sets_error_and_keeps_list() {
        let mut app = test_app();
        let before = snapshot(&app.store);

        let result = update(&mut app, Action::Delete(9));

        assert_eq!(result, Err(StoreError::OutOfRange { index: 9, len: 4 }));
        assert_eq!(app.error.as_deref(), Some("index 9 out of range for list of 4 items"));
        assert_eq!(snapshot(&app.store), before);
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut app = test_app();
        let _ = update(&mut app, Action::ToggleDone(42));
        assert!(app.error.is_some());

        update(&mut app, Action::ToggleDone(0)).unwrap();
        assert!(app.error.is_none());
        assert_eq!(app.status_message, "Item 1 done");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Ok(Effect::Quit));
        assert_eq!(app.store.len(), 4);
    }
}
