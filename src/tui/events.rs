//! Event handling for the TUI interface
//!
//! This module handles keyboard input for the rundown viewer.

use super::app::AppState;
use crate::error::Result;
use crossterm::event::KeyCode;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handles keyboard input events
pub async fn handle_key_event(state_arc: Arc<Mutex<AppState>>, key_code: KeyCode) -> Result<()> {
    let mut state = state_arc.lock().await;

    // Handle global keys first
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.quit();
            return Ok(());
        }
        KeyCode::Char('h') | KeyCode::F(1) => {
            state.toggle_help();
            return Ok(());
        }
        KeyCode::Char('i') => {
            state.toggle_session_info();
            return Ok(());
        }
        _ => {}
    }

    // If a dialog is shown, handle those keys
    if state.show_help || state.show_session_info {
        match key_code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                state.close_dialogs();
            }
            _ => {}
        }
        return Ok(());
    }

    // Handle main interface keys
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous_item();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.next_item();
        }
        KeyCode::Enter => {
            state.jump_to_selected();
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            state.toggle_clock();
        }
        KeyCode::Char('r') => {
            state.reset_clock();
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{RundownTracker, Schedule, ScheduleItem};
    use crate::session::Session;
    use crate::utils::time::DiffStrategy;

    fn state_arc() -> Arc<Mutex<AppState>> {
        let schedule = Schedule::from_items(vec![
            ScheduleItem::new("Opening", "1:30"),
            ScheduleItem::new("News", "4:00"),
        ]);
        let tracker = RundownTracker::new(&schedule, DiffStrategy::default()).unwrap();
        let session = Session {
            id: "Rundown1234".to_string(),
            share_url: "https://rundown.example?id=Rundown1234".to_string(),
        };
        Arc::new(Mutex::new(AppState::new(schedule, tracker, session)))
    }

    #[tokio::test]
    async fn test_quit_key() {
        let state = state_arc();
        handle_key_event(Arc::clone(&state), KeyCode::Char('q'))
            .await
            .unwrap();
        assert!(state.lock().await.should_quit);
    }

    #[tokio::test]
    async fn test_navigation_keys() {
        let state = state_arc();
        handle_key_event(Arc::clone(&state), KeyCode::Down)
            .await
            .unwrap();
        assert_eq!(state.lock().await.selected_item, 1);
        handle_key_event(Arc::clone(&state), KeyCode::Char('k'))
            .await
            .unwrap();
        assert_eq!(state.lock().await.selected_item, 0);
    }

    #[tokio::test]
    async fn test_space_toggles_clock() {
        let state = state_arc();
        handle_key_event(Arc::clone(&state), KeyCode::Char(' '))
            .await
            .unwrap();
        assert!(state.lock().await.clock.is_running());
        handle_key_event(Arc::clone(&state), KeyCode::Char('p'))
            .await
            .unwrap();
        assert!(!state.lock().await.clock.is_running());
    }

    #[tokio::test]
    async fn test_dialog_swallows_main_keys() {
        let state = state_arc();
        handle_key_event(Arc::clone(&state), KeyCode::Char('h'))
            .await
            .unwrap();
        assert!(state.lock().await.show_help);

        // Space closes the dialog instead of starting the clock
        handle_key_event(Arc::clone(&state), KeyCode::Char(' '))
            .await
            .unwrap();
        let guard = state.lock().await;
        assert!(!guard.show_help);
        assert!(!guard.clock.is_running());
    }
}
