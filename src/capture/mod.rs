//! Screen capture via the DXGI Desktop Duplication API.
//!
//! This module provides:
//! - One-shot primary display capture (`capture_primary_output`)
//! - Window discovery by title keyword (`find_window_by_title`)
//!
//! The platform calls only compile on Windows; the matching logic is
//! kept platform-neutral so it builds and tests everywhere.

use crate::frame::Region;

/// A visible top-level window: its title and screen rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub title: String,
    pub rect: Region,
}

/// Returns the first candidate whose title contains `keyword` as a
/// case-sensitive substring.
///
/// First hit wins. Candidates arrive in OS enumeration order, which is
/// unspecified when several windows match — callers get whichever the
/// OS listed first.
pub fn first_matching_window<I>(candidates: I, keyword: &str) -> Option<WindowInfo>
where
    I: IntoIterator<Item = WindowInfo>,
{
    candidates.into_iter().find(|w| w.title.contains(keyword))
}

#[cfg(windows)]
pub mod duplication;
#[cfg(windows)]
pub mod window;

#[cfg(windows)]
pub use duplication::capture_primary_output;
#[cfg(windows)]
pub use window::find_window_by_title;

#[cfg(test)]
mod tests {
    use super::*;

    fn win(title: &str, left: i32) -> WindowInfo {
        WindowInfo {
            title: title.to_string(),
            rect: Region {
                left,
                top: 0,
                width: 100,
                height: 100,
            },
        }
    }

    #[test]
    fn test_first_hit_wins() {
        let candidates = vec![
            win("Task Manager", 0),
            win("Notepad - notes.txt", 10),
            win("Notepad - other.txt", 20),
        ];

        let found = first_matching_window(candidates, "Notepad").unwrap();
        assert_eq!(found.title, "Notepad - notes.txt");
        assert_eq!(found.rect.left, 10);
    }

    #[test]
    fn test_substring_not_equality() {
        let candidates = vec![win("My Editor (draft)", 0)];
        assert!(first_matching_window(candidates, "Editor").is_some());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let candidates = vec![win("notepad", 0)];
        assert!(first_matching_window(candidates, "Notepad").is_none());
    }

    #[test]
    fn test_no_match() {
        let candidates = vec![win("Calculator", 0), win("Settings", 0)];
        assert!(first_matching_window(candidates, "Notepad").is_none());
    }
}
