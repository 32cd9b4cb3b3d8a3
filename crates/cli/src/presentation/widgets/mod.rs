//! One widget module per screen.

pub mod download;
pub mod entity_list;
pub mod game_detail;
pub mod menu;
pub mod new_game;
pub mod session_detail;
pub mod session_list;

use logbook_core::Session;

/// Human date a session is titled with.
pub(crate) fn session_date(session: &Session) -> String {
    chrono::DateTime::from_timestamp(session.started_at, 0)
        .map(|when| when.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown date".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use logbook_core::SessionId;

    #[test]
    fn session_titles_use_the_calendar_date() {
        let session = Session {
            id: SessionId(0),
            started_at: 1_700_000_000,
        };
        assert_eq!(session_date(&session), "2023-11-14");
    }
}
