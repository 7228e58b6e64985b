use crate::config::TrackDisplayField;
use crate::engine::Track;

/// Build a display string for a track according to the provided `fields` and separator.
///
/// Blank fields are skipped; falls back to the title when nothing was produced.
pub fn display_from_fields(track: &Track, fields: &[TrackDisplayField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        let part = match f {
            TrackDisplayField::Title => track.title.trim().to_string(),
            TrackDisplayField::Artist => track.artist.trim().to_string(),
            TrackDisplayField::Album => track.album.trim().to_string(),
            TrackDisplayField::Duration => format_mmss(track.duration_secs),
        };
        if !part.is_empty() {
            parts.push(part);
        }
    }

    if parts.is_empty() {
        track.title.clone()
    } else {
        parts.join(sep)
    }
}

/// `MM:SS`, with minutes growing past two digits when needed.
pub fn format_mmss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
