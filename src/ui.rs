//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, Focus};
use crate::catalog::{display_from_fields, format_mmss};
use crate::config::UiSettings;
use crate::engine::{NowPlaying, PlaybackInfo, QueueView, Track, TraversalOrder};

const CONTROLS: &[(&str, &str)] = &[
    ("tab", "switch pane"),
    ("j/k", "up/down"),
    ("enter/a", "add"),
    ("d/del", "remove"),
    ("space/p", "pause"),
    ("s", "skip"),
    ("r", "order"),
    ("q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// `elapsed / total` for the current track, `--:--` when nothing plays.
pub fn time_text(now: &NowPlaying) -> String {
    match (now.track(), now.elapsed_secs()) {
        (Some(track), Some(elapsed)) => format!(
            "{} / {}",
            format_mmss(elapsed),
            format_mmss(track.duration_secs)
        ),
        _ => "--:--".to_string(),
    }
}

/// Catalog row text; tracks already in the playlist carry a check mark.
pub fn catalog_label(track: &Track, queued: bool, ui: &UiSettings) -> String {
    let marker = if queued { "✓ " } else { "  " };
    format!(
        "{}{}",
        marker,
        display_from_fields(track, &ui.list_fields, &ui.list_separator)
    )
}

/// The "Playing Now" line: track text, time, and pause/order markers.
pub fn now_playing_text(info: &PlaybackInfo, ui: &UiSettings) -> String {
    let order = match info.order {
        TraversalOrder::Sequential => "Sequential",
        TraversalOrder::Random => "Random",
    };

    let song = match info.now_playing.track() {
        Some(t) => display_from_fields(t, &ui.now_playing_fields, &ui.now_playing_separator),
        None => "Nothing queued".to_string(),
    };

    let mut parts = vec![song, time_text(&info.now_playing)];
    if info.paused {
        parts.push("Paused".to_string());
    }
    parts.push(format!("Order: {}", order));
    parts.join(" • ")
}

/// Window of `height` rows around `selected`, as (start, end, selected offset).
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize, usize) {
    let selected = selected.min(total.saturating_sub(1));
    if total <= height || height == 0 {
        return (0, total, selected);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height, selected - start)
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().fg(Color::Yellow))
    } else {
        block
    }
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem<'static>>,
    selected: usize,
    block: Block<'_>,
    focused: bool,
) {
    // Only build the rows that fit, centered on the selection.
    let total = items.len();
    let height = area.height.saturating_sub(2) as usize;
    let (start, end, offset) = visible_window(total, height, selected);

    let visible: Vec<ListItem> = items.into_iter().skip(start).take(end - start).collect();
    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(visible)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if total > 0 {
        state.select(Some(offset));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the entire UI into the provided `frame`.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    info: &PlaybackInfo,
    queue: &QueueView,
    queued: &[bool],
    ui_settings: &UiSettings,
) {
    let footer_height = if ui_settings.show_help { 4 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(footer_height),
        ])
        .split(frame.area());
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    // Catalog
    let catalog_items: Vec<ListItem<'static>> = app
        .catalog
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let is_queued = queued.get(i).copied().unwrap_or(false);
            let item = ListItem::new(catalog_label(t, is_queued, ui_settings));
            if is_queued {
                item.style(Style::default().add_modifier(Modifier::DIM))
            } else {
                item
            }
        })
        .collect();
    let catalog_focused = app.focus == Focus::Catalog;
    render_list(
        frame,
        panes[0],
        catalog_items,
        app.catalog_selected,
        pane_block(&ui_settings.header_text, catalog_focused),
        catalog_focused,
    );

    // Playlist
    let playlist_items: Vec<ListItem<'static>> = queue
        .tracks
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let text = display_from_fields(t, &ui_settings.list_fields, &ui_settings.list_separator);
            let playing = queue.cursor == Some(i);
            let marker = if playing { "♪ " } else { "  " };
            let item = ListItem::new(format!("{}{}", marker, text));
            if playing && queue.removal_pending {
                item.style(Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT))
            } else if playing {
                item.style(Style::default().fg(Color::Green))
            } else {
                item
            }
        })
        .collect();
    let playlist_focused = app.focus == Focus::Playlist;
    let playlist_title = if queue.is_empty() {
        " Playlist (empty) ".to_string()
    } else {
        format!(" Playlist ({}) ", queue.len())
    };
    render_list(
        frame,
        panes[1],
        playlist_items,
        app.playlist_selected,
        pane_block(&playlist_title, playlist_focused),
        playlist_focused,
    );

    // Now playing
    let now = Paragraph::new(now_playing_text(info, ui_settings))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" Playing Now "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(now, chunks[1]);

    // Status and controls
    let mut footer_text = app.status.clone().unwrap_or_default();
    if ui_settings.show_help {
        footer_text.push('\n');
        footer_text.push_str(&controls_text());
    }
    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_text_shows_placeholder_when_idle() {
        assert_eq!(time_text(&NowPlaying::Nothing), "--:--");
        let now = NowPlaying::Track {
            track: Track::new("Queen", "Hot Space", "Under Pressure", 248),
            position: 0,
            elapsed_secs: 65,
        };
        assert_eq!(time_text(&now), "01:05 / 04:08");
    }

    #[test]
    fn catalog_label_marks_queued_tracks() {
        let ui = UiSettings::default();
        let t = Track::new("Queen", "Hot Space", "Under Pressure", 248);
        assert_eq!(catalog_label(&t, true, &ui), "✓ Under Pressure - Queen");
        assert_eq!(catalog_label(&t, false, &ui), "  Under Pressure - Queen");
    }

    #[test]
    fn now_playing_text_reports_pause_and_order() {
        let ui = UiSettings::default();
        let info = PlaybackInfo {
            now_playing: NowPlaying::Track {
                track: Track::new("Yes", "Fragile", "Roundabout", 515),
                position: 2,
                elapsed_secs: 0,
            },
            paused: true,
            order: TraversalOrder::Random,
            revision: 3,
        };
        assert_eq!(
            now_playing_text(&info, &ui),
            "Roundabout - Yes - Fragile • 00:00 / 08:35 • Paused • Order: Random"
        );

        let idle = PlaybackInfo::default();
        assert_eq!(
            now_playing_text(&idle, &ui),
            "Nothing queued • --:-- • Order: Sequential"
        );
    }

    #[test]
    fn visible_window_centers_the_selection() {
        assert_eq!(visible_window(5, 10, 3), (0, 5, 3));
        assert_eq!(visible_window(20, 5, 10), (8, 13, 2));
        assert_eq!(visible_window(20, 5, 19), (15, 20, 4));
        assert_eq!(visible_window(0, 5, 0), (0, 0, 0));
    }
}
