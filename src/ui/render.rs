use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::catalog::CatalogItem;
use crate::state::{DetailScreenState, ListScreenState};
use crate::ui::app::{App, Screen};
use crate::ui::layout::{layout_regions, list_regions};
use crate::ui::theme::{ACCENT, BORDER, ERROR, FAVORITE, SELECTION_BG, TEXT, TEXT_DIM};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    draw_header(frame, app, header);
    match app.screen() {
        Screen::List => draw_list_screen(frame, app, body),
        Screen::Detail => draw_detail_screen(frame, app, body),
    }
    draw_footer(frame, app, footer);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        " shelfview ",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    if let ListScreenState::Success { updated_at, items } = app.list_snapshot() {
        spans.push(Span::styled(
            format!("│ {} items ", items.len()),
            Style::default().fg(TEXT_DIM),
        ));
        if !updated_at.is_empty() {
            spans.push(Span::styled(
                format!("│ updated {updated_at} "),
                Style::default().fg(TEXT_DIM),
            ));
        }
    }

    let header = Paragraph::new(Line::from(spans)).block(bordered());
    frame.render_widget(header, area);
}

fn draw_list_screen(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (search_area, list_area) = list_regions(area);
    draw_search_bar(frame, app, search_area);

    match app.list_snapshot() {
        ListScreenState::Loading => {
            draw_notice(frame, list_area, "Loading catalog…", TEXT_DIM);
        }
        ListScreenState::Error { message } => {
            draw_error(frame, list_area, &message);
        }
        ListScreenState::Success { .. } => {
            let filtered = app.filtered_snapshot();
            if filtered.is_empty() {
                draw_notice(frame, list_area, "No items match the search.", TEXT_DIM);
                return;
            }

            let favorites = app.favorites_snapshot();
            let rows: Vec<ListItem> = filtered
                .iter()
                .map(|item| ListItem::new(item_row(item, favorites.contains(&item.id))))
                .collect();

            let list = List::new(rows)
                .block(bordered())
                .highlight_style(
                    Style::default()
                        .bg(SELECTION_BG)
                        .add_modifier(Modifier::BOLD),
                );

            let mut cursor = ListState::default();
            cursor.select(Some(app.selected().min(filtered.len() - 1)));
            frame.render_stateful_widget(list, list_area, &mut cursor);
        }
    }
}

fn item_row(item: &CatalogItem, is_favorite: bool) -> Line<'static> {
    let marker = if is_favorite {
        Span::styled("★ ", Style::default().fg(FAVORITE))
    } else {
        Span::raw("  ")
    };
    Line::from(vec![
        marker,
        Span::styled(item.title.clone(), Style::default().fg(TEXT)),
        Span::styled(
            format!("  {}", item.category),
            Style::default().fg(TEXT_DIM),
        ),
        Span::styled(
            format!("  ${:.2}", item.price),
            Style::default().fg(TEXT_DIM),
        ),
        Span::styled(
            format!("  ✦ {:.1}", item.rating),
            Style::default().fg(TEXT_DIM),
        ),
    ])
}

fn draw_search_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let query = app.query_snapshot();
    let mut spans = vec![Span::styled(query, Style::default().fg(TEXT))];
    if app.searching() {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }

    let border_color = if app.searching() { ACCENT } else { BORDER };
    let search = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Search (/) "),
    );
    frame.render_widget(search, area);
}

fn draw_detail_screen(frame: &mut Frame<'_>, app: &App, area: Rect) {
    match app.detail_snapshot() {
        DetailScreenState::Loading => {
            draw_notice(frame, area, "Loading item…", TEXT_DIM);
        }
        DetailScreenState::Error { message } => {
            draw_error(frame, area, &message);
        }
        DetailScreenState::Success { item, is_favorite } => {
            let favorite_line = if is_favorite {
                Line::from(Span::styled("★ Favorite", Style::default().fg(FAVORITE)))
            } else {
                Line::from(Span::styled("☆ Not a favorite", Style::default().fg(TEXT_DIM)))
            };
            let lines = vec![
                Line::from(Span::styled(
                    item.title.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                detail_field("Category", &item.category),
                detail_field("Price", &format!("${:.2}", item.price)),
                detail_field("Rating", &format!("✦ {:.1}", item.rating)),
                Line::from(""),
                favorite_line,
            ];
            let detail = Paragraph::new(lines).block(bordered());
            frame.render_widget(detail, area);
        }
    }
}

fn detail_field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:>10}: "), Style::default().fg(TEXT_DIM)),
        Span::styled(value.to_string(), Style::default().fg(TEXT)),
    ])
}

fn draw_notice(frame: &mut Frame<'_>, area: Rect, message: &str, color: ratatui::style::Color) {
    let notice = Paragraph::new(Span::styled(message.to_string(), Style::default().fg(color)))
        .alignment(Alignment::Center)
        .block(bordered());
    frame.render_widget(notice, area);
}

fn draw_error(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(ERROR),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry.",
            Style::default().fg(TEXT_DIM),
        )),
    ];
    let error = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ERROR)),
        );
    frame.render_widget(error, area);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = match app.screen() {
        Screen::List if app.searching() => " type to search │ Enter/Esc: done",
        Screen::List => " /: search │ ↑/↓: move │ Enter: open │ f: favorite │ q: quit",
        Screen::Detail => " f: favorite │ Esc: back │ q: back",
    };
    let version = format!("v{VERSION} ");

    let hint_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hint_width)
        .saturating_sub(version_width);

    let style = Style::default().fg(TEXT_DIM);
    let line = Line::from(vec![
        Span::styled(hints, style),
        Span::styled(" ".repeat(padding), style),
        Span::styled(version, style),
    ]);

    let footer = Paragraph::new(line).block(bordered());
    frame.render_widget(footer, area);
}

fn bordered() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER))
}
