use ratatui::layout::{Constraint, Layout, Rect};

/// Header / body / footer split used by every screen.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);
    (header, body, footer)
}

/// Search bar above the list body.
pub fn list_regions(body: Rect) -> (Rect, Rect) {
    let [search, list] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(body);
    (search, list)
}
