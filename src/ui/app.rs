use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::watch;

use crate::catalog::CatalogItem;
use crate::state::{
    CatalogDetailState, CatalogListState, DetailScreenState, ListScreenState,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    List,
    Detail,
}

/// View-layer state: which screen has focus, the list cursor, and the
/// search input mode. Everything rendered comes from the holders' watch
/// channels; `App` never caches derived data.
pub struct App {
    list: CatalogListState,
    detail: CatalogDetailState,
    list_state_rx: watch::Receiver<ListScreenState>,
    filtered_rx: watch::Receiver<Vec<CatalogItem>>,
    query_rx: watch::Receiver<String>,
    favorites_rx: watch::Receiver<HashSet<String>>,
    detail_state_rx: watch::Receiver<DetailScreenState>,
    screen: Screen,
    selected: usize,
    searching: bool,
    should_quit: bool,
}

impl App {
    pub fn new(list: CatalogListState, detail: CatalogDetailState) -> Self {
        let list_state_rx = list.state();
        let filtered_rx = list.filtered_items();
        let query_rx = list.search_query();
        let favorites_rx = list.favorites();
        let detail_state_rx = detail.state();
        Self {
            list,
            detail,
            list_state_rx,
            filtered_rx,
            query_rx,
            favorites_rx,
            detail_state_rx,
            screen: Screen::List,
            selected: 0,
            searching: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn searching(&self) -> bool {
        self.searching
    }

    pub fn list_snapshot(&self) -> ListScreenState {
        self.list_state_rx.borrow().clone()
    }

    pub fn filtered_snapshot(&self) -> Vec<CatalogItem> {
        self.filtered_rx.borrow().clone()
    }

    pub fn query_snapshot(&self) -> String {
        self.query_rx.borrow().clone()
    }

    pub fn favorites_snapshot(&self) -> HashSet<String> {
        self.favorites_rx.borrow().clone()
    }

    pub fn detail_snapshot(&self) -> DetailScreenState {
        self.detail_state_rx.borrow().clone()
    }

    pub fn selected_item(&self) -> Option<CatalogItem> {
        self.filtered_rx.borrow().get(self.selected).cloned()
    }

    /// The filtered list can shrink under the cursor after a debounce
    /// fires, so the cursor is re-clamped every tick.
    pub fn on_tick(&mut self) {
        self.clamp_selection();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match self.screen {
            Screen::List => self.on_list_key(key),
            Screen::Detail => self.on_detail_key(key),
        }
    }

    fn on_list_key(&mut self, key: KeyEvent) {
        if self.searching {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.searching = false,
                KeyCode::Backspace => {
                    let mut query = self.query_rx.borrow().clone();
                    query.pop();
                    self.list.set_search_query(query);
                }
                KeyCode::Char(c) => {
                    let mut query = self.query_rx.borrow().clone();
                    query.push(c);
                    self.list.set_search_query(query);
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = self.selected.saturating_add(1);
                self.clamp_selection();
            }
            KeyCode::Char('f') => {
                if let Some(item) = self.selected_item() {
                    self.list.toggle_favorite(&item.id);
                }
            }
            KeyCode::Char('r') => {
                if self.list_state_rx.borrow().error_message().is_some() {
                    self.list.load();
                }
            }
            KeyCode::Enter => {
                if let Some(item) = self.selected_item() {
                    self.detail.set_item_id(&item.id);
                    self.screen = Screen::Detail;
                }
            }
            _ => {}
        }
    }

    fn on_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
                self.screen = Screen::List;
            }
            KeyCode::Char('f') | KeyCode::Char(' ') => self.detail.toggle_favorite(),
            KeyCode::Char('r') => {
                if self.detail_state_rx.borrow().error_message().is_some() {
                    self.detail.reload();
                }
            }
            _ => {}
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered_rx.borrow().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
