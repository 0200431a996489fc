use crate::config::Config;
use crate::palette::{Palette, PaletteStore};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Generator,
    Saved,
    Help,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Generator, Screen::Saved, Screen::Help];

    pub fn next(self) -> Self {
        match self {
            Screen::Generator => Screen::Saved,
            Screen::Saved => Screen::Help,
            Screen::Help => Screen::Generator,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Screen::Generator => Screen::Help,
            Screen::Saved => Screen::Generator,
            Screen::Help => Screen::Saved,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Generator => 0,
            Screen::Saved => 1,
            Screen::Help => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// Cursor and marks for the saved palettes list
#[derive(Debug, Clone, Default)]
pub struct SavedListState {
    pub selected: usize,
    pub scroll_offset: usize,
    pub marked: BTreeSet<usize>,
    /// Rows the list had on the last draw; 0 before the first draw.
    pub viewport_height: usize,
}

impl SavedListState {
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn toggle_mark(&mut self, len: usize) {
        if self.selected >= len {
            return;
        }
        if !self.marked.remove(&self.selected) {
            self.marked.insert(self.selected);
        }
    }

    /// Positions a delete should remove: the marks, or the cursor row when nothing is marked.
    pub fn delete_targets(&self, len: usize) -> BTreeSet<usize> {
        if !self.marked.is_empty() {
            self.marked.clone()
        } else if len > 0 {
            BTreeSet::from([self.selected])
        } else {
            BTreeSet::new()
        }
    }

    /// Reset marks and keep the cursor inside a list of `len` rows.
    pub fn after_delete(&mut self, len: usize) {
        self.marked.clear();
        self.selected = self.selected.min(len.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.selected);
    }

    /// Record the rendered list height and pull the cursor back into view.
    pub fn set_viewport(&mut self, height: usize) {
        self.viewport_height = height;
        self.update_scroll(height);
    }

    pub fn keep_cursor_visible(&mut self) {
        self.update_scroll(self.viewport_height);
    }

    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    pub screen: Screen,

    // Generation
    pub current: Palette,
    pub color_count: u32,
    pub generating: bool,
    /// Fraction of the simulated delay elapsed, in `[0.0, 1.0]`.
    pub progress: f64,
    pub scroll_offset: usize,

    // Toggles
    pub show_opacity: bool,
    pub show_max: bool,

    // Saved palettes
    pub store: PaletteStore,
    pub saved_list: SavedListState,

    pub toast: Option<Toast>,
    pub status: String,
}

impl AppState {
    pub fn new(cfg: &Config) -> Self {
        let max = cfg.generator.max_for(cfg.ui.show_max);
        let color_count = cfg
            .ui
            .color_count
            .unwrap_or(cfg.generator.default_count)
            .clamp(1, max);

        Self {
            should_quit: false,
            tick: 0,
            screen: Screen::Generator,
            current: Palette::default(),
            color_count,
            generating: false,
            progress: 0.0,
            scroll_offset: 0,
            show_opacity: cfg.ui.show_opacity,
            show_max: cfg.ui.show_max,
            store: PaletteStore::new(),
            saved_list: SavedListState::default(),
            toast: None,
            status: String::new(),
        }
    }

    /// Claim the generation slot. Returns false if a generation is already running.
    pub fn begin_generation(&mut self) -> bool {
        if self.generating {
            return false;
        }
        self.generating = true;
        self.progress = 0.0;
        true
    }

    pub fn set_progress(&mut self, done: u32, total: u32) {
        if self.generating && total > 0 {
            self.progress = (f64::from(done) / f64::from(total)).clamp(0.0, 1.0);
        }
    }

    /// Install a finished palette and release the generation slot.
    pub fn finish_generation(&mut self, palette: Palette) {
        self.current = palette;
        self.scroll_offset = 0;
        self.generating = false;
    }

    pub fn current_is_saved(&self) -> bool {
        !self.current.is_empty() && self.store.contains(&self.current)
    }
}
