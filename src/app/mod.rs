pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::input;
use crate::palette;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, GeneratorEvent};
use state::{AppState, Screen, Toast};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct App {
    cfg: Config,
    config_path: PathBuf,
    state: AppState,
}

impl App {
    pub fn new(cfg: Config, config_path: PathBuf) -> Self {
        let state = AppState::new(&cfg);
        Self {
            cfg,
            config_path,
            state,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(64);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);

        tui::draw(terminal, &self.cfg, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            self.state.tick = self.state.tick.wrapping_add(1);
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Generator(ge) => self.handle_generator(ge),
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.cfg, &mut self.state)?;
        }

        self.save_state_on_quit();
        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        self.cfg.ui.color_count = Some(self.state.color_count);
        self.cfg.ui.show_opacity = self.state.show_opacity;
        self.cfg.ui.show_max = self.state.show_max;

        if let Err(e) = crate::config::save(&self.cfg, Some(&self.config_path)) {
            tracing::warn!("failed to save config: {e:#}");
        }
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Generate => self.start_generation(tx),
            _ => self.reduce(action),
        }
    }

    fn start_generation(&mut self, tx: &mpsc::Sender<Event>) {
        if !self.state.begin_generation() {
            self.state.status = "Already generating".into();
            return;
        }
        let count = self.state.color_count;
        tracing::debug!(count, "generating palette");
        self.state.status = format!("Generating {count} colors...");
        spawn_generation(
            i64::from(count),
            Duration::from_millis(self.cfg.generator.delay_ms),
            tx.clone(),
        );
    }

    fn handle_generator(&mut self, ev: GeneratorEvent) {
        match ev {
            GeneratorEvent::Progress { done, total } => self.state.set_progress(done, total),
            GeneratorEvent::Finished(Ok(palette)) => {
                tracing::debug!(len = palette.len(), "palette ready");
                self.state.status = format!("Generated {} colors", palette.len());
                self.state.finish_generation(palette);
            }
            GeneratorEvent::Finished(Err(e)) => {
                self.state.generating = false;
                self.state.toast = Some(Toast::error(e.to_string()));
            }
        }
    }

    fn count_max(&self) -> u32 {
        self.cfg.generator.max_for(self.state.show_max)
    }

    fn set_count(&mut self, count: i64) {
        let max = i64::from(self.count_max());
        self.state.color_count = count.clamp(1, max) as u32;
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::NextScreen => self.state.screen = self.state.screen.next(),
            Action::PrevScreen => self.state.screen = self.state.screen.prev(),
            Action::SetScreen(screen) => self.state.screen = screen,
            Action::ListUp => match self.state.screen {
                Screen::Saved => {
                    self.state.saved_list.select_prev();
                    self.state.saved_list.keep_cursor_visible();
                }
                _ => self.state.scroll_offset = self.state.scroll_offset.saturating_sub(1),
            },
            Action::ListDown => match self.state.screen {
                Screen::Saved => {
                    self.state.saved_list.select_next(self.state.store.len());
                    self.state.saved_list.keep_cursor_visible();
                }
                _ => {
                    let last = self.state.current.len().saturating_sub(1);
                    self.state.scroll_offset = (self.state.scroll_offset + 1).min(last);
                }
            },
            Action::GoTop => match self.state.screen {
                Screen::Saved => {
                    self.state.saved_list.selected = 0;
                    self.state.saved_list.scroll_offset = 0;
                }
                _ => self.state.scroll_offset = 0,
            },
            Action::GoBottom => match self.state.screen {
                Screen::Saved => {
                    self.state.saved_list.selected = self.state.store.len().saturating_sub(1);
                    self.state.saved_list.keep_cursor_visible();
                }
                _ => self.state.scroll_offset = self.state.current.len().saturating_sub(1),
            },
            Action::CountUp => self.set_count(i64::from(self.state.color_count) + 1),
            Action::CountDown => self.set_count(i64::from(self.state.color_count) - 1),
            Action::CountUpLarge => self.set_count(i64::from(self.state.color_count) + 10),
            Action::CountDownLarge => self.set_count(i64::from(self.state.color_count) - 10),
            Action::ToggleOpacity => self.state.show_opacity = !self.state.show_opacity,
            Action::ToggleMax => {
                self.state.show_max = !self.state.show_max;
                // Shrinking the range pulls the count back inside it.
                self.set_count(i64::from(self.state.color_count));
            }
            Action::SavePalette => self.save_current(),
            Action::ClearPalette => {
                self.state.current = palette::Palette::default();
                self.state.scroll_offset = 0;
            }
            Action::ToggleMark => {
                let len = self.state.store.len();
                self.state.saved_list.toggle_mark(len);
            }
            Action::DeleteSelected => self.delete_selected(),
            Action::Generate => {} // handled in handle_action
            Action::Resize => {}
        }
    }

    fn save_current(&mut self) {
        if self.state.current.is_empty() {
            self.state.status = "Generate a palette first".into();
            return;
        }
        let already_saved = self.state.current_is_saved();
        self.state.store.save(self.state.current.clone());
        tracing::debug!(total = self.state.store.len(), "saved palette");
        self.state.toast = Some(Toast::success(if already_saved {
            "Saved palette again"
        } else {
            "Saved palette"
        }));
    }

    fn delete_selected(&mut self) {
        let targets = self.state.saved_list.delete_targets(self.state.store.len());
        if targets.is_empty() {
            return;
        }
        let count = targets.len();
        match self.state.store.delete(targets) {
            Ok(()) => {
                tracing::debug!(count, remaining = self.state.store.len(), "deleted palettes");
                self.state.saved_list.after_delete(self.state.store.len());
                self.state.toast = Some(Toast::success(format!("Deleted {count} palette(s)")));
            }
            Err(e) => {
                self.state.toast = Some(Toast::error(e.to_string()));
            }
        }
    }
}

/// Spacing of progress events while the simulated delay runs.
const PROGRESS_STEP: Duration = Duration::from_millis(50);

/// Generate `count` colors after `delay`, then hand the result back over `tx` exactly once.
///
/// While waiting, `Progress` events are sent so the UI keeps redrawing.
pub fn spawn_generation(count: i64, delay: Duration, tx: mpsc::Sender<Event>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let total = progress_steps(delay);
        for done in 1..=total {
            tokio::time::sleep(delay / total).await;
            if done == total {
                break;
            }
            let progress = GeneratorEvent::Progress { done, total };
            if tx.send(Event::Generator(progress)).await.is_err() {
                tracing::debug!("event loop gone; abandoning generation");
                return;
            }
        }
        let result = palette::generate(count);
        if tx
            .send(Event::Generator(GeneratorEvent::Finished(result)))
            .await
            .is_err()
        {
            tracing::debug!("event loop gone; dropping generated palette");
        }
    })
}

fn progress_steps(delay: Duration) -> u32 {
    if delay.is_zero() {
        return 0;
    }
    let steps = delay.as_millis() / PROGRESS_STEP.as_millis();
    u32::try_from(steps).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Color, Palette};

    fn make_app() -> App {
        let mut cfg = Config::default();
        cfg.generator.delay_ms = 0;
        App::new(cfg, std::env::temp_dir().join("swatchgen-unused.toml"))
    }

    fn make_palette(shade: f64) -> Palette {
        Palette::new(vec![Color::new(shade, shade, shade, 1.0)])
    }

    async fn next_generator_event(rx: &mut mpsc::Receiver<Event>) -> GeneratorEvent {
        match rx.recv().await {
            Some(Event::Generator(ev)) => ev,
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_delivers_palette() {
        let mut app = make_app();
        let (tx, mut rx) = mpsc::channel(8);
        app.state.color_count = 7;

        app.handle_action(Action::Generate, &tx);
        assert!(app.state.generating);

        let ev = next_generator_event(&mut rx).await;
        app.handle_generator(ev);
        assert!(!app.state.generating);
        assert_eq!(app.state.current.len(), 7);
    }

    #[tokio::test]
    async fn test_overlapping_generate_is_refused() {
        let mut app = make_app();
        let (tx, mut rx) = mpsc::channel(8);

        app.handle_action(Action::Generate, &tx);
        app.handle_action(Action::Generate, &tx);
        assert_eq!(app.state.status, "Already generating");

        let ev = next_generator_event(&mut rx).await;
        app.handle_generator(ev);
        drop(tx);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_spawn_generation_reports_invalid_count() {
        let (tx, mut rx) = mpsc::channel(1);
        spawn_generation(-3, Duration::ZERO, tx).await.unwrap();
        match next_generator_event(&mut rx).await {
            GeneratorEvent::Finished(Err(e)) => {
                assert_eq!(e, palette::PaletteError::InvalidArgument { count: -3 })
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delayed_generation_reports_progress() {
        let (tx, mut rx) = mpsc::channel(8);
        spawn_generation(3, Duration::from_millis(150), tx);

        let mut steps = Vec::new();
        loop {
            match next_generator_event(&mut rx).await {
                GeneratorEvent::Progress { done, total } => steps.push((done, total)),
                GeneratorEvent::Finished(result) => {
                    assert_eq!(result.unwrap().len(), 3);
                    break;
                }
            }
        }
        assert_eq!(steps, vec![(1, 3), (2, 3)]);
    }

    #[test]
    fn test_progress_steps() {
        assert_eq!(progress_steps(Duration::ZERO), 0);
        assert_eq!(progress_steps(Duration::from_millis(10)), 1);
        assert_eq!(progress_steps(Duration::from_millis(250)), 5);
    }

    #[test]
    fn test_progress_event_updates_state() {
        let mut app = make_app();
        assert!(app.state.begin_generation());
        app.handle_generator(GeneratorEvent::Progress { done: 2, total: 5 });
        assert_eq!(app.state.progress, 0.4);
        assert!(app.state.generating);
    }

    #[test]
    fn test_failed_generation_releases_slot() {
        let mut app = make_app();
        assert!(app.state.begin_generation());
        app.handle_generator(GeneratorEvent::Finished(Err(
            palette::PaletteError::InvalidArgument { count: -1 },
        )));
        assert!(!app.state.generating);
        assert!(app.state.toast.is_some());
    }

    #[test]
    fn test_count_is_clamped() {
        let mut app = make_app();
        app.state.color_count = 1;
        app.reduce(Action::CountDown);
        assert_eq!(app.state.color_count, 1);
        app.reduce(Action::CountDownLarge);
        assert_eq!(app.state.color_count, 1);

        app.state.color_count = 195;
        app.reduce(Action::CountUpLarge);
        assert_eq!(app.state.color_count, 200);

        app.reduce(Action::ToggleMax);
        app.reduce(Action::CountUpLarge);
        assert_eq!(app.state.color_count, 210);

        app.reduce(Action::ToggleMax);
        assert_eq!(app.state.color_count, 200);
    }

    #[test]
    fn test_save_ignores_empty_current() {
        let mut app = make_app();
        app.reduce(Action::SavePalette);
        assert!(app.state.store.is_empty());
        assert_eq!(app.state.status, "Generate a palette first");
    }

    #[test]
    fn test_save_and_resave() {
        let mut app = make_app();
        app.state.current = make_palette(0.5);
        assert!(!app.state.current_is_saved());

        app.reduce(Action::SavePalette);
        assert_eq!(app.state.store.len(), 1);
        assert!(app.state.current_is_saved());

        app.reduce(Action::SavePalette);
        assert_eq!(app.state.store.len(), 2);
    }

    #[test]
    fn test_clear_palette() {
        let mut app = make_app();
        app.state.current = make_palette(0.5);
        app.reduce(Action::ClearPalette);
        assert!(app.state.current.is_empty());
    }

    #[test]
    fn test_delete_marked_palettes() {
        let mut app = make_app();
        for shade in [0.1, 0.2, 0.3] {
            app.state.store.save(make_palette(shade));
        }
        app.reduce(Action::SetScreen(Screen::Saved));
        app.reduce(Action::ToggleMark);
        app.reduce(Action::GoBottom);
        app.reduce(Action::ToggleMark);
        app.reduce(Action::DeleteSelected);

        assert_eq!(app.state.store.list(), &[make_palette(0.2)]);
        assert_eq!(app.state.saved_list.selected, 0);
        assert!(app.state.saved_list.marked.is_empty());
    }

    #[test]
    fn test_delete_cursor_row_without_marks() {
        let mut app = make_app();
        for shade in [0.1, 0.2] {
            app.state.store.save(make_palette(shade));
        }
        app.reduce(Action::SetScreen(Screen::Saved));
        app.reduce(Action::ListDown);
        app.reduce(Action::DeleteSelected);
        assert_eq!(app.state.store.list(), &[make_palette(0.1)]);

        app.reduce(Action::DeleteSelected);
        assert!(app.state.store.is_empty());
        app.reduce(Action::DeleteSelected);
        assert!(app.state.store.is_empty());
        assert_eq!(app.state.saved_list.selected, 0);
    }

    #[test]
    fn test_saved_cursor_scrolls_within_viewport() {
        let mut app = make_app();
        for i in 0..10 {
            app.state.store.save(make_palette(f64::from(i) / 10.0));
        }
        app.state.saved_list.set_viewport(4);
        app.reduce(Action::SetScreen(Screen::Saved));

        for _ in 0..5 {
            app.reduce(Action::ListDown);
        }
        assert_eq!(app.state.saved_list.selected, 5);
        assert_eq!(app.state.saved_list.scroll_offset, 2);

        app.reduce(Action::GoBottom);
        assert_eq!(app.state.saved_list.scroll_offset, 6);

        app.reduce(Action::GoTop);
        assert_eq!(app.state.saved_list.scroll_offset, 0);
    }
}
