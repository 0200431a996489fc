use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Screen};
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let sent = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => {
                        tx.blocking_send(Event::Input(InputEvent::Key(k)))
                    }
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => {
                        tx.blocking_send(Event::Input(InputEvent::Mouse(m)))
                    }
                    Ok(CtEvent::Resize(_, _)) => tx.blocking_send(Event::Input(InputEvent::Resize)),
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::ListUp),
            MouseEventKind::ScrollDown => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) => match state.screen {
            Screen::Generator => handle_generator_screen(k),
            Screen::Saved => handle_saved_screen(k),
            Screen::Help => handle_global(k),
        },
    }
}

fn handle_global(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::BackTab => Some(Action::PrevScreen),
        KeyCode::Char('1') => Some(Action::SetScreen(Screen::Generator)),
        KeyCode::Char('2') => Some(Action::SetScreen(Screen::Saved)),
        KeyCode::Char('3') | KeyCode::Char('?') | KeyCode::F(1) => {
            Some(Action::SetScreen(Screen::Help))
        }

        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Char('g') => Some(Action::GoTop),
        KeyCode::Char('G') => Some(Action::GoBottom),

        _ => None,
    }
}

fn handle_generator_screen(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Enter | KeyCode::Char('n') => Some(Action::Generate),
        KeyCode::Char('s') => Some(Action::SavePalette),
        KeyCode::Char('c') | KeyCode::Delete => Some(Action::ClearPalette),
        KeyCode::Char('v') => Some(Action::SetScreen(Screen::Saved)),

        // Count slider
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(Action::CountUp)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') | KeyCode::Char('_') => {
            Some(Action::CountDown)
        }
        KeyCode::Char(']') => Some(Action::CountUpLarge),
        KeyCode::Char('[') => Some(Action::CountDownLarge),

        KeyCode::Char('o') => Some(Action::ToggleOpacity),
        KeyCode::Char('m') => Some(Action::ToggleMax),

        _ => handle_global(k),
    }
}

fn handle_saved_screen(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char(' ') => Some(Action::ToggleMark),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
        KeyCode::Char('o') => Some(Action::ToggleOpacity),
        KeyCode::Backspace => Some(Action::SetScreen(Screen::Generator)),
        _ => handle_global(k),
    }
}
