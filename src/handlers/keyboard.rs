//! Keyboard Input Handler
//!
//! Dispatches key presses by screen: the entry form edits its input line,
//! the listing screen moves the selection and triggers navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;
use drivetui::model::{Screen, VimCommandState};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl-C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    match app.model.screen {
        Screen::Entry => handle_entry_key(app, key),
        Screen::Listing => handle_listing_key(app, key),
    }
}

fn handle_entry_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_entry(),
        KeyCode::Backspace => {
            app.model.ui.entry_input.pop();
        }
        KeyCode::Esc => app.model.ui.should_quit = true,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.entry_input.push(c)
        }
        _ => {}
    }
}

/// Keys while the search input is focused. Returns whether the key was used.
fn handle_search_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.model.ui.search_mode {
        return false;
    }

    match key.code {
        KeyCode::Esc => {
            app.model.ui.search_mode = false;
            app.model.listing.clear_query();
        }
        KeyCode::Enter => {
            // Keep the filter, return keys to the list
            app.model.ui.search_mode = false;
        }
        KeyCode::Backspace => {
            let mut query = app.model.listing.query.clone();
            query.pop();
            app.model.listing.set_query(query);
        }
        KeyCode::Down => app.next_item(),
        KeyCode::Up => app.previous_item(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut query = app.model.listing.query.clone();
            query.push(c);
            app.model.listing.set_query(query);
        }
        _ => {}
    }

    true
}

fn handle_listing_key(app: &mut App, key: KeyEvent) {
    if handle_search_key(app, key) {
        return;
    }

    let vim_mode = app.model.ui.vim_mode;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // 'gg' jumps to the top in vim mode
    if vim_mode && key.code == KeyCode::Char('g') && !ctrl {
        if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
            app.model.ui.vim_command_state = VimCommandState::None;
            app.jump_to_first();
        } else {
            app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
        }
        return;
    }
    app.model.ui.vim_command_state = VimCommandState::None;

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,

        // Search: '/' in vim mode, Ctrl-F otherwise
        KeyCode::Char('/') if vim_mode => app.model.ui.search_mode = true,
        KeyCode::Char('f') if ctrl && !vim_mode => app.model.ui.search_mode = true,
        KeyCode::Esc => {
            if !app.model.listing.query.is_empty() {
                app.model.listing.clear_query();
            }
        }

        // Vim keybindings with Ctrl modifiers (check before 'd' and other letters)
        KeyCode::Char('d') if vim_mode && ctrl => app.half_page_down(),
        KeyCode::Char('u') if vim_mode && ctrl => app.half_page_up(),
        KeyCode::Char('f') if vim_mode && ctrl => app.page_down(),
        KeyCode::Char('b') if vim_mode && ctrl => app.page_up(),
        KeyCode::Char('G') if vim_mode => app.jump_to_last(),

        KeyCode::Down => app.next_item(),
        KeyCode::Up => app.previous_item(),
        KeyCode::Char('j') if vim_mode => app.next_item(),
        KeyCode::Char('k') if vim_mode => app.previous_item(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),

        KeyCode::Enter | KeyCode::Right => app.view_selected(),
        KeyCode::Char('l') if vim_mode => app.view_selected(),
        KeyCode::Left | KeyCode::Backspace => app.go_back(),
        KeyCode::Char('h') if vim_mode => app.go_back(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(index) = c.to_digit(10) {
                app.select_breadcrumb(index as usize);
            }
        }

        KeyCode::Char('d') if !ctrl => app.download_selected(),
        KeyCode::Char('c') if !ctrl => app.copy_location(),
        KeyCode::Char('r') => app.retry(),
        KeyCode::Char('e') => app.return_to_entry(),
        _ => {}
    }
}
