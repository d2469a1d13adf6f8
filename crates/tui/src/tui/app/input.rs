use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, ConfirmChoice, Mode};

#[derive(Debug, Clone, Copy)]
pub(crate) enum NormalAction {
    Quit,
    EnterSearch,
    EnterCreate,
    EnterEdit,
    Delete,
    ShowDetails,
    ShowHelp,
    Refresh,
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    PrevTab,
    NextTab,
    PrevPage,
    NextPage,
    SmallerPage,
    LargerPage,
    SortColumn(usize),
}

impl NormalAction {
    fn from_event(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('/') => Some(Self::EnterSearch),
            KeyCode::Char('a') => Some(Self::EnterCreate),
            KeyCode::Char('e') => Some(Self::EnterEdit),
            KeyCode::Char('x') | KeyCode::Delete => Some(Self::Delete),
            KeyCode::Char('r') => Some(Self::Refresh),
            KeyCode::Char('h') => Some(Self::ShowHelp),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::SelectPrev),
            KeyCode::Home => Some(Self::SelectFirst),
            KeyCode::End => Some(Self::SelectLast),
            KeyCode::BackTab => Some(Self::PrevTab),
            KeyCode::Tab => Some(Self::NextTab),
            KeyCode::Left | KeyCode::PageUp => Some(Self::PrevPage),
            KeyCode::Right | KeyCode::PageDown => Some(Self::NextPage),
            KeyCode::Char('-') => Some(Self::SmallerPage),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Self::LargerPage),
            KeyCode::Enter => Some(Self::ShowDetails),
            KeyCode::Char(ch @ '1'..='9') => Some(Self::SortColumn(ch as usize - '1' as usize)),
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.mode {
            Mode::Normal => self.handle_normal_mode(key),
            Mode::Search => self.handle_search_mode(key),
            Mode::Form => self.handle_form_mode(key),
            Mode::ConfirmDelete => self.handle_confirm_mode(key),
            Mode::Inspect | Mode::Help => self.handle_overlay_mode(key),
        }
        Ok(())
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) {
        let Some(action) = NormalAction::from_event(&key) else {
            return;
        };
        let now = Instant::now();
        match action {
            NormalAction::Quit => self.should_quit = true,
            NormalAction::EnterSearch => self.enter_search(),
            NormalAction::EnterCreate => self.open_create_form(),
            NormalAction::EnterEdit => self.open_edit_form(),
            NormalAction::Delete => self.prompt_delete(),
            NormalAction::ShowDetails => self.show_details(),
            NormalAction::ShowHelp => self.show_help(),
            NormalAction::Refresh => self.refresh_active(),
            NormalAction::SelectNext => self.select_next(),
            NormalAction::SelectPrev => self.select_prev(),
            NormalAction::SelectFirst => self.select_first(),
            NormalAction::SelectLast => self.select_last(),
            NormalAction::PrevTab => self.switch_tab(-1),
            NormalAction::NextTab => self.switch_tab(1),
            NormalAction::PrevPage => self.change_page(-1, now),
            NormalAction::NextPage => self.change_page(1, now),
            NormalAction::SmallerPage => self.cycle_page_size(-1, now),
            NormalAction::LargerPage => self.cycle_page_size(1, now),
            NormalAction::SortColumn(index) => self.sort_by_column(index),
        }
    }

    fn handle_search_mode(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let now = Instant::now();
        match key.code {
            KeyCode::Esc => self.leave_search(),
            KeyCode::Enter => self.apply_search_now(),
            KeyCode::Backspace => {
                self.search_input.backspace();
                self.search_changed(now);
            }
            KeyCode::Delete => {
                self.search_input.delete_char();
                self.search_changed(now);
            }
            KeyCode::Left => self.search_input.move_left(),
            KeyCode::Right => self.search_input.move_right(),
            KeyCode::Home => self.search_input.move_home(),
            KeyCode::End => self.search_input.move_end(),
            KeyCode::Char(ch) => {
                self.search_input.insert_char(ch);
                self.search_changed(now);
            }
            _ => {}
        }
    }

    fn handle_form_mode(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.cancel_form(),
            KeyCode::Enter => self.submit_form(),
            _ => {
                let Some(form) = &mut self.form else {
                    self.mode = Mode::Normal;
                    return;
                };
                match key.code {
                    KeyCode::Tab | KeyCode::Down => form.focus_next(),
                    KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                    KeyCode::Left => form.horizontal(-1),
                    KeyCode::Right => form.horizontal(1),
                    KeyCode::Backspace => form.backspace(),
                    KeyCode::Delete => form.delete_char(),
                    KeyCode::Char(ch) => form.insert_char(ch),
                    _ => {}
                }
            }
        }
    }

    fn handle_confirm_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => self.cancel_confirm(),
            KeyCode::Enter => self.confirm_delete(),
            KeyCode::Char('y') => {
                self.confirm_choice = ConfirmChoice::Yes;
                self.confirm_delete();
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Tab => {
                self.confirm_choice = self.confirm_choice.toggle();
            }
            _ => {}
        }
    }

    fn handle_overlay_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.close_overlay(),
            _ => {}
        }
    }
}
