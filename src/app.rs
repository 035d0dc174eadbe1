use log::*;
use std::{io, time::Duration};

use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame, Terminal,
};

use crate::console::{format_count, format_entry, format_merged_entry, format_search};
use crate::pipeline::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Lines,
    Merged,
    Search,
    Summary,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Lines, Tab::Merged, Tab::Search, Tab::Summary];

    fn title(&self) -> &'static str {
        match self {
            Tab::Lines => "Lines",
            Tab::Merged => "Merged",
            Tab::Search => "Search",
            Tab::Summary => "Summary",
        }
    }

    fn index(&self) -> usize {
        match self {
            Tab::Lines => 0,
            Tab::Merged => 1,
            Tab::Search => 2,
            Tab::Summary => 3,
        }
    }

    fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

struct App {
    report: Report,
    tab: Tab,
    items: Vec<String>,
    state: ListState,
    // Lines tab
    line: usize,
    show_unsorted: bool,
    // Search tab
    search_input: String,
    search_result: Vec<String>,
    list_size: Rect,
    error: Option<String>,
}

impl App {
    fn new(report: Report, size: Rect) -> App {
        info!("App::new - new App, lines={}", report.lines.len());
        let mut app = App {
            report,
            tab: Tab::Lines,
            items: Vec::new(),
            state: ListState::default(),
            line: 0,
            show_unsorted: false,
            search_input: String::new(),
            search_result: Vec::new(),
            list_size: size,
            error: None,
        };
        app.refresh_items();
        app
    }

    fn refresh_items(&mut self) {
        self.items = match self.tab {
            Tab::Lines => {
                let lines = if self.show_unsorted {
                    &self.report.raw_lines
                } else {
                    &self.report.lines
                };
                match lines.get(self.line) {
                    Some(line) => line.iter().map(format_entry).collect(),
                    None => Vec::new(),
                }
            }
            Tab::Merged => self.report.merged.iter().map(format_merged_entry).collect(),
            Tab::Search => {
                let mut items = vec![format!("Enter Issue Code: {}_", self.search_input)];
                items.extend(self.search_result.iter().cloned());
                items
            }
            Tab::Summary => self.report.summary.iter().map(format_count).collect(),
        };

        if self.items.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }

    fn list_title(&self) -> String {
        match self.tab {
            Tab::Lines => format!(
                " Line {}/{} ({}) ",
                self.line + 1,
                self.report.lines.len(),
                if self.show_unsorted {
                    "unsorted"
                } else {
                    "sorted by product ID, issue code, date & time"
                }
            ),
            Tab::Merged => String::from(" Issue codes sorted by product ID & line code "),
            Tab::Search => String::from(" Earliest occurrence of an issue code "),
            Tab::Summary => String::from(" Issues reported per product ID "),
        }
    }

    fn page_len(&self) -> usize {
        // one row goes to the list border
        (self.list_size.height as usize).saturating_sub(1).max(1)
    }

    fn select_next(&mut self) {
        if let Some(i) = self.state.selected() {
            if i >= self.items.len() - 1 {
                self.state.select(Some(0));
            } else {
                self.state.select(Some(i + 1));
            }
        }
    }

    fn select_previous(&mut self) {
        if let Some(i) = self.state.selected() {
            if i == 0 {
                self.state.select(Some(self.items.len() - 1));
            } else {
                self.state.select(Some(i - 1));
            }
        }
    }

    fn page_down(&mut self) {
        if let Some(i) = self.state.selected() {
            let last = self.items.len() - 1;
            self.state.select(Some((i + self.page_len()).min(last)));
        }
    }

    fn page_up(&mut self) {
        if let Some(i) = self.state.selected() {
            self.state.select(Some(i.saturating_sub(self.page_len())));
        }
    }

    fn home(&mut self) {
        if !self.items.is_empty() {
            self.state.select(Some(0));
        }
    }

    fn end(&mut self) {
        if !self.items.is_empty() {
            self.state.select(Some(self.items.len() - 1));
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        debug!("App::switch_tab - {:?} -> {:?}", self.tab, tab);
        self.tab = tab;
        self.refresh_items();
    }

    fn switch_line(&mut self, forward: bool) {
        let count = self.report.lines.len();
        if count == 0 {
            return;
        }
        self.line = if forward {
            (self.line + 1) % count
        } else {
            (self.line + count - 1) % count
        };
        self.refresh_items();
    }

    fn flip_sorted(&mut self) {
        self.show_unsorted = !self.show_unsorted;
        self.refresh_items();
    }

    fn push_digit(&mut self, digit: char) {
        self.search_input.push(digit);
        self.refresh_items();
    }

    fn pop_digit(&mut self) {
        self.search_input.pop();
        self.refresh_items();
    }

    fn run_search(&mut self) {
        match self.search_input.parse::<u32>() {
            Ok(issue_code) => {
                let hit = self.report.search(issue_code);
                self.search_result = format_search(issue_code, hit);
            }
            Err(_) => {
                warn!("App::run_search - invalid input={:?}", self.search_input);
                self.error = Some(format!(
                    "Cannot search for '{}', the issue code must be a number.",
                    self.search_input
                ));
                self.search_result.clear();
            }
        }
        self.refresh_items();
    }

    fn clear_popup(&mut self) {
        self.error = None
    }
}

fn ui<B: Backend>(f: &mut Frame<B>, app: &mut App) {
    let size = f.size();

    // solarized: https://ethanschoonover.com/solarized/
    let fg_color = Color::Rgb(147, 161, 161);
    let bg_color = Color::Rgb(0, 43, 54);
    let fg_accent_color = Color::Rgb(181, 137, 0);
    let bg_accent_color = Color::Rgb(7, 54, 66);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)].as_ref())
        .split(size);

    let bl = Block::default()
        .borders(Borders::NONE)
        .style(Style::default().bg(bg_color).fg(fg_color));
    f.render_widget(bl, chunks[0]);

    let mid_menu_row = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(chunks[0]);

    let mid_menu_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(10), Constraint::Min(0)].as_ref())
        .split(mid_menu_row[1]);

    let titles: Vec<Spans> = Tab::ALL
        .iter()
        .map(|t| {
            Spans::from(Span::styled(
                t.title(),
                Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::NONE))
        .select(app.tab.index())
        .style(Style::default().bg(bg_color).fg(fg_color))
        .highlight_style(Style::default().bg(bg_accent_color).fg(fg_accent_color));

    f.render_widget(tabs, mid_menu_center[1]);

    app.list_size = chunks[1];

    let list_items: Vec<ListItem> = app
        .items
        .iter()
        .map(|i| {
            ListItem::new(Span::from(i.as_str())).style(Style::default().fg(fg_color).bg(bg_color))
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(app.list_title())
                .borders(Borders::TOP)
                .style(Style::default().bg(bg_color)),
        )
        .highlight_style(Style::default().fg(fg_accent_color).bg(bg_accent_color));

    f.render_stateful_widget(list, chunks[1], &mut app.state);

    if let Some(error_text) = &app.error {
        let block = Block::default().title("Popup").borders(Borders::ALL);
        let area = centered_rect(60, 20, size);
        f.render_widget(tui::widgets::Clear, area); //this clears out the background

        let text = error_text.to_owned() + "\n\nPress 'Esc' to close this popup";

        let paragraph = Paragraph::new(text)
            .style(Style::default().bg(bg_accent_color).fg(fg_accent_color))
            .block(block)
            .alignment(Alignment::Left);
        f.render_widget(paragraph, area);
    }
}

pub fn run_app(report: Report) -> Result<(), io::Error> {
    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app: App = App::new(report, terminal.size()?);

    loop {
        terminal.draw(|f| ui(f, &mut app))?;

        if crossterm::event::poll(Duration::from_millis(100))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                use crossterm::event::KeyCode;
                match key.code {
                    KeyCode::Char(c) if app.tab == Tab::Search && c.is_ascii_digit() => {
                        app.push_digit(c)
                    }
                    KeyCode::Backspace if app.tab == Tab::Search => app.pop_digit(),
                    KeyCode::Enter if app.tab == Tab::Search => app.run_search(),
                    KeyCode::Char('n') if app.tab == Tab::Lines => app.switch_line(true),
                    KeyCode::Char('p') if app.tab == Tab::Lines => app.switch_line(false),
                    KeyCode::Char('s') if app.tab == Tab::Lines => app.flip_sorted(),
                    KeyCode::Char('q') => break,
                    KeyCode::Char('j') => app.select_next(),
                    KeyCode::Char('k') => app.select_previous(),
                    KeyCode::Down => app.select_next(),
                    KeyCode::Up => app.select_previous(),
                    KeyCode::Tab | KeyCode::Right => app.switch_tab(app.tab.next()),
                    KeyCode::BackTab | KeyCode::Left => app.switch_tab(app.tab.previous()),
                    KeyCode::PageUp => app.page_up(),
                    KeyCode::PageDown => app.page_down(),
                    KeyCode::Home => app.home(),
                    KeyCode::End => app.end(),
                    KeyCode::Esc => app.clear_popup(),
                    _ => {}
                }
            }
        }
    }

    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::event::DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Taken from TUI examples: https://github.com/fdehau/tui-rs/blob/v0.19.0/examples/popup.rs
/// helper function to create a centered rect using up certain percentage of the available rect `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}
