use anyhow::Result;
use cardvision_export::ExportFormat;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};
use std::io;
use std::path::PathBuf;
use tracing::warn;

use crate::report::{detail_lines, format_inr, summary_line, transaction_lines};
use crate::session::Session;

const HELP: &str = "↑/↓ select  r raw text  j export JSON  c export CSV  q quit";

pub struct Dashboard {
    pub session: Session,
    pub out_dir: PathBuf,
    pub status: String,
}

impl Dashboard {
    pub fn new(session: Session, out_dir: PathBuf) -> Self {
        Self {
            session,
            out_dir,
            status: HELP.to_string(),
        }
    }

    /// Apply one key press. Returns false when the dashboard should close.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Down => self.session.select_next(),
            KeyCode::Up => self.session.select_prev(),
            KeyCode::Char('r') => self.session.toggle_raw_text(),
            KeyCode::Char('j') => self.export(ExportFormat::Json),
            KeyCode::Char('c') => self.export(ExportFormat::Csv),
            _ => {}
        }
        true
    }

    fn export(&mut self, format: ExportFormat) {
        let now = chrono::Local::now().naive_local();
        self.status = match self.session.export(format, None, &self.out_dir, now) {
            Ok(path) => format!("Saved {}", path.display()),
            Err(e) => {
                warn!(error = %e, "export failed");
                format!("Export failed: {e:#}")
            }
        };
    }
}

pub fn run_dashboard(dashboard: &mut Dashboard) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = dashboard_loop(&mut terminal, dashboard);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn dashboard_loop<B: Backend>(terminal: &mut Terminal<B>, dashboard: &mut Dashboard) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, dashboard))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !dashboard.handle_key(key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}

pub fn draw(f: &mut Frame, dashboard: &Dashboard) {
    let session = &dashboard.session;
    let failures: Vec<String> = session.failures().map(|e| e.to_string()).collect();

    let mut constraints = vec![Constraint::Length(4), Constraint::Min(8)];
    if session.show_raw_text {
        constraints.push(Constraint::Length(10));
    }
    if !failures.is_empty() {
        constraints.push(Constraint::Length(failures.len().min(4) as u16 + 2));
    }
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let header = Paragraph::new(Text::from(vec![
        Line::from(Span::styled(
            "CardVision",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            summary_line(&session.summary()),
            Style::default().fg(Color::Cyan),
        )),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    draw_table(f, body[0], session);
    draw_detail(f, body[1], session);

    let mut next = 2;
    if session.show_raw_text {
        let raw = Paragraph::new(session.raw_preview().unwrap_or_default())
            .block(Block::default().borders(Borders::ALL).title("raw text"))
            .wrap(Wrap { trim: false });
        f.render_widget(raw, chunks[next]);
        next += 1;
    }
    if !failures.is_empty() {
        let lines: Vec<Line> = failures
            .into_iter()
            .map(|e| Line::from(Span::styled(e, Style::default().fg(Color::Red))))
            .collect();
        let failed = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title("could not read"))
            .wrap(Wrap { trim: true });
        f.render_widget(failed, chunks[next]);
        next += 1;
    }

    let footer = Paragraph::new(dashboard.status.as_str())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(footer, chunks[next]);
}

fn draw_table(f: &mut Frame, area: Rect, session: &Session) {
    let rows: Vec<Row> = session
        .parsed()
        .map(|p| {
            let r = &p.record;
            Row::new(vec![
                Cell::from(r.file_name.clone().unwrap_or_default()),
                Cell::from(r.bank.code()),
                Cell::from(r.card_last4.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(r.total_due.map(format_inr).unwrap_or_else(|| "-".to_string())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Min(12),
        ],
    )
    .header(
        Row::new(vec!["File", "Issuer", "Card", "Total due"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title("statements"))
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("> ");

    let mut state = TableState::default();
    if !session.is_empty() {
        state.select(Some(session.selected));
    }
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_detail(f: &mut Frame, area: Rect, session: &Session) {
    let mut lines: Vec<Line> = Vec::new();
    match session.selected_statement() {
        Some(p) => {
            for (label, value) in detail_lines(&p.record) {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label:<15}"), Style::default().fg(Color::Gray)),
                    Span::raw(value),
                ]));
            }
            let txns = transaction_lines(&p.record);
            if !txns.is_empty() {
                lines.push(Line::raw(""));
                lines.push(Line::from(Span::styled(
                    "Recent transactions",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.extend(txns.into_iter().map(Line::raw));
            }
        }
        None => lines.push(Line::raw("No statements could be read.")),
    }

    let detail = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("details"))
        .wrap(Wrap { trim: false });
    f.render_widget(detail, area);
}
