mod styled;

use anyhow::Result;
use clinimark_config::Config;
use clinimark_engine::{DocumentEntry, io, markdown_to_html, segment};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

struct App {
    documents_path: PathBuf,
    documents: Vec<DocumentEntry>,
    list_state: ListState,
    current_content: Vec<Line<'static>>,
}

impl App {
    fn new(documents_path: PathBuf) -> Result<Self> {
        let documents = io::scan_documents(&documents_path)?;

        let mut app = Self {
            documents_path,
            documents,
            list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first document if available
        if !app.documents.is_empty() {
            app.list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_document(&mut self) {
        if self.documents.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.documents.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_document(&mut self) {
        if self.documents.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.documents.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(entry) = self
            .list_state
            .selected()
            .and_then(|index| self.documents.get(index))
        else {
            return;
        };

        self.current_content =
            match io::read_document(entry.relative_path(), &self.documents_path) {
                Ok(content) => styled::block_lines(&segment(content.as_str())),
                Err(e) => {
                    log::warn!("Failed to read {}: {e}", entry.relative_path());
                    vec![Line::from(format!("Error reading file: {e}"))]
                }
            };
    }
}

fn usage(program: &str) {
    eprintln!("Usage: {program} [documents-folder]");
    eprintln!("       {program} --html <file>");
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("clinimark-cli");

    // One-shot HTML export
    if args.get(1).map(String::as_str) == Some("--html") {
        let Some(file) = args.get(2).filter(|_| args.len() == 3) else {
            usage(program);
            process::exit(1);
        };
        let content = std::fs::read_to_string(file)?;
        println!("{}", markdown_to_html(&content));
        return Ok(());
    }

    // Determine documents path from CLI args or config file
    let config_path = Config::config_path();
    let documents_path;
    let from_config;

    if args.len() == 2 {
        documents_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                documents_path = config.documents_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No documents path provided and no config file found");
                usage(program);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                usage(program);
                process::exit(1);
            }
        }
    } else {
        usage(program);
        process::exit(1);
    };

    if let Err(e) = io::validate_documents_dir(&documents_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Documents path '{}'{} is invalid: {e}",
            documents_path.display(),
            source
        );
        process::exit(1);
    }

    log::info!("Viewing documents in {}", documents_path.display());

    // Create app before touching the terminal so scan errors print normally
    let mut app = App::new(documents_path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_document(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_document(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Document list panel
    let items: Vec<ListItem> = app
        .documents
        .iter()
        .map(|doc| ListItem::new(Line::from(format!("📄 {}", doc.display_name()))))
        .collect();

    let documents_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Documents"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(documents_list, chunks[0], &mut app.list_state);

    // Rendered content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a document to view it")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Rendered"))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
