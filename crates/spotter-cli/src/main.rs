use anyhow::{Context, Result, bail};
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
use spotter_config::{Config, OutputFormat};
use spotter_engine::{
    Glossary, IntervalTimeline, ParsedWorkout, Phase, Platform, Provenance, ReferenceIndex,
    WorkoutRow, build_interval_timeline, parse_caption,
};
use std::{
    env,
    io::{IsTerminal, Read, Stdout, stdout},
    process,
    str::FromStr,
};

const USAGE: &str = "Usage: spotter [caption-file|-] [--url <source-url>] [--json|--table]";

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    url: Option<String>,
    output: Option<OutputFormat>,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.output = Some(OutputFormat::Json),
                "--table" => parsed.output = Some(OutputFormat::Table),
                "--url" => {
                    parsed.url = Some(args.next().context("--url needs a value")?);
                }
                flag if flag.starts_with("--") => bail!("Unknown option {flag}"),
                _ if parsed.input.is_some() => bail!("Only one caption file can be given"),
                _ => parsed.input = Some(arg),
            }
        }
        Ok(parsed)
    }

    fn read_caption(&self) -> Result<String> {
        match self.input.as_deref() {
            None | Some("-") => {
                let mut caption = String::new();
                std::io::stdin()
                    .read_to_string(&mut caption)
                    .context("Failed to read caption from stdin")?;
                Ok(caption)
            }
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read caption file '{path}'")),
        }
    }
}

struct App {
    parsed: ParsedWorkout,
    timeline: IntervalTimeline,
    row_list_state: ListState,
    show_timeline: bool,
}

impl App {
    fn new(parsed: ParsedWorkout, show_timeline: bool) -> Self {
        let timeline = build_interval_timeline(&parsed.ast);
        let mut app = Self {
            parsed,
            timeline,
            row_list_state: ListState::default(),
            show_timeline,
        };

        // Select first row if available
        if !app.parsed.rows.is_empty() {
            app.row_list_state.select(Some(0));
        }

        app
    }

    fn next_row(&mut self) {
        if self.parsed.rows.is_empty() {
            return;
        }
        let i = match self.row_list_state.selected() {
            Some(i) => (i + 1) % self.parsed.rows.len(),
            None => 0,
        };
        self.row_list_state.select(Some(i));
    }

    fn previous_row(&mut self) {
        if self.parsed.rows.is_empty() {
            return;
        }
        let i = match self.row_list_state.selected() {
            Some(0) | None => self.parsed.rows.len() - 1,
            Some(i) => i - 1,
        };
        self.row_list_state.select(Some(i));
    }

    fn toggle_timeline(&mut self) {
        self.show_timeline = !self.show_timeline;
    }

    fn selected_row(&self) -> Option<&WorkoutRow> {
        self.row_list_state
            .selected()
            .and_then(|i| self.parsed.rows.get(i))
    }

    fn detail_lines(&self) -> Vec<String> {
        let summary = &self.parsed.summary;
        let mut lines = vec![
            summary.title.clone(),
            format!("Confidence: {:.2}", self.parsed.ast.confidence),
        ];
        if let Some(total) = &summary.total_time {
            lines.push(format!("Total time: {total}"));
        }
        if !summary.tags.is_empty() {
            lines.push(format!("Tags: {}", summary.tags.join(", ")));
        }
        lines.push(String::new());

        match self.selected_row() {
            Some(row) => {
                lines.push(format!("{} / round {}", row.block, row.round));
                lines.push(format!("Movement: {}", row.movement));
                if !row.quantity_text.is_empty() {
                    lines.push(format!("Quantity: {}", row.quantity_text));
                }
                if let Some(load) = &row.load_text {
                    lines.push(format!("Load: {load}"));
                }
                if let Some(notes) = &row.notes {
                    lines.push(format!("Notes: {notes}"));
                }
                lines.push(format!("Source: {}", row.raw_text));
            }
            None => lines.push("No movements recognised".to_string()),
        }

        if !self.parsed.ast.notes.is_empty() {
            lines.push(String::new());
            lines.push("Caption notes:".to_string());
            lines.extend(self.parsed.ast.notes.iter().map(|n| format!("  {n}")));
        }
        lines
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    let index = build_reference_index(&config)?;
    let provenance = provenance_for(&args, &config)?;
    let caption = args.read_caption()?;
    let parsed = parse_caption(&caption, provenance, &index);

    match args.output.unwrap_or(config.output) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
            return Ok(());
        }
        OutputFormat::Table if args.output.is_some() || !stdout().is_terminal() => {
            print_table(&parsed, config.show_timeline);
            return Ok(());
        }
        OutputFormat::Table => {}
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(parsed, config.show_timeline);

    // Main loop
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

fn build_reference_index(config: &Config) -> Result<ReferenceIndex> {
    let mut builder = ReferenceIndex::builder();
    for path in config.glossary_files()? {
        match Glossary::load(&path) {
            Ok(glossary) => {
                log::info!("Loaded glossary extension {}", path.display());
                builder = builder.with_glossary(glossary);
            }
            Err(e) => log::warn!("Skipping glossary {}: {e}", path.display()),
        }
    }
    Ok(builder.build())
}

fn provenance_for(args: &Args, config: &Config) -> Result<Option<Provenance>> {
    if let Some(url) = &args.url {
        return Ok(Some(Provenance::from_url(url)?));
    }
    match &config.default_platform {
        Some(name) => Ok(Some(Provenance::with_platform(Platform::from_str(name)?))),
        None => Ok(None),
    }
}

fn print_table(parsed: &ParsedWorkout, show_timeline: bool) {
    println!(
        "{} (confidence {:.2})",
        parsed.summary.title, parsed.ast.confidence
    );
    for row in &parsed.rows {
        println!(
            "{:<24} {:>3}  {:<28} {:<14} {}",
            row.block,
            row.round,
            row.movement,
            row.quantity_text,
            row.load_text.as_deref().unwrap_or("")
        );
    }
    for note in &parsed.ast.notes {
        println!("note: {note}");
    }

    if show_timeline {
        let timeline = build_interval_timeline(&parsed.ast);
        for line in timeline_lines(&timeline) {
            println!("{line}");
        }
    }
}

fn timeline_lines(timeline: &IntervalTimeline) -> Vec<String> {
    if timeline.steps.is_empty() {
        return vec!["No interval blocks".to_string()];
    }
    let mut lines: Vec<String> = timeline
        .steps
        .iter()
        .map(|step| {
            let label = match step.phase {
                Phase::Work => step.exercise_name.as_deref().unwrap_or("Work"),
                Phase::Rest => "Rest",
            };
            format!(
                "{} R{} {:<24} {:>4}s",
                step.block,
                step.round,
                label,
                step.seconds
            )
        })
        .collect();
    let totals = &timeline.totals;
    lines.push(format!(
        "work {}s / rest {}s / total {}s",
        totals.work_seconds, totals.rest_seconds, totals.total_seconds
    ));
    lines
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_row(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_row(),
                KeyCode::Char('t') => app.toggle_timeline(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)].as_ref())
        .split(f.area());

    // Row list panel
    let row_items: Vec<ListItem> = app
        .parsed
        .rows
        .iter()
        .map(|row| {
            let display_text = format!("R{:<3} {} {}", row.round, row.movement, row.quantity_text);
            ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
        })
        .collect();

    let rows_list = List::new(row_items)
        .block(Block::default().borders(Borders::ALL).title("Rows"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(rows_list, chunks[0], &mut app.row_list_state);

    // Detail or timeline panel
    let (title, lines) = if app.show_timeline {
        ("Timeline", timeline_lines(&app.timeline))
    } else {
        ("Details", app.detail_lines())
    };
    let content_text: Vec<Line> = lines.into_iter().map(Line::from).collect();

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("t: Toggle timeline"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
