use std::io::{self, stdin};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, ArgGroup, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use typefast::runtime::{
    CrosstermEventSource, FixedTicker, Runner, Ticker, TypeEvent, TypeEventSource,
};
use typefast::typetest::TypeTest;
use typefast::ui;
use typefast::word_source::{self, Dictionary};

const TICK_RATE_MS: u64 = 100;

/// minimal typing speed trainer with a scrolling, cursor-centered viewport
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
#[clap(group(ArgGroup::new("source").required(true).args(&["text", "dict"])))]
pub struct Cli {
    /// file whose words become the test text, in order
    #[clap(short, long)]
    text: Option<PathBuf>,

    /// dictionary file to sample test words from
    #[clap(short, long)]
    dict: Option<PathBuf>,

    /// number of words to sample (with --dict)
    #[clap(short, long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..=65536))]
    words: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppState {
    Idle,
    Running,
    Done,
}

#[derive(Debug)]
pub struct App {
    pub test: TypeTest,
    pub state: AppState,
    pub started_at: Option<Instant>,
    /// Terminal width the viewport renders into, updated on resize events.
    pub width: u16,
}

impl App {
    pub fn new(test: TypeTest, width: u16) -> Self {
        Self {
            test,
            state: AppState::Idle,
            started_at: None,
            width,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.map(|t| t.elapsed()).unwrap_or_default()
    }
}

fn load_words(cli: &Cli) -> Result<Vec<String>> {
    let words = if let Some(path) = &cli.text {
        word_source::load_text(path)?
    } else if let Some(path) = &cli.dict {
        Dictionary::load(path)?.sample(cli.words as usize)
    } else {
        // clap's source group guarantees one of the two is present
        Vec::new()
    };
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(&cli).context("failed to prepare test text")?;

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let mut app = App::new(TypeTest::new(&words), terminal.size()?.width);

    let res = run(&mut terminal, &mut app, &runner);
    let elapsed = app.elapsed();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    println!("{}", ui::summary(&app.test.stats, elapsed));

    Ok(())
}

fn run<B: Backend, E: TypeEventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, &app.test, app.elapsed(), app.width))?;

        match runner.step() {
            // Ticks only refresh the header clock; the next draw picks them up.
            TypeEvent::Tick => {}
            TypeEvent::Resize(width) => app.width = width,
            TypeEvent::Key(key) => match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                KeyCode::Backspace => app.test.delete(),
                KeyCode::Char(' ') => {
                    if app.state == AppState::Running && app.test.space() {
                        app.state = AppState::Done;
                        return Ok(());
                    }
                }
                KeyCode::Char(c) => {
                    if app.state == AppState::Idle {
                        app.state = AppState::Running;
                        app.started_at = Some(Instant::now());
                    }
                    app.test.enter(c);
                }
                _ => {}
            },
        }
    }
}
