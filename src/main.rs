use clap::Parser;
use clumsy::app::App;
use clumsy::audio::default_board;
use clumsy::commentary::{CommentService, GeminiCommentService, OfflineCommentService};
use clumsy::config::{Settings, Skin};
use clumsy::core::constants::FRAME_INTERVAL_MS;
use clumsy::high_score::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
use clumsy::utils::persistence;
use clumsy::{build_info, input, logging, ui};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "clumsy", about = "One-button arcade flyer for the terminal")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Visual theme and tuning
    #[arg(long, value_enum)]
    skin: Option<Skin>,

    /// Start with sound muted
    #[arg(long)]
    mute: bool,

    /// Never contact the comment service
    #[arg(long)]
    offline: bool,

    /// Seed for obstacle placement (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Where scores, settings and the log live
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Print version and build information
    #[arg(short = 'V', long)]
    version: bool,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    let data_dir = match cli.data_dir.clone().map_or_else(persistence::data_dir, Ok) {
        Ok(dir) => Some(dir),
        Err(e) => {
            eprintln!("Warning: no data directory ({}), scores will not be saved", e);
            None
        }
    };
    if let Some(dir) = &data_dir {
        logging::init(dir);
    }

    let mut settings = data_dir.as_deref().map(Settings::load).unwrap_or_default();
    if let Some(skin) = cli.skin {
        settings.skin = skin;
    }
    if cli.mute {
        settings.muted = true;
    }
    log::info!("starting {}", build_info::version_line());

    let (cols, rows) = terminal::size()?;
    let mut app = build_app(&cli, &settings, data_dir.as_deref(), cols, rows);
    app.set_suspended(!ui::responsive::fits(&app.game.tuning, cols, rows));

    let mut tui = setup_terminal()?;
    let result = run(&mut tui, &mut app);
    restore_terminal()?;
    app.shutdown();

    if let Some(dir) = &data_dir {
        settings.muted = app.is_muted();
        if let Err(e) = settings.save(dir) {
            log::warn!("could not save settings: {}", e);
        }
    }
    result
}

fn build_app(cli: &Cli, settings: &Settings, data_dir: Option<&Path>, cols: u16, rows: u16) -> App {
    let skin = settings.skin;

    let store: Box<dyn HighScoreStore> = match data_dir {
        Some(dir) => Box::new(FileHighScoreStore::new(dir, skin.high_score_key())),
        None => Box::new(MemoryHighScoreStore::default()),
    };

    let gemini = if cli.offline {
        None
    } else {
        GeminiCommentService::from_env(&settings.comment_model)
    };
    let comments: Arc<dyn CommentService> = match gemini {
        Some(service) => Arc::new(service),
        None => {
            log::info!("comment service offline, using local comments");
            Arc::new(OfflineCommentService)
        }
    };

    let rng: Box<dyn RngCore + Send> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    };

    App::new(
        skin,
        ui::play_viewport(cols, rows),
        store,
        comments,
        default_board(settings.muted),
        rng,
    )
}

fn setup_terminal() -> io::Result<Tui> {
    // Leave the terminal usable if anything below panics
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    disable_raw_mode()
}

fn run(tui: &mut Tui, app: &mut App) -> io::Result<()> {
    let clock = Instant::now();
    let frame_dur = Duration::from_millis(FRAME_INTERVAL_MS);
    let now_ms = || clock.elapsed().as_secs_f64() * 1000.0;

    loop {
        let frame_start = Instant::now();

        // Input
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if let Event::Resize(cols, rows) = event {
                app.resize(ui::play_viewport(cols, rows));
                app.set_suspended(!ui::responsive::fits(&app.game.tuning, cols, rows));
                continue;
            }
            if let Some(action) = input::map_event(&event) {
                if !app.handle_input(action, now_ms()) {
                    return Ok(());
                }
            }
        }

        // Update
        app.update(now_ms());

        // Render
        let view: &App = app;
        tui.draw(|frame| ui::draw(frame, view))?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}
