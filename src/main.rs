use std::io::{self, Stdout};

use clap::Parser;
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use catch_the_stars::app::App;
use catch_the_stars::consts::FPS;
use catch_the_stars::event::EventHandler;
use catch_the_stars::ui;

#[derive(Parser, Debug)]
#[command(name = "catch-the-stars")]
#[command(about = "Steer a basket and catch the falling stars")]
struct Cli {
    /// Seed for the star sequence (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("starting with seed {}", seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Release events let held keys end exactly; terminals without the
    // protocol fall back to the hold window in `input`.
    let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true))
        && execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok();
    log::debug!("keyboard enhancement: {}", keyboard_enhanced);
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(seed, keyboard_enhanced);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    let popped = if keyboard_enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
    } else {
        Ok(())
    };
    if let Err(err) = &popped {
        log::warn!("failed to pop keyboard enhancement flags: {}", err);
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // A game-loop error wins over a teardown error.
    result.and(popped)
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    let mut events = EventHandler::new(FPS);

    // Main loop
    loop {
        for key in events.pending()? {
            app.on_key(key);
        }
        if app.should_quit {
            break;
        }

        app.on_tick();
        terminal.draw(|frame| ui::render(frame, app))?;
        events.wait_frame();
    }

    log::info!("quit with score {}", app.game.score);
    Ok(())
}
