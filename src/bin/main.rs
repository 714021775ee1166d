use clap::{Parser, Subcommand, ValueEnum};
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use log::{info, warn};
use smart_type_core::cli::{init_logging, EngineArgs};
use smart_type_core::persistence::{save_to_disk, write_json};
use smart_type_core::{correct, Corrector, KeyboardSession, SuggestionKind};
use std::io::{self, stdout, Write};
use std::path::PathBuf;
use std::process;

/// How many transcript lines the keyboard view keeps on screen.
const TRANSCRIPT_LINES: usize = 10;
/// Chips beyond this have no Alt+digit key, so they are not drawn.
const MAX_CHIPS: usize = 9;

#[derive(Parser, Debug)]
#[command(name = "smart_type", version, about = "Predictive keyboard with autocorrect")]
struct SmartTypeArgs {
    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive predictive text box (default)
    Keyboard,
    /// Print next-word predictions for TEXT
    Predict { text: String },
    /// Print the corrected spelling of WORD
    Correct { word: String },
    /// Write the trained model to disk
    Export {
        #[arg(long, short = 'o', default_value = "model_data.json")]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ExportFormat {
    Json,
    Bin,
}

fn main() {
    let args = SmartTypeArgs::parse();
    init_logging(args.engine.verbosity());

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: SmartTypeArgs) -> smart_type_core::Result<()> {
    match args.command.unwrap_or(Command::Keyboard) {
        Command::Keyboard => {
            let mut session = args.engine.build_session()?;
            run_keyboard(&mut session)?;
        }
        Command::Predict { text } => {
            let predictor = args.engine.resolve_config()?.build_predictor()?;
            println!("{}", predictor.predict(&text).join(" "));
        }
        Command::Correct { word } => {
            println!("{}", correct(&word));
        }
        Command::Export { out, format } => {
            let model = args.engine.resolve_config()?.build_context_model()?;
            match format {
                ExportFormat::Json => write_json(&model, &Corrector::new(), &out)?,
                ExportFormat::Bin => save_to_disk(&model, &out)?,
            }
            println!("Model written to '{}'", out.display());
        }
    }
    Ok(())
}

/// Restores the terminal even if the loop bails out early.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn run_keyboard(session: &mut KeyboardSession) -> io::Result<()> {
    let _guard = RawModeGuard::new()?;
    info!("keyboard started");
    let mut out = stdout();

    loop {
        draw(session, &mut out)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if !handle_key(session, key) {
            break;
        }
    }

    info!("keyboard closed after {} messages", session.transcript().len());
    Ok(())
}

/// Applies one key press. Returns false when the user asked to quit.
fn handle_key(session: &mut KeyboardSession, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => return false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
        KeyCode::Char(d @ '1'..='9') if key.modifiers.contains(KeyModifiers::ALT) => {
            let index = d as usize - '1' as usize;
            if let Err(e) = session.apply_suggestion(index) {
                warn!("{e}");
            }
        }
        KeyCode::Tab => {
            if let Err(e) = session.apply_suggestion(0) {
                warn!("{e}");
            }
        }
        KeyCode::Enter => {
            session.submit();
        }
        KeyCode::Backspace => session.backspace(),
        KeyCode::Char(c) => session.push_char(c),
        _ => {}
    }
    true
}

fn draw(session: &KeyboardSession, out: &mut impl Write) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print("Predictive Keyboard".bold()),
        Print("\r\n"),
        Print("Tab picks the first suggestion, Alt+1..9 the others. Enter sends, Esc quits.\r\n\r\n".dark_grey())
    )?;

    let transcript = session.transcript();
    let skip = transcript.len().saturating_sub(TRANSCRIPT_LINES);
    for message in &transcript[skip..] {
        queue!(out, Print("  "), Print(message.as_str().blue()), Print("\r\n"))?;
    }

    queue!(out, Print("\r\n"))?;
    for (i, suggestion) in session.suggestions().iter().take(MAX_CHIPS).enumerate() {
        let chip = format!("[{}] {}", i + 1, suggestion.word);
        match suggestion.kind {
            SuggestionKind::Prediction => queue!(out, Print(chip), Print("  "))?,
            SuggestionKind::Correction => queue!(out, Print(chip.yellow()), Print("  "))?,
        }
    }

    queue!(out, Print("\r\n\r\n> "), Print(session.input()))?;
    out.flush()
}
