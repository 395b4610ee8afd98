//! Line-based terminal front end.
//!
//! Renders engine events as they arrive and turns typed lines into engine
//! calls. Mode selection, restart and mode switching live here; the engine
//! only sees `start_game`, `play_turn` and `restart`.

use anyhow::Result;
use tictactoe_duel::{
    ChannelPresenter, EngineConfig, GameEngine, GameEvent, GameMode, GameSession, Position,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    /// Leave the program.
    Quit,
    /// Start over with the same players.
    Restart,
    /// Go back to mode selection.
    ChangeMode,
    /// Mark a cell.
    Cell(Position),
    /// Anything else.
    Unknown,
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "q" | "quit" | "exit" => Input::Quit,
            "r" | "restart" => Input::Restart,
            "m" | "mode" => Input::ChangeMode,
            other => Position::from_label_or_number(other)
                .map(Input::Cell)
                .unwrap_or(Input::Unknown),
        }
    }
}

/// Which prompt the user is answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    ModeSelect,
    Playing,
}

fn parse_mode(line: &str) -> Option<GameMode> {
    match line.trim().to_lowercase().as_str() {
        "1" => Some(GameMode::TwoPlayer),
        "2" => Some(GameMode::Computer),
        other => other.parse().ok(),
    }
}

fn print_mode_menu() {
    println!("Choose a mode:");
    println!("  1) two players");
    println!("  2) play against the computer");
    println!("(or 'quit')");
}

fn render(event: GameEvent) {
    match event {
        GameEvent::BoardChanged(board) => println!("\n{}\n", board.display()),
        GameEvent::TurnChanged { name, marker } => println!("{}'s turn ({})", name, marker),
        GameEvent::ComputerThinking { name } => println!("{} is thinking...", name),
        GameEvent::GameOver { message } => {
            println!("{}", message);
            println!("Type 'restart' to play again or 'mode' to change mode.");
        }
    }
}

/// Runs the interactive game until the user quits or stdin closes.
#[instrument(skip(config))]
pub async fn run(config: EngineConfig, mode: Option<GameMode>) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let engine = GameEngine::with_presenter(config.clone(), ChannelPresenter::new(event_tx));
    let session = GameSession::new("terminal".to_string(), engine);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut screen = match mode {
        Some(mode) => {
            start(&session, &config, mode).await;
            Screen::Playing
        }
        None => {
            print_mode_menu();
            Screen::ModeSelect
        }
    };

    loop {
        tokio::select! {
            Some(event) = event_rx.recv() => render(event),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("Stdin closed");
                    break;
                };
                match screen {
                    Screen::ModeSelect => {
                        if Input::parse(&line) == Input::Quit {
                            break;
                        }
                        match parse_mode(&line) {
                            Some(mode) => {
                                start(&session, &config, mode).await;
                                screen = Screen::Playing;
                            }
                            None => print_mode_menu(),
                        }
                    }
                    Screen::Playing => match Input::parse(&line) {
                        Input::Quit => break,
                        Input::Restart => {
                            if let Err(e) = session.restart().await {
                                println!("{}", e);
                            }
                        }
                        Input::ChangeMode => {
                            session.cancel_pending().await;
                            print_mode_menu();
                            screen = Screen::ModeSelect;
                        }
                        Input::Cell(position) => play(&session, position).await,
                        Input::Unknown => {
                            println!("Enter a cell (0-8 or a label like 'center'), 'restart', 'mode' or 'quit'.");
                        }
                    },
                }
            }
        }
    }

    session.cancel_pending().await;
    info!("Leaving terminal game");
    Ok(())
}

async fn start(session: &GameSession, config: &EngineConfig, mode: GameMode) {
    info!(%mode, "Starting game from terminal");
    let (first, second) = mode.seats(config);
    session.start_game(first, second).await;
}

async fn play(session: &GameSession, position: Position) {
    if session.computer_to_move().await {
        println!("Wait for the computer to move.");
        return;
    }
    let snapshot = session.snapshot().await;
    if snapshot.message.is_none() && !session.valid_moves().await.contains(&position) {
        println!("{} is already taken.", position);
        return;
    }
    if let Err(e) = session.play_turn(position.to_index()).await {
        match snapshot.message {
            Some(message) => println!("{} Type 'restart' or 'mode'.", message),
            None => println!("{}", e),
        }
    }
}
