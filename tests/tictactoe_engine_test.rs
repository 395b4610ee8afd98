//! Tests for the tic-tac-toe turn engine.

use tictactoe_duel::{
    Board, Cell, ChannelPresenter, EngineConfig, EngineError, GameEngine, GameEvent, Marker,
    MoveRejection, MoveValidation, Outcome, Phase, PlayerKind, Seat, TurnOutcome,
};
use tokio::sync::mpsc;

fn engine() -> GameEngine {
    GameEngine::new(EngineConfig::default().with_seed(11))
}

fn play_all(game: &mut GameEngine, moves: &[usize]) -> TurnOutcome {
    let mut last = None;
    for &index in moves {
        last = Some(game.play_turn(index).expect("Valid move"));
    }
    last.expect("At least one move")
}

#[test]
fn test_top_row_win() {
    let mut game = engine();
    game.start_game("Alice", "Bob");

    let outcome = play_all(&mut game, &[0, 3, 1, 4, 2]);

    assert!(game.check_win());
    assert_eq!(game.message().as_deref(), Some("Alice wins!"));
    assert_eq!(
        outcome,
        TurnOutcome::Finished(Outcome::Won {
            winner: "Alice".to_string(),
            marker: Marker::X,
            line: [0, 1, 2],
        })
    );
    assert!(matches!(game.phase(), Phase::Ended(_)));
}

#[test]
fn test_full_board_draw() {
    let mut game = engine();
    game.start_game("Alice", "Bob");

    // X O X / X O O / O X X
    let outcome = play_all(&mut game, &[0, 1, 2, 4, 7, 6, 3, 5, 8]);

    assert_eq!(game.cells()[8], Cell::Marked(Marker::X));
    assert!(!game.check_win());
    assert!(game.check_draw());
    assert_eq!(outcome, TurnOutcome::Finished(Outcome::Draw));
    assert_eq!(game.message().as_deref(), Some("It's a draw!"));
}

#[test]
fn test_row_major_fill_wins_on_anti_diagonal() {
    let mut game = engine();
    game.start_game("Alice", "Bob");

    // X takes 0, 2, 4, 6: the 2-4-6 diagonal closes before the board fills.
    let outcome = play_all(&mut game, &[0, 1, 2, 3, 4, 5, 6]);

    assert!(matches!(
        outcome,
        TurnOutcome::Finished(Outcome::Won { line: [2, 4, 6], .. })
    ));
    assert!(matches!(
        game.play_turn(8),
        Err(EngineError::InvalidState { .. })
    ));
}

#[test]
fn test_move_after_end_changes_nothing() {
    let mut game = engine();
    game.start_game("Alice", "Bob");
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    let board = game.board().clone();

    let result = game.play_turn(8);

    assert!(matches!(
        result,
        Err(EngineError::InvalidState { phase: "ended", .. })
    ));
    assert_eq!(game.board(), &board);
    assert_eq!(game.current_player_name(), Some("Alice"));
    assert_eq!(game.message().as_deref(), Some("Alice wins!"));
}

#[test]
fn test_start_game_resets_everything() {
    let mut game = engine();
    game.start_game("Alice", "Bob");
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    game.start_game("Carol", "Dave");

    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player_name(), Some("Carol"));
    assert_eq!(game.phase(), &Phase::InProgress);
    assert_eq!(game.message(), None);
    let players = game.players().expect("Players assigned");
    assert_eq!(*players[0].marker(), Marker::X);
    assert_eq!(*players[1].marker(), Marker::O);
}

#[test]
fn test_turn_alternates_until_end() {
    let mut game = engine();
    game.start_game("Alice", "Bob");

    match game.play_turn(4).unwrap() {
        TurnOutcome::Next(player) => assert_eq!(player.name(), "Bob"),
        TurnOutcome::Finished(_) => panic!("Game shouldn't end after one move"),
    }
    assert_eq!(game.current_player_name(), Some("Bob"));

    game.play_turn(0).unwrap();
    assert_eq!(game.current_player_name(), Some("Alice"));
}

#[test]
fn test_permissive_overwrite_counts_as_move() {
    let mut game = engine();
    game.start_game("Alice", "Bob");
    game.play_turn(4).unwrap();

    let outcome = game.play_turn(4).unwrap();

    assert_eq!(game.cells()[4], Cell::Marked(Marker::O));
    assert!(matches!(outcome, TurnOutcome::Next(_)));
    assert_eq!(game.current_player_name(), Some("Alice"));
}

#[test]
fn test_strict_rejects_occupied_cell() {
    let config = EngineConfig::default()
        .with_seed(11)
        .with_move_validation(MoveValidation::Strict);
    let mut game = GameEngine::new(config);
    game.start_game("Alice", "Bob");
    game.play_turn(4).unwrap();

    let result = game.play_turn(4);

    assert_eq!(
        result,
        Err(EngineError::InvalidMove {
            index: 4,
            reason: MoveRejection::Occupied,
        })
    );
    assert_eq!(game.cells()[4], Cell::Marked(Marker::X));
    assert_eq!(game.current_player_name(), Some("Bob"));
}

#[test]
fn test_computer_seat_by_name_and_kind() {
    let mut game = engine();
    game.start_game("Alice", "Computer");
    let players = game.players().unwrap();
    assert_eq!(*players[1].kind(), PlayerKind::Computer);

    game.start_game(Seat::human("Alice"), Seat::computer("HAL"));
    let players = game.players().unwrap();
    assert_eq!(*players[1].kind(), PlayerKind::Computer);
    assert!(!game.computer_to_move());

    game.play_turn(0).unwrap();
    assert!(game.computer_to_move());
}

#[test]
fn test_computer_move_picks_empty_cell() {
    let mut game = engine();
    game.start_game("Alice", "Computer");
    game.play_turn(4).unwrap();

    game.computer_move().unwrap();

    let marked_o: Vec<_> = (0..9)
        .filter(|&i| game.cells()[i] == Cell::Marked(Marker::O))
        .collect();
    assert_eq!(marked_o.len(), 1);
    assert_ne!(marked_o[0], 4);
    assert_eq!(game.current_player_name(), Some("Alice"));
}

#[test]
fn test_computer_move_outside_play_is_refused() {
    let mut game = engine();
    assert!(matches!(
        game.computer_move(),
        Err(EngineError::InvalidState { .. })
    ));
}

#[test]
fn test_restart_keeps_players() {
    let mut game = engine();
    game.start_game("Alice", "Computer");
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    game.restart().unwrap();

    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player_name(), Some("Alice"));
    let players = game.players().unwrap();
    assert_eq!(players[1].name(), "Computer");
    assert!(players[1].is_computer());
}

#[test]
fn test_presenter_receives_events() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut game =
        GameEngine::with_presenter(EngineConfig::default(), ChannelPresenter::new(event_tx));

    game.start_game("Alice", "Computer");
    game.play_turn(0).unwrap();

    let mut events = Vec::new();
    while let Ok(event) = event_rx.try_recv() {
        events.push(event);
    }

    let mut after_move = Board::new();
    after_move.set(0, Marker::X).unwrap();
    assert_eq!(
        events,
        vec![
            GameEvent::BoardChanged(Board::new()),
            GameEvent::TurnChanged {
                name: "Alice".to_string(),
                marker: Marker::X,
            },
            GameEvent::BoardChanged(after_move),
            GameEvent::TurnChanged {
                name: "Computer".to_string(),
                marker: Marker::O,
            },
            GameEvent::ComputerThinking {
                name: "Computer".to_string(),
            },
        ]
    );
}

#[test]
fn test_game_over_event() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut game =
        GameEngine::with_presenter(EngineConfig::default(), ChannelPresenter::new(event_tx));
    game.start_game("Alice", "Bob");
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    let mut last = None;
    while let Ok(event) = event_rx.try_recv() {
        last = Some(event);
    }
    assert_eq!(
        last,
        Some(GameEvent::GameOver {
            message: "Alice wins!".to_string(),
        })
    );
}

#[test]
fn test_snapshot_serializes() {
    let mut game = engine();
    game.start_game("Alice", "Bob");
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, "ended");
    assert_eq!(snapshot.message.as_deref(), Some("Alice wins!"));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["message"], "Alice wins!");
    assert_eq!(json["players"][0]["name"], "Alice");
    assert_eq!(json["players"][1]["kind"], "human");
}
