//! Game flow integration tests
//!
//! End-to-end click sequences over the full stack of resources, plus a
//! headless `App` exercising `GamePlugin` under `MinimalPlugins` the way the
//! real binary wires it up.

use bevy::input::InputPlugin;
use bevy::prelude::*;
use clickchess::engine::ChessEngine;
use clickchess::game::controller::{handle_pointer_down, ClickOutcome};
use clickchess::game::resources::{GameOverState, Selection};
use clickchess::layout::BoardLayout;
use clickchess::GamePlugin;
use shakmaty::{Color, Role, Square};

fn click(
    engine: &mut ChessEngine,
    selection: &mut Selection,
    game_over: &mut GameOverState,
    layout: &BoardLayout,
    square: Square,
) -> ClickOutcome {
    let s = layout.square_size;
    let x = (u32::from(square.file()) as f32 + 0.5) * s;
    let y = (7.0 - u32::from(square.rank()) as f32 + 0.5) * s;
    handle_pointer_down(engine, selection, game_over, layout, x, y)
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn opening_pawn_push_from_the_start_position() {
    //! Start position; click e2, expect e3 and e4 highlighted; click e4,
    //! expect the pawn moved, black to move and the selection cleared.

    let mut engine = ChessEngine::default();
    let mut selection = Selection::default();
    let mut game_over = GameOverState::default();
    let layout = BoardLayout::default();

    let outcome = click(&mut engine, &mut selection, &mut game_over, &layout, Square::E2);
    assert_eq!(outcome, ClickOutcome::Selected(Square::E2));
    let highlighted: Vec<_> = selection.targets().collect();
    assert!(highlighted.contains(&Square::E3));
    assert!(highlighted.contains(&Square::E4));

    let outcome = click(&mut engine, &mut selection, &mut game_over, &layout, Square::E4);
    assert!(matches!(outcome, ClickOutcome::Moved(_)));
    assert_eq!(engine.piece_at(Square::E4).unwrap().role, Role::Pawn);
    assert_eq!(engine.turn(), Color::Black);
    assert!(!selection.is_selected());
    assert_eq!(game_over, GameOverState::Playing);
}

#[test]
fn scholars_mate_ends_with_white_winning() {
    //! 1.e4 e5 2.Bc4 Nc6 3.Qh5 Nf6 4.Qxf7# - the mirror scenario to fool's
    //! mate, checking the winner is the side that just moved.

    let mut engine = ChessEngine::default();
    let mut selection = Selection::default();
    let mut game_over = GameOverState::default();
    let layout = BoardLayout::default();

    let plies = [
        (Square::E2, Square::E4),
        (Square::E7, Square::E5),
        (Square::F1, Square::C4),
        (Square::B8, Square::C6),
        (Square::D1, Square::H5),
        (Square::G8, Square::F6),
        (Square::H5, Square::F7),
    ];
    let mut last = ClickOutcome::Ignored;
    for (from, to) in plies {
        let selected = click(&mut engine, &mut selection, &mut game_over, &layout, from);
        assert_eq!(selected, ClickOutcome::Selected(from));
        last = click(&mut engine, &mut selection, &mut game_over, &layout, to);
    }
    assert_eq!(
        last,
        ClickOutcome::Checkmate {
            winner: Color::White
        }
    );
    assert_eq!(game_over.winner(), Some(Color::White));

    // Black cannot respond.
    let outcome = click(&mut engine, &mut selection, &mut game_over, &layout, Square::E8);
    assert_eq!(outcome, ClickOutcome::Ignored);
}

#[test]
fn turns_alternate_across_a_sequence_of_moves() {
    let mut engine = ChessEngine::default();
    let mut selection = Selection::default();
    let mut game_over = GameOverState::default();
    let layout = BoardLayout::default();

    let plies = [
        (Square::E2, Square::E4),
        (Square::C7, Square::C5),
        (Square::G1, Square::F3),
        (Square::D7, Square::D6),
    ];
    for (i, (from, to)) in plies.into_iter().enumerate() {
        let mover = if i % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(engine.turn(), mover);
        click(&mut engine, &mut selection, &mut game_over, &layout, from);
        let outcome = click(&mut engine, &mut selection, &mut game_over, &layout, to);
        assert!(matches!(outcome, ClickOutcome::Moved(_)), "ply {i} failed");
    }
    assert_eq!(engine.turn(), Color::White);
    assert_eq!(game_over, GameOverState::Playing);
}

#[test]
fn selecting_the_other_sides_piece_mid_game_is_ignored() {
    let mut engine = ChessEngine::default();
    let mut selection = Selection::default();
    let mut game_over = GameOverState::default();
    let layout = BoardLayout::default();

    click(&mut engine, &mut selection, &mut game_over, &layout, Square::E2);
    click(&mut engine, &mut selection, &mut game_over, &layout, Square::E4);

    // It is black's turn now; white's pieces no longer select.
    let outcome = click(&mut engine, &mut selection, &mut game_over, &layout, Square::D2);
    assert_eq!(outcome, ClickOutcome::Ignored);
    assert!(!selection.is_selected());
}

// ============================================================================
// Headless app wiring
// ============================================================================

#[test]
fn game_plugin_initializes_all_interaction_resources() {
    //! Builds the plugin under MinimalPlugins and runs a few frames; the
    //! input system must tolerate the absence of a window.

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, InputPlugin));
    app.add_plugins(GamePlugin);

    app.update();
    app.update();

    let world = app.world();
    assert_eq!(world.resource::<ChessEngine>().turn(), Color::White);
    assert!(!world.resource::<Selection>().is_selected());
    assert_eq!(*world.resource::<GameOverState>(), GameOverState::Playing);
    assert_eq!(world.resource::<BoardLayout>().square_size, 75.0);
}
