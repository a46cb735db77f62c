//! Tests for derived display views: status text, move list, sort order.

use tictactoe_rewind::{GameSession, Position, Verdict};

fn play(session: &mut GameSession, indices: &[usize]) {
    for &index in indices {
        let pos = Position::from_index(index).expect("index in range");
        session.apply_move(pos).expect("scripted move is legal");
    }
}

#[test]
fn test_status_text_next_player() {
    let mut session = GameSession::new();
    assert_eq!(session.status_text(), "Next player: X");

    session.apply_move(Position::Center).expect("legal move");
    assert_eq!(session.status_text(), "Next player: O");
}

#[test]
fn test_status_text_winner() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 4, 1, 3, 2]);
    assert_eq!(session.status_text(), "Winner: X");
}

#[test]
fn test_status_text_draw() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(session.status_text(), "Game over. Draw!");
}

#[test]
fn test_status_follows_displayed_step() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 4, 1, 3, 2]);
    assert_eq!(session.status_text(), "Winner: X");

    // The win is a property of the displayed entry, not the session.
    session.jump_to(2);
    assert_eq!(session.status_text(), "Next player: X");
}

#[test]
fn test_move_list_labels_use_stored_coordinates() {
    let mut session = GameSession::new();
    // Position 0 is (1, 1); position 4 is (2, 2); position 5 is (3, 2).
    play(&mut session, &[0, 4, 5]);

    let items = session.move_list();
    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Go to game start",
            "Go to move (1, 1)",
            "Go to move (2, 2)",
            "Go to move (3, 2)",
        ]
    );
    let steps: Vec<usize> = items.iter().map(|i| i.step).collect();
    assert_eq!(steps, [0, 1, 2, 3]);
}

#[test]
fn test_descending_order_reverses_whole_list() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 4, 5]);
    session.toggle_sort_order();
    assert!(!session.is_sort_ascending());

    let items = session.move_list();
    let steps: Vec<usize> = items.iter().map(|i| i.step).collect();
    assert_eq!(steps, [3, 2, 1, 0]);
    // Labels travel with their steps under reversal.
    assert_eq!(items[0].label, "Go to move (3, 2)");
    assert_eq!(items[3].label, "Go to game start");
}

#[test]
fn test_jump_then_toggle_scenario() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 4, 1, 3, 2]);

    session.jump_to(0);
    session.toggle_sort_order();

    assert_eq!(session.history().len(), 6);
    assert!(session.x_is_next());
    let steps: Vec<usize> = session.move_list().iter().map(|i| i.step).collect();
    assert_eq!(steps, [5, 4, 3, 2, 1, 0]);
    // Sort order is presentation only: the displayed board is untouched.
    assert_eq!(session.verdict(), Verdict::InProgress);
}

#[test]
fn test_toggle_is_an_involution() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 4]);
    let before = session.move_list();

    session.toggle_sort_order();
    session.toggle_sort_order();
    assert_eq!(session.move_list(), before);
}
