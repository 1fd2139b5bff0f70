use xiangqi_core::{
    is_checkmate, is_stalemate, legal_moves, Board, Color, Move, Piece, PieceType, Position,
};
use xiangqi_engine::{SearchConfig, Selection, XiangqiAI, MATE_SCORE};

fn pos(row: u8, col: u8) -> Position {
    Position::new(row, col).unwrap()
}

fn layout(pieces: &[(u8, u8, PieceType, Color)]) -> Board {
    Board::from_layout(
        pieces
            .iter()
            .map(|&(r, c, t, color)| (pos(r, c), Piece::new(t, color))),
    )
    .unwrap()
}

fn deterministic(color: Color) -> XiangqiAI {
    let config = SearchConfig::default()
        .with_color(color)
        .with_selection(Selection::Best);
    XiangqiAI::new(config).unwrap()
}

#[test]
fn takes_free_rook() {
    let board = layout(&[
        (0, 4, PieceType::King, Color::Black),
        (9, 3, PieceType::King, Color::Red),
        (2, 2, PieceType::Horse, Color::Black),
        (4, 3, PieceType::Rook, Color::Red),
    ]);
    let mut ai = deterministic(Color::Black);
    assert_eq!(ai.choose_move(&board), Some(Move::new(pos(2, 2), pos(4, 3))));
}

#[test]
fn finds_mate_in_one() {
    let board = layout(&[
        (0, 4, PieceType::King, Color::Black),
        (9, 4, PieceType::King, Color::Red),
        (4, 0, PieceType::Rook, Color::Black),
        (8, 8, PieceType::Rook, Color::Black),
    ]);
    let mut ai = deterministic(Color::Black);
    let mv = ai.choose_move(&board).unwrap();
    let after = board.with_move(mv);
    assert!(is_checkmate(&after, Color::Red), "{mv} does not mate");

    let best = ai.rank_moves(&board)[0];
    assert_eq!(best.search_score, MATE_SCORE);
}

#[test]
fn plays_red_when_configured() {
    let board = layout(&[
        (0, 4, PieceType::King, Color::Black),
        (9, 3, PieceType::King, Color::Red),
        (7, 2, PieceType::Horse, Color::Red),
        (5, 3, PieceType::Rook, Color::Black),
    ]);
    let mut ai = deterministic(Color::Red);
    assert_eq!(ai.choose_move(&board), Some(Move::new(pos(7, 2), pos(5, 3))));
}

#[test]
fn no_pieces_means_no_move() {
    let board = layout(&[(9, 4, PieceType::King, Color::Red)]);
    let mut ai = deterministic(Color::Black);
    assert_eq!(ai.choose_move(&board), None);
    assert!(ai.rank_moves(&board).is_empty());
}

#[test]
fn opening_reply_is_a_real_move() {
    let board = Board::new();
    let mut ai = XiangqiAI::with_seed(SearchConfig::default(), 7).unwrap();
    let mv = ai.choose_move(&board).unwrap();
    assert!(mv.is_valid(&board));
    assert_eq!(board.get_piece(mv.from).unwrap().color, Color::Black);
    // Choosing never touches the caller's board.
    assert_eq!(board, Board::new());
}

#[test]
fn top_k_picks_from_the_leaders() {
    let board = Board::new();
    let config = SearchConfig::default().with_selection(Selection::TopK(3));
    let ranked = XiangqiAI::with_seed(config, 1).unwrap().rank_moves(&board);
    let leaders: Vec<Move> = ranked.iter().take(3).map(|s| s.mv).collect();

    for seed in 0..4 {
        let mut ai = XiangqiAI::with_seed(config, seed).unwrap();
        let mv = ai.choose_move(&board).unwrap();
        assert!(leaders.contains(&mv), "seed {seed} picked {mv}");
    }
}

#[test]
fn same_seed_same_choice() {
    let board = Board::new().with_move(Move::new(pos(7, 1), pos(7, 4)));
    let config = SearchConfig::default();
    let a = XiangqiAI::with_seed(config, 42).unwrap().choose_move(&board);
    let b = XiangqiAI::with_seed(config, 42).unwrap().choose_move(&board);
    assert_eq!(a, b);
}

#[test]
fn ranking_is_sorted_and_complete() {
    let board = Board::new();
    let ai = deterministic(Color::Black);
    let ranked = ai.rank_moves(&board);
    assert_eq!(ranked.len(), 44);
    assert!(ranked.windows(2).all(|w| w[0].combined >= w[1].combined));
}

#[test]
fn top_k_in_check_only_plays_escapes() {
    // Only the advisor can interpose on 1,4; the pawn pushes leave the king hanging.
    let board = layout(&[
        (0, 4, PieceType::King, Color::Black),
        (0, 3, PieceType::Advisor, Color::Black),
        (6, 0, PieceType::Pawn, Color::Black),
        (6, 8, PieceType::Pawn, Color::Black),
        (9, 3, PieceType::King, Color::Red),
        (5, 4, PieceType::Rook, Color::Red),
        (9, 5, PieceType::Rook, Color::Red),
    ]);
    let escape = Move::new(pos(0, 3), pos(1, 4));
    assert_eq!(legal_moves(&board, Color::Black), vec![escape]);

    for seed in 0..30 {
        let mut ai = XiangqiAI::with_seed(SearchConfig::default(), seed).unwrap();
        assert_eq!(ai.choose_move(&board), Some(escape), "seed {seed}");
    }
    let ai = XiangqiAI::with_seed(SearchConfig::default(), 0).unwrap();
    assert_eq!(ai.rank_moves(&board).len(), 1);
}

#[test]
fn mated_side_has_no_move() {
    // The pawn still has pseudo-moves, none of which lift the mate.
    let board = layout(&[
        (0, 4, PieceType::King, Color::Black),
        (6, 6, PieceType::Pawn, Color::Black),
        (9, 3, PieceType::King, Color::Red),
        (0, 0, PieceType::Rook, Color::Red),
        (1, 8, PieceType::Rook, Color::Red),
    ]);
    assert!(is_checkmate(&board, Color::Black));
    for selection in [Selection::Best, Selection::TopK(3)] {
        let config = SearchConfig::default().with_selection(selection);
        let mut ai = XiangqiAI::with_seed(config, 3).unwrap();
        assert_eq!(ai.choose_move(&board), None);
    }
}

#[test]
fn stalemated_side_has_no_move() {
    // King on 0,3 is not attacked, but 0,4 and 1,3 both are.
    let board = layout(&[
        (0, 3, PieceType::King, Color::Black),
        (9, 5, PieceType::King, Color::Red),
        (5, 4, PieceType::Rook, Color::Red),
        (1, 8, PieceType::Rook, Color::Red),
    ]);
    assert!(is_stalemate(&board, Color::Black));
    let mut ai = XiangqiAI::with_seed(SearchConfig::default(), 11).unwrap();
    assert_eq!(ai.choose_move(&board), None);
}
