use tui_blocks::core::{GameController, Snapshot};
use tui_blocks::term::{color_rgb, GameView, TerminalRenderer, Viewport};
use tui_blocks::types::{Color, Direction, ShapeKind};

fn running(kind: ShapeKind) -> GameController {
    let mut game = GameController::new(1);
    game.start();
    game.spawn_kind(kind);
    game
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameController::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // field pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_two_chars_wide() {
    let mut game = running(ShapeKind::O);
    game.field_mut().set(0, 19, Color::Green);
    let snap = game.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let glyph = fb.get(x, y0).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(Some(glyph.style.fg), color_rgb(Color::Green));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_overlays_status_text() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let idle = view.render(&GameController::new(1).snapshot(), vp);
    assert!(idle.row_text(11).contains("PRESS ENTER"));

    let mut game = running(ShapeKind::O);
    game.field_mut().set(5, 1, Color::Red);
    game.spawn_kind(ShapeKind::O);
    let over = view.render(&game.snapshot(), vp);
    assert!(over.row_text(11).contains("GAME OVER"));

    let live = view.render(&running(ShapeKind::O).snapshot(), vp);
    assert!(!live.row_text(11).contains("GAME"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let snap = running(ShapeKind::I).snapshot();
    let view = GameView::default();

    let wide = view.render(&snap, Viewport::new(80, 24));
    let text: String = (0..24).map(|y| wide.row_text(y)).collect();
    assert!(text.contains("BLOCKS"));
    assert!(text.contains("running"));

    let narrow = view.render(&snap, Viewport::new(22, 22));
    let text: String = (0..22).map(|y| narrow.row_text(y)).collect();
    assert!(!text.contains("BLOCKS"));
}

#[test]
fn term_view_repaints_only_changed_cells() {
    let mut game = running(ShapeKind::O);
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let before: Snapshot = game.snapshot();
    let mut fb = view.render(&before, vp);
    let mut renderer = TerminalRenderer::with_writer(Vec::new());
    assert_eq!(renderer.present(&fb).unwrap(), 22 * 22);

    game.move_block(Direction::Down);
    let after = game.snapshot();
    assert_eq!(view.paint_changes(&before, &after, vp, &mut fb), 4);

    // Four field cells, two columns each.
    assert_eq!(renderer.present(&fb).unwrap(), 8);
    assert_eq!(fb, view.render(&after, vp));
}

#[test]
fn term_view_full_repaint_on_status_change() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);
    let idle = GameController::new(1).snapshot();
    let live = running(ShapeKind::J).snapshot();

    let mut fb = view.render(&idle, vp);
    assert_eq!(view.paint_changes(&idle, &live, vp, &mut fb), 200);
    assert_eq!(fb, view.render(&live, vp));
}
