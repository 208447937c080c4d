//! Feed rendered frames through a VT100 emulator and check what a terminal
//! would show.

use glyphgrid::{Brush, Buffer, BufferConfig, ValidationMode};
use vt100::{Color, Parser};

fn allocated(width: usize, height: usize, colour: bool) -> Buffer {
    let mut buffer = Buffer::with_config(
        BufferConfig::default()
            .with_size(width, height)
            .with_colour(colour),
    );
    buffer.alloc().unwrap();
    buffer
}

/// Render `buffer` at `row` into an emulated terminal of the given size.
fn emulate(buffer: &Buffer, rows: u16, row: u16) -> Parser {
    let mut parser = Parser::new(rows, buffer.width() as u16, 0);
    let mut out = Vec::new();
    buffer.render(&mut out, row).unwrap();
    parser.process(&out);
    parser
}

fn glyph_at(parser: &Parser, row: u16, col: u16) -> char {
    parser
        .screen()
        .cell(row, col)
        .and_then(|cell| cell.contents().chars().next())
        .unwrap_or(' ')
}

fn screen_rows(parser: &Parser, rows: u16, cols: u16) -> Vec<String> {
    (0..rows)
        .map(|row| (0..cols).map(|col| glyph_at(parser, row, col)).collect())
        .collect()
}

#[test]
fn test_mono_frame_wraps_into_rows() {
    let mut buffer = allocated(6, 3, false);
    buffer.line_draw((0, 0), (5, 0), Brush::NONE);
    buffer.line_draw((0, 2), (2, 0), Brush::NONE);
    buffer.set_glyph(5, 2, '#');

    let parser = emulate(&buffer, 3, 1);
    assert_eq!(screen_rows(&parser, 3, 6), vec!["__/___", " /    ", "/    #"]);
}

#[test]
fn test_colour_frame_sets_palette_indices() {
    let mut buffer = allocated(8, 5, true);
    buffer.triangle_set((0, 0), (8, 0), (0, 5), Brush::all('X', 196, 21));

    let parser = emulate(&buffer, 5, 1);
    let screen = parser.screen();

    let inside = screen.cell(1, 1).unwrap();
    assert_eq!(inside.contents(), "X");
    assert_eq!(inside.fgcolor(), Color::Idx(196));
    assert_eq!(inside.bgcolor(), Color::Idx(21));

    let outside = screen.cell(4, 7).unwrap();
    assert_eq!(outside.fgcolor(), Color::Idx(7));
    assert_eq!(outside.bgcolor(), Color::Idx(0));
}

#[test]
fn test_render_row_offsets_frame() {
    let mut buffer = allocated(4, 2, false);
    buffer.line_set((0, 0), (3, 0), '=');
    buffer.line_set((0, 1), (3, 1), '-');

    let parser = emulate(&buffer, 6, 3);
    assert_eq!(
        screen_rows(&parser, 6, 4),
        vec!["    ", "    ", "====", "----", "    ", "    "]
    );
}

#[test]
fn test_frame_after_scroll() {
    let mut buffer = allocated(3, 3, true);
    buffer.set_all(0, 0, 'a', 1, 2);
    buffer.set_all(0, 1, 'b', 3, 4);
    buffer.scroll(-1);

    let parser = emulate(&buffer, 3, 1);
    let screen = parser.screen();
    assert_eq!(glyph_at(&parser, 0, 0), 'b');
    assert_eq!(screen.cell(0, 0).unwrap().fgcolor(), Color::Idx(3));
    assert_eq!(glyph_at(&parser, 1, 0), ' ');
    assert_eq!(glyph_at(&parser, 2, 0), ' ');
}

#[test]
fn test_depth_sorted_scene() {
    let mut buffer = Buffer::with_config(
        BufferConfig::default()
            .with_size(10, 6)
            .with_colour(true)
            .with_validation(ValidationMode::ClampOrDrop),
    );
    buffer.alloc().unwrap();

    // Near triangle drawn first, far one second: the near one must stay on top.
    buffer.triangle_set_z((0, 0, -1.0), (10, 0, -1.0), (0, 6, -1.0), Brush::all('N', 10, 0));
    buffer.triangle_set_z((0, 0, -4.0), (20, 0, -4.0), (0, 12, -4.0), Brush::all('F', 12, 0));

    let parser = emulate(&buffer, 6, 1);
    assert_eq!(glyph_at(&parser, 1, 1), 'N');
    assert_eq!(parser.screen().cell(1, 1).unwrap().fgcolor(), Color::Idx(10));
    assert_eq!(glyph_at(&parser, 4, 8), 'F');
}
