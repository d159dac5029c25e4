use anyhow::{bail, Context, Result};
use bevy::prelude::*;
use chess_core::{Board, BoardConfig, BoardOptions, PositionSpec, RenderSurface, TextSurface};
use chess_ui::{BevySurface, BoardResource, ChessboardPlugin};
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[clap(about = "Draws a chessboard with pieces placed from a position description")]
struct Arguments {
    /// Selector of the container the board is drawn into
    #[clap(long)]
    container: Option<String>,

    /// Width of the container in pixels
    #[clap(long, default_value_t = 640.0, value_parser = parse_width)]
    width: f32,

    /// Show rank and file labels
    #[clap(long)]
    notation: bool,

    /// Turn the board upside down
    #[clap(long)]
    flip: bool,

    /// FEN piece placement, e.g. rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR
    #[clap(long, conflicts_with = "piece")]
    fen: Option<String>,

    /// Piece and its squares, e.g. wK=e1 or wP=a2,b2 (repeatable)
    #[clap(long)]
    piece: Vec<String>,

    /// Print the board as text instead of opening a window
    #[clap(long)]
    text: bool,

    #[clap(short, long)]
    verbose: bool,
}

impl Arguments {
    fn position(&self) -> Result<Option<PositionSpec>> {
        if let Some(fen) = &self.fen {
            return Ok(Some(PositionSpec::from_fen_placement(fen)?));
        }
        if self.piece.is_empty() {
            return Ok(None);
        }

        let mut spec = PositionSpec::new();
        for entry in &self.piece {
            let Some((piece, squares)) = entry.split_once('=') else {
                bail!("expected <piece>=<square>[,<square>...], got '{entry}'");
            };
            spec.append(piece.trim(), squares.split(',').map(str::trim));
        }
        Ok(Some(spec))
    }

    fn options(&self) -> Result<BoardOptions> {
        Ok(BoardOptions {
            container: self.container.clone(),
            position: self.position().context("Failed to read the position")?,
            show_notation: self.notation.then_some(true),
        })
    }
}

fn parse_width(text: &str) -> std::result::Result<f32, String> {
    let width: f32 = text.parse().map_err(|err| format!("{err}"))?;
    if !width.is_finite() || width <= 0.0 {
        return Err(format!("width must be a positive number of pixels, got {text}"));
    }
    Ok(width)
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    let config = BoardConfig::from_options(&arguments.options()?);

    if arguments.text {
        env_logger::Builder::new()
            .filter_level(if arguments.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            })
            .init();

        let surface = TextSurface::new().with_container(config.container.clone(), arguments.width);
        let board = build_board(config, surface, arguments.flip)?;
        let text = board
            .surface()
            .render(&board.config().container)
            .context("Board was not attached to its container")?;
        println!("{text}");
        return Ok(());
    }

    let surface = BevySurface::new().with_container(config.container.clone(), arguments.width);
    let board = build_board(config, surface, arguments.flip)?;

    App::new()
        .add_plugins(ChessboardPlugin {
            title: "Chessboard".into(),
            px_size: board.px_size(),
        })
        .insert_resource(BoardResource(board))
        .run();

    Ok(())
}

fn build_board<S: RenderSurface>(config: BoardConfig, surface: S, flip: bool) -> Result<Board<S>> {
    let mut board = Board::new(config, surface).context("Failed to set up the board")?;
    if flip {
        board.flip();
    }
    board.draw().context("Failed to draw the board")?;
    Ok(board)
}
