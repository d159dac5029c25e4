use std::collections::HashMap;

use bevy::log::debug;
use chess_core::{BoardError, BoardStyle, ElementId, RenderSurface, Result, SquareView};

/// Scene description of one board element, rebuilt into sprites by
/// [`ChessboardPlugin`](crate::ChessboardPlugin).
#[derive(Debug, Clone)]
pub struct BoardScene {
    pub style: BoardStyle,
    pub squares: Vec<SquareView>,
    pub rotation: f32,
    pub container: Option<String>,
    dirty: bool,
}

/// Surface backed by bevy. Containers are named regions of the window with a
/// fixed width.
#[derive(Debug, Clone, Default)]
pub struct BevySurface {
    containers: HashMap<String, f32>,
    boards: Vec<BoardScene>,
}

impl BevySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, selector: impl Into<String>, width: f32) -> Self {
        self.containers.insert(selector.into(), width);
        self
    }

    pub fn scene(&self, board: ElementId) -> Option<&BoardScene> {
        self.boards.get(board)
    }

    /// Attached boards changed since the last call.
    pub fn take_dirty(&mut self) -> Vec<(ElementId, BoardScene)> {
        self.boards
            .iter_mut()
            .enumerate()
            .filter(|(_, scene)| scene.dirty && scene.container.is_some())
            .map(|(id, scene)| {
                scene.dirty = false;
                (id, scene.clone())
            })
            .collect()
    }

    fn scene_mut(&mut self, board: ElementId) -> Option<&mut BoardScene> {
        let scene = self.boards.get_mut(board)?;
        scene.dirty = true;
        Some(scene)
    }
}

impl RenderSurface for BevySurface {
    fn container_width(&self, selector: &str) -> Result<f32> {
        self.containers
            .get(selector)
            .copied()
            .ok_or_else(|| BoardError::ContainerNotFound(selector.to_string()))
    }

    fn create_board(&mut self, style: BoardStyle) -> ElementId {
        self.boards.push(BoardScene {
            style,
            squares: Vec::with_capacity(style.columns * style.columns),
            rotation: 0.0,
            container: None,
            dirty: false,
        });
        self.boards.len() - 1
    }

    fn append_square(&mut self, board: ElementId, square: &SquareView) {
        if let Some(scene) = self.scene_mut(board) {
            scene.squares.push(square.clone());
        }
    }

    fn update_square(&mut self, board: ElementId, square: &SquareView) {
        let Some(scene) = self.scene_mut(board) else {
            return;
        };
        if let Some(existing) = scene
            .squares
            .iter_mut()
            .find(|s| s.row == square.row && s.column == square.column)
        {
            *existing = square.clone();
        }
    }

    fn attach(&mut self, selector: &str, board: ElementId) -> Result<()> {
        if !self.containers.contains_key(selector) {
            return Err(BoardError::ContainerNotFound(selector.to_string()));
        }
        if let Some(scene) = self.scene_mut(board) {
            scene.container = Some(selector.to_string());
        }
        debug!("board {board} attached to {selector}");
        Ok(())
    }

    fn set_rotation(&mut self, board: ElementId, degrees: f32) {
        if let Some(scene) = self.scene_mut(board) {
            scene.rotation = degrees;
        }
    }
}
