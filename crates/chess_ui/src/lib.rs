use bevy::{
    prelude::*,
    window::{PresentMode, WindowResolution},
};
use chess_core::{Board, ElementId, SquareColor, SquareView};

mod surface;

pub use surface::{BevySurface, BoardScene};

const WINDOW_MARGIN: f32 = 80.0;
const LABEL_SIZE_RATIO: f32 = 0.22;

/// The board shown in the window.
#[derive(Resource)]
pub struct BoardResource(pub Board<BevySurface>);

/// Opens a window sized for the board and mirrors its surface into sprites.
/// F flips the board, C clears it and R puts the configured position back.
pub struct ChessboardPlugin {
    pub title: String,
    pub px_size: f32,
}

#[derive(Component)]
struct BoardRoot(ElementId);

impl Plugin for ChessboardPlugin {
    fn build(&self, app: &mut App) {
        let side = self.px_size + WINDOW_MARGIN;
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.title.clone(),
                resolution: WindowResolution::new(side, side),
                present_mode: PresentMode::AutoVsync,
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::rgb(0.1, 0.1, 0.1)))
        .add_systems(Startup, setup)
        .add_systems(Update, (handle_input, sync_board_scene).chain());
    }
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn handle_input(keys: Res<Input<KeyCode>>, mut board: ResMut<BoardResource>) {
    let board = &mut board.0;

    if keys.just_pressed(KeyCode::F) {
        board.flip();
    }
    if keys.just_pressed(KeyCode::C) {
        board.clear();
    }
    if keys.just_pressed(KeyCode::R) {
        let initial = board.config().position.clone();
        if let Err(err) = board.apply_position(&initial) {
            error!("could not restore position: {err}");
        }
    }
}

fn sync_board_scene(
    mut commands: Commands,
    mut board: ResMut<BoardResource>,
    asset_server: Res<AssetServer>,
    roots: Query<(Entity, &BoardRoot)>,
) {
    for (id, scene) in board.0.surface_mut().take_dirty() {
        for (entity, root) in roots.iter() {
            if root.0 == id {
                commands.entity(entity).despawn_recursive();
            }
        }

        debug!(
            "rebuilding board {id} in {} ({} squares)",
            scene.container.as_deref().unwrap_or("?"),
            scene.squares.len()
        );
        spawn_board(&mut commands, id, &scene, &asset_server);
    }
}

fn spawn_board(
    commands: &mut Commands,
    id: ElementId,
    scene: &BoardScene,
    asset_server: &AssetServer,
) {
    let px_size = scene.style.px_size;

    commands
        .spawn((
            SpatialBundle::from_transform(Transform::from_rotation(Quat::from_rotation_z(
                scene.rotation.to_radians(),
            ))),
            BoardRoot(id),
        ))
        .with_children(|parent| {
            // Border
            parent.spawn(SpriteBundle {
                sprite: Sprite {
                    color: Color::BLACK,
                    custom_size: Some(Vec2::splat(px_size + 2.0)),
                    ..default()
                },
                ..default()
            });

            for square in &scene.squares {
                let center = square_center(square, px_size);
                parent.spawn(SpriteBundle {
                    sprite: Sprite {
                        color: square_fill(square.color),
                        custom_size: Some(Vec2::splat(square.size)),
                        ..default()
                    },
                    transform: Transform::from_translation(center.extend(1.0)),
                    ..default()
                });

                if let Some(piece) = &square.piece {
                    parent.spawn(SpriteBundle {
                        texture: asset_server.load(piece.asset.clone()),
                        sprite: Sprite {
                            custom_size: Some(Vec2::splat(square.size * 0.9)),
                            ..default()
                        },
                        transform: Transform::from_translation(center.extend(2.0)),
                        ..default()
                    });
                }

                let label_style = TextStyle {
                    font_size: square.size * LABEL_SIZE_RATIO,
                    color: square_fill(match square.color {
                        SquareColor::Light => SquareColor::Dark,
                        SquareColor::Dark => SquareColor::Light,
                    }),
                    ..default()
                };
                let inset = square.size * 0.38;
                if let Some(label) = &square.row_label {
                    parent.spawn(Text2dBundle {
                        text: Text::from_section(label.clone(), label_style.clone()),
                        transform: Transform::from_xyz(center.x - inset, center.y + inset, 3.0),
                        ..default()
                    });
                }
                if let Some(label) = &square.column_label {
                    parent.spawn(Text2dBundle {
                        text: Text::from_section(label.clone(), label_style),
                        transform: Transform::from_xyz(center.x + inset, center.y - inset, 3.0),
                        ..default()
                    });
                }
            }
        });
}

/// Centre of a square relative to the board's centre; row 0 is the top.
fn square_center(square: &SquareView, px_size: f32) -> Vec2 {
    let half = px_size / 2.0;
    Vec2::new(
        -half + square.column as f32 * square.size + square.size / 2.0,
        half - square.row as f32 * square.size - square.size / 2.0,
    )
}

fn square_fill(color: SquareColor) -> Color {
    match color {
        SquareColor::Light => Color::rgb(0.93, 0.93, 0.82),
        SquareColor::Dark => Color::rgb(0.46, 0.59, 0.34),
    }
}
