//! Scene setup system
//!
//! Spawns the camera, lights, the die with its six textured faces, and the
//! roll button with its status line.

use bevy::prelude::*;

use crate::die::face_texture::{face_image, FaceStyle};
use crate::die::geometry::upright_rotation;
use crate::die::l10n::Language;
use crate::die::meshes::{create_d6, create_face_quad, face_quad_offset, face_quad_rotation};
use crate::die::types::*;
use crate::die::RollEngine;

/// Main setup system - initializes the scene and UI
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    asset_server: Res<AssetServer>,
    settings: Res<AppSettings>,
    engine: Res<RollEngine>,
    language: Res<Language>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 2.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
        Name::new("MainCamera"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 8.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));

    commands.spawn((
        PointLight {
            intensity: 400_000.0,
            range: 30.0,
            ..default()
        },
        Transform::from_xyz(3.0, 4.0, 5.0),
    ));

    let (body_mesh, face_normals) = create_d6();
    let body_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.6,
        reflectance: 0.3,
        ..default()
    });
    let quad = meshes.add(create_face_quad());
    let style = FaceStyle::from_settings(&settings);

    commands
        .spawn((
            Mesh3d(meshes.add(body_mesh)),
            MeshMaterial3d(body_material),
            Transform::from_rotation(upright_rotation(engine.current_face())),
            DieBody,
            Name::new("Die"),
        ))
        .with_children(|parent| {
            for (normal, face) in face_normals {
                let texture = images.add(face_image(face, &style));
                let material = materials.add(StandardMaterial {
                    base_color_texture: Some(texture),
                    base_color: Color::WHITE,
                    perceptual_roughness: 0.6,
                    ..default()
                });
                parent.spawn((
                    Mesh3d(quad.clone()),
                    MeshMaterial3d(material),
                    Transform::from_translation(face_quad_offset(normal))
                        .with_rotation(face_quad_rotation(normal)),
                    DieFaceQuad { face },
                    Name::new(format!("DieFace_{}", face)),
                ));
            }
        });

    let font: Handle<Font> = settings
        .font_path
        .as_ref()
        .map(|path| asset_server.load(path.clone()))
        .unwrap_or_default();
    spawn_roll_ui(&mut commands, *language, font);

    info!(
        "Die scene spawned showing {} ({} px faces)",
        engine.current_face(),
        style.size
    );
}

fn spawn_roll_ui(commands: &mut Commands, language: Language, font: Handle<Font>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                bottom: Val::Px(16.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(10.0),
                ..default()
            },
            Name::new("RollPanel"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(language.text("status.hint")),
                TextFont {
                    font: font.clone(),
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.9)),
                ResultText,
            ));

            parent
                .spawn((
                    Button,
                    Node {
                        width: Val::Px(200.0),
                        height: Val::Px(40.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(ROLL_BUTTON_IDLE_BG),
                    RollButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new(language.text("action.roll")),
                        TextFont {
                            font,
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                        RollButtonLabel,
                    ));
                });
        });
}
