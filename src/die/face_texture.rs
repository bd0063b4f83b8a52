//! Procedural face textures
//!
//! Each face is a square white image with round black pips at the positions
//! from [`pip_layout`]. Layout y points up, so image row 0 is y = 1.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

use crate::die::geometry::pip_layout;
use crate::die::types::{AppSettings, FaceValue};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceStyle {
    /// Edge length in pixels
    pub size: u32,
    /// Pip diameter as a fraction of the edge
    pub pip_diameter: f32,
    pub background: [u8; 4],
    pub pip: [u8; 4],
}

impl Default for FaceStyle {
    fn default() -> Self {
        let settings = AppSettings::default();
        Self {
            size: settings.texture_size,
            pip_diameter: settings.pip_diameter,
            background: [255, 255, 255, 255],
            pip: [0, 0, 0, 255],
        }
    }
}

impl FaceStyle {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            size: settings.texture_size,
            pip_diameter: settings.pip_diameter,
            ..Self::default()
        }
    }
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// Draw one face. Pip edges are anti-aliased by approximate pixel coverage.
pub fn render_face(face: FaceValue, style: &FaceStyle) -> RgbaImage {
    let size = style.size.max(1);
    let side = size as f32;
    let radius = style.pip_diameter * side / 2.0;

    let centers: Vec<Vec2> = pip_layout(face)
        .iter()
        .map(|p| Vec2::new(p.x * side, (1.0 - p.y) * side))
        .collect();

    RgbaImage::from_fn(size, size, |x, y| {
        let pixel = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
        let coverage = centers
            .iter()
            .map(|c| (radius + 0.5 - pixel.distance(*c)).clamp(0.0, 1.0))
            .fold(0.0_f32, f32::max);

        let bg = style.background;
        let fg = style.pip;
        Rgba([
            lerp_u8(bg[0], fg[0], coverage),
            lerp_u8(bg[1], fg[1], coverage),
            lerp_u8(bg[2], fg[2], coverage),
            lerp_u8(bg[3], fg[3], coverage),
        ])
    })
}

fn bevy_image_from_rgba8(width: u32, height: u32, rgba: Vec<u8>) -> Image {
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        rgba,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

/// [`render_face`] as a Bevy image ready to be added to `Assets<Image>`.
pub fn face_image(face: FaceValue, style: &FaceStyle) -> Image {
    let img = render_face(face, style);
    let (width, height) = img.dimensions();
    bevy_image_from_rgba8(width, height, img.into_raw())
}

pub fn face_file_name(face: FaceValue) -> String {
    format!("face_{}.png", face)
}

/// Write `face_1.png` .. `face_6.png` into `out_dir`.
pub fn export_faces(out_dir: &Path, style: &FaceStyle) -> Result<Vec<PathBuf>, String> {
    std::fs::create_dir_all(out_dir)
        .map_err(|e| format!("Failed to create output dir {:?}: {}", out_dir, e))?;

    let mut written = Vec::with_capacity(FaceValue::ALL.len());
    for face in FaceValue::ALL {
        let path = out_dir.join(face_file_name(face));
        render_face(face, style)
            .save(&path)
            .map_err(|e| format!("Failed to save face png {:?}: {}", path, e))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn small_style() -> FaceStyle {
        FaceStyle {
            size: 100,
            pip_diameter: 0.16,
            ..FaceStyle::default()
        }
    }

    #[test]
    fn test_default_style_matches_reference_drawing() {
        let style = FaceStyle::default();
        assert_eq!(style.size, 512);
        assert!((style.pip_diameter * 512.0 - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_pip_centers_are_dark_and_corners_white() {
        let style = small_style();
        for face in FaceValue::ALL {
            let img = render_face(face, &style);
            assert_eq!(img.dimensions(), (100, 100));
            assert_eq!(*img.get_pixel(0, 0), WHITE);
            assert_eq!(*img.get_pixel(99, 99), WHITE);
            for p in pip_layout(face) {
                let x = (p.x * 100.0) as u32;
                let y = ((1.0 - p.y) * 100.0) as u32;
                assert_eq!(*img.get_pixel(x, y), BLACK, "face {} at {:?}", face, p);
            }
        }
    }

    #[test]
    fn test_face_one_has_blank_quarter_points() {
        let img = render_face(FaceValue::ONE, &small_style());
        assert_eq!(*img.get_pixel(30, 30), WHITE);
        assert_eq!(*img.get_pixel(70, 70), WHITE);
    }

    #[test]
    fn test_two_uses_y_up_diagonal() {
        // (0.3, 0.3) and (0.7, 0.7) with y up land bottom-left and top-right.
        let img = render_face(FaceValue::TWO, &small_style());
        assert_eq!(*img.get_pixel(30, 70), BLACK);
        assert_eq!(*img.get_pixel(70, 30), BLACK);
        assert_eq!(*img.get_pixel(30, 30), WHITE);
    }

    #[test]
    fn test_face_image_has_rgba_data() {
        let image = face_image(FaceValue::FIVE, &small_style());
        assert_eq!(image.width(), 100);
        assert_eq!(image.height(), 100);
        assert_eq!(image.data.as_ref().map(|d| d.len()), Some(100 * 100 * 4));
    }

    #[test]
    fn test_export_faces_writes_six_pngs() {
        let dir = std::env::temp_dir().join(format!("rolldice-faces-{}", std::process::id()));
        let style = FaceStyle {
            size: 32,
            ..FaceStyle::default()
        };
        let written = export_faces(&dir, &style).unwrap();
        assert_eq!(written.len(), 6);
        for path in &written {
            let img = image::open(path).unwrap();
            assert_eq!(img.width(), 32);
        }
        let _ = std::fs::remove_dir_all(&dir);
    }
}
