//! The base-map surface: a textured quad under the thematic layers.
//!
//! The dashboard treats tile serving as an external capability; the desktop
//! build synthesizes a plausible surface texture per base-map style from
//! layered noise instead of fetching imagery. Swapping the style in the UI
//! regenerates the texture; feature composition is untouched.

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

use atlas::config::WORLD_SIZE;
use atlas::controls::{BaseMap, BaseMapStyle};

/// Resolution of the generated surface texture (pixels per axis).
const TEX_SIZE: usize = 512;

/// Noise seed for the region; fixed so every session renders the same
/// landscape.
const REGION_SEED: i32 = 20_240;

const ELEVATION_FREQUENCY: f32 = 0.012;
const MOISTURE_FREQUENCY: f32 = 0.02;

/// Elevations below this read as open water.
const WATER_LEVEL: f32 = 0.30;

/// Tracks which style the current surface texture was generated for.
#[derive(Resource, Default)]
pub struct BaseSurface {
    pub built: Option<BaseMapStyle>,
}

/// Marker for the base-map quad entity.
#[derive(Component)]
pub struct BaseMapQuad;

/// Spawn the map plane with a blank texture; the rebuild system fills it
/// on the first frame.
pub fn spawn_base_surface(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let image_handle = images.add(blank_image());

    let mesh = meshes.add(
        Mesh::new(
            bevy::render::mesh::PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        )
        .with_inserted_attribute(
            Mesh::ATTRIBUTE_POSITION,
            vec![
                [0.0, 0.0, 0.0],
                [WORLD_SIZE, 0.0, 0.0],
                [WORLD_SIZE, 0.0, WORLD_SIZE],
                [0.0, 0.0, WORLD_SIZE],
            ],
        )
        .with_inserted_attribute(
            Mesh::ATTRIBUTE_NORMAL,
            vec![
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
        )
        .with_inserted_attribute(
            Mesh::ATTRIBUTE_UV_0,
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        )
        .with_inserted_indices(bevy::render::mesh::Indices::U32(vec![0, 2, 1, 0, 3, 2])),
    );

    let material = materials.add(StandardMaterial {
        base_color_texture: Some(image_handle),
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        BaseMapQuad,
    ));
}

/// Regenerate the surface texture when the selected style changes.
pub fn rebuild_base_texture(
    base_map: Res<BaseMap>,
    mut surface: ResMut<BaseSurface>,
    quad_q: Query<&MeshMaterial3d<StandardMaterial>, With<BaseMapQuad>>,
    materials: Res<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    if surface.built == Some(base_map.0) {
        return;
    }

    let Ok(mat_handle) = quad_q.get_single() else {
        return;
    };
    let Some(mat) = materials.get(mat_handle) else {
        return;
    };
    let Some(ref tex_handle) = mat.base_color_texture else {
        return;
    };
    let Some(existing) = images.get_mut(tex_handle) else {
        return;
    };

    *existing = generate_surface_image(base_map.0);
    surface.built = Some(base_map.0);
}

fn blank_image() -> Image {
    let data = vec![0u8; TEX_SIZE * TEX_SIZE * 4];
    let mut image = Image::new(
        Extent3d {
            width: TEX_SIZE as u32,
            height: TEX_SIZE as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    image.sampler = bevy::image::ImageSampler::linear();
    image
}

/// Generate the surface texture for a style from two noise fields.
fn generate_surface_image(style: BaseMapStyle) -> Image {
    let mut elevation_noise = FastNoiseLite::with_seed(REGION_SEED);
    elevation_noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    elevation_noise.set_frequency(Some(ELEVATION_FREQUENCY));
    elevation_noise.set_fractal_type(Some(FractalType::FBm));
    elevation_noise.set_fractal_octaves(Some(4));

    let mut moisture_noise = FastNoiseLite::with_seed(REGION_SEED.wrapping_add(7_777));
    moisture_noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    moisture_noise.set_frequency(Some(MOISTURE_FREQUENCY));
    moisture_noise.set_fractal_type(Some(FractalType::FBm));
    moisture_noise.set_fractal_octaves(Some(3));

    let mut data = Vec::with_capacity(TEX_SIZE * TEX_SIZE * 4);
    for py in 0..TEX_SIZE {
        for px in 0..TEX_SIZE {
            let elevation =
                (elevation_noise.get_noise_2d(px as f32, py as f32) + 1.0) * 0.5;
            let moisture = (moisture_noise.get_noise_2d(px as f32, py as f32) + 1.0) * 0.5;
            let [r, g, b] = shade(style, elevation, moisture);
            data.extend_from_slice(&[r, g, b, 255]);
        }
    }

    let mut image = Image::new(
        Extent3d {
            width: TEX_SIZE as u32,
            height: TEX_SIZE as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    image.sampler = bevy::image::ImageSampler::linear();
    image
}

/// Landcover color for one pixel given the style and the two noise fields.
fn shade(style: BaseMapStyle, elevation: f32, moisture: f32) -> [u8; 3] {
    let water = elevation < WATER_LEVEL;
    match style {
        BaseMapStyle::Satellite => {
            if water {
                return lerp_rgb([18, 48, 58], [28, 72, 82], elevation / WATER_LEVEL);
            }
            // Dry scrub through dense forest, darkened toward high ground.
            let cover = lerp_rgb([112, 98, 58], [32, 78, 40], moisture);
            darken(cover, 1.0 - (elevation - WATER_LEVEL) * 0.35)
        }
        BaseMapStyle::Vegetation => {
            if water {
                return [24, 40, 86];
            }
            // NDVI-like ramp: bare soil to vigorous canopy.
            lerp_rgb([158, 122, 74], [20, 108, 46], moisture)
        }
        BaseMapStyle::Terrain => {
            if water {
                return [104, 150, 178];
            }
            // Hypsometric tints: lowland green, mid tan, highland brown.
            let t = (elevation - WATER_LEVEL) / (1.0 - WATER_LEVEL);
            if t < 0.5 {
                lerp_rgb([140, 168, 120], [196, 178, 128], t * 2.0)
            } else {
                lerp_rgb([196, 178, 128], [150, 118, 90], (t - 0.5) * 2.0)
            }
        }
        BaseMapStyle::Osm => {
            if water {
                return [170, 211, 223];
            }
            // Cartographic beige with faint green where vegetation is dense.
            lerp_rgb([242, 239, 233], [205, 223, 170], (moisture - 0.5).max(0.0) * 1.6)
        }
    }
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    [
        (a[0] as f32 + (b[0] as f32 - a[0] as f32) * t) as u8,
        (a[1] as f32 + (b[1] as f32 - a[1] as f32) * t) as u8,
        (a[2] as f32 + (b[2] as f32 - a[2] as f32) * t) as u8,
    ]
}

fn darken(rgb: [u8; 3], factor: f32) -> [u8; 3] {
    let f = factor.clamp(0.0, 1.0);
    [
        (rgb[0] as f32 * f) as u8,
        (rgb[1] as f32 * f) as u8,
        (rgb[2] as f32 * f) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_is_deterministic_per_style() {
        for style in atlas::controls::ALL_BASE_MAPS {
            assert_eq!(shade(style, 0.6, 0.4), shade(style, 0.6, 0.4));
        }
    }

    #[test]
    fn styles_disagree_on_land_color() {
        let sat = shade(BaseMapStyle::Satellite, 0.6, 0.7);
        let osm = shade(BaseMapStyle::Osm, 0.6, 0.7);
        assert_ne!(sat, osm);
    }

    #[test]
    fn water_is_blue_leaning_on_osm() {
        let [r, _g, b] = shade(BaseMapStyle::Osm, 0.1, 0.5);
        assert!(b > r, "osm water should lean blue");
    }

    #[test]
    fn lerp_rgb_endpoints() {
        assert_eq!(lerp_rgb([0, 0, 0], [255, 255, 255], 0.0), [0, 0, 0]);
        assert_eq!(lerp_rgb([0, 0, 0], [255, 255, 255], 1.0), [255, 255, 255]);
        // Out-of-range t clamps.
        assert_eq!(lerp_rgb([10, 10, 10], [20, 20, 20], 2.0), [20, 20, 20]);
    }

    #[test]
    fn generated_image_has_expected_extent() {
        let image = generate_surface_image(BaseMapStyle::Terrain);
        assert_eq!(image.texture_descriptor.size.width, TEX_SIZE as u32);
        assert_eq!(image.texture_descriptor.size.height, TEX_SIZE as u32);
    }
}
