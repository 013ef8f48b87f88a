//! Derived images for the page: the avatar and the social preview banner.

use std::path::{Path, PathBuf};

use image::{
    imageops::{self, FilterType},
    DynamicImage, GenericImageView, ImageFormat, RgbaImage,
};
use resvg::{tiny_skia, usvg};
use thiserror::Error;

use crate::content::{Profile, PROFILE};

pub const AVATAR_SIZE: u32 = 400;
pub const BANNER_WIDTH: u32 = 1200;
pub const BANNER_HEIGHT: u32 = 630;
pub const BANNER_PHOTO_SIZE: u32 = 420;
/// Top-left corner of the photo on the banner.
pub const BANNER_PHOTO_AT: (i64, i64) = (0, 105);

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("couldn't decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("couldn't write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("invalid banner svg: {0}")]
    Svg(#[from] usvg::Error),
    #[error("couldn't allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
}

#[derive(Debug, Clone)]
pub struct ImageConfig {
    pub input: PathBuf,
    pub avatar: PathBuf,
    /// `None` skips the banner.
    pub banner: Option<PathBuf>,
}

impl ImageConfig {
    /// Outputs next to the input in `dir`, as the page expects them.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input: dir.join("image.png"),
            avatar: dir.join("image.webp"),
            banner: Some(dir.join("og-image.png")),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self::in_dir("public")
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No input photo; nothing written.
    Skipped,
    Written {
        avatar: PathBuf,
        banner: Option<PathBuf>,
    },
}

pub fn optimize(config: &ImageConfig) -> Result<Outcome, ImageError> {
    if !config.input.exists() {
        tracing::info!(
            "no {} found, skipping image optimization",
            config.input.display()
        );
        return Ok(Outcome::Skipped);
    }

    let photo = image::open(&config.input).map_err(|source| ImageError::Decode {
        path: config.input.clone(),
        source,
    })?;
    tracing::debug!(
        width = photo.width(),
        height = photo.height(),
        "loaded {}",
        config.input.display()
    );

    // displayed at 144px, 400px covers 2x screens
    let avatar = cover_crop(&photo, AVATAR_SIZE, AVATAR_SIZE);
    save(
        &DynamicImage::ImageRgba8(avatar.to_rgba8()),
        &config.avatar,
        ImageFormat::WebP,
    )?;

    let banner = match &config.banner {
        Some(path) => {
            let banner = render_banner(&photo)?;
            save(&DynamicImage::ImageRgba8(banner), path, ImageFormat::Png)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(Outcome::Written {
        avatar: config.avatar.clone(),
        banner,
    })
}

fn save(img: &DynamicImage, path: &Path, format: ImageFormat) -> Result<(), ImageError> {
    img.save_with_format(path, format)
        .map_err(|source| ImageError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Scales `img` to cover `width` x `height` and crops the overflow, keeping
/// the top edge (faces sit high in portraits) and centering horizontally.
pub fn cover_crop(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return DynamicImage::new_rgba8(width, height);
    }
    let scale = f64::max(width as f64 / w as f64, height as f64 / h as f64);
    let scaled_w = ((w as f64 * scale).round() as u32).max(width);
    let scaled_h = ((h as f64 * scale).round() as u32).max(height);

    let resized = img.resize_exact(scaled_w, scaled_h, FilterType::Lanczos3);
    resized.crop_imm((scaled_w - width) / 2, 0, width, height)
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Vector layout of the 1200x630 banner, minus the photo.
pub fn banner_svg(profile: &Profile) -> String {
    let name = xml_escape(&profile.full_name());
    let headline = xml_escape(&profile.headline());
    let skills = xml_escape(&profile.banner_skills.join("  ·  "));
    let company = xml_escape(profile.company);
    let domain = xml_escape(profile.domain);

    format!(
        r##"<svg width="{BANNER_WIDTH}" height="{BANNER_HEIGHT}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="#050a07"/>
      <stop offset="100%" stop-color="#0a1a0c"/>
    </linearGradient>
  </defs>
  <rect width="{BANNER_WIDTH}" height="{BANNER_HEIGHT}" fill="url(#bg)"/>
  <circle cx="100" cy="100" r="280" fill="#16a34a" opacity="0.07"/>
  <circle cx="1150" cy="580" r="350" fill="#4ade80" opacity="0.05"/>
  <circle cx="700" cy="0" r="200" fill="#16a34a" opacity="0.04"/>
  <line x1="460" y1="100" x2="460" y2="530" stroke="#16a34a" stroke-width="1.5" opacity="0.4"/>
  <circle cx="210" cy="315" r="200" fill="#16a34a" opacity="0.15"/>
  <circle cx="210" cy="315" r="198" fill="none" stroke="#4ade80" stroke-width="2" opacity="0.5"/>
  <text x="520" y="240" font-family="Arial, sans-serif" font-size="58" font-weight="bold" fill="white" letter-spacing="-1">{name}</text>
  <rect x="520" y="258" width="580" height="3" rx="2" fill="#4ade80" opacity="0.8"/>
  <text x="520" y="318" font-family="Arial, sans-serif" font-size="30" fill="#4ade80" font-weight="600">{headline}</text>
  <text x="520" y="370" font-family="Arial, sans-serif" font-size="22" fill="#86efac" opacity="0.9">{skills}</text>
  <text x="520" y="420" font-family="Arial, sans-serif" font-size="20" fill="#6b7280">{company}</text>
  <rect x="520" y="470" width="180" height="40" rx="8" fill="#16a34a" opacity="0.2"/>
  <rect x="520" y="470" width="180" height="40" rx="8" fill="none" stroke="#16a34a" stroke-width="1" opacity="0.5"/>
  <text x="610" y="496" font-family="Arial, sans-serif" font-size="20" fill="#4ade80" text-anchor="middle" font-weight="600">{domain}</text>
</svg>"##
    )
}

/// Rasterizes the banner layout and places a cropped `photo` on its left.
pub fn render_banner(photo: &DynamicImage) -> Result<RgbaImage, ImageError> {
    let canvas_err = ImageError::Canvas {
        width: BANNER_WIDTH,
        height: BANNER_HEIGHT,
    };

    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(&banner_svg(&PROFILE), &opt)?;

    let Some(mut pixmap) = tiny_skia::Pixmap::new(BANNER_WIDTH, BANNER_HEIGHT) else {
        return Err(canvas_err);
    };
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha
    let raw = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect::<Vec<_>>();
    let mut banner = RgbaImage::from_raw(BANNER_WIDTH, BANNER_HEIGHT, raw).ok_or(canvas_err)?;

    let photo = cover_crop(photo, BANNER_PHOTO_SIZE, BANNER_PHOTO_SIZE).to_rgba8();
    let (x, y) = BANNER_PHOTO_AT;
    imageops::overlay(&mut banner, &photo, x, y);

    Ok(banner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;

    const RED: Rgba<u8> = Rgba([220, 20, 20, 255]);
    const BLUE: Rgba<u8> = Rgba([20, 20, 220, 255]);

    // tall portrait: red top half, blue bottom half
    fn portrait(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |_, y| if y < height / 2 { RED } else { BLUE });
        DynamicImage::ImageRgba8(img)
    }

    fn close_to(a: Rgba<u8>, b: Rgba<u8>) -> bool {
        a.0.iter().zip(b.0.iter()).all(|(x, y)| x.abs_diff(*y) <= 3)
    }

    #[test]
    fn test_cover_crop_keeps_top() {
        let cropped = cover_crop(&portrait(100, 200), 50, 50);
        assert_eq!(cropped.dimensions(), (50, 50));
        // scaled to 50x100, so the whole crop comes from the red half
        assert!(close_to(cropped.get_pixel(25, 5), RED));
        assert!(close_to(cropped.get_pixel(25, 40), RED));
    }

    #[test]
    fn test_cover_crop_centers_horizontally() {
        // wide image: left third red, rest blue
        let img = RgbaImage::from_fn(300, 100, |x, _| if x < 100 { RED } else { BLUE });
        let cropped = cover_crop(&DynamicImage::ImageRgba8(img), 100, 100);
        assert_eq!(cropped.dimensions(), (100, 100));
        // crop window is x in 100..200 of the source image
        assert!(close_to(cropped.get_pixel(50, 50), BLUE));
    }

    #[test]
    fn test_cover_crop_upscales_small_input() {
        let cropped = cover_crop(&portrait(40, 30), AVATAR_SIZE, AVATAR_SIZE);
        assert_eq!(cropped.dimensions(), (AVATAR_SIZE, AVATAR_SIZE));
    }

    #[test]
    fn test_banner_svg_escapes_text() {
        let svg = banner_svg(&PROFILE);
        assert!(svg.contains("QA Test Engineer &amp; Front-End Developer"));
        assert!(svg.contains(">Susanth Jegadeesan<"));
        assert!(svg.contains(r#"width="1200" height="630""#));
    }

    #[test]
    fn test_render_banner() {
        let banner = render_banner(&portrait(300, 600)).expect("banner should render");
        assert_eq!(banner.dimensions(), (BANNER_WIDTH, BANNER_HEIGHT));

        // photo sits at (0, 105)
        assert!(close_to(*banner.get_pixel(210, 120), RED));
        // opaque background outside the photo
        assert_eq!(banner.get_pixel(800, 600).0[3], 255);
    }

    #[test]
    fn test_optimize_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let config = ImageConfig::in_dir(dir.path());
        portrait(600, 900).save(&config.input).unwrap();

        let outcome = optimize(&config).expect("optimize should succeed");
        assert_eq!(
            outcome,
            Outcome::Written {
                avatar: config.avatar.clone(),
                banner: config.banner.clone(),
            }
        );

        let avatar_bytes = fs::read(&config.avatar).unwrap();
        assert_eq!(image::guess_format(&avatar_bytes).unwrap(), ImageFormat::WebP);
        assert_eq!(
            image::image_dimensions(&config.avatar).unwrap(),
            (AVATAR_SIZE, AVATAR_SIZE)
        );

        let banner_path = config.banner.as_ref().unwrap();
        let banner_bytes = fs::read(banner_path).unwrap();
        assert_eq!(image::guess_format(&banner_bytes).unwrap(), ImageFormat::Png);
        assert_eq!(
            image::image_dimensions(banner_path).unwrap(),
            (BANNER_WIDTH, BANNER_HEIGHT)
        );
    }

    #[test]
    fn test_optimize_without_banner() {
        let dir = tempfile::tempdir().unwrap();
        let config = ImageConfig {
            banner: None,
            ..ImageConfig::in_dir(dir.path())
        };
        portrait(200, 200).save(&config.input).unwrap();

        let outcome = optimize(&config).unwrap();
        assert!(matches!(outcome, Outcome::Written { banner: None, .. }));
        assert!(config.avatar.exists());
        assert!(!dir.path().join("og-image.png").exists());
    }

    #[test]
    fn test_optimize_skips_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = ImageConfig::in_dir(dir.path());

        assert_eq!(optimize(&config).unwrap(), Outcome::Skipped);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_optimize_rejects_corrupt_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = ImageConfig::in_dir(dir.path());
        fs::write(&config.input, b"definitely not a png").unwrap();

        let res = optimize(&config);
        assert!(matches!(res, Err(ImageError::Decode { .. })));
        assert!(!config.avatar.exists());
    }
}
