//! Figure image loading.
//!
//! Pixels are stored bottom row first so that pixel coordinates share the
//! plot convention of an origin at the lower-left corner.

use std::path::Path;

use image::{imageops, RgbaImage};
use tracing::debug;

use crate::error::Result;
use crate::session::ClickEvent;

pub struct FigureImage {
    /// Row 0 is the bottom row of the figure.
    pixels: RgbaImage,
}

impl FigureImage {
    /// Decode a PNG/GIF/JPG file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path)?.to_rgba8();
        debug!(
            path = %path.display(),
            width = decoded.width(),
            height = decoded.height(),
            "figure loaded"
        );
        Ok(Self::from_top_down(decoded))
    }

    /// Wrap an image whose first row is the top of the figure.
    pub fn from_top_down(mut img: RgbaImage) -> Self {
        imageops::flip_vertical_in_place(&mut img);
        Self { pixels: img }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> [f64; 2] {
        [f64::from(self.width()), f64::from(self.height())]
    }

    /// RGBA value at `(x, y)` with `y` counted up from the bottom edge.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width() && y < self.height() {
            Some(self.pixels.get_pixel(x, y).0)
        } else {
            None
        }
    }

    /// Whether a plot-space position lies on the image, edges included.
    pub fn contains(&self, point: [f64; 2]) -> bool {
        let [w, h] = self.size();
        (0.0..=w).contains(&point[0]) && (0.0..=h).contains(&point[1])
    }

    /// Turn a pointer position into the click event the session expects.
    pub fn classify(&self, point: [f64; 2]) -> ClickEvent {
        if self.contains(point) {
            ClickEvent::Inside(point)
        } else {
            ClickEvent::Outside
        }
    }

    /// Texture data in screen row order (top row first).
    pub fn color_image(&self) -> egui::ColorImage {
        let top_down = imageops::flip_vertical(&self.pixels);
        let size = [top_down.width() as usize, top_down.height() as usize];
        egui::ColorImage::from_rgba_unmultiplied(size, top_down.as_flat_samples().as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn two_row_image() -> FigureImage {
        let mut img = RgbaImage::new(3, 2);
        for x in 0..3 {
            img.put_pixel(x, 0, Rgba([255, 0, 0, 255]));
            img.put_pixel(x, 1, Rgba([0, 0, 255, 255]));
        }
        FigureImage::from_top_down(img)
    }

    #[test]
    fn bottom_row_is_row_zero() {
        let fig = two_row_image();
        assert_eq!(fig.pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(fig.pixel(2, 1), Some([255, 0, 0, 255]));
        assert_eq!(fig.pixel(3, 0), None);
    }

    #[test]
    fn texture_restores_screen_order() {
        let fig = two_row_image();
        let tex = fig.color_image();
        assert_eq!(tex.size, [3, 2]);
        assert_eq!(tex.pixels[0], egui::Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn open_decodes_png_bottom_row_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.png");
        let mut img = RgbaImage::new(2, 3);
        for x in 0..2 {
            img.put_pixel(x, 0, Rgba([10, 20, 30, 255]));
            img.put_pixel(x, 1, Rgba([0, 0, 0, 255]));
            img.put_pixel(x, 2, Rgba([200, 100, 50, 255]));
        }
        img.save(&path).unwrap();

        let fig = FigureImage::open(&path).unwrap();
        assert_eq!((fig.width(), fig.height()), (2, 3));
        assert_eq!(fig.pixel(0, 0), Some([200, 100, 50, 255]));
        assert_eq!(fig.pixel(1, 2), Some([10, 20, 30, 255]));
    }

    #[test]
    fn open_missing_file_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FigureImage::open(dir.path().join("missing.png")).is_err());
    }

    #[test]
    fn clicks_off_the_image_are_outside() {
        let fig = two_row_image();
        assert_eq!(fig.classify([1.5, 1.0]), ClickEvent::Inside([1.5, 1.0]));
        assert_eq!(fig.classify([3.0, 2.0]), ClickEvent::Inside([3.0, 2.0]));
        assert_eq!(fig.classify([-0.1, 1.0]), ClickEvent::Outside);
        assert_eq!(fig.classify([1.0, 2.5]), ClickEvent::Outside);
    }
}
