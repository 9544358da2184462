use crate::{config::ScreenConfig, error::EngineError};

/// The screen rectangle that receives the camera image: the largest region
/// with the image's aspect ratio, centered on the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappedRegion {
    pub width: i32,
    pub height: i32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl MappedRegion {
    pub fn compute(
        image_width: u32,
        image_height: u32,
        screen: &ScreenConfig,
    ) -> Result<Self, EngineError> {
        if image_width == 0 || image_height == 0 {
            return Err(EngineError::InvalidImageSize {
                width: image_width,
                height: image_height,
            });
        }
        screen.validate()?;

        let (iw, ih) = (image_width as i64, image_height as i64);
        let (sw, sh) = (screen.width as i64, screen.height as i64);

        // Aspect ratios compared by cross-multiplication so the branch and the
        // truncated sizes are exact.
        let region = if iw * sh > sw * ih {
            let height = sw * ih / iw;
            MappedRegion {
                width: sw as i32,
                height: height as i32,
                offset_x: 0,
                offset_y: ((sh - height) / 2) as i32,
            }
        } else {
            let width = sh * iw / ih;
            MappedRegion {
                width: width as i32,
                height: sh as i32,
                offset_x: ((sw - width) / 2) as i32,
                offset_y: 0,
            }
        };

        Ok(region)
    }

    /// Projects a normalized display-oriented point to pixels, truncating
    /// toward zero.
    pub fn to_pixel(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (self.offset_x as f32 + x * self.width as f32) as i32,
            (self.offset_y as f32 + y * self.height as f32) as i32,
        )
    }
}
