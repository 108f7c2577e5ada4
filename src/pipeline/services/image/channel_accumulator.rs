use image::Rgba;

// Rec. 601 luma weights in thousandths, so sums stay exact.
const LUMA_RED: u64 = 299;
const LUMA_GREEN: u64 = 587;
const LUMA_BLUE: u64 = 114;
const LUMA_SCALE: f64 = 1000.0;

/// Mean channel values over an analysis grid, all in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingStats {
    pub avg_brightness: f64,
    pub avg_red: f64,
    pub avg_blue: f64,
    pub pixel_count: u64,
}

impl LightingStats {
    pub fn warmth(&self) -> f64 {
        self.avg_red - self.avg_blue
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChannelAccumulator {
    total_luma_milli: u64,
    total_red: u64,
    total_blue: u64,
    pixel_count: u64,
}

impl ChannelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alpha is ignored.
    pub fn add(&mut self, pixel: &Rgba<u8>) {
        let [r, g, b, _] = pixel.0;
        let (r, g, b) = (r as u64, g as u64, b as u64);

        self.total_luma_milli += LUMA_RED * r + LUMA_GREEN * g + LUMA_BLUE * b;
        self.total_red += r;
        self.total_blue += b;
        self.pixel_count += 1;
    }

    /// `None` until at least one pixel has been added.
    pub fn averages(&self) -> Option<LightingStats> {
        if self.pixel_count == 0 {
            return None;
        }

        let count = self.pixel_count as f64;
        Some(LightingStats {
            avg_brightness: self.total_luma_milli as f64 / (count * LUMA_SCALE),
            avg_red: self.total_red as f64 / count,
            avg_blue: self.total_blue as f64 / count,
            pixel_count: self.pixel_count,
        })
    }
}

impl<'a> Extend<&'a Rgba<u8>> for ChannelAccumulator {
    fn extend<I: IntoIterator<Item = &'a Rgba<u8>>>(&mut self, iter: I) {
        for pixel in iter {
            self.add(pixel);
        }
    }
}

impl<'a> FromIterator<&'a Rgba<u8>> for ChannelAccumulator {
    fn from_iter<I: IntoIterator<Item = &'a Rgba<u8>>>(iter: I) -> Self {
        let mut accumulator = Self::new();
        accumulator.extend(iter);
        accumulator
    }
}
