//! RGB565 conversion and palette construction shared by BC1 and BC3.
//!
//! All interpolation uses truncating integer division. Endpoint expansion
//! is a plain left shift (no low-bit replication), which is what the game's
//! own tooling does.

/// Alpha below this is treated as transparent when encoding BC1.
pub const BC1_ALPHA_THRESHOLD: u8 = 128;

/// Convert RGB888 (8-bit per channel) to RGB565 (16-bit packed).
///
/// RGB565 format:
/// - Bits 15-11: Red (5 bits)
/// - Bits 10-5: Green (6 bits)
/// - Bits 4-0: Blue (5 bits)
pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r >> 3) as u16;
    let g6 = (g >> 2) as u16;
    let b5 = (b >> 3) as u16;
    (r5 << 11) | (g6 << 5) | b5
}

/// Expand RGB565 to RGB888 by shifting each field to the top of its byte.
pub fn rgb565_to_rgb888(color: u16) -> [u8; 3] {
    let r5 = (color >> 11) & 0x1F;
    let g6 = (color >> 5) & 0x3F;
    let b5 = color & 0x1F;
    [(r5 << 3) as u8, (g6 << 2) as u8, (b5 << 3) as u8]
}

/// Build the 4-entry RGBA color palette for a pair of endpoints.
///
/// With `punch_through` set (BC1), `c0 <= c1` selects the 3-color mode:
/// entry 2 is the average of the endpoints and entry 3 is transparent black.
/// BC3 color data has no such mode and always passes `false`.
pub fn color_palette(c0: u16, c1: u16, punch_through: bool) -> [[u8; 4]; 4] {
    let [r0, g0, b0] = rgb565_to_rgb888(c0).map(u16::from);
    let [r1, g1, b1] = rgb565_to_rgb888(c1).map(u16::from);

    let first = [r0 as u8, g0 as u8, b0 as u8, 255];
    let second = [r1 as u8, g1 as u8, b1 as u8, 255];

    if c0 > c1 || !punch_through {
        [
            first,
            second,
            [
                ((2 * r0 + r1) / 3) as u8,
                ((2 * g0 + g1) / 3) as u8,
                ((2 * b0 + b1) / 3) as u8,
                255,
            ],
            [
                ((r0 + 2 * r1) / 3) as u8,
                ((g0 + 2 * g1) / 3) as u8,
                ((b0 + 2 * b1) / 3) as u8,
                255,
            ],
        ]
    } else {
        [
            first,
            second,
            [
                ((r0 + r1) / 2) as u8,
                ((g0 + g1) / 2) as u8,
                ((b0 + b1) / 2) as u8,
                255,
            ],
            [0, 0, 0, 0],
        ]
    }
}

/// Build the 8-entry BC3 alpha palette from two endpoints.
///
/// `a0 > a1` gives six interpolated steps; otherwise four steps followed by
/// the hard 0 and 255 values.
pub fn alpha_palette(a0: u8, a1: u8) -> [u8; 8] {
    let mut palette = [0u8; 8];
    palette[0] = a0;
    palette[1] = a1;

    let (a0, a1) = (a0 as u32, a1 as u32);
    if a0 > a1 {
        for k in 1..=6u32 {
            palette[k as usize + 1] = (((7 - k) * a0 + k * a1) / 7) as u8;
        }
    } else {
        for k in 1..=4u32 {
            palette[k as usize + 1] = (((5 - k) * a0 + k * a1) / 5) as u8;
        }
        palette[6] = 0;
        palette[7] = 255;
    }

    palette
}

/// Squared Euclidean distance over the RGB channels.
pub fn color_distance_squared(a: &[u8; 4], b: &[u8; 4]) -> u32 {
    let dr = a[0] as i32 - b[0] as i32;
    let dg = a[1] as i32 - b[1] as i32;
    let db = a[2] as i32 - b[2] as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Index of the closest palette color; the lowest index wins ties.
pub fn nearest_color_index(pixel: &[u8; 4], palette: &[[u8; 4]]) -> usize {
    let mut best_index = 0;
    let mut best_dist = u32::MAX;

    for (idx, candidate) in palette.iter().enumerate() {
        let dist = color_distance_squared(pixel, candidate);
        if dist < best_dist {
            best_dist = dist;
            best_index = idx;
        }
    }

    best_index
}

/// Index of the closest palette alpha; the lowest index wins ties.
pub fn nearest_alpha_index(alpha: u8, palette: &[u8; 8]) -> usize {
    let mut best_index = 0;
    let mut best_dist = u32::MAX;

    for (idx, &candidate) in palette.iter().enumerate() {
        let dist = (alpha as i32 - candidate as i32).unsigned_abs();
        if dist < best_dist {
            best_dist = dist;
            best_index = idx;
        }
    }

    best_index
}

/// Pick color endpoints as the RGB565 of the pixels with the smallest and
/// largest R+G+B sum.
///
/// Returns `(min_sum, max_sum)`. The first pixel reaching an extreme wins.
pub fn channel_sum_endpoints<'a, I>(pixels: I) -> (u16, u16)
where
    I: IntoIterator<Item = &'a [u8; 4]>,
{
    let mut min: Option<(u32, &[u8; 4])> = None;
    let mut max: Option<(u32, &[u8; 4])> = None;

    for pixel in pixels {
        let sum = pixel[0] as u32 + pixel[1] as u32 + pixel[2] as u32;
        if min.map_or(true, |(s, _)| sum < s) {
            min = Some((sum, pixel));
        }
        if max.map_or(true, |(s, _)| sum > s) {
            max = Some((sum, pixel));
        }
    }

    let to_565 = |p: Option<(u32, &[u8; 4])>| {
        p.map_or(0, |(_, px)| rgb888_to_rgb565(px[0], px[1], px[2]))
    };
    (to_565(min), to_565(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb565_primaries() {
        assert_eq!(rgb888_to_rgb565(0, 0, 0), 0x0000);
        assert_eq!(rgb888_to_rgb565(255, 255, 255), 0xFFFF);
        assert_eq!(rgb888_to_rgb565(255, 0, 0), 0xF800);
        assert_eq!(rgb888_to_rgb565(0, 255, 0), 0x07E0);
        assert_eq!(rgb888_to_rgb565(0, 0, 255), 0x001F);
    }

    #[test]
    fn test_rgb565_expansion_is_shift_only() {
        // No bit replication: full intensity expands to 248/252, not 255
        assert_eq!(rgb565_to_rgb888(0xFFFF), [248, 252, 248]);
        assert_eq!(rgb565_to_rgb888(0xF800), [248, 0, 0]);
        assert_eq!(rgb565_to_rgb888(0x07E0), [0, 252, 0]);
        assert_eq!(rgb565_to_rgb888(0x0000), [0, 0, 0]);
    }

    #[test]
    fn test_quantization_error_bounds() {
        for v in 0..=255u8 {
            let [r, g, b] = rgb565_to_rgb888(rgb888_to_rgb565(v, v, v));
            assert!(v - r < 8, "red {} -> {}", v, r);
            assert!(v - g < 4, "green {} -> {}", v, g);
            assert!(v - b < 8, "blue {} -> {}", v, b);
        }
    }

    #[test]
    fn test_color_palette_four_color_mode() {
        let palette = color_palette(0xFFFF, 0x0000, true);
        assert_eq!(palette[0], [248, 252, 248, 255]);
        assert_eq!(palette[1], [0, 0, 0, 255]);
        assert_eq!(palette[2], [165, 168, 165, 255]);
        assert_eq!(palette[3], [82, 84, 82, 255]);
    }

    #[test]
    fn test_color_palette_three_color_mode() {
        let palette = color_palette(0x0000, 0xFFFF, true);
        assert_eq!(palette[0], [0, 0, 0, 255]);
        assert_eq!(palette[1], [248, 252, 248, 255]);
        assert_eq!(palette[2], [124, 126, 124, 255]);
        assert_eq!(palette[3], [0, 0, 0, 0]);
    }

    #[test]
    fn test_color_palette_without_punch_through_ignores_order() {
        let palette = color_palette(0x0000, 0xFFFF, false);
        assert_eq!(palette[2], [82, 84, 82, 255]);
        assert_eq!(palette[3], [165, 168, 165, 255]);
    }

    #[test]
    fn test_alpha_palette_eight_step() {
        let palette = alpha_palette(255, 0);
        assert_eq!(palette, [255, 0, 218, 182, 145, 109, 72, 36]);
    }

    #[test]
    fn test_alpha_palette_six_step() {
        let palette = alpha_palette(0, 255);
        assert_eq!(palette, [0, 255, 51, 102, 153, 204, 0, 255]);
    }

    #[test]
    fn test_alpha_palette_equal_endpoints() {
        let palette = alpha_palette(100, 100);
        assert_eq!(palette, [100, 100, 100, 100, 100, 100, 0, 255]);
    }

    #[test]
    fn test_nearest_color_index_tie_picks_lowest() {
        let palette = [[10, 10, 10, 255], [10, 10, 10, 255], [0, 0, 0, 255]];
        assert_eq!(nearest_color_index(&[10, 10, 10, 255], &palette), 0);
        assert_eq!(nearest_color_index(&[1, 1, 1, 255], &palette), 2);
    }

    #[test]
    fn test_nearest_alpha_index_tie_picks_lowest() {
        let palette = [0, 255, 51, 102, 153, 204, 0, 255];
        assert_eq!(nearest_alpha_index(0, &palette), 0);
        assert_eq!(nearest_alpha_index(255, &palette), 1);
        assert_eq!(nearest_alpha_index(100, &palette), 3);
    }

    #[test]
    fn test_channel_sum_endpoints_first_extreme_wins() {
        let pixels = [
            [10, 20, 30, 255],
            [30, 20, 10, 255], // same sum as the first pixel
            [0, 0, 0, 255],
            [255, 255, 255, 255],
        ];
        let (lo, hi) = channel_sum_endpoints(pixels.iter());
        assert_eq!(lo, 0x0000);
        assert_eq!(hi, 0xFFFF);

        let ties = [[10, 20, 30, 255], [30, 20, 10, 255]];
        let (lo, hi) = channel_sum_endpoints(ties.iter());
        assert_eq!(lo, rgb888_to_rgb565(10, 20, 30));
        assert_eq!(hi, rgb888_to_rgb565(10, 20, 30));
    }

    #[test]
    fn test_channel_sum_endpoints_empty() {
        let pixels: [[u8; 4]; 0] = [];
        assert_eq!(channel_sum_endpoints(pixels.iter()), (0, 0));
    }
}
