//! Mip chain sizing.
//!
//! Pure arithmetic: given base dimensions and a format, compute how many
//! levels the chain has and how many bytes each level occupies. Levels are
//! listed smallest first, the order the container stores them in.

use crate::tex::format::{BlockLayout, TextureFormat};

/// One level of a mip chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipLevel {
    /// Halvings from the base level (0 is full resolution).
    pub index: u32,
    pub width: u32,
    pub height: u32,
    /// Byte length of the level's data.
    pub size: usize,
}

/// Number of levels from `max(width, height)` down to 1, inclusive.
///
/// Returns 0 when both dimensions are zero.
///
/// # Example
///
/// ```
/// use texcodec::tex::mip_count;
///
/// assert_eq!(mip_count(256, 256), 9);
/// assert_eq!(mip_count(300, 2), 9);
/// assert_eq!(mip_count(1, 1), 1);
/// ```
pub fn mip_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).leading_zeros()
}

/// Dimensions of mip level `index`, never smaller than 1×1.
pub fn level_dimensions(width: u32, height: u32, index: u32) -> (u32, u32) {
    let shrink = |v: u32| v.checked_shr(index).unwrap_or(0).max(1);
    (shrink(width), shrink(height))
}

/// Byte length of a `width × height` surface in `layout`.
pub fn surface_size(width: u32, height: u32, layout: BlockLayout) -> usize {
    let blocks_wide = width.div_ceil(layout.edge) as usize;
    let blocks_high = height.div_ceil(layout.edge) as usize;
    layout.bytes * blocks_wide * blocks_high
}

/// The full chain for `format`, smallest level first.
///
/// Returns `None` for formats without a block layout.
pub fn mip_chain(width: u32, height: u32, format: TextureFormat) -> Option<Vec<MipLevel>> {
    let layout = format.block_layout()?;
    let chain = (0..mip_count(width, height))
        .rev()
        .map(|index| {
            let (w, h) = level_dimensions(width, height, index);
            MipLevel {
                index,
                width: w,
                height: h,
                size: surface_size(w, h, layout),
            }
        })
        .collect();
    Some(chain)
}

/// Level byte lengths for `format`, smallest level first.
pub fn level_sizes(width: u32, height: u32, format: TextureFormat) -> Option<Vec<usize>> {
    mip_chain(width, height, format).map(|chain| chain.iter().map(|l| l.size).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mip_count() {
        assert_eq!(mip_count(1, 1), 1);
        assert_eq!(mip_count(2, 1), 2);
        assert_eq!(mip_count(3, 3), 2);
        assert_eq!(mip_count(4, 4), 3);
        assert_eq!(mip_count(256, 256), 9);
        assert_eq!(mip_count(256, 16), 9);
        assert_eq!(mip_count(4096, 4096), 13);
        assert_eq!(mip_count(u16::MAX as u32, 1), 16);
    }

    #[test]
    fn test_256_dxt5_chain() {
        // 1×1, 2×2 and 4×4 each occupy one whole block
        assert_eq!(
            level_sizes(256, 256, TextureFormat::Dxt5).unwrap(),
            vec![16, 16, 16, 64, 256, 1024, 4096, 16384, 65536]
        );
    }

    #[test]
    fn test_512_dxt5_chain_tail() {
        let sizes = level_sizes(512, 512, TextureFormat::Dxt5).unwrap();
        assert_eq!(sizes.len(), 10);
        assert_eq!(
            &sizes[1..],
            &[16, 16, 64, 256, 1024, 4096, 16384, 65536, 262144]
        );
    }

    #[test]
    fn test_256_dxt1_chain() {
        assert_eq!(
            level_sizes(256, 256, TextureFormat::Dxt1).unwrap(),
            vec![8, 8, 8, 32, 128, 512, 2048, 8192, 32768]
        );
    }

    #[test]
    fn test_bgra8_uses_one_pixel_blocks() {
        assert_eq!(
            level_sizes(4, 2, TextureFormat::Bgra8).unwrap(),
            vec![4, 8, 32]
        );
    }

    #[test]
    fn test_non_square_chain_dimensions() {
        let chain = mip_chain(8, 2, TextureFormat::Dxt1).unwrap();
        let dims: Vec<(u32, u32)> = chain.iter().map(|l| (l.width, l.height)).collect();
        assert_eq!(dims, vec![(1, 1), (2, 1), (4, 1), (8, 2)]);
        assert_eq!(chain.first().unwrap().index, 3);
        assert_eq!(chain.last().unwrap().index, 0);
    }

    #[test]
    fn test_unsupported_format_has_no_chain() {
        assert!(mip_chain(64, 64, TextureFormat::Etc2).is_none());
        assert!(level_sizes(64, 64, TextureFormat::Unknown(5)).is_none());
    }

    #[test]
    fn test_level_dimensions_clamp() {
        assert_eq!(level_dimensions(16, 4, 3), (2, 1));
        assert_eq!(level_dimensions(16, 4, 40), (1, 1));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn last_level_is_full_resolution(
                width in 1u32..=4096,
                height in 1u32..=4096,
            ) {
                let chain = mip_chain(width, height, TextureFormat::Dxt5).unwrap();
                let last = chain.last().unwrap();
                prop_assert_eq!((last.width, last.height), (width, height));
                prop_assert_eq!(chain.len() as u32, mip_count(width, height));
            }

            #[test]
            fn smallest_level_is_one_pixel_edge(
                width in 1u32..=4096,
                height in 1u32..=4096,
            ) {
                let chain = mip_chain(width, height, TextureFormat::Bgra8).unwrap();
                let first = chain.first().unwrap();
                prop_assert_eq!(first.width.max(first.height), 1);
                prop_assert_eq!(first.size, 4);
            }

            #[test]
            fn sizes_never_shrink_towards_base(
                width in 1u32..=2048,
                height in 1u32..=2048,
            ) {
                let sizes = level_sizes(width, height, TextureFormat::Dxt1).unwrap();
                for pair in sizes.windows(2) {
                    prop_assert!(pair[0] <= pair[1]);
                }
            }
        }
    }
}
