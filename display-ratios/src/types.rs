//! Value types describing display modes and the aspect ratios they are grouped by
use crate::{RatioError, RatioResult};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Largest distance between two decimal ratios that still counts as a match
pub const MAX_RATIO_ERROR: f64 = 0.1;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    /// Creates a ratio, rejecting a zero width or height
    pub fn new(width: u32, height: u32) -> RatioResult<Self> {
        if width == 0 || height == 0 {
            return Err(RatioError::ZeroDimension { width, height });
        }
        Ok(Self { width, height })
    }

    const fn common(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn decimal(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Divides both sides by their greatest common divisor, 1920:1200 becomes 8:5
    pub fn reduced(&self) -> AspectRatio {
        let gcd = num::integer::gcd(self.width, self.height);
        AspectRatio {
            width: self.width / gcd,
            height: self.height / gcd,
        }
    }

    /// Same ratio turned by 90 degrees, 16:9 becomes 9:16
    pub fn flipped(&self) -> AspectRatio {
        AspectRatio {
            width: self.height,
            height: self.width,
        }
    }

    /// Finds the entry of [`COMMON_RATIOS`] nearest to this ratio.
    ///
    /// Returns `None` when even the nearest entry is further than
    /// [`MAX_RATIO_ERROR`] away. Equally near entries resolve to the first one
    /// in table order.
    pub fn closest_common_ratio(&self) -> Option<AspectRatio> {
        let decimal = self.decimal();
        let error = |ratio: &AspectRatio| (ratio.decimal() - decimal).abs();
        COMMON_RATIOS
            .iter()
            .map(|ratio| (ratio, error(ratio)))
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .filter(|(_, error)| *error <= MAX_RATIO_ERROR)
            .map(|(ratio, _)| *ratio)
    }
}

impl Display for AspectRatio {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Ratios a display mode can be classified as, in the order menus list them
pub static COMMON_RATIOS: [AspectRatio; 10] = [
    AspectRatio::common(4, 3),
    AspectRatio::common(5, 4),
    AspectRatio::common(3, 2),
    AspectRatio::common(16, 10),
    AspectRatio::common(16, 9),
    AspectRatio::common(17, 9),
    AspectRatio::common(21, 9),
    AspectRatio::common(32, 9),
    AspectRatio::common(1, 1),
    AspectRatio::common(4, 1),
];

/// A display mode, always stored landscape so 600x800 and 800x600 are the same mode
#[derive(Debug, Copy, Clone)]
pub struct Resolution {
    width: u32,
    height: u32,
    ratio: Option<AspectRatio>,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> RatioResult<Self> {
        let ratio = AspectRatio::new(width.max(height), width.min(height))?;
        Ok(Self {
            width: ratio.width,
            height: ratio.height,
            ratio: ratio.closest_common_ratio(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        AspectRatio {
            width: self.width,
            height: self.height,
        }
    }

    /// Closest common ratio, computed once when the resolution was created
    pub fn closest_common_ratio(&self) -> Option<AspectRatio> {
        self.ratio
    }

    /// Pixel width and height as a panel in `orientation` expects them
    pub fn oriented(&self, orientation: Orientation) -> (u32, u32) {
        match orientation.is_rotated() {
            false => (self.width, self.height),
            true => (self.height, self.width),
        }
    }
}

impl PartialEq for Resolution {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl Eq for Resolution {}

impl Hash for Resolution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl TryFrom<(u32, u32)> for Resolution {
    type Error = RatioError;

    fn try_from((width, height): (u32, u32)) -> RatioResult<Self> {
        Resolution::new(width, height)
    }
}

impl From<Resolution> for AspectRatio {
    fn from(resolution: Resolution) -> Self {
        resolution.aspect_ratio()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    Landscape,
    Portrait,
    LandscapeFlipped,
    PortraitFlipped,
}

impl Orientation {
    pub const LIST: [Orientation; 4] = [
        Orientation::Landscape,
        Orientation::Portrait,
        Orientation::LandscapeFlipped,
        Orientation::PortraitFlipped,
    ];

    /// Maps the index display drivers report (DMDO_DEFAULT..DMDO_270)
    pub fn from_index(index: u32) -> Option<Self> {
        Self::LIST.get(index as usize).copied()
    }

    pub fn index(&self) -> u32 {
        match self {
            Orientation::Landscape => 0,
            Orientation::Portrait => 1,
            Orientation::LandscapeFlipped => 2,
            Orientation::PortraitFlipped => 3,
        }
    }

    pub fn degrees(&self) -> u32 {
        self.index() * 90
    }

    /// Portrait orientations swap the panel's width and height
    pub fn is_rotated(&self) -> bool {
        matches!(self, Orientation::Portrait | Orientation::PortraitFlipped)
    }

    /// Width and height of a mode currently shown in `self` once turned to `target`
    pub fn rotate_dimensions(&self, target: Orientation, width: u32, height: u32) -> (u32, u32) {
        if self.is_rotated() == target.is_rotated() {
            (width, height)
        } else {
            (height, width)
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Orientation::Landscape => "Landscape",
            Orientation::Portrait => "Portrait",
            Orientation::LandscapeFlipped => "Landscape, flipped",
            Orientation::PortraitFlipped => "Portrait, flipped",
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Landscape
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}° ({})", self.degrees(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ratio(width: u32, height: u32) -> AspectRatio {
        AspectRatio::new(width, height).unwrap()
    }

    fn res(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn decimal_is_width_over_height() {
        assert_eq!(ratio(16, 9).decimal(), 16.0 / 9.0);
        assert_eq!(ratio(1, 100).decimal(), 0.01);
        assert_eq!(ratio(7, 7).decimal(), 1.0);
    }

    #[test]
    fn common_ratios_classify_as_themselves() {
        for common in COMMON_RATIOS.iter() {
            assert_eq!(common.closest_common_ratio(), Some(*common));
        }
    }

    #[test]
    fn far_away_ratio_is_unknown() {
        assert_eq!(ratio(1, 100).closest_common_ratio(), None);
        // 2.9 sits between 21:9 (2.33) and 32:9 (3.56)
        assert_eq!(ratio(29, 10).closest_common_ratio(), None);
        // 4:1 itself matches, 5:1 is too far from it
        assert_eq!(ratio(5, 1).closest_common_ratio(), None);
    }

    #[test]
    fn tolerance_boundary() {
        // 2.0 misses 17:9 by about 0.11
        assert_eq!(ratio(2, 1).closest_common_ratio(), None);
        assert_eq!(ratio(19, 10).closest_common_ratio(), Some(ratio(17, 9)));
        assert_eq!(ratio(17, 10).closest_common_ratio(), Some(ratio(16, 9)));
    }

    #[test]
    fn tie_resolves_to_first_in_table() {
        // 11:6 is as far from 16:9 as from 17:9
        assert_eq!(ratio(11, 6).closest_common_ratio(), Some(ratio(16, 9)));
        // 31:20 sits halfway between 3:2 and 16:10
        assert_eq!(ratio(31, 20).closest_common_ratio(), Some(ratio(3, 2)));
        // 76:45 sits halfway between 16:10 and 16:9
        assert_eq!(ratio(76, 45).closest_common_ratio(), Some(ratio(16, 10)));
    }

    #[test]
    fn classifies_typical_modes() {
        assert_eq!(res(1920, 1080).closest_common_ratio(), Some(ratio(16, 9)));
        assert_eq!(res(800, 600).closest_common_ratio(), Some(ratio(4, 3)));
        assert_eq!(res(1366, 768).closest_common_ratio(), Some(ratio(16, 9)));
        assert_eq!(res(1280, 1024).closest_common_ratio(), Some(ratio(5, 4)));
        assert_eq!(res(1920, 1200).closest_common_ratio(), Some(ratio(16, 10)));
        assert_eq!(res(3440, 1440).closest_common_ratio(), Some(ratio(21, 9)));
        assert_eq!(res(5120, 1440).closest_common_ratio(), Some(ratio(32, 9)));
    }

    #[test]
    fn classification_is_repeatable() {
        let first = ratio(2560, 1080).closest_common_ratio();
        let second = ratio(2560, 1080).closest_common_ratio();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            AspectRatio::new(1920, 0),
            Err(RatioError::ZeroDimension { width: 1920, height: 0 })
        ));
        assert!(AspectRatio::new(0, 1080).is_err());
        assert!(Resolution::new(0, 0).is_err());
        assert!(Resolution::try_from((1080, 0)).is_err());
    }

    #[test]
    fn resolution_is_orientation_insensitive() {
        assert_eq!(res(600, 800), res(800, 600));
        assert_eq!(res(600, 800).width(), 800);
        assert_eq!(res(600, 800).height(), 600);
        let set: HashSet<Resolution> = vec![res(1080, 1920), res(1920, 1080)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn resolution_pixels_and_labels() {
        assert_eq!(res(3840, 2160).pixels(), 8_294_400);
        assert_eq!(res(1920, 1080).to_string(), "1920x1080");
        assert_eq!(ratio(16, 10).to_string(), "16:10");
        assert_eq!(AspectRatio::from(res(1080, 1920)), ratio(1920, 1080));
    }

    #[test]
    fn reduced_ratio() {
        assert_eq!(ratio(1920, 1200).reduced(), ratio(8, 5));
        assert_eq!(ratio(1366, 768).reduced(), ratio(683, 384));
        assert_eq!(ratio(4, 3).reduced(), ratio(4, 3));
        assert_eq!(ratio(16, 10).flipped(), ratio(10, 16));
    }

    #[test]
    fn orientation_labels_and_indices() {
        assert_eq!(Orientation::Landscape.to_string(), "0° (Landscape)");
        assert_eq!(Orientation::PortraitFlipped.to_string(), "270° (Portrait, flipped)");
        for orientation in Orientation::LIST.iter() {
            assert_eq!(Orientation::from_index(orientation.index()), Some(*orientation));
        }
        assert_eq!(Orientation::from_index(4), None);
        assert!(Orientation::Portrait.is_rotated());
        assert!(!Orientation::LandscapeFlipped.is_rotated());
    }

    #[test]
    fn rotation_swaps_only_on_parity_change() {
        let landscape = Orientation::Landscape;
        assert_eq!(
            landscape.rotate_dimensions(Orientation::Portrait, 1920, 1080),
            (1080, 1920)
        );
        assert_eq!(
            landscape.rotate_dimensions(Orientation::LandscapeFlipped, 1920, 1080),
            (1920, 1080)
        );
        assert_eq!(
            Orientation::Portrait.rotate_dimensions(Orientation::PortraitFlipped, 1080, 1920),
            (1080, 1920)
        );
        assert_eq!(res(1920, 1080).oriented(Orientation::Portrait), (1080, 1920));
        assert_eq!(res(1920, 1080).oriented(Orientation::Landscape), (1920, 1080));
    }
}
