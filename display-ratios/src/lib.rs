use crate::types::{AspectRatio, Resolution, COMMON_RATIOS};
use indexmap::IndexMap;
use log::trace;
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub mod types;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RatioError {
    #[error("display mode {width}x{height} has a zero dimension")]
    ZeroDimension { width: u32, height: u32 },
}

pub type RatioResult<T> = Result<T, RatioError>;

/// Group a resolution is listed under
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RatioBucket {
    /// No common ratio was within tolerance
    Unknown,
    Common(AspectRatio),
}

impl RatioBucket {
    pub fn of(resolution: &Resolution) -> Self {
        match resolution.closest_common_ratio() {
            Some(ratio) => RatioBucket::Common(ratio),
            None => RatioBucket::Unknown,
        }
    }
}

impl Display for RatioBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RatioBucket::Unknown => write!(f, "Unknown"),
            RatioBucket::Common(ratio) => write!(f, "{}", ratio),
        }
    }
}

/// Groups resolutions by their closest common aspect ratio.
///
/// The returned map always holds every bucket, starting with
/// [`RatioBucket::Unknown`] and followed by [`COMMON_RATIOS`] in table order,
/// so callers decide whether empty buckets are shown. Each bucket is sorted by
/// pixel count, keeping the input order for modes with the same count.
///
/// # Example Usage
/// ```
/// use display_ratios::{sort_resolutions, RatioBucket};
/// use display_ratios::types::{AspectRatio, Resolution};
///
/// let modes = vec![
///     Resolution::new(1920, 1080).unwrap(),
///     Resolution::new(1280, 720).unwrap(),
/// ];
/// let sorted = sort_resolutions(modes);
/// let wide = RatioBucket::Common(AspectRatio::new(16, 9).unwrap());
/// assert_eq!(sorted[&wide][0].to_string(), "1280x720");
/// ```
pub fn sort_resolutions<I>(resolutions: I) -> IndexMap<RatioBucket, Vec<Resolution>>
where
    I: IntoIterator<Item = Resolution>,
{
    let mut sorted: IndexMap<RatioBucket, Vec<Resolution>> =
        std::iter::once(RatioBucket::Unknown)
            .chain(COMMON_RATIOS.iter().copied().map(RatioBucket::Common))
            .map(|bucket| (bucket, Vec::new()))
            .collect();

    for resolution in resolutions {
        let bucket = RatioBucket::of(&resolution);
        if bucket == RatioBucket::Unknown {
            trace!(
                "{} has no common ratio, exact ratio {}",
                resolution,
                resolution.aspect_ratio().reduced()
            );
        }
        sorted.entry(bucket).or_insert_with(Vec::new).push(resolution);
    }

    for resolutions in sorted.values_mut() {
        resolutions.sort_by_key(Resolution::pixels);
    }
    sorted
}
