//! Core scroll-choreography logic: regions, snap synthesis, tween timelines

#[cfg(feature = "ssr")]
pub mod config;
pub mod easing;
pub mod scroll;
pub mod timeline;
#[cfg(test)]
mod tests;

pub use easing::Ease;
pub use scroll::{
    Coordinator, PinnedRange, RegionId, RegionRegistry, ScrollError, ScrollRegion, SnapMap,
    SNAP_BUFFER, SNAP_EASE, SNAP_MAX_DURATION, SNAP_MIN_DURATION,
};
pub use timeline::{Len, Playback, Pose, ScrollTimeline, Tween, Unit};
