//! Scroll-snap synthesis over independently registered scroll regions.
//!
//! Page sections register [`ScrollRegion`]s — pinned spans where the
//! viewport holds a section while its timeline plays, or flowing spans with
//! ordinary scrolling — into a [`RegionRegistry`] they reach through a
//! shared handle. The [`Coordinator`] waits until every section has
//! reported in, then derives a single [`SnapMap`]: a pure function that
//! pulls a settled scroll position toward the nearest pinned midpoint while
//! leaving flowing stretches untouched.
//!
//! Everything here is DOM-free; the browser driver lives in `ui::scroll`.

use crate::core::easing::Ease;

/// Tolerance band, in normalized scroll fractions, extending each pinned
/// range on both sides when deciding whether a position is "in" it.
pub const SNAP_BUFFER: f64 = 0.02;

/// Snap animation duration bounds, seconds.
pub const SNAP_MIN_DURATION: f64 = 0.15;
pub const SNAP_MAX_DURATION: f64 = 0.35;

/// Normalized snap distance at which the animation reaches its maximum
/// duration; shorter hops scale down linearly toward the minimum.
const SNAP_FULL_DISTANCE: f64 = 0.25;

/// Curve used when animating toward a snap target.
pub const SNAP_EASE: Ease = Ease::CubicOut;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ScrollError {
    #[error("scroll region end {end} precedes start {start}")]
    InvertedRegion { start: f64, end: f64 },
    #[error("scroll region bounds must be finite")]
    NonFiniteRegion,
    #[error("pinned region [{start}, {end}] overlaps an existing pinned region")]
    OverlappingPin { start: f64, end: f64 },
}

/// One registered scroll-triggered behavior, in raw document offsets.
///
/// `start == end` marks an instantaneous trigger (reveal-on-enter).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    pub start: f64,
    pub end: f64,
    pub pinned: bool,
}

impl ScrollRegion {
    pub fn new(start: f64, end: f64, pinned: bool) -> Result<Self, ScrollError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScrollError::NonFiniteRegion);
        }
        if end < start {
            return Err(ScrollError::InvertedRegion { start, end });
        }
        Ok(Self { start, end, pinned })
    }

    pub fn flowing(start: f64, end: f64) -> Result<Self, ScrollError> {
        Self::new(start, end, false)
    }

    pub fn pinned(start: f64, end: f64) -> Result<Self, ScrollError> {
        Self::new(start, end, true)
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Interior overlap; regions that merely touch at an endpoint do not
    /// overlap.
    fn overlaps(&self, other: &ScrollRegion) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A pinned region normalized against the total scrollable distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedRange {
    pub start: f64,
    pub end: f64,
    pub center: f64,
}

impl PinnedRange {
    fn from_region(region: &ScrollRegion, max_scroll: f64) -> Self {
        let start = region.start / max_scroll;
        let end = region.end / max_scroll;
        Self {
            start,
            end,
            center: start + (end - start) * 0.5,
        }
    }

    /// Whether `v` falls inside the range extended by [`SNAP_BUFFER`] on
    /// both sides. Boundaries are inclusive.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.start - SNAP_BUFFER && v <= self.end + SNAP_BUFFER
    }
}

/// The installed snap rule: captured pinned ranges plus the duration
/// policy. Pure once built; never observes later registry changes.
#[derive(Clone, Debug)]
pub struct SnapMap {
    ranges: Vec<PinnedRange>,
}

impl SnapMap {
    /// Derive a snap map from the registered regions.
    ///
    /// Returns `None` — free scrolling, not an error — when no region is
    /// pinned or the scrollable distance is zero or unusable.
    pub fn build(regions: &[ScrollRegion], max_scroll: f64) -> Option<Self> {
        if !max_scroll.is_finite() || max_scroll <= 0.0 {
            return None;
        }
        let mut pinned: Vec<&ScrollRegion> = regions.iter().filter(|r| r.pinned).collect();
        if pinned.is_empty() {
            return None;
        }
        pinned.sort_by(|a, b| a.start.total_cmp(&b.start));
        let ranges = pinned
            .into_iter()
            .map(|r| PinnedRange::from_region(r, max_scroll))
            .collect();
        Some(Self { ranges })
    }

    pub fn ranges(&self) -> &[PinnedRange] {
        &self.ranges
    }

    /// Map a candidate normalized position to its snap target.
    ///
    /// Outside every buffered pinned range the input passes through
    /// unchanged. Inside one, the result is the center of whichever range
    /// has the closest center; comparison is strict, so the
    /// earliest-sorted range wins exact ties.
    pub fn snap_to(&self, v: f64) -> f64 {
        if !self.ranges.iter().any(|r| r.contains(v)) {
            return v;
        }
        let mut target = self.ranges[0].center;
        for range in &self.ranges[1..] {
            if (range.center - v).abs() < (target - v).abs() {
                target = range.center;
            }
        }
        target
    }

    /// Animation duration for a snap from `from` to `to`, scaled by the
    /// normalized distance and clamped to the configured bounds.
    pub fn duration_for(&self, from: f64, to: f64) -> f64 {
        let factor = ((to - from).abs() / SNAP_FULL_DISTANCE).clamp(0.0, 1.0);
        SNAP_MIN_DURATION + (SNAP_MAX_DURATION - SNAP_MIN_DURATION) * factor
    }
}

/// Handle returned by [`RegionRegistry::add`], used to remove the entry
/// when its section unmounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

/// The owned registry of scroll regions.
///
/// Sections add and remove only their own entries; the coordinator only
/// enumerates. Handed around by reference, never ambient.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    entries: Vec<(RegionId, ScrollRegion)>,
    next: u64,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region. A pinned region whose interior overlaps an
    /// already-registered pinned region is rejected; overlapping pins have
    /// no well-defined snap target.
    pub fn add(&mut self, region: ScrollRegion) -> Result<RegionId, ScrollError> {
        if region.pinned {
            for (_, existing) in &self.entries {
                if existing.pinned && existing.overlaps(&region) {
                    return Err(ScrollError::OverlappingPin {
                        start: region.start,
                        end: region.end,
                    });
                }
            }
        }
        let id = RegionId(self.next);
        self.next += 1;
        self.entries.push((id, region));
        Ok(id)
    }

    pub fn remove(&mut self, id: RegionId) -> Option<ScrollRegion> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScrollRegion> {
        self.entries.iter().map(|(_, region)| region)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Readiness-counted snap installation.
///
/// Constructed with the number of sections expected to report. Each
/// section calls [`Coordinator::section_done`] exactly once after
/// registering its regions (or after silently skipping registration), and
/// the driver installs the snap map when the count is reached — or when a
/// bounded fallback elapses, so one stalled section cannot block the page.
///
/// Install happens at most once per coordinator; teardown disposes every
/// region unconditionally and may be called any number of times, including
/// before setup ever completed.
#[derive(Debug)]
pub struct Coordinator {
    registry: RegionRegistry,
    expected: usize,
    reported: usize,
    snap: Option<SnapMap>,
    installed: bool,
    torn_down: bool,
}

impl Coordinator {
    pub fn new(expected: usize) -> Self {
        Self {
            registry: RegionRegistry::new(),
            expected,
            reported: 0,
            snap: None,
            installed: false,
            torn_down: false,
        }
    }

    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    pub fn register(&mut self, region: ScrollRegion) -> Result<RegionId, ScrollError> {
        self.registry.add(region)
    }

    pub fn remove(&mut self, id: RegionId) -> Option<ScrollRegion> {
        self.registry.remove(id)
    }

    /// Record one section's completion; returns whether every expected
    /// section has now reported.
    pub fn section_done(&mut self) -> bool {
        self.reported += 1;
        self.ready()
    }

    pub fn ready(&self) -> bool {
        self.reported >= self.expected
    }

    /// Build and capture the snap map from the current registry state.
    /// Only the first call does anything; the result may still be `None`
    /// (no pinned regions, or nothing to scroll).
    pub fn install(&mut self, max_scroll: f64) -> Option<&SnapMap> {
        if !self.installed && !self.torn_down {
            self.installed = true;
            let regions: Vec<ScrollRegion> = self.registry.iter().copied().collect();
            self.snap = SnapMap::build(&regions, max_scroll);
        }
        self.snap.as_ref()
    }

    pub fn installed(&self) -> bool {
        self.installed
    }

    pub fn snap(&self) -> Option<&SnapMap> {
        self.snap.as_ref()
    }

    /// Dispose every registered region and the snap map, whether or not
    /// installation ever ran. Returns the number of regions released;
    /// repeat calls release nothing and are harmless.
    pub fn teardown(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        self.torn_down = true;
        self.snap = None;
        let released = self.registry.len();
        self.registry = RegionRegistry::new();
        released
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
