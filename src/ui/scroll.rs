//! Scroll choreography driver.
//!
//! Bridges the DOM to the core snap coordinator. Sections describe their
//! effects declaratively with [`SectionFx`] — a trigger element handle, a
//! playback mode and a tween timeline — and hand them to the
//! [`ScrollContext`] from a mount effect. The context measures trigger
//! offsets, registers the resulting scroll regions with the coordinator,
//! and counts section completions; when every expected section has
//! reported (or a bounded fallback elapses) it captures the snap map and
//! attaches the window listeners.
//!
//! A single requestAnimationFrame loop applies timeline poses each frame
//! and advances the snap animation after scrolling settles. Everything —
//! listeners, timers, the loop — is disposed on cleanup, and disposal is
//! safe to run repeatedly or before setup ever finished.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use gloo_timers::callback::Timeout;
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::closure::Closure;

#[cfg(not(feature = "ssr"))]
use crate::core::scroll::SNAP_EASE;
#[cfg(not(feature = "ssr"))]
use crate::core::{Coordinator, Playback, Pose, ScrollRegion, ScrollTimeline};

/// Upper bound on waiting for slow sections before the snap rule is
/// installed anyway.
pub const SETTLE_FALLBACK_MS: u32 = 400;

/// Quiet time after the last scroll event before a snap is attempted.
#[cfg(not(feature = "ssr"))]
const SNAP_IDLE_MS: u32 = 150;

/// Snap targets closer than this normalized distance are left alone.
#[cfg(not(feature = "ssr"))]
const SNAP_DEADBAND: f64 = 1e-4;

/// Shared handle to the page's choreography state.
#[derive(Clone, Copy)]
pub struct ScrollContext {
    #[cfg(not(feature = "ssr"))]
    state: StoredValue<ChoreoState, LocalStorage>,
}

/// Install the choreography context for a page expecting `expected_sections`
/// completion reports. Teardown is wired to the reactive owner, so leaving
/// the page disposes every listener even if installation never happened.
pub fn provide_scroll_context(expected_sections: usize) -> ScrollContext {
    #[cfg(not(feature = "ssr"))]
    let ctx = {
        let state = StoredValue::new_local(ChoreoState::new(expected_sections));
        let ctx = ScrollContext { state };
        state.update_value(|s| {
            s.settle = Some(Timeout::new(SETTLE_FALLBACK_MS, move || {
                ctx.install();
            }));
        });
        on_cleanup(move || ctx.teardown());
        raf_loop(state);
        ctx
    };

    #[cfg(feature = "ssr")]
    let ctx = {
        let _ = expected_sections;
        ScrollContext {}
    };

    provide_context(ctx);
    ctx
}

/// Use the choreography context from anywhere under the landing page
pub fn use_scroll_context() -> ScrollContext {
    use_context::<ScrollContext>().expect("ScrollContext should be provided")
}

/// Smooth-scroll to an element id; the navbar's whole interface to the
/// page. Missing ids are ignored.
pub fn scroll_to_anchor(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
    }
}

#[cfg(not(feature = "ssr"))]
mod driver {
    use super::*;

    /// How a registration's trigger maps to scroll offsets.
    enum FxMode {
        /// Plays immediately on mount; not a scroll region.
        Intro,
        /// Activates when the trigger's top crosses a viewport-height
        /// fraction; instantaneous region.
        Reveal { viewport_line: f64 },
        /// Pinned scrub across the trigger's sticky span.
        Pin { lag: f64 },
    }

    /// Declarative description of one scroll-linked effect.
    ///
    /// Building one never touches the registry; handing it to
    /// [`ScrollContext::add`] does. Missing element handles poison the
    /// description so the add becomes a silent skip.
    pub struct SectionFx {
        trigger: Option<web_sys::HtmlElement>,
        needs_trigger: bool,
        missing_target: bool,
        targets: Vec<web_sys::HtmlElement>,
        timeline: ScrollTimeline,
        mode: FxMode,
    }

    impl SectionFx {
        /// A mount-time animation with no scroll region of its own.
        pub fn intro() -> Self {
            Self {
                trigger: None,
                needs_trigger: false,
                missing_target: false,
                targets: Vec::new(),
                timeline: ScrollTimeline::new(),
                mode: FxMode::Intro,
            }
        }

        /// Play-once-reverse-on-exit effect. `viewport_line` is the
        /// viewport-height fraction the trigger's top must cross, e.g.
        /// 0.8 for "top 80%". Timeline positions are seconds.
        pub fn reveal(trigger: Option<impl Into<web_sys::HtmlElement>>, viewport_line: f64) -> Self {
            Self {
                trigger: trigger.map(Into::into),
                needs_trigger: true,
                missing_target: false,
                targets: Vec::new(),
                timeline: ScrollTimeline::new(),
                mode: FxMode::Reveal { viewport_line },
            }
        }

        /// Scrubbed effect across a pinned wrapper's sticky span, smoothed
        /// by `lag` seconds. Timeline positions are span fractions.
        pub fn pinned(trigger: Option<impl Into<web_sys::HtmlElement>>, lag: f64) -> Self {
            Self {
                trigger: trigger.map(Into::into),
                needs_trigger: true,
                missing_target: false,
                targets: Vec::new(),
                timeline: ScrollTimeline::new(),
                mode: FxMode::Pin { lag },
            }
        }

        /// Append an animation target; tween target indices refer to the
        /// order of these calls. A missing handle marks the whole effect
        /// as skippable.
        pub fn target(mut self, element: Option<impl Into<web_sys::HtmlElement>>) -> Self {
            match element {
                Some(el) => self.targets.push(el.into()),
                None => self.missing_target = true,
            }
            self
        }

        pub fn timeline(mut self, timeline: ScrollTimeline) -> Self {
            self.timeline = timeline;
            self
        }
    }

    /// One registered effect with resolved offsets.
    struct SectionRuntime {
        start: f64,
        end: f64,
        playback: Playback,
        timeline: ScrollTimeline,
        targets: Vec<web_sys::HtmlElement>,
        progress: f64,
    }

    /// Window listeners owned by the installed runtime; removed on
    /// teardown before the closures drop.
    struct Listeners {
        on_scroll: Closure<dyn FnMut(web_sys::Event)>,
        on_input: Closure<dyn FnMut(web_sys::Event)>,
    }

    /// In-flight snap scroll animation.
    struct SnapAnim {
        from: f64,
        to: f64,
        started: f64,
        duration_ms: f64,
    }

    pub(super) struct ChoreoState {
        coordinator: Coordinator,
        sections: Vec<SectionRuntime>,
        listeners: Option<Listeners>,
        pub(super) settle: Option<Timeout>,
        idle: Option<Timeout>,
        snap_anim: Option<SnapAnim>,
        max_scroll: f64,
        last_tick: f64,
        torn_down: bool,
    }

    impl ChoreoState {
        pub(super) fn new(expected_sections: usize) -> Self {
            Self {
                coordinator: Coordinator::new(expected_sections),
                sections: Vec::new(),
                listeners: None,
                settle: None,
                idle: None,
                snap_anim: None,
                max_scroll: 0.0,
                last_tick: js_sys::Date::now(),
                torn_down: false,
            }
        }
    }

    impl ScrollContext {
        /// Register one effect. Missing trigger or target handles, or a
        /// region the registry rejects, degrade to a logged no-op — the
        /// section renders static.
        pub fn add(&self, fx: SectionFx) {
            if fx.needs_trigger && fx.trigger.is_none() {
                leptos::logging::warn!("scroll effect skipped: trigger element not mounted");
                return;
            }
            if fx.missing_target {
                leptos::logging::warn!("scroll effect skipped: animation target not mounted");
                return;
            }

            let (start, end, playback, region) = match fx.mode {
                FxMode::Intro => (f64::NEG_INFINITY, f64::NEG_INFINITY, Playback::Reveal, None),
                FxMode::Reveal { viewport_line } => {
                    let Some(trigger) = &fx.trigger else { return };
                    let top = document_offset_top(trigger);
                    let start = top - viewport_height() * viewport_line;
                    (start, start, Playback::Reveal, Some((start, start, false)))
                }
                FxMode::Pin { lag } => {
                    let Some(trigger) = &fx.trigger else { return };
                    let top = document_offset_top(trigger);
                    let span =
                        (trigger.get_bounding_client_rect().height() - viewport_height()).max(0.0);
                    (
                        top,
                        top + span,
                        Playback::Scrub { lag },
                        Some((top, top + span, true)),
                    )
                }
            };

            self.state.update_value(|s| {
                if s.torn_down {
                    return;
                }
                if let Some((region_start, region_end, pinned)) = region {
                    let region = match ScrollRegion::new(region_start, region_end, pinned) {
                        Ok(region) => region,
                        Err(e) => {
                            leptos::logging::warn!("scroll region skipped: {e}");
                            return;
                        }
                    };
                    if let Err(e) = s.coordinator.register(region) {
                        leptos::logging::warn!("scroll region rejected: {e}");
                        return;
                    }
                }
                s.sections.push(SectionRuntime {
                    start,
                    end,
                    playback,
                    timeline: fx.timeline,
                    targets: fx.targets,
                    progress: 0.0,
                });
            });
        }

        /// Shorthand for registering a mount-time animation.
        pub fn play_intro(&self, fx: SectionFx) {
            self.add(fx);
        }

        /// Report this section's registration as complete (including the
        /// skipped-silently case). The last expected report installs the
        /// snap rule.
        pub fn section_ready(&self) {
            let ready = self
                .state
                .try_update_value(|s| !s.torn_down && s.coordinator.section_done())
                .unwrap_or(false);
            if ready {
                self.install();
            }
        }

        /// Capture the snap map and attach window listeners. First call
        /// wins; later calls (fallback timer racing the last report) are
        /// no-ops.
        pub(super) fn install(&self) {
            let _ = self.state.try_update_value(|s| {
                if s.torn_down || s.coordinator.installed() {
                    return;
                }
                s.settle = None;
                s.max_scroll = max_scroll_distance();
                let pinned = s.coordinator.install(s.max_scroll).is_some();

                let ctx = *self;
                let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
                    ctx.schedule_snap();
                }) as Box<dyn FnMut(web_sys::Event)>);
                let ctx = *self;
                let on_input = Closure::wrap(Box::new(move |_: web_sys::Event| {
                    ctx.cancel_snap();
                }) as Box<dyn FnMut(web_sys::Event)>);

                if let Some(window) = web_sys::window() {
                    let options = web_sys::AddEventListenerOptions::new();
                    options.set_passive(true);
                    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                        &options,
                    );
                    for event in ["wheel", "touchmove"] {
                        let _ = window
                            .add_event_listener_with_callback_and_add_event_listener_options(
                                event,
                                on_input.as_ref().unchecked_ref(),
                                &options,
                            );
                    }
                }
                s.listeners = Some(Listeners { on_scroll, on_input });

                leptos::logging::log!(
                    "scroll choreography installed: {} regions, snap {}",
                    s.coordinator.registry().len(),
                    if pinned { "active" } else { "inactive" }
                );
            });
        }

        /// Dispose listeners, timers and regions. Idempotent, and valid
        /// before installation ever ran.
        pub fn teardown(&self) {
            let _ = self.state.try_update_value(|s| {
                if s.torn_down {
                    return;
                }
                s.torn_down = true;
                s.settle = None;
                s.idle = None;
                s.snap_anim = None;
                if let Some(listeners) = s.listeners.take() {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listeners.on_scroll.as_ref().unchecked_ref(),
                        );
                        for event in ["wheel", "touchmove"] {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                listeners.on_input.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
                s.coordinator.teardown();
                s.sections.clear();
            });
        }

        /// Debounced scroll-stop detection; every event pushes the idle
        /// timer out, replacing (and thereby cancelling) the previous one.
        fn schedule_snap(&self) {
            let ctx = *self;
            let _ = self.state.try_update_value(|s| {
                if s.torn_down || s.snap_anim.is_some() || s.coordinator.snap().is_none() {
                    return;
                }
                s.idle = Some(Timeout::new(SNAP_IDLE_MS, move || ctx.resolve_snap()));
            });
        }

        /// Scrolling settled: consult the snap map and start the animation
        /// when it proposes a different position.
        fn resolve_snap(&self) {
            let _ = self.state.try_update_value(|s| {
                if s.torn_down || s.max_scroll <= 0.0 {
                    return;
                }
                let Some(snap) = s.coordinator.snap() else {
                    return;
                };
                let from = scroll_position();
                let v = (from / s.max_scroll).clamp(0.0, 1.0);
                let target = snap.snap_to(v);
                if (target - v).abs() <= SNAP_DEADBAND {
                    return;
                }
                s.snap_anim = Some(SnapAnim {
                    from,
                    to: target * s.max_scroll,
                    started: js_sys::Date::now(),
                    duration_ms: snap.duration_for(v, target) * 1000.0,
                });
            });
        }

        /// User input overrides a snap in flight. The idle timer is left
        /// alone; the scroll events that follow reschedule it anyway.
        fn cancel_snap(&self) {
            let _ = self.state.try_update_value(|s| {
                s.snap_anim = None;
            });
        }
    }

    /// Per-frame driver. Stops on its own once the page's state is
    /// disposed or torn down.
    pub(super) fn raf_loop(state: StoredValue<ChoreoState, LocalStorage>) {
        request_animation_frame(move || {
            let alive = state
                .try_update_value(|s| {
                    if s.torn_down {
                        false
                    } else {
                        tick(s);
                        true
                    }
                })
                .unwrap_or(false);
            if alive {
                raf_loop(state);
            }
        });
    }

    fn tick(s: &mut ChoreoState) {
        let now = js_sys::Date::now();
        let dt = ((now - s.last_tick) / 1000.0).clamp(0.0, 0.1);
        s.last_tick = now;

        if let Some(anim) = &s.snap_anim {
            let t = if anim.duration_ms > 0.0 {
                ((now - anim.started) / anim.duration_ms).clamp(0.0, 1.0)
            } else {
                1.0
            };
            let position = anim.from + (anim.to - anim.from) * SNAP_EASE.apply(t);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, position);
            }
            if t >= 1.0 {
                s.snap_anim = None;
            }
        }

        let y = scroll_position();
        let mut poses = Vec::new();
        for section in &mut s.sections {
            let progress = match section.playback {
                Playback::Scrub { lag } => {
                    let span = (section.end - section.start).max(1.0);
                    let raw = ((y - section.start) / span).clamp(0.0, 1.0);
                    if lag > 0.0 {
                        section.progress += (raw - section.progress) * (1.0 - (-dt / lag).exp());
                    } else {
                        section.progress = raw;
                    }
                    section.progress
                }
                Playback::Reveal => {
                    let goal = if y >= section.start { 1.0 } else { 0.0 };
                    let total = section.timeline.duration().max(1e-3);
                    if goal > section.progress {
                        section.progress = (section.progress + dt / total).min(goal);
                    } else if goal < section.progress {
                        section.progress = (section.progress - dt / total).max(goal);
                    }
                    section.progress
                }
            };

            section.timeline.sample_into(progress, &mut poses);
            for (index, pose) in &poses {
                if let Some(element) = section.targets.get(*index) {
                    apply_pose(element, pose);
                }
            }
        }
    }

    fn apply_pose(element: &web_sys::HtmlElement, pose: &Pose) {
        let style = element.style();
        let _ = style.set_property("transform", &pose.transform_css());
        let _ = style.set_property("opacity", &format!("{:.4}", pose.opacity));
    }

    fn scroll_position() -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn viewport_height() -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn document_offset_top(element: &web_sys::HtmlElement) -> f64 {
        element.get_bounding_client_rect().top() + scroll_position()
    }

    fn max_scroll_distance() -> f64 {
        let document_height = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|e| e.scroll_height() as f64)
            .unwrap_or(0.0);
        (document_height - viewport_height()).max(0.0)
    }
}

#[cfg(not(feature = "ssr"))]
pub use driver::SectionFx;
#[cfg(not(feature = "ssr"))]
use driver::{raf_loop, ChoreoState};
