use bevy::prelude::*;
use constants::camera_path::{PIXELS_PER_SCROLL_LINE, VIRTUAL_PAGE_HEIGHT};

#[cfg(not(target_arch = "wasm32"))]
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
#[cfg(not(target_arch = "wasm32"))]
use bevy::window::PrimaryWindow;

/// Fraction of the page scrolled, always finite and within [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    pub const ZERO: Self = Self(0.0);

    /// Out-of-range and non-finite values collapse to zero.
    pub fn new(value: f32) -> Self {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Progress from a scroll offset and the largest reachable offset.
    /// A page that cannot scroll (`max_offset <= 0`) reports zero.
    pub fn from_offsets(offset: f32, max_offset: f32) -> Self {
        if !offset.is_finite() || !max_offset.is_finite() || max_offset <= 0.0 {
            return Self::ZERO;
        }
        Self((offset / max_offset).clamp(0.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

/// Sent whenever the page scroll offset changes.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ScrollChanged {
    pub progress: ScrollProgress,
}

/// Last observed page scroll state.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PageScroll {
    pub offset: f32,
    pub max_offset: f32,
}

impl PageScroll {
    pub fn progress(&self) -> ScrollProgress {
        ScrollProgress::from_offsets(self.offset, self.max_offset)
    }

    /// Store a new observation. Returns true when the offset moved.
    pub fn observe(&mut self, offset: f32, max_offset: f32) -> bool {
        let max_offset = if max_offset.is_finite() { max_offset.max(0.0) } else { 0.0 };
        let offset = if offset.is_finite() { offset } else { 0.0 };
        let moved = (offset - self.offset).abs() > f32::EPSILON;
        self.offset = offset;
        self.max_offset = max_offset;
        moved
    }
}

/// Emulated page used on native builds, where there is no document to scroll.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScrollSettings {
    pub virtual_page_height: f32,
    pub pixels_per_line: f32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            virtual_page_height: VIRTUAL_PAGE_HEIGHT,
            pixels_per_line: PIXELS_PER_SCROLL_LINE,
        }
    }
}

/// Apply a wheel delta in pixels to an offset, keeping it on the page.
pub fn apply_wheel_delta(offset: f32, delta_pixels: f32, max_offset: f32) -> f32 {
    if !delta_pixels.is_finite() {
        return offset;
    }
    (offset + delta_pixels).clamp(0.0, max_offset.max(0.0))
}

/// Native: the mouse wheel scrolls a virtual page as tall as `virtual_page_height`.
/// Ctrl + wheel is left to the orbit controller for zooming.
#[cfg(not(target_arch = "wasm32"))]
pub fn track_page_scroll(
    mut page: ResMut<PageScroll>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<ScrollSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut changed: EventWriter<ScrollChanged>,
) {
    let zooming = keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);

    // Wheel up (positive y) scrolls towards the top of the page.
    let delta: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => -ev.y * settings.pixels_per_line,
            MouseScrollUnit::Pixel => -ev.y,
        })
        .sum();

    if zooming || delta == 0.0 {
        return;
    }

    let viewport_height = windows.single().map(|w| w.height()).unwrap_or(0.0);
    let max_offset = settings.virtual_page_height - viewport_height;
    let offset = apply_wheel_delta(page.offset, delta, max_offset);

    if page.observe(offset, max_offset) {
        changed.write(ScrollChanged {
            progress: page.progress(),
        });
    }
}

/// WASM: poll the host document, mirroring an `onscroll` handler.
#[cfg(target_arch = "wasm32")]
pub fn track_page_scroll(
    mut page: ResMut<PageScroll>,
    mut changed: EventWriter<ScrollChanged>,
    mut warned: Local<bool>,
) {
    let Some((offset, max_offset)) = read_document_scroll() else {
        if !*warned {
            warn!("Document scroll position unavailable; scroll camera disabled");
            *warned = true;
        }
        return;
    };

    if page.observe(offset, max_offset) {
        changed.write(ScrollChanged {
            progress: page.progress(),
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn read_document_scroll() -> Option<(f32, f32)> {
    let window = web_sys::window()?;
    let body = window.document()?.body()?;
    let offset = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let max_offset = body.scroll_height() as f64 - viewport_height;
    Some((offset as f32, max_offset as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_from_offsets() {
        assert_eq!(ScrollProgress::from_offsets(50.0, 100.0).value(), 0.5);
        assert_eq!(ScrollProgress::from_offsets(0.0, 100.0).value(), 0.0);
        assert_eq!(ScrollProgress::from_offsets(100.0, 100.0).value(), 1.0);
    }

    #[test]
    fn zero_or_negative_range_reports_zero() {
        assert_eq!(ScrollProgress::from_offsets(10.0, 0.0), ScrollProgress::ZERO);
        assert_eq!(ScrollProgress::from_offsets(10.0, -200.0), ScrollProgress::ZERO);
        assert_eq!(ScrollProgress::from_offsets(0.0, 0.0), ScrollProgress::ZERO);
    }

    #[test]
    fn non_finite_offsets_report_zero() {
        assert_eq!(ScrollProgress::from_offsets(f32::NAN, 100.0), ScrollProgress::ZERO);
        assert_eq!(ScrollProgress::from_offsets(10.0, f32::INFINITY), ScrollProgress::ZERO);
        assert_eq!(ScrollProgress::new(f32::NAN), ScrollProgress::ZERO);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(ScrollProgress::from_offsets(150.0, 100.0).value(), 1.0);
        assert_eq!(ScrollProgress::from_offsets(-20.0, 100.0).value(), 0.0);
    }

    #[test]
    fn wheel_delta_stays_on_page() {
        assert_eq!(apply_wheel_delta(0.0, -40.0, 1000.0), 0.0);
        assert_eq!(apply_wheel_delta(980.0, 40.0, 1000.0), 1000.0);
        assert_eq!(apply_wheel_delta(100.0, 40.0, 1000.0), 140.0);
        assert_eq!(apply_wheel_delta(100.0, 40.0, -5.0), 0.0);
        assert_eq!(apply_wheel_delta(100.0, f32::NAN, 1000.0), 100.0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn scroll_app() -> App {
        use bevy::window::WindowResolution;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<MouseWheel>()
            .add_event::<ScrollChanged>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<PageScroll>()
            .init_resource::<ScrollSettings>()
            .add_systems(Update, track_page_scroll);

        app.world_mut().spawn((
            Window {
                resolution: WindowResolution::new(800.0, 1000.0),
                ..default()
            },
            PrimaryWindow,
        ));
        app
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn wheel_lines(app: &mut App, lines: f32) {
        app.world_mut().send_event(MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: lines,
            window: Entity::PLACEHOLDER,
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn sent_progress(app: &App) -> Vec<f32> {
        let events = app.world().resource::<Events<ScrollChanged>>();
        let mut cursor = events.get_cursor();
        cursor.read(events).map(|ev| ev.progress.value()).collect()
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn ctrl_wheel_leaves_the_page_alone() {
        let mut app = scroll_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ControlLeft);

        wheel_lines(&mut app, -10.0);
        app.update();

        assert!(sent_progress(&app).is_empty());
        assert_eq!(app.world().resource::<PageScroll>().offset, 0.0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn plain_wheel_scrolls_a_page_shortened_by_the_window() {
        let mut app = scroll_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ControlLeft);
        wheel_lines(&mut app, -10.0);
        app.update();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(KeyCode::ControlLeft);
        // Ten lines down at 40 px per line on a 4000 px page in a 1000 px window.
        wheel_lines(&mut app, -10.0);
        app.update();

        let sent = sent_progress(&app);
        assert_eq!(sent.len(), 1);
        assert!((sent[0] - 400.0 / 3000.0).abs() < 1e-5, "{sent:?}");

        let page = *app.world().resource::<PageScroll>();
        assert_eq!(page.max_offset, 3000.0);
        assert_eq!(page.offset, 400.0);

        wheel_lines(&mut app, -1000.0);
        app.update();
        let page = *app.world().resource::<PageScroll>();
        assert_eq!(page.offset, 3000.0);
        assert_eq!(page.progress().value(), 1.0);
    }

    #[test]
    fn observe_reports_movement_only() {
        let mut page = PageScroll::default();
        assert!(page.observe(120.0, 1000.0));
        assert!(!page.observe(120.0, 1000.0));
        assert!((page.progress().value() - 0.12).abs() < 1e-6);

        assert!(page.observe(f32::NAN, 1000.0));
        assert_eq!(page.offset, 0.0);
        assert!(!page.observe(0.0, f32::NAN));
        assert_eq!(page.progress(), ScrollProgress::ZERO);
    }
}
