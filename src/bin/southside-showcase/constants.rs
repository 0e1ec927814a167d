/// Logical width of the diagram viewport, in diagram units.
pub const DIAGRAM_VIEW_W: f32 = 800.0;

/// Logical height of the diagram viewport, in diagram units.
pub const DIAGRAM_VIEW_H: f32 = 450.0;

/// Allowed empty border around the floor plan, in diagram units.
pub const DIAGRAM_EDGE_MARGIN: f32 = 40.0;

/// Scale factor for each discrete zoom level, index 0 = level 1.
pub const ZOOM_LEVEL_SCALES: [f32; 4] = [1.0, 1.25, 1.55, 1.9];

/// Lowest and highest discrete zoom levels.
pub const ZOOM_LEVEL_MIN: u8 = 1;
pub const ZOOM_LEVEL_MAX: u8 = 4;

/// Accumulated scroll (in points) that triggers one zoom step.
pub const WHEEL_STEP_POINTS: f32 = 40.0;

/// Arrow-key pan step in diagram units; Shift quadruples the feel of it.
pub const KEY_PAN_STEP: f32 = 20.0;
pub const KEY_PAN_STEP_FAST: f32 = 40.0;

/// Camera tween durations in seconds (scale settles slightly slower).
pub const CAMERA_PAN_SECS: f32 = 0.28;
pub const CAMERA_ZOOM_SECS: f32 = 0.32;

/// Drag-release momentum: release velocity times this, eased to a stop.
/// Presentation parameters, not a contract.
pub const MOMENTUM_MULTIPLIER: f32 = 10.0;
pub const MOMENTUM_SECS: f32 = 0.8;

/// Hero backdrop timing: hold, then cross-fade into the next backdrop.
pub const HERO_HOLD_SECS: f64 = 3.8;
pub const HERO_FADE_SECS: f64 = 1.0;

/// Hero slide period with animation disabled (hard cut).
pub const HERO_REDUCED_PERIOD_SECS: f64 = 5.0;

/// Stats counter run-up duration and per-entry stagger, in seconds.
pub const STAT_COUNT_SECS: f32 = 1.2;
pub const STAT_STAGGER_SECS: f32 = 0.25;

/// Carousel auto-advance period and cross-fade duration, in seconds.
pub const CAROUSEL_PERIOD_SECS: f64 = 5.0;
pub const CAROUSEL_FADE_SECS: f32 = 0.6;

/// Horizontal drag (in points) that swipes the carousel one slide.
pub const CAROUSEL_SWIPE_POINTS: f32 = 60.0;

/// Marquee scroll speed in points per second.
pub const MARQUEE_SPEED: f32 = 30.0;

/// Scroll offset below which the navigation header is always shown.
pub const NAV_ALWAYS_SHOW_OFFSET: f32 = 24.0;

/// Height of the navigation header in points.
pub const NAV_HEIGHT: f32 = 64.0;
