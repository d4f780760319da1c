/// Interaction tuning constants.
///
/// These express intended behavior (reveal radii, easing factors, scroll
/// offsets) and keep magic numbers out of the wiring code.
// Lantern cursor easing: fraction of the remaining distance covered per frame
pub const CURSOR_EASE: f32 = 0.15;

// Proximity reveal radii (CSS pixels, strict less-than)
pub const REVEAL_RADIUS_PX: f32 = 150.0;
pub const TOUCH_REVEAL_RADIUS_PX: f32 = 100.0;

// Fixed-header offset subtracted from anchor scroll targets
pub const HEADER_OFFSET_PX: f64 = 80.0;

// Parallax hero mapping: translateY = offset * rate, scale = 1 - offset * shrink
pub const PARALLAX_RATE: f64 = 0.3;
pub const PARALLAX_SHRINK_PER_PX: f64 = 0.0002;

// Fade-in observer parameters
pub const FADE_THRESHOLD: f64 = 0.1;
pub const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const FADE_VISIBLE_RULE: &str =
    ".fade-in-visible { opacity: 1 !important; transform: translateY(0) !important; }";

// Initial offset/transition applied to observed elements before first reveal
pub const FADE_HIDDEN_OFFSET_PX: f64 = 30.0;
pub const FADE_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// Viewport gate for the mobile layout
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

// Selectors and class names shared across modules
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEALED_CLASS: &str = "revealed";
pub const INLINE_REVEAL_CLASS: &str = "hidden-text-inline";
pub const NAV_ACTIVE_CLASS: &str = "active";
pub const FADE_VISIBLE_CLASS: &str = "fade-in-visible";
pub const FADE_SELECTOR: &str = ".philosophy-card, .token-stat, .manifesto-block, .social-link";

// Konami easter egg, matched against `KeyboardEvent::key` values
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];
