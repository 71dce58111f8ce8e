//! View state for the page chrome that the original scripts kept as
//! module-scoped globals: the mobile nav drawer, scroll-position
//! highlighting, the one-shot section animations, stat counters, skill
//! bars, and the decorative particle field. Third-party collaborators
//! (scroll-reveal, typing effect) appear only as the literal configs they
//! are initialized with.

use rand::Rng;

/// Fixed-header allowance when jumping to an anchor.
pub const NAV_OFFSET: f64 = 80.0;

/// Probe distance below the viewport top when picking the active section.
const SCROLL_PROBE: f64 = 100.0;

/// Scroll depth past which the back-to-top affordance shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Particles rendered into the hero background.
pub const PARTICLE_COUNT: usize = 50;

/// Scroll-reveal collaborator configuration, passed through verbatim.
#[derive(Debug, Clone)]
pub struct RevealConfig {
    pub duration_ms: u32,
    pub easing: &'static str,
    pub once: bool,
    pub offset: i32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            duration_ms: 800,
            easing: "ease-in-out",
            once: true,
            offset: 100,
        }
    }
}

/// Typing-effect collaborator configuration. When the page supplies no
/// strings the hero rotation falls back to the stock set.
#[derive(Debug, Clone)]
pub struct TypingConfig {
    pub strings: Vec<String>,
    pub type_speed_ms: u32,
    pub back_speed_ms: u32,
    pub back_delay_ms: u32,
    pub loop_forever: bool,
}

const FALLBACK_STRINGS: [&str; 4] = [
    "Full-Stack Developer",
    "Problem Solver",
    "Tech Enthusiast",
    "Creative Thinker",
];

impl TypingConfig {
    pub fn with_strings(strings: Vec<String>) -> Self {
        let strings = if strings.is_empty() {
            FALLBACK_STRINGS.iter().map(|s| s.to_string()).collect()
        } else {
            strings
        };
        TypingConfig {
            strings,
            type_speed_ms: 100,
            back_speed_ms: 60,
            back_delay_ms: 2000,
            loop_forever: true,
        }
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self::with_strings(Vec::new())
    }
}

/// Mobile navigation drawer. The icon swaps between the bars and times
/// glyphs with the open state.
#[derive(Debug, Default)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closing is idempotent; nav links call this on every click.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon_class(&self) -> &'static str {
        if self.open {
            "fa-times"
        } else {
            "fa-bars"
        }
    }
}

/// A page section's vertical span, for scroll-position highlighting.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section whose span contains the scroll probe, if any; its nav link
/// gets the active class.
pub fn active_section(sections: &[Section], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + SCROLL_PROBE;
    sections
        .iter()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.as_str())
}

/// Scroll destination for an anchor jump, leaving room for the fixed
/// header and never overshooting past the top.
pub fn smooth_scroll_target(section_top: f64) -> f64 {
    (section_top - NAV_OFFSET).max(0.0)
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// One-shot flags for the stat-counter and skill-bar reveals. Each
/// section's animation starts on its first intersection and never again.
#[derive(Debug, Default)]
pub struct SectionAnimations {
    about_done: bool,
    skills_done: bool,
}

impl SectionAnimations {
    /// Returns true when this intersection should start the section's
    /// animation.
    pub fn on_intersect(&mut self, section_id: &str) -> bool {
        match section_id {
            "about" if !self.about_done => {
                self.about_done = true;
                true
            }
            "skills" if !self.skills_done => {
                self.skills_done = true;
                true
            }
            _ => false,
        }
    }
}

/// Frame-paced stat counter: steps a hundredth of the target per frame,
/// shows ceiling-rounded values on the way up, and lands exactly on the
/// target before terminating.
#[derive(Debug)]
pub struct Counter {
    target: i64,
    step: f64,
    current: f64,
    finished: bool,
}

impl Counter {
    pub fn new(target: i64) -> Self {
        Counter {
            target,
            step: target as f64 / 100.0,
            current: 0.0,
            finished: false,
        }
    }
}

impl Iterator for Counter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.finished {
            return None;
        }
        self.current += self.step;
        if self.current < self.target as f64 {
            Some(self.current.ceil() as i64)
        } else {
            self.finished = true;
            Some(self.target)
        }
    }
}

/// Clamp a skill bar's data-width to a valid percentage.
pub fn skill_bar_width(data_width: f64) -> f64 {
    data_width.clamp(0.0, 100.0)
}

/// One decorative hero particle, sized and placed at random.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub opacity: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub float_secs: f64,
}

/// Generate the particle field: 2-6 px dots at 0.2-0.7 opacity, scattered
/// across the container, each floating on a 10-20 s loop.
pub fn particles<R: Rng>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            size_px: rng.gen_range(2.0..6.0),
            opacity: rng.gen_range(0.2..0.7),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            float_secs: rng.gen_range(10.0..20.0),
        })
        .collect()
}
