pub mod canvas;
pub mod runner;

pub use canvas::CanvasRenderer;
pub use runner::FieldRunner;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use folio_engine::content::{
    profile, skills, CalloutKind, Card, FetchState, Hero, RevealLatch, ABOUT, EDUCATION,
    SKILL_CATEGORIES,
};
use folio_engine::FieldConfig;

/// Install the panic hook and console logger. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Handle returned to the view tree for the hero background.
///
/// Inert when the canvas had no 2D context: the page simply renders without
/// the animation.
#[wasm_bindgen]
pub struct HeroBackground {
    runner: Option<FieldRunner>,
}

#[wasm_bindgen]
impl HeroBackground {
    /// Attach to `canvas`. `config_json` may override any `FieldConfig` field;
    /// an invalid override falls back to the defaults.
    pub fn mount(canvas: HtmlCanvasElement, config_json: Option<String>) -> HeroBackground {
        let config = match config_json.as_deref() {
            Some(json) => FieldConfig::from_json(json).unwrap_or_else(|e| {
                log::warn!("hero background: {}; using defaults", e);
                FieldConfig::default()
            }),
            None => FieldConfig::default(),
        };

        match FieldRunner::start(canvas, config) {
            Ok(runner) => HeroBackground { runner: Some(runner) },
            Err(e) => {
                log::warn!("hero background disabled: {}", e);
                HeroBackground { runner: None }
            }
        }
    }

    /// Detach from the page. Further DOM events have no effect.
    pub fn unmount(&mut self) {
        if let Some(mut runner) = self.runner.take() {
            runner.stop();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.runner.as_ref().is_some_and(|r| r.is_running())
    }

    // ---- Frame data (x, y, radius, alpha per circle; x0, y0, x1, y1, alpha per link) ----

    /// Null when inert.
    pub fn circles_ptr(&self) -> *const f32 {
        self.runner.as_ref().map_or(std::ptr::null(), |r| r.circles_ptr())
    }

    pub fn circle_count(&self) -> u32 {
        self.runner.as_ref().map_or(0, |r| r.circle_count())
    }

    pub fn links_ptr(&self) -> *const f32 {
        self.runner.as_ref().map_or(std::ptr::null(), |r| r.links_ptr())
    }

    pub fn link_count(&self) -> u32 {
        self.runner.as_ref().map_or(0, |r| r.link_count())
    }
}

/// One-shot fade-in latch for an IntersectionObserver callback.
/// Disconnect the observer once `observe` returns true.
#[wasm_bindgen]
pub struct RevealObserver {
    latch: RevealLatch,
}

#[wasm_bindgen]
impl RevealObserver {
    #[wasm_bindgen(constructor)]
    pub fn new(threshold: Option<f32>) -> RevealObserver {
        RevealObserver {
            latch: RevealLatch::new(threshold.unwrap_or(RevealLatch::DEFAULT_THRESHOLD)),
        }
    }

    pub fn observe(&mut self, is_intersecting: bool, ratio: f32) -> bool {
        self.latch.observe(is_intersecting, ratio)
    }

    #[wasm_bindgen(getter)]
    pub fn visible(&self) -> bool {
        self.latch.is_visible()
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::warn!("serialization failed: {}", e);
        "null".to_string()
    })
}

// ---- Content accessors (JSON strings, parsed by the page) ----

/// Settle the repository request: `{"state":"ready","data":[...]}` or
/// `{"state":"error","data":"HTTP 403"}`.
#[wasm_bindgen]
pub fn featured_repositories(status: u16, body: &str, limit: usize) -> String {
    to_json(&FetchState::from_response(status, body).featured(limit))
}

#[wasm_bindgen]
pub fn language_color(language: &str) -> String {
    folio_engine::content::language_color(language).to_string()
}

/// Style for a callout kind, or `undefined` for an unknown kind.
#[wasm_bindgen]
pub fn callout_style(kind: &str) -> Option<String> {
    kind.parse::<CalloutKind>().ok().map(|k| to_json(&k.style()))
}

#[wasm_bindgen]
pub fn hero_content(title: Option<String>, subtitle: Option<String>) -> String {
    to_json(&Hero::new(title.as_deref(), subtitle.as_deref()))
}

#[wasm_bindgen]
pub fn about_content() -> String {
    to_json(&ABOUT)
}

#[wasm_bindgen]
pub fn education_content() -> String {
    to_json(&EDUCATION)
}

/// `93.8` -> `"93.8%"`.
#[wasm_bindgen]
pub fn format_average(value: f32) -> String {
    profile::format_average(value)
}

#[derive(Serialize)]
struct CardView<'a> {
    #[serde(flatten)]
    card: &'a Card,
    heading: String,
}

/// `{"title","body","href","heading"}` for one card.
#[wasm_bindgen]
pub fn card_content(title: &str, body: &str, href: &str) -> String {
    let card = Card::new(title, body, href);
    to_json(&CardView {
        heading: card.heading(),
        card: &card,
    })
}

#[wasm_bindgen]
pub fn skill_categories() -> String {
    to_json(&SKILL_CATEGORIES[..])
}

#[wasm_bindgen]
pub fn theme_style(theme: &str) -> Option<String> {
    match theme {
        "blue" => Some(to_json(&skills::Theme::Blue.style())),
        "amber" => Some(to_json(&skills::Theme::Amber.style())),
        _ => None,
    }
}

#[wasm_bindgen]
pub fn category_delay_ms(index: usize) -> u32 {
    skills::stagger_delay_ms(index)
}

#[wasm_bindgen]
pub fn skill_delay_ms(category: usize, skill: usize) -> u32 {
    skills::skill_delay_ms(category, skill)
}

/// Badge for the `skill`-th entry of the `category`-th card, e.g. `"3y"`.
#[wasm_bindgen]
pub fn skill_badge(category: usize, skill: usize) -> Option<String> {
    SKILL_CATEGORIES
        .get(category)
        .and_then(|c| c.skills.get(skill))
        .and_then(skills::years_badge)
}

#[wasm_bindgen]
pub fn footer_text(year: i32) -> String {
    profile::footer_line(year)
}
