//! Canvas drawing. Nothing here feeds back into the simulation: colors and jitter
//! are picked from a word's position each frame and then forgotten.

use rand::Rng;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::session::Game;

/// Horizontal third of the canvas a word is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DangerZone {
    Safe,
    Warning,
    Critical,
}

impl DangerZone {
    pub fn for_position(x: f64, width: f64) -> Self {
        if x < width / 3.0 {
            DangerZone::Safe
        } else if x < 2.0 * width / 3.0 {
            DangerZone::Warning
        } else {
            DangerZone::Critical
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            DangerZone::Safe => "yellow",
            DangerZone::Warning => "orange",
            DangerZone::Critical => "red",
        }
    }

    /// Max vertical shake in pixels.
    pub fn jitter_amplitude(self) -> f64 {
        match self {
            DangerZone::Safe => 1.0,
            DangerZone::Warning => 2.0,
            DangerZone::Critical => 4.0,
        }
    }

    pub fn jitter<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        let a = self.jitter_amplitude();
        rng.gen_range(-a..a)
    }
}

pub const START_PROMPT: &str = "Press Space to begin the game";

/// The two lines of the start screen.
pub fn idle_screen_text(high_score: u32) -> [String; 2] {
    [START_PROMPT.to_string(), format!("Highest Score: {high_score}")]
}

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

pub fn draw_idle(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, high_score: u32) {
    let (w, h) = (canvas.width() as f64, canvas.height() as f64);
    let [prompt, best] = idle_screen_text(high_score);
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str("white");
    ctx.set_text_align("center");
    ctx.set_font("30px Arial");
    ctx.fill_text(&prompt, w / 2.0, h / 2.0).ok();
    ctx.set_font("20px Arial");
    ctx.fill_text(&best, w / 2.0, h / 2.0 + 40.0).ok();
}

/// Score HUD plus every live word at its current position.
pub fn draw_active<R: Rng + ?Sized>(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    game: &Game,
    rng: &mut R,
) {
    let (w, h) = (canvas.width() as f64, canvas.height() as f64);
    ctx.clear_rect(0.0, 0.0, w, h);

    ctx.set_font("20px Arial");
    ctx.set_fill_style_str("white");
    ctx.set_text_align("left");
    ctx.fill_text(&score_text(game.session().score), 10.0, 30.0).ok();

    for word in game.live().iter() {
        let zone = DangerZone::for_position(word.x, w);
        ctx.set_fill_style_str(zone.color());
        ctx.fill_text(&word.text, word.x, word.y + zone.jitter(rng)).ok();
    }
}
