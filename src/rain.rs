//! Falling-glyph animation drawn behind the terminal theme.
//!
//! The field is drawing-backend agnostic: a [`GlyphSurface`] receives the
//! fade and glyph draws, and a [`GlyphRng`] supplies randomness, so the
//! browser canvas and the tests drive the same code.

use thiserror::Error;

pub const DEFAULT_ALPHABET: &str =
    "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン0123456789ABCDEF";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RainError {
    #[error("reset chance must be in [0, 1), got {0}")]
    InvalidResetChance(f64),
    #[error("glyph size must be positive, got {0}")]
    InvalidGlyphSize(f64),
    #[error("glyph alphabet is empty")]
    EmptyAlphabet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RainConfig {
    glyph_size: f64,
    reset_chance: f64,
    alphabet: Vec<char>,
    pub fade_style: String,
    pub glyph_style: String,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            glyph_size: 16.0,
            reset_chance: 0.025,
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            fade_style: "rgba(0, 0, 0, 0.05)".to_string(),
            glyph_style: "#0f0".to_string(),
        }
    }
}

impl RainConfig {
    pub fn new(glyph_size: f64, reset_chance: f64, alphabet: &str) -> Result<Self, RainError> {
        if !(glyph_size.is_finite() && glyph_size > 0.0) {
            return Err(RainError::InvalidGlyphSize(glyph_size));
        }
        if !(0.0..1.0).contains(&reset_chance) {
            return Err(RainError::InvalidResetChance(reset_chance));
        }
        let alphabet = alphabet.chars().collect::<Vec<_>>();
        if alphabet.is_empty() {
            return Err(RainError::EmptyAlphabet);
        }
        Ok(Self {
            glyph_size,
            reset_chance,
            alphabet,
            ..Default::default()
        })
    }

    pub fn glyph_size(&self) -> f64 {
        self.glyph_size
    }

    pub fn reset_chance(&self) -> f64 {
        self.reset_chance
    }

    pub fn font(&self) -> String {
        format!("{}px monospace", self.glyph_size)
    }

    fn pick(&self, roll: f64) -> char {
        let len = self.alphabet.len();
        let i = ((roll * len as f64) as usize).min(len - 1);
        self.alphabet[i]
    }
}

/// A 2D drawing target.
pub trait GlyphSurface {
    /// Composites a translucent fill over `[0, width) x [0, height)`.
    fn fade(&mut self, width: f64, height: f64);
    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64);
}

/// Source of uniform samples in `[0, 1)`.
pub trait GlyphRng {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> GlyphRng for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Per-column fall offsets, measured in glyph rows.
#[derive(Debug, Clone)]
pub struct RainField {
    config: RainConfig,
    width: f64,
    height: f64,
    columns: Vec<u32>,
}

impl RainField {
    pub fn new(width: f64, height: f64, config: RainConfig) -> Self {
        let width = width.max(0.0);
        let count = (width / config.glyph_size).floor() as usize;
        Self {
            config,
            width,
            height: height.max(0.0),
            columns: vec![1; count],
        }
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn columns(&self) -> &[u32] {
        &self.columns
    }

    /// Takes the new canvas size. Column offsets are left as they are.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn tick<S, R>(&mut self, surface: &mut S, rng: &mut R)
    where
        S: GlyphSurface + ?Sized,
        R: GlyphRng + ?Sized,
    {
        surface.fade(self.width, self.height);
        let size = self.config.glyph_size;
        for (i, offset) in self.columns.iter_mut().enumerate() {
            let glyph = self.config.pick(rng.next_unit());
            let y = f64::from(*offset) * size;
            surface.draw_glyph(glyph, i as f64 * size, y);
            if y > self.height && rng.next_unit() < self.config.reset_chance {
                *offset = 0;
            } else {
                *offset = offset.saturating_add(1);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Stopped,
}

/// A field plus the run state checked before every frame.
#[derive(Debug, Clone)]
pub struct RainLoop {
    field: RainField,
    state: AnimationState,
}

impl RainLoop {
    /// A loop that is already running, as it is once its canvas is mounted.
    pub fn start(field: RainField) -> Self {
        Self {
            field,
            state: AnimationState::Running,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn stop(&mut self) {
        self.state = AnimationState::Stopped;
    }

    pub fn field(&self) -> &RainField {
        &self.field
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }

    /// Draws one frame if running. Returns whether another frame should be scheduled.
    pub fn frame<S, R>(&mut self, surface: &mut S, rng: &mut R) -> bool
    where
        S: GlyphSurface + ?Sized,
        R: GlyphRng + ?Sized,
    {
        match self.state {
            AnimationState::Running => {
                self.field.tick(surface, rng);
                true
            }
            AnimationState::Stopped => false,
        }
    }
}
