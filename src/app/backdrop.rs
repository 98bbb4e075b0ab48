use leptos::{either::Either, ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_raf_fn_with_options, use_window, utils::Pausable, UseRafFnOptions,
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{
    rain::{GlyphSurface, RainConfig, RainField, RainLoop},
    theme::Theme,
};

#[component]
pub fn Backdrop(theme: Theme) -> impl IntoView {
    if theme.decorated() {
        Either::Left(view! { <GlyphRain /> })
    } else {
        Either::Right(view! {
            <div class="fixed inset-0 z-0 opacity-30 pointer-events-none">
                <div class="absolute top-0 left-1/4 w-96 h-96 bg-blue-500 rounded-full mix-blend-multiply filter blur-3xl animate-blob"></div>
                <div class="absolute top-0 right-1/4 w-96 h-96 bg-cyan-500 rounded-full mix-blend-multiply filter blur-3xl animate-blob animation-delay-2000"></div>
                <div class="absolute bottom-0 left-1/3 w-96 h-96 bg-teal-500 rounded-full mix-blend-multiply filter blur-3xl animate-blob animation-delay-4000"></div>
            </div>
        })
    }
}

struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    fade_style: String,
    glyph_style: String,
    font: String,
}

impl CanvasSurface {
    fn new(canvas: &HtmlCanvasElement, config: &RainConfig) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            fade_style: config.fade_style.clone(),
            glyph_style: config.glyph_style.clone(),
            font: config.font(),
        })
    }
}

impl GlyphSurface for CanvasSurface {
    fn fade(&mut self, width: f64, height: f64) {
        self.ctx.set_fill_style_str(&self.fade_style);
        self.ctx.fill_rect(0.0, 0.0, width, height);
        // every glyph in the frame shares one style
        self.ctx.set_fill_style_str(&self.glyph_style);
        self.ctx.set_font(&self.font);
    }

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64) {
        let mut buf = [0u8; 4];
        let _ = self.ctx.fill_text(glyph.encode_utf8(&mut buf), x, y);
    }
}

fn viewport_size() -> (f64, f64) {
    let win = window();
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

/// Full-viewport canvas of falling glyphs. Never starts if the canvas has no
/// 2D context.
#[component]
fn GlyphRain() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let rain = StoredValue::new_local(None::<(RainLoop, CanvasSurface)>);

    // filled in once the frame loop exists, so a frame can cancel its successors
    let halt = StoredValue::new_local(None::<Box<dyn Fn()>>);
    let stop_frames = move || {
        halt.try_with_value(|halt| {
            if let Some(halt) = halt {
                halt();
            }
        });
    };

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |_| {
            let reschedule = rain
                .try_update_value(|slot| {
                    slot.as_mut().map(|(rain_loop, surface)| {
                        rain_loop.frame(surface, &mut js_sys::Math::random)
                    })
                })
                .flatten()
                .unwrap_or(false);
            if !reschedule {
                stop_frames();
            }
        },
        UseRafFnOptions::default().immediate(false),
    );
    halt.set_value(Some(Box::new(pause)));

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let config = RainConfig::default();
        let Some(surface) = CanvasSurface::new(&canvas, &config) else {
            log::debug!("no 2d context, glyph rain disabled");
            return;
        };
        let (width, height) = viewport_size();
        size_canvas(&canvas, width, height);
        let field = RainField::new(width, height, config);
        log::debug!("glyph rain started with {} columns", field.columns().len());
        rain.set_value(Some((RainLoop::start(field), surface)));
        resume();
    });

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        let (width, height) = viewport_size();
        if let Some(canvas) = canvas_ref.get_untracked() {
            size_canvas(&canvas, width, height);
        }
        rain.update_value(|slot| {
            if let Some((rain_loop, _)) = slot.as_mut() {
                rain_loop.resize(width, height);
            }
        });
    });

    on_cleanup(move || {
        rain.try_update_value(|slot| {
            if let Some((rain_loop, _)) = slot.as_mut() {
                rain_loop.stop();
            }
        });
        stop_frames();
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="fixed inset-0 z-0 pointer-events-none opacity-40"
            aria-hidden="true"
        />
    }
}
