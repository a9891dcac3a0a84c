//! Block diagram of a superheterodyne receiver, drawn with egui shapes.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use rust_i18n::t;

/// Blocks of the main signal path, left to right
const SIGNAL_PATH: &[&str] = &[
    "diagram.antenna",
    "diagram.rf_amplifier",
    "diagram.mixer",
    "diagram.if_filter",
    "diagram.if_amplifier",
    "diagram.detector",
    "diagram.audio_amplifier",
];

/// Index of the mixer in [`SIGNAL_PATH`]; the local oscillator feeds it
const MIXER_INDEX: usize = 2;

const BLOCK_SIZE: Vec2 = Vec2::new(110.0, 44.0);
const BLOCK_GAP: f32 = 36.0;

/// Show the diagram window while `open` is true
pub fn show(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new(t!("diagram.title").to_string())
        .open(open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, render);
}

/// Top-left corner of the block at `index` in the signal path
fn block_origin(origin: Pos2, index: usize) -> Pos2 {
    origin + Vec2::new(index as f32 * (BLOCK_SIZE.x + BLOCK_GAP), 0.0)
}

fn draw_block(
    painter: &egui::Painter,
    rect: Rect,
    label: &str,
    stroke: Stroke,
    text_color: Color32,
) {
    painter.rect_stroke(rect, 6.0, stroke, egui::StrokeKind::Inside);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(12.0),
        text_color,
    );
}

/// Paint the diagram into `ui`
pub fn render(ui: &mut Ui) {
    let blocks = SIGNAL_PATH.len() as f32;
    let size = Vec2::new(
        blocks * BLOCK_SIZE.x + (blocks - 1.0) * BLOCK_GAP + 20.0,
        2.0 * BLOCK_SIZE.y + 80.0,
    );
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min + Vec2::new(10.0, 20.0);

    let visuals = ui.visuals();
    let stroke = Stroke::new(1.5, visuals.strong_text_color());
    let text_color = visuals.text_color();

    for (i, &key) in SIGNAL_PATH.iter().enumerate() {
        let rect = Rect::from_min_size(block_origin(origin, i), BLOCK_SIZE);
        draw_block(&painter, rect, &t!(key), stroke, text_color);

        if i + 1 < SIGNAL_PATH.len() {
            let start = rect.right_center();
            painter.arrow(start, Vec2::new(BLOCK_GAP, 0.0), stroke);
        }
    }

    // Local oscillator under the mixer, feeding it from below
    let mixer = Rect::from_min_size(block_origin(origin, MIXER_INDEX), BLOCK_SIZE);
    let oscillator = mixer.translate(Vec2::new(0.0, BLOCK_SIZE.y + 40.0));
    draw_block(
        &painter,
        oscillator,
        &t!("diagram.local_oscillator"),
        stroke,
        text_color,
    );
    painter.arrow(
        oscillator.center_top(),
        mixer.center_bottom() - oscillator.center_top(),
        stroke,
    );
}
