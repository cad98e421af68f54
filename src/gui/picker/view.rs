use super::model::Scene;
use super::{
    BACKGROUND_STROKE_WIDTH, DIVISION_INSET, DIVISION_LENGTH, DIVISION_TEXT_SIZE, DIVISION_WIDTH,
    HANDLE_TEXT_SIZE, HOUR_DIVISIONS, MAJOR_DIVISION_LENGTH, PROGRESS_STROKE_WIDTH,
};
use crate::gui::theme::ThemeColors;
use bedtime_core::geometry::place_on_ring;
use bedtime_core::{HandleBounds, Point, RingGeometry};
use cairo::Context;
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use std::f64::consts::PI;

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct HandleRenderer<'a> {
    bounds: &'a HandleBounds,
    label: &'a str,
}

impl<'a> HandleRenderer<'a> {
    fn new(bounds: &'a HandleBounds, label: &'a str) -> Self {
        Self { bounds, label }
    }

    fn radius(&self) -> f64 {
        (self.bounds.right - self.bounds.left).min(self.bounds.bottom - self.bounds.top) / 2.0
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let center = self.bounds.center();
        set_color(cr, colors.handle);
        cr.arc(center.x, center.y, self.radius(), 0.0, 2.0 * PI);
        cr.fill()?;

        if self.label.is_empty() {
            return Ok(());
        }
        set_color(cr, colors.label);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(HANDLE_TEXT_SIZE);
        show_centered(cr, center, self.label)
    }
}

fn show_centered(cr: &Context, at: Point, text: &str) -> Result<(), cairo::Error> {
    let ext = cr.text_extents(text)?;
    cr.move_to(
        at.x - ext.width() / 2.0 - ext.x_bearing(),
        at.y - ext.height() / 2.0 - ext.y_bearing(),
    );
    cr.show_text(text)
}

/// Cairo measures angles clockwise on screen, the dial counter-clockwise.
fn cairo_angle(dial_degrees: f64) -> f64 {
    (-dial_degrees).to_radians()
}

fn draw_divisions(cr: &Context, ring: &RingGeometry, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let inner = ring.radius - BACKGROUND_STROKE_WIDTH / 2.0 - DIVISION_INSET;
    let step = 360.0 / HOUR_DIVISIONS as f64;

    cr.set_line_width(DIVISION_WIDTH);
    cr.set_line_cap(cairo::LineCap::Butt);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(DIVISION_TEXT_SIZE);

    for hour in 0..HOUR_DIVISIONS {
        let angle = hour as f64 * step;
        let major = hour % 6 == 0;
        let length = if major { MAJOR_DIVISION_LENGTH } else { DIVISION_LENGTH };

        let start = place_on_ring(ring.center, inner, angle);
        let end = place_on_ring(ring.center, inner - length, angle);
        set_color(cr, colors.division);
        cr.move_to(start.x, start.y);
        cr.line_to(end.x, end.y);
        cr.stroke()?;

        if hour % 2 == 0 {
            let text_at = place_on_ring(
                ring.center,
                inner - MAJOR_DIVISION_LENGTH - DIVISION_TEXT_SIZE,
                angle,
            );
            set_color(cr, if major { colors.division } else { colors.division_text });
            show_centered(cr, text_at, &hour.to_string())?;
        }
    }
    Ok(())
}

fn draw_background(cr: &Context, ring: &RingGeometry, colors: &ThemeColors) -> Result<(), cairo::Error> {
    set_color(cr, colors.background);
    cr.set_line_width(BACKGROUND_STROKE_WIDTH);
    cr.new_sub_path();
    cr.arc(ring.center.x, ring.center.y, ring.radius, 0.0, 2.0 * PI);
    cr.stroke()
}

fn draw_progress(cr: &Context, scene: &Scene, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let state = scene.picker.state();
    let ring = scene.picker.ring();
    let sweep = state.sweep();
    if sweep <= 0.0 {
        return Ok(());
    }

    // from the bed handle, clockwise on screen, to the wake handle
    let start = cairo_angle(state.arc_start());
    set_color(
        cr,
        if state.is_short_range() {
            colors.short_progress
        } else {
            colors.progress
        },
    );
    cr.set_line_width(PROGRESS_STROKE_WIDTH);
    cr.set_line_cap(cairo::LineCap::Round);
    cr.new_sub_path();
    cr.arc(
        ring.center.x,
        ring.center.y,
        ring.radius,
        start,
        start + sweep.to_radians(),
    );
    cr.stroke()
}

fn draw_image(cr: &Context, pixbuf: &Pixbuf, center: Point) -> Result<(), cairo::Error> {
    let (x, y) = (
        center.x - pixbuf.width() as f64 / 2.0,
        center.y - pixbuf.height() as f64 / 2.0,
    );
    cr.save()?;
    cr.set_source_pixbuf(pixbuf, x, y);
    cr.paint()?;
    cr.restore()
}

fn draw_images(cr: &Context, scene: &Scene) -> Result<(), cairo::Error> {
    let ring = scene.picker.ring();
    let offset = ring.radius / 2.0;
    if let Some(night) = &scene.night {
        draw_image(cr, night, Point::new(ring.center.x, ring.center.y - offset))?;
    }
    if let Some(morning) = &scene.morning {
        draw_image(cr, morning, Point::new(ring.center.x, ring.center.y + offset))?;
    }
    Ok(())
}

pub fn draw(cr: &Context, scene: &Scene, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let ring = scene.picker.ring();
    if ring.is_degenerate() {
        return Ok(());
    }

    draw_divisions(cr, &ring, colors)?;
    draw_background(cr, &ring, colors)?;
    draw_progress(cr, scene, colors)?;
    draw_images(cr, scene)?;

    let handles = scene.picker.handle_layout();
    HandleRenderer::new(&handles.bed, &scene.bed_label).draw(cr, colors)?;
    HandleRenderer::new(&handles.wake, &scene.wake_label).draw(cr, colors)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cairo_angle_flips_direction() {
        assert_eq!(cairo_angle(0.0), 0.0);
        assert!((cairo_angle(90.0) + PI / 2.0).abs() < 1e-12);
        assert!((cairo_angle(-90.0) - PI / 2.0).abs() < 1e-12);
    }
}
