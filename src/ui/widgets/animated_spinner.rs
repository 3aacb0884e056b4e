// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown below the grid while a batch is outstanding.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI};

const STROKE_WIDTH: f32 = 3.0;
const TRACK_ALPHA: f32 = 0.25;
const ARC_SEGMENTS: u16 = 30;

/// Half-circle arc rotating over a faint circular track.
pub struct AnimatedSpinner {
    cache: Cache,
    /// Angle in radians; advanced by the loading state's ticks.
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    fn arc(&self, center: Point, radius: f32) -> Path {
        let start = self.rotation - FRAC_PI_2;
        let point_at = |angle: f32| {
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        };

        let mut builder = canvas::path::Builder::new();
        builder.move_to(point_at(start));
        for i in 1..=ARC_SEGMENTS {
            let t = f32::from(i) / f32::from(ARC_SEGMENTS);
            builder.line_to(point_at(start + PI * t));
        }
        builder.build()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(Color {
                            a: TRACK_ALPHA,
                            ..self.color
                        }),
                );

                frame.stroke(
                    &self.arc(center, radius),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
