/// Magnified viewer overlay.
///
/// Stacked over the landing page using the iced modal pattern: an opaque
/// dimmed backdrop that closes on click, with the viewer panel opaque on
/// top of it so clicks inside never fall through. Keyboard bindings for
/// the overlay live in the application subscription, not here.

use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, row, stack, text,
};
use iced::{Alignment, Color, ContentFit, Element, Length, Theme};

use crate::gallery::clamp_index;
use crate::{EstateApp, Message};

const VIEW_HEIGHT: f32 = 460.0;
const THUMB_WIDTH: f32 = 96.0;
const THUMB_HEIGHT: f32 = 64.0;

/// Stack the overlay on top of the landing page.
pub fn overlay<'a>(base: Element<'a, Message>, app: &'a EstateApp) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(
                center(opaque(panel(app))).style(|_theme| container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                })
            )
            .on_press(Message::CloseLightbox)
        )
    ]
    .into()
}

fn panel(app: &EstateApp) -> Element<'_, Message> {
    let len = app.slots.len();
    let index = clamp_index(app.lightbox.index() as isize, len as isize);

    let magnified: Element<Message> = match app.slots.get(index).and_then(|s| s.handle.as_ref()) {
        Some(handle) => image(handle.clone())
            .height(Length::Fixed(VIEW_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        None => container(text("…").size(24))
            .height(Length::Fixed(VIEW_HEIGHT))
            .align_y(Alignment::Center)
            .into(),
    };

    let controls = row![
        button(text("←"))
            .on_press(Message::PreviousImage)
            .padding(8),
        container(text(format!("{} / {}", index + 1, len)).size(14))
            .width(Length::Fill)
            .align_x(Alignment::Center),
        button(text("→"))
            .on_press(Message::NextImage)
            .padding(8),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    column![
        container(button(text("✕")).on_press(Message::CloseLightbox).padding(6))
            .width(Length::Fill)
            .align_x(Alignment::End),
        magnified,
        controls,
        thumbnails(app, index),
    ]
    .spacing(14)
    .padding(20)
    .max_width(920)
    .into()
}

/// Thumbnail strip mirroring the whole image set; the current slot gets
/// the highlighted style.
fn thumbnails(app: &EstateApp, current: usize) -> Element<'_, Message> {
    let mut strip = row![].spacing(8);
    for (i, slot) in app.slots.iter().enumerate() {
        let style: fn(&Theme, button::Status) -> button::Style = if i == current {
            button::primary
        } else {
            button::secondary
        };
        let preview: Element<Message> = match &slot.handle {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(THUMB_WIDTH))
                .height(Length::Fixed(THUMB_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
            None => container(text("…"))
                .width(Length::Fixed(THUMB_WIDTH))
                .height(Length::Fixed(THUMB_HEIGHT))
                .align_x(Alignment::Center)
                .align_y(Alignment::Center)
                .into(),
        };
        strip = strip.push(
            button(preview)
                .style(style)
                .on_press(Message::JumpTo(i))
                .padding(2),
        );
    }
    strip.into()
}
