/// The landing page: header with language switcher and contact button,
/// localized copy, hero image, and the gallery grid. Clicking the hero
/// opens the lightbox at slot 0; gallery tile `i` opens it at `1 + i`.

use iced::widget::{
    button, column, container, horizontal_space, image, mouse_area, row, scrollable, text, Column,
};
use iced::{Alignment, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;

use crate::content;
use crate::images::ImageSlot;
use crate::state::language::Language;
use crate::{EstateApp, Message};

const HERO_HEIGHT: f32 = 288.0;
const TILE_WIDTH: f32 = 260.0;
const TILE_HEIGHT: f32 = 144.0;

pub fn view(app: &EstateApp) -> Element<'_, Message> {
    let t = content::for_language(app.language);

    let header = row![
        column![
            text("Hot Spring Estate — Owner Direct").size(18),
            text("Private, off-market opportunity — Japanese estate").size(12),
        ]
        .spacing(2),
        horizontal_space(),
        language_switcher(app.language),
        button(text(t.contact_nav))
            .on_press(Message::ContactPressed)
            .padding(8),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .padding(16);

    let overview = column![
        text(t.overview_title).size(18),
        bullet_list(t.overview_lines),
        text(t.features_title).size(16),
        bullet_list(t.features_lines),
        text(t.contact_cta).size(13),
        row![
            button(text(t.contact_button))
                .on_press(Message::ContactPressed)
                .padding(10),
            button(text(t.learn_more))
                .style(button::secondary)
                .on_press(Message::LearnMorePressed)
                .padding(10),
        ]
        .spacing(12),
    ]
    .spacing(12);

    let copy = column![
        text(t.title).size(28),
        text(t.subtitle).size(16),
        container(overview).padding(20),
    ]
    .spacing(12)
    .width(Length::FillPortion(1));

    let photos = column![hero(app), gallery(&app.slots)]
        .spacing(16)
        .width(Length::FillPortion(1));

    let body = row![copy, photos].spacing(32).padding(24);

    column![
        header,
        scrollable(body).height(Length::Fill),
        container(text(&app.status).size(12)).padding(8),
    ]
    .into()
}

fn language_switcher(selected: Language) -> Element<'static, Message> {
    let mut switcher = row![].spacing(4);
    for language in Language::ALL {
        let style: fn(&Theme, button::Status) -> button::Style = if language == selected {
            button::primary
        } else {
            button::text
        };
        switcher = switcher.push(
            button(text(language.label()).size(13))
                .style(style)
                .on_press(Message::LanguagePicked(language))
                .padding(6),
        );
    }
    switcher.into()
}

fn bullet_list(lines: &'static [&'static str]) -> Element<'static, Message> {
    let mut list: Column<Message> = column![].spacing(6);
    for line in lines {
        list = list.push(text(format!("• {}", line)).size(14));
    }
    list.into()
}

fn hero(app: &EstateApp) -> Element<'_, Message> {
    // Slot 0 is always the hero. The tile opens the lightbox even while
    // its photo is still loading, like the page it replaces.
    let visual: Element<Message> = match app.slots.first().and_then(|slot| slot.handle.as_ref()) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => loading_tile(Length::Fill, HERO_HEIGHT, "…"),
    };
    mouse_area(visual).on_press(Message::OpenLightbox(0)).into()
}

fn gallery(slots: &[ImageSlot]) -> Element<'_, Message> {
    let tiles = slots.get(1..).unwrap_or_default();
    if tiles.is_empty() {
        // No gallery configured: keep the layout shape with labelled
        // placeholder tiles, as the original page did.
        let placeholders: Vec<Element<Message>> = ["写真A", "写真B", "写真C", "写真D"]
            .into_iter()
            .map(|label| loading_tile(Length::Fixed(TILE_WIDTH), TILE_HEIGHT, label))
            .collect();
        return Wrap::with_elements(placeholders)
            .spacing(12.0)
            .line_spacing(12.0)
            .into();
    }

    let elements: Vec<Element<'_, Message>> = tiles
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let visual: Element<Message> = match &slot.handle {
                Some(handle) => image(handle.clone())
                    .width(Length::Fixed(TILE_WIDTH))
                    .height(Length::Fixed(TILE_HEIGHT))
                    .content_fit(ContentFit::Cover)
                    .into(),
                None => loading_tile(Length::Fixed(TILE_WIDTH), TILE_HEIGHT, "…"),
            };
            mouse_area(visual)
                .on_press(Message::OpenLightbox(1 + i))
                .into()
        })
        .collect();

    Wrap::with_elements(elements)
        .spacing(12.0)
        .line_spacing(12.0)
        .into()
}

fn loading_tile(width: Length, height: f32, label: &'static str) -> Element<'static, Message> {
    container(text(label).size(14))
        .width(width)
        .height(Length::Fixed(height))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(container::rounded_box)
        .into()
}
