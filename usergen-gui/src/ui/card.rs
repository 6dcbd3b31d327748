use druid::{
    widget::{CrossAxisAlignment, Flex, Label, LineBreaking},
    Widget, WidgetExt,
};
use usergen_core::card::THANK_YOU;

use crate::{
    data::Card,
    ui::theme,
    widget::{MyWidgetExt, RemoteImage},
};

const CARD_WIDTH: f64 = 384.0;
const PICTURE_SIZE: f64 = 208.0;

pub fn card_widget() -> impl Widget<Card> {
    let body = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .with_spacer(theme::grid(2.0))
        .with_child(picture_widget().center())
        .with_spacer(theme::grid(2.0))
        .with_child(name_widget())
        .with_child(gender_widget())
        .with_spacer(theme::grid(1.0))
        .with_child(detail_row("Email", |card: &Card| card.text.email.clone()))
        .with_child(detail_row("Location", |card: &Card| {
            card.text.location.clone()
        }))
        .with_child(detail_row("Login", |card: &Card| card.text.login.clone()))
        .with_child(detail_row("Phone", |card: &Card| card.text.phone.clone()))
        .with_spacer(theme::grid(2.0));

    body.background(theme::CARD_BACKGROUND)
        .rounded(theme::CARD_RADIUS)
        .overlay(thank_you_widget(), |card: &Card| card.thank_you)
        .fix_width(CARD_WIDTH)
}

fn picture_widget() -> impl Widget<Card> {
    RemoteImage::new(|card: &Card| card.text.picture.as_str().into())
    .fix_size(PICTURE_SIZE, PICTURE_SIZE)
    .clip_circle()
}

fn name_widget() -> impl Widget<Card> {
    Label::dynamic(|card: &Card, _| card.text.name.clone())
        .with_font(theme::UI_FONT_BOLD)
        .with_text_size(theme::TEXT_SIZE_HUGE)
        .with_text_color(theme::WHITE)
        .center()
        .padding(theme::grid(1.0))
        .background(theme::ACCENT_COLOR)
}

fn gender_widget() -> impl Widget<Card> {
    Label::dynamic(|card: &Card, _| card.text.gender.clone())
        .with_text_size(theme::TEXT_SIZE_LARGE)
        .center()
        .padding(theme::grid(0.5))
        .background(theme::ACCENT_DULL_COLOR)
}

fn detail_row(caption: &str, value: impl Fn(&Card) -> String + 'static) -> impl Widget<Card> {
    let caption = Label::new(caption)
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .fix_width(theme::grid(10.0));
    let value = Label::dynamic(move |card: &Card, _| value(card))
        .with_line_break_mode(LineBreaking::WordWrap);

    Flex::row()
        .with_child(caption)
        .with_flex_child(value, 1.0)
        .padding((theme::grid(2.5), theme::grid(0.5)))
}

fn thank_you_widget() -> impl Widget<Card> {
    Label::new(THANK_YOU)
        .with_font(theme::UI_FONT_BOLD)
        .with_text_size(theme::TEXT_SIZE_HUGE)
        .with_text_color(theme::ACCENT_COLOR)
        .center()
        .background(theme::WHITE.with_alpha(0.9))
        .rounded(theme::CARD_RADIUS)
        .expand()
}
