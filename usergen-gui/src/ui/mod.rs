use druid::{
    lens::Map,
    widget::{Button, Either, Flex, Label, Maybe, Scroll, SizedBox, ViewSwitcher},
    Widget, WidgetExt, WindowDesc,
};
use usergen_core::card::{APPRECIATE_LABEL, ERROR_MESSAGE, HEADING};

use crate::{
    cmd,
    controller::{GenerateController, ThankYouController},
    data::{AppState, ViewKind},
};

pub mod card;
pub mod theme;
pub mod utils;

pub fn main_window() -> WindowDesc<AppState> {
    WindowDesc::new(root_widget())
        .title("Random User Generator")
        .with_min_size((theme::grid(50.0), theme::grid(50.0)))
        .window_size((theme::grid(70.0), theme::grid(110.0)))
}

fn root_widget() -> impl Widget<AppState> {
    let content = Either::new(
        |state: &AppState, _| state.generator.is_visible(),
        generator_widget(),
        SizedBox::empty(),
    );

    Scroll::new(content.center().padding(theme::grid(2.0)))
        .vertical()
        .expand()
        .controller(GenerateController)
        .controller(ThankYouController::new())
}

fn generator_widget() -> impl Widget<AppState> {
    let heading = Label::new(HEADING)
        .with_font(theme::UI_FONT_HEADING)
        .with_text_color(theme::ACCENT_COLOR);

    let generate = action_button(
        Button::dynamic(|state: &AppState, _| state.generator.generate_label().to_string())
            .on_click(|ctx, _, _| ctx.submit_command(cmd::GENERATE)),
    );

    let appreciate = action_button(
        Button::new(APPRECIATE_LABEL).on_click(|ctx, _, _| ctx.submit_command(cmd::APPRECIATE)),
    );

    Flex::column()
        .with_spacer(theme::grid(6.0))
        .with_child(heading)
        .with_spacer(theme::grid(3.5))
        .with_child(generate)
        .with_spacer(theme::grid(3.5))
        .with_child(view_widget())
        .with_spacer(theme::grid(3.5))
        .with_child(appreciate)
        .with_spacer(theme::grid(3.5))
}

fn view_widget() -> impl Widget<AppState> {
    ViewSwitcher::new(
        |state: &AppState, _| state.view_kind(),
        |kind: &ViewKind, _, _| match kind {
            ViewKind::Hidden => SizedBox::empty().boxed(),
            ViewKind::Loading => utils::spinner_widget().boxed(),
            ViewKind::Error => Label::new(ERROR_MESSAGE)
                .with_text_color(theme::ERROR_COLOR)
                .boxed(),
            ViewKind::Card => Maybe::or_empty(card::card_widget)
                .lens(Map::new(|state: &AppState| state.card(), |_, _| {}))
                .boxed(),
        },
    )
}

fn action_button(button: impl Widget<AppState> + 'static) -> impl Widget<AppState> {
    button
        .env_scope(|env, _| env.set(theme::TEXT_COLOR, theme::WHITE))
        .fix_height(theme::grid(5.0))
}
