pub use druid::theme::*;
use druid::{Color, Env, FontDescriptor, FontFamily, FontWeight, Insets, Key};

use crate::data::AppState;

pub fn grid(m: f64) -> f64 {
    GRID * m
}

pub const GRID: f64 = 8.0;

pub const WHITE: Color = Color::WHITE;
pub const GREY_1: Color = Color::grey8(0x33);
pub const GREY_2: Color = Color::grey8(0x47);
pub const GREY_3: Color = Color::grey8(0x64);
pub const GREY_5: Color = Color::grey8(0xe0);
pub const GREY_6: Color = Color::grey8(0xf2);
pub const LIGHT_BLUE: Color = Color::rgb8(0x4a, 0x9d, 0xe0);
pub const DULL_BLUE: Color = Color::rgb8(0xd6, 0xe6, 0xf5);
pub const RED: Color = Color::rgb8(0xe0, 0x2b, 0x2b);

pub const UI_FONT_HEADING: Key<FontDescriptor> = Key::new("app.ui-font-heading");
pub const UI_FONT_BOLD: Key<FontDescriptor> = Key::new("app.ui-font-bold");
pub const TEXT_SIZE_HUGE: Key<f64> = Key::new("app.text-size-huge");
pub const ACCENT_COLOR: Key<Color> = Key::new("app.accent-color");
pub const ACCENT_DULL_COLOR: Key<Color> = Key::new("app.accent-dull-color");
pub const CARD_BACKGROUND: Key<Color> = Key::new("app.card-background");
pub const CARD_RADIUS: Key<f64> = Key::new("app.card-radius");
pub const ERROR_COLOR: Key<Color> = Key::new("app.error-color");
pub const SPINNER_COLOR: Key<Color> = Key::new("app.spinner-color");
pub const SPINNER_ACTIVE_COLOR: Key<Color> = Key::new("app.spinner-active-color");

pub fn setup(env: &mut Env, _state: &AppState) {
    env.set(WINDOW_BACKGROUND_COLOR, GREY_6);
    env.set(TEXT_COLOR, GREY_1);
    env.set(PLACEHOLDER_COLOR, GREY_3);
    env.set(PRIMARY_LIGHT, LIGHT_BLUE);
    env.set(PRIMARY_DARK, LIGHT_BLUE);

    env.set(ACCENT_COLOR, LIGHT_BLUE);
    env.set(ACCENT_DULL_COLOR, DULL_BLUE);
    env.set(CARD_BACKGROUND, WHITE);
    env.set(CARD_RADIUS, 12.0);
    env.set(ERROR_COLOR, RED);
    env.set(SPINNER_COLOR, GREY_5);
    env.set(SPINNER_ACTIVE_COLOR, LIGHT_BLUE);

    env.set(BACKGROUND_LIGHT, WHITE);
    env.set(BACKGROUND_DARK, GREY_5);
    env.set(FOREGROUND_LIGHT, GREY_1);
    env.set(FOREGROUND_DARK, GREY_2);

    env.set(BUTTON_DARK, LIGHT_BLUE);
    env.set(BUTTON_LIGHT, LIGHT_BLUE);
    env.set(BUTTON_BORDER_RADIUS, 6.0);
    env.set(BUTTON_BORDER_WIDTH, 0.0);
    env.set(DISABLED_TEXT_COLOR, GREY_5);

    env.set(
        UI_FONT,
        FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(15.0),
    );
    env.set(
        UI_FONT_BOLD,
        FontDescriptor::new(FontFamily::SYSTEM_UI).with_weight(FontWeight::BOLD),
    );
    env.set(
        UI_FONT_HEADING,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_size(34.0)
            .with_weight(FontWeight::BLACK),
    );
    env.set(TEXT_SIZE_NORMAL, 15.0);
    env.set(TEXT_SIZE_LARGE, 18.0);
    env.set(TEXT_SIZE_HUGE, 28.0);

    env.set(BASIC_WIDGET_HEIGHT, grid(3.0));
    env.set(BORDERED_WIDGET_HEIGHT, grid(5.0));
    env.set(
        TEXTBOX_INSETS,
        Insets::new(grid(1.0), grid(1.0), grid(1.0), grid(1.0)),
    );

    env.set(WIDGET_PADDING_VERTICAL, grid(1.0));
    env.set(WIDGET_PADDING_HORIZONTAL, grid(2.0));
    env.set(WIDGET_CONTROL_COMPONENT_PADDING, grid(1.0));
}
