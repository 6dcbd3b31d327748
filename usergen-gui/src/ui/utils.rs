use std::f64::consts::PI;

use druid::{
    kurbo::Circle,
    widget::prelude::*,
    Data, Vec2, Widget, WidgetExt,
};

use super::theme;

const SPINNER_DOTS: i32 = 8;

struct Spinner {
    t: f64,
}

impl Spinner {
    pub fn new() -> Self {
        Self { t: 0.0 }
    }
}

impl<T: Data> Widget<T> for Spinner {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut T, _env: &Env) {
        if let Event::AnimFrame(interval) = event {
            self.t += (*interval as f64) * 1e-9;
            if self.t >= 1.0 {
                self.t = 0.0;
            }
            ctx.request_anim_frame();
            ctx.request_paint();
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &T, _env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            ctx.request_anim_frame();
            ctx.request_paint();
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &T,
        _env: &Env,
    ) -> Size {
        bc.constrain(Size::new(theme::grid(8.0), theme::grid(8.0)))
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, env: &Env) {
        let center = ctx.size().to_rect().center();
        let idle = env.get(theme::SPINNER_COLOR);
        let active_color = env.get(theme::SPINNER_ACTIVE_COLOR);
        let active = (f64::from(SPINNER_DOTS) * self.t).floor() as i32;
        for i in 0..SPINNER_DOTS {
            let step = f64::from(i);
            let angle = Vec2::from_angle((step / f64::from(SPINNER_DOTS)) * 2.0 * PI);
            let dot = Circle::new(center + angle * theme::grid(2.5), theme::grid(0.6));
            ctx.fill(dot, if i == active { &active_color } else { &idle });
        }
    }
}

pub fn spinner_widget<T: Data>() -> impl Widget<T> {
    Spinner::new().padding(theme::grid(4.0)).center()
}
