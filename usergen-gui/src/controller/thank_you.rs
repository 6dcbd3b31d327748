use druid::{
    widget::{prelude::*, Controller},
    TimerToken,
};
use usergen_core::generator::ThankYouToken;

use crate::{cmd, data::AppState};

/// Shows the overlay on `cmd::APPRECIATE` and hides it when the timer of the
/// latest appreciation fires.  Timers die with the widget.
pub struct ThankYouController {
    pending: Option<(TimerToken, ThankYouToken)>,
}

impl ThankYouController {
    pub fn new() -> Self {
        Self { pending: None }
    }
}

impl<W: Widget<AppState>> Controller<AppState, W> for ThankYouController {
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut AppState,
        env: &Env,
    ) {
        match event {
            Event::Command(cmd) if cmd.is(cmd::APPRECIATE) => {
                let token = data.generator.appreciate();
                let timer = ctx.request_timer(data.thank_you_duration());
                self.pending.replace((timer, token));
                ctx.set_handled();
            }
            Event::Timer(timer) if self.is_pending(timer) => {
                if let Some((_, token)) = self.pending.take() {
                    data.generator.dismiss(token);
                }
            }
            _ => child.event(ctx, event, data, env),
        }
    }
}

impl ThankYouController {
    fn is_pending(&self, timer: &TimerToken) -> bool {
        matches!(self.pending, Some((pending, _)) if &pending == timer)
    }
}
