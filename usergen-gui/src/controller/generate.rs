use std::{sync::Arc, thread};

use druid::{
    widget::{prelude::*, Controller},
    ExtEventSink, Selector, SingleUse, Target,
};
use usergen_core::{generator::FetchTicket, model::UserRecord};

use crate::{cmd, data::AppState, error::Error, webapi::WebApi};

type FetchResult = (FetchTicket, Result<UserRecord, Error>);

const FETCH_RESULT: Selector<SingleUse<FetchResult>> = Selector::new("app.generator.fetch-result");

/// Runs the fetch cycle: once when added to the tree, then on every
/// `cmd::GENERATE`.  Requests are never cancelled, outdated results are
/// dropped by the generator.
pub struct GenerateController;

impl GenerateController {
    fn spawn_fetch(self_id: WidgetId, event_sink: ExtEventSink, ticket: FetchTicket) {
        thread::spawn(move || {
            let result = WebApi::global().get_random_user();
            if let Err(err) = event_sink.submit_command(
                FETCH_RESULT,
                SingleUse::new((ticket, result)),
                Target::Widget(self_id),
            ) {
                log::error!("failed to deliver fetch result: {err}");
            }
        });
    }
}

impl<W: Widget<AppState>> Controller<AppState, W> for GenerateController {
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut AppState,
        env: &Env,
    ) {
        match event {
            Event::Command(cmd) if cmd.is(cmd::GENERATE) => {
                let ticket = data.generator.begin_fetch();
                Self::spawn_fetch(ctx.widget_id(), ctx.get_external_handle(), ticket);
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(FETCH_RESULT) => {
                if let Some((ticket, result)) = cmd.get_unchecked(FETCH_RESULT).take() {
                    data.generator.complete(ticket, result.map(Arc::new));
                }
                ctx.set_handled();
            }
            _ => child.event(ctx, event, data, env),
        }
    }

    fn lifecycle(
        &mut self,
        child: &mut W,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &AppState,
        env: &Env,
    ) {
        if let LifeCycle::WidgetAdded = event {
            ctx.submit_command(cmd::GENERATE.to(ctx.widget_id()));
        }
        child.lifecycle(ctx, event, data, env)
    }
}
