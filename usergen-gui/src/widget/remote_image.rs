use std::sync::Arc;

use druid::{
    piet::{InterpolationMode, PietImage},
    widget::{prelude::*, FillStrat},
    Data, ImageBuf, Selector,
};

use crate::{error::Error, ui::theme};

pub const REQUEST_DATA: Selector<Arc<str>> = Selector::new("remote-image.request-data");
pub const PROVIDE_DATA: Selector<ImagePayload> = Selector::new("remote-image.provide-data");

#[derive(Clone)]
pub struct ImagePayload {
    pub location: Arc<str>,
    pub image_buf: Result<ImageBuf, Error>,
}

/// Fills its box with `BACKGROUND_DARK` and, once the located image has been
/// delivered, covers it with the image.  A failed load keeps the fill.
pub struct RemoteImage<T> {
    locator: Box<dyn Fn(&T) -> Arc<str>>,
    location: Option<Arc<str>>,
    image_buf: Option<ImageBuf>,
    // Backend image, created on first paint.
    painted: Option<PietImage>,
}

impl<T: Data> RemoteImage<T> {
    pub fn new(locator: impl Fn(&T) -> Arc<str> + 'static) -> Self {
        Self {
            locator: Box::new(locator),
            location: None,
            image_buf: None,
            painted: None,
        }
    }

    /// Point at `location`, returning it if a new request is needed.
    fn relocate(&mut self, location: Arc<str>) -> Option<Arc<str>> {
        if self.location.as_ref() == Some(&location) {
            return None;
        }
        self.image_buf = None;
        self.painted = None;
        self.location = Some(location.clone());
        Some(location)
    }
}

impl<T: Data> Widget<T> for RemoteImage<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut T, _env: &Env) {
        if let Event::Command(cmd) = event {
            if let Some(payload) = cmd.get(PROVIDE_DATA) {
                if self.location.as_ref() != Some(&payload.location) {
                    log::debug!("dropping stale image {}", payload.location);
                } else {
                    match &payload.image_buf {
                        Ok(image_buf) => {
                            self.image_buf = Some(image_buf.clone());
                            self.painted = None;
                            ctx.request_paint();
                        }
                        Err(err) => {
                            log::warn!("failed to load image {}: {}", payload.location, err);
                        }
                    }
                }
                ctx.set_handled();
            }
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, _env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            if let Some(location) = self.relocate((self.locator)(data)) {
                ctx.submit_command(REQUEST_DATA.with(location).to(ctx.widget_id()));
            }
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, _env: &Env) {
        if let Some(location) = self.relocate((self.locator)(data)) {
            ctx.submit_command(REQUEST_DATA.with(location).to(ctx.widget_id()));
            ctx.request_paint();
        }
    }

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, _env: &Env) -> Size {
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, env: &Env) {
        let size = ctx.size();
        let rect = size.to_rect();
        ctx.fill(rect, &env.get(theme::BACKGROUND_DARK));

        let Some(image_buf) = &self.image_buf else {
            return;
        };
        let painted = self
            .painted
            .get_or_insert_with(|| image_buf.to_image(ctx.render_ctx));
        let transform = FillStrat::Cover.affine_to_fill(size, image_buf.size());
        ctx.with_save(|ctx| {
            ctx.clip(rect);
            ctx.transform(transform);
            ctx.draw_image(
                painted,
                image_buf.size().to_rect(),
                InterpolationMode::Bilinear,
            );
        });
    }
}
