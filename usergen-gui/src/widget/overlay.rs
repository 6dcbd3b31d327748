use druid::{widget::prelude::*, Data, Point, WidgetPod};

/// Draws `overlay` over the whole of `inner` while `visible` holds.
pub struct Overlay<T, W, O> {
    inner: W,
    overlay: WidgetPod<T, O>,
    visible: Box<dyn Fn(&T) -> bool>,
}

impl<T, W, O> Overlay<T, W, O>
where
    O: Widget<T>,
{
    pub fn cover(inner: W, overlay: O, visible: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            inner,
            overlay: WidgetPod::new(overlay),
            visible: Box::new(visible),
        }
    }
}

impl<T, W, O> Widget<T> for Overlay<T, W, O>
where
    T: Data,
    W: Widget<T>,
    O: Widget<T>,
{
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        if (self.visible)(data) {
            self.overlay.event(ctx, event, data, env);
        }
        self.inner.event(ctx, event, data, env);
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        self.inner.lifecycle(ctx, event, data, env);
        self.overlay.lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &T, data: &T, env: &Env) {
        if (self.visible)(old_data) != (self.visible)(data) {
            ctx.request_paint();
        }
        self.inner.update(ctx, old_data, data, env);
        self.overlay.update(ctx, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let inner_size = self.inner.layout(ctx, bc, data, env);
        self.overlay
            .layout(ctx, &BoxConstraints::tight(inner_size), data, env);
        self.overlay.set_origin(ctx, Point::ORIGIN);
        inner_size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        self.inner.paint(ctx, data, env);
        if (self.visible)(data) {
            self.overlay.paint(ctx, data, env);
        }
    }
}
