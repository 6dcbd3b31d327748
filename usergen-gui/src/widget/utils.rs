use druid::{kurbo::Circle, widget::prelude::*, Data};

/// Clips `inner` to the largest circle fitting its laid out size.
pub struct ClipCircle<W> {
    inner: W,
    circle: Circle,
}

impl<W> ClipCircle<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            circle: Circle::new((0.0, 0.0), 0.0),
        }
    }
}

impl<T: Data, W: Widget<T>> Widget<T> for ClipCircle<W> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        self.inner.event(ctx, event, data, env)
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        self.inner.lifecycle(ctx, event, data, env)
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &T, data: &T, env: &Env) {
        self.inner.update(ctx, old_data, data, env)
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let size = self.inner.layout(ctx, bc, data, env);
        let radius = size.width.min(size.height) / 2.0;
        self.circle = Circle::new(size.to_rect().center(), radius);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        ctx.with_save(|ctx| {
            ctx.clip(self.circle);
            self.inner.paint(ctx, data, env);
        });
    }
}
