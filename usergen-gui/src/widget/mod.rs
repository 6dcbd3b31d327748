mod overlay;
pub mod remote_image;
mod utils;

use druid::{Data, Widget};

pub use overlay::Overlay;
pub use remote_image::RemoteImage;
pub use utils::ClipCircle;

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn clip_circle(self) -> ClipCircle<Self> {
        ClipCircle::new(self)
    }

    fn overlay<O: Widget<T>>(
        self,
        overlay: O,
        visible: impl Fn(&T) -> bool + 'static,
    ) -> Overlay<T, Self, O> {
        Overlay::cover(self, overlay, visible)
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
