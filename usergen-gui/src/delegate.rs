use druid::{AppDelegate, Command, DelegateCtx, Env, Handled, Target};
use threadpool::ThreadPool;

use crate::{data::AppState, webapi::WebApi, widget::remote_image};

pub struct Delegate {
    image_pool: ThreadPool,
}

impl Delegate {
    pub fn new() -> Self {
        const MAX_IMAGE_THREADS: usize = 4;

        Self {
            image_pool: ThreadPool::with_name("image_loading".into(), MAX_IMAGE_THREADS),
        }
    }
}

impl AppDelegate<AppState> for Delegate {
    fn command(
        &mut self,
        ctx: &mut DelegateCtx,
        target: Target,
        cmd: &Command,
        _data: &mut AppState,
        _env: &Env,
    ) -> Handled {
        if let Some(location) = cmd.get(remote_image::REQUEST_DATA).cloned() {
            let sink = ctx.get_external_handle();
            if let Some(image_buf) = WebApi::global().get_cached_image(&location) {
                let payload = remote_image::ImagePayload {
                    location,
                    image_buf: Ok(image_buf),
                };
                ctx.submit_command(remote_image::PROVIDE_DATA.with(payload).to(target));
            } else {
                self.image_pool.execute(move || {
                    let image_buf = WebApi::global().get_image(location.clone());
                    let payload = remote_image::ImagePayload {
                        location,
                        image_buf,
                    };
                    if let Err(err) =
                        sink.submit_command(remote_image::PROVIDE_DATA, payload, target)
                    {
                        log::error!("failed to deliver image: {err}");
                    }
                });
            }
            Handled::Yes
        } else {
            Handled::No
        }
    }
}
