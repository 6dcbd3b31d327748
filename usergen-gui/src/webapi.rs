use std::{num::NonZeroUsize, sync::Arc};

use druid::{
    image::{self, ImageFormat},
    ImageBuf,
};
use lru::LruCache;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use usergen_core::{config::Config, model::UserRecord, webapi};

use crate::error::Error;

pub struct WebApi {
    client: webapi::WebApi,
    images: Mutex<LruCache<Arc<str>, ImageBuf>>,
}

impl WebApi {
    pub fn new(config: &Config) -> Self {
        const IMAGE_CACHE_SIZE: usize = 64;

        Self {
            client: webapi::WebApi::from_config(config),
            images: Mutex::new(LruCache::new(
                NonZeroUsize::new(IMAGE_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN),
            )),
        }
    }
}

static GLOBAL_WEBAPI: OnceCell<Arc<WebApi>> = OnceCell::new();

/// Global instance.
impl WebApi {
    pub fn install_as_global(self) {
        if GLOBAL_WEBAPI.set(Arc::new(self)).is_err() {
            log::warn!("web API already installed, keeping the first one");
        }
    }

    pub fn global() -> Arc<Self> {
        GLOBAL_WEBAPI
            .get()
            .cloned()
            .expect("WebApi::install_as_global must be called first")
    }
}

/// User endpoints.
impl WebApi {
    pub fn get_random_user(&self) -> Result<UserRecord, Error> {
        Ok(self.client.get_random_user()?)
    }
}

/// Image endpoints.
impl WebApi {
    pub fn get_cached_image(&self, uri: &Arc<str>) -> Option<ImageBuf> {
        self.images.lock().get(uri).cloned()
    }

    pub fn get_image(&self, uri: Arc<str>) -> Result<ImageBuf, Error> {
        if let Some(cached_image) = self.get_cached_image(&uri) {
            return Ok(cached_image);
        }
        let body = self.client.get_image(&uri)?;
        let image = match image_format(&body) {
            Some(format) => image::load_from_memory_with_format(&body, format)?,
            None => image::load_from_memory(&body)?,
        };
        let image_buf = ImageBuf::from_dynamic_image(image);
        self.images.lock().put(uri, image_buf.clone());
        Ok(image_buf)
    }
}

fn image_format(body: &[u8]) -> Option<ImageFormat> {
    match infer::get(body) {
        Some(kind) if kind.mime_type() == "image/jpeg" => Some(ImageFormat::Jpeg),
        Some(kind) if kind.mime_type() == "image/png" => Some(ImageFormat::Png),
        Some(kind) if kind.mime_type() == "image/webp" => Some(ImageFormat::WebP),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_image_format_from_magic_bytes() {
        let png = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0x0d];
        let jpeg = [0xff, 0xd8, 0xff, 0xe0, 0, 0x10, b'J', b'F', b'I', b'F'];
        assert_eq!(image_format(&png), Some(ImageFormat::Png));
        assert_eq!(image_format(&jpeg), Some(ImageFormat::Jpeg));
        assert_eq!(image_format(b"{\"results\": []}"), None);
    }
}
