use std::sync::Arc;

use lipi_core::{Mode, Transliterator};

use super::LipiError;

/// One transliteration mode with its own result cache.
#[derive(uniffi::Object)]
pub struct LipiTransliterator {
    inner: Transliterator,
}

#[uniffi::export]
impl LipiTransliterator {
    #[uniffi::constructor]
    fn new(mode: String) -> Result<Arc<Self>, LipiError> {
        let mode: Mode = mode.parse()?;
        Ok(Arc::new(Self {
            inner: Transliterator::new(mode),
        }))
    }

    fn mode(&self) -> String {
        self.inner.mode().name().to_string()
    }

    fn transliterate(&self, input: String, composing: bool) -> String {
        self.inner.transliterate(&input, composing)
    }

    fn variants(&self, base_key: String) -> Vec<String> {
        self.inner.variants(&base_key)
    }

    fn get_suggestions(&self, input: String, limit: u32) -> Vec<String> {
        self.inner.get_suggestions(&input, limit as usize)
    }

    fn cache_len(&self) -> u64 {
        self.inner.cache_len() as u64
    }

    fn clear_cache(&self) {
        self.inner.clear_cache();
    }
}
