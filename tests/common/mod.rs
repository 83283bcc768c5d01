use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use spotify_poster::{
    error::{PosterError, Result},
    spotify::PosterSource,
    types::Poster,
};

/// Poster source returning a canned poster, or failing with a fixed kind.
pub struct FakeSource {
    poster: Option<Poster>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn returning(name: &str, bytes: &[u8]) -> Self {
        FakeSource {
            poster: Some(Poster {
                name: name.to_string(),
                bytes: bytes.to_vec(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        FakeSource {
            poster: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PosterSource for FakeSource {
    async fn fetch_poster(&self, url: &str) -> Result<Poster> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.poster.clone().ok_or_else(|| {
            PosterError::MalformedResponse(format!("track behind {} has no album images", url))
        })
    }
}
