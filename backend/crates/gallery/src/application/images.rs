//! Image Gallery Use Case
//!
//! Image API calls routed through the outcome dispatcher: listing is a
//! query, deletion a mutation.

use std::future::Future;
use std::sync::Arc;

use platform::client::with_deadline;

use crate::application::config::GalleryConfig;
use crate::application::dispatch::{ApiOutcomeDispatcher, Dispatched};
use crate::domain::{ApiOutcome, Image, ImageApi, TokenHandle, is_valid_image_id};
use crate::error::{GalleryError, GalleryResult};

const IMAGES_PATH: &str = "api/images";

pub struct ImageGalleryUseCase<A>
where
    A: ImageApi,
{
    api: Arc<A>,
    dispatcher: ApiOutcomeDispatcher,
    config: Arc<GalleryConfig>,
}

impl<A> ImageGalleryUseCase<A>
where
    A: ImageApi + Sync,
{
    pub fn new(api: Arc<A>, config: Arc<GalleryConfig>) -> Self {
        Self {
            api,
            dispatcher: ApiOutcomeDispatcher::new(config.access_denied_path.clone()),
            config,
        }
    }

    pub async fn list_images(
        &self,
        access_token: Option<&TokenHandle>,
    ) -> GalleryResult<Dispatched<Vec<Image>>> {
        let outcome = self.bounded(self.api.get(IMAGES_PATH, access_token)).await?;

        self.dispatcher
            .dispatch(outcome, |body| async move {
                serde_json::from_slice::<Vec<Image>>(&body)
                    .map_err(|e| GalleryError::Internal(format!("Invalid image list: {e}")))
            })
            .await
    }

    pub async fn delete_image(
        &self,
        id: &str,
        access_token: Option<&TokenHandle>,
    ) -> GalleryResult<Dispatched<()>> {
        if !is_valid_image_id(id) {
            return Err(GalleryError::InvalidRequest(format!("invalid image id: {id}")));
        }

        let path = format!("{IMAGES_PATH}/{id}");
        let outcome = self.bounded(self.api.delete(&path, access_token)).await?;

        let dispatched = self
            .dispatcher
            .dispatch(outcome, |_body| async { Ok::<_, GalleryError>(()) })
            .await?;

        if matches!(dispatched, Dispatched::Completed(())) {
            tracing::info!(image_id = %id, "Image deleted");
        }
        Ok(dispatched)
    }

    async fn bounded<F>(&self, call: F) -> GalleryResult<ApiOutcome<Vec<u8>>>
    where
        F: Future<Output = GalleryResult<ApiOutcome<Vec<u8>>>>,
    {
        with_deadline(self.config.api_deadline, call)
            .await
            .map_err(|elapsed| GalleryError::UpstreamUnavailable(elapsed.to_string()))?
    }
}
