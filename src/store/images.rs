//! Image collection store: actions, reducer, and the fetch-all request.

use std::future::Future;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::sources::{ApiFieldError, FetchError, api_error_or_default};
use crate::state::types::Image;

/// Reason stored when an image fetch fails without a usable API message.
pub const IMAGES_ERROR_DEFAULT: &str = "There was an error retrieving your Images.";

/// Messages understood by [`reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageAction {
    /// A fetch has started.
    Request,
    /// A fetch finished with the complete collection.
    Success(Vec<Image>),
    /// A fetch failed; carries normalized errors.
    Failure(Vec<ApiFieldError>),
    /// Drop the image with this id.
    Remove(String),
    /// Insert an image or replace the one with the same id.
    AddOrUpdate(Image),
}

/// Stored image collection and request status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImagesState {
    /// Images in API order.
    pub entities: Vec<Image>,
    /// A fetch is in flight.
    pub loading: bool,
    /// When the collection was last replaced by a successful fetch.
    pub last_updated: Option<DateTime<Utc>>,
    /// Errors of the last failed fetch; cleared by the next success.
    pub error: Option<Vec<ApiFieldError>>,
}

/// What: Apply one action to the image store.
///
/// Inputs:
/// - `state`: Store to mutate.
/// - `action`: Message to apply.
///
/// Details:
/// - `Failure` keeps the previously stored entities.
/// - `Remove` of an unknown id is a no-op.
pub fn reduce(state: &mut ImagesState, action: ImageAction) {
    match action {
        ImageAction::Request => {
            state.loading = true;
        }
        ImageAction::Success(images) => {
            state.entities = images;
            state.loading = false;
            state.error = None;
            state.last_updated = Some(Utc::now());
        }
        ImageAction::Failure(errors) => {
            state.loading = false;
            state.error = Some(errors);
        }
        ImageAction::Remove(id) => {
            state.entities.retain(|img| img.id != id);
        }
        ImageAction::AddOrUpdate(image) => {
            if let Some(existing) = state.entities.iter_mut().find(|img| img.id == image.id) {
                *existing = image;
            } else {
                state.entities.push(image);
            }
        }
    }
}

/// What: Fetch the full image collection and report the outcome to the store.
///
/// Inputs:
/// - `fetch_all`: Future resolving to every image (all pages), or the first failure.
/// - `dispatch`: Channel feeding actions to the store owner.
///
/// Output:
/// - `Ok(images)` after dispatching one `Success`.
/// - `Err(errors)` with normalized errors after dispatching one `Failure`.
///
/// # Errors
/// - Returns the normalized errors when the fetch fails; the underlying
///   `FetchError` never leaves this function.
///
/// Details:
/// - Dispatches `Request` first; the outcome is dispatched only after every
///   page has arrived, so partial collections are never published.
/// - A closed channel is tolerated: the result is still returned.
pub async fn request_images<Fut>(
    fetch_all: Fut,
    dispatch: &mpsc::UnboundedSender<ImageAction>,
) -> Result<Vec<Image>, Vec<ApiFieldError>>
where
    Fut: Future<Output = Result<Vec<Image>, FetchError>>,
{
    let _ = dispatch.send(ImageAction::Request);
    match fetch_all.await {
        Ok(images) => {
            tracing::info!(count = images.len(), "images retrieved");
            let _ = dispatch.send(ImageAction::Success(images.clone()));
            Ok(images)
        }
        Err(e) => {
            tracing::warn!(error = %e, "image retrieval failed");
            let errors = api_error_or_default(&e, IMAGES_ERROR_DEFAULT);
            let _ = dispatch.send(ImageAction::Failure(errors.clone()));
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{Page, get_all};

    fn image(id: &str, label: &str) -> Image {
        Image {
            id: id.into(),
            label: label.into(),
            description: None,
            size: 1500,
            is_public: true,
            kind: "manual".into(),
            vendor: Some("Debian".into()),
            created: None,
            deprecated: false,
        }
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<ImageAction>) -> Vec<ImageAction> {
        let mut out = Vec::new();
        while let Ok(a) = rx.try_recv() {
            out.push(a);
        }
        out
    }

    #[tokio::test]
    /// What: Two-page fetch publishes a single success with all items
    ///
    /// - Input: Page 1 with two images and a next page, page 2 with one image
    /// - Output: `Request` then exactly one `Success` holding three images
    async fn multi_page_fetch_dispatches_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let fetch = get_all(|n| async move {
            Ok(match n {
                1 => Page {
                    data: vec![image("linode/a", "A"), image("linode/b", "B")],
                    page: 1,
                    pages: 2,
                    results: 3,
                },
                _ => Page {
                    data: vec![image("private/1", "Mine")],
                    page: 2,
                    pages: 2,
                    results: 3,
                },
            })
        });
        let out = request_images(fetch, &tx).await.expect("fetch succeeds");
        assert_eq!(out.len(), 3);
        let actions = drain(&mut rx);
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0], ImageAction::Request);
        match &actions[1] {
            ImageAction::Success(items) => {
                let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
                assert_eq!(ids, vec!["linode/a", "linode/b", "private/1"]);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    /// What: Failures are normalized and dispatched instead of propagated raw
    async fn failure_is_normalized() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let res = request_images(
            async { Err(FetchError::Network("timed out".into())) },
            &tx,
        )
        .await;
        let expected = vec![ApiFieldError::reason(IMAGES_ERROR_DEFAULT)];
        assert_eq!(res, Err(expected.clone()));
        assert_eq!(
            drain(&mut rx),
            vec![ImageAction::Request, ImageAction::Failure(expected)]
        );
    }

    #[tokio::test]
    /// What: A dropped store does not turn a successful fetch into an error
    async fn closed_channel_tolerated() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let res = request_images(async { Ok(vec![image("linode/a", "A")]) }, &tx).await;
        assert_eq!(res.map(|v| v.len()), Ok(1));
    }

    #[test]
    /// What: Reducer transitions for request, success and failure
    fn reducer_request_success_failure() {
        let mut st = ImagesState::default();
        reduce(&mut st, ImageAction::Request);
        assert!(st.loading);
        reduce(&mut st, ImageAction::Success(vec![image("linode/a", "A")]));
        assert!(!st.loading);
        assert!(st.last_updated.is_some());
        assert_eq!(st.entities.len(), 1);
        reduce(&mut st, ImageAction::Request);
        reduce(
            &mut st,
            ImageAction::Failure(vec![ApiFieldError::reason("boom")]),
        );
        assert!(!st.loading);
        assert_eq!(st.entities.len(), 1, "failure keeps previous entities");
        assert_eq!(st.error, Some(vec![ApiFieldError::reason("boom")]));
        reduce(&mut st, ImageAction::Success(vec![]));
        assert!(st.error.is_none());
    }

    #[test]
    /// What: Remove and add-or-update edit the collection by id
    fn reducer_remove_and_upsert() {
        let mut st = ImagesState::default();
        reduce(
            &mut st,
            ImageAction::Success(vec![image("linode/a", "A"), image("linode/b", "B")]),
        );
        reduce(&mut st, ImageAction::AddOrUpdate(image("linode/b", "B2")));
        reduce(&mut st, ImageAction::AddOrUpdate(image("private/9", "C")));
        reduce(&mut st, ImageAction::Remove("linode/a".into()));
        reduce(&mut st, ImageAction::Remove("missing".into()));
        let labels: Vec<&str> = st.entities.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["B2", "C"]);
    }
}
