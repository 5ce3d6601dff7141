//! PostList component: fetches a remote list once on mount.

use std::sync::Arc;

use crate::gateway::{FetchError, Post, PostsGateway};
use crate::surface::{Node, Surface};
use crate::{Component, Effect, Emitter};

/// Events produced by the mount-time fetch of [`PostList`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PostListEvent {
    Loaded(Vec<Post>),
    Failed(FetchError),
}

/// Progress of the one-shot fetch.
///
/// The list is committed wholesale exactly once. A failed fetch is recorded
/// rather than retried; the error stays available on the model while the
/// rendered list stays empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<Post>),
    Failed(FetchError),
}

/// State held by [`PostList`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PostListModel {
    pub load: LoadState,
}

/// A list of remote posts, one line item per post title.
///
/// On mount the component issues a single read through its
/// [`PostsGateway`] and renders nothing but an empty list until the result
/// arrives. Arrival order from the gateway is preserved. Fetch failures are
/// caught inside the effect task, logged, and committed as
/// [`LoadState::Failed`] - nothing unwinds out of the component, and a
/// result that arrives after teardown is discarded by the emitter.
pub struct PostList {
    gateway: Arc<dyn PostsGateway>,
}

impl PostList {
    pub fn new(gateway: Arc<dyn PostsGateway>) -> Self {
        PostList { gateway }
    }
}

impl Component<PostListEvent, PostListModel, Surface> for PostList {
    fn init(&self, model: PostListModel) -> (PostListModel, Effect<PostListEvent>) {
        let gateway = Arc::clone(&self.gateway);

        let fetch = Effect::task(move |emitter| async move {
            match gateway.fetch_posts().await {
                Ok(posts) => emitter.emit(PostListEvent::Loaded(posts)),
                Err(error) => {
                    tracing::warn!(%error, "posts fetch failed; keeping the list empty");
                    emitter.emit(PostListEvent::Failed(error));
                }
            }
        });

        (model, fetch)
    }

    fn update(
        &self,
        event: PostListEvent,
        _model: &PostListModel,
    ) -> (PostListModel, Effect<PostListEvent>) {
        let load = match event {
            PostListEvent::Loaded(posts) => LoadState::Loaded(posts),
            PostListEvent::Failed(error) => LoadState::Failed(error),
        };

        (PostListModel { load }, Effect::none())
    }

    fn view(&self, model: &PostListModel, _emitter: &Emitter<PostListEvent>) -> Surface {
        let items = match &model.load {
            LoadState::Loaded(posts) => posts
                .iter()
                .map(|post| Node::list_item(post.title.clone()))
                .collect(),
            LoadState::Loading | LoadState::Failed(_) => Vec::new(),
        };

        Surface::new(vec![Node::list(items)])
    }
}
