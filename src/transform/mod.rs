//! Backend page-envelope adapters.
//!
//! Translates between the `{content, totalElements, size, number}` page
//! envelope many backends return and the `{list, total}` shape the drawer
//! expects, plus the higher-order [`drawer_api_handler`] seam that turns a
//! raw API call into a drawer-compatible API function. Missing envelope
//! fields fall back to their defaults; there is no validation layer.

use std::future::Future;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::model::{PageResult, Pagination};

/// Backend page envelope, camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: usize,
    #[serde(default)]
    pub size: usize,
    #[serde(default)]
    pub number: usize,
}

/// Request payload for backends that take a 0-based `page`/`size` pair
/// alongside flattened filter fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitRequest<P> {
    #[serde(flatten)]
    pub params: P,
    pub page: usize,
    pub size: usize,
}

/// Shape the drawer's 1-based pagination into a 0-based split request.
pub fn split_request_handler<P>(pagination: &Pagination, params: P) -> SplitRequest<P> {
    SplitRequest {
        params,
        page: pagination.page.saturating_sub(1),
        size: pagination.page_size,
    }
}

/// Extract the drawer's `{list, total}` from a page envelope.
pub fn common_response_handler<T>(envelope: PageEnvelope<T>) -> PageResult<T> {
    PageResult {
        list: envelope.content,
        total: envelope.total_elements,
    }
}

/// Adapt a raw API call to the drawer's API signature.
///
/// `request_handler` shapes the pagination and filters into the call's
/// request type, `response_handler` shapes the call's response back into a
/// [`PageResult`]. The returned function is what [`crate::model::Drawer::new`]
/// expects, which keeps the drawer core backend-agnostic.
pub fn drawer_api_handler<Call, Fut, Req, Resp, T, P, E>(
    call: Call,
    request_handler: impl Fn(&Pagination, P) -> Req + 'static,
    response_handler: impl Fn(Resp) -> PageResult<T> + 'static,
) -> impl Fn(Pagination, P) -> LocalBoxFuture<'static, Result<PageResult<T>, E>>
where
    Call: Fn(Req) -> Fut + 'static,
    Fut: Future<Output = Result<Resp, E>> + 'static,
    Resp: 'static,
    T: 'static,
    E: 'static,
{
    let response_handler = Rc::new(response_handler);
    move |pagination, params| {
        let request = request_handler(&pagination, params);
        let pending = call(request);
        let response_handler = Rc::clone(&response_handler);
        let fut: LocalBoxFuture<'static, Result<PageResult<T>, E>> =
            Box::pin(async move { pending.await.map(|response| response_handler(response)) });
        fut
    }
}
