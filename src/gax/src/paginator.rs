// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Iterate over the results of list operations.
//!
//! OCI list operations return results in pages. The response includes an
//! `opc-next-page` header when more results are available, and the next
//! request sets the `page` query parameter to that value. The types in this
//! module hide these details, the application just iterates over the pages,
//! or over the individual items.
//!
//! # Example
//! ```
//! # use oci_gax::paginator::*;
//! # use oci_gax::response::{Parts, Response};
//! # struct Page(Vec<i32>);
//! # impl PageItems for Page {
//! #   type PageItem = i32;
//! #   fn into_items(self) -> Vec<i32> { self.0 }
//! # }
//! # tokio_test::block_on(async {
//! let mut items = Paginator::new(String::new(), |_token: String| async {
//!     Ok::<_, oci_gax::error::Error>(Response::from(Page(vec![1, 2, 3])))
//! }).items();
//! let mut sum = 0;
//! while let Some(item) = items.next().await {
//!     sum += item?;
//! }
//! assert_eq!(sum, 6);
//! # Ok::<(), oci_gax::error::Error>(())
//! # });
//! ```

use crate::response::Response;
use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// The collection types returned by list operations implement this trait.
pub trait PageItems {
    /// The type of the items in a page.
    type PageItem: Send;

    /// Consumes the collection, returning its items.
    fn into_items(self) -> Vec<Self::PageItem>;
}

/// A single page of results.
pub trait PageableResponse {
    /// The type of the items in a page.
    type PageItem: Send;

    /// Consumes the page, returning its items.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token to fetch the next page. Empty if this is the last page.
    fn next_page_token(&self) -> String;
}

impl<T> PageableResponse for Response<T>
where
    T: PageItems,
{
    type PageItem = T::PageItem;

    fn items(self) -> Vec<Self::PageItem> {
        self.into_body().into_items()
    }

    fn next_page_token(&self) -> String {
        self.opc_next_page().unwrap_or_default().to_string()
    }
}

/// An adapter that converts list operations into a stream of pages.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new paginator.
    ///
    /// `seed_token` is the page token for the first request, typically empty.
    /// `execute` fetches one page given its token.
    pub fn new<F>(
        seed_token: String,
        execute: impl Fn(String) -> F + Clone + Send + 'static,
    ) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let next = page.next_page_token();
                        let state = if next.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(next)
                        };
                        Some((Ok(page), state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page, `None` when there are no more pages.
    pub async fn next(&mut self) -> Option<Result<T, E>> {
        StreamExt::next(&mut self.stream).await
    }

    /// Converts this paginator into a paginator over the items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// An adapter that converts a [Paginator] into a sequence of items.
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    pages: Paginator<T, E>,
    current: std::vec::IntoIter<T::PageItem>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        Self {
            pages,
            current: Vec::new().into_iter(),
        }
    }

    /// Returns the next item, `None` when there are no more items.
    ///
    /// Fetches new pages as needed. Errors fetching a page are returned in
    /// place of the items, and stop the iteration.
    pub async fn next(&mut self) -> Option<Result<T::PageItem, E>> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(Ok(item));
            }
            match self.pages.next().await? {
                Ok(page) => self.current = page.items().into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }

    /// Converts the paginator into a [Stream] of items.
    pub fn into_stream(self) -> impl Stream<Item = Result<T::PageItem, E>> + Send
    where
        T::PageItem: 'static,
    {
        unfold(self, |mut state| async move {
            let item = state.next().await?;
            Some((item, state))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::response::{OPC_NEXT_PAGE, Parts};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct TestCollection {
        items: Vec<String>,
    }

    impl PageItems for TestCollection {
        type PageItem = String;
        fn into_items(self) -> Vec<String> {
            self.items
        }
    }

    fn page(items: &[&str], next: Option<&str>) -> Response<TestCollection> {
        let mut headers = http::HeaderMap::new();
        if let Some(n) = next {
            headers.insert(OPC_NEXT_PAGE, http::HeaderValue::from_str(n).unwrap());
        }
        let body = TestCollection {
            items: items.iter().map(|s| s.to_string()).collect(),
        };
        Response::from_parts(Parts::new().set_headers(headers), body)
    }

    type Pages = Arc<Mutex<VecDeque<(String, crate::Result<Response<TestCollection>>)>>>;

    fn fake_service(
        pages: Pages,
    ) -> impl Fn(String) -> std::future::Ready<crate::Result<Response<TestCollection>>>
    + Clone
    + Send
    + 'static {
        move |token: String| {
            let (want, response) = pages.lock().unwrap().pop_front().unwrap();
            assert_eq!(token, want);
            std::future::ready(response)
        }
    }

    #[tokio::test]
    async fn pages() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([
            (String::new(), Ok(page(&["a", "b"], Some("p2")))),
            ("p2".to_string(), Ok(page(&["c"], Some("p3")))),
            ("p3".to_string(), Ok(page(&[], None))),
        ])));
        let mut paginator = Paginator::new(String::new(), fake_service(pages.clone()));
        let mut got = Vec::new();
        while let Some(page) = paginator.next().await {
            got.push(page.unwrap().into_body().items);
        }
        assert_eq!(got, vec![vec!["a", "b"], vec!["c"], vec![]]);
        assert!(pages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn seed_token() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([(
            "start".to_string(),
            Ok(page(&["a"], None)),
        )])));
        let mut paginator = Paginator::new("start".to_string(), fake_service(pages));
        assert!(paginator.next().await.is_some());
        assert!(paginator.next().await.is_none());
    }

    #[tokio::test]
    async fn items() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([
            (String::new(), Ok(page(&["a", "b"], Some("p2")))),
            ("p2".to_string(), Ok(page(&[], Some("p3")))),
            ("p3".to_string(), Ok(page(&["c"], None))),
        ])));
        let mut items = Paginator::new(String::new(), fake_service(pages)).items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item.unwrap());
        }
        assert_eq!(got, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn items_stream() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([
            (String::new(), Ok(page(&["a"], Some("p2")))),
            ("p2".to_string(), Ok(page(&["b"], None))),
        ])));
        let stream = Paginator::new(String::new(), fake_service(pages))
            .items()
            .into_stream();
        let got: Vec<String> = stream.map(|r| r.unwrap()).collect().await;
        assert_eq!(got, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn error_stops_iteration() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([
            (String::new(), Ok(page(&["a"], Some("p2")))),
            ("p2".to_string(), Err(Error::io("broken connection"))),
        ])));
        let mut items = Paginator::new(String::new(), fake_service(pages)).items();
        let first = items.next().await;
        assert!(matches!(&first, Some(Ok(s)) if s == "a"), "{first:?}");
        let second = items.next().await;
        assert!(matches!(&second, Some(Err(e)) if e.is_io()), "{second:?}");
        let third = items.next().await;
        assert!(third.is_none(), "{third:?}");
    }
}
