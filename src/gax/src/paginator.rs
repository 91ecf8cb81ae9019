// Copyright 2024 Google LLC
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

//! Converts paginated `Describe*` operations into streams.
//!
//! Operations that return collections of resources limit the number of
//! resources in each response. The response includes a `Marker` when more
//! results are available, and the next request must send the marker back.
//! The types in this module hide that loop: [Paginator] yields each response
//! and [ItemPaginator] yields each resource.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

/// Describes a type that can be iterated over asynchronously when used with
/// [Paginator].
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the response returning the items in this page.
    fn items(self) -> Vec<Self::PageItem>;

    /// The marker for the next page, or an empty string when this is the last
    /// page.
    fn next_page_token(&self) -> String;
}

/// A stream of pages, one item per response.
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
    /// `seed_token` is the marker in the first request, typically empty.
    /// `execute` makes one request with the given marker.
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
                    Ok(page_resp) => {
                        let tok = page_resp.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page_resp), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page, or `None` when there are no more pages.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts this paginator into a stream of items.
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

impl<T, E> std::fmt::Debug for Paginator<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator").finish_non_exhaustive()
    }
}

/// A stream of items, flattening the pages returned by a [Paginator].
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T::PageItem, E>> + Send>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        let stream = unfold(
            (pages, VecDeque::<T::PageItem>::new(), false),
            |(mut pages, mut buffer, mut done)| async move {
                loop {
                    if let Some(item) = buffer.pop_front() {
                        return Some((Ok(item), (pages, buffer, done)));
                    }
                    if done {
                        return None;
                    }
                    match pages.next().await {
                        None => done = true,
                        Some(Ok(page)) => buffer.extend(page.items()),
                        Some(Err(e)) => return Some((Err(e), (pages, buffer, true))),
                    }
                }
            },
        );
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next item, or `None` when there are no more items.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

impl<T, E> std::fmt::Debug for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemPaginator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type TestError = String;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestResponse {
        items: Vec<String>,
        marker: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.marker.clone()
        }
    }

    fn page(items: &[&str], marker: &str) -> TestResponse {
        TestResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            marker: marker.to_string(),
        }
    }

    // Returns an `execute` closure that verifies the markers and returns the
    // canned responses in order.
    fn canned(
        responses: Vec<Result<TestResponse, TestError>>,
        markers: Vec<&'static str>,
    ) -> impl Fn(String) -> futures::future::Ready<Result<TestResponse, TestError>>
    + Clone
    + Send
    + 'static {
        let responses = Arc::new(Mutex::new(VecDeque::from(responses)));
        let markers = Arc::new(Mutex::new(VecDeque::from(markers)));
        move |token: String| {
            let want = markers.lock().unwrap().pop_front().unwrap();
            assert_eq!(token, want);
            let resp = responses.lock().unwrap().pop_front().unwrap();
            futures::future::ready(resp)
        }
    }

    #[tokio::test]
    async fn pages() {
        let execute = canned(
            vec![Ok(page(&["db-1", "db-2"], "m1")), Ok(page(&["db-3"], ""))],
            vec!["", "m1"],
        );
        let mut paginator = Paginator::new(String::new(), execute);
        let mut got = Vec::new();
        while let Some(p) = paginator.next().await {
            got.push(p.unwrap());
        }
        assert_eq!(got, vec![page(&["db-1", "db-2"], "m1"), page(&["db-3"], "")]);
    }

    #[tokio::test]
    async fn seed_token() {
        let execute = canned(vec![Ok(page(&["db-9"], ""))], vec!["start-here"]);
        let mut paginator = Paginator::new("start-here".to_string(), execute);
        let p = paginator.next().await;
        assert!(matches!(p, Some(Ok(_))), "{p:?}");
        let p = paginator.next().await;
        assert!(p.is_none(), "{p:?}");
    }

    #[tokio::test]
    async fn error_stops_pages() {
        let execute = canned(
            vec![Ok(page(&["db-1"], "m1")), Err("simulated".to_string())],
            vec!["", "m1"],
        );
        let mut paginator = Paginator::new(String::new(), execute);
        let mut count = 0;
        let mut errors = 0;
        while let Some(p) = paginator.next().await {
            count += 1;
            if let Err(e) = p {
                assert_eq!(e, "simulated");
                errors += 1;
            }
        }
        assert_eq!(count, 2);
        assert_eq!(errors, 1);
    }

    #[tokio::test]
    async fn items() {
        let execute = canned(
            vec![
                Ok(page(&["db-1", "db-2"], "m1")),
                Ok(page(&[], "m2")),
                Ok(page(&["db-3"], "")),
            ],
            vec!["", "m1", "m2"],
        );
        let mut items = Paginator::new(String::new(), execute).items();
        let mut got = Vec::new();
        while let Some(i) = items.next().await {
            got.push(i.unwrap());
        }
        assert_eq!(got, vec!["db-1", "db-2", "db-3"]);
    }

    #[tokio::test]
    async fn items_error() {
        let execute = canned(
            vec![Ok(page(&["db-1"], "m1")), Err("simulated".to_string())],
            vec!["", "m1"],
        );
        let mut items = Paginator::new(String::new(), execute).items();
        assert_eq!(items.next().await, Some(Ok("db-1".to_string())));
        assert_eq!(items.next().await, Some(Err("simulated".to_string())));
        assert_eq!(items.next().await, None);
    }

    #[test]
    fn send() {
        static_assertions::assert_impl_all!(Paginator<TestResponse, TestError>: Send);
        static_assertions::assert_impl_all!(ItemPaginator<TestResponse, TestError>: Send);
    }
}
