//! Incremental pagination: a continuation chain issues one page request at a
//! time and keeps going while the server returns rows. The server is the sole
//! authority on end-of-list; an empty page or a transport failure terminates
//! the chain silently and already-appended rows stay in place.

use std::future::Future;

/// Page size used for library listings.
pub const LIST_PAGE_SIZE: u32 = 128;

/// Page size used for thumbnail strips.
pub const THUMB_PAGE_SIZE: u32 = 16;

/// One page request within a continuation chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub container: String,
    pub path: String,
    pub start: u32,
    pub page_size: u32,
}

/// Drive a continuation chain to completion.
///
/// Fetches the page at `start` and hands non-empty results to `sink`. With
/// `page_size > 0` the chain continues at `start + page_size`, `start +
/// 2*page_size`, … until the first empty or failed response. `page_size == 0`
/// requests exactly once and never continues (one-shot fragments).
///
/// The loop awaits each response before issuing the next request, so a chain
/// has at most one request in flight and offsets are strictly ascending:
/// append order is page order regardless of network timing. Returns the
/// number of pages appended.
pub async fn run_continuation<T, F, Fut, S>(
    container: &str,
    path: &str,
    start: u32,
    page_size: u32,
    mut fetch: F,
    mut sink: S,
) -> u32
where
    F: FnMut(PageQuery) -> Fut,
    Fut: Future<Output = Result<Vec<T>, String>>,
    S: FnMut(Vec<T>),
{
    let mut offset = start;
    let mut appended = 0u32;

    loop {
        let query = PageQuery {
            container: container.to_string(),
            path: path.to_string(),
            start: offset,
            page_size,
        };

        let page = match fetch(query).await {
            Ok(page) => page,
            // Transport failure is the end of the chain, not an error to
            // surface; rows already appended are never rolled back.
            Err(_) => break,
        };

        if page.is_empty() {
            break;
        }

        sink(page);
        appended += 1;

        if page_size == 0 {
            break;
        }

        offset += page_size;
    }

    appended
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Serves canned pages keyed by offset and records every query issued.
    struct FakeServer {
        pages: Vec<(u32, Result<Vec<u32>, String>)>,
        queries: RefCell<Vec<PageQuery>>,
    }

    impl FakeServer {
        fn new(pages: Vec<(u32, Result<Vec<u32>, String>)>) -> Self {
            Self {
                pages,
                queries: RefCell::new(Vec::new()),
            }
        }

        async fn fetch(&self, query: PageQuery) -> Result<Vec<u32>, String> {
            self.queries.borrow_mut().push(query.clone());
            self.pages
                .iter()
                .find(|(start, _)| *start == query.start)
                .map(|(_, page)| page.clone())
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    #[tokio::test]
    async fn chain_walks_ascending_offsets_until_empty() {
        let server = FakeServer::new(vec![
            (0, Ok((0..20).collect())),
            (20, Ok((20..40).collect())),
            (40, Ok(Vec::new())),
        ]);
        let items = RefCell::new(Vec::new());

        let pages = run_continuation(
            "list",
            "/browse",
            0,
            20,
            |q| server.fetch(q),
            |page| items.borrow_mut().extend(page),
        )
        .await;

        assert_eq!(pages, 2);
        let queries = server.queries.borrow();
        assert_eq!(queries.len(), 3);
        assert_eq!(
            queries.iter().map(|q| q.start).collect::<Vec<_>>(),
            vec![0, 20, 40]
        );
        assert!(queries.iter().all(|q| q.container == "list"));
        assert_eq!(items.borrow().len(), 40);
        // Append order is page order.
        assert_eq!(*items.borrow(), (0..40).collect::<Vec<u32>>());
    }

    #[tokio::test]
    async fn zero_page_size_fetches_exactly_once() {
        let server = FakeServer::new(vec![(0, Ok(vec![1, 2, 3]))]);
        let items = RefCell::new(Vec::new());

        let pages = run_continuation(
            "roots",
            "/",
            0,
            0,
            |q| server.fetch(q),
            |page| items.borrow_mut().extend(page),
        )
        .await;

        assert_eq!(pages, 1);
        assert_eq!(server.queries.borrow().len(), 1);
        assert_eq!(server.queries.borrow()[0].page_size, 0);
        assert_eq!(*items.borrow(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn transport_failure_ends_chain_and_keeps_pages() {
        let server = FakeServer::new(vec![
            (0, Ok((0..10).collect())),
            (10, Err("status 500".to_string())),
            // Never reached: the chain stops at the failure.
            (20, Ok((20..30).collect())),
        ]);
        let items = RefCell::new(Vec::new());

        let pages = run_continuation(
            "list",
            "/browse",
            0,
            10,
            |q| server.fetch(q),
            |page| items.borrow_mut().extend(page),
        )
        .await;

        assert_eq!(pages, 1);
        assert_eq!(server.queries.borrow().len(), 2);
        assert_eq!(*items.borrow(), (0..10).collect::<Vec<u32>>());
    }

    #[tokio::test]
    async fn empty_first_page_appends_nothing() {
        let server = FakeServer::new(vec![(0, Ok(Vec::new()))]);
        let items: RefCell<Vec<u32>> = RefCell::new(Vec::new());

        let pages = run_continuation(
            "list",
            "/browse",
            0,
            32,
            |q| server.fetch(q),
            |page| items.borrow_mut().extend(page),
        )
        .await;

        assert_eq!(pages, 0);
        assert_eq!(server.queries.borrow().len(), 1);
        assert!(items.borrow().is_empty());
    }

    #[tokio::test]
    async fn chain_respects_nonzero_start() {
        let server = FakeServer::new(vec![(128, Ok((0..5).collect())), (256, Ok(Vec::new()))]);
        let items = RefCell::new(Vec::new());

        run_continuation(
            "list",
            "/browse",
            128,
            128,
            |q| server.fetch(q),
            |page| items.borrow_mut().extend(page),
        )
        .await;

        assert_eq!(
            server
                .queries
                .borrow()
                .iter()
                .map(|q| q.start)
                .collect::<Vec<_>>(),
            vec![128, 256]
        );
        assert_eq!(items.borrow().len(), 5);
    }

    #[tokio::test]
    async fn independent_chains_do_not_interfere() {
        let list_server = FakeServer::new(vec![(0, Ok(vec![1])), (4, Ok(Vec::new()))]);
        let thumb_server = FakeServer::new(vec![(0, Ok(vec![9, 9])), (2, Ok(Vec::new()))]);
        let list_items = RefCell::new(Vec::new());
        let thumb_items = RefCell::new(Vec::new());

        let list_chain = run_continuation(
            "list",
            "/browse",
            0,
            4,
            |q| list_server.fetch(q),
            |page| list_items.borrow_mut().extend(page),
        );
        let thumb_chain = run_continuation(
            "items",
            "/thumbs",
            0,
            2,
            |q| thumb_server.fetch(q),
            |page| thumb_items.borrow_mut().extend(page),
        );

        futures_util::future::join(list_chain, thumb_chain).await;

        assert_eq!(*list_items.borrow(), vec![1]);
        assert_eq!(*thumb_items.borrow(), vec![9, 9]);
        assert!(list_server
            .queries
            .borrow()
            .iter()
            .all(|q| q.container == "list"));
        assert!(thumb_server
            .queries
            .borrow()
            .iter()
            .all(|q| q.container == "items"));
    }
}
