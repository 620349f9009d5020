//! Cursor pagination over `links.next`.

use crate::error::ClientResult;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, warn};

/// The `links.next` URL of a page, if any.
pub fn next_link(page: &Value) -> Option<&str> {
    page.get("links")
        .and_then(|links| links.get("next"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}

/// Merge every page reachable from `first` into one envelope.
///
/// `fetch_next` is handed the exact `links.next` URL of the previous page. The
/// result is the first envelope with `data` and `included` concatenated in
/// fetch order. Fetching stops after `max_pages` pages in total; a walk cut
/// short by that cap keeps the first unfollowed URL in `links.next` so the
/// result never looks complete. Otherwise `links.next` is removed. The first
/// error aborts the walk.
pub async fn collect_pages<F, Fut>(first: Value, max_pages: u32, mut fetch_next: F) -> ClientResult<Value>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = ClientResult<Value>>,
{
    if !first.get("data").map_or(false, Value::is_array) {
        return Ok(first);
    }

    let mut merged = first;
    let mut next = next_link(&merged).map(str::to_string);
    let mut fetched: u32 = 1;

    while let Some(url) = next.take() {
        if fetched >= max_pages {
            warn!(max_pages, next = %url, "Page cap reached, returning partial listing");
            set_next_link(&mut merged, url);
            return Ok(merged);
        }

        debug!(page = fetched + 1, url = %url, "Fetching next page");
        let page = fetch_next(url).await?;
        fetched += 1;

        append_array(&mut merged, &page, "data");
        append_array(&mut merged, &page, "included");
        next = next_link(&page).map(str::to_string);
    }

    remove_next_link(&mut merged);
    Ok(merged)
}

fn append_array(merged: &mut Value, page: &Value, key: &str) {
    let Some(items) = page.get(key).and_then(Value::as_array) else {
        return;
    };
    let Some(target) = merged.as_object_mut() else {
        return;
    };

    match target.get_mut(key).and_then(Value::as_array_mut) {
        Some(existing) => existing.extend(items.iter().cloned()),
        None => {
            target.insert(key.to_string(), Value::Array(items.clone()));
        }
    }
}

fn set_next_link(merged: &mut Value, url: String) {
    if let Some(target) = merged.as_object_mut() {
        let links = target
            .entry("links")
            .or_insert_with(|| Value::Object(Default::default()));
        if let Some(links) = links.as_object_mut() {
            links.insert("next".to_string(), Value::String(url));
        }
    }
}

fn remove_next_link(merged: &mut Value) {
    if let Some(links) = merged.get_mut("links").and_then(Value::as_object_mut) {
        links.remove("next");
    }
}
