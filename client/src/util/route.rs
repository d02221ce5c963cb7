//! Route parameter helpers.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Positive integer id from a path segment.
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|raw| raw.trim().parse::<i64>().ok()).filter(|id| *id > 0)
}

/// The `:id` segment of the current route, re-read on navigation.
pub fn use_route_id() -> Memo<Option<i64>> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|params| parse_id(params.get("id").as_deref())))
}
