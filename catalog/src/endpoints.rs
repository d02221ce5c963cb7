//! Endpoint paths, relative to the API base URL.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const LOGIN: &str = "/auth/login/";
pub const REGISTER: &str = "/auth/register/";
pub const LOGOUT: &str = "/auth/logout/";
pub const PROFILE: &str = "/auth/profile/";
pub const TOKEN_REFRESH: &str = "/auth/token/refresh/";

pub const BOOKS: &str = "/book/";
pub const READING_LISTS: &str = "/reading-list/";

#[must_use]
pub fn book(id: i64) -> String {
    format!("/book/{id}/")
}

#[must_use]
pub fn reading_list(id: i64) -> String {
    format!("/reading-list/{id}/")
}

#[must_use]
pub fn reading_list_add_book(list_id: i64) -> String {
    format!("/reading-list/{list_id}/add-book/")
}

#[must_use]
pub fn reading_list_item(list_id: i64, item_id: i64) -> String {
    format!("/reading-list/{list_id}/items/{item_id}/")
}
