//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, notices, redirects)
//! and delegates rendering details to `components`. Every page except home,
//! login, and register sits behind `RequireAuth`.

pub mod book_detail;
pub mod book_form;
pub mod books;
pub mod home;
pub mod login;
pub mod profile;
pub mod reading_list_detail;
pub mod reading_list_form;
pub mod reading_lists;
pub mod register;
