//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Entity pages are generic over `records` types so every
//! collection shares one list page and one form page.

pub mod classroom_detail;
pub mod classroom_form;
pub mod dashboard;
pub mod login;
pub mod resource_form;
pub mod resource_list;
