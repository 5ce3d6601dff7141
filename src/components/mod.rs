//! Built-in components.
//!
//! Two independent components cover the observable behavior of the system:
//! [`greeting::Greeting`], a one-way text toggle driven by a button press,
//! and [`posts::PostList`], which fetches a remote list once on mount. The
//! stateless [`output`](output::output) child demonstrates composition.

pub mod greeting;
pub mod output;
pub mod posts;
