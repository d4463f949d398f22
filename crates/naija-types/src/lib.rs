//! Wire types shared by the Naija emoji API and its clients.

pub mod api;
