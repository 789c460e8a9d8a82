// spamsieve: spam detection for short text messages
//
// This is the library root. Each module corresponds to one stage of the
// request path: text normalization, vectorization and classification,
// the prediction handler, and the account store behind the web API.

pub mod classifier;
pub mod config;
pub mod db;
pub mod output;
pub mod prediction;
pub mod status;
pub mod text;
pub mod users;

#[cfg(feature = "web")]
pub mod web;
