//! graphnav-rs: click-to-navigate core for server-rendered time-series
//! graph pages.
//!
//! The graph page shows a pre-rendered bitmap next to From:/To: date
//! fields. This crate turns a click on that bitmap into either a
//! re-centered time window (re-encoded as date strings and pushed back
//! through the page form) or a drill-down into the raw data behind the
//! graph. It computes values only; rendering and event normalization stay
//! with the host page.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use crate::api::{ClickOutcome, GraphClickConfig, GraphClickHandler, Navigator, RangeForm};
pub use crate::core::{ClickResult, DateCodec, GraphGeometry, Instant, ParseMode};
pub use crate::error::{NavError, NavResult};
