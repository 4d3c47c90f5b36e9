pub mod click;
pub mod clock;
pub mod date_codec;
pub mod geometry;
pub mod instant;

pub use click::{ClickResult, ClickTransform};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date_codec::{AbsoluteFields, DateCodec, DateSpec, DurationUnit, ParseMode};
pub use geometry::GraphGeometry;
pub use instant::Instant;
