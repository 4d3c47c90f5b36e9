mod handler;

pub use handler::{
    ClickOutcome, GraphClickConfig, GraphClickHandler, Navigator, RangeForm,
};
