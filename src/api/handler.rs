use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::click::{ClickResult, ClickTransform};
use crate::core::clock::{Clock, SystemClock};
use crate::core::date_codec::{DateCodec, ParseMode};
use crate::core::geometry::GraphGeometry;
use crate::error::NavResult;

/// The page form carrying the displayed time window: two writable date
/// fields and a submit action. Submission is fire-and-forget.
pub trait RangeForm {
    fn set_start(&mut self, value: &str);
    fn set_end(&mut self, value: &str);
    fn submit(&mut self);
}

/// Navigation collaborator used for drill-down clicks.
pub trait Navigator {
    fn current_location(&self) -> String;
    fn navigate(&mut self, href: &str);
}

/// Handler bootstrap configuration.
///
/// Serializable so host pages can persist graph layouts without inventing
/// their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphClickConfig {
    /// Identifies the graph in drill-down requests (`&dat=<graph_name>`).
    pub graph_name: String,
    #[serde(default)]
    pub geometry: GraphGeometry,
    #[serde(default)]
    pub parse_mode: ParseMode,
}

impl GraphClickConfig {
    #[must_use]
    pub fn new(graph_name: impl Into<String>) -> Self {
        Self {
            graph_name: graph_name.into(),
            geometry: GraphGeometry::default(),
            parse_mode: ParseMode::default(),
        }
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: GraphGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = parse_mode;
        self
    }
}

/// What the handler did with a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The window was re-centered and the form resubmitted.
    Resubmitted,
    /// Navigation to the raw-data dump was triggered.
    DrilledDown,
    /// Click outside both tracked regions; collaborators untouched.
    Ignored,
}

/// Click handler for one graph image.
///
/// Owns the codec and transform; the form and navigation collaborators are
/// passed per call so the handler itself stays free of page state.
#[derive(Debug)]
pub struct GraphClickHandler<C> {
    codec: DateCodec<C>,
    transform: ClickTransform,
    graph_name: String,
}

impl GraphClickHandler<SystemClock> {
    pub fn new(config: GraphClickConfig) -> NavResult<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> GraphClickHandler<C> {
    pub fn with_clock(config: GraphClickConfig, clock: C) -> NavResult<Self> {
        Ok(Self {
            codec: DateCodec::new(clock).with_mode(config.parse_mode),
            transform: ClickTransform::new(config.geometry)?,
            graph_name: config.graph_name,
        })
    }

    #[must_use]
    pub fn graph_name(&self) -> &str {
        &self.graph_name
    }

    /// Decodes the displayed window and maps the click, without driving any
    /// collaborator.
    pub fn resolve_click(
        &self,
        click_x: f64,
        click_y: f64,
        start_text: &str,
        end_text: &str,
    ) -> NavResult<ClickResult> {
        let start = self.codec.decode(start_text)?;
        let end = self.codec.decode(end_text)?;
        self.transform.center_on_click(click_x, click_y, start, end)
    }

    /// Full click pipeline: decode the displayed window, map the click,
    /// then either resubmit the form with the shifted window or navigate to
    /// the raw-data dump.
    pub fn handle_click(
        &self,
        click_x: f64,
        click_y: f64,
        start_text: &str,
        end_text: &str,
        form: &mut dyn RangeForm,
        navigator: &mut dyn Navigator,
    ) -> NavResult<ClickOutcome> {
        match self.resolve_click(click_x, click_y, start_text, end_text)? {
            ClickResult::Recenter { new_start, new_end } => {
                let start_text = self.codec.encode(new_start);
                let end_text = self.codec.encode(new_end);
                debug!(
                    graph = %self.graph_name,
                    %start_text,
                    %end_text,
                    "recenter window"
                );
                form.set_start(&start_text);
                form.set_end(&end_text);
                form.submit();
                Ok(ClickOutcome::Resubmitted)
            }
            ClickResult::Drill => {
                let href = format!("{}&dat={}", navigator.current_location(), self.graph_name);
                debug!(graph = %self.graph_name, %href, "drill into raw data");
                navigator.navigate(&href);
                Ok(ClickOutcome::DrilledDown)
            }
            ClickResult::Ignored => {
                trace!(
                    graph = %self.graph_name,
                    click_x,
                    click_y,
                    "click outside tracked regions"
                );
                Ok(ClickOutcome::Ignored)
            }
        }
    }
}
