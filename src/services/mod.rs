//! Service layer.
//!
//! The aggregation core lives here: tag normalization, proficiency resolution,
//! role aggregation, radar geometry, view state and the panel render model. All
//! of it is pure and infallible; only [`CatalogService`] touches the file system.

pub mod aggregate;
pub mod catalog;
pub mod meter;
pub mod normalize;
pub mod panel;
pub mod proficiency;
pub mod radar;
pub mod view;

// Re-export commonly used types and functions
pub use aggregate::{Aggregation, RoleAggregator, RoleTaxonomy};
pub use catalog::{CatalogService, CatalogStore};
pub use meter::{MeterBar, TagMeter};
pub use normalize::TagNormalizer;
pub use panel::{
    CatalogTranslator, Chip, ChipGrid, NoTranslation, PanelBody, PanelModel, PanelRenderer,
    RadarSizing, RadarView, RoleTab, Translator,
};
pub use proficiency::{FallbackPolicy, ProficiencyResolver};
pub use radar::{RadarChart, RadarGeometryEngine, RadarSeries, RadarStyle};
pub use view::{ChipLimits, ViewController, ViewMode, ViewState, WidthSignal};
