mod component;
mod frame_loop;
mod network;
mod palette;
mod particles;
mod render;
mod scenery;
mod state;
mod types;
mod what_if;

pub use component::{CityCanvas, SharedSim};
pub use palette::{RiskColor, RiskStatus, severity_color};
pub use state::{CityParams, CitySim};
pub use types::NetworkData;
pub use what_if::Scenario;
