pub mod badges;
pub mod card_image;
pub mod forecast_panel;
pub mod local_info_panel;
pub mod spot_card;
pub mod spot_header;
pub mod weather_snapshot;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

pub use card_image::{CardImage, CardImageProps};
pub use forecast_panel::{ForecastPanel, ForecastPanelProps};
pub use local_info_panel::{LocalInfoPanel, LocalInfoPanelProps};
pub use spot_card::{SpotCard, SpotCardProps};
pub use spot_header::{SpotHeader, SpotHeaderProps};
pub use weather_snapshot::{WeatherSnapshot, WeatherSnapshotProps};
