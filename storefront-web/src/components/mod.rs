//! UI Components

pub mod background;
pub mod color_buttons;
pub mod footer;
pub mod header;
pub mod scene3d;

pub use background::Background;
pub use color_buttons::ColorButtons;
pub use footer::Footer;
pub use header::Header;
pub use scene3d::Scene3D;
