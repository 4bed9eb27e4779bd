pub const SITE_NAME: &str = "BlueDrop";

// Element the usage tracker portals into. Must exist in index.html.
pub const MODAL_HOST_ID: &str = "modal";

// Fraction of a section that has to be on screen before it reveals.
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.2;
pub const ABOUT_REVEAL_THRESHOLD: f64 = 0.3;

// Daily total (liters) above which the tracker shows the high-usage warning.
pub const USAGE_WARNING_LITERS: f64 = 100.0;

pub const CONTACT_CONFIRMATION_MS: u32 = 3_000;

// Delay before on-mount animations start, so the hidden pose gets painted once.
pub const MOUNT_REVEAL_DELAY_MS: u32 = 50;

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
