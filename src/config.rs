use heapless::String;
use serde::Deserialize;

use crate::{channel::ChannelLayout, error::Error, page::PageTemplate};

/// Longest hostname the page footer can hold.
pub const HOSTNAME_CAPACITY: usize = 32;

/// Port the page script opens its control websocket on.
pub const WEBSOCKET_PORT: u16 = 81;

pub(crate) const DEFAULT_HOSTNAME: &str = "myrtio-light";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub layout: ChannelLayout,
    pub hostname: String<HOSTNAME_CAPACITY>,
}

impl Default for PageConfig {
    fn default() -> Self {
        let mut hostname = String::new();
        let _ = hostname.push_str(DEFAULT_HOSTNAME);
        Self {
            layout: ChannelLayout::DEFAULT,
            hostname,
        }
    }
}

impl PageConfig {
    /// Parse a configuration from JSON
    ///
    /// ```json
    /// {"layout": "rgbw", "hostname": "lamp1"}
    /// ```
    pub fn from_json(json: &[u8]) -> Result<Self, Error> {
        let (config, _) = serde_json_core::from_slice::<Self>(json).map_err(|_e| {
            #[cfg(feature = "log")]
            log::warn!("page_config: parse error: {:?}", _e);
            Error::Config
        })?;
        Ok(config)
    }

    /// Page template for the configured layout
    pub const fn template(&self) -> PageTemplate {
        PageTemplate::new(self.layout)
    }
}
