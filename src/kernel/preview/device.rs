use serde::{Deserialize, Serialize};

/// Frame width presets offered by the preview host. Composition ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevicePreset {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl DevicePreset {
    pub const ALL: [DevicePreset; 3] = [
        DevicePreset::Mobile,
        DevicePreset::Tablet,
        DevicePreset::Desktop,
    ];

    /// CSS width of the frame.
    pub fn frame_width(self) -> &'static str {
        match self {
            DevicePreset::Mobile => "375px",
            DevicePreset::Tablet => "768px",
            DevicePreset::Desktop => "100%",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mobile" | "phone" => Some(Self::Mobile),
            "tablet" => Some(Self::Tablet),
            "desktop" => Some(Self::Desktop),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/preview/device.rs"]
mod tests;
