use super::*;

#[test]
fn test_frame_widths() {
    assert_eq!(DevicePreset::Mobile.frame_width(), "375px");
    assert_eq!(DevicePreset::Tablet.frame_width(), "768px");
    assert_eq!(DevicePreset::Desktop.frame_width(), "100%");
    assert_eq!(DevicePreset::default(), DevicePreset::Desktop);
}

#[test]
fn test_parse_and_serde_names_agree() {
    for device in DevicePreset::ALL {
        let json = serde_json::to_string(&device).unwrap();
        let name = json.trim_matches('"');
        assert_eq!(DevicePreset::parse(name), Some(device));
    }
    assert_eq!(DevicePreset::parse(" Phone "), Some(DevicePreset::Mobile));
    assert_eq!(DevicePreset::parse("watch"), None);
}
