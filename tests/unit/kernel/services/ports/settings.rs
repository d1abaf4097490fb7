use super::*;

#[test]
fn test_settings_parse_partial_json() {
    let data = r#"{
        "keybindings": [{ "key": "ctrl+shift+s", "command": "save" }],
        "preview": { "device": "tablet" }
    }"#;
    let settings: Settings = serde_json::from_str(data).unwrap();
    assert_eq!(settings.keybindings.len(), 1);
    assert_eq!(settings.keybindings[0].command, "save");
    assert_eq!(settings.preview.device, Some(DevicePreset::Tablet));
    assert!(settings.preview.delay_ms.is_none());
    assert!(settings.editor.confirm_close_modified.is_none());
}

#[test]
fn test_empty_object_is_default() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert!(settings.keybindings.is_empty());
}
