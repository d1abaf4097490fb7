use super::*;

#[test]
fn save_is_bound_for_ctrl_and_cmd() {
    let service = KeybindingService::new();
    assert_eq!(service.resolve(&Key::ctrl('s')), Some(&Command::Save));
    assert_eq!(service.resolve(&Key::meta('s')), Some(&Command::Save));
    // shifted letters normalize to lowercase
    assert_eq!(service.resolve(&Key::ctrl('S')), Some(&Command::Save));
}

#[test]
fn tab_navigation_defaults() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(&Key::named("Tab", Modifiers::CTRL)),
        Some(&Command::NextTab)
    );
    assert_eq!(
        service.resolve(&Key::named("tab", Modifiers::CTRL.with_shift())),
        Some(&Command::PrevTab)
    );
    assert_eq!(service.resolve(&Key::ctrl('w')), Some(&Command::CloseTab));
    assert_eq!(
        service.resolve(&Key::char('R', Modifiers::CTRL.with_shift())),
        Some(&Command::RefreshPreview)
    );
}

#[test]
fn unbound_key_resolves_to_none() {
    let service = KeybindingService::new();
    assert_eq!(service.resolve(&Key::char('s', Modifiers::NONE)), None);
}

#[test]
fn rules_override_and_unbind() {
    let mut service = KeybindingService::new();
    let rules = vec![
        KeybindingRule {
            key: "ctrl+s".into(),
            command: "".into(),
        },
        KeybindingRule {
            key: "alt+p".into(),
            command: "togglePreview".into(),
        },
        KeybindingRule {
            key: "ctrl+".into(),
            command: "save".into(),
        },
    ];
    assert_eq!(service.apply_rules(&rules), 2);
    assert_eq!(service.resolve(&Key::ctrl('s')), None);
    assert_eq!(
        service.resolve(&Key::char('p', Modifiers { alt: true, ..Modifiers::NONE })),
        Some(&Command::TogglePreview)
    );
}
