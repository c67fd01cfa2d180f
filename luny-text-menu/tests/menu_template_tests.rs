//! Integration tests for luny-text-menu.
//!
//! These tests walk the full application template the way a host does when
//! binding native menu items.

use luny_text_menu::{
    Encoding, Key, KeyChord, MenuAction, MenuEntry, MenuTemplate, Role, ShortcutMap,
};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Action coverage
// ---------------------------------------------------------------------------

#[test]
fn every_action_appears_exactly_once() {
    let template = MenuTemplate::application();
    let actions: Vec<MenuAction> = template.actions().iter().map(|a| a.action).collect();
    let unique: HashSet<MenuAction> = actions.iter().copied().collect();
    assert_eq!(actions.len(), unique.len());

    for expected in [
        MenuAction::NewFile,
        MenuAction::OpenFile,
        MenuAction::OpenFolder,
        MenuAction::OpenRecent(1),
        MenuAction::OpenRecent(2),
        MenuAction::ReopenWithEncoding(Encoding::Utf8),
        MenuAction::ReopenWithEncoding(Encoding::Iso8859_1),
        MenuAction::SaveAs,
        MenuAction::SaveAll,
        MenuAction::Print,
        MenuAction::NewWindow,
        MenuAction::CloseWindow,
        MenuAction::CloseFile,
        MenuAction::RevertFile,
        MenuAction::CloseAllFiles,
        MenuAction::Quit,
        MenuAction::Reload,
        MenuAction::ToggleDevTools,
        MenuAction::ZoomIn,
        MenuAction::ZoomOut,
        MenuAction::ResetZoom,
        MenuAction::About,
    ] {
        assert!(unique.contains(&expected), "missing {:?}", expected);
    }
    assert_eq!(unique.len(), 22);
}

#[test]
fn ids_are_unique() {
    let template = MenuTemplate::application();
    let ids: HashSet<&str> = template.actions().iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), template.actions().len());
}

#[test]
fn stub_entries_have_no_accelerator_except_revert() {
    let template = MenuTemplate::application();
    for item in template.actions() {
        if item.action.is_stub() && item.action != MenuAction::RevertFile {
            assert!(item.accelerator.is_none(), "{} has an accelerator", item.label);
        }
    }
}

// ---------------------------------------------------------------------------
// Accelerators
// ---------------------------------------------------------------------------

#[test]
fn all_accelerators_parse_and_are_distinct() {
    let template = MenuTemplate::application();
    let mut seen = HashSet::new();

    for item in template.actions() {
        if let Some(parsed) = item.parsed_accelerator() {
            let accel = parsed.unwrap_or_else(|e| panic!("{}: {}", item.label, e));
            assert!(accel.modifiers.cmd_or_ctrl, "{} lacks CmdOrCtrl", item.label);
            assert!(seen.insert(accel), "{} reuses {}", item.label, accel);
        }
    }
    for item in template.roles() {
        let accel: luny_text_menu::Accelerator = item.accelerator.unwrap().parse().unwrap();
        assert!(seen.insert(accel), "{} reuses {}", item.label, accel);
    }
}

#[test]
fn save_as_and_zoom_accelerators() {
    let template = MenuTemplate::application();

    let save_as = template.find_action(MenuAction::SaveAs).unwrap();
    let accel = save_as.parsed_accelerator().unwrap().unwrap();
    assert!(accel.modifiers.shift);
    assert_eq!(accel.key, Key::Letter('S'));

    let zoom_in = template.find_action(MenuAction::ZoomIn).unwrap();
    assert_eq!(zoom_in.parsed_accelerator().unwrap().unwrap().key, Key::Equal);

    let zoom_out = template.find_action(MenuAction::ZoomOut).unwrap();
    assert_eq!(zoom_out.parsed_accelerator().unwrap().unwrap().key, Key::Minus);

    let about = template.find_action(MenuAction::About).unwrap();
    assert_eq!(about.label, "About Luny Text");
    assert!(about.accelerator.is_none());
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn top_level_entries_are_submenus() {
    let template = MenuTemplate::application();
    assert!(
        template
            .entries
            .iter()
            .all(|e| matches!(e, MenuEntry::Submenu { .. }))
    );
}

#[test]
fn nested_submenus_hold_stubs() {
    let template = MenuTemplate::application();
    let MenuEntry::Submenu { entries: file, .. } = &template.entries[0] else {
        panic!("File must be a submenu");
    };
    let recent = file
        .iter()
        .find(|e| e.label() == Some("Open Recent"))
        .expect("Open Recent submenu");
    let MenuEntry::Submenu { entries, .. } = recent else {
        panic!("Open Recent must be a submenu");
    };
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| match e {
        MenuEntry::Action(item) => item.action.is_stub(),
        _ => false,
    }));
}

#[test]
fn role_labels_match_roles() {
    let template = MenuTemplate::application();
    let roles: Vec<(&str, Role)> = template.roles().iter().map(|r| (r.label, r.role)).collect();
    assert_eq!(roles[0], ("Undo", Role::Undo));
    assert_eq!(roles[5], ("Select All", Role::SelectAll));
    assert_eq!(Role::SelectAll.to_string(), "selectAll");
}

// ---------------------------------------------------------------------------
// Keyboard shortcuts
// ---------------------------------------------------------------------------

fn ctrl(key: Key) -> KeyChord {
    KeyChord {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
        key,
    }
}

fn ctrl_shift(key: Key) -> KeyChord {
    KeyChord {
        shift: true,
        ..ctrl(key)
    }
}

#[test]
fn shortcuts_fire_file_actions_with_ctrl() {
    let map = ShortcutMap::from_template(&MenuTemplate::application(), false);

    assert_eq!(map.lookup(&ctrl(Key::Letter('N'))), Some(MenuAction::NewFile));
    assert_eq!(map.lookup(&ctrl(Key::Letter('O'))), Some(MenuAction::OpenFile));
    assert_eq!(
        map.lookup(&ctrl_shift(Key::Letter('O'))),
        Some(MenuAction::OpenFolder)
    );
    assert_eq!(
        map.lookup(&ctrl_shift(Key::Letter('S'))),
        Some(MenuAction::SaveAs)
    );
    assert_eq!(map.lookup(&ctrl(Key::Letter('Q'))), Some(MenuAction::Quit));
    assert_eq!(map.lookup(&ctrl(Key::Equal)), Some(MenuAction::ZoomIn));
    assert_eq!(map.lookup(&ctrl(Key::Digit(0))), Some(MenuAction::ResetZoom));
    assert_eq!(
        map.lookup(&KeyChord {
            alt: true,
            ..ctrl(Key::Letter('Z'))
        }),
        Some(MenuAction::RevertFile)
    );
}

#[test]
fn shortcuts_cover_every_action_accelerator() {
    let template = MenuTemplate::application();
    let map = ShortcutMap::from_template(&template, false);
    let with_accel = template
        .actions()
        .iter()
        .filter(|item| item.accelerator.is_some())
        .count();
    assert_eq!(map.len(), with_accel);

    for item in template.actions() {
        let Some(Ok(accel)) = item.parsed_accelerator() else {
            continue;
        };
        assert_eq!(map.lookup(&accel.resolve(false)), Some(item.action));
    }
}

#[test]
fn shortcuts_use_meta_when_cmd_is_meta() {
    let map = ShortcutMap::from_template(&MenuTemplate::application(), true);
    let cmd_n = KeyChord {
        ctrl: false,
        meta: true,
        ..ctrl(Key::Letter('N'))
    };
    assert_eq!(map.lookup(&cmd_n), Some(MenuAction::NewFile));
    assert_eq!(map.lookup(&ctrl(Key::Letter('N'))), None);
}

#[test]
fn unbound_chords_fire_nothing() {
    let map = ShortcutMap::from_template(&MenuTemplate::application(), false);
    assert_eq!(map.lookup(&ctrl(Key::Letter('K'))), None);
    assert_eq!(map.lookup(&ctrl_shift(Key::Letter('N'))), Some(MenuAction::NewWindow));
    // Roles are handled by the document
    assert_eq!(map.lookup(&ctrl(Key::Letter('C'))), None);
}
