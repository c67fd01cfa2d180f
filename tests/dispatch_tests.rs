//! The routing table, checked against the full application menu.

use luny_text::dispatch::{FileFlow, Route, WindowCommand, route};
use luny_text::notification::Notification;
use luny_text_menu::{MenuAction, MenuTemplate};

#[test]
fn test_every_menu_action_has_a_route() {
    let template = MenuTemplate::application();
    for item in template.actions() {
        let routed = route(item.action);
        if item.action.is_stub() {
            assert!(
                matches!(routed, Route::Stub(ref trace) if !trace.is_empty()),
                "{} should be an inert stub",
                item.id
            );
        } else {
            assert!(
                !matches!(routed, Route::Stub(_)),
                "{} should do something",
                item.id
            );
        }
    }
}

#[test]
fn test_pass_through_notifications_use_their_channels() {
    let cases = [
        (MenuAction::NewFile, "new-file"),
        (MenuAction::SaveAll, "save-all"),
        (MenuAction::CloseFile, "close-file"),
        (MenuAction::CloseAllFiles, "close-all-files"),
    ];
    for (action, channel) in cases {
        match route(action) {
            Route::Notify(notification) => {
                assert_eq!(notification.channel(), channel);
                assert!(notification.args().is_empty());
            }
            other => panic!("{:?} routed to {:?}", action, other),
        }
    }
}

#[test]
fn test_file_actions_start_flows() {
    assert_eq!(
        route(MenuAction::OpenFile),
        Route::FileFlow(FileFlow::OpenFile)
    );
    assert_eq!(
        route(MenuAction::OpenFolder),
        Route::FileFlow(FileFlow::OpenFolder)
    );
    assert_eq!(route(MenuAction::SaveAs), Route::FileFlow(FileFlow::SaveAs));
}

#[test]
fn test_view_actions_target_the_window() {
    assert_eq!(
        route(MenuAction::Reload),
        Route::Window(WindowCommand::Reload)
    );
    assert_eq!(
        route(MenuAction::ToggleDevTools),
        Route::Window(WindowCommand::ToggleDevTools)
    );
    assert_eq!(
        route(MenuAction::ZoomIn),
        Route::Window(WindowCommand::ZoomIn)
    );
    assert_eq!(
        route(MenuAction::ZoomOut),
        Route::Window(WindowCommand::ZoomOut)
    );
}

#[test]
fn test_process_level_actions() {
    assert_eq!(route(MenuAction::NewWindow), Route::NewWindow);
    assert_eq!(route(MenuAction::About), Route::About);
    assert_eq!(route(MenuAction::Quit), Route::Quit);
}

#[test]
fn test_new_file_script_has_empty_payload() {
    let script = Notification::NewFile.to_script().unwrap();
    assert!(script.contains(r#""channel":"new-file""#));
    assert!(script.contains(r#""args":[]"#));
}
