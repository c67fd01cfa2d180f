//! Events posted to the event loop from outside the UI thread.

use crate::dispatch::Completion;
use luny_text_menu::KeyChord;
use winit::window::WindowId;

#[derive(Debug)]
pub enum UserEvent {
    /// A file flow finished without being cancelled. `window` is the
    /// window that was active when the action was invoked.
    FlowCompleted {
        window: WindowId,
        completion: Completion,
    },
    /// A modified key was pressed in the document of `window`
    KeyDown { window: WindowId, chord: KeyChord },
}
