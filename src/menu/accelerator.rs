//! Conversion from portable accelerators to `muda` accelerators.

use luny_text_menu::{Accelerator, Key, Modifiers};
use muda::accelerator::{Accelerator as MudaAccelerator, Code, Modifiers as MudaModifiers};

/// Platform-specific modifier key
#[cfg(target_os = "macos")]
const CMD_OR_CTRL: MudaModifiers = MudaModifiers::META;
#[cfg(not(target_os = "macos"))]
const CMD_OR_CTRL: MudaModifiers = MudaModifiers::CONTROL;

fn modifiers(m: Modifiers) -> Option<MudaModifiers> {
    if m.is_empty() {
        return None;
    }
    let mut mods = MudaModifiers::empty();
    if m.cmd_or_ctrl {
        mods |= CMD_OR_CTRL;
    }
    if m.ctrl {
        mods |= MudaModifiers::CONTROL;
    }
    if m.alt {
        mods |= MudaModifiers::ALT;
    }
    if m.shift {
        mods |= MudaModifiers::SHIFT;
    }
    if m.super_key {
        mods |= MudaModifiers::META;
    }
    Some(mods)
}

fn key_code(key: Key) -> Option<Code> {
    let code = match key {
        Key::Equal => Code::Equal,
        Key::Minus => Code::Minus,
        Key::Letter(c) => match c {
            'A' => Code::KeyA,
            'B' => Code::KeyB,
            'C' => Code::KeyC,
            'D' => Code::KeyD,
            'E' => Code::KeyE,
            'F' => Code::KeyF,
            'G' => Code::KeyG,
            'H' => Code::KeyH,
            'I' => Code::KeyI,
            'J' => Code::KeyJ,
            'K' => Code::KeyK,
            'L' => Code::KeyL,
            'M' => Code::KeyM,
            'N' => Code::KeyN,
            'O' => Code::KeyO,
            'P' => Code::KeyP,
            'Q' => Code::KeyQ,
            'R' => Code::KeyR,
            'S' => Code::KeyS,
            'T' => Code::KeyT,
            'U' => Code::KeyU,
            'V' => Code::KeyV,
            'W' => Code::KeyW,
            'X' => Code::KeyX,
            'Y' => Code::KeyY,
            'Z' => Code::KeyZ,
            _ => return None,
        },
        Key::Digit(d) => match d {
            0 => Code::Digit0,
            1 => Code::Digit1,
            2 => Code::Digit2,
            3 => Code::Digit3,
            4 => Code::Digit4,
            5 => Code::Digit5,
            6 => Code::Digit6,
            7 => Code::Digit7,
            8 => Code::Digit8,
            9 => Code::Digit9,
            _ => return None,
        },
        Key::Function(n) => match n {
            1 => Code::F1,
            2 => Code::F2,
            3 => Code::F3,
            4 => Code::F4,
            5 => Code::F5,
            6 => Code::F6,
            7 => Code::F7,
            8 => Code::F8,
            9 => Code::F9,
            10 => Code::F10,
            11 => Code::F11,
            12 => Code::F12,
            13 => Code::F13,
            14 => Code::F14,
            15 => Code::F15,
            16 => Code::F16,
            17 => Code::F17,
            18 => Code::F18,
            19 => Code::F19,
            20 => Code::F20,
            21 => Code::F21,
            22 => Code::F22,
            23 => Code::F23,
            24 => Code::F24,
            _ => return None,
        },
    };
    Some(code)
}

/// Build the `muda` accelerator for a parsed accelerator.
///
/// Returns `None` for keys `muda` has no code for.
pub fn to_muda(accelerator: &Accelerator) -> Option<MudaAccelerator> {
    let code = key_code(accelerator.key)?;
    Some(MudaAccelerator::new(modifiers(accelerator.modifiers), code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use luny_text_menu::parse_accelerator;

    #[test]
    fn test_cmd_or_ctrl_maps_to_platform_modifier() {
        let accel = parse_accelerator("CmdOrCtrl+Shift+S").unwrap();
        let expected = MudaAccelerator::new(Some(CMD_OR_CTRL | MudaModifiers::SHIFT), Code::KeyS);
        assert_eq!(to_muda(&accel), Some(expected));
    }

    #[test]
    fn test_zoom_keys() {
        let zoom_in = parse_accelerator("CmdOrCtrl+=").unwrap();
        let zoom_out = parse_accelerator("CmdOrCtrl+-").unwrap();
        let reset = parse_accelerator("CmdOrCtrl+0").unwrap();
        assert_eq!(
            to_muda(&zoom_in),
            Some(MudaAccelerator::new(Some(CMD_OR_CTRL), Code::Equal))
        );
        assert_eq!(
            to_muda(&zoom_out),
            Some(MudaAccelerator::new(Some(CMD_OR_CTRL), Code::Minus))
        );
        assert_eq!(
            to_muda(&reset),
            Some(MudaAccelerator::new(Some(CMD_OR_CTRL), Code::Digit0))
        );
    }

    #[test]
    fn test_bare_function_key_has_no_modifiers() {
        let accel = parse_accelerator("F1").unwrap();
        assert_eq!(to_muda(&accel), Some(MudaAccelerator::new(None, Code::F1)));
    }

    #[test]
    fn test_every_template_accelerator_converts() {
        let template = luny_text_menu::MenuTemplate::application();
        for item in template.actions() {
            if let Some(parsed) = item.parsed_accelerator() {
                let accel = parsed.unwrap();
                assert!(to_muda(&accel).is_some(), "no muda code for {}", item.id);
            }
        }
    }
}
