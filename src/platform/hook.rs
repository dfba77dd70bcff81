//! Thread-scoped window activation hook
//!
//! Installs a `WH_CBT` hook on the calling thread and forwards its
//! notifications to an [`ActivationSink`].
//!
//! CRITICAL: the hook procedure receives no user pointer, so the sink is kept
//! in a thread-local registry for exactly as long as the native hook exists.
//! The procedure never holds a registry borrow while a sink runs, because the
//! sink removes its own registration from inside the callback.

use std::cell::RefCell;
use std::rc::Rc;

use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, HCBT_ACTIVATE, HHOOK, SetWindowsHookExW, UnhookWindowsHookEx, WH_CBT,
};

use crate::domain::core::WindowHandle;
use crate::platform::{ActivationSink, HookEvent, HookToken};

struct Registration {
    hook: HHOOK,
    sink: Rc<dyn ActivationSink>,
}

thread_local! {
    static ACTIVATION_HOOKS: RefCell<Vec<Registration>> = const { RefCell::new(Vec::new()) };
}

/// Installs the activation hook for the current thread
pub fn install(sink: Rc<dyn ActivationSink>) -> Option<HookToken> {
    let hook = unsafe { SetWindowsHookExW(WH_CBT, Some(cbt_hook_proc), None, GetCurrentThreadId()) };
    let hook = match hook {
        Ok(hook) if !hook.is_invalid() => hook,
        Ok(_) => return None,
        Err(err) => {
            log::warn!("SetWindowsHookExW(WH_CBT) failed: {err}");
            return None;
        }
    };

    ACTIVATION_HOOKS.with(|hooks| hooks.borrow_mut().push(Registration { hook, sink }));
    Some(HookToken(hook.0))
}

/// Uninstalls the hook behind `token`; unknown tokens are ignored
pub fn remove(token: HookToken) {
    let registration = ACTIVATION_HOOKS.with(|hooks| {
        let mut hooks = hooks.borrow_mut();
        hooks
            .iter()
            .position(|registration| registration.hook.0 == token.0)
            .map(|index| hooks.remove(index))
    });
    let Some(registration) = registration else {
        return;
    };

    if let Err(err) = unsafe { UnhookWindowsHookEx(registration.hook) } {
        log::warn!("UnhookWindowsHookEx failed for {token:?}: {err}");
    }
    // The sink is released only after the native hook is gone.
    drop(registration);
}

/// Number of hooks currently registered on this thread
pub fn installed_count() -> usize {
    ACTIVATION_HOOKS
        .try_with(|hooks| hooks.borrow().len())
        .unwrap_or(0)
}

/// Hands the event to the most recently installed sink
fn dispatch(event: HookEvent) {
    let sink = ACTIVATION_HOOKS
        .try_with(|hooks| {
            hooks
                .try_borrow()
                .ok()
                .and_then(|hooks| hooks.last().map(|registration| Rc::clone(&registration.sink)))
        })
        .ok()
        .flatten();

    if let Some(sink) = sink {
        sink.on_event(event);
    }
}

/// CBT hook procedure
///
/// Every notification, including the activation we act on, is passed on to
/// the next hook in the chain.
unsafe extern "system" fn cbt_hook_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code >= 0 {
        let event = if code as u32 == HCBT_ACTIVATE {
            HookEvent::Activating(WindowHandle(wparam.0 as isize))
        } else {
            HookEvent::Other(code)
        };
        dispatch(event);
    }

    unsafe { CallNextHookEx(None, code, wparam, lparam) }
}
