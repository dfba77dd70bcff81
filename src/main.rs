//! centered-msgbox demo
//!
//! Shows a message box centered over the foreground window, usually the
//! console it was started from:
//!
//! ```text
//! centered-msgbox "Text" ["Caption"]
//! ```
//!
//! Set `RUST_LOG=debug` to trace owner resolution and hook lifecycle.

#[cfg(windows)]
fn main() {
    use centered_msgbox::{
        ButtonSet, DialogPresenter, MessageBoxRequest, MessageIcon, PresenterConfig,
        Win32WindowSystem,
    };

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let text = args
        .next()
        .unwrap_or_else(|| "Hello from centered-msgbox".to_string());
    let caption = args.next().unwrap_or_else(|| "centered-msgbox".to_string());

    let config = PresenterConfig::default();
    if let Err(err) = config.validate() {
        log::error!("Invalid configuration: {err}");
        std::process::exit(2);
    }

    let presenter = DialogPresenter::with_config(Win32WindowSystem::new(), config);
    let request = MessageBoxRequest::new(text)
        .caption(caption)
        .buttons(ButtonSet::OkCancel)
        .icon(MessageIcon::Information);

    let result = match presenter.system().foreground_window() {
        Some(foreground) => {
            log::debug!("Centering over foreground window {foreground:?}");
            presenter.show_owned(&foreground, &request)
        }
        None => presenter.show(&request),
    };

    match result {
        Ok(choice) => log::info!("User chose {choice:?}"),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(windows))]
fn main() {
    env_logger::init();
    log::error!("centered-msgbox needs the Win32 window manager; nothing to show on this platform");
}
