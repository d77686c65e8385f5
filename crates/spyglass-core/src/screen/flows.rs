//! Shared action flows over native screens.
//!
//! Every flow brackets its native work between a switch to the native
//! context and a restore of the web context, and expresses every
//! presence/absence check through the polling engine. No fixed sleeps
//! except the explicit iOS settle pause.

use tracing::{debug, info};

use spyglass_driver::Selector;

use super::errors::ScreenError;
use super::traits::NativeScreen;
use crate::session::Session;
use crate::wait;

/// Wait for `selector` to become clickable, then click it.
pub(crate) async fn tap(
    session: &Session,
    screen: &'static str,
    control: &'static str,
    selector: &Selector,
) -> Result<(), ScreenError> {
    let clickable =
        wait::until_clickable(session.driver(), selector, session.wait_spec()).await?;
    if !clickable {
        return Err(ScreenError::ControlUnavailable {
            screen,
            control,
            timeout_ms: session.wait_spec().timeout_ms(),
        });
    }
    session.driver().click(selector).await?;
    debug!(event = "core.screen.control_tapped", screen, control);
    Ok(())
}

/// Shutter, confirm, restore web. The camera screen must already be
/// open.
pub(crate) async fn take_picture_flow(
    session: &Session,
    screen: &dyn NativeScreen,
    shutter: &Selector,
    confirm: &Selector,
) -> Result<(), ScreenError> {
    session.context().to_native().await?;
    tap(session, screen.name(), "shutter", shutter).await?;
    tap(session, screen.name(), "confirm", confirm).await?;
    session.context().to_web().await?;

    info!(event = "core.screen.picture_taken", screen = screen.name());
    Ok(())
}

/// Close a screen with the platform back control, then wait for its
/// root to leave the UI tree.
pub(crate) async fn dismiss_with_back(
    session: &Session,
    screen: &dyn NativeScreen,
) -> Result<(), ScreenError> {
    session.context().to_native().await?;
    session.driver().back().await?;
    expect_gone(session, screen).await?;
    session.context().to_web().await?;

    info!(event = "core.screen.dismissed", screen = screen.name());
    Ok(())
}

/// Close a screen with an on-screen exit button, then wait for its
/// root to leave the UI tree. Applies the configured settle pause
/// before restoring the web context; the embedded renderer needs a
/// moment after an iOS native screen tears down.
pub(crate) async fn dismiss_with_button(
    session: &Session,
    screen: &dyn NativeScreen,
    exit_button: &Selector,
) -> Result<(), ScreenError> {
    session.context().to_native().await?;
    tap(session, screen.name(), "exit", exit_button).await?;
    expect_gone(session, screen).await?;
    tokio::time::sleep(session.web_settle()).await;
    session.context().to_web().await?;

    info!(event = "core.screen.dismissed", screen = screen.name());
    Ok(())
}

/// Pick the `index`-th element matching `photo`, then restore web.
pub(crate) async fn choose_photo_flow(
    session: &Session,
    screen: &dyn NativeScreen,
    photo: &Selector,
    index: usize,
) -> Result<(), ScreenError> {
    session.context().to_native().await?;

    let present = wait::until_present(session.driver(), photo, session.wait_spec()).await?;
    if !present {
        return Err(ScreenError::ControlUnavailable {
            screen: screen.name(),
            control: "photo",
            timeout_ms: session.wait_spec().timeout_ms(),
        });
    }

    let photos = session.driver().find_elements(photo).await?;
    let handle = photos
        .get(index)
        .ok_or(ScreenError::PhotoIndexOutOfRange {
            index,
            count: photos.len(),
        })?;
    session.driver().click_element(handle).await?;

    session.context().to_web().await?;

    info!(
        event = "core.screen.photo_chosen",
        screen = screen.name(),
        index
    );
    Ok(())
}

/// Bounded probe of an arbitrary control, bracketed native/web like
/// [`super::traits::is_open`].
pub(crate) async fn probe_control(
    session: &Session,
    selector: &Selector,
) -> Result<bool, ScreenError> {
    session.context().to_native().await?;
    let probed = wait::until_present(session.driver(), selector, session.probe_spec()).await;
    let restored = session.context().to_web().await;
    let present = probed?;
    restored?;
    Ok(present)
}

async fn expect_gone(session: &Session, screen: &dyn NativeScreen) -> Result<(), ScreenError> {
    let gone = wait::until_gone(session.driver(), screen.root(), session.wait_spec()).await?;
    if !gone {
        return Err(ScreenError::StillOpen {
            screen: screen.name(),
            timeout_ms: session.wait_spec().timeout_ms(),
        });
    }
    Ok(())
}
