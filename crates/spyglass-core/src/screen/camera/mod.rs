//! Camera vendor catalog.

mod android_camera2;
mod ios_camera;
mod sec_app_camera;

pub use android_camera2::AndroidCamera2;
pub use ios_camera::IosCamera;
pub use sec_app_camera::SecAppCamera;

use super::traits::CameraScreen;

/// All known camera screens, in probe priority order. The order is
/// fixed: when a transition leaves two screens transiently present,
/// the earlier entry wins.
pub fn candidates() -> Vec<Box<dyn CameraScreen>> {
    vec![
        Box::new(IosCamera::new()),
        Box::new(AndroidCamera2::new()),
        Box::new(SecAppCamera::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ContextSwitcher, NoRecovery};
    use crate::screen::traits::{NativeScreen, ScreenFamily};
    use crate::session::Session;
    use crate::testutil::MockDriver;
    use crate::wait::PollSpec;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    const WEBVIEW_ID: &str = "WEBVIEW_com.example.hybrid";

    fn session_with(driver: Arc<MockDriver>) -> Session {
        let spec = PollSpec::from_millis(300, 100);
        let context =
            ContextSwitcher::new(driver.clone(), Box::new(NoRecovery), "WEBVIEW", spec);
        Session::from_parts(driver, context, spec, spec, Duration::from_millis(100))
    }

    #[test]
    fn test_candidate_order_is_stable() {
        let names: Vec<_> = candidates().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["ios_camera", "android_camera2", "sec_app_camera"]);

        // Repeated construction yields the same order
        let again: Vec<_> = candidates().iter().map(|c| c.name()).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn test_all_candidates_are_cameras() {
        for candidate in candidates() {
            assert_eq!(candidate.family(), ScreenFamily::Camera);
            assert!(!candidate.root().as_str().is_empty());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_take_picture_taps_shutter_then_confirm() {
        let driver = Arc::new(MockDriver::with_webview(WEBVIEW_ID));
        let camera = AndroidCamera2::new();

        let shutter = "//android.widget.ImageView[@content-desc=\"Shutter\"]";
        let confirm = "//android.widget.ImageButton[@content-desc=\"Done\"]";
        driver.set_present(shutter, true);
        driver.set_rect(shutter, 0.0, 0.0, 48.0, 48.0);
        driver.set_present(confirm, true);
        driver.set_rect(confirm, 0.0, 0.0, 48.0, 48.0);

        let session = session_with(driver.clone());
        camera.take_picture(&session).await.unwrap();

        assert_eq!(driver.click_log(), vec![shutter.to_string(), confirm.to_string()]);
        assert_eq!(driver.current_context_sync(), WEBVIEW_ID);
    }

    #[tokio::test(start_paused = true)]
    async fn test_take_picture_missing_shutter_fails() {
        let driver = Arc::new(MockDriver::with_webview(WEBVIEW_ID));
        let session = session_with(driver.clone());

        let err = AndroidCamera2::new()
            .take_picture(&session)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            crate::screen::ScreenError::ControlUnavailable {
                control: "shutter",
                ..
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_android_dismiss_uses_hardware_back() {
        let driver = Arc::new(MockDriver::with_webview(WEBVIEW_ID));
        let camera = AndroidCamera2::new();
        driver.set_present(camera.root().as_str(), true);
        driver.back_removes(camera.root().as_str());

        let session = session_with(driver.clone());
        camera.dismiss(&session).await.unwrap();

        assert_eq!(driver.back_calls.load(Ordering::SeqCst), 1);
        assert_eq!(driver.current_context_sync(), WEBVIEW_ID);
    }

    #[tokio::test(start_paused = true)]
    async fn test_android_back_control_always_available() {
        let driver = Arc::new(MockDriver::with_webview(WEBVIEW_ID));
        let session = session_with(driver);

        assert!(AndroidCamera2::new().has_back_control(&session).await.unwrap());
        assert!(SecAppCamera::new().has_back_control(&session).await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ios_dismiss_taps_cancel_and_settles() {
        let driver = Arc::new(MockDriver::with_webview(WEBVIEW_ID));
        let camera = IosCamera::new();
        let cancel = "//XCUIElementTypeButton[@name='Cancel']";
        driver.set_present(camera.root().as_str(), true);
        driver.set_present(cancel, true);
        driver.set_rect(cancel, 0.0, 0.0, 44.0, 44.0);
        driver.click_removes(cancel, camera.root().as_str());

        let session = session_with(driver.clone());
        camera.dismiss(&session).await.unwrap();

        assert_eq!(driver.click_log(), vec![cancel.to_string()]);
        assert_eq!(driver.current_context_sync(), WEBVIEW_ID);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ios_back_control_probed() {
        let driver = Arc::new(MockDriver::with_webview(WEBVIEW_ID));
        let session = session_with(driver.clone());

        // Not present yet
        assert!(!IosCamera::new().has_back_control(&session).await.unwrap());

        driver.set_present("//XCUIElementTypeButton[@name='Cancel']", true);
        assert!(IosCamera::new().has_back_control(&session).await.unwrap());
    }
}
