use async_trait::async_trait;
use p20_pvw::{
    ConnectionStatus, DeviceClient, FixtureClient, InputSource, P20Config, P20Error, PvwLayer,
    P20Instance, RecordingHost, Result, Screen,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

fn polling_config(interval_ms: u64) -> P20Config {
    P20Config {
        poll_interval_ms: interval_ms,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_polling_refreshes_pvw_state_repeatedly() {
    let instance = P20Instance::new(FixtureClient::new(), RecordingHost::new());
    instance.init(polling_config(100)).await.unwrap();
    assert!(instance.is_polling().await);

    let fetches_after_init = instance.client().layer_fetch_count();
    tokio::time::sleep(Duration::from_millis(350)).await;

    assert!(
        instance.client().layer_fetch_count() > fetches_after_init,
        "poller never refreshed the PVW state"
    );
    instance.destroy().await.unwrap();
}

#[tokio::test]
async fn test_zero_interval_disables_polling() {
    let instance = P20Instance::new(FixtureClient::new(), RecordingHost::new());
    instance.init(polling_config(0)).await.unwrap();

    assert!(!instance.is_polling().await);

    let fetches_after_init = instance.client().layer_fetch_count();
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(instance.client().layer_fetch_count(), fetches_after_init);
}

#[tokio::test]
async fn test_destroy_stops_polling() {
    let instance = P20Instance::new(FixtureClient::new(), RecordingHost::new());
    instance.init(polling_config(100)).await.unwrap();
    instance.destroy().await.unwrap();

    assert!(!instance.is_polling().await);

    let fetches_after_destroy = instance.client().layer_fetch_count();
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(instance.client().layer_fetch_count(), fetches_after_destroy);
}

#[tokio::test]
async fn test_config_update_restarts_polling_with_new_interval() {
    let instance = P20Instance::new(FixtureClient::new(), RecordingHost::new());
    instance.init(polling_config(5000)).await.unwrap();
    assert!(instance.is_polling().await);

    instance.config_updated(polling_config(100)).await.unwrap();
    assert!(instance.is_polling().await);

    let fetches_before = instance.client().layer_fetch_count();
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(instance.client().layer_fetch_count() > fetches_before);

    instance.destroy().await.unwrap();
}

/// Serves fixtures until told to fail PVW layer fetches.
#[derive(Default)]
struct FlakyLayerClient {
    fail_layers: AtomicBool,
    layer_attempts: AtomicUsize,
}

impl FlakyLayerClient {
    fn set_failing(&self, failing: bool) {
        self.fail_layers.store(failing, Ordering::SeqCst);
    }

    fn layer_attempts(&self) -> usize {
        self.layer_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeviceClient for FlakyLayerClient {
    async fn connect(&self, _host: &str, _port: u16) -> Result<()> {
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }

    async fn fetch_screens(&self) -> Result<Vec<Screen>> {
        Ok(vec![Screen {
            id: "screen-1".to_string(),
            name: "Screen 1".to_string(),
        }])
    }

    async fn fetch_inputs(&self) -> Result<Vec<InputSource>> {
        Ok(vec![InputSource {
            id: "in-1".to_string(),
            name: "Input 1 (HDMI 2.0)".to_string(),
        }])
    }

    async fn fetch_pvw_layers(&self, _screen_id: &str) -> Result<Vec<PvwLayer>> {
        self.layer_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_layers.load(Ordering::SeqCst) {
            return Err(P20Error::DeviceError {
                message: "PVW query timed out".to_string(),
            });
        }
        Ok(vec![PvwLayer {
            id: "L1-guid".to_string(),
            name: "Layer 1".to_string(),
            index: 1,
        }])
    }

    async fn route_input(&self, _screen_id: &str, _layer_id: &str, _input_id: &str) -> Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_poll_failures_are_swallowed() {
    let instance = P20Instance::new(FlakyLayerClient::default(), RecordingHost::new());
    instance.init(polling_config(100)).await.unwrap();
    assert_eq!(instance.host().last_status(), Some(ConnectionStatus::Ok));

    // Every poll from now on fails.
    instance.client().set_failing(true);
    let attempts_before = instance.client().layer_attempts();
    tokio::time::sleep(Duration::from_millis(350)).await;

    // The poller kept trying and the instance kept its Ok status.
    assert!(instance.client().layer_attempts() > attempts_before);
    assert!(instance.is_polling().await);
    assert_eq!(instance.host().last_status(), Some(ConnectionStatus::Ok));

    // State still holds the last good layer list.
    assert_eq!(instance.pvw_layers().await.len(), 1);

    instance.destroy().await.unwrap();
}
