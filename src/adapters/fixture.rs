use crate::domain::model::{InputSource, PvwLayer, Screen};
use crate::domain::ports::DeviceClient;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Stand-in device client serving the P20 fixture data set until the real
/// transport lands. Every method counts its calls so benches and tests can
/// assert refresh and polling behavior.
#[derive(Debug, Default)]
pub struct FixtureClient {
    connects: AtomicUsize,
    disconnects: AtomicUsize,
    screen_fetches: AtomicUsize,
    input_fetches: AtomicUsize,
    layer_fetches: AtomicUsize,
    routes: AtomicUsize,
}

impl FixtureClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn disconnect_count(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }

    pub fn screen_fetch_count(&self) -> usize {
        self.screen_fetches.load(Ordering::SeqCst)
    }

    pub fn input_fetch_count(&self) -> usize {
        self.input_fetches.load(Ordering::SeqCst)
    }

    pub fn layer_fetch_count(&self) -> usize {
        self.layer_fetches.load(Ordering::SeqCst)
    }

    pub fn route_count(&self) -> usize {
        self.routes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeviceClient for FixtureClient {
    async fn connect(&self, host: &str, port: u16) -> Result<()> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Fixture connect to {}:{}", host, port);
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn fetch_screens(&self) -> Result<Vec<Screen>> {
        self.screen_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Screen {
            id: "screen-1".to_string(),
            name: "Screen 1".to_string(),
        }])
    }

    async fn fetch_inputs(&self) -> Result<Vec<InputSource>> {
        self.input_fetches.fetch_add(1, Ordering::SeqCst);
        Ok((1..=3)
            .map(|n| InputSource {
                id: format!("in-{}", n),
                name: format!("Input {} (HDMI 2.0)", n),
            })
            .collect())
    }

    async fn fetch_pvw_layers(&self, _screen_id: &str) -> Result<Vec<PvwLayer>> {
        self.layer_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            PvwLayer {
                id: "L1-guid".to_string(),
                name: "Layer 1".to_string(),
                index: 1,
            },
            PvwLayer {
                id: "L2-guid".to_string(),
                name: "Layer 2".to_string(),
                index: 2,
            },
        ])
    }

    async fn route_input(&self, screen_id: &str, layer_id: &str, input_id: &str) -> Result<()> {
        self.routes.fetch_add(1, Ordering::SeqCst);
        tracing::info!(
            "Route INPUT {} → PVW {} (screen={})",
            input_id,
            layer_id,
            screen_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_data_set() {
        let client = FixtureClient::new();

        let screens = client.fetch_screens().await.unwrap();
        assert_eq!(screens.len(), 1);
        assert_eq!(screens[0].id, "screen-1");

        let inputs = client.fetch_inputs().await.unwrap();
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[2].name, "Input 3 (HDMI 2.0)");

        let layers = client.fetch_pvw_layers("screen-1").await.unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].index, 1);
        assert_eq!(layers[1].id, "L2-guid");
    }

    #[tokio::test]
    async fn test_call_counters() {
        let client = FixtureClient::new();
        client.connect("127.0.0.1", 0).await.unwrap();
        client.fetch_screens().await.unwrap();
        client.fetch_pvw_layers("screen-1").await.unwrap();
        client.fetch_pvw_layers("screen-1").await.unwrap();
        client.route_input("screen-1", "L1-guid", "in-2").await.unwrap();

        assert_eq!(client.connect_count(), 1);
        assert_eq!(client.screen_fetch_count(), 1);
        assert_eq!(client.layer_fetch_count(), 2);
        assert_eq!(client.route_count(), 1);
    }
}
