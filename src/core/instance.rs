use crate::config::P20Config;
use crate::core::actions::{self, Action, DropdownChoice};
use crate::core::feedbacks::{self, Feedback};
use crate::core::variables;
use crate::domain::model::{ConnectionStatus, DeviceState, InputSource, PvwLayer, Screen};
use crate::domain::ports::{ControlHost, DeviceClient};
use crate::utils::error::{P20Error, Result};
use crate::utils::validation::Validate;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// One configured P20 device inside the host application.
///
/// Owns the mirrored device state, the polling task keeping the PVW layer
/// list of the selected screen fresh, and the action/feedback/variable
/// surface the host binds controls to.
pub struct P20Instance<C, H> {
    client: C,
    host: H,
    config: RwLock<P20Config>,
    state: RwLock<DeviceState>,
    poll_task: Mutex<Option<JoinHandle<()>>>,
}

impl<C, H> P20Instance<C, H>
where
    C: DeviceClient + 'static,
    H: ControlHost + 'static,
{
    pub fn new(client: C, host: H) -> Arc<Self> {
        Arc::new(Self {
            client,
            host,
            config: RwLock::new(P20Config::default()),
            state: RwLock::new(DeviceState::default()),
            poll_task: Mutex::new(None),
        })
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Brings the instance up with the given configuration.
    ///
    /// An invalid configuration is an error; a connection or refresh failure
    /// is not — it is reported to the host as a status, and the module stays
    /// up with its surface published so the operator can fix the settings.
    pub async fn init(self: &Arc<Self>, config: P20Config) -> Result<()> {
        config.validate()?;
        *self.config.write().await = config;

        self.host.set_status(ConnectionStatus::Connecting);
        match self.connect_and_refresh().await {
            Ok(()) => self.host.set_status(ConnectionStatus::Ok),
            Err(e) => {
                tracing::error!("Init error: {}", e);
                self.host
                    .set_status(ConnectionStatus::ConnectionFailure(e.to_string()));
            }
        }
        Ok(())
    }

    /// Applies new settings: tear the connection down, then bring it back up
    /// the same way `init` does.
    pub async fn config_updated(self: &Arc<Self>, config: P20Config) -> Result<()> {
        config.validate()?;
        self.stop_polling().await;
        self.disconnect().await?;
        *self.config.write().await = config;

        match self.connect_and_refresh().await {
            Ok(()) => self.host.set_status(ConnectionStatus::Ok),
            Err(e) => {
                self.host
                    .set_status(ConnectionStatus::ConnectionFailure(e.to_string()));
            }
        }
        Ok(())
    }

    pub async fn destroy(&self) -> Result<()> {
        self.stop_polling().await;
        self.disconnect().await?;
        self.host.set_status(ConnectionStatus::Disconnected);
        tracing::debug!("Destroyed");
        Ok(())
    }

    async fn connect_and_refresh(self: &Arc<Self>) -> Result<()> {
        let config = self.config.read().await.clone();
        self.client.connect(&config.host, config.port).await?;
        self.state.write().await.connected = true;
        self.full_refresh().await?;
        self.start_polling().await;
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        self.client.disconnect().await?;
        self.state.write().await.connected = false;
        Ok(())
    }

    /// Re-fetches screens and inputs, repairs the screen selection, then
    /// refreshes the PVW layer list.
    pub async fn full_refresh(&self) -> Result<()> {
        let screens = self.client.fetch_screens().await?;
        let inputs = self.client.fetch_inputs().await?;

        {
            let mut state = self.state.write().await;
            state.screens = screens;
            state.inputs = inputs;

            // Select the first screen when none is selected or the previous
            // selection no longer exists on the device.
            let selection_valid = state
                .selected_screen_id
                .as_deref()
                .map(|id| state.screen_exists(id))
                .unwrap_or(false);
            if !selection_valid {
                state.selected_screen_id = state.screens.first().map(|s| s.id.clone());
            }
        }

        self.refresh_pvw_state().await?;
        self.update_dynamic_state().await;
        Ok(())
    }

    /// Fetches the PVW layer list of the selected screen. No-op while no
    /// screen is selected.
    pub async fn refresh_pvw_state(&self) -> Result<()> {
        let screen_id = match self.state.read().await.selected_screen_id.clone() {
            Some(id) => id,
            None => return Ok(()),
        };

        let layers = self.client.fetch_pvw_layers(&screen_id).await?;
        {
            let mut state = self.state.write().await;
            state.pvw_layers_by_screen.insert(screen_id, layers);
            state.last_refresh = Some(Utc::now());
        }
        self.update_dynamic_state().await;
        Ok(())
    }

    /// Switches the context screen actions and feedbacks operate on.
    pub async fn select_screen(&self, screen_id: &str) -> Result<()> {
        {
            let mut state = self.state.write().await;
            if !state.screen_exists(screen_id) {
                return Err(P20Error::UnknownScreen {
                    id: screen_id.to_string(),
                });
            }
            state.selected_screen_id = Some(screen_id.to_string());
        }
        self.refresh_pvw_state().await?;
        self.update_dynamic_state().await;
        Ok(())
    }

    /// Routes an input onto a PVW layer of the selected screen. The command
    /// is assumed to succeed; the local mirror is refreshed afterwards.
    pub async fn route_input_to_pvw_layer(&self, layer_id: &str, input_id: &str) -> Result<()> {
        let screen_id = {
            let state = self.state.read().await;
            if !state.connected {
                return Err(P20Error::NotConnected);
            }
            let screen_id = state
                .selected_screen_id
                .clone()
                .ok_or(P20Error::NoScreenSelected)?;
            if !state.pvw_layers().iter().any(|l| l.id == layer_id) {
                return Err(P20Error::UnknownLayer {
                    id: layer_id.to_string(),
                });
            }
            if !state.input_exists(input_id) {
                return Err(P20Error::UnknownInput {
                    id: input_id.to_string(),
                });
            }
            screen_id
        };

        self.client
            .route_input(&screen_id, layer_id, input_id)
            .await?;
        self.refresh_pvw_state().await
    }

    pub async fn perform_action(&self, action: &Action) -> Result<()> {
        match action {
            Action::SelectScreen { screen_id } => self.select_screen(screen_id).await,
            Action::RouteInputToPvwLayer { layer_id, input_id } => {
                self.route_input_to_pvw_layer(layer_id, input_id).await
            }
            Action::RefreshState => self.full_refresh().await,
        }
    }

    pub async fn check_feedback(&self, feedback: &Feedback) -> bool {
        let state = self.state.read().await;
        feedbacks::check_feedback(&state, feedback)
    }

    async fn update_dynamic_state(&self) {
        let values = {
            let state = self.state.read().await;
            variables::variable_values(&state)
        };
        self.host.set_variable_values(values);
        self.host.check_feedbacks();
    }

    /// Starts the repeating PVW refresh, replacing any previous task. Does
    /// nothing when the interval is 0. A failed tick is dropped; the next
    /// one gets a fresh chance.
    pub async fn start_polling(self: &Arc<Self>) {
        self.stop_polling().await;

        let interval_ms = self.config.read().await.poll_interval_ms;
        if interval_ms == 0 {
            return;
        }

        let instance = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // interval() fires immediately; the full refresh already ran.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(e) = instance.refresh_pvw_state().await {
                    tracing::trace!("Poll refresh failed: {}", e);
                }
            }
        });
        *self.poll_task.lock().await = Some(handle);
    }

    pub async fn stop_polling(&self) {
        if let Some(handle) = self.poll_task.lock().await.take() {
            handle.abort();
        }
    }

    pub async fn is_polling(&self) -> bool {
        self.poll_task
            .lock()
            .await
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    // ---------------------------------------------------------------
    // Read accessors for the host's option dropdowns and presets
    // ---------------------------------------------------------------

    pub async fn screens(&self) -> Vec<Screen> {
        self.state.read().await.screens.clone()
    }

    pub async fn inputs(&self) -> Vec<InputSource> {
        self.state.read().await.inputs.clone()
    }

    pub async fn selected_screen(&self) -> Option<Screen> {
        self.state.read().await.selected_screen().cloned()
    }

    pub async fn pvw_layers(&self) -> Vec<PvwLayer> {
        self.state.read().await.pvw_layers().to_vec()
    }

    pub async fn screen_choices(&self) -> Vec<DropdownChoice> {
        actions::screen_choices(&*self.state.read().await)
    }

    pub async fn input_choices(&self) -> Vec<DropdownChoice> {
        actions::input_choices(&*self.state.read().await)
    }

    pub async fn layer_choices(&self) -> Vec<DropdownChoice> {
        actions::layer_choices(&*self.state.read().await)
    }

    pub async fn state_snapshot(&self) -> DeviceState {
        self.state.read().await.clone()
    }

    pub async fn config(&self) -> P20Config {
        self.config.read().await.clone()
    }
}

impl<C, H> Drop for P20Instance<C, H> {
    fn drop(&mut self) {
        // Mutex::get_mut needs no lock; abort any poller still running so a
        // dropped instance cannot keep ticking.
        if let Some(handle) = self.poll_task.get_mut().take() {
            handle.abort();
        }
    }
}
