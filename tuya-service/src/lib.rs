//! # Tuya Thermostat Service
//!
//! Translation between Tuya datapoints and the standard thermostat clusters
//! for a single bound device.

#![no_std]

use tuya_data::cluster_library::{
    AttributeIdentifier, AttributeValue, ClusterIdentifier, ClusterLibraryStatus,
};
use tuya_data::{DatapointIdentifier, DatapointRole, DeviceProfile, Quirks};

pub mod cluster_library;
mod datapoint_cache;
mod error;
pub mod event;
mod inbound;
mod outbound;
pub mod reconcile;
pub mod router;
mod transport;

pub use cluster_library::thermostat::ThermostatModel;
pub use cluster_library::user_interface::UserInterfaceModel;
pub use cluster_library::{AttributeReports, Cluster};
pub use datapoint_cache::{DatapointCache, DATAPOINT_CACHE_SIZE};
pub use error::Error;
pub use event::Event;
pub use inbound::InboundTranslator;
pub use outbound::{DatapointWrites, FallbackMapping, NoFallback, OutboundTranslator};
pub use transport::DeviceTransport;

use router::EventListener;

/// Datapoint roles replayed on bind after the on/off state
const REPLAY_AFTER_ENABLED: [DatapointRole; 2] =
    [DatapointRole::ScheduleMode, DatapointRole::ChildLock];

/// Translation session for one bound device
pub struct ThermostatSession<'a, T, F = NoFallback> {
    profile: &'a DeviceProfile,
    datapoints: DatapointCache,
    thermostat: ThermostatModel,
    user_interface: UserInterfaceModel,
    transport: T,
    fallback: F,
}

impl<'a, T> ThermostatSession<'a, T, NoFallback>
where
    T: DeviceTransport,
{
    pub fn new(profile: &'a DeviceProfile, transport: T) -> Self {
        Self::with_fallback(profile, transport, NoFallback)
    }
}

impl<'a, T, F> ThermostatSession<'a, T, F>
where
    T: DeviceTransport,
    F: FallbackMapping,
{
    pub fn with_fallback(profile: &'a DeviceProfile, transport: T, fallback: F) -> Self {
        Self {
            profile,
            datapoints: DatapointCache::new(),
            thermostat: ThermostatModel::new(profile),
            user_interface: UserInterfaceModel::new(),
            transport,
            fallback,
        }
    }

    /// Use datapoints cached by a previous session, replayed on `bind`
    pub fn with_datapoints(mut self, datapoints: DatapointCache) -> Self {
        self.datapoints = datapoints;
        self
    }

    pub fn profile(&self) -> &'a DeviceProfile {
        self.profile
    }

    pub fn datapoints(&self) -> &DatapointCache {
        &self.datapoints
    }

    pub fn thermostat(&self) -> &ThermostatModel {
        &self.thermostat
    }

    pub fn user_interface(&self) -> &UserInterfaceModel {
        &self.user_interface
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// End the session, keeping the datapoint cache for a later bind
    pub fn into_datapoints(self) -> DatapointCache {
        self.datapoints
    }

    fn dispatch(&mut self, event: &Event, reports: &mut AttributeReports) {
        let mut listeners: [&mut dyn EventListener; 2] =
            [&mut self.thermostat, &mut self.user_interface];
        router::dispatch(event, &mut listeners, reports);
    }

    fn replay(&mut self, role: DatapointRole, reports: &mut AttributeReports) -> bool {
        let translator = InboundTranslator::new(self.profile);
        let event = self.profile.datapoint(role).and_then(|identifier| {
            self.datapoints
                .get(identifier)
                .and_then(|value| translator.translate(identifier, value))
        });
        match event {
            Some(event) => {
                self.dispatch(&event, reports);
                true
            }
            None => false,
        }
    }

    /// Synchronise with the device after binding.
    ///
    /// Asks the device for all datapoints, then seeds the clusters from the
    /// datapoint cache. A failed request is not fatal, the device may still
    /// report on its own.
    pub fn bind(&mut self) -> AttributeReports {
        if self.profile.has_quirk(Quirks::QUERY_ON_BIND) {
            if let Err(e) = self.transport.request_all_datapoints() {
                log::warn!("Datapoint query failed, {:?}", e);
            }
        }

        let mut reports = AttributeReports::new();
        self.replay(DatapointRole::AmbientTemperature, &mut reports);
        self.replay(DatapointRole::TargetTemperature, &mut reports);

        let profile = self.profile;
        let enabled = profile
            .enabled_on_bind
            .iter()
            .any(|role| self.replay(*role, &mut reports));
        if !enabled {
            log::info!("No on/off state cached, assuming heat");
            self.dispatch(&Event::EnabledChanged(1), &mut reports);
        }

        for role in REPLAY_AFTER_ENABLED.iter() {
            self.replay(*role, &mut reports);
        }
        reports
    }

    /// Handle a datapoint reported by the device
    pub fn datapoint_report(
        &mut self,
        identifier: DatapointIdentifier,
        value: i32,
    ) -> AttributeReports {
        let translator = InboundTranslator::new(self.profile);
        let mut reports = AttributeReports::new();
        if let Some(event) = translator.report(&mut self.datapoints, identifier, value) {
            self.dispatch(&event, &mut reports);
        }
        reports
    }

    /// Read a standard attribute
    pub fn read_attribute(
        &self,
        cluster: ClusterIdentifier,
        attribute: AttributeIdentifier,
    ) -> Result<AttributeValue, ClusterLibraryStatus> {
        let clusters: [&dyn Cluster; 2] = [&self.thermostat, &self.user_interface];
        clusters
            .iter()
            .find(|c| c.cluster_identifier() == cluster)
            .ok_or(ClusterLibraryStatus::UnsupportedCluster)?
            .read_attribute(attribute)
    }

    /// Write a standard attribute.
    ///
    /// The write is sent to the device; the clusters are updated when the
    /// device reports the new value.
    pub fn write_attribute(
        &mut self,
        cluster: ClusterIdentifier,
        attribute: AttributeIdentifier,
        value: AttributeValue,
    ) -> ClusterLibraryStatus {
        let translator = OutboundTranslator::new(self.profile);
        let writes = match translator.map_attribute(cluster, attribute, value) {
            Ok(Some(writes)) => writes,
            Ok(None) => match self.fallback.map_attribute(cluster, attribute, value) {
                Ok(writes) => writes,
                Err(status) => return status,
            },
            Err(status) => return status,
        };
        log::debug!(
            "Write {:04x}:{:04x} {} -> {:?}",
            cluster,
            attribute,
            value,
            writes
        );
        match self.transport.write_datapoints(&writes) {
            Ok(()) => ClusterLibraryStatus::Success,
            Err(e) => {
                log::warn!("Datapoint write failed, {:?}", e);
                ClusterLibraryStatus::Failure
            }
        }
    }
}
