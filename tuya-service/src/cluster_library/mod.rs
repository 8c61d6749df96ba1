use heapless::Vec;

use tuya_data::cluster_library::{
    AttributeIdentifier, AttributeReport, AttributeValue, ClusterIdentifier,
    ClusterLibraryStatus,
};

pub mod thermostat;
pub mod user_interface;

/// Max number of attribute reports produced by a single operation
pub const ATTRIBUTE_REPORTS_MAX: usize = 16;

/// Attribute changes to forward to the host
pub type AttributeReports = Vec<AttributeReport, ATTRIBUTE_REPORTS_MAX>;

/// Standard cluster held by a session
pub trait Cluster {
    /// Cluster identifier
    fn cluster_identifier(&self) -> ClusterIdentifier;

    /// Read attribute
    fn read_attribute(
        &self,
        attribute: AttributeIdentifier,
    ) -> Result<AttributeValue, ClusterLibraryStatus>;
}

/// Queue a attribute report, dropping it if the queue is full
pub(crate) fn push_report(
    reports: &mut AttributeReports,
    cluster: ClusterIdentifier,
    attribute: AttributeIdentifier,
    value: AttributeValue,
) {
    if reports
        .push(AttributeReport::new(cluster, attribute, value))
        .is_err()
    {
        log::warn!(
            "Attribute report queue full, dropped {:04x}:{:04x}",
            cluster,
            attribute
        );
    }
}

/// Value of a attribute that has not been reported yet
pub(crate) fn known<T>(value: Option<T>) -> Result<T, ClusterLibraryStatus> {
    value.ok_or(ClusterLibraryStatus::NotFound)
}
