use tuya_data::cluster_library::user_interface::*;
use tuya_data::cluster_library::{AttributeValue, ClusterLibraryStatus};

use super::{known, push_report, AttributeReports, Cluster};
use crate::event::{Event, Topics};
use crate::router::EventListener;

/// User interface configuration attribute cache, holds the child lock
#[derive(Clone, Debug, Default)]
pub struct UserInterfaceModel {
    keypad_lockout: Option<KeypadLockout>,
}

impl UserInterfaceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keypad_lockout(&self) -> Option<KeypadLockout> {
        self.keypad_lockout
    }

    /// The child lock changed, zero is unlocked
    pub fn child_lock_change(&mut self, value: i32, reports: &mut AttributeReports) {
        let lockout = KeypadLockout::from_child_lock(value != 0);
        if self.keypad_lockout.replace(lockout) != Some(lockout) {
            push_report(
                reports,
                CLUSTER,
                ATTR_KEYPAD_LOCKOUT,
                AttributeValue::Enumeration8(lockout.into()),
            );
        }
    }
}

impl EventListener for UserInterfaceModel {
    fn interests(&self) -> Topics {
        Topics::USER_INTERFACE
    }

    fn on_event(&mut self, event: &Event, reports: &mut AttributeReports) {
        if let Event::ChildLockChanged(value) = *event {
            self.child_lock_change(value, reports);
        }
    }
}

impl Cluster for UserInterfaceModel {
    fn cluster_identifier(&self) -> u16 {
        CLUSTER
    }

    fn read_attribute(&self, attribute: u16) -> Result<AttributeValue, ClusterLibraryStatus> {
        match attribute {
            ATTR_KEYPAD_LOCKOUT => {
                known(self.keypad_lockout).map(|v| AttributeValue::Enumeration8(v.into()))
            }
            _ => Err(ClusterLibraryStatus::UnsupportedAttribute),
        }
    }
}
