//! # Datapoint cache
//!
//! Last reported raw value of every datapoint of a device.

use heapless::FnvIndexMap;

use tuya_data::DatapointIdentifier;

use crate::Error;

/// Number of datapoints a cache can hold, power of two
pub const DATAPOINT_CACHE_SIZE: usize = 16;

/// Raw datapoint values keyed by identifier, last write wins
#[derive(Clone, Debug, Default)]
pub struct DatapointCache {
    values: FnvIndexMap<u16, i32, DATAPOINT_CACHE_SIZE>,
}

impl DatapointCache {
    /// Create a empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value reported for a datapoint
    pub fn get(&self, identifier: DatapointIdentifier) -> Option<i32> {
        self.values.get(&u16::from(identifier)).copied()
    }

    /// Store a value, replacing any previous value for the datapoint
    pub fn set(&mut self, identifier: DatapointIdentifier, value: i32) -> Result<(), Error> {
        match self.values.insert(u16::from(identifier), value) {
            Ok(_) => Ok(()),
            Err(_) => Err(Error::DatapointCacheFull),
        }
    }

    /// Check if a value has been reported for a datapoint
    pub fn contains(&self, identifier: DatapointIdentifier) -> bool {
        self.values.contains_key(&u16::from(identifier))
    }

    /// Number of cached datapoints
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the cached datapoints
    pub fn iter(&self) -> impl Iterator<Item = (DatapointIdentifier, i32)> + '_ {
        self.values
            .iter()
            .map(|(id, value)| (DatapointIdentifier::from(*id), *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut cache = DatapointCache::new();
        let id = DatapointIdentifier::from_raw(0x0210);
        assert_eq!(cache.get(id), None);
        cache.set(id, 21).unwrap();
        cache.set(id, 23).unwrap();
        assert_eq!(cache.get(id), Some(23));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn full_cache() {
        let mut cache = DatapointCache::new();
        for n in 0..DATAPOINT_CACHE_SIZE as u16 {
            cache.set(DatapointIdentifier::from_raw(0x0200 + n), 1).unwrap();
        }
        assert_eq!(
            cache.set(DatapointIdentifier::from_raw(0x02ff), 1),
            Err(Error::DatapointCacheFull)
        );
        // Known datapoints can still be updated
        cache.set(DatapointIdentifier::from_raw(0x0200), 5).unwrap();
        assert_eq!(cache.get(DatapointIdentifier::from_raw(0x0200)), Some(5));
        assert!(!cache.contains(DatapointIdentifier::from_raw(0x02ff)));
    }
}
