use crate::models::TemperatureRecord;
use std::collections::HashMap;
use std::hash::Hash;

/// Group temperatures by key, keeping groups in first-seen order and
/// readings within a group in input order.
pub fn group_by<'a, K, F>(records: &'a [TemperatureRecord], key: F) -> Vec<(K, Vec<f64>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&'a TemperatureRecord) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<f64>)> = Vec::new();

    for record in records {
        let k = key(record);
        match index.get(&k) {
            Some(&i) => groups[i].1.push(record.temperature),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![record.temperature]));
            }
        }
    }

    groups
}

/// Group temperatures by station name.
pub fn group_by_station(records: &[TemperatureRecord]) -> Vec<(&str, Vec<f64>)> {
    group_by(records, |r| r.station.as_str())
}
