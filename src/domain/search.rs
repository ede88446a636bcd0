use crate::domain::model::Vehicle;

/// Case-insensitive substring filter over make, model, VIN and description.
///
/// A blank query returns the collection unchanged. Otherwise the query is
/// lowercased as typed (not trimmed) and retained vehicles keep their
/// original relative order. The input is never modified.
pub fn filter_vehicles(vehicles: &[Vehicle], query: &str) -> Vec<Vehicle> {
    if query.trim().is_empty() {
        return vehicles.to_vec();
    }

    let needle = query.to_lowercase();
    vehicles
        .iter()
        .filter(|vehicle| vehicle.matches(&needle))
        .cloned()
        .collect()
}
