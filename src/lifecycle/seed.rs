//! Demo catalogue loaded when `inventory.seed_demo_catalog` is enabled.

use crate::model::NewPart;

/// Seven common service parts. Spark plugs, cabin filters and AC filters start below
/// their threshold, so a fresh demo instance has restock alerts to show.
pub fn demo_catalog() -> Vec<NewPart> {
    vec![
        NewPart::new("Oil Filter", "Engine", "Toyota Camry 2020", 50, 20),
        NewPart::new("AC Filter", "AC", "Honda Civic 2018", 15, 20),
        NewPart::new("Brake Pad Set", "Brake", "Ford F-150 2022", 25, 20),
        NewPart::new("Spark Plug (4-pack)", "Engine", "Nissan Altima 2019", 10, 20),
        NewPart::new("Wiper Blades (Front)", "Exterior", "All Models", 30, 20),
        NewPart::new("Air Filter", "Engine", "Volkswagen Golf 2017", 22, 20),
        NewPart::new("Cabin Filter", "AC", "Mercedes-Benz C-Class 2021", 18, 20),
    ]
}
