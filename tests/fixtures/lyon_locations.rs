//! Real Lyon locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. City-scale spans of a few
//! kilometers, matching the deployment the flat-earth label geometry
//! assumes.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Warehouses / depots
// ============================================================================

pub const WAREHOUSES: &[Location] = &[
    Location::new("Halles Paul Bocuse", 45.7628, 4.8503),
    Location::new("Gare de Perrache", 45.7486, 4.8260),
    Location::new("Gare Part-Dieu", 45.7606, 4.8596),
];

// ============================================================================
// Presqu'île delivery stops
// ============================================================================

pub const PRESQUILE_STOPS: &[Location] = &[
    Location::new("Place Bellecour", 45.7578, 4.8320),
    Location::new("Place des Terreaux", 45.7674, 4.8334),
    Location::new("Hôtel de Ville", 45.7673, 4.8342),
    Location::new("Opéra de Lyon", 45.7677, 4.8365),
    Location::new("Place Carnot", 45.7513, 4.8270),
    Location::new("Musée des Confluences", 45.7326, 4.8189),
];

// ============================================================================
// Rive gauche delivery stops
// ============================================================================

pub const RIVE_GAUCHE_STOPS: &[Location] = &[
    Location::new("Place Guichard", 45.7608, 4.8474),
    Location::new("Saxe-Gambetta", 45.7540, 4.8473),
    Location::new("Parc de la Tête d'Or", 45.7772, 4.8558),
    Location::new("Cathédrale Saint-Jean", 45.7605, 4.8274),
    Location::new("Place de la Croix-Rousse", 45.7745, 4.8320),
];

/// All fixture locations, warehouses first.
pub const ALL_LOCATIONS: &[Location] = &[
    Location::new("Halles Paul Bocuse", 45.7628, 4.8503),
    Location::new("Gare de Perrache", 45.7486, 4.8260),
    Location::new("Gare Part-Dieu", 45.7606, 4.8596),
    Location::new("Place Bellecour", 45.7578, 4.8320),
    Location::new("Place des Terreaux", 45.7674, 4.8334),
    Location::new("Hôtel de Ville", 45.7673, 4.8342),
    Location::new("Opéra de Lyon", 45.7677, 4.8365),
    Location::new("Place Carnot", 45.7513, 4.8270),
    Location::new("Musée des Confluences", 45.7326, 4.8189),
    Location::new("Place Guichard", 45.7608, 4.8474),
    Location::new("Saxe-Gambetta", 45.7540, 4.8473),
    Location::new("Parc de la Tête d'Or", 45.7772, 4.8558),
    Location::new("Cathédrale Saint-Jean", 45.7605, 4.8274),
    Location::new("Place de la Croix-Rousse", 45.7745, 4.8320),
];
