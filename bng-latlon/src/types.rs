//! Types de données pour le crate bng-latlon

use geo::{Coord, Point};

/// Coordonnées National Grid (OSGB36), en mètres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCoordinate {
    /// Easting (m)
    pub easting: f64,

    /// Northing (m)
    pub northing: f64,
}

impl GridCoordinate {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }
}

impl From<Coord<f64>> for GridCoordinate {
    fn from(c: Coord<f64>) -> Self {
        Self::new(c.x, c.y)
    }
}

impl From<GridCoordinate> for Coord<f64> {
    fn from(g: GridCoordinate) -> Self {
        Coord {
            x: g.easting,
            y: g.northing,
        }
    }
}

/// Point en coordonnées géodésiques (radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticCoordinate {
    /// Latitude en radians
    pub latitude: f64,
    /// Longitude en radians
    pub longitude: f64,
}

impl GeodeticCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Crée depuis des degrés
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            latitude: lat_deg.to_radians(),
            longitude: lon_deg.to_radians(),
        }
    }

    /// Convertit en degrés
    pub fn to_degrees(self) -> LatLon {
        LatLon {
            latitude: self.latitude.to_degrees(),
            longitude: self.longitude.to_degrees(),
        }
    }
}

/// Latitude/longitude WGS84 en degrés décimaux
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

/// Ordre des axes geo : x = longitude, y = latitude
impl From<LatLon> for Point<f64> {
    fn from(ll: LatLon) -> Self {
        Point::new(ll.longitude, ll.latitude)
    }
}

impl From<Point<f64>> for LatLon {
    fn from(p: Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

/// Coordonnées cartésiennes géocentriques (ECEF), en mètres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianCoordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianCoordinate {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}
